// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Constant-time backend on 32-bit words, two blocks per state.
//!
//! Block A's little-endian words go to the even state words, block B's to
//! the odd ones, and [`ortho`] transposes them into bit planes (BearSSL
//! `aes_ct` layout). Round keys differ per block, so every round key is
//! sliced the same way before being added.

use deoxysii_core::consts::{Block, STK_COUNT};
use deoxysii_core::{SubTweakKeys, TweakableBlockCipher};
use zeroize::Zeroize;

use super::bitslice::{add_round_key, mix_columns, sub_bytes};

type State = [u32; 8];

/// Bitsliced 32-bit backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ct32;

#[inline(always)]
fn swap_n(q: &mut State, a: usize, b: usize, cl: u32, ch: u32, s: u32) {
    let x = q[a];
    let y = q[b];
    q[a] = (x & cl) | ((y & cl) << s);
    q[b] = ((x & ch) >> s) | (y & ch);
}

/// Transposes between the word layout and the bitsliced layout. Involutive.
#[inline(always)]
pub(crate) fn ortho(q: &mut State) {
    for (a, b) in [(0, 1), (2, 3), (4, 5), (6, 7)] {
        swap_n(q, a, b, 0x5555_5555, 0xAAAA_AAAA, 1);
    }
    for (a, b) in [(0, 2), (1, 3), (4, 6), (5, 7)] {
        swap_n(q, a, b, 0x3333_3333, 0xCCCC_CCCC, 2);
    }
    for (a, b) in [(0, 4), (1, 5), (2, 6), (3, 7)] {
        swap_n(q, a, b, 0x0F0F_0F0F, 0xF0F0_F0F0, 4);
    }
}

#[inline(always)]
fn shift_rows(q: &mut State) {
    for x in q.iter_mut() {
        let w = *x;
        *x = (w & 0x0000_00FF)
            | ((w & 0x0000_FC00) >> 2)
            | ((w & 0x0000_0300) << 6)
            | ((w & 0x00F0_0000) >> 4)
            | ((w & 0x000F_0000) << 4)
            | ((w & 0xC000_0000) >> 6)
            | ((w & 0x3F00_0000) << 2);
    }
}

#[inline(always)]
fn word(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Packs two blocks and slices them.
#[inline(always)]
pub(crate) fn load_x2(a: &Block, b: &Block) -> State {
    let mut q = [0u32; 8];
    for (i, (wa, wb)) in a.chunks_exact(4).zip(b.chunks_exact(4)).enumerate() {
        q[2 * i] = word(wa);
        q[2 * i + 1] = word(wb);
    }
    ortho(&mut q);
    q
}

/// Unslices a state into its two blocks.
#[inline(always)]
pub(crate) fn store_x2(q: &State) -> [Block; 2] {
    let mut q = *q;
    ortho(&mut q);

    let mut out = [[0u8; 16]; 2];
    for i in 0..4 {
        out[0][4 * i..4 * i + 4].copy_from_slice(&q[2 * i].to_le_bytes());
        out[1][4 * i..4 * i + 4].copy_from_slice(&q[2 * i + 1].to_le_bytes());
    }
    q.zeroize();
    out
}

/// Runs the whitening key and all 16 rounds over a sliced state.
#[inline(always)]
fn rounds(q: &mut State, stks: [&SubTweakKeys; 2]) {
    let mut rk = load_x2(stks[0].round(0), stks[1].round(0));
    add_round_key(q, &rk);

    for r in 1..STK_COUNT {
        rk = load_x2(stks[0].round(r), stks[1].round(r));
        sub_bytes(q);
        shift_rows(q);
        mix_columns(q);
        add_round_key(q, &rk);
    }
    rk.zeroize();
}

impl TweakableBlockCipher for Ct32 {
    fn name(&self) -> &'static str {
        "ct32"
    }

    fn encrypt_x1(&self, stks: &SubTweakKeys, block: &Block) -> Block {
        let [out, _] = self.encrypt_x2([stks, stks], [block, block]);
        out
    }

    fn encrypt_x2(&self, stks: [&SubTweakKeys; 2], blocks: [&Block; 2]) -> [Block; 2] {
        let mut q = load_x2(blocks[0], blocks[1]);
        rounds(&mut q, stks);
        let out = store_x2(&q);
        q.zeroize();
        out
    }

    fn tag_x2(&self, tag: &mut Block, stks: [&SubTweakKeys; 2], blocks: [&Block; 2]) {
        let mut q = load_x2(blocks[0], blocks[1]);
        rounds(&mut q, stks);
        ortho(&mut q);

        // Even words hold block A, odd words block B.
        for (i, chunk) in tag.chunks_exact_mut(4).enumerate() {
            let folded = word(chunk) ^ q[2 * i] ^ q[2 * i + 1];
            chunk.copy_from_slice(&folded.to_le_bytes());
        }
        q.zeroize();
    }
}

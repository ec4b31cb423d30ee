// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Constant-time backend on 64-bit words, four blocks per state.
//!
//! Each block is spread over two words by [`interleave_in`] (state words `i`
//! and `i + 4` for block `i`), then [`ortho`] transposes the eight words into
//! bit planes (BearSSL `aes_ct64` layout).

use deoxysii_core::consts::{Block, STK_COUNT};
use deoxysii_core::{SubTweakKeys, TweakableBlockCipher};
use zeroize::Zeroize;

use super::bitslice::{add_round_key, mix_columns, sub_bytes};

type State = [u64; 8];

/// Bitsliced 64-bit backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ct64;

#[inline(always)]
fn swap_n(q: &mut State, a: usize, b: usize, cl: u64, ch: u64, s: u32) {
    let x = q[a];
    let y = q[b];
    q[a] = (x & cl) | ((y & cl) << s);
    q[b] = ((x & ch) >> s) | (y & ch);
}

/// Transposes between the interleaved layout and bit planes. Involutive.
#[inline(always)]
pub(crate) fn ortho(q: &mut State) {
    for (a, b) in [(0, 1), (2, 3), (4, 5), (6, 7)] {
        swap_n(q, a, b, 0x5555_5555_5555_5555, 0xAAAA_AAAA_AAAA_AAAA, 1);
    }
    for (a, b) in [(0, 2), (1, 3), (4, 6), (5, 7)] {
        swap_n(q, a, b, 0x3333_3333_3333_3333, 0xCCCC_CCCC_CCCC_CCCC, 2);
    }
    for (a, b) in [(0, 4), (1, 5), (2, 6), (3, 7)] {
        swap_n(q, a, b, 0x0F0F_0F0F_0F0F_0F0F, 0xF0F0_F0F0_F0F0_F0F0, 4);
    }
}

/// Spreads the four little-endian words of a block over two state words.
#[inline(always)]
pub(crate) fn interleave_in(block: &Block) -> (u64, u64) {
    let mut x = [0u64; 4];
    for (xi, chunk) in x.iter_mut().zip(block.chunks_exact(4)) {
        let mut v = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]) as u64;
        v |= v << 16;
        v &= 0x0000_FFFF_0000_FFFF;
        v |= v << 8;
        v &= 0x00FF_00FF_00FF_00FF;
        *xi = v;
    }
    (x[0] | (x[2] << 8), x[1] | (x[3] << 8))
}

/// Inverse of [`interleave_in`].
#[inline(always)]
pub(crate) fn interleave_out(q0: u64, q1: u64) -> Block {
    let mut x = [
        q0 & 0x00FF_00FF_00FF_00FF,
        q1 & 0x00FF_00FF_00FF_00FF,
        (q0 >> 8) & 0x00FF_00FF_00FF_00FF,
        (q1 >> 8) & 0x00FF_00FF_00FF_00FF,
    ];

    let mut out = [0u8; 16];
    for (chunk, v) in out.chunks_exact_mut(4).zip(x.iter_mut()) {
        *v |= *v >> 8;
        *v &= 0x0000_FFFF_0000_FFFF;
        let w = (*v as u32) | ((*v >> 16) as u32);
        chunk.copy_from_slice(&w.to_le_bytes());
    }
    x.zeroize();
    out
}

#[inline(always)]
fn shift_rows(q: &mut State) {
    for x in q.iter_mut() {
        let w = *x;
        *x = (w & 0x0000_0000_0000_FFFF)
            | ((w & 0x0000_0000_FFF0_0000) >> 4)
            | ((w & 0x0000_0000_000F_0000) << 12)
            | ((w & 0x0000_FF00_0000_0000) >> 8)
            | ((w & 0x0000_00FF_0000_0000) << 8)
            | ((w & 0xF000_0000_0000_0000) >> 12)
            | ((w & 0x0FFF_0000_0000_0000) << 4);
    }
}

/// Packs four blocks and slices them.
#[inline(always)]
pub(crate) fn load_x4(blocks: [&Block; 4]) -> State {
    let mut q = [0u64; 8];
    for (i, block) in blocks.iter().enumerate() {
        (q[i], q[i + 4]) = interleave_in(block);
    }
    ortho(&mut q);
    q
}

/// Packs the same block into all four lanes.
#[inline(always)]
fn load_shared(block: &Block) -> State {
    let (lo, hi) = interleave_in(block);
    let mut q = [lo, lo, lo, lo, hi, hi, hi, hi];
    ortho(&mut q);
    q
}

/// Unslices a state into its four blocks.
#[inline(always)]
pub(crate) fn store_x4(q: &State) -> [Block; 4] {
    let mut q = *q;
    ortho(&mut q);
    let out = [
        interleave_out(q[0], q[4]),
        interleave_out(q[1], q[5]),
        interleave_out(q[2], q[6]),
        interleave_out(q[3], q[7]),
    ];
    q.zeroize();
    out
}

#[inline(always)]
fn round_key(stks: [&SubTweakKeys; 4], r: usize) -> State {
    load_x4([
        stks[0].round(r),
        stks[1].round(r),
        stks[2].round(r),
        stks[3].round(r),
    ])
}

/// Runs the whitening key and all 16 rounds over a sliced state.
#[inline(always)]
fn rounds(q: &mut State, stks: [&SubTweakKeys; 4]) {
    let mut rk = round_key(stks, 0);
    add_round_key(q, &rk);

    for r in 1..STK_COUNT {
        rk = round_key(stks, r);
        sub_bytes(q);
        shift_rows(q);
        mix_columns(q);
        add_round_key(q, &rk);
    }
    rk.zeroize();
}

impl TweakableBlockCipher for Ct64 {
    fn name(&self) -> &'static str {
        "ct64"
    }

    fn encrypt_x1(&self, stks: &SubTweakKeys, block: &Block) -> Block {
        let [out, ..] = self.encrypt_x4([stks; 4], [block; 4]);
        out
    }

    fn encrypt_x2(&self, stks: [&SubTweakKeys; 2], blocks: [&Block; 2]) -> [Block; 2] {
        let [a, b, ..] = self.encrypt_x4(
            [stks[0], stks[1], stks[0], stks[1]],
            [blocks[0], blocks[1], blocks[0], blocks[1]],
        );
        [a, b]
    }

    fn encrypt_x4(&self, stks: [&SubTweakKeys; 4], blocks: [&Block; 4]) -> [Block; 4] {
        let mut q = load_x4(blocks);
        rounds(&mut q, stks);
        let out = store_x4(&q);
        q.zeroize();
        out
    }

    fn tag_x4(&self, tag: &mut Block, stks: [&SubTweakKeys; 4], blocks: [&Block; 4]) {
        let mut q = load_x4(blocks);
        rounds(&mut q, stks);
        ortho(&mut q);

        // interleave_out is linear: fold the four lanes before unpacking.
        let folded = interleave_out(q[0] ^ q[1] ^ q[2] ^ q[3], q[4] ^ q[5] ^ q[6] ^ q[7]);
        for (t, f) in tag.iter_mut().zip(folded.iter()) {
            *t ^= f;
        }
        q.zeroize();
    }

    fn keystream_x4(&self, stks: [&SubTweakKeys; 4], block: &Block) -> [Block; 4] {
        let mut q = load_shared(block);
        rounds(&mut q, stks);
        let out = store_x4(&q);
        q.zeroize();
        out
    }
}

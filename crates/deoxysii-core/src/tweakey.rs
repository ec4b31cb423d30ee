// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! TWEAKEY schedule for Deoxys-BC-384.
//!
//! The 256-bit key feeds two tweakey lanes (TK2, TK3) that are advanced with
//! the byte LFSRs and the `h` permutation. Their XOR with the round constants
//! is the [`KeyLane`], computed once per key. Per block, the tweak lane (TK1)
//! is advanced through `h` only and folded in to obtain the
//! [`SubTweakKeys`] fed to a backend.
//!
//! Everything here is branch-free and table-free with respect to key and
//! tweak bytes: `h` is a fixed byte shuffle and the LFSRs are shifts and XORs.

use deoxysii_util::xor_array;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{
    BLOCK_SIZE, Block, KEY_SIZE, NONCE_SIZE, PREFIX_SHIFT, PREFIX_TAG, STK_COUNT, STK_SIZE,
    TAG_SIZE, Tweak,
};

/// Byte shuffle order of the `h` permutation.
const H: [usize; STK_SIZE] = [1, 6, 11, 12, 5, 10, 15, 0, 9, 14, 3, 4, 13, 2, 7, 8];

/// Per-round constant byte, replicated into row 1 of the RCON matrix.
const RC: [u8; STK_COUNT] = [
    0x2f, 0x5e, 0xbc, 0x63, 0xc6, 0x97, 0x35, 0x6a, 0xd4, 0xb3, 0x7d, 0xfa, 0xef, 0xc5, 0x91, 0x39,
    0x72,
];

const RCON: [[u8; STK_SIZE]; STK_COUNT] = rcon_matrix();

const fn rcon_matrix() -> [[u8; STK_SIZE]; STK_COUNT] {
    let mut out = [[0u8; STK_SIZE]; STK_COUNT];
    let mut i = 0;
    while i < STK_COUNT {
        out[i] = [
            1, 2, 4, 8, RC[i], RC[i], RC[i], RC[i], 0, 0, 0, 0, 0, 0, 0, 0,
        ];
        i += 1;
    }
    out
}

/// Applies the `h` byte permutation: `out[i] = lane[H[i]]`.
#[inline(always)]
pub fn h(lane: &[u8; STK_SIZE]) -> [u8; STK_SIZE] {
    core::array::from_fn(|i| lane[H[i]])
}

/// LFSR2 applied to every byte of the TK2 lane.
#[inline(always)]
fn lfsr2(lane: &[u8; STK_SIZE]) -> [u8; STK_SIZE] {
    core::array::from_fn(|i| {
        let x = lane[i];
        ((x << 1) & 0xfe) | (((x >> 7) ^ (x >> 5)) & 0x01)
    })
}

/// LFSR3 applied to every byte of the TK3 lane.
#[inline(always)]
fn lfsr3(lane: &[u8; STK_SIZE]) -> [u8; STK_SIZE] {
    core::array::from_fn(|i| {
        let x = lane[i];
        ((x >> 1) & 0x7f) | (((x << 7) ^ (x << 1)) & 0x80)
    })
}

/// Key-dependent, tweak-independent part of every sub-tweak key.
///
/// Derived once per key and shared read-only by every seal/open call on
/// the instance that owns it. Erased on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct KeyLane {
    rounds: [[u8; STK_SIZE]; STK_COUNT],
}

impl KeyLane {
    /// Runs the key schedule: `lane[i] = TK2_i ^ TK3_i ^ RCON[i]`.
    pub fn derive(key: &[u8; KEY_SIZE]) -> Self {
        let mut tk2 = [0u8; STK_SIZE];
        let mut tk3 = [0u8; STK_SIZE];
        tk2.copy_from_slice(&key[16..32]);
        tk3.copy_from_slice(&key[0..16]);

        let mut rounds = [[0u8; STK_SIZE]; STK_COUNT];
        rounds[0] = xor_array(&xor_array(&tk2, &tk3), &RCON[0]);

        for (i, round) in rounds.iter_mut().enumerate().skip(1) {
            tk2 = h(&lfsr2(&tk2));
            tk3 = h(&lfsr3(&tk3));
            *round = xor_array(&xor_array(&tk2, &tk3), &RCON[i]);
        }

        tk2.zeroize();
        tk3.zeroize();

        Self { rounds }
    }

    /// Folds the tweak lane into the key lane: `STK[i] = lane[i] ^ h^i(tweak)`.
    #[inline]
    pub fn sub_tweak_keys(&self, tweak: &Tweak) -> SubTweakKeys {
        let mut stks = [[0u8; STK_SIZE]; STK_COUNT];
        let mut tk1 = *tweak;

        stks[0] = xor_array(&self.rounds[0], &tk1);
        for i in 1..STK_COUNT {
            tk1 = h(&tk1);
            stks[i] = xor_array(&self.rounds[i], &tk1);
        }

        SubTweakKeys(stks)
    }

    #[cfg(test)]
    pub(crate) fn rounds(&self) -> &[[u8; STK_SIZE]; STK_COUNT] {
        &self.rounds
    }
}

impl core::fmt::Debug for KeyLane {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "KeyLane {{ [protected] }}")
    }
}

/// Round keys of Deoxys-BC-384 for one (key, tweak) pair.
///
/// `round(0)` is the initial whitening key, `round(1..=16)` feed the
/// AES rounds. Erased on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SubTweakKeys([[u8; STK_SIZE]; STK_COUNT]);

impl SubTweakKeys {
    #[inline(always)]
    pub fn round(&self, i: usize) -> &[u8; STK_SIZE] {
        &self.0[i]
    }

    #[inline(always)]
    pub fn rounds(&self) -> &[[u8; STK_SIZE]; STK_COUNT] {
        &self.0
    }
}

impl core::fmt::Debug for SubTweakKeys {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "SubTweakKeys {{ [protected] }}")
    }
}

/// Tweak of an authentication-pass block: `prefix || 0^60 || index` with the
/// index as a big-endian u64 in bytes 8..16.
#[inline(always)]
pub fn auth_tweak(prefix: u8, index: u64) -> Tweak {
    let mut tweak = [0u8; 16];
    tweak[0] = prefix << PREFIX_SHIFT;
    tweak[8..].copy_from_slice(&index.to_be_bytes());
    tweak
}

/// Tweak of the tag finalization step: `0001 || 0000 || nonce`.
#[inline(always)]
pub fn finalize_tweak(nonce: &[u8; NONCE_SIZE]) -> Tweak {
    let mut tweak = [0u8; 16];
    tweak[0] = PREFIX_TAG << PREFIX_SHIFT;
    tweak[1..].copy_from_slice(nonce);
    tweak
}

/// Tweak of keystream block `counter`: `(1 || tag[1..128]) ^ counter`, with
/// the counter as a big-endian u64 XORed into bytes 8..16.
#[inline(always)]
pub fn keystream_tweak(tag: &[u8; TAG_SIZE], counter: u64) -> Tweak {
    let mut tweak = *tag;
    tweak[0] |= 0x80;
    for (t, c) in tweak[8..].iter_mut().zip(counter.to_be_bytes()) {
        *t ^= c;
    }
    tweak
}

/// Input block of every keystream encryption: `0x00 || nonce`.
#[inline(always)]
pub fn keystream_block(nonce: &[u8; NONCE_SIZE]) -> Block {
    let mut block = [0u8; BLOCK_SIZE];
    block[1..].copy_from_slice(nonce);
    block
}

/// `pad10*`: copies a partial block (fewer than 16 bytes), appends `0x80`
/// and zero-fills the rest.
#[inline(always)]
pub fn pad_final(partial: &[u8]) -> Block {
    debug_assert!(partial.len() < BLOCK_SIZE);

    let mut block = [0u8; BLOCK_SIZE];
    block[..partial.len()].copy_from_slice(partial);
    block[partial.len()] = 0x80;
    block
}

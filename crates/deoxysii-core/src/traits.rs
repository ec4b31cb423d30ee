// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Backend contract for the Deoxys-BC-384 round function.

use deoxysii_util::xor_in_place;

use crate::consts::{Block, KEY_SIZE};
use crate::tweakey::{KeyLane, SubTweakKeys};

/// Tweakable block cipher backend.
///
/// A backend runs the 16 AES-style rounds of Deoxys-BC-384 over one, two or
/// four blocks, each under its own [`SubTweakKeys`]. Backends are stateless:
/// every method is a pure function of its arguments, so one backend value can
/// be shared across threads.
///
/// Only [`encrypt_x1`](Self::encrypt_x1) is required. Every other width has a
/// default built from narrower calls; a backend overrides the widths it can
/// process natively. All widths must produce output bit-identical to
/// repeated single-block calls.
pub trait TweakableBlockCipher: Send + Sync {
    /// Human readable backend name.
    fn name(&self) -> &'static str;

    /// One-time key schedule producing the tweak-independent key lane.
    fn key_schedule(&self, key: &[u8; KEY_SIZE]) -> KeyLane {
        KeyLane::derive(key)
    }

    /// Encrypts one block.
    fn encrypt_x1(&self, stks: &SubTweakKeys, block: &Block) -> Block;

    /// Encrypts two blocks.
    fn encrypt_x2(&self, stks: [&SubTweakKeys; 2], blocks: [&Block; 2]) -> [Block; 2] {
        [
            self.encrypt_x1(stks[0], blocks[0]),
            self.encrypt_x1(stks[1], blocks[1]),
        ]
    }

    /// Encrypts four blocks.
    fn encrypt_x4(&self, stks: [&SubTweakKeys; 4], blocks: [&Block; 4]) -> [Block; 4] {
        let [a, b] = self.encrypt_x2([stks[0], stks[1]], [blocks[0], blocks[1]]);
        let [c, d] = self.encrypt_x2([stks[2], stks[3]], [blocks[2], blocks[3]]);
        [a, b, c, d]
    }

    /// Encrypts one block and XORs the result into `tag`.
    fn tag_x1(&self, tag: &mut Block, stks: &SubTweakKeys, block: &Block) {
        xor_in_place(tag, &self.encrypt_x1(stks, block));
    }

    /// Encrypts two blocks and XORs both results into `tag`.
    fn tag_x2(&self, tag: &mut Block, stks: [&SubTweakKeys; 2], blocks: [&Block; 2]) {
        for out in self.encrypt_x2(stks, blocks) {
            xor_in_place(tag, &out);
        }
    }

    /// Encrypts four blocks and XORs all results into `tag`.
    fn tag_x4(&self, tag: &mut Block, stks: [&SubTweakKeys; 4], blocks: [&Block; 4]) {
        for out in self.encrypt_x4(stks, blocks) {
            xor_in_place(tag, &out);
        }
    }

    /// Encrypts the same block under two sub-tweak key sets.
    fn keystream_x2(&self, stks: [&SubTweakKeys; 2], block: &Block) -> [Block; 2] {
        self.encrypt_x2(stks, [block, block])
    }

    /// Encrypts the same block under four sub-tweak key sets.
    fn keystream_x4(&self, stks: [&SubTweakKeys; 4], block: &Block) -> [Block; 4] {
        self.encrypt_x4(stks, [block, block, block, block])
    }
}

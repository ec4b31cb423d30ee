// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ARM Crypto intrinsics for aarch64.

use core::arch::aarch64::{uint8x16_t, vaeseq_u8, vaesmcq_u8, vdupq_n_u8, veorq_u8, vld1q_u8, vst1q_u8};

use zeroize::Zeroize;

pub(super) const NAME: &str = "armv8-aes";

/// AES block in a NEON register.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub(super) struct Intrinsics(uint8x16_t);

impl Intrinsics {
    /// Load 16 bytes into a block.
    #[inline(always)]
    pub fn load(bytes: &[u8; 16]) -> Self {
        Self(unsafe { vld1q_u8(bytes.as_ptr()) })
    }

    /// Store block to 16 bytes.
    #[inline(always)]
    pub fn store(&self, out: &mut [u8; 16]) {
        unsafe { vst1q_u8(out.as_mut_ptr(), self.0) }
    }

    /// XOR in-place: self = self ^ other
    #[inline(always)]
    pub fn xor_in_place(&mut self, other: &Self) {
        self.0 = unsafe { veorq_u8(self.0, other.0) };
    }

    /// AES encryption round in-place with x86 AESENC semantics.
    ///
    /// AESE XORs the key before SubBytes, so it runs with a zero key and the
    /// round key is added after AESMC.
    #[inline(always)]
    pub fn aes_enc_in_place(&mut self, round_key: &Self) {
        self.0 = unsafe {
            let zero = vdupq_n_u8(0);
            let after_sub_shift = vaeseq_u8(self.0, zero);
            let after_mix = vaesmcq_u8(after_sub_shift);
            veorq_u8(after_mix, round_key.0)
        };
    }
}

impl Zeroize for Intrinsics {
    #[inline]
    fn zeroize(&mut self) {
        self.0 = unsafe { vdupq_n_u8(0) };
    }
}

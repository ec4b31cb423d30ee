// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-NI intrinsics for x86_64.

use core::arch::x86_64::{
    __m128i, _mm_aesenc_si128, _mm_loadu_si128, _mm_setzero_si128, _mm_storeu_si128,
    _mm_xor_si128,
};

use zeroize::Zeroize;

pub(super) const NAME: &str = "aes-ni";

/// AES block in an SSE register.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub(super) struct Intrinsics(__m128i);

impl Intrinsics {
    /// Load 16 bytes into a block.
    #[inline(always)]
    pub fn load(bytes: &[u8; 16]) -> Self {
        Self(unsafe { _mm_loadu_si128(bytes.as_ptr() as *const __m128i) })
    }

    /// Store block to 16 bytes.
    #[inline(always)]
    pub fn store(&self, out: &mut [u8; 16]) {
        unsafe { _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, self.0) };
    }

    /// XOR in-place: self = self ^ other
    #[inline(always)]
    pub fn xor_in_place(&mut self, other: &Self) {
        self.0 = unsafe { _mm_xor_si128(self.0, other.0) };
    }

    /// AES encryption round in-place: SubBytes + ShiftRows + MixColumns + XOR round_key
    #[inline(always)]
    pub fn aes_enc_in_place(&mut self, round_key: &Self) {
        self.0 = unsafe { _mm_aesenc_si128(self.0, round_key.0) };
    }
}

impl Zeroize for Intrinsics {
    #[inline]
    fn zeroize(&mut self) {
        // Overwrite SIMD register with zeros
        self.0 = unsafe { _mm_setzero_si128() };
    }
}

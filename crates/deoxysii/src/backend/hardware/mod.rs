// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hardware AES round backend (AES-NI on x86_64, ARMv8 Crypto Extensions on
//! aarch64).
//!
//! A Deoxys-BC round is exactly one AES encryption round, so each round is a
//! single `AESENC` (or `AESE` + `AESMC`) with the sub-tweak key as round key.
//! The four-block path keeps four independent states in flight to hide the
//! instruction latency.

#[cfg(target_arch = "x86_64")]
mod ni;

#[cfg(target_arch = "aarch64")]
mod aarch64;

#[cfg(target_arch = "x86_64")]
use ni::{Intrinsics, NAME};

#[cfg(target_arch = "aarch64")]
use aarch64::{Intrinsics, NAME};

use deoxysii_core::consts::{Block, STK_COUNT};
use deoxysii_core::{SubTweakKeys, TweakableBlockCipher};
use zeroize::Zeroize;

use crate::feature_detector::FeatureDetector;

/// Hardware backend. Only constructible through [`Hardware::detect`].
#[derive(Clone, Copy, Debug)]
pub struct Hardware {
    _probed: (),
}

impl Hardware {
    /// Returns the backend if the CPU has AES round instructions.
    pub(crate) fn detect(feature_detector: &FeatureDetector) -> Option<Self> {
        feature_detector
            .has_aes()
            .then_some(Self { _probed: () })
    }
}

impl TweakableBlockCipher for Hardware {
    fn name(&self) -> &'static str {
        NAME
    }

    fn encrypt_x1(&self, stks: &SubTweakKeys, block: &Block) -> Block {
        // SAFETY: `Hardware` only exists after a positive AES probe.
        unsafe { encrypt_x1(stks, block) }
    }

    fn encrypt_x4(&self, stks: [&SubTweakKeys; 4], blocks: [&Block; 4]) -> [Block; 4] {
        // SAFETY: `Hardware` only exists after a positive AES probe.
        unsafe { encrypt_x4(stks, blocks) }
    }
}

/// # Safety
/// Caller must ensure AES hardware support is available.
#[inline]
#[target_feature(enable = "aes")]
unsafe fn encrypt_x1(stks: &SubTweakKeys, block: &Block) -> Block {
    let mut state = Intrinsics::load(block);
    state.xor_in_place(&Intrinsics::load(stks.round(0)));

    for r in 1..STK_COUNT {
        state.aes_enc_in_place(&Intrinsics::load(stks.round(r)));
    }

    let mut out = [0u8; 16];
    state.store(&mut out);
    state.zeroize();
    out
}

/// # Safety
/// Caller must ensure AES hardware support is available.
#[inline]
#[target_feature(enable = "aes")]
unsafe fn encrypt_x4(stks: [&SubTweakKeys; 4], blocks: [&Block; 4]) -> [Block; 4] {
    let mut s0 = Intrinsics::load(blocks[0]);
    let mut s1 = Intrinsics::load(blocks[1]);
    let mut s2 = Intrinsics::load(blocks[2]);
    let mut s3 = Intrinsics::load(blocks[3]);

    s0.xor_in_place(&Intrinsics::load(stks[0].round(0)));
    s1.xor_in_place(&Intrinsics::load(stks[1].round(0)));
    s2.xor_in_place(&Intrinsics::load(stks[2].round(0)));
    s3.xor_in_place(&Intrinsics::load(stks[3].round(0)));

    for r in 1..STK_COUNT {
        s0.aes_enc_in_place(&Intrinsics::load(stks[0].round(r)));
        s1.aes_enc_in_place(&Intrinsics::load(stks[1].round(r)));
        s2.aes_enc_in_place(&Intrinsics::load(stks[2].round(r)));
        s3.aes_enc_in_place(&Intrinsics::load(stks[3].round(r)));
    }

    let mut out = [[0u8; 16]; 4];
    s0.store(&mut out[0]);
    s1.store(&mut out[1]);
    s2.store(&mut out[2]);
    s3.store(&mut out[3]);

    s0.zeroize();
    s1.zeroize();
    s2.zeroize();
    s3.zeroize();
    out
}

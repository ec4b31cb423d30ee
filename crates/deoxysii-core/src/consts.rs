// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Deoxys-II-256-128 sizes and tweak domain prefixes.

/// Key size in bytes
pub const KEY_SIZE: usize = 32;

/// Nonce size in bytes (120 bits)
pub const NONCE_SIZE: usize = 15;

/// Authentication tag size in bytes
pub const TAG_SIZE: usize = 16;

/// Block size in bytes
pub const BLOCK_SIZE: usize = 16;

/// Tweak size in bytes
pub const TWEAK_SIZE: usize = 16;

/// Sub-tweak key size in bytes
pub const STK_SIZE: usize = 16;

/// Number of Deoxys-BC-384 rounds
pub const ROUNDS: usize = 16;

/// Number of sub-tweak keys (one per round plus the initial whitening key)
pub const STK_COUNT: usize = ROUNDS + 1;

/// Bit position of the domain prefix inside tweak byte 0.
pub const PREFIX_SHIFT: u8 = 4;

/// Full associated-data block.
pub const PREFIX_AD_BLOCK: u8 = 0b0010;

/// Padded final associated-data block.
pub const PREFIX_AD_FINAL: u8 = 0b0110;

/// Full message block (authentication pass).
pub const PREFIX_MSG_BLOCK: u8 = 0b0000;

/// Padded final message block (authentication pass).
pub const PREFIX_MSG_FINAL: u8 = 0b0100;

/// Tag finalization, binds the nonce.
pub const PREFIX_TAG: u8 = 0b0001;

/// One cipher block.
pub type Block = [u8; BLOCK_SIZE];

/// One tweak.
pub type Tweak = [u8; TWEAK_SIZE];

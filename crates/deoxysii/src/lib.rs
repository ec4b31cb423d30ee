// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Deoxys-II-256-128: nonce-misuse-resistant authenticated encryption.
//!
//! A 256-bit key, a 120-bit nonce and a 128-bit tag. Reusing a nonce only
//! reveals whether two (nonce, ad, plaintext) triples were identical; it
//! never leaks the keystream.
//!
//! # Features
//!
//! - **Constant time by default**: bitsliced 64-bit software backend, or
//!   AES round instructions when the CPU has them
//! - **Per-instance backend**: selection happens once at construction and is
//!   stored on the instance, never in global state
//! - **Zeroized on drop**: the derived key schedule and every per-block
//!   intermediate
//! - **No unauthenticated output**: on a failed open the destination buffer
//!   is restored to its original length
//!
//! # Quick Start
//!
//! ```rust
//! use deoxysii::{DeoxysError, DeoxysII, TAG_SIZE};
//!
//! fn main() -> Result<(), DeoxysError> {
//!     let key = [0x42u8; 32];
//!     let nonce = [0x24u8; 15];
//!
//!     let aead = DeoxysII::new(&key)?;
//!
//!     let sealed = aead.seal(&nonce, b"attack at dawn", b"header")?;
//!     assert_eq!(sealed.len(), 14 + TAG_SIZE);
//!
//!     let opened = aead.open(&nonce, &sealed, b"header")?;
//!     assert_eq!(opened, b"attack at dawn");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Backends
//!
//! | Kind | Constant time | Blocks per call |
//! |---|---|---|
//! | [`BackendKind::Hardware`] | yes | 4 (pipelined) |
//! | [`BackendKind::Ct64`] | yes | 4 |
//! | [`BackendKind::Ct32`] | yes | 2 |
//! | [`BackendKind::VarTime`] | **no** | 1 |
//!
//! [`BackendKind::Auto`] (what [`DeoxysII::new`] uses) picks `Hardware` when
//! available and `Ct64` otherwise. The hardware backend is compiled only with
//! the `hardware` cargo feature (on by default) on x86_64 and aarch64.

#[cfg(test)]
mod tests;

mod aead;
mod backend;
mod feature_detector;

pub use aead::DeoxysII;
pub use backend::BackendKind;
pub use deoxysii_core::DeoxysError;
pub use deoxysii_core::consts::{BLOCK_SIZE, KEY_SIZE, NONCE_SIZE, TAG_SIZE};

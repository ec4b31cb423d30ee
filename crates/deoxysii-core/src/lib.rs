// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core building blocks shared by every Deoxys-II backend: sizes, the
//! TWEAKEY schedule, the error type and the backend contract.

#[cfg(test)]
mod tests;

pub mod consts;
pub mod tweakey;

mod error;
mod traits;

pub use error::DeoxysError;
pub use traits::TweakableBlockCipher;
pub use tweakey::{KeyLane, SubTweakKeys};

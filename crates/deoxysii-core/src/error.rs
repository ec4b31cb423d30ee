// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Deoxys-II error types.

/// Errors that can occur during Deoxys-II operations.
///
/// Open failures are uniform: a truncated input and a tag
/// mismatch both surface as [`DeoxysError::AuthenticationFailed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DeoxysError {
    #[error("authentication failed: tag mismatch")]
    AuthenticationFailed,

    #[error("invalid key size")]
    InvalidKeySize,

    #[error("invalid nonce size")]
    InvalidNonceSize,

    #[error("backend not supported on this CPU: {backend}")]
    UnsupportedBackend { backend: &'static str },
}

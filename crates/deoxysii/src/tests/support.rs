// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use deoxysii_core::DeoxysError;

use crate::aead::DeoxysII;
use crate::backend::BackendKind;

/// One instance per backend this CPU can run, in [`BackendKind::ALL`] order.
pub(crate) fn instances(key: &[u8]) -> Vec<DeoxysII> {
    BackendKind::ALL
        .iter()
        .filter_map(|kind| match DeoxysII::with_backend(key, *kind) {
            Ok(aead) => Some(aead),
            Err(DeoxysError::UnsupportedBackend { .. }) => None,
            Err(e) => panic!("Failed to create {} instance: {e}", kind.name()),
        })
        .collect()
}

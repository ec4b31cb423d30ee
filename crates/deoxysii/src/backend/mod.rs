// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Round-function backends and backend selection.
//!
//! ## Backends
//!
//! - **ct64**: 64-bit bitslice, 4 blocks per state. Constant time. Default
//!   when no hardware support is present.
//! - **ct32**: 32-bit bitslice, 2 blocks per state. Constant time.
//! - **hardware**: AES-NI / ARMv8 Crypto Extensions. Constant time. Used
//!   whenever the CPU supports it (and the `hardware` feature is enabled).
//! - **vartime**: T-tables. NOT constant time, only on explicit request.
//!
//! The set is closed: [`Backend`] is an enum and AEAD code dispatches once
//! per call into code monomorphized for the selected variant.

mod bitslice;
mod ct32;
mod ct64;
#[cfg(has_hardware_backend)]
mod hardware;
mod vartime;

#[cfg(test)]
mod tests;

use deoxysii_core::{DeoxysError, TweakableBlockCipher};

use crate::feature_detector::FeatureDetector;

use ct32::Ct32;
use ct64::Ct64;
#[cfg(has_hardware_backend)]
use hardware::Hardware;
use vartime::VarTime;

/// Backend selection strategy, fixed per AEAD instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Hardware if available, otherwise [`BackendKind::Ct64`].
    #[default]
    Auto,
    /// 32-bit bitsliced, constant time.
    Ct32,
    /// 64-bit bitsliced, constant time.
    Ct64,
    /// AES round instructions; fails on CPUs without them.
    Hardware,
    /// Table based, variable time.
    VarTime,
}

impl BackendKind {
    /// Every concrete backend, in a stable order.
    pub const ALL: [BackendKind; 4] = [
        BackendKind::Ct32,
        BackendKind::Ct64,
        BackendKind::Hardware,
        BackendKind::VarTime,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BackendKind::Auto => "auto",
            BackendKind::Ct32 => "ct32",
            BackendKind::Ct64 => "ct64",
            BackendKind::Hardware => "hardware",
            BackendKind::VarTime => "vartime",
        }
    }
}

/// The installed backend of an AEAD instance.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Backend {
    Ct32(Ct32),
    Ct64(Ct64),
    #[cfg(has_hardware_backend)]
    Hardware(Hardware),
    VarTime(VarTime),
}

impl Backend {
    /// Resolves a [`BackendKind`] against the CPU capabilities.
    ///
    /// # Errors
    ///
    /// Returns [`DeoxysError::UnsupportedBackend`] when
    /// [`BackendKind::Hardware`] is requested but unavailable.
    pub(crate) fn select(
        kind: BackendKind,
        feature_detector: &FeatureDetector,
    ) -> Result<Self, DeoxysError> {
        let backend = match kind {
            BackendKind::Auto => Self::detect_hardware(feature_detector).unwrap_or(Backend::Ct64(Ct64)),
            BackendKind::Ct32 => Backend::Ct32(Ct32),
            BackendKind::Ct64 => Backend::Ct64(Ct64),
            BackendKind::Hardware => {
                Self::detect_hardware(feature_detector).ok_or(DeoxysError::UnsupportedBackend {
                    backend: BackendKind::Hardware.name(),
                })?
            }
            BackendKind::VarTime => {
                tracing::warn!(
                    backend = "vartime",
                    "variable-time backend selected; not constant time"
                );
                Backend::VarTime(VarTime)
            }
        };

        tracing::debug!(
            backend = backend.name(),
            requested = kind.name(),
            "deoxysii backend selected"
        );

        Ok(backend)
    }

    #[cfg(has_hardware_backend)]
    fn detect_hardware(feature_detector: &FeatureDetector) -> Option<Self> {
        Hardware::detect(feature_detector).map(Backend::Hardware)
    }

    #[cfg(not(has_hardware_backend))]
    fn detect_hardware(feature_detector: &FeatureDetector) -> Option<Self> {
        let _ = feature_detector;
        None
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            Backend::Ct32(b) => b.name(),
            Backend::Ct64(b) => b.name(),
            #[cfg(has_hardware_backend)]
            Backend::Hardware(b) => b.name(),
            Backend::VarTime(b) => b.name(),
        }
    }

    pub(crate) fn kind(&self) -> BackendKind {
        match self {
            Backend::Ct32(_) => BackendKind::Ct32,
            Backend::Ct64(_) => BackendKind::Ct64,
            #[cfg(has_hardware_backend)]
            Backend::Hardware(_) => BackendKind::Hardware,
            Backend::VarTime(_) => BackendKind::VarTime,
        }
    }
}

/// Runs `$body` with `$cipher` bound to the concrete backend inside `$backend`.
macro_rules! with_backend {
    ($backend:expr, $cipher:ident => $body:expr) => {
        match $backend {
            $crate::backend::Backend::Ct32($cipher) => $body,
            $crate::backend::Backend::Ct64($cipher) => $body,
            #[cfg(has_hardware_backend)]
            $crate::backend::Backend::Hardware($cipher) => $body,
            $crate::backend::Backend::VarTime($cipher) => $body,
        }
    };
}

pub(crate) use with_backend;

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

fn main() {
    // Declare custom cfg to suppress unexpected_cfgs warnings
    println!("cargo:rustc-check-cfg=cfg(has_hardware_backend)");

    // Portable build: bitsliced and table backends only
    if std::env::var("CARGO_FEATURE_HARDWARE").is_err() {
        return;
    }

    let target_arch = std::env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();

    // AES round instructions:
    // - x86_64: AES-NI (AESENC)
    // - aarch64: ARMv8 Crypto Extensions (AESE + AESMC)
    if matches!(target_arch.as_str(), "x86_64" | "aarch64") {
        println!("cargo:rustc-cfg=has_hardware_backend");
    }
}

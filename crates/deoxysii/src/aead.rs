// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Deoxys-II-256-128 AEAD (SCT-2 mode over Deoxys-BC-384).
//!
//! Sealing runs two passes over the input:
//!
//! 1. **Authentication**: every associated-data and message block is
//!    encrypted under its own domain-separated tweak and the results are
//!    XORed into an accumulator, which is then encrypted under the
//!    nonce-bound tweak to form the tag.
//! 2. **Encryption**: the block `0x00 || nonce` is encrypted under tweaks
//!    derived from the tag and a block counter, and the resulting keystream
//!    is XORed over the message.
//!
//! Opening reverses the order: decrypt with the received tag, recompute the
//! tag over the candidate plaintext, compare in constant time, and release
//! the plaintext only on a match.

use deoxysii_core::consts::{
    BLOCK_SIZE, Block, KEY_SIZE, NONCE_SIZE, PREFIX_AD_BLOCK, PREFIX_AD_FINAL, PREFIX_MSG_BLOCK,
    PREFIX_MSG_FINAL, TAG_SIZE,
};
use deoxysii_core::tweakey::{
    auth_tweak, finalize_tweak, keystream_block, keystream_tweak, pad_final,
};
use deoxysii_core::{DeoxysError, KeyLane, SubTweakKeys, TweakableBlockCipher};
use deoxysii_util::{constant_time_eq, xor_in_place};
use zeroize::Zeroize;

use crate::backend::{Backend, BackendKind, with_backend};
use crate::feature_detector::FeatureDetector;

/// Deoxys-II-256-128 AEAD instance.
///
/// Holds the derived key lane and the backend selected at construction.
/// Immutable afterwards: one instance can seal and open concurrently from
/// any number of threads. The key lane is erased on drop.
pub struct DeoxysII {
    key_lane: KeyLane,
    backend: Backend,
}

impl core::fmt::Debug for DeoxysII {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "DeoxysII {{ backend: {} }}", self.backend.name())
    }
}

impl DeoxysII {
    #[inline(always)]
    pub(crate) fn new_with_feature_detector(
        key: &[u8],
        kind: BackendKind,
        feature_detector: &FeatureDetector,
    ) -> Result<Self, DeoxysError> {
        let key: &[u8; KEY_SIZE] = key.try_into().map_err(|_| DeoxysError::InvalidKeySize)?;
        let backend = Backend::select(kind, feature_detector)?;
        let key_lane = with_backend!(&backend, cipher => cipher.key_schedule(key));

        Ok(Self { key_lane, backend })
    }

    /// Creates an instance with the fastest constant-time backend available.
    ///
    /// # Errors
    ///
    /// Returns [`DeoxysError::InvalidKeySize`] if `key` is not 32 bytes.
    pub fn new(key: &[u8]) -> Result<Self, DeoxysError> {
        Self::with_backend(key, BackendKind::Auto)
    }

    /// Creates an instance with an explicit backend.
    ///
    /// # Errors
    ///
    /// Returns [`DeoxysError::InvalidKeySize`] if `key` is not 32 bytes, and
    /// [`DeoxysError::UnsupportedBackend`] if `kind` is
    /// [`BackendKind::Hardware`] on a CPU without AES round instructions.
    pub fn with_backend(key: &[u8], kind: BackendKind) -> Result<Self, DeoxysError> {
        let feature_detector = FeatureDetector::new();
        Self::new_with_feature_detector(key, kind, &feature_detector)
    }

    /// Name of the installed backend (`"ct64"`, `"aes-ni"`, ...).
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Concrete kind of the installed backend. Never [`BackendKind::Auto`].
    pub fn backend_kind(&self) -> BackendKind {
        self.backend.kind()
    }

    #[inline]
    pub fn key_size(&self) -> usize {
        KEY_SIZE
    }

    #[inline]
    pub fn nonce_size(&self) -> usize {
        NONCE_SIZE
    }

    #[inline]
    pub fn tag_size(&self) -> usize {
        TAG_SIZE
    }

    /// Encrypts and authenticates `plaintext`, appending `ciphertext || tag`
    /// to `dst`.
    ///
    /// Exactly `plaintext.len() + TAG_SIZE` bytes are appended. Sealing is
    /// deterministic: the same (key, nonce, plaintext, ad) always produces
    /// the same output.
    ///
    /// # Errors
    ///
    /// Returns [`DeoxysError::InvalidNonceSize`] if `nonce` is not 15 bytes.
    /// `dst` is left untouched in that case.
    pub fn seal_into(
        &self,
        dst: &mut Vec<u8>,
        nonce: &[u8],
        plaintext: &[u8],
        ad: &[u8],
    ) -> Result<(), DeoxysError> {
        let nonce: &[u8; NONCE_SIZE] =
            nonce.try_into().map_err(|_| DeoxysError::InvalidNonceSize)?;

        with_backend!(&self.backend, cipher => {
            let tag = authenticate(cipher, &self.key_lane, nonce, ad, plaintext);

            dst.reserve(plaintext.len() + TAG_SIZE);
            let start = dst.len();
            dst.extend_from_slice(plaintext);
            xor_keystream(cipher, &self.key_lane, &tag, nonce, &mut dst[start..]);
            dst.extend_from_slice(&tag);
        });

        Ok(())
    }

    /// Convenience wrapper around [`seal_into`](Self::seal_into) returning a
    /// fresh buffer.
    ///
    /// # Errors
    ///
    /// Returns [`DeoxysError::InvalidNonceSize`] if `nonce` is not 15 bytes.
    pub fn seal(&self, nonce: &[u8], plaintext: &[u8], ad: &[u8]) -> Result<Vec<u8>, DeoxysError> {
        let mut out = Vec::with_capacity(plaintext.len() + TAG_SIZE);
        self.seal_into(&mut out, nonce, plaintext, ad)?;
        Ok(out)
    }

    /// Verifies and decrypts `ciphertext || tag`, appending the plaintext to
    /// `dst`.
    ///
    /// The tag is recomputed over the candidate plaintext and compared in
    /// constant time. On mismatch the candidate bytes are zeroized and `dst`
    /// is truncated back to its original length, so no unauthenticated
    /// plaintext is ever observable.
    ///
    /// # Errors
    ///
    /// Returns [`DeoxysError::InvalidNonceSize`] if `nonce` is not 15 bytes
    /// and [`DeoxysError::AuthenticationFailed`] if the input is shorter than
    /// a tag or the tag does not verify.
    pub fn open_into(
        &self,
        dst: &mut Vec<u8>,
        nonce: &[u8],
        ciphertext: &[u8],
        ad: &[u8],
    ) -> Result<(), DeoxysError> {
        let nonce: &[u8; NONCE_SIZE] =
            nonce.try_into().map_err(|_| DeoxysError::InvalidNonceSize)?;

        let Some(body_len) = ciphertext.len().checked_sub(TAG_SIZE) else {
            tracing::debug!(
                ciphertext_len = ciphertext.len(),
                "deoxysii open rejected: input shorter than tag"
            );
            return Err(DeoxysError::AuthenticationFailed);
        };
        let (body, received) = ciphertext.split_at(body_len);

        let mut tag = [0u8; TAG_SIZE];
        tag.copy_from_slice(received);

        let start = dst.len();
        dst.extend_from_slice(body);

        let verified = with_backend!(&self.backend, cipher => {
            xor_keystream(cipher, &self.key_lane, &tag, nonce, &mut dst[start..]);
            let mut expected = authenticate(cipher, &self.key_lane, nonce, ad, &dst[start..]);
            let verified = constant_time_eq(&expected, &tag);
            expected.zeroize();
            verified
        });

        if !verified {
            dst[start..].zeroize();
            dst.truncate(start);

            tracing::debug!(
                ciphertext_len = ciphertext.len(),
                ad_len = ad.len(),
                "deoxysii open rejected: tag mismatch"
            );
            return Err(DeoxysError::AuthenticationFailed);
        }

        Ok(())
    }

    /// Convenience wrapper around [`open_into`](Self::open_into) returning a
    /// fresh buffer.
    ///
    /// # Errors
    ///
    /// Same as [`open_into`](Self::open_into).
    pub fn open(&self, nonce: &[u8], ciphertext: &[u8], ad: &[u8]) -> Result<Vec<u8>, DeoxysError> {
        let mut out = Vec::with_capacity(ciphertext.len().saturating_sub(TAG_SIZE));
        self.open_into(&mut out, nonce, ciphertext, ad)?;
        Ok(out)
    }
}

#[inline(always)]
fn load_block(chunk: &[u8]) -> Block {
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(chunk);
    block
}

#[inline(always)]
fn auth_keys<const N: usize>(lane: &KeyLane, prefix: u8, index: u64) -> [SubTweakKeys; N] {
    core::array::from_fn(|i| lane.sub_tweak_keys(&auth_tweak(prefix, index + i as u64)))
}

#[inline(always)]
fn keystream_keys<const N: usize>(
    lane: &KeyLane,
    tag: &[u8; TAG_SIZE],
    counter: u64,
) -> [SubTweakKeys; N] {
    core::array::from_fn(|i| lane.sub_tweak_keys(&keystream_tweak(tag, counter + i as u64)))
}

/// XORs the encryption of every block of `data` into `acc`.
///
/// Full blocks use `block_prefix` and their index; a trailing partial block
/// is padded and uses `final_prefix` with the count of full blocks. Empty
/// input contributes nothing.
fn absorb<C: TweakableBlockCipher>(
    cipher: &C,
    lane: &KeyLane,
    acc: &mut Block,
    data: &[u8],
    block_prefix: u8,
    final_prefix: u8,
) {
    let mut index = 0u64;

    let mut quads = data.chunks_exact(4 * BLOCK_SIZE);
    for quad in &mut quads {
        let stks = auth_keys::<4>(lane, block_prefix, index);
        let mut blocks: [Block; 4] =
            core::array::from_fn(|i| load_block(&quad[i * BLOCK_SIZE..(i + 1) * BLOCK_SIZE]));
        cipher.tag_x4(acc, stks.each_ref(), blocks.each_ref());
        blocks.zeroize();
        index += 4;
    }

    let mut pairs = quads.remainder().chunks_exact(2 * BLOCK_SIZE);
    for pair in &mut pairs {
        let stks = auth_keys::<2>(lane, block_prefix, index);
        let mut blocks: [Block; 2] =
            core::array::from_fn(|i| load_block(&pair[i * BLOCK_SIZE..(i + 1) * BLOCK_SIZE]));
        cipher.tag_x2(acc, stks.each_ref(), blocks.each_ref());
        blocks.zeroize();
        index += 2;
    }

    let mut singles = pairs.remainder().chunks_exact(BLOCK_SIZE);
    for single in &mut singles {
        let [stks] = auth_keys::<1>(lane, block_prefix, index);
        let mut block = load_block(single);
        cipher.tag_x1(acc, &stks, &block);
        block.zeroize();
        index += 1;
    }

    let partial = singles.remainder();
    if !partial.is_empty() {
        let [stks] = auth_keys::<1>(lane, final_prefix, index);
        let mut block = pad_final(partial);
        cipher.tag_x1(acc, &stks, &block);
        block.zeroize();
    }
}

/// Authentication pass: absorbs `ad` then `msg` and encrypts the accumulator
/// under the nonce-bound tweak.
fn authenticate<C: TweakableBlockCipher>(
    cipher: &C,
    lane: &KeyLane,
    nonce: &[u8; NONCE_SIZE],
    ad: &[u8],
    msg: &[u8],
) -> [u8; TAG_SIZE] {
    let mut acc = [0u8; BLOCK_SIZE];
    absorb(cipher, lane, &mut acc, ad, PREFIX_AD_BLOCK, PREFIX_AD_FINAL);
    absorb(cipher, lane, &mut acc, msg, PREFIX_MSG_BLOCK, PREFIX_MSG_FINAL);

    let stks = lane.sub_tweak_keys(&finalize_tweak(nonce));
    let tag = cipher.encrypt_x1(&stks, &acc);
    acc.zeroize();
    tag
}

/// Encryption pass: XORs the tag-keyed keystream over `data` in place.
/// Its own inverse.
fn xor_keystream<C: TweakableBlockCipher>(
    cipher: &C,
    lane: &KeyLane,
    tag: &[u8; TAG_SIZE],
    nonce: &[u8; NONCE_SIZE],
    data: &mut [u8],
) {
    let input = keystream_block(nonce);
    let mut counter = 0u64;

    let mut quads = data.chunks_exact_mut(4 * BLOCK_SIZE);
    for quad in &mut quads {
        let stks = keystream_keys::<4>(lane, tag, counter);
        let mut keystream = cipher.keystream_x4(stks.each_ref(), &input);
        for (chunk, ks) in quad.chunks_exact_mut(BLOCK_SIZE).zip(keystream.iter()) {
            xor_in_place(chunk, ks);
        }
        keystream.zeroize();
        counter += 4;
    }

    let mut pairs = quads.into_remainder().chunks_exact_mut(2 * BLOCK_SIZE);
    for pair in &mut pairs {
        let stks = keystream_keys::<2>(lane, tag, counter);
        let mut keystream = cipher.keystream_x2(stks.each_ref(), &input);
        for (chunk, ks) in pair.chunks_exact_mut(BLOCK_SIZE).zip(keystream.iter()) {
            xor_in_place(chunk, ks);
        }
        keystream.zeroize();
        counter += 2;
    }

    // Full and trailing partial blocks; the partial one uses a keystream prefix.
    for chunk in pairs.into_remainder().chunks_mut(BLOCK_SIZE) {
        let [stks] = keystream_keys::<1>(lane, tag, counter);
        let mut keystream = cipher.encrypt_x1(&stks, &input);
        xor_in_place(chunk, &keystream);
        keystream.zeroize();
        counter += 1;
    }
}

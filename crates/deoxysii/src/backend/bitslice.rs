// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Word-width independent parts of the bitsliced AES round.
//!
//! The state is 8 machine words; word `i` carries bit `i` of every state
//! byte of every packed block. SubBytes and MixColumns only see bit planes,
//! so they are written once over [`Word`] and shared by the 32-bit
//! (2 blocks) and 64-bit (4 blocks) backends. ShiftRows and the
//! (de)orthogonalization depend on how bytes are packed into a word and live
//! with each backend.

use core::ops::{BitAnd, BitXor, Not};

/// Machine word carrying one bit plane of the bitsliced state.
pub(crate) trait Word:
    Copy + BitXor<Output = Self> + BitAnd<Output = Self> + Not<Output = Self>
{
    /// Rotates the packed columns by one row.
    fn rotr_row(self) -> Self;

    /// Rotates the packed columns by two rows.
    fn rotr_two_rows(self) -> Self;
}

impl Word for u32 {
    #[inline(always)]
    fn rotr_row(self) -> Self {
        self.rotate_right(8)
    }

    #[inline(always)]
    fn rotr_two_rows(self) -> Self {
        self.rotate_right(16)
    }
}

impl Word for u64 {
    #[inline(always)]
    fn rotr_row(self) -> Self {
        self.rotate_right(16)
    }

    #[inline(always)]
    fn rotr_two_rows(self) -> Self {
        self.rotate_right(32)
    }
}

/// Bitsliced AES S-box (Boyar-Peralta circuit).
///
/// Pure AND/XOR/NOT network: no branch and no memory access depends on the
/// state.
#[inline(always)]
pub(crate) fn sub_bytes<W: Word>(q: &mut [W; 8]) {
    // Top linear transformation.
    let u7 = q[0];
    let u6 = q[1];
    let u5 = q[2];
    let u4 = q[3];
    let u3 = q[4];
    let u2 = q[5];
    let u1 = q[6];
    let u0 = q[7];

    let y14 = u3 ^ u5;
    let y13 = u0 ^ u6;
    let y12 = y13 ^ y14;
    let t1 = u4 ^ y12;
    let y15 = t1 ^ u5;
    let t2 = y12 & y15;
    let y6 = y15 ^ u7;
    let y20 = t1 ^ u1;
    let y9 = u0 ^ u3;
    let y11 = y20 ^ y9;
    let t12 = y9 & y11;
    let y7 = u7 ^ y11;
    let y8 = u0 ^ u5;
    let t0 = u1 ^ u2;
    let y10 = y15 ^ t0;
    let y17 = y10 ^ y11;
    let t13 = y14 & y17;
    let t14 = t13 ^ t12;
    let y19 = y10 ^ y8;
    let t15 = y8 & y10;
    let t16 = t15 ^ t12;
    let y16 = t0 ^ y11;
    let y21 = y13 ^ y16;
    let t7 = y13 & y16;
    let y18 = u0 ^ y16;
    let y1 = t0 ^ u7;
    let y4 = y1 ^ u3;
    let t5 = y4 & u7;
    let t6 = t5 ^ t2;
    let t18 = t6 ^ t16;
    let t22 = t18 ^ y19;
    let y2 = y1 ^ u0;
    let t10 = y2 & y7;
    let t11 = t10 ^ t7;
    let t20 = t11 ^ t16;
    let t24 = t20 ^ y18;
    let y5 = y1 ^ u6;
    let t8 = y5 & y1;
    let t9 = t8 ^ t7;
    let t19 = t9 ^ t14;
    let t23 = t19 ^ y21;
    let y3 = y5 ^ y8;
    let t3 = y3 & y6;
    let t4 = t3 ^ t2;
    let t17 = t4 ^ y20;
    let t21 = t17 ^ t14;

    // Shared inversion in GF(2^4).
    let t26 = t21 & t23;
    let t27 = t24 ^ t26;
    let t31 = t22 ^ t26;
    let t25 = t21 ^ t22;
    let t28 = t25 & t27;
    let t29 = t28 ^ t22;
    let z14 = t29 & y2;
    let z5 = t29 & y7;
    let t30 = t23 ^ t24;
    let t32 = t31 & t30;
    let t33 = t32 ^ t24;
    let t35 = t27 ^ t33;
    let t36 = t24 & t35;
    let t38 = t27 ^ t36;
    let t39 = t29 & t38;
    let t40 = t25 ^ t39;
    let t43 = t29 ^ t40;
    let z3 = t43 & y16;
    let tc12 = z3 ^ z5;
    let z12 = t43 & y13;
    let z13 = t40 & y5;
    let z4 = t40 & y1;
    let tc6 = z3 ^ z4;
    let t34 = t23 ^ t33;
    let t37 = t36 ^ t34;
    let t41 = t40 ^ t37;
    let z8 = t41 & y10;
    let z17 = t41 & y8;
    let t44 = t33 ^ t37;
    let z0 = t44 & y15;
    let z9 = t44 & y12;
    let z10 = t37 & y3;
    let z1 = t37 & y6;
    let tc5 = z1 ^ z0;
    let tc11 = tc6 ^ tc5;
    let z11 = t33 & y4;
    let t42 = t29 ^ t33;
    let t45 = t42 ^ t41;
    let z7 = t45 & y17;
    let tc8 = z7 ^ tc6;
    let z16 = t45 & y14;
    let z6 = t42 & y11;
    let tc16 = z6 ^ tc8;
    let z15 = t42 & y9;
    let tc20 = z15 ^ tc16;
    let tc1 = z15 ^ z16;

    // Bottom linear transformation.
    let tc2 = z10 ^ tc1;
    let tc21 = tc2 ^ z11;
    let tc3 = z9 ^ tc2;
    let s0 = tc3 ^ tc16;
    let s3 = tc3 ^ tc11;
    let s1 = s3 ^ tc16;
    let tc13 = z13 ^ tc1;
    let z2 = t33 & u7;
    let tc4 = z0 ^ z2;
    let tc7 = z12 ^ tc4;
    let tc9 = z8 ^ tc7;
    let tc10 = tc8 ^ tc9;
    let tc17 = z14 ^ tc10;
    let s5 = tc21 ^ tc17;
    let tc26 = tc17 ^ tc20;
    let s2 = tc26 ^ z17;
    let tc14 = tc4 ^ tc12;
    let tc18 = tc13 ^ tc14;
    let s6 = tc10 ^ tc18;
    let s7 = z12 ^ tc18;
    let s4 = tc14 ^ s3;

    // The affine constant 0x63 folds into four NOTs.
    q[0] = !s7;
    q[1] = !s6;
    q[2] = s5;
    q[3] = s4;
    q[4] = s3;
    q[5] = !s2;
    q[6] = !s1;
    q[7] = s0;
}

/// Bitsliced MixColumns.
#[inline(always)]
pub(crate) fn mix_columns<W: Word>(q: &mut [W; 8]) {
    let [q0, q1, q2, q3, q4, q5, q6, q7] = *q;
    let r0 = q0.rotr_row();
    let r1 = q1.rotr_row();
    let r2 = q2.rotr_row();
    let r3 = q3.rotr_row();
    let r4 = q4.rotr_row();
    let r5 = q5.rotr_row();
    let r6 = q6.rotr_row();
    let r7 = q7.rotr_row();

    q[0] = q7 ^ r7 ^ r0 ^ (q0 ^ r0).rotr_two_rows();
    q[1] = q0 ^ r0 ^ q7 ^ r7 ^ r1 ^ (q1 ^ r1).rotr_two_rows();
    q[2] = q1 ^ r1 ^ r2 ^ (q2 ^ r2).rotr_two_rows();
    q[3] = q2 ^ r2 ^ q7 ^ r7 ^ r3 ^ (q3 ^ r3).rotr_two_rows();
    q[4] = q3 ^ r3 ^ q7 ^ r7 ^ r4 ^ (q4 ^ r4).rotr_two_rows();
    q[5] = q4 ^ r4 ^ r5 ^ (q5 ^ r5).rotr_two_rows();
    q[6] = q5 ^ r5 ^ r6 ^ (q6 ^ r6).rotr_two_rows();
    q[7] = q6 ^ r6 ^ r7 ^ (q7 ^ r7).rotr_two_rows();
}

/// AddRoundKey in the bitsliced domain.
#[inline(always)]
pub(crate) fn add_round_key<W: Word>(q: &mut [W; 8], rk: &[W; 8]) {
    for (w, k) in q.iter_mut().zip(rk.iter()) {
        *w = *w ^ *k;
    }
}

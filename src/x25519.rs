//! The X25519 Diffie-Hellman function over the Montgomery form of
//! Curve25519, per RFC 7748.

use crate::fe25519;
use crate::fe25519::Fe25519;
use crate::scalar;

/// The standard base point's u-coordinate, 9.
pub const BASE_POINT_U: [u8; 32] = [
    9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

// Montgomery ladder computing the u-coordinate of n*P via repeated
// differential add-and-double steps and constant-time conditional swaps.
//
// `n` must already be clamped. Scanning bits 254..0, the swap flag carries
// the XOR of consecutive key bits so the (x2,z2)/(x3,z3) pair is exchanged
// exactly when the bit changes; every iteration performs identical field
// arithmetic regardless of the key.
pub(crate) fn ladder(u: &Fe25519, n: &[u8; 32]) -> Fe25519 {
    let mut x2 = fe25519::one();
    let mut z2 = fe25519::zero();
    let mut x3 = *u;
    let mut z3 = fe25519::one();
    let mut tmp0: Fe25519;
    let mut tmp1: Fe25519;
    let mut swap_bit: u8 = 0;

    for idx in (0..=254).rev() {
        let bit = (n[idx >> 3] >> (idx & 7)) & 1;
        swap_bit ^= bit;
        fe25519::swap(&mut x2, &mut x3, swap_bit);
        fe25519::swap(&mut z2, &mut z3, swap_bit);
        swap_bit = bit;

        tmp0 = fe25519::sub(&x3, &z3); // D = x3 - z3
        tmp1 = fe25519::sub(&x2, &z2); // B = x2 - z2
        x2 = fe25519::add(&x2, &z2); // A = x2 + z2
        z2 = fe25519::add(&x3, &z3); // C = x3 + z3
        z3 = fe25519::mul(&tmp0, &x2); // DA
        z2 = fe25519::mul(&z2, &tmp1); // CB
        tmp0 = fe25519::square(&tmp1); // BB
        tmp1 = fe25519::square(&x2); // AA
        x3 = fe25519::add(&z3, &z2); // DA + CB
        z2 = fe25519::sub(&z3, &z2); // DA - CB
        x2 = fe25519::mul(&tmp1, &tmp0); // AA * BB
        tmp1 = fe25519::sub(&tmp1, &tmp0); // E = AA - BB
        z2 = fe25519::square(&z2);
        z3 = fe25519::mul121666(&tmp1);
        x3 = fe25519::square(&x3);
        tmp0 = fe25519::add(&tmp0, &z3); // BB + 121666*E = AA + 121665*E
        z3 = fe25519::mul(u, &z2);
        z2 = fe25519::mul(&tmp1, &tmp0);
    }

    fe25519::swap(&mut x2, &mut x3, swap_bit);
    fe25519::swap(&mut z2, &mut z3, swap_bit);

    z2 = fe25519::invert(&z2);
    fe25519::mul(&x2, &z2)
}

/// Computes the X25519 function of a 32-byte scalar and a 32-byte
/// u-coordinate. The scalar is clamped and the u-coordinate's bit 255 masked
/// before use; a low-order `u` yields an all-zero result which is *not*
/// rejected here.
pub fn x25519(k: &[u8; 32], u: &[u8; 32]) -> [u8; 32] {
    let mut k = *k;
    scalar::clamp(&mut k);

    let u = fe25519::unpack(u);
    fe25519::pack(&ladder(&u, &k))
}

/// Given a secret key `sk`, returns the corresponding X25519 public key,
/// `x25519(sk, 9)`.
pub fn public_key(sk: &[u8; 32]) -> [u8; 32] {
    x25519(sk, &BASE_POINT_U)
}

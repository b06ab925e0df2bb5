//! Arithmetic over GF(2^255-19), backed by fiat-crypto's verified Curve25519
//! field operations. Values are five 51-bit limbs, little-endian; every
//! wrapper re-carries its result so callers always hold tight limbs, and
//! `pack` produces the canonical (fully reduced) 32-byte encoding.

use fiat_crypto::curve25519_64::*;
use subtle::ConstantTimeEq;

pub type Fe25519 = [u64; 5];

/// The Edwards curve constant d = -121665/121666 mod p.
pub const D: Fe25519 = [
    0x34dca135978a3,
    0x1a8283b156ebd,
    0x5e7a26001c029,
    0x739c663a03cbb,
    0x52036cee2b6ff,
];

/// sqrt(-1) = 2^((p-1)/4) mod p, used to fix up square-root candidates.
pub const SQRT_M1: Fe25519 = [
    0x61b274a0ea0b0,
    0x0d5a5fc8f189d,
    0x7ef5e9cbd0c60,
    0x78595a6804c9e,
    0x2b8324804fc1d,
];

pub const fn zero() -> Fe25519 {
    [0, 0, 0, 0, 0]
}

pub const fn one() -> Fe25519 {
    [1, 0, 0, 0, 0]
}

/// Conditionally exchanges `a` and `b` iff `swap` is 1, via fiat's branchless
/// selection. Control flow never depends on `swap`; this is required by the
/// ladder's timing contract.
#[inline]
pub fn swap(a: &mut Fe25519, b: &mut Fe25519, swap: u8) {
    // SAFETY: This is a part of fiat input bounds.
    assert!(swap == 1 || swap == 0);

    let tmp_x = *a;
    let tmp_y = *b;

    fiat_25519_selectznz(a, swap, &tmp_x, &tmp_y);
    fiat_25519_selectznz(b, swap, &tmp_y, &tmp_x);
}

#[inline]
pub fn freeze(r: &Fe25519) -> Fe25519 {
    let mut ret = Default::default();
    fiat_25519_carry(&mut ret, r);
    ret
}

/// Decodes 32 little-endian bytes, masking off bit 255 first. Accepts
/// non-canonical encodings (values >= p); reduction happens in later
/// arithmetic, per RFC 7748.
#[inline]
pub fn unpack(x: &[u8; 32]) -> Fe25519 {
    let mut ret = Default::default();
    let mut x = *x;
    x[31] &= 127;
    fiat_25519_from_bytes(&mut ret, &x);
    freeze(&ret)
}

/// Encodes to the canonical 32-byte little-endian form (value reduced mod p).
#[inline]
pub fn pack(x: &Fe25519) -> [u8; 32] {
    let mut ret = Default::default();
    fiat_25519_to_bytes(&mut ret, x);
    ret
}

#[inline]
pub fn iszero(x: &Fe25519) -> bool {
    pack(x).ct_eq(&[0u8; 32]).into()
}

/// Constant-time equality of the canonical encodings.
#[inline]
pub fn eq(x: &Fe25519, y: &Fe25519) -> bool {
    pack(x).ct_eq(&pack(y)).into()
}

/// True iff the canonical encoding of `x` is odd. This is the "sign" bit
/// stored during point compression.
#[inline]
pub fn is_negative(x: &Fe25519) -> bool {
    pack(x)[0] & 1 == 1
}

#[inline]
pub fn add(x: &Fe25519, y: &Fe25519) -> Fe25519 {
    let mut ret = Default::default();
    fiat_25519_add(&mut ret, x, y);
    freeze(&ret)
}

#[inline]
pub fn sub(x: &Fe25519, y: &Fe25519) -> Fe25519 {
    let mut ret = Default::default();
    fiat_25519_sub(&mut ret, x, y);
    freeze(&ret)
}

#[inline]
pub fn neg(x: &Fe25519) -> Fe25519 {
    sub(&zero(), x)
}

/// Multiplication by 121666 = a24 + 1; the ladder's add-and-double step is
/// arranged so this is the only scalar multiple it needs.
#[inline]
pub fn mul121666(x: &Fe25519) -> Fe25519 {
    let mut ret = Default::default();
    fiat_25519_carry_scmul_121666(&mut ret, x);
    freeze(&ret)
}

#[inline]
pub fn mul(x: &Fe25519, y: &Fe25519) -> Fe25519 {
    let mut ret = Default::default();
    fiat_25519_carry_mul(&mut ret, x, y);
    freeze(&ret)
}

#[inline]
pub fn square(x: &Fe25519) -> Fe25519 {
    let mut ret = Default::default();
    fiat_25519_carry_square(&mut ret, x);
    freeze(&ret)
}

// Shared prefix of the x^(p-2) and x^(2^252-3) addition chains: returns
// (x^(2^250-1), x^11).
fn pow250(x: &Fe25519) -> (Fe25519, Fe25519) {
    /* 2 */
    let z2 = square(x);
    /* 4 */
    let t1 = square(&z2);
    /* 8 */
    let t0 = square(&t1);
    /* 9 */
    let z9 = mul(&t0, x);
    /* 11 */
    let z11 = mul(&z9, &z2);
    /* 22 */
    let t0 = square(&z11);
    /* 2^5 - 2^0 = 31 */
    let z2 = mul(&t0, &z9);

    /* 2^6 - 2^1 */
    let t0 = square(&z2);
    /* 2^7 - 2^2 */
    let t1 = square(&t0);
    /* 2^8 - 2^3 */
    let t0 = square(&t1);
    /* 2^9 - 2^4 */
    let t1 = square(&t0);
    /* 2^10 - 2^5 */
    let t0 = square(&t1);
    /* 2^10 - 2^0 */
    let z2 = mul(&t0, &z2);

    /* 2^11 - 2^1 */
    let mut t0 = square(&z2);
    /* 2^12 - 2^2 */
    let mut t1 = square(&t0);
    /* 2^20 - 2^10 */
    for _ in (2..10).step_by(2) {
        t0 = square(&t1);
        t1 = square(&t0);
    }
    /* 2^20 - 2^0 */
    let z9 = mul(&t1, &z2);

    /* 2^21 - 2^1 */
    let mut t0 = square(&z9);
    /* 2^22 - 2^2 */
    let mut t1 = square(&t0);
    /* 2^40 - 2^20 */
    for _ in (2..20).step_by(2) {
        t0 = square(&t1);
        t1 = square(&t0);
    }
    /* 2^40 - 2^0 */
    let t0 = mul(&t1, &z9);

    /* 2^41 - 2^1 */
    let mut t1 = square(&t0);
    /* 2^42 - 2^2 */
    let mut t0 = square(&t1);
    /* 2^50 - 2^10 */
    for _ in (2..10).step_by(2) {
        t1 = square(&t0);
        t0 = square(&t1);
    }
    /* 2^50 - 2^0 */
    let z2 = mul(&t0, &z2);

    /* 2^51 - 2^1 */
    let mut t0 = square(&z2);
    /* 2^52 - 2^2 */
    let mut t1 = square(&t0);
    /* 2^100 - 2^50 */
    for _ in (2..50).step_by(2) {
        t0 = square(&t1);
        t1 = square(&t0);
    }
    /* 2^100 - 2^0 */
    let z9 = mul(&t1, &z2);

    /* 2^101 - 2^1 */
    let mut t1 = square(&z9);
    /* 2^102 - 2^2 */
    let mut t0 = square(&t1);
    /* 2^200 - 2^100 */
    for _ in (2..100).step_by(2) {
        t1 = square(&t0);
        t0 = square(&t1);
    }
    /* 2^200 - 2^0 */
    let t1 = mul(&t0, &z9);

    /* 2^201 - 2^1 */
    let mut t0 = square(&t1);
    /* 2^202 - 2^2 */
    let mut t1 = square(&t0);
    /* 2^250 - 2^50 */
    for _ in (2..50).step_by(2) {
        t0 = square(&t1);
        t1 = square(&t0);
    }
    /* 2^250 - 2^0 */
    (mul(&t1, &z2), z11)
}

/// Modular inverse via Fermat's little theorem: x^(p-2) = x^(2^255-21).
/// Returns zero for a zero input; callers treat that as an error condition.
pub fn invert(x: &Fe25519) -> Fe25519 {
    let (t0, z11) = pow250(x);

    /* 2^251 - 2^1 */
    let t1 = square(&t0);
    /* 2^252 - 2^2 */
    let t0 = square(&t1);
    /* 2^253 - 2^3 */
    let t1 = square(&t0);
    /* 2^254 - 2^4 */
    let t0 = square(&t1);
    /* 2^255 - 2^5 */
    let t1 = square(&t0);
    /* 2^255 - 21 */
    let ret = mul(&t1, &z11);
    freeze(&ret)
}

/// x^(2^252-3); `x * pow2523(x)` is x^((p+3)/8), the square-root candidate
/// used by point decompression.
pub fn pow2523(x: &Fe25519) -> Fe25519 {
    let (t0, _) = pow250(x);

    /* 2^251 - 2^1 */
    let t1 = square(&t0);
    /* 2^252 - 2^2 */
    let t0 = square(&t1);
    /* 2^252 - 3 */
    let ret = mul(&t0, x);
    freeze(&ret)
}

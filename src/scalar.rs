//! Arithmetic modulo the prime order q = 2^252 + 27742317777372353535851937790883648493
//! of the Curve25519 group, on one-byte coefficients: schoolbook multiplication
//! plus Barrett reduction. Signature scalars (`t = r + k*s mod q`) and the
//! reduction of 64-byte SHA-512 digests both live here.

/// A scalar as 32 base-256 coefficients, little-endian. Coefficients of a
/// reduced scalar fit in a byte; `u16` leaves headroom for carries.
pub type GroupScalar = [u16; 32];

// q, little-endian.
const M: [u32; 32] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
];

// floor(2^512 / q), for Barrett reduction.
const MU: [u32; 33] = [
    0x1b, 0x13, 0x2c, 0x0a, 0xa3, 0xe5, 0x9c, 0xed, 0xa7, 0x29, 0x63, 0x08, 0x5d, 0x21, 0x06, 0x21,
    0xeb, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0x0f,
];

/// Clamps 32 bytes of secret scalar material in place: clear the low three
/// bits, clear bit 255, set bit 254. Shared bit-exactly by X25519 scalar
/// decoding and Ed25519 secret expansion.
pub fn clamp(sk: &mut [u8; 32]) {
    sk[0] &= 248;
    sk[31] &= 127;
    sk[31] |= 64;
}

/// Widens 32 little-endian bytes into coefficient form. Does not reduce; a
/// clamped scalar stays a 255-bit integer here, never its mod-q residue.
pub fn from_bytes(x: &[u8; 32]) -> GroupScalar {
    let mut d = GroupScalar::default();
    for (a, b) in d.iter_mut().zip(x.iter()) {
        *a = *b as u16
    }
    d
}

/// Reduces a 64-byte little-endian value (e.g. a SHA-512 digest) mod q.
pub fn reduce_wide(x: &[u8; 64]) -> GroupScalar {
    let mut t = [0u32; 64];
    for (a, b) in t.iter_mut().zip(x.iter()) {
        *a = *b as u32
    }
    barrett_reduce(&t)
}

/// Narrows coefficient form back to 32 little-endian bytes.
pub fn to_bytes(r: &GroupScalar) -> [u8; 32] {
    let mut x = [0u8; 32];
    for (a, b) in r.iter().zip(x.iter_mut()) {
        *b = *a as u8;
    }
    x
}

/// True iff the 32-byte little-endian value is strictly below q. Verification
/// rejects signatures whose trailing scalar is non-canonical.
pub fn is_canonical(x: &[u8; 32]) -> bool {
    for i in (0..32).rev() {
        if (x[i] as u32) < M[i] {
            return true;
        }
        if (x[i] as u32) > M[i] {
            return false;
        }
    }
    // x == q
    false
}

/// x + y mod q. Inputs must already be reduced.
pub fn add(x: &GroupScalar, y: &GroupScalar) -> GroupScalar {
    let mut r = [0u16; 32];
    for ((a, &b), &c) in r.iter_mut().zip(x.iter()).zip(y.iter()) {
        *a = b.wrapping_add(c);
    }
    for i in 0..31 {
        let carry = r[i] >> 8;
        r[i + 1] = r[i + 1].wrapping_add(carry);
        r[i] &= 0xff;
    }
    reduce_add_sub(&mut r);
    r
}

/// x * y mod q. Inputs need not be reduced (a clamped 255-bit scalar is a
/// valid operand); the double-width product is Barrett-reduced.
pub fn mul(x: &GroupScalar, y: &GroupScalar) -> GroupScalar {
    let mut t = [0u32; 64];
    for i in 0..32 {
        for j in 0..32 {
            t[i + j] += x[i] as u32 * y[j] as u32;
        }
    }

    /* Reduce coefficients */
    for i in 0..63 {
        let carry = t[i] >> 8;
        t[i + 1] += carry;
        t[i] &= 0xff;
    }

    barrett_reduce(&t)
}

fn barrett_reduce(x: &[u32; 64]) -> GroupScalar {
    let mut r = GroupScalar::default();
    let mut q2 = [0u32; 66];
    let mut r1 = [0u32; 33];
    let mut r2 = [0u32; 33];
    let mut pb = 0;

    for i in 0..33 {
        for j in 0..33 {
            if i + j >= 31 {
                q2[i + j] += MU[i] * x[j + 31]
            }
        }
    }
    let carry = q2[31] >> 8;
    q2[32] += carry;
    let carry = q2[32] >> 8;
    q2[33] += carry;

    r1.copy_from_slice(&x[0..33]);
    for i in 0..32 {
        for j in 0..33 {
            if i + j < 33 {
                r2[i + j] += M[i] * q2[j + 33];
            }
        }
    }

    for i in 0..32 {
        let carry = r2[i] >> 8;
        r2[i + 1] += carry;
        r2[i] &= 0xff;
    }

    for i in 0..32 {
        pb += r2[i];
        let b = lt(r1[i], pb);
        r[i] = (r1[i].wrapping_sub(pb + (b << 8))) as u8 as u16;
        pb = b;
    }

    reduce_add_sub(&mut r);
    reduce_add_sub(&mut r);

    r
}

fn lt(a: u32, b: u32) -> u32 {
    let mut x = a;
    x = x.wrapping_sub(b); // 0..65535: no; 4294901761..4294967295: yes
    x >>= 31; // 0: no; 1: yes
    x
}

// Conditionally subtracts q once; coefficients of r must already be in bytes.
fn reduce_add_sub(r: &mut GroupScalar) {
    let mut pb = 0;
    let mut b = 0;
    let mut t = [0u8; 32];

    for i in 0..32 {
        pb += M[i];
        b = lt(r[i] as u32, pb);
        t[i] = ((r[i] as u32).wrapping_sub(pb + (b << 8))) as u8;
        pb = b;
    }

    let mask = b.wrapping_sub(1);

    for i in 0..32 {
        r[i] ^= (mask & (r[i] as u32 ^ t[i] as u32)) as u16;
    }
}

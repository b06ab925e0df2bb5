//! Point arithmetic on the twisted Edwards form of Curve25519
//! (-x^2 + y^2 = 1 + d*x^2*y^2), as used by Ed25519.

use std::sync::OnceLock;

use crate::errors::Error;
use crate::fe25519;
use crate::fe25519::Fe25519;

static BASE_POINT: OnceLock<Point> = OnceLock::new();

/// A curve point in extended projective coordinates (X, Y, Z, T), with
/// affine x = X/Z, y = Y/Z and the invariant x*y = T/Z.
///
/// Points are immutable; all operations return new points.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    x: Fe25519,
    y: Fe25519,
    z: Fe25519,
    t: Fe25519,
}

impl Point {
    /// Returns the neutral element, (0, 1, 1, 0).
    pub const fn neutral() -> Point {
        Point {
            x: fe25519::zero(),
            y: fe25519::one(),
            z: fe25519::one(),
            t: fe25519::zero(),
        }
    }

    /// Returns the base point G, with y = 4/5 and even x.
    ///
    /// Deriving G costs a field inversion and a square root, so it is
    /// computed once per process. `OnceLock` makes the write-once cache safe
    /// to race on; every thread would compute the identical point.
    pub fn base_point() -> &'static Point {
        BASE_POINT.get_or_init(|| {
            let five = [5, 0, 0, 0, 0];
            let g_y = fe25519::mul(&[4, 0, 0, 0, 0], &fe25519::invert(&five));
            let g_x = recover_x(&g_y, 0).unwrap_or_else(fe25519::zero);
            Point {
                x: g_x,
                y: g_y,
                z: fe25519::one(),
                t: fe25519::mul(&g_x, &g_y),
            }
        })
    }

    /// Adds two points with the unified extended-coordinates formula; valid
    /// for any pair, including P + P.
    pub fn add(&self, q: &Point) -> Point {
        let a = fe25519::mul(
            &fe25519::sub(&self.y, &self.x),
            &fe25519::sub(&q.y, &q.x),
        );
        let b = fe25519::mul(
            &fe25519::add(&self.y, &self.x),
            &fe25519::add(&q.y, &q.x),
        );
        let c = fe25519::mul(&fe25519::mul(&self.t, &q.t), &fe25519::D);
        let c = fe25519::add(&c, &c);
        let d = fe25519::mul(&self.z, &q.z);
        let d = fe25519::add(&d, &d);
        let e = fe25519::sub(&b, &a);
        let f = fe25519::sub(&d, &c);
        let g = fe25519::add(&d, &c);
        let h = fe25519::add(&b, &a);

        Point {
            x: fe25519::mul(&e, &f),
            y: fe25519::mul(&g, &h),
            z: fe25519::mul(&f, &g),
            t: fe25519::mul(&e, &h),
        }
    }

    /// Doubles a point with the dedicated formula; agrees with `add(P, P)`
    /// for every P but saves four multiplications.
    pub fn double(&self) -> Point {
        let a = fe25519::square(&self.x);
        let b = fe25519::square(&self.y);
        let zz = fe25519::square(&self.z);
        let c = fe25519::add(&zz, &zz);
        let h = fe25519::add(&a, &b);
        let xy = fe25519::add(&self.x, &self.y);
        let e = fe25519::sub(&h, &fe25519::square(&xy));
        let g = fe25519::sub(&a, &b);
        let f = fe25519::add(&c, &g);

        Point {
            x: fe25519::mul(&e, &f),
            y: fe25519::mul(&g, &h),
            z: fe25519::mul(&f, &g),
            t: fe25519::mul(&e, &h),
        }
    }

    /// Multiplies by a 32-byte little-endian scalar with binary
    /// double-and-add, least-significant bit first.
    ///
    /// Not constant-time: the scalars multiplied here are either public
    /// (verification) or blinded by the RFC 8032 signature structure. Do not
    /// reuse for bare secret scalars.
    pub fn scalar_mul(&self, s: &[u8; 32]) -> Point {
        let mut q = Point::neutral();
        let mut p = *self;
        for idx in 0..256 {
            if (s[idx >> 3] >> (idx & 7)) & 1 == 1 {
                q = q.add(&p);
            }
            p = p.double();
        }
        q
    }

    /// Compresses to the 32-byte encoding: the affine y-coordinate with the
    /// low bit of x packed into bit 255.
    pub fn compress(&self) -> [u8; 32] {
        let z_inv = fe25519::invert(&self.z);
        let x = fe25519::mul(&self.x, &z_inv);
        let y = fe25519::mul(&self.y, &z_inv);

        let mut s = fe25519::pack(&y);
        s[31] |= (fe25519::is_negative(&x) as u8) << 7;
        s
    }

    /// Decompresses a 32-byte encoding, returning `None` if the y-coordinate
    /// is non-canonical (>= p) or no matching x exists on the curve.
    pub fn decompress(s: &[u8; 32]) -> Option<Point> {
        let sign = s[31] >> 7;
        let y = fe25519::unpack(s);

        // unpack masks bit 255; a round-trip mismatch means y >= p
        let mut canonical = fe25519::pack(&y);
        canonical[31] |= sign << 7;
        if canonical != *s {
            return None;
        }

        let x = recover_x(&y, sign)?;
        Some(Point {
            x,
            y,
            z: fe25519::one(),
            t: fe25519::mul(&x, &y),
        })
    }

    /// Decodes a point encoding of any length, failing with
    /// [`Error::Decompression`] on a wrong-sized input and
    /// [`Error::InvalidPoint`] on a well-sized encoding that is not a curve
    /// point.
    pub fn decode(s: &[u8]) -> Result<Point, Error> {
        let s: &[u8; 32] = s.try_into().map_err(|_| Error::Decompression {
            expected: 32,
            got: s.len(),
        })?;
        Point::decompress(s).ok_or(Error::InvalidPoint)
    }
}

impl PartialEq for Point {
    /// Projective equality by cross-multiplication: X1/Z1 == X2/Z2 iff
    /// X1*Z2 == X2*Z1, and likewise for Y. Raw coordinates are never
    /// compared directly.
    fn eq(&self, other: &Point) -> bool {
        let x_eq = fe25519::eq(
            &fe25519::mul(&self.x, &other.z),
            &fe25519::mul(&other.x, &self.z),
        );
        let y_eq = fe25519::eq(
            &fe25519::mul(&self.y, &other.z),
            &fe25519::mul(&other.y, &self.z),
        );
        x_eq && y_eq
    }
}

impl Eq for Point {}

/// Solves the curve equation for x given y and the desired low bit of x:
/// x^2 = (y^2 - 1) / (d*y^2 + 1). Returns `None` if no root exists, or if
/// x would be zero while `sign` asks for the odd root.
fn recover_x(y: &Fe25519, sign: u8) -> Option<Fe25519> {
    let y2 = fe25519::square(y);
    let x2 = fe25519::mul(
        &fe25519::sub(&y2, &fe25519::one()),
        &fe25519::invert(&fe25519::add(&fe25519::mul(&fe25519::D, &y2), &fe25519::one())),
    );
    if fe25519::iszero(&x2) {
        return if sign == 1 { None } else { Some(fe25519::zero()) };
    }

    // candidate root x2^((p+3)/8); if x^2 == -x2 instead, twist by sqrt(-1)
    let mut x = fe25519::mul(&fe25519::pow2523(&x2), &x2);
    if !fe25519::eq(&fe25519::square(&x), &x2) {
        x = fe25519::mul(&x, &fe25519::SQRT_M1);
    }
    if !fe25519::eq(&fe25519::square(&x), &x2) {
        return None;
    }

    if fe25519::is_negative(&x) as u8 != sign {
        x = fe25519::neg(&x);
    }
    Some(x)
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use rand::{thread_rng, Rng};

    use super::*;

    fn random_point() -> Point {
        let s: [u8; 32] = thread_rng().gen();
        Point::base_point().scalar_mul(&s)
    }

    #[test]
    fn base_point_encoding() {
        // G = (x, 4/5) with even x; RFC 8032 fixes the encoding
        assert_eq!(
            Point::base_point().compress(),
            hex!("5866666666666666666666666666666666666666666666666666666666666666")
        );
    }

    #[test]
    fn neutral_is_identity() {
        let p = random_point();
        assert_eq!(p.add(&Point::neutral()), p);
        assert_eq!(Point::neutral().add(&p), p);
    }

    #[test]
    fn double_matches_add() {
        assert_eq!(
            Point::base_point().double(),
            Point::base_point().add(Point::base_point())
        );
        for _ in 0..20 {
            let p = random_point();
            assert_eq!(p.double(), p.add(&p));
        }
    }

    #[test]
    fn scalar_mul_matches_repeated_addition() {
        let p = random_point();
        let mut acc = Point::neutral();
        for n in 0u8..=16 {
            let mut s = [0u8; 32];
            s[0] = n;
            assert_eq!(p.scalar_mul(&s), acc);
            acc = acc.add(&p);
        }
    }

    #[test]
    fn compress_decompress_round_trip() {
        for _ in 0..20 {
            let p = random_point();
            let s = p.compress();
            let q = Point::decompress(&s).expect("valid encoding");
            assert_eq!(p, q);
            assert_eq!(s, q.compress());
        }
    }

    #[test]
    fn decompress_rejects_noncanonical_y() {
        // y = p, encoded with sign bit clear
        let s = hex!("edffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f");
        assert!(Point::decompress(&s).is_none());
    }

    #[test]
    fn decompress_rejects_non_residue() {
        // y = 2 gives x^2 with no square root
        let mut s = [0u8; 32];
        s[0] = 2;
        assert!(Point::decompress(&s).is_none());
    }

    #[test]
    fn decompress_rejects_signed_zero_x() {
        // y = 1 forces x = 0, whose odd root does not exist
        let mut s = [0u8; 32];
        s[0] = 1;
        assert!(Point::decompress(&s).is_some());
        s[31] |= 0x80;
        assert!(Point::decompress(&s).is_none());
    }

    #[test]
    fn decode_rejects_wrong_length() {
        assert_eq!(
            Point::decode(&[0u8; 50]),
            Err(Error::Decompression {
                expected: 32,
                got: 50
            })
        );
    }

    #[test]
    fn decode_rejects_invalid_point() {
        let mut s = [0u8; 32];
        s[0] = 2;
        assert_eq!(Point::decode(&s), Err(Error::InvalidPoint));
    }
}

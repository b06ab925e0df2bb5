//! The Ed25519 signature scheme, per RFC 8032.

use sha2::{Digest, Sha512};
use zeroize::Zeroize;

use crate::edwards::Point;
use crate::errors::Error;
use crate::scalar;
use crate::scalar::GroupScalar;

/// Byte length of secret keys, public keys and signature halves.
pub const KEY_LEN: usize = 32;

/// Byte length of a signature, `R || t`.
pub const SIG_LEN: usize = 64;

fn sha512(parts: &[&[u8]]) -> [u8; 64] {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

// H(parts) interpreted as a little-endian integer and reduced mod q.
fn sha512_mod_q(parts: &[&[u8]]) -> GroupScalar {
    let mut h = sha512(parts);
    let r = scalar::reduce_wide(&h);
    h.zeroize();
    r
}

/// Expands a 32-byte secret into its signing scalar and nonce prefix:
/// SHA-512 the secret, clamp the first half, keep the second half verbatim.
pub fn secret_expand(secret: &[u8; 32]) -> ([u8; 32], [u8; 32]) {
    let mut h = sha512(&[secret]);

    let mut s = [0u8; 32];
    s.copy_from_slice(&h[..32]);
    scalar::clamp(&mut s);

    let mut prefix = [0u8; 32];
    prefix.copy_from_slice(&h[32..]);
    h.zeroize();

    (s, prefix)
}

/// Given a secret key, returns the compressed public key `[s]G`.
pub fn secret_to_public(secret: &[u8; 32]) -> [u8; 32] {
    let (mut s, mut prefix) = secret_expand(secret);
    let pk = Point::base_point().scalar_mul(&s).compress();
    s.zeroize();
    prefix.zeroize();
    pk
}

/// Signs a message, deterministically: the same secret and message always
/// produce the same 64-byte signature `R || t`.
pub fn sign(secret: &[u8; 32], m: &[u8]) -> [u8; 64] {
    let (mut s, mut prefix) = secret_expand(secret);
    let g = Point::base_point();
    let pk = g.scalar_mul(&s).compress();

    let r = sha512_mod_q(&[&prefix, m]);
    prefix.zeroize();
    let r_enc = g.scalar_mul(&scalar::to_bytes(&r)).compress();

    let k = sha512_mod_q(&[&r_enc, &pk, m]);
    let t = scalar::add(&r, &scalar::mul(&k, &scalar::from_bytes(&s)));
    s.zeroize();

    let mut sig = [0u8; 64];
    sig[..32].copy_from_slice(&r_enc);
    sig[32..].copy_from_slice(&scalar::to_bytes(&t));
    sig
}

/// Verifies a signature over a message.
///
/// Returns `Ok(false)` for every cryptographically invalid signature on
/// well-formed inputs: an undecodable public key or R component, a
/// non-canonical trailing scalar (t >= q), or a failed group equation.
/// Errors are reserved for malformed lengths.
pub fn verify(public: &[u8], m: &[u8], sig: &[u8]) -> Result<bool, Error> {
    let pk_bytes: [u8; 32] = public.try_into().map_err(|_| Error::BadKeyLength {
        expected: KEY_LEN,
        got: public.len(),
    })?;
    if sig.len() != SIG_LEN {
        return Err(Error::BadSignatureLength {
            expected: SIG_LEN,
            got: sig.len(),
        });
    }

    let a = match Point::decompress(&pk_bytes) {
        Some(a) => a,
        None => return Ok(false),
    };

    let mut r_bytes = [0u8; 32];
    r_bytes.copy_from_slice(&sig[..32]);
    let r = match Point::decompress(&r_bytes) {
        Some(r) => r,
        None => return Ok(false),
    };

    let mut t_bytes = [0u8; 32];
    t_bytes.copy_from_slice(&sig[32..]);
    if !scalar::is_canonical(&t_bytes) {
        return Ok(false);
    }

    let k = sha512_mod_q(&[&r_bytes, public, m]);

    // [t]G == R + [k]A
    let lhs = Point::base_point().scalar_mul(&t_bytes);
    let rhs = r.add(&a.scalar_mul(&scalar::to_bytes(&k)));
    Ok(lhs == rhs)
}

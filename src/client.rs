//! Ergonomic wrappers holding validated key material.
//!
//! The clients accept secrets as hex strings, raw bytes or small integers
//! (see [`DecodeInput`]), derive and cache the public key at construction,
//! and delegate the arithmetic to [`crate::ed25519`] and [`crate::x25519`].

use rand_core::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::codec;
use crate::codec::DecodeInput;
use crate::ed25519;
use crate::errors::Error;
use crate::x25519;

/// An Ed25519 key pair: a 32-byte secret and its compressed public point.
#[derive(Debug)]
pub struct Ed25519Client {
    secret: [u8; 32],
    public: [u8; 32],
}

impl Ed25519Client {
    /// Creates a client from secret key material, deriving the public key.
    pub fn new<'a>(secret: impl Into<DecodeInput<'a>>) -> Result<Ed25519Client, Error> {
        let b = codec::normalize(secret.into())?;
        let secret: [u8; 32] = b.as_slice().try_into().map_err(|_| Error::BadKeyLength {
            expected: ed25519::KEY_LEN,
            got: b.len(),
        })?;

        let public = ed25519::secret_to_public(&secret);
        Ok(Ed25519Client { secret, public })
    }

    /// Creates a client with a freshly generated random secret.
    pub fn generate(mut rng: impl RngCore + CryptoRng) -> Ed25519Client {
        let mut secret = [0u8; 32];
        rng.fill_bytes(&mut secret);

        let public = ed25519::secret_to_public(&secret);
        Ed25519Client { secret, public }
    }

    /// Returns the compressed public key.
    pub fn public(&self) -> &[u8; 32] {
        &self.public
    }

    /// Returns the compressed public key as a hex string.
    pub fn public_hex(&self) -> String {
        hex::encode(self.public)
    }

    /// Signs a message with this client's secret key.
    pub fn sign(&self, m: &[u8]) -> [u8; 64] {
        ed25519::sign(&self.secret, m)
    }

    /// Verifies a signature over a message against this client's public key.
    pub fn verify(&self, m: &[u8], sig: &[u8]) -> Result<bool, Error> {
        ed25519::verify(&self.public, m, sig)
    }
}

impl Drop for Ed25519Client {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

/// An X25519 key pair: a 32-byte secret scalar and the u-coordinate of its
/// public point.
#[derive(Debug)]
pub struct X25519Client {
    secret: [u8; 32],
    public: [u8; 32],
}

impl X25519Client {
    /// Creates a client from secret scalar material, deriving the public key
    /// from the standard base point.
    pub fn new<'a>(secret: impl Into<DecodeInput<'a>>) -> Result<X25519Client, Error> {
        let secret = codec::decode_bytes(secret.into())?;
        let public = x25519::public_key(&secret);
        Ok(X25519Client { secret, public })
    }

    /// Creates a client with a freshly generated random secret.
    pub fn generate(mut rng: impl RngCore + CryptoRng) -> X25519Client {
        let mut secret = [0u8; 32];
        rng.fill_bytes(&mut secret);

        let public = x25519::public_key(&secret);
        X25519Client { secret, public }
    }

    /// Returns the public u-coordinate.
    pub fn public(&self) -> &[u8; 32] {
        &self.public
    }

    /// Returns the public u-coordinate as a hex string.
    pub fn public_hex(&self) -> String {
        hex::encode(self.public)
    }

    /// Computes the shared secret with another party's public key.
    ///
    /// The result is returned as-is, even when a low-order public key forces
    /// it to the all-zero string; use [`X25519Client::shared_secret_strict`]
    /// to reject that case.
    pub fn shared_secret<'a>(&self, pk: impl Into<DecodeInput<'a>>) -> Result<[u8; 32], Error> {
        let pk = codec::decode_bytes(pk.into())?;
        Ok(x25519::x25519(&self.secret, &pk))
    }

    /// Computes the shared secret, failing with [`Error::ZeroSharedSecret`]
    /// if the result is all-zero (a low-order public key was supplied).
    pub fn shared_secret_strict<'a>(
        &self,
        pk: impl Into<DecodeInput<'a>>,
    ) -> Result<[u8; 32], Error> {
        let ss = self.shared_secret(pk)?;
        if ss.ct_eq(&[0u8; 32]).into() {
            return Err(Error::ZeroSharedSecret);
        }
        Ok(ss)
    }
}

impl Drop for X25519Client {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use rand::thread_rng;

    use super::*;

    #[test]
    fn ed25519_round_trip() {
        let alice = Ed25519Client::generate(thread_rng());
        let message = b"this is a message";
        let sig = alice.sign(message);

        assert_eq!(alice.verify(message, &sig), Ok(true));
        assert_eq!(alice.verify(b"this is a different message", &sig), Ok(false));

        let mallory = Ed25519Client::generate(thread_rng());
        assert_eq!(mallory.verify(message, &sig), Ok(false));
    }

    #[test]
    fn ed25519_accepts_hex_secrets() {
        let client =
            Ed25519Client::new("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60")
                .expect("valid secret");
        assert_eq!(
            client.public(),
            &hex!("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a")
        );
        assert_eq!(
            client.public_hex(),
            "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a"
        );
    }

    #[test]
    fn ed25519_rejects_short_secrets() {
        let b = [7u8; 31];
        assert!(matches!(
            Ed25519Client::new(&b[..]),
            Err(Error::BadKeyLength {
                expected: 32,
                got: 31
            })
        ));
    }

    #[test]
    fn x25519_agreement() {
        let alice = X25519Client::generate(thread_rng());
        let bob = X25519Client::generate(thread_rng());

        let ss_a = alice.shared_secret(bob.public()).expect("valid key");
        let ss_b = bob.shared_secret(alice.public()).expect("valid key");
        assert_eq!(ss_a, ss_b);
    }

    #[test]
    fn x25519_accepts_hex_keys() {
        let alice =
            X25519Client::new("77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a")
                .expect("valid secret");
        assert_eq!(
            alice.public(),
            &hex!("8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a")
        );

        let ss = alice
            .shared_secret("de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f")
            .expect("valid key");
        assert_eq!(
            ss,
            hex!("4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742")
        );
    }

    #[test]
    fn x25519_rejects_oversized_keys() {
        let b = [7u8; 44];
        assert!(matches!(
            X25519Client::new(&b[..]),
            Err(Error::BadScalarLength {
                expected: 32,
                got: 44
            })
        ));
    }

    #[test]
    fn strict_mode_rejects_zero_shared_secret() {
        let alice = X25519Client::generate(thread_rng());

        // u = 0 lies in the small subgroup and forces an all-zero secret
        let ss = alice.shared_secret(0u128).expect("plain mode passes zeros");
        assert_eq!(ss, [0u8; 32]);
        assert_eq!(
            alice.shared_secret_strict(0u128),
            Err(Error::ZeroSharedSecret)
        );
    }

    #[test]
    fn strict_mode_passes_ordinary_keys() {
        let alice = X25519Client::generate(thread_rng());
        let bob = X25519Client::generate(thread_rng());
        assert!(alice.shared_secret_strict(bob.public()).is_ok());
    }
}

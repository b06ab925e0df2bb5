//! curve25519-kit is a small, portable, from-scratch implementation of the
//! [Ed25519](https://www.rfc-editor.org/rfc/rfc8032) signature scheme and the
//! [X25519](https://www.rfc-editor.org/rfc/rfc7748) key agreement function
//! over Curve25519.
//!
//! Field arithmetic is backed by fiat-crypto's formally verified Curve25519
//! operations; scalar multiplication on the Montgomery curve uses a
//! constant-time ladder. Malformed inputs (wrong lengths, bad hex,
//! undecodable points) are reported as [`Error`]; an invalid signature is
//! reported as `false`, never as an error.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use crate::client::{Ed25519Client, X25519Client};
pub use crate::codec::DecodeInput;
pub use crate::edwards::Point;
pub use crate::errors::Error;

pub mod ed25519;
pub mod x25519;

mod client;
mod codec;
mod edwards;
mod errors;
mod fe25519;
mod scalar;

#[cfg(test)]
mod tests {
    use rand::{thread_rng, Rng};

    use super::*;

    #[test]
    fn ed25519_and_x25519_share_key_material() {
        // a 32-byte secret works for both schemes independently
        let secret: [u8; 32] = thread_rng().gen();

        let signer = Ed25519Client::new(&secret[..]).expect("valid secret");
        let sig = signer.sign(b"hello");
        assert_eq!(signer.verify(b"hello", &sig), Ok(true));

        let dh = X25519Client::new(&secret[..]).expect("valid secret");
        let peer = X25519Client::generate(thread_rng());
        assert_eq!(
            dh.shared_secret(peer.public()).expect("valid key"),
            peer.shared_secret(dh.public()).expect("valid key"),
        );
    }
}

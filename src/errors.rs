//! Error types for malformed inputs.
//!
//! Malformed input (wrong lengths, bad hex, undecodable points) is reported
//! through [`Error`]; a cryptographically invalid signature is not an error
//! and is reported as `false` from verification. Keeping the two channels
//! separate means a length bug can never masquerade as "signature invalid".

use thiserror::Error;

/// A failure to decode or validate caller-supplied key material.
///
/// All variants are synchronous, non-retryable input errors: retrying with
/// the same bytes cannot succeed.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// A key whose length, after normalization, is not exactly 32 bytes.
    #[error("bad key length, expected {expected} bytes but got {got}")]
    BadKeyLength {
        /// The required length in bytes.
        expected: usize,
        /// The length of the rejected input.
        got: usize,
    },

    /// A signature whose length is not exactly 64 bytes.
    #[error("bad signature length, expected {expected} bytes but got {got}")]
    BadSignatureLength {
        /// The required length in bytes.
        expected: usize,
        /// The length of the rejected input.
        got: usize,
    },

    /// A scalar or u-coordinate whose length is not exactly 32 bytes.
    #[error("invalid scalar/u-coordinate, expected {expected} bytes but got {got}")]
    BadScalarLength {
        /// The required length in bytes.
        expected: usize,
        /// The length of the rejected input.
        got: usize,
    },

    /// A point encoding of the wrong size.
    #[error("error decompressing, expected {expected} bytes but got {got}")]
    Decompression {
        /// The required length in bytes.
        expected: usize,
        /// The length of the rejected input.
        got: usize,
    },

    /// A 32-byte encoding which does not correspond to a point on the curve.
    #[error("invalid point encoding")]
    InvalidPoint,

    /// A textual input which is not valid hex.
    #[error("invalid hex encoding")]
    InvalidHex(#[from] hex::FromHexError),

    /// An X25519 shared secret equal to the all-zero string, produced by a
    /// low-order public key. Only raised in strict mode.
    #[error("all-zero shared secret")]
    ZeroSharedSecret,
}

//! Normalization of caller-supplied key material into fixed 32-byte form.
//!
//! Keys, scalars and u-coordinates arrive as hex strings, raw byte slices or
//! small integers; each shape is one variant of [`DecodeInput`] with its own
//! explicit conversion. Length validation is strict: nothing is truncated or
//! zero-padded on the byte paths.

use crate::errors::Error;

/// Expected byte length of keys, scalars and u-coordinates.
pub const KEY_LEN: usize = 32;

/// One piece of 32-byte key material in any of its accepted shapes.
#[derive(Clone, Copy, Debug)]
pub enum DecodeInput<'a> {
    /// A hex string (any case) encoding exactly 32 bytes.
    Hex(&'a str),
    /// A raw byte slice of exactly 32 bytes.
    Raw(&'a [u8]),
    /// A small non-negative integer, little-endian encoded into 32 bytes.
    /// `u128` always fits, so this variant cannot fail.
    Int(u128),
}

impl<'a> From<&'a str> for DecodeInput<'a> {
    fn from(s: &'a str) -> Self {
        DecodeInput::Hex(s)
    }
}

impl<'a> From<&'a [u8]> for DecodeInput<'a> {
    fn from(b: &'a [u8]) -> Self {
        DecodeInput::Raw(b)
    }
}

impl<'a> From<&'a [u8; 32]> for DecodeInput<'a> {
    fn from(b: &'a [u8; 32]) -> Self {
        DecodeInput::Raw(b)
    }
}

impl From<u128> for DecodeInput<'_> {
    fn from(n: u128) -> Self {
        DecodeInput::Int(n)
    }
}

/// Normalizes an input to its canonical byte form without validating length.
/// Hex failures surface here; length policy belongs to the caller, which
/// knows whether the bytes are a key, a scalar or a signature half.
pub fn normalize(input: DecodeInput<'_>) -> Result<Vec<u8>, Error> {
    match input {
        DecodeInput::Hex(s) => Ok(hex::decode(s)?),
        DecodeInput::Raw(b) => Ok(b.to_vec()),
        DecodeInput::Int(n) => {
            let mut out = vec![0u8; KEY_LEN];
            out[..16].copy_from_slice(&n.to_le_bytes());
            Ok(out)
        }
    }
}

/// Decodes an input to exactly 32 bytes, failing with
/// [`Error::BadScalarLength`] otherwise.
pub fn decode_bytes(input: DecodeInput<'_>) -> Result<[u8; 32], Error> {
    let b = normalize(input)?;
    b.as_slice().try_into().map_err(|_| Error::BadScalarLength {
        expected: KEY_LEN,
        got: b.len(),
    })
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn hex_round_trip() {
        let b = decode_bytes(DecodeInput::Hex(
            "a546e36bf0527c9d3b16154b82465edd62144c0ac1fc5a18506a2244ba449ac4",
        ))
        .expect("valid hex");
        assert_eq!(
            b,
            hex!("a546e36bf0527c9d3b16154b82465edd62144c0ac1fc5a18506a2244ba449ac4")
        );
    }

    #[test]
    fn hex_is_case_insensitive() {
        let lower = decode_bytes(DecodeInput::Hex(
            "e6db6867583030db3594c1a424b15f7c726624ec26b3353b10a903a6d0ab1c4c",
        ))
        .expect("valid hex");
        let upper = decode_bytes(DecodeInput::Hex(
            "E6DB6867583030DB3594C1A424B15F7C726624EC26B3353B10A903A6D0AB1C4C",
        ))
        .expect("valid hex");
        assert_eq!(lower, upper);
    }

    #[test]
    fn wrong_length_is_rejected() {
        let buf = [7u8; 44];
        assert_eq!(
            decode_bytes(DecodeInput::Raw(&buf)),
            Err(Error::BadScalarLength {
                expected: 32,
                got: 44
            })
        );
        assert_eq!(
            decode_bytes(DecodeInput::Hex("09ab")),
            Err(Error::BadScalarLength {
                expected: 32,
                got: 2
            })
        );
    }

    #[test]
    fn invalid_hex_is_rejected() {
        assert!(matches!(
            decode_bytes(DecodeInput::Hex("zz")),
            Err(Error::InvalidHex(_))
        ));
    }

    #[test]
    fn int_is_little_endian_and_padded() {
        let b = decode_bytes(DecodeInput::Int(9)).expect("int always fits");
        let mut expected = [0u8; 32];
        expected[0] = 9;
        assert_eq!(b, expected);
    }
}

//! Fixed-width encodings of group elements and scalars.
//!
//! Points use the compressed Zcash/Ethereum format (48 bytes in G1, 96 bytes
//! in G2). Decoding goes through `bls12_381`, which rejects points that are
//! off the curve or outside the prime-order subgroup, so every point handed
//! to the protocol engine has already been validated here. Scalars are 32
//! bytes big-endian and must be canonical (less than the group order).
use crate::error::{Result, VessError};
use bls::{G1Affine, G2Affine, Scalar};

pub const G1_BYTES: usize = 48;
pub const G2_BYTES: usize = 96;
pub const SCALAR_BYTES: usize = 32;

pub fn g1_to_bytes(point: &G1Affine) -> [u8; G1_BYTES] {
    point.to_compressed()
}

pub fn g1_from_bytes(bytes: &[u8]) -> Result<G1Affine> {
    let bytes: &[u8; G1_BYTES] = bytes
        .try_into()
        .map_err(|_| length_error("G1 point", G1_BYTES, bytes.len()))?;
    Option::from(G1Affine::from_compressed(bytes))
        .ok_or_else(|| VessError::MalformedInput("invalid G1 point".to_string()))
}

pub fn g2_to_bytes(point: &G2Affine) -> [u8; G2_BYTES] {
    point.to_compressed()
}

pub fn g2_from_bytes(bytes: &[u8]) -> Result<G2Affine> {
    let bytes: &[u8; G2_BYTES] = bytes
        .try_into()
        .map_err(|_| length_error("G2 point", G2_BYTES, bytes.len()))?;
    Option::from(G2Affine::from_compressed(bytes))
        .ok_or_else(|| VessError::MalformedInput("invalid G2 point".to_string()))
}

pub fn scalar_to_bytes(scalar: &Scalar) -> [u8; SCALAR_BYTES] {
    let mut bytes = scalar.to_bytes();
    bytes.reverse();
    bytes
}

pub fn scalar_from_bytes(bytes: &[u8]) -> Result<Scalar> {
    let mut le: [u8; SCALAR_BYTES] = bytes
        .try_into()
        .map_err(|_| length_error("scalar", SCALAR_BYTES, bytes.len()))?;
    le.reverse();
    Option::from(Scalar::from_bytes(&le))
        .ok_or_else(|| VessError::MalformedInput("non-canonical scalar".to_string()))
}

fn length_error(what: &str, expected: usize, got: usize) -> VessError {
    VessError::MalformedInput(format!("{} must be {} bytes, got {}", what, expected, got))
}

macro_rules! hex_serde {
    ($name: ident, $t: ty, $to_bytes: ident, $from_bytes: ident) => {
        pub mod $name {
            use serde::{de::Error, Deserialize, Deserializer, Serializer};

            pub fn serialize<S>(value: &$t, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&hex::encode(super::$to_bytes(value)))
            }

            pub fn deserialize<'de, D>(deserializer: D) -> Result<$t, D::Error>
            where
                D: Deserializer<'de>,
            {
                let encoded = String::deserialize(deserializer)?;
                let bytes =
                    hex::decode(encoded.trim_start_matches("0x")).map_err(D::Error::custom)?;
                super::$from_bytes(&bytes).map_err(D::Error::custom)
            }
        }
    };
}

hex_serde!(g1_hex, bls::G1Affine, g1_to_bytes, g1_from_bytes);
hex_serde!(g2_hex, bls::G2Affine, g2_to_bytes, g2_from_bytes);
hex_serde!(scalar_hex, bls::Scalar, scalar_to_bytes, scalar_from_bytes);

#[cfg(test)]
mod test {
    use super::*;
    use ff::Field;
    use rand_core::OsRng;

    #[test]
    fn scalar_is_big_endian() {
        let bytes = scalar_to_bytes(&Scalar::from(0x0102_u64));
        assert_eq!(bytes[SCALAR_BYTES - 2..], [0x01, 0x02]);
        assert!(bytes[..SCALAR_BYTES - 2].iter().all(|&b| b == 0));

        let scalar = Scalar::random(OsRng);
        assert_eq!(scalar_from_bytes(&scalar_to_bytes(&scalar)).unwrap(), scalar);
    }

    #[test]
    fn non_canonical_scalar_rejected() {
        assert!(matches!(
            scalar_from_bytes(&[0xff; SCALAR_BYTES]),
            Err(VessError::MalformedInput(_))
        ));
        assert!(matches!(
            scalar_from_bytes(&[0x01; 31]),
            Err(VessError::MalformedInput(_))
        ));
    }

    #[test]
    fn invalid_points_rejected() {
        assert!(g1_from_bytes(&[0u8; G1_BYTES]).is_err());
        assert!(g2_from_bytes(&[0u8; G2_BYTES]).is_err());
        assert!(g2_from_bytes(&[0u8; G1_BYTES]).is_err());

        // infinity flag set on a non-zero x coordinate
        let mut bytes = g2_to_bytes(&G2Affine::generator());
        bytes[0] |= 0x40;
        assert!(g2_from_bytes(&bytes).is_err());

        let generator = G2Affine::generator();
        assert_eq!(g2_from_bytes(&g2_to_bytes(&generator)).unwrap(), generator);
        let generator = G1Affine::generator();
        assert_eq!(g1_from_bytes(&g1_to_bytes(&generator)).unwrap(), generator);
    }
}

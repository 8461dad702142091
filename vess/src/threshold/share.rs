use crate::encoding::{self, G2_BYTES, SCALAR_BYTES};
use crate::error::{Result, VessError};
use bls::{G1Affine, G2Affine, Scalar};
use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::Zeroize;

const INDEX_BYTES: usize = 8;

fn index_from_bytes(bytes: &[u8]) -> Result<u64> {
    let mut index = [0u8; INDEX_BYTES];
    index.copy_from_slice(&bytes[..INDEX_BYTES]);
    match u64::from_be_bytes(index) {
        0 => Err(zero_index()),
        index => Ok(index),
    }
}

fn zero_index() -> VessError {
    VessError::MalformedInput("share index 0".to_string())
}

/// A shareholder's evaluation of the dealing polynomial at `index`.
///
/// `Debug` only prints the index, the value is secret.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawShare")]
pub struct Share {
    index: u64,
    #[serde(with = "encoding::scalar_hex")]
    value: Scalar,
}

#[derive(Deserialize)]
struct RawShare {
    index: u64,
    #[serde(with = "encoding::scalar_hex")]
    value: Scalar,
}

impl Drop for RawShare {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

impl TryFrom<RawShare> for Share {
    type Error = VessError;
    fn try_from(raw: RawShare) -> Result<Self> {
        if raw.index == 0 {
            return Err(zero_index());
        }
        Ok(Self::new(raw.index, raw.value))
    }
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl Share {
    pub const BYTES: usize = INDEX_BYTES + SCALAR_BYTES;

    pub(crate) fn new(index: u64, value: Scalar) -> Self {
        Self { index, value }
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn value(&self) -> &Scalar {
        &self.value
    }

    /// Public commitment to the share, `value · g1`.
    pub fn verification_key(&self) -> G1Affine {
        G1Affine::from(G1Affine::generator() * self.value)
    }

    /// Computes this shareholder's contribution `value · mu`.
    pub fn partial_decrypt(&self, mu: &G2Affine) -> PartialDecryption {
        PartialDecryption {
            index: self.index,
            value: G2Affine::from(mu * self.value),
        }
    }

    pub fn to_bytes(&self) -> [u8; Self::BYTES] {
        let mut bytes = [0u8; Self::BYTES];
        bytes[..INDEX_BYTES].copy_from_slice(&self.index.to_be_bytes());
        bytes[INDEX_BYTES..].copy_from_slice(&encoding::scalar_to_bytes(&self.value));
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::BYTES {
            return Err(VessError::MalformedInput(format!(
                "share must be {} bytes, got {}",
                Self::BYTES,
                bytes.len()
            )));
        }
        Ok(Self {
            index: index_from_bytes(bytes)?,
            value: encoding::scalar_from_bytes(&bytes[INDEX_BYTES..])?,
        })
    }
}

impl Drop for Share {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

/// `mu` raised to a single share, tagged with the share index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPartialDecryption")]
pub struct PartialDecryption {
    pub index: u64,
    #[serde(with = "encoding::g2_hex")]
    pub value: G2Affine,
}

#[derive(Deserialize)]
struct RawPartialDecryption {
    index: u64,
    #[serde(with = "encoding::g2_hex")]
    value: G2Affine,
}

impl TryFrom<RawPartialDecryption> for PartialDecryption {
    type Error = VessError;
    fn try_from(raw: RawPartialDecryption) -> Result<Self> {
        if raw.index == 0 {
            return Err(zero_index());
        }
        Ok(Self {
            index: raw.index,
            value: raw.value,
        })
    }
}

impl PartialDecryption {
    pub const BYTES: usize = INDEX_BYTES + G2_BYTES;

    pub fn to_bytes(&self) -> [u8; Self::BYTES] {
        let mut bytes = [0u8; Self::BYTES];
        bytes[..INDEX_BYTES].copy_from_slice(&self.index.to_be_bytes());
        bytes[INDEX_BYTES..].copy_from_slice(&encoding::g2_to_bytes(&self.value));
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::BYTES {
            return Err(VessError::MalformedInput(format!(
                "partial decryption must be {} bytes, got {}",
                Self::BYTES,
                bytes.len()
            )));
        }
        Ok(Self {
            index: index_from_bytes(bytes)?,
            value: encoding::g2_from_bytes(&bytes[INDEX_BYTES..])?,
        })
    }
}

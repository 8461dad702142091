use crate::encoding::{self, G2_BYTES};
use crate::error::Result;
use bls::{G2Affine, G2Projective};
use serde::{Deserialize, Serialize};

/// Plain BLS signature, a point in G2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature(#[serde(with = "encoding::g2_hex")] G2Affine);

impl Signature {
    pub fn new(sig: G2Affine) -> Self {
        Self(sig)
    }

    pub fn inner(&self) -> &G2Affine {
        &self.0
    }

    pub fn to_bytes(&self) -> [u8; G2_BYTES] {
        encoding::g2_to_bytes(&self.0)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        encoding::g2_from_bytes(bytes).map(Self)
    }
}

impl From<G2Affine> for Signature {
    fn from(sig: G2Affine) -> Self {
        Self(sig)
    }
}

impl From<G2Projective> for Signature {
    fn from(sig: G2Projective) -> Self {
        Self(sig.into())
    }
}

/// Verifiably encrypted signature $(\omega, \mu)$ with
/// $\omega = \sigma + r \cdot v'$ and $\mu = r \cdot g_2$.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VesSignature {
    #[serde(with = "encoding::g2_hex")]
    pub omega: G2Affine,
    #[serde(with = "encoding::g2_hex")]
    pub mu: G2Affine,
}

impl VesSignature {
    pub const BYTES: usize = 2 * G2_BYTES;

    pub fn to_bytes(&self) -> [u8; Self::BYTES] {
        let mut bytes = [0u8; Self::BYTES];
        bytes[..G2_BYTES].copy_from_slice(&encoding::g2_to_bytes(&self.omega));
        bytes[G2_BYTES..].copy_from_slice(&encoding::g2_to_bytes(&self.mu));
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::BYTES {
            return Err(crate::error::VessError::MalformedInput(format!(
                "encrypted signature must be {} bytes, got {}",
                Self::BYTES,
                bytes.len()
            )));
        }
        Ok(Self {
            omega: encoding::g2_from_bytes(&bytes[..G2_BYTES])?,
            mu: encoding::g2_from_bytes(&bytes[G2_BYTES..])?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bls::Scalar;

    fn ves_signature() -> VesSignature {
        VesSignature {
            omega: G2Affine::from(G2Affine::generator() * Scalar::from(3_u64)),
            mu: G2Affine::from(G2Affine::generator() * Scalar::from(5_u64)),
        }
    }

    #[test]
    fn ves_signature_bytes() {
        let ves = ves_signature();
        let bytes = ves.to_bytes();
        assert_eq!(VesSignature::from_bytes(&bytes).unwrap(), ves);
        assert!(VesSignature::from_bytes(&bytes[1..]).is_err());

        let mut swapped = [0u8; VesSignature::BYTES];
        swapped[..G2_BYTES].copy_from_slice(&bytes[G2_BYTES..]);
        swapped[G2_BYTES..].copy_from_slice(&bytes[..G2_BYTES]);
        assert_ne!(VesSignature::from_bytes(&swapped).unwrap(), ves);
    }

    #[test]
    fn serde_hex() {
        let ves = ves_signature();
        let json = serde_json::to_string(&ves).unwrap();
        assert!(json.contains(&hex::encode(ves.mu.to_compressed())));
        let decoded: VesSignature = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, ves);

        let sig = Signature::new(ves.omega);
        let json = serde_json::to_string(&sig).unwrap();
        let decoded: Signature = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, sig);

        let garbage = format!(
            "{{\"omega\":\"{}\",\"mu\":\"00\"}}",
            hex::encode(ves.omega.to_compressed())
        );
        assert!(serde_json::from_str::<VesSignature>(&garbage).is_err());
    }
}

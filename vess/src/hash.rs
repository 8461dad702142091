use bls::hash_to_curve::{ExpandMsgXmd, HashToCurve, HashToField};
use bls::{G2Affine, G2Projective, Scalar};
use sha2::Sha256;
use sha3::{Digest, Sha3_384};

/// Ethereum proof-of-possession ciphersuite (public keys in G1, signatures in G2).
pub const ETH_POP_DST: &str = "BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";
// NOTE only used to expand seed material into secret keys
const KEYGEN_DST: &[u8] = b"VESS-BLS12381-KEYGEN-SHA3-384";

pub fn hash_to_g2(msg: &[u8], dst: &[u8]) -> G2Affine {
    let g2 = <G2Projective as HashToCurve<ExpandMsgXmd<Sha256>>>::hash_to_curve(msg, dst);
    G2Affine::from(g2)
}

pub fn hash_to_scalar(msg: &[u8]) -> Scalar {
    let mut hasher = Sha3_384::new();
    hasher.update(KEYGEN_DST);
    hasher.update(msg);
    Scalar::from_okm(&hasher.finalize())
}

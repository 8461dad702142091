use crate::error::{Result, VessError};
use crate::hash::hash_to_scalar;
use crate::rng::random_scalar;
use bls::{G1Affine, G2Affine, Scalar};
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

const MIN_SEED_LEN: usize = 32;

fn check_privkey(privkey: &Scalar) -> Result<()> {
    if *privkey == Scalar::zero() {
        Err(VessError::MalformedInput("zero secret key".to_string()))
    } else {
        Ok(())
    }
}

fn privkey_from_seed(seed: &[u8]) -> Result<Scalar> {
    if seed.len() < MIN_SEED_LEN {
        return Err(VessError::MalformedInput(format!(
            "seed must be at least {} bytes, got {}",
            MIN_SEED_LEN,
            seed.len()
        )));
    }
    Ok(hash_to_scalar(seed))
}

/// Signer key material. Public keys live in G1, signatures in G2.
pub struct Keypair {
    privkey: Scalar,
    pubkey: G1Affine,
}

impl Keypair {
    pub fn new(privkey: Scalar) -> Result<Self> {
        check_privkey(&privkey)?;
        Ok(Self {
            privkey,
            pubkey: G1Affine::from(G1Affine::generator() * privkey),
        })
    }

    pub fn new_checked(privkey: Scalar, pubkey: G1Affine) -> Result<Self> {
        let keypair = Self::new(privkey)?;
        if keypair.pubkey != pubkey {
            return Err(VessError::MalformedInput(
                "pubkey-privkey mismatch".to_string(),
            ));
        }
        Ok(keypair)
    }

    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        Self::new(random_scalar(rng)?)
    }

    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        Self::new(privkey_from_seed(seed)?)
    }

    pub fn pubkey(&self) -> G1Affine {
        self.pubkey
    }

    pub fn privkey(&self) -> &Scalar {
        &self.privkey
    }
}

impl Drop for Keypair {
    fn drop(&mut self) {
        self.privkey.zeroize();
    }
}

/// Adjudicator key material.
///
/// On a Type-3 curve there is no efficient map between G1 and G2, so the
/// public key is published in both groups: the G1 copy enters the
/// verification equation, the G2 copy blinds signatures during encryption.
pub struct AdjudicatorKeypair {
    privkey: Scalar,
    pubkey_g1: G1Affine,
    pubkey_g2: G2Affine,
}

impl AdjudicatorKeypair {
    pub fn new(privkey: Scalar) -> Result<Self> {
        check_privkey(&privkey)?;
        Ok(Self {
            privkey,
            pubkey_g1: G1Affine::from(G1Affine::generator() * privkey),
            pubkey_g2: G2Affine::from(G2Affine::generator() * privkey),
        })
    }

    pub fn new_checked(privkey: Scalar, pubkey_g1: G1Affine, pubkey_g2: G2Affine) -> Result<Self> {
        let keypair = Self::new(privkey)?;
        if keypair.pubkey_g1 != pubkey_g1 || keypair.pubkey_g2 != pubkey_g2 {
            return Err(VessError::MalformedInput(
                "pubkey-privkey mismatch".to_string(),
            ));
        }
        Ok(keypair)
    }

    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        Self::new(random_scalar(rng)?)
    }

    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        Self::new(privkey_from_seed(seed)?)
    }

    pub fn pubkey_g1(&self) -> G1Affine {
        self.pubkey_g1
    }

    pub fn pubkey_g2(&self) -> G2Affine {
        self.pubkey_g2
    }

    pub fn privkey(&self) -> &Scalar {
        &self.privkey
    }
}

impl Drop for AdjudicatorKeypair {
    fn drop(&mut self) {
        self.privkey.zeroize();
    }
}

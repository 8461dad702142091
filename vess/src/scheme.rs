//! Verifiably encrypted BLS signatures.
//!
//! The construction of Boneh, Gentry, Lynn and Shacham assumes a Type-2
//! pairing with an isomorphism $\psi: G_2 \to G_1$. On BLS12-381 no such map
//! is efficiently computable, so the adjudicator publishes its key in both
//! groups and the roles of the groups are swapped to follow the Ethereum
//! convention (public keys in $G_1$, signatures in $G_2$):
//!
//! - encrypt: $\mu = r g_2$, $\omega = \sigma + r v'_2$
//! - verify: $e(g_1, \omega) = e(v, H(m)) \cdot e(v'_1, \mu)$
//! - adjudicate: $\sigma = \omega - x' \mu$
use crate::config::Config;
use crate::error::{Result, VessError};
use crate::hash::hash_to_g2;
use crate::rng::random_scalar;
use crate::signature::{Signature, VesSignature};
use crate::threshold::PartialDecryption;

use bls::{multi_miller_loop, G1Affine, G2Affine, G2Prepared, G2Projective, Gt, Scalar};
use log::debug;
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Protocol context holding the generators and the message hashing domain.
#[derive(Debug, Clone)]
pub struct Vess {
    g1: G1Affine,
    g2: G2Affine,
    dst: Vec<u8>,
}

impl Vess {
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Result<Self> {
        if config.hash_dst.is_empty() {
            return Err(VessError::Initialization(
                "empty hash-to-curve domain separation tag".to_string(),
            ));
        }
        let g1 = G1Affine::generator();
        let g2 = G2Affine::generator();
        let g1_valid = g1.is_on_curve() & g1.is_torsion_free() & !g1.is_identity();
        let g2_valid = g2.is_on_curve() & g2.is_torsion_free() & !g2.is_identity();
        if !bool::from(g1_valid & g2_valid) {
            return Err(VessError::Initialization(
                "curve generators failed validation".to_string(),
            ));
        }
        debug!("initialized with dst {}", config.hash_dst);
        Ok(Self {
            g1,
            g2,
            dst: config.hash_dst.into_bytes(),
        })
    }

    pub fn g1(&self) -> G1Affine {
        self.g1
    }

    pub fn g2(&self) -> G2Affine {
        self.g2
    }

    pub fn hash_to_g2(&self, msg: &[u8]) -> G2Affine {
        hash_to_g2(msg, &self.dst)
    }

    /// Plain BLS signature $\sigma = x H(m)$.
    pub fn sign(&self, msg: &[u8], privkey: &Scalar) -> Signature {
        Signature::from(self.hash_to_g2(msg) * privkey)
    }

    /// Plain BLS verification, $e(g_1, \sigma) = e(v, H(m))$.
    pub fn verify_signature(&self, msg: &[u8], pubkey: &G1Affine, sig: &Signature) -> bool {
        if bool::from(pubkey.is_identity()) {
            return false;
        }
        let h = G2Prepared::from(self.hash_to_g2(msg));
        let sig = G2Prepared::from(*sig.inner());
        let neg_g1 = -self.g1;
        multi_miller_loop(&[(&neg_g1, &sig), (pubkey, &h)]).final_exponentiation() == Gt::identity()
    }

    /// Blinds `sig` under the adjudicator key with a fresh randomizer.
    pub fn encrypt<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        sig: &Signature,
        adjudicator_pubkey_g2: &G2Affine,
    ) -> Result<VesSignature> {
        let mut r = random_scalar(rng)?;
        let ves = self.encrypt_with_randomizer(sig, adjudicator_pubkey_g2, &r);
        r.zeroize();
        ves
    }

    /// Same as [`Vess::encrypt`] with a caller supplied randomizer.
    ///
    /// Only meant for reproducible test vectors: reusing `r` for two
    /// signatures under the same adjudicator key reveals both of them.
    pub fn encrypt_with_randomizer(
        &self,
        sig: &Signature,
        adjudicator_pubkey_g2: &G2Affine,
        r: &Scalar,
    ) -> Result<VesSignature> {
        if *r == Scalar::zero() {
            return Err(VessError::MalformedInput("zero randomizer".to_string()));
        }
        let mu = self.g2 * r;
        let sigma_2 = adjudicator_pubkey_g2 * r;
        let omega = G2Projective::from(sig.inner()) + sigma_2;
        debug!("encrypted signature under adjudicator key");
        Ok(VesSignature {
            omega: omega.into(),
            mu: mu.into(),
        })
    }

    /// Checks $e(g_1, \omega) = e(v, H(m)) \cdot e(v'_1, \mu)$.
    ///
    /// Returns `false` for identity public keys, which would make the
    /// equation trivially satisfiable.
    pub fn verify(
        &self,
        msg: &[u8],
        signer_pubkey: &G1Affine,
        adjudicator_pubkey_g1: &G1Affine,
        ves: &VesSignature,
    ) -> bool {
        if bool::from(signer_pubkey.is_identity() | adjudicator_pubkey_g1.is_identity()) {
            debug!("rejecting identity public key");
            return false;
        }
        let h = G2Prepared::from(self.hash_to_g2(msg));
        let omega = G2Prepared::from(ves.omega);
        let mu = G2Prepared::from(ves.mu);
        // e(-g1, omega) + e(v, h) + e(v', mu) == 1 in GT, one final exponentiation
        let neg_g1 = -self.g1;
        let valid = multi_miller_loop(&[
            (&neg_g1, &omega),
            (signer_pubkey, &h),
            (adjudicator_pubkey_g1, &mu),
        ])
        .final_exponentiation()
            == Gt::identity();
        debug!("encrypted signature verification: {}", valid);
        valid
    }

    /// Recovers the plain signature, $\sigma = \omega - x' \mu$.
    ///
    /// The output is not re-verified, call [`Vess::verify_signature`] when
    /// that guarantee is needed.
    pub fn adjudicate(&self, ves: &VesSignature, adjudicator_privkey: &Scalar) -> Signature {
        let blinding = ves.mu * adjudicator_privkey;
        Signature::from(G2Projective::from(ves.omega) - blinding)
    }

    /// Checks that both representations of an adjudicator key share the same
    /// secret, $e(v'_1, g_2) = e(g_1, v'_2)$.
    pub fn verify_adjudicator_key(&self, pubkey_g1: &G1Affine, pubkey_g2: &G2Affine) -> bool {
        if bool::from(pubkey_g1.is_identity() | pubkey_g2.is_identity()) {
            return false;
        }
        let g2 = G2Prepared::from(self.g2);
        let pubkey_g2 = G2Prepared::from(*pubkey_g2);
        let neg_g1 = -self.g1;
        multi_miller_loop(&[(pubkey_g1, &g2), (&neg_g1, &pubkey_g2)]).final_exponentiation()
            == Gt::identity()
    }

    /// Checks a shareholder's partial decryption against its verification
    /// key, $e(vk_i, \mu) = e(g_1, \mu_i)$.
    pub fn verify_partial(
        &self,
        partial: &PartialDecryption,
        verification_key: &G1Affine,
        mu: &G2Affine,
    ) -> bool {
        let mu = G2Prepared::from(*mu);
        let value = G2Prepared::from(partial.value);
        let neg_g1 = -self.g1;
        multi_miller_loop(&[(verification_key, &mu), (&neg_g1, &value)]).final_exponentiation()
            == Gt::identity()
    }
}

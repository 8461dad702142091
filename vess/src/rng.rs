use crate::error::Result;
use bls::Scalar;
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Draws a uniformly random non-zero scalar.
///
/// Uses `try_fill_bytes` so that a failing entropy source surfaces as
/// `VessError::Randomness` instead of silently producing a predictable value.
pub fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Scalar> {
    let mut wide = [0u8; 64];
    loop {
        rng.try_fill_bytes(&mut wide)?;
        let scalar = Scalar::from_bytes_wide(&wide);
        if scalar != Scalar::zero() {
            wide.zeroize();
            return Ok(scalar);
        }
    }
}

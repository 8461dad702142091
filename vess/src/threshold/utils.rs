use super::share::Share;
use crate::error::Result;
use crate::rng::random_scalar;
use bls::Scalar;
use rand_core::{CryptoRng, RngCore};
use vess_interpolate::Polynomial;
use zeroize::Zeroize;

/// Degree `threshold - 1` polynomial with `secret` as its constant term.
pub fn random_polynomial<R: RngCore + CryptoRng>(
    rng: &mut R,
    threshold: usize,
    secret: Scalar,
) -> Result<Polynomial<Scalar>> {
    let mut coeffs = Vec::with_capacity(threshold);
    coeffs.push(secret);
    for _ in 1..threshold {
        match random_scalar(rng) {
            Ok(coeff) => coeffs.push(coeff),
            Err(err) => {
                coeffs.zeroize();
                return Err(err);
            }
        }
    }
    Ok(Polynomial::new(coeffs))
}

/// Evaluates the polynomial at `1..=nodes`.
pub fn generate_shares(polynomial: &Polynomial<Scalar>, nodes: usize) -> Vec<Share> {
    (1..=nodes as u64)
        .map(|index| Share::new(index, polynomial.evaluate(Scalar::from(index))))
        .collect()
}

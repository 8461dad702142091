//! Threshold adjudication.
//!
//! The adjudicator secret $x'$ is shared with a degree $n - 1$ polynomial
//! $f$ over $\mathbb{F}_p$ where $f(0) = x'$, and shareholder $i$ receives
//! $f(i)$. To open $(\omega, \mu)$ every shareholder publishes $f(i) \mu$;
//! any $n$ of those interpolate, in the exponent, to $f(0) \mu = x' \mu$ so
//! the secret itself is never assembled.
mod collector;
mod parameters;
mod share;
mod utils;

pub use collector::Collector;
pub use parameters::Parameters;
pub use share::{PartialDecryption, Share};

use crate::error::{Result, VessError};
use crate::signature::{Signature, VesSignature};

use bls::{G2Affine, G2Projective, Scalar};
use log::{debug, warn};
use rand_core::{CryptoRng, RngCore};
use vess_interpolate::interpolate_at_zero;
use zeroize::Zeroize;

use std::collections::btree_map::{BTreeMap, Entry};

/// Deals `parameters.nodes()` shares of `secret`, any `parameters.threshold()`
/// of which reconstruct it.
pub fn split<R: RngCore + CryptoRng>(
    rng: &mut R,
    secret: &Scalar,
    parameters: &Parameters,
) -> Result<Vec<Share>> {
    if *secret == Scalar::zero() {
        return Err(VessError::MalformedInput("zero secret".to_string()));
    }
    let mut polynomial = utils::random_polynomial(rng, parameters.threshold(), *secret)?;
    let shares = utils::generate_shares(&polynomial, parameters.nodes());
    polynomial.zeroize();
    debug!(
        "dealt {} shares with threshold {}",
        parameters.nodes(),
        parameters.threshold()
    );
    Ok(shares)
}

/// Interpolates $x' \mu$ from the partial decryptions.
///
/// Duplicate submissions of the same value are merged, duplicates with
/// different values are rejected.
pub fn reconstruct(partials: &[PartialDecryption], parameters: &Parameters) -> Result<G2Affine> {
    let mut distinct = BTreeMap::<u64, G2Affine>::new();
    for partial in partials {
        if partial.index == 0 || partial.index > parameters.nodes() as u64 {
            warn!("partial with out of range index {}", partial.index);
            return Err(VessError::InvalidShareIndex {
                index: partial.index,
                nodes: parameters.nodes(),
            });
        }
        match distinct.entry(partial.index) {
            Entry::Vacant(entry) => {
                entry.insert(partial.value);
            }
            Entry::Occupied(entry) => {
                if *entry.get() != partial.value {
                    warn!("conflicting partials for index {}", partial.index);
                    return Err(VessError::InconsistentShare(partial.index));
                }
            }
        }
    }

    if distinct.len() < parameters.threshold() {
        return Err(VessError::InsufficientShares {
            required: parameters.threshold(),
            got: distinct.len(),
        });
    }

    let (x, y): (Vec<Scalar>, Vec<G2Projective>) = distinct
        .iter()
        .map(|(&index, value)| (Scalar::from(index), G2Projective::from(value)))
        .unzip();
    debug!("reconstructing from {} partials", x.len());
    Ok(interpolate_at_zero(&x, &y)?.into())
}

/// Threshold counterpart of [`crate::Vess::adjudicate`], $\sigma = \omega - x' \mu$.
pub fn adjudicate(
    ves: &VesSignature,
    partials: &[PartialDecryption],
    parameters: &Parameters,
) -> Result<Signature> {
    let blinding = reconstruct(partials, parameters)?;
    Ok(Signature::from(
        G2Projective::from(ves.omega) - G2Projective::from(blinding),
    ))
}

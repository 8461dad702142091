#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]

#[cfg(test)]
mod macros;

#[cfg(any(test, feature = "bls-curve"))]
mod bls_scalar;
mod lagrange;
mod polynomial;

pub use lagrange::{interpolate_at_zero, lagrange_coefficients_at_zero};
pub use polynomial::Polynomial;

use subtle::CtOption;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InterpolationError {
    #[error("unequal slice lengths: {0} and {1}")]
    InvalidInputLengths(usize, usize),
    #[error("attempted to invert a zero scalar")]
    TriedToInvertZero,
    #[error("no points to interpolate")]
    EmptyInput,
}

pub trait Interpolate {
    fn zero() -> Self
    where
        Self: Sized;
    fn one() -> Self
    where
        Self: Sized;
    fn from_u64(num: u64) -> Self
    where
        Self: Sized;
    fn inverse(&self) -> CtOption<Self>
    where
        Self: Sized;
}

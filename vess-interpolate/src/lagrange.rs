//! Lagrange interpolation evaluated at `x = 0`.
//!
//! For distinct abscissae `x_0, ..., x_{k-1}` the basis coefficient of the
//! i-th point is
//!
//! `λ_i = Π_{j≠i} x_j / (x_j - x_i)`
//!
//! and the value of the interpolating polynomial at zero is `Σ λ_i · y_i`.
//! The ordinates only need to be a module over the scalars, so the same
//! routine recovers `s · P` from points `f(x_i) · P` without ever seeing the
//! scalar shares `f(x_i)`.
use crate::{Interpolate, InterpolationError};
use std::ops::{Add, Mul, MulAssign, Sub};

pub fn lagrange_coefficients_at_zero<T>(x: &[T]) -> Result<Vec<T>, InterpolationError>
where
    T: Interpolate + Copy + Mul<Output = T> + Sub<Output = T> + MulAssign,
{
    if x.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }

    let mut lambdas = Vec::with_capacity(x.len());
    for (i, &x_i) in x.iter().enumerate() {
        let mut numerator = T::one();
        let mut denominator = T::one();
        for (j, &x_j) in x.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator *= x_j;
            denominator *= x_j - x_i;
        }
        // a zero denominator means two abscissae coincide
        let maybe_inv: Option<T> = <T as Interpolate>::inverse(&denominator).into();
        let inv = maybe_inv.ok_or(InterpolationError::TriedToInvertZero)?;
        lambdas.push(numerator * inv);
    }

    Ok(lambdas)
}

pub fn interpolate_at_zero<T, P>(x: &[T], y: &[P]) -> Result<P, InterpolationError>
where
    T: Interpolate + Copy + Mul<Output = T> + Sub<Output = T> + MulAssign,
    P: Copy + Mul<T, Output = P> + Add<Output = P>,
{
    if x.len() != y.len() {
        return Err(InterpolationError::InvalidInputLengths(x.len(), y.len()));
    }

    lagrange_coefficients_at_zero(x)?
        .into_iter()
        .zip(y)
        .map(|(lambda, &point)| point * lambda)
        .reduce(|acc, term| acc + term)
        .ok_or(InterpolationError::EmptyInput)
}

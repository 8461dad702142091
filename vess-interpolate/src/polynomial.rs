use crate::Interpolate;
use std::ops::{AddAssign, MulAssign};

/// Polynomial in coefficient form, `coeffs[i]` being the coefficient of `x^i`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial<T> {
    coeffs: Vec<T>,
}

impl<T> Polynomial<T> {
    pub fn new(coeffs: Vec<T>) -> Self {
        Self { coeffs }
    }

    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    pub fn into_coeffs(self) -> Vec<T> {
        self.coeffs
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }
}

impl<T> Polynomial<T>
where
    T: Interpolate + Copy + AddAssign + MulAssign,
{
    /// Horner evaluation.
    pub fn evaluate(&self, at: T) -> T {
        let mut ret = T::zero();
        for coeff in self.coeffs.iter().rev() {
            ret *= at;
            ret += *coeff;
        }
        ret
    }
}

#[cfg(feature = "zeroize-poly")]
impl<T: zeroize::Zeroize> zeroize::Zeroize for Polynomial<T> {
    fn zeroize(&mut self) {
        self.coeffs.zeroize();
    }
}

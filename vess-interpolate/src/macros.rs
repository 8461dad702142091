macro_rules! test_polynomial {
    ($t: ty) => {
        #[cfg(test)]
        mod test_polynomial {
            use crate::{interpolate_at_zero, Interpolate, Polynomial};

            type TestScalar = $t;

            fn scalars(nums: &[u64]) -> Vec<TestScalar> {
                nums.iter()
                    .map(|&n| <TestScalar as Interpolate>::from_u64(n))
                    .collect()
            }

            #[test]
            fn evaluate_polynomial() {
                let poly = Polynomial::new(scalars(&[14, 2, 3, 0, 1]));
                assert_eq!(poly.degree(), 4);
                assert_eq!(
                    poly.evaluate(<TestScalar as Interpolate>::zero()),
                    <TestScalar as Interpolate>::from_u64(14)
                );
                for (x, y) in [(1, 20), (2, 46), (5, 724)] {
                    assert_eq!(
                        poly.evaluate(<TestScalar as Interpolate>::from_u64(x)),
                        <TestScalar as Interpolate>::from_u64(y)
                    );
                }
                let empty = Polynomial::<TestScalar>::new(Vec::new());
                assert_eq!(empty.degree(), 0);
                assert_eq!(
                    empty.evaluate(<TestScalar as Interpolate>::from_u64(7)),
                    <TestScalar as Interpolate>::zero()
                );
            }

            #[test]
            fn evaluations_recover_constant_term() {
                // y = 32 * x + 53
                let poly = Polynomial::new(scalars(&[53, 32]));
                let x = scalars(&[2, 9]);
                let y: Vec<TestScalar> = x.iter().map(|&xi| poly.evaluate(xi)).collect();
                assert_eq!(y, scalars(&[117, 341]));
                assert_eq!(interpolate_at_zero(&x, &y).unwrap(), poly.coeffs()[0]);

                // degree-zero polynomial from a single point
                let x = scalars(&[3]);
                let y = scalars(&[53]);
                assert_eq!(
                    interpolate_at_zero(&x, &y).unwrap(),
                    <TestScalar as Interpolate>::from_u64(53)
                );
            }
        }
    };
}

macro_rules! test_lagrange {
    ($t: ty) => {
        #[cfg(test)]
        mod test_lagrange {
            use crate::{
                interpolate_at_zero, lagrange_coefficients_at_zero, Interpolate,
                InterpolationError,
            };

            type TestScalar = $t;

            fn scalars(nums: &[u64]) -> Vec<TestScalar> {
                nums.iter()
                    .map(|&n| <TestScalar as Interpolate>::from_u64(n))
                    .collect()
            }

            #[test]
            fn coefficients_sum_to_one() {
                let lambdas = lagrange_coefficients_at_zero(&scalars(&[1, 4, 6, 10])).unwrap();
                let mut sum = <TestScalar as Interpolate>::zero();
                for lambda in lambdas {
                    sum += lambda;
                }
                assert_eq!(sum, <TestScalar as Interpolate>::one());
            }

            #[test]
            fn recovers_constant_term() {
                // y = x^4 + 3 * x^2 + 2 * x + 14
                let x = scalars(&[1, 2, 3, 4, 5]);
                let y = scalars(&[20, 46, 128, 326, 724]);
                assert_eq!(
                    interpolate_at_zero(&x, &y).unwrap(),
                    <TestScalar as Interpolate>::from_u64(14)
                );
                // any five points of the same polynomial
                let x = scalars(&[2, 3, 4, 5, 6]);
                let y = scalars(&[46, 128, 326, 724, 1430]);
                assert_eq!(
                    interpolate_at_zero(&x, &y).unwrap(),
                    <TestScalar as Interpolate>::from_u64(14)
                );
            }

            #[test]
            fn invalid_inputs() {
                assert_eq!(
                    lagrange_coefficients_at_zero::<TestScalar>(&[]),
                    Err(InterpolationError::EmptyInput)
                );
                assert_eq!(
                    interpolate_at_zero(&scalars(&[1, 2]), &scalars(&[1])),
                    Err(InterpolationError::InvalidInputLengths(2, 1))
                );
                assert_eq!(
                    lagrange_coefficients_at_zero(&scalars(&[3, 7, 3])),
                    Err(InterpolationError::TriedToInvertZero)
                );
                assert_eq!(
                    interpolate_at_zero(&scalars(&[4, 4]), &scalars(&[1, 2])),
                    Err(InterpolationError::TriedToInvertZero)
                );
                assert_eq!(
                    interpolate_at_zero::<TestScalar, TestScalar>(&[], &[]),
                    Err(InterpolationError::EmptyInput)
                );
            }
        }
    };
}

pub(crate) use test_lagrange;
pub(crate) use test_polynomial;

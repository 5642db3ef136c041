/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use smallvec::*;

use std::ops::*;

///
/// Storage used for polynomial coefficients (degree 9 is the highest we produce when intersecting two cubics)
///
pub type Coefficients = SmallVec<[f64; 10]>;

///
/// Computes the binomial coefficient 'n choose k'
///
pub fn binomial_coefficient(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }

    let mut result = 1.0;
    for i in 0..k {
        result *= (n - i) as f64;
        result /= (i + 1) as f64;
    }

    result.round()
}

#[inline]
fn lerp(first: f64, second: f64, t: f64) -> f64 {
    (1.0 - t) * first + t * second
}

///
/// A one-dimensional polynomial in the Bernstein basis, over the range 0..1
///
/// The coefficients are the control values of a 1D bezier curve, so a polynomial of order `n` has `n+1`
/// coefficients.
///
#[derive(Clone, PartialEq, Debug)]
pub struct BernsteinPolynomial {
    coefficients: Coefficients,
}

impl BernsteinPolynomial {
    ///
    /// Creates a polynomial from its coefficients
    ///
    /// A polynomial needs at least one coefficient: this will panic if none are supplied
    ///
    pub fn new<Coeffs: IntoIterator<Item = f64>>(coefficients: Coeffs) -> BernsteinPolynomial {
        let coefficients = coefficients.into_iter().collect::<Coefficients>();
        assert!(!coefficients.is_empty(), "Bernstein polynomials require at least one coefficient");

        BernsteinPolynomial { coefficients }
    }

    ///
    /// A polynomial of the specified order where every coefficient has the same value
    ///
    pub fn constant(value: f64, order: usize) -> BernsteinPolynomial {
        BernsteinPolynomial {
            coefficients: smallvec![value; order + 1],
        }
    }

    ///
    /// The coefficients of this polynomial
    ///
    #[inline]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    ///
    /// The order (degree) of this polynomial
    ///
    #[inline]
    pub fn order(&self) -> usize {
        self.coefficients.len() - 1
    }

    ///
    /// True if every coefficient is exactly 0
    ///
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|coefficient| *coefficient == 0.0)
    }

    ///
    /// The value of the polynomial at t
    ///
    pub fn value(&self, t: f64) -> f64 {
        let n = self.order();
        let mut scratch = self.coefficients.clone();

        for j in 1..=n {
            for i in 0..=(n - j) {
                scratch[i] = lerp(scratch[i], scratch[i + 1], t);
            }
        }

        scratch[0]
    }

    ///
    /// Evaluates the polynomial by summing its basis functions directly
    ///
    pub fn value_by_summation(&self, t: f64) -> f64 {
        let n = self.order();
        let one_minus_t = 1.0 - t;

        self.coefficients
            .iter()
            .enumerate()
            .map(|(i, coefficient)| {
                binomial_coefficient(n, i) * one_minus_t.powi((n - i) as i32) * t.powi(i as i32) * coefficient
            })
            .sum()
    }

    ///
    /// Splits this polynomial into two at t, using de Casteljau's algorithm
    ///
    pub fn split_at(&self, t: f64) -> (BernsteinPolynomial, BernsteinPolynomial) {
        let n = self.order();
        if n == 0 {
            return (self.clone(), self.clone());
        }

        let mut left = smallvec![0.0; n + 1];
        let mut right = smallvec![0.0; n + 1];
        let mut scratch = self.coefficients.clone();

        left[0] = scratch[0];
        right[n] = scratch[n];

        for j in 1..=n {
            for i in 0..=(n - j) {
                scratch[i] = lerp(scratch[i], scratch[i + 1], t);
            }

            left[j] = scratch[0];
            right[n - j] = scratch[n - j];
        }

        (
            BernsteinPolynomial { coefficients: left },
            BernsteinPolynomial { coefficients: right },
        )
    }

    ///
    /// Returns the polynomial that evaluates over 0..1 the same as this one does over t1..t2
    ///
    /// If t1 > t2 the result is reversed.
    ///
    pub fn split_range(&self, t1: f64, t2: f64) -> BernsteinPolynomial {
        if t1 > t2 {
            return self.split_range(t2, t1).reversed();
        }

        if t1 == 0.0 {
            return self.split_at(t2).0;
        }

        let (_, right) = self.split_at(t1);
        if t2 == 1.0 {
            return right;
        }

        let t2_mapped = (t2 - t1) / (1.0 - t1);
        right.split_at(t2_mapped).0
    }

    ///
    /// The same polynomial with t running from 1 to 0
    ///
    pub fn reversed(&self) -> BernsteinPolynomial {
        BernsteinPolynomial {
            coefficients: self.coefficients.iter().rev().copied().collect(),
        }
    }

    ///
    /// The differences between successive coefficients
    ///
    fn hodograph(&self) -> BernsteinPolynomial {
        BernsteinPolynomial {
            coefficients: self.coefficients.windows(2).map(|pair| pair[1] - pair[0]).collect(),
        }
    }

    ///
    /// The derivative of this polynomial (the derivative of a constant is the zero polynomial)
    ///
    pub fn derivative(&self) -> BernsteinPolynomial {
        let order = self.order();
        if order == 0 {
            return BernsteinPolynomial::constant(0.0, 0);
        }

        self.hodograph() * (order as f64)
    }

    ///
    /// Represents this polynomial with a higher order (the values are unchanged)
    ///
    pub fn degree_elevated(&self, by: usize) -> BernsteinPolynomial {
        if by == 0 {
            self.clone()
        } else {
            self * &BernsteinPolynomial::constant(1.0, by)
        }
    }

    ///
    /// Converts to the power basis, returning the coefficients from lowest to highest power of t
    ///
    pub fn to_power_basis(&self) -> Vec<f64> {
        let n = self.order();

        (0..=n)
            .map(|j| {
                let sum = (0..=j)
                    .map(|i| {
                        let sign = if (j - i) % 2 == 0 { 1.0 } else { -1.0 };
                        sign * binomial_coefficient(j, i) * self.coefficients[i]
                    })
                    .sum::<f64>();

                binomial_coefficient(n, j) * sum
            })
            .collect()
    }

    ///
    /// Combines two polynomials coefficient by coefficient, raising the lower order one first if needed
    ///
    fn combine(&self, other: &BernsteinPolynomial, op: impl Fn(f64, f64) -> f64) -> BernsteinPolynomial {
        let order = self.order().max(other.order());
        let lhs = self.degree_elevated(order - self.order());
        let rhs = other.degree_elevated(order - other.order());

        BernsteinPolynomial {
            coefficients: lhs
                .coefficients
                .iter()
                .zip(rhs.coefficients.iter())
                .map(|(a, b)| op(*a, *b))
                .collect(),
        }
    }
}

impl<'a> Add<&'a BernsteinPolynomial> for &'a BernsteinPolynomial {
    type Output = BernsteinPolynomial;

    fn add(self, rhs: &'a BernsteinPolynomial) -> BernsteinPolynomial {
        self.combine(rhs, |a, b| a + b)
    }
}

impl Add<BernsteinPolynomial> for BernsteinPolynomial {
    type Output = BernsteinPolynomial;

    fn add(self, rhs: BernsteinPolynomial) -> BernsteinPolynomial {
        &self + &rhs
    }
}

impl<'a> Sub<&'a BernsteinPolynomial> for &'a BernsteinPolynomial {
    type Output = BernsteinPolynomial;

    fn sub(self, rhs: &'a BernsteinPolynomial) -> BernsteinPolynomial {
        self.combine(rhs, |a, b| a - b)
    }
}

impl Sub<BernsteinPolynomial> for BernsteinPolynomial {
    type Output = BernsteinPolynomial;

    fn sub(self, rhs: BernsteinPolynomial) -> BernsteinPolynomial {
        &self - &rhs
    }
}

impl<'a> Mul<&'a BernsteinPolynomial> for &'a BernsteinPolynomial {
    type Output = BernsteinPolynomial;

    ///
    /// Multiplies two polynomials in Bernstein form (Sederberg, "Computer Aided Geometric Design", 9.3)
    ///
    fn mul(self, rhs: &'a BernsteinPolynomial) -> BernsteinPolynomial {
        let m = self.order();
        let n = rhs.order();

        let coefficients = (0..=(m + n))
            .map(|k| {
                let start = k.saturating_sub(n);
                let end = m.min(k);

                let sum = (start..=end)
                    .map(|i| {
                        let j = k - i;
                        binomial_coefficient(m, i) * binomial_coefficient(n, j) * self.coefficients[i] * rhs.coefficients[j]
                    })
                    .sum::<f64>();

                sum / binomial_coefficient(m + n, k)
            })
            .collect();

        BernsteinPolynomial { coefficients }
    }
}

impl Mul<BernsteinPolynomial> for BernsteinPolynomial {
    type Output = BernsteinPolynomial;

    fn mul(self, rhs: BernsteinPolynomial) -> BernsteinPolynomial {
        &self * &rhs
    }
}

impl Mul<f64> for BernsteinPolynomial {
    type Output = BernsteinPolynomial;

    fn mul(mut self, rhs: f64) -> BernsteinPolynomial {
        self.coefficients.iter_mut().for_each(|coefficient| *coefficient *= rhs);
        self
    }
}

impl<'a> Mul<f64> for &'a BernsteinPolynomial {
    type Output = BernsteinPolynomial;

    fn mul(self, rhs: f64) -> BernsteinPolynomial {
        self.clone() * rhs
    }
}

impl Mul<BernsteinPolynomial> for f64 {
    type Output = BernsteinPolynomial;

    fn mul(self, rhs: BernsteinPolynomial) -> BernsteinPolynomial {
        rhs * self
    }
}

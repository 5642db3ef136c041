/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::bernstein::*;
use crate::consts::*;

use roots::{find_roots_cubic, find_roots_linear, find_roots_quadratic, find_roots_quartic};

///
/// A polynomial in the power basis, `a0 + a1*t + a2*t^2 + ...`
///
#[derive(Clone, PartialEq, Debug)]
pub struct PowerPolynomial {
    /// Coefficients, from the constant term upwards
    coefficients: Vec<f64>,
}

impl PowerPolynomial {
    ///
    /// Creates a polynomial from its coefficients, lowest power first
    ///
    pub fn new<Coeffs: IntoIterator<Item = f64>>(coefficients: Coeffs) -> PowerPolynomial {
        let mut coefficients = coefficients.into_iter().collect::<Vec<_>>();
        if coefficients.is_empty() {
            coefficients.push(0.0);
        }

        PowerPolynomial { coefficients }
    }

    ///
    /// Creates the polynomial with the specified roots (and a leading coefficient of 1)
    ///
    pub fn from_roots(roots: &[f64]) -> PowerPolynomial {
        roots.iter().fold(PowerPolynomial::new(vec![1.0]), |poly, root| {
            let mut coefficients = vec![0.0; poly.coefficients.len() + 1];

            for (power, coefficient) in poly.coefficients.iter().enumerate() {
                coefficients[power + 1] += coefficient;
                coefficients[power] -= coefficient * root;
            }

            PowerPolynomial { coefficients }
        })
    }

    #[inline]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    ///
    /// Evaluates this polynomial using Horner's method
    ///
    pub fn value(&self, t: f64) -> f64 {
        self.coefficients.iter().rev().fold(0.0, |sum, coefficient| sum * t + coefficient)
    }

    pub fn derivative(&self) -> PowerPolynomial {
        if self.coefficients.len() <= 1 {
            return PowerPolynomial::new(vec![0.0]);
        }

        PowerPolynomial::new(
            self.coefficients
                .iter()
                .enumerate()
                .skip(1)
                .map(|(power, coefficient)| (power as f64) * coefficient),
        )
    }

    ///
    /// Converts this polynomial to the Bernstein basis over 0..1
    ///
    pub fn to_bernstein(&self) -> BernsteinPolynomial {
        let n = self.degree();

        BernsteinPolynomial::new((0..=n).map(|i| {
            (0..=i)
                .map(|j| binomial_coefficient(i, j) / binomial_coefficient(n, j) * self.coefficients[j])
                .sum::<f64>()
        }))
    }

    ///
    /// Finds the real roots of this polynomial, in ascending order
    ///
    /// Polynomials up to degree 4 are solved in closed form. Higher degrees are only searched in the range 0..=1.
    ///
    pub fn real_roots(&self) -> Vec<f64> {
        let mut roots = match self.coefficients[..] {
            [_] => vec![],
            [a0, a1] => find_roots_linear(a1, a0).as_ref().to_vec(),
            [a0, a1, a2] => find_roots_quadratic(a2, a1, a0).as_ref().to_vec(),
            [a0, a1, a2, a3] => find_roots_cubic(a3, a2, a1, a0).as_ref().to_vec(),
            [a0, a1, a2, a3, a4] => find_roots_quartic(a4, a3, a2, a1, a0).as_ref().to_vec(),
            _ => self.to_bernstein().distinct_real_roots_in_unit_interval(ROOT_THRESHOLD),
        };

        roots.sort_by(|a, b| a.total_cmp(b));
        roots
    }

    ///
    /// Finds the real roots of this polynomial in the range 0..=1, in ascending order
    ///
    pub fn roots_in_unit_interval(&self) -> Vec<f64> {
        self.real_roots().into_iter().filter(|t| (0.0..=1.0).contains(t)).collect()
    }
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Implicit forms of bezier curves
//!
//! A curve of order `n` can be written as `f(x, y) = 0`, where `f` is a polynomial in x and y of degree `n`.
//! Substituting the x and y polynomials of a second curve into `f` produces a single polynomial in t whose
//! roots are where the second curve crosses the first.
//!
//! The implicit forms here are built from the 'line' polynomials `l(i, j)` between pairs of control points,
//! following Sederberg's "Computer Aided Geometric Design", chapter 17.
//!

use super::cubic::*;
use super::curve::*;
use super::line_segment::*;
use super::quadratic::*;
use super::roots::*;
use crate::geo::*;

use smallvec::*;

use std::ops::*;

///
/// An implicit line, `a10*x + a01*y + a00 = 0`
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ImplicitLine {
    pub a10: f64,
    pub a01: f64,
    pub a00: f64,
}

///
/// The product of two implicit lines (a polynomial of degree 2 in x and y)
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ImplicitLineProduct {
    pub a20: f64,
    pub a11: f64,
    pub a10: f64,
    pub a02: f64,
    pub a01: f64,
    pub a00: f64,
}

///
/// A polynomial in x and y of the form `sum(c_ij * x^i * y^j)`, where `i + j <= order`
///
#[derive(Clone, PartialEq, Debug)]
pub struct ImplicitPolynomial {
    /// The coefficient for x^i*y^j is stored at (order+1)*i + j
    coefficients: SmallVec<[f64; 16]>,
    order: usize,
}

impl ImplicitLine {
    ///
    /// The implicit line passing through two points
    ///
    pub fn through_points(p0: Coord2, p1: Coord2) -> ImplicitLine {
        ImplicitLine {
            a10: p0.1 - p1.1,
            a01: p1.0 - p0.0,
            a00: p0.0 * p1.1 - p1.0 * p0.1,
        }
    }

    ///
    /// The value of this line's equation at a point (0 on the line, with the sign indicating the side)
    ///
    pub fn value_at(&self, point: Coord2) -> f64 {
        self.a10 * point.0 + self.a01 * point.1 + self.a00
    }
}

impl Add<ImplicitLine> for ImplicitLine {
    type Output = ImplicitLine;

    fn add(self, rhs: ImplicitLine) -> ImplicitLine {
        ImplicitLine {
            a10: self.a10 + rhs.a10,
            a01: self.a01 + rhs.a01,
            a00: self.a00 + rhs.a00,
        }
    }
}

impl Mul<ImplicitLine> for f64 {
    type Output = ImplicitLine;

    fn mul(self, rhs: ImplicitLine) -> ImplicitLine {
        ImplicitLine {
            a10: self * rhs.a10,
            a01: self * rhs.a01,
            a00: self * rhs.a00,
        }
    }
}

impl Mul<ImplicitLine> for ImplicitLine {
    type Output = ImplicitLineProduct;

    fn mul(self, r: ImplicitLine) -> ImplicitLineProduct {
        ImplicitLineProduct {
            a20: self.a10 * r.a10,
            a11: self.a01 * r.a10 + self.a10 * r.a01,
            a10: self.a10 * r.a00 + self.a00 * r.a10,
            a02: self.a01 * r.a01,
            a01: self.a01 * r.a00 + self.a00 * r.a01,
            a00: self.a00 * r.a00,
        }
    }
}

impl Sub<ImplicitLineProduct> for ImplicitLineProduct {
    type Output = ImplicitLineProduct;

    fn sub(self, r: ImplicitLineProduct) -> ImplicitLineProduct {
        ImplicitLineProduct {
            a20: self.a20 - r.a20,
            a11: self.a11 - r.a11,
            a10: self.a10 - r.a10,
            a02: self.a02 - r.a02,
            a01: self.a01 - r.a01,
            a00: self.a00 - r.a00,
        }
    }
}

impl Mul<ImplicitLineProduct> for ImplicitLine {
    type Output = ImplicitPolynomial;

    fn mul(self, r: ImplicitLineProduct) -> ImplicitPolynomial {
        let l = self;
        let mut coefficients = smallvec![0.0; 16];
        let index = |i: usize, j: usize| 4 * i + j;

        coefficients[index(0, 0)] = l.a00 * r.a00;
        coefficients[index(1, 0)] = l.a00 * r.a10 + l.a10 * r.a00;
        coefficients[index(2, 0)] = l.a10 * r.a10 + l.a00 * r.a20;
        coefficients[index(3, 0)] = l.a10 * r.a20;
        coefficients[index(0, 1)] = l.a01 * r.a00 + l.a00 * r.a01;
        coefficients[index(1, 1)] = l.a10 * r.a01 + l.a00 * r.a11 + l.a01 * r.a10;
        coefficients[index(2, 1)] = l.a01 * r.a20 + l.a10 * r.a11;
        coefficients[index(0, 2)] = l.a01 * r.a01 + l.a00 * r.a02;
        coefficients[index(1, 2)] = l.a10 * r.a02 + l.a01 * r.a11;
        coefficients[index(0, 3)] = l.a01 * r.a02;

        ImplicitPolynomial { coefficients, order: 3 }
    }
}

impl From<ImplicitLine> for ImplicitPolynomial {
    fn from(line: ImplicitLine) -> ImplicitPolynomial {
        ImplicitPolynomial {
            coefficients: smallvec![line.a00, line.a01, line.a10, 0.0],
            order: 1,
        }
    }
}

impl From<ImplicitLineProduct> for ImplicitPolynomial {
    fn from(product: ImplicitLineProduct) -> ImplicitPolynomial {
        ImplicitPolynomial {
            coefficients: smallvec![
                product.a00,
                product.a01,
                product.a02,
                product.a10,
                product.a11,
                0.0,
                product.a20,
                0.0,
                0.0
            ],
            order: 2,
        }
    }
}

impl ImplicitPolynomial {
    ///
    /// The degree of this polynomial
    ///
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    ///
    /// The coefficient of x^i * y^j
    ///
    #[inline]
    pub fn coefficient(&self, i: usize, j: usize) -> f64 {
        self.coefficients[(self.order + 1) * i + j]
    }

    ///
    /// Evaluates this polynomial at a point
    ///
    pub fn value_at(&self, point: Coord2) -> f64 {
        let n = self.order;
        let mut sum = 0.0;
        let mut x_power = 1.0;

        for i in 0..=n {
            let mut y_power = 1.0;

            for j in 0..=n {
                sum += self.coefficient(i, j) * x_power * y_power;
                y_power *= point.1;
            }

            x_power *= point.0;
        }

        sum
    }

    ///
    /// Substitutes a pair of polynomials for x and y, producing a polynomial in t
    ///
    /// If x and y describe a curve, the roots of the result are the t values where that curve meets the
    /// curve this polynomial was generated from.
    ///
    pub fn value(&self, x: &BernsteinPolynomial, y: &BernsteinPolynomial) -> BernsteinPolynomial {
        let polynomial_order = x.order().max(y.order());
        let x = x.degree_elevated(polynomial_order - x.order());
        let y = y.degree_elevated(polynomial_order - y.order());

        let powers = |polynomial: &BernsteinPolynomial| {
            let mut powers = Vec::with_capacity(self.order + 1);
            powers.push(BernsteinPolynomial::constant(1.0, 0));

            for k in 1..=self.order {
                let next = &powers[k - 1] * polynomial;
                powers.push(next);
            }

            powers
        };
        let x_powers = powers(&x);
        let y_powers = powers(&y);

        let result_order = self.order * polynomial_order;
        let mut sum = BernsteinPolynomial::constant(0.0, result_order);

        for i in 0..=self.order {
            for j in 0..=(self.order - i) {
                let c = self.coefficient(i, j);
                if c == 0.0 {
                    continue;
                }

                let term = &x_powers[i] * &y_powers[j];
                let term_order = (i + j) * polynomial_order;
                let term = term.degree_elevated(result_order - term_order) * c;

                sum = &sum + &term;
            }
        }

        sum
    }

    ///
    /// Combines two polynomials of the same order coefficient by coefficient
    ///
    fn combine(&self, other: &ImplicitPolynomial, op: impl Fn(f64, f64) -> f64) -> ImplicitPolynomial {
        test_assert!(self.order == other.order);

        ImplicitPolynomial {
            coefficients: self
                .coefficients
                .iter()
                .zip(other.coefficients.iter())
                .map(|(a, b)| op(*a, *b))
                .collect(),
            order: self.order,
        }
    }
}

impl Add<ImplicitPolynomial> for ImplicitPolynomial {
    type Output = ImplicitPolynomial;

    fn add(self, rhs: ImplicitPolynomial) -> ImplicitPolynomial {
        self.combine(&rhs, |a, b| a + b)
    }
}

impl Sub<ImplicitPolynomial> for ImplicitPolynomial {
    type Output = ImplicitPolynomial;

    fn sub(self, rhs: ImplicitPolynomial) -> ImplicitPolynomial {
        self.combine(&rhs, |a, b| a - b)
    }
}

///
/// Trait implemented by curves that can be converted to implicit form
///
pub trait Implicitize {
    ///
    /// Returns the polynomial `f(x, y)` which is 0 for every point on this curve
    ///
    fn implicit_polynomial(&self) -> ImplicitPolynomial;
}

///
/// The scaled line between control points i and j of a curve of order n
///
fn control_line(points: &[Coord2], i: usize, j: usize) -> ImplicitLine {
    let n = points.len() - 1;
    let (pi, pj) = (points[i], points[j]);
    let scale = binomial_coefficient(n, i) * binomial_coefficient(n, j);

    scale
        * ImplicitLine {
            a10: pi.1 - pj.1,
            a01: pj.0 - pi.0,
            a00: pi.0 * pj.1 - pj.0 * pi.1,
        }
}

impl Implicitize for LineSegment {
    fn implicit_polynomial(&self) -> ImplicitPolynomial {
        let points = [self.p0, self.p1];
        control_line(&points, 1, 0).into()
    }
}

impl Implicitize for QuadraticCurve {
    fn implicit_polynomial(&self) -> ImplicitPolynomial {
        let points = [self.p0, self.p1, self.p2];
        let l = |i, j| control_line(&points, i, j);

        (l(2, 1) * l(1, 0) - l(2, 0) * l(2, 0)).into()
    }
}

impl Implicitize for CubicCurve {
    fn implicit_polynomial(&self) -> ImplicitPolynomial {
        let points = [self.p0, self.p1, self.p2, self.p3];
        let l = |i, j| control_line(&points, i, j);

        let l32 = l(3, 2);
        let l31 = l(3, 1);
        let l30 = l(3, 0);
        let l21 = l(2, 1);
        let l20 = l(2, 0);
        let l10 = l(1, 0);

        // The implicit form is the determinant of this matrix of lines
        let (m00, m01, m02) = (l32, l31, l30);
        let (m10, m11, m12) = (l31, l30 + l21, l20);
        let (m20, m21, m22) = (l30, l20, l10);

        let term1 = m00 * (m11 * m22 - m12 * m21);
        let term2 = m01 * (m10 * m22 - m12 * m20);
        let term3 = m02 * (m10 * m21 - m11 * m20);

        term1 - term2 + term3
    }
}

impl Implicitize for Curve {
    fn implicit_polynomial(&self) -> ImplicitPolynomial {
        match self {
            Curve::Line(line) => line.implicit_polynomial(),
            Curve::Quadratic(quadratic) => quadratic.implicit_polynomial(),
            Curve::Cubic(cubic) => cubic.implicit_polynomial(),
        }
    }
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::bernstein::*;
use super::droots::*;

const NEWTON_MAX_ITERATIONS: usize = 20;
const NEWTON_TOLERANCE: f64 = 1e-10;
const BISECTION_MAX_ITERATIONS: usize = 20;
const BISECTION_TOLERANCE: f64 = 1e-5;
const DISTINCT_ROOT_DISTANCE: f64 = 1e-5;
const ROOT_VALUE_TOLERANCE: f64 = 1e-10;

///
/// Refines a guess at a root using Newton's method
///
/// This can return a NaN or a value outside of the range of interest if the method diverges
///
fn newton(polynomial: &BernsteinPolynomial, derivative: &BernsteinPolynomial, guess: f64) -> f64 {
    let mut x = guess;

    for _ in 0..NEWTON_MAX_ITERATIONS {
        let f = polynomial.value(x);
        if f == 0.0 {
            break;
        }

        let previous = x;
        x -= f / derivative.value(x);

        if !((x - previous).abs() > NEWTON_TOLERANCE) {
            break;
        }
    }

    x
}

///
/// Finds a root between two points where the polynomial has different signs
///
fn bisection(polynomial: &BernsteinPolynomial, start: f64, end: f64) -> f64 {
    let mut low = start;
    let mut high = end;
    let mut guess = (start + end) / 2.0;
    let low_sign = polynomial.value(low) > 0.0;

    for _ in 0..BISECTION_MAX_ITERATIONS {
        if high - low <= BISECTION_TOLERANCE {
            break;
        }

        guess = (low + high) / 2.0;
        let value = polynomial.value(guess);

        if value == 0.0 {
            return guess;
        } else if (value > 0.0) == low_sign {
            low = guess;
        } else {
            high = guess;
        }
    }

    guess
}

///
/// Finds the roots of a polynomial between two t values (not including the end points themselves)
///
fn find_roots(polynomial: &BernsteinPolynomial, start: f64, end: f64) -> Vec<f64> {
    let order = polynomial.order();

    if order == 0 {
        return vec![];
    }

    if order < 4 {
        return droots(polynomial.coefficients())
            .into_iter()
            .filter(|t| *t > start && *t < end)
            .collect();
    }

    // Split the range at the critical points, so each interval has at most one root
    let derivative = polynomial.derivative();
    let critical_points = find_roots(&derivative, start, end);
    let intervals = Some(start)
        .into_iter()
        .chain(critical_points)
        .chain(Some(end))
        .collect::<Vec<_>>();

    let mut roots: Vec<f64> = vec![];

    for interval in intervals.windows(2) {
        let (start, end) = (interval[0], interval[1]);
        let f_start = polynomial.value(start);
        let f_end = polynomial.value(end);

        let root = if f_start * f_end < 0.0 {
            let newton_root = newton(polynomial, &derivative, (start + end) / 2.0);

            if start < newton_root && newton_root < end {
                newton_root
            } else {
                // Newton's method went to the wrong root
                bisection(polynomial, start, end)
            }
        } else {
            // Might be a root at the end of the interval where the polynomial touches 0
            let value = newton(polynomial, &derivative, end);

            if !((value - end).abs() < DISTINCT_ROOT_DISTANCE) {
                continue;
            }
            if !(polynomial.value(value).abs() < ROOT_VALUE_TOLERANCE) {
                continue;
            }

            value
        };

        if let Some(last_root) = roots.last() {
            if !(last_root + DISTINCT_ROOT_DISTANCE < root) {
                continue;
            }
        }

        roots.push(root);
    }

    roots
}

///
/// Finds the distinct roots of a polynomial strictly between 0 and 1
///
/// This solves polynomials up to degree 3 directly and uses Newton's method around the critical points
/// for higher degrees. It's faster than bezier clipping but can miss roots that are very close together.
///
pub fn find_distinct_roots_in_unit_interval(polynomial: &BernsteinPolynomial) -> Vec<f64> {
    find_roots(polynomial, 0.0, 1.0)
}

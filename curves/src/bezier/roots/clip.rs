/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::bernstein::*;
use crate::consts::*;
use crate::geo::*;

#[inline]
fn lerp(first: f64, second: f64, t: f64) -> f64 {
    (1.0 - t) * first + t * second
}

///
/// True if the sign changes between two values (a change to or from 0 doesn't count)
///
#[inline]
fn skipped_root(first: f64, second: f64) -> bool {
    (first > 0.0 && second < 0.0) || (first < 0.0 && second > 0.0)
}

///
/// Finds the range of t values where the convex hull of the polynomial's control polygon meets the x axis
///
fn hull_crossings(polynomial: &BernsteinPolynomial) -> Bounds<f64> {
    let coefficients = polynomial.coefficients();
    let n = polynomial.order();
    let mut crossings = Bounds::<f64>::empty();

    for i in 0..n {
        for j in (i + 1)..=n {
            let (x1, y1) = (i as f64 / n as f64, coefficients[i]);
            let (x2, y2) = (j as f64 / n as f64, coefficients[j]);

            if y1 == 0.0 && y2 == 0.0 {
                // The whole span lies on the axis
                crossings = crossings.union_point(x1).union_point(x2);
                continue;
            }

            let t_line = -y1 / (y2 - y1);
            if (0.0..=1.0).contains(&t_line) {
                crossings = crossings.union_point(lerp(x1, x2, t_line));
            }
        }
    }

    crossings
}

///
/// Finds the roots of a polynomial that has been clipped from the range `range_start..range_end` of the original
///
fn roots_in_range(
    polynomial: &BernsteinPolynomial,
    range_start: f64,
    range_end: f64,
    threshold: f64,
    depth: usize,
    roots: &mut Vec<f64>,
) {
    let crossings = hull_crossings(polynomial);
    let (lower, upper) = (crossings.min(), crossings.max());

    if !lower.is_finite() || !upper.is_finite() {
        // The hull doesn't meet the x axis so there are no roots here
        return;
    }

    if depth >= MAX_ROOT_FINDER_DEPTH {
        roots.push(lerp(range_start, range_end, lerp(lower, upper, 0.5)));
        return;
    }

    if upper - lower >= ROOT_SPLIT_FRACTION {
        // Converging slowly (probably several roots close together): search each half separately
        let range_mid = lerp(range_start, range_end, 0.5);
        let (left, right) = polynomial.split_at(0.5);

        roots_in_range(&left, range_start, range_mid, threshold, depth + 1, roots);
        roots_in_range(&right, range_mid, range_end, threshold, depth + 1, roots);
        return;
    }

    let next_start = lerp(range_start, range_end, lower);
    let next_end = lerp(range_start, range_end, upper);

    if next_end - next_start <= threshold {
        roots.push(lerp(next_start, next_end, 0.5));
        return;
    }

    let subcurve = polynomial.split_range(lower, upper);

    // Rounding can occasionally step over a root, which shows up as a sign change between the old and new end points
    let first = polynomial.coefficients()[0];
    let last = polynomial.coefficients()[polynomial.order()];
    let sub_first = subcurve.coefficients()[0];
    let sub_last = subcurve.coefficients()[subcurve.order()];

    if skipped_root(first, sub_first) {
        roots.push(next_start);
    }

    roots_in_range(&subcurve, next_start, next_end, threshold, depth + 1, roots);

    if skipped_root(sub_last, last) {
        roots.push(next_end);
    }
}

impl BernsteinPolynomial {
    ///
    /// Returns the distinct real roots of this polynomial in the range 0..=1, in ascending order
    ///
    /// The threshold is the width of the interval that's considered to contain a single root. A polynomial
    /// whose coefficients are all 0 has infinitely many roots and returns none.
    ///
    pub fn distinct_real_roots_in_unit_interval(&self, threshold: f64) -> Vec<f64> {
        test_assert!(threshold >= MIN_ROOT_THRESHOLD);
        let threshold = threshold.max(MIN_ROOT_THRESHOLD);

        if self.is_zero() {
            return vec![];
        }

        let mut roots = vec![];
        roots_in_range(self, 0.0, 1.0, threshold, 0, &mut roots);

        roots.dedup();
        roots
    }
}

///
/// Finds the distinct real roots of a polynomial in the range 0..=1 using the default threshold
///
pub fn find_roots_in_unit_interval(polynomial: &BernsteinPolynomial) -> Vec<f64> {
    polynomial.distinct_real_roots_in_unit_interval(ROOT_THRESHOLD)
}

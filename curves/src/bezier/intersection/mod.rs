/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Curve intersections
//!
//! `curve_intersections()` finds where any two curves meet. Lines are solved directly, curves against lines by
//! rotating the curve so the line lies on the x axis, and pairs of curves by substituting one curve into the
//! implicit form of the other. Each intersection is a pair of t values, one for each curve.
//!
//! Curves that lie along each other for part of their length are reported as 'coincident': the result is
//! the two intersections at either end of the shared section.
//!

mod coincidence;
mod curve_curve;
mod curve_line;
mod intersection;
mod line_line;
mod pair_iteration;
mod self_intersection;

pub use self::coincidence::*;
pub use self::curve_curve::*;
pub use self::curve_line::*;
pub use self::intersection::*;
pub use self::line_line::*;
pub use self::pair_iteration::*;
pub use self::self_intersection::*;

use super::curve::*;

///
/// Finds the points where two curves meet, sorted by t value on the first curve
///
/// `accuracy` is the distance within which two points are considered to be the same.
///
pub fn curve_intersections(curve1: &Curve, curve2: &Curve, accuracy: f64) -> Vec<Intersection> {
    match (curve1, curve2) {
        (Curve::Line(line1), Curve::Line(line2)) => line_line_intersections(line1, line2, true),
        (_, Curve::Line(line2)) => curve_line_intersections(curve1, line2),
        (Curve::Line(line1), _) => line_curve_intersections(line1, curve2),
        _ => curve_curve_intersections(curve1, curve2, accuracy),
    }
}

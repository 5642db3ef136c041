/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coincidence::*;
use super::intersection::*;
use super::line_line::*;
use crate::bezier::curve::*;
use crate::bezier::line_segment::*;
use crate::bezier::roots::*;
use crate::consts::*;
use crate::geo::*;

use smallvec::*;

/// How far outside of the range 0..1 a root can be and still count as an intersection (before snapping)
const T_OVERSHOOT: f64 = 1e-8;

///
/// Finds the points where a curve crosses a line segment
///
/// The curve is rotated so the line lies along the x axis, so the intersections are the roots of the
/// rotated curve's y polynomial.
///
pub fn curve_line_intersections<CurveType: BezierCurve>(curve: &CurveType, line: &LineSegment) -> Vec<Intersection> {
    if !line.bounding_box().overlaps(&curve.bounding_box()) {
        return vec![];
    }

    if let Some(coincidence) = coincidence_check(curve, line, LINE_COINCIDENCE_ACCURACY) {
        return coincidence;
    }

    let direction = line.direction();
    let length_squared = direction.length_squared();
    if !(length_squared > 0.0) {
        return vec![];
    }

    let perpendicular = direction.perpendicular();
    let aligned = curve
        .points()
        .iter()
        .map(|point| (*point - line.p0).dot(&perpendicular))
        .collect::<SmallVec<[f64; 4]>>();

    let intersections = droots(&aligned)
        .into_iter()
        .filter(|t1| *t1 >= -T_OVERSHOOT && *t1 <= 1.0 + T_OVERSHOOT)
        .filter_map(|t1| {
            let t2 = (curve.point_at(t1) - line.p0).dot(&direction) / length_squared;

            if t2 >= -T_OVERSHOOT && t2 <= 1.0 + T_OVERSHOOT {
                Some(Intersection::new(snap_t(t1), snap_t(t2)))
            } else {
                None
            }
        })
        .collect();

    sorted_and_uniqued_intersections(intersections)
}

///
/// Finds the points where a line segment crosses a curve (t1 is on the line, t2 on the curve)
///
pub fn line_curve_intersections<CurveType: BezierCurve>(line: &LineSegment, curve: &CurveType) -> Vec<Intersection> {
    let intersections = curve_line_intersections(curve, line)
        .into_iter()
        .map(|intersection| intersection.swapped())
        .collect();

    sorted_and_uniqued_intersections(intersections)
}

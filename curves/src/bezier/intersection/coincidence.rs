/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::intersection::*;
use crate::bezier::curve::*;
use crate::geo::*;

///
/// Returns the t value of the closest point on a curve if the point is within `2 * accuracy` of it
///
fn t_if_close_to_curve<CurveType: BezierCurve>(point: Coord2, curve: &CurveType, accuracy: f64) -> Option<f64> {
    let (projection, t) = curve.project(point);

    if distance_squared(point, projection) < 4.0 * accuracy * accuracy {
        Some(t)
    } else {
        None
    }
}

///
/// Determines if two curves overlap along a section of their length
///
/// Returns the intersections at the start and end of the overlapping section, or `None` if the curves
/// are not coincident. Sections shorter than `accuracy` are not considered coincident unless one curve
/// is entirely contained in the other.
///
pub fn coincidence_check<Curve1: BezierCurve, Curve2: BezierCurve>(
    curve1: &Curve1,
    curve2: &Curve2,
    accuracy: f64,
) -> Option<Vec<Intersection>> {
    let mut range1_start = f64::INFINITY;
    let mut range1_end = f64::NEG_INFINITY;
    let mut range2_start = f64::INFINITY;
    let mut range2_end = f64::NEG_INFINITY;

    if range1_start > 0.0 || range2_start > 0.0 || range2_end < 1.0 {
        if let Some(t2) = t_if_close_to_curve(curve1.start_point(), curve2, accuracy) {
            range1_start = 0.0;
            range2_start = range2_start.min(t2);
            range2_end = range2_end.max(t2);
        }
    }

    if range1_end < 1.0 || range2_start > 0.0 || range2_start < 1.0 {
        if let Some(t2) = t_if_close_to_curve(curve1.end_point(), curve2, accuracy) {
            range1_end = 1.0;
            range2_start = range2_start.min(t2);
            range2_end = range2_end.max(t2);
        }
    }

    if range2_start > 0.0 || range1_start > 0.0 || range1_end < 1.0 {
        if let Some(t1) = t_if_close_to_curve(curve2.start_point(), curve1, accuracy) {
            range2_start = 0.0;
            range1_start = range1_start.min(t1);
            range1_end = range1_end.max(t1);
        }
    }

    if range2_end < 1.0 || range1_start > 0.0 || range1_end < 1.0 {
        if let Some(t1) = t_if_close_to_curve(curve2.end_point(), curve1, accuracy) {
            range2_end = 1.0;
            range1_start = range1_start.min(t1);
            range1_end = range1_end.max(t1);
        }
    }

    if !(range1_end > range1_start) || !(range2_end > range2_start) {
        return None;
    }

    let curve1_start = curve1.point_at(range1_start);
    let curve1_end = curve1.point_at(range1_end);
    let curve2_start = curve2.point_at(range2_start);
    let curve2_end = curve2.point_at(range2_end);

    // Partial overlaps must be at least `accuracy` long
    if range1_end - range1_start < 1.0 && range2_end - range2_start < 1.0 {
        if distance_squared(curve1_start, curve1_end) < accuracy * accuracy {
            return None;
        }
        if distance_squared(curve2_start, curve2_end) < accuracy * accuracy {
            return None;
        }
    }

    let reversed = distance_squared(curve1_start, curve2_start) > distance_squared(curve1_start, curve2_end);

    let first_t1 = range1_start;
    let second_t1 = range1_end;
    let (first_t2, second_t2) = if reversed { (range2_end, range2_start) } else { (range2_start, range2_end) };

    // Check some points in between the ends as well (one more point for each order above linear)
    let points_to_test = curve1.order().max(curve2.order()) - 1;
    if points_to_test > 0 {
        let delta = (second_t1 - first_t1) / ((points_to_test + 1) as f64);

        for idx in 1..=points_to_test {
            let t = first_t1 + delta * (idx as f64);

            if t_if_close_to_curve(curve1.point_at(t), curve2, accuracy).is_none() {
                return None;
            }
        }
    }

    Some(vec![Intersection::new(first_t1, first_t2), Intersection::new(second_t1, second_t2)])
}

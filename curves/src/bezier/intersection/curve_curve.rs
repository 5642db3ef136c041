/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coincidence::*;
use super::intersection::*;
use super::pair_iteration::*;
use crate::bezier::curve::*;
use crate::bezier::implicit::*;
use crate::bezier::line_segment::*;
use crate::consts::*;
use crate::geo::*;

///
/// An upper bound on the speed of a curve (its order multiplied by the length of its longest control leg)
///
fn derivative_bounds(curve: &Curve) -> f64 {
    let points = curve.points();
    let longest_leg = points
        .windows(2)
        .map(|leg| leg[0].distance_to(&leg[1]))
        .fold(0.0, f64::max);

    (curve.order() as f64) * longest_leg
}

///
/// If every control point of a curve is within `tolerance` of a single line, returns that line
///
/// Such curves have an implicit form that's zero everywhere (or very nearly), so the line is used in its place.
///
fn collinear_baseline(curve: &Curve, tolerance: f64) -> Option<LineSegment> {
    if curve.order() < 2 {
        return None;
    }

    let points = curve.points();
    let start = points[0];
    let furthest = points
        .iter()
        .copied()
        .fold(start, |furthest, point| {
            if distance_squared(start, point) > distance_squared(start, furthest) {
                point
            } else {
                furthest
            }
        });

    let direction = furthest - start;
    let length = direction.length();
    if length == 0.0 {
        return None;
    }

    let all_close = points
        .iter()
        .all(|point| ((*point - start).cross(&direction) / length).abs() <= tolerance);

    if all_close {
        Some(LineSegment::new(start, furthest))
    } else {
        None
    }
}

///
/// Finds the intersections between two curves by substituting the first curve into the implicit form of the
/// second
///
/// Curves that overlap along part of their length return the two ends of the overlapping section.
///
pub fn curve_curve_intersections(curve1: &Curve, curve2: &Curve, accuracy: f64) -> Vec<Intersection> {
    if !curve1.bounding_box().overlaps(&curve2.bounding_box()) {
        return vec![];
    }

    if let Some(coincidence) = coincidence_check(curve1, curve2, 0.1 * accuracy) {
        return coincidence;
    }

    // Move curve2 to the origin to keep the implicit form well-conditioned
    let insignificant_distance = 0.5 * accuracy;
    let offset = -curve2.start_point();
    let c1 = curve1.translated(offset);
    let c2 = curve2.downgraded_if_possible(insignificant_distance).translated(offset);

    let implicit = match collinear_baseline(&c2, insignificant_distance) {
        Some(baseline) => baseline.implicit_polynomial(),
        None => c2.implicit_polynomial(),
    };
    let equation = implicit.value(&c1.x_polynomial(), &c1.y_polynomial());

    if equation.is_zero() {
        // Every point of curve1 satisfies the equation, so it can't tell us anything
        return curve_intersections_by_subdivision(curve1, curve2, accuracy);
    }

    let roots = equation.distinct_real_roots_in_unit_interval(MIN_ROOT_THRESHOLD);

    let t1_tolerance = insignificant_distance / derivative_bounds(&c1);
    let t2_tolerance = insignificant_distance / derivative_bounds(&c2);
    let c2_bounds = c2.bounding_box();

    let intersection_if_close_enough = |t1: f64| {
        let point = c1.point_at(t1);
        if !c2_bounds.contains(&point) {
            return None;
        }

        let (_, mut t2) = c2.project(point);
        if t2 < t2_tolerance {
            t2 = 0.0;
        } else if t2 > 1.0 - t2_tolerance {
            t2 = 1.0;
        }

        if point.distance_to(&c2.point_at(t2)) < accuracy {
            Some(Intersection::new(t1, t2))
        } else {
            None
        }
    };

    // Intersections near the ends are found by checking the end points directly
    let mut intersections = roots
        .into_iter()
        .filter(|t1| *t1 >= t1_tolerance && *t1 <= 1.0 - t1_tolerance)
        .filter_map(|t1| intersection_if_close_enough(t1))
        .collect::<Vec<_>>();

    for end_t in [0.0, 1.0] {
        if !intersections.iter().any(|intersection| intersection.t1 == end_t) {
            if let Some(intersection) = intersection_if_close_enough(end_t) {
                intersections.push(intersection);
            }
        }
    }

    sorted_and_uniqued_intersections(intersections)
}

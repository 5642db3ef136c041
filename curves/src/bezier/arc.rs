/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::curve::*;
use super::offset::*;
use crate::consts::*;
use crate::geo::*;

use std::f64::consts::PI;

///
/// A section of a circle, along with the range of t values of the curve that it approximates
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct CircularArc {
    /// The center of the circle
    pub origin: Coord2,

    /// The radius of the circle
    pub radius: f64,

    /// Angle (in radians) of the start of the arc
    pub start_angle: f64,

    /// Angle (in radians) of the end of the arc. This can be less than the start angle for a clockwise arc
    pub end_angle: f64,

    /// The t values on the approximated curve that this arc covers
    pub interval: (f64, f64),
}

impl CircularArc {
    ///
    /// Creates an arc covering the whole of a curve
    ///
    pub fn new(origin: Coord2, radius: f64, start_angle: f64, end_angle: f64) -> CircularArc {
        CircularArc {
            origin,
            radius,
            start_angle,
            end_angle,
            interval: (0.0, 1.0),
        }
    }

    ///
    /// The same arc, covering a different range of t values
    ///
    pub fn with_interval(self, t1: f64, t2: f64) -> CircularArc {
        CircularArc {
            interval: (t1, t2),
            ..self
        }
    }

    ///
    /// Creates the arc that starts at `start`, passes through `middle` and finishes at `end`
    ///
    /// Returns `None` if the points are on a straight line (or two of them are the same)
    ///
    pub fn through_points(start: Coord2, middle: Coord2, end: Coord2) -> Option<CircularArc> {
        // The center is where the perpendicular bisectors of the two chords meet
        let mid1 = (start + middle) * 0.5;
        let mid2 = (middle + end) * 0.5;
        let origin = lines_intersection(
            (mid1, mid1 + (middle - start).perpendicular()),
            (mid2, mid2 + (end - middle).perpendicular()),
        )?;

        let radius = origin.distance_to(&start);
        if !radius.is_finite() {
            return None;
        }

        let angle_of = |point: Coord2| (point.1 - origin.1).atan2(point.0 - origin.0);
        let start_angle = angle_of(start);
        let to_middle = (angle_of(middle) - start_angle).rem_euclid(2.0 * PI);
        let to_end = (angle_of(end) - start_angle).rem_euclid(2.0 * PI);

        // Sweep in whichever direction reaches the middle point before the end point
        let end_angle = if to_middle <= to_end {
            start_angle + to_end
        } else {
            start_angle - (2.0 * PI - to_end)
        };

        Some(CircularArc::new(origin, radius, start_angle, end_angle))
    }

    ///
    /// The point on the arc at a position t between 0 (the start angle) and 1 (the end angle)
    ///
    pub fn point_at(&self, t: f64) -> Coord2 {
        let theta = self.start_angle + (self.end_angle - self.start_angle) * t;
        self.origin + Coord2(theta.cos(), theta.sin()) * self.radius
    }

    ///
    /// How far the section of the curve between t1 and t2 strays from this arc
    ///
    /// This is measured at the quarter points of the section, as the sum of the differences between their
    /// distance from the origin and the radius.
    ///
    pub fn error_for<CurveType: BezierCurve>(&self, curve: &CurveType, t1: f64, t2: f64) -> f64 {
        let quarter = (t2 - t1) / 4.0;
        let d1 = self.origin.distance_to(&curve.point_at(t1 + quarter));
        let d2 = self.origin.distance_to(&curve.point_at(t2 - quarter));

        (d1 - self.radius).abs() + (d2 - self.radius).abs()
    }
}

///
/// Finds the widest arc starting at t1 that stays within `error_threshold` of the curve
///
/// The end point is found by a binary search: it grows by half the current range while the arc is good
/// and drops to the midpoint when it's bad. The result is the last good arc once a bad one follows it.
///
fn widest_arc_from<CurveType: BezierCurve>(curve: &CurveType, t1: f64, error_threshold: f64) -> Option<CircularArc> {
    let start = curve.point_at(t1);
    let mut t2 = 1.0;
    let mut best: Option<CircularArc> = None;
    let mut last_tried = None;

    for _ in 0..MAX_ARC_SEARCH_ITERATIONS {
        let middle_t = (t1 + t2) / 2.0;
        let arc = CircularArc::through_points(start, curve.point_at(middle_t), curve.point_at(t2))
            .map(|arc| arc.with_interval(t1, t2));
        let is_good = arc.map(|arc| arc.error_for(curve, t1, t2) <= error_threshold).unwrap_or(false);

        if is_good {
            if t2 >= 1.0 {
                return arc;
            }

            best = arc;
            t2 = (t2 + (t2 - t1) / 2.0).min(1.0);
        } else {
            if best.is_some() {
                return best;
            }

            last_tried = arc.or(last_tried);
            t2 = middle_t;
        }
    }

    log::debug!("Arc search from t={} ran out of iterations", t1);
    best.or(last_tried)
}

///
/// Approximates a curve with a series of circular arcs, each within `error_threshold` of the curve
///
/// The arcs cover the curve in order, each one starting at the t value where the last one finished.
/// Straight sections can't be represented by an arc: the result stops at the first such section,
/// so a straight line produces no arcs at all.
///
pub fn approximate_with_arcs<CurveType: BezierCurve>(curve: &CurveType, error_threshold: f64) -> Vec<CircularArc> {
    let mut arcs = vec![];
    let mut t1 = 0.0;

    while t1 < 1.0 {
        let arc = match widest_arc_from(curve, t1, error_threshold) {
            Some(arc) => arc,
            None => {
                log::debug!("No arc can be fitted to the curve at t={}", t1);
                break;
            }
        };

        let (_, t2) = arc.interval;
        if t2 <= t1 {
            break;
        }

        arcs.push(arc);
        t1 = t2;
    }

    arcs
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coincidence::*;
use super::intersection::*;
use crate::bezier::curve::*;
use crate::bezier::line_segment::*;
use crate::consts::*;
use crate::geo::*;

///
/// Moves a t value to exactly 0 or 1 if it's very close to one of those values
///
#[inline]
pub(crate) fn snap_t(t: f64) -> f64 {
    if t.abs() <= T_SNAP_DISTANCE {
        0.0
    } else if (t - 1.0).abs() <= T_SNAP_DISTANCE {
        1.0
    } else {
        t
    }
}

///
/// Finds where two line segments meet
///
/// Lines that share an end point always report that point as their intersection. If `check_coincidence` is
/// set, overlapping lines return the two ends of the overlapping section.
///
pub fn line_line_intersections(line1: &LineSegment, line2: &LineSegment, check_coincidence: bool) -> Vec<Intersection> {
    if line1.is_point() || line2.is_point() {
        return vec![];
    }

    if !line1.bounding_box().overlaps(&line2.bounding_box()) {
        return vec![];
    }

    if check_coincidence {
        if let Some(coincidence) = coincidence_check(line1, line2, LINE_COINCIDENCE_ACCURACY) {
            return coincidence;
        }
    }

    if line1.p1 == line2.p1 {
        return vec![Intersection::new(1.0, 1.0)];
    } else if line1.p1 == line2.p0 {
        return vec![Intersection::new(1.0, 0.0)];
    } else if line1.p0 == line2.p1 {
        return vec![Intersection::new(0.0, 1.0)];
    } else if line1.p0 == line2.p0 {
        return vec![Intersection::new(0.0, 0.0)];
    }

    let a1 = line1.p0;
    let b1 = line1.direction();
    let a2 = line2.p0;
    let b2 = line2.direction();

    // Solve a1 + t1*b1 = a2 + t2*b2 using Cramer's rule
    let a = b1.x();
    let b = -b2.x();
    let c = b1.y();
    let d = -b2.y();
    let e = a2.x() - a1.x();
    let f = a2.y() - a1.y();

    let inv_det = 1.0 / (a * d - b * c);
    if !inv_det.is_finite() {
        // Parallel
        return vec![];
    }

    let t1 = snap_t((e * d - b * f) * inv_det);
    let t2 = snap_t((a * f - e * c) * inv_det);

    if !(0.0..=1.0).contains(&t1) || !(0.0..=1.0).contains(&t2) {
        return vec![];
    }

    vec![Intersection::new(t1, t2)]
}

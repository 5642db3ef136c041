/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::curve::*;
use crate::geo::*;

///
/// Finds the point where two infinite lines (each given as two points) cross
///
/// Returns `None` for parallel lines
///
pub fn lines_intersection(line1: (Coord2, Coord2), line2: (Coord2, Coord2)) -> Option<Coord2> {
    let (Coord2(x1, y1), Coord2(x2, y2)) = line1;
    let (Coord2(x3, y3), Coord2(x4, y4)) = line2;

    let d = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if d == 0.0 || !d.is_finite() {
        return None;
    }

    let a = x1 * y2 - y1 * x2;
    let b = x3 * y4 - y3 * x4;
    let n = (line2.0 - line2.1) * a - (line1.0 - line1.1) * b;

    Some(n * (1.0 / d))
}

///
/// Scales a curve about the point where its end normals meet, so that it ends up roughly `distance` away
///
/// This only produces a good result for 'simple' curves, and returns `None` when the normals can't be
/// calculated.
///
pub fn scale_curve<CurveType: BezierCurve>(curve: &CurveType, distance: f64) -> Option<CurveType> {
    let order = curve.order();
    if order == 0 {
        return Some(curve.clone());
    }

    let n1 = curve.normal_at(0.0);
    let n2 = curve.normal_at(1.0);
    if !n1.is_finite() || !n2.is_finite() {
        return None;
    }

    let start = curve.start_point();
    let end = curve.end_point();
    let origin = lines_intersection((start, start + n1), (end, end - n2));
    let points = curve.points();

    Some(curve.map_points(|index, point| {
        let reference_is_start = (index < 2 && order > 1) || (index == 0 && order == 1);
        let (reference_t, reference_index) = if reference_is_start { (0.0, 0) } else { (1.0, order) };
        let reference_point = curve.offset_at(reference_t, distance);

        if index == 0 || index == order {
            return reference_point;
        }

        let tangent = curve.normal_at(reference_t).perpendicular();
        let through_origin = origin
            .and_then(|origin| lines_intersection((reference_point, reference_point + tangent), (origin, point)));

        match through_origin {
            Some(scaled) => scaled,
            None => reference_point + (points[index] - points[reference_index]),
        }
    }))
}

///
/// Closes the gaps between a sequence of curves: each curve starts where the last one ends, and each end
/// point is moved halfway towards the start of the next curve
///
pub fn ensure_continuous(curves: &mut [Curve]) {
    for idx in 0..curves.len() {
        if idx > 0 {
            let previous_end = curves[idx - 1].end_point();
            curves[idx] = curves[idx].with_start_point(previous_end);
        }

        if idx + 1 < curves.len() {
            let midpoint = (curves[idx].end_point() + curves[idx + 1].start_point()) * 0.5;
            curves[idx] = curves[idx].with_end_point(midpoint);
        }
    }
}

///
/// Computes a set of curves that are `distance` away from a curve, along its normal
///
pub fn offset_curve<CurveType: BezierCurve>(curve: &CurveType, distance: f64) -> Vec<Curve> {
    let mut result = curve
        .reduce()
        .into_iter()
        .filter_map(|section| section.curve.scale(distance))
        .map(|scaled| scaled.to_curve())
        .collect::<Vec<_>>();

    ensure_continuous(&mut result);
    result
}

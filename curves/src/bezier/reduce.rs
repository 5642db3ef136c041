/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::curve::*;
use super::subcurve::*;
use crate::consts::*;

///
/// Finds the largest value in `min..max` for which `accept` is still true (assuming it is true at `min`)
///
fn bisect_acceptable<AcceptFn: Fn(f64) -> bool>(min: f64, max: f64, tolerance: f64, accept: AcceptFn) -> f64 {
    let mut lower = min;
    let mut upper = max;

    while upper - lower > tolerance {
        let mid = 0.5 * (lower + upper);

        if accept(mid) {
            lower = mid;
        } else {
            upper = mid;
        }
    }

    lower
}

///
/// Splits a curve into sections that are 'simple' (see `BezierCurve::is_simple()`)
///
/// The curve is first divided at its extrema, then each section is divided again wherever it stops being
/// simple.
///
pub fn reduce_to_simple_sections<CurveType: BezierCurve>(curve: &CurveType) -> Vec<Subcurve<CurveType>> {
    let step = REDUCE_STEP_SIZE;

    // Extrema too close to the ends or to each other would produce tiny sections
    let mut split_points = vec![0.0];
    for t in curve.extrema().all {
        let last = split_points.last().copied().unwrap_or(0.0);

        if t < step || 1.0 - t < step || t - last < step {
            continue;
        }

        split_points.push(t);
    }
    split_points.push(1.0);

    let first_pass = split_points
        .windows(2)
        .map(|range| Subcurve::with_range(range[0], range[1], curve.split_range(range[0], range[1])))
        .collect::<Vec<_>>();

    let mut result = Vec::with_capacity(first_pass.len());

    for section in first_pass {
        let adjusted_step = step / (section.t2 - section.t1);
        let mut t1 = 0.0;

        while t1 < 1.0 {
            let full_section = section.split_range(t1, 1.0);

            if 1.0 - t1 <= adjusted_step || full_section.curve.is_simple() {
                result.push(full_section);
                t1 = 1.0;
            } else {
                let t2 = bisect_acceptable(t1 + adjusted_step, 1.0, adjusted_step, |t2| {
                    section.split_range(t1, t2).curve.is_simple()
                });

                result.push(section.split_range(t1, t2));
                t1 = t2;
            }
        }
    }

    result
}

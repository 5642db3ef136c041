/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::intersection::*;
use crate::bezier::cubic::*;
use crate::geo::*;

///
/// Where the end point of a cubic lands once the curve is transformed into canonical form, along with the
/// discriminant that decides where the loop is
///
/// The canonical form maps p0 to (0, 0), p1 to (0, 1) and p2 to (1, 1): the position of p3 then decides if
/// the curve has a loop. See https://pomax.github.io/bezierinfo/#canonical
///
fn canonical_loop(curve: &CubicCurve) -> Option<(f64, Coord2)> {
    let d1 = curve.p1 - curve.p0;
    let d2 = curve.p2 - curve.p0;

    let (a, c) = (d1.x(), d1.y());
    let (b, d) = (d2.x(), d2.y());
    let det = a * d - b * c;
    if det == 0.0 {
        return None;
    }

    let d3 = curve.p3 - curve.p0;
    let x = (1.0 / det) * (-c * d3.x() + a * d3.y());
    let y = (1.0 / det) * ((d - c) * d3.x() + (a - b) * d3.y());

    if !(x < 1.0) {
        return None;
    }

    let x_squared = x * x;
    let cusp_edge = -3.0 * x_squared + 6.0 * x - 12.0 * y + 9.0;
    if !(cusp_edge > 0.0) {
        return None;
    }

    if x <= 0.0 {
        let loop_at_t_zero = (-x_squared + 3.0 * x) / 3.0;
        if !(y >= loop_at_t_zero) {
            return None;
        }
    } else {
        let loop_at_t_one = ((3.0 * (4.0 * x - x_squared)).sqrt() - x) / 2.0;
        if !(y >= loop_at_t_one) {
            return None;
        }
    }

    Some((cusp_edge, Coord2(x, y)))
}

///
/// True if a cubic curve crosses itself
///
pub fn cubic_self_intersects(curve: &CubicCurve) -> bool {
    canonical_loop(curve).is_some()
}

///
/// Finds the point where a cubic curve crosses itself, as a pair of t values (with t1 < t2)
///
pub fn cubic_self_intersections(curve: &CubicCurve) -> Vec<Intersection> {
    let (discriminant, Coord2(x, y)) = match canonical_loop(curve) {
        Some(canonical) => canonical,
        None => return vec![],
    };

    let radical = discriminant.sqrt();
    let denominator = 3.0 - x - y;
    let t1 = 0.5 * (3.0 - x - radical) / denominator;
    let t2 = 0.5 * (3.0 - x + radical) / denominator;

    vec![Intersection::new(t1.max(0.0).min(1.0), t2.max(0.0).min(1.0))]
}

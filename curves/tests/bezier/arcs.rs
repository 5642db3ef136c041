/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_bezier::bezier::*;

use std::f64::consts::PI;

///
/// True if a set of arcs covers the whole of a curve in order, and each arc stays within the threshold
///
fn is_good_approximation<CurveType: BezierCurve>(arcs: &[CircularArc], curve: &CurveType, error_threshold: f64) -> bool {
    if arcs.is_empty() || arcs[0].interval.0 != 0.0 || arcs[arcs.len() - 1].interval.1 != 1.0 {
        return false;
    }

    let contiguous = arcs.windows(2).all(|pair| pair[0].interval.1 == pair[1].interval.0);
    let increasing = arcs.iter().all(|arc| arc.interval.1 > arc.interval.0);

    let within_threshold = arcs.iter().all(|arc| {
        let (t1, t2) = arc.interval;
        let section = curve.split_range(t1, t2);
        let d1 = arc.origin.distance_to(&section.point_at(0.25));
        let d2 = arc.origin.distance_to(&section.point_at(0.75));

        (arc.radius - d1).abs() + (arc.radius - d2).abs() <= error_threshold + 1e-9
    });

    contiguous && increasing && within_threshold
}

#[test]
fn points_on_an_arc() {
    let arc = CircularArc::new(Coord2(1.0, 1.0), 1.5, 0.0, PI / 2.0);

    assert!(arc.interval == (0.0, 1.0));
    assert!(arc.point_at(0.0).distance_to(&Coord2(2.5, 1.0)) < 1e-6);
    assert!(arc.point_at(1.0).distance_to(&Coord2(1.0, 2.5)) < 1e-6);
    assert!(arc.point_at(0.5).distance_to(&Coord2(1.0 + 1.5 / 2.0_f64.sqrt(), 1.0 + 1.5 / 2.0_f64.sqrt())) < 1e-6);

    assert!(arc != arc.with_interval(0.1, 1.0));
}

#[test]
fn arc_through_three_points() {
    let half_root_2 = 2.0_f64.sqrt() / 2.0;
    let anticlockwise = CircularArc::through_points(Coord2(1.0, 0.0), Coord2(half_root_2, half_root_2), Coord2(0.0, 1.0)).unwrap();

    assert!(anticlockwise.origin.distance_to(&Coord2(0.0, 0.0)) < 1e-9);
    assert!((anticlockwise.radius - 1.0).abs() < 1e-9);
    assert!(anticlockwise.start_angle.abs() < 1e-9);
    assert!((anticlockwise.end_angle - PI / 2.0).abs() < 1e-9);

    // The same points in the other order sweep clockwise
    let clockwise = CircularArc::through_points(Coord2(0.0, 1.0), Coord2(half_root_2, half_root_2), Coord2(1.0, 0.0)).unwrap();
    assert!((clockwise.start_angle - PI / 2.0).abs() < 1e-9);
    assert!(clockwise.end_angle.abs() < 1e-9);
    assert!(clockwise.point_at(0.5).distance_to(&Coord2(half_root_2, half_root_2)) < 1e-9);
}

#[test]
fn arc_that_passes_the_far_side() {
    // Start and end are close together, but the middle point is on the opposite side of the circle
    let arc = CircularArc::through_points(Coord2(1.0, 0.0), Coord2(-1.0, 0.0), Coord2(0.0, -1.0)).unwrap();

    assert!(arc.origin.distance_to(&Coord2(0.0, 0.0)) < 1e-9);
    assert!((arc.end_angle - arc.start_angle - 3.0 * PI / 2.0).abs() < 1e-9);
}

#[test]
fn no_arc_through_a_straight_line() {
    assert!(CircularArc::through_points(Coord2(0.0, 0.0), Coord2(1.0, 1.0), Coord2(2.0, 2.0)).is_none());
    assert!(LineSegment::new(Coord2(0.0, 0.0), Coord2(5.0, 1.0)).arcs(0.5).is_empty());
}

#[test]
fn quarter_circle_is_a_single_arc() {
    let r = 100.0;
    let half_root_2 = 2.0_f64.sqrt() / 2.0;

    // Quadratic that passes through the middle of the quarter circle at t = 0.5
    let start = Coord2(r, 0.0);
    let end = Coord2(0.0, r);
    let middle = Coord2(r * half_root_2, r * half_root_2);
    let q = QuadraticCurve::new(start, middle * 2.0 - (start + end) * 0.5, end);

    let arcs = q.arcs(r);

    assert!(arcs.len() == 1, "{:?}", arcs);
    assert!(arcs[0].origin.distance_to(&Coord2(0.0, 0.0)) < 0.001);
    assert!((arcs[0].radius - r).abs() < 0.001);
    assert!(arcs[0].start_angle.abs() < 0.001);
    assert!((arcs[0].end_angle - PI / 2.0).abs() < 0.001);
    assert!(arcs[0].interval == (0.0, 1.0));
    assert!(is_good_approximation(&arcs, &q, r));
}

#[test]
fn cubic_needs_several_arcs() {
    let c = CubicCurve::new(Coord2(0.0, 0.0), Coord2(0.0, 1.0), Coord2(4.0, 1.0), Coord2(4.0, 0.0));
    let error_threshold = 0.01;

    let arcs = c.arcs(error_threshold);

    assert!(arcs.len() > 1, "{:?}", arcs);
    assert!(is_good_approximation(&arcs, &c, error_threshold), "{:?}", arcs);
}

#[test]
fn s_shaped_cubic_is_covered() {
    let c = CubicCurve::new(Coord2(0.0, 0.0), Coord2(1.0, 2.0), Coord2(2.0, -2.0), Coord2(3.0, 0.0));
    let arcs = c.arcs(0.05);

    assert!(is_good_approximation(&arcs, &c, 0.05), "{:?}", arcs);
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_bezier::bezier::*;

#[test]
fn cubics_meet_in_nine_places() {
    let a = 4.0;
    let c1 = CubicCurve::new(Coord2(0.0, 0.0), Coord2(0.33, a), Coord2(0.66, 1.0 - a), Coord2(1.0, 1.0));
    let c2 = CubicCurve::new(Coord2(0.0, 1.0), Coord2(a, 0.66), Coord2(1.0 - a, 0.33), Coord2(1.0, 0.0));

    let expected = vec![
        Coord2(0.009867618966216286, 0.11635072599233257),
        Coord2(0.03530531425481719, 0.3869680057368261),
        Coord2(0.11629483697722519, 0.9898413631716166),
        Coord2(0.38725276058371816, 0.9636332023660762),
        Coord2(0.49721796591086287, 0.495633320355362),
        Coord2(0.6056909589337255, 0.036054034343778435),
        Coord2(0.880590710796587, 0.010134637339461294),
        Coord2(0.9628624913661753, 0.6053986189382927),
        Coord2(0.9895666738958517, 0.8806493722540778),
    ];

    let intersections = c1.intersections(&c2, 1e-5);
    assert!(intersections.len() == 9, "{:?}", intersections);

    for point in expected {
        assert!(
            intersections
                .iter()
                .any(|intersection| c1.point_at(intersection.t1).distance_to(&point) < 1e-5
                    && c2.point_at(intersection.t2).distance_to(&point) < 1e-5),
            "Missing {:?}",
            point
        );
    }
}

#[test]
fn curve_is_coincident_with_its_reverse() {
    let c = CubicCurve::new(Coord2(-1.0, -1.0), Coord2(0.0, 0.0), Coord2(2.0, 0.0), Coord2(3.0, -1.0));

    let intersections = c.intersections(&c.reversed(), 1e-4);
    assert!(intersections == vec![Intersection::new(0.0, 1.0), Intersection::new(1.0, 0.0)], "{:?}", intersections);
}

#[test]
fn quadratic_is_coincident_with_its_reverse() {
    let q = QuadraticCurve::new(Coord2(0.0, 0.0), Coord2(3.0, 5.0), Coord2(7.0, 1.0));

    let intersections = q.intersections(&q.reversed(), 1e-4);
    assert!(intersections.len() == 2, "{:?}", intersections);
}

#[test]
fn partially_overlapping_sections_of_a_curve() {
    let c = CubicCurve::new(Coord2(-1.0, -1.0), Coord2(0.0, 0.0), Coord2(2.0, 0.0), Coord2(3.0, -1.0));
    let c1 = c.split_range(1.0 / 3.0, 2.0 / 3.0);
    let c2 = c.split_range(1.0 / 5.0, 3.0 / 5.0);

    let intersections = c1.intersections(&c2, 1e-4);
    assert!(intersections.len() == 2, "{:?}", intersections);

    for intersection in intersections {
        assert!(c1.point_at(intersection.t1).distance_to(&c2.point_at(intersection.t2)) < 1e-4);
    }
}

#[test]
fn tangent_curves_meet_at_end_point() {
    let c1 = CubicCurve::new(Coord2(0.0, 0.0), Coord2(0.0, 3.0), Coord2(6.0, 9.0), Coord2(9.0, 9.0));
    let c2 = CubicCurve::new(Coord2(9.0, 9.0), Coord2(8.0, 9.0), Coord2(6.0, 7.0), Coord2(6.0, 6.0));

    assert!(c1.intersections(&c2, 1e-5) == vec![Intersection::new(1.0, 0.0)]);
    assert!(c1.intersections(&c2, 1e-8) == vec![Intersection::new(1.0, 0.0)]);
}

#[test]
fn cubic_that_is_actually_a_line() {
    let cubic_but_actually_linear = CubicCurve::new(Coord2(3.0, 2.0), Coord2(4.0, 3.0), Coord2(5.0, 4.0), Coord2(6.0, 5.0));
    let cubic = CubicCurve::new(Coord2(1.0, 0.0), Coord2(3.0, 6.0), Coord2(5.0, 2.0), Coord2(7.0, 0.0));

    let intersections = cubic.intersections(&cubic_but_actually_linear, 1e-5);
    assert!(intersections.len() == 1, "{:?}", intersections);
    assert!((intersections[0].t1 - 0.5).abs() < 1e-5);
    assert!((intersections[0].t2 - 1.0 / 3.0).abs() < 1e-5);

    // Same answer as a real line
    let line = LineSegment::new(Coord2(3.0, 2.0), Coord2(6.0, 5.0));
    let line_intersections = cubic.intersections(&line, 1e-5);
    assert!(line_intersections.len() == 1);
    assert!(cubic.point_at(line_intersections[0].t1).distance_to(&cubic.point_at(intersections[0].t1)) < 1e-5);
}

#[test]
fn cubic_that_is_actually_a_quadratic() {
    let cubic_but_actually_quadratic = CubicCurve::new(Coord2(1.0, 1.0), Coord2(2.0, 4.0), Coord2(3.0, 4.0), Coord2(4.0, 1.0));
    let cubic = CubicCurve::new(Coord2(0.0, 0.0), Coord2(2.0, 4.0), Coord2(4.0, 3.0), Coord2(6.0, 3.0));

    let intersections = cubic.intersections(&cubic_but_actually_quadratic, 1e-5);
    assert!(intersections.len() == 2, "{:?}", intersections);
    assert!((intersections[0].t1 - 0.23607).abs() < 1e-5);
    assert!((intersections[0].t2 - 0.13880).abs() < 1e-5);
    assert!((intersections[1].t1 - 0.5).abs() < 1e-5);
    assert!((intersections[1].t2 - 2.0 / 3.0).abs() < 1e-5);
}

#[test]
fn cubic_crosses_line_three_times() {
    let c = CubicCurve::new(Coord2(-1.0, 0.0), Coord2(-1.0, 1.0), Coord2(1.0, -1.0), Coord2(1.0, 0.0));
    let l = LineSegment::new(Coord2(-2.0, 0.0), Coord2(2.0, 0.0));

    let intersections = c.intersections(&l, 1e-4);
    assert!(intersections.len() == 3, "{:?}", intersections);

    let expected = [(0.0, 0.25), (0.5, 0.5), (1.0, 0.75)];
    for (intersection, (t1, t2)) in intersections.iter().zip(expected.iter()) {
        assert!((intersection.t1 - t1).abs() < 1e-5);
        assert!((intersection.t2 - t2).abs() < 1e-5);
    }
}

#[test]
fn line_is_coincident_with_cubic_made_from_it() {
    let line = LineSegment::new(Coord2(-4.0, 7.0), Coord2(10.0, 3.0));
    let curve = CubicCurve::from_line(&line);

    let intersections = line.intersections(&curve, 1e-4);
    assert!(intersections.len() == 2, "{:?}", intersections);
    assert!((intersections[0].t1 - 0.0).abs() < 1e-9 && (intersections[0].t2 - 0.0).abs() < 1e-9);
    assert!((intersections[1].t1 - 1.0).abs() < 1e-9 && (intersections[1].t2 - 1.0).abs() < 1e-9);
}

#[test]
fn crossing_lines() {
    let l1 = LineSegment::new(Coord2(0.0, 0.0), Coord2(2.0, 2.0));
    let l2 = LineSegment::new(Coord2(0.0, 2.0), Coord2(2.0, 0.0));

    let intersections = l1.intersections(&l2, 1e-4);
    assert!(intersections.len() == 1);
    assert!((intersections[0].t1 - 0.5).abs() < 1e-12);
    assert!((intersections[0].t2 - 0.5).abs() < 1e-12);
}

#[test]
fn parallel_lines_do_not_meet() {
    let l1 = LineSegment::new(Coord2(0.0, 0.0), Coord2(2.0, 2.0));
    let l2 = LineSegment::new(Coord2(0.0, 1.0), Coord2(2.0, 3.0));

    assert!(l1.intersections(&l2, 1e-4).is_empty());
}

#[test]
fn distant_curves_do_not_meet() {
    let c1 = CubicCurve::new(Coord2(0.0, 0.0), Coord2(1.0, 2.0), Coord2(2.0, 2.0), Coord2(3.0, 0.0));
    let c2 = c1.translated(Coord2(10.0, 10.0));

    assert!(c1.intersections(&c2, 1e-4).is_empty());
}

#[test]
fn looping_cubic_self_intersects() {
    let looping = CubicCurve::new(Coord2(0.0, 0.0), Coord2(3.0, 3.0), Coord2(-1.0, 3.0), Coord2(2.0, 0.0));

    let intersections = looping.self_intersections(1e-5);
    assert!(intersections.len() == 1, "{:?}", intersections);

    let intersection = intersections[0];
    assert!(intersection.t1 < intersection.t2);
    assert!(looping.point_at(intersection.t1).distance_to(&looping.point_at(intersection.t2)) < 1e-6);
}

#[test]
fn simple_cubic_does_not_self_intersect() {
    let arch = CubicCurve::new(Coord2(0.0, 0.0), Coord2(1.0, 2.0), Coord2(2.0, 2.0), Coord2(3.0, 0.0));

    assert!(arch.self_intersections(1e-5).is_empty());
    assert!(LineSegment::new(Coord2(0.0, 0.0), Coord2(1.0, 1.0)).self_intersections(1e-5).is_empty());
}

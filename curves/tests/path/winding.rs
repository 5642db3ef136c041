/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::*;

use flo_bezier::bezier::path::*;
use flo_bezier::bezier::*;

use rand::prelude::*;

#[test]
fn inside_and_outside_square() {
    let square = rectangle(0.0, 0.0, 2.0, 2.0);

    assert!(square.winding_count(Coord2(1.0, 1.0), None) == 1);
    assert!(square.winding_count(Coord2(3.0, 1.0), None) == 0);
    assert!(square.winding_count(Coord2(-1.0, 1.0), None) == 0);
    assert!(square.winding_count(Coord2(1.0, 3.0), None) == 0);

    assert!(square.contains(Coord2(1.0, 1.0), FillRule::Winding));
    assert!(!square.contains(Coord2(3.0, 1.0), FillRule::EvenOdd));
}

#[test]
fn reversed_square_winds_the_other_way() {
    let square = rectangle(0.0, 0.0, 2.0, 2.0).reversed();

    assert!(square.winding_count(Coord2(1.0, 1.0), None) == -1);
    assert!(square.contains(Coord2(1.0, 1.0), FillRule::Winding));
    assert!(square.contains(Coord2(1.0, 1.0), FillRule::EvenOdd));
}

#[test]
fn ray_through_corner_is_counted_once() {
    // A diamond: the ray from (2, 1) passes exactly through the corner at (0, 1)
    let diamond = polygon(&[Coord2(1.0, 0.0), Coord2(2.0, 1.0), Coord2(1.0, 2.0), Coord2(0.0, 1.0)]);

    assert!(diamond.winding_count(Coord2(1.0, 1.0), None) == 1);
    assert!(diamond.winding_count(Coord2(3.0, 1.0), None) == 0);
    assert!(diamond.winding_count(Coord2(-0.5, 1.0), None) == 0);
}

#[test]
fn ray_along_horizontal_edge() {
    // The ray from (3, 1) runs along the edge from (0, 1) to (2, 1)
    let shape = polygon(&[
        Coord2(0.0, 0.0),
        Coord2(2.0, 0.0),
        Coord2(2.0, 1.0),
        Coord2(4.0, 1.0),
        Coord2(4.0, 2.0),
        Coord2(0.0, 2.0),
    ]);

    assert!(shape.winding_count(Coord2(3.0, 1.5), None) == 1);
    assert!(shape.winding_count(Coord2(3.0, 0.5), None) == 0);
    assert!(shape.winding_count(Coord2(1.0, 0.5), None) == 1);
    assert!(shape.winding_count(Coord2(5.0, 1.0), None) == 0);
}

#[test]
fn nested_squares_with_even_odd_and_winding() {
    let outer = rectangle(0.0, 0.0, 5.0, 5.0);
    let inner = rectangle(1.0, 1.0, 3.0, 3.0);
    let path = Path::new(vec![outer.components()[0].clone(), inner.components()[0].clone()]);

    assert!(path.winding_count(Coord2(2.5, 2.5), None) == 2);
    assert!(path.contains(Coord2(2.5, 2.5), FillRule::Winding));
    assert!(!path.contains(Coord2(2.5, 2.5), FillRule::EvenOdd));
    assert!(path.winding_count(Coord2(2.5, 2.5), Some(1)) == 1);
    assert!(path.winding_count(Coord2(0.5, 2.5), None) == 1);
}

#[test]
fn circle_contains_its_center() {
    let circle = circle(Coord2(5.0, 5.0), 3.0);

    assert!(circle.contains(Coord2(5.0, 5.0), FillRule::Winding));
    assert!(circle.contains(Coord2(7.5, 5.0), FillRule::Winding));
    assert!(circle.contains(Coord2(5.0, 2.2), FillRule::Winding));
    assert!(!circle.contains(Coord2(7.5, 7.5), FillRule::Winding));
    assert!(!circle.contains(Coord2(8.5, 5.0), FillRule::Winding));
}

#[test]
fn open_component_winds_zero() {
    let open = Path::from(PathComponent::from_curves(&[
        Curve::Line(LineSegment::new(Coord2(0.0, 0.0), Coord2(2.0, 0.0))),
        Curve::Line(LineSegment::new(Coord2(2.0, 0.0), Coord2(2.0, 2.0))),
        Curve::Line(LineSegment::new(Coord2(2.0, 2.0), Coord2(0.0, 2.0))),
    ]));

    assert!(!open.components()[0].is_closed());
    assert!(open.winding_count(Coord2(1.0, 1.0), None) == 0);
}

#[test]
fn random_points_in_circle_match_distance() {
    let mut rng = StdRng::seed_from_u64(7);
    let circle = circle(Coord2(0.0, 0.0), 10.0);

    for _ in 0..1000 {
        let point = Coord2(rng.gen_range(-12.0..12.0), rng.gen_range(-12.0..12.0));
        let distance = point.length();

        // The cubic approximation is within 0.03% of the radius, so stay clear of the boundary
        if (distance - 10.0).abs() < 0.01 {
            continue;
        }

        assert!(circle.contains(point, FillRule::Winding) == (distance < 10.0), "{:?}", point);
    }
}

#[test]
fn winding_count_with_self_intersection() {
    // Figure of 8: the two halves wind in opposite directions
    let figure_eight = polygon(&[Coord2(0.0, 0.0), Coord2(2.0, 2.0), Coord2(2.0, 0.0), Coord2(0.0, 2.0)]);

    let left = figure_eight.winding_count(Coord2(0.5, 1.0), None);
    let right = figure_eight.winding_count(Coord2(1.5, 1.0), None);

    assert!(left.abs() == 1);
    assert!(right.abs() == 1);
    assert!(left == -right);
}

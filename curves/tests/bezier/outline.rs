/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_bezier::bezier::path::*;
use flo_bezier::bezier::*;
use flo_bezier::DEFAULT_INTERSECTION_ACCURACY;

#[test]
fn outline_of_a_line_is_a_rectangle() {
    let line = LineSegment::new(Coord2(0.0, 0.0), Coord2(10.0, 0.0));
    let outline = line.outline(1.0).unwrap();

    let expected = vec![
        Curve::Line(LineSegment::new(Coord2(0.0, -1.0), Coord2(0.0, 1.0))),
        Curve::Line(LineSegment::new(Coord2(0.0, 1.0), Coord2(10.0, 1.0))),
        Curve::Line(LineSegment::new(Coord2(10.0, 1.0), Coord2(10.0, -1.0))),
        Curve::Line(LineSegment::new(Coord2(10.0, -1.0), Coord2(0.0, -1.0))),
    ];

    assert!(outline.curves() == expected, "{:?}", outline.curves());
    assert!(outline.is_closed());

    let path = Path::from(outline);
    assert!(path.contains(Coord2(5.0, 0.0), FillRule::Winding));
    assert!(path.contains(Coord2(5.0, 0.9), FillRule::Winding));
    assert!(!path.contains(Coord2(5.0, 1.5), FillRule::Winding));
}

#[test]
fn outline_with_different_distances() {
    let line = LineSegment::new(Coord2(0.0, 0.0), Coord2(10.0, 0.0));
    let bounds = line.outline_with_distances(2.0, 0.5).unwrap().bounding_box();

    assert!(bounds.min().distance_to(&Coord2(0.0, -0.5)) < 1e-12, "{:?}", bounds);
    assert!(bounds.max().distance_to(&Coord2(10.0, 2.0)) < 1e-12, "{:?}", bounds);
}

#[test]
fn outline_of_a_cubic() {
    let c = CubicCurve::new(Coord2(0.0, 0.0), Coord2(0.0, 10.0), Coord2(40.0, 10.0), Coord2(40.0, 0.0));
    let sections = c.reduce().len();
    let outline = c.outline(1.0).unwrap();

    assert!(outline.is_closed());
    assert!(outline.number_of_elements() == 2 * sections + 2);

    // A cap, then the offset curve along the normal starting from the offset of the start point
    assert!(outline.element(0).order() == 1);
    assert!(outline.element(1).start_point().distance_to(&c.offset_at(0.0, 1.0)) < 1e-9);
    assert!(outline.element(0).start_point().distance_to(&c.offset_at(0.0, -1.0)) < 1e-9);
    assert!(outline.element(sections + 1).start_point().distance_to(&c.offset_at(1.0, 1.0)) < 1e-9);
    assert!(outline.element(sections + 1).end_point().distance_to(&c.offset_at(1.0, -1.0)) < 1e-9);

    // Every point on the original curve is inside its outline
    let path = Path::from(outline);
    for t in [0.1, 0.3, 0.5, 0.7, 0.9] {
        assert!(path.contains(c.point_at(t), FillRule::Winding), "{}", t);
    }
}

#[test]
fn outline_of_a_point_is_none() {
    let point = LineSegment::new(Coord2(1.0, 1.0), Coord2(1.0, 1.0));

    assert!(point.outline(1.0).is_none());
    assert!(point.outline_shapes(1.0).is_empty());
}

#[test]
fn outline_shapes_follow_the_sections() {
    let c = CubicCurve::new(Coord2(0.0, 0.0), Coord2(0.0, 10.0), Coord2(40.0, 10.0), Coord2(40.0, 0.0));
    let shapes = c.outline_shapes(1.0);

    assert!(shapes.len() == c.reduce().len());
    assert!(shapes.len() > 1);

    // Only the caps at the ends of the curve are on the boundary
    assert!(!shapes[0].start_cap.is_virtual);
    assert!(!shapes[shapes.len() - 1].end_cap.is_virtual);
    assert!(shapes[1..].iter().all(|shape| shape.start_cap.is_virtual));
    assert!(shapes[..shapes.len() - 1].iter().all(|shape| shape.end_cap.is_virtual));

    for shape in shapes.iter() {
        assert!(shape.start_cap.curve.end_point() == shape.forward.start_point());
        assert!(shape.end_cap.curve.start_point() == shape.forward.end_point());
        assert!(shape.end_cap.curve.end_point() == shape.back.start_point());
        assert!(shape.back.end_point() == shape.start_cap.curve.start_point());
    }

    for pair in shapes.windows(2) {
        assert!(pair[0].forward.end_point() == pair[1].forward.start_point());
    }

    // Inner shapes leave out their virtual caps
    assert!(shapes[0].boundary_curves().len() == 3);
}

#[test]
fn crossing_shapes_intersect() {
    let horizontal = LineSegment::new(Coord2(0.0, 0.0), Coord2(10.0, 0.0)).outline_shapes(1.0);
    let vertical = LineSegment::new(Coord2(5.0, -5.0), Coord2(5.0, 5.0)).outline_shapes(1.0);
    let distant = LineSegment::new(Coord2(50.0, -5.0), Coord2(50.0, 5.0)).outline_shapes(1.0);

    assert!(horizontal.len() == 1);
    assert!(horizontal[0].boundary_curves().len() == 4);
    assert!(horizontal[0].bounding_box().min() == Coord2(0.0, -1.0));
    assert!(horizontal[0].bounding_box().max() == Coord2(10.0, 1.0));

    let crossings = horizontal[0].intersections(&vertical[0], DEFAULT_INTERSECTION_ACCURACY);
    assert!(crossings.len() == 4, "{:?}", crossings);
    assert!(crossings.iter().all(|crossing| crossing.intersections.len() == 1));

    assert!(horizontal[0].intersections(&distant[0], DEFAULT_INTERSECTION_ACCURACY).is_empty());
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::*;

use flo_bezier::bezier::path::*;
use flo_bezier::bezier::*;
use flo_bezier::*;

fn square1() -> Path {
    polygon(&[Coord2(0.0, 0.0), Coord2(2.0, 0.0), Coord2(2.0, 2.0), Coord2(0.0, 2.0)])
}

fn square2() -> Path {
    polygon(&[Coord2(1.0, -1.0), Coord2(3.0, -1.0), Coord2(3.0, 1.0), Coord2(1.0, 1.0)])
}

fn line(from: Coord2, to: Coord2) -> Curve {
    Curve::Line(LineSegment::new(from, to))
}

fn cubic(start: Coord2, cp1: Coord2, cp2: Coord2, end: Coord2) -> Curve {
    Curve::Cubic(CubicCurve::new(start, cp1, cp2, end))
}

fn element_counts(path: &Path) -> Vec<usize> {
    path.components().iter().map(|component| component.number_of_elements()).collect()
}

#[test]
fn union_with_self() {
    let square = square1();
    let moved_and_back = square.copy_translated(Coord2(1.0, 1.0)).copy_translated(Coord2(-1.0, -1.0));

    assert!(square.union(&square, DEFAULT_BOOLEAN_ACCURACY) == square);
    assert!(square.union(&moved_and_back, DEFAULT_BOOLEAN_ACCURACY) == square);
}

#[test]
fn intersect_with_self() {
    let square = square1();

    assert!(square.intersect(&square, DEFAULT_BOOLEAN_ACCURACY) == square);
}

#[test]
fn subtract_self() {
    let square = square1();

    assert!(square.subtract(&square, DEFAULT_BOOLEAN_ACCURACY).is_empty());
}

#[test]
fn operations_with_empty_paths() {
    let square = square1();
    let empty = Path::default();

    assert!(square.union(&empty, DEFAULT_BOOLEAN_ACCURACY) == square);
    assert!(empty.union(&square, DEFAULT_BOOLEAN_ACCURACY) == square);
    assert!(square.intersect(&empty, DEFAULT_BOOLEAN_ACCURACY).is_empty());
    assert!(empty.intersect(&square, DEFAULT_BOOLEAN_ACCURACY).is_empty());
    assert!(square.subtract(&empty, DEFAULT_BOOLEAN_ACCURACY) == square);
    assert!(empty.subtract(&square, DEFAULT_BOOLEAN_ACCURACY).is_empty());
}

#[test]
fn subtract_corner_from_square() {
    let result = square1().subtract(&square2(), DEFAULT_BOOLEAN_ACCURACY);
    let expected = polygon(&[
        Coord2(1.0, 0.0),
        Coord2(1.0, 1.0),
        Coord2(2.0, 1.0),
        Coord2(2.0, 2.0),
        Coord2(0.0, 2.0),
        Coord2(0.0, 0.0),
    ]);

    assert!(result.components().len() == 1, "{:?}", result);
    assert!(components_equal_aside_from_element_ordering(&result.components()[0], &expected.components()[0]));
}

#[test]
fn union_overlapping_squares() {
    let result = square1().union(&square2(), DEFAULT_BOOLEAN_ACCURACY);
    let expected = polygon(&[
        Coord2(2.0, 1.0),
        Coord2(2.0, 2.0),
        Coord2(0.0, 2.0),
        Coord2(0.0, 0.0),
        Coord2(1.0, 0.0),
        Coord2(1.0, -1.0),
        Coord2(3.0, -1.0),
        Coord2(3.0, 1.0),
    ]);

    assert!(result.components().len() == 1, "{:?}", result);
    assert!(result.components()[0].number_of_elements() == 8);
    assert!(components_equal_aside_from_element_ordering(&result.components()[0], &expected.components()[0]));
}

#[test]
fn intersect_overlapping_squares() {
    let result = square1().intersect(&square2(), DEFAULT_BOOLEAN_ACCURACY);
    let expected = polygon(&[Coord2(1.0, 0.0), Coord2(2.0, 0.0), Coord2(2.0, 1.0), Coord2(1.0, 1.0)]);

    assert!(result.components().len() == 1, "{:?}", result);
    assert!(components_equal_aside_from_element_ordering(&result.components()[0], &expected.components()[0]));
}

#[test]
fn union_squares_sharing_an_edge() {
    let left = rectangle(0.0, 0.0, 1.0, 1.0);
    let right = rectangle(1.0, 0.0, 1.0, 1.0);
    let result = left.union(&right, DEFAULT_BOOLEAN_ACCURACY);

    assert!(result.components().len() == 1, "{:?}", result);
    assert!(result.components()[0].number_of_elements() == 6);
    assert!(result.contains(Coord2(0.5, 0.5), FillRule::Winding));
    assert!(result.contains(Coord2(1.5, 0.5), FillRule::Winding));
    assert!(!result.contains(Coord2(2.5, 0.5), FillRule::Winding));
}

#[test]
fn union_of_separate_shapes_keeps_both() {
    let result = rectangle(0.0, 0.0, 1.0, 1.0).union(&rectangle(5.0, 5.0, 1.0, 1.0), DEFAULT_BOOLEAN_ACCURACY);

    assert!(result.components().len() == 2);
}

#[test]
fn union_with_contained_shape_keeps_outer() {
    let outer = rectangle(0.0, 0.0, 10.0, 10.0);
    let inner = rectangle(2.0, 2.0, 1.0, 1.0);

    assert!(outer.union(&inner, DEFAULT_BOOLEAN_ACCURACY) == outer);
    assert!(inner.union(&outer, DEFAULT_BOOLEAN_ACCURACY) == outer);
    assert!(outer.intersect(&inner, DEFAULT_BOOLEAN_ACCURACY) == inner);
}

#[test]
fn intersect_separate_shapes_is_empty() {
    let result = rectangle(0.0, 0.0, 1.0, 1.0).intersect(&rectangle(5.0, 5.0, 1.0, 1.0), DEFAULT_BOOLEAN_ACCURACY);

    assert!(result.is_empty());
}

#[test]
fn subtract_hole_from_circle() {
    let outer = circle(Coord2(0.0, 0.0), 10.0);
    let hole = circle(Coord2(0.0, 0.0), 5.0);
    let donut = outer.subtract(&hole, DEFAULT_BOOLEAN_ACCURACY);

    assert!(donut.components().len() == 2);
    assert!(!donut.contains(Coord2(0.0, 0.0), FillRule::Winding));
    assert!(donut.contains(Coord2(7.0, 0.0), FillRule::Winding));
    assert!(!donut.contains(Coord2(11.0, 0.0), FillRule::Winding));
}

#[test]
fn subtract_bigger_circle_leaves_nothing() {
    let small = circle(Coord2(0.0, 0.0), 5.0);
    let big = circle(Coord2(0.0, 0.0), 10.0);

    assert!(small.subtract(&big, DEFAULT_BOOLEAN_ACCURACY).is_empty());
}

#[test]
fn subtract_overlapping_circles() {
    let circle1 = circle(Coord2(0.0, 0.0), 1.0);
    let circle2 = circle(Coord2(1.0, 0.0), 1.0);
    let result = circle1.subtract(&circle2, DEFAULT_BOOLEAN_ACCURACY);

    assert!(result.components().len() == 1, "{:?}", result);
    assert!(result.components()[0].is_closed());
    assert!(result.contains(Coord2(-0.5, 0.0), FillRule::Winding));
    assert!(!result.contains(Coord2(0.5, 0.0), FillRule::Winding));
    assert!(!result.contains(Coord2(1.5, 0.0), FillRule::Winding));
}

#[test]
fn union_overlapping_circles() {
    let circle1 = circle(Coord2(0.0, 0.0), 1.0);
    let circle2 = circle(Coord2(1.0, 0.0), 1.0);
    let result = circle1.union(&circle2, DEFAULT_BOOLEAN_ACCURACY);

    assert!(result.components().len() == 1, "{:?}", result);
    assert!(result.contains(Coord2(-0.5, 0.0), FillRule::Winding));
    assert!(result.contains(Coord2(0.5, 0.0), FillRule::Winding));
    assert!(result.contains(Coord2(1.5, 0.0), FillRule::Winding));
    assert!(!result.contains(Coord2(0.5, 1.0), FillRule::Winding));
}

#[test]
fn remove_crossings_from_self_intersecting_polygon() {
    let path = polygon(&[
        Coord2(0.0, 0.0),
        Coord2(3.0, 0.0),
        Coord2(3.0, 3.0),
        Coord2(1.0, 1.0),
        Coord2(2.0, 1.0),
        Coord2(0.0, 3.0),
    ]);

    // The small triangle is wound twice, so the non-zero rule fills it but even-odd doesn't
    assert!(path.contains(Coord2(1.5, 1.25), FillRule::Winding));
    assert!(!path.contains(Coord2(1.5, 1.25), FillRule::EvenOdd));

    let result = path.crossings_removed(DEFAULT_BOOLEAN_ACCURACY);
    let expected = polygon(&[Coord2(0.0, 0.0), Coord2(3.0, 0.0), Coord2(3.0, 3.0), Coord2(1.5, 1.5), Coord2(0.0, 3.0)]);

    assert!(result.components().len() == 1, "{:?}", result);
    assert!(components_equal_aside_from_element_ordering(&result.components()[0], &expected.components()[0]));
    assert!(result.contains(Coord2(1.5, 1.25), FillRule::EvenOdd));
}

#[test]
fn remove_crossings_without_crossings() {
    let square = square1();

    assert!(square.crossings_removed(DEFAULT_BOOLEAN_ACCURACY) == square);
}

#[test]
fn operations_are_exposed_on_the_graph() {
    let path1 = square1();
    let path2 = square2();
    let intersections = path1.intersections(&path2, DEFAULT_BOOLEAN_ACCURACY);
    let graph = AugmentedGraph::new(&path1, &path2, intersections, BooleanPathOperation::Intersect);

    // The first vertex is the start of the first square, outside the other square
    let first = VertexId(0);
    assert!(graph.vertex(first).location() == Coord2(0.0, 0.0));
    assert!(!graph.vertex(first).is_intersection());
    assert!(graph.vertex(first).forward_edge() == EdgeType::External);
    assert!(graph.emit_next(first).start_point() == Coord2(0.0, 0.0));
    assert!(graph.emit_previous(first).end_point() == Coord2(0.0, 2.0));
}

#[test]
fn union_with_square_touching_the_inside_of_an_edge() {
    let big = rectangle(0.0, 0.0, 3.0, 3.0);
    let small = rectangle(2.0, 1.0, 1.0, 1.0);
    let expected = polygon(&[
        Coord2(0.0, 0.0),
        Coord2(3.0, 0.0),
        Coord2(3.0, 1.0),
        Coord2(3.0, 2.0),
        Coord2(3.0, 3.0),
        Coord2(0.0, 3.0),
    ]);

    // The shared edge is split where the small square meets it
    let big_first = big.union(&small, DEFAULT_BOOLEAN_ACCURACY);
    let small_first = small.union(&big, DEFAULT_BOOLEAN_ACCURACY);

    assert!(element_counts(&big_first) == vec![6], "{:?}", big_first);
    assert!(element_counts(&small_first) == vec![6], "{:?}", small_first);
    assert!(components_equal_aside_from_element_ordering(&big_first.components()[0], &expected.components()[0]));
    assert!(components_equal_aside_from_element_ordering(&small_first.components()[0], &expected.components()[0]));
}

#[test]
fn union_with_square_overlapping_along_an_edge() {
    let big = rectangle(0.0, 0.0, 3.0, 3.0);
    let clockwise = rectangle(3.0, 2.0, -2.0, 2.0);

    let result = big.union(&clockwise, DEFAULT_BOOLEAN_ACCURACY);
    let result_reversed = big.union(&clockwise.reversed(), DEFAULT_BOOLEAN_ACCURACY);

    assert!(element_counts(&result) == vec![8], "{:?}", result);
    assert!(element_counts(&result_reversed) == vec![8], "{:?}", result_reversed);
}

#[test]
fn union_polygons_sharing_corners() {
    let polygon1 = polygon(&[
        Coord2(111.2, 90.0),
        Coord2(144.72135954999578, 137.02282018339787),
        Coord2(179.15338649848962, 123.08999319271176),
        Coord2(171.33627533401454, 102.89462632327792),
    ]);
    let polygon2 = polygon(&[
        Coord2(144.72135954999578, 137.02282018339787),
        Coord2(89.64133022449836, 119.6729633084088),
        Coord2(160.7501485041311, 111.6759272531885),
        Coord2(179.15338649848962, 123.08999319271176),
    ]);

    assert!(polygon1.union(&polygon2, DEFAULT_BOOLEAN_ACCURACY).components().len() == 1);
    assert!(polygon1.union(&polygon2.reversed(), DEFAULT_BOOLEAN_ACCURACY).components().len() == 1);
}

#[test]
fn union_star_with_polygon_sharing_corners() {
    let star = polygon(&[
        Coord2(111.2, 90.0),
        Coord2(144.72135954999578, 137.02282018339787),
        Coord2(89.64133022449836, 119.6729633084088),
        Coord2(55.27864045000421, 166.0845213036123),
        Coord2(54.758669775501644, 108.33889987152517),
        Coord2(0.0, 90.00000000000001),
        Coord2(54.75866977550164, 71.66110012847484),
        Coord2(55.2786404500042, 13.915478696387723),
        Coord2(89.64133022449835, 60.3270366915912),
        Coord2(144.72135954999578, 42.97717981660214),
    ]);
    let quad = polygon(&[
        Coord2(89.64133022449836, 119.6729633084088),
        Coord2(55.27864045000421, 166.0845213036123),
        Coord2(143.9588334407257, 125.35115333505796),
        Coord2(160.7501485041311, 111.6759272531885),
    ]);

    assert!(star.union(&quad, DEFAULT_BOOLEAN_ACCURACY).components().len() == 1);
    assert!(star.union(&quad.reversed(), DEFAULT_BOOLEAN_ACCURACY).components().len() == 1);
}

#[test]
fn union_nearly_identical_circles() {
    let a = Path::from(PathComponent::from_curves(&[
        cubic(Coord2(310.198127403852, 190.08736919846973), Coord2(310.390629965343, 191.78584973769978), Coord2(310.0800866088565, 193.5583513843498), Coord2(309.1982933716744, 195.17240727745877)),
        cubic(Coord2(309.1982933716744, 195.17240727745877), Coord2(306.9208206199371, 199.34114906559483), Coord2(301.6951312337138, 200.87432554752368), Coord2(297.52638944557776, 198.59685279578636)),
        cubic(Coord2(297.52638944557776, 198.59685279578636), Coord2(294.8541298755864, 197.13694026929096), Coord2(293.26485189217163, 194.46557442730858), Coord2(293.06807628308206, 191.637728075906)),
        cubic(Coord2(293.06807628308206, 191.637728075906), Coord2(293.05884562618036, 191.50820426365925), Coord2(293.0524676850055, 191.37785711483136), Coord2(293.0490061981148, 191.24674708897507)),
        cubic(Coord2(293.0490061981148, 191.24674708897507), Coord2(292.9236355289621, 186.49810808117778), Coord2(296.67153503455194, 182.546942559205), Coord2(301.42017404234923, 182.42157189005232)),
        cubic(Coord2(301.42017404234923, 182.42157189005232), Coord2(305.9310607601042, 182.30247821176928), Coord2(309.72232986751203, 185.6785144367646), Coord2(310.198127403852, 190.08736919846973)),
    ]));
    let b = Path::from(PathComponent::from_curves(&[
        cubic(Coord2(309.5688043100249, 187.66446326122298), Coord2(311.37643918302956, 192.05738329201742), Coord2(309.28065147291585, 197.0839261954614), Coord2(304.8877314421214, 198.89156106846605)),
        cubic(Coord2(304.8877314421214, 198.89156106846605), Coord2(300.4948114113269, 200.6991959414707), Coord2(295.46826850788295, 198.60340823135695), Coord2(293.6606336348783, 194.21048820056248)),
        cubic(Coord2(293.6606336348783, 194.21048820056248), Coord2(291.85299876187366, 189.81756816976807), Coord2(293.9487864719874, 184.79102526632408), Coord2(298.3417065027818, 182.98339039331944)),
        cubic(Coord2(298.3417065027818, 182.98339039331944), Coord2(302.7346265335763, 181.1757555203148), Coord2(307.76116943702027, 183.2715432304285), Coord2(309.5688043100249, 187.66446326122298)),
    ]));

    let point = Coord2(302.0, 191.0);
    assert!(a.contains(point, FillRule::EvenOdd));
    assert!(b.contains(point, FillRule::EvenOdd));

    let result = a.union(&b, 1e-4);
    assert!(result.contains(point, FillRule::EvenOdd), "{:?}", result);
}

#[test]
fn subtract_from_path_with_hole() {
    let path = Path::new(vec![
        rectangle(0.0, 0.0, 5.0, 5.0).components()[0].clone(),
        rectangle(1.0, 1.0, 3.0, 3.0).components()[0].clone(),
    ]);
    let inside_hole = rectangle(2.0, 2.0, 1.0, 1.0);

    let result = path.subtract(&inside_hole, DEFAULT_BOOLEAN_ACCURACY);
    assert!(result == path, "{:?}", result);
}

#[test]
fn subtract_circle_touching_rectangle_edge() {
    let rect = rectangle(-1.0, -1.0, 4.0, 3.0);
    let result = rect.subtract(&circle(Coord2(2.0, 2.0), 2.0), DEFAULT_BOOLEAN_ACCURACY);

    assert!(result.components().len() == 1, "{:?}", result);
    assert!(!result.contains(Coord2(2.0, 2.0), FillRule::Winding));
}

#[test]
fn subtract_diamond_sharing_a_corner() {
    let square = rectangle(0.0, 0.0, 2.0, 2.0);
    let diamond = polygon(&[Coord2(0.0, 0.0), Coord2(1.0, -1.0), Coord2(2.0, 0.0), Coord2(1.0, 1.0)]);

    let result = square.subtract(&diamond, DEFAULT_BOOLEAN_ACCURACY);
    assert!(element_counts(&result) == vec![5], "{:?}", result);
}

#[test]
fn remove_crossings_from_figure_eight_touching_itself() {
    let path = polygon(&[
        Coord2(0.0, 1.0),
        Coord2(1.0, 1.0),
        Coord2(2.0, 1.0),
        Coord2(2.0, 2.0),
        Coord2(1.0, 2.0),
        Coord2(1.0, 1.0),
        Coord2(1.0, 0.0),
        Coord2(0.0, 0.0),
    ]);

    assert!(path.winding_count(Coord2(0.5, 0.5), None) == -1);
    assert!(path.winding_count(Coord2(1.5, 1.5), None) == 1);

    let result = path.crossings_removed(DEFAULT_BOOLEAN_ACCURACY);
    assert!(element_counts(&result) == vec![8], "{:?}", result);
}

#[test]
fn remove_crossings_from_star_inside_square() {
    let outer = rectangle(0.0, 0.0, 5.0, 5.0).components()[0].clone();
    let star = polygon(&[
        Coord2(1.0, 2.0),
        Coord2(2.0, 1.0),
        Coord2(2.0, 4.0),
        Coord2(1.0, 3.0),
        Coord2(4.0, 3.0),
        Coord2(3.0, 4.0),
        Coord2(3.0, 1.0),
        Coord2(4.0, 2.0),
    ])
    .components()[0]
        .clone();

    let result = Path::new(vec![outer, star]).crossings_removed(DEFAULT_BOOLEAN_ACCURACY);

    assert!(result.components().len() == 2, "{:?}", result);
    assert!(!result.contains(Coord2(2.5, 2.5), FillRule::Winding));
    assert!(result.contains(Coord2(0.5, 0.5), FillRule::Winding));
}

#[test]
fn remove_crossings_from_circle_with_small_loop() {
    let start = Coord2(79.59559290956605, 697.9008011912572);
    let path = Path::from(PathComponent::from_curves(&[
        cubic(start, Coord2(85.91646553575535, 708.7944954952286), Coord2(82.2094612873204, 722.7496586836662), Coord2(71.31576744881897, 729.0705310397749)),
        cubic(Coord2(71.31576744881897, 729.0705310397749), Coord2(60.4220735042526, 735.3914034574259), Coord2(46.46691031581487, 731.6843992089908), Coord2(40.14603795970622, 720.7907053704894)),
        cubic(Coord2(40.14603795970622, 720.7907053704894), Coord2(39.07549105339858, 718.7074812854011), Coord2(37.21110624960683, 711.947464952338), Coord2(37.21144227099133, 706.7177736592248)),
        cubic(Coord2(37.21144227099133, 706.7177736592248), Coord2(38.65395965539626, 694.2059748336982), Coord2(49.96616803120935, 685.2325492391592), Coord2(62.477966856736, 686.6750666235641)),
        cubic(Coord2(62.477966856736, 686.6750666235641), Coord2(74.98976785362623, 688.1175842583111), Coord2(83.96319344816517, 699.4297926341243), Coord2(82.52067606376023, 711.9415914596509)),
        cubic(Coord2(82.52067606376023, 711.9415914596509), Coord2(82.51999960076027, 706.7206820370851), Coord2(80.65889482357387, 699.9715389099819), start),
    ]));

    let result = path.crossings_removed(0.01);
    let original_size = path.bounding_box().size();
    let result_size = result.bounding_box().size();

    assert!((original_size.x() - result_size.x()).abs() < 1e-3);
    assert!((original_size.y() - result_size.y()).abs() < 1e-3);
    assert!(result.components()[0].number_of_elements() == 5, "{:?}", result);
}

#[test]
fn remove_crossings_splits_off_a_sliver() {
    let first = Coord2(128.65039465906003, 123.73954643229627);
    let path = Path::from(PathComponent::from_curves(&[
        cubic(first, Coord2(125.4190121591063, 126.96936863167058), Coord2(120.18117084764445, 126.96810375813484), Coord2(116.95134864827014, 123.73672125818112)),
        cubic(Coord2(116.95134864827014, 123.73672125818112), Coord2(113.72152644889583, 120.5053387582274), Coord2(113.72279132243156, 115.26749744676555), Coord2(116.95417382238529, 112.03767524739123)),
        cubic(Coord2(116.95417382238529, 112.03767524739123), Coord2(119.3560792543184, 110.34087389676174), Coord2(120.25529993069892, 109.98254275757822), Coord2(117.06818455296886, 111.94933998303057)),
        cubic(Coord2(117.06818455296886, 111.94933998303057), Coord2(120.31240285203181, 108.71058333093575), Coord2(125.56789243958164, 108.71501087060513), Coord2(128.80664909167646, 111.95922916966808)),
        cubic(Coord2(128.80664909167646, 111.95922916966808), Coord2(132.04540574377128, 115.20344746873103), Coord2(132.0409782041019, 120.45893705628086), Coord2(128.79675990503895, 123.69769370837568)),
        cubic(Coord2(128.79675990503895, 123.69769370837568), Coord2(125.59151708590264, 125.68258785765616), Coord2(126.31169113142379, 125.37317639620701), first),
    ]));

    let result = path.crossings_removed(1e-4);

    assert!(result.components().len() == 2, "{:?}", result);
    assert!(result.contains(Coord2(128.50258215906004, 123.86146049479626), FillRule::EvenOdd));
    assert!(result.contains(Coord2(128.64870715906002, 123.77228080729627), FillRule::EvenOdd));
    assert!(!result.contains(Coord2(127.29466809656003, 124.65276518229626), FillRule::EvenOdd));
}

#[test]
fn remove_crossings_merges_components_with_coincident_edges() {
    let first = polygon(&[
        Coord2(306.7644175272825, 37.62048178369263),
        Coord2(306.7644175272825, 39.90095048600892),
        Coord2(304.4839488249662, 39.90095048600892),
        Coord2(304.4010007151713, 37.61425955635238),
    ]);
    let second = polygon(&[
        Coord2(304.5969784942766, 37.514703918908296),
        Coord2(306.87744719659287, 37.514703918908296),
        Coord2(306.87744719659287, 39.79517262122458),
        Coord2(306.7644175272825, 39.90095048600892),
        Coord2(304.4839488249662, 39.90095048600892),
        Coord2(304.4839488249662, 37.62048178369263),
    ]);
    let path = Path::new(vec![first.components()[0].clone(), second.components()[0].clone()]);

    let result = path.crossings_removed(1e-4);
    assert!(element_counts(&result) == vec![7], "{:?}", result);
}

#[test]
fn remove_crossings_terminates_for_overlapping_rounded_frames() {
    let frame = PathComponent::from_curves(&[
        cubic(Coord2(431.2394694928875, 109.81690300533613), Coord2(431.2394694928875, 110.13177002702506), Coord2(430.9842193389974, 110.3870201809152), Coord2(430.66935231730844, 110.3870201809152)),
        line(Coord2(430.66935231730844, 110.3870201809152), Coord2(382.89122776801867, 110.3870201809152)),
        line(Coord2(382.89122776801867, 110.3870201809152), Coord2(383.46134494359774, 109.81690300533613)),
        line(Coord2(383.46134494359774, 109.81690300533613), Coord2(383.46134494359774, 125.44498541142156)),
        line(Coord2(383.46134494359774, 125.44498541142156), Coord2(382.89122776801867, 124.87486823584248)),
        line(Coord2(382.89122776801867, 124.87486823584248), Coord2(430.66935231730844, 124.87486823584248)),
        line(Coord2(430.66935231730844, 124.87486823584248), Coord2(430.09923514172937, 125.44498541142156)),
        line(Coord2(430.09923514172937, 125.44498541142156), Coord2(430.09923514172937, 99.92396144754883)),
        line(Coord2(430.09923514172937, 99.92396144754883), Coord2(431.2394694928875, 99.92396144754883)),
        line(Coord2(431.2394694928875, 99.92396144754883), Coord2(431.2394694928875, 109.81690300533613)),
    ]);
    let rounded = PathComponent::from_curves(&[
        line(Coord2(430.09923514172937, 109.81690300533613), Coord2(430.09923514172937, 99.92396144754883)),
        cubic(Coord2(430.09923514172937, 99.92396144754883), Coord2(430.09923514172937, 99.16380521344341), Coord2(431.2394694928875, 99.16380521344341), Coord2(431.2394694928875, 99.92396144754883)),
        line(Coord2(431.2394694928875, 99.92396144754883), Coord2(431.2394694928875, 125.44498541142156)),
        cubic(Coord2(431.2394694928875, 125.44498541142156), Coord2(431.2394694928875, 125.75985243311048), Coord2(430.9842193389974, 126.01510258700063), Coord2(430.66935231730844, 126.01510258700063)),
        line(Coord2(430.66935231730844, 126.01510258700063), Coord2(382.89122776801867, 126.01510258700063)),
        cubic(Coord2(382.89122776801867, 126.01510258700063), Coord2(382.5763607463297, 126.01510258700063), Coord2(382.3211105924396, 125.75985243311048), Coord2(382.3211105924396, 125.44498541142156)),
        line(Coord2(382.3211105924396, 125.44498541142156), Coord2(382.3211105924396, 109.81690300533613)),
        cubic(Coord2(382.3211105924396, 109.81690300533613), Coord2(382.3211105924396, 109.5020359836472), Coord2(382.5763607463297, 109.24678582975706), Coord2(382.89122776801867, 109.24678582975706)),
        line(Coord2(382.89122776801867, 109.24678582975706), Coord2(430.66935231730844, 109.24678582975706)),
        line(Coord2(430.66935231730844, 109.24678582975706), Coord2(430.09923514172937, 109.81690300533613)),
    ]);

    // The overlapping edges must not leave the walk cycling
    let result = Path::new(vec![frame, rounded]).crossings_removed(0.01);
    assert!(result.components().iter().all(|component| component.is_closed()), "{:?}", result);
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::curve::*;
use super::intersection::*;
use super::line_segment::*;
use super::offset::*;
use super::path::PathComponent;
use crate::geo::*;

///
/// Scales the simple sections of a curve out to either side of it
///
/// The first list runs alongside the curve `along_normal` away in the direction of the normal, the second
/// `opposite_normal` away in the other direction. Both run in the same direction as the curve. `None` if
/// the curve has no normals.
///
fn offset_sides<CurveType: BezierCurve>(
    curve: &CurveType,
    along_normal: f64,
    opposite_normal: f64,
) -> Option<(Vec<Curve>, Vec<Curve>)> {
    let sections = curve.reduce();

    let scale_all = |distance: f64| {
        sections
            .iter()
            .map(|section| section.curve.scale(distance).map(|scaled| scaled.to_curve()))
            .collect::<Option<Vec<_>>>()
    };

    let mut forward = scale_all(along_normal)?;
    let mut back = scale_all(-opposite_normal)?;

    if forward.is_empty() || back.is_empty() {
        return None;
    }

    ensure_continuous(&mut forward);
    ensure_continuous(&mut back);

    Some((forward, back))
}

///
/// Creates a closed outline around a curve: the curve offset along its normal, a line cap across its end,
/// the curve offset the other way (reversed) and a line cap back to the start
///
pub fn outline_curve<CurveType: BezierCurve>(
    curve: &CurveType,
    along_normal: f64,
    opposite_normal: f64,
) -> Option<PathComponent> {
    let (forward, back) = offset_sides(curve, along_normal, opposite_normal)?;

    let forward_start = forward[0].start_point();
    let forward_end = forward[forward.len() - 1].end_point();
    let back_start = back[0].start_point();
    let back_end = back[back.len() - 1].end_point();

    let mut elements = Vec::with_capacity(forward.len() + back.len() + 2);
    elements.push(Curve::Line(LineSegment::new(back_start, forward_start)));
    elements.extend(forward);
    elements.push(Curve::Line(LineSegment::new(forward_end, back_end)));
    elements.extend(back.into_iter().rev().map(|curve| curve.reversed()));

    Some(PathComponent::from_curves(&elements))
}

///
/// One end of a shape
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ShapeCap {
    /// The line across the end of the shape
    pub curve: Curve,

    /// True if this cap joins two shapes from the same outline, so it's not on the boundary of the outline
    pub is_virtual: bool,
}

///
/// A closed region around one simple section of a curve
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Shape {
    pub start_cap: ShapeCap,
    pub end_cap: ShapeCap,

    /// The offset curve along the normal, running in the same direction as the original curve
    pub forward: Curve,

    /// The offset curve opposite the normal, running in the opposite direction
    pub back: Curve,
}

///
/// A pair of curves from two shapes that meet, and the places where they meet
///
#[derive(Clone, PartialEq, Debug)]
pub struct ShapeIntersection {
    pub curve1: Curve,
    pub curve2: Curve,
    pub intersections: Vec<Intersection>,
}

impl Shape {
    ///
    /// Creates a shape from its two sides, closing it with line caps
    ///
    pub fn new(forward: Curve, back: Curve, start_cap_is_virtual: bool, end_cap_is_virtual: bool) -> Shape {
        Shape {
            start_cap: ShapeCap {
                curve: Curve::Line(LineSegment::new(back.end_point(), forward.start_point())),
                is_virtual: start_cap_is_virtual,
            },
            end_cap: ShapeCap {
                curve: Curve::Line(LineSegment::new(forward.end_point(), back.start_point())),
                is_virtual: end_cap_is_virtual,
            },
            forward,
            back,
        }
    }

    ///
    /// The curves of this shape that are on the boundary of the outline it came from
    ///
    pub fn boundary_curves(&self) -> Vec<Curve> {
        let mut curves = Vec::with_capacity(4);

        curves.push(self.forward);
        if !self.end_cap.is_virtual {
            curves.push(self.end_cap.curve);
        }
        curves.push(self.back);
        if !self.start_cap.is_virtual {
            curves.push(self.start_cap.curve);
        }

        curves
    }

    ///
    /// The bounding box of the boundary curves of this shape
    ///
    pub fn bounding_box(&self) -> Bounds<Coord2> {
        self.boundary_curves()
            .iter()
            .fold(Bounds::empty(), |bounds, curve| bounds.union_bounds(curve.bounding_box()))
    }

    ///
    /// Finds where the boundary curves of this shape meet those of another shape
    ///
    pub fn intersections(&self, other: &Shape, accuracy: f64) -> Vec<ShapeIntersection> {
        if !self.bounding_box().overlaps(&other.bounding_box()) {
            return vec![];
        }

        let other_curves = other.boundary_curves();
        let mut result = vec![];

        for curve1 in self.boundary_curves() {
            for curve2 in other_curves.iter() {
                let intersections = curve1.intersections(curve2, accuracy);

                if !intersections.is_empty() {
                    result.push(ShapeIntersection {
                        curve1,
                        curve2: *curve2,
                        intersections,
                    });
                }
            }
        }

        result
    }
}

///
/// Divides the outline of a curve into one shape per simple section
///
/// The caps between neighbouring shapes are virtual: only the caps at the two ends of the curve are on the
/// boundary of the outline.
///
pub fn outline_shapes<CurveType: BezierCurve>(curve: &CurveType, along_normal: f64, opposite_normal: f64) -> Vec<Shape> {
    let (forward, back) = match offset_sides(curve, along_normal, opposite_normal) {
        Some(sides) => sides,
        None => return vec![],
    };

    let count = forward.len();
    forward
        .into_iter()
        .zip(back)
        .enumerate()
        .map(|(index, (forward, back))| Shape::new(forward, back.reversed(), index > 0, index + 1 < count))
        .collect()
}

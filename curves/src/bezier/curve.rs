/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::arc::*;
use super::cubic::*;
use super::intersection::*;
use super::length::*;
use super::line_segment::*;
use super::offset::*;
use super::outline::*;
use super::path::PathComponent;
use super::quadratic::*;
use super::reduce::*;
use super::roots::*;
use super::subcurve::*;
use crate::error::*;
use crate::geo::*;

use smallvec::*;

///
/// The control points of a curve (at most 4, for a cubic)
///
pub type ControlPoints = SmallVec<[Coord2; 4]>;

///
/// The t values where a curve reaches its extreme values along each axis
///
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Extrema {
    /// Extremes (and inflections, for cubics) along the x axis
    pub x: Vec<f64>,

    /// Extremes (and inflections, for cubics) along the y axis
    pub y: Vec<f64>,

    /// All of the x and y extrema, sorted and with duplicates removed
    pub all: Vec<f64>,
}

///
/// Sorts a list of floating point values and removes exact duplicates
///
pub(crate) fn sorted_and_uniqued(mut values: Vec<f64>) -> Vec<f64> {
    values.sort_by(|a, b| a.total_cmp(b));
    values.dedup();
    values
}

///
/// Trait implemented by the bezier curve types (lines, quadratic and cubic curves)
///
pub trait BezierCurve: Geo<Point = Coord2> + Clone + Sized {
    ///
    /// The order of this curve (1 for lines, 2 for quadratics and 3 for cubics)
    ///
    fn order(&self) -> usize;

    ///
    /// The control points of this curve, including the start and end points
    ///
    fn points(&self) -> ControlPoints;

    ///
    /// Creates a curve of the same kind by mapping each of its control points (the function receives the index and the point)
    ///
    fn map_points<MapFn: Fn(usize, Coord2) -> Coord2>(&self, map: MapFn) -> Self;

    fn start_point(&self) -> Coord2;

    fn end_point(&self) -> Coord2;

    ///
    /// The point at a particular t value (the end points are returned exactly for t = 0 and t = 1)
    ///
    fn point_at(&self, t: f64) -> Coord2;

    ///
    /// The first derivative of the curve at a particular t value
    ///
    fn derivative_at(&self, t: f64) -> Coord2;

    ///
    /// The unit normal of the curve at a particular t value
    ///
    fn normal_at(&self, t: f64) -> Coord2;

    ///
    /// Splits the curve into two at the specified t value
    ///
    fn split_at(&self, t: f64) -> (Self, Self);

    ///
    /// The section of this curve between t1 and t2 (reversed if t1 > t2)
    ///
    fn split_range(&self, t1: f64, t2: f64) -> Self;

    ///
    /// This curve, with the direction reversed
    ///
    fn reversed(&self) -> Self;

    ///
    /// The tight bounding box of this curve
    ///
    fn bounding_box(&self) -> Bounds<Coord2>;

    ///
    /// Finds the closest point on this curve to the specified point, returning the point and its t value
    ///
    fn project(&self, point: Coord2) -> (Coord2, f64);

    ///
    /// True if this curve is 'simple': all the control points are on one side of the baseline and the normals
    /// at the end points are less than 60 degrees apart
    ///
    fn is_simple(&self) -> bool;

    ///
    /// Converts this curve to the general curve type
    ///
    fn to_curve(&self) -> Curve;

    ///
    /// This curve moved by an offset
    ///
    fn translated(&self, offset: Coord2) -> Self {
        self.map_points(|_, point| point + offset)
    }

    ///
    /// This curve with a different start point
    ///
    fn with_start_point(&self, start_point: Coord2) -> Self {
        self.map_points(|idx, point| if idx == 0 { start_point } else { point })
    }

    ///
    /// This curve with a different end point
    ///
    fn with_end_point(&self, end_point: Coord2) -> Self {
        let last = self.order();
        self.map_points(|idx, point| if idx == last { end_point } else { point })
    }

    ///
    /// The x coordinate of this curve as a function of t
    ///
    fn x_polynomial(&self) -> BernsteinPolynomial {
        BernsteinPolynomial::new(self.points().iter().map(|point| point.x()))
    }

    ///
    /// The y coordinate of this curve as a function of t
    ///
    fn y_polynomial(&self) -> BernsteinPolynomial {
        BernsteinPolynomial::new(self.points().iter().map(|point| point.y()))
    }

    ///
    /// The arc length of this curve
    ///
    fn length(&self) -> f64 {
        gauss_legendre_length(|t| self.derivative_at(t))
    }

    ///
    /// Finds the t values where this curve has extreme x or y values (and the inflection points, for cubics)
    ///
    fn extrema(&self) -> Extrema {
        if self.order() <= 1 {
            return Extrema::default();
        }

        let points = self.points();
        let order = self.order();

        let roots_for_dimension = |dimension: usize| {
            let values = points.iter().map(|point| point[dimension]).collect::<SmallVec<[f64; 4]>>();
            let first_diffs = values.windows(2).map(|pair| pair[1] - pair[0]).collect::<SmallVec<[f64; 3]>>();

            let mut roots = droots(&first_diffs).into_vec();
            if order >= 3 {
                let second_diffs = first_diffs.windows(2).map(|pair| pair[1] - pair[0]).collect::<SmallVec<[f64; 2]>>();
                roots.extend(droots(&second_diffs));
            }

            sorted_and_uniqued(roots.into_iter().filter(|t| (0.0..=1.0).contains(t)).collect())
        };

        let x = roots_for_dimension(0);
        let y = roots_for_dimension(1);
        let all = sorted_and_uniqued(x.iter().chain(y.iter()).copied().collect());

        Extrema { x, y, all }
    }

    ///
    /// The point that's `distance` along the normal from the point at t
    ///
    fn offset_at(&self, t: f64, distance: f64) -> Coord2 {
        self.point_at(t) + self.normal_at(t) * distance
    }

    ///
    /// Divides this curve into 'simple' sections, which can be safely scaled to create offset curves
    ///
    fn reduce(&self) -> Vec<Subcurve<Self>> {
        reduce_to_simple_sections(self)
    }

    ///
    /// Creates a curve of the same order that's roughly `distance` away from this one
    ///
    /// This works well for 'simple' curves (see `reduce()`). `None` is returned if the curve has no normals
    /// (all of its points are the same)
    ///
    fn scale(&self, distance: f64) -> Option<Self> {
        scale_curve(self, distance)
    }

    ///
    /// Generates a set of curves that are offset by `distance` along the normal of this curve
    ///
    fn offset(&self, distance: f64) -> Vec<Curve> {
        offset_curve(self, distance)
    }

    ///
    /// Creates a closed outline that's `distance` away from this curve on both sides, with straight caps
    /// across its ends
    ///
    fn outline(&self, distance: f64) -> Option<PathComponent> {
        outline_curve(self, distance, distance)
    }

    ///
    /// Creates an outline that can be a different distance from each side of this curve
    ///
    fn outline_with_distances(&self, along_normal: f64, opposite_normal: f64) -> Option<PathComponent> {
        outline_curve(self, along_normal, opposite_normal)
    }

    ///
    /// The outline of this curve, divided into one shape per simple section
    ///
    fn outline_shapes(&self, distance: f64) -> Vec<Shape> {
        outline_shapes(self, distance, distance)
    }

    fn outline_shapes_with_distances(&self, along_normal: f64, opposite_normal: f64) -> Vec<Shape> {
        outline_shapes(self, along_normal, opposite_normal)
    }

    ///
    /// Approximates this curve with circular arcs that are each within `error_threshold` of it
    ///
    fn arcs(&self, error_threshold: f64) -> Vec<CircularArc> {
        approximate_with_arcs(self, error_threshold)
    }

    ///
    /// All the points generated by de Casteljau's algorithm at t
    ///
    /// The control points come first, followed by each level of interpolated points. The last point is the
    /// point on the curve, so a cubic produces 10 points.
    ///
    fn hull(&self, t: f64) -> Vec<Coord2> {
        let mut points = self.points().into_vec();
        let mut level_start = 0;

        for level_len in (1..points.len()).rev() {
            for idx in level_start..(level_start + level_len) {
                let interpolated = points[idx].lerp(points[idx + 1], t);
                points.push(interpolated);
            }

            level_start += level_len + 1;
        }

        points
    }

    ///
    /// Evaluates this curve at `steps + 1` evenly spaced t values, including both ends
    ///
    fn lookup_table(&self, steps: usize) -> Vec<Coord2> {
        if steps == 0 {
            return vec![self.start_point()];
        }

        (0..=steps).map(|step| self.point_at((step as f64) / (steps as f64))).collect()
    }

    ///
    /// Finds the points where this curve intersects another
    ///
    fn intersections<OtherCurve: BezierCurve>(&self, other: &OtherCurve, accuracy: f64) -> Vec<Intersection> {
        curve_intersections(&self.to_curve(), &other.to_curve(), accuracy)
    }

    ///
    /// Finds the points where this curve intersects itself (only cubic curves can do this)
    ///
    fn self_intersections(&self, _accuracy: f64) -> Vec<Intersection> {
        vec![]
    }
}

///
/// A bezier curve of order 1 to 3
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Curve {
    Line(LineSegment),
    Quadratic(QuadraticCurve),
    Cubic(CubicCurve),
}

impl Geo for Curve {
    type Point = Coord2;
}

impl From<LineSegment> for Curve {
    fn from(line: LineSegment) -> Curve {
        Curve::Line(line)
    }
}

impl From<QuadraticCurve> for Curve {
    fn from(quadratic: QuadraticCurve) -> Curve {
        Curve::Quadratic(quadratic)
    }
}

impl From<CubicCurve> for Curve {
    fn from(cubic: CubicCurve) -> Curve {
        Curve::Cubic(cubic)
    }
}

impl Curve {
    ///
    /// Creates a curve from its control points, with the order determined by how many points there are
    ///
    pub fn try_from_points(points: &[Coord2]) -> Result<Curve, CurveError> {
        match points {
            [p0, p1] => Ok(Curve::Line(LineSegment::new(*p0, *p1))),
            [p0, p1, p2] => Ok(Curve::Quadratic(QuadraticCurve::new(*p0, *p1, *p2))),
            [p0, p1, p2, p3] => Ok(Curve::Cubic(CubicCurve::new(*p0, *p1, *p2, *p3))),
            _ => Err(CurveError::WrongNumberOfPoints { expected: 4, actual: points.len() }),
        }
    }

    ///
    /// Replaces this curve with a lower order one if the error in doing so is less than `max_error`
    ///
    pub fn downgraded_if_possible(&self, max_error: f64) -> Curve {
        match self {
            Curve::Line(_) => *self,

            Curve::Quadratic(quadratic) => {
                let (line, line_error) = quadratic.downgraded_to_line();
                if line_error <= max_error {
                    Curve::Line(line)
                } else {
                    *self
                }
            }

            Curve::Cubic(cubic) => {
                let (line, line_error) = cubic.downgraded_to_line();
                if line_error <= max_error {
                    return Curve::Line(line);
                }

                let (quadratic, quadratic_error) = cubic.downgraded_to_quadratic();
                if quadratic_error <= max_error {
                    Curve::Quadratic(quadratic)
                } else {
                    *self
                }
            }
        }
    }
}

impl BezierCurve for Curve {
    fn order(&self) -> usize {
        match self {
            Curve::Line(line) => line.order(),
            Curve::Quadratic(quadratic) => quadratic.order(),
            Curve::Cubic(cubic) => cubic.order(),
        }
    }

    fn points(&self) -> ControlPoints {
        match self {
            Curve::Line(line) => line.points(),
            Curve::Quadratic(quadratic) => quadratic.points(),
            Curve::Cubic(cubic) => cubic.points(),
        }
    }

    fn map_points<MapFn: Fn(usize, Coord2) -> Coord2>(&self, map: MapFn) -> Curve {
        match self {
            Curve::Line(line) => Curve::Line(line.map_points(map)),
            Curve::Quadratic(quadratic) => Curve::Quadratic(quadratic.map_points(map)),
            Curve::Cubic(cubic) => Curve::Cubic(cubic.map_points(map)),
        }
    }

    fn start_point(&self) -> Coord2 {
        match self {
            Curve::Line(line) => line.start_point(),
            Curve::Quadratic(quadratic) => quadratic.start_point(),
            Curve::Cubic(cubic) => cubic.start_point(),
        }
    }

    fn end_point(&self) -> Coord2 {
        match self {
            Curve::Line(line) => line.end_point(),
            Curve::Quadratic(quadratic) => quadratic.end_point(),
            Curve::Cubic(cubic) => cubic.end_point(),
        }
    }

    fn point_at(&self, t: f64) -> Coord2 {
        match self {
            Curve::Line(line) => line.point_at(t),
            Curve::Quadratic(quadratic) => quadratic.point_at(t),
            Curve::Cubic(cubic) => cubic.point_at(t),
        }
    }

    fn derivative_at(&self, t: f64) -> Coord2 {
        match self {
            Curve::Line(line) => line.derivative_at(t),
            Curve::Quadratic(quadratic) => quadratic.derivative_at(t),
            Curve::Cubic(cubic) => cubic.derivative_at(t),
        }
    }

    fn normal_at(&self, t: f64) -> Coord2 {
        match self {
            Curve::Line(line) => line.normal_at(t),
            Curve::Quadratic(quadratic) => quadratic.normal_at(t),
            Curve::Cubic(cubic) => cubic.normal_at(t),
        }
    }

    fn split_at(&self, t: f64) -> (Curve, Curve) {
        match self {
            Curve::Line(line) => {
                let (left, right) = line.split_at(t);
                (Curve::Line(left), Curve::Line(right))
            }
            Curve::Quadratic(quadratic) => {
                let (left, right) = quadratic.split_at(t);
                (Curve::Quadratic(left), Curve::Quadratic(right))
            }
            Curve::Cubic(cubic) => {
                let (left, right) = cubic.split_at(t);
                (Curve::Cubic(left), Curve::Cubic(right))
            }
        }
    }

    fn split_range(&self, t1: f64, t2: f64) -> Curve {
        match self {
            Curve::Line(line) => Curve::Line(line.split_range(t1, t2)),
            Curve::Quadratic(quadratic) => Curve::Quadratic(quadratic.split_range(t1, t2)),
            Curve::Cubic(cubic) => Curve::Cubic(cubic.split_range(t1, t2)),
        }
    }

    fn reversed(&self) -> Curve {
        match self {
            Curve::Line(line) => Curve::Line(line.reversed()),
            Curve::Quadratic(quadratic) => Curve::Quadratic(quadratic.reversed()),
            Curve::Cubic(cubic) => Curve::Cubic(cubic.reversed()),
        }
    }

    fn bounding_box(&self) -> Bounds<Coord2> {
        match self {
            Curve::Line(line) => line.bounding_box(),
            Curve::Quadratic(quadratic) => quadratic.bounding_box(),
            Curve::Cubic(cubic) => cubic.bounding_box(),
        }
    }

    fn project(&self, point: Coord2) -> (Coord2, f64) {
        match self {
            Curve::Line(line) => line.project(point),
            Curve::Quadratic(quadratic) => quadratic.project(point),
            Curve::Cubic(cubic) => cubic.project(point),
        }
    }

    fn is_simple(&self) -> bool {
        match self {
            Curve::Line(line) => line.is_simple(),
            Curve::Quadratic(quadratic) => quadratic.is_simple(),
            Curve::Cubic(cubic) => cubic.is_simple(),
        }
    }

    fn to_curve(&self) -> Curve {
        *self
    }

    fn length(&self) -> f64 {
        match self {
            Curve::Line(line) => line.length(),
            Curve::Quadratic(quadratic) => quadratic.length(),
            Curve::Cubic(cubic) => cubic.length(),
        }
    }

    fn self_intersections(&self, accuracy: f64) -> Vec<Intersection> {
        match self {
            Curve::Cubic(cubic) => cubic.self_intersections(accuracy),
            _ => vec![],
        }
    }
}

impl HasBoundingBox for Curve {
    fn get_bounding_box<Bounds: BoundingBox<Point = Coord2>>(&self) -> Bounds {
        let bounds = self.bounding_box();
        Bounds::from_min_max(bounds.min(), bounds.max())
    }
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::curve::*;
use super::line_segment::*;
use super::roots::*;
use crate::error::*;
use crate::geo::*;

use smallvec::*;

use std::f64::consts::PI;

///
/// A quadratic bezier curve
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct QuadraticCurve {
    pub p0: Coord2,
    pub p1: Coord2,
    pub p2: Coord2,
}

impl Geo for QuadraticCurve {
    type Point = Coord2;
}

///
/// Multiplies two points component-wise
///
#[inline]
pub(crate) fn component_product(a: Coord2, b: Coord2) -> Coord2 {
    Coord2(a.0 * b.0, a.1 * b.1)
}

///
/// True if the angle between two unit normals is small enough for a curve to count as 'simple'
///
pub(crate) fn normals_are_close(n1: Coord2, n2: Coord2) -> bool {
    let cos_angle = n1.dot(&n2).max(-1.0).min(1.0);
    cos_angle.acos().abs() < PI / 3.0
}

impl QuadraticCurve {
    #[inline]
    pub fn new(p0: Coord2, p1: Coord2, p2: Coord2) -> QuadraticCurve {
        QuadraticCurve { p0, p1, p2 }
    }

    ///
    /// Creates a curve from a slice of control points, which must contain exactly 3 points
    ///
    pub fn try_from_points(points: &[Coord2]) -> Result<QuadraticCurve, CurveError> {
        match points {
            [p0, p1, p2] => Ok(QuadraticCurve::new(*p0, *p1, *p2)),
            _ => Err(CurveError::WrongNumberOfPoints { expected: 3, actual: points.len() }),
        }
    }

    ///
    /// Creates the quadratic curve that follows a straight line
    ///
    pub fn from_line(line: &LineSegment) -> QuadraticCurve {
        QuadraticCurve::new(line.p0, line.point_at(0.5), line.p1)
    }

    ///
    /// Replaces this curve with a line between its end points, returning the line and an upper bound on the
    /// distance between the two
    ///
    pub fn downgraded_to_line(&self) -> (LineSegment, f64) {
        let line = LineSegment::new(self.p0, self.p2);
        let offset = self.p1 - line.point_at(0.5);

        (line, 0.5 * offset.length())
    }
}

impl BezierCurve for QuadraticCurve {
    #[inline]
    fn order(&self) -> usize {
        2
    }

    fn points(&self) -> ControlPoints {
        smallvec![self.p0, self.p1, self.p2]
    }

    fn map_points<MapFn: Fn(usize, Coord2) -> Coord2>(&self, map: MapFn) -> QuadraticCurve {
        QuadraticCurve::new(map(0, self.p0), map(1, self.p1), map(2, self.p2))
    }

    #[inline]
    fn start_point(&self) -> Coord2 {
        self.p0
    }

    #[inline]
    fn end_point(&self) -> Coord2 {
        self.p2
    }

    fn point_at(&self, t: f64) -> Coord2 {
        if t == 0.0 {
            return self.p0;
        } else if t == 1.0 {
            return self.p2;
        }

        let mt = 1.0 - t;
        self.p0 * (mt * mt) + self.p1 * (2.0 * mt * t) + self.p2 * (t * t)
    }

    fn derivative_at(&self, t: f64) -> Coord2 {
        let d0 = (self.p1 - self.p0) * 2.0;
        let d1 = (self.p2 - self.p1) * 2.0;

        d0 * (1.0 - t) + d1 * t
    }

    fn normal_at(&self, t: f64) -> Coord2 {
        let mut derivative = self.derivative_at(t);

        if derivative == Coord2::origin() {
            if t == 0.0 {
                derivative = self.p2 - self.p1;
            } else if t == 1.0 {
                derivative = self.p1 - self.p0;
            }
        }

        derivative.perpendicular().normalize()
    }

    fn split_at(&self, t: f64) -> (QuadraticCurve, QuadraticCurve) {
        let h3 = self.p0.lerp(self.p1, t);
        let h4 = self.p1.lerp(self.p2, t);
        let h5 = h3.lerp(h4, t);

        (QuadraticCurve::new(self.p0, h3, h5), QuadraticCurve::new(h5, h4, self.p2))
    }

    fn split_range(&self, t1: f64, t2: f64) -> QuadraticCurve {
        if t1 == 0.0 && t2 == 1.0 {
            return *self;
        } else if t1 > t2 {
            return self.split_range(t2, t1).reversed();
        }

        // Row 1 of the matrix that maps the control points onto the section t1..t2
        let q10 = 1.0 - t1 - t2 + t1 * t2;
        let q11 = t1 + t2 - 2.0 * t1 * t2;
        let q12 = t1 * t2;
        let p1 = self.p0 * q10 + self.p1 * q11 + self.p2 * q12;

        QuadraticCurve::new(self.point_at(t1), p1, self.point_at(t2))
    }

    fn reversed(&self) -> QuadraticCurve {
        QuadraticCurve::new(self.p2, self.p1, self.p0)
    }

    fn bounding_box(&self) -> Bounds<Coord2> {
        let mut min = Coord2::from_smallest_components(self.p0, self.p2);
        let mut max = Coord2::from_biggest_components(self.p0, self.p2);

        let d0 = self.p1 - self.p0;
        let d1 = self.p2 - self.p1;

        for dimension in 0..2 {
            for t in droots_linear(d0[dimension], d1[dimension]) {
                if !(t > 0.0 && t < 1.0) {
                    continue;
                }

                let value = self.point_at(t)[dimension];
                if value < min[dimension] {
                    min[dimension] = value;
                } else if value > max[dimension] {
                    max[dimension] = value;
                }
            }
        }

        Bounds::from_min_max(min, max)
    }

    fn project(&self, point: Coord2) -> (Coord2, f64) {
        let q = self.translated(-point);

        // The dot product of the curve and its derivative is a cubic whose roots are the perpendicular points
        let qd0 = q.p1 - q.p0;
        let qd1 = q.p2 - q.p1;
        let p0 = component_product(q.p0, qd0) * 3.0;
        let p1 = component_product(q.p0, qd1) + component_product(q.p1, qd0) * 2.0;
        let p2 = component_product(q.p2, qd0) + component_product(q.p1, qd1) * 2.0;
        let p3 = component_product(q.p2, qd1) * 3.0;

        let (mut min_t, mut min_distance_squared) = if q.p2.length_squared() < q.p0.length_squared() {
            (1.0, q.p2.length_squared())
        } else {
            (0.0, q.p0.length_squared())
        };

        for t in droots_cubic(p0.0 + p0.1, p1.0 + p1.1, p2.0 + p2.1, p3.0 + p3.1) {
            if !(t > 0.0 && t < 1.0) {
                continue;
            }

            let distance_squared = q.point_at(t).length_squared();
            if distance_squared < min_distance_squared {
                min_distance_squared = distance_squared;
                min_t = t;
            }
        }

        (self.point_at(min_t), min_t)
    }

    fn is_simple(&self) -> bool {
        if self.p0 == self.p1 && self.p1 == self.p2 {
            return true;
        }

        normals_are_close(self.normal_at(0.0), self.normal_at(1.0))
    }

    #[inline]
    fn to_curve(&self) -> Curve {
        Curve::Quadratic(*self)
    }
}

impl HasBoundingBox for QuadraticCurve {
    fn get_bounding_box<Bounds: BoundingBox<Point = Coord2>>(&self) -> Bounds {
        let bounds = self.bounding_box();
        Bounds::from_min_max(bounds.min(), bounds.max())
    }
}

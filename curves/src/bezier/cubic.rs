/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::curve::*;
use super::intersection::*;
use super::line_segment::*;
use super::quadratic::*;
use super::roots::*;
use crate::error::*;
use crate::geo::*;

use smallvec::*;

///
/// A cubic bezier curve
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct CubicCurve {
    pub p0: Coord2,
    pub p1: Coord2,
    pub p2: Coord2,
    pub p3: Coord2,
}

impl Geo for CubicCurve {
    type Point = Coord2;
}

///
/// The signed angle between the vectors `o -> v1` and `o -> v2`
///
#[inline]
fn angle_between(o: Coord2, v1: Coord2, v2: Coord2) -> f64 {
    let d1 = v1 - o;
    let d2 = v2 - o;

    d1.cross(&d2).atan2(d1.dot(&d2))
}

impl CubicCurve {
    #[inline]
    pub fn new(p0: Coord2, p1: Coord2, p2: Coord2, p3: Coord2) -> CubicCurve {
        CubicCurve { p0, p1, p2, p3 }
    }

    ///
    /// Creates a curve from a slice of control points, which must contain exactly 4 points
    ///
    pub fn try_from_points(points: &[Coord2]) -> Result<CubicCurve, CurveError> {
        match points {
            [p0, p1, p2, p3] => Ok(CubicCurve::new(*p0, *p1, *p2, *p3)),
            _ => Err(CurveError::WrongNumberOfPoints { expected: 4, actual: points.len() }),
        }
    }

    ///
    /// Creates the cubic curve that follows a straight line (with evenly spaced control points)
    ///
    pub fn from_line(line: &LineSegment) -> CubicCurve {
        CubicCurve::new(line.p0, line.point_at(1.0 / 3.0), line.point_at(2.0 / 3.0), line.p1)
    }

    ///
    /// Creates the cubic curve that follows exactly the same path as a quadratic curve
    ///
    pub fn from_quadratic(quadratic: &QuadraticCurve) -> CubicCurve {
        CubicCurve::new(
            quadratic.p0,
            quadratic.p0 + (quadratic.p1 - quadratic.p0) * (2.0 / 3.0),
            quadratic.p2 + (quadratic.p1 - quadratic.p2) * (2.0 / 3.0),
            quadratic.p2,
        )
    }

    ///
    /// Replaces this curve with a quadratic, returning the quadratic and an upper bound on the distance
    /// between the two curves
    ///
    pub fn downgraded_to_quadratic(&self) -> (QuadraticCurve, f64) {
        let line = LineSegment::new(self.p0, self.p3);
        let d1 = self.p1 - line.point_at(1.0 / 3.0);
        let d2 = self.p2 - line.point_at(2.0 / 3.0);
        let d = d1 * 0.5 + d2 * 0.5;
        let p1 = d * 1.5 + line.point_at(0.5);
        let error = 0.144334 * (d1 - d2).length();

        (QuadraticCurve::new(self.p0, p1, self.p3), error)
    }

    ///
    /// Replaces this curve with a line between its end points, returning the line and an upper bound on the
    /// distance between the two
    ///
    pub fn downgraded_to_line(&self) -> (LineSegment, f64) {
        let line = LineSegment::new(self.p0, self.p3);
        let d1 = self.p1 - line.point_at(1.0 / 3.0);
        let d2 = self.p2 - line.point_at(2.0 / 3.0);
        let dmax_x = f64::max(d1.0 * d1.0, d2.0 * d2.0);
        let dmax_y = f64::max(d1.1 * d1.1, d2.1 * d2.1);

        (line, 0.75 * (dmax_x + dmax_y).sqrt())
    }
}

impl BezierCurve for CubicCurve {
    #[inline]
    fn order(&self) -> usize {
        3
    }

    fn points(&self) -> ControlPoints {
        smallvec![self.p0, self.p1, self.p2, self.p3]
    }

    fn map_points<MapFn: Fn(usize, Coord2) -> Coord2>(&self, map: MapFn) -> CubicCurve {
        CubicCurve::new(map(0, self.p0), map(1, self.p1), map(2, self.p2), map(3, self.p3))
    }

    #[inline]
    fn start_point(&self) -> Coord2 {
        self.p0
    }

    #[inline]
    fn end_point(&self) -> Coord2 {
        self.p3
    }

    fn point_at(&self, t: f64) -> Coord2 {
        if t == 0.0 {
            return self.p0;
        } else if t == 1.0 {
            return self.p3;
        }

        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let t2 = t * t;

        self.p0 * (mt2 * mt) + self.p1 * (3.0 * mt2 * t) + self.p2 * (3.0 * mt * t2) + self.p3 * (t2 * t)
    }

    fn derivative_at(&self, t: f64) -> Coord2 {
        let mt = 1.0 - t;
        let d0 = (self.p1 - self.p0) * 3.0;
        let d1 = (self.p2 - self.p1) * 3.0;
        let d2 = (self.p3 - self.p2) * 3.0;

        d0 * (mt * mt) + d1 * (2.0 * mt * t) + d2 * (t * t)
    }

    fn normal_at(&self, t: f64) -> Coord2 {
        let mut derivative = self.derivative_at(t);

        if derivative == Coord2::origin() && (t == 0.0 || t == 1.0) {
            derivative = if t == 0.0 { self.p2 - self.p0 } else { self.p3 - self.p1 };

            if derivative == Coord2::origin() {
                derivative = self.p3 - self.p0;
            }
        }

        derivative.perpendicular().normalize()
    }

    fn split_at(&self, t: f64) -> (CubicCurve, CubicCurve) {
        let h4 = self.p0.lerp(self.p1, t);
        let h5 = self.p1.lerp(self.p2, t);
        let h6 = self.p2.lerp(self.p3, t);
        let h7 = h4.lerp(h5, t);
        let h8 = h5.lerp(h6, t);
        let h9 = h7.lerp(h8, t);

        (CubicCurve::new(self.p0, h4, h7, h9), CubicCurve::new(h9, h8, h6, self.p3))
    }

    fn split_range(&self, t1: f64, t2: f64) -> CubicCurve {
        if t1 == 0.0 && t2 == 1.0 {
            return *self;
        } else if t1 > t2 {
            return self.split_range(t2, t1).reversed();
        }

        let k = (t2 - t1) / 3.0;
        let p0 = self.point_at(t1);
        let p3 = self.point_at(t2);
        let p1 = p0 + self.derivative_at(t1) * k;
        let p2 = p3 - self.derivative_at(t2) * k;

        CubicCurve::new(p0, p1, p2, p3)
    }

    fn reversed(&self) -> CubicCurve {
        CubicCurve::new(self.p3, self.p2, self.p1, self.p0)
    }

    fn bounding_box(&self) -> Bounds<Coord2> {
        let mut min = Coord2::from_smallest_components(self.p0, self.p3);
        let mut max = Coord2::from_biggest_components(self.p0, self.p3);

        let d0 = self.p1 - self.p0;
        let d1 = self.p2 - self.p1;
        let d2 = self.p3 - self.p2;

        for dimension in 0..2 {
            let (min_d, max_d) = (min[dimension], max[dimension]);
            let (value1, value2) = (self.p1[dimension], self.p2[dimension]);

            // The control points are inside the box so the curve is too
            if value1 >= min_d && value1 <= max_d && value2 >= min_d && value2 <= max_d {
                continue;
            }

            for t in droots_quadratic(d0[dimension], d1[dimension], d2[dimension]) {
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
        let c = self.translated(-point);

        // The dot product of the curve and its derivative is a quintic whose roots are the perpendicular points
        let x = c.x_polynomial();
        let y = c.y_polynomial();
        let perpendicular = &(&x * &x.derivative()) + &(&y * &y.derivative());

        let (mut min_t, mut min_distance_squared) = if c.p3.length_squared() < c.p0.length_squared() {
            (1.0, c.p3.length_squared())
        } else {
            (0.0, c.p0.length_squared())
        };

        for t in find_distinct_roots_in_unit_interval(&perpendicular) {
            if !(t > 0.0 && t < 1.0) {
                continue;
            }

            let distance_squared = c.point_at(t).length_squared();
            if distance_squared < min_distance_squared {
                min_distance_squared = distance_squared;
                min_t = t;
            }
        }

        (self.point_at(min_t), min_t)
    }

    fn is_simple(&self) -> bool {
        if self.p0 == self.p1 && self.p1 == self.p2 && self.p2 == self.p3 {
            return true;
        }

        // Both control points must be on the same side of the baseline
        let a1 = angle_between(self.p0, self.p3, self.p1);
        let a2 = angle_between(self.p0, self.p3, self.p2);
        if (a1 > 0.0 && a2 < 0.0) || (a1 < 0.0 && a2 > 0.0) {
            return false;
        }

        normals_are_close(self.normal_at(0.0), self.normal_at(1.0))
    }

    #[inline]
    fn to_curve(&self) -> Curve {
        Curve::Cubic(*self)
    }

    fn self_intersections(&self, _accuracy: f64) -> Vec<Intersection> {
        cubic_self_intersections(self)
    }
}

impl HasBoundingBox for CubicCurve {
    fn get_bounding_box<Bounds: BoundingBox<Point = Coord2>>(&self) -> Bounds {
        let bounds = self.bounding_box();
        Bounds::from_min_max(bounds.min(), bounds.max())
    }
}

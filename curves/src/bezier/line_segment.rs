/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::curve::*;
use crate::error::*;
use crate::geo::*;

use smallvec::*;

///
/// A straight line between two points
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct LineSegment {
    pub p0: Coord2,
    pub p1: Coord2,
}

impl Geo for LineSegment {
    type Point = Coord2;
}

impl LineSegment {
    #[inline]
    pub fn new(p0: Coord2, p1: Coord2) -> LineSegment {
        LineSegment { p0, p1 }
    }

    ///
    /// Creates a curve from a slice of control points, which must contain exactly 2 points
    ///
    pub fn try_from_points(points: &[Coord2]) -> Result<LineSegment, CurveError> {
        match points {
            [p0, p1] => Ok(LineSegment::new(*p0, *p1)),
            _ => Err(CurveError::WrongNumberOfPoints { expected: 2, actual: points.len() }),
        }
    }

    ///
    /// The vector from the start to the end of this line
    ///
    #[inline]
    pub fn direction(&self) -> Coord2 {
        self.p1 - self.p0
    }

    ///
    /// True if the start and end points of this line are the same
    ///
    #[inline]
    pub fn is_point(&self) -> bool {
        self.p0 == self.p1
    }
}

impl BezierCurve for LineSegment {
    #[inline]
    fn order(&self) -> usize {
        1
    }

    fn points(&self) -> ControlPoints {
        smallvec![self.p0, self.p1]
    }

    fn map_points<MapFn: Fn(usize, Coord2) -> Coord2>(&self, map: MapFn) -> LineSegment {
        LineSegment::new(map(0, self.p0), map(1, self.p1))
    }

    #[inline]
    fn start_point(&self) -> Coord2 {
        self.p0
    }

    #[inline]
    fn end_point(&self) -> Coord2 {
        self.p1
    }

    fn point_at(&self, t: f64) -> Coord2 {
        if t == 0.0 {
            self.p0
        } else if t == 1.0 {
            self.p1
        } else {
            self.p0 * (1.0 - t) + self.p1 * t
        }
    }

    #[inline]
    fn derivative_at(&self, _t: f64) -> Coord2 {
        self.p1 - self.p0
    }

    fn normal_at(&self, _t: f64) -> Coord2 {
        self.direction().perpendicular().normalize()
    }

    fn split_at(&self, t: f64) -> (LineSegment, LineSegment) {
        let mid = self.point_at(t);
        (LineSegment::new(self.p0, mid), LineSegment::new(mid, self.p1))
    }

    fn split_range(&self, t1: f64, t2: f64) -> LineSegment {
        if t1 == 0.0 && t2 == 1.0 {
            *self
        } else {
            LineSegment::new(self.point_at(t1), self.point_at(t2))
        }
    }

    fn reversed(&self) -> LineSegment {
        LineSegment::new(self.p1, self.p0)
    }

    fn bounding_box(&self) -> Bounds<Coord2> {
        Bounds::from_points(self.p0, self.p1)
    }

    fn project(&self, point: Coord2) -> (Coord2, f64) {
        let delta = self.direction();
        let length_squared = delta.length_squared();

        let t = if length_squared > 0.0 {
            ((point - self.p0).dot(&delta) / length_squared).max(0.0).min(1.0)
        } else {
            0.0
        };

        (self.point_at(t), t)
    }

    #[inline]
    fn is_simple(&self) -> bool {
        true
    }

    #[inline]
    fn to_curve(&self) -> Curve {
        Curve::Line(*self)
    }

    #[inline]
    fn length(&self) -> f64 {
        self.p0.distance_to(&self.p1)
    }
}

impl HasBoundingBox for LineSegment {
    fn get_bounding_box<Bounds: BoundingBox<Point = Coord2>>(&self) -> Bounds {
        Bounds::bounds_for_points(vec![self.p0, self.p1])
    }
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coord2::*;
use super::coordinate::*;
use super::geo::*;

///
/// Trait implemented by types that represent an axis-aligned bounding box
///
pub trait BoundingBox: Geo + Sized {
    ///
    /// Creates a new bounding box from a pair of points, which should already be in min/max order
    ///
    fn from_min_max(min: Self::Point, max: Self::Point) -> Self;

    ///
    /// Returns the minimum point of this bounding box
    ///
    fn min(&self) -> Self::Point;

    ///
    /// Returns the maximum point of this bounding box
    ///
    fn max(&self) -> Self::Point;

    ///
    /// The empty bounding box, which contains nothing and overlaps nothing (including itself)
    ///
    fn empty() -> Self {
        Self::from_min_max(Self::Point::splat(f64::INFINITY), Self::Point::splat(f64::NEG_INFINITY))
    }

    ///
    /// Creates the smallest bounding box that contains all of the specified points
    ///
    fn bounds_for_points<PointIter: IntoIterator<Item = Self::Point>>(points: PointIter) -> Self {
        let mut min = Self::Point::splat(f64::INFINITY);
        let mut max = Self::Point::splat(f64::NEG_INFINITY);

        for point in points {
            min = Self::Point::from_smallest_components(min, point);
            max = Self::Point::from_biggest_components(max, point);
        }

        Self::from_min_max(min, max)
    }

    ///
    /// True if this bounding box contains no points
    ///
    fn is_empty(&self) -> bool {
        let min = self.min();
        let max = self.max();

        (0..Self::Point::len()).any(|idx| min.get(idx) > max.get(idx))
    }

    ///
    /// Returns the size of this bounding box along each axis (0 for an empty box)
    ///
    fn size(&self) -> Self::Point {
        Self::Point::from_biggest_components(self.max() - self.min(), Self::Point::origin())
    }

    ///
    /// Returns a bounding box that contains both this box and another one
    ///
    fn union_bounds(self, target: Self) -> Self {
        Self::from_min_max(
            Self::Point::from_smallest_components(self.min(), target.min()),
            Self::Point::from_biggest_components(self.max(), target.max()),
        )
    }

    ///
    /// Returns a bounding box that also contains the specified point
    ///
    fn union_point(self, point: Self::Point) -> Self {
        Self::from_min_max(
            Self::Point::from_smallest_components(self.min(), point),
            Self::Point::from_biggest_components(self.max(), point),
        )
    }

    ///
    /// The area shared by two bounding boxes (the empty box if they don't overlap)
    ///
    fn intersection(&self, target: &Self) -> Self {
        let min = Self::Point::from_biggest_components(self.min(), target.min());
        let max = Self::Point::from_smallest_components(self.max(), target.max());
        let size = max - min;

        if (0..Self::Point::len()).all(|idx| size.get(idx) >= 0.0) {
            Self::from_min_max(min, max)
        } else {
            Self::empty()
        }
    }

    ///
    /// True if this bounding box overlaps (or touches) another
    ///
    fn overlaps(&self, target: &Self) -> bool {
        let p1 = Self::Point::from_biggest_components(self.min(), target.min());
        let p2 = Self::Point::from_smallest_components(self.max(), target.max());

        (0..Self::Point::len()).all(|idx| p2.get(idx) >= p1.get(idx))
    }

    ///
    /// True if the specified point is inside (or on the edge of) this bounding box
    ///
    fn contains(&self, point: &Self::Point) -> bool {
        let min = self.min();
        let max = self.max();

        (0..Self::Point::len()).all(|idx| {
            let component = point.get(idx);
            component >= min.get(idx) && component <= max.get(idx)
        })
    }

    ///
    /// A distance that no point in the bounding box can be closer than
    ///
    fn lower_bound_of_distance(&self, point: &Self::Point) -> f64 {
        let min = self.min();
        let max = self.max();

        let distance_squared = (0..Self::Point::len())
            .map(|idx| {
                let component = point.get(idx);
                let clamped = component.max(min.get(idx)).min(max.get(idx));
                let offset = component - clamped;

                offset * offset
            })
            .sum::<f64>();

        distance_squared.sqrt()
    }

    ///
    /// A distance that every point in the bounding box is at least as close as
    ///
    fn upper_bound_of_distance(&self, point: &Self::Point) -> f64 {
        let min = self.min();
        let max = self.max();

        let distance_squared = (0..Self::Point::len())
            .map(|idx| {
                let diff1 = point.get(idx) - min.get(idx);
                let diff2 = point.get(idx) - max.get(idx);

                f64::max(diff1 * diff1, diff2 * diff2)
            })
            .sum::<f64>();

        distance_squared.sqrt()
    }
}

///
/// The default implementation of a bounding box
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Bounds<Point>(Point, Point);

impl<Point: Coordinate> Geo for Bounds<Point> {
    type Point = Point;
}

impl<Point: Coordinate> BoundingBox for Bounds<Point> {
    #[inline]
    fn from_min_max(min: Point, max: Point) -> Self {
        Bounds(min, max)
    }

    #[inline]
    fn min(&self) -> Point {
        self.0
    }

    #[inline]
    fn max(&self) -> Point {
        self.1
    }
}

impl<Point: Coordinate> Bounds<Point> {
    ///
    /// Creates the bounding box of two points, which can be in any order
    ///
    pub fn from_points(p1: Point, p2: Point) -> Self {
        Bounds(
            Point::from_smallest_components(p1, p2),
            Point::from_biggest_components(p1, p2),
        )
    }
}

impl Bounds<Coord2> {
    ///
    /// The area covered by this bounding box
    ///
    pub fn area(&self) -> f64 {
        let size = self.size();
        size.0 * size.1
    }

    ///
    /// The point in the middle of this bounding box
    ///
    pub fn center(&self) -> Coord2 {
        (self.0 + self.1) * 0.5
    }
}

impl<Point: Coordinate> Geo for (Point, Point) {
    type Point = Point;
}

impl<Point: Coordinate> BoundingBox for (Point, Point) {
    #[inline]
    fn from_min_max(min: Point, max: Point) -> Self {
        (min, max)
    }

    #[inline]
    fn min(&self) -> Point {
        Point::from_smallest_components(self.0, self.1)
    }

    #[inline]
    fn max(&self) -> Point {
        Point::from_biggest_components(self.0, self.1)
    }

    ///
    /// A tuple can't represent an empty region, as its min and max are always sorted
    ///
    fn is_empty(&self) -> bool {
        false
    }
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::bvh::*;
use super::location::*;
use crate::bezier::curve::*;
use crate::bezier::intersection::*;
use crate::bezier::line_segment::*;
use crate::bezier::offset::*;
use crate::bezier::quadratic::*;
use crate::bezier::cubic::*;
use crate::error::*;
use crate::geo::*;

use once_cell::sync::OnceCell;

///
/// A single connected sequence of bezier curves (an 'element' is one of these curves)
///
/// The points are stored in a single list, with each element sharing its start point with the end point
/// of the element before it. `orders` holds the order of each element, so element `i` uses `orders[i]+1`
/// points. A component made of a single point has one element of order 0.
///
/// The bounding volume hierarchy and bounding boxes are computed the first time they're needed: this is
/// safe to do from many threads at once, and the calculation is only ever performed once.
///
#[derive(Clone, Debug)]
pub struct PathComponent {
    points: Vec<Coord2>,
    orders: Vec<usize>,

    /// Index into `points` of the first point of each element
    offsets: Vec<usize>,

    bvh: OnceCell<BoundingVolumeHierarchy>,
    bounding_box_of_path: OnceCell<Bounds<Coord2>>,
}

impl PartialEq for PathComponent {
    fn eq(&self, other: &PathComponent) -> bool {
        self.orders == other.orders && self.points == other.points
    }
}

///
/// Computes the offset of the first point of each element from the list of element orders
///
fn offsets_for_orders(orders: &[usize]) -> Vec<usize> {
    orders
        .iter()
        .scan(0, |offset, order| {
            let start = *offset;
            *offset += *order;
            Some(start)
        })
        .collect()
}

impl PathComponent {
    ///
    /// Creates a path component from its points and the orders of its elements
    ///
    /// The number of points must be one more than the sum of the orders: use `try_new()` for data that might
    /// not satisfy this.
    ///
    pub fn new(points: Vec<Coord2>, orders: Vec<usize>) -> PathComponent {
        match PathComponent::try_new(points, orders) {
            Ok(component) => component,
            Err(err) => panic!("Invalid path component: {}", err),
        }
    }

    ///
    /// Creates a path component from its points and the orders of its elements, checking that they're consistent
    ///
    pub fn try_new(points: Vec<Coord2>, orders: Vec<usize>) -> Result<PathComponent, PathComponentError> {
        if orders.is_empty() {
            return Err(PathComponentError::EmptyOrders);
        }

        if let Some(order) = orders.iter().find(|order| **order > 3) {
            return Err(PathComponentError::InvalidOrder(*order));
        }

        let expected = 1 + orders.iter().sum::<usize>();
        if points.len() != expected {
            return Err(PathComponentError::PointCountMismatch {
                expected,
                actual: points.len(),
            });
        }

        let offsets = offsets_for_orders(&orders);

        Ok(PathComponent {
            points,
            orders,
            offsets,
            bvh: OnceCell::new(),
            bounding_box_of_path: OnceCell::new(),
        })
    }

    ///
    /// Creates a path component from a list of curves, each of which should start where the previous one ends
    ///
    pub fn from_curves(curves: &[Curve]) -> PathComponent {
        assert!(!curves.is_empty(), "Path components need at least one curve");

        let mut points = vec![curves[0].start_point()];
        let mut orders = Vec::with_capacity(curves.len());

        for curve in curves.iter() {
            test_assert!(points.last() == Some(&curve.start_point()));

            points.extend(curve.points().into_iter().skip(1));
            orders.push(curve.order());
        }

        PathComponent::new(points, orders)
    }

    ///
    /// Creates a path component made up of a single point
    ///
    pub fn from_point(point: Coord2) -> PathComponent {
        PathComponent::new(vec![point], vec![0])
    }

    #[inline]
    pub fn points(&self) -> &[Coord2] {
        &self.points
    }

    #[inline]
    pub fn orders(&self) -> &[usize] {
        &self.orders
    }

    #[inline]
    pub fn number_of_elements(&self) -> usize {
        self.orders.len()
    }

    ///
    /// Returns the curve for the element at the specified index
    ///
    /// Order 0 elements (points) are returned as a line of length 0.
    ///
    pub fn element(&self, index: usize) -> Curve {
        let offset = self.offsets[index];
        let p = &self.points[offset..];

        match self.orders[index] {
            3 => Curve::Cubic(CubicCurve::new(p[0], p[1], p[2], p[3])),
            2 => Curve::Quadratic(QuadraticCurve::new(p[0], p[1], p[2])),
            1 => Curve::Line(LineSegment::new(p[0], p[1])),
            _ => Curve::Line(LineSegment::new(p[0], p[0])),
        }
    }

    ///
    /// All of the elements of this component
    ///
    pub fn curves(&self) -> Vec<Curve> {
        (0..self.number_of_elements()).map(|index| self.element(index)).collect()
    }

    #[inline]
    pub fn start_point(&self) -> Coord2 {
        self.points[0]
    }

    #[inline]
    pub fn end_point(&self) -> Coord2 {
        self.points[self.points.len() - 1]
    }

    #[inline]
    pub fn start_point_of_element(&self, index: usize) -> Coord2 {
        self.points[self.offsets[index]]
    }

    #[inline]
    pub fn end_point_of_element(&self, index: usize) -> Coord2 {
        self.points[self.offsets[index] + self.orders[index]]
    }

    ///
    /// The location of the start of this component
    ///
    pub fn start_location(&self) -> IndexedPathComponentLocation {
        IndexedPathComponentLocation::new(0, 0.0)
    }

    ///
    /// The location of the end of this component
    ///
    pub fn end_location(&self) -> IndexedPathComponentLocation {
        IndexedPathComponentLocation::new(self.number_of_elements() - 1, 1.0)
    }

    ///
    /// A component is closed if it ends exactly where it starts
    ///
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.start_point() == self.end_point()
    }

    ///
    /// True if this component represents a single point
    ///
    #[inline]
    pub fn is_point(&self) -> bool {
        self.points.len() == 1
    }

    ///
    /// The total length of the elements in this component
    ///
    pub fn length(&self) -> f64 {
        (0..self.number_of_elements()).map(|index| self.element(index).length()).sum()
    }

    ///
    /// The bounding volume hierarchy of the elements in this component
    ///
    pub fn bvh(&self) -> &BoundingVolumeHierarchy {
        self.bvh.get_or_init(|| {
            BoundingVolumeHierarchy::new((0..self.number_of_elements()).map(|index| self.element(index).bounding_box()).collect())
        })
    }

    ///
    /// The bounding box of the curves in this component
    ///
    pub fn bounding_box(&self) -> Bounds<Coord2> {
        self.bvh().bounding_box()
    }

    ///
    /// The bounding box of the points in this component, including the control points
    ///
    pub fn bounding_box_of_path(&self) -> Bounds<Coord2> {
        *self
            .bounding_box_of_path
            .get_or_init(|| Bounds::bounds_for_points(self.points.iter().copied()))
    }

    pub fn point_at(&self, location: IndexedPathComponentLocation) -> Coord2 {
        match self.orders[location.element_index] {
            0 => self.start_point_of_element(location.element_index),
            _ => self.element(location.element_index).point_at(location.t),
        }
    }

    pub fn derivative_at(&self, location: IndexedPathComponentLocation) -> Coord2 {
        match self.orders[location.element_index] {
            0 => Coord2::origin(),
            _ => self.element(location.element_index).derivative_at(location.t),
        }
    }

    ///
    /// The normal at a location (points have no normal, so this is NaN for an order 0 element)
    ///
    pub fn normal_at(&self, location: IndexedPathComponentLocation) -> Coord2 {
        match self.orders[location.element_index] {
            0 => Coord2(f64::NAN, f64::NAN),
            _ => self.element(location.element_index).normal_at(location.t),
        }
    }

    ///
    /// Calls the callback with the end points of each element, and optionally the control points too
    ///
    pub fn enumerate_points<PointFn: FnMut(Coord2)>(&self, include_control_points: bool, mut callback: PointFn) {
        if include_control_points {
            self.points.iter().for_each(|point| callback(*point));
        } else {
            self.offsets.iter().for_each(|offset| callback(self.points[*offset]));

            if self.points.len() > 1 {
                callback(self.end_point());
            }
        }
    }

    ///
    /// Returns the part of this component between two locations
    ///
    /// The result runs backwards if the end of the range is before the start.
    ///
    pub fn split(&self, range: PathComponentRange) -> PathComponent {
        let reverse = range.end < range.start;
        let result = self.split_standardized(range.standardized());

        if reverse {
            result.reversed()
        } else {
            result
        }
    }

    fn split_standardized(&self, range: PathComponentRange) -> PathComponent {
        if self.is_point() {
            return self.clone();
        }

        let start = range.start;
        let end = range.end;

        let mut points = vec![];
        let mut orders = vec![];

        if start.element_index == end.element_index {
            self.append_split_element(&mut points, &mut orders, start.element_index, (start.t, end.t), true, true);
        } else {
            let first_full = if start.t != 0.0 { start.element_index + 1 } else { start.element_index };
            let last_full = if end.t != 1.0 { end.element_index as isize - 1 } else { end.element_index as isize };

            if first_full != start.element_index {
                self.append_split_element(&mut points, &mut orders, start.element_index, (start.t, 1.0), true, false);
            }

            let has_full_elements = first_full as isize <= last_full;
            if has_full_elements {
                let last_full = last_full as usize;
                let first_point = self.offsets[first_full];
                let last_point = self.offsets[last_full] + self.orders[last_full];

                points.extend(self.points[first_point..=last_point].iter().copied());
                orders.extend(self.orders[first_full..=last_full].iter().copied());
            }

            if last_full != end.element_index as isize {
                self.append_split_element(&mut points, &mut orders, end.element_index, (0.0, end.t), !has_full_elements, true);
            }
        }

        PathComponent::new(points, orders)
    }

    ///
    /// Appends the points for part of an element to a list, optionally leaving out the first or last point
    ///
    fn append_split_element(
        &self,
        points: &mut Vec<Coord2>,
        orders: &mut Vec<usize>,
        index: usize,
        (t1, t2): (f64, f64),
        include_start: bool,
        include_end: bool,
    ) {
        test_assert!(include_start || include_end);

        let element = self.element(index).split_range(t1, t2);
        let element_points = element.points();
        let first = if include_start { 0 } else { 1 };
        let last = if include_end { element.order() } else { element.order() - 1 };

        points.extend(element_points[first..=last].iter().copied());
        orders.push(self.orders[index]);
    }

    ///
    /// The same component, running in the opposite direction
    ///
    pub fn reversed(&self) -> PathComponent {
        PathComponent::new(
            self.points.iter().rev().copied().collect(),
            self.orders.iter().rev().copied().collect(),
        )
    }

    ///
    /// This component moved by an offset
    ///
    pub fn copy_translated(&self, offset: Coord2) -> PathComponent {
        PathComponent::new(self.points.iter().map(|point| *point + offset).collect(), self.orders.clone())
    }

    ///
    /// Creates a component that runs `distance` away from this one along its normals
    ///
    /// Returns `None` if there are no curves to offset (eg, for a point)
    ///
    pub fn offset(&self, distance: f64) -> Option<PathComponent> {
        let mut curves = self
            .curves()
            .into_iter()
            .flat_map(|curve| curve.offset(distance))
            .collect::<Vec<_>>();

        if curves.is_empty() {
            return None;
        }

        // The tangents at the ends of the offset curves decide where gaps between them are closed
        let tangents = curves
            .iter()
            .map(|curve| {
                let start = curve.start_point();
                let end = curve.end_point();
                ((start, start + curve.derivative_at(0.0)), (end, end + curve.derivative_at(1.0)))
            })
            .collect::<Vec<_>>();

        let join = |curves: &mut Vec<Curve>, first: usize, second: usize| {
            let end = curves[first].end_point();
            let start = curves[second].start_point();

            if end != start {
                let meeting_point =
                    lines_intersection(tangents[first].1, tangents[second].0).unwrap_or_else(|| (end + start) * 0.5);

                curves[first] = curves[first].with_end_point(meeting_point);
                curves[second] = curves[second].with_start_point(meeting_point);
            }
        };

        for idx in 0..(curves.len() - 1) {
            join(&mut curves, idx, idx + 1);
        }

        if self.is_closed() {
            let last = curves.len() - 1;
            join(&mut curves, last, 0);
        }

        Some(PathComponent::from_curves(&curves))
    }

    ///
    /// The intersections between two elements (which may be from different components)
    ///
    fn intersections_between_elements(
        &self,
        index1: usize,
        other: &PathComponent,
        index2: usize,
        accuracy: f64,
    ) -> Vec<Intersection> {
        if self.orders[index1] == 0 || other.orders[index2] == 0 {
            return vec![];
        }

        curve_intersections(&self.element(index1), &other.element(index2), accuracy)
    }

    ///
    /// Finds the points where this component crosses or touches another one
    ///
    /// Intersections at the start of an element are reported at the end of the element before it, so
    /// each point where the components meet is only reported once.
    ///
    pub fn intersections(&self, other: &PathComponent, accuracy: f64) -> Vec<PathComponentIntersection> {
        let mut intersections = vec![];
        let is_closed1 = self.is_closed();
        let is_closed2 = other.is_closed();

        self.bvh().enumerate_intersections(other.bvh(), |index1, index2| {
            let element_intersections = self.intersections_between_elements(index1, other, index2, accuracy);

            intersections.extend(element_intersections.into_iter().filter_map(|intersection| {
                if intersection.t1 == 0.0 && (is_closed1 || index1 > 0) {
                    return None;
                }
                if intersection.t2 == 0.0 && (is_closed2 || index2 > 0) {
                    return None;
                }

                Some(PathComponentIntersection::new(
                    IndexedPathComponentLocation::new(index1, intersection.t1),
                    IndexedPathComponentLocation::new(index2, intersection.t2),
                ))
            }));
        });

        intersections
    }

    ///
    /// True if two neighbouring elements can only meet at the point they share
    ///
    fn neighbors_intersect_only_trivially(&self, index1: usize, index2: usize) -> bool {
        let bvh = self.bvh();
        let bounds1 = bvh.bounding_box_for_element(index1);
        let bounds2 = bvh.bounding_box_for_element(index2);

        if bounds1.intersection(&bounds2).area() != 0.0 {
            return false;
        }

        let offset = self.offsets[index2];
        (1..=self.orders[index2]).all(|idx| !bounds1.contains(&self.points[offset + idx]))
    }

    ///
    /// Finds the points where this component crosses itself
    ///
    /// The points where neighbouring elements join are not considered to be intersections.
    ///
    pub fn self_intersections(&self, accuracy: f64) -> Vec<PathComponentIntersection> {
        let mut intersections = vec![];
        let is_closed = self.is_closed();
        let number_of_elements = self.number_of_elements();

        self.bvh().enumerate_self_intersections(|index1, index2| {
            let element_intersections = if index1 == index2 {
                let element = self.element(index1);

                element
                    .self_intersections(accuracy)
                    .into_iter()
                    .filter(|intersection| {
                        // A single curve that closes itself doesn't count as intersecting itself
                        number_of_elements != 1 || intersection.t1 != 0.0 || intersection.t2 != 1.0
                    })
                    .collect::<Vec<_>>()
            } else if index1 < index2 {
                let are_neighbors =
                    index1 + 1 == index2 || (is_closed && index1 == 0 && index2 == number_of_elements - 1);

                if are_neighbors && self.neighbors_intersect_only_trivially(index1, index2) {
                    vec![]
                } else {
                    self.intersections_between_elements(index1, self, index2, accuracy)
                        .into_iter()
                        .filter(|intersection| {
                            if index1 + 1 == index2 && intersection.t1 == 1.0 && intersection.t2 == 0.0 {
                                return false;
                            }
                            if index1 == 0 && index2 == number_of_elements - 1 && intersection.t1 == 0.0 && intersection.t2 == 1.0 {
                                return false;
                            }
                            if intersection.t1 == 0.0 && (index1 > 0 || is_closed) {
                                return false;
                            }

                            // Reported at the end of the element before index2 instead
                            intersection.t2 != 0.0
                        })
                        .collect()
                }
            } else {
                vec![]
            };

            intersections.extend(element_intersections.into_iter().map(|intersection| {
                PathComponentIntersection::new(
                    IndexedPathComponentLocation::new(index1, intersection.t1),
                    IndexedPathComponentLocation::new(index2, intersection.t2),
                )
            }));
        });

        intersections
    }
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::bvh::*;
use super::component::*;
use crate::bezier::curve::*;
use crate::bezier::roots::*;
use crate::geo::*;

use itertools::*;
use smallvec::*;

use std::iter;

///
/// The rule used to decide which points are inside a path from their winding count
///
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum FillRule {
    /// Points with a non-zero winding count are inside the path
    Winding,

    /// Points with an odd winding count are inside the path
    EvenOdd,
}

impl Default for FillRule {
    fn default() -> FillRule {
        FillRule::Winding
    }
}

impl FillRule {
    ///
    /// True if a point with the specified winding count is inside a path filled with this rule
    ///
    #[inline]
    pub fn contains(&self, winding_count: i32) -> bool {
        match self {
            FillRule::Winding => winding_count != 0,
            FillRule::EvenOdd => winding_count % 2 != 0,
        }
    }
}

///
/// The change in winding count from crossing a piece of path running from `start_y` to `end_y` at `y`
///
/// Only the upper end of the piece counts: where two pieces join and change direction the join is
/// counted twice or not at all, and where they don't change direction it's counted exactly once.
///
fn winding_count_adjustment(y: f64, start_y: f64, end_y: f64) -> i32 {
    if end_y < y && y <= start_y {
        1
    } else if start_y < y && y <= end_y {
        -1
    } else {
        0
    }
}

///
/// The x coordinate where a y-monotonic curve crosses a horizontal line
///
fn x_intercept(curve: &Curve, y: f64) -> f64 {
    let start = curve.start_point();
    let end = curve.end_point();

    if y == start.1 {
        return start.0;
    } else if y == end.1 {
        return end.0;
    }

    let linear_t = (y - start.1) / (end.1 - start.1);
    let linear_x = start.lerp(end, linear_t).0;

    if curve.order() <= 1 {
        return linear_x;
    }

    let aligned = curve.points().iter().map(|point| point.1 - y).collect::<SmallVec<[f64; 4]>>();
    match droots(&aligned).into_iter().find(|t| (0.0..=1.0).contains(t)) {
        Some(t) => curve.point_at(t).0,
        None => linear_x,
    }
}

///
/// The amount a y-monotonic curve adds to the winding count of a point, by casting a ray towards -x
///
fn winding_count_increment(curve: &Curve, point: Coord2) -> i32 {
    let bounds = curve.bounding_box();
    if bounds.min().0 > point.0 {
        return 0;
    }

    let increment = winding_count_adjustment(point.1, curve.start_point().1, curve.end_point().1);
    if increment == 0 {
        return 0;
    }

    if bounds.max().0 >= point.0 && !(point.0 > x_intercept(curve, point.1)) {
        return 0;
    }

    increment
}

///
/// Splits a curve into sections where the y coordinate only increases or only decreases
///
fn y_monotonic_sections(curve: &Curve) -> SmallVec<[Curve; 3]> {
    let derivative = curve
        .points()
        .iter()
        .tuple_windows()
        .map(|(p1, p2)| p2.1 - p1.1)
        .collect::<SmallVec<[f64; 3]>>();

    let mut splits = droots(&derivative)
        .into_iter()
        .filter(|t| *t > 0.0 && *t < 1.0)
        .collect::<SmallVec<[f64; 2]>>();
    splits.sort_by(|a, b| a.total_cmp(b));

    iter::once(0.0)
        .chain(splits)
        .chain(iter::once(1.0))
        .tuple_windows()
        .filter(|(t1, t2)| t1 < t2)
        .map(|(t1, t2)| curve.split_range(t1, t2))
        .collect()
}

impl PathComponent {
    ///
    /// The winding count of a point relative to this component
    ///
    /// Open components don't enclose anything, so their winding count is always 0.
    ///
    pub fn winding_count(&self, point: Coord2) -> i32 {
        if !self.is_closed() || !self.bounding_box().contains(&point) {
            return 0;
        }

        let mut winding_count = 0;

        self.bvh().visit(|node, _depth| {
            let bounds = node.bounding_box;
            if bounds.min().1 > point.1 || bounds.max().1 < point.1 || bounds.min().0 > point.0 {
                // The ray can't cross anything in this node
                return false;
            }

            if bounds.max().0 < point.0 {
                // Everything in this node is crossed, so only its end points matter
                let (start, end) = match node.node_type {
                    BvhNodeType::Leaf(element_index) => (element_index, element_index),
                    BvhNodeType::Internal { start, end } => (start, end),
                };

                let start_point = self.start_point_of_element(start);
                let end_point = self.end_point_of_element(end);
                winding_count += winding_count_adjustment(point.1, start_point.1, end_point.1);

                return false;
            }

            let element_index = match node.node_type {
                BvhNodeType::Leaf(element_index) => element_index,
                BvhNodeType::Internal { .. } => return true,
            };

            match self.orders()[element_index] {
                0 => {}
                1 => winding_count += winding_count_increment(&self.element(element_index), point),
                _ => {
                    for section in y_monotonic_sections(&self.element(element_index)) {
                        winding_count += winding_count_increment(&section, point);
                    }
                }
            }

            true
        });

        winding_count
    }

    ///
    /// True if a point is inside this component
    ///
    pub fn contains(&self, point: Coord2, fill_rule: FillRule) -> bool {
        fill_rule.contains(self.winding_count(point))
    }
}

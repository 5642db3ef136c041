/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::intersection::*;
use super::line_line::*;
use crate::bezier::curve::*;
use crate::bezier::line_segment::*;
use crate::bezier::subcurve::*;
use crate::consts::*;
use crate::geo::*;

use log::debug;

///
/// State shared between the steps of a subdivision search
///
struct PairIteration {
    accuracy: f64,
    max_results: usize,
    iterations: usize,
    results: Vec<Intersection>,
}

impl PairIteration {
    fn should_recurse(&self, section: &Subcurve<Curve>, bounds: &Bounds<Coord2>) -> bool {
        let size = bounds.size();
        section.can_split() && size.x() + size.y() >= self.accuracy
    }

    fn iterate(&mut self, c1: &Subcurve<Curve>, c2: &Subcurve<Curve>, c1_bounds: Bounds<Coord2>, c2_bounds: Bounds<Coord2>) {
        if self.results.len() >= self.max_results || self.iterations >= MAX_PAIR_ITERATIONS {
            return;
        }
        self.iterations += 1;

        if !c1_bounds.overlaps(&c2_bounds) {
            return;
        }

        let recurse1 = self.should_recurse(c1, &c1_bounds);
        let recurse2 = self.should_recurse(c2, &c2_bounds);

        match (recurse1, recurse2) {
            (false, false) => {
                // Small enough to treat as lines
                let l1 = LineSegment::new(c1.curve.start_point(), c1.curve.end_point());
                let l2 = LineSegment::new(c2.curve.start_point(), c2.curve.end_point());

                if let Some(intersection) = line_line_intersections(&l1, &l2, false).first() {
                    let t1 = intersection.t1 * c1.t2 + (1.0 - intersection.t1) * c1.t1;
                    let t2 = intersection.t2 * c2.t2 + (1.0 - intersection.t2) * c2.t1;

                    self.results.push(Intersection::new(t1, t2));
                }
            }

            (true, true) => {
                let (c1_left, c1_right) = c1.split_at(0.5);
                let (c2_left, c2_right) = c2.split_at(0.5);
                let (c1_left_bounds, c1_right_bounds) = (c1_left.curve.bounding_box(), c1_right.curve.bounding_box());
                let (c2_left_bounds, c2_right_bounds) = (c2_left.curve.bounding_box(), c2_right.curve.bounding_box());

                self.iterate(&c1_left, &c2_left, c1_left_bounds, c2_left_bounds);
                self.iterate(&c1_left, &c2_right, c1_left_bounds, c2_right_bounds);
                self.iterate(&c1_right, &c2_left, c1_right_bounds, c2_left_bounds);
                self.iterate(&c1_right, &c2_right, c1_right_bounds, c2_right_bounds);
            }

            (true, false) => {
                let (c1_left, c1_right) = c1.split_at(0.5);
                let (c1_left_bounds, c1_right_bounds) = (c1_left.curve.bounding_box(), c1_right.curve.bounding_box());

                self.iterate(&c1_left, c2, c1_left_bounds, c2_bounds);
                self.iterate(&c1_right, c2, c1_right_bounds, c2_bounds);
            }

            (false, true) => {
                let (c2_left, c2_right) = c2.split_at(0.5);
                let (c2_left_bounds, c2_right_bounds) = (c2_left.curve.bounding_box(), c2_right.curve.bounding_box());

                self.iterate(c1, &c2_left, c1_bounds, c2_left_bounds);
                self.iterate(c1, &c2_right, c1_bounds, c2_right_bounds);
            }
        }
    }
}

///
/// Finds intersections between two curves by repeatedly subdividing them until the overlapping sections
/// are small enough to treat as lines
///
/// This is used when the algebraic method can't be used (for instance, when the implicit form of one
/// curve degenerates). The search gives up after a fixed number of steps, or once it has found as many
/// intersections as two curves of these orders can have.
///
pub fn curve_intersections_by_subdivision(curve1: &Curve, curve2: &Curve, accuracy: f64) -> Vec<Intersection> {
    let mut search = PairIteration {
        accuracy,
        max_results: curve1.order() * curve2.order(),
        iterations: 0,
        results: vec![],
    };

    search.iterate(
        &Subcurve::new(*curve1),
        &Subcurve::new(*curve2),
        curve1.bounding_box(),
        curve2.bounding_box(),
    );

    if search.iterations >= MAX_PAIR_ITERATIONS {
        debug!(
            "Subdivision search stopped after {} steps with {} intersections",
            search.iterations,
            search.results.len()
        );
    }

    sorted_and_uniqued_intersections(search.results)
}

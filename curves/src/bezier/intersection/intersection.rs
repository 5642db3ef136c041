/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::cmp::Ordering;

///
/// A place where two curves meet: `t1` is the t value on the first curve and `t2` is the t value on the second
///
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
pub struct Intersection {
    pub t1: f64,
    pub t2: f64,
}

impl Intersection {
    #[inline]
    pub fn new(t1: f64, t2: f64) -> Intersection {
        Intersection { t1, t2 }
    }

    ///
    /// The same intersection, seen from the point of view of the other curve
    ///
    #[inline]
    pub fn swapped(&self) -> Intersection {
        Intersection { t1: self.t2, t2: self.t1 }
    }
}

///
/// Sorts a list of intersections by t1 (then t2) and removes any exact duplicates
///
pub fn sorted_and_uniqued_intersections(mut intersections: Vec<Intersection>) -> Vec<Intersection> {
    if intersections.len() <= 1 {
        return intersections;
    }

    intersections.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    intersections.dedup();
    intersections
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::graph::*;
use super::path::*;

use log::trace;

impl Path {
    ///
    /// Builds the augmented graph for this path and another one, and performs an operation on it
    ///
    fn boolean_operation(&self, other: &Path, operation: BooleanPathOperation, accuracy: f64) -> Path {
        let intersections = self.intersections(other, accuracy);
        trace!("{:?}: {} intersections", operation, intersections.len());

        let graph = AugmentedGraph::new(self, other, intersections, operation);
        graph.perform_operation()
    }

    ///
    /// The region covered by either this path or another one
    ///
    pub fn union(&self, other: &Path, accuracy: f64) -> Path {
        if self.is_empty() {
            trace!("Union: first path is empty");
            return other.clone();
        } else if other.is_empty() {
            trace!("Union: second path is empty");
            return self.clone();
        } else if self == other {
            trace!("Union: paths are identical");
            return self.clone();
        }

        self.boolean_operation(other, BooleanPathOperation::Union, accuracy)
    }

    ///
    /// The region covered by both this path and another one
    ///
    pub fn intersect(&self, other: &Path, accuracy: f64) -> Path {
        if self.is_empty() || other.is_empty() {
            return Path::default();
        } else if self == other {
            trace!("Intersect: paths are identical");
            return self.clone();
        }

        self.boolean_operation(other, BooleanPathOperation::Intersect, accuracy)
    }

    ///
    /// The region covered by this path but not by another one
    ///
    /// The other path is reversed before the graph is built, so its edges run the opposite way to this one's.
    ///
    pub fn subtract(&self, other: &Path, accuracy: f64) -> Path {
        if self.is_empty() {
            return Path::default();
        } else if other.is_empty() {
            return self.clone();
        } else if self == other {
            trace!("Subtract: paths are identical");
            return Path::default();
        }

        let reversed = other.reversed();
        self.boolean_operation(&reversed, BooleanPathOperation::Subtract, accuracy)
    }

    ///
    /// Removes the places where this path crosses itself, keeping the area filled with the non-zero winding rule
    ///
    pub fn crossings_removed(&self, accuracy: f64) -> Path {
        let intersections = self.self_intersections(accuracy);
        if intersections.is_empty() {
            trace!("RemoveCrossings: no self-intersections");
            return self.clone();
        }

        let graph = AugmentedGraph::new(self, self, intersections, BooleanPathOperation::RemoveCrossings);
        graph.perform_operation()
    }
}

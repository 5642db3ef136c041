/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::bvh::*;
use super::component::*;
use super::location::*;
use super::path::*;
use crate::bezier::curve::*;
use crate::geo::*;

///
/// What a search for the closest point on a path is looking for
///
#[derive(Copy, Clone, PartialEq, Debug)]
enum SearchCriteria {
    /// The closest point
    Best,

    /// Any point closer than the specified distance
    WithinDistance(f64),
}

///
/// A location that's guaranteed to be inside a BVH node
///
fn any_location_in_node(node: &BvhNode) -> IndexedPathComponentLocation {
    match node.node_type {
        BvhNodeType::Leaf(element_index) => IndexedPathComponentLocation::new(element_index, 0.0),
        BvhNodeType::Internal { start, .. } => IndexedPathComponentLocation::new(start, 0.0),
    }
}

impl PathComponent {
    fn search_for_closest_location(
        &self,
        point: Coord2,
        criteria: SearchCriteria,
    ) -> Option<(Coord2, IndexedPathComponentLocation)> {
        let mut best_so_far = None;
        let mut best_upper_bound = match criteria {
            SearchCriteria::Best => f64::INFINITY,
            SearchCriteria::WithinDistance(distance) => distance,
        };
        let mut done = false;

        self.bvh().visit(|node, _depth| {
            if done {
                return false;
            }

            let bounds = node.bounding_box;
            if !(bounds.lower_bound_of_distance(&point) < best_upper_bound) {
                return false;
            }

            // Every point in the node is at least this close, so any location in it will do for now
            let upper_bound = bounds.upper_bound_of_distance(&point);
            if upper_bound < best_upper_bound {
                best_upper_bound = upper_bound;
                best_so_far = Some(any_location_in_node(node));

                if criteria != SearchCriteria::Best {
                    done = true;
                    return false;
                }
            }

            if let BvhNodeType::Leaf(element_index) = node.node_type {
                let (projected, t) = self.element(element_index).project(point);
                let distance = projected.distance_to(&point);

                if distance < best_upper_bound {
                    best_upper_bound = distance;
                    best_so_far = Some(IndexedPathComponentLocation::new(element_index, t));

                    if criteria != SearchCriteria::Best {
                        done = true;
                        return false;
                    }
                }
            }

            true
        });

        best_so_far.map(|location| (self.point_at(location), location))
    }

    ///
    /// Finds the closest point on this component to the specified point, along with its location
    ///
    pub fn project(&self, point: Coord2) -> (Coord2, IndexedPathComponentLocation) {
        self.search_for_closest_location(point, SearchCriteria::Best)
            .unwrap_or_else(|| (self.start_point(), self.start_location()))
    }

    ///
    /// True if some point on the boundary of this component is within `distance` of a point
    ///
    pub fn point_is_within_distance_of_boundary(&self, point: Coord2, distance: f64) -> bool {
        match self.search_for_closest_location(point, SearchCriteria::WithinDistance(distance)) {
            Some((closest, _)) => closest.distance_to(&point) <= distance,
            None => false,
        }
    }
}

impl Path {
    fn search_for_closest_location(&self, point: Coord2, criteria: SearchCriteria) -> Option<(Coord2, IndexedPathLocation)> {
        // Searching the components in order of proximity lets the distant ones be skipped
        let mut candidates = self
            .components()
            .iter()
            .enumerate()
            .map(|(index, component)| {
                let bounds = component.bounding_box();
                (
                    index,
                    component,
                    bounds.lower_bound_of_distance(&point),
                    bounds.upper_bound_of_distance(&point),
                )
            })
            .collect::<Vec<_>>();
        candidates.sort_by(|a, b| a.3.total_cmp(&b.3));

        let mut best: Option<(Coord2, IndexedPathLocation, f64)> = None;

        for (index, component, lower_bound, _) in candidates {
            if let Some((_, _, best_distance)) = best {
                if lower_bound > best_distance {
                    continue;
                }
            }

            let (projected, location) = component.project(point);
            let distance = projected.distance_to(&point);

            if best.map(|(_, _, best_distance)| distance < best_distance).unwrap_or(true) {
                best = Some((projected, IndexedPathLocation::from_component_location(index, location), distance));

                if let SearchCriteria::WithinDistance(max_distance) = criteria {
                    if distance <= max_distance {
                        break;
                    }
                }
            }
        }

        best.map(|(projected, location, _)| (projected, location))
    }

    ///
    /// Finds the closest point on this path to the specified point, or `None` if the path is empty
    ///
    pub fn project(&self, point: Coord2) -> Option<(Coord2, IndexedPathLocation)> {
        self.search_for_closest_location(point, SearchCriteria::Best)
    }

    ///
    /// True if some point on the boundary of this path is within `distance` of a point
    ///
    pub fn point_is_within_distance_of_boundary(&self, point: Coord2, distance: f64) -> bool {
        match self.search_for_closest_location(point, SearchCriteria::WithinDistance(distance)) {
            Some((closest, _)) => closest.distance_to(&point) <= distance,
            None => false,
        }
    }
}

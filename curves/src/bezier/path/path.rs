/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::component::*;
use super::location::*;
use super::winding::*;
use crate::bezier::curve::*;
use crate::geo::*;

use once_cell::sync::OnceCell;

///
/// A path made up of zero or more components
///
/// Paths are immutable: operations such as `reversed()` or `union()` return a new path. The bounding box
/// is calculated on first use, and a path can be shared between threads.
///
#[derive(Clone, Debug, Default)]
pub struct Path {
    components: Vec<PathComponent>,

    bounding_box: OnceCell<Bounds<Coord2>>,
    bounding_box_of_path: OnceCell<Bounds<Coord2>>,
}

impl PartialEq for Path {
    fn eq(&self, other: &Path) -> bool {
        self.components == other.components
    }
}

impl From<PathComponent> for Path {
    fn from(component: PathComponent) -> Path {
        Path::new(vec![component])
    }
}

impl Path {
    ///
    /// Creates a path from a list of components
    ///
    pub fn new(components: Vec<PathComponent>) -> Path {
        Path {
            components,
            bounding_box: OnceCell::new(),
            bounding_box_of_path: OnceCell::new(),
        }
    }

    ///
    /// Creates a path with a single component made up of a single curve
    ///
    pub fn from_curve(curve: Curve) -> Path {
        Path::new(vec![PathComponent::from_curves(&[curve])])
    }

    #[inline]
    pub fn components(&self) -> &[PathComponent] {
        &self.components
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    ///
    /// The bounding box of all the curves in this path
    ///
    pub fn bounding_box(&self) -> Bounds<Coord2> {
        *self.bounding_box.get_or_init(|| {
            self.components
                .iter()
                .fold(Bounds::empty(), |bounds, component| bounds.union_bounds(component.bounding_box()))
        })
    }

    ///
    /// The bounding box of all the points in this path, including the control points
    ///
    pub fn bounding_box_of_path(&self) -> Bounds<Coord2> {
        *self.bounding_box_of_path.get_or_init(|| {
            self.components
                .iter()
                .fold(Bounds::empty(), |bounds, component| bounds.union_bounds(component.bounding_box_of_path()))
        })
    }

    ///
    /// The curve at a particular component and element index
    ///
    pub fn element(&self, component_index: usize, element_index: usize) -> Curve {
        self.components[component_index].element(element_index)
    }

    pub fn point_at(&self, location: IndexedPathLocation) -> Coord2 {
        self.components[location.component_index].point_at(location.location_in_component())
    }

    pub fn derivative_at(&self, location: IndexedPathLocation) -> Coord2 {
        self.components[location.component_index].derivative_at(location.location_in_component())
    }

    pub fn normal_at(&self, location: IndexedPathLocation) -> Coord2 {
        self.components[location.component_index].normal_at(location.location_in_component())
    }

    ///
    /// Finds the points where this path meets another one
    ///
    pub fn intersections(&self, other: &Path, accuracy: f64) -> Vec<PathIntersection> {
        if !self.bounding_box().overlaps(&other.bounding_box()) {
            return vec![];
        }

        let mut intersections = vec![];

        for (index_a, component_a) in self.components.iter().enumerate() {
            for (index_b, component_b) in other.components.iter().enumerate() {
                intersections.extend(
                    component_a
                        .intersections(component_b, accuracy)
                        .into_iter()
                        .map(|intersection| PathIntersection::from_component_intersection(intersection, index_a, index_b)),
                );
            }
        }

        intersections
    }

    ///
    /// True if this path meets another one
    ///
    pub fn intersects(&self, other: &Path, accuracy: f64) -> bool {
        !self.intersections(other, accuracy).is_empty()
    }

    ///
    /// Finds the points where this path crosses itself (including where its components cross each other)
    ///
    pub fn self_intersections(&self, accuracy: f64) -> Vec<PathIntersection> {
        let mut intersections = vec![];

        for index_a in 0..self.components.len() {
            for index_b in index_a..self.components.len() {
                let component_intersections = if index_a == index_b {
                    self.components[index_a].self_intersections(accuracy)
                } else {
                    self.components[index_a].intersections(&self.components[index_b], accuracy)
                };

                intersections.extend(
                    component_intersections
                        .into_iter()
                        .map(|intersection| PathIntersection::from_component_intersection(intersection, index_a, index_b)),
                );
            }
        }

        intersections
    }

    pub fn self_intersects(&self, accuracy: f64) -> bool {
        !self.self_intersections(accuracy).is_empty()
    }

    ///
    /// The winding count of a point, optionally leaving out one of the components
    ///
    pub fn winding_count(&self, point: Coord2, ignoring: Option<usize>) -> i32 {
        self.components
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != ignoring)
            .map(|(_, component)| component.winding_count(point))
            .sum()
    }

    ///
    /// True if a point is inside this path
    ///
    pub fn contains(&self, point: Coord2, fill_rule: FillRule) -> bool {
        fill_rule.contains(self.winding_count(point, None))
    }

    ///
    /// True if another path is entirely inside this one (using the non-zero winding rule)
    ///
    /// This checks that every component of the other path starts inside this one, and that the two paths
    /// don't meet anywhere.
    ///
    pub fn contains_path(&self, other: &Path, accuracy: f64) -> bool {
        let all_start_inside = other
            .components
            .iter()
            .all(|component| self.contains(component.start_point(), FillRule::Winding));

        all_start_inside && !self.intersects(other, accuracy)
    }

    ///
    /// The same path with every component running in the opposite direction
    ///
    pub fn reversed(&self) -> Path {
        Path::new(self.components.iter().map(|component| component.reversed()).collect())
    }

    ///
    /// The same path moved by an offset
    ///
    pub fn copy_translated(&self, offset: Coord2) -> Path {
        Path::new(self.components.iter().map(|component| component.copy_translated(offset)).collect())
    }

    ///
    /// Creates a path that runs `distance` away from this one along its normals
    ///
    pub fn offset(&self, distance: f64) -> Path {
        Path::new(self.components.iter().filter_map(|component| component.offset(distance)).collect())
    }

    ///
    /// Splits this path into a list of paths, each made up of an outer component and the holes inside it
    ///
    pub fn disjoint_components(&self) -> Vec<Path> {
        let rule = FillRule::EvenOdd;
        let mut outer = vec![];
        let mut inner = vec![];

        for (index, component) in self.components.iter().enumerate() {
            let winding_count = self.winding_count(component.start_point(), Some(index));

            if rule.contains(winding_count) {
                inner.push(index);
            } else {
                outer.push((index, vec![index]));
            }
        }

        // Each hole belongs to the innermost outer component that contains it
        for hole_index in inner {
            let hole_start = self.components[hole_index].start_point();
            let mut owner: Option<usize> = None;

            for (outer_pos, (outer_index, _)) in outer.iter().enumerate() {
                let outer_component = &self.components[*outer_index];

                if let Some(owner_pos) = owner {
                    let owner_bounds = self.components[outer[owner_pos].0].bounding_box();
                    let outer_bounds = outer_component.bounding_box();

                    if outer_bounds.intersection(&owner_bounds) != outer_bounds {
                        continue;
                    }
                }

                if outer_component.contains(hole_start, rule) {
                    owner = Some(outer_pos);
                }
            }

            if let Some(owner_pos) = owner {
                outer[owner_pos].1.push(hole_index);
            }
        }

        outer
            .into_iter()
            .map(|(_, indexes)| Path::new(indexes.into_iter().map(|index| self.components[index].clone()).collect()))
            .collect()
    }
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::cmp::Ordering;

///
/// A location within a path component: an element index and a 't' value along that element
///
/// Locations are ordered by element index first, then by 't'.
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct IndexedPathComponentLocation {
    pub element_index: usize,
    pub t: f64,
}

impl IndexedPathComponentLocation {
    #[inline]
    pub fn new(element_index: usize, t: f64) -> IndexedPathComponentLocation {
        IndexedPathComponentLocation { element_index, t }
    }
}

impl PartialOrd for IndexedPathComponentLocation {
    fn partial_cmp(&self, other: &IndexedPathComponentLocation) -> Option<Ordering> {
        match self.element_index.cmp(&other.element_index) {
            Ordering::Equal => self.t.partial_cmp(&other.t),
            ordering => Some(ordering),
        }
    }
}

///
/// A range between two locations in a path component
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct PathComponentRange {
    pub start: IndexedPathComponentLocation,
    pub end: IndexedPathComponentLocation,
}

impl PathComponentRange {
    #[inline]
    pub fn new(start: IndexedPathComponentLocation, end: IndexedPathComponentLocation) -> PathComponentRange {
        PathComponentRange { start, end }
    }

    ///
    /// True if this range is already in standard form
    ///
    pub fn is_standardized(&self) -> bool {
        *self == self.standardized()
    }

    ///
    /// Returns this range with `start <= end`, with ends at `t=1` or `t=0` moved onto the neighbouring element
    /// where that avoids splitting off a zero-length piece of an element
    ///
    pub fn standardized(&self) -> PathComponentRange {
        let (mut start, mut end) = if self.end < self.start {
            (self.end, self.start)
        } else {
            (self.start, self.end)
        };

        if start.element_index < end.element_index {
            if start.t == 1.0 {
                let candidate = IndexedPathComponentLocation::new(start.element_index + 1, 0.0);
                if candidate <= end {
                    start = candidate;
                }
            }

            if end.t == 0.0 {
                let candidate = IndexedPathComponentLocation::new(end.element_index - 1, 1.0);
                if candidate >= start {
                    end = candidate;
                }
            }
        }

        PathComponentRange { start, end }
    }
}

///
/// A location within a path: a component index, an element index and a 't' value along that element
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct IndexedPathLocation {
    pub component_index: usize,
    pub element_index: usize,
    pub t: f64,
}

impl IndexedPathLocation {
    #[inline]
    pub fn new(component_index: usize, element_index: usize, t: f64) -> IndexedPathLocation {
        IndexedPathLocation {
            component_index,
            element_index,
            t,
        }
    }

    ///
    /// Creates a path location from a component index and a location within that component
    ///
    #[inline]
    pub fn from_component_location(component_index: usize, location: IndexedPathComponentLocation) -> IndexedPathLocation {
        IndexedPathLocation::new(component_index, location.element_index, location.t)
    }

    ///
    /// The location within the component
    ///
    #[inline]
    pub fn location_in_component(&self) -> IndexedPathComponentLocation {
        IndexedPathComponentLocation::new(self.element_index, self.t)
    }
}

impl PartialOrd for IndexedPathLocation {
    fn partial_cmp(&self, other: &IndexedPathLocation) -> Option<Ordering> {
        match self.component_index.cmp(&other.component_index) {
            Ordering::Equal => self.location_in_component().partial_cmp(&other.location_in_component()),
            ordering => Some(ordering),
        }
    }
}

///
/// A point where two path components meet
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct PathComponentIntersection {
    pub location_a: IndexedPathComponentLocation,
    pub location_b: IndexedPathComponentLocation,
}

impl PathComponentIntersection {
    #[inline]
    pub fn new(location_a: IndexedPathComponentLocation, location_b: IndexedPathComponentLocation) -> PathComponentIntersection {
        PathComponentIntersection { location_a, location_b }
    }
}

///
/// A point where two paths meet, as a location on each path
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct PathIntersection {
    pub index_a: IndexedPathLocation,
    pub index_b: IndexedPathLocation,
}

impl PathIntersection {
    #[inline]
    pub fn new(index_a: IndexedPathLocation, index_b: IndexedPathLocation) -> PathIntersection {
        PathIntersection { index_a, index_b }
    }

    ///
    /// Converts an intersection between two components into an intersection between the paths that contain them
    ///
    pub fn from_component_intersection(
        intersection: PathComponentIntersection,
        component_a: usize,
        component_b: usize,
    ) -> PathIntersection {
        PathIntersection {
            index_a: IndexedPathLocation::from_component_location(component_a, intersection.location_a),
            index_b: IndexedPathLocation::from_component_location(component_b, intersection.location_b),
        }
    }
}

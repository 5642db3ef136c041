/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::*;

///
/// Represents a value that can be used as a coordinate in a bezier curve or a bounding box
///
pub trait Coordinate:
    Sized + Copy + PartialEq + Add<Self, Output = Self> + Sub<Self, Output = Self> + Mul<f64, Output = Self>
{
    ///
    /// Creates a new coordinate from the specified set of components
    ///
    fn from_components(components: &[f64]) -> Self;

    ///
    /// Returns the origin coordinate
    ///
    fn origin() -> Self;

    ///
    /// The number of components in this coordinate
    ///
    fn len() -> usize;

    ///
    /// Retrieves the component at the specified index
    ///
    fn get(&self, index: usize) -> f64;

    ///
    /// Returns a point made up of the biggest components of the two points
    ///
    fn from_biggest_components(p1: Self, p2: Self) -> Self;

    ///
    /// Returns a point made up of the smallest components of the two points
    ///
    fn from_smallest_components(p1: Self, p2: Self) -> Self;

    ///
    /// Computes the distance between this coordinate and another coordinate
    ///
    fn distance_to(&self, target: &Self) -> f64;

    ///
    /// Computes the dot product between this coordinate and another
    ///
    fn dot(&self, target: &Self) -> f64;

    ///
    /// A coordinate with every component set to the specified value
    ///
    #[inline]
    fn splat(value: f64) -> Self {
        let components = (0..Self::len()).map(|_| value).collect::<Vec<_>>();
        Self::from_components(&components)
    }

    ///
    /// Returns the magnitude of this coordinate (its distance from the origin)
    ///
    #[inline]
    fn magnitude(&self) -> f64 {
        self.dot(self).sqrt()
    }

    ///
    /// Returns true if every component of this coordinate is a finite number
    ///
    fn is_finite(&self) -> bool {
        (0..Self::len()).all(|idx| self.get(idx).is_finite())
    }
}

///
/// Coordinates with exactly two components
///
pub trait Coordinate2D {
    ///
    /// X component of this coordinate
    ///
    fn x(&self) -> f64;

    ///
    /// Y component of this coordinate
    ///
    fn y(&self) -> f64;
}

impl Coordinate for f64 {
    #[inline]
    fn from_components(components: &[f64]) -> f64 {
        components[0]
    }

    #[inline]
    fn origin() -> f64 {
        0.0
    }

    #[inline]
    fn len() -> usize {
        1
    }

    #[inline]
    fn get(&self, _index: usize) -> f64 {
        *self
    }

    #[inline]
    fn from_biggest_components(p1: f64, p2: f64) -> f64 {
        f64::max(p1, p2)
    }

    #[inline]
    fn from_smallest_components(p1: f64, p2: f64) -> f64 {
        f64::min(p1, p2)
    }

    #[inline]
    fn distance_to(&self, target: &f64) -> f64 {
        (self - target).abs()
    }

    #[inline]
    fn dot(&self, target: &f64) -> f64 {
        self * target
    }

    #[inline]
    fn splat(value: f64) -> f64 {
        value
    }
}

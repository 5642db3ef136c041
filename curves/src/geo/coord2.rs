/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coordinate::*;

use std::ops::*;

///
/// Represents a 2D point
///
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Coord2(pub f64, pub f64);

impl Coordinate2D for Coord2 {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }

    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

impl Add<Coord2> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn add(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub<Coord2> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn sub(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Mul<f64> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn mul(self, rhs: f64) -> Coord2 {
        Coord2(self.0 * rhs, self.1 * rhs)
    }
}

impl Mul<Coord2> for f64 {
    type Output = Coord2;

    #[inline]
    fn mul(self, rhs: Coord2) -> Coord2 {
        Coord2(self * rhs.0, self * rhs.1)
    }
}

impl Div<f64> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn div(self, rhs: f64) -> Coord2 {
        Coord2(self.0 / rhs, self.1 / rhs)
    }
}

impl Neg for Coord2 {
    type Output = Coord2;

    #[inline]
    fn neg(self) -> Coord2 {
        Coord2(-self.0, -self.1)
    }
}

impl AddAssign<Coord2> for Coord2 {
    #[inline]
    fn add_assign(&mut self, rhs: Coord2) {
        self.0 += rhs.0;
        self.1 += rhs.1;
    }
}

impl SubAssign<Coord2> for Coord2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Coord2) {
        self.0 -= rhs.0;
        self.1 -= rhs.1;
    }
}

impl Index<usize> for Coord2 {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.0,
            1 => &self.1,
            _ => panic!("Coord2 only has two components"),
        }
    }
}

impl IndexMut<usize> for Coord2 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.0,
            1 => &mut self.1,
            _ => panic!("Coord2 only has two components"),
        }
    }
}

impl Coordinate for Coord2 {
    #[inline]
    fn from_components(components: &[f64]) -> Coord2 {
        Coord2(components[0], components[1])
    }

    #[inline]
    fn origin() -> Coord2 {
        Coord2(0.0, 0.0)
    }

    #[inline]
    fn len() -> usize {
        2
    }

    #[inline]
    fn get(&self, index: usize) -> f64 {
        self[index]
    }

    #[inline]
    fn from_biggest_components(p1: Coord2, p2: Coord2) -> Coord2 {
        Coord2(f64::max(p1.0, p2.0), f64::max(p1.1, p2.1))
    }

    #[inline]
    fn from_smallest_components(p1: Coord2, p2: Coord2) -> Coord2 {
        Coord2(f64::min(p1.0, p2.0), f64::min(p1.1, p2.1))
    }

    #[inline]
    fn distance_to(&self, target: &Coord2) -> f64 {
        (*self - *target).length()
    }

    #[inline]
    fn dot(&self, target: &Coord2) -> f64 {
        self.0 * target.0 + self.1 * target.1
    }

    #[inline]
    fn splat(value: f64) -> Coord2 {
        Coord2(value, value)
    }
}

impl Coord2 {
    ///
    /// The 2D cross product (the z component of the 3D cross product) of two points
    ///
    #[inline]
    pub fn cross(&self, other: &Coord2) -> f64 {
        self.0 * other.1 - self.1 * other.0
    }

    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.0 * self.0 + self.1 * self.1
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    ///
    /// Returns a unit vector in the same direction as this one
    ///
    /// The zero vector has no direction, so this will return a vector of NaNs in that case
    ///
    #[inline]
    pub fn normalize(&self) -> Coord2 {
        *self / self.length()
    }

    ///
    /// Rotates this vector by 90 degrees anticlockwise
    ///
    #[inline]
    pub fn perpendicular(&self) -> Coord2 {
        Coord2(-self.1, self.0)
    }

    ///
    /// Linearly interpolates between this point and another
    ///
    #[inline]
    pub fn lerp(&self, other: Coord2, t: f64) -> Coord2 {
        *self + (other - *self) * t
    }

    /// Componentwise minimum
    #[inline]
    pub fn min(&self, other: Coord2) -> Coord2 {
        Coord2(self.0.min(other.0), self.1.min(other.1))
    }

    /// Componentwise maximum
    #[inline]
    pub fn max(&self, other: Coord2) -> Coord2 {
        Coord2(self.0.max(other.0), self.1.max(other.1))
    }

    ///
    /// Returns this point with its coordinates swapped
    ///
    #[inline]
    pub fn swapped(&self) -> Coord2 {
        Coord2(self.1, self.0)
    }
}

impl From<(f64, f64)> for Coord2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Coord2 {
        Coord2(x, y)
    }
}

impl From<Coord2> for (f64, f64) {
    #[inline]
    fn from(Coord2(x, y): Coord2) -> (f64, f64) {
        (x, y)
    }
}

///
/// Squared distance between two points
///
#[inline]
pub fn distance_squared(p1: Coord2, p2: Coord2) -> f64 {
    (p1 - p2).length_squared()
}

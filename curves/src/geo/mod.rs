/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Traits for basic geometric definitions
//!
//! This provides the basic geometric definitions used by the rest of the library. `Coord2` is the
//! point type used by all of the curve and path types, and `Coordinate` describes the operations
//! that any point type must support (`f64` also implements it, which is useful for describing
//! one-dimensional ranges).
//!
//! `BoundingBox` describes axis-aligned bounding boxes. `Bounds` is the default implementation,
//! and has an 'empty' value that never overlaps anything, including itself.
//!

mod bounding_box;
mod coord2;
mod coordinate;
mod geo;
mod has_bounds;

pub use self::bounding_box::*;
pub use self::coord2::*;
pub use self::coordinate::*;
pub use self::geo::*;
pub use self::has_bounds::*;

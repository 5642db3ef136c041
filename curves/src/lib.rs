/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # flo_bezier
//!
//! `flo_bezier` is a library of routines for inspecting and manipulating curves, with a focus on cubic Bezier curves.
//! Intersections between curves are found by implicitizing one curve and solving for the parameter values on the
//! other, which finds every crossing (up to 9 for a pair of cubics) rather than relying on subdivision alone.
//!
//! ```
//! # use flo_bezier::*;
//! # use flo_bezier::bezier::*;
//! #
//! let curve1 = CubicCurve::new(Coord2(0.0, 0.0), Coord2(0.33, 4.0), Coord2(0.66, -3.0), Coord2(1.0, 1.0));
//! let curve2 = CubicCurve::new(Coord2(0.0, 1.0), Coord2(4.0, 0.66), Coord2(-3.0, 0.33), Coord2(1.0, 0.0));
//!
//! let intersections = curve1.intersections(&curve2, 1e-5);
//! # assert!(intersections.len() == 9);
//! ```
//!
//! Curves can be joined into paths (see the `bezier::path` module), which support hit testing via winding counts and
//! the boolean operations: union, intersection, subtraction and removing self-intersections.
//!
//! Derived data such as bounding boxes and bounding volume hierarchies is calculated lazily and cached, and paths
//! can be shared between threads.
//!

#![warn(bare_trait_objects)]

#[macro_use]
mod test_assert;

mod consts;
pub use self::consts::*;

pub mod error;
pub use self::error::*;

pub mod geo;
pub use self::geo::*;

pub mod bezier;

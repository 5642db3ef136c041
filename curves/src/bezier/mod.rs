/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Routines for describing, querying and manipulating Bezier curves
//!
//! ```
//! # use flo_bezier::*;
//! # use flo_bezier::bezier::*;
//! #
//! let curve           = CubicCurve::new(Coord2(1.0, 2.0), Coord2(2.0, 0.0), Coord2(3.0, 5.0), Coord2(4.0, 2.0));
//! let line            = LineSegment::new(Coord2(1.0, 1.0), Coord2(4.0, 4.0));
//!
//! let mid_point       = curve.point_at(0.5);
//! let (left, right)   = curve.split_at(0.5);
//! let intersections   = curve.intersections(&line, DEFAULT_INTERSECTION_ACCURACY);
//! let offset_curves   = curve.offset(2.0);
//! #
//! # assert!(left.end_point() == right.start_point());
//! # assert!(!intersections.is_empty());
//! # assert!(!offset_curves.is_empty());
//! # assert!(mid_point.distance_to(&left.end_point()) < 1e-9);
//! ```
//!
//! Lines, quadratic and cubic curves all implement the `BezierCurve` trait. The `Curve` enum can hold any of them
//! and is what the path types use to store their elements.
//!
//! For routines that deal with paths made up of bezier curves, see the `path` namespace.
//!

mod arc;
mod cubic;
mod curve;
mod implicit;
mod intersection;
mod length;
mod line_segment;
mod offset;
mod outline;
mod quadratic;
mod reduce;
mod subcurve;

pub mod path;
pub mod roots;

pub use self::arc::*;
pub use self::cubic::*;
pub use self::curve::*;
pub use self::implicit::*;
pub use self::intersection::*;
pub use self::length::*;
pub use self::line_segment::*;
pub use self::offset::*;
pub use self::outline::*;
pub use self::quadratic::*;
pub use self::reduce::*;
pub use self::subcurve::*;

pub use super::geo::*;

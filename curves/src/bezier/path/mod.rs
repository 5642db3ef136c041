/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Manipulates multiple Bezier curves joined into a path
//!
//! ```
//! # use flo_bezier::*;
//! # use flo_bezier::bezier::*;
//! # use flo_bezier::bezier::path::*;
//! #
//! let square = |x: f64, y: f64| {
//!     let corners = vec![Coord2(x, y), Coord2(x + 2.0, y), Coord2(x + 2.0, y + 2.0), Coord2(x, y + 2.0)];
//!     let sides   = (0..4).map(|idx| Curve::Line(LineSegment::new(corners[idx], corners[(idx + 1) % 4]))).collect::<Vec<_>>();
//!
//!     Path::from(PathComponent::from_curves(&sides))
//! };
//!
//! let square1 = square(0.0, 0.0);
//! let square2 = square(1.0, -1.0);
//!
//! let with_corner_removed = square1.subtract(&square2, DEFAULT_BOOLEAN_ACCURACY);
//! #
//! # assert!(with_corner_removed.components().len() == 1);
//! # assert!(with_corner_removed.components()[0].number_of_elements() == 6);
//! # assert!(!with_corner_removed.contains(Coord2(1.5, 0.5), FillRule::Winding));
//! # assert!(with_corner_removed.contains(Coord2(0.5, 0.5), FillRule::Winding));
//! ```
//!
//! A `Path` is made up of `PathComponent`s, each of which is a chain of lines, quadratic and cubic curves. Components
//! are usually closed: the winding count and `contains()` treat open components as enclosing nothing.
//!
//! Paths are immutable values. The boolean operations (`union()`, `intersect()`, `subtract()` and `crossings_removed()`)
//! find where the paths meet, build an `AugmentedGraph` with a vertex at every intersection and then walk around its
//! edges to produce a new path.
//!
//! Each component keeps a `BoundingVolumeHierarchy` of its elements, computed the first time it's needed. This is
//! used to skip distant elements when finding intersections, winding counts and the closest point on the path.
//!

mod boolean;
mod bvh;
mod component;
mod data;
mod graph;
mod location;
mod path;
mod projection;
mod winding;

pub use self::bvh::*;
pub use self::component::*;
pub use self::graph::*;
pub use self::location::*;
pub use self::path::*;
pub use self::winding::*;

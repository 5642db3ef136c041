/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Length we consider a small distance (points closer than this far apart are considered to be the same)
pub const SMALL_DISTANCE: f64 = 0.001;

/// Length we consider a 'close' distance (we may round to this precision or cut out points that are closer than this)
pub const CLOSE_DISTANCE: f64 = 0.01;

/// Difference between 't' values on a bezier curve for values considered the same
pub const SMALL_T_DISTANCE: f64 = 0.000001;

/// The accuracy used for curve intersections when the caller has no better idea
pub const DEFAULT_INTERSECTION_ACCURACY: f64 = 0.5;

/// The accuracy used by the path boolean operations when the caller has no better idea
pub const DEFAULT_BOOLEAN_ACCURACY: f64 = 1e-4;

/// Stride used when searching for the simple sections of a curve
pub const REDUCE_STEP_SIZE: f64 = 0.01;

/// Default width of the interval below which the root finder reports a root
pub const ROOT_THRESHOLD: f64 = 1e-5;

/// The smallest interval width the root finder will try to resolve
pub const MIN_ROOT_THRESHOLD: f64 = 1e-12;

/// Root finder intervals that shrink by less than this fraction are split in half instead
pub const ROOT_SPLIT_FRACTION: f64 = 0.8;

/// 't' values this close to 0 or 1 are snapped to the end of the curve
pub const T_SNAP_DISTANCE: f64 = 1e-5;

/// Distance either side of an edge at which the winding count is sampled to classify the edge
pub const WINDING_SAMPLE_OFFSET: f64 = 1e-5;

/// Maximum number of subdivisions made when intersecting curves that can't be implicitized
pub const MAX_PAIR_ITERATIONS: usize = 900;

/// Tolerance used when checking lines for coincidence
pub const LINE_COINCIDENCE_ACCURACY: f64 = 1e-10;

/// Values smaller than this are treated as 0 when solving polynomials analytically
pub const POLYNOMIAL_EPSILON: f64 = 1e-8;

/// Maximum recursion depth of the root finder before it settles for its best estimate
pub const MAX_ROOT_FINDER_DEPTH: usize = 256;

/// Maximum number of end points tried when searching for the widest arc that fits a curve
pub const MAX_ARC_SEARCH_ITERATIONS: usize = 100;

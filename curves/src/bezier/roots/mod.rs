/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Polynomials and root finding
//!
//! `BernsteinPolynomial` represents a polynomial in the Bernstein basis, which is the natural form for the
//! coordinates of a bezier curve. The roots of these polynomials in the range 0..1 can be found with
//! `find_roots_in_unit_interval()`, which uses bezier clipping (see "Computer Aided Geometric Design",
//! T.W. Sederberg, chapter 7) and copes well with high degree polynomials and multiple roots.
//!
//! `droots()` solves the low-degree polynomials that describe bezier curves directly, and
//! `find_distinct_roots_in_unit_interval()` uses Newton's method around the critical points of a polynomial,
//! which is faster for the degree 5 polynomials that appear when projecting points onto curves.
//!
//! `PowerPolynomial` is the same idea in the power basis, where the `roots` crate can solve polynomials up to
//! degree 4 in closed form.
//!

mod bernstein;
mod clip;
mod droots;
mod newton;
mod power;

pub use self::bernstein::*;
pub use self::clip::*;
pub use self::droots::*;
pub use self::newton::*;
pub use self::power::*;

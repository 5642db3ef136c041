/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::curve::*;

///
/// A section of a larger curve, along with the t values it covers in the original
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Subcurve<CurveType> {
    /// Where this section starts on the original curve
    pub t1: f64,

    /// Where this section ends on the original curve
    pub t2: f64,

    /// The section itself
    pub curve: CurveType,
}

impl<CurveType: BezierCurve> Subcurve<CurveType> {
    ///
    /// A subcurve covering the whole of a curve
    ///
    pub fn new(curve: CurveType) -> Subcurve<CurveType> {
        Subcurve { t1: 0.0, t2: 1.0, curve }
    }

    ///
    /// A subcurve covering a known range of an original curve
    ///
    pub fn with_range(t1: f64, t2: f64, curve: CurveType) -> Subcurve<CurveType> {
        Subcurve { t1, t2, curve }
    }

    ///
    /// Maps a t value on this section to a t value on the original curve
    ///
    #[inline]
    pub fn original_t(&self, t: f64) -> f64 {
        if t == 1.0 {
            self.t2
        } else {
            self.t1 + (self.t2 - self.t1) * t
        }
    }

    ///
    /// False once this section is too small to be divided further (its midpoint is indistinguishable from
    /// one of its ends)
    ///
    pub fn can_split(&self) -> bool {
        let mid = 0.5 * (self.t1 + self.t2);
        mid > self.t1 && mid < self.t2
    }

    ///
    /// Divides this section in two at the specified t value (relative to this section)
    ///
    pub fn split_at(&self, t: f64) -> (Subcurve<CurveType>, Subcurve<CurveType>) {
        let (left, right) = self.curve.split_at(t);
        let t_mid = self.original_t(t);

        (
            Subcurve::with_range(self.t1, t_mid, left),
            Subcurve::with_range(t_mid, self.t2, right),
        )
    }

    ///
    /// The part of this section between two t values (relative to this section)
    ///
    pub fn split_range(&self, t1: f64, t2: f64) -> Subcurve<CurveType> {
        Subcurve::with_range(self.original_t(t1), self.original_t(t2), self.curve.split_range(t1, t2))
    }
}

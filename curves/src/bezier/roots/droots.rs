/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::consts::*;

use smallvec::*;

use std::f64::consts::PI;

///
/// The roots of a polynomial of degree 3 or lower
///
pub type SmallRoots = SmallVec<[f64; 3]>;

/// Tolerance for the degenerate case of a quadratic
const QUADRATIC_EPSILON: f64 = 1e-5;

#[inline]
fn cube_root(v: f64) -> f64 {
    if v < 0.0 {
        -(-v).powf(1.0 / 3.0)
    } else {
        v.powf(1.0 / 3.0)
    }
}

///
/// Finds the real roots of the linear bezier polynomial with control values p0, p1
///
pub fn droots_linear(p0: f64, p1: f64) -> SmallRoots {
    if p0 == p1 {
        smallvec![]
    } else {
        smallvec![p0 / (p0 - p1)]
    }
}

///
/// Finds the real roots of the quadratic bezier polynomial with control values p0, p1, p2, in ascending order
///
pub fn droots_quadratic(p0: f64, p1: f64, p2: f64) -> SmallRoots {
    let d = p0 - 2.0 * p1 + p2;

    if !d.is_finite() {
        return smallvec![];
    }

    if d.abs() <= QUADRATIC_EPSILON {
        return if p0 != p1 { smallvec![0.5 * p0 / (p0 - p1)] } else { smallvec![] };
    }

    let radical = p1 * p1 - p0 * p2;
    if radical < 0.0 {
        return smallvec![];
    }

    let m1 = radical.sqrt();
    let m2 = p0 - p1;
    let v1 = (m2 + m1) / d;
    let v2 = (m2 - m1) / d;

    if v1 < v2 {
        smallvec![v1, v2]
    } else if v1 > v2 {
        smallvec![v2, v1]
    } else {
        smallvec![v1]
    }
}

///
/// Finds the real roots of the cubic bezier polynomial with control values p0, p1, p2, p3, in ascending order
///
/// See http://www.trans4mind.com/personal_development/mathematics/polynomials/cubicAlgebra.htm
///
pub fn droots_cubic(p0: f64, p1: f64, p2: f64, p3: f64) -> SmallRoots {
    let d = -p0 + 3.0 * p1 - 3.0 * p2 + p3;

    if d.abs() < POLYNOMIAL_EPSILON {
        // Really a quadratic: at^2 + bt + c
        let a = 3.0 * p0 - 6.0 * p1 + 3.0 * p2;
        let b = -3.0 * p0 + 3.0 * p1;
        let c = p0;

        return droots_quadratic(c, b / 2.0 + c, a + b + c);
    }

    let a = (3.0 * p0 - 6.0 * p1 + 3.0 * p2) / d;
    let b = (-3.0 * p0 + 3.0 * p1) / d;
    let c = p0 / d;

    let p = (3.0 * b - a * a) / 3.0;
    let q = (2.0 * a * a * a - 9.0 * a * b + 27.0 * c) / 27.0;
    let q2 = q / 2.0;
    let discriminant = q2 * q2 + p * p * p / 27.0;

    if discriminant < -POLYNOMIAL_EPSILON {
        // Three distinct real roots
        let tau = 2.0 * PI;
        let r = (-p * p * p / 27.0).sqrt();
        let t = -q / (2.0 * r);
        let cosphi = t.max(-1.0).min(1.0);
        let phi = cosphi.acos();
        let t1 = 2.0 * cube_root(r);

        let root1 = t1 * ((phi + tau) / 3.0).cos() - a / 3.0;
        let root2 = t1 * ((phi + 2.0 * tau) / 3.0).cos() - a / 3.0;
        let root3 = t1 * (phi / 3.0).cos() - a / 3.0;

        smallvec![root1, root2, root3]
    } else if discriminant > POLYNOMIAL_EPSILON {
        // One real root
        let sd = discriminant.sqrt();
        let u1 = cube_root(-q2 + sd);
        let v1 = cube_root(q2 + sd);

        smallvec![u1 - v1 - a / 3.0]
    } else if !discriminant.is_nan() {
        // A double root
        let u1 = if q2 < 0.0 { cube_root(-q2) } else { -cube_root(q2) };
        let root1 = 2.0 * u1 - a / 3.0;
        let root2 = -u1 - a / 3.0;

        if root1 < root2 {
            smallvec![root1, root2]
        } else if root1 > root2 {
            smallvec![root2, root1]
        } else {
            smallvec![root1]
        }
    } else {
        smallvec![]
    }
}

///
/// Finds the real roots of a bezier polynomial with between 2 and 4 control values
///
/// Roots are returned in ascending order and may lie outside of the range 0..1. Constant polynomials have
/// no roots.
///
pub fn droots(control_values: &[f64]) -> SmallRoots {
    match control_values {
        [p0, p1, p2, p3] => droots_cubic(*p0, *p1, *p2, *p3),
        [p0, p1, p2] => droots_quadratic(*p0, *p1, *p2),
        [p0, p1] => droots_linear(*p0, *p1),
        _ => smallvec![],
    }
}

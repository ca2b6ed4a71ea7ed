/* ************************************************************************ **
** This file is part of isda, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::matrix::Vector;
use crate::zero::ZeroTest;

use ndarray::{ArrayBase, Data, Ix1};

/// Whether a normalized vector actually has unit length.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColumnKind {
    /// The vector was scaled to unit length.
    Unit,
    /// The norm rounded to zero, so the zero vector was produced instead.
    Degenerate,
}

/// Euclidean norm.
///
/// Computed on a rescaled copy of the components, so it does not overflow
/// for components beyond `sqrt(f64::MAX)`.
pub fn norm<S>(v: &ArrayBase<S, Ix1>) -> f64
where S: Data<Elem = f64>,
{
    let (scale, rel) = scaled_norm(v);
    scale * rel
}

// norm == scale * rel, with scale the largest magnitude
fn scaled_norm<S>(v: &ArrayBase<S, Ix1>) -> (f64, f64)
where S: Data<Elem = f64>,
{
    let scale = v.iter().fold(0.0, |acc: f64, &x| acc.max(x.abs()));
    if scale == 0.0 || scale.is_infinite() {
        return (scale, 1.0);
    }
    let rel = v.iter().map(|&x| (x / scale) * (x / scale)).sum::<f64>().sqrt();
    (scale, rel)
}

/// Scale `v` to unit length, or produce the zero vector if its norm rounds
/// to zero at 5 decimal places.
pub fn normalize<S>(v: &ArrayBase<S, Ix1>) -> Vector
where S: Data<Elem = f64>,
{ normalize_with(v, ZeroTest::default()) }

/// [`normalize`] with an explicit zero test.
pub fn normalize_with<S>(v: &ArrayBase<S, Ix1>, zero: ZeroTest) -> Vector
where S: Data<Elem = f64>,
{ normalize_tagged(v.to_owned(), zero).0 }

/// [`normalize_with`], reporting whether the result is a unit vector.
pub fn normalize_tagged(mut v: Vector, zero: ZeroTest) -> (Vector, ColumnKind) {
    let (scale, rel) = scaled_norm(&v);
    if zero.is_zero(scale * rel) {
        v.fill(0.0);
        return (v, ColumnKind::Degenerate);
    }
    // two steps; `scale * rel` itself may not be representable
    v /= scale;
    v /= rel;
    (v, ColumnKind::Unit)
}

/// Elementwise sign, where zero counts as positive.
///
/// This is `sign(0.5 + sign(x))`, so `0.0` (of either sign) maps to `+1.0`.
/// NaN stays NaN.
pub fn sgn<S>(v: &ArrayBase<S, Ix1>) -> Vector
where S: Data<Elem = f64>,
{ v.mapv(|x| sign(0.5 + sign(x))) }

// conventional sign, with sign(0) = 0
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else if x == 0.0 {
        0.0
    } else {
        x // NaN
    }
}

/* ************************************************************************ **
** This file is part of isda, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! `assert_close!` and friends.
//!
//! ```text
//! assert_close!(a, b);
//! assert_close!(abs=1e-10, a, b);
//! assert_close!(rel=1e-8, abs=1e-12, a, b, "context {}", x);
//! ```
//!
//! Unspecified tolerances default to `rel = DEFAULT_NONZERO_TOL` and `abs = 0`.

use ndarray::{ArrayBase, Data, Dimension, IntoDimension};
use thiserror::Error;

pub const DEFAULT_NONZERO_TOL: f64 = 1e-9;

#[macro_export]
macro_rules! assert_close {
    ($($t:tt)*) => {
        $crate::assert_close_impl!{@parsing [$($t)*] [[@rel $crate::DEFAULT_NONZERO_TOL] [@abs 0.0]]}
    };
}

#[macro_export]
macro_rules! debug_assert_close {
    ($($t:tt)*) => {{
        #[cfg(debug_assertions)] {
            $crate::assert_close!{$($t)*}
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! assert_close_impl {
    (@parsing [rel=$tol:expr, $($rest:tt)*] [$($assignment:tt)*]) => {
        $crate::assert_close_impl!(@parsing [$($rest)*] [$($assignment)* [@rel $tol]])
    };
    (@parsing [abs=$tol:expr, $($rest:tt)*] [$($assignment:tt)*]) => {
        $crate::assert_close_impl!(@parsing [$($rest)*] [$($assignment)* [@abs $tol]])
    };
    (@parsing [$a:expr, $b:expr $(,)*] $assignments:tt) => {
        $crate::assert_close_impl!(@expand $assignments [@comp $a, $b] [@fmt "not nearly equal!"])
    };
    (@parsing [$a:expr, $b:expr, $($fmt:tt)+] $assignments:tt) => {
        $crate::assert_close_impl!(@expand $assignments [@comp $a, $b] [@fmt $($fmt)+])
    };
    (@expand [$($assignment:tt)*] [@comp $a:expr, $b:expr] [@fmt $($fmt:tt)+]) => {
        #[allow(unused_mut)]
        #[allow(unused_assignments)]
        {
            let a = $a;
            let b = $b;

            let mut tol = $crate::Tolerances { abs: 0.0, rel: 0.0 };
            $( $crate::assert_close_impl!{@assign tol $assignment} )*

            if let Err(e) = $crate::CheckClose::check_close(&a, &b, tol) {
                panic!(
                    "{} (tolerances: rel={}, abs={})\n left: {:?}\nright: {:?}\n{}",
                    format!($($fmt)+), tol.rel, tol.abs, a, b, e,
                );
            }
        }
    };
    (@assign $tol:ident [@abs $value:expr]) => { $tol.abs = $value; };
    (@assign $tol:ident [@rel $value:expr]) => { $tol.rel = $value; };
}

/// Python's `math.isclose`.
#[doc(hidden)]
#[inline]
pub fn __is_close(a: f64, b: f64, Tolerances { abs, rel }: Tolerances) -> bool {
    assert!(rel >= 0.0);
    assert!(abs >= 0.0);

    // catch infinities of same sign
    if a == b { return true; }

    // catch infinities of opposite sign, avoiding infinite relative tolerance
    if a.is_infinite() || b.is_infinite() { return false; }

    // NaN falls through to here and compares false
    (a - b).abs() <= abs.max(rel * a.abs()).max(rel * b.abs())
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Tolerances {
    pub fn abs(abs: f64) -> Self { Tolerances { abs, rel: 0.0 } }
    pub fn rel(rel: f64) -> Self { Tolerances { abs: 0.0, rel } }
}

/// Where two values were found to differ.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckCloseError {
    #[error("values differ at index {index:?}:\n  left: {left:?}\n right: {right:?}")]
    Values { index: Vec<usize>, left: f64, right: f64 },

    #[error("shapes differ: {left:?} vs {right:?}")]
    Shape { left: Vec<usize>, right: Vec<usize> },
}

impl CheckCloseError {
    fn at_outer(self, i: usize) -> Self {
        match self {
            CheckCloseError::Values { mut index, left, right } => {
                index.insert(0, i);
                CheckCloseError::Values { index, left, right }
            },
            e => e,
        }
    }
}

pub trait CheckClose<Rhs: ?Sized = Self> {
    /// Test that all values of self and other are close.
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), CheckCloseError>;
}

impl CheckClose for f64 {
    #[inline]
    fn check_close(&self, other: &f64, tol: Tolerances) -> Result<(), CheckCloseError> {
        match __is_close(*self, *other, tol) {
            true => Ok(()),
            false => Err(CheckCloseError::Values { index: vec![], left: *self, right: *other }),
        }
    }
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { CheckClose::check_close(*self, *other, tol) }
}

impl<T: CheckClose> CheckClose for [T] {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError> {
        if self.len() != other.len() {
            return Err(CheckCloseError::Shape { left: vec![self.len()], right: vec![other.len()] });
        }
        for (i, (a, b)) in self.iter().zip(other).enumerate() {
            a.check_close(b, tol).map_err(|e| e.at_outer(i))?;
        }
        Ok(())
    }
}

impl<T: CheckClose> CheckClose for Vec<T> {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}

impl<T: CheckClose> CheckClose<[T]> for Vec<T> {
    fn check_close(&self, other: &[T], tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(other, tol) }
}

impl<T: CheckClose, const N: usize> CheckClose for [T; N] {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}

impl<S, S2, D> CheckClose<ArrayBase<S2, D>> for ArrayBase<S, D>
where
    S: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D: Dimension,
{
    fn check_close(&self, other: &ArrayBase<S2, D>, tol: Tolerances) -> Result<(), CheckCloseError> {
        if self.shape() != other.shape() {
            return Err(CheckCloseError::Shape {
                left: self.shape().to_vec(),
                right: other.shape().to_vec(),
            });
        }
        for ((index, a), b) in self.indexed_iter().zip(other.iter()) {
            if !__is_close(*a, *b, tol) {
                return Err(CheckCloseError::Values {
                    index: index.into_dimension().slice().to_vec(),
                    left: *a,
                    right: *b,
                });
            }
        }
        Ok(())
    }
}

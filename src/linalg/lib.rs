/* ************************************************************************ **
** This file is part of isda, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small dense linear-algebra kernel for interval data analysis.
//!
//! Vectors and matrices are plain `ndarray` arrays of `f64`; a matrix is
//! usually thought of as a list of column vectors.  All functions are pure.
//!
//! Near-zero norms are decided by rounding to a fixed number of decimal
//! places (see [`ZeroTest`]), and never produce errors: a vector that cannot
//! be normalized becomes the zero vector, and a Gram-Schmidt column that is
//! dependent on earlier columns becomes a zero column.

#[macro_use]
extern crate log;
#[cfg(test)]
#[macro_use]
extern crate isda_assert_close;

pub use crate::errors::{DomainError, Error, Result, ShapeError};
mod errors;

pub use crate::zero::{ZeroTest, DEFAULT_ZERO_DECIMALS};
mod zero;

pub use crate::matrix::{dot, matrix_from_columns, Matrix, Vector};
mod matrix;

pub use crate::sign::{sign_pattern_count, sign_patterns, sign_vector, sign_vectors};
pub use crate::sign::{SignPatterns, MAX_SIGN_BITS};
mod sign;

pub use crate::vector::{norm, normalize, normalize_tagged, normalize_with, sgn, ColumnKind};
mod vector;

pub use crate::diag::{diagonal_matrix, diagonal_of, DiagonalSource};
mod diag;

pub use crate::gram_schmidt::{orthogonalize, orthogonalize_columns, orthogonalize_tagged, orthogonalize_with};
pub use crate::gram_schmidt::Orthonormalized;
mod gram_schmidt;

pub use crate::projection::{complement_projection, orthogonal_projection, orthogonal_projection_columns, project};
mod projection;

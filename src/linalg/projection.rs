/* ************************************************************************ **
** This file is part of isda, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::errors::ShapeError;
use crate::gram_schmidt::orthogonalize;
use crate::matrix::{check_square, matrix_from_columns, Matrix, Vector};

use ndarray::{ArrayBase, Axis, Data, Ix1, Ix2};
use ndarray::linalg::general_mat_mul;

/// Projector onto the orthogonal complement of the columns of `m`.
///
/// Computes `I - sum_i m_i m_i^T`.  This is only a true (symmetric,
/// idempotent) projector when the columns are orthonormal, which is not
/// checked; zero columns are harmless.  See [`complement_projection`] for
/// arbitrary columns.
pub fn orthogonal_projection<S>(m: &ArrayBase<S, Ix2>) -> Matrix
where S: Data<Elem = f64>,
{
    let n = m.nrows();
    trace!("building {0}x{0} projector from {1} columns", n, m.ncols());

    let mut p = Matrix::eye(n);
    for col in m.axis_iter(Axis(1)) {
        let col = col.insert_axis(Axis(1));
        general_mat_mul(-1.0, &col, &col.t(), 1.0, &mut p);
    }
    p
}

/// [`orthogonal_projection`] on a list of columns, which must all have the same length.
pub fn orthogonal_projection_columns<C>(n_rows: usize, cols: &[C]) -> Result<Matrix, ShapeError>
where C: AsRef<[f64]>,
{ matrix_from_columns(n_rows, cols).map(|m| orthogonal_projection(&m)) }

/// Projector onto the orthogonal complement of the span of the columns of `m`,
/// which need not be orthonormal (or even independent).
pub fn complement_projection<S>(m: &ArrayBase<S, Ix2>) -> Matrix
where S: Data<Elem = f64>,
{ orthogonal_projection(&orthogonalize(m)) }

/// Apply a projector to a vector.
pub fn project<S, T>(p: &ArrayBase<S, Ix2>, v: &ArrayBase<T, Ix1>) -> Result<Vector, ShapeError>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
{
    let n = check_square(p)?;
    if v.len() != n {
        return Err(ShapeError::LengthMismatch { expected: n, found: v.len() });
    }
    Ok(p.dot(v))
}

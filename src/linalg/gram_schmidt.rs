/* ************************************************************************ **
** This file is part of isda, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Modified Gram-Schmidt orthonormalization of matrix columns.

use crate::errors::ShapeError;
use crate::matrix::{matrix_from_columns, Matrix};
use crate::vector::{normalize_tagged, ColumnKind};
use crate::zero::ZeroTest;

use ndarray::{ArrayBase, Axis, Data, Ix2};

/// Output of [`orthogonalize_tagged`].
#[derive(Debug, Clone, PartialEq)]
pub struct Orthonormalized {
    /// Same shape as the input.  Each column is either a unit vector or exactly zero.
    pub basis: Matrix,
    /// One entry per column of `basis`.
    pub kinds: Vec<ColumnKind>,
}

impl Orthonormalized {
    /// Number of unit columns.
    pub fn rank(&self) -> usize {
        self.kinds.iter().filter(|&&k| k == ColumnKind::Unit).count()
    }

    pub fn is_degenerate(&self, col: usize) -> bool {
        self.kinds[col] == ColumnKind::Degenerate
    }

    /// A matrix holding only the unit columns, in their original order.
    pub fn unit_columns(&self) -> Matrix {
        let mut out = Matrix::zeros((self.basis.nrows(), self.rank()));
        let units = {
            self.basis.axis_iter(Axis(1)).zip(&self.kinds)
                .filter(|&(_, &kind)| kind == ColumnKind::Unit)
                .map(|(col, _)| col)
        };
        for (col, mut dest) in units.zip(out.axis_iter_mut(Axis(1))) {
            dest.assign(&col);
        }
        out
    }

    pub fn into_basis(self) -> Matrix { self.basis }
}

/// Orthonormalize the columns of `m`, left to right.
///
/// A column whose residual (after removing its components along the earlier
/// output columns) has a norm that rounds to zero at 5 decimals becomes the
/// zero vector.  That is not an error; such columns simply contribute nothing.
pub fn orthogonalize<S>(m: &ArrayBase<S, Ix2>) -> Matrix
where S: Data<Elem = f64>,
{ orthogonalize_with(m, ZeroTest::default()) }

/// [`orthogonalize`] with an explicit zero test.
pub fn orthogonalize_with<S>(m: &ArrayBase<S, Ix2>, zero: ZeroTest) -> Matrix
where S: Data<Elem = f64>,
{ orthogonalize_tagged(m, zero).basis }

/// [`orthogonalize_with`], also reporting which columns degenerated.
pub fn orthogonalize_tagged<S>(m: &ArrayBase<S, Ix2>, zero: ZeroTest) -> Orthonormalized
where S: Data<Elem = f64>,
{
    let (n, k) = m.dim();
    trace!("orthogonalizing {} columns of length {}", k, n);

    let mut basis = Matrix::zeros((n, k));
    let mut kinds = Vec::with_capacity(k);

    // NOTE: the order matters.  Each residual is taken against the columns
    //       already written to `basis`, never against the raw input.
    for (i, col) in m.axis_iter(Axis(1)).enumerate() {
        let mut v = col.to_owned();
        for prev in basis.axis_iter(Axis(1)).take(i) {
            let overlap = v.dot(&prev);
            v.scaled_add(-overlap, &prev);
        }

        let (v, kind) = normalize_tagged(v, zero);
        if kind == ColumnKind::Degenerate {
            debug!("column {} of {} is linearly dependent on earlier columns; zeroed", i, k);
        }
        basis.column_mut(i).assign(&v);
        kinds.push(kind);
    }
    Orthonormalized { basis, kinds }
}

/// [`orthogonalize`] on a list of columns, which must all have the same length.
pub fn orthogonalize_columns<C>(n_rows: usize, cols: &[C]) -> Result<Matrix, ShapeError>
where C: AsRef<[f64]>,
{ matrix_from_columns(n_rows, cols).map(|m| orthogonalize(&m)) }

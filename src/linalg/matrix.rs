/* ************************************************************************ **
** This file is part of isda, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::errors::ShapeError;

use ndarray::{Array1, Array2, ArrayBase, Axis, Data, Ix1, Ix2};

/// A vector of reals.
pub type Vector = Array1<f64>;

/// A matrix whose columns are the vectors being manipulated.
pub type Matrix = Array2<f64>;

/// Build a matrix from a list of equal-length columns.
///
/// `n_rows` is only consulted when `cols` is empty, so that an `n x 0` matrix
/// can still be expressed.
pub fn matrix_from_columns<C>(n_rows: usize, cols: &[C]) -> Result<Matrix, ShapeError>
where C: AsRef<[f64]>,
{
    let n_rows = match cols.first() {
        Some(col) => col.as_ref().len(),
        None => n_rows,
    };

    let mut out = Matrix::zeros((n_rows, cols.len()));
    for (column, (col, mut dest)) in cols.iter().zip(out.axis_iter_mut(Axis(1))).enumerate() {
        let col = col.as_ref();
        if col.len() != n_rows {
            return Err(ShapeError::RaggedColumns { column, expected: n_rows, found: col.len() });
        }
        for (d, &x) in dest.iter_mut().zip(col) {
            *d = x;
        }
    }
    Ok(out)
}

/// Euclidean dot product.
#[inline]
pub fn dot<S, T>(a: &ArrayBase<S, Ix1>, b: &ArrayBase<T, Ix1>) -> f64
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
{
    assert_eq!(a.len(), b.len(), "(BUG) dot of vectors with different lengths");
    a.dot(b)
}

pub(crate) fn check_square<S>(m: &ArrayBase<S, Ix2>) -> Result<usize, ShapeError>
where S: Data<Elem = f64>,
{
    let (rows, cols) = m.dim();
    match rows == cols {
        true => Ok(rows),
        false => Err(ShapeError::NotSquare { rows, cols }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn columns_become_columns() {
        let m = matrix_from_columns(0, &[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        assert_eq!(m, arr2(&[[1.0, 3.0, 5.0], [2.0, 4.0, 6.0]]));
    }

    #[test]
    fn no_columns() {
        let cols: &[Vec<f64>] = &[];
        assert_eq!(matrix_from_columns(4, cols).unwrap().dim(), (4, 0));
    }

    #[test]
    fn ragged() {
        let err = matrix_from_columns(0, &[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(err, ShapeError::RaggedColumns { column: 1, expected: 2, found: 1 });
    }

    #[test]
    fn square_check() {
        assert_eq!(check_square(&Matrix::zeros((3, 3))), Ok(3));
        assert_eq!(
            check_square(&Matrix::zeros((3, 2))),
            Err(ShapeError::NotSquare { rows: 3, cols: 2 }),
        );
    }
}

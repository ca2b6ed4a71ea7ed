/* ************************************************************************ **
** This file is part of isda, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::matrix::{Matrix, Vector};

use ndarray::{ArrayBase, Data, Ix1, Ix2};

/// Something a diagonal matrix can be built from.
///
/// Vectors supply their entries directly.  Matrices supply their main
/// diagonal, unless they have a single row or column, in which case they are
/// treated as a vector and flattened.
pub trait DiagonalSource {
    fn diagonal_entries(&self) -> Vector;
}

impl<S> DiagonalSource for ArrayBase<S, Ix1>
where S: Data<Elem = f64>,
{
    fn diagonal_entries(&self) -> Vector { self.to_owned() }
}

impl<S> DiagonalSource for ArrayBase<S, Ix2>
where S: Data<Elem = f64>,
{
    fn diagonal_entries(&self) -> Vector {
        let (rows, cols) = self.dim();
        match rows > 1 && cols > 1 {
            true => self.diag().to_owned(),
            // a row or column vector (or something empty); logical order
            false => self.iter().cloned().collect(),
        }
    }
}

impl<'a, D: DiagonalSource + ?Sized> DiagonalSource for &'a D {
    fn diagonal_entries(&self) -> Vector { (**self).diagonal_entries() }
}

/// The entries that [`diagonal_matrix`] would place on the diagonal.
pub fn diagonal_of<D: DiagonalSource + ?Sized>(input: &D) -> Vector
{ input.diagonal_entries() }

/// A square matrix with the given entries on the diagonal and zeros elsewhere.
pub fn diagonal_matrix<D: DiagonalSource + ?Sized>(input: &D) -> Matrix
{ Matrix::from_diag(&input.diagonal_entries()) }

/* ************************************************************************ **
** This file is part of isda, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use thiserror::Error;

/// An argument lies outside the domain of a function.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("sign pattern length must be at least 1")]
    EmptyPattern,

    #[error("pattern length {len} exceeds representable bit width ({max} bits)")]
    TooManyBits { len: usize, max: u32 },

    #[error("sign pattern index {index} is out of range [1, {count}]")]
    IndexOutOfRange { index: u64, count: u64 },
}

/// Inputs whose dimensions do not agree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("column {column} has length {found}, but column 0 has length {expected}")]
    RaggedColumns { column: usize, expected: usize, found: usize },

    #[error("expected a square matrix, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("vector has length {found}, expected {expected}")]
    LengthMismatch { expected: usize, found: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

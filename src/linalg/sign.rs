/* ************************************************************************ **
** This file is part of isda, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Enumeration of the `2^p` sign patterns of length `p`.
//!
//! Pattern `I` (1-indexed) is read off the binary digits of `I - 1`, lowest
//! bit first: a clear bit gives `+1`, a set bit gives `-1`.  So for `p = 2`
//! the patterns are, in order, `[+,+]`, `[-,+]`, `[+,-]`, `[-,-]`.

use crate::errors::DomainError;
use crate::matrix::{Matrix, Vector};

use ndarray::Axis;
use std::convert::TryFrom;

/// Width of the integer that holds a pattern's bits.
pub const MAX_SIGN_BITS: u32 = 32;

/// The number of sign patterns of length `p`, after validating `p`.
pub fn sign_pattern_count(p: usize) -> Result<u64, DomainError> {
    check_len(p)?;
    Ok(1u64 << p)
}

/// The `index`-th sign pattern of length `p`, with `index` in `[1, 2^p]`.
pub fn sign_vector(p: usize, index: u64) -> Result<Vector, DomainError> {
    let count = sign_pattern_count(p)?;
    if index == 0 || index > count {
        return Err(DomainError::IndexOutOfRange { index, count });
    }
    Ok(pattern_from_bits(p, (index - 1) as u32))
}

/// All sign patterns of length `p` as the columns of a `p x 2^p` matrix,
/// in index order.
pub fn sign_vectors(p: usize) -> Result<Matrix, DomainError> {
    let patterns = sign_patterns(p)?;
    trace!("materializing {} sign patterns of length {}", patterns.len(), p);

    let mut out = Matrix::zeros((p, patterns.len()));
    for (pattern, mut col) in patterns.zip(out.axis_iter_mut(Axis(1))) {
        col.assign(&pattern);
    }
    Ok(out)
}

/// Lazily iterate over the sign patterns of length `p`, in index order.
pub fn sign_patterns(p: usize) -> Result<SignPatterns, DomainError> {
    let count = sign_pattern_count(p)?;
    Ok(SignPatterns { len: p, front: 0, back: count })
}

/// Iterator returned by [`sign_patterns`].
#[derive(Debug, Clone)]
pub struct SignPatterns {
    len: usize,
    // zero-based bit values still to be produced are `front..back`
    front: u64,
    back: u64,
}

impl SignPatterns {
    /// Length of each pattern.
    pub fn pattern_len(&self) -> usize { self.len }

    /// Number of patterns not yet produced.  Unlike `len()`, this is exact
    /// even when the count does not fit in a `usize`.
    pub fn remaining(&self) -> u64 { self.back - self.front }
}

impl Iterator for SignPatterns {
    type Item = Vector;

    fn next(&mut self) -> Option<Vector> {
        if self.front == self.back {
            return None;
        }
        let bits = self.front as u32;
        self.front += 1;
        Some(pattern_from_bits(self.len, bits))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            // 2^32 patterns on a 32-bit target
            Err(_) => (usize::MAX, None),
        }
    }
}

impl DoubleEndedIterator for SignPatterns {
    fn next_back(&mut self) -> Option<Vector> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(pattern_from_bits(self.len, self.back as u32))
    }
}

impl ExactSizeIterator for SignPatterns {}

fn check_len(p: usize) -> Result<(), DomainError> {
    if p == 0 {
        return Err(DomainError::EmptyPattern);
    }
    if p > MAX_SIGN_BITS as usize {
        return Err(DomainError::TooManyBits { len: p, max: MAX_SIGN_BITS });
    }
    Ok(())
}

// invariant: len <= MAX_SIGN_BITS
fn pattern_from_bits(len: usize, bits: u32) -> Vector {
    let mut out = Vector::zeros(len);
    for (k, x) in out.iter_mut().enumerate() {
        *x = match (bits >> k) & 1 {
            0 => 1.0,
            _ => -1.0,
        };
    }
    out
}

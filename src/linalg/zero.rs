/* ************************************************************************ **
** This file is part of isda, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

/// The test used to decide that a norm "is zero".
///
/// A value counts as zero when rounding it to `decimals` decimal digits
/// produces zero. This is deliberately *not* an epsilon comparison; with the
/// default of 5 decimals, anything below `0.5e-5` in magnitude is zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZeroTest {
    pub decimals: u32,
}

pub const DEFAULT_ZERO_DECIMALS: u32 = 5;

impl Default for ZeroTest {
    fn default() -> Self { ZeroTest { decimals: DEFAULT_ZERO_DECIMALS } }
}

impl ZeroTest {
    pub fn rounding_to(decimals: u32) -> Self { ZeroTest { decimals } }

    /// Round `x` to `self.decimals` digits.
    #[inline]
    pub fn round(&self, x: f64) -> f64 {
        let scale = 10f64.powi(self.decimals as i32);
        (x * scale).round() / scale
    }

    #[inline]
    pub fn is_zero(&self, x: f64) -> bool { self.round(x) == 0.0 }
}

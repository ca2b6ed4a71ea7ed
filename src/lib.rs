/* ************************************************************************ **
** This file is part of isda, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Linear-algebra kernel for symbolic/interval data analysis.
//!
//! This crate re-exports [`isda_linalg`] (the numeric functions) and
//! [`isda_config`] (settings), and provides a logger for applications.

pub use isda_linalg::*;

pub mod config {
    pub use isda_config::{Settings, ValidatedSettings, YamlRead, FailResult};
}

pub mod logging;

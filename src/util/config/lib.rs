/* ************************************************************************ **
** This file is part of isda, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Settings for the kernel, read from YAML.
//!
//! Use the [`YamlRead`] trait to deserialize these types, so that unused keys
//! are reported (they are usually typos).

#[macro_use] extern crate failure;
#[macro_use] extern crate serde_derive;
#[macro_use] extern crate log;

pub use self::monomorphize::YamlRead;
#[macro_use]
mod monomorphize;

pub use self::settings::{Settings, ValidatedSettings, MAX_VERSION, MAX_ZERO_DECIMALS};
mod settings;
mod validation;

pub type FailResult<T> = Result<T, failure::Error>;

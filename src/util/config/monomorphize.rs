/* ************************************************************************ **
** This file is part of isda, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

#![allow(non_snake_case)]

use failure::Error;

use std::io::Read;
use std::path::Path;

/// Deserialize from YAML, warning about keys that were not used.
///
/// The serde codegen for each settings type happens in this crate, so
/// crates that only call these methods stay cheap to compile.
pub trait YamlRead: for<'de> serde::Deserialize<'de> {
    fn from_reader(mut r: impl Read) -> Result<Self, Error>
    { YamlRead::from_dyn_reader(&mut r) }

    fn from_dyn_reader(r: &mut dyn Read) -> Result<Self, Error> {
        let mut s = String::new();
        r.read_to_string(&mut s)?;
        YamlRead::from_str(&s)
    }

    fn from_str(s: &str) -> Result<Self, Error> {
        let value = value_from_str(s)?;

        match Self::__serde_ignored__from_value(value) {
            Ok(out) => Ok(out),
            Err(_) => {
                // Going through a Value loses the location info in the error,
                // so parse again from the text to get a better message.
                Self::__serde_yaml__from_str(s)?;
                unreachable!();
            },
        }
    }

    fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|e| format_err!("could not open '{}': {}", path.display(), e))?;
        YamlRead::from_reader(std::io::BufReader::new(file))
    }

    // trait-provided function definitions seem to be lazily monomorphized, so the
    // part that needs monomorphizing goes directly in the impls
    #[doc(hidden)]
    fn __serde_ignored__from_value(value: serde_yaml::Value) -> Result<Self, Error>;
    #[doc(hidden)]
    fn __serde_yaml__from_str(s: &str) -> Result<Self, Error>;
}

// Only used inside this crate, where all of the settings types live.
macro_rules! derive_yaml_read {
    ($Type:ty) => {
        impl crate::YamlRead for $Type {
            fn __serde_ignored__from_value(value: serde_yaml::Value) -> Result<$Type, failure::Error> {
                serde_ignored::deserialize(
                    value,
                    |path| warn!("Ignoring unknown setting (possible typo?): {}", path),
                ).map_err(Into::into)
            }

            fn __serde_yaml__from_str(s: &str) -> Result<$Type, failure::Error>
            { serde_yaml::from_str(s).map_err(Into::into) }
        }
    };
}

fn value_from_str(s: &str) -> Result<serde_yaml::Value, Error>
{ serde_yaml::from_str(s).map_err(Into::into) }

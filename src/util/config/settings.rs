/* ************************************************************************ **
** This file is part of isda, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// NOTE: Please use the YamlRead trait when deserializing these types,
//       rather than calling serde_yaml directly.

use serde::de;
use isda_linalg::ZeroTest;

pub const MAX_VERSION: u32 = 1;

/// Beyond this, rounding an `f64` no longer changes anything near 1.
pub const MAX_ZERO_DECIMALS: u32 = 15;

/// Root settings object.
///
/// This is what you should deserialize.
#[derive(Serialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSettings(pub Settings);

/// Raw deserialized form of settings.
///
/// Deserialize `ValidatedSettings` instead, so that validation is performed.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Identifies the version of the settings that this file uses.
    ///
    /// If not specified, assumes a value of 1.
    #[serde(default)]
    pub version: Option<u32>,

    /// A norm is treated as zero if rounding it to this many decimal places
    /// gives zero.  This decides when `normalize` returns the zero vector and
    /// when a Gram-Schmidt column is dropped as linearly dependent.
    ///
    /// Default: 5.
    #[serde(default = "defaults::zero_decimals")]
    pub zero_decimals: u32,
}

mod defaults {
    pub(super) fn zero_decimals() -> u32 { isda_linalg::DEFAULT_ZERO_DECIMALS }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: Some(MAX_VERSION),
            zero_decimals: defaults::zero_decimals(),
        }
    }
}

impl Default for ValidatedSettings {
    fn default() -> Self { ValidatedSettings(Settings::default()) }
}

derive_yaml_read!{ValidatedSettings}

impl<'de> de::Deserialize<'de> for ValidatedSettings {
    fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let cereal: Settings = de::Deserialize::deserialize(deserializer)?;

        cereal.validate().map_err(de::Error::custom)
    }
}

impl std::ops::Deref for ValidatedSettings {
    type Target = Settings;

    fn deref(&self) -> &Settings { &self.0 }
}

impl Settings {
    /// The zero test that kernel functions should be called with.
    pub fn zero_test(&self) -> ZeroTest { ZeroTest::rounding_to(self.zero_decimals) }
}

/* ************************************************************************ **
** This file is part of isda, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Post-processing performed on deserialized settings.

use crate::settings::{Settings, ValidatedSettings, MAX_VERSION, MAX_ZERO_DECIMALS};
use failure::Error;

impl Settings {
    pub fn validate(mut self) -> Result<ValidatedSettings, Error> {
        fix_version(&mut self.version)?;
        check_zero_decimals(self.zero_decimals)?;

        Ok(ValidatedSettings(self))
    }
}

fn fix_version(it: &mut Option<u32>) -> Result<(), Error> {
    match *it {
        Some(x) if x == 0 || x > MAX_VERSION => {
            bail!("`version: {}` is invalid. (1 <= version <= {})", x, MAX_VERSION);
        },
        None => {
            debug!("Settings have no `version` field; assuming `version: 1`.");
            *it = Some(1);
        },
        _ => {},
    };

    Ok(())
}

fn check_zero_decimals(decimals: u32) -> Result<(), Error> {
    if decimals > MAX_ZERO_DECIMALS {
        bail!("`zero-decimals: {}` is invalid. (must be at most {})", decimals, MAX_ZERO_DECIMALS);
    }
    if decimals != isda_linalg::DEFAULT_ZERO_DECIMALS {
        info!("Using a zero test of {} decimal places (the default is {}).",
            decimals, isda_linalg::DEFAULT_ZERO_DECIMALS);
    }
    Ok(())
}

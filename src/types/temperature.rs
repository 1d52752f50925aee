// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature setpoint type.

use std::fmt;

use crate::error::ValueError;

/// Minimum setpoint supported by the unit (degrees Celsius).
const TEMP_MIN: u8 = 16;

/// Maximum setpoint supported by the unit (degrees Celsius).
const TEMP_MAX: u8 = 30;

/// Setpoint substituted when an out-of-range value reaches the encoder.
const TEMP_DEFAULT: u8 = 24;

/// Temperature setpoint in whole degrees Celsius.
///
/// Valid range: 16 to 30 °C, matching the front panel of the remote.
///
/// # Examples
///
/// ```
/// use york_ir::types::Temperature;
///
/// let temp = Temperature::new(22).unwrap();
/// assert_eq!(temp.celsius(), 22);
///
/// // Out-of-range values return an error.
/// assert!(Temperature::new(15).is_err());
/// assert!(Temperature::new(31).is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Temperature(u8);

impl Temperature {
    /// Minimum setpoint.
    pub const MIN: Self = Self(TEMP_MIN);

    /// Maximum setpoint.
    pub const MAX: Self = Self(TEMP_MAX);

    /// Creates a new temperature setpoint.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `celsius` is outside [16, 30].
    pub const fn new(celsius: u8) -> Result<Self, ValueError> {
        if celsius < TEMP_MIN || celsius > TEMP_MAX {
            return Err(ValueError::OutOfRange {
                min: TEMP_MIN,
                max: TEMP_MAX,
                actual: celsius,
            });
        }
        Ok(Self(celsius))
    }

    /// Creates a setpoint from a raw value, substituting 24 °C when the value
    /// is out of range.
    ///
    /// This is the defensive policy the wire encoder uses: the protocol has
    /// no in-band way to report a validation failure to the hardware.
    #[must_use]
    pub const fn new_or_default(celsius: u8) -> Self {
        if celsius < TEMP_MIN || celsius > TEMP_MAX {
            Self(TEMP_DEFAULT)
        } else {
            Self(celsius)
        }
    }

    /// Returns the setpoint in degrees Celsius.
    #[must_use]
    pub const fn celsius(&self) -> u8 {
        self.0
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self(TEMP_DEFAULT)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.0)
    }
}

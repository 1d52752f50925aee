// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Auto on/off timer type.
//!
//! The remote supports one power-on and one power-off timer, each with a
//! 30-minute resolution: a full hour plus an optional half-hour flag.

use std::fmt;

use crate::error::ValueError;

/// An auto on/off timer setting, carried in frame byte 4 (on) or 5 (off).
///
/// # Examples
///
/// ```
/// use york_ir::types::Timer;
///
/// // Fire at 06:30.
/// let timer = Timer::new(6, true, true).unwrap();
/// assert_eq!(timer.hour(), 6);
/// assert!(timer.half_hour());
/// assert!(timer.active());
///
/// let off = Timer::inactive();
/// assert!(!off.active());
///
/// assert!(Timer::new(24, false, true).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
pub struct Timer {
    hour: u8,
    half_hour: bool,
    active: bool,
}

impl Timer {
    /// Creates a new timer setting.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHour` if `hour` > 23.
    pub const fn new(hour: u8, half_hour: bool, active: bool) -> Result<Self, ValueError> {
        if hour > 23 {
            return Err(ValueError::InvalidHour(hour));
        }
        Ok(Self {
            hour,
            half_hour,
            active,
        })
    }

    /// Returns a disarmed timer at 00:00.
    #[must_use]
    pub const fn inactive() -> Self {
        Self {
            hour: 0,
            half_hour: false,
            active: false,
        }
    }

    /// Returns the hour the timer fires at (0-23).
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns true if the timer fires at half past the hour.
    #[must_use]
    pub const fn half_hour(&self) -> bool {
        self.half_hour
    }

    /// Returns true if the timer is armed.
    #[must_use]
    pub const fn active(&self) -> bool {
        self.active
    }
}

impl fmt::Display for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.active {
            write!(
                f,
                "{:02}:{}",
                self.hour,
                if self.half_hour { "30" } else { "00" }
            )
        } else {
            write!(f, "off")
        }
    }
}

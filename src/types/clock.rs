// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wall-clock time type.
//!
//! The remote transmits the current time of day with every frame so the
//! indoor unit can keep its timers aligned. Only hour and minute are carried;
//! the protocol has no notion of seconds or dates.

use std::fmt;

use chrono::Timelike;

use crate::error::ValueError;

/// Time of day carried in frame bytes 2-3.
///
/// # Examples
///
/// ```
/// use york_ir::types::ClockTime;
///
/// let time = ClockTime::new(14, 30).unwrap();
/// assert_eq!(time.hour(), 14);
/// assert_eq!(time.minute(), 30);
/// assert_eq!(time.to_string(), "14:30");
///
/// assert!(ClockTime::new(24, 0).is_err());
/// assert!(ClockTime::new(0, 60).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Creates a new clock time.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHour` if `hour` > 23, or
    /// `ValueError::InvalidMinute` if `minute` > 59.
    pub const fn new(hour: u8, minute: u8) -> Result<Self, ValueError> {
        if hour > 23 {
            return Err(ValueError::InvalidHour(hour));
        }
        if minute > 59 {
            return Err(ValueError::InvalidMinute(minute));
        }
        Ok(Self { hour, minute })
    }

    /// Returns the hour (0-23).
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0-59).
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl From<chrono::NaiveTime> for ClockTime {
    // Truncation is safe: NaiveTime hours are < 24 and minutes < 60.
    #[allow(clippy::cast_possible_truncation)]
    fn from(time: chrono::NaiveTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_values_accepted() {
        let time = ClockTime::new(0, 0).unwrap();
        assert_eq!((time.hour(), time.minute()), (0, 0));

        let time = ClockTime::new(23, 59).unwrap();
        assert_eq!((time.hour(), time.minute()), (23, 59));
    }

    #[test]
    fn invalid_values_rejected() {
        assert_eq!(ClockTime::new(24, 0), Err(ValueError::InvalidHour(24)));
        assert_eq!(ClockTime::new(12, 60), Err(ValueError::InvalidMinute(60)));
    }

    #[test]
    fn default_is_midnight() {
        let time = ClockTime::default();
        assert_eq!((time.hour(), time.minute()), (0, 0));
    }

    #[test]
    fn display_zero_pads() {
        assert_eq!(ClockTime::new(7, 5).unwrap().to_string(), "07:05");
    }

    #[test]
    fn from_naive_time() {
        let naive = chrono::NaiveTime::from_hms_opt(21, 42, 17).unwrap();
        let time = ClockTime::from(naive);
        assert_eq!((time.hour(), time.minute()), (21, 42));

        let naive = chrono::NaiveTime::from_hms_opt(23, 59, 59).unwrap();
        let time = ClockTime::from(naive);
        assert_eq!((time.hour(), time.minute()), (23, 59));
    }
}

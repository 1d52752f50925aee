// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operation and fan mode types for York air conditioners.
//!
//! Both enums carry the exact 4-bit wire codes used by the ECGS01-i remote.
//! The codes are one-hot style but not contiguous; in particular the manual
//! fan speeds are numbered against bit weight (`Low` is the highest pattern),
//! which is a quirk of the remote itself and must be preserved bit-exactly.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Operating mode of the air conditioner.
///
/// # Examples
///
/// ```
/// use york_ir::types::OperationMode;
///
/// assert_eq!(OperationMode::Cool.as_bits(), 0b0010);
/// assert_eq!(OperationMode::from_bits(0b0001), OperationMode::Dry);
///
/// // Unrecognized codes fall back to Cool rather than failing.
/// assert_eq!(OperationMode::from_bits(0b1111), OperationMode::Cool);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
pub enum OperationMode {
    /// Dehumidify without active cooling.
    Dry,
    /// Compressor cooling.
    #[default]
    Cool,
    /// Circulate air only.
    FanOnly,
}

impl OperationMode {
    /// Returns the 4-bit wire code stored in the low nibble of frame byte 1.
    #[must_use]
    pub const fn as_bits(self) -> u8 {
        match self {
            Self::Dry => 0b0001,
            Self::Cool => 0b0010,
            Self::FanOnly => 0b0100,
        }
    }

    /// Maps a 4-bit wire code back to a mode.
    ///
    /// Unrecognized codes map to [`OperationMode::Cool`]; the protocol has no
    /// way to report an encode-side error to the hardware, so the safe
    /// default is substituted instead.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x0f {
            0b0001 => Self::Dry,
            0b0100 => Self::FanOnly,
            _ => Self::Cool,
        }
    }

    /// Returns the human-readable name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dry => "dry",
            Self::Cool => "cool",
            Self::FanOnly => "fan_only",
        }
    }
}

impl fmt::Display for OperationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OperationMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dry" => Ok(Self::Dry),
            "cool" => Ok(Self::Cool),
            "fan_only" | "fan" => Ok(Self::FanOnly),
            _ => Err(ValueError::InvalidOperationMode(s.to_string())),
        }
    }
}

/// Fan mode of the air conditioner.
///
/// The three manual speeds carry inverted bit weights on the wire: `Low` is
/// `0b1000` and `High` is `0b0010`. `Quiet` and `Turbo` are composite
/// patterns, not separate flag bits.
///
/// # Examples
///
/// ```
/// use york_ir::types::FanMode;
///
/// assert_eq!(FanMode::Low.as_bits(), 0b1000);
/// assert_eq!(FanMode::High.as_bits(), 0b0010);
/// assert_eq!(FanMode::from_bits(0b0011), FanMode::Turbo);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
pub enum FanMode {
    /// Fan speed controlled by the unit.
    #[default]
    Auto,
    /// Lowest manual speed.
    Low,
    /// Middle manual speed.
    Medium,
    /// Highest manual speed.
    High,
    /// Reduced-noise operation.
    Quiet,
    /// Maximum airflow boost.
    Turbo,
}

impl FanMode {
    /// Returns the 4-bit wire code stored in the high nibble of frame byte 1.
    #[must_use]
    pub const fn as_bits(self) -> u8 {
        match self {
            Self::Auto => 0b0001,
            Self::High => 0b0010,
            Self::Medium => 0b0100,
            Self::Low => 0b1000,
            Self::Quiet => 0b1001,
            Self::Turbo => 0b0011,
        }
    }

    /// Maps a 4-bit wire code back to a fan mode.
    ///
    /// Unrecognized codes map to [`FanMode::Auto`].
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x0f {
            0b0010 => Self::High,
            0b0100 => Self::Medium,
            0b1000 => Self::Low,
            0b1001 => Self::Quiet,
            0b0011 => Self::Turbo,
            _ => Self::Auto,
        }
    }

    /// Returns the human-readable name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Quiet => "quiet",
            Self::Turbo => "turbo",
        }
    }
}

impl fmt::Display for FanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FanMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "quiet" => Ok(Self::Quiet),
            "turbo" => Ok(Self::Turbo),
            _ => Err(ValueError::InvalidFanMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_mode_wire_codes() {
        assert_eq!(OperationMode::Dry.as_bits(), 0b0001);
        assert_eq!(OperationMode::Cool.as_bits(), 0b0010);
        assert_eq!(OperationMode::FanOnly.as_bits(), 0b0100);
    }

    #[test]
    fn operation_mode_round_trips_through_bits() {
        for mode in [
            OperationMode::Dry,
            OperationMode::Cool,
            OperationMode::FanOnly,
        ] {
            assert_eq!(OperationMode::from_bits(mode.as_bits()), mode);
        }
    }

    #[test]
    fn operation_mode_unknown_bits_default_to_cool() {
        assert_eq!(OperationMode::from_bits(0b0000), OperationMode::Cool);
        assert_eq!(OperationMode::from_bits(0b1000), OperationMode::Cool);
        assert_eq!(OperationMode::from_bits(0b1111), OperationMode::Cool);
    }

    #[test]
    fn operation_mode_from_str() {
        assert_eq!("cool".parse::<OperationMode>().unwrap(), OperationMode::Cool);
        assert_eq!("DRY".parse::<OperationMode>().unwrap(), OperationMode::Dry);
        assert_eq!(
            "fan_only".parse::<OperationMode>().unwrap(),
            OperationMode::FanOnly
        );
        assert!("heat".parse::<OperationMode>().is_err());
    }

    #[test]
    fn fan_mode_wire_codes_are_inverted_by_speed() {
        // The remote assigns the highest bit pattern to the lowest speed.
        assert_eq!(FanMode::Low.as_bits(), 0b1000);
        assert_eq!(FanMode::Medium.as_bits(), 0b0100);
        assert_eq!(FanMode::High.as_bits(), 0b0010);
        assert_eq!(FanMode::Auto.as_bits(), 0b0001);
        assert_eq!(FanMode::Quiet.as_bits(), 0b1001);
        assert_eq!(FanMode::Turbo.as_bits(), 0b0011);
    }

    #[test]
    fn fan_mode_round_trips_through_bits() {
        for fan in [
            FanMode::Auto,
            FanMode::Low,
            FanMode::Medium,
            FanMode::High,
            FanMode::Quiet,
            FanMode::Turbo,
        ] {
            assert_eq!(FanMode::from_bits(fan.as_bits()), fan);
        }
    }

    #[test]
    fn fan_mode_unknown_bits_default_to_auto() {
        assert_eq!(FanMode::from_bits(0b0000), FanMode::Auto);
        assert_eq!(FanMode::from_bits(0b0111), FanMode::Auto);
        assert_eq!(FanMode::from_bits(0b1111), FanMode::Auto);
    }

    #[test]
    fn display_and_parse_agree() {
        for fan in [FanMode::Auto, FanMode::Quiet, FanMode::Turbo] {
            assert_eq!(fan.to_string().parse::<FanMode>().unwrap(), fan);
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `york_ir` library.
//!
//! This module provides the error hierarchy used across the library: value
//! validation for typed constructors and decode failures for received pulse
//! streams. Decode failures are ordinary, expected outcomes (noise, partial
//! captures, foreign protocols), never panics.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// A received pulse stream could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The requested protocol is not registered in the protocol table.
    #[error("unknown protocol: {0}")]
    UnknownProtocol(String),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u8,
        /// Maximum allowed value.
        max: u8,
        /// The actual value that was provided.
        actual: u8,
    },

    /// An hour value is outside the valid range (0-23).
    #[error("hour value {0} is out of range [0, 23]")]
    InvalidHour(u8),

    /// A minute value is outside the valid range (0-59).
    #[error("minute value {0} is out of range [0, 59]")]
    InvalidMinute(u8),

    /// An invalid operation mode string was provided.
    #[error("invalid operation mode: {0}")]
    InvalidOperationMode(String),

    /// An invalid fan mode string was provided.
    #[error("invalid fan mode: {0}")]
    InvalidFanMode(String),
}

/// Errors related to demodulating a captured pulse stream.
///
/// Every variant is a routine reception outcome. RF noise, truncated
/// captures, and transmissions from other remotes all surface here; the
/// caller recovers by waiting for the next capture.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The stream does not start with the header mark/space pair.
    #[error("header mark/space not found")]
    HeaderMismatch,

    /// A data bit had a mark or space duration outside the timing windows.
    #[error("bit timing mismatch at byte {byte} bit {bit}")]
    BitTiming {
        /// Index of the frame byte being assembled (0-7).
        byte: usize,
        /// Bit position within the byte, LSB first (0-7).
        bit: usize,
    },

    /// The checksum nibble does not match the frame contents.
    #[error("checksum mismatch: received {received:#03x}, computed {computed:#03x}")]
    ChecksumMismatch {
        /// Checksum nibble carried in the frame.
        received: u8,
        /// Checksum nibble computed over the received bytes.
        computed: u8,
    },

    /// The footer mark/space pair or the closing mark is missing.
    #[error("footer mark/space not found")]
    FooterMismatch,
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            min: 16,
            max: 30,
            actual: 35,
        };
        assert_eq!(err.to_string(), "value 35 is out of range [16, 30]");
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::InvalidHour(25);
        let err: Error = value_err.into();
        assert!(matches!(err, Error::Value(ValueError::InvalidHour(25))));
    }

    #[test]
    fn decode_error_display() {
        let err = DecodeError::ChecksumMismatch {
            received: 0x3,
            computed: 0xb,
        };
        assert_eq!(
            err.to_string(),
            "checksum mismatch: received 0x3, computed 0xb"
        );

        let err = DecodeError::BitTiming { byte: 2, bit: 5 };
        assert_eq!(err.to_string(), "bit timing mismatch at byte 2 bit 5");
    }

    #[test]
    fn error_from_decode_error() {
        let err: Error = DecodeError::FooterMismatch.into();
        assert!(matches!(err, Error::Decode(DecodeError::FooterMismatch)));
    }
}

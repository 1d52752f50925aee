// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pulse-distance modulation and demodulation.
//!
//! Frames travel as a train of infrared mark/space durations on a 38 kHz
//! carrier. Every data bit is a fixed-width mark followed by a space whose
//! width selects the bit value: a long space is a one, a short space is a
//! zero. Bits go out LSB first, bytes in ascending order, bracketed by a
//! header pair, a footer pair, and a closing mark.

use crate::error::DecodeError;
use crate::protocol::frame::{FRAME_HEADER, FRAME_LEN, YorkFrame};
use crate::protocol::nibble;

/// IR carrier frequency in hertz.
pub const CARRIER_FREQUENCY_HZ: u32 = 38_000;

/// Default demodulator timing tolerance in percent.
pub const DEFAULT_TOLERANCE_PERCENT: u8 = 25;

/// Pulses in a complete transmission: header pair, 64 bit pairs, footer
/// pair, closing mark.
pub const PULSE_COUNT: usize = 2 + FRAME_LEN * 8 * 2 + 2 + 1;

const HEADER_MARK_US: u32 = 4652;
const HEADER_SPACE_US: u32 = 2408;
const BIT_MARK_US: u32 = 368;
const ONE_SPACE_US: u32 = 944;
const ZERO_SPACE_US: u32 = 368;
const FOOTER_MARK_US: u32 = 368;
const FOOTER_SPACE_US: u32 = 20340;
const CLOSING_MARK_US: u32 = 4652;

/// A single IR timing event: carrier on (mark) or off (space) for a
/// duration in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Pulse {
    /// Carrier active for the given number of microseconds.
    Mark(u32),
    /// Carrier idle for the given number of microseconds.
    Space(u32),
}

impl Pulse {
    /// Returns the event duration in microseconds.
    #[must_use]
    pub const fn duration_us(&self) -> u32 {
        match self {
            Self::Mark(us) | Self::Space(us) => *us,
        }
    }

    /// Returns true if the carrier is active during this event.
    #[must_use]
    pub const fn is_mark(&self) -> bool {
        matches!(self, Self::Mark(_))
    }
}

/// An ordered sequence of pulses ready for an IR transmitter.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PulseTrain {
    carrier_hz: u32,
    pulses: Vec<Pulse>,
}

impl PulseTrain {
    /// Creates an empty train on the standard 38 kHz carrier.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            carrier_hz: CARRIER_FREQUENCY_HZ,
            pulses: Vec::new(),
        }
    }

    /// Returns the carrier frequency the train is meant to ride on.
    #[must_use]
    pub const fn carrier_hz(&self) -> u32 {
        self.carrier_hz
    }

    /// Appends a mark of the given duration.
    pub fn push_mark(&mut self, duration_us: u32) {
        self.pulses.push(Pulse::Mark(duration_us));
    }

    /// Appends a space of the given duration.
    pub fn push_space(&mut self, duration_us: u32) {
        self.pulses.push(Pulse::Space(duration_us));
    }

    /// Returns the number of pulses in the train.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pulses.len()
    }

    /// Returns true if the train holds no pulses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pulses.is_empty()
    }

    /// Returns the pulses as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Pulse] {
        &self.pulses
    }

    /// Returns the total transmission time in microseconds.
    #[must_use]
    pub fn duration_us(&self) -> u32 {
        self.pulses.iter().map(Pulse::duration_us).sum()
    }
}

impl Default for PulseTrain {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Pulse>> for PulseTrain {
    fn from(pulses: Vec<Pulse>) -> Self {
        Self {
            carrier_hz: CARRIER_FREQUENCY_HZ,
            pulses,
        }
    }
}

impl<'a> IntoIterator for &'a PulseTrain {
    type Item = &'a Pulse;
    type IntoIter = std::slice::Iter<'a, Pulse>;

    fn into_iter(self) -> Self::IntoIter {
        self.pulses.iter()
    }
}

/// Modulates a frame into its pulse train.
///
/// The frame goes out exactly as given. Callers are expected to have called
/// [`YorkFrame::finalize`] first; a frame with a stale checksum modulates
/// fine but will be rejected by any compliant receiver.
#[must_use]
pub fn modulate(frame: &YorkFrame) -> PulseTrain {
    let mut train = PulseTrain {
        carrier_hz: CARRIER_FREQUENCY_HZ,
        pulses: Vec::with_capacity(PULSE_COUNT),
    };
    train.push_mark(HEADER_MARK_US);
    train.push_space(HEADER_SPACE_US);
    for &byte in frame.as_bytes() {
        for bit in 0..8 {
            train.push_mark(BIT_MARK_US);
            if byte & (1 << bit) != 0 {
                train.push_space(ONE_SPACE_US);
            } else {
                train.push_space(ZERO_SPACE_US);
            }
        }
    }
    train.push_mark(FOOTER_MARK_US);
    train.push_space(FOOTER_SPACE_US);
    train.push_mark(CLOSING_MARK_US);
    tracing::trace!(pulses = train.len(), frame = %frame, "frame modulated");
    train
}

/// Recovers frames from captured pulse trains.
///
/// Captured durations carry measurement jitter, so every expected duration
/// is matched within a percentage tolerance. The default of 25 % keeps the
/// one/zero space windows (708-1180 µs vs 276-460 µs) disjoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Demodulator {
    tolerance_percent: u8,
}

impl Demodulator {
    /// Creates a demodulator with the default tolerance.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tolerance_percent: DEFAULT_TOLERANCE_PERCENT,
        }
    }

    /// Creates a demodulator with a custom timing tolerance in percent.
    #[must_use]
    pub const fn with_tolerance(tolerance_percent: u8) -> Self {
        Self { tolerance_percent }
    }

    /// Decodes one frame from a captured pulse train.
    ///
    /// The checksum is verified before the footer so that corrupted payloads
    /// are reported as checksum failures even when trailing pulses are also
    /// damaged.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] describing the first point at which the
    /// capture stopped looking like a York transmission.
    pub fn demodulate(&self, pulses: &[Pulse]) -> Result<YorkFrame, DecodeError> {
        let mut cursor = PulseCursor::new(pulses, self.tolerance_percent);

        if !cursor.expect_mark(HEADER_MARK_US) || !cursor.expect_space(HEADER_SPACE_US) {
            tracing::trace!(pulses = pulses.len(), "header pair not found");
            return Err(DecodeError::HeaderMismatch);
        }

        let mut bytes = [0u8; FRAME_LEN];
        for (index, byte) in bytes.iter_mut().enumerate() {
            for bit in 0..8 {
                if !cursor.expect_mark(BIT_MARK_US) {
                    return Err(DecodeError::BitTiming { byte: index, bit });
                }
                if cursor.expect_space(ONE_SPACE_US) {
                    *byte |= 1 << bit;
                } else if !cursor.expect_space(ZERO_SPACE_US) {
                    return Err(DecodeError::BitTiming { byte: index, bit });
                }
            }
        }

        if bytes[0] != FRAME_HEADER {
            tracing::trace!(byte = bytes[0], "unexpected leading byte");
            return Err(DecodeError::HeaderMismatch);
        }

        let frame = YorkFrame::from_bytes(bytes);
        let computed = frame.checksum();
        let received = nibble::high(bytes[FRAME_LEN - 1]);
        if received != computed {
            tracing::debug!(received, computed, "checksum mismatch");
            return Err(DecodeError::ChecksumMismatch { received, computed });
        }

        if !cursor.expect_mark(FOOTER_MARK_US)
            || !cursor.expect_space(FOOTER_SPACE_US)
            || !cursor.expect_mark(CLOSING_MARK_US)
        {
            return Err(DecodeError::FooterMismatch);
        }

        tracing::debug!(frame = %frame, "frame demodulated");
        Ok(frame)
    }
}

impl Default for Demodulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes one frame using the default timing tolerance.
///
/// # Errors
///
/// Returns a [`DecodeError`] if the capture is not a York transmission.
pub fn demodulate(pulses: &[Pulse]) -> Result<YorkFrame, DecodeError> {
    Demodulator::new().demodulate(pulses)
}

/// Forward-only reader over a captured pulse slice. Expectations advance
/// the cursor only when they match, so a failed probe for a one-space can
/// be retried as a zero-space.
struct PulseCursor<'a> {
    pulses: &'a [Pulse],
    index: usize,
    tolerance_percent: u8,
}

impl<'a> PulseCursor<'a> {
    const fn new(pulses: &'a [Pulse], tolerance_percent: u8) -> Self {
        Self {
            pulses,
            index: 0,
            tolerance_percent,
        }
    }

    fn expect_mark(&mut self, expected_us: u32) -> bool {
        self.expect(expected_us, true)
    }

    fn expect_space(&mut self, expected_us: u32) -> bool {
        self.expect(expected_us, false)
    }

    fn expect(&mut self, expected_us: u32, mark: bool) -> bool {
        let Some(pulse) = self.pulses.get(self.index) else {
            return false;
        };
        if pulse.is_mark() == mark && self.within(pulse.duration_us(), expected_us) {
            self.index += 1;
            true
        } else {
            false
        }
    }

    fn within(&self, measured_us: u32, expected_us: u32) -> bool {
        let slack = expected_us * u32::from(self.tolerance_percent) / 100;
        measured_us >= expected_us.saturating_sub(slack) && measured_us <= expected_us + slack
    }
}

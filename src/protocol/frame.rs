// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The 8-byte York IR frame and its field accessors.
//!
//! Byte layout (nibbles are BCD digits unless noted):
//!
//! | Byte | Content |
//! |------|---------|
//! | 0    | header constant `0x16` |
//! | 1    | low nibble operation mode, high nibble fan mode |
//! | 2    | current minute (ones low, tens high) |
//! | 3    | current hour (ones low, tens high) |
//! | 4    | on timer: ones 0-3, tens 4-5, half-hour bit 6, active bit 7 |
//! | 5    | off timer, same layout as byte 4 |
//! | 6    | temperature (ones low, tens high) |
//! | 7    | swing bit 0, sleep bit 1, power-toggle bit 3, checksum high nibble |

use std::fmt;

use crate::protocol::nibble;
use crate::types::{ClockTime, FanMode, OperationMode, Temperature, Timer};

/// Number of bytes in a frame.
pub const FRAME_LEN: usize = 8;

/// Header constant carried in byte 0 of every frame.
pub const FRAME_HEADER: u8 = 0x16;

const SWING_MASK: u8 = 0b0000_0001;
const SLEEP_MASK: u8 = 0b0000_0010;
const POWER_MASK: u8 = 0b0000_1000;

const TIMER_HALF_HOUR_MASK: u8 = 0b0100_0000;
const TIMER_ACTIVE_MASK: u8 = 0b1000_0000;
const TIMER_TENS_MASK: u8 = 0b0011_0000;

/// One York IR transmission payload.
///
/// A frame is a plain value: build one per transmission, or receive one per
/// capture. Setters taking typed values cannot fail; setters taking raw
/// integers substitute safe defaults for out-of-range input, because the
/// protocol has no in-band way to report encode-time errors.
///
/// Call [`finalize`](Self::finalize) after the last field change and before
/// handing the frame to the modulator.
///
/// # Examples
///
/// ```
/// use york_ir::YorkFrame;
/// use york_ir::types::{FanMode, OperationMode, Temperature};
///
/// let mut frame = YorkFrame::default();
/// frame.set_operation_mode(OperationMode::Cool);
/// frame.set_fan_mode(FanMode::Auto);
/// frame.set_temperature(Temperature::new(24)?);
/// frame.finalize();
///
/// assert!(frame.is_valid());
/// assert_eq!(frame.as_bytes()[0], 0x16);
/// # Ok::<(), york_ir::ValueError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct YorkFrame([u8; FRAME_LEN]);

impl YorkFrame {
    /// Reconstructs a frame from raw bytes, e.g. a received capture.
    ///
    /// No validation happens here; call [`is_valid`](Self::is_valid) to check
    /// the header constant and checksum.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; FRAME_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the raw frame bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }

    /// Consumes the frame into its raw bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; FRAME_LEN] {
        self.0
    }

    /// Sets the operation mode (byte 1, low nibble).
    pub const fn set_operation_mode(&mut self, mode: OperationMode) {
        self.0[1] = nibble::pack(nibble::high(self.0[1]), mode.as_bits());
    }

    /// Returns the operation mode; unrecognized codes read as `Cool`.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        OperationMode::from_bits(nibble::low(self.0[1]))
    }

    /// Sets the fan mode (byte 1, high nibble).
    pub const fn set_fan_mode(&mut self, fan: FanMode) {
        self.0[1] = nibble::pack(fan.as_bits(), nibble::low(self.0[1]));
    }

    /// Returns the fan mode; unrecognized codes read as `Auto`.
    #[must_use]
    pub const fn fan_mode(&self) -> FanMode {
        FanMode::from_bits(nibble::high(self.0[1]))
    }

    /// Sets the temperature setpoint (byte 6).
    pub const fn set_temperature(&mut self, temperature: Temperature) {
        self.0[6] = nibble::bcd_pack(temperature.celsius());
    }

    /// Sets the setpoint from a raw Celsius value; out-of-range input
    /// encodes as 24 °C.
    pub const fn set_temperature_celsius(&mut self, celsius: u8) {
        self.set_temperature(Temperature::new_or_default(celsius));
    }

    /// Returns the setpoint; digits outside [16, 30] read as 24 °C.
    #[must_use]
    pub const fn temperature(&self) -> Temperature {
        Temperature::new_or_default(nibble::bcd_unpack(self.0[6]))
    }

    /// Sets the current time of day (bytes 2-3).
    pub const fn set_clock(&mut self, clock: ClockTime) {
        self.0[2] = nibble::bcd_pack(clock.minute());
        self.0[3] = nibble::bcd_pack(clock.hour());
    }

    /// Sets the time of day from raw values; an invalid hour or minute
    /// silently zeroes both clock bytes.
    pub fn set_clock_parts(&mut self, hour: u8, minute: u8) {
        match ClockTime::new(hour, minute) {
            Ok(clock) => self.set_clock(clock),
            Err(_) => {
                self.0[2] = 0;
                self.0[3] = 0;
            }
        }
    }

    /// Returns the time of day; undecodable digits read as 00:00.
    #[must_use]
    pub fn clock(&self) -> ClockTime {
        ClockTime::new(nibble::bcd_unpack(self.0[3]), nibble::bcd_unpack(self.0[2]))
            .unwrap_or_default()
    }

    /// Sets the auto-on timer (byte 4).
    pub const fn set_on_timer(&mut self, timer: Timer) {
        self.0[4] = Self::pack_timer(timer);
    }

    /// Sets the auto-on timer from raw values; an invalid hour silently
    /// clears the timer byte.
    pub fn set_on_timer_parts(&mut self, hour: u8, half_hour: bool, active: bool) {
        self.0[4] = Timer::new(hour, half_hour, active).map_or(0, Self::pack_timer);
    }

    /// Returns the auto-on timer; undecodable digits read as inactive.
    #[must_use]
    pub fn on_timer(&self) -> Timer {
        Self::unpack_timer(self.0[4])
    }

    /// Sets the auto-off timer (byte 5).
    pub const fn set_off_timer(&mut self, timer: Timer) {
        self.0[5] = Self::pack_timer(timer);
    }

    /// Sets the auto-off timer from raw values; an invalid hour silently
    /// clears the timer byte.
    pub fn set_off_timer_parts(&mut self, hour: u8, half_hour: bool, active: bool) {
        self.0[5] = Timer::new(hour, half_hour, active).map_or(0, Self::pack_timer);
    }

    /// Returns the auto-off timer; undecodable digits read as inactive.
    #[must_use]
    pub fn off_timer(&self) -> Timer {
        Self::unpack_timer(self.0[5])
    }

    /// Sets the louvre swing flag (byte 7, bit 0).
    pub const fn set_swing(&mut self, active: bool) {
        self.set_flag(SWING_MASK, active);
    }

    /// Returns the louvre swing flag.
    #[must_use]
    pub const fn swing(&self) -> bool {
        self.0[7] & SWING_MASK != 0
    }

    /// Sets the sleep mode flag (byte 7, bit 1).
    pub const fn set_sleep(&mut self, active: bool) {
        self.set_flag(SLEEP_MASK, active);
    }

    /// Returns the sleep mode flag.
    #[must_use]
    pub const fn sleep(&self) -> bool {
        self.0[7] & SLEEP_MASK != 0
    }

    /// Sets the power-toggle flag (byte 7, bit 3).
    ///
    /// The flag is momentary: the unit flips its power state once per frame
    /// carrying it, so the caller must clear it after each transmission
    /// rather than persisting it as state.
    pub const fn set_power_toggle(&mut self, active: bool) {
        self.set_flag(POWER_MASK, active);
    }

    /// Returns the power-toggle flag.
    #[must_use]
    pub const fn power_toggle(&self) -> bool {
        self.0[7] & POWER_MASK != 0
    }

    /// Computes the frame checksum nibble.
    ///
    /// The sum covers 15 terms: the low nibble of all 8 bytes plus the high
    /// nibble of bytes 0-6. Byte 7's high nibble is the checksum field
    /// itself and is never part of the sum. The result is the low nibble of
    /// that sum.
    #[must_use]
    pub fn checksum(&self) -> u8 {
        // Max possible sum is 15 * 15 = 225, so plain u8 arithmetic is safe.
        let mut sum: u8 = 0;
        for &byte in &self.0 {
            sum += nibble::low(byte);
        }
        for &byte in &self.0[..FRAME_LEN - 1] {
            sum += nibble::high(byte);
        }
        nibble::low(sum)
    }

    /// Writes the checksum into byte 7's high nibble.
    ///
    /// Must be called after the last field change and before modulation.
    pub fn finalize(&mut self) {
        self.0[7] = nibble::pack(self.checksum(), nibble::low(self.0[7]));
    }

    /// Returns true if the header constant and stored checksum are intact.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0[0] == FRAME_HEADER && nibble::high(self.0[7]) == self.checksum()
    }

    const fn set_flag(&mut self, mask: u8, active: bool) {
        if active {
            self.0[7] |= mask;
        } else {
            self.0[7] &= !mask;
        }
    }

    const fn pack_timer(timer: Timer) -> u8 {
        let mut byte = nibble::pack(timer.hour() / 10, timer.hour() % 10);
        if timer.half_hour() {
            byte |= TIMER_HALF_HOUR_MASK;
        }
        if timer.active() {
            byte |= TIMER_ACTIVE_MASK;
        }
        byte
    }

    fn unpack_timer(byte: u8) -> Timer {
        Timer::new(
            ((byte & TIMER_TENS_MASK) >> 4) * 10 + nibble::low(byte),
            byte & TIMER_HALF_HOUR_MASK != 0,
            byte & TIMER_ACTIVE_MASK != 0,
        )
        .unwrap_or_else(|_| Timer::inactive())
    }
}

impl Default for YorkFrame {
    /// A frame matching the remote's power-on state: cool mode, auto fan,
    /// clock at 00:00, both timers disarmed, 24 °C, all flags off.
    fn default() -> Self {
        let mut frame = Self([0; FRAME_LEN]);
        frame.0[0] = FRAME_HEADER;
        frame.set_operation_mode(OperationMode::Cool);
        frame.set_fan_mode(FanMode::Auto);
        frame.set_clock(ClockTime::default());
        frame.set_on_timer(Timer::inactive());
        frame.set_off_timer(Timer::inactive());
        frame.set_temperature(Temperature::default());
        frame.set_swing(false);
        frame.set_sleep(false);
        frame
    }
}

impl fmt::Display for YorkFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            for (i, byte) in self.0.iter().enumerate() {
                if i > 0 {
                    write!(f, ".")?;
                }
                write!(f, "{byte:02X}")?;
            }
            Ok(())
        } else {
            write!(f, "[invalid]")
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn populated_frame() -> YorkFrame {
        let mut frame = YorkFrame::default();
        frame.set_operation_mode(OperationMode::Dry);
        frame.set_fan_mode(FanMode::Low);
        frame.set_clock(ClockTime::new(12, 34).unwrap());
        frame.set_on_timer(Timer::new(7, true, true).unwrap());
        frame.set_off_timer(Timer::new(22, false, false).unwrap());
        frame.set_temperature(Temperature::new(16).unwrap());
        frame.set_swing(true);
        frame.set_sleep(true);
        frame.set_power_toggle(true);
        frame.finalize();
        frame
    }

    #[test]
    fn default_frame_bytes() {
        let mut frame = YorkFrame::default();
        frame.finalize();
        // Cool (0b0010) in the low nibble, Auto (0b0001) in the high nibble.
        // 24 °C packs as tens=2, ones=4. Checksum: low nibbles sum to 12,
        // high nibbles of bytes 0-6 sum to 4, total 16, low nibble 0.
        assert_eq!(
            frame.to_bytes(),
            [0x16, 0x12, 0x00, 0x00, 0x00, 0x00, 0x24, 0x00]
        );
        assert!(frame.is_valid());
    }

    #[test]
    fn populated_frame_bytes() {
        assert_eq!(
            populated_frame().to_bytes(),
            [0x16, 0x81, 0x34, 0x12, 0xc7, 0x22, 0x16, 0x3b]
        );
    }

    #[test]
    fn populated_frame_reads_back() {
        let frame = populated_frame();
        assert_eq!(frame.operation_mode(), OperationMode::Dry);
        assert_eq!(frame.fan_mode(), FanMode::Low);
        assert_eq!(frame.clock(), ClockTime::new(12, 34).unwrap());
        assert_eq!(frame.on_timer(), Timer::new(7, true, true).unwrap());
        assert_eq!(frame.off_timer(), Timer::new(22, false, false).unwrap());
        assert_eq!(frame.temperature().celsius(), 16);
        assert!(frame.swing());
        assert!(frame.sleep());
        assert!(frame.power_toggle());
        assert!(frame.is_valid());
    }

    #[test]
    fn temperature_raw_setter_substitutes_default() {
        let mut frame = YorkFrame::default();
        frame.set_temperature_celsius(5);
        assert_eq!(frame.temperature().celsius(), 24);
        frame.set_temperature_celsius(40);
        assert_eq!(frame.temperature().celsius(), 24);
        frame.set_temperature_celsius(16);
        assert_eq!(frame.temperature().celsius(), 16);
        frame.set_temperature_celsius(30);
        assert_eq!(frame.temperature().celsius(), 30);
    }

    #[test]
    fn clock_raw_setter_zeroes_on_invalid_input() {
        let mut frame = YorkFrame::default();
        frame.set_clock_parts(23, 59);
        assert_eq!(frame.as_bytes()[2], 0x59);
        assert_eq!(frame.as_bytes()[3], 0x23);

        frame.set_clock_parts(24, 30);
        assert_eq!(frame.as_bytes()[2], 0x00);
        assert_eq!(frame.as_bytes()[3], 0x00);

        frame.set_clock_parts(10, 60);
        assert_eq!(frame.as_bytes()[2], 0x00);
        assert_eq!(frame.as_bytes()[3], 0x00);
    }

    #[test]
    fn timer_raw_setter_clears_on_invalid_hour() {
        let mut frame = YorkFrame::default();
        frame.set_on_timer_parts(24, true, true);
        assert_eq!(frame.as_bytes()[4], 0x00);
        frame.set_off_timer_parts(99, false, true);
        assert_eq!(frame.as_bytes()[5], 0x00);
    }

    #[test]
    fn timer_packing_layout() {
        let mut frame = YorkFrame::default();
        frame.set_on_timer(Timer::new(15, true, true).unwrap());
        // ones=5, tens=1 (bits 4-5), half-hour bit 6, active bit 7.
        assert_eq!(frame.as_bytes()[4], 0b1101_0101);
    }

    #[test]
    fn flags_are_independent() {
        let mut frame = YorkFrame::default();
        frame.set_swing(true);
        frame.set_sleep(true);
        frame.set_power_toggle(true);
        assert!(frame.swing() && frame.sleep() && frame.power_toggle());

        frame.set_sleep(false);
        assert!(frame.swing());
        assert!(!frame.sleep());
        assert!(frame.power_toggle());
    }

    #[test]
    fn checksum_is_deterministic() {
        let frame = populated_frame();
        assert_eq!(frame.checksum(), frame.checksum());
        assert_eq!(frame.checksum(), 0x3);
    }

    #[test]
    fn finalize_is_idempotent() {
        let mut frame = populated_frame();
        let bytes = frame.to_bytes();
        frame.finalize();
        assert_eq!(frame.to_bytes(), bytes);
    }

    #[test]
    fn finalize_ignores_stale_checksum_nibble() {
        let mut frame = populated_frame();
        let expected = frame.to_bytes();
        // Corrupt the stored checksum, then recompute.
        let mut bytes = expected;
        bytes[7] = (bytes[7] & 0x0f) | 0xf0;
        let mut corrupted = YorkFrame::from_bytes(bytes);
        assert!(!corrupted.is_valid());
        corrupted.finalize();
        assert_eq!(corrupted.to_bytes(), expected);
    }

    #[test]
    fn any_single_bit_flip_invalidates() {
        // Every bit weight is nonzero mod 16, so a single flip always moves
        // the nibble sum.
        let frame = populated_frame();
        for byte in 0..7 {
            for bit in 0..8 {
                let mut bytes = frame.to_bytes();
                bytes[byte] ^= 1 << bit;
                let flipped = YorkFrame::from_bytes(bytes);
                assert!(
                    !flipped.is_valid(),
                    "flip of byte {byte} bit {bit} went undetected"
                );
            }
        }
    }

    #[test]
    fn header_byte_is_checked() {
        let mut bytes = populated_frame().to_bytes();
        bytes[0] = 0x17;
        assert!(!YorkFrame::from_bytes(bytes).is_valid());
    }

    #[test]
    fn display_valid_and_invalid() {
        let frame = populated_frame();
        assert_eq!(frame.to_string(), "16.81.34.12.C7.22.16.3B");

        let mut bytes = frame.to_bytes();
        bytes[6] ^= 0x01;
        assert_eq!(YorkFrame::from_bytes(bytes).to_string(), "[invalid]");
    }
}

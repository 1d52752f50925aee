// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Logical air-conditioner state.
//!
//! [`AcState`] is the application-facing view of a remote: typed fields
//! instead of packed nibbles. It converts to and from [`YorkFrame`] and is
//! the natural type to persist or expose over an API.

use crate::protocol::{PulseTrain, YorkFrame, modulate};
use crate::types::{ClockTime, FanMode, OperationMode, Temperature, Timer};

/// The full state a York remote transmits.
///
/// The remote is one-directional: the unit never reports back, so this
/// struct is the sender's belief, not ground truth. `power_toggle` is
/// momentary and is cleared by [`pulse_train`](Self::pulse_train) after
/// each transmission.
///
/// # Examples
///
/// ```
/// use york_ir::AcState;
/// use york_ir::types::{OperationMode, Temperature};
///
/// let mut state = AcState::default();
/// state.mode = OperationMode::Dry;
/// state.temperature = Temperature::new(22)?;
/// state.power_toggle = true;
///
/// let train = state.pulse_train();
/// assert_eq!(train.len(), 133);
/// assert!(!state.power_toggle);
/// # Ok::<(), york_ir::ValueError>(())
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize,
)]
pub struct AcState {
    /// Operation mode.
    pub mode: OperationMode,
    /// Fan speed mode.
    pub fan: FanMode,
    /// Setpoint temperature.
    pub temperature: Temperature,
    /// Time of day sent with the frame.
    pub clock: ClockTime,
    /// Auto power-on timer.
    pub on_timer: Timer,
    /// Auto power-off timer.
    pub off_timer: Timer,
    /// Louvre swing.
    pub swing: bool,
    /// Sleep mode.
    pub sleep: bool,
    /// Momentary power toggle for the next transmission only.
    pub power_toggle: bool,
}

impl AcState {
    /// Encodes this state as a finalized frame.
    #[must_use]
    pub fn to_frame(&self) -> YorkFrame {
        let mut frame = YorkFrame::default();
        frame.set_operation_mode(self.mode);
        frame.set_fan_mode(self.fan);
        frame.set_temperature(self.temperature);
        frame.set_clock(self.clock);
        frame.set_on_timer(self.on_timer);
        frame.set_off_timer(self.off_timer);
        frame.set_swing(self.swing);
        frame.set_sleep(self.sleep);
        frame.set_power_toggle(self.power_toggle);
        frame.finalize();
        frame
    }

    /// Reads the state a frame carries.
    ///
    /// Undecodable fields fall back to their defaults, matching the frame
    /// getters.
    #[must_use]
    pub fn from_frame(frame: &YorkFrame) -> Self {
        Self {
            mode: frame.operation_mode(),
            fan: frame.fan_mode(),
            temperature: frame.temperature(),
            clock: frame.clock(),
            on_timer: frame.on_timer(),
            off_timer: frame.off_timer(),
            swing: frame.swing(),
            sleep: frame.sleep(),
            power_toggle: frame.power_toggle(),
        }
    }

    /// Encodes and modulates this state, then clears `power_toggle`.
    ///
    /// The toggle flips the unit's power once per frame carrying it, so it
    /// must not leak into the following transmission.
    pub fn pulse_train(&mut self) -> PulseTrain {
        let frame = self.to_frame();
        self.power_toggle = false;
        tracing::debug!(frame = %frame, "state encoded for transmission");
        modulate(&frame)
    }
}

impl From<&YorkFrame> for AcState {
    fn from(frame: &YorkFrame) -> Self {
        Self::from_frame(frame)
    }
}

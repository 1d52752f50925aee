// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for York air-conditioner control.
//!
//! This module provides type-safe representations of the logical values
//! carried by a York IR frame. Each type ensures values are within their
//! valid ranges at construction time; defensive substitution for raw,
//! unvalidated input lives in the frame encoder instead.
//!
//! # Types
//!
//! - [`OperationMode`] - Cool / Dry / Fan-only, with wire bit codes
//! - [`FanMode`] - Auto / Low / Medium / High / Quiet / Turbo
//! - [`Temperature`] - Setpoint in whole degrees Celsius (16-30)
//! - [`ClockTime`] - Time of day (hour 0-23, minute 0-59)
//! - [`Timer`] - Auto on/off timer with 30-minute resolution

mod clock;
mod mode;
mod temperature;
mod timer;

pub use clock::ClockTime;
pub use mode::{FanMode, OperationMode};
pub use temperature::Temperature;
pub use timer::Timer;

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wire protocol for York infrared remote controls.
//!
//! This module provides the two codec layers and the dispatch table on top
//! of them:
//!
//! - [`YorkFrame`]: the 8-byte frame with typed field accessors and the
//!   nibble-sum checksum
//! - [`modulate`] / [`Demodulator`]: pulse-distance conversion between
//!   frames and IR mark/space timing trains
//! - [`ProtocolTable`]: name-keyed lookup of modulate/demodulate pairs
//!
//! Everything here is a plain value. Nothing is global and nothing locks;
//! concurrent callers work on their own frames and tables.

mod frame;
mod line;
mod nibble;
mod registry;

pub use frame::{FRAME_HEADER, FRAME_LEN, YorkFrame};
pub use line::{
    CARRIER_FREQUENCY_HZ, DEFAULT_TOLERANCE_PERCENT, Demodulator, PULSE_COUNT, Pulse, PulseTrain,
    demodulate, modulate,
};
pub use registry::{DemodulateFn, ModulateFn, ProtocolCodec, ProtocolId, ProtocolTable};

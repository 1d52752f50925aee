// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `york_ir` - A Rust library for the York air-conditioner IR protocol.
//!
//! This library encodes and decodes the infrared transmissions used by
//! York ECGS01-i remote controls: an 8-byte frame carrying mode, fan
//! speed, setpoint, clock, timers and flags, protected by a nibble-sum
//! checksum and sent as a 38 kHz pulse-distance train.
//!
//! # Supported Features
//!
//! - **Typed state**: [`AcState`] with validated modes, temperature,
//!   clock and timers
//! - **Frame codec**: [`YorkFrame`] packing, checksum, validation
//! - **Line codec**: [`modulate`] to IR pulse timings, [`Demodulator`]
//!   back from captures with configurable tolerance
//! - **Protocol table**: [`ProtocolTable`] for name-keyed codec dispatch
//!
//! # Quick Start
//!
//! ```
//! use york_ir::{AcState, Demodulator};
//! use york_ir::types::{FanMode, OperationMode, Temperature};
//!
//! fn main() -> york_ir::Result<()> {
//!     let mut state = AcState::default();
//!     state.mode = OperationMode::Cool;
//!     state.fan = FanMode::Quiet;
//!     state.temperature = Temperature::new(22)?;
//!
//!     // Pulse timings ready for an IR transmitter.
//!     let train = state.pulse_train();
//!     assert_eq!(train.len(), 133);
//!
//!     // A receiver turns captured timings back into state.
//!     let frame = Demodulator::new().demodulate(train.as_slice())?;
//!     assert_eq!(AcState::from_frame(&frame).temperature.celsius(), 22);
//!     Ok(())
//! }
//! ```
//!
//! # Thread Safety
//!
//! Every type here is a plain value with no interior mutability and no
//! global state. Share frames and tables across threads freely; `&self`
//! methods never lock.

pub mod error;
pub mod protocol;
pub mod state;
pub mod types;

pub use error::{DecodeError, Error, Result, ValueError};
pub use protocol::{
    CARRIER_FREQUENCY_HZ, Demodulator, ProtocolCodec, ProtocolId, ProtocolTable, Pulse,
    PulseTrain, YorkFrame, demodulate, modulate,
};
pub use state::AcState;

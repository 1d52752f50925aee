// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Name-keyed dispatch over protocol codecs.
//!
//! A [`ProtocolTable`] is a plain value owned by the caller. There is no
//! process-global registration step; construct a table where you need one
//! and pass it around.

use std::collections::HashMap;
use std::fmt;

use crate::error::{DecodeError, Error};
use crate::protocol::frame::YorkFrame;
use crate::protocol::line::{self, Pulse, PulseTrain};

/// Frame-to-pulses encoder entry point.
pub type ModulateFn = fn(&YorkFrame) -> PulseTrain;

/// Pulses-to-frame decoder entry point.
pub type DemodulateFn = fn(&[Pulse]) -> Result<YorkFrame, DecodeError>;

/// Identifier a codec is registered under, e.g. `"york"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ProtocolId(String);

impl ProtocolId {
    /// Creates an identifier from a protocol name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The identifier of the built-in York codec.
    #[must_use]
    pub fn york() -> Self {
        Self::new("york")
    }

    /// Returns the protocol name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProtocolId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for ProtocolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A matched modulate/demodulate function pair.
#[derive(Debug, Clone, Copy)]
pub struct ProtocolCodec {
    modulate: ModulateFn,
    demodulate: DemodulateFn,
}

impl ProtocolCodec {
    /// Creates a codec from its two entry points.
    #[must_use]
    pub const fn new(modulate: ModulateFn, demodulate: DemodulateFn) -> Self {
        Self {
            modulate,
            demodulate,
        }
    }

    /// Encodes a frame into a pulse train.
    #[must_use]
    pub fn modulate(&self, frame: &YorkFrame) -> PulseTrain {
        (self.modulate)(frame)
    }

    /// Decodes a captured pulse train into a frame.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the capture does not carry a valid
    /// transmission of this protocol.
    pub fn demodulate(&self, pulses: &[Pulse]) -> Result<YorkFrame, DecodeError> {
        (self.demodulate)(pulses)
    }
}

/// Lookup table from protocol identifiers to codecs.
///
/// # Examples
///
/// ```
/// use york_ir::protocol::{ProtocolId, ProtocolTable};
/// use york_ir::YorkFrame;
///
/// let table = ProtocolTable::with_defaults();
/// let mut frame = YorkFrame::default();
/// frame.finalize();
///
/// let train = table.modulate(&ProtocolId::york(), &frame)?;
/// let decoded = table.demodulate(&ProtocolId::york(), train.as_slice())?;
/// assert_eq!(decoded, frame);
/// # Ok::<(), york_ir::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProtocolTable {
    codecs: HashMap<ProtocolId, ProtocolCodec>,
}

impl ProtocolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table with every built-in codec registered.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table.register(
            ProtocolId::york(),
            ProtocolCodec::new(line::modulate, line::demodulate),
        );
        table
    }

    /// Registers a codec, replacing any codec already under the same id.
    pub fn register(&mut self, id: ProtocolId, codec: ProtocolCodec) {
        tracing::debug!(protocol = %id, "codec registered");
        self.codecs.insert(id, codec);
    }

    /// Looks up the codec registered under `id`.
    #[must_use]
    pub fn get(&self, id: &ProtocolId) -> Option<&ProtocolCodec> {
        self.codecs.get(id)
    }

    /// Returns true if a codec is registered under `id`.
    #[must_use]
    pub fn contains(&self, id: &ProtocolId) -> bool {
        self.codecs.contains_key(id)
    }

    /// Iterates over the registered identifiers, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &ProtocolId> {
        self.codecs.keys()
    }

    /// Encodes a frame through the codec registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProtocol`] if no codec is registered.
    pub fn modulate(&self, id: &ProtocolId, frame: &YorkFrame) -> Result<PulseTrain, Error> {
        let codec = self.lookup(id)?;
        Ok(codec.modulate(frame))
    }

    /// Decodes a capture through the codec registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProtocol`] if no codec is registered, or the
    /// codec's [`DecodeError`] if the capture does not decode.
    pub fn demodulate(&self, id: &ProtocolId, pulses: &[Pulse]) -> Result<YorkFrame, Error> {
        let codec = self.lookup(id)?;
        codec.demodulate(pulses).map_err(Error::from)
    }

    fn lookup(&self, id: &ProtocolId) -> Result<&ProtocolCodec, Error> {
        self.codecs
            .get(id)
            .ok_or_else(|| Error::UnknownProtocol(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_include_york() {
        let table = ProtocolTable::with_defaults();
        assert!(table.contains(&ProtocolId::york()));
        assert!(table.get(&ProtocolId::york()).is_some());
        assert_eq!(table.ids().count(), 1);
    }

    #[test]
    fn dispatch_round_trips() {
        let table = ProtocolTable::with_defaults();
        let mut frame = YorkFrame::default();
        frame.set_swing(true);
        frame.finalize();

        let train = table.modulate(&ProtocolId::york(), &frame).unwrap();
        let decoded = table
            .demodulate(&ProtocolId::york(), train.as_slice())
            .unwrap();
        assert_eq!(decoded, frame);
    }

    #[test]
    fn unknown_protocol_is_reported() {
        let table = ProtocolTable::with_defaults();
        let id = ProtocolId::from("daikin");
        let err = table.modulate(&id, &YorkFrame::default()).unwrap_err();
        assert!(matches!(err, Error::UnknownProtocol(name) if name == "daikin"));
    }

    #[test]
    fn decode_errors_pass_through() {
        let table = ProtocolTable::with_defaults();
        let err = table.demodulate(&ProtocolId::york(), &[]).unwrap_err();
        assert!(matches!(
            err,
            Error::Decode(DecodeError::HeaderMismatch)
        ));
    }

    #[test]
    fn registration_replaces_existing_codec() {
        fn silent_modulate(_: &YorkFrame) -> PulseTrain {
            PulseTrain::new()
        }

        let mut table = ProtocolTable::with_defaults();
        table.register(
            ProtocolId::york(),
            ProtocolCodec::new(silent_modulate, line::demodulate),
        );
        let train = table
            .modulate(&ProtocolId::york(), &YorkFrame::default())
            .unwrap();
        assert!(train.is_empty());
        assert_eq!(table.ids().count(), 1);
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Nibble and BCD helpers shared by the frame codec.
//!
//! The York frame stores almost everything as packed decimal digits, one per
//! nibble, and its checksum walks the frame nibble by nibble.

/// Returns bits 0-3 of `byte`.
pub(crate) const fn low(byte: u8) -> u8 {
    byte & 0x0f
}

/// Returns bits 4-7 of `byte`, shifted down.
pub(crate) const fn high(byte: u8) -> u8 {
    byte >> 4
}

/// Packs two nibbles into a byte.
pub(crate) const fn pack(high: u8, low: u8) -> u8 {
    (high << 4) | (low & 0x0f)
}

/// Packs a two-digit decimal value as BCD: tens in the high nibble, ones in
/// the low nibble.
pub(crate) const fn bcd_pack(value: u8) -> u8 {
    pack(value / 10, value % 10)
}

/// Reads a BCD byte back into its decimal value.
pub(crate) const fn bcd_unpack(byte: u8) -> u8 {
    high(byte) * 10 + low(byte)
}

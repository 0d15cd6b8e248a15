// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

/// An owned, growable sequence of UTF-16 code units.
///
/// Unlike [`String`], the contents are not required to be well formed: unpaired surrogates can
/// be stored (native text APIs allow them), and only surface as an error when the text is
/// converted to UTF-8.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Utf16String {
    units: Vec<u16>,
}

impl Utf16String {
    /// Creates an empty string.
    pub const fn new() -> Self {
        Self { units: Vec::new() }
    }

    /// Creates a string from raw code units.
    pub fn from_units(units: impl Into<Vec<u16>>) -> Self {
        Self {
            units: units.into(),
        }
    }

    /// Borrow the code units.
    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    /// Consumes the string, returning the code units.
    pub fn into_units(self) -> Vec<u16> {
        self.units
    }

    /// Appends code units.
    pub fn push_units(&mut self, units: &[u16]) {
        self.units.extend_from_slice(units);
    }

    /// Appends a UTF-8 string.
    pub fn push_str(&mut self, s: &str) {
        self.units.extend(s.encode_utf16());
    }

    /// Inserts code units at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert_units(&mut self, index: usize, units: &[u16]) {
        self.units.splice(index..index, units.iter().copied());
    }

    /// Removes the code units in `range`.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds or reversed.
    pub fn remove(&mut self, range: Range<usize>) {
        self.units.drain(range);
    }

    /// Splits the string at `index`, returning everything after it.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn split_off(&mut self, index: usize) -> Self {
        Self {
            units: self.units.split_off(index),
        }
    }

    /// Decodes to UTF-8.
    ///
    /// On failure, returns the offset of the first unpaired surrogate.
    pub fn to_utf8(&self) -> Result<String, usize> {
        let mut out = String::with_capacity(self.units.len());
        let mut offset = 0;
        for decoded in char::decode_utf16(self.units.iter().copied()) {
            match decoded {
                Ok(c) => {
                    out.push(c);
                    offset += c.len_utf16();
                }
                Err(_) => return Err(offset),
            }
        }
        Ok(out)
    }

    /// Decodes to UTF-8, replacing unpaired surrogates with U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }
}

impl From<&str> for Utf16String {
    fn from(s: &str) -> Self {
        Self {
            units: s.encode_utf16().collect(),
        }
    }
}

impl From<String> for Utf16String {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<&[u16]> for Utf16String {
    fn from(units: &[u16]) -> Self {
        Self::from_units(units)
    }
}

impl AsRef<[u16]> for Utf16String {
    fn as_ref(&self) -> &[u16] {
        &self.units
    }
}

impl fmt::Debug for Utf16String {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_string_lossy(), f)
    }
}

impl fmt::Display for Utf16String {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

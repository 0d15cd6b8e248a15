// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::Utf16String;

/// A block of UTF-16 text addressed by code unit offsets.
///
/// Storage does not have to be contiguous: a span-based document can implement this trait by
/// locating the span that contains an offset.
pub trait TextStorage {
    /// The length of the underlying text, in UTF-16 code units.
    fn len(&self) -> usize;

    /// Return `true` if the underlying text is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the code unit at `index`, or `None` if `index >= len()`.
    fn code_unit(&self, index: usize) -> Option<u16>;

    /// Return whether `index` is a character boundary in the text.
    ///
    /// Every offset in `0..=len()` is a boundary except one that falls between the high and
    /// low halves of a surrogate pair. Unpaired surrogates do not prevent a boundary.
    fn is_char_boundary(&self, index: usize) -> bool {
        if index == 0 || index == self.len() {
            return true;
        }
        if index > self.len() {
            return false;
        }
        match (self.code_unit(index - 1), self.code_unit(index)) {
            (Some(before), Some(after)) => !(is_high_surrogate(before) && is_low_surrogate(after)),
            _ => true,
        }
    }
}

#[inline]
pub(crate) fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

#[inline]
pub(crate) fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

impl TextStorage for [u16] {
    fn len(&self) -> usize {
        <[u16]>::len(self)
    }

    fn code_unit(&self, index: usize) -> Option<u16> {
        self.get(index).copied()
    }
}

impl TextStorage for &[u16] {
    fn len(&self) -> usize {
        <[u16]>::len(self)
    }

    fn code_unit(&self, index: usize) -> Option<u16> {
        self.get(index).copied()
    }
}

impl TextStorage for Vec<u16> {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn code_unit(&self, index: usize) -> Option<u16> {
        self.get(index).copied()
    }
}

impl TextStorage for Arc<[u16]> {
    fn len(&self) -> usize {
        <[u16]>::len(self)
    }

    fn code_unit(&self, index: usize) -> Option<u16> {
        self.get(index).copied()
    }
}

impl TextStorage for Utf16String {
    fn len(&self) -> usize {
        self.as_units().len()
    }

    fn code_unit(&self, index: usize) -> Option<u16> {
        self.as_units().get(index).copied()
    }
}

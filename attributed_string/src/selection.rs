// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// A caret or a selected range, in UTF-16 code units.
///
/// A selection with `length == 0` is *collapsed*: it is a caret between two characters rather
/// than a range of them. Selections are owned by the caller (an editing command) and are not
/// validated until they are used against a text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    /// The offset of the first selected code unit, or the caret position.
    pub location: usize,
    /// The number of selected code units.
    pub length: usize,
}

impl Selection {
    /// Creates a selection.
    #[inline]
    pub const fn new(location: usize, length: usize) -> Self {
        Self { location, length }
    }

    /// Creates a collapsed selection (a caret) at `location`.
    #[inline]
    pub const fn caret(location: usize) -> Self {
        Self {
            location,
            length: 0,
        }
    }

    /// Returns `true` if this is a caret.
    #[inline]
    pub const fn is_collapsed(self) -> bool {
        self.length == 0
    }

    /// The offset just past the selection.
    ///
    /// Saturates instead of overflowing, so that an absurd selection fails bounds validation.
    #[inline]
    pub const fn end(self) -> usize {
        self.location.saturating_add(self.length)
    }

    /// Returns the selection as a half-open range.
    #[inline]
    pub const fn as_range(self) -> Range<usize> {
        self.location..self.end()
    }
}

// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{Endpoint, Error, ErrorKind, Selection, TextStorage};

/// A UTF-16 range that has been checked against a text.
///
/// A `TextRange` starts no later than it ends, lies within the text, and has both ends on
/// character boundaries. It does not remember which text it was checked against; use it only
/// with that text, or with a text that has not changed since.
///
/// ```
/// use attributed_string::{ErrorKind, TextRange, Utf16String};
///
/// let text = Utf16String::from("a😀b");
/// assert_eq!(TextRange::new(&text, 1..3).unwrap().len(), 2);
///
/// let err = TextRange::new(&text, 1..2).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::NotOnCharBoundary);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextRange {
    start: usize,
    end: usize,
}

impl TextRange {
    /// Checks `range` against `text`.
    pub fn new<T: TextStorage + ?Sized>(text: &T, range: Range<usize>) -> Result<Self, Error> {
        validate_range(text, &range)?;
        Ok(Self::new_unchecked(range.start, range.end))
    }

    /// Checks the range covered by `selection` against `text`.
    pub fn from_selection<T: TextStorage + ?Sized>(
        text: &T,
        selection: Selection,
    ) -> Result<Self, Error> {
        Self::new(text, selection.as_range())
    }

    /// Creates a range from offsets that are already known to be valid.
    #[must_use]
    pub const fn new_unchecked(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The first code unit in the range.
    #[must_use]
    pub const fn start(self) -> usize {
        self.start
    }

    /// The offset just past the range.
    #[must_use]
    pub const fn end(self) -> usize {
        self.end
    }

    /// The number of code units in the range.
    #[must_use]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    /// Returns `true` for an empty range.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// The range as `start..end`.
    #[must_use]
    pub const fn as_range(self) -> Range<usize> {
        self.start..self.end
    }

    /// The range as a [`Selection`].
    #[must_use]
    pub const fn as_selection(self) -> Selection {
        Selection::new(self.start, self.len())
    }
}

impl From<TextRange> for Range<usize> {
    fn from(range: TextRange) -> Self {
        range.as_range()
    }
}

impl From<TextRange> for Selection {
    fn from(range: TextRange) -> Self {
        range.as_selection()
    }
}

/// Checks order first, then bounds, then surrogate pairs at each end.
pub(crate) fn validate_range<T: TextStorage + ?Sized>(
    text: &T,
    range: &Range<usize>,
) -> Result<(), Error> {
    let text_len = text.len();
    if range.start > range.end {
        return Err(Error::new(ErrorKind::InvalidRange, range.clone(), text_len));
    }
    if range.end > text_len {
        return Err(Error::new(ErrorKind::InvalidBounds, range.clone(), text_len));
    }
    for (endpoint, offset) in [(Endpoint::Start, range.start), (Endpoint::End, range.end)] {
        if !text.is_char_boundary(offset) {
            return Err(Error::split_pair(range.clone(), text_len, endpoint, offset));
        }
    }
    Ok(())
}

/// Checks a caret offset.
pub(crate) fn validate_offset<T: TextStorage + ?Sized>(
    text: &T,
    offset: usize,
) -> Result<(), Error> {
    validate_range(text, &(offset..offset))
}

#[cfg(test)]
mod tests {
    use super::{validate_offset, TextRange};
    use crate::{Endpoint, ErrorKind, Selection, Utf16String};
    use alloc::string::ToString;

    fn clef() -> Utf16String {
        // U+1D11E takes units 1..3.
        Utf16String::from("a\u{1D11E}b")
    }

    #[test]
    fn accepts_ranges_on_boundaries() {
        let text = clef();
        for range in [0..0, 0..1, 1..3, 0..4, 4..4] {
            assert_eq!(
                TextRange::new(&text, range.clone()).unwrap().as_range(),
                range
            );
        }
        assert!(validate_offset(&text, 3).is_ok());
    }

    #[test]
    #[expect(
        clippy::reversed_empty_ranges,
        reason = "A reversed range is the input under test."
    )]
    fn reversed_range() {
        let err = TextRange::new(&clef(), 3..1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
        assert_eq!(err.requested(), 3..1);
        assert!(err.surrogate_split().is_none());
        assert_eq!(err.to_string(), "range 3..1 ends before it starts");
    }

    #[test]
    fn past_the_end() {
        let text = clef();
        let err = TextRange::from_selection(&text, Selection::new(3, 2)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBounds);
        assert_eq!(err.requested(), 3..5);
        assert_eq!(err.text_len(), 4);
        assert_eq!(
            err.to_string(),
            "range 3..5 out of bounds for text of 4 code units"
        );
        assert_eq!(
            validate_offset(&text, 5).unwrap_err().kind(),
            ErrorKind::InvalidBounds
        );
    }

    #[test]
    fn start_inside_a_pair() {
        let err = TextRange::new(&clef(), 2..4).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotOnCharBoundary);
        let split = err.surrogate_split().unwrap();
        assert_eq!(split.endpoint, Endpoint::Start);
        assert_eq!(split.offset, 2);
        assert_eq!(split.pair, 1..3);
        assert_eq!(
            err.to_string(),
            "range 2..4: start offset 2 splits the surrogate pair at 1..3"
        );
    }

    #[test]
    fn end_inside_a_pair() {
        let err = TextRange::new(&clef(), 0..2).unwrap_err();
        assert_eq!(err.surrogate_split().unwrap().endpoint, Endpoint::End);
        let caret = validate_offset(&clef(), 2).unwrap_err();
        assert_eq!(caret.surrogate_split().unwrap().endpoint, Endpoint::Start);
    }

    #[test]
    fn converts_to_selection() {
        let range = TextRange::new(&clef(), 1..4).unwrap();
        assert_eq!(range.as_selection(), Selection::new(1, 3));
        assert_eq!(Selection::from(range).end(), 4);
        let as_range: core::ops::Range<usize> = range.into();
        assert_eq!(as_range, 1..4);
    }
}

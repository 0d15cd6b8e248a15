// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Error, Selection, TextRange, TextStorage};

const NEWLINE: u16 = b'\n' as u16;

/// Returns the newline-delimited paragraph range enclosing `selection`.
///
/// The result is the smallest `start..end` such that:
///
/// - `start` is just past the nearest `\n` strictly before `selection.location`, or `0`;
/// - `end` is the offset of the nearest `\n` at or after the last selected code unit (the
///   caret itself for a collapsed selection), or the text length.
///
/// The newlines themselves are never part of the range. Block-level attributes such as
/// alignment and headers are applied over this range rather than over the raw selection.
///
/// For empty text the selection is returned unchanged, without validation.
///
/// ```
/// use attributed_string::{paragraph_range, Selection, Utf16String};
///
/// let text = Utf16String::from("Hello\nWorld\n");
/// let range = paragraph_range(&text, Selection::caret(7)).unwrap();
/// assert_eq!(range.as_range(), 6..11);
/// ```
pub fn paragraph_range<T: TextStorage + ?Sized>(
    text: &T,
    selection: Selection,
) -> Result<TextRange, Error> {
    if text.is_empty() {
        return Ok(TextRange::new_unchecked(selection.location, selection.end()));
    }
    let range = TextRange::from_selection(text, selection)?;
    let len = text.len();

    let start = (0..range.start())
        .rev()
        .find(|&ix| text.code_unit(ix) == Some(NEWLINE))
        .map_or(0, |ix| ix + 1);
    let last = range.start().max(range.end().saturating_sub(1));
    let end = (last..len)
        .find(|&ix| text.code_unit(ix) == Some(NEWLINE))
        .unwrap_or(len);

    Ok(TextRange::new_unchecked(start, end))
}

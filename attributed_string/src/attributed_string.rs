// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::Range;

use smallvec::SmallVec;

use crate::text_range::{validate_offset, validate_range};
use crate::{Error, Selection, Utf16String};

/// The attributes overlapping a selection, in text order.
pub type Overlapping<'a, Attr> = SmallVec<[&'a Attr; 4]>;

/// A run of text sharing one attribute value.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeRange<Attr> {
    /// The half-open UTF-16 range covered by this run.
    pub range: Range<usize>,
    /// The attributes applied to the run.
    pub attributes: Attr,
}

/// A flat UTF-16 string with contiguous attribute runs.
///
/// Runs are non-empty, sorted by `start`, do not overlap, and together cover exactly
/// `0..len()`. An `AttributedString` is only built through [`AttributedStringBuilder`], which
/// maintains these invariants.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributedString<Attr> {
    text: Utf16String,
    runs: Vec<AttributeRange<Attr>>,
}

impl<Attr> Default for AttributedString<Attr> {
    fn default() -> Self {
        Self {
            text: Utf16String::new(),
            runs: Vec::new(),
        }
    }
}

impl<Attr> AttributedString<Attr> {
    /// Creates an empty attributed string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the underlying text.
    pub fn text(&self) -> &Utf16String {
        &self.text
    }

    /// Returns the length of the text, in UTF-16 code units.
    pub fn len(&self) -> usize {
        self.text.as_units().len()
    }

    /// Returns `true` if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.as_units().is_empty()
    }

    /// The attribute runs, in text order.
    pub fn runs(&self) -> &[AttributeRange<Attr>] {
        &self.runs
    }

    /// Consumes the string, returning its text and runs.
    pub fn into_parts(self) -> (Utf16String, Vec<AttributeRange<Attr>>) {
        (self.text, self.runs)
    }

    /// Returns the index of the run that supplies the attributes at `offset`.
    ///
    /// This is the run containing `offset`, except at the end of the text where it is the last
    /// run (the attributes "before the caret"). Returns `None` only for empty text.
    pub fn run_index_at(&self, offset: usize) -> Result<Option<usize>, Error> {
        validate_offset(&self.text, offset)?;
        if self.runs.is_empty() {
            return Ok(None);
        }
        if offset == self.len() {
            return Ok(Some(self.runs.len() - 1));
        }
        Ok(Some(self.runs.partition_point(|run| run.range.end <= offset)))
    }

    /// Returns the attributes that apply at a caret `offset`.
    ///
    /// See [`run_index_at`](Self::run_index_at) for which run is chosen.
    pub fn attributes_at(&self, offset: usize) -> Result<Option<&Attr>, Error> {
        Ok(self
            .run_index_at(offset)?
            .map(|index| &self.runs[index].attributes))
    }

    /// Returns the attributes of every run intersecting `selection`, in order.
    ///
    /// A collapsed selection delegates to [`attributes_at`](Self::attributes_at) and yields at
    /// most one item.
    pub fn attributes_overlapping(
        &self,
        selection: Selection,
    ) -> Result<Overlapping<'_, Attr>, Error> {
        if selection.is_collapsed() {
            return Ok(self.attributes_at(selection.location)?.into_iter().collect());
        }
        let range = selection.as_range();
        validate_range(&self.text, &range)?;
        let first = self.runs.partition_point(|run| run.range.end <= range.start);
        Ok(self.runs[first..]
            .iter()
            .take_while(|run| run.range.start < range.end)
            .map(|run| &run.attributes)
            .collect())
    }

    /// Maps every run's attributes, keeping text and run boundaries.
    pub fn map_attributes<B>(&self, mut f: impl FnMut(&Attr) -> B) -> AttributedString<B> {
        AttributedString {
            text: self.text.clone(),
            runs: self
                .runs
                .iter()
                .map(|run| AttributeRange {
                    range: run.range.clone(),
                    attributes: f(&run.attributes),
                })
                .collect(),
        }
    }
}

/// Builds an [`AttributedString`] by appending runs.
///
/// ```
/// use attributed_string::AttributedStringBuilder;
///
/// let mut builder = AttributedStringBuilder::new();
/// builder.push_str("ab", 1);
/// builder.push_str("", 2);
/// builder.push_str("c", 3);
/// let text = builder.finish();
///
/// let ranges: Vec<_> = text.runs().iter().map(|run| run.range.clone()).collect();
/// assert_eq!(ranges, [0..2, 2..3]);
/// ```
#[derive(Clone, Debug)]
pub struct AttributedStringBuilder<Attr> {
    inner: AttributedString<Attr>,
}

impl<Attr> Default for AttributedStringBuilder<Attr> {
    fn default() -> Self {
        Self {
            inner: AttributedString::default(),
        }
    }
}

impl<Attr> AttributedStringBuilder<Attr> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The length of the text appended so far.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Appends `units` as one run carrying `attributes`.
    ///
    /// Empty input produces no run and does not move the running offset.
    pub fn push_units(&mut self, units: &[u16], attributes: Attr) {
        if units.is_empty() {
            return;
        }
        let start = self.inner.len();
        self.inner.text.push_units(units);
        self.inner.runs.push(AttributeRange {
            range: start..start + units.len(),
            attributes,
        });
    }

    /// Appends a UTF-8 string as one run carrying `attributes`.
    pub fn push_str(&mut self, s: &str, attributes: Attr) {
        if s.is_empty() {
            return;
        }
        let start = self.inner.len();
        self.inner.text.push_str(s);
        let end = self.inner.len();
        self.inner.runs.push(AttributeRange {
            range: start..end,
            attributes,
        });
    }

    /// Finishes building.
    pub fn finish(self) -> AttributedString<Attr> {
        self.inner
    }
}

// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::Range;

use attributed_string::{
    paragraph_range, AttributedString, AttributedStringBuilder, Selection, TextRange,
    TextStorage, Utf16String,
};
use rich_text_primitives::{HeaderLevel, RichTextAlignment, RichTextStyle};

use crate::{AttributeKey, AttributeSet, AttributeValue, Error, Span};

/// An ordered sequence of [`Span`]s.
///
/// The document's text is the concatenation of its spans' text, and its length is the sum of
/// their lengths. Edits split spans at the edited offsets, so a span boundary never straddles an
/// edit; [`normalize`](Self::normalize) merges adjacent spans back together.
///
/// Every edit validates its range against the current text first and returns
/// [`ErrorKind::InvalidRange`](crate::ErrorKind::InvalidRange) without touching the document
/// when it is invalid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    spans: Vec<Span>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document from spans, as-is.
    pub fn from_spans(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// Creates a document with one span per run of a flattened document.
    pub fn from_attributed(text: &AttributedString<AttributeSet>) -> Self {
        let units = text.text().as_units();
        Self {
            spans: text
                .runs()
                .iter()
                .map(|run| Span::new(&units[run.range.clone()], run.attributes.clone()))
                .collect(),
        }
    }

    /// The spans, in order.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Consumes the document, returning its spans.
    pub fn into_spans(self) -> Vec<Span> {
        self.spans
    }

    /// Appends a span.
    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    /// The document's text.
    pub fn text(&self) -> Utf16String {
        let mut text = Utf16String::new();
        for span in &self.spans {
            text.push_units(span.text.as_units());
        }
        text
    }

    /// Flattens the document into text plus contiguous attribute runs.
    ///
    /// Each non-empty span produces one run; empty spans produce none.
    pub fn flatten(&self) -> AttributedString<AttributeSet> {
        let mut builder = AttributedStringBuilder::new();
        for span in &self.spans {
            builder.push_units(span.text.as_units(), span.attributes.clone());
        }
        let flat = builder.finish();
        log::trace!(
            "flattened {} spans into {} runs over {} code units",
            self.spans.len(),
            flat.runs().len(),
            flat.len()
        );
        flat
    }

    /// The attributes of the character before the caret at `offset`.
    ///
    /// At offset `0` this is the first non-empty span. An empty document reports its insertion
    /// point span if it has one, and `None` otherwise.
    pub fn attributes_before(&self, offset: usize) -> Result<Option<&AttributeSet>, Error> {
        TextRange::new(self, offset..offset)?;
        if offset == 0 {
            return Ok(self
                .spans
                .iter()
                .find(|span| !span.is_empty())
                .or(self.spans.last())
                .map(|span| &span.attributes));
        }
        let mut end = 0;
        for span in &self.spans {
            end += span.len();
            if !span.is_empty() && offset <= end {
                return Ok(Some(&span.attributes));
            }
        }
        Ok(None)
    }

    /// Inserts `text` at `offset`, returning the inserted range.
    ///
    /// Without explicit `attributes` the text takes the attributes before the caret (see
    /// [`attributes_before`](Self::attributes_before)).
    pub fn insert(
        &mut self,
        offset: usize,
        text: impl Into<Utf16String>,
        attributes: Option<AttributeSet>,
    ) -> Result<TextRange, Error> {
        let text = text.into();
        let attributes = match attributes {
            Some(attributes) => {
                TextRange::new(&*self, offset..offset)?;
                attributes
            }
            None => self.attributes_before(offset)?.cloned().unwrap_or_default(),
        };
        let len = text.as_units().len();
        if len == 0 {
            return Ok(TextRange::new_unchecked(offset, offset));
        }
        let index = self.split_at(offset);
        self.spans.insert(index, Span::new(text, attributes));
        log::trace!("inserted {len} code units at {offset}");
        Ok(TextRange::new_unchecked(offset, offset + len))
    }

    /// Deletes the text in `range`.
    pub fn delete(&mut self, range: Range<usize>) -> Result<(), Error> {
        let range = TextRange::new(&*self, range)?;
        if range.is_empty() {
            return Ok(());
        }
        let (first, last) = self.split_range(range);
        self.spans.drain(first..last);
        log::trace!("deleted {:?}", range.as_range());
        Ok(())
    }

    /// Replaces the attributes of every span in `range` with `f(attributes)`.
    pub fn update_attributes(
        &mut self,
        range: Range<usize>,
        mut f: impl FnMut(&AttributeSet) -> AttributeSet,
    ) -> Result<(), Error> {
        let range = TextRange::new(&*self, range)?;
        if range.is_empty() {
            return Ok(());
        }
        let (first, last) = self.split_range(range);
        for span in &mut self.spans[first..last] {
            span.attributes = f(&span.attributes);
        }
        Ok(())
    }

    /// Sets or, with `None`, removes one attribute over `range`.
    pub fn set_attribute(
        &mut self,
        range: Range<usize>,
        key: AttributeKey,
        value: Option<AttributeValue>,
    ) -> Result<(), Error> {
        self.update_attributes(range, |attributes| match &value {
            Some(value) => attributes.clone().with(key, value.clone()),
            None => attributes.clone().without(key),
        })
    }

    /// Turns `style` on or off over `range`.
    pub fn set_style(
        &mut self,
        range: Range<usize>,
        style: RichTextStyle,
        on: bool,
    ) -> Result<(), Error> {
        self.update_attributes(range, |attributes| attributes.clone().with_style(style, on))
    }

    /// Aligns every paragraph touched by `selection`, returning the paragraph range.
    pub fn set_alignment(
        &mut self,
        selection: Selection,
        alignment: RichTextAlignment,
    ) -> Result<TextRange, Error> {
        self.set_paragraph_attribute(selection, AttributeKey::Alignment, Some(alignment.into()))
    }

    /// Sets or clears the header level of every paragraph touched by `selection`, returning the
    /// paragraph range.
    pub fn set_header(
        &mut self,
        selection: Selection,
        level: Option<HeaderLevel>,
    ) -> Result<TextRange, Error> {
        self.set_paragraph_attribute(selection, AttributeKey::HeaderLevel, level.map(Into::into))
    }

    /// The paragraph range enclosing `selection`.
    ///
    /// The search runs over the flattened text, so its cost does not grow with the number of
    /// spans.
    pub fn paragraph_range(&self, selection: Selection) -> Result<TextRange, Error> {
        Ok(paragraph_range(&self.text(), selection)?)
    }

    /// Drops empty spans, except a trailing insertion point, and merges adjacent spans with
    /// equal attributes.
    pub fn normalize(&mut self) {
        let spans = core::mem::take(&mut self.spans);
        let last = spans.len().checked_sub(1);
        for (index, span) in spans.into_iter().enumerate() {
            if span.is_empty() && Some(index) != last {
                continue;
            }
            match self.spans.last_mut() {
                Some(prev) if prev.attributes == span.attributes => {
                    prev.text.push_units(span.text.as_units());
                }
                _ => self.spans.push(span),
            }
        }
    }

    fn set_paragraph_attribute(
        &mut self,
        selection: Selection,
        key: AttributeKey,
        value: Option<AttributeValue>,
    ) -> Result<TextRange, Error> {
        let paragraph = self.paragraph_range(selection)?;
        self.set_attribute(paragraph.as_range(), key, value)?;
        Ok(paragraph)
    }

    /// Splits spans at both ends of a validated range, returning the span index range it covers.
    fn split_range(&mut self, range: TextRange) -> (usize, usize) {
        let first = self.split_at(range.start());
        let last = self.split_at(range.end());
        (first, last)
    }

    /// Ensures a span boundary at a validated `offset`, returning the index of the first span
    /// starting there.
    fn split_at(&mut self, offset: usize) -> usize {
        let mut start = 0;
        for index in 0..self.spans.len() {
            if offset == start {
                return index;
            }
            let len = self.spans[index].len();
            if offset < start + len {
                let tail = self.spans[index].split_off(offset - start);
                self.spans.insert(index + 1, tail);
                return index + 1;
            }
            start += len;
        }
        self.spans.len()
    }
}

impl From<AttributedString<AttributeSet>> for Document {
    fn from(text: AttributedString<AttributeSet>) -> Self {
        Self::from_attributed(&text)
    }
}

impl TextStorage for Document {
    fn len(&self) -> usize {
        self.spans.iter().map(Span::len).sum()
    }

    fn code_unit(&self, mut index: usize) -> Option<u16> {
        for span in &self.spans {
            match span.text.as_units().get(index) {
                Some(unit) => return Some(*unit),
                None => index -= span.len(),
            }
        }
        None
    }
}

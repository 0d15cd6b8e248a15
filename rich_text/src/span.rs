// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use attributed_string::Utf16String;

use crate::AttributeSet;

/// A text fragment paired with one attribute set.
///
/// A span is normally non-empty. An empty span is allowed as the last span of a document, where
/// it records the attributes of an insertion point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Span {
    /// The UTF-16 text of the span.
    pub text: Utf16String,
    /// The attributes applied to the whole span.
    pub attributes: AttributeSet,
}

impl Span {
    /// Creates a span.
    pub fn new(text: impl Into<Utf16String>, attributes: AttributeSet) -> Self {
        Self {
            text: text.into(),
            attributes,
        }
    }

    /// The length of the span, in UTF-16 code units.
    pub fn len(&self) -> usize {
        self.text.as_units().len()
    }

    /// Returns `true` if the span has no text.
    pub fn is_empty(&self) -> bool {
        self.text.as_units().is_empty()
    }

    /// Splits the span at `index`, returning the tail with the same attributes.
    pub(crate) fn split_off(&mut self, index: usize) -> Self {
        Self {
            text: self.text.split_off(index),
            attributes: self.attributes.clone(),
        }
    }
}

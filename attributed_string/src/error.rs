// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::Range;

/// An offset or range that cannot be used with a text.
///
/// The error records the range the caller asked for and the length of the text it was checked
/// against, so it can be reported without access to the text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    requested: Range<usize>,
    text_len: usize,
    split: Option<SurrogateSplit>,
}

impl Error {
    /// The category of the error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The range that was requested, in UTF-16 code units.
    ///
    /// A caret is reported as an empty range.
    pub fn requested(&self) -> Range<usize> {
        self.requested.clone()
    }

    /// The length of the text the range was checked against.
    pub fn text_len(&self) -> usize {
        self.text_len
    }

    /// The surrogate pair that was split, for [`ErrorKind::NotOnCharBoundary`].
    pub fn surrogate_split(&self) -> Option<&SurrogateSplit> {
        self.split.as_ref()
    }

    pub(crate) fn new(kind: ErrorKind, requested: Range<usize>, text_len: usize) -> Self {
        Self {
            kind,
            requested,
            text_len,
            split: None,
        }
    }

    /// `offset` must sit between the halves of a surrogate pair.
    pub(crate) fn split_pair(
        requested: Range<usize>,
        text_len: usize,
        endpoint: Endpoint,
        offset: usize,
    ) -> Self {
        Self {
            split: Some(SurrogateSplit {
                endpoint,
                offset,
                pair: offset - 1..offset + 1,
            }),
            ..Self::new(ErrorKind::NotOnCharBoundary, requested, text_len)
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Range { start, end } = self.requested;
        match (self.kind, &self.split) {
            (ErrorKind::InvalidBounds, _) => write!(
                f,
                "range {start}..{end} out of bounds for text of {} code units",
                self.text_len
            ),
            (ErrorKind::InvalidRange, _) => write!(f, "range {start}..{end} ends before it starts"),
            (ErrorKind::NotOnCharBoundary, Some(split)) => write!(
                f,
                "range {start}..{end}: {} offset {} splits the surrogate pair at {}..{}",
                split.endpoint, split.offset, split.pair.start, split.pair.end
            ),
            (ErrorKind::NotOnCharBoundary, None) => {
                write!(f, "range {start}..{end} splits a surrogate pair")
            }
        }
    }
}

impl core::error::Error for Error {}

/// The category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An offset is past the end of the text.
    InvalidBounds,

    /// The range ends before it starts.
    InvalidRange,

    /// An offset falls between the high and low halves of a surrogate pair.
    NotOnCharBoundary,
}

/// Which end of a range was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The start of the range, or the caret.
    Start,

    /// The end of the range.
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::End => "end",
        })
    }
}

/// The surrogate pair split by a rejected offset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurrogateSplit {
    /// The end of the requested range that was rejected.
    pub endpoint: Endpoint,

    /// The rejected offset.
    pub offset: usize,

    /// The code units of the pair, high surrogate first.
    pub pair: Range<usize>,
}

// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

use crate::ExportFormat;

/// Error type for document, interchange and export operations.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the context relevant to that kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    repr: Repr,
}

#[derive(Debug, Clone, PartialEq)]
enum Repr {
    Range(attributed_string::Error),
    Encoding { fragment: String, offset: usize },
    Unsupported(ExportFormat),
    Data(String),
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The underlying range error, for [`ErrorKind::InvalidRange`].
    pub fn range_error(&self) -> Option<&attributed_string::Error> {
        match &self.repr {
            Repr::Range(err) => Some(err),
            _ => None,
        }
    }

    /// The text that could not be encoded, for [`ErrorKind::EncodingFailure`].
    pub fn fragment(&self) -> Option<&str> {
        match &self.repr {
            Repr::Encoding { fragment, .. } => Some(fragment),
            _ => None,
        }
    }

    /// The UTF-16 offset of the first unencodable code unit, for
    /// [`ErrorKind::EncodingFailure`].
    pub fn offset(&self) -> Option<usize> {
        match &self.repr {
            Repr::Encoding { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    /// The requested format, for [`ErrorKind::UnsupportedOperation`].
    pub fn format(&self) -> Option<&ExportFormat> {
        match &self.repr {
            Repr::Unsupported(format) => Some(format),
            _ => None,
        }
    }

    pub(crate) fn encoding_failure(fragment: String, offset: usize) -> Self {
        Self {
            kind: ErrorKind::EncodingFailure,
            repr: Repr::Encoding { fragment, offset },
        }
    }

    pub(crate) fn unsupported(format: ExportFormat) -> Self {
        Self {
            kind: ErrorKind::UnsupportedOperation,
            repr: Repr::Unsupported(format),
        }
    }

    pub(crate) fn invalid_data(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidData,
            repr: Repr::Data(message.into()),
        }
    }
}

impl From<attributed_string::Error> for Error {
    fn from(err: attributed_string::Error) -> Self {
        Self {
            kind: ErrorKind::InvalidRange,
            repr: Repr::Range(err),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Range(err) => write!(f, "invalid range: {err}"),
            Repr::Encoding { fragment, offset } => write!(
                f,
                "cannot encode text at offset {offset}: {fragment:?} contains an unpaired surrogate"
            ),
            Repr::Unsupported(format) => {
                write!(f, "export format `{format}` is not supported here")
            }
            Repr::Data(message) => write!(f, "invalid rich text data: {message}"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match &self.repr {
            Repr::Range(err) => Some(err),
            _ => None,
        }
    }
}

/// The non-exhaustive category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A selection or range was out of bounds, reversed, or split a surrogate pair.
    InvalidRange,

    /// Text cannot be represented in the requested export encoding.
    EncodingFailure,

    /// The requested export format is not available in this environment.
    UnsupportedOperation,

    /// Interchange data could not be decoded.
    InvalidData,
}

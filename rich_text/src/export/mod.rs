// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Export of flattened documents to interchange formats.
//!
//! The document model only selects a format and hands over the flattened text; encoding is the
//! job of an [`Exporter`]. [`StandardExporter`] covers the formats that need no platform
//! support.

mod archive;
mod plain;
mod rtf;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use attributed_string::AttributedString;
use rich_text_primitives::FontResolver;

use crate::{AttributeSet, Error, MaterializeContext};

pub use archive::ARCHIVE_VERSION;

/// A data format for exported rich text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DataFormat {
    /// The native archived form of a document.
    ArchivedData,
    /// UTF-8 plain text, without attributes.
    PlainText,
    /// Rich Text Format markup.
    Rtf,
    /// An archived document under an application-specific identifier and file extension.
    VendorArchivedData {
        /// The format identifier.
        id: Arc<str>,
        /// The file extension, without a leading dot.
        extension: Arc<str>,
    },
}

impl DataFormat {
    /// The formats every exporter is expected to know about.
    pub const STANDARD: [Self; 3] = [Self::ArchivedData, Self::PlainText, Self::Rtf];

    /// The format identifier.
    pub fn id(&self) -> &str {
        match self {
            Self::ArchivedData => "archivedData",
            Self::PlainText => "plainText",
            Self::Rtf => "rtf",
            Self::VendorArchivedData { id, .. } => id,
        }
    }

    /// The file extension, without a leading dot.
    pub fn extension(&self) -> &str {
        match self {
            Self::ArchivedData => "rtk",
            Self::PlainText => "txt",
            Self::Rtf => "rtf",
            Self::VendorArchivedData { extension, .. } => extension,
        }
    }

    /// Returns `true` for the archived formats, which can be imported back losslessly.
    pub fn is_archived(&self) -> bool {
        matches!(self, Self::ArchivedData | Self::VendorArchivedData { .. })
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A requested export.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// One of the data formats.
    Data(DataFormat),
    /// Paginated PDF output, which needs a platform layout engine.
    Pdf,
}

impl ExportFormat {
    /// The format identifier.
    pub fn id(&self) -> &str {
        match self {
            Self::Data(format) => format.id(),
            Self::Pdf => "pdf",
        }
    }

    /// The file extension, without a leading dot.
    pub fn extension(&self) -> &str {
        match self {
            Self::Data(format) => format.extension(),
            Self::Pdf => "pdf",
        }
    }
}

impl From<DataFormat> for ExportFormat {
    fn from(format: DataFormat) -> Self {
        Self::Data(format)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Encodes flattened documents.
///
/// Implementations report formats they cannot produce with
/// [`ErrorKind::UnsupportedOperation`](crate::ErrorKind::UnsupportedOperation). An export never
/// changes the document it was taken from.
pub trait Exporter {
    /// Encodes `text` in `format`.
    fn export(
        &self,
        text: &AttributedString<AttributeSet>,
        format: &ExportFormat,
    ) -> Result<Vec<u8>, Error>;
}

/// The built-in exporter for plain text, archived data and RTF.
///
/// PDF export is rejected. RTF output materializes each run, so the exporter carries a
/// [`MaterializeContext`] for the base font and font resolution.
///
/// ```
/// use rich_text::{Document, DataFormat, ExportFormat, Exporter, RichTextConfig, StandardExporter};
///
/// let document = Document::from_json(r#"{"spans":[{"insert":"Hi\n"}]}"#).unwrap();
/// let config = RichTextConfig::default();
/// let exporter = StandardExporter::new(config.context());
///
/// let bytes = exporter
///     .export(&document.flatten(), &DataFormat::PlainText.into())
///     .unwrap();
/// assert_eq!(bytes, b"Hi\n");
/// assert!(exporter.export(&document.flatten(), &ExportFormat::Pdf).is_err());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct StandardExporter<'a, R: FontResolver> {
    ctx: MaterializeContext<'a, R>,
}

impl<'a, R: FontResolver> StandardExporter<'a, R> {
    /// Creates an exporter.
    pub fn new(ctx: MaterializeContext<'a, R>) -> Self {
        Self { ctx }
    }
}

impl<R: FontResolver> Exporter for StandardExporter<'_, R> {
    fn export(
        &self,
        text: &AttributedString<AttributeSet>,
        format: &ExportFormat,
    ) -> Result<Vec<u8>, Error> {
        let result = match format {
            ExportFormat::Data(DataFormat::PlainText) => plain::encode(text),
            ExportFormat::Data(data) if data.is_archived() => archive::encode(text, data),
            ExportFormat::Data(DataFormat::Rtf) => Ok(rtf::encode(text, self.ctx)),
            ExportFormat::Data(_) | ExportFormat::Pdf => Err(Error::unsupported(format.clone())),
        };
        match &result {
            Ok(bytes) => log::trace!("exported {} bytes as {format}", bytes.len()),
            Err(err) => log::warn!("export as {format} failed: {err}"),
        }
        result
    }
}

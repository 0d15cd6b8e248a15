// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use attributed_string::AttributedString;
use serde::{Deserialize, Serialize};

use crate::{AttributeSet, DataFormat, Document, Error, RichTextRecord};

/// The archive layout version written by this crate.
pub const ARCHIVE_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Archive {
    format: String,
    version: u32,
    document: RichTextRecord,
}

/// Archives the runs of `text` as versioned JSON, tagged with the format id.
pub(crate) fn encode(
    text: &AttributedString<AttributeSet>,
    format: &DataFormat,
) -> Result<Vec<u8>, Error> {
    let archive = Archive {
        format: String::from(format.id()),
        version: ARCHIVE_VERSION,
        document: RichTextRecord::from_attributed(text)?,
    };
    serde_json::to_vec(&archive).map_err(|err| Error::invalid_data(format!("{err}")))
}

impl Document {
    /// Restores a document from [`DataFormat::ArchivedData`] or vendor archived bytes.
    ///
    /// Archives written by a newer layout version are rejected.
    pub fn from_archived_data(bytes: &[u8]) -> Result<Self, Error> {
        let archive: Archive = serde_json::from_slice(bytes).map_err(|err| {
            log::warn!("malformed rich text archive: {err}");
            Error::invalid_data(format!("{err}"))
        })?;
        if archive.version > ARCHIVE_VERSION {
            return Err(Error::invalid_data(format!(
                "archive version {} is newer than {ARCHIVE_VERSION}",
                archive.version
            )));
        }
        log::trace!("restoring {} archive", archive.format);
        Self::from_rich_text(&archive.document)
    }
}

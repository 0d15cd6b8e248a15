// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use attributed_string::{AttributedString, Utf16String};

use crate::{AttributeSet, Error};

/// Encodes the text as UTF-8, dropping attributes.
///
/// An unpaired surrogate has no UTF-8 form; the error names the run that contains it.
pub(crate) fn encode(text: &AttributedString<AttributeSet>) -> Result<Vec<u8>, Error> {
    match text.text().to_utf8() {
        Ok(utf8) => Ok(utf8.into_bytes()),
        Err(offset) => {
            let units = text.text().as_units();
            let fragment = text
                .runs()
                .iter()
                .find(|run| run.range.contains(&offset))
                .map(|run| Utf16String::from(&units[run.range.clone()]).to_string_lossy())
                .unwrap_or_default();
            Err(Error::encoding_failure(fragment, offset))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::encode;
    use crate::{AttributeSet, Document, ErrorKind, Span};
    use alloc::vec;
    use attributed_string::Utf16String;
    use rich_text_primitives::RichTextStyle;

    #[test]
    fn attributes_are_dropped() {
        let document = Document::from_spans(vec![
            Span::new("H", AttributeSet::new().with_style(RichTextStyle::Bold, true)),
            Span::new("é\n", AttributeSet::new()),
        ]);
        assert_eq!(encode(&document.flatten()).unwrap(), "Hé\n".as_bytes());
    }

    #[test]
    fn unpaired_surrogate_names_its_run() {
        let document = Document::from_spans(vec![
            Span::new("ok ", AttributeSet::new()),
            Span::new(Utf16String::from_units(vec![0x62, 0xDC00, 0x63]), AttributeSet::new()),
        ]);
        let err = encode(&document.flatten()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EncodingFailure);
        assert_eq!(err.offset(), Some(4));
        assert_eq!(err.fragment(), Some("b\u{FFFD}c"));
    }
}

// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use attributed_string::{AttributedString, Utf16String};
use rich_text_primitives::{Color, HeaderLevel, RichTextAlignment, RichTextColor};
use serde::{Deserialize, Serialize};

use crate::{AttributeKey, AttributeSet, Document, Error, Span};

/// A rich text document as an ordered list of "insert text with attributes" records.
///
/// This is the interchange form: it decodes into a [`Document`] with one span per record, and a
/// document encodes back with the same span boundaries and attributes.
///
/// ```
/// use rich_text::Document;
///
/// let json = r#"{"spans":[{"insert":"Hi ","attributes":{"bold":true}},{"insert":"there"}]}"#;
/// let document = Document::from_json(json).unwrap();
/// assert!(document.spans()[0].attributes.is_bold());
/// assert_eq!(document.to_json().unwrap(), json);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RichTextRecord {
    /// The spans, in document order.
    pub spans: Vec<SpanRecord>,
}

/// One span of a [`RichTextRecord`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpanRecord {
    /// The span's text.
    pub insert: String,
    /// The span's attributes.
    #[serde(default, skip_serializing_if = "AttributesRecord::is_empty")]
    pub attributes: AttributesRecord,
}

/// The attributes of a [`SpanRecord`].
///
/// Colors are hex strings, alignment is an alignment id and the header is its level (`1` to
/// `6`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AttributesRecord {
    /// Bold flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    /// Italic flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    /// Underline flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    /// Strikethrough flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike: Option<bool>,
    /// Font family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    /// Font size in points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
    /// Text color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Background color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Stroke color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<String>,
    /// Underline color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline_color: Option<String>,
    /// Strikethrough color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike_color: Option<String>,
    /// Alignment id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    /// Header level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<u8>,
}

const COLOR_FIELDS: [RichTextColor; 5] = [
    RichTextColor::Foreground,
    RichTextColor::Background,
    RichTextColor::Stroke,
    RichTextColor::Underline,
    RichTextColor::Strikethrough,
];

impl AttributesRecord {
    /// Returns `true` if no attribute is present.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn color_field(&self, role: RichTextColor) -> Option<&String> {
        match role {
            RichTextColor::Foreground => self.color.as_ref(),
            RichTextColor::Background => self.background.as_ref(),
            RichTextColor::Stroke => self.stroke_color.as_ref(),
            RichTextColor::Underline => self.underline_color.as_ref(),
            RichTextColor::Strikethrough => self.strike_color.as_ref(),
        }
    }

    fn color_field_mut(&mut self, role: RichTextColor) -> &mut Option<String> {
        match role {
            RichTextColor::Foreground => &mut self.color,
            RichTextColor::Background => &mut self.background,
            RichTextColor::Stroke => &mut self.stroke_color,
            RichTextColor::Underline => &mut self.underline_color,
            RichTextColor::Strikethrough => &mut self.strike_color,
        }
    }

    /// Converts to an [`AttributeSet`], rejecting malformed colors, alignments and headers.
    pub fn to_attribute_set(&self) -> Result<AttributeSet, Error> {
        let mut set = AttributeSet::new();
        let flags = [
            (AttributeKey::Bold, self.bold),
            (AttributeKey::Italic, self.italic),
            (AttributeKey::Underline, self.underline),
            (AttributeKey::Strikethrough, self.strike),
        ];
        for (key, flag) in flags {
            if let Some(flag) = flag {
                set = set.with(key, flag);
            }
        }
        if let Some(font) = &self.font {
            set = set.with_font_name(font.as_str());
        }
        if let Some(size) = self.size {
            set = set.with_font_size(size);
        }
        for role in COLOR_FIELDS {
            if let Some(hex) = self.color_field(role) {
                let color = Color::from_hex(hex)
                    .ok_or_else(|| bad_value(role.id(), hex))?;
                set = set.with_color(role, color);
            }
        }
        if let Some(align) = &self.align {
            let alignment =
                RichTextAlignment::parse(align).ok_or_else(|| bad_value("align", align))?;
            set = set.with_alignment(alignment);
        }
        if let Some(level) = self.header {
            let header = HeaderLevel::from_level(level)
                .ok_or_else(|| bad_value("header", &format!("{level}")))?;
            set = set.with_header(header);
        }
        Ok(set)
    }

    /// Converts from an [`AttributeSet`].
    ///
    /// Values stored with a mismatched type are dropped.
    pub fn from_attribute_set(set: &AttributeSet) -> Self {
        let flag = |key| set.get(key).and_then(|value| value.as_bool());
        let mut record = Self {
            bold: flag(AttributeKey::Bold),
            italic: flag(AttributeKey::Italic),
            underline: flag(AttributeKey::Underline),
            strike: flag(AttributeKey::Strikethrough),
            font: set.font_name().map(String::from),
            size: set.font_size(),
            align: set.alignment().map(|alignment| String::from(alignment.id())),
            header: set.header().map(HeaderLevel::level),
            ..Self::default()
        };
        for role in COLOR_FIELDS {
            *record.color_field_mut(role) = set.color(role).map(|color| format!("{color}"));
        }
        record
    }
}

fn bad_value(field: &str, value: &str) -> Error {
    log::warn!("rejecting rich text record: invalid {field} value {value:?}");
    Error::invalid_data(format!("invalid {field} value {value:?}"))
}

impl SpanRecord {
    fn from_span(text: &Utf16String, attributes: &AttributeSet) -> Result<Self, Error> {
        let insert = text.to_utf8().map_err(|offset| {
            Error::encoding_failure(text.to_string_lossy(), offset)
        })?;
        Ok(Self {
            insert,
            attributes: AttributesRecord::from_attribute_set(attributes),
        })
    }
}

impl RichTextRecord {
    /// Encodes the runs of a flattened document, one record per run.
    pub fn from_attributed(text: &AttributedString<AttributeSet>) -> Result<Self, Error> {
        let units = text.text().as_units();
        let spans = text
            .runs()
            .iter()
            .map(|run| {
                let text = Utf16String::from(&units[run.range.clone()]);
                SpanRecord::from_span(&text, &run.attributes)
                    .map_err(|err| shift_offset(err, run.range.start))
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { spans })
    }
}

/// Reports an encoding failure at a document offset rather than a span offset.
fn shift_offset(err: Error, by: usize) -> Error {
    match (err.fragment(), err.offset()) {
        (Some(fragment), Some(offset)) => Error::encoding_failure(fragment.into(), offset + by),
        _ => err,
    }
}

impl Document {
    /// Decodes a document from interchange records, one span per record.
    pub fn from_rich_text(record: &RichTextRecord) -> Result<Self, Error> {
        let spans = record
            .spans
            .iter()
            .map(|span| {
                span.attributes
                    .to_attribute_set()
                    .map(|attributes| Span::new(span.insert.as_str(), attributes))
            })
            .collect::<Result<Vec<_>, Error>>()?;
        Ok(Self::from_spans(spans))
    }

    /// Encodes the document as interchange records, one record per span.
    ///
    /// Fails with [`ErrorKind::EncodingFailure`](crate::ErrorKind::EncodingFailure) if a span
    /// contains an unpaired surrogate.
    pub fn to_rich_text(&self) -> Result<RichTextRecord, Error> {
        let mut offset = 0;
        let mut spans = Vec::with_capacity(self.spans().len());
        for span in self.spans() {
            spans.push(
                SpanRecord::from_span(&span.text, &span.attributes)
                    .map_err(|err| shift_offset(err, offset))?,
            );
            offset += span.len();
        }
        Ok(RichTextRecord { spans })
    }

    /// Decodes a document from interchange JSON.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let record: RichTextRecord = serde_json::from_str(json).map_err(|err| {
            log::warn!("malformed rich text JSON: {err}");
            Error::invalid_data(format!("{err}"))
        })?;
        Self::from_rich_text(&record)
    }

    /// Encodes the document as interchange JSON.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(&self.to_rich_text()?)
            .map_err(|err| Error::invalid_data(format!("{err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::{AttributesRecord, RichTextRecord, SpanRecord};
    use crate::{AttributeKey, AttributeSet, Document, ErrorKind, Span};
    use alloc::string::String;
    use alloc::vec;
    use attributed_string::Utf16String;
    use rich_text_primitives::{Color, HeaderLevel, RichTextAlignment, RichTextColor};

    #[test]
    fn every_attribute_round_trips() {
        let set = AttributeSet::new()
            .with(AttributeKey::Bold, true)
            .with(AttributeKey::Italic, false)
            .with(AttributeKey::Underline, true)
            .with(AttributeKey::Strikethrough, true)
            .with_font_name("Georgia")
            .with_font_size(13.5)
            .with_color(RichTextColor::Foreground, Color::rgb(0x11, 0x22, 0x33))
            .with_color(RichTextColor::Background, Color::rgba(1, 2, 3, 4))
            .with_color(RichTextColor::Stroke, Color::BLACK)
            .with_color(RichTextColor::Underline, Color::WHITE)
            .with_color(RichTextColor::Strikethrough, Color::rgb(9, 9, 9))
            .with_alignment(RichTextAlignment::Justify)
            .with_header(HeaderLevel::H3);
        let record = AttributesRecord::from_attribute_set(&set);
        assert_eq!(record.color.as_deref(), Some("#112233"));
        assert_eq!(record.header, Some(3));
        assert_eq!(record.to_attribute_set().unwrap(), set);
    }

    #[test]
    fn json_round_trip_keeps_span_boundaries() {
        let document = Document::from_spans(vec![
            Span::new("Hello", AttributeSet::new().with_header(HeaderLevel::H1)),
            Span::new(" ", AttributeSet::new()),
            Span::new("wörld 😀", AttributeSet::new().with_font_size(20.0)),
        ]);
        let json = document.to_json().unwrap();
        let decoded = Document::from_json(&json).unwrap();
        assert_eq!(decoded, document);
    }

    #[test]
    fn field_names() {
        let json = r##"{"spans":[{"insert":"x","attributes":{"strike":true,"strikeColor":"#ff0000","align":"center","header":2}}]}"##;
        let document = Document::from_json(json).unwrap();
        let attributes = &document.spans()[0].attributes;
        assert!(attributes.is_strikethrough());
        assert_eq!(
            attributes.color(RichTextColor::Strikethrough),
            Some(Color::rgb(255, 0, 0))
        );
        assert_eq!(attributes.alignment(), Some(RichTextAlignment::Center));
        assert_eq!(attributes.header(), Some(HeaderLevel::H2));
        assert_eq!(document.to_json().unwrap(), json);
    }

    #[test]
    fn malformed_values_are_rejected() {
        for json in [
            r#"{"spans":[{"insert":"x","attributes":{"color":"red"}}]}"#,
            r#"{"spans":[{"insert":"x","attributes":{"align":"middle"}}]}"#,
            r#"{"spans":[{"insert":"x","attributes":{"header":7}}]}"#,
            r#"{"spans":[{"insert":1}]}"#,
            "not json",
        ] {
            let err = Document::from_json(json).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidData, "{json}");
        }
    }

    #[test]
    fn unpaired_surrogates_cannot_be_encoded() {
        let document = Document::from_spans(vec![
            Span::new("ab", AttributeSet::new()),
            Span::new(Utf16String::from_units(vec![0x63, 0xD800]), AttributeSet::new()),
        ]);
        let err = document.to_rich_text().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EncodingFailure);
        assert_eq!(err.offset(), Some(3));
        assert_eq!(err.fragment(), Some("c\u{FFFD}"));

        let err = RichTextRecord::from_attributed(&document.flatten()).unwrap_err();
        assert_eq!(err.offset(), Some(3));
    }

    #[test]
    fn empty_attributes_are_omitted() {
        let record = RichTextRecord {
            spans: vec![SpanRecord {
                insert: String::from("plain"),
                attributes: AttributesRecord::default(),
            }],
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"spans":[{"insert":"plain"}]}"#
        );
    }
}

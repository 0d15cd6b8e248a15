// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use attributed_string::{paragraph_range, Selection, Utf16String};
use rich_text_primitives::{
    Font, FontBook, FontDescriptor, HeaderLevel, RichTextAlignment, RichTextStyle, StyleSet,
};

use crate::materialize::{materialize, materialize_string};
use crate::{
    resolve, AttributeKey, AttributeSet, DataFormat, Document, EditingSession, ErrorKind,
    ExportFormat, Exporter, RichTextConfig, Span, StandardExporter,
};

fn bold() -> AttributeSet {
    AttributeSet::new().with_style(RichTextStyle::Bold, true)
}

fn italic() -> AttributeSet {
    AttributeSet::new().with_style(RichTextStyle::Italic, true)
}

/// A document exercising empty spans, surrogate pairs and newlines.
fn sample() -> Document {
    Document::from_spans(vec![
        Span::new("Héllo ", AttributeSet::new()),
        Span::new("", bold()),
        Span::new("wörld 😀", bold()),
        Span::new("\n", AttributeSet::new()),
        Span::new("second", italic().with_font_size(20.0)),
        Span::new("", italic()),
    ])
}

/// Reference lookup: the span covering `offset`, or the last non-empty span at the end.
fn span_attributes_at(document: &Document, offset: usize) -> &AttributeSet {
    let mut start = 0;
    let mut last = None;
    for span in document.spans().iter().filter(|span| !span.is_empty()) {
        if offset < start + span.len() {
            return &span.attributes;
        }
        start += span.len();
        last = Some(&span.attributes);
    }
    last.unwrap()
}

#[test]
fn flatten_covers_the_text_exactly() {
    let document = sample();
    let flat = document.flatten();
    let expected_len: usize = document.spans().iter().map(Span::len).sum();
    assert_eq!(flat.len(), expected_len);

    let mut covered = 0;
    for run in flat.runs() {
        assert_eq!(run.range.start, covered);
        assert!(run.range.end > run.range.start);
        covered = run.range.end;
    }
    assert_eq!(covered, flat.len());
    assert_eq!(flat.text(), &document.text());
}

#[test]
fn round_trip_preserves_attributes_per_offset() {
    let document = sample();
    let decoded = Document::from_json(&document.to_json().unwrap()).unwrap();
    let flat = decoded.flatten();
    for offset in 0..flat.len() {
        let Ok(Some(attributes)) = flat.attributes_at(offset) else {
            // Offsets inside a surrogate pair are not valid carets.
            continue;
        };
        assert_eq!(attributes, span_attributes_at(&document, offset), "at {offset}");
    }
    assert_eq!(decoded, document);
}

#[test]
fn toggle_is_idempotent_over_a_document() {
    let config = RichTextConfig::default();
    let ctx = config.context();
    let mut document = sample();
    let selection = Selection::new(0, 12);

    let current = |document: &Document| {
        let flat = materialize_string(&document.flatten(), ctx);
        let overlapping = flat.attributes_overlapping(selection).unwrap();
        resolve::active_styles(overlapping)
    };

    assert!(resolve::should_toggle(current(&document), RichTextStyle::Bold, true));
    document
        .set_style(selection.as_range(), RichTextStyle::Bold, true)
        .unwrap();
    assert!(!resolve::should_toggle(current(&document), RichTextStyle::Bold, true));
}

#[test]
fn one_differing_offset_turns_a_style_off() {
    let config = RichTextConfig::default();
    let mut document = Document::from_spans(vec![Span::new("abcdef", AttributeSet::new())]);
    document
        .set_style(0..6, RichTextStyle::Underline, true)
        .unwrap();
    document
        .set_style(3..4, RichTextStyle::Underline, false)
        .unwrap();

    let flat = materialize_string(&document.flatten(), config.context());
    let styles = |selection: Selection| {
        let overlapping = flat.attributes_overlapping(selection).unwrap();
        resolve::active_styles(overlapping)
    };
    assert_eq!(styles(Selection::new(0, 3)), StyleSet::UNDERLINE);
    assert_eq!(styles(Selection::new(4, 2)), StyleSet::UNDERLINE);
    assert_eq!(styles(Selection::new(0, 6)), StyleSet::empty());
    assert_eq!(styles(Selection::new(2, 2)), StyleSet::empty());
}

#[test]
fn paragraph_range_of_a_caret_inside_a_line() {
    let text = Utf16String::from("Hello\nWorld\n");
    let range = paragraph_range(&text, Selection::caret(7)).unwrap();
    assert_eq!(range.as_range(), 6..11);

    let document = Document::from_spans(vec![
        Span::new("Hello\nWo", AttributeSet::new()),
        Span::new("rld\n", bold()),
    ]);
    assert_eq!(
        paragraph_range(&document, Selection::caret(7)).unwrap().as_range(),
        6..11
    );
}

#[test]
fn caret_at_end_reports_the_last_character() {
    let document = Document::from_spans(vec![Span::new("AB", bold())]);
    let flat = document.flatten();
    assert_eq!(flat.attributes_at(2).unwrap(), Some(&bold()));
}

#[test]
fn explicit_size_beats_header_scaling() {
    let config = RichTextConfig::new(FontBook::new(), FontDescriptor::new("Helvetica", 14.0));
    let attributes = AttributeSet::new()
        .with_header(HeaderLevel::H1)
        .with_font_size(20.0);
    let native = materialize(&attributes, config.context());
    assert_eq!(native.font.point_size(), 20.0);

    let header_only = AttributeSet::new().with_header(HeaderLevel::H1);
    assert_eq!(
        materialize(&header_only, config.context()).font.point_size(),
        21.0
    );
}

#[test]
fn plain_text_export_and_unsupported_formats() {
    let config = RichTextConfig::default();
    let exporter = StandardExporter::new(config.context());
    let document = Document::from_spans(vec![
        Span::new("H", bold()),
        Span::new("i\n", AttributeSet::new()),
    ]);
    let flat = document.flatten();

    let bytes = exporter
        .export(&flat, &DataFormat::PlainText.into())
        .unwrap();
    assert_eq!(bytes, b"Hi\n");

    let err = exporter.export(&flat, &ExportFormat::Pdf).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
    assert_eq!(err.format(), Some(&ExportFormat::Pdf));
}

#[test]
fn empty_document_edge_cases() {
    let document = Document::new();
    let range = paragraph_range(&document, Selection::new(0, 0)).unwrap();
    assert_eq!(range.as_selection(), Selection::new(0, 0));
    assert_eq!(document.flatten().attributes_at(0).unwrap(), None);

    let config = RichTextConfig::default();
    let exporter = StandardExporter::new(config.context());
    let bytes = exporter
        .export(&document.flatten(), &DataFormat::PlainText.into())
        .unwrap();
    assert!(bytes.is_empty());
}

#[test]
fn export_never_changes_the_document() {
    let config = RichTextConfig::default();
    let exporter = StandardExporter::new(config.context());
    let mut document = sample();
    document.push(Span::new(Utf16String::from_units(vec![0xD800]), bold()));
    let before = document.clone();

    let err = exporter
        .export(&document.flatten(), &DataFormat::PlainText.into())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EncodingFailure);
    assert_eq!(err.offset(), Some(document.flatten().len() - 1));
    assert_eq!(document, before);
}

#[test]
fn every_data_format_exports_the_sample() {
    let config = RichTextConfig::new(
        FontBook::with_families(["Georgia"]),
        FontDescriptor::standard(),
    );
    let exporter = StandardExporter::new(config.context());
    let flat = sample().flatten();
    for format in DataFormat::STANDARD {
        let bytes = exporter.export(&flat, &format.clone().into()).unwrap();
        assert!(!bytes.is_empty(), "{format}");
        if format.is_archived() {
            let restored = Document::from_archived_data(&bytes).unwrap();
            assert_eq!(restored.flatten(), flat);
        }
    }
}

#[test]
fn editing_session_scenario() {
    let config = RichTextConfig::default();
    let mut session = EditingSession::new(Document::new(), config.context());

    session.set_header(Some(HeaderLevel::H2)).unwrap();
    session.replace_selection("Notes\n").unwrap();
    session.set_header(None).unwrap();
    session.toggle_style(RichTextStyle::Bold).unwrap();
    session.replace_selection("Remember").unwrap();
    session.toggle_style(RichTextStyle::Bold).unwrap();
    session.replace_selection(" milk").unwrap();

    session.set_selection(Selection::caret(8)).unwrap();
    session.set_alignment(RichTextAlignment::Center).unwrap();

    let mut document = session.into_document();
    document.normalize();
    let summary: Vec<(String, bool, Option<HeaderLevel>)> = document
        .spans()
        .iter()
        .map(|span| {
            (
                span.text.to_string_lossy(),
                span.attributes.is_bold(),
                span.attributes.header(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        [
            (String::from("Notes\n"), false, Some(HeaderLevel::H2)),
            (String::from("Remember"), true, None),
            (String::from(" milk"), false, None),
        ]
    );
    let flat = document.flatten();
    assert_eq!(
        flat.attributes_at(6).unwrap().unwrap().alignment(),
        Some(RichTextAlignment::Center)
    );
    assert_eq!(flat.attributes_at(0).unwrap().unwrap().alignment(), None);
    assert!(
        !flat
            .attributes_at(0)
            .unwrap()
            .unwrap()
            .contains(AttributeKey::Bold)
    );
}

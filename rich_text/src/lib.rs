// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Span-based rich text documents built on [`attributed_string`].
//!
//! - [`rich_text_primitives`] defines the closed formatting vocabulary.
//! - [`attributed_string`] stores the flat form: UTF-16 text plus contiguous attribute runs.
//! - `rich_text` combines them:
//!   - [`AttributeSet`]: an immutable key → value map describing how a span renders
//!   - [`Document`]: an ordered sequence of [`Span`]s, the unit of storage and editing
//!   - [`materialize`]: lowers an [`AttributeSet`] to [`NativeAttributes`] (a resolved font,
//!     style flags, colors and paragraph attributes)
//!   - [`resolve`]: computes which styles are active over a selection, and whether a toggle
//!     would change anything
//!   - [`EditingSession`]: a single-writer editor over one document with a selection and
//!     typing attributes
//!   - [`export`]: plain text, archived data and RTF encoders behind the [`Exporter`] seam
//!
//! ## Indices
//!
//! All offsets are **UTF-16 code unit** offsets. Ranges and selections are validated against
//! the document before any mutation happens; an invalid range is reported as
//! [`ErrorKind::InvalidRange`] and leaves the document untouched.
//!
//! ## Configuration
//!
//! There is no global state. The standard font and the font resolver live in a
//! [`RichTextConfig`], built once by the embedder and lent out as a [`MaterializeContext`].
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//!
//! ## Example
//!
//! ```
//! use rich_text::{AttributeSet, Document, RichTextConfig, Span, materialize, resolve};
//! use rich_text_primitives::{HeaderLevel, RichTextStyle};
//! use attributed_string::Selection;
//!
//! let mut document = Document::new();
//! document.push(Span::new("Title\n", AttributeSet::new().with_header(HeaderLevel::H1)));
//! document.push(Span::new("Body", AttributeSet::new()));
//! document.set_style(0..5, RichTextStyle::Bold, true).unwrap();
//!
//! let config = RichTextConfig::default();
//! let flat = document.flatten();
//! let native = materialize::materialize_string(&flat, config.context());
//!
//! let title = native.attributes_overlapping(Selection::new(0, 5)).unwrap();
//! assert!(resolve::active_styles(title).has_style(RichTextStyle::Bold));
//! let all = native.attributes_overlapping(Selection::new(0, 10)).unwrap();
//! assert!(!resolve::active_styles(all).has_style(RichTextStyle::Bold));
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod attributes;
mod config;
mod document;
mod error;
mod interchange;
mod session;
mod span;
mod traits;

pub mod export;
pub mod materialize;
pub mod resolve;

#[cfg(test)]
mod tests;

pub use attributes::{AttributeKey, AttributeSet, AttributeValue};
pub use config::{MaterializeContext, RichTextConfig};
pub use document::Document;
pub use error::{Error, ErrorKind};
pub use export::{DataFormat, ExportFormat, Exporter, StandardExporter};
pub use interchange::{AttributesRecord, RichTextRecord, SpanRecord};
pub use materialize::{NativeAttributes, ParagraphAttributes};
pub use session::EditingSession;
pub use span::Span;
pub use traits::StyleSource;

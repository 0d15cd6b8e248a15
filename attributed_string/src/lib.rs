// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attributed String is the flat form of rich text: a UTF-16 string plus a list of contiguous,
//! non-overlapping attribute ranges covering it.
//!
//! All offsets are **UTF-16 code unit** offsets, the index space of the native text APIs this
//! crate interoperates with. A character outside the Basic Multilingual Plane occupies two code
//! units, and no valid offset may point between them.
//!
//! - [`Utf16String`] and the [`TextStorage`] trait describe the text.
//! - [`TextRange`] and [`Selection`] are validated and caller-owned index types.
//! - [`AttributedString`] answers "which attributes apply here?" for a caret or a selection.
//! - [`paragraph_range`] finds the newline-delimited paragraph enclosing a selection.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//!
//! ## Example
//!
//! ```
//! use attributed_string::{AttributedStringBuilder, Selection};
//!
//! let mut builder = AttributedStringBuilder::new();
//! builder.push_str("Hello ", "plain");
//! builder.push_str("world", "bold");
//! let text = builder.finish();
//!
//! assert_eq!(text.attributes_at(3).unwrap(), Some(&"plain"));
//! // A caret at the end reports the attributes before it.
//! assert_eq!(text.attributes_at(11).unwrap(), Some(&"bold"));
//!
//! let overlapping = text.attributes_overlapping(Selection::new(4, 4)).unwrap();
//! assert_eq!(overlapping.as_slice(), &[&"plain", &"bold"]);
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

mod attributed_string;
mod error;
mod paragraph;
mod selection;
mod text_range;
mod text_storage;
mod utf16;

pub use crate::attributed_string::{
    AttributeRange, AttributedString, AttributedStringBuilder, Overlapping,
};
pub use crate::error::{Endpoint, Error, ErrorKind, SurrogateSplit};
pub use crate::paragraph::paragraph_range;
pub use crate::selection::Selection;
pub use crate::text_range::TextRange;
pub use crate::text_storage::TextStorage;
pub use crate::utf16::Utf16String;

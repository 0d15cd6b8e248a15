// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fundamental rich text formatting types.
//!
//! This crate is the leaf vocabulary shared by the attributed string layer and the rich text
//! document model. It only contains plain data: closed enumerations for character styles,
//! paragraph alignment, color roles and header levels, a small sRGB [`Color`] value, and the
//! [`Font`] capability that platform font adapters implement.
//!
//! Presentation metadata such as icons and localized titles lives elsewhere, and nothing here
//! depends on a UI toolkit.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//!
//! ## Example
//!
//! ```
//! use rich_text_primitives::{Color, FontTraits, HeaderLevel, RichTextStyle};
//!
//! assert_eq!(RichTextStyle::parse("bold"), Some(RichTextStyle::Bold));
//! assert_eq!(RichTextStyle::Bold.symbolic_trait(), Some(FontTraits::BOLD));
//! assert_eq!(HeaderLevel::H1.font_size_multiplier(), 1.5);
//!
//! let red = Color::from_hex("#ff0000").unwrap();
//! assert_eq!(red, Color::rgb(255, 0, 0));
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

mod alignment;
mod color;
mod font;
mod header;
mod style;

pub use alignment::RichTextAlignment;
pub use color::{Color, RichTextColor};
pub use font::{Font, FontBook, FontDescriptor, FontResolver, FontTraits, STANDARD_FONT_SIZE};
pub use header::HeaderLevel;
pub use style::{RichTextStyle, StyleSet};

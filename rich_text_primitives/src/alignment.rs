// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Horizontal alignment of a paragraph.
///
/// Alignment is a paragraph-level attribute: it always applies to whole paragraphs, never to
/// individual characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum RichTextAlignment {
    /// Align lines to the left edge.
    #[default]
    Left,
    /// Center lines.
    Center,
    /// Stretch lines to fill the available width.
    Justify,
    /// Align lines to the right edge.
    Right,
}

impl RichTextAlignment {
    /// All alignments, in toolbar order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Center, Self::Justify, Self::Right];

    /// Returns the stable identifier for this alignment.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Justify => "justify",
            Self::Right => "right",
        }
    }

    /// Parses an alignment from its identifier.
    ///
    /// ```
    /// use rich_text_primitives::RichTextAlignment;
    ///
    /// assert_eq!(RichTextAlignment::parse("center"), Some(RichTextAlignment::Center));
    /// assert_eq!(RichTextAlignment::parse("justified"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|align| align.id() == s.trim())
    }
}

impl fmt::Display for RichTextAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

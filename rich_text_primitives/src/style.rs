// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::FontTraits;

/// A character style that can be toggled on a run of text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RichTextStyle {
    /// Heavier glyphs, carried as a symbolic font trait.
    Bold,
    /// Slanted glyphs, carried as a symbolic font trait.
    Italic,
    /// A line below the text, carried as a style flag.
    Underline,
    /// A line through the text, carried as a style flag.
    Strikethrough,
}

impl RichTextStyle {
    /// All styles, in toolbar order.
    pub const ALL: [Self; 4] = [Self::Bold, Self::Italic, Self::Underline, Self::Strikethrough];

    /// Returns the stable identifier for this style.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Strikethrough => "strikethrough",
        }
    }

    /// Parses a style from its identifier.
    ///
    /// ```
    /// use rich_text_primitives::RichTextStyle;
    ///
    /// assert_eq!(RichTextStyle::parse("italic"), Some(RichTextStyle::Italic));
    /// assert_eq!(RichTextStyle::parse(" underline "), Some(RichTextStyle::Underline));
    /// assert_eq!(RichTextStyle::parse("Bold"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.id() == s.trim())
    }

    /// Returns the symbolic font trait that expresses this style, if any.
    ///
    /// Underline and strikethrough are not font traits; they are style flags applied on top of
    /// the font.
    pub const fn symbolic_trait(self) -> Option<FontTraits> {
        match self {
            Self::Bold => Some(FontTraits::BOLD),
            Self::Italic => Some(FontTraits::ITALIC),
            Self::Underline | Self::Strikethrough => None,
        }
    }
}

impl fmt::Display for RichTextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

bitflags::bitflags! {
    /// A set of [`RichTextStyle`] values.
    ///
    /// Intersecting two sets (`a & b`) keeps the styles that are on in both, which is how a
    /// selection spanning differently styled runs reports its state.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct StyleSet: u8 {
        /// [`RichTextStyle::Bold`].
        const BOLD = 1 << 0;
        /// [`RichTextStyle::Italic`].
        const ITALIC = 1 << 1;
        /// [`RichTextStyle::Underline`].
        const UNDERLINE = 1 << 2;
        /// [`RichTextStyle::Strikethrough`].
        const STRIKETHROUGH = 1 << 3;
    }
}

impl StyleSet {
    /// Returns `true` if `style` is in the set.
    pub fn has_style(self, style: RichTextStyle) -> bool {
        self.contains(style.into())
    }

    /// Adds or removes `style`.
    pub fn set_style(&mut self, style: RichTextStyle, on: bool) {
        self.set(style.into(), on);
    }

    /// Iterates over the styles in the set, in [`RichTextStyle::ALL`] order.
    pub fn styles(self) -> impl Iterator<Item = RichTextStyle> {
        RichTextStyle::ALL
            .into_iter()
            .filter(move |style| self.has_style(*style))
    }
}

impl From<RichTextStyle> for StyleSet {
    fn from(style: RichTextStyle) -> Self {
        match style {
            RichTextStyle::Bold => Self::BOLD,
            RichTextStyle::Italic => Self::ITALIC,
            RichTextStyle::Underline => Self::UNDERLINE,
            RichTextStyle::Strikethrough => Self::STRIKETHROUGH,
        }
    }
}

impl FromIterator<RichTextStyle> for StyleSet {
    fn from_iter<I: IntoIterator<Item = RichTextStyle>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, style| set | style.into())
    }
}

#[cfg(test)]
mod tests {
    use super::{RichTextStyle, StyleSet};
    use crate::FontTraits;
    use alloc::vec::Vec;

    #[test]
    fn ids_round_trip() {
        for style in RichTextStyle::ALL {
            assert_eq!(RichTextStyle::parse(style.id()), Some(style));
        }
        assert_eq!(RichTextStyle::parse("strike"), None);
    }

    #[test]
    fn only_bold_and_italic_are_traits() {
        assert_eq!(RichTextStyle::Bold.symbolic_trait(), Some(FontTraits::BOLD));
        assert_eq!(
            RichTextStyle::Italic.symbolic_trait(),
            Some(FontTraits::ITALIC)
        );
        assert_eq!(RichTextStyle::Underline.symbolic_trait(), None);
        assert_eq!(RichTextStyle::Strikethrough.symbolic_trait(), None);
    }

    #[test]
    fn style_set_membership() {
        let mut set: StyleSet = [RichTextStyle::Bold, RichTextStyle::Underline]
            .into_iter()
            .collect();
        assert!(set.has_style(RichTextStyle::Bold));
        assert!(!set.has_style(RichTextStyle::Italic));

        set.set_style(RichTextStyle::Bold, false);
        set.set_style(RichTextStyle::Strikethrough, true);
        let styles: Vec<_> = set.styles().collect();
        assert_eq!(
            styles,
            [RichTextStyle::Underline, RichTextStyle::Strikethrough]
        );
    }

    #[test]
    fn intersection_keeps_common_styles() {
        let a = StyleSet::BOLD | StyleSet::ITALIC;
        let b = StyleSet::BOLD | StyleSet::UNDERLINE;
        assert_eq!(a & b, StyleSet::BOLD);
    }
}

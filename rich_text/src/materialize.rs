// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lowering of [`AttributeSet`]s to the attributes a native text system consumes.
//!
//! Materialization is a fixed, ordered composition:
//!
//! 1. start from the context's base font;
//! 2. scale by the header multiplier, if a header level is set;
//! 3. replace the size with an explicit font size, if set (so an explicit size wins over header
//!    scaling instead of compounding with it);
//! 4. re-resolve the font by family name at the current size, if a family is set, keeping the
//!    previous font when the family is unknown;
//! 5. add the bold and italic symbolic traits;
//! 6. turn underline and strikethrough into line styles;
//! 7. attach the colors that are set, leaving the others to the renderer;
//! 8. emit paragraph attributes for an alignment.

use attributed_string::AttributedString;
use rich_text_primitives::{Color, Font, FontResolver, FontTraits, RichTextAlignment, RichTextColor};

use crate::{AttributeSet, MaterializeContext, StyleSource};

/// A single line, as used by [`NativeAttributes::underline_style`] and
/// [`NativeAttributes::strikethrough_style`].
pub const LINE_STYLE_SINGLE: i32 = 1;

/// Paragraph-level attributes.
///
/// These apply to a whole paragraph (see [`attributed_string::paragraph_range`]), never to a
/// subrange of one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParagraphAttributes {
    /// Horizontal alignment of the paragraph's lines.
    pub alignment: RichTextAlignment,
}

/// The native form of an [`AttributeSet`].
#[derive(Clone, Debug, PartialEq)]
pub struct NativeAttributes<F> {
    /// The resolved font, including bold and italic traits.
    pub font: F,
    /// `1` for a single underline, `0` for none.
    pub underline_style: i32,
    /// `1` for a single strikethrough, `0` for none.
    pub strikethrough_style: i32,
    /// Text color.
    pub foreground: Option<Color>,
    /// Background color.
    pub background: Option<Color>,
    /// Stroke color.
    pub stroke: Option<Color>,
    /// Underline color.
    pub underline_color: Option<Color>,
    /// Strikethrough color.
    pub strikethrough_color: Option<Color>,
    /// Paragraph attributes, present when an alignment is set.
    pub paragraph: Option<ParagraphAttributes>,
}

impl<F> NativeAttributes<F> {
    /// The color attached for `role`, if any.
    pub fn color(&self, role: RichTextColor) -> Option<Color> {
        match role {
            RichTextColor::Foreground => self.foreground,
            RichTextColor::Background => self.background,
            RichTextColor::Stroke => self.stroke,
            RichTextColor::Underline => self.underline_color,
            RichTextColor::Strikethrough => self.strikethrough_color,
        }
    }
}

impl<F: Font> StyleSource for NativeAttributes<F> {
    fn font_traits(&self) -> FontTraits {
        self.font.symbolic_traits()
    }

    fn underline_style(&self) -> i32 {
        self.underline_style
    }

    fn strikethrough_style(&self) -> i32 {
        self.strikethrough_style
    }
}

/// Materializes one attribute set.
pub fn materialize<R: FontResolver>(
    attributes: &AttributeSet,
    ctx: MaterializeContext<'_, R>,
) -> NativeAttributes<R::Font> {
    let mut font = ctx.base_font().clone();

    if let Some(header) = attributes.header() {
        font = font.with_size(font.point_size() * header.font_size_multiplier());
    }
    if let Some(point_size) = attributes.font_size() {
        font = font.with_size(point_size);
    }
    if let Some(family) = attributes.font_name() {
        match ctx.resolver().resolve(family, font.point_size()) {
            Some(resolved) => font = resolved,
            None => log::debug!(
                "font family {family:?} not available, keeping {:?}",
                font.family()
            ),
        }
    }

    let mut traits = FontTraits::empty();
    if attributes.is_bold() {
        traits |= FontTraits::BOLD;
    }
    if attributes.is_italic() {
        traits |= FontTraits::ITALIC;
    }
    if !traits.is_empty() {
        font = font.with_trait(traits);
    }

    let line_style = |on: bool| if on { LINE_STYLE_SINGLE } else { 0 };

    NativeAttributes {
        font,
        underline_style: line_style(attributes.is_underline()),
        strikethrough_style: line_style(attributes.is_strikethrough()),
        foreground: attributes.color(RichTextColor::Foreground),
        background: attributes.color(RichTextColor::Background),
        stroke: attributes.color(RichTextColor::Stroke),
        underline_color: attributes.color(RichTextColor::Underline),
        strikethrough_color: attributes.color(RichTextColor::Strikethrough),
        paragraph: attributes
            .alignment()
            .map(|alignment| ParagraphAttributes { alignment }),
    }
}

/// Materializes every run of a flattened document, keeping the run boundaries.
pub fn materialize_string<R: FontResolver>(
    text: &AttributedString<AttributeSet>,
    ctx: MaterializeContext<'_, R>,
) -> AttributedString<NativeAttributes<R::Font>> {
    text.map_attributes(|attributes| materialize(attributes, ctx))
}

#[cfg(test)]
mod tests {
    use super::{materialize, LINE_STYLE_SINGLE};
    use crate::{AttributeKey, AttributeSet, RichTextConfig};
    use rich_text_primitives::{
        Color, Font, FontBook, FontDescriptor, FontTraits, HeaderLevel, RichTextAlignment,
        RichTextColor,
    };

    fn config(size: f32) -> RichTextConfig<FontBook> {
        RichTextConfig::new(
            FontBook::with_families(["Helvetica", "Georgia"]),
            FontDescriptor::new("Helvetica", size),
        )
    }

    #[test]
    fn empty_set_is_the_base_font() {
        let config = config(14.0);
        let native = materialize(&AttributeSet::new(), config.context());
        assert_eq!(native.font, FontDescriptor::new("Helvetica", 14.0));
        assert_eq!(native.underline_style, 0);
        assert_eq!(native.foreground, None);
        assert_eq!(native.paragraph, None);
    }

    #[test]
    fn header_scales_the_base_size() {
        let config = config(20.0);
        let set = AttributeSet::new().with_header(HeaderLevel::H1);
        assert_eq!(materialize(&set, config.context()).font.point_size(), 30.0);
    }

    #[test]
    fn explicit_size_wins_over_header() {
        let config = config(14.0);
        let set = AttributeSet::new()
            .with_header(HeaderLevel::H1)
            .with_font_size(20.0);
        assert_eq!(materialize(&set, config.context()).font.point_size(), 20.0);
    }

    #[test]
    fn family_is_resolved_at_the_current_size() {
        let config = config(10.0);
        let set = AttributeSet::new()
            .with_header(HeaderLevel::H2)
            .with_font_name("georgia");
        let font = materialize(&set, config.context()).font;
        assert_eq!(font.family(), "Georgia");
        assert_eq!(font.point_size(), 14.0);
    }

    #[test]
    fn unknown_family_keeps_the_previous_font() {
        let config = config(12.0);
        let set = AttributeSet::new()
            .with_font_size(18.0)
            .with_font_name("Comic Sans");
        let font = materialize(&set, config.context()).font;
        assert_eq!(font, FontDescriptor::new("Helvetica", 18.0));
    }

    #[test]
    fn traits_survive_a_family_change() {
        let config = config(12.0);
        let set = AttributeSet::new()
            .with_font_name("Georgia")
            .with(AttributeKey::Bold, true)
            .with(AttributeKey::Italic, true);
        let font = materialize(&set, config.context()).font;
        assert_eq!(font.family(), "Georgia");
        assert!(font.has_trait(FontTraits::BOLD | FontTraits::ITALIC));
    }

    #[test]
    fn bold_on_a_bold_base_is_unchanged() {
        let base = FontDescriptor::new("Helvetica", 12.0).with_trait(FontTraits::BOLD);
        let config = config(12.0);
        let ctx = config.context().with_base_font(&base);
        let set = AttributeSet::new().with(AttributeKey::Bold, true);
        assert_eq!(materialize(&set, ctx).font, base);
    }

    #[test]
    fn lines_colors_and_paragraph() {
        let config = config(12.0);
        let red = Color::rgb(255, 0, 0);
        let set = AttributeSet::new()
            .with(AttributeKey::Underline, true)
            .with(AttributeKey::Strikethrough, false)
            .with_color(RichTextColor::Background, red)
            .with_alignment(RichTextAlignment::Center);
        let native = materialize(&set, config.context());
        assert_eq!(native.underline_style, LINE_STYLE_SINGLE);
        assert_eq!(native.strikethrough_style, 0);
        assert_eq!(native.color(RichTextColor::Background), Some(red));
        assert_eq!(native.color(RichTextColor::Foreground), None);
        assert_eq!(
            native.paragraph.map(|p| p.alignment),
            Some(RichTextAlignment::Center)
        );
        assert!(!native.font.has_trait(FontTraits::BOLD));
    }
}

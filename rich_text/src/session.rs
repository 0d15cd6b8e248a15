// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use attributed_string::{Selection, TextRange, TextStorage};
use rich_text_primitives::{
    Color, FontResolver, HeaderLevel, RichTextAlignment, RichTextColor, RichTextStyle, StyleSet,
};

use crate::materialize::materialize;
use crate::{
    resolve, AttributeKey, AttributeSet, AttributeValue, Document, Error, ExportFormat, Exporter,
    MaterializeContext,
};

/// An editor over one [`Document`].
///
/// The session is the document's single writer: it owns the document, the current selection
/// and the typing attributes, which stand in for the formatting of a collapsed caret. Style
/// commands on a caret change the typing attributes; on a range they change the document.
///
/// Style commands only mutate when the result differs from what is currently active, so
/// issuing the same command twice changes state once:
///
/// ```
/// use rich_text::{Document, EditingSession, RichTextConfig};
/// use rich_text_primitives::RichTextStyle;
/// use attributed_string::Selection;
///
/// let config = RichTextConfig::default();
/// let document = Document::from_json(r#"{"spans":[{"insert":"Hello"}]}"#).unwrap();
/// let mut session = EditingSession::new(document, config.context());
///
/// session.set_selection(Selection::new(0, 5)).unwrap();
/// assert!(session.set_style(RichTextStyle::Bold, true).unwrap());
/// assert!(!session.set_style(RichTextStyle::Bold, true).unwrap());
/// assert!(session.active_styles().unwrap().has_style(RichTextStyle::Bold));
/// ```
#[derive(Debug)]
pub struct EditingSession<'a, R: FontResolver> {
    document: Document,
    selection: Selection,
    typing_attributes: AttributeSet,
    ctx: MaterializeContext<'a, R>,
}

impl<'a, R: FontResolver> EditingSession<'a, R> {
    /// Starts editing `document` with a caret at the start.
    pub fn new(document: Document, ctx: MaterializeContext<'a, R>) -> Self {
        let typing_attributes = document
            .attributes_before(0)
            .ok()
            .flatten()
            .cloned()
            .unwrap_or_default();
        Self {
            document,
            selection: Selection::caret(0),
            typing_attributes,
            ctx,
        }
    }

    /// The document being edited.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Ends the session, returning the document.
    pub fn into_document(self) -> Document {
        self.document
    }

    /// The current selection.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The attributes that text typed at the caret will receive.
    pub fn typing_attributes(&self) -> &AttributeSet {
        &self.typing_attributes
    }

    /// Moves the selection, picking up the typing attributes found there.
    ///
    /// A caret takes the attributes of the character before it; a range takes those of its
    /// first character.
    pub fn set_selection(&mut self, selection: Selection) -> Result<(), Error> {
        TextRange::from_selection(&self.document, selection)?;
        let attributes = if selection.is_collapsed() {
            self.document
                .attributes_before(selection.location)?
                .cloned()
        } else {
            self.document
                .flatten()
                .attributes_at(selection.location)?
                .cloned()
        };
        self.selection = selection;
        if let Some(attributes) = attributes {
            self.typing_attributes = attributes;
        }
        Ok(())
    }

    /// The paragraph range enclosing the selection.
    pub fn paragraph_range(&self) -> Result<TextRange, Error> {
        self.document.paragraph_range(self.selection)
    }

    /// The styles active over the whole selection.
    ///
    /// For a caret these are the styles of the typing attributes.
    pub fn active_styles(&self) -> Result<StyleSet, Error> {
        self.styles_with(AttributeSet::clone)
    }

    /// Turns `style` on or off for the selection.
    ///
    /// Returns `true` if anything changed. Nothing changes when the style is already in the
    /// requested state over the whole selection, or when the edit would not change whether the
    /// style is active. A style that comes from the base font rather than from a style flag
    /// cannot be turned off.
    pub fn set_style(&mut self, style: RichTextStyle, on: bool) -> Result<bool, Error> {
        let current = self.active_styles()?;
        if !resolve::should_toggle(current, style, on) {
            return Ok(false);
        }
        let proposed = self.styles_with(|attributes| attributes.clone().with_style(style, on))?;
        if proposed.has_style(style) == current.has_style(style) {
            log::debug!("setting {style:?} to {on} would not change the active styles");
            return Ok(false);
        }
        if !self.selection.is_collapsed() {
            self.document
                .set_style(self.selection.as_range(), style, on)?;
        }
        self.typing_attributes = self.typing_attributes.clone().with_style(style, on);
        Ok(true)
    }

    /// Flips `style` for the selection, returning whether it is active afterwards.
    ///
    /// A style that is only partly applied across the selection is turned on.
    pub fn toggle_style(&mut self, style: RichTextStyle) -> Result<bool, Error> {
        let on = !self.active_styles()?.has_style(style);
        if self.set_style(style, on)? {
            Ok(on)
        } else {
            Ok(!on)
        }
    }

    /// The alignment shared by every paragraph the selection touches, or `None` if they
    /// differ.
    pub fn active_alignment(&self) -> Result<Option<RichTextAlignment>, Error> {
        let paragraph = self.paragraph_range()?;
        if paragraph.is_empty() {
            return Ok(Some(
                self.typing_attributes.alignment().unwrap_or_default(),
            ));
        }
        let flat = self.document.flatten();
        let sets = flat.attributes_overlapping(paragraph.as_selection())?;
        Ok(resolve::active_alignment(sets))
    }

    /// Aligns every paragraph the selection touches.
    pub fn set_alignment(&mut self, alignment: RichTextAlignment) -> Result<(), Error> {
        self.document.set_alignment(self.selection, alignment)?;
        self.typing_attributes = self.typing_attributes.clone().with_alignment(alignment);
        Ok(())
    }

    /// Sets or clears the header level of every paragraph the selection touches.
    pub fn set_header(&mut self, level: Option<HeaderLevel>) -> Result<(), Error> {
        self.document.set_header(self.selection, level)?;
        self.typing_attributes = match level {
            Some(level) => self.typing_attributes.clone().with_header(level),
            None => self.typing_attributes.clone().without(AttributeKey::HeaderLevel),
        };
        Ok(())
    }

    /// Sets or clears the color for `role`.
    pub fn set_color(&mut self, role: RichTextColor, color: Option<Color>) -> Result<(), Error> {
        self.set_character_attribute(AttributeKey::for_color(role), color.map(Into::into))
    }

    /// Sets or clears the font family.
    pub fn set_font_name(&mut self, family: Option<&str>) -> Result<(), Error> {
        self.set_character_attribute(AttributeKey::FontName, family.map(Into::into))
    }

    /// Sets or clears the explicit font size.
    pub fn set_font_size(&mut self, point_size: Option<f32>) -> Result<(), Error> {
        self.set_character_attribute(AttributeKey::FontSize, point_size.map(Into::into))
    }

    /// Replaces the selection with `text` and leaves a caret after it.
    ///
    /// Typed text takes the typing attributes for a caret, or the attributes of the first
    /// replaced character for a range.
    pub fn replace_selection(&mut self, text: &str) -> Result<TextRange, Error> {
        let range = TextRange::from_selection(&self.document, self.selection)?;
        let attributes = if range.is_empty() {
            self.typing_attributes.clone()
        } else {
            self.document
                .flatten()
                .attributes_at(range.start())?
                .cloned()
                .unwrap_or_default()
        };
        // Insert past the range first: both of its offsets stay valid for the delete, so a
        // failure leaves the document untouched.
        let len = self
            .document
            .insert(range.end(), text, Some(attributes.clone()))?
            .len();
        self.document.delete(range.as_range())?;
        let inserted = TextRange::new_unchecked(range.start(), range.start() + len);
        // An empty replacement can join the halves of a surrogate pair around the caret.
        let mut caret = inserted.end();
        if !self.document.is_char_boundary(caret) {
            caret += 1;
        }
        self.selection = Selection::caret(caret);
        self.typing_attributes = attributes;
        Ok(inserted)
    }

    /// Exports a snapshot of the document.
    pub fn export(
        &self,
        format: &ExportFormat,
        exporter: &impl Exporter,
    ) -> Result<Vec<u8>, Error> {
        exporter.export(&self.document.flatten(), format)
    }

    /// The styles that would be active over the selection if every attribute set in it were
    /// replaced by `f(attributes)`.
    fn styles_with(&self, f: impl Fn(&AttributeSet) -> AttributeSet) -> Result<StyleSet, Error> {
        if self.selection.is_collapsed() {
            let native = materialize(&f(&self.typing_attributes), self.ctx);
            return Ok(resolve::styles_in(&native));
        }
        let flat = self.document.flatten();
        let overlapping = flat.attributes_overlapping(self.selection)?;
        Ok(resolve::active_styles(
            overlapping
                .iter()
                .map(|attributes| materialize(&f(attributes), self.ctx)),
        ))
    }

    fn set_character_attribute(
        &mut self,
        key: AttributeKey,
        value: Option<AttributeValue>,
    ) -> Result<(), Error> {
        if !self.selection.is_collapsed() {
            self.document
                .set_attribute(self.selection.as_range(), key, value.clone())?;
        }
        self.typing_attributes = match value {
            Some(value) => self.typing_attributes.clone().with(key, value),
            None => self.typing_attributes.clone().without(key),
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::EditingSession;
    use crate::{AttributeSet, Document, ErrorKind, RichTextConfig, Span};
    use alloc::vec;
    use attributed_string::{Selection, Utf16String};
    use rich_text_primitives::{
        Color, Font, FontBook, FontDescriptor, FontTraits, HeaderLevel, RichTextAlignment,
        RichTextColor, RichTextStyle, StyleSet,
    };

    fn document(text: &str) -> Document {
        Document::from_spans(vec![Span::new(text, AttributeSet::new())])
    }

    #[test]
    fn caret_toggles_typing_attributes_once() {
        let config = RichTextConfig::default();
        let mut session = EditingSession::new(document("ab"), config.context());
        session.set_selection(Selection::caret(2)).unwrap();

        assert!(session.set_style(RichTextStyle::Italic, true).unwrap());
        assert!(!session.set_style(RichTextStyle::Italic, true).unwrap());
        assert_eq!(session.active_styles().unwrap(), StyleSet::ITALIC);
        // The document itself is untouched until text is typed.
        assert!(session.document().spans()[0].attributes.is_empty());

        session.replace_selection("c").unwrap();
        assert_eq!(session.selection(), Selection::caret(3));
        let flat = session.document().flatten();
        assert!(flat.attributes_at(2).unwrap().unwrap().is_italic());
        assert!(!flat.attributes_at(1).unwrap().unwrap().is_italic());
    }

    #[test]
    fn mixed_selection_turns_on_when_toggled() {
        let config = RichTextConfig::default();
        let mut session = EditingSession::new(document("abcd"), config.context());
        session.set_selection(Selection::new(0, 2)).unwrap();
        session.set_style(RichTextStyle::Bold, true).unwrap();

        session.set_selection(Selection::new(0, 4)).unwrap();
        assert_eq!(session.active_styles().unwrap(), StyleSet::empty());
        // Removing a style that is not uniformly on is a no-op.
        assert!(!session.set_style(RichTextStyle::Bold, false).unwrap());
        assert!(session.toggle_style(RichTextStyle::Bold).unwrap());
        assert_eq!(session.active_styles().unwrap(), StyleSet::BOLD);
        assert!(!session.toggle_style(RichTextStyle::Bold).unwrap());
        assert_eq!(session.active_styles().unwrap(), StyleSet::empty());
    }

    #[test]
    fn base_font_style_cannot_be_removed() {
        let base = FontDescriptor::new("Helvetica", 12.0).with_trait(FontTraits::BOLD);
        let config = RichTextConfig::new(FontBook::new(), base);
        let mut session = EditingSession::new(document("abc"), config.context());
        session.set_selection(Selection::new(0, 3)).unwrap();
        assert_eq!(session.active_styles().unwrap(), StyleSet::BOLD);

        let before = session.document().clone();
        assert!(!session.set_style(RichTextStyle::Bold, false).unwrap());
        assert!(!session.set_style(RichTextStyle::Bold, false).unwrap());
        assert!(session.toggle_style(RichTextStyle::Bold).unwrap());
        assert_eq!(session.document(), &before);
        assert_eq!(session.active_styles().unwrap(), StyleSet::BOLD);

        // Other styles still toggle normally.
        assert!(session.set_style(RichTextStyle::Italic, true).unwrap());
        assert_eq!(
            session.active_styles().unwrap(),
            StyleSet::BOLD | StyleSet::ITALIC
        );
    }

    #[test]
    fn alignment_reflects_paragraphs() {
        let config = RichTextConfig::default();
        let mut session = EditingSession::new(document("one\ntwo\n"), config.context());
        session.set_selection(Selection::caret(5)).unwrap();
        session.set_alignment(RichTextAlignment::Right).unwrap();
        assert_eq!(
            session.active_alignment().unwrap(),
            Some(RichTextAlignment::Right)
        );

        session.set_selection(Selection::new(1, 5)).unwrap();
        assert_eq!(session.active_alignment().unwrap(), None);

        session.set_selection(Selection::caret(1)).unwrap();
        assert_eq!(
            session.active_alignment().unwrap(),
            Some(RichTextAlignment::Left)
        );
    }

    #[test]
    fn headers_and_character_attributes() {
        let config = RichTextConfig::new(
            FontBook::with_families(["Georgia"]),
            FontDescriptor::standard(),
        );
        let mut session = EditingSession::new(document("Title\nbody"), config.context());
        session.set_header(Some(HeaderLevel::H1)).unwrap();
        session.set_selection(Selection::new(6, 4)).unwrap();
        session
            .set_color(RichTextColor::Foreground, Some(Color::rgb(0, 128, 0)))
            .unwrap();
        session.set_font_name(Some("Georgia")).unwrap();
        session.set_font_size(Some(11.0)).unwrap();

        let spans = session.document().spans();
        assert_eq!(spans[0].attributes.header(), Some(HeaderLevel::H1));
        let body = &spans[spans.len() - 1].attributes;
        assert_eq!(body.font_name(), Some("Georgia"));
        assert_eq!(body.font_size(), Some(11.0));
        assert_eq!(
            body.color(RichTextColor::Foreground),
            Some(Color::rgb(0, 128, 0))
        );

        session.set_font_size(None).unwrap();
        assert_eq!(session.document().flatten().runs()[2].attributes.font_size(), None);
    }

    #[test]
    fn replacing_a_range_keeps_its_formatting() {
        let config = RichTextConfig::default();
        let mut document = document("Hello world");
        document.set_style(6..11, RichTextStyle::Bold, true).unwrap();
        let mut session = EditingSession::new(document, config.context());
        session.set_selection(Selection::new(6, 5)).unwrap();
        let inserted = session.replace_selection("there").unwrap();
        assert_eq!(inserted.as_range(), 6..11);
        assert_eq!(
            session.document().text().to_string_lossy(),
            "Hello there"
        );
        assert!(session.document().flatten().attributes_at(8).unwrap().unwrap().is_bold());
    }

    #[test]
    fn replacing_between_surrogate_halves() {
        let config = RichTextConfig::default();
        let units = vec![0xD83D, u16::from(b'x'), 0xDE00];
        let span = Span::new(Utf16String::from_units(units), AttributeSet::new());
        let mut session = EditingSession::new(Document::from_spans(vec![span]), config.context());
        session.set_selection(Selection::new(1, 1)).unwrap();

        let inserted = session.replace_selection("y").unwrap();
        assert_eq!(inserted.as_range(), 1..2);
        assert_eq!(
            session.document().text().as_units(),
            [0xD83D, u16::from(b'y'), 0xDE00]
        );
        assert_eq!(session.selection(), Selection::caret(2));

        // Deleting the middle joins the halves; the caret lands after the pair.
        session.set_selection(Selection::new(1, 1)).unwrap();
        let inserted = session.replace_selection("").unwrap();
        assert_eq!(inserted.as_range(), 1..1);
        assert_eq!(session.document().text().as_units(), [0xD83D, 0xDE00]);
        assert_eq!(session.selection(), Selection::caret(2));
    }

    #[test]
    fn invalid_selection_is_rejected() {
        let config = RichTextConfig::default();
        let mut session = EditingSession::new(document("ab"), config.context());
        let err = session.set_selection(Selection::new(1, 5)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
        assert_eq!(session.selection(), Selection::caret(0));
    }
}

// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use core::fmt;

use rich_text_primitives::{
    Color, HeaderLevel, RichTextAlignment, RichTextColor, RichTextStyle, StyleSet,
};
use smallvec::SmallVec;

/// A formatting attribute that can be set on a span.
///
/// The order of the variants is the storage order inside an [`AttributeSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeKey {
    /// Font family name ([`AttributeValue::Text`]).
    FontName,
    /// Font size in points ([`AttributeValue::Number`]).
    FontSize,
    /// Bold ([`AttributeValue::Bool`]).
    Bold,
    /// Italic ([`AttributeValue::Bool`]).
    Italic,
    /// Underline ([`AttributeValue::Bool`]).
    Underline,
    /// Strikethrough ([`AttributeValue::Bool`]).
    Strikethrough,
    /// Text color ([`AttributeValue::Color`]).
    ForegroundColor,
    /// Background color ([`AttributeValue::Color`]).
    BackgroundColor,
    /// Stroke color ([`AttributeValue::Color`]).
    StrokeColor,
    /// Underline color ([`AttributeValue::Color`]).
    UnderlineColor,
    /// Strikethrough color ([`AttributeValue::Color`]).
    StrikethroughColor,
    /// Paragraph alignment ([`AttributeValue::Alignment`]).
    Alignment,
    /// Header level ([`AttributeValue::Header`]).
    HeaderLevel,
}

impl AttributeKey {
    /// All keys, in storage order.
    pub const ALL: [Self; 13] = [
        Self::FontName,
        Self::FontSize,
        Self::Bold,
        Self::Italic,
        Self::Underline,
        Self::Strikethrough,
        Self::ForegroundColor,
        Self::BackgroundColor,
        Self::StrokeColor,
        Self::UnderlineColor,
        Self::StrikethroughColor,
        Self::Alignment,
        Self::HeaderLevel,
    ];

    /// The stable identifier of this key.
    pub const fn id(self) -> &'static str {
        match self {
            Self::FontName => "fontName",
            Self::FontSize => "fontSize",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Strikethrough => "strikethrough",
            Self::ForegroundColor => "foregroundColor",
            Self::BackgroundColor => "backgroundColor",
            Self::StrokeColor => "strokeColor",
            Self::UnderlineColor => "underlineColor",
            Self::StrikethroughColor => "strikethroughColor",
            Self::Alignment => "alignment",
            Self::HeaderLevel => "headerLevel",
        }
    }

    /// The key storing the color for `role`.
    pub const fn for_color(role: RichTextColor) -> Self {
        match role {
            RichTextColor::Foreground => Self::ForegroundColor,
            RichTextColor::Background => Self::BackgroundColor,
            RichTextColor::Strikethrough => Self::StrikethroughColor,
            RichTextColor::Stroke => Self::StrokeColor,
            RichTextColor::Underline => Self::UnderlineColor,
        }
    }

    /// The boolean key storing `style`.
    pub const fn for_style(style: RichTextStyle) -> Self {
        match style {
            RichTextStyle::Bold => Self::Bold,
            RichTextStyle::Italic => Self::Italic,
            RichTextStyle::Underline => Self::Underline,
            RichTextStyle::Strikethrough => Self::Strikethrough,
        }
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A typed attribute value.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    /// A string, such as a font family name.
    Text(Arc<str>),
    /// A number, such as a point size.
    Number(f32),
    /// A flag.
    Bool(bool),
    /// A color.
    Color(Color),
    /// A paragraph alignment.
    Alignment(RichTextAlignment),
    /// A header level.
    Header(HeaderLevel),
}

impl AttributeValue {
    /// Returns the string, if this is a [`Text`](Self::Text) value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the number, if this is a [`Number`](Self::Number) value.
    pub fn as_number(&self) -> Option<f32> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the flag, if this is a [`Bool`](Self::Bool) value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the color, if this is a [`Color`](Self::Color) value.
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(color) => Some(*color),
            _ => None,
        }
    }

    /// Returns the alignment, if this is an [`Alignment`](Self::Alignment) value.
    pub fn as_alignment(&self) -> Option<RichTextAlignment> {
        match self {
            Self::Alignment(alignment) => Some(*alignment),
            _ => None,
        }
    }

    /// Returns the header level, if this is a [`Header`](Self::Header) value.
    pub fn as_header(&self) -> Option<HeaderLevel> {
        match self {
            Self::Header(level) => Some(*level),
            _ => None,
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for AttributeValue {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<Arc<str>> for AttributeValue {
    fn from(value: Arc<str>) -> Self {
        Self::Text(value)
    }
}

impl From<Color> for AttributeValue {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<RichTextAlignment> for AttributeValue {
    fn from(value: RichTextAlignment) -> Self {
        Self::Alignment(value)
    }
}

impl From<HeaderLevel> for AttributeValue {
    fn from(value: HeaderLevel) -> Self {
        Self::Header(value)
    }
}

/// An immutable mapping from [`AttributeKey`] to [`AttributeValue`].
///
/// Absent keys mean "inherit the default". Entries are kept sorted by key, so two sets are equal
/// exactly when they hold the same entries. Edits consume the set and return a new one:
///
/// ```
/// use rich_text::{AttributeKey, AttributeSet};
/// use rich_text_primitives::RichTextStyle;
///
/// let plain = AttributeSet::new();
/// let bold = plain.clone().with_style(RichTextStyle::Bold, true);
/// assert!(bold.is_bold());
/// assert_eq!(bold.with_style(RichTextStyle::Bold, false), plain);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeSet {
    entries: SmallVec<[(AttributeKey, AttributeValue); 4]>,
}

impl AttributeSet {
    /// Creates an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The number of attributes set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, &AttributeValue)> + '_ {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    /// Returns the value for `key`, if set.
    pub fn get(&self, key: AttributeKey) -> Option<&AttributeValue> {
        self.position(key)
            .ok()
            .map(|index| &self.entries[index].1)
    }

    /// Returns `true` if `key` is set.
    pub fn contains(&self, key: AttributeKey) -> bool {
        self.position(key).is_ok()
    }

    /// Returns this set with `key` set to `value`.
    #[must_use]
    pub fn with(mut self, key: AttributeKey, value: impl Into<AttributeValue>) -> Self {
        let value = value.into();
        match self.position(key) {
            Ok(index) => self.entries[index].1 = value,
            Err(index) => self.entries.insert(index, (key, value)),
        }
        self
    }

    /// Returns this set with `key` removed.
    #[must_use]
    pub fn without(mut self, key: AttributeKey) -> Self {
        if let Ok(index) = self.position(key) {
            self.entries.remove(index);
        }
        self
    }

    /// Returns this set with `style` turned on or off.
    ///
    /// Turning a style off removes its key, since an absent flag already means "off".
    #[must_use]
    pub fn with_style(self, style: RichTextStyle, on: bool) -> Self {
        let key = AttributeKey::for_style(style);
        if on {
            self.with(key, true)
        } else {
            self.without(key)
        }
    }

    /// Returns this set with the color for `role` set.
    #[must_use]
    pub fn with_color(self, role: RichTextColor, color: Color) -> Self {
        self.with(AttributeKey::for_color(role), color)
    }

    /// Returns this set with a font family name.
    #[must_use]
    pub fn with_font_name(self, family: impl Into<Arc<str>>) -> Self {
        self.with(AttributeKey::FontName, AttributeValue::Text(family.into()))
    }

    /// Returns this set with an explicit font size.
    #[must_use]
    pub fn with_font_size(self, point_size: f32) -> Self {
        self.with(AttributeKey::FontSize, point_size)
    }

    /// Returns this set with a paragraph alignment.
    #[must_use]
    pub fn with_alignment(self, alignment: RichTextAlignment) -> Self {
        self.with(AttributeKey::Alignment, alignment)
    }

    /// Returns this set with a header level.
    #[must_use]
    pub fn with_header(self, level: HeaderLevel) -> Self {
        self.with(AttributeKey::HeaderLevel, level)
    }

    /// Returns a copy of this set overridden by every entry of `other`.
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        other
            .entries
            .iter()
            .fold(self.clone(), |set, (key, value)| set.with(*key, value.clone()))
    }

    /// The font family name, if set.
    pub fn font_name(&self) -> Option<&str> {
        self.get(AttributeKey::FontName)
            .and_then(AttributeValue::as_text)
    }

    /// The explicit font size, if set.
    pub fn font_size(&self) -> Option<f32> {
        self.get(AttributeKey::FontSize)
            .and_then(AttributeValue::as_number)
    }

    /// The color for `role`, if set.
    pub fn color(&self, role: RichTextColor) -> Option<Color> {
        self.get(AttributeKey::for_color(role))
            .and_then(AttributeValue::as_color)
    }

    /// The paragraph alignment, if set.
    pub fn alignment(&self) -> Option<RichTextAlignment> {
        self.get(AttributeKey::Alignment)
            .and_then(AttributeValue::as_alignment)
    }

    /// The header level, if set.
    pub fn header(&self) -> Option<HeaderLevel> {
        self.get(AttributeKey::HeaderLevel)
            .and_then(AttributeValue::as_header)
    }

    /// Returns `true` if the flag for `style` is set to `true`.
    ///
    /// Any other stored value, and an absent key, is "off".
    pub fn has_style(&self, style: RichTextStyle) -> bool {
        self.get(AttributeKey::for_style(style))
            .and_then(AttributeValue::as_bool)
            .unwrap_or(false)
    }

    /// Returns `true` if the bold flag is on.
    pub fn is_bold(&self) -> bool {
        self.has_style(RichTextStyle::Bold)
    }

    /// Returns `true` if the italic flag is on.
    pub fn is_italic(&self) -> bool {
        self.has_style(RichTextStyle::Italic)
    }

    /// Returns `true` if the underline flag is on.
    pub fn is_underline(&self) -> bool {
        self.has_style(RichTextStyle::Underline)
    }

    /// Returns `true` if the strikethrough flag is on.
    pub fn is_strikethrough(&self) -> bool {
        self.has_style(RichTextStyle::Strikethrough)
    }

    /// The styles whose flags are on.
    ///
    /// This reads the stored flags only. What a reader sees as bold is decided by the resolved
    /// font; see [`resolve`](crate::resolve).
    pub fn styles(&self) -> StyleSet {
        RichTextStyle::ALL
            .into_iter()
            .filter(|style| self.has_style(*style))
            .collect()
    }

    fn position(&self, key: AttributeKey) -> Result<usize, usize> {
        self.entries.binary_search_by_key(&key, |(k, _)| *k)
    }
}

impl FromIterator<(AttributeKey, AttributeValue)> for AttributeSet {
    fn from_iter<T: IntoIterator<Item = (AttributeKey, AttributeValue)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |set, (key, value)| set.with(key, value))
    }
}

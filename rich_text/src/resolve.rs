// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style state for selections.
//!
//! A style is active over a selection only when it is active in every run the selection
//! touches. Toolbars reflect this state, and editing commands use [`should_toggle`] so that
//! repeating a command with the same intent changes the document at most once.

use rich_text_primitives::{RichTextAlignment, RichTextStyle, StyleSet};

use crate::materialize::LINE_STYLE_SINGLE;
use crate::{AttributeSet, StyleSource};

/// The styles active in a single run.
///
/// Bold and italic are read from the font's symbolic traits; underline and strikethrough are on
/// only for a single line style.
pub fn styles_in<S: StyleSource + ?Sized>(source: &S) -> StyleSet {
    let traits = source.font_traits();
    let mut styles = StyleSet::empty();
    for style in RichTextStyle::ALL {
        let on = match style {
            RichTextStyle::Bold | RichTextStyle::Italic => style
                .symbolic_trait()
                .is_some_and(|required| traits.contains(required)),
            RichTextStyle::Underline => source.underline_style() == LINE_STYLE_SINGLE,
            RichTextStyle::Strikethrough => source.strikethrough_style() == LINE_STYLE_SINGLE,
        };
        styles.set_style(style, on);
    }
    styles
}

/// The styles active in every one of `sources`.
///
/// Returns an empty set when there are no sources.
pub fn active_styles<I>(sources: I) -> StyleSet
where
    I: IntoIterator,
    I::Item: StyleSource,
{
    sources
        .into_iter()
        .map(|source| styles_in(&source))
        .reduce(|acc, styles| acc & styles)
        .unwrap_or_default()
}

/// Returns `true` if setting `style` to `desired_on` would change `current`.
pub fn should_toggle(current: StyleSet, style: RichTextStyle, desired_on: bool) -> bool {
    current.has_style(style) != desired_on
}

/// The alignment shared by all of `sets`, treating an unset alignment as the default.
///
/// Returns `None` for mixed alignments and for an empty input.
pub fn active_alignment<'a, I>(sets: I) -> Option<RichTextAlignment>
where
    I: IntoIterator<Item = &'a AttributeSet>,
{
    let mut alignments = sets
        .into_iter()
        .map(|set| set.alignment().unwrap_or_default());
    let first = alignments.next()?;
    alignments.all(|alignment| alignment == first).then_some(first)
}

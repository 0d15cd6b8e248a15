// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use rich_text_primitives::FontTraits;

/// The native style state of a run, as read by the style resolver.
///
/// Bold and italic come from the symbolic traits of the resolved font. Underline and
/// strikethrough come from integer line styles, where `1` is a single line. This enables
/// platform attribute types to be queried directly, without going back to an
/// [`AttributeSet`](crate::AttributeSet).
pub trait StyleSource {
    /// The symbolic traits of the run's font.
    fn font_traits(&self) -> FontTraits;

    /// The underline style, `0` for none.
    fn underline_style(&self) -> i32;

    /// The strikethrough style, `0` for none.
    fn strikethrough_style(&self) -> i32;
}

impl<T: StyleSource + ?Sized> StyleSource for &T {
    fn font_traits(&self) -> FontTraits {
        (**self).font_traits()
    }

    fn underline_style(&self) -> i32 {
        (**self).underline_style()
    }

    fn strikethrough_style(&self) -> i32 {
        (**self).strikethrough_style()
    }
}

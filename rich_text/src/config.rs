// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use rich_text_primitives::{FontBook, FontDescriptor, FontResolver};

/// Process-wide rich text configuration.
///
/// Holds the standard font that materialization starts from and the resolver used for explicit
/// font family names. Build it once at startup and lend it out with [`context`](Self::context);
/// nothing in this crate mutates it.
#[derive(Clone, Debug)]
pub struct RichTextConfig<R: FontResolver> {
    standard_font: R::Font,
    resolver: R,
}

impl<R: FontResolver> RichTextConfig<R> {
    /// Creates a configuration from a resolver and the standard font.
    pub fn new(resolver: R, standard_font: R::Font) -> Self {
        Self {
            standard_font,
            resolver,
        }
    }

    /// The standard font.
    pub fn standard_font(&self) -> &R::Font {
        &self.standard_font
    }

    /// The font resolver.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Returns a materialization context based on the standard font.
    pub fn context(&self) -> MaterializeContext<'_, R> {
        MaterializeContext::new(&self.standard_font, &self.resolver)
    }
}

impl Default for RichTextConfig<FontBook> {
    /// An empty [`FontBook`] with [`FontDescriptor::standard`].
    fn default() -> Self {
        Self::new(FontBook::new(), FontDescriptor::standard())
    }
}

/// Context required to materialize attribute sets.
///
/// `MaterializeContext` is a small struct with private fields so it can grow over time.
pub struct MaterializeContext<'a, R: FontResolver> {
    base_font: &'a R::Font,
    resolver: &'a R,
}

impl<'a, R: FontResolver> MaterializeContext<'a, R> {
    /// Creates a new materialization context.
    #[inline]
    pub const fn new(base_font: &'a R::Font, resolver: &'a R) -> Self {
        Self {
            base_font,
            resolver,
        }
    }

    /// Returns a copy of this context starting from a different base font.
    #[inline]
    #[must_use]
    pub const fn with_base_font(self, base_font: &'a R::Font) -> Self {
        Self {
            base_font,
            resolver: self.resolver,
        }
    }

    /// The font that materialization starts from.
    #[inline]
    pub const fn base_font(&self) -> &'a R::Font {
        self.base_font
    }

    /// The resolver for explicit font family names.
    #[inline]
    pub const fn resolver(&self) -> &'a R {
        self.resolver
    }
}

impl<R: FontResolver> Clone for MaterializeContext<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: FontResolver> Copy for MaterializeContext<'_, R> {}

impl<R: FontResolver> core::fmt::Debug for MaterializeContext<'_, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MaterializeContext")
            .field("base_font", self.base_font)
            .finish_non_exhaustive()
    }
}

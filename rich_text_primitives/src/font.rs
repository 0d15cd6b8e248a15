// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt::Debug;

/// The point size of the standard rich text font.
pub const STANDARD_FONT_SIZE: f32 = 16.0;

bitflags::bitflags! {
    /// Symbolic traits of a font face.
    ///
    /// These are font-level flags: a bold run is bold because its font has the [`BOLD`] trait,
    /// not because of a separate attribute.
    ///
    /// [`BOLD`]: FontTraits::BOLD
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FontTraits: u32 {
        /// The face is italic or oblique.
        const ITALIC = 1 << 0;
        /// The face is bold.
        const BOLD = 1 << 1;
        /// The face is expanded.
        const EXPANDED = 1 << 5;
        /// The face is condensed.
        const CONDENSED = 1 << 6;
        /// All glyphs have the same advance.
        const MONO_SPACE = 1 << 10;
    }
}

/// A resolved font, as exposed by a platform font adapter.
///
/// Implementations are expected to be cheap to clone (a handle or a small descriptor).
pub trait Font: Clone + Debug {
    /// The font size in points.
    fn point_size(&self) -> f32;

    /// The family name of the font.
    fn family(&self) -> &str;

    /// The symbolic traits of the font.
    fn symbolic_traits(&self) -> FontTraits;

    /// Returns `true` if all of `traits` are present.
    fn has_trait(&self, traits: FontTraits) -> bool {
        self.symbolic_traits().contains(traits)
    }

    /// Returns a copy of this font with `traits` added to its existing traits.
    ///
    /// Adding a trait the font already has must return an equivalent font.
    fn with_trait(&self, traits: FontTraits) -> Self;

    /// Returns a copy of this font at a different point size.
    fn with_size(&self, point_size: f32) -> Self;
}

/// Resolves font family names to fonts.
pub trait FontResolver {
    /// The font type produced by this resolver.
    type Font: Font;

    /// Returns a font of `family` at `point_size`, or `None` if the family is unknown.
    fn resolve(&self, family: &str, point_size: f32) -> Option<Self::Font>;
}

/// A plain description of a font: family, size and traits.
///
/// This is a platform-independent [`Font`]; platform adapters can map it onto native fonts.
#[derive(Clone, Debug, PartialEq)]
pub struct FontDescriptor {
    family: Arc<str>,
    point_size: f32,
    traits: FontTraits,
}

impl FontDescriptor {
    /// Creates a descriptor with no traits.
    pub fn new(family: impl Into<Arc<str>>, point_size: f32) -> Self {
        Self {
            family: family.into(),
            point_size,
            traits: FontTraits::empty(),
        }
    }

    /// The standard rich text font: the platform sans-serif face at [`STANDARD_FONT_SIZE`].
    pub fn standard() -> Self {
        Self::new("sans-serif", STANDARD_FONT_SIZE)
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::standard()
    }
}

impl Font for FontDescriptor {
    fn point_size(&self) -> f32 {
        self.point_size
    }

    fn family(&self) -> &str {
        &self.family
    }

    fn symbolic_traits(&self) -> FontTraits {
        self.traits
    }

    fn with_trait(&self, traits: FontTraits) -> Self {
        Self {
            traits: self.traits | traits,
            ..self.clone()
        }
    }

    fn with_size(&self, point_size: f32) -> Self {
        Self {
            point_size,
            ..self.clone()
        }
    }
}

/// A [`FontResolver`] over a fixed list of known family names.
///
/// Family lookup is ASCII case-insensitive; the resolved descriptor carries the name as it was
/// registered.
#[derive(Clone, Debug, Default)]
pub struct FontBook {
    families: Vec<Arc<str>>,
}

impl FontBook {
    /// Creates an empty font book, which resolves nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a font book from family names.
    pub fn with_families<I, S>(families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        Self {
            families: families.into_iter().map(Into::into).collect(),
        }
    }

    /// Registers a family name.
    pub fn register(&mut self, family: impl Into<Arc<str>>) {
        self.families.push(family.into());
    }

    /// Iterates over the registered family names.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.families.iter().map(|family| &**family)
    }
}

impl FontResolver for FontBook {
    type Font = FontDescriptor;

    fn resolve(&self, family: &str, point_size: f32) -> Option<FontDescriptor> {
        let family = family.trim();
        self.families
            .iter()
            .find(|known| known.eq_ignore_ascii_case(family))
            .map(|known| FontDescriptor::new(known.clone(), point_size))
    }
}

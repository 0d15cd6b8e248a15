// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// The role a color plays when applied to text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RichTextColor {
    /// The glyph fill color.
    Foreground,
    /// The color painted behind the glyphs.
    Background,
    /// The color of the strikethrough line.
    Strikethrough,
    /// The glyph outline color.
    Stroke,
    /// The color of the underline.
    Underline,
}

impl RichTextColor {
    /// All color roles.
    pub const ALL: [Self; 5] = [
        Self::Foreground,
        Self::Background,
        Self::Strikethrough,
        Self::Stroke,
        Self::Underline,
    ];

    /// Returns the stable identifier for this color role.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Foreground => "foreground",
            Self::Background => "background",
            Self::Strikethrough => "strikethrough",
            Self::Stroke => "stroke",
            Self::Underline => "underline",
        }
    }
}

/// An 8-bit-per-channel sRGB color with straight alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, `255` is opaque.
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color with an explicit alpha channel.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses a hex color string.
    ///
    /// Accepts `RGB`, `RRGGBB` and `RRGGBBAA` digits, with or without a leading `#`, after
    /// trimming ASCII whitespace. Hex digits are case-insensitive.
    ///
    /// ```
    /// use rich_text_primitives::Color;
    ///
    /// assert_eq!(Color::from_hex("#0af"), Some(Color::rgb(0x00, 0xaa, 0xff)));
    /// assert_eq!(Color::from_hex("FF000080"), Some(Color::rgba(255, 0, 0, 128)));
    /// assert_eq!(Color::from_hex("#12345"), None);
    /// ```
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);
        // `from_str_radix` tolerates a leading sign, so check digits up front.
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |ix: usize| u8::from_str_radix(digits.get(ix..ix + 2)?, 16).ok();
        match digits.len() {
            3 => {
                let mut out = [0_u8; 3];
                for (slot, ix) in out.iter_mut().zip(0..3) {
                    let nibble = u8::from_str_radix(digits.get(ix..ix + 1)?, 16).ok()?;
                    *slot = nibble * 17;
                }
                Some(Self::rgb(out[0], out[1], out[2]))
            }
            6 => Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    /// Returns `true` if the color is fully opaque.
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }
}

/// Formats the color as lowercase `#rrggbb`, or `#rrggbbaa` when not opaque.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if !self.is_opaque() {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

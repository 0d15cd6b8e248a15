// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt::{self, Write as _};

use attributed_string::AttributedString;
use rich_text_primitives::{Color, Font, FontResolver, FontTraits, RichTextAlignment};

use crate::materialize::{materialize_string, NativeAttributes, LINE_STYLE_SINGLE};
use crate::{AttributeSet, MaterializeContext};

/// Writes a minimal RTF document: font and color tables, character formatting per run and
/// paragraph alignment per paragraph.
pub(crate) fn encode<R: FontResolver>(
    text: &AttributedString<AttributeSet>,
    ctx: MaterializeContext<'_, R>,
) -> Vec<u8> {
    let native = materialize_string(text, ctx);
    Rtf::new(&native).to_string().into_bytes()
}

struct Rtf<'a, F> {
    text: &'a AttributedString<NativeAttributes<F>>,
    fonts: Vec<&'a str>,
    colors: Vec<Color>,
}

impl<'a, F: Font> Rtf<'a, F> {
    fn new(text: &'a AttributedString<NativeAttributes<F>>) -> Self {
        let mut fonts = Vec::new();
        let mut colors = Vec::new();
        for run in text.runs() {
            let family = run.attributes.font.family();
            if !fonts.contains(&family) {
                fonts.push(family);
            }
            for color in [run.attributes.foreground, run.attributes.background]
                .into_iter()
                .flatten()
            {
                if !colors.contains(&color) {
                    colors.push(color);
                }
            }
        }
        Self {
            text,
            fonts,
            colors,
        }
    }

    fn font_index(&self, family: &str) -> usize {
        self.fonts
            .iter()
            .position(|known| *known == family)
            .unwrap_or_default()
    }

    /// Color table indices start at 1; 0 is the automatic color.
    fn color_index(&self, color: Color) -> usize {
        self.colors
            .iter()
            .position(|known| *known == color)
            .map_or(0, |index| index + 1)
    }

    fn write_character_format(
        &self,
        f: &mut fmt::Formatter<'_>,
        attributes: &NativeAttributes<F>,
    ) -> fmt::Result {
        let font = &attributes.font;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Font sizes are far below the range of i32 half-points."
        )]
        let half_points = (font.point_size() * 2.0 + 0.5) as i32;
        write!(
            f,
            "\\plain\\f{}\\fs{half_points}",
            self.font_index(font.family())
        )?;
        if font.has_trait(FontTraits::BOLD) {
            f.write_str("\\b")?;
        }
        if font.has_trait(FontTraits::ITALIC) {
            f.write_str("\\i")?;
        }
        if attributes.underline_style == LINE_STYLE_SINGLE {
            f.write_str("\\ul")?;
        }
        if attributes.strikethrough_style == LINE_STYLE_SINGLE {
            f.write_str("\\strike")?;
        }
        if let Some(color) = attributes.foreground {
            write!(f, "\\cf{}", self.color_index(color))?;
        }
        if let Some(color) = attributes.background {
            write!(f, "\\cb{}", self.color_index(color))?;
        }
        f.write_char(' ')
    }
}

fn alignment_word(alignment: RichTextAlignment) -> &'static str {
    match alignment {
        RichTextAlignment::Left => "\\ql",
        RichTextAlignment::Center => "\\qc",
        RichTextAlignment::Justify => "\\qj",
        RichTextAlignment::Right => "\\qr",
    }
}

/// Writes UTF-16 text with RTF escapes. Newlines are left to the caller.
#[expect(
    clippy::cast_possible_truncation,
    reason = "Only printable ASCII units are narrowed to bytes."
)]
fn write_escaped(f: &mut fmt::Formatter<'_>, units: &[u16]) -> fmt::Result {
    for &unit in units {
        match unit {
            0x5C => f.write_str("\\\\")?,
            0x7B => f.write_str("\\{")?,
            0x7D => f.write_str("\\}")?,
            0x09 => f.write_str("\\tab ")?,
            // Printable ASCII.
            0x20..=0x7E => f.write_char(char::from(unit as u8))?,
            // RTF takes UTF-16 code units as signed 16-bit numbers.
            _ => write!(f, "\\u{}?", unit as i16)?,
        }
    }
    Ok(())
}

impl<F: Font> fmt::Display for Rtf<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{\\rtf1\\ansi\\deff0{\\fonttbl")?;
        for (index, family) in self.fonts.iter().enumerate() {
            write!(f, "{{\\f{index}\\fnil ")?;
            write_escaped(f, &family.encode_utf16().collect::<Vec<_>>())?;
            f.write_str(";}")?;
        }
        f.write_str("}{\\colortbl;")?;
        for color in &self.colors {
            write!(f, "\\red{}\\green{}\\blue{};", color.r, color.g, color.b)?;
        }
        f.write_str("}\n")?;

        let units = self.text.text().as_units();
        let mut paragraph_start = true;
        for run in self.text.runs() {
            self.write_character_format(f, &run.attributes)?;
            for line in units[run.range.clone()].split_inclusive(|unit| *unit == u16::from(b'\n'))
            {
                if paragraph_start {
                    let alignment = run
                        .attributes
                        .paragraph
                        .map(|paragraph| paragraph.alignment)
                        .unwrap_or_default();
                    write!(f, "\\pard{} ", alignment_word(alignment))?;
                    paragraph_start = false;
                }
                match line.split_last() {
                    Some((&last, body)) if last == u16::from(b'\n') => {
                        write_escaped(f, body)?;
                        f.write_str("\\par\n")?;
                        paragraph_start = true;
                    }
                    _ => write_escaped(f, line)?,
                }
            }
        }
        f.write_char('}')
    }
}

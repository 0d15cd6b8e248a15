// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// A heading level, applied to whole paragraphs.
///
/// Each level scales the base font size by a fixed multiplier. The scaled size is a default:
/// an explicit font size on the same text always wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeaderLevel {
    /// Level 1, the largest heading.
    H1,
    /// Level 2.
    H2,
    /// Level 3.
    H3,
    /// Level 4.
    H4,
    /// Level 5.
    H5,
    /// Level 6, the same size as body text.
    H6,
}

impl HeaderLevel {
    /// All levels, largest first.
    pub const ALL: [Self; 6] = [Self::H1, Self::H2, Self::H3, Self::H4, Self::H5, Self::H6];

    /// Creates a header level from its number (`1..=6`).
    ///
    /// ```
    /// use rich_text_primitives::HeaderLevel;
    ///
    /// assert_eq!(HeaderLevel::from_level(2), Some(HeaderLevel::H2));
    /// assert_eq!(HeaderLevel::from_level(0), None);
    /// assert_eq!(HeaderLevel::from_level(7), None);
    /// ```
    pub const fn from_level(level: u8) -> Option<Self> {
        Some(match level {
            1 => Self::H1,
            2 => Self::H2,
            3 => Self::H3,
            4 => Self::H4,
            5 => Self::H5,
            6 => Self::H6,
            _ => return None,
        })
    }

    /// Returns the level number (`1..=6`).
    pub const fn level(self) -> u8 {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
            Self::H4 => 4,
            Self::H5 => 5,
            Self::H6 => 6,
        }
    }

    /// The factor applied to the base font size for this level.
    pub const fn font_size_multiplier(self) -> f32 {
        match self {
            Self::H1 => 1.5,
            Self::H2 => 1.4,
            Self::H3 => 1.3,
            Self::H4 => 1.2,
            Self::H5 => 1.1,
            Self::H6 => 1.0,
        }
    }
}

impl fmt::Display for HeaderLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "h{}", self.level())
    }
}

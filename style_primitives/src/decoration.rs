// Copyright 2026 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoration line styles and paragraph alignment.

use core::fmt;
use core::ops::{BitOr, BitOrAssign};

/// The style of an underline or strikethrough decoration.
///
/// This is a bit set: a base line style (`SINGLE`, `THICK`, or `DOUBLE`) can
/// be combined with a dash pattern and `BY_WORD`. The raw values match the
/// platform underline-style constants so a renderer can pass them through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LineStyle(u16);

impl LineStyle {
    /// No line.
    pub const NONE: Self = Self(0x0000);
    /// A single line.
    pub const SINGLE: Self = Self(0x0001);
    /// A thick line.
    pub const THICK: Self = Self(0x0002);
    /// A double line.
    pub const DOUBLE: Self = Self(0x0009);

    /// Dotted pattern.
    pub const PATTERN_DOT: Self = Self(0x0100);
    /// Dashed pattern.
    pub const PATTERN_DASH: Self = Self(0x0200);
    /// Dash-dot pattern.
    pub const PATTERN_DASH_DOT: Self = Self(0x0300);
    /// Dash-dot-dot pattern.
    pub const PATTERN_DASH_DOT_DOT: Self = Self(0x0400);

    /// Draw the line only under/through words, not whitespace.
    pub const BY_WORD: Self = Self(0x8000);

    /// Creates a style from a raw bit value.
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Returns the raw bit value.
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Returns `true` if all bits of `other` are set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Coerces this style so that a visible base line is always present.
    ///
    /// A style that is exactly `NONE`, `SINGLE`, `THICK`, or `DOUBLE` is kept
    /// as-is; anything else (patterned or composite styles) is OR-ed with
    /// `SINGLE`.
    #[must_use]
    pub const fn coerced(self) -> Self {
        match self {
            Self::NONE | Self::SINGLE | Self::THICK | Self::DOUBLE => self,
            _ => Self(self.0 | Self::SINGLE.0),
        }
    }
}

impl BitOr for LineStyle {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for LineStyle {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

/// Paragraph text alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Aligned with the leading edge per the writing direction.
    #[default]
    Natural,
    /// Left-aligned.
    Left,
    /// Centered.
    Center,
    /// Right-aligned.
    Right,
    /// Fully justified.
    Justified,
}

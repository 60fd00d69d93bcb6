// Copyright 2026 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font values and font descriptor resolution.

use alloc::string::String;
use core::fmt;

/// Visual weight class of a font, on the usual 100–900 scale.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FontWeight(f32);

impl FontWeight {
    /// Weight value of 300.
    pub const LIGHT: Self = Self(300.0);

    /// Weight value of 400. This is the default value.
    pub const NORMAL: Self = Self(400.0);

    /// Weight value of 500.
    pub const MEDIUM: Self = Self(500.0);

    /// Weight value of 600.
    pub const SEMI_BOLD: Self = Self(600.0);

    /// Weight value of 700.
    pub const BOLD: Self = Self(700.0);

    /// Creates a new weight value.
    pub fn new(weight: f32) -> Self {
        Self(weight)
    }

    /// Returns the underlying weight value.
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a font is styled upright or italic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontStyle {
    /// The default upright style.
    #[default]
    Normal,
    /// Italic style.
    Italic,
}

/// The default point size for resolved fonts with no explicit size.
pub const DEFAULT_FONT_SIZE: f32 = 17.0;

/// A concrete font value.
///
/// `family` of `None` selects the platform default ("system") family.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Font {
    /// The font family name, or `None` for the system family.
    pub family: Option<String>,
    /// The point size.
    pub size: f32,
    /// The weight.
    pub weight: FontWeight,
    /// Upright or italic.
    pub style: FontStyle,
}

impl Font {
    /// A system-family font at the given size.
    pub fn system(size: f32) -> Self {
        Self {
            family: None,
            size,
            ..Self::default()
        }
    }

    /// A named-family font at the given size.
    pub fn named(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: Some(family.into()),
            size,
            ..Self::default()
        }
    }

    /// Returns this font with the given weight.
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }
}

/// The platform text roles and their preset fonts.
///
/// The preset sizes match the platform defaults for the default content size
/// category.
const TEXT_ROLES: &[(&str, f32, FontWeight)] = &[
    ("largeTitle", 34.0, FontWeight::NORMAL),
    ("title1", 28.0, FontWeight::NORMAL),
    ("title2", 22.0, FontWeight::NORMAL),
    ("title3", 20.0, FontWeight::NORMAL),
    ("headline", 17.0, FontWeight::SEMI_BOLD),
    ("body", 17.0, FontWeight::NORMAL),
    ("callout", 16.0, FontWeight::NORMAL),
    ("subheadline", 15.0, FontWeight::NORMAL),
    ("footnote", 13.0, FontWeight::NORMAL),
    ("caption1", 12.0, FontWeight::NORMAL),
    ("caption2", 11.0, FontWeight::NORMAL),
];

/// A font descriptor accepted by builder APIs.
#[derive(Clone, Debug, PartialEq)]
pub enum FontSpec {
    /// A system font of the given point size.
    Size(f32),
    /// A source string: a numeric size, a text role name (`"body"`,
    /// `"headline"`, …), or a family name.
    Source(String),
    /// An already-resolved font.
    Value(Font),
}

impl From<f32> for FontSpec {
    fn from(value: f32) -> Self {
        Self::Size(value)
    }
}

impl From<i32> for FontSpec {
    fn from(value: i32) -> Self {
        Self::Size(value as f32)
    }
}

impl From<&str> for FontSpec {
    fn from(value: &str) -> Self {
        Self::Source(value.into())
    }
}

impl From<String> for FontSpec {
    fn from(value: String) -> Self {
        Self::Source(value)
    }
}

impl From<Font> for FontSpec {
    fn from(value: Font) -> Self {
        Self::Value(value)
    }
}

/// Resolves a font descriptor to a concrete font.
///
/// This is total: a source string that is neither a numeric size nor a known
/// text role is taken to be a family name at [`DEFAULT_FONT_SIZE`].
pub fn resolve_font(spec: &FontSpec) -> Font {
    match spec {
        FontSpec::Size(size) => Font::system(*size),
        FontSpec::Value(font) => font.clone(),
        FontSpec::Source(s) => {
            let s = s.trim();
            if let Ok(size) = s.parse::<f32>() {
                return Font::system(size);
            }
            for &(role, size, weight) in TEXT_ROLES {
                if s == role {
                    return Font::system(size).with_weight(weight);
                }
            }
            Font::named(s, DEFAULT_FONT_SIZE)
        }
    }
}

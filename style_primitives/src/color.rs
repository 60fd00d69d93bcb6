// Copyright 2026 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color values and color descriptor resolution.
//!
//! Supported source syntaxes:
//!
//! - Named colors: `red`, `green`, `lightGray`, … (ASCII case-insensitive)
//! - RGB hex: `#F00`, `#F00A`, `#FF0000`, `#FF0000AA`
//! - Decimal triplet: `255,0,0`, with an optional fractional alpha component
//!   as a fourth entry: `255,0,0,0.5`

use alloc::string::String;
use core::fmt;

/// An 8-bit RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 is fully opaque).
    pub a: u8,
}

impl Color {
    /// Fully opaque black.
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    /// Fully opaque white.
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);
    /// Fully opaque red.
    pub const RED: Self = Self::from_rgb(255, 0, 0);
    /// Fully opaque green.
    pub const GREEN: Self = Self::from_rgb(0, 255, 0);
    /// Fully opaque blue.
    pub const BLUE: Self = Self::from_rgb(0, 0, 255);
    /// Fully transparent black.
    pub const CLEAR: Self = Self::from_rgba(0, 0, 0, 0);

    /// Creates a fully opaque color from RGB channels.
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color from RGBA channels.
    #[must_use]
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses a color from a source string.
    ///
    /// See the [module documentation](self) for the accepted syntaxes.
    pub fn parse(s: &str) -> Result<Self, ParseColorError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseColorError::new(ParseColorErrorKind::Empty));
        }
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        if s.contains(',') {
            return parse_triplet(s);
        }
        for &(name, color) in NAMED_COLORS {
            if s.eq_ignore_ascii_case(name) {
                return Ok(color);
            }
        }
        Err(ParseColorError::new(ParseColorErrorKind::UnknownName))
    }
}

/// Named palette, matching the common platform color set.
const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::BLACK),
    ("white", Color::WHITE),
    ("red", Color::RED),
    ("green", Color::GREEN),
    ("blue", Color::BLUE),
    ("gray", Color::from_rgb(128, 128, 128)),
    ("darkGray", Color::from_rgb(85, 85, 85)),
    ("lightGray", Color::from_rgb(170, 170, 170)),
    ("yellow", Color::from_rgb(255, 255, 0)),
    ("orange", Color::from_rgb(255, 128, 0)),
    ("purple", Color::from_rgb(128, 0, 128)),
    ("brown", Color::from_rgb(153, 102, 51)),
    ("cyan", Color::from_rgb(0, 255, 255)),
    ("magenta", Color::from_rgb(255, 0, 255)),
    ("clear", Color::CLEAR),
];

fn parse_hex(hex: &str) -> Result<Color, ParseColorError> {
    fn nibble(b: u8) -> Result<u8, ParseColorError> {
        match b {
            b'0'..=b'9' => Ok(b - b'0'),
            b'a'..=b'f' => Ok(b - b'a' + 10),
            b'A'..=b'F' => Ok(b - b'A' + 10),
            _ => Err(ParseColorError::new(ParseColorErrorKind::InvalidHex)),
        }
    }

    let bytes = hex.as_bytes();
    match bytes.len() {
        // Short form: one digit per channel.
        3 | 4 => {
            let mut channels = [255_u8; 4];
            for (i, &b) in bytes.iter().enumerate() {
                let n = nibble(b)?;
                channels[i] = n << 4 | n;
            }
            Ok(Color::from_rgba(
                channels[0],
                channels[1],
                channels[2],
                channels[3],
            ))
        }
        6 | 8 => {
            let mut channels = [255_u8; 4];
            for (i, pair) in bytes.chunks_exact(2).enumerate() {
                channels[i] = nibble(pair[0])? << 4 | nibble(pair[1])?;
            }
            Ok(Color::from_rgba(
                channels[0],
                channels[1],
                channels[2],
                channels[3],
            ))
        }
        _ => Err(ParseColorError::new(ParseColorErrorKind::InvalidHex)),
    }
}

fn parse_triplet(s: &str) -> Result<Color, ParseColorError> {
    let mut channels = [0_u8; 3];
    let mut alpha = 255_u8;
    let mut count = 0_usize;
    for (i, part) in s.split(',').enumerate() {
        let part = part.trim();
        match i {
            0..=2 => {
                channels[i] = part
                    .parse::<u8>()
                    .map_err(|_| ParseColorError::new(ParseColorErrorKind::InvalidComponent))?;
            }
            3 => {
                let a = part
                    .parse::<f32>()
                    .map_err(|_| ParseColorError::new(ParseColorErrorKind::InvalidComponent))?;
                if !(0.0..=1.0).contains(&a) {
                    return Err(ParseColorError::new(ParseColorErrorKind::InvalidComponent));
                }
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "The value is clamped to 0.0..=1.0 above, so the scaled value fits in u8."
                )]
                {
                    alpha = (a * 255.0 + 0.5) as u8;
                }
            }
            _ => return Err(ParseColorError::new(ParseColorErrorKind::InvalidComponent)),
        }
        count = i + 1;
    }
    if count < 3 {
        return Err(ParseColorError::new(ParseColorErrorKind::InvalidComponent));
    }
    Ok(Color::from_rgba(
        channels[0],
        channels[1],
        channels[2],
        alpha,
    ))
}

/// Kinds of errors that can occur when parsing a color source string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseColorErrorKind {
    /// The source string was empty (after trimming).
    Empty,
    /// The source string was not a recognized color name.
    UnknownName,
    /// A `#`-prefixed string had an unsupported length or a non-hex digit.
    InvalidHex,
    /// A comma-separated string had a missing or out-of-range component.
    InvalidComponent,
}

/// Error returned when parsing a color source string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseColorError {
    kind: ParseColorErrorKind,
}

impl ParseColorError {
    const fn new(kind: ParseColorErrorKind) -> Self {
        Self { kind }
    }

    /// Returns the error kind.
    pub const fn kind(self) -> ParseColorErrorKind {
        self.kind
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ParseColorErrorKind::Empty => "empty color string",
            ParseColorErrorKind::UnknownName => "unknown color name",
            ParseColorErrorKind::InvalidHex => "invalid hex color",
            ParseColorErrorKind::InvalidComponent => "invalid color component",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for ParseColorError {}

/// A color descriptor accepted by builder APIs.
///
/// Either a source string in one of the syntaxes documented at the
/// [module level](self), or an already-resolved [`Color`] handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorSpec {
    /// A source string to be parsed at resolution time.
    Source(String),
    /// An already-resolved color.
    Value(Color),
}

impl From<&str> for ColorSpec {
    fn from(value: &str) -> Self {
        Self::Source(value.into())
    }
}

impl From<String> for ColorSpec {
    fn from(value: String) -> Self {
        Self::Source(value)
    }
}

impl From<Color> for ColorSpec {
    fn from(value: Color) -> Self {
        Self::Value(value)
    }
}

/// Resolves a color descriptor to a concrete color.
///
/// Returns `None` when the descriptor's source string does not parse; callers
/// are expected to skip the corresponding attribute write rather than fail.
pub fn resolve_color(spec: &ColorSpec) -> Option<Color> {
    match spec {
        ColorSpec::Source(s) => Color::parse(s).ok(),
        ColorSpec::Value(c) => Some(*c),
    }
}

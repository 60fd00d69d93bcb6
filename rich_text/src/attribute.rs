// Copyright 2026 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed attribute vocabulary.

use style_primitives::{Alignment, Color, Font, LineStyle};

/// A style attribute carried by a character position.
///
/// At most one attribute per [`AttributeKey`] is stored per position; a later
/// write for the same key replaces the earlier value unless override
/// prevention is in effect.
#[derive(Clone, Debug, PartialEq)]
pub enum Attribute {
    /// The font.
    Font(Font),
    /// Foreground (text) color.
    Foreground(Color),
    /// Background color.
    Background(Color),
    /// Underline decoration style.
    UnderlineStyle(LineStyle),
    /// Underline decoration color.
    UnderlineColor(Color),
    /// Strikethrough decoration style.
    StrikethroughStyle(LineStyle),
    /// Strikethrough decoration color.
    StrikethroughColor(Color),
    /// Stroke width; negative values stroke and fill.
    StrokeWidth(f32),
    /// Stroke color.
    StrokeColor(Color),
    /// Skew to apply to glyphs.
    Obliqueness(f32),
    /// Vertical offset from the baseline.
    BaselineOffset(f32),
    /// A hyperlink target.
    Link(String),
    /// Opaque marker identifying a run as a clickable label link.
    ///
    /// The interpretation is left to the consuming view layer.
    LabelLink,
    /// Extra spacing between lines of the enclosing paragraph.
    LineSpacing(f32),
    /// First-line head indent of the enclosing paragraph.
    FirstLineIndent(f32),
    /// Text alignment of the enclosing paragraph.
    Alignment(Alignment),
}

impl Attribute {
    /// Returns the key identifying which attribute slot this value occupies.
    pub fn key(&self) -> AttributeKey {
        match self {
            Self::Font(_) => AttributeKey::Font,
            Self::Foreground(_) => AttributeKey::Foreground,
            Self::Background(_) => AttributeKey::Background,
            Self::UnderlineStyle(_) => AttributeKey::UnderlineStyle,
            Self::UnderlineColor(_) => AttributeKey::UnderlineColor,
            Self::StrikethroughStyle(_) => AttributeKey::StrikethroughStyle,
            Self::StrikethroughColor(_) => AttributeKey::StrikethroughColor,
            Self::StrokeWidth(_) => AttributeKey::StrokeWidth,
            Self::StrokeColor(_) => AttributeKey::StrokeColor,
            Self::Obliqueness(_) => AttributeKey::Obliqueness,
            Self::BaselineOffset(_) => AttributeKey::BaselineOffset,
            Self::Link(_) => AttributeKey::Link,
            Self::LabelLink => AttributeKey::LabelLink,
            Self::LineSpacing(_) => AttributeKey::LineSpacing,
            Self::FirstLineIndent(_) => AttributeKey::FirstLineIndent,
            Self::Alignment(_) => AttributeKey::Alignment,
        }
    }
}

/// Identifies an attribute slot independently of its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    /// See [`Attribute::Font`].
    Font,
    /// See [`Attribute::Foreground`].
    Foreground,
    /// See [`Attribute::Background`].
    Background,
    /// See [`Attribute::UnderlineStyle`].
    UnderlineStyle,
    /// See [`Attribute::UnderlineColor`].
    UnderlineColor,
    /// See [`Attribute::StrikethroughStyle`].
    StrikethroughStyle,
    /// See [`Attribute::StrikethroughColor`].
    StrikethroughColor,
    /// See [`Attribute::StrokeWidth`].
    StrokeWidth,
    /// See [`Attribute::StrokeColor`].
    StrokeColor,
    /// See [`Attribute::Obliqueness`].
    Obliqueness,
    /// See [`Attribute::BaselineOffset`].
    BaselineOffset,
    /// See [`Attribute::Link`].
    Link,
    /// See [`Attribute::LabelLink`].
    LabelLink,
    /// See [`Attribute::LineSpacing`].
    LineSpacing,
    /// See [`Attribute::FirstLineIndent`].
    FirstLineIndent,
    /// See [`Attribute::Alignment`].
    Alignment,
}

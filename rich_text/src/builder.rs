// Copyright 2026 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chainable construction surface for rich text.

use core::ops::Range;

use style_primitives::{
    Alignment, ColorSpec, FontSpec, Image, ImageSpec, LineStyle, resolve_color, resolve_font,
    resolve_image,
};

use crate::Attribute;
use crate::detect::EntityDetector;
use crate::rich_text::RichText;
use crate::select::{Criterion, Selector, resolve_explicit};

/// One piece of input to [`build_text`].
#[derive(Clone, Debug)]
pub enum Part {
    /// Plain text, appended without attributes.
    Text(String),
    /// Already-attributed text, appended with its attributes intact.
    Rich(RichText),
    /// An embedded image occupying one unit.
    ///
    /// A specification that does not resolve to an image is dropped from the
    /// output rather than failing construction.
    Image(ImageSpec),
}

impl From<&str> for Part {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for Part {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<RichText> for Part {
    fn from(value: RichText) -> Self {
        Self::Rich(value)
    }
}

impl From<Image> for Part {
    fn from(value: Image) -> Self {
        Self::Image(ImageSpec::Value(value))
    }
}

impl From<ImageSpec> for Part {
    fn from(value: ImageSpec) -> Self {
        Self::Image(value)
    }
}

/// Assembles parts into a [`TextBuilder`] with the whole text selected.
pub fn build_text<I>(parts: I) -> TextBuilder
where
    I: IntoIterator,
    I::Item: Into<Part>,
{
    let mut text = RichText::new();
    for part in parts {
        match part.into() {
            Part::Text(s) => text.push_str(&s),
            Part::Rich(rich) => text.append(rich),
            Part::Image(spec) => {
                if let Some(image) = resolve_image(&spec) {
                    text.push_object(image);
                }
            }
        }
    }
    TextBuilder::new(text)
}

/// Builds attributed text through a chain of selections and attribute writes.
///
/// Every attribute method writes its value to the **current selection** and
/// returns the builder, so calls chain. The selection starts as the whole
/// text; [`select`](TextBuilder::select) replaces it. Attribute writes never
/// fail: ranges are clamped to the text and unresolvable inputs degrade to
/// no-ops.
#[derive(Debug)]
pub struct TextBuilder {
    text: RichText,
    selection: Vec<Range<usize>>,
    prevent_override: bool,
    selector: Selector,
}

impl TextBuilder {
    /// Creates a builder over `text` with the whole text selected.
    pub fn new(text: RichText) -> Self {
        let selection = vec![0..text.len()];
        Self {
            text,
            selection,
            prevent_override: false,
            selector: Selector::new(),
        }
    }

    /// Replaces the entity detector used by selection criteria.
    pub fn with_detector(mut self, detector: Box<dyn EntityDetector>) -> Self {
        self.selector = Selector::with_detector(detector);
        self
    }

    /// Replaces the current selection with the union of the given criteria's
    /// matches, in the order the criteria are listed.
    ///
    /// An explicit [`Criterion::Range`] short-circuits: the selection becomes
    /// exactly that range, and any criteria accumulated before it or listed
    /// after it are discarded.
    pub fn select<I>(mut self, criteria: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Criterion>,
    {
        let plain = self.text.to_plain();
        let mut selection = Vec::new();
        for criterion in criteria {
            match criterion.into() {
                Criterion::Range(offset, length) => {
                    self.selection = vec![resolve_explicit(plain.len_units(), offset, length)];
                    return self;
                }
                criterion => selection.extend(self.selector.resolve(&plain, &criterion)),
            }
        }
        self.selection = selection;
        self
    }

    /// Sets whether subsequent writes preserve already-present attributes.
    ///
    /// While enabled, a write skips every position that already carries a
    /// value for the same attribute key.
    pub fn prevent_override(mut self, prevent: bool) -> Self {
        self.prevent_override = prevent;
        self
    }

    /// Sets the font on the current selection.
    pub fn font(self, font: impl Into<FontSpec>) -> Self {
        let font = resolve_font(&font.into());
        self.write(Attribute::Font(font))
    }

    /// Sets the foreground color on the current selection.
    ///
    /// An unresolvable color specification leaves the text unchanged.
    pub fn color(self, color: impl Into<ColorSpec>) -> Self {
        match resolve_color(&color.into()) {
            Some(color) => self.write(Attribute::Foreground(color)),
            None => self,
        }
    }

    /// Sets the background color on the current selection.
    pub fn background(self, color: impl Into<ColorSpec>) -> Self {
        match resolve_color(&color.into()) {
            Some(color) => self.write(Attribute::Background(color)),
            None => self,
        }
    }

    /// Underlines the current selection.
    ///
    /// A style that carries only a pattern or modifier flag is coerced to
    /// include [`LineStyle::SINGLE`] so the line is actually drawn.
    pub fn underline(self, style: LineStyle) -> Self {
        self.write(Attribute::UnderlineStyle(style.coerced()))
    }

    /// Underlines the current selection with a colored line.
    pub fn underline_with_color(self, style: LineStyle, color: impl Into<ColorSpec>) -> Self {
        let this = self.underline(style);
        match resolve_color(&color.into()) {
            Some(color) => this.write(Attribute::UnderlineColor(color)),
            None => this,
        }
    }

    /// Strikes through the current selection.
    ///
    /// Applies the same style coercion as [`underline`](Self::underline).
    pub fn strikethrough(self, style: LineStyle) -> Self {
        self.write(Attribute::StrikethroughStyle(style.coerced()))
    }

    /// Strikes through the current selection with a colored line.
    pub fn strikethrough_with_color(self, style: LineStyle, color: impl Into<ColorSpec>) -> Self {
        let this = self.strikethrough(style);
        match resolve_color(&color.into()) {
            Some(color) => this.write(Attribute::StrikethroughColor(color)),
            None => this,
        }
    }

    /// Strokes glyph outlines on the current selection.
    ///
    /// A negative width both strokes and fills.
    pub fn stroke(self, width: f32) -> Self {
        self.write(Attribute::StrokeWidth(width))
    }

    /// Strokes glyph outlines on the current selection with a colored stroke.
    pub fn stroke_with_color(self, width: f32, color: impl Into<ColorSpec>) -> Self {
        let this = self.stroke(width);
        match resolve_color(&color.into()) {
            Some(color) => this.write(Attribute::StrokeColor(color)),
            None => this,
        }
    }

    /// Skews glyphs on the current selection.
    pub fn oblique(self, skew: f32) -> Self {
        self.write(Attribute::Obliqueness(skew))
    }

    /// Shifts the current selection vertically from the baseline.
    pub fn baseline_offset(self, offset: f32) -> Self {
        self.write(Attribute::BaselineOffset(offset))
    }

    /// Attaches a hyperlink target to the current selection.
    pub fn link(self, url: impl Into<String>) -> Self {
        self.write(Attribute::Link(url.into()))
    }

    /// Marks the current selection as a clickable label link.
    pub fn label_link(self) -> Self {
        self.write(Attribute::LabelLink)
    }

    /// Sets extra line spacing on paragraphs covering the current selection.
    pub fn line_gap(self, gap: f32) -> Self {
        self.write(Attribute::LineSpacing(gap))
    }

    /// Sets the first-line head indent on paragraphs covering the current
    /// selection.
    pub fn indent(self, indent: f32) -> Self {
        self.write(Attribute::FirstLineIndent(indent))
    }

    /// Sets text alignment on paragraphs covering the current selection.
    pub fn align(self, alignment: Alignment) -> Self {
        self.write(Attribute::Alignment(alignment))
    }

    /// The text built so far.
    pub fn text(&self) -> &RichText {
        &self.text
    }

    /// The current selection as unit ranges.
    pub fn selection(&self) -> &[Range<usize>] {
        &self.selection
    }

    /// Finishes the chain and returns the attributed text.
    pub fn build(self) -> RichText {
        self.text
    }

    fn write(mut self, attribute: Attribute) -> Self {
        let len = self.text.len();
        for range in &self.selection {
            let end = range.end.min(len);
            let start = range.start.min(end);
            if start == end {
                continue;
            }
            let result = if self.prevent_override {
                self.text
                    .apply_attribute_if_absent(start..end, attribute.clone())
            } else {
                self.text.apply_attribute(start..end, attribute.clone())
            };
            debug_assert!(result.is_ok(), "clamped range must be valid");
        }
        self
    }
}

impl From<RichText> for TextBuilder {
    fn from(value: RichText) -> Self {
        Self::new(value)
    }
}

impl From<&str> for TextBuilder {
    fn from(value: &str) -> Self {
        Self::new(RichText::from(value))
    }
}

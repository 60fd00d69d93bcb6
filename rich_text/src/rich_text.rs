// Copyright 2026 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use style_primitives::Image;

use crate::{Attribute, AttributeKey, Error};

/// The character used to represent an embedded object in flattened text.
///
/// U+FFFC OBJECT REPLACEMENT CHARACTER, the conventional placeholder for
/// inline attachments.
pub const OBJECT_REPLACEMENT_CHAR: char = '\u{FFFC}';

/// The content of a single unit of rich text.
#[derive(Clone, Debug, PartialEq)]
pub enum UnitContent {
    /// A character.
    Char(char),
    /// An embedded object, such as an inline image.
    Object(Image),
}

/// One character position: its content plus the attributes applied to it.
#[derive(Clone, Debug, PartialEq)]
struct Unit {
    content: UnitContent,
    attributes: Vec<Attribute>,
}

impl Unit {
    fn new(content: UnitContent) -> Self {
        Self {
            content,
            attributes: Vec::new(),
        }
    }
}

/// A block of text with attributes applied to ranges within the text.
///
/// ## Indices
///
/// All ranges are expressed as **unit indices**: one unit per character or
/// embedded object (an object counts as length 1). Unit ranges cannot split a
/// scalar value, so no boundary validation beyond bounds checking is needed.
///
/// ## Storage
///
/// Attributes are stored per position as a small key/value list; at most one
/// value per [`AttributeKey`] is kept per position. [`RichText::runs`]
/// recovers maximal contiguous spans with identical attribute sets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RichText {
    units: Vec<Unit>,
}

impl RichText {
    /// Creates an empty rich text value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the length of the text in units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns `true` if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Appends a plain string; each character becomes one unattributed unit.
    pub fn push_str(&mut self, text: &str) {
        self.units
            .extend(text.chars().map(|c| Unit::new(UnitContent::Char(c))));
    }

    /// Appends a single embedded object occupying one unit.
    pub fn push_object(&mut self, image: Image) {
        self.units.push(Unit::new(UnitContent::Object(image)));
    }

    /// Appends another rich text value, preserving its attributes.
    pub fn append(&mut self, other: Self) {
        self.units.extend(other.units);
    }

    /// Returns the content at the given unit index.
    pub fn content_at(&self, index: usize) -> Option<&UnitContent> {
        self.units.get(index).map(|unit| &unit.content)
    }

    /// Returns the attributes applied at the given unit index.
    ///
    /// Out-of-bounds indices yield an empty slice.
    pub fn attributes_at(&self, index: usize) -> &[Attribute] {
        self.units
            .get(index)
            .map(|unit| unit.attributes.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the attribute for `key` at the given unit index, if any.
    pub fn attribute(&self, index: usize, key: AttributeKey) -> Option<&Attribute> {
        self.attributes_at(index)
            .iter()
            .find(|attr| attr.key() == key)
    }

    /// Applies an attribute to every position in `range`, replacing any
    /// existing value for the same key.
    pub fn apply_attribute(&mut self, range: Range<usize>, attribute: Attribute) -> Result<(), Error> {
        validate_range(self.len(), &range)?;
        self.write_range(range, attribute, false);
        Ok(())
    }

    /// Applies an attribute to every position in `range` that does not
    /// already carry a value for the same key.
    pub fn apply_attribute_if_absent(
        &mut self,
        range: Range<usize>,
        attribute: Attribute,
    ) -> Result<(), Error> {
        validate_range(self.len(), &range)?;
        self.write_range(range, attribute, true);
        Ok(())
    }

    fn write_range(&mut self, range: Range<usize>, attribute: Attribute, preserve_existing: bool) {
        let key = attribute.key();
        for unit in &mut self.units[range] {
            match unit.attributes.iter_mut().find(|a| a.key() == key) {
                Some(existing) => {
                    if !preserve_existing {
                        *existing = attribute.clone();
                    }
                }
                None => unit.attributes.push(attribute.clone()),
            }
        }
    }

    /// Flattens this text to a plain string for pattern matching.
    ///
    /// Embedded objects are rendered as [`OBJECT_REPLACEMENT_CHAR`]. The
    /// returned value carries the byte-offset ↔ unit-index mapping needed to
    /// translate match positions back to unit ranges.
    pub fn to_plain(&self) -> PlainText {
        let mut text = String::with_capacity(self.units.len());
        let mut unit_starts = Vec::with_capacity(self.units.len());
        for unit in &self.units {
            unit_starts.push(text.len());
            match &unit.content {
                UnitContent::Char(c) => text.push(*c),
                UnitContent::Object(_) => text.push(OBJECT_REPLACEMENT_CHAR),
            }
        }
        PlainText { text, unit_starts }
    }

    /// Returns an iterator over maximal contiguous spans of equal attribute
    /// sets, in text order.
    ///
    /// Two positions belong to the same run when their attribute lists are
    /// equal, including order of application.
    pub fn runs(&self) -> Runs<'_> {
        Runs {
            units: &self.units,
            index: 0,
        }
    }
}

impl From<&str> for RichText {
    fn from(value: &str) -> Self {
        let mut text = Self::new();
        text.push_str(value);
        text
    }
}

impl From<String> for RichText {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

fn validate_range(len: usize, range: &Range<usize>) -> Result<(), Error> {
    if range.start > range.end {
        return Err(Error::invalid_range(range.start, range.end, len));
    }
    if range.start > len || range.end > len {
        return Err(Error::invalid_bounds(range.start, range.end, len));
    }
    Ok(())
}

/// A flattened view of a [`RichText`] for pattern matching.
///
/// Produced by [`RichText::to_plain`]. Byte offsets into [`as_str`] can be
/// translated back to unit indices with [`unit_range`].
///
/// [`as_str`]: PlainText::as_str
/// [`unit_range`]: PlainText::unit_range
#[derive(Clone, Debug)]
pub struct PlainText {
    text: String,
    unit_starts: Vec<usize>,
}

impl PlainText {
    /// The flattened text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The length of the source text in units.
    pub fn len_units(&self) -> usize {
        self.unit_starts.len()
    }

    /// Translates a byte offset into `as_str()` to a unit index.
    ///
    /// Offsets that land inside a unit's encoding round up to the next unit.
    pub fn unit_index(&self, byte_offset: usize) -> usize {
        match self.unit_starts.binary_search(&byte_offset) {
            Ok(index) | Err(index) => index,
        }
    }

    /// Translates a byte range into `as_str()` to a unit range.
    pub fn unit_range(&self, bytes: Range<usize>) -> Range<usize> {
        self.unit_index(bytes.start)..self.unit_index(bytes.end)
    }
}

/// Iterator over contiguous equal-attribute runs of a [`RichText`].
///
/// Yields `(unit range, attributes)` pairs covering the whole text.
#[derive(Clone, Debug)]
pub struct Runs<'a> {
    units: &'a [Unit],
    index: usize,
}

impl<'a> Iterator for Runs<'a> {
    type Item = (Range<usize>, &'a [Attribute]);

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.index;
        let first = self.units.get(start)?;
        let mut end = start + 1;
        while self
            .units
            .get(end)
            .is_some_and(|unit| unit.attributes == first.attributes)
        {
            end += 1;
        }
        self.index = end;
        Some((start..end, first.attributes.as_slice()))
    }
}

// Copyright 2026 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution of selection criteria to concrete unit ranges.

use core::ops::Range;

use regex::Regex;

use crate::detect::{DataDetector, EntityDetector, EntityKind};
use crate::rich_text::PlainText;

/// A pattern for [`Criterion::Match`]: either a source string compiled with
/// default options at resolution time, or an already-compiled regex.
#[derive(Clone, Debug)]
pub enum Pattern {
    /// A regex source string.
    Source(String),
    /// A compiled regex, used as-is.
    Compiled(Regex),
}

impl From<&str> for Pattern {
    fn from(value: &str) -> Self {
        Self::Source(value.into())
    }
}

impl From<String> for Pattern {
    fn from(value: String) -> Self {
        Self::Source(value)
    }
}

impl From<Regex> for Pattern {
    fn from(value: Regex) -> Self {
        Self::Compiled(value)
    }
}

/// One unit of selection request.
///
/// Criteria are resolved against the current text by a [`Selector`]; see
/// [`TextBuilder::select`](crate::TextBuilder::select) for how multiple
/// criteria combine.
#[derive(Clone, Debug)]
pub enum Criterion {
    /// The whole string.
    All,
    /// Every web address.
    Url,
    /// Every calendar date.
    Date,
    /// Every telephone number.
    PhoneNumber,
    /// Every `#tag`: a `#` not preceded by a word character, followed by zero
    /// or more word characters.
    HashTag,
    /// Every `@tag`, same shape as [`Criterion::HashTag`] with `@`.
    NameTag,
    /// Every integer or decimal number.
    Number,
    /// Every non-overlapping match of a pattern.
    Match(Pattern),
    /// An explicit `(offset, length)` range in units. A negative offset
    /// counts back from the end of the text.
    Range(isize, isize),
}

impl From<&str> for Criterion {
    fn from(value: &str) -> Self {
        Self::Match(Pattern::from(value))
    }
}

impl From<String> for Criterion {
    fn from(value: String) -> Self {
        Self::Match(Pattern::from(value))
    }
}

impl From<Regex> for Criterion {
    fn from(value: Regex) -> Self {
        Self::Match(Pattern::from(value))
    }
}

impl From<Pattern> for Criterion {
    fn from(value: Pattern) -> Self {
        Self::Match(value)
    }
}

// The sigil-run patterns deliberately allow an empty tag body: a bare sigil
// still selects. The "not preceded by a word character" restriction is
// enforced by `sigil_matches`, as the regex engine has no look-behind.
const HASH_TAG_PATTERN: &str = r"#\w*";
const NAME_TAG_PATTERN: &str = r"@\w*";
const NUMBER_PATTERN: &str = r"\d+(\.\d+)?";

/// Resolves [`Criterion`] values to concrete unit ranges.
///
/// Stateless with respect to any particular text: the category patterns are
/// compiled once, and every [`resolve`](Selector::resolve) call is a pure
/// function of the flattened text and the criterion.
#[derive(Debug)]
pub struct Selector {
    hash_tag: Option<Regex>,
    name_tag: Option<Regex>,
    number: Option<Regex>,
    detector: Box<dyn EntityDetector>,
}

impl Default for Selector {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector {
    /// Creates a selector using the bundled [`DataDetector`].
    pub fn new() -> Self {
        Self::with_detector(Box::new(DataDetector::new()))
    }

    /// Creates a selector delegating entity categories to `detector`.
    pub fn with_detector(detector: Box<dyn EntityDetector>) -> Self {
        Self {
            hash_tag: Regex::new(HASH_TAG_PATTERN).ok(),
            name_tag: Regex::new(NAME_TAG_PATTERN).ok(),
            number: Regex::new(NUMBER_PATTERN).ok(),
            detector,
        }
    }

    /// Resolves a criterion against flattened text.
    ///
    /// Returns zero or more unit ranges in text order. A criterion that
    /// cannot be resolved (invalid pattern, detector failure, out-of-bounds
    /// explicit range) yields no selectable positions rather than an error.
    pub fn resolve(&self, plain: &PlainText, criterion: &Criterion) -> Vec<Range<usize>> {
        match criterion {
            Criterion::All => vec![0..plain.len_units()],
            Criterion::Url => self.detect(plain, EntityKind::Url),
            Criterion::Date => self.detect(plain, EntityKind::Date),
            Criterion::PhoneNumber => self.detect(plain, EntityKind::PhoneNumber),
            Criterion::HashTag => sigil_matches(self.hash_tag.as_ref(), plain),
            Criterion::NameTag => sigil_matches(self.name_tag.as_ref(), plain),
            Criterion::Number => regex_matches(self.number.as_ref(), plain),
            Criterion::Match(Pattern::Compiled(re)) => regex_matches(Some(re), plain),
            Criterion::Match(Pattern::Source(source)) => {
                regex_matches(Regex::new(source).ok().as_ref(), plain)
            }
            Criterion::Range(offset, length) => {
                vec![resolve_explicit(plain.len_units(), *offset, *length)]
            }
        }
    }

    fn detect(&self, plain: &PlainText, kind: EntityKind) -> Vec<Range<usize>> {
        self.detector
            .detect(kind, plain.as_str())
            .into_iter()
            .map(|bytes| plain.unit_range(bytes))
            .collect()
    }
}

fn regex_matches(re: Option<&Regex>, plain: &PlainText) -> Vec<Range<usize>> {
    let Some(re) = re else {
        return Vec::new();
    };
    re.find_iter(plain.as_str())
        .map(|m| plain.unit_range(m.range()))
        .collect()
}

fn sigil_matches(re: Option<&Regex>, plain: &PlainText) -> Vec<Range<usize>> {
    let Some(re) = re else {
        return Vec::new();
    };
    let text = plain.as_str();
    re.find_iter(text)
        .filter(|m| !text[..m.start()].chars().next_back().is_some_and(is_word))
        .map(|m| plain.unit_range(m.range()))
        .collect()
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Resolves an explicit `(offset, length)` request against a text length.
///
/// A negative offset counts back from the end. A start landing outside
/// `[0, len]` yields an empty range; the end is clamped to `len`; a
/// non-positive length yields an empty range at the start position.
pub(crate) fn resolve_explicit(len: usize, offset: isize, length: isize) -> Range<usize> {
    let start = if offset >= 0 {
        offset
    } else {
        len as isize + offset
    };
    if start < 0 || start > len as isize {
        return 0..0;
    }
    #[allow(
        clippy::cast_sign_loss,
        reason = "`start` is checked non-negative above; `length` is clamped non-negative."
    )]
    let (start, requested) = (start as usize, length.max(0) as usize);
    let end = start.saturating_add(requested).min(len);
    start..end
}

#[cfg(test)]
mod tests {
    use super::{Criterion, Pattern, Selector, resolve_explicit};
    use crate::RichText;
    use core::ops::Range;
    use regex::Regex;

    fn resolve(text: &str, criterion: impl Into<Criterion>) -> Vec<Range<usize>> {
        let selector = Selector::new();
        let plain = RichText::from(text).to_plain();
        selector.resolve(&plain, &criterion.into())
    }

    #[test]
    fn all_selects_whole_string() {
        assert_eq!(resolve("hello", Criterion::All), vec![0..5]);
        assert_eq!(resolve("", Criterion::All), vec![0..0]);
    }

    #[test]
    fn match_source_pattern() {
        assert_eq!(resolve("ab ab", "ab"), vec![0..2, 3..5]);
        assert_eq!(resolve("abc123", "[a-z]+"), vec![0..3]);
    }

    #[test]
    fn match_compiled_pattern() {
        let re = Regex::new("[0-9]+").unwrap();
        assert_eq!(resolve("abc123", Pattern::from(re)), vec![3..6]);
    }

    #[test]
    fn invalid_pattern_resolves_to_nothing() {
        assert!(resolve("hello", "[unclosed").is_empty());
    }

    #[test]
    fn numbers() {
        assert_eq!(
            resolve("pi is 3.14, e is 2", Criterion::Number),
            vec![6..10, 17..18]
        );
    }

    #[test]
    fn hash_and_name_tags() {
        assert_eq!(resolve("@Tim at #Apple", Criterion::NameTag), vec![0..4]);
        assert_eq!(resolve("@Tim at #Apple", Criterion::HashTag), vec![8..14]);
        // A sigil preceded by a word character is not a tag.
        assert_eq!(resolve("mail@host", Criterion::NameTag), Vec::<Range<usize>>::new());
        // A bare sigil still matches, with an empty tag body.
        assert_eq!(resolve("a # b", Criterion::HashTag), vec![2..3]);
        // Doubled sigils: each starts a (possibly empty) tag.
        assert_eq!(resolve("##x", Criterion::HashTag), vec![0..1, 1..3]);
    }

    #[test]
    fn tags_in_multibyte_text() {
        // "é" is multibyte; unit indices must stay character-based.
        assert_eq!(resolve("é #tag", Criterion::HashTag), vec![2..6]);
    }

    #[test]
    fn explicit_range_arithmetic() {
        assert_eq!(resolve_explicit(10, 2, 3), 2..5);
        assert_eq!(resolve_explicit(10, -4, 2), 6..8);
        assert_eq!(resolve_explicit(10, -4, 100), 6..10);
        assert_eq!(resolve_explicit(10, 10, 1), 10..10);
        // Start outside the text is an empty selection.
        assert_eq!(resolve_explicit(10, 11, 1), 0..0);
        assert_eq!(resolve_explicit(10, -11, 1), 0..0);
        // Non-positive length selects nothing at the start position.
        assert_eq!(resolve_explicit(10, 3, 0), 3..3);
        assert_eq!(resolve_explicit(10, 3, -2), 3..3);
    }

    #[test]
    fn entity_criteria_map_to_units() {
        assert_eq!(
            resolve("« https://ex.am »", Criterion::Url),
            vec![2..15]
        );
    }
}

// Copyright 2026 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Semantic entity detection over plain text.
//!
//! [`EntityDetector`] is the seam for platform data detectors; the bundled
//! [`DataDetector`] is a regex-backed stand-in that recognizes the common
//! shapes of each entity kind. Detection failures (including a category
//! pattern that fails to compile) degrade to "no occurrences" rather than
//! propagating an error.

use core::fmt::Debug;
use core::ops::Range;

use regex::Regex;

/// The kinds of semantic entities a detector can find.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A web address.
    Url,
    /// A calendar date.
    Date,
    /// A telephone number.
    PhoneNumber,
}

/// Finds occurrences of semantic entities in plain text.
///
/// Implementations return **byte ranges** into `text`, in text order,
/// non-overlapping. A detector that cannot operate (missing platform support,
/// failed initialization) should return an empty vector.
pub trait EntityDetector: Debug {
    /// Returns the occurrences of `kind` in `text`.
    fn detect(&self, kind: EntityKind, text: &str) -> Vec<Range<usize>>;
}

const URL_PATTERN: &str = r#"(?i)\b(?:https?://|www\.)[^\s<>"]+"#;

// ISO, slashed, and month-name date forms.
const DATE_PATTERN: &str = r"\b(?:\d{4}-\d{2}-\d{2}|\d{1,2}/\d{1,2}/\d{2,4}|(?i:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+\d{1,2}(?:st|nd|rd|th)?(?:,\s*\d{4})?)\b";

// Optional country code, optional parenthesized group, then separated digit
// groups. Deliberately conservative about separators (no commas) so running
// prose and dates are not swallowed.
const PHONE_PATTERN: &str =
    r"(?:\+\d{1,3}[\s.-]?)?(?:\(\d{1,4}\)[\s.-]?)?\d{2,4}(?:[\s.-]\d{2,4}){1,3}";

/// The bundled regex-backed entity detector.
#[derive(Debug)]
pub struct DataDetector {
    url: Option<Regex>,
    date: Option<Regex>,
    phone: Option<Regex>,
}

impl DataDetector {
    /// Creates a detector with the bundled category patterns.
    pub fn new() -> Self {
        Self {
            url: Regex::new(URL_PATTERN).ok(),
            date: Regex::new(DATE_PATTERN).ok(),
            phone: Regex::new(PHONE_PATTERN).ok(),
        }
    }
}

impl Default for DataDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityDetector for DataDetector {
    fn detect(&self, kind: EntityKind, text: &str) -> Vec<Range<usize>> {
        let pattern = match kind {
            EntityKind::Url => &self.url,
            EntityKind::Date => &self.date,
            EntityKind::PhoneNumber => &self.phone,
        };
        match pattern {
            Some(re) => re.find_iter(text).map(|m| m.range()).collect(),
            None => Vec::new(),
        }
    }
}

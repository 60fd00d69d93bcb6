// Copyright 2026 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rich Text is a Rust crate for building attributed text with a chainable,
//! selection-driven API.
//!
//! The core value type is [`RichText`]: a sequence of character and embedded
//! object units, each carrying a small set of style [`Attribute`]s. Text is
//! usually assembled and styled through [`build_text`] and [`TextBuilder`]:
//!
//! ```
//! use rich_text::{Color, Criterion, TextBuilder};
//!
//! let text = TextBuilder::from("call me at #home")
//!     .select([Criterion::HashTag])
//!     .color(Color::BLUE)
//!     .build();
//! // "#home" is colored; the text before it is untouched.
//! assert_eq!(text.runs().count(), 2);
//! ```
//!
//! Selections are produced by resolving [`Criterion`] values (pattern
//! matches, semantic entities such as URLs and dates, explicit ranges)
//! against the text; attribute writes then cover every selected range.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

mod attribute;
mod builder;
mod detect;
mod error;
mod rich_text;
mod select;

pub use crate::attribute::{Attribute, AttributeKey};
pub use crate::builder::{Part, TextBuilder, build_text};
pub use crate::detect::{DataDetector, EntityDetector, EntityKind};
pub use crate::error::{Error, ErrorKind};
pub use crate::rich_text::{OBJECT_REPLACEMENT_CHAR, PlainText, RichText, Runs, UnitContent};
pub use crate::select::{Criterion, Pattern, Selector};

// Re-exported so downstream users rarely need a direct style_primitives
// dependency.
pub use style_primitives::{
    Alignment, Color, ColorSpec, Font, FontSpec, FontStyle, FontWeight, Image, ImageSpec,
    LineStyle,
};

// Copyright 2026 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fundamental style value types and descriptor resolution.
//!
//! This crate is the vocabulary layer for [`rich_text`]: small, typed
//! representations of colors, fonts, embedded images, decoration line styles,
//! and paragraph alignment, together with the *descriptor* unions that a
//! builder accepts and the resolution functions that turn a descriptor into a
//! concrete value.
//!
//! Descriptors are closed tagged unions rather than "any-typed" arguments: a
//! descriptor is either a `Source` string in one of the documented syntaxes or
//! an already-resolved `Value` handle. Unmatched source strings resolve to
//! `None` (or a documented fallback) rather than panicking.
//!
//! [`rich_text`]: https://docs.rs/rich_text
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
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
#![no_std]

extern crate alloc;

mod color;
mod decoration;
mod font;
mod image;

pub use color::{Color, ColorSpec, ParseColorError, ParseColorErrorKind, resolve_color};
pub use decoration::{Alignment, LineStyle};
pub use font::{Font, FontSpec, FontStyle, FontWeight, resolve_font};
pub use image::{Image, ImageSpec, resolve_image};

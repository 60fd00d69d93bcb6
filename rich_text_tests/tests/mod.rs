// Copyright 2026 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `rich_text`.
//!
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests. The reason we chose this design is that it makes it
//!   easier to define shared utility functions needed by different tests.
//! - If you want to add new tests, try to follow these guidelines:
//!   - `building.rs` covers part assembly and the `RichText` storage model.
//!   - `selecting.rs` covers criterion resolution and selection state.
//!   - `styling.rs` covers attribute writes through the builder chain.
//!   - For test naming, try to put the "topic" of the test at the start of the name instead of
//!     the end. For example, `select_hash_tag` is better than `hash_tag_select`.

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod building;
mod selecting;

// Copyright 2026 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use regex::Regex;
use rich_text::{
    Attribute, AttributeKey, Color, Criterion, EntityDetector, EntityKind, Image, Part,
    TextBuilder, build_text,
};

#[test]
fn select_all_is_idempotent() {
    let once = TextBuilder::from("abc")
        .select([Criterion::All])
        .color(Color::RED)
        .build();
    let twice = TextBuilder::from("abc")
        .select([Criterion::All])
        .select([Criterion::All])
        .color(Color::RED)
        .build();
    assert_eq!(once, twice);
}

#[test]
fn select_match_finds_every_occurrence() {
    let builder = TextBuilder::from("ab ab").select(["ab"]);
    assert_eq!(builder.selection(), &[0..2, 3..5]);
}

#[test]
fn select_accepts_compiled_regex() {
    let re = Regex::new(r"\bw\w+").unwrap();
    let builder = TextBuilder::from("one word while").select([re]);
    assert_eq!(builder.selection(), &[4..8, 9..14]);
}

#[test]
fn select_union_of_criteria_in_listing_order() {
    let builder = TextBuilder::from("a1 b2").select([
        Criterion::from("[a-z]"),
        Criterion::Number,
    ]);
    assert_eq!(builder.selection(), &[0..1, 3..4, 1..2, 4..5]);
}

#[test]
fn select_range_short_circuits_surrounding_criteria() {
    let builder = TextBuilder::from("ab ab").select([
        Criterion::from("ab"),
        Criterion::Range(0, 1),
        Criterion::from("b"),
    ]);
    assert_eq!(builder.selection(), &[0..1]);
}

#[test]
fn select_range_negative_offset_wraps() {
    let text = "0123456789";
    let from_end = TextBuilder::from(text).select([Criterion::Range(-3, 2)]);
    let explicit = TextBuilder::from(text).select([Criterion::Range(7, 2)]);
    assert_eq!(from_end.selection(), explicit.selection());
    assert_eq!(from_end.selection(), &[7..9]);
}

#[test]
fn select_range_clamps_and_empties() {
    let text = "0123456789";
    // Length past the end is clamped.
    let builder = TextBuilder::from(text).select([Criterion::Range(8, 100)]);
    assert_eq!(builder.selection(), &[8..10]);
    // A start outside the text selects nothing.
    let builder = TextBuilder::from(text).select([Criterion::Range(42, 1)]);
    assert_eq!(builder.selection(), &[0..0]);
    let builder = TextBuilder::from(text).select([Criterion::Range(-42, 1)]);
    assert_eq!(builder.selection(), &[0..0]);
}

#[test]
fn select_hash_and_name_tags() {
    let builder = TextBuilder::from("@Tim at #Apple").select([Criterion::NameTag]);
    assert_eq!(builder.selection(), &[0..4]);
    let builder = TextBuilder::from("@Tim at #Apple").select([Criterion::HashTag]);
    assert_eq!(builder.selection(), &[8..14]);
}

#[test]
fn select_tag_rejects_infix_sigils() {
    let builder = TextBuilder::from("mail@example.com").select([Criterion::NameTag]);
    assert_eq!(builder.selection(), &[] as &[Range<usize>]);
}

#[test]
fn select_bare_sigil_is_an_empty_tag() {
    let builder = TextBuilder::from("a # b").select([Criterion::HashTag]);
    assert_eq!(builder.selection(), &[2..3]);
}

#[test]
fn select_numbers_with_decimals() {
    let builder = TextBuilder::from("v1.2 costs 30").select([Criterion::Number]);
    assert_eq!(builder.selection(), &[1..4, 11..13]);
}

#[test]
fn select_url_in_text() {
    let built = TextBuilder::from("see https://example.com now")
        .select([Criterion::Url])
        .color(Color::BLUE)
        .build();
    assert_eq!(built.attribute(3, AttributeKey::Foreground), None);
    assert_eq!(
        built.attribute(4, AttributeKey::Foreground),
        Some(&Attribute::Foreground(Color::BLUE))
    );
    assert_eq!(
        built.attribute(22, AttributeKey::Foreground),
        Some(&Attribute::Foreground(Color::BLUE))
    );
    assert_eq!(built.attribute(23, AttributeKey::Foreground), None);
}

#[test]
fn select_with_no_matches_styles_nothing() {
    let built = TextBuilder::from("no links here")
        .select([Criterion::Url])
        .color(Color::BLUE)
        .build();
    for i in 0..built.len() {
        assert_eq!(built.attribute(i, AttributeKey::Foreground), None);
    }
}

#[test]
fn select_positions_account_for_embedded_objects() {
    // The object occupies one unit, so "ab" after it starts at unit 3.
    let builder = build_text([
        Part::from("ab "),
        Part::from(Image::new("dot")),
        Part::from("ab"),
    ])
    .select(["ab"]);
    assert_eq!(builder.selection(), &[0..2, 4..6]);
}

#[derive(Debug)]
struct FixedDetector(Vec<Range<usize>>);

impl EntityDetector for FixedDetector {
    fn detect(&self, kind: EntityKind, _text: &str) -> Vec<Range<usize>> {
        match kind {
            EntityKind::Url => self.0.clone(),
            _ => Vec::new(),
        }
    }
}

#[test]
fn select_uses_injected_detector() {
    let builder = TextBuilder::from("hello")
        .with_detector(Box::new(FixedDetector(vec![1..3])))
        .select([Criterion::Url]);
    assert_eq!(builder.selection(), &[1..3]);

    let builder = TextBuilder::from("hello")
        .with_detector(Box::new(FixedDetector(vec![])))
        .select([Criterion::Date]);
    assert_eq!(builder.selection(), &[] as &[Range<usize>]);
}

// Copyright 2026 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use rich_text::{
    Attribute, AttributeKey, Color, Image, ImageSpec, OBJECT_REPLACEMENT_CHAR, Part, RichText,
    TextBuilder, UnitContent, build_text,
};

#[test]
fn build_concatenates_parts_in_order() {
    let text = build_text([
        Part::from("Hello, "),
        Part::from(Image::new("wave")),
        Part::from(" world"),
    ])
    .build();
    assert_eq!(text.len(), 14);
    assert_eq!(
        text.content_at(7),
        Some(&UnitContent::Object(Image::new("wave")))
    );
    assert_eq!(text.content_at(8), Some(&UnitContent::Char(' ')));
}

#[test]
fn build_embeds_rich_parts_with_attributes() {
    let red = TextBuilder::from("red").color(Color::RED).build();
    let text = build_text([Part::from("a "), Part::from(red), Part::from(" b")]).build();
    assert_eq!(text.len(), 7);
    assert_eq!(text.attribute(1, AttributeKey::Foreground), None);
    assert_eq!(
        text.attribute(2, AttributeKey::Foreground),
        Some(&Attribute::Foreground(Color::RED))
    );
    assert_eq!(
        text.attribute(4, AttributeKey::Foreground),
        Some(&Attribute::Foreground(Color::RED))
    );
    assert_eq!(text.attribute(5, AttributeKey::Foreground), None);
}

#[test]
fn build_drops_unresolvable_image_parts() {
    let text = build_text([Part::from("ab"), Part::from(ImageSpec::Source(String::new()))]).build();
    assert_eq!(text.len(), 2);
}

#[test]
fn object_counts_as_one_unit_in_flattened_text() {
    let mut text = RichText::from("a");
    text.push_object(Image::new("pin"));
    text.push_str("b");

    let plain = text.to_plain();
    assert_eq!(plain.len_units(), 3);
    assert_eq!(plain.as_str().chars().nth(1), Some(OBJECT_REPLACEMENT_CHAR));
}

#[test]
fn runs_recover_maximal_spans() {
    let text = TextBuilder::from("one two")
        .select(["two"])
        .color(Color::BLUE)
        .build();

    let runs: Vec<_> = text.runs().collect();
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].0, 0..4);
    assert!(runs[0].1.is_empty());
    assert_eq!(runs[1].0, 4..7);
    assert_eq!(runs[1].1, &[Attribute::Foreground(Color::BLUE)]);
}

#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

#[test]
fn empty_text_measures_at_least_one_by_one() {
    let size = GlyphEstimate.measure("", 28.0);
    assert!(size.x >= 1.0);
    assert!(size.y >= 1.0);
}

#[test]
fn width_grows_with_text_length() {
    let short = GlyphEstimate.measure("hi", 28.0);
    let long = GlyphEstimate.measure("hello world", 28.0);
    assert!(long.x > short.x);
}

#[test]
fn height_grows_with_line_count() {
    let one = GlyphEstimate.measure("hello", 28.0);
    let two = GlyphEstimate.measure("hello\nworld", 28.0);
    assert_eq!(two.y, one.y * 2.0);
}

#[test]
fn width_uses_longest_line() {
    let a = GlyphEstimate.measure("hello world\nhi", 28.0);
    let b = GlyphEstimate.measure("hello world", 28.0);
    assert_eq!(a.x, b.x);
}

#[test]
fn scales_linearly_with_font_size() {
    let small = GlyphEstimate.measure("abc", 14.0);
    let big = GlyphEstimate.measure("abc", 28.0);
    assert_eq!(big.x, small.x * 2.0);
    assert_eq!(big.y, small.y * 2.0);
}

#[test]
fn deterministic_for_identical_input() {
    let a = GlyphEstimate.measure("stable", 28.0);
    let b = GlyphEstimate.measure("stable", 28.0);
    assert_eq!(a, b);
}

//! Property-based tests for segmentation and line splitting.
//!
//! These tests use proptest to generate mixed-script text and verify:
//! 1. Round-trip: tokens and lines concatenate back to the input
//! 2. Width bound: only a lone over-wide token may exceed the budget
//! 3. No mid-token break: every line boundary is a token boundary
//! 4. Idempotence: analyzing the joined tokens gives the same tokens

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use std::collections::BTreeSet;

use mikan::{analyze, string_width, tokens, Splitter};
use proptest::prelude::*;

// -- Text Generation Strategies --

/// Runes covering every class and the interesting glue cases.
const POOL: &[char] = &[
    '常', '最', '新', '株', '々', 'に', 'の', 'を', 'か', 'ら', 'モ', 'バ', 'イ', 'ル', 'ー',
    'ﾊ', 'ﾛ', 'ｰ', 'ﾞ', '･', '・', 'a', 'B', 'z', 'é', 'ѐ', 'Ж', '0', '7', '５', ' ', '\t',
    '　', '\'', '’', '`', '´', '-', '~', '〜', '～', '&', '＆', '、', '。', '.', ',', '!', '?',
    '(', ')', '「', '」', '㈱', '→', '😀', '\n', '\r', '\u{0301}', '\u{3099}',
];

fn mixed_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(POOL), 0..64)
        .prop_map(|runes| runes.into_iter().collect())
}

fn any_text() -> impl Strategy<Value = String> {
    prop_oneof![mixed_text(), any::<String>()]
}

/// Byte offsets where a token ends.
fn token_ends(text: &str) -> BTreeSet<usize> {
    tokens(text).map(|token| token.end()).collect()
}

proptest! {
    #[test]
    fn analyze_round_trips(text in any_text()) {
        prop_assert_eq!(analyze(&text).concat(), text);
    }

    #[test]
    fn tokens_are_non_empty(text in any_text()) {
        prop_assert!(analyze(&text).iter().all(|token| !token.is_empty()));
    }

    #[test]
    fn analyze_is_idempotent(text in any_text()) {
        let first = analyze(&text);
        let joined = first.concat();
        prop_assert_eq!(analyze(&joined), first);
    }

    #[test]
    fn split_round_trips(text in any_text(), width in 1usize..40) {
        let splitter = Splitter::new(width).unwrap();
        prop_assert_eq!(splitter.split(&text).concat(), text);
    }

    #[test]
    fn lines_respect_width(text in mixed_text(), width in 1usize..40) {
        let splitter = Splitter::new(width).unwrap();
        let all: Vec<_> = tokens(&text).collect();
        let mut start = 0;
        for line in splitter.split(&text) {
            let end = start + line.len();
            let line_tokens: Vec<_> = all
                .iter()
                .filter(|t| t.offset >= start && t.end() <= end && !t.is_line_break())
                .collect();
            start = end;
            let line_width: usize = line_tokens.iter().map(|t| t.width()).sum();
            prop_assert!(
                line_width <= width || line_tokens.len() == 1,
                "line {:?} is {} columns, budget {}",
                line,
                line_width,
                width
            );
        }
    }

    #[test]
    fn lines_end_on_token_boundaries(text in any_text(), width in 1usize..40) {
        let splitter = Splitter::new(width).unwrap();
        let ends = token_ends(&text);
        let mut offset = 0;
        for line in splitter.split(&text) {
            offset += line.len();
            prop_assert!(ends.contains(&offset), "line ends mid-token at byte {}", offset);
        }
    }

    #[test]
    fn line_count_matches_split(text in any_text(), width in 1usize..40) {
        let splitter = Splitter::new(width).unwrap();
        prop_assert_eq!(splitter.line_count(&text), splitter.split(&text).len());
    }

    #[test]
    fn truncate_fits_budget(text in mixed_text(), width in 1usize..40) {
        let splitter = Splitter::new(width).unwrap();
        let truncated = splitter.truncate(&text, "…");
        if truncated != text.as_str() {
            prop_assert!(string_width(&truncated) <= width);
        }
    }
}

//! Text truncation with configurable suffix.
//!
//! Truncates text to fit within a column budget, appending a suffix
//! (e.g. "…" or "...") when the text does not fit. Cuts fall on token
//! boundaries, so particles and glued punctuation are dropped together with
//! their stem. Only when not even the first token fits is the text cut
//! between runes.

use std::borrow::Cow;

use super::width::{char_width, string_width};
use super::wrap::Splitter;
use crate::segment::tokens;

impl Splitter {
    /// Truncate `text` to this splitter's budget. See [`truncate_text`].
    pub fn truncate<'a>(&self, text: &'a str, suffix: &str) -> Cow<'a, str> {
        truncate_text(text, self.rune_width(), suffix)
    }
}

/// Truncate text to fit within `max_width` columns.
///
/// If the text is wider than `max_width`, the longest prefix of whole tokens
/// that leaves room for `suffix` is kept, trailing whitespace is dropped, and
/// `suffix` is appended.
///
/// Returns the original text (borrowed) if it fits within `max_width`.
///
/// # Arguments
///
/// * `text` - The text to truncate
/// * `max_width` - Maximum display width in columns
/// * `suffix` - String to append when truncated (e.g., `"…"` or `"..."`)
pub fn truncate_text<'a>(text: &'a str, max_width: usize, suffix: &str) -> Cow<'a, str> {
    if max_width == 0 {
        return Cow::Borrowed("");
    }

    if string_width(text) <= max_width {
        return Cow::Borrowed(text);
    }

    let suffix_width = string_width(suffix);
    if suffix_width >= max_width {
        // Suffix alone fills the budget. Truncate the suffix itself.
        return Cow::Owned(cut_runes(suffix, max_width).to_owned());
    }

    let target_width = max_width - suffix_width;
    let mut end = 0;
    let mut current_width = 0;

    for token in tokens(text) {
        let tw = string_width(token.text);
        if current_width + tw > target_width {
            break;
        }
        current_width += tw;
        end = token.end();
    }

    let kept = if end == 0 {
        cut_runes(text, target_width)
    } else {
        text[..end].trim_end()
    };

    let mut result = String::with_capacity(kept.len() + suffix.len());
    result.push_str(kept);
    result.push_str(suffix);
    Cow::Owned(result)
}

/// Longest prefix of `text` at most `max_width` columns wide.
fn cut_runes(text: &str, max_width: usize) -> &str {
    let mut current_width = 0;

    for (idx, c) in text.char_indices() {
        let cw = char_width(c);
        if current_width + cw > max_width {
            return &text[..idx];
        }
        current_width += cw;
    }

    text
}

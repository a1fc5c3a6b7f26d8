//! Greedy line splitting over tokens.
//!
//! Lines are filled token by token. A token that would push the current line
//! past the budget starts the next line instead, so no token is ever split.
//! A token wider than the budget on its own gets a line to itself, plus the
//! line break that follows it, if any.
//!
//! Line break tokens (`\n`, `\r\n`, …) take no columns and close the line
//! they end, so explicit newlines survive as hard breaks. Lines borrow from
//! the input and concatenate back to it exactly.

use std::iter::{FusedIterator, Peekable};

use crate::config::SplitterConfig;
use crate::error::Result;
use crate::segment::{tokens, Tokens};

/// Splits text into lines of at most `rune_width` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Splitter {
    config: SplitterConfig,
}

impl Splitter {
    /// Create a splitter with a budget of `rune_width` columns per line.
    ///
    /// Fails with [`Error::InvalidRuneWidth`](crate::Error::InvalidRuneWidth)
    /// when `rune_width` is zero.
    pub fn new(rune_width: usize) -> Result<Self> {
        Self::from_config(SplitterConfig::new(rune_width))
    }

    pub fn from_config(config: SplitterConfig) -> Result<Self> {
        config.validate()?;
        tracing::debug!(rune_width = config.rune_width, "splitter configured");
        Ok(Self { config })
    }

    #[inline]
    pub fn rune_width(&self) -> usize {
        self.config.rune_width
    }

    #[inline]
    pub fn config(&self) -> SplitterConfig {
        self.config
    }

    /// Lazily iterate over the lines of `text`.
    pub fn lines<'a>(&self, text: &'a str) -> Lines<'a> {
        Lines {
            text,
            tokens: tokens(text).peekable(),
            rune_width: self.config.rune_width,
        }
    }

    /// Split `text` into lines.
    ///
    /// ```
    /// let splitter = mikan::Splitter::new(26).unwrap();
    /// assert_eq!(
    ///     splitter.split("常に最新、最高のモバイル。Androidを開発した同じチームから。"),
    ///     ["常に最新、最高のモバイル。", "Androidを開発した同じ", "チームから。"],
    /// );
    /// ```
    #[tracing::instrument(level = "trace", skip_all, fields(len = text.len(), rune_width = self.config.rune_width))]
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.lines(text).collect()
    }

    /// Number of lines `text` occupies, without collecting them.
    ///
    /// Returns 0 for empty text.
    pub fn line_count(&self, text: &str) -> usize {
        self.lines(text).count()
    }
}

/// Split `text` into lines of at most `rune_width` columns.
///
/// Validates `rune_width` on every call. Build a [`Splitter`] once to reuse
/// a budget.
pub fn split(text: &str, rune_width: usize) -> Result<Vec<&str>> {
    Ok(Splitter::new(rune_width)?.split(text))
}

/// Lazy line iterator. Created by [`Splitter::lines`].
///
/// Every line fits the budget except one that starts with an over-wide
/// token. Such a line holds only that token and, when one follows, the
/// zero-width line break token ending it (`"abcdefgh\n"` at width 3).
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    text: &'a str,
    tokens: Peekable<Tokens<'a>>,
    rune_width: usize,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let first = self.tokens.next()?;
        let start = first.offset;
        let mut end = first.end();

        if first.is_line_break() {
            return Some(&self.text[start..end]);
        }

        let budget = self.rune_width;
        let mut width = first.width();
        if width > budget {
            tracing::trace!(width, budget, token = first.text, "token wider than line budget");
        }

        while let Some(token) = self
            .tokens
            .next_if(|next| next.is_line_break() || width + next.width() <= budget)
        {
            end = token.end();
            width += token.width();
            if token.is_line_break() {
                break;
            }
        }

        Some(&self.text[start..end])
    }
}

impl FusedIterator for Lines<'_> {}

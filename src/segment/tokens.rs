//! Token iteration.
//!
//! [`Tokens`] folds [`State::step`] over the runes of a string and yields a
//! [`Token`] every time a boundary is reported. Tokens borrow from the input,
//! so their concatenation is the input itself.

use std::iter::FusedIterator;
use std::str::CharIndices;

use super::classify::classify;
use super::state::State;
use crate::types::Token;

/// Lazy token iterator. Created by [`tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    chars: CharIndices<'a>,
    /// Byte offset where the buffered token starts.
    start: usize,
    state: State,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices(),
            start: 0,
            state: State::Empty,
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        for (idx, rune) in self.chars.by_ref() {
            let step = self.state.step(rune, classify(rune));
            let buffered = std::mem::replace(&mut self.state, step.next);

            if !step.boundary {
                continue;
            }
            if let Some(class) = buffered.class() {
                let token = Token {
                    text: &self.text[self.start..idx],
                    offset: self.start,
                    class,
                };
                self.start = idx;
                return Some(token);
            }
        }

        // End of input: flush the buffer.
        let class = std::mem::take(&mut self.state).class()?;
        let token = Token {
            text: &self.text[self.start..],
            offset: self.start,
            class,
        };
        self.start = self.text.len();
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.text.len() - self.start;
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl FusedIterator for Tokens<'_> {}

/// Iterate over the tokens of `text`.
pub fn tokens(text: &str) -> Tokens<'_> {
    Tokens::new(text)
}

/// Split `text` into its tokens.
///
/// Concatenating the result reproduces `text` exactly.
///
/// ```
/// assert_eq!(mikan::analyze("Hello & World"), ["Hello", " ", "&", " ", "World"]);
/// assert_eq!(mikan::analyze("常に最新、最高の"), ["常に", "最新、", "最高の"]);
/// ```
#[tracing::instrument(level = "trace", skip_all, fields(len = text.len()))]
pub fn analyze(text: &str) -> Vec<&str> {
    tokens(text).map(|token| token.text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RuneClass;

    #[test]
    fn empty_input() {
        assert!(analyze("").is_empty());
        assert_eq!(tokens("").next(), None);
    }

    #[test]
    fn offsets_are_contiguous() {
        let text = "Androidを開発した、同じ チーム";
        let mut expected = 0;
        for token in tokens(text) {
            assert_eq!(token.offset, expected);
            assert_eq!(&text[token.offset..token.end()], token.text);
            expected = token.end();
        }
        assert_eq!(expected, text.len());
    }

    #[test]
    fn token_classes() {
        let classes: Vec<_> = tokens("常に 「モバイル」&").map(|t| t.class).collect();
        assert_eq!(
            classes,
            vec![
                RuneClass::Hiragana,
                RuneClass::Space,
                RuneClass::Katakana,
                RuneClass::StandaloneBreak,
            ]
        );
    }

    #[test]
    fn fused_after_end() {
        let mut iter = tokens("a");
        assert_eq!(iter.next().map(|t| t.text), Some("a"));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn consecutive_spaces_are_separate() {
        assert_eq!(analyze("a  b"), ["a", " ", " ", "b"]);
    }

    #[test]
    fn crlf_stays_together() {
        assert_eq!(analyze("one\r\ntwo\n\n"), ["one", "\r\n", "two", "\n", "\n"]);
    }

    #[test]
    fn numbers_keep_separators() {
        assert_eq!(analyze("3.14 1,000円"), ["3.14", " ", "1,000", "円"]);
    }

    #[test]
    fn separators_end_words() {
        assert_eq!(analyze("Hello,World"), ["Hello,", "World"]);
        assert_eq!(analyze("end.Next"), ["end.", "Next"]);
        assert_eq!(analyze("Hello.3"), ["Hello.", "3"]);
    }

    #[test]
    fn emoji_are_single() {
        assert_eq!(analyze("😀😀!"), ["😀", "😀!"]);
    }
}

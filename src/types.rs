//! Core types for mikan.
//!
//! Every rune is mapped to a [`RuneClass`], runs of compatible classes are
//! glued into [`Token`]s, and tokens are packed into lines.

use crate::layout::text_measure::string_width;

// =============================================================================
// Glue kinds
// =============================================================================

/// How a glue punctuation mark attaches to the token it trails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glue {
    /// Extends the current token without changing its class.
    /// Apostrophes, hyphens, `ー`, middle dots, closing brackets, combining marks.
    Trailing,
    /// Ends a clause or sentence: `、` `。` `!` `?` and fullwidth forms.
    /// Nothing substantive may follow it inside the same token.
    Terminator,
    /// ASCII `.` and `,`. Ends the token like [`Glue::Terminator`], except that
    /// a digit run continues right after it (`3.14`, `1,000`).
    Separator,
    /// ASCII `~`. Trails like [`Glue::Trailing`], but at the start of a token
    /// it stands alone instead of gluing forward.
    Tilde,
}

// =============================================================================
// RuneClass
// =============================================================================

/// Semantic class of a single code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuneClass {
    /// CJK ideographs, iteration marks, enclosed and compatibility CJK forms.
    Kanji,
    Hiragana,
    Katakana,
    /// Halfwidth katakana (U+FF66..U+FF9F), including the halfwidth voicing marks.
    HalfwidthKatakana,
    /// Latin, Cyrillic, Greek, Hangul and every code point without a table entry.
    Letter,
    /// ASCII and fullwidth digits.
    Digit,
    /// ASCII space, tab and the typographic spaces. Always its own token.
    Space,
    /// Ideographic space `　`. Always its own token.
    FullwidthSpace,
    /// A mark that extends an adjacent token instead of breaking.
    GluePunctuation(Glue),
    /// `&` `＆` `〜` `～`. Always its own token, glues to nothing.
    StandaloneBreak,
    /// Opening brackets and quotes. Breaks before itself and glues forward.
    OpeningBracket,
    /// Hard line break. Always its own token (`\r\n` stays together).
    LineBreak,
    /// Symbols and pictographs. One token per rune; trailing glue still attaches.
    Other,
}

impl RuneClass {
    /// The [`ClassSet`] bit for this class.
    pub const fn flag(self) -> ClassSet {
        match self {
            Self::Kanji => ClassSet::KANJI,
            Self::Hiragana => ClassSet::HIRAGANA,
            Self::Katakana => ClassSet::KATAKANA,
            Self::HalfwidthKatakana => ClassSet::HALFWIDTH_KATAKANA,
            Self::Letter => ClassSet::LETTER,
            Self::Digit => ClassSet::DIGIT,
            Self::Space => ClassSet::SPACE,
            Self::FullwidthSpace => ClassSet::FULLWIDTH_SPACE,
            Self::GluePunctuation(_) => ClassSet::GLUE,
            Self::StandaloneBreak => ClassSet::STANDALONE,
            Self::OpeningBracket => ClassSet::OPENING_BRACKET,
            Self::LineBreak => ClassSet::LINE_BREAK,
            Self::Other => ClassSet::OTHER,
        }
    }

    /// Whether this class carries content that decides a token's class.
    #[inline]
    pub const fn is_substantive(self) -> bool {
        ClassSet::SUBSTANTIVE.contains(self.flag())
    }

    /// Whether a rune of this class always forms a token on its own.
    #[inline]
    pub const fn is_standalone(self) -> bool {
        ClassSet::ALONE.contains(self.flag())
    }
}

// =============================================================================
// ClassSet (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// A set of rune classes, used for membership checks in the merge table.
    ///
    /// Combine with bitwise OR: `ClassSet::KANJI | ClassSet::HIRAGANA`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ClassSet: u16 {
        const KANJI = 1 << 0;
        const HIRAGANA = 1 << 1;
        const KATAKANA = 1 << 2;
        const HALFWIDTH_KATAKANA = 1 << 3;
        const LETTER = 1 << 4;
        const DIGIT = 1 << 5;
        const SPACE = 1 << 6;
        const FULLWIDTH_SPACE = 1 << 7;
        const GLUE = 1 << 8;
        const STANDALONE = 1 << 9;
        const OPENING_BRACKET = 1 << 10;
        const LINE_BREAK = 1 << 11;
        const OTHER = 1 << 12;

        /// Classes that open or extend a run.
        const SUBSTANTIVE = Self::KANJI.bits()
            | Self::HIRAGANA.bits()
            | Self::KATAKANA.bits()
            | Self::HALFWIDTH_KATAKANA.bits()
            | Self::LETTER.bits()
            | Self::DIGIT.bits()
            | Self::OTHER.bits();

        /// Classes that are never glued to a neighbour.
        const ALONE = Self::SPACE.bits()
            | Self::FULLWIDTH_SPACE.bits()
            | Self::STANDALONE.bits()
            | Self::LINE_BREAK.bits();

        /// Open classes that a following hiragana run attaches to
        /// (okurigana after kanji, particles after everything else).
        const TAKES_HIRAGANA = Self::KANJI.bits()
            | Self::HIRAGANA.bits()
            | Self::KATAKANA.bits()
            | Self::HALFWIDTH_KATAKANA.bits()
            | Self::LETTER.bits()
            | Self::DIGIT.bits();

        /// Classes whose runs continue across a [`Glue::Separator`].
        /// Letters never do: `Hello,World` is two tokens.
        const RESUMES = Self::DIGIT.bits();
    }
}

// =============================================================================
// Token - The atomic unit of line wrapping
// =============================================================================

/// A maximal glued unit of the input. Never split across lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    /// The token's text, borrowed from the input.
    pub text: &'a str,
    /// Byte offset of `text` within the input.
    pub offset: usize,
    /// The class that decided this token. For glue-only tokens this is the
    /// class of the first rune.
    pub class: RuneClass,
}

impl Token<'_> {
    /// Display width in terminal columns. Line breaks occupy no columns.
    pub fn width(&self) -> usize {
        if self.is_line_break() {
            0
        } else {
            string_width(self.text)
        }
    }

    #[inline]
    pub fn is_line_break(&self) -> bool {
        self.class == RuneClass::LineBreak
    }

    /// Byte offset one past the end of this token.
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

impl AsRef<str> for Token<'_> {
    fn as_ref(&self) -> &str {
        self.text
    }
}

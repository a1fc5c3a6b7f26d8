//! Column width of runes and strings.
//!
//! Widths come from the Unicode East Asian Width property: Wide and
//! Fullwidth code points take 2 columns, everything else takes 1. Control
//! characters and combining marks are also 1 here, except the combining kana
//! voicing marks U+3099 and U+309A, which are East Asian Wide and take 2.
//! Zero-width handling belongs to the renderer; the splitter only needs a
//! stable upper bound.

use unicode_width::UnicodeWidthChar;

/// Display width of a single code point: `1` or `2`.
///
/// - `2` for East Asian Wide and Fullwidth (CJK ideographs, kana,
///   fullwidth forms, CJK punctuation like `、` and `。`)
/// - `1` for everything else (ASCII, Latin, Cyrillic, halfwidth katakana, …)
#[inline]
pub fn char_width(c: char) -> usize {
    if c.is_ascii() {
        return 1;
    }
    match c {
        // Combining (han)dakuten: EAW Wide, but width() reports 0.
        '\u{3099}' | '\u{309A}' => 2,
        _ if c.width() == Some(2) => 2,
        _ => 1,
    }
}

/// Display width of a string: the sum of its [`char_width`]s.
pub fn string_width(s: &str) -> usize {
    // Every ASCII byte is one rune of width 1.
    if s.is_ascii() {
        return s.len();
    }
    s.chars().map(char_width).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── char_width ──

    #[test]
    fn char_width_ascii() {
        assert_eq!(char_width('a'), 1);
        assert_eq!(char_width('Z'), 1);
        assert_eq!(char_width(' '), 1);
        assert_eq!(char_width('~'), 1);
    }

    #[test]
    fn char_width_control_is_narrow() {
        assert_eq!(char_width('\0'), 1);
        assert_eq!(char_width('\t'), 1);
        assert_eq!(char_width('\n'), 1);
        assert_eq!(char_width('\x7F'), 1);
    }

    #[test]
    fn char_width_cjk() {
        assert_eq!(char_width('常'), 2);
        assert_eq!(char_width('に'), 2);
        assert_eq!(char_width('モ'), 2);
        assert_eq!(char_width('ー'), 2);
        assert_eq!(char_width('、'), 2);
        assert_eq!(char_width('。'), 2);
        assert_eq!(char_width('㈱'), 2);
    }

    #[test]
    fn char_width_fullwidth() {
        assert_eq!(char_width('Ａ'), 2);
        assert_eq!(char_width('０'), 2);
        assert_eq!(char_width('　'), 2);
        assert_eq!(char_width('～'), 2);
    }

    #[test]
    fn char_width_halfwidth_katakana() {
        assert_eq!(char_width('ﾊ'), 1);
        assert_eq!(char_width('ｰ'), 1);
        assert_eq!(char_width('ﾞ'), 1);
        assert_eq!(char_width('･'), 1);
    }

    #[test]
    fn char_width_combining_is_narrow() {
        assert_eq!(char_width('\u{0301}'), 1);
    }

    #[test]
    fn char_width_kana_voicing_marks() {
        assert_eq!(char_width('\u{3099}'), 2);
        assert_eq!(char_width('\u{309A}'), 2);
        // Spacing forms and the halfwidth marks are unaffected.
        assert_eq!(char_width('゛'), 2);
        assert_eq!(char_width('ﾟ'), 1);
        assert_eq!(string_width("か\u{3099}"), 4);
    }

    #[test]
    fn char_width_accented() {
        assert_eq!(char_width('é'), 1);
        assert_eq!(char_width('ѐ'), 1);
        assert_eq!(char_width('Ж'), 1);
    }

    // ── string_width ──

    #[test]
    fn string_width_ascii() {
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width(""), 0);
        assert_eq!(string_width("a b c"), 5);
    }

    #[test]
    fn string_width_cjk() {
        assert_eq!(string_width("常に"), 4);
        assert_eq!(string_width("Androidを"), 9);
        assert_eq!(string_width("モバイル。"), 10);
    }

    #[test]
    fn string_width_mixed() {
        assert_eq!(string_width("ﾊﾛｰ・ﾜｰﾙﾄﾞ"), 10);
        assert_eq!(string_width("cafѐ"), 4);
    }
}

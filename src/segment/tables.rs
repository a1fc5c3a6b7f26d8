//! Classification tables.
//!
//! Two sorted tables drive [`classify`](super::classify):
//!
//! - [`OVERRIDES`]: single code points, checked first.
//! - [`RANGES`]: inclusive, non-overlapping code point ranges.
//!
//! Anything in neither table is a [`RuneClass::Letter`]. Both tables are
//! binary-searched, so entries MUST stay sorted by code point. The tests at the
//! bottom of this file enforce it.

use crate::types::{Glue, RuneClass};

const KANJI: RuneClass = RuneClass::Kanji;
const HIRAGANA: RuneClass = RuneClass::Hiragana;
const KATAKANA: RuneClass = RuneClass::Katakana;
const HALFWIDTH: RuneClass = RuneClass::HalfwidthKatakana;
const LETTER: RuneClass = RuneClass::Letter;
const DIGIT: RuneClass = RuneClass::Digit;
const SPACE: RuneClass = RuneClass::Space;
const WIDE_SPACE: RuneClass = RuneClass::FullwidthSpace;
const ALONE: RuneClass = RuneClass::StandaloneBreak;
const OPEN: RuneClass = RuneClass::OpeningBracket;
const NEWLINE: RuneClass = RuneClass::LineBreak;
const OTHER: RuneClass = RuneClass::Other;

const TRAIL: RuneClass = RuneClass::GluePunctuation(Glue::Trailing);
const STOP: RuneClass = RuneClass::GluePunctuation(Glue::Terminator);
const SEP: RuneClass = RuneClass::GluePunctuation(Glue::Separator);
const TILDE: RuneClass = RuneClass::GluePunctuation(Glue::Tilde);

// =============================================================================
// Single code points
// =============================================================================

/// Exceptions to [`RANGES`], sorted by code point.
pub(crate) static OVERRIDES: &[(u32, RuneClass)] = &[
    (0x0009, SPACE),      // \t
    (0x000A, NEWLINE),    // \n
    (0x000B, NEWLINE),    // \v
    (0x000C, NEWLINE),    // \f
    (0x000D, NEWLINE),    // \r
    (0x0020, SPACE),      // ' '
    (0x0021, STOP),       // !
    (0x0026, ALONE),      // &
    (0x0028, OPEN),       // (
    (0x002C, SEP),        // ,
    (0x002E, SEP),        // .
    (0x003F, STOP),       // ?
    (0x005B, OPEN),       // [
    (0x007B, OPEN),       // {
    (0x007E, TILDE),      // ~
    (0x0085, NEWLINE),    // NEL
    (0x00AA, LETTER),     // ª
    (0x00B5, LETTER),     // µ
    (0x00BA, LETTER),     // º
    (0x00D7, TRAIL),      // ×
    (0x00F7, TRAIL),      // ÷
    (0x2018, OPEN),       // ‘
    (0x201C, OPEN),       // “
    (0x2028, NEWLINE),    // line separator
    (0x2029, NEWLINE),    // paragraph separator
    (0x3000, WIDE_SPACE), // ideographic space
    (0x3001, STOP),       // 、
    (0x3002, STOP),       // 。
    (0x3005, KANJI),      // 々
    (0x3006, KANJI),      // 〆
    (0x3007, KANJI),      // 〇
    (0x3008, OPEN),       // 〈
    (0x300A, OPEN),       // 《
    (0x300C, OPEN),       // 「
    (0x300E, OPEN),       // 『
    (0x3010, OPEN),       // 【
    (0x3014, OPEN),       // 〔
    (0x3016, OPEN),       // 〖
    (0x3018, OPEN),       // 〘
    (0x301A, OPEN),       // 〚
    (0x301C, ALONE),      // 〜
    (0x301D, OPEN),       // 〝
    (0x303B, KANJI),      // 〻
    (0x30A0, TRAIL),      // ゠
    (0x30FB, TRAIL),      // ・
    (0x30FC, TRAIL),      // ー
    (0xFF01, STOP),       // ！
    (0xFF06, ALONE),      // ＆
    (0xFF08, OPEN),       // （
    (0xFF0C, STOP),       // ，
    (0xFF0E, STOP),       // ．
    (0xFF1F, STOP),       // ？
    (0xFF3B, OPEN),       // ［
    (0xFF5B, OPEN),       // ｛
    (0xFF5E, ALONE),      // ～
    (0xFF5F, OPEN),       // ｟
    (0xFF61, STOP),       // ｡
    (0xFF62, OPEN),       // ｢
    (0xFF64, STOP),       // ､
    (0xFF65, TRAIL),      // ･
];

// =============================================================================
// Ranges
// =============================================================================

/// Inclusive `(first, last, class)` ranges, sorted and non-overlapping.
pub(crate) static RANGES: &[(u32, u32, RuneClass)] = &[
    (0x0000, 0x001F, TRAIL), // C0 controls
    (0x0021, 0x002F, TRAIL), // ASCII punctuation
    (0x0030, 0x0039, DIGIT),
    (0x003A, 0x0040, TRAIL),
    (0x005B, 0x0060, TRAIL),
    (0x007B, 0x007F, TRAIL),
    (0x0080, 0x009F, TRAIL),   // C1 controls
    (0x00A0, 0x00BF, TRAIL),   // NBSP, Latin-1 punctuation, ´
    (0x0300, 0x036F, TRAIL),   // combining diacritical marks
    (0x1AB0, 0x1AFF, TRAIL),   // combining diacritical marks extended
    (0x1DC0, 0x1DFF, TRAIL),   // combining diacritical marks supplement
    (0x2000, 0x200A, SPACE),   // typographic spaces
    (0x200B, 0x206F, TRAIL),   // ZWSP, ZWJ, dashes, quotes, general punctuation
    (0x2070, 0x20CF, OTHER),   // super/subscripts, currency
    (0x20D0, 0x20FF, TRAIL),   // combining marks for symbols
    (0x2100, 0x2BFF, OTHER),   // letterlike, arrows, math, box drawing, dingbats
    (0x2E80, 0x2FDF, KANJI),   // radicals
    (0x3003, 0x303F, TRAIL),   // CJK symbols and punctuation
    (0x3041, 0x3096, HIRAGANA),
    (0x3099, 0x309C, TRAIL),   // voiced sound marks
    (0x309D, 0x309F, HIRAGANA),
    (0x30A1, 0x30FA, KATAKANA),
    (0x30FD, 0x30FF, KATAKANA),
    (0x3190, 0x319F, KANJI),   // kanbun
    (0x31C0, 0x31EF, KANJI),   // strokes
    (0x31F0, 0x31FF, KATAKANA), // phonetic extensions
    (0x3200, 0x33FF, KANJI),   // enclosed CJK (㈱), CJK compatibility (㍿)
    (0x3400, 0x4DBF, KANJI),   // extension A
    (0x4E00, 0x9FFF, KANJI),   // unified ideographs
    (0xF900, 0xFAFF, KANJI),   // compatibility ideographs
    (0xFE00, 0xFE0F, TRAIL),   // variation selectors
    (0xFE10, 0xFE1F, TRAIL),   // vertical forms
    (0xFE20, 0xFE2F, TRAIL),   // combining half marks
    (0xFE30, 0xFE6F, TRAIL),   // CJK compatibility forms, small form variants
    (0xFF01, 0xFF0F, TRAIL),   // fullwidth punctuation
    (0xFF10, 0xFF19, DIGIT),   // fullwidth digits
    (0xFF1A, 0xFF20, TRAIL),
    (0xFF21, 0xFF3A, LETTER),  // fullwidth Latin capitals
    (0xFF3B, 0xFF40, TRAIL),
    (0xFF41, 0xFF5A, LETTER),  // fullwidth Latin small
    (0xFF5B, 0xFF65, TRAIL),
    (0xFF66, 0xFF9F, HALFWIDTH),
    (0xFFE0, 0xFFEE, TRAIL),   // fullwidth signs
    (0x1B000, 0x1B16F, HIRAGANA), // kana supplement and extended-A
    (0x1F000, 0x1FAFF, OTHER), // tiles, cards, emoji
    (0x20000, 0x2FA1F, KANJI), // extensions B..F, compatibility supplement
    (0x30000, 0x323AF, KANJI), // extensions G, H
    (0xE0100, 0xE01EF, TRAIL), // variation selectors supplement
];

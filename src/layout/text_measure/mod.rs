//! Width-aware text measurement and wrapping.
//!
//! Measures text in terminal columns and packs tokens into lines.
//!
//! # Capabilities
//!
//! - **Width calculation**: 1 or 2 columns per rune, from East Asian Width
//! - **Line splitting**: greedy fill over tokens, never breaking a token
//! - **Hard breaks**: `\n`, `\r\n` and friends close the current line
//! - **Truncation**: token-aware truncation with configurable suffix
//!
//! # Implementation
//!
//! Uses `unicode-width` (Unicode East Asian Width tables) for column widths
//! and [`crate::segment`] for the token boundaries.

mod truncate;
mod width;
mod wrap;

pub use truncate::truncate_text;
pub use width::{char_width, string_width};
pub use wrap::{split, Lines, Splitter};

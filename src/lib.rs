//! # mikan
//!
//! Mixed-script text segmentation and width-aware line wrapping.
//!
//! Japanese text has no spaces between words, so a wrapper that only breaks
//! at whitespace leaves whole sentences unbreakable, and one that breaks at
//! any character splits particles from their nouns and leaves `、` or `。`
//! dangling at the start of a line. mikan cuts text into small glued units
//! and wraps on their boundaries:
//!
//! ```text
//! "常に最新、最高のモバイル。Androidを開発した同じチームから。"
//!   → 常に | 最新、 | 最高の | モバイル。 | Androidを | 開発した | 同じ | チームから。
//! ```
//!
//! ## Architecture
//!
//! ```text
//! text → classify (per rune) → State::step (merge) → Token → width → Splitter → lines
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (RuneClass, Glue, ClassSet, Token)
//! - [`segment`] - Rune classification and the merge state machine
//! - [`layout`] - Column widths, line splitting and truncation
//! - [`config`] - Splitter configuration
//! - [`error`] - Error type
//!
//! ## Example
//!
//! ```
//! let lines = mikan::split("Hello & World", 7).unwrap();
//! assert_eq!(lines, ["Hello &", " World"]);
//! assert_eq!(lines.concat(), "Hello & World");
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod segment;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::{SplitterConfig, DEFAULT_RUNE_WIDTH};
pub use error::{Error, Result};

pub use segment::{analyze, classify, tokens, Tokens};

pub use layout::{char_width, split, string_width, truncate_text, Lines, Splitter};

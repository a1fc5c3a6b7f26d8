//! Layout Module
//!
//! Width measurement and line layout for segmented text.
//!
//! # Pipeline
//!
//! 1. [`crate::segment`] cuts the text into tokens
//! 2. [`char_width`] / [`string_width`] measure each token in columns
//! 3. [`Splitter`] packs tokens into lines within the column budget
//!
//! # Example
//!
//! ```
//! use mikan::layout::Splitter;
//!
//! let splitter = Splitter::new(25).unwrap();
//! let lines = splitter.split("常に最新、最高のモバイル。Androidを開発した同じチームから。");
//! assert_eq!(lines, ["常に最新、最高の", "モバイル。Androidを", "開発した同じチームから。"]);
//! ```

pub mod text_measure;

pub use text_measure::*;

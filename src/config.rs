//! Splitter configuration.

use crate::error::{Error, Result};

/// Default line budget in columns.
pub const DEFAULT_RUNE_WIDTH: usize = 80;

/// Configuration for a [`Splitter`](crate::Splitter).
///
/// With the `serde` feature enabled this can be read from any serde format,
/// e.g. `{ "rune_width": 26 }`. Missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SplitterConfig {
    /// Target display-column budget per line. Must be greater than zero.
    pub rune_width: usize,
}

impl SplitterConfig {
    pub const fn new(rune_width: usize) -> Self {
        Self { rune_width }
    }

    /// Reject budgets no line could satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.rune_width == 0 {
            tracing::warn!(rune_width = self.rune_width, "rejecting splitter configuration");
            return Err(Error::InvalidRuneWidth { width: self.rune_width });
        }
        Ok(())
    }
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RUNE_WIDTH)
    }
}

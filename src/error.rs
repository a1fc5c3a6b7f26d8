//! Error types.

/// Errors reported by mikan. Segmentation and measurement never fail; only
/// an unusable configuration is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid rune width {width}: a line must be at least one column wide")]
    InvalidRuneWidth { width: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

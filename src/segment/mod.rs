//! Mixed-script segmentation.
//!
//! Turns text into an ordered sequence of indivisible [`Token`](crate::Token)s
//! in a single left-to-right pass:
//!
//! ```text
//! char → classify → RuneClass → State::step → boundary? → Token
//! ```
//!
//! - [`classify`] looks a code point up in static, sorted tables.
//! - [`State`] is the merge state machine. It glues okurigana and particles
//!   to their stem, keeps apostrophes and trailing punctuation attached, and
//!   isolates spaces and standalone marks.
//! - [`Tokens`] folds the state machine over a string.

mod classify;
mod state;
mod tables;
mod tokens;

pub use classify::classify;
pub use state::{merge, State, Step};
pub use tokens::{analyze, tokens, Tokens};

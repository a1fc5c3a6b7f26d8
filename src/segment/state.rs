//! The merge state machine.
//!
//! A token boundary is decided by one pure transition:
//!
//! ```text
//! State × (rune, RuneClass) → Step { boundary, next }
//! ```
//!
//! `boundary` means "the buffered token ends before this rune". The rune is
//! always consumed into the buffer described by `next`.

use crate::types::{ClassSet, Glue, RuneClass};

/// What the analyzer is currently buffering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// Nothing buffered.
    #[default]
    Empty,
    /// Only glue or opening brackets so far. The next substantive rune decides
    /// the token's class. Holds the class of the first rune.
    Pending(RuneClass),
    /// A run of `class`, still extensible.
    Run(RuneClass),
    /// Ended by a terminator. Glue still attaches, substantive runes start a
    /// new token unless they continue the `resume` class.
    Sealed {
        class: RuneClass,
        resume: Option<RuneClass>,
    },
    /// A single-rune token (space, standalone mark, line break). Accepts nothing.
    Closed(RuneClass),
    /// A `\r` that still accepts one `\n`.
    CarriageReturn,
}

/// Result of feeding one rune to a [`State`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// The buffered token ends before this rune.
    pub boundary: bool,
    /// State after consuming the rune.
    pub next: State,
}

impl Step {
    #[inline]
    const fn extend(next: State) -> Self {
        Self { boundary: false, next }
    }

    #[inline]
    const fn split(next: State) -> Self {
        Self { boundary: true, next }
    }
}

impl State {
    /// Class of the buffered token, `None` when nothing is buffered.
    pub const fn class(self) -> Option<RuneClass> {
        match self {
            Self::Empty => None,
            Self::Pending(class)
            | Self::Run(class)
            | Self::Sealed { class, .. }
            | Self::Closed(class) => Some(class),
            Self::CarriageReturn => Some(RuneClass::LineBreak),
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Feed one rune.
    pub fn step(self, rune: char, class: RuneClass) -> Step {
        match class {
            c if c.is_substantive() => self.substantive(c),
            RuneClass::GluePunctuation(glue) => self.glue(glue, class),
            RuneClass::OpeningBracket => match self {
                Self::Empty | Self::Pending(_) => Step::extend(self.pending_or(class)),
                _ => Step::split(Self::Pending(class)),
            },
            RuneClass::LineBreak => self.line_break(rune),
            _ => {
                debug_assert!(class.is_standalone());
                self.after_break(Self::Closed(class))
            }
        }
    }

    /// Boundary unless nothing is buffered.
    fn after_break(self, next: State) -> Step {
        Step { boundary: !self.is_empty(), next }
    }

    fn pending_or(self, class: RuneClass) -> State {
        match self {
            Self::Pending(first) => Self::Pending(first),
            _ => Self::Pending(class),
        }
    }

    fn line_break(self, rune: char) -> Step {
        if self == Self::CarriageReturn && rune == '\n' {
            return Step::extend(Self::Closed(RuneClass::LineBreak));
        }
        let next = if rune == '\r' {
            Self::CarriageReturn
        } else {
            Self::Closed(RuneClass::LineBreak)
        };
        self.after_break(next)
    }

    fn glue(self, glue: Glue, class: RuneClass) -> Step {
        match self {
            Self::Empty => Step::extend(Self::opening_glue(glue, class)),
            Self::Closed(_) | Self::CarriageReturn => Step::split(Self::opening_glue(glue, class)),
            Self::Pending(first) => Step::extend(match glue {
                Glue::Terminator | Glue::Separator => Self::Sealed { class: first, resume: None },
                Glue::Trailing | Glue::Tilde => Self::Pending(first),
            }),
            Self::Run(open) => Step::extend(match glue {
                Glue::Trailing | Glue::Tilde => Self::Run(open),
                Glue::Terminator => Self::Sealed { class: open, resume: None },
                Glue::Separator => Self::Sealed {
                    class: open,
                    resume: ClassSet::RESUMES.contains(open.flag()).then_some(open),
                },
            }),
            Self::Sealed { class, .. } => Step::extend(Self::Sealed { class, resume: None }),
        }
    }

    /// State for a glue rune that starts a token.
    fn opening_glue(glue: Glue, class: RuneClass) -> State {
        match glue {
            Glue::Trailing => Self::Pending(class),
            // A leading terminator or `~` stands alone.
            Glue::Terminator | Glue::Separator | Glue::Tilde => Self::Sealed { class, resume: None },
        }
    }

    fn substantive(self, class: RuneClass) -> Step {
        match self {
            Self::Empty | Self::Pending(_) => Step::extend(Self::Run(class)),
            Self::Run(open) => match merge(open, class) {
                Some(merged) => Step::extend(Self::Run(merged)),
                None => Step::split(Self::Run(class)),
            },
            Self::Sealed { resume: Some(open), .. } if open == class => Step::extend(Self::Run(class)),
            Self::Sealed { .. } | Self::Closed(_) | Self::CarriageReturn => Step::split(Self::Run(class)),
        }
    }
}

/// Merge table: the class of the extended run when `next` may follow a run of
/// `open`, `None` when a new token starts.
pub fn merge(open: RuneClass, next: RuneClass) -> Option<RuneClass> {
    use RuneClass::*;

    match (open, next) {
        (Other, _) | (_, Other) => None,
        (_, Hiragana) if ClassSet::TAKES_HIRAGANA.contains(open.flag()) => Some(Hiragana),
        (Kanji, Kanji)
        | (Katakana, Katakana)
        | (HalfwidthKatakana, HalfwidthKatakana)
        | (Letter, Letter)
        | (Digit, Digit) => Some(open),
        _ => None,
    }
}

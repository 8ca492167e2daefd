use thiserror::Error;

/// Why a condition could not be compiled or evaluated.
///
/// Positions are byte offsets into the canonicalized text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConditionError {
    #[error("condition is empty")]
    Empty,

    #[error("unexpected character {ch:?} at {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("invalid number {text:?} at {pos}")]
    InvalidNumber { text: String, pos: usize },

    #[error("unexpected {found} at {pos}, expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
        pos: usize,
    },

    #[error("condition ends early, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("unknown variable {name:?} at {pos} (use a-e or a stat alias)")]
    UnknownVariable { name: String, pos: usize },

    #[error("condition too long ({len} > {limit})")]
    TooLong { len: usize, limit: usize },

    #[error("condition nests deeper than {limit} levels at {pos}")]
    TooDeep { limit: usize, pos: usize },

    #[error("division by zero")]
    DivisionByZero,
}

use thiserror::Error;

use crate::condition::ConditionError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("invalid condition: {0}")]
    InvalidCondition(#[from] ConditionError),

    #[error("{partitions} partitions to examine, limit is {limit}")]
    ComputationLimitExceeded { partitions: u128, limit: u64 },
}

impl EngineError {
    /// Every failure is a pure function of the inputs; retrying cannot help.
    pub fn is_retryable(&self) -> bool {
        false
    }
}

/// Malformed distribution or out-of-range level.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("need exactly {expected} stats, got {found}")]
    WrongLength { expected: usize, found: usize },

    #[error("stat {index} is negative ({value})")]
    NegativeStat { index: usize, value: i64 },

    #[error("stat {index} is out of range ({value})")]
    StatTooLarge { index: usize, value: i64 },

    #[error("stat total {sum} is not a multiple of {per_level}")]
    NotMultipleOfLevel { sum: u64, per_level: u32 },

    #[error("target level {target} is below current level {current}")]
    TargetBelowCurrent { target: i64, current: u32 },

    #[error("target level {target} is more than {horizon} levels past current level {current}")]
    BeyondHorizon { target: i64, current: u32, horizon: u32 },
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;

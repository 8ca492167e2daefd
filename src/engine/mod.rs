// src/engine/mod.rs

//! # Train probability engine
//!
//! Validates a request, enumerates every partition of the remaining points,
//! and returns the exact probability that the condition holds at the target
//! level. See [`train`] for the method and [`montecarlo`] for the sampling
//! cross-check used in tests.

pub mod config;
pub mod distribution;
pub mod error;
pub mod montecarlo;
pub mod probability;
pub mod train;

/// Stats a training point can land on.
pub const STATS: usize = crate::condition::STAT_COUNT;

pub use config::EngineConfig;
pub use distribution::TrainingDistribution;
pub use error::{EngineError, InputError};
pub use montecarlo::Estimate;
pub use probability::Probability;
pub use train::{TrainProbabilityEngine, compute};

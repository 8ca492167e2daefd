/*!
`train_probability` — exact odds for a stat line after more random training.

What it does
- Takes the points trained into five stats so far (a whole number of
  3-point levels), a target level, and a condition such as `CON >= 12 and POW >= 9`.
- Enumerates every way the remaining points can split across the five stats
  and weighs each split by the number of increment orders that produce it.
- Returns the exact probability (a ratio of big integers, turned into `f64`
  only at the very end) that the final line satisfies the condition.

How to use (call surface only)
- `compute(&[3, 0, 0, 0, 0], 2, "a >= 3") -> Result<f64, EngineError>` with
  default settings, or build a `TrainProbabilityEngine` from an `EngineConfig`
  to change the look-ahead horizon, the partition cap, or enable the
  `parallel` feature.
- `TrainProbabilityEngine::evaluate` keeps the exact `Probability`
  (favourable / total sequences, plus the "1 in N" form).

What it does NOT do
- No sampling on the production path, no state between calls, no I/O.
*/

pub mod condition;
pub mod engine;
pub mod mechanics;

pub use condition::{Bindings, Condition, ConditionError, Stat, StatCondition};
pub use engine::{
    EngineConfig, EngineError, InputError, Probability, TrainProbabilityEngine, TrainingDistribution,
    compute,
};

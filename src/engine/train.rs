//! Exact training probability by enumerating every partition of the points
//! still to come.
//!
//! Each future point lands on one of the five stats with probability 1/5, so
//! the `5^points` increment sequences are equally likely. Sequences that end
//! on the same partition share a final stat line; there are exactly
//! `multinomial(partition)` of them. Summing those counts over the partitions
//! whose final line satisfies the condition gives the numerator, exactly.

use num_bigint::BigUint;
use num_traits::Zero;
use tracing::{debug, trace, warn};

use crate::condition::{Condition, StatCondition};
use crate::mechanics::{Factorials, Partitions, outcome_space, partition_count};

use super::STATS;
use super::config::EngineConfig;
use super::distribution::TrainingDistribution;
use super::error::{EngineError, InputError, Result};
use super::probability::Probability;

/// Stateless engine; holds only its configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrainProbabilityEngine {
    config: EngineConfig,
}

impl TrainProbabilityEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Probability that `condition` holds once training reaches `target_level`.
    pub fn compute(&self, current: &[i64], target_level: i64, condition: &str) -> Result<f64> {
        Ok(self.evaluate(current, target_level, condition)?.value())
    }

    /// Like [`compute`](Self::compute) but keeps the exact ratio.
    pub fn evaluate(&self, current: &[i64], target_level: i64, condition: &str) -> Result<Probability> {
        let dist = TrainingDistribution::new(current, self.config.points_per_level)?;
        // Checked before compiling so a bad level is reported even with a bad condition.
        self.points_remaining(&dist, target_level)?;
        let condition = Condition::compile(condition)?;
        self.evaluate_with(&dist, target_level, &condition)
    }

    /// Points left to distribute between the current level and `target_level`.
    pub fn points_remaining(&self, dist: &TrainingDistribution, target_level: i64) -> Result<u32, InputError> {
        let current = dist.current_level(self.config.first_level);
        let horizon = self.config.horizon_levels;
        if target_level < i64::from(current) {
            return Err(InputError::TargetBelowCurrent { target: target_level, current });
        }
        // target_level >= current >= 0, so this cannot overflow.
        let ahead = target_level - i64::from(current);
        if ahead > i64::from(horizon) {
            return Err(InputError::BeyondHorizon { target: target_level, current, horizon });
        }
        // 0 <= ahead <= horizon, so the cast is lossless.
        Ok((ahead as u32).saturating_mul(self.config.points_per_level))
    }

    /// Core enumeration against an already validated line and compiled condition.
    pub fn evaluate_with<C>(&self, dist: &TrainingDistribution, target_level: i64, condition: &C) -> Result<Probability>
    where
        C: StatCondition + ?Sized,
    {
        let points = self.points_remaining(dist, target_level)?;
        debug!(
            current = %dist,
            current_level = dist.current_level(self.config.first_level),
            target_level,
            points,
            "train probability request"
        );

        if points == 0 {
            let holds = condition.holds(&dist.bind(&[0; STATS]))?;
            trace!(holds, "no points left, single outcome");
            return Ok(Probability {
                favorable: BigUint::from(u8::from(holds)),
                outcomes: BigUint::from(1u8),
                points,
            });
        }

        let partitions = partition_count(STATS as u32, points);
        let limit = self.config.partition_limit();
        if partitions > u128::from(limit) {
            warn!(%partitions, limit, "refusing request over partition cap");
            return Err(EngineError::ComputationLimitExceeded { partitions, limit });
        }

        let factorials = Factorials::up_to(points);
        let favorable = if self.config.parallel {
            favorable_parallel(dist, points, condition, &factorials)?
        } else {
            favorable_in(dist, Partitions::<STATS>::new(points), condition, &factorials)?
        };
        let outcomes = outcome_space(STATS as u32, points);

        let out = Probability { favorable, outcomes, points };
        debug!(
            %partitions,
            favorable_bits = out.favorable.bits(),
            outcome_bits = out.outcomes.bits(),
            probability = out.value(),
            "train probability done"
        );
        Ok(out)
    }
}

/// Sum of multinomial counts over the partitions in `parts` that satisfy `condition`.
fn favorable_in<C>(
    dist: &TrainingDistribution,
    parts: Partitions<STATS>,
    condition: &C,
    factorials: &Factorials,
) -> Result<BigUint>
where
    C: StatCondition + ?Sized,
{
    let mut acc = BigUint::zero();
    for p in parts {
        if condition.holds(&dist.bind(&p))? {
            acc += factorials.count(&p);
        }
    }
    Ok(acc)
}

/// One task per value of the first part; the sub-ranges are disjoint and
/// integer addition makes the total independent of scheduling.
#[cfg(feature = "parallel")]
fn favorable_parallel<C>(
    dist: &TrainingDistribution,
    points: u32,
    condition: &C,
    factorials: &Factorials,
) -> Result<BigUint>
where
    C: StatCondition + ?Sized,
{
    use rayon::prelude::*;

    (0..=points)
        .into_par_iter()
        .map(|head| -> Result<BigUint> {
            let sum = favorable_in(dist, Partitions::with_head(points, head), condition, factorials)?;
            trace!(head, bits = sum.bits(), "sub-range done");
            Ok(sum)
        })
        .try_reduce(BigUint::zero, |a, b| Ok(a + b))
}

#[cfg(not(feature = "parallel"))]
fn favorable_parallel<C>(
    dist: &TrainingDistribution,
    points: u32,
    condition: &C,
    factorials: &Factorials,
) -> Result<BigUint>
where
    C: StatCondition + ?Sized,
{
    trace!("built without `parallel`, enumerating sequentially");
    favorable_in(dist, Partitions::<STATS>::new(points), condition, factorials)
}

/// [`TrainProbabilityEngine::compute`] with the default configuration.
pub fn compute(current: &[i64], target_level: i64, condition: &str) -> Result<f64> {
    TrainProbabilityEngine::default().compute(current, target_level, condition)
}

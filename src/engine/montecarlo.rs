//! Monte Carlo estimate of the same process, for cross-checking the exact
//! engine. Not used on the production path.

use tracing::debug;

use crate::condition::StatCondition;
use crate::mechanics::stoch;

use super::STATS;
use super::config::EngineConfig;
use super::distribution::TrainingDistribution;
use super::error::Result;
use super::train::TrainProbabilityEngine;

/// Two-sided 99% normal quantile.
pub const Z_99: f64 = 2.576;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Estimate {
    pub hits: u64,
    pub trials: u64,
    pub mean: f64,
    /// Half-width of the 99% confidence interval.
    pub half_width: f64,
}

impl Estimate {
    fn from_hits(hits: u64, trials: u64) -> Self {
        let n = trials.max(1) as f64;
        let mean = hits as f64 / n;
        let half_width = Z_99 * (mean * (1.0 - mean) / n).sqrt();
        Self { hits, trials, mean, half_width }
    }

    pub fn interval(&self) -> (f64, f64) {
        ((self.mean - self.half_width).max(0.0), (self.mean + self.half_width).min(1.0))
    }

    pub fn contains(&self, p: f64) -> bool {
        let (lo, hi) = self.interval();
        lo <= p && p <= hi
    }
}

/// Play `trials` random trainings from `dist` to `target_level` and count how
/// often `condition` holds. Same validation as the exact engine.
pub fn simulate<C>(
    config: &EngineConfig,
    dist: &TrainingDistribution,
    target_level: i64,
    condition: &C,
    trials: u64,
    seed: u64,
) -> Result<Estimate>
where
    C: StatCondition + ?Sized,
{
    let points = TrainProbabilityEngine::new(*config).points_remaining(dist, target_level)?;
    let mut rng = stoch::seeded(seed);
    let mut hits = 0u64;
    for _ in 0..trials {
        let mut extra = [0u32; STATS];
        for _ in 0..points {
            extra[stoch::uniform_index(&mut rng, STATS)] += 1;
        }
        if condition.holds(&dist.bind(&extra))? {
            hits += 1;
        }
    }
    let est = Estimate::from_hits(hits, trials);
    debug!(trials, hits, mean = est.mean, half_width = est.half_width, "monte carlo estimate");
    Ok(est)
}

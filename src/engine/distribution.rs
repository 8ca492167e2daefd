use std::fmt;

use crate::condition::Bindings;

use super::STATS;
use super::config::DEFAULT_POINTS_PER_LEVEL;
use super::error::InputError;

/// Points trained into each stat so far, validated against the level rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TrainingDistribution {
    stats: [u32; STATS],
    points_per_level: u32,
}

impl TrainingDistribution {
    /// Validate a caller-supplied stat line: exactly five non-negative
    /// values whose sum is a whole number of levels.
    pub fn new(stats: &[i64], points_per_level: u32) -> Result<Self, InputError> {
        if stats.len() != STATS {
            return Err(InputError::WrongLength { expected: STATS, found: stats.len() });
        }
        let mut out = [0u32; STATS];
        for (index, (&value, slot)) in stats.iter().zip(out.iter_mut()).enumerate() {
            if value < 0 {
                return Err(InputError::NegativeStat { index, value });
            }
            *slot = u32::try_from(value).map_err(|_| InputError::StatTooLarge { index, value })?;
        }
        let sum: u64 = out.iter().map(|&v| u64::from(v)).sum();
        let per_level = points_per_level.max(1);
        if sum % u64::from(per_level) != 0 {
            return Err(InputError::NotMultipleOfLevel { sum, per_level });
        }
        Ok(Self { stats: out, points_per_level: per_level })
    }

    #[inline]
    pub fn stats(&self) -> [u32; STATS] {
        self.stats
    }

    pub fn total(&self) -> u64 {
        self.stats.iter().map(|&v| u64::from(v)).sum()
    }

    /// Whole levels of training already in the line.
    pub fn completed_levels(&self) -> u32 {
        let done = self.total() / u64::from(self.points_per_level);
        u32::try_from(done).unwrap_or(u32::MAX)
    }

    /// Level the line sits at when an untrained line is `first_level`.
    pub fn current_level(&self, first_level: u32) -> u32 {
        self.completed_levels().saturating_add(first_level)
    }

    /// Bindings for the final line `self + extra`.
    #[inline]
    pub fn bind(&self, extra: &[u32; STATS]) -> Bindings {
        let mut vals = [0i64; STATS];
        for ((v, &base), &add) in vals.iter_mut().zip(&self.stats).zip(extra) {
            *v = i64::from(base) + i64::from(add);
        }
        Bindings(vals)
    }
}

impl TryFrom<&[i64]> for TrainingDistribution {
    type Error = InputError;

    fn try_from(stats: &[i64]) -> Result<Self, Self::Error> {
        Self::new(stats, DEFAULT_POINTS_PER_LEVEL)
    }
}

impl fmt::Display for TrainingDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e] = self.stats;
        write!(f, "{a}/{b}/{c}/{d}/{e}")
    }
}

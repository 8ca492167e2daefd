//! Engine knobs. Defaults match the game's training rules.

use crate::mechanics::partition_count;

use super::STATS;

/// Levels the engine will look ahead by default.
pub const DEFAULT_HORIZON_LEVELS: u32 = 20;
/// Points gained per training level.
pub const DEFAULT_POINTS_PER_LEVEL: u32 = 3;
/// Level of a line with no training in it.
pub const DEFAULT_FIRST_LEVEL: u32 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Maximum levels past the current one a target may sit.
    pub horizon_levels: u32,
    pub points_per_level: u32,
    /// Level of an untrained line; the current level is
    /// `sum / points_per_level + first_level`.
    pub first_level: u32,
    /// Cap on partitions examined per request. `None` derives it from the
    /// horizon (the count at the deepest allowed target).
    pub max_partitions: Option<u64>,
    /// Split enumeration across threads (needs the `parallel` feature).
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            horizon_levels: DEFAULT_HORIZON_LEVELS,
            points_per_level: DEFAULT_POINTS_PER_LEVEL,
            first_level: DEFAULT_FIRST_LEVEL,
            max_partitions: None,
            parallel: false,
        }
    }
}

impl EngineConfig {
    pub fn with_horizon(mut self, levels: u32) -> Self {
        self.horizon_levels = levels;
        self
    }

    pub fn with_points_per_level(mut self, points: u32) -> Self {
        self.points_per_level = points.max(1);
        self
    }

    pub fn with_first_level(mut self, level: u32) -> Self {
        self.first_level = level;
        self
    }

    pub fn with_max_partitions(mut self, cap: u64) -> Self {
        self.max_partitions = Some(cap);
        self
    }

    pub fn with_parallel(mut self, on: bool) -> Self {
        self.parallel = on;
        self
    }

    /// Points to distribute at the deepest allowed target.
    pub fn horizon_points(&self) -> u32 {
        self.horizon_levels.saturating_mul(self.points_per_level)
    }

    /// Effective partition cap.
    pub fn partition_limit(&self) -> u64 {
        self.max_partitions.unwrap_or_else(|| {
            let n = partition_count(STATS as u32, self.horizon_points());
            u64::try_from(n).unwrap_or(u64::MAX)
        })
    }
}

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// Exact probability as favourable / total increment sequences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Probability {
    pub favorable: BigUint,
    pub outcomes: BigUint,
    /// Points that were distributed to reach the target level.
    pub points: u32,
}

impl Probability {
    /// Floating value in [0, 1]; the only lossy step.
    pub fn value(&self) -> f64 {
        if self.favorable.is_zero() {
            return 0.0;
        }
        if self.favorable == self.outcomes {
            return 1.0;
        }
        let num = self.favorable.to_f64().unwrap_or(f64::INFINITY);
        let den = self.outcomes.to_f64().unwrap_or(f64::INFINITY);
        (num / den).clamp(0.0, 1.0)
    }

    /// "1 in N" form, `None` when the condition can never hold.
    pub fn one_in(&self) -> Option<f64> {
        if self.favorable.is_zero() {
            return None;
        }
        let num = self.outcomes.to_f64().unwrap_or(f64::INFINITY);
        let den = self.favorable.to_f64().unwrap_or(f64::INFINITY);
        Some(num / den)
    }

    pub fn is_certain(&self) -> bool {
        self.favorable == self.outcomes
    }

    pub fn is_impossible(&self) -> bool {
        self.favorable.is_zero()
    }
}

//! Multinomial counts: how many ordered sequences of unit increments land on a
//! given partition. Everything here is exact big-integer arithmetic.

use num_bigint::BigUint;
use num_traits::One;

/// n! as a big integer.
pub fn factorial(n: u32) -> BigUint {
    (2..=n).fold(BigUint::one(), |acc, k| acc * k)
}

/// sum(parts)! / Π parts_i!, by repeated exact division.
///
/// Each division is exact: after dividing by the first j part factorials the
/// running value is still a (smaller) multinomial coefficient times an integer.
pub fn multinomial(parts: &[u32]) -> BigUint {
    let sum: u32 = parts.iter().sum();
    let mut out = factorial(sum);
    for &p in parts {
        if p > 1 {
            out /= factorial(p);
        }
    }
    out
}

/// Size of the outcome space: `bins^points` equally likely increment sequences.
pub fn outcome_space(bins: u32, points: u32) -> BigUint {
    BigUint::from(bins).pow(points)
}

/// Request-scoped table of 0!..=n!.
///
/// Built once per request so each partition costs a handful of big-integer
/// divisions rather than rebuilding factorials from scratch.
#[derive(Clone, Debug)]
pub struct Factorials {
    table: Vec<BigUint>,
}

impl Factorials {
    pub fn up_to(n: u32) -> Self {
        let mut table = Vec::with_capacity(n as usize + 1);
        table.push(BigUint::one());
        for k in 1..=n {
            let next = &table[k as usize - 1] * k;
            table.push(next);
        }
        Self { table }
    }

    #[inline]
    pub fn max(&self) -> u32 {
        self.table.len() as u32 - 1
    }

    /// n!, from the table when it fits, computed otherwise.
    pub fn get(&self, n: u32) -> BigUint {
        match self.table.get(n as usize) {
            Some(f) => f.clone(),
            None => factorial(n),
        }
    }

    /// Same value as [`multinomial`], reusing the table.
    pub fn count(&self, parts: &[u32]) -> BigUint {
        let sum: u32 = parts.iter().sum();
        if sum > self.max() {
            return multinomial(parts);
        }
        let mut out = self.table[sum as usize].clone();
        for &p in parts {
            if p > 1 {
                out /= &self.table[p as usize];
            }
        }
        out
    }
}

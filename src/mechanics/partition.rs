//! Partitions: every way to split `total` future points across `N` stats.
//!
//! A partition of `total` into `N` bins is picked by choosing `N - 1` strictly
//! increasing cut points in `[1, total + N)`; the gaps between consecutive cuts
//! (and the two boundaries) are the part sizes. Walking the cut points in
//! lexicographic order gives a fixed, reproducible sequence that streams one
//! tuple at a time:
//!
//! ```text
//! total = 2, N = 3     cuts     parts
//!                      (1, 2)   [0, 0, 2]
//!                      (1, 3)   [0, 1, 1]
//!                      (1, 4)   [0, 2, 0]
//!                      (2, 3)   [1, 0, 1]
//!                      (2, 4)   [1, 1, 0]
//!                      (3, 4)   [2, 0, 0]
//! ```

/// Streaming iterator over the partitions of `total` into `N` bins.
///
/// The sequence depends only on `(N, total)`: a fresh iterator, or a clone
/// taken before consuming, replays it exactly.
#[derive(Clone, Debug)]
pub struct Partitions<const N: usize> {
    total: u32,
    /// Only the first `N - 1` slots are used.
    cuts: [u32; N],
    /// Leading cuts that never move (1 for a `with_head` sub-range).
    pinned: usize,
    done: bool,
}

/// All partitions of `total` into `N` bins, in cut-point order.
#[inline]
pub fn partitions<const N: usize>(total: u32) -> Partitions<N> {
    Partitions::new(total)
}

impl<const N: usize> Partitions<N> {
    pub fn new(total: u32) -> Self {
        let mut cuts = [0u32; N];
        for (i, c) in cuts.iter_mut().enumerate().take(N.saturating_sub(1)) {
            *c = i as u32 + 1;
        }
        Self { total, cuts, pinned: 0, done: N == 0 }
    }

    /// The disjoint slice of the sequence whose first part equals `head`.
    ///
    /// The slices for `head = 0..=total` partition the full sequence and, taken
    /// in ascending `head`, reproduce it in order.
    pub fn with_head(total: u32, head: u32) -> Self {
        if N < 2 {
            let mut all = Self::new(total);
            all.done = all.done || head != total;
            return all;
        }
        let mut cuts = [0u32; N];
        for (i, c) in cuts.iter_mut().enumerate().take(N - 1) {
            *c = head + i as u32 + 1;
        }
        Self { total, cuts, pinned: 1, done: head > total }
    }

    #[inline]
    fn top(&self) -> u32 {
        // Largest admissible cut value.
        self.total + N as u32 - 1
    }

    fn parts(&self) -> [u32; N] {
        let mut out = [0u32; N];
        let k = N - 1;
        let mut last = 0u32;
        for i in 0..k {
            out[i] = self.cuts[i] - last - 1;
            last = self.cuts[i];
        }
        out[k] = self.top() - last;
        out
    }

    fn advance(&mut self) {
        let k = N - 1;
        let top = self.top();
        let mut i = k;
        while i > self.pinned {
            i -= 1;
            let ceiling = top - (k - 1 - i) as u32;
            if self.cuts[i] < ceiling {
                self.cuts[i] += 1;
                for j in i + 1..k {
                    self.cuts[j] = self.cuts[j - 1] + 1;
                }
                return;
            }
        }
        self.done = true;
    }
}

impl<const N: usize> Iterator for Partitions<N> {
    type Item = [u32; N];

    fn next(&mut self) -> Option<[u32; N]> {
        if self.done {
            return None;
        }
        let out = self.parts();
        self.advance();
        Some(out)
    }
}

impl<const N: usize> std::iter::FusedIterator for Partitions<N> {}

/// Exact number of partitions of `total` into `bins` bins: C(total+bins-1, bins-1).
///
/// Saturates at `u128::MAX`, far beyond anything enumerable.
pub fn partition_count(bins: u32, total: u32) -> u128 {
    if bins == 0 {
        return u128::from(total == 0);
    }
    let n = u128::from(total) + u128::from(bins) - 1;
    let k = u128::from(bins - 1);
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc * (n - i) / (i + 1) stays integral at every step.
        acc = match acc.checked_mul(n - i) {
            Some(v) => v / (i + 1),
            None => return u128::MAX,
        };
    }
    acc
}

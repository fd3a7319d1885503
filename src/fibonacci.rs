//! The three Fibonacci generators.
//!
//! All three produce the same series for the same `n`: element `i` of the
//! returned vector holds F(i+1) under the standard convention F(0)=0,
//! F(1)=1, so a series always reads `1 1 2 3 5 ...`. Sums wrap on u64
//! overflow (the first wrapped entry shows up around n = 94), matching the
//! unsigned arithmetic of the reference implementations this tool times.

use crate::error::{FibmarkError, FibmarkResult};

/// Memo table capacity; requested counts must stay below this.
pub const MEMO_CAPACITY: usize = 50_010;

/// Naive recursion is impractical past this point, so comparison runs
/// skip it. An explicit recursive-only run is never capped.
pub const RECURSIVE_LIMIT: usize = 30;

/// One linear pass over the whole series, one counter increment per sum.
/// `n == 0` yields the empty series.
pub fn iterative_series(n: usize, ops: &mut u64) -> Vec<u64> {
    let mut series = vec![0u64; n];
    if n >= 1 {
        series[0] = 1;
    }
    if n >= 2 {
        series[1] = 1;
    }
    for i in 2..n {
        *ops += 1;
        series[i] = series[i - 1].wrapping_add(series[i - 2]);
    }
    series
}

/// F(n) by textbook recursion. One counter increment per non-base-case
/// call, which works out to F(n+1) - 1 increments in total.
pub fn recursive_value(n: u64, ops: &mut u64) -> u64 {
    if n <= 1 {
        return n;
    }
    *ops += 1;
    recursive_value(n - 1, ops).wrapping_add(recursive_value(n - 2, ops))
}

/// The exponential baseline: every element of the series recomputed from
/// scratch, accumulating the call count across the whole pass.
pub fn recursive_series(n: usize, ops: &mut u64) -> Vec<u64> {
    (1..=n as u64).map(|i| recursive_value(i, ops)).collect()
}

/// Lazily filled value cache for the dynamic-programming generator.
///
/// The table is an owned value handed to whoever runs trials; clearing it
/// between independent trials is the caller's job (the driver does this).
/// Indices at or past capacity are rejected instead of read out of bounds.
#[derive(Debug, Clone)]
pub struct MemoTable {
    slots: Vec<Option<u64>>,
}

impl MemoTable {
    pub fn new() -> Self {
        Self::with_capacity(MEMO_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MemoTable {
            slots: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Forget every cached value. Trials that should report independent
    /// operation counts must start from a cleared table.
    pub fn clear(&mut self) {
        self.slots.fill(None);
    }

    /// F(n), consulting the cache before recursing. A hit costs no
    /// counter increment; a miss costs one and fills the slot. Base
    /// cases (n <= 1) are answered directly and never stored.
    pub fn value(&mut self, n: usize, ops: &mut u64) -> FibmarkResult<u64> {
        if n >= self.slots.len() {
            return Err(FibmarkError::CountTooLarge {
                count: n,
                capacity: self.slots.len(),
            });
        }
        if n <= 1 {
            return Ok(n as u64);
        }
        if let Some(cached) = self.slots[n] {
            return Ok(cached);
        }
        *ops += 1;
        let value = self.value(n - 1, ops)?.wrapping_add(self.value(n - 2, ops)?);
        self.slots[n] = Some(value);
        Ok(value)
    }

    /// F(1)..=F(n). A pass over an empty table costs exactly n - 1
    /// increments; a warm repeat costs none.
    pub fn series(&mut self, n: usize, ops: &mut u64) -> FibmarkResult<Vec<u64>> {
        (1..=n).map(|i| self.value(i, ops)).collect()
    }
}

impl Default for MemoTable {
    fn default() -> Self {
        Self::new()
    }
}

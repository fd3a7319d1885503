//! Trial running: algorithm selection, timing, and the skip rule that
//! keeps naive recursion out of comparisons at large counts.

use std::time::Instant;

use crate::error::{FibmarkError, FibmarkResult};
use crate::fibonacci::{self, MemoTable, RECURSIVE_LIMIT};

/// The three strategies under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Iterative,
    Memoized,
    Recursive,
}

impl Algorithm {
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Iterative => "iterative",
            Algorithm::Memoized => "memoized",
            Algorithm::Recursive => "recursive",
        }
    }
}

/// Comparison output always reports these columns, in this order.
pub const COLUMNS: [Algorithm; 3] = [
    Algorithm::Iterative,
    Algorithm::Memoized,
    Algorithm::Recursive,
];

/// Which algorithms a run covers, decoded from the CLI selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Iterative,
    Recursive,
    Memoized,
    All,
    NoRecursive,
}

impl Selection {
    /// Selector codes 0-4; anything else is a validation error.
    pub fn from_code(code: u8) -> FibmarkResult<Selection> {
        match code {
            0 => Ok(Selection::Iterative),
            1 => Ok(Selection::Recursive),
            2 => Ok(Selection::Memoized),
            3 => Ok(Selection::All),
            4 => Ok(Selection::NoRecursive),
            _ => Err(FibmarkError::InvalidSelector {
                value: code.to_string(),
            }),
        }
    }

    /// Single-algorithm selections report one labelled line; the rest
    /// report the three comparison columns.
    pub fn single(self) -> Option<Algorithm> {
        match self {
            Selection::Iterative => Some(Algorithm::Iterative),
            Selection::Recursive => Some(Algorithm::Recursive),
            Selection::Memoized => Some(Algorithm::Memoized),
            Selection::All | Selection::NoRecursive => None,
        }
    }

    pub fn includes(self, algorithm: Algorithm) -> bool {
        match self {
            Selection::All => true,
            Selection::NoRecursive => algorithm != Algorithm::Recursive,
            _ => self.single() == Some(algorithm),
        }
    }
}

/// One timed generator invocation.
#[derive(Debug, Clone)]
pub struct Trial {
    pub algorithm: Algorithm,
    pub n: usize,
    pub seconds: f64,
    pub ops: u64,
    pub series: Vec<u64>,
}

/// Run one algorithm once. Memoized trials always start from a cleared
/// table so counts from earlier trials cannot leak into this one.
pub fn run_trial(algorithm: Algorithm, n: usize, table: &mut MemoTable) -> FibmarkResult<Trial> {
    if algorithm == Algorithm::Memoized {
        table.clear();
    }
    let mut ops = 0u64;
    let start = Instant::now();
    let series = match algorithm {
        Algorithm::Iterative => fibonacci::iterative_series(n, &mut ops),
        Algorithm::Recursive => fibonacci::recursive_series(n, &mut ops),
        Algorithm::Memoized => table.series(n, &mut ops)?,
    };
    let seconds = start.elapsed().as_secs_f64();
    Ok(Trial {
        algorithm,
        n,
        seconds,
        ops,
        series,
    })
}

/// Run everything a selection asks for.
///
/// Single-algorithm selections return one slot and never skip - an
/// explicit recursive-only request blocks until it finishes, however
/// large the count. Comparisons return one slot per column with `None`
/// where the column was skipped: recursion drops out above
/// `RECURSIVE_LIMIT` or when the selector excludes it.
pub fn run_selection(
    selection: Selection,
    n: usize,
    table: &mut MemoTable,
) -> FibmarkResult<Vec<(Algorithm, Option<Trial>)>> {
    if let Some(algorithm) = selection.single() {
        let trial = run_trial(algorithm, n, table)?;
        return Ok(vec![(algorithm, Some(trial))]);
    }

    let mut slots = Vec::with_capacity(COLUMNS.len());
    for algorithm in COLUMNS {
        let skip = !selection.includes(algorithm)
            || (algorithm == Algorithm::Recursive && n > RECURSIVE_LIMIT);
        if skip {
            slots.push((algorithm, None));
        } else {
            slots.push((algorithm, Some(run_trial(algorithm, n, table)?)));
        }
    }
    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_codes_map_to_selections() {
        assert_eq!(Selection::from_code(0).unwrap(), Selection::Iterative);
        assert_eq!(Selection::from_code(1).unwrap(), Selection::Recursive);
        assert_eq!(Selection::from_code(2).unwrap(), Selection::Memoized);
        assert_eq!(Selection::from_code(3).unwrap(), Selection::All);
        assert_eq!(Selection::from_code(4).unwrap(), Selection::NoRecursive);
        assert!(Selection::from_code(5).is_err());
    }

    #[test]
    fn test_memoized_trials_start_from_a_cold_table() {
        let mut table = MemoTable::new();
        let first = run_trial(Algorithm::Memoized, 12, &mut table).unwrap();
        let second = run_trial(Algorithm::Memoized, 12, &mut table).unwrap();
        assert_eq!(first.ops, 11);
        assert_eq!(second.ops, first.ops);
    }

    #[test]
    fn test_comparison_ops_for_ten() {
        let mut table = MemoTable::new();
        let slots = run_selection(Selection::All, 10, &mut table).unwrap();
        let ops: Vec<u64> = slots
            .iter()
            .map(|(_, trial)| trial.as_ref().unwrap().ops)
            .collect();
        // iterative: one add per element past the second; memoized: one
        // miss per index past F(1); recursive: sum of per-element call
        // counts across the whole series.
        assert_eq!(ops, vec![8, 9, 221]);
    }

    #[test]
    fn test_comparison_skips_recursion_past_the_limit() {
        let mut table = MemoTable::new();
        let slots = run_selection(Selection::All, RECURSIVE_LIMIT + 1, &mut table).unwrap();
        assert!(slots[0].1.is_some());
        assert!(slots[1].1.is_some());
        assert_eq!(slots[2].0, Algorithm::Recursive);
        assert!(slots[2].1.is_none());
    }

    #[test]
    fn test_selector_four_never_runs_recursion() {
        let mut table = MemoTable::new();
        let slots = run_selection(Selection::NoRecursive, 10, &mut table).unwrap();
        assert!(slots[0].1.is_some());
        assert!(slots[1].1.is_some());
        assert!(slots[2].1.is_none());
    }

    #[test]
    fn test_single_selection_ignores_the_limit() {
        let mut table = MemoTable::new();
        let slots = run_selection(Selection::Recursive, RECURSIVE_LIMIT + 1, &mut table).unwrap();
        assert_eq!(slots.len(), 1);
        let trial = slots[0].1.as_ref().unwrap();
        assert_eq!(trial.series.len(), RECURSIVE_LIMIT + 1);
    }

    #[test]
    fn test_trial_series_match_across_algorithms() {
        let mut table = MemoTable::new();
        let slots = run_selection(Selection::All, 20, &mut table).unwrap();
        let series: Vec<&Vec<u64>> = slots
            .iter()
            .map(|(_, trial)| &trial.as_ref().unwrap().series)
            .collect();
        assert_eq!(series[0], series[1]);
        assert_eq!(series[1], series[2]);
    }
}

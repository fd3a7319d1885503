//! Output shaping: the human-readable lines, the comparison CSV line,
//! the JSON report, and the append-only CSV metrics sink.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::Local;
use serde::Serialize;

use crate::bench::{Algorithm, Trial};
use crate::error::{FibmarkError, FibmarkResult};

/// `Time: <seconds>(<ops>)` - the single-algorithm report line.
pub fn single_line(trial: &Trial) -> String {
    format!("Time: {:.6}({})", trial.seconds, trial.ops)
}

/// `time,ops` pairs across the comparison columns, `-,-` where a column
/// was skipped.
pub fn comparison_line(slots: &[(Algorithm, Option<Trial>)]) -> String {
    slots
        .iter()
        .map(|(_, slot)| match slot {
            Some(trial) => format!("{:.6},{}", trial.seconds, trial.ops),
            None => "-,-".to_string(),
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// The generated series, space-separated on one line.
pub fn series_line(series: &[u64]) -> String {
    series
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Serialize)]
pub struct TrialReport<'a> {
    pub algorithm: &'static str,
    pub seconds: f64,
    pub ops: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<&'a [u64]>,
}

/// Everything one invocation produced, in a machine-readable shape.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub count: usize,
    pub selector: u8,
    pub trials: Vec<TrialReport<'a>>,
    pub skipped: Vec<&'static str>,
}

impl<'a> RunReport<'a> {
    pub fn new(
        count: usize,
        selector: u8,
        slots: &'a [(Algorithm, Option<Trial>)],
        with_series: bool,
    ) -> Self {
        let mut trials = Vec::new();
        let mut skipped = Vec::new();
        for (algorithm, slot) in slots {
            match slot {
                Some(trial) => trials.push(TrialReport {
                    algorithm: algorithm.label(),
                    seconds: trial.seconds,
                    ops: trial.ops,
                    series: if with_series {
                        Some(trial.series.as_slice())
                    } else {
                        None
                    },
                }),
                None => skipped.push(algorithm.label()),
            }
        }
        RunReport {
            count,
            selector,
            trials,
            skipped,
        }
    }

    pub fn to_json(&self) -> FibmarkResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| FibmarkError::Json {
            reason: e.to_string(),
        })
    }
}

/// Append one `timestamp,n,algorithm,seconds,ops` row per executed trial.
/// The file is created on first use and only ever grows.
pub fn append_csv(path: &Path, slots: &[(Algorithm, Option<Trial>)]) -> FibmarkResult<()> {
    let report_error = |reason: String| FibmarkError::Report {
        path: path.display().to_string(),
        reason,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| report_error(e.to_string()))?;

    for (algorithm, slot) in slots {
        if let Some(trial) = slot {
            writeln!(
                file,
                "{},{},{},{:.6},{}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                trial.n,
                algorithm.label(),
                trial.seconds,
                trial.ops
            )
            .map_err(|e| report_error(e.to_string()))?;
        }
    }
    Ok(())
}

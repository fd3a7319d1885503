use thiserror::Error;

/// Everything that can go wrong before or while a benchmark runs.
///
/// All of these are reported on stderr by the CLI, which then exits
/// with status 1.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FibmarkError {
    #[error("Missing count - usage: fibmark <N> [selector] [print]")]
    MissingCount,

    #[error("'{value}' is no use as a count - give a positive integer")]
    InvalidCount { value: String },

    #[error("Count {count} is too large - the memo table holds {capacity} entries")]
    CountTooLarge { count: usize, capacity: usize },

    #[error("Selector '{value}' is not recognised - valid selectors are 0-4")]
    InvalidSelector { value: String },

    #[error("Cannot write report to '{path}': {reason}")]
    Report { path: String, reason: String },

    #[error("Cannot encode JSON report: {reason}")]
    Json { reason: String },
}

pub type FibmarkResult<T> = Result<T, FibmarkError>;

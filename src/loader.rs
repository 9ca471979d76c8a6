//! Workload loading.
//!
//! A workload is the quantum plus an ordered list of `(arrival, burst)`
//! process specs. Two input formats are accepted:
//!
//! - **Text**: whitespace-separated integers, `n quantum` followed by `n`
//!   pairs `arrival burst`.
//! - **JSON**: `{"quantum": 4, "processes": [{"arrival_time": 0, "burst_time": 5}]}`.
//!
//! Every loader validates before returning, so a `Workload` obtained from
//! here is always safe to simulate.
//!
//! # Example
//!
//! ```
//! use cpu_sched_sim::loader::Workload;
//!
//! let workload = Workload::from_text("3 4\n0 5\n1 3\n2 8\n").unwrap();
//! assert_eq!(workload.quantum, 4);
//! assert_eq!(workload.process_set().len(), 3);
//! ```

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::ProcessSet;
use crate::validation::{validate_workload, ValidationError, ValidationResult};

/// Errors raised while reading a workload.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("read failed: {0}")]
    Read(#[from] io::Error),
    #[error("malformed workload at token {position}: {message}")]
    Parse { position: usize, message: String },
    #[error("malformed JSON workload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid workload: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Supported on-disk formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// `n quantum` then `n` pairs of integers.
    Text,
    /// Serialized [`Workload`].
    Json,
}

impl InputFormat {
    /// JSON for a `.json` extension, text otherwise.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// One process as supplied by the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Arrival time.
    pub arrival_time: i64,
    /// Burst time.
    pub burst_time: i64,
}

/// Simulation input: processes in id order plus the Round-Robin quantum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    /// Round-Robin quantum.
    pub quantum: i64,
    /// Process specs; position i becomes process id i + 1.
    pub processes: Vec<ProcessSpec>,
}

impl Workload {
    /// Creates a workload from `(arrival, burst)` pairs. Not validated.
    pub fn new<I>(quantum: i64, records: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        Self {
            quantum,
            processes: records
                .into_iter()
                .map(|(arrival_time, burst_time)| ProcessSpec {
                    arrival_time,
                    burst_time,
                })
                .collect(),
        }
    }

    /// Replaces the quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// `(arrival, burst)` pairs in id order.
    pub fn records(&self) -> Vec<(i64, i64)> {
        self.processes
            .iter()
            .map(|p| (p.arrival_time, p.burst_time))
            .collect()
    }

    /// Checks every process and the quantum.
    pub fn validate(&self) -> ValidationResult {
        validate_workload(&self.records(), self.quantum)
    }

    /// Builds the canonical process set.
    pub fn process_set(&self) -> ProcessSet {
        ProcessSet::from_records(self.records())
    }

    /// Parses and validates the text format.
    pub fn from_text(input: &str) -> Result<Self, LoadError> {
        let mut tokens = input.split_whitespace().enumerate();
        let mut next = |what: &str| -> Result<i64, LoadError> {
            let (idx, token) = tokens.next().ok_or_else(|| LoadError::Parse {
                position: end_position(input),
                message: format!("unexpected end of input, expected {what}"),
            })?;
            token.parse::<i64>().map_err(|e| LoadError::Parse {
                position: idx + 1,
                message: format!("{what}: '{token}' is not an integer ({e})"),
            })
        };

        let count = next("process count")?;
        let quantum = next("quantum")?;
        let count = usize::try_from(count).map_err(|_| LoadError::Parse {
            position: 1,
            message: format!("process count must not be negative, got {count}"),
        })?;

        // Declared count is untrusted input
        let mut records = Vec::with_capacity(count.min(1024));
        for id in 1..=count {
            let arrival = next(&format!("arrival time of process {id}"))?;
            let burst = next(&format!("burst time of process {id}"))?;
            records.push((arrival, burst));
        }

        let workload = Self::new(quantum, records);
        workload.validate().map_err(LoadError::Invalid)?;
        Ok(workload)
    }

    /// Parses and validates the JSON format.
    pub fn from_json(input: &str) -> Result<Self, LoadError> {
        let workload: Self = serde_json::from_str(input)?;
        workload.validate().map_err(LoadError::Invalid)?;
        Ok(workload)
    }

    /// Reads a whole stream in the given format.
    pub fn from_reader<R: Read>(mut reader: R, format: InputFormat) -> Result<Self, LoadError> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        match format {
            InputFormat::Text => Self::from_text(&contents),
            InputFormat::Json => Self::from_json(&contents),
        }
    }

    /// Loads a workload file, choosing the format by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let workload = Self::from_reader(file, InputFormat::from_path(path))?;
        log::info!(
            "loaded {} processes (quantum {}) from {}",
            workload.processes.len(),
            workload.quantum,
            path.display()
        );
        Ok(workload)
    }

    /// Renders the text format.
    pub fn to_text(&self) -> String {
        let mut out = format!("{} {}\n", self.processes.len(), self.quantum);
        for p in &self.processes {
            out.push_str(&format!("{} {}\n", p.arrival_time, p.burst_time));
        }
        out
    }
}

/// Token position reported when input ends early.
fn end_position(input: &str) -> usize {
    input.split_whitespace().count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_from_text() {
        let w = Workload::from_text("3 4\n0 5\n1 3\n2 8\n").unwrap();
        assert_eq!(w.quantum, 4);
        assert_eq!(w.records(), vec![(0, 5), (1, 3), (2, 8)]);

        let set = w.process_set();
        assert_eq!(set.get(3).unwrap().burst_time, 8);
    }

    #[test]
    fn test_from_text_any_whitespace() {
        let w = Workload::from_text("  2   1 0 1\t\t3 2  ").unwrap();
        assert_eq!(w.records(), vec![(0, 1), (3, 2)]);
    }

    #[test]
    fn test_from_text_truncated() {
        let err = Workload::from_text("2 4\n0 5\n1").unwrap_err();
        match err {
            LoadError::Parse { position, message } => {
                assert_eq!(position, 6);
                assert!(message.contains("burst time of process 2"));
            }
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_text_not_a_number() {
        let err = Workload::from_text("1 4\nzero 5").unwrap_err();
        assert!(matches!(err, LoadError::Parse { position: 3, .. }));
    }

    #[test]
    fn test_from_text_negative_count() {
        let err = Workload::from_text("-1 4").unwrap_err();
        assert!(matches!(err, LoadError::Parse { position: 1, .. }));
    }

    #[test]
    fn test_from_text_rejects_invalid_values() {
        let err = Workload::from_text("2 0\n0 5\n-1 0").unwrap_err();
        match err {
            LoadError::Invalid(errors) => {
                let kinds: Vec<_> = errors.iter().map(|e| e.kind.clone()).collect();
                assert!(kinds.contains(&ValidationErrorKind::NonPositiveQuantum));
                assert!(kinds.contains(&ValidationErrorKind::NegativeArrival));
                assert!(kinds.contains(&ValidationErrorKind::NonPositiveBurst));
            }
            other => panic!("Expected Invalid error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_text_empty_workload() {
        let err = Workload::from_text("0 4").unwrap_err();
        assert!(err.to_string().contains("no processes"));
    }

    #[test]
    fn test_from_text_rejects_time_overflow() {
        let err = Workload::from_text("1 1\n9223372036854775807 1").unwrap_err();
        match err {
            LoadError::Invalid(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
            }
            other => panic!("Expected Invalid error, got {other:?}"),
        }

        let json = serde_json::to_string(&Workload::new(1, [(0, i64::MAX), (0, 1)])).unwrap();
        assert!(matches!(Workload::from_json(&json), Err(LoadError::Invalid(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let w = Workload::new(2, [(0, 3), (4, 1)]);
        let json = serde_json::to_string(&w).unwrap();
        assert_eq!(Workload::from_json(&json).unwrap(), w);
    }

    #[test]
    fn test_from_json_invalid() {
        let err = Workload::from_json(r#"{"quantum": 2, "processes": []}"#).unwrap_err();
        assert!(matches!(err, LoadError::Invalid(_)));

        let err = Workload::from_json("{not json").unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_from_reader() {
        let input = "1 3\n2 2\n".as_bytes();
        let w = Workload::from_reader(input, InputFormat::Text).unwrap();
        assert_eq!(w.records(), vec![(2, 2)]);
    }

    #[test]
    fn test_to_text_parses_back() {
        let w = Workload::new(5, [(0, 2), (1, 7)]);
        assert_eq!(w.to_text(), "2 5\n0 2\n1 7\n");
        assert_eq!(Workload::from_text(&w.to_text()).unwrap(), w);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(InputFormat::from_path(Path::new("w.json")), InputFormat::Json);
        assert_eq!(InputFormat::from_path(Path::new("W.JSON")), InputFormat::Json);
        assert_eq!(InputFormat::from_path(Path::new("w.txt")), InputFormat::Text);
        assert_eq!(InputFormat::from_path(Path::new("input")), InputFormat::Text);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Workload::load("/nonexistent/workload.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/workload.txt"));
    }
}

//! Input validation for CPU scheduling workloads.
//!
//! Checks the invariants every discipline relies on before a run:
//! - At least one process
//! - Arrival times are non-negative
//! - Burst times are positive
//! - The Round-Robin quantum is positive
//! - The simulated timeline fits in `i64`
//!
//! All problems are collected rather than stopping at the first one.

use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The workload has no processes.
    EmptyWorkload,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires no CPU time (or less).
    NonPositiveBurst,
    /// The Round-Robin quantum is zero or negative.
    NonPositiveQuantum,
    /// Latest arrival plus total burst (or the per-process totals derived
    /// from it) exceeds `i64::MAX`.
    TimeOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates `(arrival, burst)` records and the quantum.
///
/// Records are reported with their 1-based process id.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_workload(records: &[(i64, i64)], quantum: i64) -> ValidationResult {
    let mut errors = Vec::new();

    if records.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyWorkload,
            "Workload contains no processes",
        ));
    }

    if quantum <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Quantum must be positive, got {quantum}"),
        ));
    }

    for (idx, &(arrival, burst)) in records.iter().enumerate() {
        let id = idx + 1;
        if arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {id} has negative arrival time {arrival}"),
            ));
        }
        if burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {id} has non-positive burst time {burst}"),
            ));
        }
    }

    if time_horizon(records).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            format!(
                "Latest arrival plus total burst time of {} processes overflows the time range",
                records.len()
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on every finish time, checked so that turnaround and
/// waiting totals over all processes also fit.
///
/// No discipline idles once the last process has arrived, so the schedule
/// ends by `max(arrival) + sum(burst)`.
fn time_horizon(records: &[(i64, i64)]) -> Option<i64> {
    let latest = records.iter().map(|&(a, _)| a.max(0)).max().unwrap_or(0);
    let total_burst = records
        .iter()
        .try_fold(0i64, |acc, &(_, b)| acc.checked_add(b.max(0)))?;
    let horizon = latest.checked_add(total_burst)?;
    let count = i64::try_from(records.len()).ok()?;
    horizon.checked_mul(count.max(1))?;
    Some(horizon)
}

//! Input validation for CPU scheduling runs.
//!
//! Checks structural integrity of a workload before any policy runs.
//! Detects:
//! - Duplicate or zero process IDs
//! - Non-positive burst times (would never finish or finish instantly)
//! - Negative arrival times
//! - Workloads whose clock would overflow before the last completion
//! - Non-positive Round-Robin quanta (would make zero progress)
//!
//! An empty workload is valid: every policy returns an empty schedule.

use std::collections::HashSet;
use std::fmt;

use log::warn;

use crate::models::{Process, Ticks};

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
    /// Two processes share the same ID.
    DuplicateId,
    /// A process ID is zero (IDs are 1-based).
    InvalidId,
    /// A process has a zero or negative burst time.
    NonPositiveBurst,
    /// A process arrives before t=0.
    NegativeArrival,
    /// Round-Robin quantum is missing, zero, or negative.
    InvalidQuantum,
    /// Latest arrival plus total burst does not fit the clock.
    TimeOverflow,
    /// Algorithm selector outside the supported set.
    InvalidChoice,
    /// Workload text or file could not be parsed.
    Parse,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
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

/// Validates a workload.
///
/// Checks:
/// 1. No process has ID 0
/// 2. No duplicate process IDs
/// 3. Every burst is positive
/// 4. No arrival is negative
/// 5. Latest arrival plus total burst fits in [`Ticks`]; no policy's
///    clock can run past that point
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();
    let mut latest_arrival: Ticks = 0;
    let mut total_burst: Option<Ticks> = Some(0);

    for p in processes {
        if p.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidId,
                "Process ID 0 is reserved (IDs start at 1)",
            ));
        } else if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has non-positive burst time {}", p.id, p.burst),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} has negative arrival time {}", p.id, p.arrival),
            ));
        }

        latest_arrival = latest_arrival.max(p.arrival);
        if p.burst > 0 {
            total_burst = total_burst.and_then(|t| t.checked_add(p.burst));
        }
    }

    if total_burst
        .and_then(|t| t.checked_add(latest_arrival))
        .is_none()
    {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            format!(
                "Workload does not fit the clock: latest arrival {latest_arrival} plus total burst exceeds {}",
                Ticks::MAX
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        warn!("rejected workload: {} validation error(s)", errors.len());
        Err(errors)
    }
}

/// Validates a Round-Robin time quantum.
pub fn validate_quantum(quantum: Option<Ticks>) -> Result<Ticks, ValidationError> {
    match quantum {
        Some(q) if q > 0 => Ok(q),
        Some(q) => Err(ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Time quantum must be positive, got {q}"),
        )),
        None => Err(ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            "Round Robin requires a time quantum",
        )),
    }
}

//! Input validation for process batches.
//!
//! The schedulers assume well-formed input and do not check it. This module
//! enforces the loader's preconditions before any scheduler runs:
//! - Unique process IDs
//! - Positive burst times
//! - Non-negative arrival times
//!
//! All problems are collected, not just the first.

use std::collections::HashSet;

use crate::models::Process;

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
    /// A process requires no CPU time (or a negative amount).
    NonPositiveBurst,
    /// A process arrives before t=0.
    NegativeArrival,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a batch before scheduling.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. `burst_time > 0` for every process
/// 3. `arrival_time >= 0` for every process
///
/// An empty batch is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_batch(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has non-positive burst time {}", p.id, p.burst_time),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} has negative arrival time {}", p.id, p.arrival_time),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_batch() -> Vec<Process> {
        vec![
            Process::new(1).with_arrival_time(0).with_burst_time(8),
            Process::new(2).with_arrival_time(1).with_burst_time(4),
            Process::new(3).with_arrival_time(2).with_burst_time(9),
        ]
    }

    #[test]
    fn test_valid_batch() {
        assert!(validate_batch(&sample_batch()).is_ok());
    }

    #[test]
    fn test_empty_batch_valid() {
        assert!(validate_batch(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let mut batch = sample_batch();
        batch.push(Process::new(2).with_burst_time(1));

        let errors = validate_batch(&batch).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
        assert!(errors[0].message.contains('2'));
    }

    #[test]
    fn test_zero_burst() {
        let batch = vec![Process::new(1).with_burst_time(0)];
        let errors = validate_batch(&batch).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
    }

    #[test]
    fn test_negative_arrival() {
        let batch = vec![Process::new(1).with_arrival_time(-1).with_burst_time(3)];
        let errors = validate_batch(&batch).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrival));
    }

    #[test]
    fn test_multiple_errors() {
        let batch = vec![
            Process::new(1).with_burst_time(-2),
            Process::new(1).with_arrival_time(-5),
        ];
        let errors = validate_batch(&batch).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}

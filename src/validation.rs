//! Input validation for job streams.
//!
//! Checks structural integrity of a job stream before it is fed to a
//! dispatcher. The dispatcher itself does not re-check these properties
//! at intake. Detects:
//! - Duplicate job IDs
//! - Zero-size jobs
//! - Arrival-order violations
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 2
//! (problem data conventions)

use std::collections::HashSet;

use crate::models::Job;

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
    /// Two jobs share the same ID.
    DuplicateId,
    /// A job has a size of zero.
    ZeroSize,
    /// A job arrives earlier than its predecessor in the stream.
    ArrivalOrder,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a job stream against the dispatcher's intake contract.
///
/// Checks:
/// 1. No duplicate job IDs
/// 2. Every size is positive
/// 3. Arrivals are non-decreasing in stream order
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_jobs(jobs: &[Job]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut seen_ids = HashSet::new();
    for job in jobs {
        if !seen_ids.insert(job.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }

        if job.size == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroSize,
                format!("Job {} has zero size", job.id),
            ));
        }
    }

    for pair in jobs.windows(2) {
        if pair[1].arrival < pair[0].arrival {
            errors.push(ValidationError::new(
                ValidationErrorKind::ArrivalOrder,
                format!(
                    "Job {} arrives at {} after job {} at {}",
                    pair[1].id, pair[1].arrival, pair[0].id, pair[0].arrival
                ),
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

    fn sample_jobs() -> Vec<Job> {
        vec![
            Job::new(1, 5, 0),
            Job::new(2, 3, 1),
            Job::new(3, 1, 1),
            Job::new(4, 2, 6),
        ]
    }

    #[test]
    fn test_valid_stream() {
        assert!(validate_jobs(&sample_jobs()).is_ok());
    }

    #[test]
    fn test_empty_stream_is_valid() {
        assert!(validate_jobs(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_job_id() {
        let jobs = vec![Job::new(1, 5, 0), Job::new(1, 3, 1)];

        let errors = validate_jobs(&jobs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_zero_size() {
        let jobs = vec![Job::new(1, 0, 0)];

        let errors = validate_jobs(&jobs).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::ZeroSize));
    }

    #[test]
    fn test_arrival_order_violation() {
        let jobs = vec![Job::new(1, 5, 4), Job::new(2, 3, 2)];

        let errors = validate_jobs(&jobs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ArrivalOrder));
    }

    #[test]
    fn test_equal_arrivals_are_fine() {
        let jobs = vec![Job::new(1, 5, 3), Job::new(2, 3, 3)];
        assert!(validate_jobs(&jobs).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        // Duplicate ID + zero size + out-of-order arrival
        let jobs = vec![Job::new(1, 5, 4), Job::new(1, 0, 2)];

        let errors = validate_jobs(&jobs).unwrap_err();
        assert!(errors.len() >= 3);
    }
}

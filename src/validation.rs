//! Input validation for job collections.
//!
//! Checks every job's stage durations before sequencing. Detects:
//! - Negative durations
//! - Non-finite durations (NaN or infinity)
//!
//! Invalid input is rejected whole rather than coerced: clamping a
//! negative or NaN duration to zero would silently corrupt the makespan
//! guarantee. All offending jobs are reported, not just the first.

use std::fmt;

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
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A stage duration is below zero.
    NegativeDuration,
    /// A stage duration is NaN or infinite.
    NonFiniteDuration,
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
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a job collection for sequencing.
///
/// Checks, per job and stage, that the duration is finite and `>= 0`.
/// A zero duration on either or both stages is legal.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_jobs(jobs: &[Job]) -> ValidationResult {
    let mut errors = Vec::new();

    for (index, job) in jobs.iter().enumerate() {
        for (stage, minutes) in [("M1", job.m1_minutes), ("M2", job.m2_minutes)] {
            if !minutes.is_finite() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NonFiniteDuration,
                    format!(
                        "Job '{}' (row {index}) has non-finite {stage} duration: {minutes}",
                        job.name
                    ),
                ));
            } else if minutes < 0.0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NegativeDuration,
                    format!(
                        "Job '{}' (row {index}) has negative {stage} duration: {minutes}",
                        job.name
                    ),
                ));
            }
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

    #[test]
    fn test_valid_jobs() {
        let jobs = vec![Job::new("A", 45.0, 30.0), Job::new("B", 60.0, 25.0)];
        assert!(validate_jobs(&jobs).is_ok());
    }

    #[test]
    fn test_empty_collection_is_valid() {
        assert!(validate_jobs(&[]).is_ok());
    }

    #[test]
    fn test_zero_durations_are_valid() {
        let jobs = vec![Job::new("noop", 0.0, 0.0)];
        assert!(validate_jobs(&jobs).is_ok());
    }

    #[test]
    fn test_negative_m1() {
        let jobs = vec![Job::new("bad", -1.0, 30.0)];
        let errors = validate_jobs(&jobs).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeDuration);
        assert!(errors[0].message.contains("M1"));
    }

    #[test]
    fn test_negative_m2() {
        let jobs = vec![Job::new("bad", 30.0, -0.5)];
        let errors = validate_jobs(&jobs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeDuration && e.message.contains("M2")));
    }

    #[test]
    fn test_nan_duration() {
        let jobs = vec![Job::new("nan", f64::NAN, 10.0)];
        let errors = validate_jobs(&jobs).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NonFiniteDuration);
    }

    #[test]
    fn test_infinite_duration() {
        let jobs = vec![Job::new("inf", 10.0, f64::INFINITY)];
        let errors = validate_jobs(&jobs).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NonFiniteDuration);
    }

    #[test]
    fn test_multiple_errors_collected() {
        let jobs = vec![
            Job::new("ok", 10.0, 10.0),
            Job::new("neg", -1.0, -2.0),
            Job::new("nan", f64::NAN, 5.0),
        ];
        let errors = validate_jobs(&jobs).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.message.contains("row 1")));
        assert!(errors.iter().any(|e| e.message.contains("row 2")));
    }
}

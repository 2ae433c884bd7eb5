//! Sequencing and timeline construction.
//!
//! Two passes, strictly ordered: the Johnson sequencer picks the
//! makespan-minimizing job order, then the timeline builder sweeps that
//! order into concrete per-stage start/end times. [`JohnsonScheduler`]
//! ties them together behind input validation.

mod johnson;
mod kpi;
mod timeline;

pub use johnson::{johnson_order, johnson_sequence};
pub use kpi::ScheduleKpi;
pub use timeline::build_timeline;

use crate::models::{Job, Schedule};
use crate::validation::{validate_jobs, ValidationError};

/// Two-machine flow-shop scheduler.
///
/// Stateless facade: validates the job collection, sequences it with
/// Johnson's rule, and builds the timeline. Each invocation is
/// independent; recomputing from the same collection yields identical
/// output. Invalid input fails atomically — no partial results.
///
/// # Example
///
/// ```
/// use flowshop2::models::Job;
/// use flowshop2::scheduler::JohnsonScheduler;
///
/// let jobs = vec![Job::new("X", 10.0, 5.0)];
/// let schedule = JohnsonScheduler::new().schedule(&jobs).unwrap();
/// assert_eq!(schedule.makespan(), 15.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct JohnsonScheduler;

impl JohnsonScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Validates and sequences a job collection.
    ///
    /// Returns the makespan-minimizing permutation, or all validation
    /// errors if any duration is negative or non-finite. An empty
    /// collection yields an empty sequence.
    pub fn sequence(&self, jobs: &[Job]) -> Result<Vec<Job>, Vec<ValidationError>> {
        validate_jobs(jobs)?;
        Ok(johnson_sequence(jobs))
    }

    /// Validates, sequences, and builds the full timeline.
    ///
    /// An empty collection yields an empty schedule with makespan 0.
    pub fn schedule(&self, jobs: &[Job]) -> Result<Schedule, Vec<ValidationError>> {
        let sequence = self.sequence(jobs)?;
        Ok(build_timeline(&sequence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_schedule_end_to_end() {
        let jobs = vec![
            Job::new("A", 45.0, 30.0),
            Job::new("B", 60.0, 25.0),
            Job::new("C", 50.0, 35.0),
            Job::new("D", 65.0, 20.0),
            Job::new("E", 40.0, 30.0),
            Job::new("F", 55.0, 25.0),
        ];
        let schedule = JohnsonScheduler::new().schedule(&jobs).unwrap();
        assert_eq!(schedule.entry_count(), 6);
        assert_eq!(schedule.makespan(), 335.0);
        assert_eq!(schedule.entries[0].job.name, "C");
        assert_eq!(schedule.entries[5].job.name, "D");
    }

    #[test]
    fn test_empty_collection() {
        let scheduler = JohnsonScheduler::new();
        assert!(scheduler.sequence(&[]).unwrap().is_empty());
        let schedule = scheduler.schedule(&[]).unwrap();
        assert!(schedule.is_empty());
        assert_eq!(schedule.makespan(), 0.0);
    }

    #[test]
    fn test_invalid_input_rejected_atomically() {
        let jobs = vec![Job::new("ok", 10.0, 10.0), Job::new("bad", -1.0, 5.0)];
        let scheduler = JohnsonScheduler::new();

        let errors = scheduler.schedule(&jobs).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeDuration);
        // Sequencing is rejected too — no partial results anywhere.
        assert!(scheduler.sequence(&jobs).is_err());
    }

    #[test]
    fn test_determinism() {
        let jobs = vec![
            Job::new("A", 45.0, 30.0),
            Job::new("B", 60.0, 25.0),
            Job::new("C", 50.0, 35.0),
        ];
        let scheduler = JohnsonScheduler::new();
        let first = scheduler.schedule(&jobs).unwrap();
        let second = scheduler.schedule(&jobs).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_names_are_legal() {
        let jobs = vec![Job::new("batch", 10.0, 20.0), Job::new("batch", 30.0, 5.0)];
        let schedule = JohnsonScheduler::new().schedule(&jobs).unwrap();
        assert_eq!(schedule.entry_count(), 2);
    }
}

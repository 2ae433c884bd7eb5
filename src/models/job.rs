//! Job (production batch) model.
//!
//! A job is one batch passing through both stages of the line: first the
//! paint booth (M1), then quality control (M2). Its name is opaque to the
//! algorithm and used only for display and traceability.
//!
//! # Time Representation
//! Durations are minutes, as non-negative finite `f64`. Fractional
//! minutes are legal; the scheduling epoch (t=0) is defined by the caller.

use serde::{Deserialize, Serialize};

/// A job (production batch) to be sequenced.
///
/// Carries one processing duration per stage. The position of a job in
/// the input collection is its original index, which the sequencer uses
/// as the tie-break key; duplicate names are legal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Display name. Opaque to the algorithm.
    pub name: String,
    /// Processing time on M1, the paint stage (minutes).
    pub m1_minutes: f64,
    /// Processing time on M2, the quality-control stage (minutes).
    pub m2_minutes: f64,
}

impl Job {
    /// Creates a new job with the given name and per-stage durations.
    pub fn new(name: impl Into<String>, m1_minutes: f64, m2_minutes: f64) -> Self {
        Self {
            name: name.into(),
            m1_minutes,
            m2_minutes,
        }
    }

    /// The smaller of the two stage durations — Johnson's selection key.
    #[inline]
    pub fn min_stage_minutes(&self) -> f64 {
        self.m1_minutes.min(self.m2_minutes)
    }

    /// Whether the job's bottleneck is the first stage (`m1 <= m2`).
    ///
    /// M1-bound jobs are scheduled as early as possible; the rest as late
    /// as possible. A tie counts as M1-bound.
    #[inline]
    pub fn is_m1_bound(&self) -> bool {
        self.m1_minutes <= self.m2_minutes
    }

    /// Total processing time across both stages (minutes).
    #[inline]
    pub fn total_minutes(&self) -> f64 {
        self.m1_minutes + self.m2_minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_new() {
        let job = Job::new("A-Sedan", 45.0, 30.0);
        assert_eq!(job.name, "A-Sedan");
        assert_eq!(job.m1_minutes, 45.0);
        assert_eq!(job.m2_minutes, 30.0);
    }

    #[test]
    fn test_min_stage_minutes() {
        assert_eq!(Job::new("a", 45.0, 30.0).min_stage_minutes(), 30.0);
        assert_eq!(Job::new("b", 10.0, 20.0).min_stage_minutes(), 10.0);
        assert_eq!(Job::new("c", 15.0, 15.0).min_stage_minutes(), 15.0);
    }

    #[test]
    fn test_is_m1_bound() {
        assert!(Job::new("short_paint", 10.0, 20.0).is_m1_bound());
        assert!(!Job::new("short_qc", 20.0, 10.0).is_m1_bound());
        // Tie goes to the M1-bound branch
        assert!(Job::new("tied", 15.0, 15.0).is_m1_bound());
    }

    #[test]
    fn test_total_minutes() {
        assert_eq!(Job::new("a", 45.0, 30.0).total_minutes(), 75.0);
        assert_eq!(Job::new("idle", 0.0, 0.0).total_minutes(), 0.0);
    }

    #[test]
    fn test_job_serde_round_trip() {
        let job = Job::new("C-Hybrid", 50.0, 35.0);
        let json = serde_json::to_string(&job).unwrap();
        let back: Job = serde_json::from_str(&json).unwrap();
        assert_eq!(back, job);
    }
}

//! Schedule (timeline) model.
//!
//! A schedule is the concrete timetable derived from a sequenced job
//! list: per job, the start and end times on each of the two stages.
//! Entries are derived values and never mutated once computed.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};

use super::Job;

/// Per-job stage timings within a schedule.
///
/// Records when one job occupies each stage. `*_end = *_start + duration`
/// for the respective stage, all in minutes from the scheduling epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// The scheduled job.
    pub job: Job,
    /// Start on M1 (paint) in minutes.
    pub m1_start: f64,
    /// End on M1 in minutes.
    pub m1_end: f64,
    /// Start on M2 (quality control) in minutes.
    pub m2_start: f64,
    /// End on M2 in minutes.
    pub m2_end: f64,
}

impl ScheduleEntry {
    /// Occupancy duration on M1 (minutes).
    #[inline]
    pub fn m1_duration(&self) -> f64 {
        self.m1_end - self.m1_start
    }

    /// Occupancy duration on M2 (minutes).
    #[inline]
    pub fn m2_duration(&self) -> f64 {
        self.m2_end - self.m2_start
    }

    /// Time the job waits between leaving M1 and entering M2 (minutes).
    #[inline]
    pub fn wait_minutes(&self) -> f64 {
        self.m2_start - self.m1_end
    }
}

/// A complete schedule for the two-stage line.
///
/// Entries appear in processing order (the sequenced order); both stages
/// process jobs in this same relative order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Per-job stage timings, in processing order.
    pub entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn add_entry(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Makespan: end time of the last job on M2 (minutes).
    ///
    /// Entries are in processing order with M2 ends non-decreasing, so
    /// this is the last entry's `m2_end`; 0.0 for an empty schedule.
    pub fn makespan(&self) -> f64 {
        self.entries.last().map(|e| e.m2_end).unwrap_or(0.0)
    }

    /// Finds the first entry for a job with the given name.
    pub fn entry_for_job(&self, name: &str) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.job.name == name)
    }

    /// Total time M1 spends processing (minutes).
    pub fn m1_busy_minutes(&self) -> f64 {
        self.entries.iter().map(|e| e.m1_duration()).sum()
    }

    /// Total time M2 spends processing (minutes).
    pub fn m2_busy_minutes(&self) -> f64 {
        self.entries.iter().map(|e| e.m2_duration()).sum()
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schedule has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

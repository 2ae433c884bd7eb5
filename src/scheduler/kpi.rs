//! Schedule quality metrics (KPIs).
//!
//! Computes performance indicators for a two-stage line timetable. The
//! sequencing objective is the makespan, but the line operators also care
//! about machine dead time, which these metrics expose directly.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | End of the last job on M2 |
//! | M1/M2 idle | Makespan minus the stage's busy time |
//! | M1/M2 utilization | Busy time / makespan |
//! | Total wait | Sum of per-job gaps between M1 end and M2 start |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use crate::models::Schedule;

/// Performance indicators for a schedule.
///
/// All time values are in minutes.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Makespan: end of the last job on M2 (minutes).
    pub makespan_minutes: f64,
    /// Time M1 sits idle within the makespan (minutes).
    pub m1_idle_minutes: f64,
    /// Time M2 sits idle within the makespan (minutes).
    pub m2_idle_minutes: f64,
    /// M1 busy fraction of the makespan (0.0..1.0).
    pub m1_utilization: f64,
    /// M2 busy fraction of the makespan (0.0..1.0).
    pub m2_utilization: f64,
    /// Total time jobs wait between M1 and M2 (minutes).
    pub total_wait_minutes: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a completed schedule.
    ///
    /// An empty schedule yields all-zero metrics with utilization 0.0.
    pub fn calculate(schedule: &Schedule) -> Self {
        let makespan = schedule.makespan();
        let m1_busy = schedule.m1_busy_minutes();
        let m2_busy = schedule.m2_busy_minutes();
        let total_wait = schedule.entries.iter().map(|e| e.wait_minutes()).sum();

        let (m1_utilization, m2_utilization) = if makespan > 0.0 {
            (m1_busy / makespan, m2_busy / makespan)
        } else {
            (0.0, 0.0)
        };

        Self {
            makespan_minutes: makespan,
            m1_idle_minutes: makespan - m1_busy,
            m2_idle_minutes: makespan - m2_busy,
            m1_utilization,
            m2_utilization,
            total_wait_minutes: total_wait,
        }
    }
}

//! Timeline construction for a sequenced job list.
//!
//! Turns a job sequence into concrete per-stage start/end times by a
//! single forward sweep. Both stages process jobs in the given order;
//! each stage handles one job at a time with no preemption.

use log::debug;

use crate::models::{Job, Schedule, ScheduleEntry};

/// Builds the schedule for a job sequence.
///
/// One cursor per stage, both starting at 0. Each job occupies M1 as soon
/// as the booth is free, and M2 no earlier than its own M1 end and no
/// earlier than M2 is free from the previous job. A pure fold; the only
/// branch is the `max` coupling the two stages.
pub fn build_timeline(sequence: &[Job]) -> Schedule {
    let mut schedule = Schedule::new();
    let mut m1_cursor = 0.0_f64;
    let mut m2_cursor = 0.0_f64;

    for job in sequence {
        let m1_start = m1_cursor;
        let m1_end = m1_start + job.m1_minutes;
        let m2_start = m1_end.max(m2_cursor);
        let m2_end = m2_start + job.m2_minutes;

        m1_cursor = m1_end;
        m2_cursor = m2_end;

        schedule.add_entry(ScheduleEntry {
            job: job.clone(),
            m1_start,
            m1_end,
            m2_start,
            m2_end,
        });
    }

    debug!(
        "build_timeline: {} jobs, makespan {} min",
        sequence.len(),
        m2_cursor
    );

    schedule
}

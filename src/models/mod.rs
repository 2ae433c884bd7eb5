//! Flow-shop domain models.
//!
//! Core data types for the two-stage line: a `Job` with one duration per
//! stage, and the derived `Schedule` of per-stage start/end times.
//!
//! # Domain Mappings
//!
//! | flowshop2 | Paint line | General flow shop |
//! |-----------|-----------|-------------------|
//! | Job | Vehicle batch | Job/Order |
//! | M1 | Paint booth | First machine |
//! | M2 | Quality control | Second machine |
//! | Schedule | Line timetable | Gantt rows |

mod job;
mod schedule;

pub use job::Job;
pub use schedule::{Schedule, ScheduleEntry};

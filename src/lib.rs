//! Two-machine flow-shop sequencing and timeline construction.
//!
//! Models a two-stage sequential production line — a paint booth (M1)
//! followed by a final quality-control station (M2) — and computes the
//! job order that minimizes the makespan, using Johnson's rule for
//! two-machine permutation flow shops.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `ScheduleEntry`, `Schedule`
//! - **`validation`**: Input integrity checks (negative or non-finite durations)
//! - **`scheduler`**: Johnson sequencer, timeline builder, and schedule KPIs
//!
//! # Pipeline
//!
//! Data flows one way: a job collection is validated, sequenced, then
//! swept into a concrete timeline. No stage reads back from a later one.
//!
//! ```text
//! &[Job] → johnson_sequence → Vec<Job> → build_timeline → Schedule
//! ```
//!
//! # Example
//!
//! ```
//! use flowshop2::models::Job;
//! use flowshop2::scheduler::JohnsonScheduler;
//!
//! let jobs = vec![
//!     Job::new("Sedan", 45.0, 30.0),
//!     Job::new("SUV", 60.0, 25.0),
//! ];
//! let schedule = JohnsonScheduler::new().schedule(&jobs).unwrap();
//! assert_eq!(schedule.makespan(), 130.0);
//! ```
//!
//! # References
//!
//! - Johnson (1954), "Optimal two- and three-stage production schedules
//!   with setup times included"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 6

pub mod models;
pub mod scheduler;
pub mod validation;

pub use models::{Job, Schedule, ScheduleEntry};
pub use scheduler::JohnsonScheduler;

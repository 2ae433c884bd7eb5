//! Johnson's rule for two-machine flow shops.
//!
//! # Algorithm
//!
//! 1. Among the remaining jobs, pick the one whose smaller stage duration
//!    is minimal (earliest remaining job wins ties).
//! 2. If its bottleneck is M2 or the stages tie (`m1 <= m2`), schedule it
//!    as early as possible; otherwise as late as possible.
//! 3. Repeat until no jobs remain.
//!
//! The result minimizes the makespan over all permutations for a
//! two-machine permutation flow shop.
//!
//! # Complexity
//! O(n²): each selection scans the remaining jobs.
//!
//! # Reference
//! Johnson (1954); Pinedo (2016), "Scheduling", Ch. 6.1

use log::debug;

use crate::models::Job;

/// Computes the Johnson order as indices into `jobs`.
///
/// The returned vector is a permutation of `0..jobs.len()`: front-loaded
/// M1-bound jobs in ascending order of their smaller stage duration,
/// followed by M2-bound jobs in descending order of theirs. Ties on the
/// selection key go to the job with the smaller original index; removal
/// never reorders survivors, so the left-to-right scan below preserves
/// exactly that order.
///
/// Durations must already be validated (finite, non-negative); NaN would
/// make the comparisons below meaningless.
pub fn johnson_order(jobs: &[Job]) -> Vec<usize> {
    let mut remaining: Vec<usize> = (0..jobs.len()).collect();
    let mut front: Vec<usize> = Vec::new();
    let mut back: Vec<usize> = Vec::new();

    while !remaining.is_empty() {
        let mut best_pos = 0;
        for pos in 1..remaining.len() {
            // Strict `<` keeps the earliest remaining job on ties.
            if jobs[remaining[pos]].min_stage_minutes()
                < jobs[remaining[best_pos]].min_stage_minutes()
            {
                best_pos = pos;
            }
        }

        let index = remaining.remove(best_pos);
        if jobs[index].is_m1_bound() {
            front.push(index);
        } else {
            back.push(index);
        }
    }

    debug!(
        "johnson_order: {} jobs, {} front (M1-bound), {} back (M2-bound)",
        jobs.len(),
        front.len(),
        back.len()
    );

    // Selection visits `back` jobs in ascending key order; reversing once
    // is equivalent to inserting each at the front, yielding the
    // descending tail Johnson's rule requires.
    back.reverse();
    front.extend(back);

    assert_eq!(
        front.len(),
        jobs.len(),
        "sequencer dropped or duplicated jobs"
    );
    front
}

/// Computes the Johnson sequence as a reordered job list.
///
/// The result is a permutation of `jobs`: same jobs, no additions,
/// removals, or duplications.
pub fn johnson_sequence(jobs: &[Job]) -> Vec<Job> {
    johnson_order(jobs)
        .into_iter()
        .map(|i| jobs[i].clone())
        .collect()
}

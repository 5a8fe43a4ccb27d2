//! Greedy set-cover scheduling and coverage auditing.
//!
//! # Algorithm
//!
//! `GreedyScheduler` repeatedly picks the teacher covering the most
//! uncovered subjects (ties: youngest, then input order) until the
//! universe is exhausted or no progress is possible. This is the classic
//! O(log n)-approximate greedy heuristic for Set Cover.
//!
//! # Audit
//!
//! `CoverageAudit` independently rechecks a schedule for missing,
//! duplicated, or extraneous subjects.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 35.3

mod audit;
mod greedy;

pub use audit::CoverageAudit;
pub use greedy::{select_schedule, GreedyScheduler};

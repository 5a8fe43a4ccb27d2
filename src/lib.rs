//! Teacher-to-subject assignment via greedy set cover.
//!
//! Assigns a small set of teachers to a fixed universe of subjects using
//! the classic greedy approximation for the Set Cover problem: repeatedly
//! pick the teacher covering the most uncovered subjects, breaking ties by
//! youngest age and then by input order.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Teacher`, `Universe`, `Schedule`,
//!   `Assignment`, `Coverage`
//! - **`scheduler`**: The greedy coverage engine and an independent
//!   coverage audit
//! - **`validation`**: Input integrity checks (duplicate IDs, blank labels)
//! - **`report`**: Human-readable rendering of outcomes
//! - **`dataset`**: The canonical demonstration universe and faculty
//!
//! # Design
//!
//! The scheduler never mutates its inputs: assignments are returned in a
//! [`models::Schedule`] keyed by teacher ID, and the impossible case is an
//! explicit [`models::Coverage::Uncoverable`] variant rather than a
//! sentinel. Given identical inputs, the result is identical.
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 35.3
//! - Chvátal (1979), "A Greedy Heuristic for the Set-Covering Problem"

pub mod dataset;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;

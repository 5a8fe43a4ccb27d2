//! Coverage domain models.
//!
//! Provides the core data types for representing a set-cover assignment
//! problem and its solution.
//!
//! # Set-Cover Mapping
//!
//! | classcover | Set Cover |
//! |------------|-----------|
//! | Universe | Universe U of elements |
//! | Teacher | Candidate subset S ⊆ U (its `can_teach` set) |
//! | Assignment | Chosen subset, restricted to newly covered elements |
//! | Schedule | Selected sub-collection, in selection order |

mod schedule;
mod subject;
mod teacher;

pub use schedule::{Assignment, Coverage, Schedule};
pub use subject::Universe;
pub use teacher::Teacher;

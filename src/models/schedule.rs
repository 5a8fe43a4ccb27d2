//! Schedule (solution) model.
//!
//! A schedule is an ordered list of teacher assignments: which teacher was
//! selected, in what order, and which subjects each one was given. The
//! scheduler reports outcomes through [`Coverage`], so an uncoverable
//! universe is a first-class value rather than an error or a sentinel.
//!
//! Selection order is meaningful for audit and reporting, not for
//! coverage correctness.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Subjects given to one selected teacher.
///
/// Produced only by the scheduler; the subject set is always a non-empty
/// subset of the teacher's capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Selected teacher's ID.
    pub teacher_id: String,
    /// Subjects this teacher was assigned, sorted.
    pub subjects: BTreeSet<String>,
}

/// A complete schedule (solution to a coverage problem).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Assignments in selection order.
    pub assignments: Vec<Assignment>,
}

/// Outcome of a scheduling run.
///
/// Two variants force callers to handle the impossible case explicitly;
/// there is no partial schedule on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Coverage {
    /// Every subject in the universe is covered.
    Covered(Schedule),
    /// The candidate pool cannot reach full coverage.
    Uncoverable,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(teacher_id: impl Into<String>, subjects: BTreeSet<String>) -> Self {
        Self {
            teacher_id: teacher_id.into(),
            subjects,
        }
    }

    /// Number of subjects assigned.
    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an assignment.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Number of selected teachers.
    pub fn teacher_count(&self) -> usize {
        self.assignments.len()
    }

    /// Whether no teacher was selected.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Union of all assigned subject sets.
    pub fn covered_subjects(&self) -> BTreeSet<String> {
        self.assignments
            .iter()
            .flat_map(|a| a.subjects.iter().cloned())
            .collect()
    }

    /// Finds the assignment for a given teacher.
    pub fn assignment_for(&self, teacher_id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.teacher_id == teacher_id)
    }

    /// Subjects assigned to a given teacher (empty if not selected).
    pub fn subjects_for(&self, teacher_id: &str) -> BTreeSet<String> {
        self.assignment_for(teacher_id)
            .map(|a| a.subjects.clone())
            .unwrap_or_default()
    }
}

impl Coverage {
    /// Whether full coverage was reached.
    pub fn is_covered(&self) -> bool {
        matches!(self, Coverage::Covered(_))
    }

    /// Borrows the schedule, if any.
    pub fn schedule(&self) -> Option<&Schedule> {
        match self {
            Coverage::Covered(s) => Some(s),
            Coverage::Uncoverable => None,
        }
    }

    /// Consumes the outcome, yielding the schedule, if any.
    pub fn into_schedule(self) -> Option<Schedule> {
        match self {
            Coverage::Covered(s) => Some(s),
            Coverage::Uncoverable => None,
        }
    }
}

//! Coverage audit.
//!
//! Recomputes coverage facts from a finished schedule, independently of
//! the scheduler that produced it. The scheduler already guarantees its
//! own invariants, so a failing audit on scheduler output indicates a
//! scheduler bug; the audit earns its keep on schedules that arrive from
//! elsewhere (e.g. deserialized or hand-built).
//!
//! # Checks
//!
//! | Check | Meaning |
//! |-------|---------|
//! | `missing` | Universe subjects no assignment covers |
//! | `duplicated` | Subjects assigned to more than one teacher |
//! | `extraneous` | Assigned subjects outside the universe |

use std::collections::BTreeSet;

use crate::models::{Schedule, Universe};

/// Result of auditing a schedule against a universe.
///
/// All three sets empty means the schedule is a clean, exact cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageAudit {
    /// Universe subjects not covered by any assignment.
    pub missing: BTreeSet<String>,
    /// Subjects appearing in more than one assignment.
    pub duplicated: BTreeSet<String>,
    /// Assigned subjects that are not part of the universe.
    pub extraneous: BTreeSet<String>,
}

impl CoverageAudit {
    /// Audits a schedule against the universe it was built for.
    pub fn calculate(universe: &Universe, schedule: &Schedule) -> Self {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        let mut duplicated = BTreeSet::new();
        let mut extraneous = BTreeSet::new();

        for assignment in &schedule.assignments {
            for subject in &assignment.subjects {
                if !seen.insert(subject) {
                    duplicated.insert(subject.clone());
                }
                if !universe.contains(subject) {
                    extraneous.insert(subject.clone());
                }
            }
        }

        let missing = universe
            .iter()
            .filter(|s| !seen.contains(s))
            .map(str::to_string)
            .collect();

        Self {
            missing,
            duplicated,
            extraneous,
        }
    }

    /// Whether the schedule is an exact, disjoint cover of the universe.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.duplicated.is_empty() && self.extraneous.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Assignment, Schedule};

    fn set(labels: &[&str]) -> BTreeSet<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_clean_cover() {
        let universe = Universe::from_labels(["A", "B", "C"]);
        let mut schedule = Schedule::new();
        schedule.add_assignment(Assignment::new("t1", set(&["A", "B"])));
        schedule.add_assignment(Assignment::new("t2", set(&["C"])));

        let audit = CoverageAudit::calculate(&universe, &schedule);
        assert!(audit.is_complete());
        assert!(audit.missing.is_empty());
    }

    #[test]
    fn test_missing_subject_detected() {
        let universe = Universe::from_labels(["A", "B", "C"]);
        let mut schedule = Schedule::new();
        schedule.add_assignment(Assignment::new("t1", set(&["A"])));

        let audit = CoverageAudit::calculate(&universe, &schedule);
        assert!(!audit.is_complete());
        assert_eq!(audit.missing, set(&["B", "C"]));
    }

    #[test]
    fn test_duplicate_assignment_detected() {
        let universe = Universe::from_labels(["A", "B"]);
        let mut schedule = Schedule::new();
        schedule.add_assignment(Assignment::new("t1", set(&["A", "B"])));
        schedule.add_assignment(Assignment::new("t2", set(&["B"])));

        let audit = CoverageAudit::calculate(&universe, &schedule);
        assert!(!audit.is_complete());
        assert_eq!(audit.duplicated, set(&["B"]));
    }

    #[test]
    fn test_extraneous_subject_detected() {
        let universe = Universe::from_labels(["A"]);
        let mut schedule = Schedule::new();
        schedule.add_assignment(Assignment::new("t1", set(&["A", "Art"])));

        let audit = CoverageAudit::calculate(&universe, &schedule);
        assert!(!audit.is_complete());
        assert_eq!(audit.extraneous, set(&["Art"]));
    }

    #[test]
    fn test_empty_universe_empty_schedule() {
        let audit = CoverageAudit::calculate(&Universe::new(), &Schedule::new());
        assert!(audit.is_complete());
    }

    #[test]
    fn test_scheduler_output_passes_audit() {
        use crate::models::Teacher;
        use crate::scheduler::select_schedule;

        let universe = Universe::from_labels(["A", "B", "C"]);
        let teachers = vec![
            Teacher::new("t1").with_age(30).with_subjects(["A", "B"]),
            Teacher::new("t2").with_age(40).with_subjects(["B", "C"]),
        ];

        let schedule = select_schedule(&universe, &teachers).into_schedule().unwrap();
        assert!(CoverageAudit::calculate(&universe, &schedule).is_complete());
    }
}

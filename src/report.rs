//! Human-readable rendering of scheduling outcomes.
//!
//! Pure string formatting; no I/O. The demo binary (and any caller)
//! decides where the text goes.

use std::fmt::Write;

use crate::models::{Coverage, Teacher};

/// Notice printed when the candidate pool cannot cover the universe.
pub const UNCOVERABLE_NOTICE: &str =
    "It is not possible to cover all subjects with the available teachers.";

/// Renders a scheduling outcome.
///
/// On success, one block per selected teacher in selection order: full
/// name, age, email, and the assigned subjects comma-joined in sorted
/// order. On `Uncoverable`, the single-line impossibility notice.
///
/// `teachers` is the candidate pool the schedule was built from; an
/// assignment whose teacher is missing from the pool falls back to the
/// raw ID.
pub fn render_outcome(outcome: &Coverage, teachers: &[Teacher]) -> String {
    let schedule = match outcome {
        Coverage::Covered(s) => s,
        Coverage::Uncoverable => return UNCOVERABLE_NOTICE.to_string(),
    };

    let mut out = String::from("Class schedule:\n");
    for assignment in &schedule.assignments {
        let subjects = assignment
            .subjects
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        match teachers.iter().find(|t| t.id == assignment.teacher_id) {
            Some(t) => {
                let _ = writeln!(out, "{}, {} years, email: {}", t.full_name(), t.age, t.email);
            }
            None => {
                let _ = writeln!(out, "{}", assignment.teacher_id);
            }
        }
        let _ = writeln!(out, "  Teaches subjects: {subjects}\n");
    }
    out
}

/// Renders the candidate pool as a capability listing.
pub fn render_roster(teachers: &[Teacher]) -> String {
    let mut out = format!("Available teachers: {}\n", teachers.len());
    for t in teachers {
        let subjects = t
            .can_teach
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "  - {} ({}): {}", t.full_name(), t.age, subjects);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Assignment, Schedule};
    use std::collections::BTreeSet;

    fn set(labels: &[&str]) -> BTreeSet<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    fn sample_pool() -> Vec<Teacher> {
        vec![
            Teacher::new("shevchenko")
                .with_name("Natalia", "Shevchenko")
                .with_age(29)
                .with_email("n.shevchenko@example.com")
                .with_subjects(["Biology", "Chemistry"]),
            Teacher::new("ivanenko")
                .with_name("Oleksandr", "Ivanenko")
                .with_age(45)
                .with_email("o.ivanenko@example.com")
                .with_subjects(["Mathematics", "Physics"]),
        ]
    }

    #[test]
    fn test_render_uncoverable() {
        let text = render_outcome(&Coverage::Uncoverable, &sample_pool());
        assert_eq!(text, UNCOVERABLE_NOTICE);
    }

    #[test]
    fn test_render_covered() {
        let mut schedule = Schedule::new();
        schedule.add_assignment(Assignment::new("shevchenko", set(&["Chemistry", "Biology"])));
        schedule.add_assignment(Assignment::new("ivanenko", set(&["Mathematics"])));

        let text = render_outcome(&Coverage::Covered(schedule), &sample_pool());
        assert!(text.starts_with("Class schedule:"));
        assert!(text.contains("Natalia Shevchenko, 29 years, email: n.shevchenko@example.com"));
        // Sorted, comma-joined subject list.
        assert!(text.contains("Teaches subjects: Biology, Chemistry"));
        assert!(text.contains("Oleksandr Ivanenko, 45 years"));
        // Selection order preserved in output.
        let shev = text.find("Shevchenko").unwrap();
        let ivan = text.find("Ivanenko").unwrap();
        assert!(shev < ivan);
    }

    #[test]
    fn test_render_unknown_teacher_falls_back_to_id() {
        let mut schedule = Schedule::new();
        schedule.add_assignment(Assignment::new("ghost", set(&["Art"])));

        let text = render_outcome(&Coverage::Covered(schedule), &sample_pool());
        assert!(text.contains("ghost"));
        assert!(text.contains("Teaches subjects: Art"));
    }

    #[test]
    fn test_render_roster() {
        let text = render_roster(&sample_pool());
        assert!(text.starts_with("Available teachers: 2"));
        assert!(text.contains("Natalia Shevchenko (29): Biology, Chemistry"));
        assert!(text.contains("Oleksandr Ivanenko (45): Mathematics, Physics"));
    }
}

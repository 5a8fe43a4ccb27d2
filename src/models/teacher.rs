//! Teacher model.
//!
//! Teachers are the covering sets of the problem: each teacher brings a
//! fixed set of subjects they are qualified to teach. Personal fields
//! (name, age, email) are carried for reporting; age additionally serves
//! as the scheduler's tie-break key.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 35.3 (Set Cover)

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A teacher available for subject assignment.
///
/// Capability (`can_teach`) is fixed at construction and never mutated by
/// the scheduler; assignments are reported through [`Schedule`] output
/// rather than written back into the teacher.
///
/// [`Schedule`]: super::Schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Age in years. Younger wins scheduler ties.
    pub age: u32,
    /// Contact address (opaque, not validated).
    pub email: String,
    /// Subjects this teacher is qualified to teach.
    pub can_teach: BTreeSet<String>,
}

impl Teacher {
    /// Creates a new teacher with the given ID and no capabilities.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            first_name: String::new(),
            last_name: String::new(),
            age: 0,
            email: String::new(),
            can_teach: BTreeSet::new(),
        }
    }

    /// Sets the given and family names.
    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = first.into();
        self.last_name = last.into();
        self
    }

    /// Sets the age.
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    /// Sets the contact email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Adds a single teachable subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.can_teach.insert(subject.into());
        self
    }

    /// Adds several teachable subjects at once.
    pub fn with_subjects<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.can_teach.extend(subjects.into_iter().map(Into::into));
        self
    }

    /// Full name in "First Last" form.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether this teacher is qualified for a given subject.
    pub fn can_teach(&self, subject: &str) -> bool {
        self.can_teach.contains(subject)
    }

    /// Number of subjects this teacher can cover.
    pub fn subject_count(&self) -> usize {
        self.can_teach.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teacher_builder() {
        let t = Teacher::new("ivanenko")
            .with_name("Oleksandr", "Ivanenko")
            .with_age(45)
            .with_email("o.ivanenko@example.com")
            .with_subject("Mathematics")
            .with_subject("Physics");

        assert_eq!(t.id, "ivanenko");
        assert_eq!(t.full_name(), "Oleksandr Ivanenko");
        assert_eq!(t.age, 45);
        assert_eq!(t.email, "o.ivanenko@example.com");
        assert_eq!(t.subject_count(), 2);
        assert!(t.can_teach("Mathematics"));
        assert!(!t.can_teach("Biology"));
    }

    #[test]
    fn test_with_subjects_deduplicates() {
        let t = Teacher::new("t1").with_subjects(["Chemistry", "Biology", "Chemistry"]);
        assert_eq!(t.subject_count(), 2);
    }

    #[test]
    fn test_empty_capability_allowed() {
        let t = Teacher::new("idle").with_name("No", "Subjects");
        assert_eq!(t.subject_count(), 0);
        assert!(!t.can_teach("Anything"));
    }

    #[test]
    fn test_teacher_json_round_trip() {
        let t = Teacher::new("shevchenko")
            .with_name("Natalia", "Shevchenko")
            .with_age(29)
            .with_subjects(["Biology", "Chemistry"]);

        let json = serde_json::to_string(&t).unwrap();
        let back: Teacher = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}

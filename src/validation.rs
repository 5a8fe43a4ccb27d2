//! Input validation for coverage problems.
//!
//! Checks structural integrity of the universe and candidate pool before
//! scheduling. Detects:
//! - Duplicate teacher IDs
//! - Blank teacher IDs
//! - Blank subject labels (in the universe or in a capability set)
//!
//! An uncoverable universe is deliberately NOT a validation error: it is
//! a legitimate scheduling outcome, reported by the scheduler as
//! [`Coverage::Uncoverable`](crate::models::Coverage). Teachers with
//! empty capability sets are likewise valid input; they simply can never
//! be selected.

use crate::models::{Teacher, Universe};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two teachers share the same ID.
    DuplicateId,
    /// A teacher has an empty ID.
    BlankId,
    /// A subject label is empty or whitespace-only.
    BlankSubject,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a coverage problem.
///
/// Checks:
/// 1. Every teacher has a non-empty ID
/// 2. No duplicate teacher IDs
/// 3. No blank subject labels in the universe
/// 4. No blank subject labels in any capability set
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(universe: &Universe, teachers: &[Teacher]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut teacher_ids = HashSet::new();
    for t in teachers {
        if t.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankId,
                format!("Teacher '{}' has a blank ID", t.full_name()),
            ));
        } else if !teacher_ids.insert(t.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate teacher ID: {}", t.id),
            ));
        }

        for subject in &t.can_teach {
            if subject.trim().is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::BlankSubject,
                    format!("Teacher '{}' has a blank subject label", t.id),
                ));
            }
        }
    }

    for subject in universe.iter() {
        if subject.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankSubject,
                "Universe contains a blank subject label".to_string(),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

//! Subject universe model.
//!
//! The universe is the complete set of subjects a schedule must cover.
//! Labels are opaque strings; the set is unordered in meaning but iterates
//! lexicographically so that display and serialization are deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The set of subjects that must be covered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Universe {
    subjects: BTreeSet<String>,
}

impl Universe {
    /// Creates an empty universe.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a universe from any iterator of labels. Duplicates collapse.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            subjects: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Adds a subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subjects.insert(subject.into());
        self
    }

    /// Whether a subject belongs to the universe.
    pub fn contains(&self, subject: &str) -> bool {
        self.subjects.contains(subject)
    }

    /// Number of subjects.
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    /// Whether the universe is empty.
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Iterates subjects in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.subjects.iter().map(String::as_str)
    }

    /// Returns the underlying label set.
    pub fn as_set(&self) -> &BTreeSet<String> {
        &self.subjects
    }
}

impl<S: Into<String>> FromIterator<S> for Universe {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_labels(iter)
    }
}

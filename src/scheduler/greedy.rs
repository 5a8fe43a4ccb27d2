//! Greedy set-cover scheduler.
//!
//! # Algorithm
//!
//! 1. While uncovered subjects remain, score every remaining candidate by
//!    how many uncovered subjects it can teach.
//! 2. Select the candidate with maximum coverage; break ties by minimum
//!    age, then by input order.
//! 3. Assign exactly the newly covered subjects to that teacher and
//!    retire the teacher from the pool.
//! 4. If no candidate covers anything, the universe is uncoverable.
//!
//! The greedy choice yields an O(log n) approximation to the minimum
//! cover; the age tie-break has no optimality claim and exists only to
//! make output reproducible.
//!
//! # Complexity
//! O(|universe| × |candidates|) time, O(|universe| + |candidates|) space.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 35.3 (Set Cover)

use std::collections::BTreeSet;

use crate::models::{Assignment, Coverage, Schedule, Teacher, Universe};

/// Greedy set-cover scheduler.
///
/// Borrows its inputs immutably: the universe and candidate pool are never
/// modified, so a shared candidate slice can be scheduled against
/// repeatedly (or from several threads) without coordination. Identical
/// inputs always produce identical output.
///
/// # Example
///
/// ```
/// use classcover::models::{Teacher, Universe};
/// use classcover::scheduler::GreedyScheduler;
///
/// let universe = Universe::from_labels(["Mathematics", "Physics"]);
/// let teachers = vec![
///     Teacher::new("t1").with_age(40).with_subjects(["Mathematics", "Physics"]),
/// ];
///
/// let outcome = GreedyScheduler::new().schedule(&universe, &teachers);
/// let schedule = outcome.schedule().unwrap();
/// assert_eq!(schedule.teacher_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyScheduler;

impl GreedyScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Assigns teachers to subjects until the universe is covered.
    ///
    /// Returns [`Coverage::Covered`] with one assignment per selected
    /// teacher in selection order, or [`Coverage::Uncoverable`] when the
    /// remaining candidates cannot cover any uncovered subject. There is
    /// no partial result on failure.
    ///
    /// An empty universe is trivially covered by an empty schedule.
    pub fn schedule(&self, universe: &Universe, candidates: &[Teacher]) -> Coverage {
        let mut uncovered: BTreeSet<String> = universe.as_set().clone();
        let mut remaining: Vec<usize> = (0..candidates.len()).collect();
        let mut schedule = Schedule::new();

        while !uncovered.is_empty() {
            let Some((pick, coverage)) = best_candidate(candidates, &remaining, &uncovered) else {
                return Coverage::Uncoverable;
            };

            for subject in &coverage {
                uncovered.remove(subject);
            }
            remaining.retain(|&i| i != pick);
            schedule.add_assignment(Assignment::new(&candidates[pick].id, coverage));
        }

        Coverage::Covered(schedule)
    }
}

/// Single-call convenience wrapper around [`GreedyScheduler::schedule`].
pub fn select_schedule(universe: &Universe, candidates: &[Teacher]) -> Coverage {
    GreedyScheduler::new().schedule(universe, candidates)
}

/// Finds the remaining candidate with maximal positive coverage.
///
/// Ties on coverage size go to the younger teacher; residual ties go to
/// the earlier position in the original candidate order (`remaining` is
/// kept sorted by construction). Returns `None` when no candidate covers
/// any uncovered subject.
fn best_candidate(
    candidates: &[Teacher],
    remaining: &[usize],
    uncovered: &BTreeSet<String>,
) -> Option<(usize, BTreeSet<String>)> {
    let mut best: Option<(usize, BTreeSet<String>)> = None;

    for &idx in remaining {
        let teacher = &candidates[idx];
        let coverage: BTreeSet<String> = teacher
            .can_teach
            .intersection(uncovered)
            .cloned()
            .collect();
        if coverage.is_empty() {
            continue;
        }

        let better = match &best {
            None => true,
            Some((best_idx, best_coverage)) => {
                coverage.len() > best_coverage.len()
                    || (coverage.len() == best_coverage.len()
                        && teacher.age < candidates[*best_idx].age)
            }
        };
        if better {
            best = Some((idx, coverage));
        }
    }

    best
}

//! Canonical demonstration dataset.
//!
//! A fixed five-subject universe and six-teacher pool used by the demo
//! binary and the end-to-end scenario tests.
//!
//! | # | Name | Age | Can Teach |
//! |---|------|-----|-----------|
//! | 1 | Oleksandr Ivanenko | 45 | Mathematics, Physics |
//! | 2 | Maria Petrenko | 38 | Chemistry |
//! | 3 | Serhiy Kovalenko | 50 | Computer Science, Mathematics |
//! | 4 | Natalia Shevchenko | 29 | Biology, Chemistry |
//! | 5 | Dmytro Bondarenko | 35 | Physics, Computer Science |
//! | 6 | Olena Hrytsenko | 42 | Biology, Computer Science |

use crate::models::{Teacher, Universe};

/// The five subjects to cover.
pub fn sample_universe() -> Universe {
    Universe::from_labels([
        "Mathematics",
        "Physics",
        "Chemistry",
        "Computer Science",
        "Biology",
    ])
}

/// The six canonical teachers.
pub fn sample_faculty() -> Vec<Teacher> {
    vec![
        Teacher::new("ivanenko")
            .with_name("Oleksandr", "Ivanenko")
            .with_age(45)
            .with_email("o.ivanenko@example.com")
            .with_subjects(["Mathematics", "Physics"]),
        Teacher::new("petrenko")
            .with_name("Maria", "Petrenko")
            .with_age(38)
            .with_email("m.petrenko@example.com")
            .with_subject("Chemistry"),
        Teacher::new("kovalenko")
            .with_name("Serhiy", "Kovalenko")
            .with_age(50)
            .with_email("s.kovalenko@example.com")
            .with_subjects(["Computer Science", "Mathematics"]),
        Teacher::new("shevchenko")
            .with_name("Natalia", "Shevchenko")
            .with_age(29)
            .with_email("n.shevchenko@example.com")
            .with_subjects(["Biology", "Chemistry"]),
        Teacher::new("bondarenko")
            .with_name("Dmytro", "Bondarenko")
            .with_age(35)
            .with_email("d.bondarenko@example.com")
            .with_subjects(["Physics", "Computer Science"]),
        Teacher::new("hrytsenko")
            .with_name("Olena", "Hrytsenko")
            .with_age(42)
            .with_email("o.hrytsenko@example.com")
            .with_subjects(["Biology", "Computer Science"]),
    ]
}

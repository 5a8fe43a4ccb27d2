//! Demonstration harness: schedule the canonical dataset and print the
//! result.

use classcover::dataset::{sample_faculty, sample_universe};
use classcover::report::{render_outcome, render_roster};
use classcover::scheduler::{select_schedule, CoverageAudit};
use classcover::validation::validate_input;

fn main() {
    let universe = sample_universe();
    let faculty = sample_faculty();

    let subjects: Vec<&str> = universe.iter().collect();
    println!("Subjects to cover: {}", subjects.join(", "));
    print!("{}", render_roster(&faculty));

    if let Err(errors) = validate_input(&universe, &faculty) {
        eprintln!("Invalid input:");
        for e in &errors {
            eprintln!("  - {}", e.message);
        }
        std::process::exit(1);
    }

    let outcome = select_schedule(&universe, &faculty);
    println!();
    println!("{}", render_outcome(&outcome, &faculty));

    if let Some(schedule) = outcome.schedule() {
        let audit = CoverageAudit::calculate(&universe, schedule);
        if audit.is_complete() {
            println!(
                "All {} subjects covered by {} teachers",
                universe.len(),
                schedule.teacher_count()
            );
        } else {
            // Engine invariants guarantee a clean audit; reaching this
            // branch means a scheduler bug.
            eprintln!("Coverage audit failed: missing {:?}", audit.missing);
            std::process::exit(1);
        }
    }
}

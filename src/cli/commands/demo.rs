//! Scripted walkthrough of the grade tracker
//!
//! Seeds a small course load, prints the report, and shows a what-if
//! projection. Useful for a first look at the tool without typing anything.

use gradebook::core::engine::GradeStore;
use gradebook::core::report;

/// Course seed data: (name, credits, grades)
const SEED: [(&str, u32, &[f64]); 3] = [
    ("Computer Science 101", 3, &[85.0, 92.0, 88.0, 78.0, 90.0, 95.0]),
    ("Calculus I", 4, &[95.0, 88.0, 91.0, 87.0, 93.0]),
    ("Studio Art", 1, &[]),
];

/// Run the walkthrough against a freshly initialized store
pub fn run(store: &mut dyn GradeStore) {
    println!("=== GRADEBOOK DEMO ===\n");

    for (name, credits, grades) in SEED {
        if let Err(e) = store.add_course(name, credits) {
            eprintln!("✗ {e}");
            return;
        }
        for &grade in grades {
            if let Err(e) = store.add_grade(name, grade) {
                eprintln!("✗ {e}");
                return;
            }
        }
        println!("Added '{name}' with {} grades", grades.len());
    }

    println!();
    print!("{}", report::render(store));

    // What-if: a strong final exam in CS101
    println!("\n=== WHAT-IF ===\n");
    match store.what_if_grade("Computer Science 101", 95.0) {
        Ok(projection) => {
            println!("Scoring 95 on the Computer Science 101 final would give:");
            println!(
                "  Course average: {:.2}% -> {:.2}% ({})",
                store.course_average("Computer Science 101"),
                projection.course_average,
                projection.letter
            );
            println!("  GPA: {:.2} -> {:.2}", store.gpa(), projection.gpa);
        }
        Err(e) => eprintln!("✗ {e}"),
    }
}

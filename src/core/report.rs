//! Plain-text grade report
//!
//! Rendered purely through the `GradeStore` boundary, so it works the same
//! against either backend. An ungraded course prints as 0.00% because the
//! boundary's zero sentinel cannot be told apart from a genuine zero
//! average.

use std::fmt::Write as _;

use crate::core::engine::GradeStore;
use crate::core::grading::{grade_points, letter_grade};

/// Render the full grade report as a string
#[must_use]
pub fn render(store: &dyn GradeStore) -> String {
    let names = store.course_names();

    let mut out = String::new();
    let _ = writeln!(out, "=== GRADE REPORT ===");
    let _ = writeln!(out);

    if names.is_empty() {
        let _ = writeln!(out, "No courses tracked yet.");
        return out;
    }

    for name in &names {
        let credits = store.course_credits(name);
        let average = store.course_average(name);
        let unit = if credits == 1 { "credit" } else { "credits" };
        let _ = writeln!(
            out,
            "{name}: {average:.2}% ({}, {:.1} points) - {credits} {unit}",
            letter_grade(average),
            grade_points(average),
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "GPA: {:.2}", store.gpa());
    out
}

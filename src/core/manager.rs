//! The in-memory course and grade collection
//!
//! `GradeManager` is the aggregate root: it owns every `Course` record and is
//! the only way to read or mutate them. It is deliberately single-threaded
//! and synchronous; callers that need cross-thread access must serialize
//! externally.

use crate::core::error::GradeError;
use crate::core::grading::{grade_points, letter_grade};
use crate::core::models::Course;

/// Result of projecting a hypothetical grade onto a course
#[derive(Debug, Clone, PartialEq)]
pub struct WhatIfProjection {
    /// Course average with the hypothetical grade appended
    pub course_average: f64,
    /// Letter grade for the projected average
    pub letter: &'static str,
    /// Grade points for the projected average
    pub grade_points: f64,
    /// Overall GPA with the projected average substituted in
    pub gpa: f64,
}

/// Owns the course collection and computes derived statistics
///
/// Courses are kept in insertion order; names are unique. Tolerant lookups
/// (`course_credits`, `course_average`) return sentinel zeros for unknown
/// courses instead of failing, matching the boundary contract.
#[derive(Debug, Clone, Default)]
pub struct GradeManager {
    courses: Vec<Course>,
}

impl GradeManager {
    /// Create an empty manager
    #[must_use]
    pub const fn new() -> Self {
        Self {
            courses: Vec::new(),
        }
    }

    fn find(&self, name: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.name == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Course> {
        self.courses.iter_mut().find(|c| c.name == name)
    }

    /// Add a new course with an empty grade list
    ///
    /// # Errors
    /// Returns a validation error for an empty name or out-of-range credits,
    /// and `GradeError::CourseExists` when the name is already tracked.
    /// Re-adding under an existing name is rejected rather than overwritten
    /// or merged, so no recorded grades can be lost silently. The collection
    /// is unchanged on any error.
    pub fn add_course(&mut self, name: &str, credits: u32) -> Result<(), GradeError> {
        let course = Course::new(name, credits)?;
        if self.find(&course.name).is_some() {
            return Err(GradeError::CourseExists(course.name));
        }
        self.courses.push(course);
        Ok(())
    }

    /// Append a grade to an existing course
    ///
    /// # Errors
    /// Returns `GradeError::CourseNotFound` for an unknown course and
    /// `GradeError::GradeOutOfRange` for a grade outside 0-100.
    pub fn add_grade(&mut self, course: &str, grade: f64) -> Result<(), GradeError> {
        self.find_mut(course)
            .ok_or_else(|| GradeError::CourseNotFound(course.to_string()))?
            .add_grade(grade)
    }

    /// Remove a course and all its grades; no-op when absent (idempotent)
    pub fn remove_course(&mut self, course: &str) {
        self.courses.retain(|c| c.name != course);
    }

    /// Reset the collection to empty; idempotent
    pub fn clear_all(&mut self) {
        self.courses.clear();
    }

    /// Course names in insertion order
    #[must_use]
    pub fn course_names(&self) -> Vec<String> {
        self.courses.iter().map(|c| c.name.clone()).collect()
    }

    /// Credits for a course, or 0 when the course is not tracked
    #[must_use]
    pub fn course_credits(&self, course: &str) -> u32 {
        self.find(course).map_or(0, |c| c.credits)
    }

    /// Arithmetic mean of a course's grades
    ///
    /// Returns 0.0 both for an unknown course and for a course without
    /// grades. The sentinel is ambiguous with a genuine zero average; this
    /// limitation is part of the boundary contract and kept as-is.
    #[must_use]
    pub fn course_average(&self, course: &str) -> f64 {
        self.find(course).map_or(0.0, Course::average)
    }

    /// Credit-weighted grade point average across all courses
    ///
    /// Each course's average maps to grade points, weighted by its credits.
    /// Returns 0.0 when no courses are tracked or total credits are zero.
    /// A course without grades contributes 0.0 grade points while its
    /// credits still count in the denominator, so ungraded courses pull the
    /// GPA down rather than excluding themselves.
    #[must_use]
    pub fn gpa(&self) -> f64 {
        self.weighted_gpa(None)
    }

    /// Project the effect of one additional grade without mutating anything
    ///
    /// # Errors
    /// Returns `GradeError::CourseNotFound` for an unknown course and
    /// `GradeError::GradeOutOfRange` for a grade outside 0-100.
    pub fn what_if_grade(&self, course: &str, grade: f64) -> Result<WhatIfProjection, GradeError> {
        let target = self
            .find(course)
            .ok_or_else(|| GradeError::CourseNotFound(course.to_string()))?;

        // Validate through a scratch copy so range rules stay in one place
        let mut projected = target.clone();
        projected.add_grade(grade)?;
        let course_average = projected.average();

        Ok(WhatIfProjection {
            course_average,
            letter: letter_grade(course_average),
            grade_points: grade_points(course_average),
            gpa: self.weighted_gpa(Some((course, course_average))),
        })
    }

    /// GPA with an optional (course, average) substitution for projections
    fn weighted_gpa(&self, substitute: Option<(&str, f64)>) -> f64 {
        if self.courses.is_empty() {
            return 0.0;
        }

        let mut total_points = 0.0;
        let mut total_credits: u32 = 0;

        for course in &self.courses {
            let average = match substitute {
                Some((name, avg)) if name == course.name => avg,
                _ => course.average(),
            };
            total_points += grade_points(average) * f64::from(course.credits);
            total_credits += course.credits;
        }

        if total_credits == 0 {
            return 0.0;
        }
        total_points / f64::from(total_credits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn starts_empty() {
        let manager = GradeManager::new();
        assert!(manager.course_names().is_empty());
        assert!(close(manager.gpa(), 0.0));
    }

    #[test]
    fn add_course_and_list_in_insertion_order() {
        let mut manager = GradeManager::new();
        manager.add_course("Zoology", 3).expect("add");
        manager.add_course("Algebra", 4).expect("add");
        manager.add_course("Music", 1).expect("add");

        // Insertion order, not alphabetical
        assert_eq!(manager.course_names(), vec!["Zoology", "Algebra", "Music"]);
    }

    #[test]
    fn rejects_duplicate_course_names() {
        let mut manager = GradeManager::new();
        manager.add_course("Math", 3).expect("add");
        manager.add_grade("Math", 88.0).expect("grade");

        let err = manager.add_course("Math", 4).unwrap_err();
        assert_eq!(err, GradeError::CourseExists("Math".to_string()));

        // Existing record untouched
        assert_eq!(manager.course_credits("Math"), 3);
        assert!(close(manager.course_average("Math"), 88.0));
    }

    #[test]
    fn invalid_add_course_leaves_collection_unchanged() {
        let mut manager = GradeManager::new();
        assert!(manager.add_course("", 3).is_err());
        assert!(manager.add_course("X", 7).is_err());
        assert!(manager.course_names().is_empty());
    }

    #[test]
    fn add_grade_to_missing_course_fails() {
        let mut manager = GradeManager::new();
        assert_eq!(
            manager.add_grade("Ghost", 90.0),
            Err(GradeError::CourseNotFound("Ghost".to_string()))
        );
    }

    #[test]
    fn average_is_mean_of_added_grades() {
        let mut manager = GradeManager::new();
        manager.add_course("Math", 3).expect("add");
        manager.add_grade("Math", 90.0).expect("grade");
        manager.add_grade("Math", 95.0).expect("grade");

        assert!(close(manager.course_average("Math"), 92.5));
    }

    #[test]
    fn tolerant_lookups_return_sentinels() {
        let manager = GradeManager::new();
        assert_eq!(manager.course_credits("Nope"), 0);
        assert!(close(manager.course_average("Nope"), 0.0));
    }

    #[test]
    fn gpa_weights_by_credits() {
        let mut manager = GradeManager::new();
        manager.add_course("Math", 3).expect("add");
        manager.add_grade("Math", 90.0).expect("grade");
        manager.add_grade("Math", 95.0).expect("grade");
        manager.add_course("Art", 1).expect("add");

        // Math: avg 92.5 -> A- -> 3.3; Art: no grades -> 0.0 but credits count
        assert!(close(manager.gpa(), (3.3 * 3.0) / 4.0));
    }

    #[test]
    fn single_perfect_course_gives_four_point_oh() {
        let mut manager = GradeManager::new();
        manager.add_course("Physics", 4).expect("add");
        manager.add_grade("Physics", 97.0).expect("grade");

        assert!(close(manager.gpa(), 4.0));
    }

    #[test]
    fn remove_course_is_idempotent() {
        let mut manager = GradeManager::new();
        manager.add_course("Math", 3).expect("add");
        manager.add_course("Art", 1).expect("add");

        manager.remove_course("Math");
        assert_eq!(manager.course_names(), vec!["Art"]);

        // Removing again, or removing something unknown, is a no-op
        manager.remove_course("Math");
        manager.remove_course("Never");
        assert_eq!(manager.course_names(), vec!["Art"]);
    }

    #[test]
    fn clear_all_resets_everything() {
        let mut manager = GradeManager::new();
        manager.add_course("Math", 3).expect("add");
        manager.add_grade("Math", 99.0).expect("grade");

        manager.clear_all();
        assert!(manager.course_names().is_empty());
        assert!(close(manager.gpa(), 0.0));

        manager.clear_all(); // idempotent
        assert!(manager.course_names().is_empty());
    }

    #[test]
    fn what_if_projects_without_mutating() {
        let mut manager = GradeManager::new();
        manager.add_course("CS101", 3).expect("add");
        manager.add_grade("CS101", 85.0).expect("grade");

        let projection = manager.what_if_grade("CS101", 95.0).expect("projection");
        assert!(close(projection.course_average, 90.0));
        assert_eq!(projection.letter, "A-");
        assert!(close(projection.grade_points, 3.3));
        assert!(close(projection.gpa, 3.3));

        // Store unchanged: average still 85, GPA still B tier
        assert!(close(manager.course_average("CS101"), 85.0));
        assert!(close(manager.gpa(), 2.7));
    }

    #[test]
    fn what_if_rejects_bad_inputs() {
        let mut manager = GradeManager::new();
        manager.add_course("CS101", 3).expect("add");

        assert_eq!(
            manager.what_if_grade("Ghost", 90.0),
            Err(GradeError::CourseNotFound("Ghost".to_string()))
        );
        assert_eq!(
            manager.what_if_grade("CS101", 120.0),
            Err(GradeError::GradeOutOfRange(120.0))
        );
    }
}

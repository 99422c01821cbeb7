//! Course model

use serde::{Deserialize, Serialize};

use crate::core::error::GradeError;

/// Minimum accepted credit weight for a course.
pub const MIN_CREDITS: u32 = 1;
/// Maximum accepted credit weight for a course.
pub const MAX_CREDITS: u32 = 6;
/// Minimum accepted grade percentage.
pub const MIN_GRADE: f64 = 0.0;
/// Maximum accepted grade percentage.
pub const MAX_GRADE: f64 = 100.0;

/// Represents a tracked course with its recorded grades
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course name (e.g., "Computer Science 101"); unique within a manager
    pub name: String,

    /// Credit weight used for GPA calculation (1-6)
    pub credits: u32,

    /// Recorded grade percentages in insertion order; may be empty
    pub grades: Vec<f64>,
}

impl Course {
    /// Create a new course with an empty grade list
    ///
    /// # Arguments
    /// * `name` - Course name; must not be empty or blank
    /// * `credits` - Credit weight; must be within 1-6
    ///
    /// # Errors
    /// Returns `GradeError::EmptyCourseName` or `GradeError::CreditsOutOfRange`
    /// when the inputs fall outside the accepted ranges.
    pub fn new(name: &str, credits: u32) -> Result<Self, GradeError> {
        if name.trim().is_empty() {
            return Err(GradeError::EmptyCourseName);
        }
        if !(MIN_CREDITS..=MAX_CREDITS).contains(&credits) {
            return Err(GradeError::CreditsOutOfRange(credits));
        }

        Ok(Self {
            name: name.to_string(),
            credits,
            grades: Vec::new(),
        })
    }

    /// Append a grade percentage, preserving insertion order
    ///
    /// # Errors
    /// Returns `GradeError::GradeOutOfRange` when the grade is not a finite
    /// value within 0-100. The grade list is left untouched on error.
    pub fn add_grade(&mut self, grade: f64) -> Result<(), GradeError> {
        if !grade.is_finite() || !(MIN_GRADE..=MAX_GRADE).contains(&grade) {
            return Err(GradeError::GradeOutOfRange(grade));
        }
        self.grades.push(grade);
        Ok(())
    }

    /// Arithmetic mean of the recorded grades
    ///
    /// Returns 0.0 when no grades have been recorded. Callers cannot
    /// distinguish that sentinel from a genuine zero average; this mirrors
    /// the documented behavior of the grade boundary and is intentional.
    #[must_use]
    pub fn average(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.grades.iter().sum();
        #[allow(clippy::cast_precision_loss)]
        let count = self.grades.len() as f64;
        sum / count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new("Discrete Structures", 4).expect("valid course");

        assert_eq!(course.name, "Discrete Structures");
        assert_eq!(course.credits, 4);
        assert!(course.grades.is_empty());
    }

    #[test]
    fn test_rejects_empty_name() {
        assert_eq!(Course::new("", 3), Err(GradeError::EmptyCourseName));
        assert_eq!(Course::new("   ", 3), Err(GradeError::EmptyCourseName));
    }

    #[test]
    fn test_rejects_credits_out_of_range() {
        assert_eq!(Course::new("X", 0), Err(GradeError::CreditsOutOfRange(0)));
        assert_eq!(Course::new("X", 7), Err(GradeError::CreditsOutOfRange(7)));
    }

    #[test]
    fn test_add_grade_preserves_order() {
        let mut course = Course::new("CS101", 3).expect("valid course");
        course.add_grade(90.0).expect("valid grade");
        course.add_grade(85.0).expect("valid grade");
        course.add_grade(95.0).expect("valid grade");

        assert_eq!(course.grades, vec![90.0, 85.0, 95.0]);
    }

    #[test]
    fn test_add_grade_rejects_out_of_range() {
        let mut course = Course::new("CS101", 3).expect("valid course");

        assert_eq!(
            course.add_grade(-0.5),
            Err(GradeError::GradeOutOfRange(-0.5))
        );
        assert_eq!(
            course.add_grade(100.5),
            Err(GradeError::GradeOutOfRange(100.5))
        );
        assert!(course.add_grade(f64::NAN).is_err());
        assert!(course.grades.is_empty());
    }

    #[test]
    fn test_grade_boundaries_accepted() {
        let mut course = Course::new("CS101", 3).expect("valid course");
        course.add_grade(0.0).expect("zero is a valid grade");
        course.add_grade(100.0).expect("hundred is a valid grade");

        assert_eq!(course.grades.len(), 2);
    }

    #[test]
    fn test_average() {
        let mut course = Course::new("Math", 3).expect("valid course");
        course.add_grade(90.0).expect("valid grade");
        course.add_grade(95.0).expect("valid grade");

        assert!((course.average() - 92.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_average_empty_is_zero_sentinel() {
        let course = Course::new("Art", 1).expect("valid course");
        assert!((course.average() - 0.0).abs() < f64::EPSILON);
    }
}

//! Incremental store backend
//!
//! Keeps per-course running sums and a cached credit total so every query is
//! O(courses) at worst and never re-walks grade lists. Observable behavior
//! must stay identical to `FallbackStore`.

use crate::core::engine::GradeStore;
use crate::core::error::GradeError;
use crate::core::grading::{grade_points, letter_grade};
use crate::core::manager::WhatIfProjection;
use crate::core::models::course::{MAX_CREDITS, MAX_GRADE, MIN_CREDITS, MIN_GRADE};

/// Running totals for one course; enough to answer every boundary query
#[derive(Debug, Clone)]
struct CourseTotals {
    name: String,
    credits: u32,
    grade_sum: f64,
    grade_count: usize,
}

impl CourseTotals {
    fn average(&self) -> f64 {
        if self.grade_count == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let count = self.grade_count as f64;
        self.grade_sum / count
    }
}

/// Store backend with cached aggregates, updated on every mutation
#[derive(Debug, Clone, Default)]
pub struct NativeStore {
    courses: Vec<CourseTotals>,
    total_credits: u32,
}

impl NativeStore {
    /// Create an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self {
            courses: Vec::new(),
            total_credits: 0,
        }
    }

    fn find(&self, name: &str) -> Option<&CourseTotals> {
        self.courses.iter().find(|c| c.name == name)
    }

    /// GPA with an optional (course, average) substitution
    fn weighted_gpa(&self, substitute: Option<(&str, f64)>) -> f64 {
        if self.courses.is_empty() || self.total_credits == 0 {
            return 0.0;
        }

        let mut total_points = 0.0;
        for course in &self.courses {
            let average = match substitute {
                Some((name, avg)) if name == course.name => avg,
                _ => course.average(),
            };
            total_points += grade_points(average) * f64::from(course.credits);
        }
        total_points / f64::from(self.total_credits)
    }
}

impl GradeStore for NativeStore {
    fn add_course(&mut self, name: &str, credits: u32) -> Result<(), GradeError> {
        if name.trim().is_empty() {
            return Err(GradeError::EmptyCourseName);
        }
        if !(MIN_CREDITS..=MAX_CREDITS).contains(&credits) {
            return Err(GradeError::CreditsOutOfRange(credits));
        }
        if self.find(name).is_some() {
            return Err(GradeError::CourseExists(name.to_string()));
        }

        self.courses.push(CourseTotals {
            name: name.to_string(),
            credits,
            grade_sum: 0.0,
            grade_count: 0,
        });
        self.total_credits += credits;
        Ok(())
    }

    // Course resolution happens before grade validation, matching the
    // fallback backend's accept/reject decisions exactly.
    fn add_grade(&mut self, course: &str, grade: f64) -> Result<(), GradeError> {
        let totals = self
            .courses
            .iter_mut()
            .find(|c| c.name == course)
            .ok_or_else(|| GradeError::CourseNotFound(course.to_string()))?;
        if !grade.is_finite() || !(MIN_GRADE..=MAX_GRADE).contains(&grade) {
            return Err(GradeError::GradeOutOfRange(grade));
        }

        totals.grade_sum += grade;
        totals.grade_count += 1;
        Ok(())
    }

    fn remove_course(&mut self, course: &str) {
        if let Some(index) = self.courses.iter().position(|c| c.name == course) {
            let removed = self.courses.remove(index);
            self.total_credits -= removed.credits;
        }
    }

    fn clear_all(&mut self) {
        self.courses.clear();
        self.total_credits = 0;
    }

    fn course_names(&self) -> Vec<String> {
        self.courses.iter().map(|c| c.name.clone()).collect()
    }

    fn course_credits(&self, course: &str) -> u32 {
        self.find(course).map_or(0, |c| c.credits)
    }

    fn course_average(&self, course: &str) -> f64 {
        self.find(course).map_or(0.0, CourseTotals::average)
    }

    fn gpa(&self) -> f64 {
        self.weighted_gpa(None)
    }

    fn what_if_grade(&self, course: &str, grade: f64) -> Result<WhatIfProjection, GradeError> {
        let totals = self
            .find(course)
            .ok_or_else(|| GradeError::CourseNotFound(course.to_string()))?;
        if !grade.is_finite() || !(MIN_GRADE..=MAX_GRADE).contains(&grade) {
            return Err(GradeError::GradeOutOfRange(grade));
        }

        #[allow(clippy::cast_precision_loss)]
        let projected_count = (totals.grade_count + 1) as f64;
        let course_average = (totals.grade_sum + grade) / projected_count;

        Ok(WhatIfProjection {
            course_average,
            letter: letter_grade(course_average),
            grade_points: grade_points(course_average),
            gpa: self.weighted_gpa(Some((course, course_average))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn totals_track_mutations() {
        let mut store = NativeStore::new();
        store.add_course("Math", 3).expect("add");
        store.add_course("Art", 1).expect("add");
        assert_eq!(store.total_credits, 4);

        store.remove_course("Art");
        assert_eq!(store.total_credits, 3);

        store.clear_all();
        assert_eq!(store.total_credits, 0);
    }

    #[test]
    fn averages_come_from_running_sums() {
        let mut store = NativeStore::new();
        store.add_course("Math", 3).expect("add");
        store.add_grade("Math", 90.0).expect("grade");
        store.add_grade("Math", 95.0).expect("grade");

        assert!(close(store.course_average("Math"), 92.5));
        assert!(close(store.gpa(), 3.3));
    }

    #[test]
    fn rejects_invalid_inputs_without_touching_totals() {
        let mut store = NativeStore::new();
        store.add_course("Math", 3).expect("add");

        assert!(store.add_course("Math", 4).is_err());
        assert!(store.add_course("", 3).is_err());
        assert!(store.add_grade("Math", 101.0).is_err());
        assert!(store.add_grade("Ghost", 50.0).is_err());

        assert_eq!(store.total_credits, 3);
        assert!(close(store.course_average("Math"), 0.0));
    }

    #[test]
    fn unknown_course_reported_before_bad_grade() {
        let mut store = NativeStore::new();
        store.add_course("Math", 3).expect("add");

        // When both the course and the grade are invalid, the missing
        // course wins, same as the fallback backend.
        assert_eq!(
            store.add_grade("Ghost", 150.0),
            Err(GradeError::CourseNotFound("Ghost".to_string()))
        );
        assert_eq!(
            store.what_if_grade("Ghost", 150.0),
            Err(GradeError::CourseNotFound("Ghost".to_string()))
        );
        assert_eq!(
            store.add_grade("Math", 150.0),
            Err(GradeError::GradeOutOfRange(150.0))
        );
    }

    #[test]
    fn what_if_uses_projected_totals() {
        let mut store = NativeStore::new();
        store.add_course("CS101", 3).expect("add");
        store.add_grade("CS101", 85.0).expect("grade");

        let projection = store.what_if_grade("CS101", 95.0).expect("projection");
        assert!(close(projection.course_average, 90.0));
        assert_eq!(projection.letter, "A-");
        assert!(close(projection.gpa, 3.3));
        assert!(close(store.course_average("CS101"), 85.0));
    }
}

//! Plain store backend
//!
//! A thin wrapper over `GradeManager` that recomputes every aggregate on
//! demand. Slower than `NativeStore` but with no cached state to drift;
//! useful as the reference implementation in equivalence tests.

use crate::core::engine::GradeStore;
use crate::core::error::GradeError;
use crate::core::manager::{GradeManager, WhatIfProjection};

/// Store backend that recomputes aggregates from the raw grade lists
#[derive(Debug, Clone, Default)]
pub struct FallbackStore {
    manager: GradeManager,
}

impl FallbackStore {
    /// Create an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self {
            manager: GradeManager::new(),
        }
    }
}

impl GradeStore for FallbackStore {
    fn add_course(&mut self, name: &str, credits: u32) -> Result<(), GradeError> {
        self.manager.add_course(name, credits)
    }

    fn add_grade(&mut self, course: &str, grade: f64) -> Result<(), GradeError> {
        self.manager.add_grade(course, grade)
    }

    fn remove_course(&mut self, course: &str) {
        self.manager.remove_course(course);
    }

    fn clear_all(&mut self) {
        self.manager.clear_all();
    }

    fn course_names(&self) -> Vec<String> {
        self.manager.course_names()
    }

    fn course_credits(&self, course: &str) -> u32 {
        self.manager.course_credits(course)
    }

    fn course_average(&self, course: &str) -> f64 {
        self.manager.course_average(course)
    }

    fn gpa(&self) -> f64 {
        self.manager.gpa()
    }

    fn what_if_grade(&self, course: &str, grade: f64) -> Result<WhatIfProjection, GradeError> {
        self.manager.what_if_grade(course, grade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delegates_to_the_manager() {
        let mut store = FallbackStore::new();
        store.add_course("Math", 3).expect("add");
        store.add_grade("Math", 97.0).expect("grade");

        assert_eq!(store.course_names(), vec!["Math"]);
        assert_eq!(store.course_credits("Math"), 3);
        assert!((store.gpa() - 4.0).abs() < 1e-9);

        store.remove_course("Math");
        assert!(store.course_names().is_empty());
    }
}

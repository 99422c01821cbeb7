//! Error types for the gradebook core

use std::time::Duration;
use thiserror::Error;

use crate::core::models::course::{MAX_CREDITS, MAX_GRADE, MIN_CREDITS, MIN_GRADE};

/// Errors produced by the gradebook core and the engine boundary.
///
/// Validation and not-found errors are recoverable at the call site and never
/// leave the store partially mutated. Readiness errors only occur during
/// engine initialization; once a store exists it is always available.
#[derive(Debug, Error, PartialEq)]
pub enum GradeError {
    /// A course name was empty or blank.
    #[error("course name must not be empty")]
    EmptyCourseName,

    /// Credits outside the accepted range.
    #[error("credits must be between {MIN_CREDITS} and {MAX_CREDITS}, got {0}")]
    CreditsOutOfRange(u32),

    /// A grade outside the accepted percentage range (or not a number).
    #[error("grade must be between {MIN_GRADE} and {MAX_GRADE}, got {0}")]
    GradeOutOfRange(f64),

    /// An `add_course` call named a course that is already tracked.
    #[error("course '{0}' already exists")]
    CourseExists(String),

    /// A mutating operation named a course that is not tracked.
    #[error("course '{0}' not found")]
    CourseNotFound(String),

    /// The engine did not become ready within the configured timeout.
    #[error("grade engine not ready within {0:?}")]
    NotReady(Duration),

    /// The engine self-check produced an unexpected result during startup.
    #[error("grade engine self-check failed: {0}")]
    SelfCheck(String),
}

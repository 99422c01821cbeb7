//! Engine boundary: the store trait and its interchangeable backends
//!
//! The display layer only ever talks to a `dyn GradeStore`. Which concrete
//! backend answers is decided once, at initialization, and never branched on
//! afterwards. Both backends must produce identical results for identical
//! operation sequences; `tests/engine_equivalence.rs` holds them to that.

pub mod fallback;
pub mod native;

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::core::error::GradeError;
use crate::core::manager::WhatIfProjection;

pub use fallback::FallbackStore;
pub use native::NativeStore;

/// Default readiness timeout applied when configuration does not set one.
pub const DEFAULT_READY_TIMEOUT: Duration = Duration::from_secs(10);

/// The capability set exposed to the display layer
///
/// Tolerant lookups (`course_credits`, `course_average`) degrade to sentinel
/// zeros for unknown courses; mutating operations fail explicitly. No
/// operation may leave the store partially mutated.
pub trait GradeStore {
    /// Insert a new course with an empty grade list
    ///
    /// # Errors
    /// Validation errors for empty names or credits outside 1-6, and
    /// `GradeError::CourseExists` for duplicate names.
    fn add_course(&mut self, name: &str, credits: u32) -> Result<(), GradeError>;

    /// Append a grade (0-100) to an existing course
    ///
    /// # Errors
    /// `GradeError::CourseNotFound` or `GradeError::GradeOutOfRange`.
    fn add_grade(&mut self, course: &str, grade: f64) -> Result<(), GradeError>;

    /// Delete a course and its grades; no-op when absent
    fn remove_course(&mut self, course: &str);

    /// Reset the store to empty
    fn clear_all(&mut self);

    /// Course names in insertion order
    fn course_names(&self) -> Vec<String>;

    /// Credits for a course, 0 when unknown
    fn course_credits(&self, course: &str) -> u32;

    /// Mean grade for a course, 0.0 when unknown or ungraded
    fn course_average(&self, course: &str) -> f64;

    /// Credit-weighted GPA across all courses
    fn gpa(&self) -> f64;

    /// Project one hypothetical grade without mutating the store
    ///
    /// # Errors
    /// `GradeError::CourseNotFound` or `GradeError::GradeOutOfRange`.
    fn what_if_grade(&self, course: &str, grade: f64) -> Result<WhatIfProjection, GradeError>;
}

/// Which backend answers the store operations
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum StoreKind {
    /// Incremental backend with cached running totals
    #[default]
    Native,
    /// Plain backend that recomputes aggregates on demand
    Fallback,
}

impl FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "native" => Ok(Self::Native),
            "fallback" | "mock" => Ok(Self::Fallback),
            other => Err(format!("unknown engine backend: '{other}'")),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// Initialize a grade store and verify it is ready for use
///
/// Runs a short self-check exercising the whole capability set under a
/// bounded deadline. A store value only exists after this returns `Ok`, so
/// "called before ready" is unrepresentable for callers.
///
/// # Errors
/// `GradeError::NotReady` when the deadline is exceeded and
/// `GradeError::SelfCheck` when the backend computes unexpected results.
pub fn initialize(kind: StoreKind, timeout: Duration) -> Result<Box<dyn GradeStore>, GradeError> {
    let started = Instant::now();

    let mut store: Box<dyn GradeStore> = match kind {
        StoreKind::Native => Box::new(NativeStore::new()),
        StoreKind::Fallback => Box::new(FallbackStore::new()),
    };

    self_check(store.as_mut())?;

    if started.elapsed() > timeout {
        return Err(GradeError::NotReady(timeout));
    }
    Ok(store)
}

/// Exercise the capability set and leave the store empty again
fn self_check(store: &mut dyn GradeStore) -> Result<(), GradeError> {
    let close = |a: f64, b: f64| (a - b).abs() < 1e-9;

    store.add_course("__probe__", 3)?;
    store.add_grade("__probe__", 90.0)?;
    store.add_grade("__probe__", 95.0)?;

    if !close(store.course_average("__probe__"), 92.5) {
        return Err(GradeError::SelfCheck(format!(
            "probe average was {}",
            store.course_average("__probe__")
        )));
    }
    if !close(store.gpa(), 3.3) {
        return Err(GradeError::SelfCheck(format!(
            "probe gpa was {}",
            store.gpa()
        )));
    }

    store.clear_all();
    if !store.course_names().is_empty() {
        return Err(GradeError::SelfCheck(
            "probe state survived clear_all".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_returns_an_empty_ready_store() {
        for kind in [StoreKind::Native, StoreKind::Fallback] {
            let store = initialize(kind, DEFAULT_READY_TIMEOUT).expect("ready");
            assert!(store.course_names().is_empty());
            assert!((store.gpa() - 0.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn zero_timeout_reports_not_ready() {
        let err = initialize(StoreKind::Native, Duration::ZERO).err();
        assert_eq!(err, Some(GradeError::NotReady(Duration::ZERO)));
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("Native".parse::<StoreKind>(), Ok(StoreKind::Native));
        assert_eq!("FALLBACK".parse::<StoreKind>(), Ok(StoreKind::Fallback));
        assert_eq!("mock".parse::<StoreKind>(), Ok(StoreKind::Fallback));
        assert!("remote".parse::<StoreKind>().is_err());
    }

    #[test]
    fn kind_round_trips_through_display() {
        for kind in [StoreKind::Native, StoreKind::Fallback] {
            assert_eq!(kind.to_string().parse::<StoreKind>(), Ok(kind));
        }
    }
}

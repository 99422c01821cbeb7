//! Domain models for the gradebook core

pub mod course;

pub use course::Course;

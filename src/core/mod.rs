//! Core module: domain model, grading rules, and the engine boundary

pub mod config;
pub mod engine;
pub mod error;
pub mod grading;
pub mod manager;
pub mod models;
pub mod report;

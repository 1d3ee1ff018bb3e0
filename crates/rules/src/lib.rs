//! Recurring-task and work/rest schedule projection engine.
//!
//! This crate provides:
//! - Data model for recurring task rules and cycle schedules, with serde
//!   support for the persisted JSON shapes
//! - A pure date projector mapping one calendar date to its annotations
//! - Write-time validation with structured errors and suggestions
//! - Rule and schedule stores persisted through a key-value backend

pub mod projector;
pub mod schema;
pub mod store;
pub mod validation;

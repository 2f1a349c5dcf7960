//! Reminder data access: source contract, SQLite source and repository seam.
//!
//! # Responsibility
//! - Define the asynchronous `ReminderDataSource` contract and its error type.
//! - Keep SQL details inside the core persistence boundary.
//! - Offer a repository that view-models consume without knowing the source.
//!
//! # Invariants
//! - Data-source calls never panic; failures come back as `DataSourceError`.
//! - Storage access runs off the calling task (blocking pool).

pub mod data_source;
pub mod reminders_repository;
pub mod sqlite_data_source;

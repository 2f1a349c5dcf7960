//! Reminder domain model.
//!
//! # Responsibility
//! - Define the persisted reminder record and its display projection.
//! - Own the single validation contract used before a reminder is saved.
//!
//! # Invariants
//! - Every reminder is identified by a stable, non-blank `ReminderId`.
//! - Reminders are never deleted one by one; only bulk clear exists.

pub mod reminder;

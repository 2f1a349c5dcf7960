//! Observable-state holders between the UI shell and reminder data.
//!
//! # Responsibility
//! - Turn data-source outcomes into observable state and one-shot UI events.
//! - Own the save-time validation gate.
//!
//! # Invariants
//! - View-models receive their data source at construction; no global registry.
//! - Loading flags are cleared on every exit path, including a dropped future.

pub mod base;
pub mod reminders_list;
pub mod save_reminder;

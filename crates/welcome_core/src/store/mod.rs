//! Installation-scoped state store.
//!
//! # Responsibility
//! - Define the whole-document get/replace contract used by services.
//! - Keep SQLite details behind the store boundary.
//!
//! # Invariants
//! - No partial writes: every `save` replaces the full document for its key.
//! - Missing documents load as the type's default value.

pub mod state_store;

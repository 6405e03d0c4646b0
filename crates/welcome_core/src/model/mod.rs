//! Domain model for the project manager start page.
//!
//! # Responsibility
//! - Define the persisted shapes of projects, categories and the forest.
//! - Keep the JSON wire shape identical to what the presentation layer reads.
//!
//! # Invariants
//! - Category ids are unique across the whole forest.
//! - Nesting depth is at most two (root categories and their subcategories).
//! - Project paths are unique within one category.

pub mod category;
pub mod project;

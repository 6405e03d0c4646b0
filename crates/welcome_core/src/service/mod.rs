//! Core use-case services.
//!
//! # Responsibility
//! - Turn pure forest mutations into persisted load-mutate-save operations.
//! - Keep router and bridge layers decoupled from storage details.

pub mod category_service;
pub mod forest_ops;
pub mod project_service;

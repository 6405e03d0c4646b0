//! Bridge crate exposing core use-cases to the start page UI.

pub mod api;

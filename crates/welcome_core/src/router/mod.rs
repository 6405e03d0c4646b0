//! Message routing between the start page and core services.
//!
//! # Responsibility
//! - Decode page requests into a closed set of typed variants.
//! - Run each request to completion and produce at most one push.
//!
//! # Invariants
//! - Requests that do not decode are ignored without a push.
//! - A full forest snapshot follows every mutating category request, except a
//!   rejected `createSubcategory` and a cancelled folder pick.

pub mod dispatch;
pub mod message;

//! Core types and trait definitions for the Docket client portal.
//!
//! Everything here is pure domain logic: record types, the role-visibility
//! rules, filter predicates, derived view projections, and the store trait.
//! No HTTP, no storage, no I/O — every other crate depends on this one.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod appointment;
pub mod case;
pub mod document;
pub mod error;
pub mod identity;
pub mod message;
pub mod query;
pub mod scope;
pub mod store;
pub mod taxonomy;
pub mod view;

pub use error::{Error, Result};

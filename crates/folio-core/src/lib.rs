//! Core types and trait definitions for folio, the resume builder.
//!
//! This crate is deliberately free of HTTP and database dependencies. It owns
//! the entity schema, the persistence trait, the per-screen draft state, the
//! wizard state machine, and the aggregator that joins a resume with its child
//! collections into a renderable [`document::Document`].

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod aggregate;
pub mod document;
pub mod draft;
pub mod error;
pub mod paths;
pub mod resume;
pub mod store;
pub mod template;
pub mod wizard;

pub use error::{Error, Result};

#[cfg(test)]
mod test_store;

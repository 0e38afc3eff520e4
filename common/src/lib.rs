//! Shared types and client-side state for the Recicla Ebenezer web client.
//!
//! Everything in here is plain Rust with no browser bindings, so the
//! frontend can use it from wasm while the logic stays unit-testable on the
//! host:
//! - [`model`] mirrors the records served by the REST backend.
//! - [`requests`] holds the request and response payloads of each endpoint.
//! - [`store`] keeps the cart, favorites, session and banner cache on top of
//!   a key/value backend and announces changes to subscribers.
//! - [`routes`] decides which pages a cached session may open.
//! - [`sheet`] tracks unsaved edits of the formula sheet.
//! - [`format`] renders currency, dates and phone numbers for display.
//! - [`error`] classifies failed API calls.

pub mod error;
pub mod format;
pub mod model;
pub mod requests;
pub mod routes;
pub mod sheet;
pub mod store;

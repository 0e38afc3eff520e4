//! Typed calls to the REST backend, grouped by resource.

pub mod auth;
pub mod client;
pub mod dashboard;
pub mod formulas;
pub mod messages;
pub mod orders;
pub mod products;
pub mod promos;
pub mod settings;
pub mod uploads;
pub mod users;

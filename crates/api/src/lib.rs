//! StayHub mock API server library.
//!
//! Exposes the building blocks (config, state, fixtures, error handling,
//! routes, router) so integration tests and the binary entrypoint can both
//! access them.

pub mod config;
pub mod error;
pub mod extract;
pub mod fixtures;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;

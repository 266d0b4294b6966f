//! Client side of the StayHub demo.
//!
//! - [`session`] -- the session store: who is logged in, and the auth
//!   operations that change it.
//! - [`storage`] -- durable key/value storage backing the session.
//! - [`favorites`] -- the logged-in user's favorite listings.
//! - [`reservation`] -- pre-flight checks and quote for a stay request.
//! - [`notify`] -- toast notifications emitted by every operation.
//! - [`api`] -- collaborator traits and the reqwest-backed HTTP client.

pub mod api;
pub mod config;
pub mod error;
pub mod favorites;
pub mod notify;
pub mod reservation;
pub mod session;
pub mod storage;

#[cfg(test)]
mod testing;

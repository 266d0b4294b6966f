//! Domain layer for the StayHub marketplace demo.
//!
//! Holds the static listing catalog, the filter engine (criteria, draft/active
//! panel, category mapping), stay quotes, favorites, and the JSON wire types
//! shared by the mock API server and the client session store. No I/O lives
//! here.

pub mod booking;
pub mod catalog;
pub mod category;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod panel;
pub mod property;
pub mod types;
pub mod user;
pub mod wire;

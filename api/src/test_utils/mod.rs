//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The in-memory repositories behave like the PostgreSQL adapters (ids are
//! allocated sequentially from 1, favourites are keyed by user and recipe)
//! so services and handlers can be tested without a database.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;

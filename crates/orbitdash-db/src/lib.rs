//! `SQLite` storage for orbitdash CMS pages.
//!
//! Implements the `PageRepository` port from `orbitdash-core` with sqlx.

#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// libsqlite3-sys is only listed to pull in the bundled SQLite build
use libsqlite3_sys as _;

// Re-export factory for convenient access
pub use factory::DbFactory;

// Re-export repository implementations
pub use repositories::SqlitePageRepository;

// Re-export setup functions for convenient access
pub use setup::{seed_default_pages, setup_database};
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;

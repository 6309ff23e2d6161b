//! Axum web adapter for orbitdash.
//!
//! Serves the dashboard pages (server-rendered with maud), the JSON feeds
//! under `/api` and the CMS pages. All data comes from
//! [`orbitdash_core::DashboardCore`]; this crate only maps requests and
//! errors.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod views;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::{HttpError, PageError};
pub use routes::create_router;
pub use state::AppState;

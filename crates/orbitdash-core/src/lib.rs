//! Core domain types, ports and services for the orbitdash space dashboard.
//!
//! This crate has no knowledge of HTTP frameworks, HTTP clients or SQL. The
//! adapter crates implement the [`ports`] and hand them to [`DashboardCore`].

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;
pub mod settings;
pub mod utils;

// Re-export commonly used types for convenience
pub use domain::{
    AstroEvent, AstroEvents, AstroEventsQuery, IssOverview, IssSnapshot, IssTrend, JwstFeed,
    JwstFeedQuery, JwstImage, JwstSource, NewPage, OsdrDataset, Page, is_valid_slug,
};
pub use paths::{PathError, data_root, database_path};
pub use ports::{
    AstroPort, CoreError, JwstPort, PageRepository, Ports, RepositoryError, TelemetryPort,
    UpstreamError,
};
pub use services::{DashboardCore, FeedCache, FeedService, IssService, PageService};
pub use settings::CacheSettings;

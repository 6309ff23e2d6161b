//! Application services built on top of the ports.

mod dashboard_core;
mod feed_cache;
mod feed_service;
mod iss_service;
mod page_service;

pub use dashboard_core::DashboardCore;
pub use feed_cache::FeedCache;
pub use feed_service::FeedService;
pub use iss_service::IssService;
pub use page_service::PageService;

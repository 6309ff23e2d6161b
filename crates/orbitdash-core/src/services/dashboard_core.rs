//! `DashboardCore` - the primary application facade.
//!
//! Adapters (web server, CLI) receive a `DashboardCore` and reach every
//! service through it.

use crate::ports::Ports;
use crate::settings::CacheSettings;

use super::{FeedService, IssService, PageService};

/// The core application facade.
///
/// Constructed at the adapter's composition root with concrete port
/// implementations.
///
/// # Example
///
/// ```ignore
/// let ports = Ports::new(telemetry, jwst, astro, pages);
/// let core = DashboardCore::new(ports, &CacheSettings::default());
///
/// let overview = core.iss().overview().await;
/// ```
pub struct DashboardCore {
    iss: IssService,
    feeds: FeedService,
    pages: PageService,
}

impl DashboardCore {
    pub fn new(ports: Ports, cache: &CacheSettings) -> Self {
        Self {
            iss: IssService::new(ports.telemetry.clone()),
            feeds: FeedService::new(ports.telemetry, ports.jwst, ports.astro, cache),
            pages: PageService::new(ports.pages),
        }
    }

    /// Access the ISS telemetry service.
    pub const fn iss(&self) -> &IssService {
        &self.iss
    }

    /// Access the cached feed service.
    pub const fn feeds(&self) -> &FeedService {
        &self.feeds
    }

    /// Access the CMS page service.
    pub const fn pages(&self) -> &PageService {
        &self.pages
    }
}

//! Cache settings for upstream feeds.
//!
//! Pure domain types with no infrastructure dependencies. Adapters fill them
//! from CLI flags or environment variables.

use std::time::Duration;

/// Default lifetime of a cached JWST feed page.
pub const DEFAULT_JWST_CACHE_SECS: u64 = 300;

/// Default lifetime of a cached astronomy events window.
pub const DEFAULT_ASTRO_CACHE_SECS: u64 = 1800;

/// Default lifetime of a cached OSDR listing.
pub const DEFAULT_OSDR_CACHE_SECS: u64 = 120;

/// How long normalized upstream feeds are reused. A zero duration disables
/// caching for that feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheSettings {
    pub jwst_ttl: Duration,
    pub astro_ttl: Duration,
    pub osdr_ttl: Duration,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            jwst_ttl: Duration::from_secs(DEFAULT_JWST_CACHE_SECS),
            astro_ttl: Duration::from_secs(DEFAULT_ASTRO_CACHE_SECS),
            osdr_ttl: Duration::from_secs(DEFAULT_OSDR_CACHE_SECS),
        }
    }
}

impl CacheSettings {
    /// Settings with every cache turned off.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            jwst_ttl: Duration::ZERO,
            astro_ttl: Duration::ZERO,
            osdr_ttl: Duration::ZERO,
        }
    }

    /// Build settings from optional second counts, keeping defaults for
    /// anything not given.
    #[must_use]
    pub fn from_secs(jwst: Option<u64>, astro: Option<u64>, osdr: Option<u64>) -> Self {
        let defaults = Self::default();
        Self {
            jwst_ttl: jwst.map_or(defaults.jwst_ttl, Duration::from_secs),
            astro_ttl: astro.map_or(defaults.astro_ttl, Duration::from_secs),
            osdr_ttl: osdr.map_or(defaults.osdr_ttl, Duration::from_secs),
        }
    }
}

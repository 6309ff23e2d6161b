//! Domain types.
//!
//! Pure data and normalization rules. No I/O lives here; adapters fetch
//! raw JSON and the parsers in these modules turn it into typed values.

pub mod astro;
pub mod iss;
pub mod jwst;
pub mod osdr;
pub mod page;

pub use astro::{ASTRO_BODIES, AstroEvent, AstroEvents, AstroEventsQuery};
pub use iss::{IssOverview, IssSnapshot, IssTrend};
pub use jwst::{JwstFeed, JwstFeedQuery, JwstImage, JwstSource};
pub use osdr::{OSDR_DEFAULT_LIMIT, OSDR_MAX_LIMIT, OsdrDataset, clamp_osdr_limit};
pub use page::{MAX_SLUG_LEN, NewPage, Page, is_valid_slug};

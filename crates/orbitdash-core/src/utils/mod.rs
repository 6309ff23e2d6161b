//! Small pure helpers shared by the domain parsers.

pub mod geo;
pub mod json;

pub use geo::{EARTH_RADIUS_KM, haversine_km};
pub use json::{pick_f64, pick_str, pick_time};

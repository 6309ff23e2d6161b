//! JWST image feed: query rules and normalization of raw API items.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::pick_str;

/// Default page size for the gallery.
pub const JWST_DEFAULT_PER_PAGE: u32 = 24;

/// Largest page the JWST API is asked for.
pub const JWST_MAX_PER_PAGE: u32 = 60;

const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png"];

/// Which JWST listing to read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JwstSource {
    /// All JPEG products.
    Jpg,
    /// Products with a given file suffix, e.g. `_cal`.
    Suffix(String),
    /// Products of one observing program, e.g. `2734`.
    Program(String),
}

impl JwstSource {
    /// Stable name reported back in the feed.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Jpg => "jpg",
            Self::Suffix(_) => "suffix",
            Self::Program(_) => "program",
        }
    }
}

/// Validated feed request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JwstFeedQuery {
    pub source: JwstSource,
    pub instrument: Option<String>,
    pub page: u32,
    pub per_page: u32,
}

impl Default for JwstFeedQuery {
    fn default() -> Self {
        Self {
            source: JwstSource::Jpg,
            instrument: None,
            page: 1,
            per_page: JWST_DEFAULT_PER_PAGE,
        }
    }
}

impl JwstFeedQuery {
    /// Build a query from loosely-typed request parameters.
    ///
    /// `source` is `jpg`, `suffix` or `program` (default `jpg`). A `suffix`
    /// or `program` source without its argument falls back to `jpg`. Page is
    /// at least 1 and the page size is clamped to `1..=JWST_MAX_PER_PAGE`.
    ///
    /// # Errors
    ///
    /// Returns an error message for an unknown source name.
    pub fn from_params(
        source: Option<&str>,
        suffix: Option<&str>,
        program: Option<&str>,
        instrument: Option<&str>,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<Self, String> {
        let non_empty = |s: Option<&str>| {
            s.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToString::to_string)
        };

        let source = match source.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            None | Some("" | "jpg") => JwstSource::Jpg,
            Some("suffix") => non_empty(suffix).map_or(JwstSource::Jpg, JwstSource::Suffix),
            Some("program") => non_empty(program).map_or(JwstSource::Jpg, JwstSource::Program),
            Some(other) => return Err(format!("unknown JWST source '{other}'")),
        };

        Ok(Self {
            source,
            instrument: non_empty(instrument).map(|s| s.to_ascii_uppercase()),
            page: page.unwrap_or(1).max(1),
            per_page: per_page
                .unwrap_or(JWST_DEFAULT_PER_PAGE)
                .clamp(1, JWST_MAX_PER_PAGE),
        })
    }

    /// Key used for caching this query's result.
    pub fn cache_key(&self) -> String {
        let arg = match &self.source {
            JwstSource::Jpg => "",
            JwstSource::Suffix(s) | JwstSource::Program(s) => s.as_str(),
        };
        format!(
            "{}:{}:{}:{}:{}",
            self.source.name(),
            arg,
            self.instrument.as_deref().unwrap_or("*"),
            self.page,
            self.per_page
        )
    }
}

/// One gallery entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwstImage {
    pub url: String,
    pub obs: Option<String>,
    pub program: Option<String>,
    pub suffix: Option<String>,
    #[serde(rename = "inst")]
    pub instruments: Vec<String>,
    pub caption: String,
    pub link: String,
}

impl JwstImage {
    /// Normalize one raw API item. Items without a usable image URL are
    /// skipped (`None`).
    pub fn from_raw(item: &Value) -> Option<Self> {
        let url = ["location", "url", "thumbnail"]
            .iter()
            .filter_map(|key| item.get(*key).and_then(Value::as_str))
            .find(|candidate| is_image_url(candidate))?
            .to_string();

        let details = item.get("details").unwrap_or(&Value::Null);
        let obs = pick_str(item, &["observation_id", "observationId", "id"]);
        let program = pick_str(item, &["program"]).or_else(|| pick_str(details, &["program"]));
        let suffix = pick_str(details, &["suffix"]).or_else(|| pick_str(item, &["suffix"]));
        let instruments: Vec<String> = details
            .get("instruments")
            .and_then(Value::as_array)
            .map(|list| {
                list.iter()
                    .filter_map(|entry| {
                        pick_str(entry, &["instrument"])
                            .or_else(|| entry.as_str().map(ToString::to_string))
                    })
                    .map(|name| name.to_ascii_uppercase())
                    .collect()
            })
            .unwrap_or_default();

        let mut parts: Vec<String> = Vec::new();
        if let Some(obs) = &obs {
            parts.push(obs.clone());
        }
        if let Some(program) = &program {
            parts.push(format!("P{program}"));
        }
        if let Some(suffix) = &suffix {
            parts.push(suffix.clone());
        }
        if !instruments.is_empty() {
            parts.push(instruments.join("/"));
        }
        let caption = if parts.is_empty() {
            "JWST".to_string()
        } else {
            parts.join(" · ")
        };

        let link = item
            .get("location")
            .and_then(Value::as_str)
            .unwrap_or(url.as_str())
            .to_string();

        Some(Self {
            url,
            obs,
            program,
            suffix,
            instruments,
            caption,
            link,
        })
    }

    /// Whether the image was taken with `instrument` (case-insensitive).
    pub fn has_instrument(&self, instrument: &str) -> bool {
        self.instruments
            .iter()
            .any(|name| name.eq_ignore_ascii_case(instrument))
    }
}

fn is_image_url(candidate: &str) -> bool {
    let path = candidate.split(['?', '#']).next().unwrap_or_default();
    let lower = path.to_ascii_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Feed returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwstFeed {
    pub source: String,
    pub count: usize,
    pub items: Vec<JwstImage>,
}

impl JwstFeed {
    /// Normalize raw items for `query`, applying the instrument filter and
    /// the page size.
    pub fn from_raw_items(query: &JwstFeedQuery, raw: &[Value]) -> Self {
        let items: Vec<JwstImage> = raw
            .iter()
            .filter_map(JwstImage::from_raw)
            .filter(|image| {
                query
                    .instrument
                    .as_deref()
                    .is_none_or(|wanted| image.has_instrument(wanted))
            })
            .take(query.per_page as usize)
            .collect();

        Self {
            source: query.source.name().to_string(),
            count: items.len(),
            items,
        }
    }
}

//! OSDR (Open Science Data Repository) datasets collected by the telemetry
//! service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::{pick_str, pick_time};

/// Number of datasets listed when the caller does not ask for a limit.
pub const OSDR_DEFAULT_LIMIT: u32 = 20;

/// Upper bound for a single listing.
pub const OSDR_MAX_LIMIT: u32 = 200;

/// Clamp a requested listing size into `1..=OSDR_MAX_LIMIT`.
pub fn clamp_osdr_limit(limit: Option<u32>) -> u32 {
    limit.unwrap_or(OSDR_DEFAULT_LIMIT).clamp(1, OSDR_MAX_LIMIT)
}

/// One dataset row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsdrDataset {
    pub id: Option<String>,
    pub dataset_id: Option<String>,
    pub title: Option<String>,
    pub status: Option<String>,
    pub rest_url: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub inserted_at: Option<DateTime<Utc>>,
}

impl OsdrDataset {
    /// Flatten an upstream `/osdr/list` body into dataset rows.
    ///
    /// Most items describe one dataset. Items whose `raw` field is an object
    /// keyed by dataset id (`{"OSD-123": {"REST_URL": ...}}`) expand into one
    /// row per key.
    pub fn list_from_value(value: &Value) -> Vec<Self> {
        let items = match value.get("items").or_else(|| value.get("data")) {
            Some(Value::Array(items)) => items.as_slice(),
            _ => match value {
                Value::Array(items) => items.as_slice(),
                _ => &[],
            },
        };

        items.iter().flat_map(Self::expand_item).collect()
    }

    fn expand_item(item: &Value) -> Vec<Self> {
        let base = Self {
            id: pick_str(item, &["id"]),
            dataset_id: pick_str(item, &["dataset_id", "accession"]),
            title: pick_str(item, &["title", "name"]),
            status: pick_str(item, &["status"]),
            rest_url: pick_str(item, &["rest_url", "REST_URL"]),
            updated_at: pick_time(item, &["updated_at"]),
            inserted_at: pick_time(item, &["inserted_at", "created_at"]),
        };

        let Some(Value::Object(raw)) = item.get("raw") else {
            return vec![base];
        };

        let keyed: Vec<Self> = raw
            .iter()
            .filter(|(key, entry)| key.starts_with("OSD-") && entry.is_object())
            .map(|(key, entry)| Self {
                dataset_id: Some(key.clone()),
                rest_url: pick_str(entry, &["REST_URL", "rest_url"]),
                title: pick_str(entry, &["title", "name"]).or_else(|| base.title.clone()),
                ..base.clone()
            })
            .collect();

        if keyed.is_empty() {
            let mut single = base;
            if single.title.is_none() {
                single.title = pick_str(&Value::Object(raw.clone()), &["title", "name"]);
            }
            vec![single]
        } else {
            keyed
        }
    }

    /// Best label for display: title, then dataset id, then row id.
    pub fn label(&self) -> &str {
        self.title
            .as_deref()
            .or(self.dataset_id.as_deref())
            .or(self.id.as_deref())
            .unwrap_or("untitled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn clamps_limit() {
        assert_eq!(clamp_osdr_limit(None), OSDR_DEFAULT_LIMIT);
        assert_eq!(clamp_osdr_limit(Some(0)), 1);
        assert_eq!(clamp_osdr_limit(Some(5000)), OSDR_MAX_LIMIT);
        assert_eq!(clamp_osdr_limit(Some(50)), 50);
    }

    #[test]
    fn plain_items_map_one_to_one() {
        let body = json!({"items": [
            {"id": 1, "dataset_id": "OSD-1", "title": "Mouse RNA", "status": "public",
             "updated_at": "2024-01-01T00:00:00Z", "inserted_at": "2024-01-02 10:00:00"},
            {"id": 2, "dataset_id": "OSD-2"}
        ]});

        let rows = OsdrDataset::list_from_value(&body);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id.as_deref(), Some("1"));
        assert_eq!(rows[0].label(), "Mouse RNA");
        assert!(rows[0].inserted_at.is_some());
        assert_eq!(rows[1].label(), "OSD-2");
    }

    #[test]
    fn keyed_raw_objects_are_flattened() {
        let body = json!({"items": [{
            "id": 9,
            "raw": {
                "OSD-100": {"REST_URL": "https://osdr.example/100"},
                "OSD-101": {"REST_URL": "https://osdr.example/101"},
                "ignored": 5
            }
        }]});

        let mut rows = OsdrDataset::list_from_value(&body);
        rows.sort_by(|a, b| a.dataset_id.cmp(&b.dataset_id));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].dataset_id.as_deref(), Some("OSD-100"));
        assert_eq!(rows[1].rest_url.as_deref(), Some("https://osdr.example/101"));
        assert!(rows.iter().all(|r| r.id.as_deref() == Some("9")));
    }

    #[test]
    fn raw_without_keys_keeps_single_row() {
        let body = json!({"items": [{"id": 3, "raw": {"title": "From raw"}}]});
        let rows = OsdrDataset::list_from_value(&body);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label(), "From raw");
    }

    #[test]
    fn unexpected_shape_is_empty() {
        assert!(OsdrDataset::list_from_value(&json!({"error": "upstream"})).is_empty());
        assert_eq!(OsdrDataset::list_from_value(&json!([{"id": 1}])).len(), 1);
    }
}

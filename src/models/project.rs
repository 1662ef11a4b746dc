// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio project records.
//!
//! This module defines the project record as it is persisted, plus the
//! one-way migration that upgrades records written before multiple videos
//! were supported. Decoding is lenient: hand-edited records with numeric
//! ids or years, or `null` fields, still load.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Text fields; a number or boolean here is kept as its text.
const TEXT_FIELDS: [&str; 7] = [
    "id",
    "title",
    "category",
    "year",
    "description",
    "coverImage",
    "castAndCrew",
];

/// Sequence-of-text fields.
const LIST_FIELDS: [&str; 2] = ["galleryImages", "videoUrls"];

/// A single theatre work shown in the gallery.
///
/// Image and video fields hold either an external URL or an embedded
/// `data:` URI. Field names are camelCase on disk.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub year: String,
    pub description: String,
    pub cover_image: String,
    pub gallery_images: Vec<String>,
    pub video_urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cast_and_crew: Option<String>,
}

impl Project {
    /// Decode one persisted element, applying the legacy migration first.
    /// Returns `None` when the element is not a project object.
    pub fn from_persisted(mut value: Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        migrate_legacy_video(&mut value);
        if let Some(object) = value.as_object_mut() {
            coerce_fields(object);
        }
        match serde_json::from_value(value) {
            Ok(project) => Some(project),
            Err(e) => {
                log::warn!("Unreadable project record: {}", e);
                None
            }
        }
    }

    /// Non-empty video references in playback order.
    pub fn videos(&self) -> impl Iterator<Item = &str> {
        self.video_urls
            .iter()
            .map(|url| url.trim())
            .filter(|url| !url.is_empty())
    }
}

/// Give a legacy record a `videoUrls` sequence.
///
/// Records without `videoUrls` (absent or null) get a one-element sequence
/// holding their singular `videoUrl`, or an empty one. Records that already
/// have `videoUrls` are left alone, so applying this twice equals applying it once.
pub fn migrate_legacy_video(record: &mut Value) {
    let Some(object) = record.as_object_mut() else {
        return;
    };
    if object.get("videoUrls").is_some_and(|v| !v.is_null()) {
        return;
    }

    let urls = match object.get("videoUrl") {
        Some(Value::String(url)) if !url.is_empty() => vec![Value::String(url.clone())],
        _ => Vec::new(),
    };
    object.insert("videoUrls".to_string(), Value::Array(urls));
}

/// Scalar as text, or `None` for null, arrays and objects.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Bring known fields to the shapes the record expects. Values that cannot
/// be read as text are dropped so the field falls back to its default.
fn coerce_fields(object: &mut Map<String, Value>) {
    for field in TEXT_FIELDS {
        let Some(value) = object.get(field) else {
            continue;
        };
        match scalar_text(value) {
            Some(text) => {
                object.insert(field.to_string(), Value::String(text));
            }
            None => {
                object.remove(field);
            }
        }
    }

    for field in LIST_FIELDS {
        let Some(value) = object.get(field) else {
            continue;
        };
        let items = match value {
            Value::Array(items) => items
                .iter()
                .filter_map(scalar_text)
                .map(Value::String)
                .collect(),
            // A lone string is treated as a one-element list
            other => scalar_text(other).map(Value::String).into_iter().collect(),
        };
        object.insert(field.to_string(), Value::Array(items));
    }
}

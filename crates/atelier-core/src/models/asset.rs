use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::category::Category;

/// Media kind enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Resource-kind segment used in store endpoints and delivery URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

/// One asset as returned by the external store.
///
/// The store's record shape varies by upload path and API version, so every
/// category signal is optional; only the identifier and the delivery URL are
/// guaranteed. Records are never mutated in place: they are created by a
/// successful upload and destroyed by an explicit delete.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssetRecord {
    /// Opaque identifier assigned by the store at upload time; the delete key.
    pub public_id: String,
    /// Publicly resolvable URL to the binary content.
    pub url: String,
    /// Slash-separated folder path, conventionally `portfolio/<category>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    /// Explicit category label attached via structured context at upload time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Creation timestamp; used only for sort ordering. Missing sorts oldest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<MediaKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// An asset record paired with its canonical resolved category.
///
/// This is the unit the listing endpoint serves; the gallery renders it
/// directly.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResolvedAsset {
    #[serde(flatten)]
    pub record: AssetRecord,
    pub category: Category,
}

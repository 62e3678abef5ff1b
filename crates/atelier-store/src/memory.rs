//! In-memory store backend for local development and tests.
//!
//! Mimics the hosted backend's contract, including its looseness: `search`
//! is a best-effort narrowing pass, so callers still get records whose
//! resolved category does not match the filter. The listing layer must not
//! trust it.

use atelier_core::constants::LIBRARY_NAMESPACE;
use atelier_core::{AssetRecord, Category, MediaKind};
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::traits::{AssetStore, DeleteStatus, SearchFilter, StoreError, StoreResult};
use async_trait::async_trait;
use bytes::Bytes;

pub struct MemoryStore {
    records: RwLock<Vec<AssetRecord>>,
    base_url: String,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            records: RwLock::new(Vec::new()),
            base_url: "https://assets.example".to_string(),
        }
    }

    /// Insert a prebuilt record, bypassing upload. Test seam.
    pub async fn insert(&self, record: AssetRecord) {
        self.records.write().await.push(record);
    }

    pub async fn seed(&self, records: Vec<AssetRecord>) {
        self.records.write().await.extend(records);
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    fn matches(record: &AssetRecord, needle: &str) -> bool {
        if let Some(folder) = &record.folder {
            if folder.contains(needle) {
                return true;
            }
        }
        if let Some(tags) = &record.tags {
            if tags.iter().any(|t| t.contains(needle)) {
                return true;
            }
        }
        if let Some(context) = &record.context_category {
            if context.contains(needle) {
                return true;
            }
        }
        false
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssetStore for MemoryStore {
    async fn search(&self, filter: &SearchFilter) -> StoreResult<Vec<AssetRecord>> {
        let records = self.records.read().await;
        let mut out: Vec<AssetRecord> = match &filter.category {
            // Substring narrowing, deliberately coarser than an exact match.
            Some(category) => records
                .iter()
                .filter(|r| Self::matches(r, category.as_str()))
                .cloned()
                .collect(),
            None => records.clone(),
        };
        out.truncate(filter.max_results);
        Ok(out)
    }

    async fn upload(
        &self,
        data: Bytes,
        filename: &str,
        content_type: &str,
        category: &Category,
    ) -> StoreResult<AssetRecord> {
        if data.is_empty() {
            return Err(StoreError::UploadFailed("empty file body".to_string()));
        }

        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_else(|| "bin".to_string());
        let kind = if content_type.starts_with("video/") {
            MediaKind::Video
        } else {
            MediaKind::Image
        };

        let now = Utc::now();
        let public_id = format!(
            "{}/{}/{}",
            LIBRARY_NAMESPACE,
            category,
            Uuid::new_v4().simple()
        );
        let url = format!(
            "{}/{}/upload/v{}/{}.{}",
            self.base_url,
            kind.as_str(),
            now.timestamp(),
            public_id,
            extension
        );

        let record = AssetRecord {
            public_id,
            url,
            folder: Some(format!("{}/{}", LIBRARY_NAMESPACE, category)),
            context_category: Some(category.to_string()),
            tags: Some(vec![LIBRARY_NAMESPACE.to_string(), category.to_string()]),
            created_at: Some(now),
            kind: Some(kind),
            format: Some(extension),
            width: None,
            height: None,
        };

        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn delete(&self, public_id: &str, _kind: MediaKind) -> StoreResult<DeleteStatus> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.public_id != public_id);
        if records.len() < before {
            Ok(DeleteStatus::Deleted)
        } else {
            Ok(DeleteStatus::NotFound)
        }
    }
}

//! Asset-store abstraction trait
//!
//! This module defines the AssetStore trait that all store backends must
//! implement.

use async_trait::async_trait;
use atelier_core::{AppError, AssetRecord, Category, MediaKind};
use bytes::Bytes;
use thiserror::Error;

/// Store operation errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Search failed: {0}")]
    SearchFailed(String),

    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Store rejected credentials: {0}")]
    Unauthorized(String),

    #[error("Malformed store response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ConfigError(msg) => AppError::Internal(msg),
            other => AppError::Store(other.to_string()),
        }
    }
}

/// Search narrowing passed to the store.
///
/// The category is a performance hint only; the store's native filter may be
/// imprecise and callers must re-filter on resolved categories.
#[derive(Debug, Clone)]
pub struct SearchFilter {
    pub category: Option<Category>,
    pub max_results: usize,
}

impl SearchFilter {
    pub fn all(max_results: usize) -> Self {
        SearchFilter {
            category: None,
            max_results,
        }
    }
}

/// Outcome of a delete call. `NotFound` means the asset was already gone,
/// which callers treat the same as a successful delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStatus {
    Deleted,
    NotFound,
}

/// Asset-store abstraction trait
///
/// All backends (hosted, in-memory) must implement this trait so the listing
/// and deletion services can work against any of them without coupling to
/// implementation details.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Query the store, optionally narrowed by category (best-effort).
    async fn search(&self, filter: &SearchFilter) -> StoreResult<Vec<AssetRecord>>;

    /// Upload binary content filed under the given category.
    ///
    /// Writes the category metadata at upload time: folder
    /// `portfolio/<category>`, tags `[portfolio, <category>]`, and the
    /// explicit context label. This is the only originating source of truth
    /// for an asset's category.
    async fn upload(
        &self,
        data: Bytes,
        filename: &str,
        content_type: &str,
        category: &Category,
    ) -> StoreResult<AssetRecord>;

    /// Delete by public id with a resource-kind hint.
    async fn delete(&self, public_id: &str, kind: MediaKind) -> StoreResult<DeleteStatus>;
}

//! Asset deletion against the store.
//!
//! Deletion is idempotent at the API level: a record already gone from the
//! store counts as deleted. Callers refresh their view by re-querying the
//! listing endpoint; nothing is cached or patched locally.

use std::sync::Arc;

use atelier_core::{media_kind_from_url, public_id_from_url, AppError, MediaKind};
use atelier_store::{AssetStore, DeleteStatus};
use serde::Serialize;
use utoipa::ToSchema;

/// How the store responded to the delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DeleteOutcomeStatus {
    /// The store removed the asset.
    Deleted,
    /// The store had no such asset; treated as success.
    AlreadyAbsent,
}

impl DeleteOutcomeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeleteOutcomeStatus::Deleted => "deleted",
            DeleteOutcomeStatus::AlreadyAbsent => "already_absent",
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeleteOutcome {
    pub public_id: String,
    pub status: DeleteOutcomeStatus,
}

#[derive(Clone)]
pub struct DeletionService {
    store: Arc<dyn AssetStore>,
}

impl DeletionService {
    pub fn new(store: Arc<dyn AssetStore>) -> Self {
        DeletionService { store }
    }

    /// Delete by store identifier, or by delivery URL when no identifier is
    /// given. Validation failures return before any store call.
    pub async fn delete(
        &self,
        public_id: Option<String>,
        url: Option<String>,
    ) -> Result<DeleteOutcome, AppError> {
        let (public_id, kind) = match (public_id, url.as_deref()) {
            (Some(id), url) => {
                let kind = url.map(media_kind_from_url).unwrap_or(MediaKind::Image);
                (id, kind)
            }
            (None, Some(url)) => {
                let id = public_id_from_url(url).ok_or_else(|| {
                    AppError::InvalidInput(format!(
                        "URL does not look like a delivery URL: {}",
                        url
                    ))
                })?;
                (id, media_kind_from_url(url))
            }
            (None, None) => {
                return Err(AppError::InvalidInput(
                    "Either public_id or url is required".to_string(),
                ));
            }
        };

        let status = match self.store.delete(&public_id, kind).await? {
            DeleteStatus::Deleted => DeleteOutcomeStatus::Deleted,
            DeleteStatus::NotFound => {
                tracing::info!(public_id = %public_id, "Asset already absent from store");
                DeleteOutcomeStatus::AlreadyAbsent
            }
        };

        Ok(DeleteOutcome { public_id, status })
    }
}

//! Gallery listing over the asset store.
//!
//! The store-side search expression is treated as a hint only. Every record
//! it returns is resolved through the category chain and re-filtered against
//! the requested category, so a stray tag or folder substring match on the
//! store side never leaks into another gallery section.

use std::sync::Arc;

use atelier_core::{resolve_category, AppError, Category, LabelPolicy, ResolvedAsset};
use atelier_store::{AssetStore, SearchFilter};

#[derive(Clone)]
pub struct ListingService {
    store: Arc<dyn AssetStore>,
    policy: LabelPolicy,
    max_results: usize,
}

impl ListingService {
    pub fn new(store: Arc<dyn AssetStore>, policy: LabelPolicy, max_results: usize) -> Self {
        ListingService {
            store,
            policy,
            max_results,
        }
    }

    /// List assets, optionally restricted to one category.
    ///
    /// Store failures propagate; an empty gallery response never masks an
    /// upstream error.
    pub async fn list(&self, requested: Option<&str>) -> Result<Vec<ResolvedAsset>, AppError> {
        let requested = requested.map(Category::new);

        // Narrow the store query only for known categories; unknown tokens
        // would match nothing server-side and still need the local filter.
        let narrow = requested
            .as_ref()
            .filter(|c| c.is_known() && !c.is_uncategorized())
            .cloned();

        let filter = SearchFilter {
            category: narrow,
            max_results: self.max_results,
        };
        let records = self.store.search(&filter).await?;
        let fetched = records.len();

        let mut assets: Vec<ResolvedAsset> = records
            .into_iter()
            .map(|record| {
                let category = resolve_category(&record, self.policy);
                ResolvedAsset { record, category }
            })
            .collect();

        if let Some(requested) = &requested {
            assets.retain(|a| &a.category == requested);
        }

        tracing::debug!(
            requested = ?requested.as_ref().map(|c| c.as_str()),
            fetched,
            returned = assets.len(),
            "Listed assets"
        );

        Ok(assets)
    }
}

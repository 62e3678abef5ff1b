//! Shared application state

use std::sync::Arc;

use atelier_core::Config;
use atelier_store::AssetStore;

use crate::services::{DeletionService, ListingService};

pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn AssetStore>,
    pub listing: ListingService,
    pub deletion: DeletionService,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn AssetStore>) -> Self {
        let listing = ListingService::new(
            store.clone(),
            config.label_policy(),
            config.search_max_results,
        );
        let deletion = DeletionService::new(store.clone());
        AppState {
            config,
            store,
            listing,
            deletion,
        }
    }
}

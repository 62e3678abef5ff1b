//! Atelier Core Library
//!
//! This crate provides the domain models, category resolution, delivery-URL
//! parsing, error types, and configuration shared across all Atelier
//! components.

pub mod category;
pub mod config;
pub mod constants;
pub mod delivery_url;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use category::{resolve_category, Category, LabelPolicy};
pub use config::{CloudinaryCredentials, Config, StoreBackend};
pub use delivery_url::{media_kind_from_url, public_id_from_url};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{AssetRecord, MediaKind, ResolvedAsset};

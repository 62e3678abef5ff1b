//! Atelier Store Library
//!
//! Asset-store abstraction and implementations. The `AssetStore` trait is the
//! boundary to the external media host: search is best-effort (store-side
//! filters may be imprecise; the listing layer re-filters), upload writes the
//! category metadata that resolution later reads back, and delete is
//! idempotent ("not found" is a success-like outcome).

pub mod cloudinary;
pub mod factory;
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use cloudinary::CloudinaryStore;
pub use factory::create_store;
pub use memory::MemoryStore;
pub use traits::{AssetStore, DeleteStatus, SearchFilter, StoreError, StoreResult};

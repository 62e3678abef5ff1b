pub mod admin_session;
pub mod asset_delete;
pub mod asset_upload;
pub mod assets_list;
pub mod health;

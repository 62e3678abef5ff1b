//! API constants

/// Versioned API path prefix.
pub const API_PREFIX: &str = "/api/v0";

/// Header carrying the admin password on gated routes.
pub const ADMIN_PASS_HEADER: &str = "x-admin-pass";

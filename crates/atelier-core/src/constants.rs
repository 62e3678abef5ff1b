//! Shared domain constants.
//!
//! The namespace token and the known-category enumeration are fixed contracts
//! shared by the upload path (which writes them) and the category resolver
//! (which reads them back). Changing either invalidates existing records.

/// First path segment under which every portfolio asset is filed, both in
/// folder paths (`portfolio/<category>`) and in namespace-prefixed public ids.
pub const LIBRARY_NAMESPACE: &str = "portfolio";

/// Closed set of gallery categories. The resolver treats anything else as a
/// free-form label (accepted or discarded depending on the label policy).
pub const KNOWN_CATEGORIES: &[&str] = &[
    "packaging",
    "thumbnails",
    "social",
    "infographics",
    "videos",
    "flyers",
    "mockups",
];

/// Sentinel category for records with no recognized signal.
pub const UNCATEGORIZED: &str = "uncategorized";

/// File extensions (lowercase, no dot) that mark a delivery URL as video.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "mkv", "ogg"];

/// Path marker in hosted delivery URLs; the public id follows it (after the
/// version segment).
pub const UPLOAD_URL_MARKER: &str = "/upload/";

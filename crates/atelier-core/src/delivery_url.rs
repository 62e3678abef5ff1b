//! Delivery-URL parsing.
//!
//! Hosted delivery URLs look like
//! `https://<host>/<cloud>/image/upload/v<digits>/<public_id>.<ext>`. When a
//! delete request arrives with only a URL, the public id is recovered from
//! everything after the version segment, minus the file extension. URLs
//! without the upload marker are rejected upstream; there is no best-guess
//! delete.

use crate::constants::{UPLOAD_URL_MARKER, VIDEO_EXTENSIONS};
use crate::models::MediaKind;

/// Derive the store public id from a delivery URL.
///
/// Returns `None` when the URL carries no upload marker or nothing follows
/// the version segment.
pub fn public_id_from_url(url: &str) -> Option<String> {
    let (_, mut rest) = url.split_once(UPLOAD_URL_MARKER)?;

    if let Some((segment, tail)) = rest.split_once('/') {
        if is_version_segment(segment) {
            rest = tail;
        }
    }

    // Drop query/fragment before stripping the extension.
    let rest = rest
        .split_once(['?', '#'])
        .map(|(path, _)| path)
        .unwrap_or(rest);

    let public_id = strip_extension(rest);
    if public_id.is_empty() {
        None
    } else {
        Some(public_id.to_string())
    }
}

/// Infer the store resource kind from a URL's file extension.
///
/// Defaults to image when no suffix matches the known video set.
pub fn media_kind_from_url(url: &str) -> MediaKind {
    let path = url
        .split_once(['?', '#'])
        .map(|(path, _)| path)
        .unwrap_or(url);

    match extension(path) {
        Some(ext) if VIDEO_EXTENSIONS.contains(&ext.to_lowercase().as_str()) => MediaKind::Video,
        _ => MediaKind::Image,
    }
}

fn is_version_segment(segment: &str) -> bool {
    segment.len() > 1
        && segment.starts_with('v')
        && segment[1..].bytes().all(|b| b.is_ascii_digit())
}

/// Strip a file extension, but only from the final path segment.
fn strip_extension(path: &str) -> &str {
    match (path.rfind('.'), path.rfind('/')) {
        (Some(dot), Some(slash)) if dot > slash => &path[..dot],
        (Some(dot), None) => &path[..dot],
        _ => path,
    }
}

fn extension(path: &str) -> Option<&str> {
    match (path.rfind('.'), path.rfind('/')) {
        (Some(dot), Some(slash)) if dot > slash => Some(&path[dot + 1..]),
        (Some(dot), None) => Some(&path[dot + 1..]),
        _ => None,
    }
}

//! Canonical category resolution.
//!
//! Every asset record, however sparsely tagged, resolves to exactly one
//! category. Resolution is a pure function of the record: same input, same
//! category, independent of call order or the rest of the batch. The listing
//! layer relies on that to re-filter store results defensively.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::constants::{KNOWN_CATEGORIES, LIBRARY_NAMESPACE, UNCATEGORIZED};
use crate::models::AssetRecord;

/// A normalized (trimmed, lowercased) category label.
///
/// Known labels come from [`KNOWN_CATEGORIES`]; anything else is either a
/// trusted upload-time label or the `uncategorized` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Normalize a raw label. Blank input collapses to the sentinel.
    pub fn new(label: &str) -> Self {
        let normalized = label.trim().to_lowercase();
        if normalized.is_empty() {
            Category::uncategorized()
        } else {
            Category(normalized)
        }
    }

    pub fn uncategorized() -> Self {
        Category(UNCATEGORIZED.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this label is a member of the fixed known enumeration.
    pub fn is_known(&self) -> bool {
        KNOWN_CATEGORIES.contains(&self.0.as_str())
    }

    pub fn is_uncategorized(&self) -> bool {
        self.0 == UNCATEGORIZED
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How to treat an explicit upload-time label during resolution.
///
/// The upload path historically did not validate the label against the known
/// enumeration ("we trust what comes from the admin select"), but a second
/// variant of this logic did. Both behaviors exist in recorded data, so both
/// are supported and the choice is configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelPolicy {
    /// Accept any normalized explicit label, known or not. Minimizes data
    /// loss; unknown labels can surface in listings.
    #[default]
    Trust,
    /// Only accept explicit labels from the known enumeration. An unknown
    /// label is discarded and resolution continues with the remaining
    /// signals.
    KnownOnly,
}

/// Recover the canonical category for one store record.
///
/// Priority order, first match wins:
/// 1. explicit context label (subject to `policy`)
/// 2. folder path under the `portfolio` namespace
/// 3. first tag that is a known category
/// 4. namespace-prefixed public id
/// 5. the `uncategorized` sentinel
///
/// Total and pure: never fails, no side effects.
pub fn resolve_category(record: &AssetRecord, policy: LabelPolicy) -> Category {
    if let Some(label) = record.context_category.as_deref() {
        let explicit = Category::new(label);
        if !explicit.is_uncategorized() {
            match policy {
                LabelPolicy::Trust => return explicit,
                LabelPolicy::KnownOnly if explicit.is_known() => return explicit,
                LabelPolicy::KnownOnly => {}
            }
        }
    }

    if let Some(category) = namespaced_segment(record.folder.as_deref()) {
        return category;
    }

    if let Some(tags) = &record.tags {
        for tag in tags {
            let candidate = Category::new(tag);
            if candidate.is_known() {
                return candidate;
            }
        }
    }

    // Public ids are often namespace-prefixed paths themselves.
    if let Some(category) = namespaced_segment(Some(&record.public_id)) {
        return category;
    }

    Category::uncategorized()
}

/// Second segment of a `portfolio/<category>[/...]` path, if the first
/// segment matches the namespace token.
fn namespaced_segment(path: Option<&str>) -> Option<Category> {
    let mut segments = path?.split('/');
    if !segments.next()?.trim().eq_ignore_ascii_case(LIBRARY_NAMESPACE) {
        return None;
    }
    let segment = segments.next()?.trim();
    if segment.is_empty() {
        return None;
    }
    Some(Category::new(segment))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> AssetRecord {
        AssetRecord {
            public_id: "abc123".to_string(),
            url: "https://store.example/image/upload/v1/abc123.jpg".to_string(),
            folder: None,
            context_category: None,
            tags: None,
            created_at: None,
            kind: None,
            format: None,
            width: None,
            height: None,
        }
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let mut r = record();
        r.context_category = Some("  Flyers ".to_string());
        r.folder = Some("portfolio/social".to_string());
        r.tags = Some(vec!["videos".to_string()]);
        let first = resolve_category(&r, LabelPolicy::Trust);
        let second = resolve_category(&r, LabelPolicy::Trust);
        assert_eq!(first, second);
        assert_eq!(first.as_str(), "flyers");
    }

    #[test]
    fn test_explicit_label_wins_over_folder() {
        let mut r = record();
        r.context_category = Some("Thumbnails".to_string());
        r.folder = Some("portfolio/social".to_string());
        assert_eq!(
            resolve_category(&r, LabelPolicy::Trust),
            Category::new("thumbnails")
        );
    }

    #[test]
    fn test_unknown_tag_falls_back_to_sentinel() {
        let mut r = record();
        r.tags = Some(vec!["misc".to_string()]);
        assert!(resolve_category(&r, LabelPolicy::Trust).is_uncategorized());
    }

    #[test]
    fn test_folder_extraction_requires_namespace() {
        let mut r = record();
        r.folder = Some("portfolio/flyers".to_string());
        assert_eq!(
            resolve_category(&r, LabelPolicy::Trust),
            Category::new("flyers")
        );

        r.folder = Some("other/flyers".to_string());
        assert!(resolve_category(&r, LabelPolicy::Trust).is_uncategorized());
    }

    #[test]
    fn test_first_known_tag_is_used() {
        let mut r = record();
        r.tags = Some(vec![
            "portfolio".to_string(),
            "Packaging".to_string(),
            "videos".to_string(),
        ]);
        assert_eq!(
            resolve_category(&r, LabelPolicy::Trust),
            Category::new("packaging")
        );
    }

    #[test]
    fn test_namespaced_public_id_is_last_signal() {
        let mut r = record();
        r.public_id = "portfolio/mockups/abc123".to_string();
        assert_eq!(
            resolve_category(&r, LabelPolicy::Trust),
            Category::new("mockups")
        );
    }

    #[test]
    fn test_trust_policy_accepts_unknown_explicit_label() {
        let mut r = record();
        r.context_category = Some("Logofolio".to_string());
        assert_eq!(
            resolve_category(&r, LabelPolicy::Trust),
            Category::new("logofolio")
        );
    }

    #[test]
    fn test_known_only_policy_discards_unknown_label_and_continues() {
        let mut r = record();
        r.context_category = Some("Logofolio".to_string());
        r.folder = Some("portfolio/flyers".to_string());
        assert_eq!(
            resolve_category(&r, LabelPolicy::KnownOnly),
            Category::new("flyers")
        );

        r.folder = None;
        assert!(resolve_category(&r, LabelPolicy::KnownOnly).is_uncategorized());
    }

    #[test]
    fn test_blank_explicit_label_is_ignored() {
        let mut r = record();
        r.context_category = Some("   ".to_string());
        r.folder = Some("portfolio/social".to_string());
        assert_eq!(
            resolve_category(&r, LabelPolicy::Trust),
            Category::new("social")
        );
    }

    #[test]
    fn test_blank_category_normalizes_to_sentinel() {
        assert!(Category::new("  ").is_uncategorized());
        assert_eq!(Category::new(" Videos ").as_str(), "videos");
    }
}

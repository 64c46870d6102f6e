//! Content registry.
//!
//! The registry is the single authored list every derived structure is
//! projected from. It is validated once on construction and immutable
//! afterwards; derivation functions borrow it and never mutate it.

use crate::entry::{Category, ContentEntry};
use crate::error::CatalogError;

/// Ordered, validated list of content entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registry {
    entries: Vec<ContentEntry>,
}

impl Registry {
    /// Create a registry from entries in authored order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::EmptyDisplayText` if an entry has no title.
    /// Returns `CatalogError::InvalidSegment` if the public URL segment (the
    /// slug, or the title when there is no slug) cannot be used as a single
    /// path component.
    pub fn new(entries: Vec<ContentEntry>) -> Result<Self, CatalogError> {
        for (index, entry) in entries.iter().enumerate() {
            if entry.display_text.trim().is_empty() {
                return Err(CatalogError::EmptyDisplayText { index });
            }
            validate_segment(entry, entry.segment())?;
        }
        Ok(Self { entries })
    }

    /// Compiled-in registry used when no entries are configured.
    #[must_use]
    pub fn builtin() -> Self {
        use Category::{Article, Note};

        Self {
            entries: vec![
                ContentEntry::new("pkg-mgr", Note)
                    .landing()
                    .with_slug("package-manager"),
                ContentEntry::new("Maven", Note).with_slug("maven"),
                ContentEntry::new("Gradle", Note).with_slug("gradle"),
                ContentEntry::new("npm", Note),
                ContentEntry::new("git-cheatsheet", Note).with_slug("git"),
                ContentEntry::new("Getting Started", Article)
                    .landing()
                    .with_slug("getting-started"),
                ContentEntry::new("Ownership in Rust", Article).with_slug("rust-ownership"),
                ContentEntry::new("docker-compose", Article),
            ],
        }
    }

    /// All entries in registry order.
    #[must_use]
    pub fn entries(&self) -> &[ContentEntry] {
        &self.entries
    }

    /// Entries of one category, in registry order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &ContentEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Reject segments that are empty, contain `/`, or are dot components.
fn validate_segment(entry: &ContentEntry, segment: &str) -> Result<(), CatalogError> {
    if segment.is_empty() || segment.contains('/') || segment == "." || segment == ".." {
        return Err(CatalogError::InvalidSegment {
            entry: entry.display_text.clone(),
            segment: segment.to_owned(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_preserves_order() {
        let registry = Registry::new(vec![
            ContentEntry::new("B", Category::Note),
            ContentEntry::new("A", Category::Note),
        ])
        .unwrap();

        let titles: Vec<_> = registry
            .entries()
            .iter()
            .map(|e| e.display_text.as_str())
            .collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn test_new_rejects_empty_display_text() {
        let err = Registry::new(vec![
            ContentEntry::new("Maven", Category::Note),
            ContentEntry::new("  ", Category::Note),
        ])
        .unwrap_err();

        assert_eq!(err, CatalogError::EmptyDisplayText { index: 1 });
    }

    #[test]
    fn test_new_rejects_slug_with_slash() {
        let err = Registry::new(vec![
            ContentEntry::new("Maven", Category::Note).with_slug("build/maven"),
        ])
        .unwrap_err();

        assert!(matches!(err, CatalogError::InvalidSegment { ref segment, .. } if segment == "build/maven"));
    }

    #[test]
    fn test_new_rejects_dot_segments() {
        for segment in [".", "..", ""] {
            let result =
                Registry::new(vec![ContentEntry::new("Maven", Category::Note).with_slug(segment)]);
            assert!(result.is_err(), "segment {segment:?} should be rejected");
        }
    }

    #[test]
    fn test_new_accepts_display_text_with_spaces() {
        let registry =
            Registry::new(vec![ContentEntry::new("Ownership in Rust", Category::Article)]);
        assert!(registry.is_ok());
    }

    #[test]
    fn test_new_accepts_slash_title_with_slug() {
        let registry = Registry::new(vec![
            ContentEntry::new("TCP/IP", Category::Note).with_slug("tcp-ip"),
        ])
        .unwrap();

        let entry = &registry.entries()[0];
        assert_eq!(entry.display_text, "TCP/IP");
        assert_eq!(entry.link(), "/note/tcp-ip");
    }

    #[test]
    fn test_new_rejects_slash_title_without_slug() {
        let err = Registry::new(vec![ContentEntry::new("TCP/IP", Category::Note)]).unwrap_err();

        assert!(matches!(err, CatalogError::InvalidSegment { ref segment, .. } if segment == "TCP/IP"));
    }

    #[test]
    fn test_in_category_filters_and_keeps_order() {
        let registry = Registry::new(vec![
            ContentEntry::new("a1", Category::Article),
            ContentEntry::new("n1", Category::Note),
            ContentEntry::new("a2", Category::Article),
        ])
        .unwrap();

        let articles: Vec<_> = registry
            .in_category(Category::Article)
            .map(|e| e.display_text.as_str())
            .collect();
        assert_eq!(articles, vec!["a1", "a2"]);
    }

    #[test]
    fn test_builtin_is_valid() {
        let builtin = Registry::builtin();
        let revalidated = Registry::new(builtin.entries().to_vec()).unwrap();

        assert_eq!(revalidated, builtin);
        assert!(!builtin.is_empty());
    }

    #[test]
    fn test_default_is_empty() {
        let registry = Registry::default();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }
}

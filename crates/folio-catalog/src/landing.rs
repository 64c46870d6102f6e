//! Landing-page resolution.

use crate::entry::{Category, ContentEntry};
use crate::registry::Registry;

/// First entry of `category` flagged as landing, in registry order.
///
/// Later flagged entries in the same category are ignored.
#[must_use]
pub fn landing_entry(registry: &Registry, category: Category) -> Option<&ContentEntry> {
    let mut flagged = registry.in_category(category).filter(|e| e.landing);
    let first = flagged.next()?;

    let ignored: Vec<&str> = flagged.map(|e| e.display_text.as_str()).collect();
    if !ignored.is_empty() {
        tracing::debug!(
            category = %category,
            landing = %first.display_text,
            ?ignored,
            "Multiple landing entries, first in registry order wins"
        );
    }

    Some(first)
}

/// Resolve the landing path of a category.
///
/// Uses the first flagged entry's canonical slug, then its display text.
/// Without a flagged entry the bare category root (e.g. `/note/`) is
/// returned, so navigation always points at a valid path.
#[must_use]
pub fn landing_path(registry: &Registry, category: Category) -> String {
    let segment = landing_entry(registry, category).map_or("", ContentEntry::segment);
    format!("{}{segment}", category.root_path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_path_uses_slug() {
        let registry = Registry::new(vec![
            ContentEntry::new("pkg-mgr", Category::Note)
                .landing()
                .with_slug("package-manager"),
            ContentEntry::new("Maven", Category::Note).with_slug("maven"),
        ])
        .unwrap();

        assert_eq!(
            landing_path(&registry, Category::Note),
            "/note/package-manager"
        );
    }

    #[test]
    fn test_landing_path_uses_display_text_without_slug() {
        let registry =
            Registry::new(vec![ContentEntry::new("intro", Category::Article).landing()]).unwrap();

        assert_eq!(landing_path(&registry, Category::Article), "/article/intro");
    }

    #[test]
    fn test_landing_path_without_flag_is_category_root() {
        let registry = Registry::new(vec![ContentEntry::new("Maven", Category::Note)]).unwrap();

        assert_eq!(landing_path(&registry, Category::Note), "/note/");
    }

    #[test]
    fn test_landing_path_empty_category_is_category_root() {
        let registry = Registry::new(vec![ContentEntry::new("Maven", Category::Note).landing()])
            .unwrap();

        assert_eq!(landing_path(&registry, Category::Article), "/article/");
    }

    #[test]
    fn test_first_flagged_entry_wins() {
        let registry = Registry::new(vec![
            ContentEntry::new("Maven", Category::Note),
            ContentEntry::new("first", Category::Note).landing(),
            ContentEntry::new("second", Category::Note)
                .landing()
                .with_slug("other"),
        ])
        .unwrap();

        assert_eq!(landing_path(&registry, Category::Note), "/note/first");
        assert_eq!(
            landing_entry(&registry, Category::Note).map(|e| e.display_text.as_str()),
            Some("first")
        );
    }

    #[test]
    fn test_landing_flag_in_other_category_is_ignored() {
        let registry = Registry::new(vec![
            ContentEntry::new("intro", Category::Article).landing(),
            ContentEntry::new("Maven", Category::Note),
        ])
        .unwrap();

        assert_eq!(landing_path(&registry, Category::Note), "/note/");
    }
}

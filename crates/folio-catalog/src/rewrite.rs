//! Rewrite-rule construction.
//!
//! Each entry with a canonical slug gets its own rule keyed by its source
//! path, so one rule only ever matches one entry:
//!
//! ```text
//! note/pkg-mgr.md  ->  note/package-manager.md
//! note/Maven.md    ->  note/maven.md
//! ```
//!
//! Two entries producing the same key is rejected instead of letting the
//! later rule replace the earlier one.

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::entry::ContentEntry;
use crate::error::CatalogError;
use crate::registry::Registry;

/// Default extension of content source files.
pub const DEFAULT_CONTENT_EXTENSION: &str = "md";

/// Rewrite rules mapping source paths to destination paths, in registry order.
pub type RewriteRules = IndexMap<String, String>;

/// Source path of an entry (e.g. `note/pkg-mgr.md`).
#[must_use]
pub fn source_key(entry: &ContentEntry, extension: &str) -> String {
    format!("{}/{}.{extension}", entry.category, entry.display_text)
}

/// Destination path of an entry with a canonical slug (e.g. `note/package-manager.md`).
#[must_use]
pub fn destination(entry: &ContentEntry, slug: &str, extension: &str) -> String {
    format!("{}/{slug}.{extension}", entry.category)
}

/// Build one rewrite rule per entry that declares a canonical slug.
///
/// # Errors
///
/// Returns `CatalogError::RewriteCollision` if two entries produce the same
/// source key.
pub fn rewrite_rules(registry: &Registry, extension: &str) -> Result<RewriteRules, CatalogError> {
    let mut rules = RewriteRules::new();
    // Display text of the entry owning each key, for collision reports
    let mut owners: IndexMap<String, &str> = IndexMap::new();

    for entry in registry.entries() {
        let Some(slug) = entry.canonical_slug.as_deref() else {
            continue;
        };

        let key = source_key(entry, extension);
        match owners.entry(key.clone()) {
            Entry::Occupied(existing) => {
                return Err(CatalogError::RewriteCollision {
                    key,
                    first: (*existing.get()).to_owned(),
                    second: entry.display_text.clone(),
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(&entry.display_text);
            }
        }

        rules.insert(key, destination(entry, slug, extension));
    }

    Ok(rules)
}

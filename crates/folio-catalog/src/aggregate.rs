//! Catalog aggregate consumed by the rendering engine.
//!
//! Serialized as:
//!
//! ```json
//! {
//!     "navigation": [{"label": "Home", "path": "/"}, ...],
//!     "sidebarGroups": {"/note/": [{"label": "Maven", "link": "/note/maven"}]},
//!     "rewriteRules": {"note/Maven.md": "note/maven.md"}
//! }
//! ```

use std::collections::HashMap;

use serde::Serialize;

use crate::entry::Category;
use crate::error::CatalogError;
use crate::navigation::{NavItem, NavigationOptions, navigation};
use crate::registry::Registry;
use crate::rewrite::{DEFAULT_CONTENT_EXTENSION, RewriteRules, rewrite_rules};
use crate::sidebar::{SidebarGroups, SidebarItem, sidebar_groups};

/// Options for deriving a [`CatalogAggregate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Extension of content source files, without the dot.
    pub content_extension: String,
    /// Navigation skeleton labels and links.
    pub navigation: NavigationOptions,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            content_extension: DEFAULT_CONTENT_EXTENSION.to_owned(),
            navigation: NavigationOptions::default(),
        }
    }
}

/// Navigation, sidebar and rewrite rules derived from one registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogAggregate {
    /// Top-level menu.
    pub navigation: Vec<NavItem>,
    /// Sidebar groups keyed by category root path.
    pub sidebar_groups: SidebarGroups,
    /// Source path to destination path aliases.
    pub rewrite_rules: RewriteRules,
}

impl CatalogAggregate {
    /// Derive all structures from a registry.
    ///
    /// Either every projection succeeds or none is returned.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::RewriteCollision` if two entries share a rewrite key.
    pub fn derive(registry: &Registry, options: &CatalogOptions) -> Result<Self, CatalogError> {
        let rewrite_rules = rewrite_rules(registry, &options.content_extension)?;
        let sidebar_groups = sidebar_groups(registry);
        warn_duplicate_links(&sidebar_groups);

        let aggregate = Self {
            navigation: navigation(registry, &options.navigation),
            sidebar_groups,
            rewrite_rules,
        };

        tracing::debug!(
            entries = registry.len(),
            rules = aggregate.rewrite_rules.len(),
            "Catalog derived"
        );

        Ok(aggregate)
    }

    /// Landing path of a category, as linked from the navigation menu.
    #[must_use]
    pub fn landing_path(&self, category: Category) -> Option<&str> {
        self.navigation
            .iter()
            .find(|item| item.category == Some(category))
            .map(|item| item.path.as_str())
    }

    /// Sidebar items of a category.
    #[must_use]
    pub fn sidebar(&self, category: Category) -> &[SidebarItem] {
        self.sidebar_groups
            .get(&category.root_path())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Log entries whose public links clash. Not an error: both pages render,
/// but only one is reachable from the sidebar link.
fn warn_duplicate_links(groups: &SidebarGroups) {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for item in groups.values().flatten() {
        if let Some(first) = seen.insert(&item.link, &item.label) {
            tracing::warn!(
                link = %item.link,
                first = %first,
                second = %item.label,
                "Two entries resolve to the same public link"
            );
        }
    }
}

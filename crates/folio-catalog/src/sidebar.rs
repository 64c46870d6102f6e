//! Sidebar grouping.

use indexmap::IndexMap;
use serde::Serialize;

use crate::entry::Category;
use crate::registry::Registry;

/// Sidebar link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarItem {
    /// Display label.
    pub label: String,
    /// Link target path (e.g. `/note/maven`).
    pub link: String,
}

/// Sidebar groups keyed by category root path (e.g. `/note/`).
pub type SidebarGroups = IndexMap<String, Vec<SidebarItem>>;

/// Group registry entries by category.
///
/// Every category has a key, even when it has no entries, so callers never
/// need to handle an absent group. Groups follow [`Category::ALL`] order and
/// items within a group follow registry order.
#[must_use]
pub fn sidebar_groups(registry: &Registry) -> SidebarGroups {
    let mut groups: SidebarGroups = Category::ALL
        .iter()
        .map(|c| (c.root_path(), Vec::new()))
        .collect();

    for entry in registry.entries() {
        // Keys for the closed set are all inserted above
        if let Some(items) = groups.get_mut(&entry.category.root_path()) {
            items.push(SidebarItem {
                label: entry.display_text.clone(),
                link: entry.link(),
            });
        }
    }

    groups
}

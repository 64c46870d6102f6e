//! Top-level navigation menu.

use std::collections::HashMap;

use serde::Serialize;

use crate::entry::Category;
use crate::landing::landing_path;
use crate::registry::Registry;

/// Top-level menu item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display label.
    pub label: String,
    /// Link target path.
    pub path: String,
    /// Category this item lands on. `None` for the home item.
    #[serde(skip)]
    pub category: Option<Category>,
}

/// Labels and static links of the navigation skeleton.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationOptions {
    /// Label of the home item.
    pub home_label: String,
    /// Path of the home item.
    pub home_path: String,
    /// Per-category label overrides. Missing categories use
    /// [`Category::default_label`].
    pub category_labels: HashMap<Category, String>,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            home_label: "Home".to_owned(),
            home_path: "/".to_owned(),
            category_labels: HashMap::new(),
        }
    }
}

impl NavigationOptions {
    /// Label for a category item.
    #[must_use]
    pub fn label(&self, category: Category) -> &str {
        self.category_labels
            .get(&category)
            .map_or_else(|| category.default_label(), String::as_str)
    }
}

/// Build the menu: home first, then one landing link per category.
#[must_use]
pub fn navigation(registry: &Registry, options: &NavigationOptions) -> Vec<NavItem> {
    let home = NavItem {
        label: options.home_label.clone(),
        path: options.home_path.clone(),
        category: None,
    };

    std::iter::once(home)
        .chain(Category::ALL.into_iter().map(|category| NavItem {
            label: options.label(category).to_owned(),
            path: landing_path(registry, category),
            category: Some(category),
        }))
        .collect()
}

//! Content entries and the closed set of categories.

use std::fmt;

use serde::Serialize;

use crate::error::CatalogError;

/// Content category.
///
/// The set is closed: every derived structure is partitioned by these
/// variants, and a name outside this set is a configuration error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Short reference notes.
    Note,
    /// Long-form articles.
    Article,
}

impl Category {
    /// All categories in navigation order.
    pub const ALL: [Self; 2] = [Self::Note, Self::Article];

    /// Name used in URLs and configuration files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Article => "article",
        }
    }

    /// Default navigation label.
    #[must_use]
    pub fn default_label(self) -> &'static str {
        match self {
            Self::Note => "Notes",
            Self::Article => "Articles",
        }
    }

    /// Root path of the category (e.g. `/note/`).
    ///
    /// Also the sidebar group key.
    #[must_use]
    pub fn root_path(self) -> String {
        format!("/{}/", self.as_str())
    }

    /// Look up a category by its configuration name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }

    /// Parse a category name for the given entry.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownCategory` if `name` is not in the closed set.
    pub fn parse(name: &str, entry: &str) -> Result<Self, CatalogError> {
        Self::from_name(name).ok_or_else(|| CatalogError::UnknownCategory {
            entry: entry.to_owned(),
            category: name.to_owned(),
            expected: Self::ALL
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single registry entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContentEntry {
    /// Human-readable title. Default URL segment and sidebar label.
    pub display_text: String,
    /// Category partitioning every derived structure.
    pub category: Category,
    /// Whether this entry is the landing page of its category.
    pub landing: bool,
    /// URL segment override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_slug: Option<String>,
}

impl ContentEntry {
    /// Create a plain entry with no landing flag and no slug.
    #[must_use]
    pub fn new(display_text: impl Into<String>, category: Category) -> Self {
        Self {
            display_text: display_text.into(),
            category,
            landing: false,
            canonical_slug: None,
        }
    }

    /// Mark the entry as its category's landing page.
    #[must_use]
    pub fn landing(mut self) -> Self {
        self.landing = true;
        self
    }

    /// Set the canonical slug.
    #[must_use]
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.canonical_slug = Some(slug.into());
        self
    }

    /// Public URL segment: the canonical slug if set, otherwise the display text.
    #[must_use]
    pub fn segment(&self) -> &str {
        self.canonical_slug.as_deref().unwrap_or(&self.display_text)
    }

    /// Public link (e.g. `/note/package-manager`).
    #[must_use]
    pub fn link(&self) -> String {
        format!("/{}/{}", self.category, self.segment())
    }
}

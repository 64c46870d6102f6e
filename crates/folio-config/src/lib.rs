//! Configuration management for Folio.
//!
//! Parses `folio.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! The content registry is part of the configuration: each `[[entries]]`
//! table becomes one [`ContentEntry`], in file order. When the `entries` key
//! is absent the compiled-in [`Registry::builtin`] is used; an explicit
//! `entries = []` gives an empty registry.
//!
//! CLI settings can be applied during load via [`CliSettings`].

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use folio_catalog::{
    CatalogError, CatalogOptions, Category, ContentEntry, DEFAULT_CONTENT_EXTENSION,
    NavigationOptions, Registry,
};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override content file extension.
    pub content_extension: Option<String>,
    /// Override home link path.
    pub home_path: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "folio.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,
    /// Navigation menu settings.
    pub navigation: NavigationConfig,
    /// Content registry entries in authored order. `None` when the key is absent.
    pub entries: Option<Vec<EntryConfig>>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Site-wide settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Extension of content source files, without the dot.
    pub content_extension: String,
    /// Label of the home navigation item.
    pub home_label: String,
    /// Path of the home navigation item.
    pub home_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_extension: DEFAULT_CONTENT_EXTENSION.to_owned(),
            home_label: "Home".to_owned(),
            home_path: "/".to_owned(),
        }
    }
}

/// Navigation menu settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Menu labels keyed by category name (e.g. `note = "Notebook"`).
    pub labels: BTreeMap<String, String>,
}

/// Registry entry as written in `folio.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntryConfig {
    /// Display text.
    pub text: String,
    /// Category name.
    pub category: String,
    /// Landing flag.
    #[serde(default)]
    pub landing: bool,
    /// Canonical slug.
    #[serde(default)]
    pub slug: Option<String>,
}

impl EntryConfig {
    /// Convert into a typed entry.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownCategory` if the category is not in the closed set.
    pub fn to_entry(&self) -> Result<ContentEntry, CatalogError> {
        Ok(ContentEntry {
            display_text: self.text.clone(),
            category: Category::parse(&self.category, &self.text)?,
            landing: self.landing,
            canonical_slug: self.slug.clone(),
        })
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Registry error.
    #[error("Registry error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `folio.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(extension) = &settings.content_extension {
            self.site.content_extension.clone_from(extension);
        }
        if let Some(home_path) = &settings.home_path {
            self.site.home_path.clone_from(home_path);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        Self::discover_from(&std::env::current_dir().ok()?)
    }

    /// Search for config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        tracing::debug!(
            path = %path.display(),
            entries = config.entries.as_ref().map(Vec::len),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Registry entries are checked separately by [`Config::registry`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_navigation()?;
        Ok(())
    }

    /// Validate site configuration.
    fn validate_site(&self) -> Result<(), ConfigError> {
        let extension = &self.site.content_extension;
        require_non_empty(extension, "site.content_extension")?;
        if extension.starts_with('.') || extension.contains('/') {
            return Err(ConfigError::Validation(format!(
                "site.content_extension must not contain a leading dot or '/': {extension}"
            )));
        }

        require_non_empty(&self.site.home_label, "site.home_label")?;
        if !self.site.home_path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "site.home_path must start with '/': {}",
                self.site.home_path
            )));
        }

        Ok(())
    }

    /// Validate navigation configuration.
    fn validate_navigation(&self) -> Result<(), ConfigError> {
        for (name, label) in &self.navigation.labels {
            if Category::from_name(name).is_none() {
                return Err(ConfigError::Validation(format!(
                    "navigation.labels: unknown category '{name}'"
                )));
            }
            require_non_empty(label, &format!("navigation.labels.{name}"))?;
        }
        Ok(())
    }

    /// Build the content registry.
    ///
    /// Uses [`Registry::builtin`] when the `entries` key is absent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Catalog` if an entry has an unknown category or
    /// an invalid title or slug.
    pub fn registry(&self) -> Result<Registry, ConfigError> {
        let Some(configured) = &self.entries else {
            return Ok(Registry::builtin());
        };

        let entries = configured
            .iter()
            .map(EntryConfig::to_entry)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Registry::new(entries)?)
    }

    /// Derivation options from site and navigation settings.
    #[must_use]
    pub fn catalog_options(&self) -> CatalogOptions {
        let category_labels: HashMap<Category, String> = self
            .navigation
            .labels
            .iter()
            .filter_map(|(name, label)| Some((Category::from_name(name)?, label.clone())))
            .collect();

        CatalogOptions {
            content_extension: self.site.content_extension.clone(),
            navigation: NavigationOptions {
                home_label: self.site.home_label.clone(),
                home_path: self.site.home_path.clone(),
                category_labels,
            },
        }
    }
}

//! `folio check` command implementation.

use std::path::PathBuf;

use clap::Args;
use folio_catalog::{CatalogAggregate, Category, Registry, landing_entry};

use crate::error::CliError;
use crate::output::{Output, Tone};

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or registry is invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let loaded = super::load(self.config.as_deref(), None)?;

        match &loaded.config.config_path {
            Some(path) => output.status(Tone::Plain, &format!("Config: {}", path.display())),
            None => output.status(Tone::Plain, "Config: none found, using built-in registry"),
        }
        output.status(
            Tone::Heading,
            &format!("Registry: {} entries", loaded.registry.len()),
        );

        for line in category_summary(&loaded.registry, &loaded.aggregate) {
            output.status(line.tone(), line.message());
        }

        output.status(
            Tone::Plain,
            &format!("Rewrite rules: {}", loaded.aggregate.rewrite_rules.len()),
        );
        output.status(Tone::Good, "Catalog is valid");
        Ok(())
    }
}

/// One line of the per-category summary.
#[derive(Debug, PartialEq, Eq)]
enum SummaryLine {
    Ok(String),
    Warning(String),
}

impl SummaryLine {
    fn tone(&self) -> Tone {
        match self {
            Self::Ok(_) => Tone::Plain,
            Self::Warning(_) => Tone::Caution,
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::Ok(msg) | Self::Warning(msg) => msg,
        }
    }
}

/// Describe each category's size and landing page.
///
/// Categories without a flagged landing entry are reported as warnings since
/// the menu falls back to the bare category root.
fn category_summary(registry: &Registry, aggregate: &CatalogAggregate) -> Vec<SummaryLine> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let count = aggregate.sidebar(category).len();
            let landing = aggregate.landing_path(category).unwrap_or_default();
            if landing_entry(registry, category).is_some() {
                SummaryLine::Ok(format!("  {category}: {count} entries, landing {landing}"))
            } else {
                SummaryLine::Warning(format!(
                    "  {category}: {count} entries, no landing entry (menu links to {landing})"
                ))
            }
        })
        .collect()
}

//! `folio landing` command implementation.

use std::path::PathBuf;

use clap::Args;
use folio_catalog::Category;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the landing command.
#[derive(Args)]
pub(crate) struct LandingArgs {
    /// Category name (e.g. `note`).
    category: String,

    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl LandingArgs {
    /// Execute the landing command.
    ///
    /// # Errors
    ///
    /// Returns an error if the category is unknown or the configuration is invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let category = parse_category(&self.category)?;
        let loaded = super::load(self.config.as_deref(), None)?;
        let path = loaded
            .aggregate
            .landing_path(category)
            .unwrap_or_default();

        Output::new().data(&format!("{path}\n"))?;
        Ok(())
    }
}

/// Parse a category name given on the command line.
fn parse_category(name: &str) -> Result<Category, CliError> {
    Category::from_name(name).ok_or_else(|| {
        let known: Vec<_> = Category::ALL.iter().map(|c| c.as_str()).collect();
        CliError::Validation(format!(
            "Unknown category '{name}' (expected one of: {})",
            known.join(", ")
        ))
    })
}

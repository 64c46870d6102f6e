//! `folio derive` command implementation.

use std::path::PathBuf;

use clap::Args;
use folio_catalog::CatalogAggregate;
use folio_config::CliSettings;

use crate::error::CliError;
use crate::output::{Output, Tone};

/// Arguments for the derive command.
#[derive(Args)]
pub(crate) struct DeriveArgs {
    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the catalog to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,

    /// Content file extension used in rewrite rules (overrides config).
    #[arg(long)]
    content_extension: Option<String>,

    /// Home link path (overrides config).
    #[arg(long)]
    home_path: Option<String>,
}

impl DeriveArgs {
    /// Execute the derive command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or derivation fails, or the output
    /// cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            content_extension: self.content_extension,
            home_path: self.home_path,
        };
        let loaded = super::load(self.config.as_deref(), Some(&cli_settings))?;
        let json = render_json(&loaded.aggregate, self.compact)?;

        match self.output {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&path, json)?;
                output.status(
                    Tone::Good,
                    &format!(
                        "Catalog with {} entries written to {}",
                        loaded.registry.len(),
                        path.display()
                    ),
                );
            }
            None => output.data(&json)?,
        }

        Ok(())
    }
}

/// Serialize the aggregate, newline-terminated.
fn render_json(aggregate: &CatalogAggregate, compact: bool) -> Result<String, CliError> {
    let mut json = if compact {
        serde_json::to_string(aggregate)?
    } else {
        serde_json::to_string_pretty(aggregate)?
    };
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use folio_catalog::{CatalogOptions, Registry};

    use super::*;

    fn aggregate() -> CatalogAggregate {
        CatalogAggregate::derive(&Registry::builtin(), &CatalogOptions::default()).unwrap()
    }

    #[test]
    fn test_render_json_compact_is_single_line() {
        let json = render_json(&aggregate(), true).unwrap();

        assert_eq!(json.lines().count(), 1);
        assert!(json.ends_with('\n'));
    }

    #[test]
    fn test_render_json_pretty_has_top_level_fields() {
        let json = render_json(&aggregate(), false).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["navigation"].is_array());
        assert!(value["sidebarGroups"]["/note/"].is_array());
        assert_eq!(
            value["rewriteRules"]["note/pkg-mgr.md"],
            "note/package-manager.md"
        );
    }
}

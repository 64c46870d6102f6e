//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod derive;
pub(crate) mod landing;

pub(crate) use check::CheckArgs;
pub(crate) use derive::DeriveArgs;
pub(crate) use landing::LandingArgs;

use std::path::Path;

use folio_catalog::{CatalogAggregate, Registry};
use folio_config::{CliSettings, Config};

use crate::error::CliError;

/// Configuration, registry and aggregate loaded for one command run.
pub(crate) struct Loaded {
    pub config: Config,
    pub registry: Registry,
    pub aggregate: CatalogAggregate,
}

/// Load configuration and derive the catalog.
///
/// Every startup configuration error surfaces here, before anything is written.
pub(crate) fn load(
    config_path: Option<&Path>,
    cli_settings: Option<&CliSettings>,
) -> Result<Loaded, CliError> {
    let config = Config::load(config_path, cli_settings)?;
    let registry = config.registry()?;
    let aggregate = CatalogAggregate::derive(&registry, &config.catalog_options())?;

    tracing::info!(
        config = ?config.config_path,
        entries = registry.len(),
        "Catalog loaded"
    );

    Ok(Loaded {
        config,
        registry,
        aggregate,
    })
}

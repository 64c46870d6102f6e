//! Reloadable catalog.
//!
//! [`Catalog`] owns the current [`CatalogAggregate`] snapshot. Readers clone
//! an `Arc` and keep using it without holding any lock, so a reload never
//! exposes a half-updated mix of navigation, sidebar and rewrite rules.
//!
//! # Thread Safety
//!
//! - `current()` takes the read lock only for the `Arc` clone
//! - `reload()` derives the new aggregate before taking the write lock
//! - a failed reload leaves the previous snapshot in place

use std::sync::{Arc, RwLock};

use crate::aggregate::{CatalogAggregate, CatalogOptions};
use crate::error::CatalogError;
use crate::registry::Registry;

/// Current catalog snapshot with atomic replacement.
pub struct Catalog {
    options: CatalogOptions,
    current: RwLock<Arc<CatalogAggregate>>,
}

impl Catalog {
    /// Derive the initial snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be derived.
    pub fn new(registry: &Registry, options: CatalogOptions) -> Result<Self, CatalogError> {
        let aggregate = CatalogAggregate::derive(registry, &options)?;
        Ok(Self {
            options,
            current: RwLock::new(Arc::new(aggregate)),
        })
    }

    /// Get the current snapshot.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn current(&self) -> Arc<CatalogAggregate> {
        Arc::clone(&*self.current.read().unwrap())
    }

    /// Replace the snapshot with one derived from a new registry.
    ///
    /// Readers holding the previous snapshot keep it until they drop it.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be derived. The previous
    /// snapshot stays current.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    pub fn reload(&self, registry: &Registry) -> Result<(), CatalogError> {
        let aggregate = match CatalogAggregate::derive(registry, &self.options) {
            Ok(aggregate) => Arc::new(aggregate),
            Err(e) => {
                tracing::warn!(error = %e, "Catalog reload failed, keeping previous snapshot");
                return Err(e);
            }
        };

        *self.current.write().unwrap() = aggregate;
        tracing::info!(entries = registry.len(), "Catalog reloaded");
        Ok(())
    }

    /// Options used for every derivation.
    #[must_use]
    pub fn options(&self) -> &CatalogOptions {
        &self.options
    }
}

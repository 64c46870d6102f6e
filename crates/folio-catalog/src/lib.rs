//! Navigation, sidebar and rewrite derivation for Folio.
//!
//! This crate provides:
//! - [`Registry`]: the authored, ordered list of [`ContentEntry`] values
//! - Pure projections of a registry: [`sidebar_groups`], [`landing_path`],
//!   [`rewrite_rules`] and [`navigation`]
//! - [`CatalogAggregate`]: all projections in the shape the rendering engine consumes
//! - [`Catalog`]: the current aggregate with atomic reload
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), folio_catalog::CatalogError> {
//! use folio_catalog::{CatalogAggregate, CatalogOptions, Category, ContentEntry, Registry};
//!
//! let registry = Registry::new(vec![
//!     ContentEntry::new("pkg-mgr", Category::Note)
//!         .landing()
//!         .with_slug("package-manager"),
//!     ContentEntry::new("Maven", Category::Note).with_slug("maven"),
//! ])?;
//!
//! let aggregate = CatalogAggregate::derive(&registry, &CatalogOptions::default())?;
//!
//! assert_eq!(aggregate.landing_path(Category::Note), Some("/note/package-manager"));
//! assert_eq!(aggregate.rewrite_rules["note/Maven.md"], "note/maven.md");
//! # Ok(())
//! # }
//! ```

mod aggregate;
mod catalog;
mod entry;
mod error;
mod landing;
mod navigation;
mod registry;
mod rewrite;
mod sidebar;

#[cfg(test)]
mod laws;

pub use aggregate::{CatalogAggregate, CatalogOptions};
pub use catalog::Catalog;
pub use entry::{Category, ContentEntry};
pub use error::CatalogError;
pub use landing::{landing_entry, landing_path};
pub use navigation::{NavItem, NavigationOptions, navigation};
pub use registry::Registry;
pub use rewrite::{
    DEFAULT_CONTENT_EXTENSION, RewriteRules, destination, rewrite_rules, source_key,
};
pub use sidebar::{SidebarGroups, SidebarItem, sidebar_groups};

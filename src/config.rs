//! Inventory configuration.
//!
//! ```toml
//! include_embedded = true
//! catalogs = ["catalogs/extra_models.toml"]
//! ```

use hazard_inventory_catalog::EmbeddedCatalog;
use hazard_inventory_core::errors::{InventoryError, InventoryResult};
use hazard_inventory_core::{load_all, CatalogDocument, CatalogSource, Inventory};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Which catalog sources make up the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InventoryConfig {
    /// Include the built-in catalog (first, before any documents).
    pub include_embedded: bool,
    /// TOML catalog documents, loaded in order.
    pub catalogs: Vec<PathBuf>,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            include_embedded: true,
            catalogs: Vec::new(),
        }
    }
}

impl InventoryConfig {
    pub fn from_toml_str(text: &str) -> InventoryResult<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> InventoryResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| InventoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

/// Load every configured source and build an inventory from them.
pub fn build_inventory(config: &InventoryConfig) -> InventoryResult<Inventory> {
    let documents = config
        .catalogs
        .iter()
        .map(CatalogDocument::from_path)
        .collect::<InventoryResult<Vec<_>>>()?;

    let mut sources: Vec<&dyn CatalogSource> = Vec::with_capacity(documents.len() + 1);
    if config.include_embedded {
        sources.push(&EmbeddedCatalog);
    }
    sources.extend(documents.iter().map(|document| document as &dyn CatalogSource));

    info!(
        "Loading hazard inventory from {} catalog sources",
        sources.len()
    );
    load_all(&sources)
}

//! Embedded catalog of climate-hazard models.
//!
//! Provides the OS-Climate chronic heat indicators and the WRI Aqueduct
//! Floods riverine and coastal models as resource templates, together with
//! the colormaps they are rendered with.
//!
//! ```rust
//! use hazard_inventory_catalog::embedded_inventory;
//!
//! let inventory = embedded_inventory().unwrap();
//! let watch = inventory.get("inundation/wri/v2/000000000WATCH").unwrap();
//! assert_eq!(watch.scenarios[0].map_id(1980), Some("gw4vgq"));
//! ```

pub mod colormaps;
pub mod models;

use hazard_inventory_core::errors::InventoryResult;
use hazard_inventory_core::{load, CatalogSource, Colormaps, Inventory, ResourceTemplate};
use log::debug;

/// The built-in catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

impl CatalogSource for EmbeddedCatalog {
    fn templates(&self) -> InventoryResult<Vec<ResourceTemplate>> {
        let mut templates = models::osc_chronic_heat_models()?;
        templates.extend(models::wri_riverine_inundation_models()?);
        templates.extend(models::wri_coastal_inundation_models()?);
        debug!("Embedded catalog supplies {} templates", templates.len());
        Ok(templates)
    }

    fn colormaps(&self) -> Colormaps {
        colormaps::embedded_colormaps()
    }
}

/// Build an inventory from the embedded catalog alone.
pub fn embedded_inventory() -> InventoryResult<Inventory> {
    load(&EmbeddedCatalog)
}

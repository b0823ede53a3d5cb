//! Catalog of climate-hazard data models.
//!
//! Re-exports the expansion and key derivation engine
//! ([`hazard_inventory_core`]) and the embedded catalog
//! ([`hazard_inventory_catalog`]), and adds configuration and a shared,
//! reloadable inventory handle.
//!
//! ```rust
//! use hazard_inventory::{build_inventory, InventoryConfig};
//!
//! let inventory = build_inventory(&InventoryConfig::default()).unwrap();
//! let models = inventory.resources_by_type_id("RiverineInundation", "MIROC-ESM-CHEM");
//! assert_eq!(models[0].scenario("rcp4p5").unwrap().map_id(2030), Some("ht2kn3"));
//! ```

pub mod config;
pub mod shared;

pub use config::{build_inventory, InventoryConfig};
pub use hazard_inventory_catalog;
pub use hazard_inventory_core;
pub use hazard_inventory_core::{
    CatalogSource, HazardResource, Inventory, InventoryError, InventoryResult,
};
pub use shared::SharedInventory;

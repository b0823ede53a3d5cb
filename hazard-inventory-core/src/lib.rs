//! Expansion and key derivation for catalogs of climate-hazard resources.
//!
//! Catalog authors write a few [`ResourceTemplate`]s, each covering the cross
//! product of its parameters, scenarios and years. Loading a catalog
//!
//! 1. expands every template into concrete resources ([`expand()`]),
//! 2. derives a short map identifier for every scenario year and checks it
//!    against any recorded identifier ([`resolve()`]),
//! 3. indexes the result for lookup by key or by hazard type and model id
//!    ([`Inventory`]).
//!
//! The whole load is a pure computation; any authoring or integrity fault
//! fails it with an [`InventoryError`].

pub mod colormap;
pub mod document;
pub mod errors;
pub mod expand;
pub mod inventory;
pub mod key;
pub mod name_template;
pub mod resolve;
pub mod resource;

pub use colormap::{Colormap, Colormaps};
pub use document::CatalogDocument;
pub use errors::{InventoryError, InventoryResult};
pub use expand::expand;
pub use inventory::{load, load_all, to_resources, CatalogSource, Inventory};
pub use key::derive_key;
pub use name_template::NameTemplate;
pub use resolve::{resolve, PROBE_RETURN_PERIOD};
pub use resource::{
    ExpandedResource, HazardResource, MapInfo, Period, ResourceTemplate, Scenario, ScenarioSpec,
    TemplateParameter, TileSource,
};

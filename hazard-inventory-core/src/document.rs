//! TOML catalog documents.
//!
//! A document holds an array of templates and a table of colormaps:
//!
//! ```toml
//! [[templates]]
//! type = "RiverineInundation"
//! path = "inundation/wri/v2"
//! id = "000000000WATCH"
//! display_name = "WRI/Baseline"
//! array_name = "inunriver_{scenario}_{id}_{year}"
//! units = "metres"
//!
//! [templates.map]
//! array_name = "inunriver_{scenario}_{id}_{year}_rp{return_period:05d}"
//! source = "mapbox"
//!
//! [templates.map.colormap]
//! name = "flare"
//! nodata_index = 0
//! min_index = 1
//! min_value = 0.0
//! max_index = 255
//! max_value = 2.0
//! units = "m"
//!
//! [[templates.scenarios]]
//! id = "historical"
//! years = [1980]
//! periods = [{ year = 1980, map_id = "gw4vgq" }]
//! ```
//!
//! Decoding rejects unknown keys and malformed name templates, so a document
//! that decodes is structurally sound; expansion and resolution do the rest.

use crate::colormap::Colormaps;
use crate::errors::{InventoryError, InventoryResult};
use crate::inventory::CatalogSource;
use crate::resource::ResourceTemplate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogDocument {
    #[serde(default)]
    pub templates: Vec<ResourceTemplate>,
    #[serde(default)]
    pub colormaps: Colormaps,
}

impl CatalogDocument {
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

impl CatalogSource for CatalogDocument {
    fn templates(&self) -> InventoryResult<Vec<ResourceTemplate>> {
        Ok(self.templates.clone())
    }

    fn colormaps(&self) -> Colormaps {
        self.colormaps.clone()
    }
}

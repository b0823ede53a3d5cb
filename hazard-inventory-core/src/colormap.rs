//! Colormap specifications referenced by map information.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Colour scale used to render a hazard map.
///
/// Array values between `min_value` and `max_value` are mapped linearly onto
/// palette indices `min_index..=max_index`; `nodata_index` marks missing data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Colormap {
    pub name: String,
    pub nodata_index: u32,
    pub min_index: u32,
    pub min_value: f64,
    pub max_index: u32,
    pub max_value: f64,
    pub units: String,
}

impl Colormap {
    /// A colormap over the usual 8-bit palette: index 0 is no-data and values
    /// span indices 1 to 255.
    pub fn eight_bit(
        name: impl Into<String>,
        min_value: f64,
        max_value: f64,
        units: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            nodata_index: 0,
            min_index: 1,
            min_value,
            max_index: 255,
            max_value,
            units: units.into(),
        }
    }
}

/// Colormaps by key. A key is a colormap name or, for a palette shared at
/// several ranges, a more descriptive identifier.
pub type Colormaps = BTreeMap<String, Colormap>;

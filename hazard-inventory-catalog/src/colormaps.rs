//! Embedded colormap provider.
//!
//! Keys are colormap names, or a model identifier where one palette is used
//! with model-specific value ranges.

use hazard_inventory_core::Colormaps;

use crate::models::{degree_days_colormap, work_loss_colormap, wri_colormap};

pub fn embedded_colormaps() -> Colormaps {
    Colormaps::from([
        ("flare".to_string(), wri_colormap()),
        (
            "mean_degree_days/above/32c".to_string(),
            degree_days_colormap(),
        ),
        ("mean_work_loss".to_string(), work_loss_colormap()),
    ])
}

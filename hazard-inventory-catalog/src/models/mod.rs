//! Embedded hazard model templates, grouped by provider.

mod chronic_heat;
mod wri_inundation;

pub use chronic_heat::osc_chronic_heat_models;
pub use wri_inundation::{wri_coastal_inundation_models, wri_riverine_inundation_models};

pub(crate) use chronic_heat::{degree_days_colormap, work_loss_colormap};
pub(crate) use wri_inundation::wri_colormap;

pub(crate) const METHODOLOGY_DOC: &str = "
For more details and relevant citations see the
[OS-Climate Physical Climate Risk Methodology document](https://github.com/os-climate/physrisk/blob/main/methodology/PhysicalRiskMethodology.pdf).
";

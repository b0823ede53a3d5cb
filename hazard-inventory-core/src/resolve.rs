//! Period resolution: derive a map identifier for every scenario year.
//!
//! For each year the map array name is rendered with the scenario id, the
//! year, the resource id and [`PROBE_RETURN_PERIOD`], and the result is hashed
//! with [`derive_key`]. Resources without a map (or with an empty map array
//! name) get an empty identifier.
//!
//! Recorded periods on a [`ScenarioSpec`] are compared position by position
//! with the derived ones. Any difference fails the load: it means the hash,
//! the probe value or the template changed, and consumers rely on identifiers
//! staying stable.

use crate::errors::{InventoryError, InventoryResult};
use crate::key::derive_key;
use crate::name_template::{FieldValue, NameTemplate};
use crate::resource::{ExpandedResource, HazardResource, Period, Scenario, ScenarioSpec};
use log::debug;

/// Return period substituted into map array names before hashing.
///
/// Only the hashed string depends on it; it must never change, otherwise
/// every recorded map identifier becomes invalid.
pub const PROBE_RETURN_PERIOD: i64 = 1000;

/// Fields filled in when rendering array names.
pub const RENDER_FIELDS: [&str; 4] = ["scenario", "year", "id", "return_period"];

/// Render a map array name for one scenario year.
pub fn render_array_name(
    template: &NameTemplate,
    scenario: &str,
    year: i32,
    id: &str,
) -> InventoryResult<String> {
    template.render(|field| match field {
        "scenario" => Some(FieldValue::Text(scenario)),
        "year" => Some(FieldValue::Integer(i64::from(year))),
        "id" => Some(FieldValue::Text(id)),
        "return_period" => Some(FieldValue::Integer(PROBE_RETURN_PERIOD)),
        _ => None,
    })
}

fn resolve_scenario(resource: &ExpandedResource, spec: ScenarioSpec) -> InventoryResult<Scenario> {
    let map_template = resource
        .map
        .as_ref()
        .map(|map| &map.array_name)
        .filter(|array_name| !array_name.is_empty());

    let periods = spec
        .years
        .iter()
        .map(|&year| -> InventoryResult<Period> {
            let map_id = match map_template {
                Some(template) => derive_key(&render_array_name(
                    template,
                    &spec.id,
                    year,
                    &resource.id,
                )?),
                None => String::new(),
            };
            Ok(Period { year, map_id })
        })
        .collect::<InventoryResult<Vec<_>>>()?;

    if let Some(recorded) = &spec.periods {
        reconcile(resource, &spec, recorded, &periods)?;
    }

    Ok(Scenario {
        id: spec.id,
        years: spec.years,
        periods,
    })
}

fn reconcile(
    resource: &ExpandedResource,
    spec: &ScenarioSpec,
    recorded: &[Period],
    derived: &[Period],
) -> InventoryResult<()> {
    if recorded.len() > derived.len() {
        return Err(InventoryError::TooManyRecordedPeriods {
            key: resource.key(),
            scenario: spec.id.clone(),
            declared: derived.len(),
            recorded: recorded.len(),
        });
    }
    for (expected, computed) in recorded.iter().zip(derived) {
        if expected.year != computed.year {
            return Err(InventoryError::PeriodYearMismatch {
                key: resource.key(),
                scenario: spec.id.clone(),
                declared: computed.year,
                recorded: expected.year,
            });
        }
        if expected.map_id != computed.map_id {
            return Err(InventoryError::PeriodKeyMismatch {
                key: resource.key(),
                scenario: spec.id.clone(),
                year: computed.year,
                computed: computed.map_id.clone(),
                expected: expected.map_id.clone(),
            });
        }
    }
    debug!(
        "Recorded periods of {} scenario {} match derived map ids",
        resource.key(),
        spec.id
    );
    Ok(())
}

/// Resolve the periods of every scenario of an expanded resource.
///
/// # Errors
///
/// Fails if a recorded period disagrees with the derived one, or if a map
/// array name cannot be rendered.
pub fn resolve(mut resource: ExpandedResource) -> InventoryResult<HazardResource> {
    let specs = std::mem::take(&mut resource.scenarios);
    let scenarios = specs
        .into_iter()
        .map(|spec| resolve_scenario(&resource, spec))
        .collect::<InventoryResult<Vec<_>>>()?;

    Ok(HazardResource {
        hazard_type: resource.hazard_type,
        path: resource.path,
        id: resource.id,
        display_name: resource.display_name,
        description: resource.description,
        array_name: resource.array_name,
        map: resource.map,
        units: resource.units,
        scenarios,
    })
}

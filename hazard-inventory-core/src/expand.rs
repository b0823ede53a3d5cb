//! Parameter expansion of resource templates.
//!
//! A template declaring parameters `P1..Pn` expands to the cross product of
//! their values, in declaration order with the last parameter varying
//! fastest. A template without parameters expands to exactly one resource.
//! Scenarios are carried over untouched; periods are resolved later by
//! [`resolve`](crate::resolve::resolve).

use crate::errors::{InventoryError, InventoryResult};
use crate::name_template::NameTemplate;
use crate::resolve::RENDER_FIELDS;
use crate::resource::{ExpandedResource, MapInfo, ResourceTemplate};
use log::debug;
use std::collections::HashSet;

/// Templated fields of one parameter combination, bound so far.
#[derive(Debug, Clone)]
struct Substitution {
    id: NameTemplate,
    display_name: NameTemplate,
    description: String,
    array_name: Option<NameTemplate>,
    map: Option<MapInfo>,
}

impl Substitution {
    fn from_template(template: &ResourceTemplate) -> InventoryResult<Self> {
        Ok(Self {
            id: NameTemplate::parse(&template.id)?,
            display_name: NameTemplate::parse(&template.display_name)?,
            description: template.description.clone(),
            array_name: template.array_name.clone(),
            map: template.map.clone(),
        })
    }

    fn bind(&self, name: &str, value: &str) -> InventoryResult<Self> {
        let map = match &self.map {
            Some(map) => Some(MapInfo {
                array_name: map.array_name.bind(name, value)?,
                ..map.clone()
            }),
            None => None,
        };
        Ok(Self {
            id: self.id.bind(name, value)?,
            display_name: self.display_name.bind(name, value)?,
            description: self.description.replace(&format!("{{{name}}}"), value),
            array_name: self
                .array_name
                .as_ref()
                .map(|array_name| array_name.bind(name, value))
                .transpose()?,
            map,
        })
    }

    /// Check that nothing but render-time fields remain and build the resource.
    fn finish(self, template: &ResourceTemplate) -> InventoryResult<ExpandedResource> {
        let unresolved = |field: &'static str, placeholder: &str| {
            InventoryError::UnresolvedPlaceholder {
                model: template.id.clone(),
                field,
                placeholder: placeholder.to_string(),
            }
        };

        if let Some(name) = self.id.fields().next() {
            return Err(unresolved("id", name));
        }
        if let Some(name) = self.display_name.fields().next() {
            return Err(unresolved("display_name", name));
        }
        if let Some(name) = self
            .array_name
            .as_ref()
            .and_then(|array_name| array_name.unknown_field(&RENDER_FIELDS))
        {
            return Err(unresolved("array_name", name));
        }
        if let Some(name) = self
            .map
            .as_ref()
            .and_then(|map| map.array_name.unknown_field(&RENDER_FIELDS))
        {
            return Err(unresolved("map.array_name", name));
        }

        let id = self.id.render(|_| None)?;
        if id.contains(['{', '}']) {
            return Err(InventoryError::MalformedTemplate {
                template: template.id.clone(),
                reason: "model ids may not contain braces".to_string(),
            });
        }

        Ok(ExpandedResource {
            hazard_type: template.hazard_type.clone(),
            path: template.path.clone(),
            id,
            display_name: self.display_name.render(|_| None)?,
            description: self.description,
            array_name: self.array_name,
            map: self.map,
            units: template.units.clone(),
            scenarios: template.scenarios.clone(),
        })
    }
}

fn check_parameters(template: &ResourceTemplate) -> InventoryResult<()> {
    let mut seen = HashSet::new();
    for parameter in &template.params {
        if !seen.insert(parameter.name.as_str()) {
            return Err(InventoryError::DuplicateParameter {
                model: template.id.clone(),
                parameter: parameter.name.clone(),
            });
        }
        if parameter.values.is_empty() {
            return Err(InventoryError::EmptyParameter {
                model: template.id.clone(),
                parameter: parameter.name.clone(),
            });
        }
    }
    Ok(())
}

fn check_scenarios(template: &ResourceTemplate) -> InventoryResult<()> {
    for scenario in &template.scenarios {
        let mut seen = HashSet::new();
        if let Some(&year) = scenario.years.iter().find(|&&year| !seen.insert(year)) {
            return Err(InventoryError::DuplicateYear {
                model: template.id.clone(),
                scenario: scenario.id.clone(),
                year,
            });
        }
    }
    Ok(())
}

/// Expand a template into one resource per parameter combination.
///
/// # Errors
///
/// Fails if a parameter is declared twice or without values, if a scenario
/// lists a year twice, if a template
/// string is malformed, or if a field other than a declared parameter remains
/// in the id or display name (or, for array names, a field other than the
/// render-time fields `scenario`, `year`, `id` and `return_period`).
pub fn expand(template: &ResourceTemplate) -> InventoryResult<Vec<ExpandedResource>> {
    check_parameters(template)?;
    check_scenarios(template)?;

    let mut combinations = vec![Substitution::from_template(template)?];
    for parameter in &template.params {
        let mut next = Vec::with_capacity(combinations.len() * parameter.values.len());
        for combination in &combinations {
            for value in &parameter.values {
                next.push(combination.bind(&parameter.name, value)?);
            }
        }
        combinations = next;
    }

    let expanded = combinations
        .into_iter()
        .map(|combination| combination.finish(template))
        .collect::<InventoryResult<Vec<_>>>()?;
    debug!(
        "Expanded template {}/{} into {} resources",
        template.path,
        template.id,
        expanded.len()
    );
    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormap::Colormap;
    use crate::resource::{Period, ScenarioSpec, TileSource};

    fn work_loss() -> ResourceTemplate {
        ResourceTemplate::new(
            "ChronicHeat",
            "chronic_heat/osc/v1",
            "mean_work_loss/{intensity}",
            "Mean work loss ({intensity} intensity)",
            "fractional loss",
        )
        .with_description("Work loss at {intensity} intensity. $I^{\\text{WA}}$")
        .with_parameter("intensity", ["high", "medium", "low"])
        .with_array_name(
            NameTemplate::parse("mean_work_loss_{intensity}_{scenario}_{year}").unwrap(),
        )
        .with_map(
            MapInfo::new(
                Colormap::eight_bit("heating", 0.0, 0.8, "fractional loss"),
                NameTemplate::parse("mean_work_loss_{intensity}_{scenario}_{year}_map").unwrap(),
            )
            .with_source(TileSource::Array),
        )
        .with_scenario(ScenarioSpec::new("ssp585", [2030, 2040, 2050]))
        .with_scenario(ScenarioSpec::new("historical", [2010]))
    }

    #[test]
    fn identity_expansion() {
        let template = ResourceTemplate::new(
            "RiverineInundation",
            "inundation/wri/v2",
            "000000000WATCH",
            "WRI/Baseline",
            "metres",
        )
        .with_scenario(
            ScenarioSpec::new("historical", [1980]).with_periods([Period::new(1980, "gw4vgq")]),
        );

        let expanded = expand(&template).unwrap();
        assert_eq!(expanded.len(), 1);
        let resource = &expanded[0];
        assert_eq!(resource.id, "000000000WATCH");
        assert_eq!(resource.key(), "inundation/wri/v2/000000000WATCH");
        // recorded periods survive expansion for the resolver to check
        assert_eq!(resource.scenarios, template.scenarios);
    }

    #[test]
    fn single_parameter() {
        let expanded = expand(&work_loss()).unwrap();
        let ids: Vec<_> = expanded.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "mean_work_loss/high",
                "mean_work_loss/medium",
                "mean_work_loss/low"
            ]
        );

        let medium = &expanded[1];
        assert_eq!(medium.display_name, "Mean work loss (medium intensity)");
        assert_eq!(
            medium.description,
            "Work loss at medium intensity. $I^{\\text{WA}}$"
        );
        assert_eq!(
            medium.array_name.as_ref().unwrap().to_string(),
            "mean_work_loss_medium_{scenario}_{year}"
        );
        let map = medium.map.as_ref().unwrap();
        assert_eq!(
            map.array_name.to_string(),
            "mean_work_loss_medium_{scenario}_{year}_map"
        );
        assert_eq!(map.source, Some(TileSource::Array));
        assert_eq!(medium.scenarios.len(), 2);
    }

    #[test]
    fn cross_product_last_parameter_fastest() {
        let template = ResourceTemplate::new(
            "ChronicHeat",
            "chronic_heat/osc/v1",
            "days/{threshold}/{intensity}",
            "Days above {threshold} ({intensity})",
            "days",
        )
        .with_parameter("threshold", ["25c", "30c"])
        .with_parameter("intensity", ["high", "medium", "low"]);

        let expanded = expand(&template).unwrap();
        assert_eq!(expanded.len(), 6);
        let ids: Vec<_> = expanded.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "days/25c/high",
                "days/25c/medium",
                "days/25c/low",
                "days/30c/high",
                "days/30c/medium",
                "days/30c/low",
            ]
        );
    }

    #[test]
    fn unresolved_id_placeholder() {
        let template = ResourceTemplate::new(
            "ChronicHeat",
            "chronic_heat/osc/v1",
            "mean_work_loss/{intensity}",
            "Mean work loss",
            "fractional loss",
        );

        let err = expand(&template).unwrap_err();
        match err {
            InventoryError::UnresolvedPlaceholder {
                field, placeholder, ..
            } => {
                assert_eq!(field, "id");
                assert_eq!(placeholder, "intensity");
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn unknown_field_in_map_array_name() {
        let mut template = work_loss();
        template.map.as_mut().unwrap().array_name =
            NameTemplate::parse("work_loss_{intensity}_{model}_{year}").unwrap();

        let err = expand(&template).unwrap_err();
        assert!(matches!(
            err,
            InventoryError::UnresolvedPlaceholder { field: "map.array_name", ref placeholder, .. }
                if placeholder == "model"
        ));
    }

    #[test]
    fn render_fields_are_left_for_resolution() {
        let expanded = expand(&work_loss()).unwrap();
        let map = expanded[0].map.as_ref().unwrap();
        assert_eq!(
            map.array_name.fields().collect::<Vec<_>>(),
            ["scenario", "year"]
        );
    }

    #[test]
    fn empty_parameter_is_rejected() {
        let template = work_loss().with_parameter("threshold", Vec::<String>::new());
        assert!(matches!(
            expand(&template),
            Err(InventoryError::EmptyParameter { ref parameter, .. }) if parameter == "threshold"
        ));
    }

    #[test]
    fn duplicate_parameter_is_rejected() {
        let template = work_loss().with_parameter("intensity", ["extreme"]);
        assert!(matches!(
            expand(&template),
            Err(InventoryError::DuplicateParameter { .. })
        ));
    }

    #[test]
    fn duplicate_year_is_rejected() {
        let template = work_loss().with_scenario(ScenarioSpec::new("ssp245", [2030, 2050, 2030]));
        match expand(&template) {
            Err(InventoryError::DuplicateYear { scenario, year, .. }) => {
                assert_eq!(scenario, "ssp245");
                assert_eq!(year, 2030);
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn escaped_braces_in_id_are_rejected() {
        let template = ResourceTemplate::new("ChronicHeat", "p", "a{{b}}", "A", "days");
        let err = expand(&template).unwrap_err();
        assert!(
            matches!(err, InventoryError::MalformedTemplate { ref template, .. } if template == "a{{b}}"),
            "{err}"
        );
    }

    #[test]
    fn oversized_width_in_id_is_an_error() {
        let template =
            ResourceTemplate::new("ChronicHeat", "p", "x/{intensity:70000}", "X", "days")
                .with_parameter("intensity", ["high"]);
        assert!(matches!(
            expand(&template),
            Err(InventoryError::MalformedTemplate { .. })
        ));
    }

    #[test]
    fn malformed_id_is_rejected() {
        let template = ResourceTemplate::new("ChronicHeat", "p", "bad/{id", "Bad", "days");
        assert!(matches!(
            expand(&template),
            Err(InventoryError::MalformedTemplate { .. })
        ));
    }
}

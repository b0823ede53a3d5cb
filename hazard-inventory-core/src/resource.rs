//! Hazard resource descriptors, before and after expansion.
//!
//! A [`ResourceTemplate`] is what a catalog author writes: possibly
//! parameterised, with scenarios that may carry recorded map identifiers.
//! Expansion turns it into [`ExpandedResource`]s (one per parameter
//! combination) and period resolution turns each of those into a
//! [`HazardResource`] whose scenarios carry freshly derived map identifiers.

use crate::colormap::Colormap;
use crate::name_template::NameTemplate;
use serde::{Deserialize, Serialize};

/// Where rendered map tiles are served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileSource {
    /// Pre-rendered tiles hosted by Mapbox
    Mapbox,
    /// Tiles rendered on demand from the array store
    Array,
}

/// Map rendering information for a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapInfo {
    pub colormap: Colormap,
    /// Name of the rendered map array; fields `scenario`, `year`, `id` and
    /// `return_period` are filled in per period.
    pub array_name: NameTemplate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<TileSource>,
}

impl MapInfo {
    pub fn new(colormap: Colormap, array_name: NameTemplate) -> Self {
        Self {
            colormap,
            array_name,
            source: None,
        }
    }

    pub fn with_source(mut self, source: TileSource) -> Self {
        self.source = Some(source);
        self
    }
}

/// A template parameter and its allowed values, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateParameter {
    pub name: String,
    pub values: Vec<String>,
}

/// A map identifier for one scenario year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Period {
    pub year: i32,
    pub map_id: String,
}

impl Period {
    pub fn new(year: i32, map_id: impl Into<String>) -> Self {
        Self {
            year,
            map_id: map_id.into(),
        }
    }
}

/// A scenario as authored in a template.
///
/// `periods`, when present, records the expected map identifiers and is used
/// only to check the derived ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioSpec {
    pub id: String,
    pub years: Vec<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub periods: Option<Vec<Period>>,
}

impl ScenarioSpec {
    pub fn new(id: impl Into<String>, years: impl Into<Vec<i32>>) -> Self {
        Self {
            id: id.into(),
            years: years.into(),
            periods: None,
        }
    }

    /// Record expected map identifiers, one per declared year.
    pub fn with_periods(mut self, periods: impl Into<Vec<Period>>) -> Self {
        self.periods = Some(periods.into());
        self
    }
}

/// A resolved scenario: exactly one period per declared year, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub years: Vec<i32>,
    pub periods: Vec<Period>,
}

impl Scenario {
    /// Map identifier for `year`, if the scenario covers it.
    pub fn map_id(&self, year: i32) -> Option<&str> {
        self.periods
            .iter()
            .find(|period| period.year == year)
            .map(|period| period.map_id.as_str())
    }
}

/// Definition of a hazard resource as written by a catalog author.
///
/// `id`, `display_name`, `array_name` and `map.array_name` may contain one
/// `{name}` field per declared parameter. `description` is free text and only
/// receives plain `{name}` replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceTemplate {
    #[serde(rename = "type")]
    pub hazard_type: String,
    pub path: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<TemplateParameter>,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array_name: Option<NameTemplate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<MapInfo>,
    pub units: String,
    pub scenarios: Vec<ScenarioSpec>,
}

impl ResourceTemplate {
    /// Create a template with no parameters, scenarios or map.
    pub fn new(
        hazard_type: impl Into<String>,
        path: impl Into<String>,
        id: impl Into<String>,
        display_name: impl Into<String>,
        units: impl Into<String>,
    ) -> Self {
        Self {
            hazard_type: hazard_type.into(),
            path: path.into(),
            id: id.into(),
            params: Vec::new(),
            display_name: display_name.into(),
            description: String::new(),
            array_name: None,
            map: None,
            units: units.into(),
            scenarios: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_array_name(mut self, array_name: NameTemplate) -> Self {
        self.array_name = Some(array_name);
        self
    }

    pub fn with_map(mut self, map: MapInfo) -> Self {
        self.map = Some(map);
        self
    }

    pub fn with_parameter<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params.push(TemplateParameter {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn with_scenario(mut self, scenario: ScenarioSpec) -> Self {
        self.scenarios.push(scenario);
        self
    }
}

/// A concrete hazard resource.
///
/// The scenario type distinguishes the two stages of the pipeline: an
/// [`ExpandedResource`] still holds the authored [`ScenarioSpec`]s, a
/// [`HazardResource`] holds resolved [`Scenario`]s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardResource<S = Scenario> {
    #[serde(rename = "type")]
    pub hazard_type: String,
    pub path: String,
    pub id: String,
    pub display_name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array_name: Option<NameTemplate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<MapInfo>,
    pub units: String,
    pub scenarios: Vec<S>,
}

/// A resource after parameter expansion, before period resolution.
pub type ExpandedResource = HazardResource<ScenarioSpec>;

impl<S> HazardResource<S> {
    /// Unique key of the resource: `{path}/{id}`.
    pub fn key(&self) -> String {
        format!("{}/{}", self.path, self.id)
    }
}

impl HazardResource {
    pub fn scenario(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|scenario| scenario.id == id)
    }
}

//! Inventory of hazard resources with lookup by key or by type and model id.
//!
//! # Overview
//!
//! An [`Inventory`] is built once from a fully resolved list of resources and
//! is read-only afterwards, so a single instance can be shared between
//! threads behind an `Arc` without locking. To pick up a changed catalog,
//! build a new inventory and swap the shared reference.
//!
//! # Usage
//!
//! ```rust
//! use hazard_inventory_core::inventory::{to_resources, Inventory};
//! use hazard_inventory_core::resource::{ResourceTemplate, ScenarioSpec};
//! use hazard_inventory_core::Colormaps;
//!
//! let template = ResourceTemplate::new(
//!     "ChronicHeat",
//!     "chronic_heat/osc/v1",
//!     "mean_work_loss/{intensity}",
//!     "Mean work loss ({intensity} intensity)",
//!     "fractional loss",
//! )
//! .with_parameter("intensity", ["high", "medium", "low"])
//! .with_scenario(ScenarioSpec::new("ssp585", [2030, 2040, 2050]));
//!
//! let resources = to_resources(&[template]).unwrap();
//! let inventory = Inventory::new(resources, Colormaps::new()).unwrap();
//!
//! let high = inventory.get("chronic_heat/osc/v1/mean_work_loss/high").unwrap();
//! assert_eq!(high.display_name, "Mean work loss (high intensity)");
//! assert_eq!(
//!     inventory.resources_by_type_id("ChronicHeat", "mean_work_loss/low").len(),
//!     1
//! );
//! ```

use crate::colormap::Colormaps;
use crate::errors::{InventoryError, InventoryResult};
use crate::expand::expand;
use crate::resolve::resolve;
use crate::resource::{HazardResource, ResourceTemplate};
use log::info;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Supplier of resource templates and colormaps.
///
/// This is the boundary to wherever catalog definitions come from: the
/// embedded catalog, a TOML document, or anything else able to produce typed
/// templates.
pub trait CatalogSource {
    /// Templates in authoring order.
    fn templates(&self) -> InventoryResult<Vec<ResourceTemplate>>;

    /// Colormaps by key, passed through to consumers unmodified.
    fn colormaps(&self) -> Colormaps;
}

/// Expand every template and resolve the periods of every resulting resource.
///
/// The output preserves template order, and within a template the expansion
/// order.
pub fn to_resources(templates: &[ResourceTemplate]) -> InventoryResult<Vec<HazardResource>> {
    let mut resources = Vec::new();
    for template in templates {
        for expanded in expand(template)? {
            resources.push(resolve(expanded)?);
        }
    }
    Ok(resources)
}

/// Build an inventory from a single catalog source.
pub fn load(source: &dyn CatalogSource) -> InventoryResult<Inventory> {
    load_all(&[source])
}

/// Build an inventory from several catalog sources.
///
/// Templates are taken in source order. A colormap key supplied by more than
/// one source is an error.
pub fn load_all(sources: &[&dyn CatalogSource]) -> InventoryResult<Inventory> {
    let mut templates = Vec::new();
    let mut colormaps = Colormaps::new();
    for source in sources {
        templates.extend(source.templates()?);
        for (key, colormap) in source.colormaps() {
            if colormaps.contains_key(&key) {
                return Err(InventoryError::DuplicateColormap { name: key });
            }
            colormaps.insert(key, colormap);
        }
    }
    Inventory::new(to_resources(&templates)?, colormaps)
}

/// Read-only index over resolved hazard resources.
#[derive(Debug, Clone)]
pub struct Inventory {
    resources: Vec<HazardResource>,
    by_key: HashMap<String, usize>,
    /// hazard type -> model id -> positions in `resources`
    by_type_id: HashMap<String, HashMap<String, Vec<usize>>>,
    colormaps: Colormaps,
}

impl Inventory {
    /// Index `resources`.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::DuplicateResourceKey`] if two resources share
    /// a path and model id.
    pub fn new(resources: Vec<HazardResource>, colormaps: Colormaps) -> InventoryResult<Self> {
        let mut by_key = HashMap::with_capacity(resources.len());
        let mut by_type_id: HashMap<String, HashMap<String, Vec<usize>>> = HashMap::new();

        for (index, resource) in resources.iter().enumerate() {
            match by_key.entry(resource.key()) {
                Entry::Occupied(entry) => {
                    return Err(InventoryError::DuplicateResourceKey {
                        key: entry.key().clone(),
                    })
                }
                Entry::Vacant(entry) => {
                    entry.insert(index);
                }
            }
            by_type_id
                .entry(resource.hazard_type.clone())
                .or_default()
                .entry(resource.id.clone())
                .or_default()
                .push(index);
        }

        let pairs: usize = by_type_id.values().map(HashMap::len).sum();
        info!(
            "Built hazard inventory: {} resources, {} type/id pairs, {} colormaps",
            resources.len(),
            pairs,
            colormaps.len()
        );

        Ok(Self {
            resources,
            by_key,
            by_type_id,
            colormaps,
        })
    }

    /// Look up a resource by its key (`{path}/{id}`).
    pub fn get(&self, key: &str) -> Option<&HazardResource> {
        self.by_key.get(key).map(|&index| &self.resources[index])
    }

    /// All resources of a hazard type with a given model id, one per
    /// provider or version, in catalog order. Empty if there are none.
    pub fn resources_by_type_id(&self, hazard_type: &str, id: &str) -> Vec<&HazardResource> {
        self.by_type_id
            .get(hazard_type)
            .and_then(|by_id| by_id.get(id))
            .map(|indexes| indexes.iter().map(|&i| &self.resources[i]).collect())
            .unwrap_or_default()
    }

    /// All resources in catalog order.
    pub fn resources(&self) -> &[HazardResource] {
        &self.resources
    }

    /// Colormaps exactly as supplied by the catalog sources.
    ///
    /// Colormap names referenced by resources are not checked against these.
    pub fn colormaps(&self) -> &Colormaps {
        &self.colormaps
    }

    /// Distinct hazard types, sorted.
    pub fn hazard_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.by_type_id.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormap::Colormap;
    use crate::resource::{Period, ScenarioSpec};

    struct StaticSource {
        templates: Vec<ResourceTemplate>,
        colormaps: Colormaps,
    }

    impl CatalogSource for StaticSource {
        fn templates(&self) -> InventoryResult<Vec<ResourceTemplate>> {
            Ok(self.templates.clone())
        }

        fn colormaps(&self) -> Colormaps {
            self.colormaps.clone()
        }
    }

    fn riverine(path: &str, id: &str) -> ResourceTemplate {
        ResourceTemplate::new("RiverineInundation", path, id, id, "metres")
            .with_scenario(ScenarioSpec::new("rcp8p5", [2030, 2050, 2080]))
    }

    fn flare() -> Colormaps {
        Colormaps::from([(
            "flare".to_string(),
            Colormap::eight_bit("flare", 0.0, 2.0, "m"),
        )])
    }

    #[test]
    fn lookup_by_type_and_id_covers_all_resources() {
        let templates = vec![
            riverine("inundation/wri/v2", "MIROC-ESM-CHEM"),
            riverine("inundation/other/v1", "MIROC-ESM-CHEM"),
            riverine("inundation/wri/v2", "0000HadGEM2-ES"),
            ResourceTemplate::new("ChronicHeat", "chronic_heat/osc/v1", "days/{t}", "Days", "days")
                .with_parameter("t", ["25c", "30c"]),
        ];
        let inventory = Inventory::new(to_resources(&templates).unwrap(), Colormaps::new()).unwrap();
        assert_eq!(inventory.len(), 5);

        let pairs = [
            ("RiverineInundation", "MIROC-ESM-CHEM"),
            ("RiverineInundation", "0000HadGEM2-ES"),
            ("ChronicHeat", "days/25c"),
            ("ChronicHeat", "days/30c"),
        ];
        let total: usize = pairs
            .iter()
            .map(|(hazard_type, id)| {
                let found = inventory.resources_by_type_id(hazard_type, id);
                assert!(!found.is_empty());
                found.len()
            })
            .sum();
        assert_eq!(total, inventory.len());

        let providers: Vec<_> = inventory
            .resources_by_type_id("RiverineInundation", "MIROC-ESM-CHEM")
            .iter()
            .map(|r| r.path.as_str())
            .collect();
        assert_eq!(providers, ["inundation/wri/v2", "inundation/other/v1"]);
    }

    #[test]
    fn lookup_misses() {
        let inventory =
            Inventory::new(to_resources(&[riverine("p", "a")]).unwrap(), Colormaps::new()).unwrap();
        assert!(inventory.get("p/b").is_none());
        assert!(inventory.resources_by_type_id("RiverineInundation", "b").is_empty());
        assert!(inventory.resources_by_type_id("CoastalInundation", "a").is_empty());
        assert!(inventory.get("p/a").is_some());
    }

    #[test]
    fn duplicate_key_fails() {
        let resources = to_resources(&[riverine("p", "a"), riverine("p", "a")]).unwrap();
        let err = Inventory::new(resources, Colormaps::new()).unwrap_err();
        assert!(matches!(err, InventoryError::DuplicateResourceKey { ref key } if key == "p/a"));
    }

    #[test]
    fn enumeration_preserves_order() {
        let templates = [riverine("p", "c"), riverine("p", "a"), riverine("p", "b")];
        let inventory = Inventory::new(to_resources(&templates).unwrap(), Colormaps::new()).unwrap();
        let ids: Vec<_> = inventory.resources().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
        assert_eq!(inventory.hazard_types(), ["RiverineInundation"]);
    }

    #[test]
    fn load_passes_colormaps_through() {
        let source = StaticSource {
            templates: vec![riverine("p", "a")],
            colormaps: flare(),
        };
        let inventory = load(&source).unwrap();
        assert_eq!(inventory.colormaps(), &flare());
    }

    #[test]
    fn load_all_rejects_duplicate_colormaps() {
        let first = StaticSource {
            templates: vec![riverine("p", "a")],
            colormaps: flare(),
        };
        let second = StaticSource {
            templates: vec![riverine("p", "b")],
            colormaps: flare(),
        };
        let result = load_all(&[&first, &second]);
        assert!(matches!(
            result,
            Err(InventoryError::DuplicateColormap { ref name }) if name == "flare"
        ));
    }

    #[test]
    fn load_fails_on_reconciliation_error() {
        let mut template = riverine("p", "a");
        template.scenarios[0].periods = Some(vec![Period::new(2030, "nope00")]);
        let source = StaticSource {
            templates: vec![template],
            colormaps: Colormaps::new(),
        };
        // no map means the derived id is empty, which cannot match
        assert!(matches!(
            load(&source),
            Err(InventoryError::PeriodKeyMismatch { .. })
        ));
    }
}

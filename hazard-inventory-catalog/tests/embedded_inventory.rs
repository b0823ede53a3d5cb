//! Loads the embedded catalog end to end and checks the derived map ids.

use hazard_inventory_catalog::{embedded_inventory, EmbeddedCatalog};
use hazard_inventory_core::{derive_key, to_resources, CatalogSource, TileSource};

#[test]
fn loads_every_model() {
    let inventory = embedded_inventory().unwrap();
    // 1 degree-days + 3 work-loss intensities + 6 riverine + 8 coastal
    assert_eq!(inventory.len(), 18);
    assert_eq!(
        inventory.hazard_types(),
        ["ChronicHeat", "CoastalInundation", "RiverineInundation"]
    );
}

#[test]
fn type_id_lookup_covers_inventory() {
    let inventory = embedded_inventory().unwrap();
    let total: usize = inventory
        .resources()
        .iter()
        .map(|r| (r.hazard_type.as_str(), r.id.as_str()))
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .map(|(hazard_type, id)| inventory.resources_by_type_id(hazard_type, id).len())
        .sum();
    assert_eq!(total, inventory.len());
    assert!(inventory
        .resources_by_type_id("RiverineInundation", "nosub")
        .is_empty());
}

#[test]
fn recorded_riverine_ids() {
    let inventory = embedded_inventory().unwrap();
    let miroc = inventory
        .get("inundation/wri/v2/MIROC-ESM-CHEM")
        .unwrap();
    let rcp4p5 = miroc.scenario("rcp4p5").unwrap();
    assert_eq!(rcp4p5.map_id(2030), Some("ht2kn3"));
    assert_eq!(rcp4p5.map_id(2050), Some("1k4boi"));
    assert_eq!(rcp4p5.map_id(2080), Some("3rok7b"));
    assert_eq!(
        miroc.scenario("rcp8p5").unwrap().map_id(2030),
        Some(derive_key("inunriver_rcp8p5_MIROC-ESM-CHEM_2030_rp01000").as_str())
    );
}

#[test]
fn work_loss_expands_by_intensity() {
    let inventory = embedded_inventory().unwrap();
    for intensity in ["high", "medium", "low"] {
        let key = format!("chronic_heat/osc/v1/mean_work_loss/{intensity}");
        let resource = inventory.get(&key).unwrap();
        assert_eq!(
            resource.display_name,
            format!("Mean work loss ({intensity} intensity)")
        );
        assert_eq!(resource.scenarios.len(), 3);
        assert_eq!(resource.map.as_ref().unwrap().source, Some(TileSource::Array));
    }
    let high = inventory
        .get("chronic_heat/osc/v1/mean_work_loss/high")
        .unwrap();
    assert_eq!(high.scenario("ssp585").unwrap().map_id(2030), Some("orfgd8"));
}

#[test]
fn chronic_and_coastal_ids() {
    let inventory = embedded_inventory().unwrap();
    let degree_days = inventory
        .get("chronic_heat/osc/v1/mean_degree_days/above/32c")
        .unwrap();
    assert_eq!(
        degree_days.scenario("historical").unwrap().map_id(1980),
        Some("jqnkp5")
    );

    let nosub = inventory.get("inundation/wri/v2/nosub").unwrap();
    assert_eq!(nosub.scenario("historical").unwrap().map_id(1980), Some("5mcwjr"));

    let wtsub50 = inventory.get("inundation/wri/v2/wtsub/50").unwrap();
    assert_eq!(wtsub50.scenario("rcp8p5").unwrap().map_id(2080), Some("67gp5o"));
}

#[test]
fn every_scenario_has_one_period_per_year() {
    let inventory = embedded_inventory().unwrap();
    for resource in inventory.resources() {
        for scenario in &resource.scenarios {
            let years: Vec<i32> = scenario.periods.iter().map(|p| p.year).collect();
            assert_eq!(years, scenario.years, "{}", resource.key());
            assert!(scenario.periods.iter().all(|p| p.map_id.len() == 6));
        }
    }
}

#[test]
fn gfdl_has_no_tile_source() {
    let inventory = embedded_inventory().unwrap();
    let gfdl = inventory.get("inundation/wri/v2/0000GFDL-ESM2M").unwrap();
    assert_eq!(gfdl.map.as_ref().unwrap().source, None);
}

#[test]
fn colormaps_pass_through() {
    let inventory = embedded_inventory().unwrap();
    assert_eq!(inventory.colormaps(), &EmbeddedCatalog.colormaps());
    assert_eq!(inventory.colormaps()["flare"].max_value, 2.0);
}

#[test]
fn resources_serialize_with_type_tag() {
    let templates = EmbeddedCatalog.templates().unwrap();
    let resources = to_resources(&templates[..1]).unwrap();
    let json = serde_json::to_value(&resources[0]).unwrap();
    assert_eq!(json["type"], "ChronicHeat");
    assert_eq!(json["map"]["source"], "mapbox");
    assert_eq!(
        json["map"]["array_name"],
        "mean_degree_days_above_32c_{scenario}_{year}"
    );
}

//! World Resources Institute Aqueduct Floods riverine and coastal models.

use hazard_inventory_core::errors::InventoryResult;
use hazard_inventory_core::resource::{
    MapInfo, Period, ResourceTemplate, ScenarioSpec, TileSource,
};
use hazard_inventory_core::{Colormap, NameTemplate};

use super::METHODOLOGY_DOC;

const PATH: &str = "inundation/wri/v2";
const FUTURE_YEARS: [i32; 3] = [2030, 2050, 2080];

const AQUEDUCT_DESCRIPTION: &str = r"
The World Resources Institute (WRI) [Aqueduct Floods model](https://www.wri.org/aqueduct) is an acute riverine and
coastal flood hazard model with a spatial resolution of 30 × 30 arc seconds (approx. 1 km at the equator). Flood intensity is provided
as a _return period_ map: each point comprises a curve of inundation depths for 9 different return periods (also known as
reoccurrence periods). If a flood event has depth $d_i$ with return period of $r_i$ this implies that the probability of a flood
event with depth greater than $d_i$ occurring in any one year is $1 / r_i$; this is the _exceedance probability_.

Aqueduct Floods is based on Global Flood Risk with IMAGE Scenarios (GLOFRIS); see [here](https://www.wri.org/aqueduct/publications)
for more details.
";

/// Inundation depth colour scale shared by all WRI models.
pub(crate) fn wri_colormap() -> Colormap {
    Colormap::eight_bit("flare", 0.0, 2.0, "m")
}

fn description(intro: &str) -> String {
    format!("{intro}\n{AQUEDUCT_DESCRIPTION}{METHODOLOGY_DOC}")
}

fn rcp_scenarios() -> [ScenarioSpec; 2] {
    [
        ScenarioSpec::new("rcp4p5", FUTURE_YEARS),
        ScenarioSpec::new("rcp8p5", FUTURE_YEARS),
    ]
}

struct Riverine {
    id: &'static str,
    display_name: &'static str,
    intro: &'static str,
    source: Option<TileSource>,
    scenarios: Vec<ScenarioSpec>,
}

impl Riverine {
    fn into_template(self) -> InventoryResult<ResourceTemplate> {
        let mut map = MapInfo::new(
            wri_colormap(),
            NameTemplate::parse("inunriver_{scenario}_{id}_{year}_rp{return_period:05d}")?,
        );
        map.source = self.source;

        let mut template = ResourceTemplate::new(
            "RiverineInundation",
            PATH,
            self.id,
            self.display_name,
            "metres",
        )
        .with_description(description(self.intro))
        .with_array_name(NameTemplate::parse("inunriver_{scenario}_{id}_{year}")?)
        .with_map(map);
        template.scenarios = self.scenarios;
        Ok(template)
    }
}

pub fn wri_riverine_inundation_models() -> InventoryResult<Vec<ResourceTemplate>> {
    let [miroc_rcp4p5, miroc_rcp8p5] = rcp_scenarios();
    let miroc_rcp4p5 = miroc_rcp4p5.with_periods([
        Period::new(2030, "ht2kn3"),
        Period::new(2050, "1k4boi"),
        Period::new(2080, "3rok7b"),
    ]);

    let models = vec![
        Riverine {
            id: "000000000WATCH",
            display_name: "WRI/Baseline",
            intro: "World Resources Institute Aqueduct Floods baseline riverine model using historical data.",
            source: Some(TileSource::Mapbox),
            scenarios: vec![ScenarioSpec::new("historical", [1980])
                .with_periods([Period::new(1980, "gw4vgq")])],
        },
        Riverine {
            id: "00000NorESM1-M",
            display_name: "WRI/NorESM1-M",
            intro: "World Resources Institute Aqueduct Floods riverine model using GCM model from\nBjerknes Centre for Climate Research, Norwegian Meteorological Institute.",
            source: Some(TileSource::Mapbox),
            scenarios: rcp_scenarios().into(),
        },
        Riverine {
            id: "0000GFDL-ESM2M",
            display_name: "WRI/GFDL-ESM2M",
            intro: "World Resource Institute Aqueduct Floods riverine model using GCM model from\nGeophysical Fluid Dynamics Laboratory (NOAA).",
            source: None,
            scenarios: rcp_scenarios().into(),
        },
        Riverine {
            id: "0000HadGEM2-ES",
            display_name: "WRI/HadGEM2-ES",
            intro: "World Resource Institute Aqueduct Floods riverine model using GCM model:\nMet Office Hadley Centre.",
            source: Some(TileSource::Mapbox),
            scenarios: rcp_scenarios().into(),
        },
        Riverine {
            id: "00IPSL-CM5A-LR",
            display_name: "WRI/IPSL-CM5A-LR",
            intro: "World Resource Institute Aqueduct Floods riverine model using GCM model from\nInstitut Pierre Simon Laplace",
            source: Some(TileSource::Mapbox),
            scenarios: rcp_scenarios().into(),
        },
        Riverine {
            id: "MIROC-ESM-CHEM",
            display_name: "WRI/MIROC-ESM-CHEM",
            intro: "World Resource Institute Aqueduct Floods riverine model using\n GCM model from Atmosphere and Ocean Research Institute\n (The University of Tokyo), National Institute for Environmental Studies, and Japan Agency\n for Marine-Earth Science and Technology.",
            source: Some(TileSource::Mapbox),
            scenarios: vec![miroc_rcp4p5, miroc_rcp8p5],
        },
    ];

    models.into_iter().map(Riverine::into_template).collect()
}

struct Coastal {
    id: &'static str,
    display_name: &'static str,
    intro: &'static str,
    array_name: &'static str,
    map_array_name: &'static str,
    historical: bool,
}

impl Coastal {
    fn into_template(self) -> InventoryResult<ResourceTemplate> {
        let mut template = ResourceTemplate::new(
            "CoastalInundation",
            PATH,
            self.id,
            self.display_name,
            "metres",
        )
        .with_description(description(self.intro))
        .with_array_name(NameTemplate::parse(self.array_name)?)
        .with_map(
            MapInfo::new(wri_colormap(), NameTemplate::parse(self.map_array_name)?)
                .with_source(TileSource::Mapbox),
        );
        template.scenarios = if self.historical {
            vec![ScenarioSpec::new("historical", [1980])]
        } else {
            rcp_scenarios().into()
        };
        Ok(template)
    }
}

pub fn wri_coastal_inundation_models() -> InventoryResult<Vec<ResourceTemplate>> {
    let models = vec![
        Coastal {
            id: "nosub",
            display_name: "WRI/Baseline no subsidence",
            intro: "World Resources Institute Aqueduct Floods baseline coastal model using historical data. Model excludes subsidence.",
            array_name: "inuncoast_historical_nosub_hist_0",
            map_array_name: "inuncoast_historical_nosub_hist_rp{return_period:04d}_0",
            historical: true,
        },
        Coastal {
            id: "nosub/95",
            display_name: "WRI/95% no subsidence",
            intro: "World Resource Institute Aqueduct Floods coastal model, excluding subsidence; 95th percentile sea level rise.",
            array_name: "inuncoast_{scenario}_nosub_{year}_0",
            map_array_name: "inuncoast_{scenario}_nosub_{year}_rp{return_period:04d}_0",
            historical: false,
        },
        Coastal {
            id: "nosub/5",
            display_name: "WRI/5% no subsidence",
            intro: "World Resource Institute Aqueduct Floods coastal model, excluding subsidence; 5th percentile sea level rise.",
            array_name: "inuncoast_{scenario}_nosub_{year}_0_perc_05",
            map_array_name: "inuncoast_{scenario}_nosub_{year}_rp{return_period:04d}_0_perc_05",
            historical: false,
        },
        Coastal {
            id: "nosub/50",
            display_name: "WRI/50% no subsidence",
            intro: "World Resource Institute Aqueduct Floods model, excluding subsidence; 50th percentile sea level rise.",
            array_name: "inuncoast_{scenario}_nosub_{year}_0_perc_50",
            map_array_name: "inuncoast_{scenario}_nosub_{year}_rp{return_period:04d}_0_perc_50",
            historical: false,
        },
        Coastal {
            id: "wtsub",
            display_name: "WRI/Baseline with subsidence",
            intro: "World Resource Institute Aqueduct Floods model, including subsidence; baseline (based on historical data).",
            array_name: "inuncoast_historical_wtsub_hist_0",
            map_array_name: "inuncoast_historical_wtsub_hist_rp{return_period:04d}_0",
            historical: true,
        },
        Coastal {
            id: "wtsub/95",
            display_name: "WRI/95% with subsidence",
            intro: "World Resource Institute Aqueduct Floods model, including subsidence; 95th percentile sea level rise.",
            array_name: "inuncoast_{scenario}_wtsub_{year}_0",
            map_array_name: "inuncoast_{scenario}_wtsub_{year}_rp{return_period:04d}_0",
            historical: false,
        },
        Coastal {
            id: "wtsub/5",
            display_name: "WRI/5% with subsidence",
            intro: "World Resource Institute Aqueduct Floods model, including subsidence; 5th percentile sea level rise.",
            array_name: "inuncoast_{scenario}_wtsub_{year}_0_perc_05",
            map_array_name: "inuncoast_{scenario}_wtsub_{year}_rp{return_period:04d}_0_perc_05",
            historical: false,
        },
        Coastal {
            id: "wtsub/50",
            display_name: "WRI/50% with subsidence",
            intro: "World Resource Institute Aqueduct Floods model, including subsidence; 50th percentile sea level rise.",
            array_name: "inuncoast_{scenario}_wtsub_{year}_0_perc_50",
            map_array_name: "inuncoast_{scenario}_wtsub_{year}_rp{return_period:04d}_0_perc_50",
            historical: false,
        },
    ];

    models.into_iter().map(Coastal::into_template).collect()
}

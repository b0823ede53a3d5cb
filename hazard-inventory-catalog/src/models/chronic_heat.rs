//! OS-Climate chronic heat indicators inferred from CMIP6 data.

use hazard_inventory_core::errors::InventoryResult;
use hazard_inventory_core::resource::{MapInfo, ResourceTemplate, ScenarioSpec, TileSource};
use hazard_inventory_core::{Colormap, NameTemplate};

use super::METHODOLOGY_DOC;

const PATH: &str = "chronic_heat/osc/v1";

const DEGREE_DAYS_DESCRIPTION: &str = r"
Degree days indicators are calculated by integrating over time the absolute difference in temperature
of the medium over a reference temperature. The exact method of calculation may vary;
here the daily average temperature is used to calculate an annual indicator:
$$
I^\text{dd} = \sum_{i = 1}^{365} |  T^\text{avg}_i - T^\text{ref} | \nonumber
$$
$I^\text{dd}$ is the indicator, $T^\text{avg}$ is the daily average surface temperature
and $T^\text{ref}$ is the reference temperature of 32°C. The OS-Climate-generated indicators are inferred
from CMIP6 data, averaged over 6 models: ACCESS-CM2, CMCC-ESM2, CNRM-CM6-1, MPI-ESM1-2-LR, MIROC6 and NorESM2-MM.
The indicators are generated for periods: 'historical' (averaged over 1995-2014), 2030 (2021-2040), 2040 (2031-2050)
and 2050 (2041-2060).

Applications for indicators based on surface temperature degree days include models of:
- heating and cooling requirements
- labour loss caused by extreme heat
";

const WORK_LOSS_DESCRIPTION: &str = r"
The mean work loss indicator is calculated from the 'Wet Bulb Globe Temperature' (WBGT) indicator:
$$
I^\text{WBGT}_i = 0.567 \times T^\text{avg}_i + 0.393 \times P^\text{vapour}_i
$$
$I^\text{WBGT}_i$ is the WBGT indicator, $T^\text{avg}_i$ is the daily average surface temperature (in degress Celsius) on day index, $i$, and $P^\text{vapour}$
is the water vapour partial pressure (in kPa). $P^\text{vapour}$ is calculated from relative humidity $H_R$ via:
$$
P^\text{vapour}_i = \frac{H_R}{100} \times 6.105 \times \exp \left( \frac{17.27 + T^\text{avg}_i}{237.7 + T^\text{avg}_i} \right)
$$
The work ability indicator, $I^{\text{WA}}$ is finally calculated via:
$$
I^{\text{WA}}_i = 0.1 + 0.9 / \left( 1 + (I^\text{WBGT}_i / \alpha_1)^{\alpha_2} \right)
$$
An annual average work ability indicator, $I^{\text{WA}}$ is calculated via:
$$
I^{\text{WA}} = \frac{1}{365} \sum_{i = 1}^{365} I^{\text{WA}}_i
$$
The OS-Climate-generated indicators are inferred from CMIP6 data, averaged over 6 models: ACCESS-CM2, CMCC-ESM2, CNRM-CM6-1, MPI-ESM1-2-LR, MIROC6 and NorESM2-MM.
The indicators are generated for periods: 'historical' (averaged over 1995-2014), 2030 (2021-2040), 2040 (2031-2050) and 2050 (2041-2060).
";

/// Colour scale for annual degree days above 32°C.
pub(crate) fn degree_days_colormap() -> Colormap {
    Colormap::eight_bit("heating", 0.0, 3158.1914, "degree-days")
}

/// Colour scale for fractional work loss.
pub(crate) fn work_loss_colormap() -> Colormap {
    Colormap::eight_bit("heating", 0.0, 0.8, "fractional loss")
}

pub fn osc_chronic_heat_models() -> InventoryResult<Vec<ResourceTemplate>> {
    let degree_days = ResourceTemplate::new(
        "ChronicHeat",
        PATH,
        "mean_degree_days/above/32c",
        "Mean degree days above 32°C",
        "degree days",
    )
    .with_description(format!("{DEGREE_DAYS_DESCRIPTION}{METHODOLOGY_DOC}"))
    .with_array_name(NameTemplate::parse(
        "mean_degree_days_above_32c_{scenario}_{year}",
    )?)
    .with_map(
        MapInfo::new(
            degree_days_colormap(),
            NameTemplate::parse("mean_degree_days_above_32c_{scenario}_{year}")?,
        )
        .with_source(TileSource::Mapbox),
    )
    .with_scenario(ScenarioSpec::new("ssp585", [2030, 2040, 2050]))
    .with_scenario(ScenarioSpec::new("historical", [1980]));

    let work_loss = ResourceTemplate::new(
        "ChronicHeat",
        PATH,
        "mean_work_loss/{intensity}",
        "Mean work loss ({intensity} intensity)",
        "fractional loss",
    )
    .with_parameter("intensity", ["high", "medium", "low"])
    .with_description(format!("{WORK_LOSS_DESCRIPTION}{METHODOLOGY_DOC}"))
    .with_array_name(NameTemplate::parse(
        "mean_work_loss_{intensity}_{scenario}_{year}",
    )?)
    .with_map(
        MapInfo::new(
            work_loss_colormap(),
            NameTemplate::parse("mean_work_loss_{intensity}_{scenario}_{year}_map")?,
        )
        .with_source(TileSource::Array),
    )
    .with_scenario(ScenarioSpec::new("ssp585", [2030, 2040, 2050]))
    .with_scenario(ScenarioSpec::new("ssp245", [2030, 2040, 2050]))
    .with_scenario(ScenarioSpec::new("historical", [2010]));

    Ok(vec![degree_days, work_loss])
}

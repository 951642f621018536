//! Static table of EIA natural-gas endpoints.
//!
//! Each entry ties a stable model id (what the provider registers) to a router
//! group and command name (what the router exposes as a path) and to the EIA
//! route it reads from.

use crate::data::DataRoute;
use crate::query::NATURAL_GAS_FACETS;

/// Granularity an endpoint publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    /// Monthly and annual series.
    Any,
    /// Annual series only; monthly requests are downgraded.
    AnnualOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub model: &'static str,
    pub group: &'static str,
    pub command: &'static str,
    pub route: DataRoute,
    pub granularity: Granularity,
    pub facets: &'static [&'static str],
    pub description: &'static str,
}

/// Router groups under `/natural_gas`, in display order.
pub const GROUPS: [&str; 7] = [
    "consumption",
    "exploration_and_reserves",
    "imports_and_exports",
    "price",
    "production",
    "storage",
    "summary",
];

const FACETS: &[&str] = &NATURAL_GAS_FACETS;

const fn gas(
    model: &'static str,
    group: &'static str,
    command: &'static str,
    route: (&'static str, &'static str),
    granularity: Granularity,
    description: &'static str,
) -> Endpoint {
    Endpoint {
        model,
        group,
        command,
        route: DataRoute {
            api: "natural-gas",
            route1: route.0,
            route2: Some(route.1),
            version: 2,
        },
        granularity,
        facets: FACETS,
        description,
    }
}

use Granularity::{AnnualOnly, Any};

pub static ENDPOINTS: &[Endpoint] = &[
    // consumption
    gas("ConsumptionByEndUse", "consumption", "end_use", ("cons", "sum"), Any,
        "Natural gas consumption by end use."),
    gas("ConsumptionNumberOfConsumers", "consumption", "number_of_consumers", ("cons", "num"), AnnualOnly,
        "Number of natural gas consumers."),
    gas("ConsumptionShareOfGasDelivered", "consumption", "share_of_gas_delivered", ("cons", "pns"), AnnualOnly,
        "Percent of natural gas delivered to consumers for the account of others."),
    gas("ConsumptionAccountOfOthers", "consumption", "account_of_others", ("cons", "acct"), AnnualOnly,
        "Natural gas deliveries for the account of others."),
    gas("ConsumptionHeatContent", "consumption", "heat_content", ("cons", "heat"), Any,
        "Heat content of natural gas consumed."),
    // exploration and reserves
    gas("EnRSummary", "exploration_and_reserves", "summary", ("enr", "sum"), AnnualOnly,
        "Natural gas reserves summary as of December 31."),
    gas("EnRCrudeOilPlusLeaseCondensate", "exploration_and_reserves", "crude_plus_lease", ("enr", "cplc"), AnnualOnly,
        "Crude oil plus lease condensate proved reserves."),
    gas("EnRDryNaturalGasProvedReserves", "exploration_and_reserves", "dry_natural_gas", ("enr", "dry"), AnnualOnly,
        "Dry natural gas proved reserves."),
    gas("EnRNaturalGasProvedReservesWetAfterLeaseSeparation", "exploration_and_reserves", "wals", ("enr", "wals"), AnnualOnly,
        "Natural gas proved reserves, wet after lease separation."),
    gas("EnRNonassociatedNaturalGasProvedReservesWetAfterLeaseSeparation", "exploration_and_reserves", "wals_na", ("enr", "nang"), AnnualOnly,
        "Nonassociated natural gas proved reserves, wet after lease separation."),
    gas("EnRAssociatedDissolvedNaturalGasProvedReservesWetAfterLeaseSeparation", "exploration_and_reserves", "wals_ad", ("enr", "ngad"), AnnualOnly,
        "Associated-dissolved natural gas proved reserves, wet after lease separation."),
    gas("EnRNaturalGasLiquidsProvedReserves", "exploration_and_reserves", "liquids", ("enr", "ngl"), AnnualOnly,
        "Natural gas liquids proved reserves."),
    gas("EnREstimatedNaturalGasPlantLiquidsContainedInTotalNaturalGasProvedReserves", "exploration_and_reserves", "plant_liquids_in_total", ("enr", "ngpl"), AnnualOnly,
        "Estimated natural gas plant liquids contained in total natural gas proved reserves."),
    gas("EnRLeaseCondensate", "exploration_and_reserves", "lease_condensate", ("enr", "lc"), AnnualOnly,
        "Lease condensate proved reserves."),
    gas("EnRCoalbedMethane", "exploration_and_reserves", "coalbed_methane", ("enr", "coalbed"), AnnualOnly,
        "Coalbed methane proved reserves."),
    gas("EnRShaleGas", "exploration_and_reserves", "shale_gas", ("enr", "shalegas"), AnnualOnly,
        "Shale gas proved reserves."),
    gas("EnRFederalOffshoreGulfOfMexicoProvedReserves", "exploration_and_reserves", "deep_gom", ("enr", "deep"), AnnualOnly,
        "Federal offshore Gulf of Mexico proved reserves by water depth."),
    gas("EnRProvedNonproducingReserves", "exploration_and_reserves", "nonproducing_reserves", ("enr", "nprod"), AnnualOnly,
        "Proved nonproducing reserves."),
    gas("EnRCrudeOilAndNaturalGasDrillingActivity", "exploration_and_reserves", "drilling_activity", ("enr", "drill"), Any,
        "Crude oil and natural gas drilling activity."),
    gas("EnRCrudeOilAndNaturalGasExploratoryAndDevelopmentWells", "exploration_and_reserves", "well_count", ("enr", "wellend"), AnnualOnly,
        "Exploratory and development wells drilled."),
    gas("EnRMaximumUSActiveSeismicCrewCounts", "exploration_and_reserves", "seismic_crew_counts", ("enr", "seis"), Any,
        "Maximum U.S. active seismic crew counts."),
    gas("EnRFootageDrilledForCrudeOilAndNaturalGasWells", "exploration_and_reserves", "well_footage_drilled", ("enr", "wellfoot"), AnnualOnly,
        "Footage drilled for crude oil and natural gas wells."),
    gas("EnRAverageDepthOfCrudeOilAndNaturalGasWells", "exploration_and_reserves", "well_average_depth", ("enr", "welldep"), AnnualOnly,
        "Average depth of crude oil and natural gas wells."),
    gas("EnRCostsOfCrudeOilAndNaturalGasWellsDrilled", "exploration_and_reserves", "well_costs_drilled", ("enr", "wellcost"), AnnualOnly,
        "Costs of crude oil and natural gas wells drilled."),
    // imports and exports
    gas("InEImportsByCountry", "imports_and_exports", "imports", ("move", "impc"), Any,
        "U.S. natural gas imports by country."),
    gas("InEExportsByCountry", "imports_and_exports", "exports", ("move", "expc"), Any,
        "U.S. natural gas exports and re-exports by country."),
    gas("InEImportsExportsByState", "imports_and_exports", "state", ("move", "state"), Any,
        "U.S. natural gas imports and exports by state."),
    gas("InEImportsByPointOfEntry", "imports_and_exports", "imports_by_poe", ("move", "poe1"), Any,
        "U.S. natural gas imports by point of entry."),
    gas("InEExportsByPointOfExit", "imports_and_exports", "exports_by_poe", ("move", "poe2"), Any,
        "U.S. natural gas exports by point of exit."),
    gas("InEInternationalInterstateMovementsByState", "imports_and_exports", "international_and_interstate", ("move", "ist"), AnnualOnly,
        "International and interstate movements of natural gas by state."),
    // price
    gas("PriceSummary", "price", "summary", ("pri", "sum"), Any,
        "Natural gas prices."),
    gas("PriceFutures", "price", "futures", ("pri", "fut"), Any,
        "Natural gas spot and futures prices (NYMEX)."),
    gas("PriceResidentialCommercial", "price", "residential_commercial", ("pri", "rescom"), Any,
        "Average price of natural gas delivered to residential and commercial consumers by local distribution and marketers."),
    // production
    gas("ProductionProducingOilWells", "production", "oil_wells", ("prod", "oilwells"), AnnualOnly,
        "Natural gas gross withdrawals from producing oil wells."),
    gas("ProductionAndGrossWithdrawalsGross", "production", "withdrawals_and_production", ("prod", "sum"), Any,
        "Natural gas gross withdrawals and production."),
    gas("ProductionWellheadValueAndMarketed", "production", "value_and_marketed_production", ("prod", "whv"), AnnualOnly,
        "Natural gas wellhead value and marketed production."),
    gas("ProductionOffshoreGrossWithdrawals", "production", "offshore_withdrawals", ("prod", "off"), AnnualOnly,
        "Offshore natural gas gross withdrawals."),
    gas("ProductionGulfOfMexicoFederalOffshore", "production", "gom_federal_offshore", ("prod", "deep"), Any,
        "Gulf of Mexico federal offshore production by water depth."),
    gas("ProductionNaturalGasPlantLiquids", "production", "plant_liquids", ("prod", "ngpl"), Any,
        "Natural gas plant liquids production."),
    gas("ProductionLeaseCondensate", "production", "lease_condensate", ("prod", "lc"), AnnualOnly,
        "Lease condensate production."),
    gas("ProductionCoalbedMethane", "production", "coalbed_methane", ("prod", "coalbed"), AnnualOnly,
        "Coalbed methane production."),
    gas("ProductionShaleGas", "production", "shale_gas", ("prod", "shalegas"), AnnualOnly,
        "Shale gas production."),
    gas("ProductionSupplementalGasSupplies", "production", "supplemental_gas", ("prod", "ss"), Any,
        "Supplemental supplies of natural gas."),
    gas("ProductionProducingGasWells", "production", "gas_wells", ("prod", "wells"), AnnualOnly,
        "Number of producing gas wells."),
    gas("ProductionNaturalGasPlantProcessing", "production", "plant_processing", ("prod", "pp"), AnnualOnly,
        "Natural gas plant processing."),
    // storage
    gas("StorageUndergroundNaturalGasStorageByAllOperators", "storage", "underground_all", ("stor", "sum"), Any,
        "Underground natural gas storage, all operators."),
    gas("StorageUndergroundNaturalGasStorageByStorageType", "storage", "underground_type", ("stor", "type"), Any,
        "Underground natural gas storage by storage type."),
    gas("StorageLiquefiedNaturalGasAdditionsToAndWithdrawalsFromStorage", "storage", "lng_additions_withdrawals", ("stor", "lng"), AnnualOnly,
        "Liquefied natural gas additions to and withdrawals from storage."),
    gas("StorageUndergroundNaturalGasStorageCapacity", "storage", "underground_capacity", ("stor", "cap"), Any,
        "Underground natural gas storage capacity."),
    // summary
    gas("SummarySupplyAndDisposition", "summary", "supply_and_disposition", ("sum", "snd"), AnnualOnly,
        "Natural gas supply and disposition."),
    gas("Summary", "summary", "summary", ("sum", "lsum"), Any,
        "Natural gas summary."),
    gas("SummarySupplyAndDispositionBalance", "summary", "monthly_supply_and_disposition", ("sum", "sndm"), Any,
        "Monthly supply and disposition balance."),
];

pub fn by_model(model: &str) -> Option<&'static Endpoint> {
    ENDPOINTS.iter().find(|e| e.model == model)
}

pub fn in_group(group: &str) -> impl Iterator<Item = &'static Endpoint> + '_ {
    ENDPOINTS.iter().filter(move |e| e.group == group)
}

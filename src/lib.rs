pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::QuoteJobConfig};
pub use core::aggregator::{
    container_services_total, seafreight_line_total, sum_miscs, sum_seafreights,
};
pub use core::comparator::{best_index, best_index_sentinel};
pub use core::comparison::{compare_options, resolve_port};
pub use core::distance::haversine_km;
pub use core::port_matcher::{
    find_best_port, nearest_ports, normalize_port_name, rank_by_closeness, sort_by_closeness,
};
pub use core::{engine::QuoteEngine, pipeline::ComparisonPipeline};
pub use domain::model::{Coordinate, Location, OptionSlots, Port, PricingOption};
pub use domain::report::{ComparisonReport, Dimension, OptionTotals};
pub use utils::error::{QuoteError, Result};

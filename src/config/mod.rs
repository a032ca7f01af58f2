//! Configuration for chargesite
//!
//! Settings live in an optional `.chargesite.toml`. Every section and field
//! has a default, so an empty or missing file yields the built-in behavior.

mod core;
mod loader;
mod weights;

pub use self::core::{
    default_growth_rate, default_years, ChargesiteConfig, RoiConfig, ValidationConfig,
};
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME, DEFAULT_CONFIG,
};
pub use weights::{
    default_competitor_weight, default_demographic_weight, default_pedestrian_weight,
    default_traffic_weight, WeightSet,
};

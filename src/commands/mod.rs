//! CLI command implementations for chargesite.
//!
//! Each command turns parsed arguments plus the loaded configuration into a
//! [`Report`](crate::io::Report); rendering is left to the caller.
//!
//! Available commands:
//! - **location**: Score a candidate site from 0 to 100
//! - **demographics**: Score the surrounding demographics from 0 to 1
//! - **roi**: Project cumulative cash flow and ROI
//! - **city**: Three-year outlook for a station in a reference city
//! - **init**: Write a default configuration file

pub mod init;
pub mod project;
pub mod score;

pub use init::{init_config, init_config_in};
pub use project::{
    handle_city, handle_roi, CityProjectionConfig, ProjectRoiConfig, SiteLocation,
};
pub use score::{handle_demographics, handle_location, DemographicsConfig, LocationConfig};

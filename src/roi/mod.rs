//! Financial projections for a charging station.
//!
//! - [`projection`]: per-station cash flow and ROI from usage and pricing
//! - [`city`]: three-year revenue/cost outlook from city-level signals

pub mod city;
pub mod projection;

pub use city::{project_city, CityProjection, PROJECTION_YEARS};
pub use projection::{
    project_roi, project_roi_with_growth, InvestmentInputs, ProjectionResult,
    DEFAULT_GROWTH_RATE, DEFAULT_YEARS,
};

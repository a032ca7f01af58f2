//! Site scoring and financial projection for EV charging stations.
//!
//! ```rust
//! use chargesite::{project_roi, score_demographics, score_location, AgeDistribution};
//!
//! let ages = AgeDistribution::from_pairs([("25-40", 0.4), ("41-55", 0.3)])?;
//! let demographic = score_demographics(1_200_000, 95_000.0, 0.06, &ages);
//! let score = score_location(0.7, 0.4, 1.5, demographic, None);
//! assert!((0.0..=100.0).contains(&score));
//!
//! let projection = project_roi(250_000.0, 40.0, 15.0, 60_000.0, 5)?;
//! assert_eq!(projection.cash_flows.len(), 5);
//! # Ok::<(), chargesite::Error>(())
//! ```

pub mod cities;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod io;
pub mod roi;
pub mod scoring;
pub mod validation;

// Re-export commonly used types
pub use crate::cities::{find_city, nearest_city, CityProfile, CITIES};
pub use crate::config::{ChargesiteConfig, WeightSet};
pub use crate::error::{Error, Result};
pub use crate::roi::{
    project_city, project_roi, project_roi_with_growth, CityProjection, InvestmentInputs,
    ProjectionResult,
};
pub use crate::scoring::{
    score_demographics, score_location, AgeBracket, AgeDistribution, DemographicProfile,
    SiteSignals,
};

//! Site scoring.
//!
//! Raw signals are rescaled by the [`normalizer`], demographics are folded
//! into a single score by [`demographics`], and [`location`] combines both
//! with traffic signals into a 0-100 location score.

pub mod demographics;
pub mod location;
pub mod normalizer;

pub use demographics::{score_demographics, AgeBracket, AgeDistribution, DemographicProfile};
pub use location::{score_location, SiteSignals};
pub use normalizer::{
    clamp_unit, normalize_competitor_distance, normalize_income, COMPETITOR_RADIUS_KM,
};

//! Location suitability scoring.

use super::normalizer::normalize_competitor_distance;
use crate::config::WeightSet;
use serde::{Deserialize, Serialize};

/// Per-site signals feeding the location score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiteSignals {
    /// Vehicle traffic density, normalized to [0.0, 1.0]
    pub traffic_density: f64,
    /// Pedestrian traffic, normalized to [0.0, 1.0]
    pub pedestrian_traffic: f64,
    /// Distance to the nearest competing station in km
    pub competitor_distance: f64,
    /// Output of [`super::score_demographics`], in [0.0, 1.0]
    pub demographic_score: f64,
}

impl SiteSignals {
    pub fn score(&self, weights: Option<WeightSet>) -> f64 {
        score_location(
            self.traffic_density,
            self.pedestrian_traffic,
            self.competitor_distance,
            self.demographic_score,
            weights,
        )
    }
}

/// Score a site from 0 to 100.
///
/// `None` uses [`WeightSet::DEFAULT`]. Any weights are accepted; the result
/// stays within [0, 100] only when the weights sum to 1.0 and every factor
/// is in [0.0, 1.0].
pub fn score_location(
    traffic_density: f64,
    pedestrian_traffic: f64,
    competitor_distance: f64,
    demographic_score: f64,
    weights: Option<WeightSet>,
) -> f64 {
    let weights = weights.unwrap_or(WeightSet::DEFAULT);
    let competitor = normalize_competitor_distance(competitor_distance);

    let score = weights.traffic * traffic_density
        + weights.pedestrian * pedestrian_traffic
        + weights.competitor * competitor
        + weights.demographic * demographic_score;

    score * 100.0
}

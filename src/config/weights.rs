//! Location scoring weights
//!
//! The four factors of the location score each carry a weight. The score's
//! 0-100 range only holds when the weights sum to 1.0; the scorer itself
//! accepts any weights, while the config loader enforces the sum.

use serde::{Deserialize, Serialize};

const SUM_TOLERANCE: f64 = 0.001;

/// Location scoring weights configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeightSet {
    /// Weight for vehicle traffic density (0.0-1.0)
    #[serde(default = "default_traffic_weight")]
    pub traffic: f64,

    /// Weight for pedestrian traffic (0.0-1.0)
    #[serde(default = "default_pedestrian_weight")]
    pub pedestrian: f64,

    /// Weight for distance to the nearest competitor (0.0-1.0)
    #[serde(default = "default_competitor_weight")]
    pub competitor: f64,

    /// Weight for the demographic score (0.0-1.0)
    #[serde(default = "default_demographic_weight")]
    pub demographic: f64,
}

impl WeightSet {
    pub const DEFAULT: WeightSet = WeightSet {
        traffic: 0.35,
        pedestrian: 0.25,
        competitor: 0.20,
        demographic: 0.20,
    };

    pub fn new(traffic: f64, pedestrian: f64, competitor: f64, demographic: f64) -> Self {
        Self {
            traffic,
            pedestrian,
            competitor,
            demographic,
        }
    }

    pub fn sum(&self) -> f64 {
        self.traffic + self.pedestrian + self.competitor + self.demographic
    }

    // Pure function: Check if a weight is in valid range
    pub fn is_valid_weight(weight: f64) -> bool {
        (0.0..=1.0).contains(&weight)
    }

    // Pure function: Validate a single weight with name
    pub fn validate_weight(weight: f64, name: &str) -> Result<(), String> {
        if Self::is_valid_weight(weight) {
            Ok(())
        } else {
            Err(format!("{} weight must be between 0.0 and 1.0", name))
        }
    }

    // Pure function: Collect all weight validations
    pub fn collect_weight_validations(&self) -> Vec<Result<(), String>> {
        vec![
            Self::validate_weight(self.traffic, "Traffic"),
            Self::validate_weight(self.pedestrian, "Pedestrian"),
            Self::validate_weight(self.competitor, "Competitor"),
            Self::validate_weight(self.demographic, "Demographic"),
        ]
    }

    /// Validate each weight and that the weights sum to 1.0 (with small
    /// tolerance for floating point)
    pub fn validate(&self) -> Result<(), String> {
        for validation in self.collect_weight_validations() {
            validation?;
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(format!(
                "Location weights must sum to 1.0, but sum to {:.3}",
                sum
            ));
        }

        Ok(())
    }

    /// Rescale weights so they sum to exactly 1.0. A non-positive sum
    /// leaves the weights untouched.
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum > 0.0 {
            self.traffic /= sum;
            self.pedestrian /= sum;
            self.competitor /= sum;
            self.demographic /= sum;
        }
    }
}

impl Default for WeightSet {
    fn default() -> Self {
        Self::DEFAULT
    }
}

pub fn default_traffic_weight() -> f64 {
    WeightSet::DEFAULT.traffic
}
pub fn default_pedestrian_weight() -> f64 {
    WeightSet::DEFAULT.pedestrian
}
pub fn default_competitor_weight() -> f64 {
    WeightSet::DEFAULT.competitor
}
pub fn default_demographic_weight() -> f64 {
    WeightSet::DEFAULT.demographic
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_are_valid() {
        assert!(WeightSet::default().validate().is_ok());
        assert!((WeightSet::DEFAULT.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_weight_is_named() {
        let weights = WeightSet::new(1.2, 0.0, 0.0, -0.2);
        assert_eq!(
            weights.validate().unwrap_err(),
            "Traffic weight must be between 0.0 and 1.0"
        );
    }

    #[test]
    fn bad_sum_is_rejected() {
        let weights = WeightSet::new(0.5, 0.5, 0.5, 0.5);
        let err = weights.validate().unwrap_err();
        assert!(err.contains("sum to 2.000"), "{err}");
    }

    #[test]
    fn normalize_rescales_to_unit_sum() {
        let mut weights = WeightSet::new(0.5, 0.5, 0.5, 0.5);
        weights.normalize();
        assert_eq!(weights, WeightSet::new(0.25, 0.25, 0.25, 0.25));
    }

    #[test]
    fn normalize_leaves_zero_weights_alone() {
        let mut weights = WeightSet::new(0.0, 0.0, 0.0, 0.0);
        weights.normalize();
        assert_eq!(weights.sum(), 0.0);
    }

    #[test]
    fn partial_table_falls_back_per_field() {
        let weights: WeightSet = toml::from_str("traffic = 0.5").unwrap();
        assert_eq!(weights.traffic, 0.5);
        assert_eq!(weights.pedestrian, 0.25);
        assert_eq!(weights.demographic, 0.20);
    }
}

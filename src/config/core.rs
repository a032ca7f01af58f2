use serde::{Deserialize, Serialize};

use super::weights::WeightSet;
use crate::roi::{DEFAULT_GROWTH_RATE, DEFAULT_YEARS};

/// Root configuration structure for chargesite
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChargesiteConfig {
    /// Location scoring weights
    #[serde(default)]
    pub weights: Option<WeightSet>,

    /// ROI projection defaults
    #[serde(default)]
    pub roi: Option<RoiConfig>,

    /// Input validation policy
    #[serde(default)]
    pub validation: Option<ValidationConfig>,
}

/// ROI projection defaults
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoiConfig {
    /// Projection horizon in years
    #[serde(default = "default_years")]
    pub years: u32,

    /// Year-over-year growth of the base cash flow (0.10 = 10%)
    #[serde(default = "default_growth_rate")]
    pub growth_rate: f64,
}

impl Default for RoiConfig {
    fn default() -> Self {
        Self {
            years: default_years(),
            growth_rate: default_growth_rate(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationConfig {
    /// Reject out-of-range inputs instead of warning
    #[serde(default)]
    pub strict: bool,
}

pub fn default_years() -> u32 {
    DEFAULT_YEARS
}

pub fn default_growth_rate() -> f64 {
    DEFAULT_GROWTH_RATE
}

impl ChargesiteConfig {
    pub fn weights(&self) -> WeightSet {
        self.weights.unwrap_or_default()
    }

    pub fn roi(&self) -> RoiConfig {
        self.roi.unwrap_or_default()
    }

    pub fn strict(&self) -> bool {
        self.validation.is_some_and(|v| v.strict)
    }
}

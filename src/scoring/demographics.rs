//! Demographic scoring.
//!
//! Combines income, EV ownership and the age mix of the surrounding
//! population into a single score. With inputs in their documented ranges
//! the score lies in [0.0, 1.0]; out-of-range inputs are not rejected here
//! and propagate through the arithmetic (see [`crate::validation`]).

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const INCOME_WEIGHT: f64 = 0.4;
const EV_WEIGHT: f64 = 0.4;
const AGE_WEIGHT: f64 = 0.2;

/// Fixed set of age brackets used by the demographic score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeBracket {
    #[serde(rename = "18-24")]
    Young,
    #[serde(rename = "25-40")]
    Adult,
    #[serde(rename = "41-55")]
    MiddleAged,
    #[serde(rename = "55+")]
    Senior,
}

impl AgeBracket {
    pub const ALL: [AgeBracket; 4] = [
        AgeBracket::Young,
        AgeBracket::Adult,
        AgeBracket::MiddleAged,
        AgeBracket::Senior,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AgeBracket::Young => "18-24",
            AgeBracket::Adult => "25-40",
            AgeBracket::MiddleAged => "41-55",
            AgeBracket::Senior => "55+",
        }
    }

    /// Contribution of this bracket to the age score. 25-55 year olds are the
    /// core EV-owning market.
    pub fn weight(self) -> f64 {
        match self {
            AgeBracket::Young => 0.2,
            AgeBracket::Adult => 0.4,
            AgeBracket::MiddleAged => 0.3,
            AgeBracket::Senior => 0.1,
        }
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AgeBracket {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AgeBracket::ALL
            .into_iter()
            .find(|bracket| bracket.label() == s.trim())
            .ok_or_else(|| Error::UnknownAgeBracket(s.to_string()))
    }
}

/// Population fraction per age bracket.
///
/// Absent brackets count as 0.0. Fractions are expected to sum to at most 1
/// but this is not checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgeDistribution {
    #[serde(rename = "18-24", default)]
    pub young: f64,
    #[serde(rename = "25-40", default)]
    pub adult: f64,
    #[serde(rename = "41-55", default)]
    pub middle_aged: f64,
    #[serde(rename = "55+", default)]
    pub senior: f64,
}

impl AgeDistribution {
    pub fn fraction(&self, bracket: AgeBracket) -> f64 {
        match bracket {
            AgeBracket::Young => self.young,
            AgeBracket::Adult => self.adult,
            AgeBracket::MiddleAged => self.middle_aged,
            AgeBracket::Senior => self.senior,
        }
    }

    pub fn set(&mut self, bracket: AgeBracket, fraction: f64) {
        let slot = match bracket {
            AgeBracket::Young => &mut self.young,
            AgeBracket::Adult => &mut self.adult,
            AgeBracket::MiddleAged => &mut self.middle_aged,
            AgeBracket::Senior => &mut self.senior,
        };
        *slot = fraction;
    }

    /// Build from `(label, fraction)` pairs, rejecting unknown labels.
    /// A label given twice keeps the last fraction.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        pairs.into_iter().try_fold(Self::default(), |mut dist, (label, fraction)| {
            dist.set(label.parse()?, fraction);
            Ok(dist)
        })
    }

    /// Weighted sum of bracket fractions, heaviest bracket first.
    pub fn age_score(&self) -> f64 {
        self.adult * AgeBracket::Adult.weight()
            + self.middle_aged * AgeBracket::MiddleAged.weight()
            + self.young * AgeBracket::Young.weight()
            + self.senior * AgeBracket::Senior.weight()
    }
}

/// Demographic inputs for a single site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DemographicProfile {
    /// Carried for reporting; does not affect the score.
    #[serde(default)]
    pub population: u64,
    pub avg_income: f64,
    /// Fraction of residents owning an EV, in [0.0, 1.0].
    pub ev_ownership: f64,
    #[serde(default)]
    pub age_distribution: AgeDistribution,
}

impl DemographicProfile {
    pub fn score(&self) -> f64 {
        score_demographics(
            self.population,
            self.avg_income,
            self.ev_ownership,
            &self.age_distribution,
        )
    }
}

/// Score the demographics around a site.
///
/// `population` is accepted for interface parity with the data source and is
/// not used.
pub fn score_demographics(
    _population: u64,
    avg_income: f64,
    ev_ownership: f64,
    age_distribution: &AgeDistribution,
) -> f64 {
    let income_score = super::normalizer::normalize_income(avg_income);
    let ev_score = ev_ownership;
    let age_score = age_distribution.age_score();

    log::trace!(
        "demographics: income={income_score:.3} ev={ev_score:.3} age={age_score:.3}"
    );

    INCOME_WEIGHT * income_score + EV_WEIGHT * ev_score + AGE_WEIGHT * age_score
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn floor_income_no_ev_no_ages_scores_zero() {
        let score = score_demographics(0, 50_000.0, 0.0, &AgeDistribution::default());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn saturated_income_and_ev_with_core_age_group() {
        let ages = AgeDistribution::from_pairs([("25-40", 1.0)]).unwrap();
        let score = score_demographics(1_000, 200_000.0, 1.0, &ages);
        assert!(approx_eq(score, 0.88), "got {score}");
    }

    #[test]
    fn population_does_not_affect_score() {
        let ages = AgeDistribution::default();
        assert_eq!(
            score_demographics(1, 90_000.0, 0.1, &ages),
            score_demographics(15_000_000, 90_000.0, 0.1, &ages)
        );
    }

    #[test]
    fn age_score_uses_bracket_weights() {
        let ages = AgeDistribution {
            young: 0.1,
            adult: 0.4,
            middle_aged: 0.3,
            senior: 0.2,
        };
        assert!(approx_eq(ages.age_score(), 0.02 + 0.16 + 0.09 + 0.02));
    }

    #[test]
    fn age_score_sums_heaviest_bracket_first() {
        let ages = AgeDistribution {
            young: 0.1,
            adult: 0.4,
            middle_aged: 0.3,
            senior: 0.2,
        };
        assert_eq!(ages.age_score(), 0.4 * 0.4 + 0.3 * 0.3 + 0.1 * 0.2 + 0.2 * 0.1);
    }

    #[test]
    fn unknown_bracket_label_is_rejected() {
        let err = AgeDistribution::from_pairs([("65+", 0.3)]).unwrap_err();
        assert!(matches!(err, Error::UnknownAgeBracket(label) if label == "65+"));
    }

    #[test]
    fn bracket_labels_round_trip_through_from_str() {
        for bracket in AgeBracket::ALL {
            assert_eq!(bracket.label().parse::<AgeBracket>().unwrap(), bracket);
        }
    }

    #[test]
    fn out_of_range_ownership_propagates() {
        let score = score_demographics(0, 50_000.0, 2.0, &AgeDistribution::default());
        assert!(approx_eq(score, 0.8));
        let score = score_demographics(0, 200_000.0, 2.0, &AgeDistribution::default());
        assert!(score > 1.0);
    }

    #[test]
    fn profile_score_matches_free_function() {
        let profile = DemographicProfile {
            population: 4_400_000,
            avg_income: 110_000.0,
            ev_ownership: 0.05,
            age_distribution: AgeDistribution::from_pairs([("25-40", 0.35), ("55+", 0.2)])
                .unwrap(),
        };
        assert_eq!(
            profile.score(),
            score_demographics(4_400_000, 110_000.0, 0.05, &profile.age_distribution)
        );
    }

    #[test]
    fn age_distribution_deserializes_from_labelled_map() {
        let dist: AgeDistribution =
            serde_json::from_str(r#"{"25-40": 0.5, "55+": 0.25}"#).unwrap();
        assert_eq!(dist.adult, 0.5);
        assert_eq!(dist.senior, 0.25);
        assert_eq!(dist.young, 0.0);

        let err = serde_json::from_str::<AgeDistribution>(r#"{"teens": 0.5}"#);
        assert!(err.is_err());
    }

    proptest! {
        /// Property: in-range inputs always produce a score in [0, 1].
        #[test]
        fn in_range_inputs_stay_in_unit_interval(
            income in 0.0f64..500_000.0,
            ev in 0.0f64..=1.0,
            young in 0.0f64..=0.25,
            adult in 0.0f64..=0.25,
            middle in 0.0f64..=0.25,
            senior in 0.0f64..=0.25,
        ) {
            let ages = AgeDistribution { young, adult, middle_aged: middle, senior };
            let score = score_demographics(0, income, ev, &ages);
            prop_assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
        }
    }
}

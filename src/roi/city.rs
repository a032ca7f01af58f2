//! Three-year revenue and cost projection driven by city-level signals.
//!
//! Revenue scales with the investment budget, the city's EV ownership and the
//! station's expected market share, then grows by the city's growth factor.
//! Costs are a fixed share of the budget with stepped yearly increases.

use crate::cities::{CityProfile, FALLBACK_GROWTH_FACTOR};
use crate::error::{Error, Result};
use serde::Serialize;

pub const PROJECTION_YEARS: usize = 3;

/// First-year revenue as a share of the investment budget
const BASE_REVENUE_SHARE: f64 = 0.4;
/// First-year operating cost as a share of the investment budget
const BASE_COST_SHARE: f64 = 0.2;
/// Ownership percentage that doubles baseline demand
const EV_OWNERSHIP_REFERENCE_PCT: f64 = 5.0;
const COST_ESCALATION: [f64; PROJECTION_YEARS] = [1.0, 1.1, 1.2];

const MIN_PAYBACK_YEARS: f64 = 1.0;
const MAX_PAYBACK_YEARS: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityProjection {
    pub city: Option<String>,
    pub growth_factor: f64,
    pub revenues: [i64; PROJECTION_YEARS],
    pub costs: [i64; PROJECTION_YEARS],
    /// Net return over the horizon as a percentage of total spend, one decimal
    pub roi: f64,
    /// Budget over first-year margin, bounded to 1-5 years
    pub payback_years: f64,
}

impl CityProjection {
    pub fn total_revenue(&self) -> i64 {
        self.revenues.iter().sum()
    }

    pub fn total_cost(&self) -> i64 {
        self.costs.iter().sum()
    }
}

/// Project revenues, costs, ROI and payback for a station in `city`.
///
/// `ev_ownership_pct` and `market_share_pct` are percentages (8.0 means 8%).
/// Without a city the fallback growth factor of 1.1 applies.
pub fn project_city(
    city: Option<&CityProfile>,
    ev_ownership_pct: f64,
    market_share_pct: f64,
    investment_budget: f64,
) -> Result<CityProjection> {
    let growth_factor = city.map_or(FALLBACK_GROWTH_FACTOR, |c| c.growth_factor);
    let ev_factor = ev_ownership_pct / EV_OWNERSHIP_REFERENCE_PCT;
    let market_share = market_share_pct / 100.0;

    let base_revenue = investment_budget * BASE_REVENUE_SHARE;
    let base_cost = investment_budget * BASE_COST_SHARE;

    let mut revenues = [0i64; PROJECTION_YEARS];
    let mut revenue = base_revenue * (1.0 + ev_factor) * market_share;
    for slot in revenues.iter_mut() {
        *slot = revenue.trunc() as i64;
        revenue *= growth_factor;
    }

    let costs = COST_ESCALATION.map(|step| (base_cost * step).trunc() as i64);

    let total_revenue: i64 = revenues.iter().sum();
    let total_cost = costs.iter().sum::<i64>() as f64 + investment_budget;
    if total_cost == 0.0 {
        return Err(Error::division_by_zero(
            "ROI is undefined when budget and costs are both zero",
        ));
    }
    let roi = round_to_tenth((total_revenue as f64 - total_cost) / total_cost * 100.0);

    let payback_years = payback_years(investment_budget, revenues[0] - costs[0]);

    log::debug!(
        "City projection ({}): growth={growth_factor}, revenues={revenues:?}, costs={costs:?}, roi={roi}%",
        city.map_or("unknown", |c| c.name)
    );

    Ok(CityProjection {
        city: city.map(|c| c.name.to_string()),
        growth_factor,
        revenues,
        costs,
        roi,
        payback_years,
    })
}

/// A first year that does not cover its costs never pays back within the
/// horizon, so it reports the upper bound.
fn payback_years(investment_budget: f64, first_year_margin: i64) -> f64 {
    if first_year_margin <= 0 {
        return MAX_PAYBACK_YEARS;
    }
    (investment_budget / first_year_margin as f64).clamp(MIN_PAYBACK_YEARS, MAX_PAYBACK_YEARS)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cities::find_city;
    use pretty_assertions::assert_eq;

    #[test]
    fn istanbul_projection() {
        let istanbul = find_city("istanbul").unwrap();
        let projection = project_city(Some(istanbul), 8.0, 20.0, 1_000_000.0).unwrap();

        assert_eq!(projection.revenues, [208_000, 291_200, 407_680]);
        assert_eq!(projection.costs, [200_000, 220_000, 240_000]);
        assert_eq!(projection.roi, -45.4);
        assert_eq!(projection.payback_years, 5.0);
        assert_eq!(projection.city.as_deref(), Some("İstanbul"));
    }

    #[test]
    fn strong_market_share_pays_back_inside_horizon() {
        let istanbul = find_city("istanbul").unwrap();
        let projection = project_city(Some(istanbul), 8.0, 40.0, 1_000_000.0).unwrap();

        assert_eq!(projection.revenues, [416_000, 582_400, 815_360]);
        assert_eq!(projection.roi, 9.3);
        assert!((projection.payback_years - 4.6296).abs() < 1e-3);
    }

    #[test]
    fn unknown_city_uses_fallback_growth() {
        let projection = project_city(None, 4.0, 40.0, 500_000.0).unwrap();

        assert_eq!(projection.growth_factor, FALLBACK_GROWTH_FACTOR);
        assert_eq!(projection.revenues, [144_000, 158_400, 174_240]);
        assert_eq!(projection.costs, [100_000, 110_000, 120_000]);
        assert_eq!(projection.roi, -42.6);
        assert_eq!(projection.city, None);
    }

    #[test]
    fn negative_first_year_margin_caps_payback() {
        let antalya = find_city("antalya").unwrap();
        let projection = project_city(Some(antalya), 3.0, 10.0, 1_000_000.0).unwrap();

        assert!(projection.revenues[0] < projection.costs[0]);
        assert_eq!(projection.payback_years, MAX_PAYBACK_YEARS);
        assert_eq!(projection.roi, -86.6);
    }

    #[test]
    fn zero_budget_is_a_division_error() {
        let err = project_city(None, 5.0, 20.0, 0.0).unwrap_err();
        assert!(matches!(err, Error::DivisionByZero { .. }));
    }

    #[test]
    fn totals_sum_each_year() {
        let projection = project_city(None, 4.0, 40.0, 500_000.0).unwrap();
        assert_eq!(projection.total_revenue(), 476_640);
        assert_eq!(projection.total_cost(), 330_000);
    }
}

//! Multi-year cash flow and ROI projection for a single station.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub const DAYS_PER_YEAR: f64 = 365.0;
pub const DEFAULT_YEARS: u32 = 5;
/// Year-over-year growth applied to the base cash flow.
pub const DEFAULT_GROWTH_RATE: f64 = 0.10;

/// Financial inputs for a projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentInputs {
    pub investment_cost: f64,
    pub daily_users: f64,
    /// Revenue per charging session
    pub charge_price: f64,
    /// Annual operating costs
    pub operating_costs: f64,
    #[serde(default = "default_years")]
    pub years: u32,
}

fn default_years() -> u32 {
    DEFAULT_YEARS
}

impl InvestmentInputs {
    pub fn project(&self) -> Result<ProjectionResult> {
        project_roi(
            self.investment_cost,
            self.daily_users,
            self.charge_price,
            self.operating_costs,
            self.years,
        )
    }

    pub fn project_with_growth(&self, growth_rate: f64) -> Result<ProjectionResult> {
        project_roi_with_growth(
            self.investment_cost,
            self.daily_users,
            self.charge_price,
            self.operating_costs,
            self.years,
            growth_rate,
        )
    }
}

/// Outcome of a projection. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Final cumulative cash flow as a percentage of the investment
    pub roi: f64,
    /// Cumulative cash position at the end of each year
    pub cash_flows: Vec<f64>,
    pub yearly_revenue: f64,
    /// Pre-growth operating margin
    pub yearly_cash_flow: f64,
}

impl ProjectionResult {
    pub fn final_cash_flow(&self) -> Option<f64> {
        self.cash_flows.last().copied()
    }

    /// First year (1-based) whose cumulative cash position is non-negative.
    pub fn break_even_year(&self) -> Option<usize> {
        self.cash_flows
            .iter()
            .position(|&cumulative| cumulative >= 0.0)
            .map(|index| index + 1)
    }

    pub fn is_profitable(&self) -> bool {
        self.roi > 0.0
    }
}

/// Project cumulative cash flow and ROI with the default 10% growth.
pub fn project_roi(
    investment_cost: f64,
    daily_users: f64,
    charge_price: f64,
    operating_costs: f64,
    years: u32,
) -> Result<ProjectionResult> {
    project_roi_with_growth(
        investment_cost,
        daily_users,
        charge_price,
        operating_costs,
        years,
        DEFAULT_GROWTH_RATE,
    )
}

/// Project cumulative cash flow and ROI.
///
/// Year `y` (0-based) contributes the base yearly cash flow scaled by
/// `(1 + growth_rate)^y`; growth compounds on the base, not on the previous
/// year's flow. There is no discounting. A zero investment cost is a
/// division error.
pub fn project_roi_with_growth(
    investment_cost: f64,
    daily_users: f64,
    charge_price: f64,
    operating_costs: f64,
    years: u32,
    growth_rate: f64,
) -> Result<ProjectionResult> {
    if investment_cost == 0.0 {
        return Err(Error::division_by_zero(
            "ROI is undefined for a zero investment cost",
        ));
    }

    let yearly_revenue = daily_users * DAYS_PER_YEAR * charge_price;
    let yearly_cash_flow = yearly_revenue - operating_costs;
    let growth = 1.0 + growth_rate;

    let cash_flows: Vec<f64> = (0..years)
        .scan(-investment_cost, |cumulative, year| {
            *cumulative += yearly_cash_flow * growth.powf(f64::from(year));
            Some(*cumulative)
        })
        .collect();

    let final_cumulative = cash_flows.last().copied().unwrap_or(-investment_cost);
    let roi = final_cumulative / investment_cost * 100.0;

    log::debug!(
        "Projected {} years: revenue/yr={:.2}, base cash flow/yr={:.2}, roi={:.2}%",
        years,
        yearly_revenue,
        yearly_cash_flow,
        roi
    );

    Ok(ProjectionResult {
        roi,
        cash_flows,
        yearly_revenue,
        yearly_cash_flow,
    })
}

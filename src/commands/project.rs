//! Financial projection commands.

use crate::cities::{find_city, nearest_city, CityProfile};
use crate::config::ChargesiteConfig;
use crate::io::Report;
use crate::roi::{project_city, InvestmentInputs};
use crate::validation;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct ProjectRoiConfig {
    pub investment_cost: f64,
    pub daily_users: f64,
    pub charge_price: f64,
    pub operating_costs: f64,
    pub years: Option<u32>,
    pub growth_rate: Option<f64>,
    pub strict: bool,
}

/// Where the site is: a named reference city, a coordinate, or neither.
#[derive(Debug, Clone, PartialEq)]
pub enum SiteLocation {
    Named(String),
    Coordinates { lat: f64, lon: f64 },
    Unknown,
}

#[derive(Debug, Clone)]
pub struct CityProjectionConfig {
    pub location: SiteLocation,
    pub budget: f64,
    pub market_share_pct: f64,
    pub ev_ownership_pct: Option<f64>,
    pub strict: bool,
}

pub fn handle_roi(config: ProjectRoiConfig, settings: &ChargesiteConfig) -> Result<Report> {
    let strict = config.strict || settings.strict();
    let defaults = settings.roi();

    let inputs = InvestmentInputs {
        investment_cost: config.investment_cost,
        daily_users: config.daily_users,
        charge_price: config.charge_price,
        operating_costs: config.operating_costs,
        years: config.years.unwrap_or(defaults.years),
    };
    let growth_rate = config.growth_rate.unwrap_or(defaults.growth_rate);

    let mut issues = validation::investment_issues(&inputs);
    issues.extend(validation::growth_rate_issues(growth_rate, "growth rate"));
    validation::enforce(issues, strict)?;

    let result = inputs
        .project_with_growth(growth_rate)
        .context("Failed to project ROI")?;
    log::info!("ROI over {} years: {:.2}%", inputs.years, result.roi);

    Ok(Report::Roi {
        inputs,
        growth_rate,
        result,
    })
}

// Resolve the reference city for a site; unknown names fall back to no city
// unless strict.
fn resolve_city(
    location: &SiteLocation,
    strict: bool,
) -> Result<Option<&'static CityProfile>> {
    match location {
        SiteLocation::Named(name) => match find_city(name) {
            Ok(city) => Ok(Some(city)),
            Err(e) if strict => Err(e.into()),
            Err(e) => {
                log::warn!("{}; using the default growth factor", e);
                Ok(None)
            }
        },
        SiteLocation::Coordinates { lat, lon } => {
            let city = nearest_city(*lat, *lon);
            log::info!("Nearest reference city to ({lat}, {lon}) is {}", city.name);
            Ok(Some(city))
        }
        SiteLocation::Unknown => Ok(None),
    }
}

pub fn handle_city(
    config: CityProjectionConfig,
    settings: &ChargesiteConfig,
) -> Result<Report> {
    let strict = config.strict || settings.strict();
    let city = resolve_city(&config.location, strict)?;

    let ev_ownership_pct = match (config.ev_ownership_pct, city) {
        (Some(pct), _) => pct,
        (None, Some(city)) => city.ev_ownership,
        (None, None) => {
            anyhow::bail!("--ev-ownership is required when the site is not in a reference city")
        }
    };

    let issues = validation::city_projection_issues(
        config.budget,
        ev_ownership_pct,
        config.market_share_pct,
    );
    validation::enforce(issues, strict)?;

    let projection = project_city(
        city,
        ev_ownership_pct,
        config.market_share_pct,
        config.budget,
    )
    .context("Failed to project city financials")?;

    Ok(Report::City {
        budget: config.budget,
        ev_ownership_pct,
        market_share_pct: config.market_share_pct,
        projection,
    })
}

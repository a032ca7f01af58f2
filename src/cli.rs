use crate::io::OutputFormat;
use crate::scoring::AgeBracket;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chargesite")]
#[command(about = "Location scoring and ROI projection for EV charging stations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to the nearest .chargesite.toml)
    #[arg(long, global = true, env = "CHARGESITE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a candidate site from 0 to 100
    #[command(allow_negative_numbers = true)]
    Location {
        /// Vehicle traffic density (0.0-1.0)
        #[arg(long)]
        traffic: f64,

        /// Pedestrian traffic (0.0-1.0)
        #[arg(long)]
        pedestrian: f64,

        /// Distance to the nearest competing station in km
        #[arg(long = "competitor-km")]
        competitor_km: f64,

        /// Demographic score (0.0-1.0), e.g. from the demographics command
        #[arg(long)]
        demographic: f64,

        /// Weights for traffic,pedestrian,competitor,demographic
        #[arg(long, value_delimiter = ',')]
        weights: Option<Vec<f64>>,

        /// Reject out-of-range inputs instead of warning
        #[arg(long)]
        strict: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Score the demographics around a site from 0 to 1
    #[command(allow_negative_numbers = true)]
    Demographics {
        /// Average income in currency units
        #[arg(long)]
        income: f64,

        /// EV ownership rate as a fraction (0.0-1.0)
        #[arg(long = "ev-ownership")]
        ev_ownership: f64,

        /// Population of the area (reported only)
        #[arg(long, default_value = "0")]
        population: u64,

        /// Age bracket share as LABEL=FRACTION (18-24, 25-40, 41-55, 55+)
        #[arg(long = "age", value_parser = parse_age_share)]
        ages: Vec<(AgeBracket, f64)>,

        /// Reject out-of-range inputs instead of warning
        #[arg(long)]
        strict: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Project cumulative cash flow and ROI for a station
    #[command(allow_negative_numbers = true)]
    Roi {
        /// Initial investment cost
        #[arg(long)]
        investment: f64,

        /// Expected charging sessions per day
        #[arg(long = "daily-users")]
        daily_users: f64,

        /// Revenue per charging session
        #[arg(long)]
        price: f64,

        /// Annual operating costs
        #[arg(long = "operating-costs")]
        operating_costs: f64,

        /// Projection horizon in years (default from config, else 5)
        #[arg(long)]
        years: Option<u32>,

        /// Yearly growth of the base cash flow, e.g. 0.1 for 10%
        #[arg(long = "growth-rate")]
        growth_rate: Option<f64>,

        /// Reject out-of-range inputs instead of warning
        #[arg(long)]
        strict: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Three-year revenue and cost outlook for a station in a reference city
    #[command(allow_negative_numbers = true)]
    City {
        /// Investment budget
        #[arg(long)]
        budget: f64,

        /// Expected market share in percent (0-100)
        #[arg(long = "market-share")]
        market_share: f64,

        /// Reference city name
        #[arg(long, conflicts_with_all = ["lat", "lon"])]
        city: Option<String>,

        /// Site latitude; the nearest reference city is used
        #[arg(long, requires = "lon")]
        lat: Option<f64>,

        /// Site longitude
        #[arg(long, requires = "lat")]
        lon: Option<f64>,

        /// EV ownership in percent (defaults to the city's figure)
        #[arg(long = "ev-ownership")]
        ev_ownership: Option<f64>,

        /// Reject out-of-range inputs instead of warning
        #[arg(long)]
        strict: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Write a default .chargesite.toml in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

/// Parse `LABEL=FRACTION`, e.g. `25-40=0.35`.
pub fn parse_age_share(s: &str) -> Result<(AgeBracket, f64), String> {
    let (label, fraction) = s
        .split_once('=')
        .ok_or_else(|| format!("expected LABEL=FRACTION, got '{s}'"))?;
    let bracket = label.parse::<AgeBracket>().map_err(|e| e.to_string())?;
    let fraction = fraction
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid fraction '{fraction}': {e}"))?;
    Ok((bracket, fraction))
}

use anyhow::Result;
use clap::Parser;
use chargesite::cli::{Cli, Commands};
use chargesite::commands::{
    self, CityProjectionConfig, DemographicsConfig, LocationConfig, ProjectRoiConfig,
    SiteLocation,
};
use chargesite::config::{self, ChargesiteConfig};
use chargesite::io::{create_writer, OutputFormat, Report};
use chargesite::scoring::SiteSignals;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity);
    if cli.plain {
        colored::control::set_override(false);
    }

    if let Commands::Init { force } = cli.command {
        let path = commands::init_config(force)?;
        println!("Created {} configuration file", path.display());
        return Ok(());
    }

    let settings = load_settings(cli.config.as_deref())?;
    let (report, format) = run_command(cli.command, &settings)?;
    emit(&report, format)
}

// Pure function to map -v count to a log level
fn level_for_verbosity(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

// Side effect: install the global logger. RUST_LOG overrides -v when set.
fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_for_verbosity(verbosity));
    builder.parse_default_env();
    builder.format_timestamp(None);
    builder.init();
}

fn load_settings(explicit: Option<&Path>) -> Result<ChargesiteConfig> {
    match explicit {
        Some(path) => Ok(config::load_config_from(path)?),
        None => Ok(config::load_config()),
    }
}

fn site_location(city: Option<String>, lat: Option<f64>, lon: Option<f64>) -> SiteLocation {
    match (city, lat, lon) {
        (Some(name), _, _) => SiteLocation::Named(name),
        (None, Some(lat), Some(lon)) => SiteLocation::Coordinates { lat, lon },
        _ => SiteLocation::Unknown,
    }
}

fn run_command(
    command: Commands,
    settings: &ChargesiteConfig,
) -> Result<(Report, OutputFormat)> {
    match command {
        Commands::Location {
            traffic,
            pedestrian,
            competitor_km,
            demographic,
            weights,
            strict,
            format,
        } => {
            let config = LocationConfig {
                signals: SiteSignals {
                    traffic_density: traffic,
                    pedestrian_traffic: pedestrian,
                    competitor_distance: competitor_km,
                    demographic_score: demographic,
                },
                weights,
                strict,
            };
            Ok((commands::handle_location(config, settings)?, format))
        }
        Commands::Demographics {
            income,
            ev_ownership,
            population,
            ages,
            strict,
            format,
        } => {
            let config = DemographicsConfig {
                population,
                avg_income: income,
                ev_ownership,
                ages,
                strict,
            };
            Ok((commands::handle_demographics(config, settings)?, format))
        }
        Commands::Roi {
            investment,
            daily_users,
            price,
            operating_costs,
            years,
            growth_rate,
            strict,
            format,
        } => {
            let config = ProjectRoiConfig {
                investment_cost: investment,
                daily_users,
                charge_price: price,
                operating_costs,
                years,
                growth_rate,
                strict,
            };
            Ok((commands::handle_roi(config, settings)?, format))
        }
        Commands::City {
            budget,
            market_share,
            city,
            lat,
            lon,
            ev_ownership,
            strict,
            format,
        } => {
            let config = CityProjectionConfig {
                location: site_location(city, lat, lon),
                budget,
                market_share_pct: market_share,
                ev_ownership_pct: ev_ownership,
                strict,
            };
            Ok((commands::handle_city(config, settings)?, format))
        }
        Commands::Init { .. } => Err(anyhow::anyhow!("init is handled before config loading")),
    }
}

fn emit(report: &Report, format: OutputFormat) -> Result<()> {
    let stdout = std::io::stdout();
    let mut writer = create_writer(format, Box::new(stdout.lock()));
    writer.write_report(report)
}

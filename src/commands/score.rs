//! Location and demographic scoring commands.

use crate::config::{ChargesiteConfig, WeightSet};
use crate::io::Report;
use crate::scoring::{AgeBracket, AgeDistribution, DemographicProfile, SiteSignals};
use crate::validation;
use anyhow::Result;

#[derive(Debug, Clone)]
pub struct LocationConfig {
    pub signals: SiteSignals,
    /// Four weights in traffic, pedestrian, competitor, demographic order
    pub weights: Option<Vec<f64>>,
    pub strict: bool,
}

#[derive(Debug, Clone)]
pub struct DemographicsConfig {
    pub population: u64,
    pub avg_income: f64,
    pub ev_ownership: f64,
    pub ages: Vec<(AgeBracket, f64)>,
    pub strict: bool,
}

// Pure function: weights from the command line win over the config file
fn resolve_weights(
    cli_weights: Option<&[f64]>,
    settings: &ChargesiteConfig,
) -> Result<WeightSet> {
    match cli_weights {
        None => Ok(settings.weights()),
        Some(&[traffic, pedestrian, competitor, demographic]) => {
            Ok(WeightSet::new(traffic, pedestrian, competitor, demographic))
        }
        Some(other) => anyhow::bail!(
            "--weights takes exactly 4 values (traffic,pedestrian,competitor,demographic), got {}",
            other.len()
        ),
    }
}

pub fn handle_location(config: LocationConfig, settings: &ChargesiteConfig) -> Result<Report> {
    let strict = config.strict || settings.strict();
    let weights = resolve_weights(config.weights.as_deref(), settings)?;

    let mut issues = validation::site_issues(&config.signals);
    issues.extend(validation::weight_issues(&weights));
    validation::enforce(issues, strict)?;

    let score = config.signals.score(Some(weights));
    log::info!("Location score {:.2}", score);

    Ok(Report::Location {
        signals: config.signals,
        weights,
        score,
    })
}

pub fn handle_demographics(
    config: DemographicsConfig,
    settings: &ChargesiteConfig,
) -> Result<Report> {
    let strict = config.strict || settings.strict();

    let mut age_distribution = AgeDistribution::default();
    for (bracket, fraction) in config.ages {
        age_distribution.set(bracket, fraction);
    }
    let profile = DemographicProfile {
        population: config.population,
        avg_income: config.avg_income,
        ev_ownership: config.ev_ownership,
        age_distribution,
    };

    validation::enforce(validation::profile_issues(&profile), strict)?;

    let score = profile.score();
    log::info!("Demographic score {:.3}", score);

    Ok(Report::Demographics { profile, score })
}

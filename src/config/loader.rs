use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::ChargesiteConfig;
use super::weights::WeightSet;
use crate::error::{Error, Result};
use crate::validation;

pub const CONFIG_FILE_NAME: &str = ".chargesite.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Contents written by `chargesite init`
pub const DEFAULT_CONFIG: &str = r#"# chargesite configuration

# Location score weights; must sum to 1.0
[weights]
traffic = 0.35
pedestrian = 0.25
competitor = 0.20
demographic = 0.20

# ROI projection defaults
[roi]
years = 5
growth_rate = 0.10

# Reject out-of-range inputs instead of warning
[validation]
strict = false
"#;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a config from TOML and settle its weights.
///
/// Invalid weights are replaced by the defaults with a warning; valid ones
/// are normalized to an exact sum of 1.0.
pub fn parse_and_validate_config(contents: &str) -> Result<ChargesiteConfig> {
    let mut config = toml::from_str::<ChargesiteConfig>(contents)?;

    if let Some(ref mut weights) = config.weights {
        if let Err(e) = weights.validate() {
            log::warn!("Invalid location weights: {}. Using defaults.", e);
            config.weights = Some(WeightSet::default());
        } else {
            weights.normalize();
        }
    }

    if let Some(roi) = config.roi {
        let issues = validation::growth_rate_issues(roi.growth_rate, "roi.growth_rate");
        if !issues.is_empty() {
            return Err(Error::Configuration(issues.join("; ")));
        }
    }

    Ok(config)
}

/// Load a config from an explicit path. Any failure is an error.
pub fn load_config_from(path: &Path) -> Result<ChargesiteConfig> {
    let contents = read_config_file(path)?;
    let config = parse_and_validate_config(&contents).map_err(|e| {
        Error::Configuration(format!("Failed to load {}: {}", path.display(), e))
    })?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Pure function to try loading config from a discovered path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<ChargesiteConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!(
                "Ignoring {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file.
pub(crate) fn discover_config(start: PathBuf) -> Option<ChargesiteConfig> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
}

pub fn load_config() -> ChargesiteConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return ChargesiteConfig::default();
        }
    };

    discover_config(current).unwrap_or_else(|| {
        log::debug!(
            "No config found after checking {} directories. Using default config.",
            MAX_TRAVERSAL_DEPTH
        );
        ChargesiteConfig::default()
    })
}

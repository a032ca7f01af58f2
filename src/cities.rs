//! Reference city profiles and nearest-city lookup.
//!
//! Static demographic snapshots for the five reference cities. Values are
//! regional averages, not live data.

use crate::error::{Error, Result};
use serde::Serialize;

/// Growth factor used for locations outside the reference table.
pub const FALLBACK_GROWTH_FACTOR: f64 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CityProfile {
    pub name: &'static str,
    /// ASCII spelling accepted by [`find_city`]
    pub alias: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub population: u64,
    /// Residents per km²
    pub density: u32,
    pub urban_population: u64,
    pub rural_population: u64,
    /// Annual population growth in percent
    pub population_growth: f64,
    /// EV ownership in percent of vehicles
    pub ev_ownership: f64,
    /// Businesses per km²
    pub business_density: u32,
    /// Year-over-year revenue growth multiplier
    pub growth_factor: f64,
}

pub static CITIES: [CityProfile; 5] = [
    CityProfile {
        name: "İstanbul",
        alias: "istanbul",
        lat: 41.0082,
        lon: 28.9784,
        population: 15_800_000,
        density: 2_900,
        urban_population: 15_200_000,
        rural_population: 600_000,
        population_growth: 2.5,
        ev_ownership: 8.0,
        business_density: 450,
        growth_factor: 1.4,
    },
    CityProfile {
        name: "Ankara",
        alias: "ankara",
        lat: 39.9334,
        lon: 32.8597,
        population: 5_700_000,
        density: 2_100,
        urban_population: 5_300_000,
        rural_population: 400_000,
        population_growth: 1.8,
        ev_ownership: 6.0,
        business_density: 350,
        growth_factor: 1.3,
    },
    CityProfile {
        name: "İzmir",
        alias: "izmir",
        lat: 38.4237,
        lon: 27.1428,
        population: 4_400_000,
        density: 1_800,
        urban_population: 4_000_000,
        rural_population: 400_000,
        population_growth: 1.5,
        ev_ownership: 5.0,
        business_density: 300,
        growth_factor: 1.25,
    },
    CityProfile {
        name: "Bursa",
        alias: "bursa",
        lat: 40.1885,
        lon: 29.0610,
        population: 3_100_000,
        density: 1_500,
        urban_population: 2_800_000,
        rural_population: 300_000,
        population_growth: 1.7,
        ev_ownership: 4.0,
        business_density: 250,
        growth_factor: 1.2,
    },
    CityProfile {
        name: "Antalya",
        alias: "antalya",
        lat: 36.8969,
        lon: 30.7133,
        population: 2_500_000,
        density: 1_200,
        urban_population: 2_200_000,
        rural_population: 300_000,
        population_growth: 2.2,
        ev_ownership: 3.0,
        business_density: 200,
        growth_factor: 1.15,
    },
];

impl CityProfile {
    /// Straight-line distance in degrees; only meaningful for ranking.
    fn degree_distance(&self, lat: f64, lon: f64) -> f64 {
        ((lat - self.lat).powi(2) + (lon - self.lon).powi(2)).sqrt()
    }
}

/// Closest reference city to a coordinate.
pub fn nearest_city(lat: f64, lon: f64) -> &'static CityProfile {
    CITIES
        .iter()
        .min_by(|a, b| {
            a.degree_distance(lat, lon)
                .total_cmp(&b.degree_distance(lat, lon))
        })
        .unwrap_or(&CITIES[0])
}

/// Case-insensitive lookup by display name or ASCII alias.
pub fn find_city(name: &str) -> Result<&'static CityProfile> {
    let needle = name.trim();
    CITIES
        .iter()
        .find(|city| {
            city.alias.eq_ignore_ascii_case(needle)
                || city.name.to_lowercase() == needle.to_lowercase()
        })
        .ok_or_else(|| Error::UnknownCity(name.to_string()))
}

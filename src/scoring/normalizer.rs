//! Rescaling of raw site signals into the unit interval.

/// Lower bound of the income band, in currency units.
pub const INCOME_FLOOR: f64 = 50_000.0;

/// Width of the income band; incomes at `INCOME_FLOOR + INCOME_SPAN` score 1.0.
pub const INCOME_SPAN: f64 = 150_000.0;

/// Beyond this radius a competitor no longer affects the site.
pub const COMPETITOR_RADIUS_KM: f64 = 5.0;

/// Clamp a value into [0.0, 1.0].
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Map average income linearly from the 50,000-200,000 band to [0.0, 1.0].
pub fn normalize_income(avg_income: f64) -> f64 {
    clamp_unit((avg_income - INCOME_FLOOR) / INCOME_SPAN)
}

/// Scale distance to the nearest competitor by the competitor radius.
///
/// Only the upper bound is clamped: distances of 5 km or more are maximally
/// favorable, while negative distances pass through unchanged.
pub fn normalize_competitor_distance(distance_km: f64) -> f64 {
    (distance_km / COMPETITOR_RADIUS_KM).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn income_band_edges() {
        assert_eq!(normalize_income(INCOME_FLOOR), 0.0);
        assert_eq!(normalize_income(200_000.0), 1.0);
        assert_eq!(normalize_income(125_000.0), 0.5);
        assert_eq!(normalize_income(-10_000.0), 0.0);
        assert_eq!(normalize_income(1_000_000.0), 1.0);
    }

    #[test]
    fn competitor_distance_scales_linearly_inside_radius() {
        assert_eq!(normalize_competitor_distance(0.0), 0.0);
        assert_eq!(normalize_competitor_distance(2.5), 0.5);
        assert_eq!(normalize_competitor_distance(5.0), 1.0);
    }

    #[test]
    fn negative_distance_is_not_clamped() {
        assert_eq!(normalize_competitor_distance(-5.0), -1.0);
    }

    proptest! {
        /// Property: any distance at or beyond the radius normalizes to exactly 1.0.
        #[test]
        fn far_competitors_saturate(distance in COMPETITOR_RADIUS_KM..1.0e6) {
            prop_assert_eq!(normalize_competitor_distance(distance), 1.0);
        }

        /// Property: clamp_unit always lands in the unit interval.
        #[test]
        fn clamp_unit_is_bounded(value in -1.0e9f64..1.0e9) {
            let clamped = clamp_unit(value);
            prop_assert!((0.0..=1.0).contains(&clamped));
        }
    }
}

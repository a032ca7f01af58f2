//! Properties of the public scoring and projection API.

use chargesite::scoring::normalize_competitor_distance;
use chargesite::{
    project_roi, score_demographics, score_location, AgeDistribution, Error, WeightSet,
};
use proptest::prelude::*;

#[test]
fn demographic_and_location_scores_compose() {
    let ages = AgeDistribution::from_pairs([("25-40", 1.0)]).unwrap();
    let demographic = score_demographics(0, 200_000.0, 1.0, &ages);
    let score = score_location(1.0, 1.0, 5.0, demographic, None);

    // Only the demographic factor is below 1.0, carrying 20% of the weight
    let expected = 100.0 - 20.0 * (1.0 - demographic);
    assert!((score - expected).abs() < 1e-9);
}

#[test]
fn zero_investment_never_yields_infinity() {
    match project_roi(0.0, 100.0, 10.0, 0.0, 5) {
        Err(Error::DivisionByZero { .. }) => {}
        other => panic!("expected a division error, got {other:?}"),
    }
}

fn unit_weights() -> impl Strategy<Value = WeightSet> {
    (0.01f64..1.0, 0.01f64..1.0, 0.01f64..1.0, 0.01f64..1.0).prop_map(|(t, p, c, d)| {
        let mut weights = WeightSet::new(t, p, c, d);
        weights.normalize();
        weights
    })
}

proptest! {
    #[test]
    fn competitor_factor_saturates_at_radius(distance in 5.0f64..10_000.0) {
        prop_assert_eq!(normalize_competitor_distance(distance), 1.0);
    }

    #[test]
    fn extreme_factors_hit_range_ends(weights in unit_weights()) {
        let top = score_location(1.0, 1.0, 5.0, 1.0, Some(weights));
        let bottom = score_location(0.0, 0.0, 0.0, 0.0, Some(weights));
        prop_assert!((top - 100.0).abs() < 1e-9, "top = {}", top);
        prop_assert_eq!(bottom, 0.0);
    }

    #[test]
    fn roi_matches_final_cumulative(
        investment in 1_000.0f64..1.0e7,
        users in 0.0f64..300.0,
        price in 0.0f64..50.0,
        costs in 0.0f64..500_000.0,
        years in 1u32..15,
    ) {
        let result = project_roi(investment, users, price, costs, years).unwrap();
        let last = *result.cash_flows.last().unwrap();
        prop_assert!((result.roi - last / investment * 100.0).abs() < 1e-9);
    }
}

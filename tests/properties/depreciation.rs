//! Property tests for the depreciation engine.

use proptest::prelude::*;

use assetbook::domain::services::{calculate_declining_balance, calculate_straight_line, Schedule};

/// Cost, residual (never above cost) and useful life.
fn asset_inputs() -> impl Strategy<Value = (f64, f64, u32)> {
    (1.0f64..10_000_000.0, 0.0f64..=1.0, 1u32..=60)
        .prop_map(|(cost, share, life)| (cost, cost * share, life))
}

fn tolerance(cost: f64) -> f64 {
    cost * 1e-9 + 1e-9
}

fn assert_common_shape(schedule: &Schedule, cost: f64, residual: f64, life: u32) {
    let entries = schedule.entries();
    assert_eq!(entries.len(), life as usize + 1);
    assert_eq!(entries[0].year, 0);
    assert_eq!(entries[0].book_value, cost);
    assert_eq!(entries[0].accumulated, 0.0);

    for (i, entry) in entries.iter().enumerate() {
        assert_eq!(entry.year as usize, i);
        assert!(
            entry.book_value >= residual - tolerance(cost),
            "year {} book value {} under residual {}",
            entry.year,
            entry.book_value,
            residual
        );
    }

    for pair in entries.windows(2) {
        assert!(pair[1].book_value <= pair[0].book_value + tolerance(cost));
        assert!(pair[1].accumulated >= pair[0].accumulated - tolerance(cost));
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: straight-line ends exactly at the residual value with equal
    /// yearly charges.
    #[test]
    fn property_straight_line_reaches_residual(
        (cost, residual, life) in asset_inputs()
    ) {
        let schedule = calculate_straight_line(cost, residual, life);
        assert_common_shape(&schedule, cost, residual, life);

        let annual = (cost - residual) / f64::from(life);
        for entry in schedule.iter().skip(1) {
            prop_assert!((entry.depreciation - annual).abs() <= tolerance(cost));
        }

        let last = schedule.last().unwrap();
        prop_assert!((last.book_value - residual).abs() <= tolerance(cost) * f64::from(life));
    }

    /// PROPERTY: declining-balance never charges a negative amount and
    /// accumulated depreciation plus book value always equals cost.
    #[test]
    fn property_declining_balance_conserves_cost(
        (cost, residual, life) in asset_inputs(),
        rate in 0.1f64..=100.0,
    ) {
        let schedule = calculate_declining_balance(cost, residual, life, Some(rate));
        assert_common_shape(&schedule, cost, residual, life);

        for entry in &schedule {
            prop_assert!(entry.depreciation >= 0.0);
            let total = entry.accumulated + entry.book_value;
            prop_assert!(
                (total - cost).abs() <= cost * 1e-9 * f64::from(life + 1) + 1e-6,
                "year {}: accumulated {} + book value {} != cost {}",
                entry.year, entry.accumulated, entry.book_value, cost
            );
        }
    }

    /// PROPERTY: once declining-balance hits the floor, every later year is
    /// frozen at the residual with no further charge.
    #[test]
    fn property_declining_balance_freezes_at_floor(
        (cost, residual, life) in asset_inputs(),
        rate in 0.1f64..=100.0,
    ) {
        let schedule = calculate_declining_balance(cost, residual, life, Some(rate));

        if let Some(floor_year) = schedule
            .iter()
            .skip(1)
            .position(|e| e.book_value <= residual)
            .map(|i| i + 1)
        {
            let frozen = schedule.entries()[floor_year].accumulated;
            for entry in schedule.iter().skip(floor_year + 1) {
                prop_assert_eq!(entry.depreciation, 0.0);
                prop_assert_eq!(entry.book_value, residual);
                prop_assert_eq!(entry.accumulated, frozen);
            }
        }
    }

    /// PROPERTY: the chart series is the schedule without the acquisition year.
    #[test]
    fn property_chart_series_skips_year_zero(
        (cost, residual, life) in asset_inputs()
    ) {
        let schedule = calculate_straight_line(cost, residual, life);
        let series = schedule.chart_series();

        prop_assert_eq!(series.len(), life as usize);
        prop_assert!(series.iter().all(|p| p.year >= 1));
        prop_assert_eq!(schedule.useful_life(), life);
    }

    /// PROPERTY: both calculators are pure; the same inputs always give the
    /// same schedule.
    #[test]
    fn property_calculators_are_deterministic(
        (cost, residual, life) in asset_inputs(),
        rate in 0.1f64..=100.0,
    ) {
        prop_assert_eq!(
            calculate_straight_line(cost, residual, life),
            calculate_straight_line(cost, residual, life)
        );
        prop_assert_eq!(
            calculate_declining_balance(cost, residual, life, Some(rate)),
            calculate_declining_balance(cost, residual, life, Some(rate))
        );
    }
}

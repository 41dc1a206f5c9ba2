//! Property tests for register valuations.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use assetbook::application::{calculate, CalculateOptions};
use assetbook::domain::entities::Asset;
use assetbook::domain::value_objects::{AssetCategory, DepreciationMethod};

fn method() -> impl Strategy<Value = DepreciationMethod> {
    prop_oneof![
        Just(DepreciationMethod::StraightLine),
        Just(DepreciationMethod::DecliningBalance),
    ]
}

fn asset(cost: f64, share: f64, life: u32, method: DepreciationMethod, year: i32) -> Asset {
    let purchased = NaiveDate::from_ymd_opt(year, 3, 15).unwrap();
    calculate(
        CalculateOptions {
            name: "Generated".to_string(),
            category: AssetCategory::Other,
            cost,
            residual_value: Some(cost * share),
            useful_life: Some(life),
            purchase_date: Some(purchased),
            method,
            ..CalculateOptions::default()
        }
        .resolve(),
    )
    .unwrap()
    .into_asset("generated".parse().unwrap(), purchased)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: book value never rises as time passes and never drops under
    /// the residual value, including years past the end of the schedule.
    #[test]
    fn property_valuation_is_monotone_over_time(
        cost in 1.0f64..1_000_000.0,
        share in 0.0f64..=1.0,
        life in 1u32..=40,
        method in method(),
        purchase_year in 1990i32..2030,
    ) {
        let asset = asset(cost, share, life, method, purchase_year);
        let residual = asset.residual_value;

        let mut previous = f64::INFINITY;
        for offset in -2..=(life as i32 + 5) {
            let date = NaiveDate::from_ymd_opt(purchase_year + offset, 6, 30).unwrap();
            let valuation = asset.valuation_on(date);

            prop_assert!(valuation.book_value <= previous + 1e-6);
            prop_assert!(valuation.book_value >= residual - 1e-6);
            if date.year() <= purchase_year {
                prop_assert_eq!(valuation.book_value, cost);
            }
            previous = valuation.book_value;
        }
    }
}

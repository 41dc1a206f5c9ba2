//! CSV export
//!
//! Amounts are written with two decimals and no thousands separators so the
//! files import cleanly into spreadsheets.

use std::io::Write;

use ::csv::{Terminator, WriterBuilder};

use super::{register_record, schedule_headers, schedule_record, REGISTER_HEADERS};
use crate::domain::entities::{Asset, AssetValuation};
use crate::domain::services::Schedule;
use crate::error::AssetbookResult;

pub const REGISTER_CSV_FILENAME: &str = "asset_register.csv";

/// `<asset name>_depreciation_schedule.csv`
pub fn schedule_csv_filename(asset_name: &str) -> String {
    format!("{}_depreciation_schedule.csv", super::file_stem(asset_name))
}

pub fn write_schedule_csv<W: Write>(
    w: W,
    schedule: &Schedule,
    currency: &str,
) -> AssetbookResult<()> {
    let mut wrt = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(w);

    wrt.write_record(schedule_headers(currency))?;
    for entry in schedule {
        wrt.write_record(schedule_record(entry))?;
    }
    wrt.flush()?;
    Ok(())
}

/// One row per asset with its net book value for the current year.
pub fn write_register_csv<'a, W, I>(w: W, rows: I) -> AssetbookResult<()>
where
    W: Write,
    I: IntoIterator<Item = (&'a Asset, &'a AssetValuation)>,
{
    let mut wrt = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(w);

    wrt.write_record(REGISTER_HEADERS)?;
    for (asset, valuation) in rows {
        wrt.write_record(register_record(asset, valuation))?;
    }
    wrt.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::calculate_straight_line;
    use crate::domain::value_objects::{AssetCategory, DepreciationMethod};
    use chrono::NaiveDate;

    #[test]
    fn schedule_filename_replaces_whitespace() {
        assert_eq!(
            schedule_csv_filename("Office Computer"),
            "Office_Computer_depreciation_schedule.csv"
        );
    }

    #[test]
    fn schedule_csv_has_currency_header_and_two_decimals() {
        let schedule = calculate_straight_line(1_000.0, 100.0, 3);
        let mut out = Vec::new();
        write_schedule_csv(&mut out, &schedule, "₦").unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Year,Depreciation (₦),Accumulated Depreciation (₦),Book Value (₦)"
        );
        assert_eq!(lines[1], "0,0.00,0.00,1000.00");
        assert_eq!(lines[2], "1,300.00,300.00,700.00");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn register_csv_quotes_names_with_commas() {
        let asset = Asset {
            id: "a".parse().unwrap(),
            name: "Desk, oak".to_string(),
            category: AssetCategory::Furniture,
            cost: 1_200.0,
            residual_value: 0.0,
            purchase_date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            useful_life: 4,
            method: DepreciationMethod::StraightLine,
            rate: None,
            schedule: calculate_straight_line(1_200.0, 0.0, 4),
        };
        let valuation = AssetValuation {
            year: 1,
            depreciation: 300.0,
            book_value: 900.0,
        };

        let mut out = Vec::new();
        write_register_csv(&mut out, [(&asset, &valuation)]).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Asset Name,Type,Purchase Cost,Purchase Date,Useful Life,Method,Current NBV"
        );
        assert_eq!(
            lines[1],
            "\"Desk, oak\",furniture,1200.00,2024-05-02,4,Straight-Line,900.00"
        );
    }
}

//! PDF export
//!
//! A title, a "Generated on" line and one table, laid out on A4 pages with
//! the PDF base fonts. The table repeats its header on every page.

use std::io::Write;

use chrono::NaiveDate;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use super::{register_record, schedule_headers, schedule_record, REGISTER_HEADERS};
use crate::domain::entities::{Asset, AssetValuation};
use crate::domain::services::Schedule;
use crate::error::{AssetbookError, AssetbookResult};

pub const REGISTER_PDF_FILENAME: &str = "asset_register.pdf";

const LAYER: &str = "Table";
const MARGIN: f32 = 14.0;
const TITLE_SIZE: f32 = 16.0;
const SUBTITLE_SIZE: f32 = 10.0;
const TABLE_SIZE: f32 = 8.0;
const ROW_HEIGHT: f32 = 6.0;
const COLUMN_GAP: f32 = 4.0;
/// Average Helvetica glyph width at `TABLE_SIZE`, in millimetres.
const CHAR_WIDTH: f32 = 1.55;

/// `<asset name>_depreciation_schedule.pdf`
pub fn schedule_pdf_filename(asset_name: &str) -> String {
    format!("{}_depreciation_schedule.pdf", super::file_stem(asset_name))
}

/// Contents of an exported PDF, independent of page layout.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfReport {
    pub title: String,
    pub generated_on: NaiveDate,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub landscape: bool,
}

impl PdfReport {
    pub fn schedule(
        asset_name: &str,
        schedule: &Schedule,
        currency: &str,
        generated_on: NaiveDate,
    ) -> Self {
        Self {
            title: format!("Depreciation Schedule: {}", asset_name),
            generated_on,
            headers: schedule_headers(currency).into(),
            rows: schedule.iter().map(|e| schedule_record(e).into()).collect(),
            landscape: false,
        }
    }

    pub fn register<'a, I>(rows: I, generated_on: NaiveDate) -> Self
    where
        I: IntoIterator<Item = (&'a Asset, &'a AssetValuation)>,
    {
        Self {
            title: "Asset Register".to_string(),
            generated_on,
            headers: REGISTER_HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .into_iter()
                .map(|(asset, valuation)| register_record(asset, valuation).into())
                .collect(),
            landscape: true,
        }
    }

    pub fn generated_line(&self) -> String {
        format!("Generated on: {}", self.generated_on.format("%Y-%m-%d"))
    }

    fn page_size(&self) -> (f32, f32) {
        if self.landscape {
            (297.0, 210.0)
        } else {
            (210.0, 297.0)
        }
    }

    /// Left edge of each column, in millimetres. Columns are sized to their
    /// longest cell and squeezed to fit the page width.
    fn column_offsets(&self) -> Vec<f32> {
        let mut widths: Vec<f32> = self
            .headers
            .iter()
            .map(|h| h.chars().count() as f32)
            .collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = width.max(cell.chars().count() as f32);
            }
        }

        let widths: Vec<f32> = widths
            .into_iter()
            .map(|chars| chars * CHAR_WIDTH + COLUMN_GAP)
            .collect();
        let available = self.page_size().0 - 2.0 * MARGIN;
        let total: f32 = widths.iter().sum();
        let scale = if total > available { available / total } else { 1.0 };

        let mut x = MARGIN;
        widths
            .into_iter()
            .map(|width| {
                let left = x;
                x += width * scale;
                left
            })
            .collect()
    }

    /// Rows that fit under the header on one page.
    fn rows_per_page(&self, first_page: bool) -> usize {
        let (_, height) = self.page_size();
        let top = if first_page { 40.0 } else { 20.0 };
        let usable = height - top - MARGIN - ROW_HEIGHT;
        ((usable / ROW_HEIGHT).floor() as usize).max(1)
    }

    /// Number of pages the table spans.
    pub fn page_count(&self) -> usize {
        let first = self.rows_per_page(true);
        if self.rows.len() <= first {
            return 1;
        }
        1 + (self.rows.len() - first).div_ceil(self.rows_per_page(false))
    }

    pub fn render(&self) -> AssetbookResult<Vec<u8>> {
        let (width, height) = self.page_size();
        let (doc, page, layer) = PdfDocument::new(
            pdf_text(&self.title),
            Mm(width),
            Mm(height),
            LAYER.to_string(),
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_error)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_error)?;

        let offsets = self.column_offsets();
        let mut current = doc.get_page(page).get_layer(layer);

        current.use_text(
            pdf_text(&self.title),
            TITLE_SIZE,
            Mm(MARGIN),
            Mm(height - 20.0),
            &bold,
        );
        current.use_text(
            pdf_text(&self.generated_line()),
            SUBTITLE_SIZE,
            Mm(MARGIN),
            Mm(height - 30.0),
            &regular,
        );

        let mut y = height - 40.0;
        draw_row(&current, &self.headers, &offsets, y, &bold);

        let mut remaining = self.rows_per_page(true);
        for row in &self.rows {
            if remaining == 0 {
                let (page, layer) = doc.add_page(Mm(width), Mm(height), LAYER);
                current = doc.get_page(page).get_layer(layer);
                y = height - 20.0;
                draw_row(&current, &self.headers, &offsets, y, &bold);
                remaining = self.rows_per_page(false);
            }
            y -= ROW_HEIGHT;
            draw_row(&current, row, &offsets, y, &regular);
            remaining -= 1;
        }

        doc.save_to_bytes().map_err(pdf_error)
    }
}

pub fn write_pdf<W: Write>(mut w: W, report: &PdfReport) -> AssetbookResult<()> {
    w.write_all(&report.render()?)?;
    w.flush()?;
    Ok(())
}

fn draw_row(
    layer: &PdfLayerReference,
    cells: &[String],
    offsets: &[f32],
    y: f32,
    font: &IndirectFontRef,
) {
    for (cell, x) in cells.iter().zip(offsets) {
        layer.use_text(pdf_text(cell), TABLE_SIZE, Mm(*x), Mm(y), font);
    }
}

/// The base fonts only cover Latin-1; currency signs outside it are spelled
/// out and anything else unprintable becomes `?`.
fn pdf_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '₦' => out.push_str("NGN"),
            '€' => out.push_str("EUR"),
            c if (c as u32) < 0x100 && !c.is_control() => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

fn pdf_error(e: printpdf::Error) -> AssetbookError {
    AssetbookError::Pdf {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::calculate_straight_line;
    use crate::domain::value_objects::{AssetCategory, DepreciationMethod};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn schedule_report_matches_csv_rows() {
        let schedule = calculate_straight_line(1_000.0, 100.0, 3);
        let report = PdfReport::schedule("Office Computer", &schedule, "₦", day());

        assert_eq!(report.title, "Depreciation Schedule: Office Computer");
        assert_eq!(report.generated_line(), "Generated on: 2025-03-14");
        assert_eq!(
            report.headers,
            [
                "Year",
                "Depreciation (₦)",
                "Accumulated Depreciation (₦)",
                "Book Value (₦)"
            ]
        );
        assert_eq!(report.rows.len(), 4);
        assert_eq!(report.rows[1], ["1", "300.00", "300.00", "700.00"]);
        assert!(!report.landscape);
    }

    #[test]
    fn register_report_matches_csv_rows() {
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

        let report = PdfReport::register([(&asset, &valuation)], day());
        assert_eq!(report.title, "Asset Register");
        assert_eq!(report.headers[6], "Current NBV");
        assert_eq!(
            report.rows[0],
            ["Desk, oak", "furniture", "1200.00", "2024-05-02", "4", "Straight-Line", "900.00"]
        );
        assert!(report.landscape);
    }

    #[test]
    fn render_produces_pdf_document() {
        let schedule = calculate_straight_line(5_000.0, 0.0, 5);
        let report = PdfReport::schedule("Van", &schedule, "₦", day());

        let mut out = Vec::new();
        write_pdf(&mut out, &report).unwrap();
        assert!(out.starts_with(b"%PDF-"));
    }

    #[test]
    fn long_tables_span_pages() {
        let short = PdfReport::schedule("Van", &calculate_straight_line(1.0, 0.0, 5), "$", day());
        assert_eq!(short.page_count(), 1);

        let long = PdfReport::schedule(
            "Plant",
            &calculate_straight_line(1_000_000.0, 0.0, 120),
            "$",
            day(),
        );
        assert!(long.page_count() > 1);
        assert!(long.render().unwrap().starts_with(b"%PDF-"));
    }

    #[test]
    fn columns_fit_the_page() {
        let schedule = calculate_straight_line(1_000.0, 0.0, 2);
        let mut report = PdfReport::schedule("Van", &schedule, "$", day());
        report.headers[0] = "Y".repeat(400);

        let offsets = report.column_offsets();
        assert_eq!(offsets[0], MARGIN);
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
        assert!(*offsets.last().unwrap() < 210.0 - MARGIN);
    }

    #[test]
    fn pdf_text_spells_out_currency() {
        assert_eq!(pdf_text("Book Value (₦)"), "Book Value (NGN)");
        assert_eq!(pdf_text("Café"), "Café");
        assert_eq!(pdf_text("机器"), "??");
    }
}

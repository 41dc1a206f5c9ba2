//! Export command handlers

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::json;

use assetbook::domain::entities::{Register, SortKey};
use assetbook::domain::value_objects::{AssetCategory, AssetId};
use assetbook::infrastructure::export::pdf::write_pdf;
use assetbook::infrastructure::export::{
    render_register_json, render_schedule_json, schedule_csv_filename, schedule_json_filename,
    schedule_pdf_filename, write_register_csv, PdfReport, REGISTER_CSV_FILENAME,
    REGISTER_PDF_FILENAME,
};
use assetbook::presentation::ExportFormat;

use super::calculate::write_csv_file;
use super::register::query;
use super::{today, CommandContext};
use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;

const REGISTER_JSON_FILENAME: &str = "asset_register.json";

pub fn cmd_export_schedule(
    id: &AssetId,
    format: ExportFormat,
    output: Option<PathBuf>,
    ctx: &CommandContext,
) -> Result<()> {
    let asset = ctx.register().get_asset(id)?;

    let path = match format {
        ExportFormat::Csv => {
            let path = output.unwrap_or_else(|| PathBuf::from(schedule_csv_filename(&asset.name)));
            write_csv_file(&path, &asset.schedule, ctx.currency())?;
            path
        }
        ExportFormat::Json => {
            let path =
                output.unwrap_or_else(|| PathBuf::from(schedule_json_filename(&asset.name)));
            write_text_file(&path, &render_schedule_json(&asset, ctx.currency())?)?;
            path
        }
        ExportFormat::Pdf => {
            let path = output.unwrap_or_else(|| PathBuf::from(schedule_pdf_filename(&asset.name)));
            let report =
                PdfReport::schedule(&asset.name, &asset.schedule, ctx.currency(), today());
            write_pdf_file(&path, &report)?;
            path
        }
    };

    report(ctx, "schedule", format, &path, asset.schedule.len())
}

pub fn cmd_export_register(
    format: ExportFormat,
    output: Option<PathBuf>,
    category: Option<AssetCategory>,
    sort: SortKey,
    desc: bool,
    ctx: &CommandContext,
) -> Result<()> {
    let register = ctx.register();
    let query = query(category, sort, desc);

    let (path, count) = match format {
        ExportFormat::Csv => {
            let path = output.unwrap_or_else(|| PathBuf::from(REGISTER_CSV_FILENAME));
            let rows = register.valuations(&query, today())?;
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_register_csv(
                &mut writer,
                rows.iter().map(|row| (&row.asset, &row.valuation)),
            )?;
            writer
                .flush()
                .with_context(|| format!("failed to write {}", path.display()))?;
            (path, rows.len())
        }
        ExportFormat::Json => {
            let path = output.unwrap_or_else(|| PathBuf::from(REGISTER_JSON_FILENAME));
            let mut document = Register::new();
            document.assets = register.list(&query)?;
            write_text_file(&path, &render_register_json(&document)?)?;
            (path, document.len())
        }
        ExportFormat::Pdf => {
            let path = output.unwrap_or_else(|| PathBuf::from(REGISTER_PDF_FILENAME));
            let today = today();
            let rows = register.valuations(&query, today)?;
            let report =
                PdfReport::register(rows.iter().map(|row| (&row.asset, &row.valuation)), today);
            write_pdf_file(&path, &report)?;
            (path, rows.len())
        }
    };

    report(ctx, "register", format, &path, count)
}

fn write_text_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

fn write_pdf_file(path: &Path, report: &PdfReport) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    write_pdf(BufWriter::new(file), report)?;
    Ok(())
}

fn report(
    ctx: &CommandContext,
    what: &str,
    format: ExportFormat,
    path: &Path,
    rows: usize,
) -> Result<()> {
    let format_name = format.name();

    if ctx.ui.json {
        crate::ui::json::emit(json!({
            "type": "exported",
            "target": what,
            "format": format_name,
            "path": path.display().to_string(),
            "rows": rows,
        }))?;
        return Ok(());
    }

    let mut header = CommandHeader::new(Icon::Export, "Export");
    header.add("Target", what);
    header.add("Format", format_name.to_uppercase());
    print!("{}", header.render(ctx.ui.color, ctx.ui.unicode));
    println!();

    let mut summary = ResultSummary::success("Export Complete");
    summary.add_stat("Rows", rows);
    summary.add_info(format!("Wrote {} to {}", what, path.display()));
    print!("{}", summary.render(ctx.ui.color, ctx.ui.unicode));
    Ok(())
}

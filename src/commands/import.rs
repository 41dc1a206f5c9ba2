//! Import command handler

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;

use assetbook::infrastructure::repositories::parse_register;

use super::CommandContext;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;

pub fn cmd_import(file: &Path, ctx: &CommandContext) -> Result<()> {
    let content =
        fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
    let incoming = parse_register(&content)
        .with_context(|| format!("{} is not a register file", file.display()))?;

    let report = ctx.register().import(incoming)?;

    if ctx.ui.json {
        let rejected: Vec<_> = report
            .rejected
            .iter()
            .map(|r| {
                json!({
                    "assetName": r.name,
                    "issues": r.issues.iter().map(|i| i.to_string()).collect::<Vec<_>>(),
                })
            })
            .collect();
        crate::ui::json::emit(json!({
            "type": "imported",
            "file": file.display().to_string(),
            "imported": report.imported,
            "rejected": rejected,
        }))?;
        return Ok(());
    }

    let mut header = CommandHeader::new(Icon::Import, "Import");
    header.add("File", file.display().to_string());
    header.add("Register", ctx.register_path().display().to_string());
    print!("{}", header.render(ctx.ui.color, ctx.ui.unicode));
    println!();

    let mut summary = if report.rejected.is_empty() {
        ResultSummary::success("Import Complete")
    } else {
        ResultSummary::partial("Import Finished With Rejections")
    };
    summary.add_stat("Imported", report.imported);
    summary.add_stat("Rejected", report.rejected.len());
    for rejected in &report.rejected {
        let issues: Vec<String> = rejected.issues.iter().map(|i| i.to_string()).collect();
        summary.add_warning(format!("{}: {}", rejected.name, issues.join("; ")));
    }
    summary.with_next_step("assetbook list");
    print!("{}", summary.render(ctx.ui.color, ctx.ui.unicode));
    Ok(())
}

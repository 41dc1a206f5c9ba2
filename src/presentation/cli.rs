//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --color, --verbose, --register) are inherited by all
//! subcommands.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::domain::entities::SortKey;
use crate::domain::value_objects::{AssetCategory, AssetId, DepreciationMethod};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    Pdf,
}

impl ExportFormat {
    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// assetbook - fixed asset depreciation schedules and register
#[derive(Parser, Debug)]
#[command(name = "assetbook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print one JSON document instead of the terminal view
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Register file (default: ~/.assetbook/register.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub register: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate a depreciation schedule
    Calculate {
        /// Asset name
        #[arg(long)]
        name: String,

        /// Asset category (drives the suggested residual, life and rate)
        #[arg(long, value_enum, default_value_t = AssetCategory::Other)]
        category: AssetCategory,

        /// Purchase cost
        #[arg(long)]
        cost: f64,

        /// Residual value (default: category suggestion)
        #[arg(long)]
        residual: Option<f64>,

        /// Useful life in years (default: category suggestion)
        #[arg(long)]
        life: Option<u32>,

        /// Depreciation method (default: from config, else straight-line)
        #[arg(long, value_enum)]
        method: Option<DepreciationMethod>,

        /// Declining-balance rate in percent
        #[arg(long)]
        rate: Option<f64>,

        /// Purchase date, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Year shown in the summary (default: 1)
        #[arg(long)]
        year: Option<u32>,

        /// Draw the depreciation chart
        #[arg(long)]
        chart: bool,

        /// Save the asset to the register
        #[arg(long)]
        save: bool,

        /// Also write the schedule as CSV to this path
        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,
    },

    /// Show suggested residual value, useful life and rate for a category
    Suggest {
        /// Category to show (all categories when omitted)
        #[arg(value_enum)]
        category: Option<AssetCategory>,

        /// Purchase cost used to compute the suggested residual value
        #[arg(long)]
        cost: Option<f64>,
    },

    /// List the asset register with current net book values
    List {
        /// Only assets of this category
        #[arg(long, value_enum)]
        category: Option<AssetCategory>,

        /// Sort column
        #[arg(long, value_enum, default_value_t = SortKey::Name)]
        sort: SortKey,

        /// Sort descending
        #[arg(long)]
        desc: bool,
    },

    /// Show a saved asset and its schedule
    Show {
        id: AssetId,

        /// Year shown in the summary (default: current year of the asset)
        #[arg(long)]
        year: Option<u32>,

        /// Draw the depreciation chart
        #[arg(long)]
        chart: bool,
    },

    /// Change a saved asset and recalculate its schedule
    Update {
        id: AssetId,

        #[arg(long)]
        name: Option<String>,

        #[arg(long, value_enum)]
        category: Option<AssetCategory>,

        #[arg(long)]
        cost: Option<f64>,

        #[arg(long)]
        residual: Option<f64>,

        #[arg(long)]
        life: Option<u32>,

        #[arg(long, value_enum)]
        method: Option<DepreciationMethod>,

        #[arg(long)]
        rate: Option<f64>,

        /// Purchase date, YYYY-MM-DD
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Remove an asset from the register
    Remove { id: AssetId },

    /// Export a schedule or the register
    Export {
        #[command(subcommand)]
        target: ExportTarget,
    },

    /// Import assets from a register file (upserts by id)
    Import { file: PathBuf },
}

#[derive(Subcommand, Debug)]
pub enum ExportTarget {
    /// Export one asset's depreciation schedule
    Schedule {
        id: AssetId,

        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Output file (default: <asset name>_depreciation_schedule.<csv|json|pdf>)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Export the asset register
    Register {
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Output file (default: asset_register.<csv|json|pdf>)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        #[arg(long, value_enum)]
        category: Option<AssetCategory>,

        #[arg(long, value_enum, default_value_t = SortKey::Name)]
        sort: SortKey,

        #[arg(long)]
        desc: bool,
    },
}

//! assetbook CLI - fixed asset depreciation schedules and register
//!
//! Usage: assetbook <COMMAND>
//!
//! Commands:
//!   calculate  Calculate a depreciation schedule (optionally save it)
//!   suggest    Show category guidelines
//!   list       List the register with current net book values
//!   show       Show a saved asset and its schedule
//!   update     Change a saved asset and recalculate it
//!   remove     Remove an asset from the register
//!   export     Export a schedule or the register as CSV / JSON
//!   import     Import assets from a register file

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use assetbook::config::Config;
use assetbook::presentation::{Cli, Commands, ExportTarget};

use commands::calculate::{cmd_calculate, CalculateArgs};
use commands::register::{cmd_list, cmd_remove, cmd_show, cmd_update, UpdateArgs};
use commands::CommandContext;
use ui::blocks::warning::WarningBlock;
use ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json = cli.json;
    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises the level from `warn`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("assetbook={level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let project_root = commands::project_root::discover_project_root(&cwd);
    let (config, warnings) = Config::load_or_default_with_warnings(Some(&project_root));

    let ui = UiContext::new(cli.json, cli.color, &config);
    if !warnings.is_empty() && !ui.json {
        eprint!(
            "{}",
            WarningBlock::from_config_warnings(&warnings).render(ui.color, ui.unicode)
        );
    }

    let ctx = CommandContext {
        ui,
        config,
        register_override: cli.register,
    };

    match cli.command {
        Commands::Calculate {
            name,
            category,
            cost,
            residual,
            life,
            method,
            rate,
            date,
            year,
            chart,
            save,
            csv,
        } => cmd_calculate(
            CalculateArgs {
                name,
                category,
                cost,
                residual,
                life,
                method,
                rate,
                date,
                year,
                chart,
                save,
                csv,
            },
            &ctx,
        ),
        Commands::Suggest { category, cost } => {
            commands::suggest::cmd_suggest(category, cost, &ctx)
        }
        Commands::List {
            category,
            sort,
            desc,
        } => cmd_list(category, sort, desc, &ctx),
        Commands::Show { id, year, chart } => cmd_show(&id, year, chart, &ctx),
        Commands::Update {
            id,
            name,
            category,
            cost,
            residual,
            life,
            method,
            rate,
            date,
        } => cmd_update(
            &id,
            UpdateArgs {
                name,
                category,
                cost,
                residual,
                life,
                method,
                rate,
                date,
            },
            &ctx,
        ),
        Commands::Remove { id } => cmd_remove(&id, &ctx),
        Commands::Export { target } => match target {
            ExportTarget::Schedule { id, format, output } => {
                commands::export::cmd_export_schedule(&id, format, output, &ctx)
            }
            ExportTarget::Register {
                format,
                output,
                category,
                sort,
                desc,
            } => commands::export::cmd_export_register(format, output, category, sort, desc, &ctx),
        },
        Commands::Import { file } => commands::import::cmd_import(&file, &ctx),
    }
}

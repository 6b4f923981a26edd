// ABOUTME: Escandallo CLI - costing, allergen and production reports from a kitchen backup
// ABOUTME: Loads a full-backup JSON file and runs one engine operation per subcommand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escandallo Kitchen Tools
//!
//! Usage:
//! ```bash
//! # Cost of every recipe, per serving
//! escandallo-cli --backup backup_cocina.json cost
//!
//! # Itemised cost of one recipe
//! escandallo-cli --backup backup_cocina.json cost "Croquetas de jamón"
//!
//! # Allergen declaration
//! escandallo-cli --backup backup_cocina.json allergens "Croquetas de jamón"
//!
//! # Quantities for 25 servings
//! escandallo-cli --backup backup_cocina.json scale "Croquetas de jamón" --to 25
//!
//! # Shopping list for an event menu at 120 guests
//! escandallo-cli --backup backup_cocina.json order "Boda García" --pax 120
//!
//! # Ingredients that cannot be costed
//! escandallo-cli --backup backup_cocina.json audit
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use escandallo::backup::BackupDocument;
use escandallo::logging::LoggingConfig;
use escandallo::services::KitchenService;
use escandallo::AppError;
use escandallo_costing::CostingConfig;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "escandallo-cli",
    version,
    about = "Recipe costing and allergen reports",
    long_about = "Reads a kitchen full-backup file and reports recipe costs, allergens, \
                  scaled quantities and event production orders."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Full-backup JSON file to read
    #[arg(long, short = 'b')]
    backup: PathBuf,

    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Cost of one recipe, or a per-serving summary of all recipes
    Cost {
        /// Recipe id or name (all recipes if omitted)
        recipe: Option<String>,
    },

    /// Allergens present in a recipe
    Allergens {
        /// Recipe id or name
        recipe: String,
    },

    /// Rescale a recipe to a different yield
    Scale {
        /// Recipe id or name
        recipe: String,

        /// Desired yield, in the recipe's yield unit
        #[arg(long)]
        to: f64,
    },

    /// Consolidated production order for a menu
    Order {
        /// Menu id or name
        menu: String,

        /// Number of guests
        #[arg(long)]
        pax: f64,
    },

    /// List ingredients that are unmatched, unpriced or costed across unrelated units
    Audit,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    info!(backup = %cli.backup.display(), "Loading kitchen backup");
    let config = CostingConfig::load().map_err(AppError::from)?;
    let backup = BackupDocument::load_file_with(&cli.backup, &config)?;
    let kitchen = KitchenService::from_backup(backup, config);

    match cli.command {
        Command::Cost { recipe } => match recipe {
            Some(recipe) => commands::recipes::cost(&kitchen, &recipe, cli.json)?,
            None => commands::recipes::cost_summary(&kitchen, cli.json)?,
        },
        Command::Allergens { recipe } => {
            commands::recipes::allergens(&kitchen, &recipe, cli.json)?;
        }
        Command::Scale { recipe, to } => {
            commands::recipes::scale(&kitchen, &recipe, to, cli.json)?;
        }
        Command::Order { menu, pax } => {
            commands::menus::order(&kitchen, &menu, pax, cli.json)?;
        }
        Command::Audit => commands::audit::run(&kitchen, cli.json)?,
    }

    Ok(())
}

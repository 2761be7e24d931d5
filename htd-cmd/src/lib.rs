//! Command implementations for the HTD CLI.
//!
//! Provides subcommands to check a temperature CSV, list its years and
//! print the chart projection the dashboard would draw.

use clap::Subcommand;
use htd_core::ViewMode;
use std::path::PathBuf;

pub mod inspect;
pub mod project;

#[derive(Subcommand)]
pub enum Command {
    /// Parse a temperature CSV and report what was found
    Validate {
        /// Path to the CSV file
        csv: PathBuf,
    },

    /// List the years in a temperature CSV, in file order
    Years {
        /// Path to the CSV file
        csv: PathBuf,
    },

    /// Submit a CSV and print the chart projection
    Project {
        /// Path to the CSV file
        csv: PathBuf,

        /// Chart shape: monthly or yearly
        #[arg(short, long, default_value = "monthly")]
        mode: ViewMode,

        /// Only show rows for this year
        #[arg(short, long)]
        year: Option<i32>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Base URL of the echo server; submits in-process when unset
        #[arg(long, env = "HTD_API_URL")]
        api_url: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Validate { csv } => inspect::run_validate(&csv),
        Command::Years { csv } => inspect::run_years(&csv),
        Command::Project {
            csv,
            mode,
            year,
            json,
            api_url,
        } => {
            project::run_project(&csv, mode, year, json, api_url.as_deref()).await
        }
    }
}

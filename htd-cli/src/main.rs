//! HTD CLI - Command line tool for historical temperature CSV files.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "htd-cli",
    version,
    about = "Historical Temperature Dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: htd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    htd_cmd::run(cli.command).await
}

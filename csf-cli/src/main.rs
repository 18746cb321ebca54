//! CSF CLI - build seasonal snowfall bundles from station CSVs and inspect them.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "csf-cli",
    version,
    about = "Cumulative seasonal snowfall toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: csf_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    csf_cmd::run(cli.command)
}

use anyhow::Result;
use billsplit::cli::Cli;
use billsplit::logging::init_tracing;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.run()
}

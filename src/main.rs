use clap::Parser;
use labelkit::cli::{self, Cli};
use labelkit::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.log_json)?;

    cli::run(cli)
}

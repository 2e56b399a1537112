use anyhow::Result;
use gcal::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    gcal::logging::init_tracing(cli.common.verbose);
    cli.execute()
}

use citytemp_processor::cli::{run, Cli};
use citytemp_processor::error::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

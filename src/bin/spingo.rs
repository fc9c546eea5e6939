//! Spin & Go preflop tooling.
//!
//! Enumerates betting sequences and post-processes solver tables.

use clap::Parser;
use spingo::cli::CLI;

fn main() -> anyhow::Result<()> {
    let cli = CLI::parse();
    spingo::log(cli.level());
    if !cli.run()? {
        std::process::exit(1);
    }
    Ok(())
}

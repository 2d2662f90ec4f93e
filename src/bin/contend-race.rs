//! Variant A: unsynchronized shared counter. The final total is usually
//! wrong with more than one thread — run it a few times and watch.

use anyhow::Result;
use contend::cli::Cli;
use contend::variants::race;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse_or_exit();
    let config = cli.config()?;
    let total = race::run(&config);
    println!("final total: {total}");
    Ok(())
}

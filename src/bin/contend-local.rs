//! Variant C: per-worker local accumulation, one locked add per worker.

use anyhow::Result;
use contend::cli::Cli;
use contend::variants::local;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse_or_exit();
    let config = cli.config()?;
    let total = local::run(&config);
    println!("final total: {total}");
    Ok(())
}

//! Variant B: shared counter behind a mutex, locked once per increment.

use anyhow::Result;
use contend::cli::Cli;
use contend::variants::mutex;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse_or_exit();
    let config = cli.config()?;
    let total = mutex::run(&config);
    println!("final total: {total}");
    Ok(())
}

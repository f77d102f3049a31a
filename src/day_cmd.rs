use anyhow::{Context, Result};
use tracing::info;

use crate::cli::DayArgs;
use crate::{config, convert};

/// Run the `day` subcommand.
pub fn run(args: DayArgs) -> Result<()> {
    let config = config::load(&args.config)?;
    let fetcher = convert::build_fetcher(&config)?;

    info!(date = %args.date, "fetching daily record");
    let record = fetcher
        .daily(args.date)
        .with_context(|| format!("failed to fetch record for {}", args.date))?;

    let json = serde_json::to_string_pretty(&record).context("failed to serialize record")?;
    println!("{json}");
    Ok(())
}

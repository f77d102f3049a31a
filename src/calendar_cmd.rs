use anyhow::{Context, Result};
use tracing::info;

use selene_calendar::build_calendar;

use crate::cli::CalendarArgs;
use crate::{config, convert};

/// Run the `calendar` subcommand.
pub fn run(args: CalendarArgs) -> Result<()> {
    let config = config::load(&args.config)?;
    let fetcher = convert::build_fetcher(&config)?;

    info!(year = args.year, "building lunar calendar");
    let entries = build_calendar(
        args.year,
        |date| fetcher.daily(date).map_err(Into::into),
        |year| fetcher.year_phases(year).map_err(Into::into),
    )
    .with_context(|| format!("failed to build calendar for {}", args.year))?;
    info!(n_days = entries.len(), "calendar built");

    let json =
        serde_json::to_string_pretty(&entries).context("failed to serialize calendar")?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "calendar written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

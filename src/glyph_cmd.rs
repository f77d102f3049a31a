use anyhow::{bail, Context, Result};
use tracing::info;

use selene_calendar::{DailyRecord, Phase};
use selene_glyph::{rasterize, render_phase, Direction, PhaseGlyph};

use crate::cli::GlyphArgs;
use crate::{config, convert};

/// Run the `glyph` subcommand.
pub fn run(args: GlyphArgs) -> Result<()> {
    let glyph = match (args.date, args.illumination) {
        (Some(date), _) => {
            let config = config::load(&args.config)?;
            let fetcher = convert::build_fetcher(&config)?;
            info!(%date, "fetching daily record for glyph");
            let record = fetcher
                .daily(date)
                .with_context(|| format!("failed to fetch record for {date}"))?;
            glyph_for_record(&record)?
        }
        (None, Some(percent)) => select_glyph(percent, args.direction.as_deref())?,
        (None, None) => bail!("either --date or --illumination is required"),
    };

    let image = rasterize(&glyph, args.size);
    image
        .save(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!(path = %args.output.display(), size = args.size, "glyph written");
    Ok(())
}

/// Picks draw instructions for an explicit percentage and direction.
fn select_glyph(percent: u8, direction: Option<&str>) -> Result<PhaseGlyph> {
    if percent > 100 {
        bail!("illumination must be 0-100, got {percent}");
    }
    match direction {
        None if percent == 0 => Ok(PhaseGlyph::new_moon()),
        None if percent == 100 => Ok(PhaseGlyph::full_moon()),
        None => bail!("--direction is required for partial illumination"),
        Some(name) => {
            let direction = parse_direction(name)?;
            render_phase(f64::from(percent) / 100.0, direction).map_err(Into::into)
        }
    }
}

/// Picks draw instructions for a fetched daily record.
fn glyph_for_record(record: &DailyRecord) -> Result<PhaseGlyph> {
    let percent = record.illumination_percent;
    let glyph = match record.phase.waxing() {
        _ if percent == 0 => PhaseGlyph::new_moon(),
        _ if percent == 100 => PhaseGlyph::full_moon(),
        Some(true) => render_phase(f64::from(percent) / 100.0, Direction::Waxing)?,
        Some(false) => render_phase(f64::from(percent) / 100.0, Direction::Waning)?,
        None => {
            // A syzygy name can still carry a near-extreme fraction on
            // its civil day; lean toward the side the cycle is heading.
            let direction = if record.phase == Phase::NewMoon {
                Direction::Waxing
            } else {
                Direction::Waning
            };
            render_phase(f64::from(percent) / 100.0, direction)?
        }
    };
    Ok(glyph)
}

fn parse_direction(name: &str) -> Result<Direction> {
    Ok(match name {
        "waxing" => Direction::Waxing,
        "waning" => Direction::Waning,
        "first-quarter" => Direction::FirstQuarter,
        "third-quarter" => Direction::ThirdQuarter,
        _ => bail!(
            "unknown direction {name:?} (expected waxing, waning, first-quarter, third-quarter)"
        ),
    })
}

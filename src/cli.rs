use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Selene lunar almanac toolkit.
#[derive(Parser)]
#[command(
    name = "selene",
    version,
    about = "Lunar almanac client and calendar generator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Build the lunar calendar for a full year.
    Calendar(CalendarArgs),
    /// Fetch one civil day's almanac record.
    Day(DayArgs),
    /// Render a moon-phase glyph to PNG.
    Glyph(GlyphArgs),
}

/// Arguments for the `calendar` subcommand.
#[derive(clap::Args)]
pub struct CalendarArgs {
    /// Target year (four digits).
    #[arg(short, long)]
    pub year: i32,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "selene.toml")]
    pub config: PathBuf,

    /// Write JSON here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `day` subcommand.
#[derive(clap::Args)]
pub struct DayArgs {
    /// Civil date to query (YYYY-MM-DD).
    #[arg(short, long)]
    pub date: NaiveDate,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "selene.toml")]
    pub config: PathBuf,
}

/// Arguments for the `glyph` subcommand.
#[derive(clap::Args)]
pub struct GlyphArgs {
    /// Render the moon as it appears on this date (fetches the record).
    #[arg(long, conflicts_with_all = ["illumination", "direction"])]
    pub date: Option<NaiveDate>,

    /// Illuminated percentage of the disk (0-100).
    #[arg(short, long)]
    pub illumination: Option<u8>,

    /// Trend direction: waxing, waning, first-quarter, third-quarter.
    #[arg(short, long)]
    pub direction: Option<String>,

    /// Path to TOML configuration file (used with --date).
    #[arg(short, long, default_value = "selene.toml")]
    pub config: PathBuf,

    /// Image width and height in pixels.
    #[arg(short, long, default_value_t = 256)]
    pub size: u32,

    /// Output PNG path.
    #[arg(short, long, default_value = "moon.png")]
    pub output: PathBuf,
}

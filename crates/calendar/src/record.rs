//! Value types for daily almanac records and phase events.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::error::CalendarError;

/// The eight named lunar phases the almanac service reports for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    #[serde(rename = "New Moon")]
    NewMoon,
    #[serde(rename = "Waxing Crescent")]
    WaxingCrescent,
    #[serde(rename = "First Quarter")]
    FirstQuarter,
    #[serde(rename = "Waxing Gibbous")]
    WaxingGibbous,
    #[serde(rename = "Full Moon")]
    FullMoon,
    #[serde(rename = "Waning Gibbous")]
    WaningGibbous,
    #[serde(rename = "Last Quarter")]
    LastQuarter,
    #[serde(rename = "Waning Crescent")]
    WaningCrescent,
}

impl Phase {
    /// Service vocabulary name for this phase.
    pub fn name(self) -> &'static str {
        match self {
            Phase::NewMoon => "New Moon",
            Phase::WaxingCrescent => "Waxing Crescent",
            Phase::FirstQuarter => "First Quarter",
            Phase::WaxingGibbous => "Waxing Gibbous",
            Phase::FullMoon => "Full Moon",
            Phase::WaningGibbous => "Waning Gibbous",
            Phase::LastQuarter => "Last Quarter",
            Phase::WaningCrescent => "Waning Crescent",
        }
    }

    /// Whether the illuminated fraction is growing (`Some(true)`),
    /// shrinking (`Some(false)`), or at an extreme where the question
    /// does not apply (`None`, new and full moon).
    pub fn waxing(self) -> Option<bool> {
        match self {
            Phase::WaxingCrescent | Phase::FirstQuarter | Phase::WaxingGibbous => Some(true),
            Phase::WaningGibbous | Phase::LastQuarter | Phase::WaningCrescent => Some(false),
            Phase::NewMoon | Phase::FullMoon => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Phase {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "New Moon" => Phase::NewMoon,
            "Waxing Crescent" => Phase::WaxingCrescent,
            "First Quarter" => Phase::FirstQuarter,
            "Waxing Gibbous" => Phase::WaxingGibbous,
            "Full Moon" => Phase::FullMoon,
            "Waning Gibbous" => Phase::WaningGibbous,
            "Last Quarter" => Phase::LastQuarter,
            "Waning Crescent" => Phase::WaningCrescent,
            _ => {
                return Err(CalendarError::UnknownPhase {
                    name: s.to_string(),
                })
            }
        })
    }
}

/// The four discrete transition phases carried by yearly phase lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SyzygyPhase {
    #[serde(rename = "New Moon")]
    NewMoon,
    #[serde(rename = "First Quarter")]
    FirstQuarter,
    #[serde(rename = "Full Moon")]
    FullMoon,
    #[serde(rename = "Last Quarter")]
    LastQuarter,
}

impl SyzygyPhase {
    /// Service vocabulary name for this phase.
    pub fn name(self) -> &'static str {
        match self {
            SyzygyPhase::NewMoon => "New Moon",
            SyzygyPhase::FirstQuarter => "First Quarter",
            SyzygyPhase::FullMoon => "Full Moon",
            SyzygyPhase::LastQuarter => "Last Quarter",
        }
    }
}

impl fmt::Display for SyzygyPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SyzygyPhase {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "New Moon" => SyzygyPhase::NewMoon,
            "First Quarter" => SyzygyPhase::FirstQuarter,
            "Full Moon" => SyzygyPhase::FullMoon,
            "Last Quarter" => SyzygyPhase::LastQuarter,
            _ => {
                return Err(CalendarError::UnknownPhase {
                    name: s.to_string(),
                })
            }
        })
    }
}

/// One civil day's almanac summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyRecord {
    /// Civil date the record describes.
    pub date: NaiveDate,
    /// Event name ("Rise", "Set", "Upper Transit", ...) to time of day.
    ///
    /// The moon's ~24h50m day means a rise or set can be skipped on a
    /// civil day, so 0-3 of the expected names may be present, along with
    /// anything else the service chooses to return.
    pub events: BTreeMap<String, NaiveTime>,
    /// Named phase closest to this day.
    pub phase: Phase,
    /// Illuminated fraction of the visible disk, 0..=100.
    pub illumination_percent: u8,
}

/// A single discrete phase transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseEvent {
    /// Which of the four transitions occurred.
    pub phase: SyzygyPhase,
    /// UTC instant of the transition, minute precision.
    pub timestamp: NaiveDateTime,
}

/// A [`DailyRecord`] annotated with its position in the lunar cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEntry {
    #[serde(flatten)]
    pub record: DailyRecord,
    /// Zero-based ordinal of the synodic month containing this date,
    /// counted from the first new moon at or after the window start.
    pub lunar_month: u32,
    /// Zero-based day offset within the synodic month; 0 exactly on days
    /// whose phase is the new moon.
    pub lunar_day: u32,
}

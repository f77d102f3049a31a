//! Normalization of raw almanac payloads into calendar records.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use selene_calendar::{DailyRecord, Phase, PhaseEvent, SyzygyPhase};
use serde_json::Value;

use crate::error::AlmanacError;

/// Normalizes a `rstt/oneday` response into a [`DailyRecord`].
///
/// Later duplicates of an event name overwrite earlier ones. The service
/// has never been observed to emit duplicates, but last-wins is the
/// defined tie-break. Entries under `sundata` are ignored; only the moon
/// table contributes events.
///
/// # Errors
///
/// Data-contract failure when `moondata` is absent or not an array, when
/// the phase name is missing or unrecognized, or when `fracillum` lacks
/// its `%` suffix.
pub fn parse_daily(raw: &Value, date: NaiveDate) -> Result<DailyRecord, AlmanacError> {
    let data = raw
        .pointer("/properties/data")
        .ok_or(AlmanacError::MissingField {
            field: "properties.data",
        })?;

    let moondata = data
        .get("moondata")
        .and_then(Value::as_array)
        .ok_or(AlmanacError::MissingField { field: "moondata" })?;

    let mut events = BTreeMap::new();
    for item in moondata {
        let phen = item
            .get("phen")
            .and_then(Value::as_str)
            .ok_or(AlmanacError::MissingField {
                field: "moondata.phen",
            })?;
        let time = item
            .get("time")
            .and_then(Value::as_str)
            .ok_or(AlmanacError::MissingField {
                field: "moondata.time",
            })?;
        events.insert(phen.to_string(), parse_clock(time)?);
    }

    // On syzygy days the service drops `curphase` and names the phase in
    // `closestphase` instead.
    let phase_name = data
        .get("curphase")
        .and_then(Value::as_str)
        .or_else(|| data.pointer("/closestphase/phase").and_then(Value::as_str))
        .ok_or(AlmanacError::MissingField { field: "curphase" })?;
    let phase: Phase = phase_name.parse().map_err(|_| AlmanacError::UnknownPhase {
        name: phase_name.to_string(),
    })?;

    let fracillum = data
        .get("fracillum")
        .and_then(Value::as_str)
        .ok_or(AlmanacError::MissingField { field: "fracillum" })?;
    let illumination_percent = parse_percent(fracillum)?;

    Ok(DailyRecord {
        date,
        events,
        phase,
        illumination_percent,
    })
}

/// Normalizes a `moon/phases/year` response into time-ordered
/// [`PhaseEvent`]s.
///
/// The declared `numphases` must equal the delivered list length. Input
/// order is preserved and assumed chronological, not re-verified.
///
/// # Errors
///
/// Data-contract failure on a count mismatch, an unrecognized phase
/// name, a time string that is not exactly `HH:MM`, or date fields that
/// do not name a real date.
pub fn parse_year_phases(raw: &Value) -> Result<Vec<PhaseEvent>, AlmanacError> {
    let declared = raw
        .get("numphases")
        .and_then(Value::as_u64)
        .ok_or(AlmanacError::MissingField { field: "numphases" })?;
    let phasedata = raw
        .get("phasedata")
        .and_then(Value::as_array)
        .ok_or(AlmanacError::MissingField { field: "phasedata" })?;
    if declared as usize != phasedata.len() {
        return Err(AlmanacError::CountMismatch {
            declared,
            actual: phasedata.len(),
        });
    }

    let mut events = Vec::with_capacity(phasedata.len());
    for item in phasedata {
        let phase_name = item
            .get("phase")
            .and_then(Value::as_str)
            .ok_or(AlmanacError::MissingField {
                field: "phasedata.phase",
            })?;
        let phase: SyzygyPhase =
            phase_name
                .parse()
                .map_err(|_| AlmanacError::UnknownPhase {
                    name: phase_name.to_string(),
                })?;

        let year = int_field(item, "year")? as i32;
        let month = int_field(item, "month")? as u32;
        let day = int_field(item, "day")? as u32;
        let time = item
            .get("time")
            .and_then(Value::as_str)
            .ok_or(AlmanacError::MissingField {
                field: "phasedata.time",
            })?;

        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(AlmanacError::InvalidDate { year, month, day })?;
        events.push(PhaseEvent {
            phase,
            timestamp: date.and_time(parse_clock(time)?),
        });
    }
    Ok(events)
}

/// Splits an `HH:MM` string into a time of day.
///
/// Exactly two colon-separated components are required; seconds are
/// never part of the service's clock strings.
fn parse_clock(value: &str) -> Result<NaiveTime, AlmanacError> {
    let malformed = || AlmanacError::MalformedTime {
        value: value.to_string(),
    };
    let mut parts = value.split(':');
    let (Some(h), Some(m), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };
    let hour: u32 = h.parse().map_err(|_| malformed())?;
    let minute: u32 = m.parse().map_err(|_| malformed())?;
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(malformed)
}

/// Strips the mandatory `%` suffix and parses the remainder as 0..=100.
fn parse_percent(value: &str) -> Result<u8, AlmanacError> {
    let digits = value
        .strip_suffix('%')
        .ok_or_else(|| AlmanacError::MissingPercentSuffix {
            value: value.to_string(),
        })?;
    let percent: u8 = digits.parse().map_err(|_| AlmanacError::BadPercentage {
        value: value.to_string(),
    })?;
    if percent > 100 {
        return Err(AlmanacError::BadPercentage {
            value: value.to_string(),
        });
    }
    Ok(percent)
}

/// Integer field accessor shared by the yearly parser.
fn int_field(item: &Value, field: &'static str) -> Result<i64, AlmanacError> {
    item.get(field)
        .and_then(Value::as_i64)
        .ok_or(AlmanacError::MissingField { field })
}

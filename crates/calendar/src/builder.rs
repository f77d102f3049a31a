//! Lunar calendar construction.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::error::{CalendarError, FetchError};
use crate::range::date_range;
use crate::record::{CalendarEntry, DailyRecord, Phase, PhaseEvent, SyzygyPhase};

/// Builds the lunar calendar for `year`.
///
/// The query window runs from the last new moon of `year - 1` through the
/// first new moon of `year + 1`, inclusive, so every synodic month
/// touching the target year is walked from its true start. One daily
/// record is fetched per window date, in order; `lunar_month` increments
/// and `lunar_day` resets to 0 on each new-moon day after the first, and
/// the result is the window filtered down to the target year's dates.
///
/// `lunar_day` values in the result are counted from the window start,
/// not from January 1: the first and last months of the year are partial
/// and keep the offsets they had inside the full window.
///
/// # Errors
///
/// Any [`FetchError`] from either capability aborts the build with no
/// partial result. [`CalendarError::NoNewMoon`] is returned when any of
/// the three queried years yields an empty new-moon list.
pub fn build_calendar<D, P>(
    year: i32,
    mut fetch_daily: D,
    mut fetch_year_phases: P,
) -> Result<Vec<CalendarEntry>, CalendarError>
where
    D: FnMut(NaiveDate) -> Result<DailyRecord, FetchError>,
    P: FnMut(i32) -> Result<Vec<PhaseEvent>, FetchError>,
{
    let start = new_moon_dates(&fetch_year_phases(year - 1)?)
        .last()
        .copied()
        .ok_or(CalendarError::NoNewMoon { year: year - 1 })?;

    // The target year's own list is not used for the window bounds, but
    // an empty one still means the feed is unusable.
    if new_moon_dates(&fetch_year_phases(year)?).is_empty() {
        return Err(CalendarError::NoNewMoon { year });
    }

    let end = new_moon_dates(&fetch_year_phases(year + 1)?)
        .first()
        .copied()
        .ok_or(CalendarError::NoNewMoon { year: year + 1 })?;

    let window = date_range(start, end)?;
    debug!(%start, %end, n_days = window.len(), "query window resolved");

    let mut lunar_month = 0u32;
    let mut lunar_day = 0u32;
    let mut entries = Vec::with_capacity(window.len());
    for (i, &date) in window.iter().enumerate() {
        let record = fetch_daily(date)?;
        // The window starts on a new-moon day; both counters begin at 0
        // there without an increment.
        if i > 0 {
            if record.phase == Phase::NewMoon {
                lunar_month += 1;
                lunar_day = 0;
            } else {
                lunar_day += 1;
            }
        }
        entries.push(CalendarEntry {
            record,
            lunar_month,
            lunar_day,
        });
    }

    entries.retain(|e| e.record.date.year() == year);
    debug!(n_days = entries.len(), "calendar filtered to target year");
    Ok(entries)
}

/// Civil dates of the new-moon events in `events`, in input order.
fn new_moon_dates(events: &[PhaseEvent]) -> Vec<NaiveDate> {
    events
        .iter()
        .filter(|e| e.phase == SyzygyPhase::NewMoon)
        .map(|e| e.timestamp.date())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phase_event(phase: SyzygyPhase, year: i32, month: u32, day: u32) -> PhaseEvent {
        PhaseEvent {
            phase,
            timestamp: NaiveDate::from_ymd_opt(year, month, day)
                .unwrap()
                .and_hms_opt(11, 57, 0)
                .unwrap(),
        }
    }

    fn no_daily(_: NaiveDate) -> Result<DailyRecord, FetchError> {
        panic!("daily fetch should not be reached");
    }

    #[test]
    fn empty_prior_year_is_fatal() {
        let err = build_calendar(2024, no_daily, |_| Ok(Vec::new())).unwrap_err();
        assert_eq!(err, CalendarError::NoNewMoon { year: 2023 });
    }

    #[test]
    fn quarters_alone_do_not_count_as_new_moons() {
        // A populated list with no New Moon entries must fail the same way.
        let err = build_calendar(2024, no_daily, |year| {
            Ok(vec![
                phase_event(SyzygyPhase::FirstQuarter, year, 1, 4),
                phase_event(SyzygyPhase::FullMoon, year, 1, 11),
                phase_event(SyzygyPhase::LastQuarter, year, 1, 19),
            ])
        })
        .unwrap_err();
        assert_eq!(err, CalendarError::NoNewMoon { year: 2023 });
    }

    #[test]
    fn empty_target_year_is_fatal() {
        let err = build_calendar(2024, no_daily, |year| {
            if year == 2023 {
                Ok(vec![phase_event(SyzygyPhase::NewMoon, 2023, 12, 12)])
            } else {
                Ok(Vec::new())
            }
        })
        .unwrap_err();
        assert_eq!(err, CalendarError::NoNewMoon { year: 2024 });
    }

    #[test]
    fn empty_next_year_is_fatal() {
        let err = build_calendar(2024, no_daily, |year| {
            if year == 2025 {
                Ok(Vec::new())
            } else {
                Ok(vec![phase_event(SyzygyPhase::NewMoon, year, 12, 12)])
            }
        })
        .unwrap_err();
        assert_eq!(err, CalendarError::NoNewMoon { year: 2025 });
    }

    #[test]
    fn phase_fetch_failure_propagates() {
        let err = build_calendar(2024, no_daily, |_| {
            Err(FetchError::Transport {
                reason: "connection reset".to_string(),
            })
        })
        .unwrap_err();
        assert_eq!(
            err,
            CalendarError::Fetch(FetchError::Transport {
                reason: "connection reset".to_string(),
            })
        );
    }

    #[test]
    fn daily_fetch_failure_propagates() {
        let err = build_calendar(
            2024,
            |_| {
                Err(FetchError::DataContract {
                    reason: "moondata missing".to_string(),
                })
            },
            |year| Ok(vec![phase_event(SyzygyPhase::NewMoon, year, 6, 6)]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            CalendarError::Fetch(FetchError::DataContract {
                reason: "moondata missing".to_string(),
            })
        );
    }
}

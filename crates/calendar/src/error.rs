//! Error types for the selene-calendar crate.

use chrono::NaiveDate;

/// Failure at the injected fetch-capability boundary.
///
/// The calendar builder never retries or downgrades either class; any
/// fetch failure aborts the in-progress build without partial results.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Network or HTTP-level failure while querying the almanac service.
    #[error("transport failure: {reason}")]
    Transport {
        /// Human-readable cause from the transport layer.
        reason: String,
    },

    /// A payload violated the almanac data contract.
    #[error("data contract violation: {reason}")]
    DataContract {
        /// Which invariant the payload broke.
        reason: String,
    },
}

/// Error type for all fallible operations in the selene-calendar crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a date range ends before it starts.
    #[error("empty date range: {end} is before {start}")]
    EmptyRange {
        /// Requested first date.
        start: NaiveDate,
        /// Requested last date.
        end: NaiveDate,
    },

    /// Returned when a queried year's phase list contains no new moon.
    ///
    /// Real lunar periodicity guarantees 12 or 13 new moons per year, so
    /// an empty filter result always means the upstream feed is broken.
    #[error("no new moon found in year {year}")]
    NoNewMoon {
        /// The year whose phase list lacked a new moon.
        year: i32,
    },

    /// Returned when a phase name is outside the almanac vocabulary.
    #[error("unknown phase name: {name:?}")]
    UnknownPhase {
        /// The unrecognized name as received.
        name: String,
    },

    /// A fetch capability failed; the build is aborted wholesale.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_range() {
        let err = CalendarError::EmptyRange {
            start: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "empty date range: 2024-03-01 is before 2024-03-05"
        );
    }

    #[test]
    fn error_no_new_moon() {
        let err = CalendarError::NoNewMoon { year: 2025 };
        assert_eq!(err.to_string(), "no new moon found in year 2025");
    }

    #[test]
    fn error_unknown_phase() {
        let err = CalendarError::UnknownPhase {
            name: "Gibbous Crescent".to_string(),
        };
        assert_eq!(err.to_string(), "unknown phase name: \"Gibbous Crescent\"");
    }

    #[test]
    fn fetch_error_wraps_transparently() {
        let err = CalendarError::from(FetchError::Transport {
            reason: "connection refused".to_string(),
        });
        assert_eq!(err.to_string(), "transport failure: connection refused");
    }

    #[test]
    fn data_contract_display() {
        let err = FetchError::DataContract {
            reason: "count mismatch".to_string(),
        };
        assert_eq!(err.to_string(), "data contract violation: count mismatch");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
        assert_impl::<FetchError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}

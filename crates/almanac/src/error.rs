//! Error types for the selene-almanac crate.

use selene_calendar::FetchError;

/// Error type for all fallible operations in the selene-almanac crate.
#[derive(Debug, thiserror::Error)]
pub enum AlmanacError {
    /// Request could not be built, sent, or read.
    #[error("request to {url} failed: {reason}")]
    Http {
        /// Full request URL.
        url: String,
        /// Underlying transport failure.
        reason: String,
    },

    /// Service answered with a non-success status.
    #[error("{url} answered HTTP {status}")]
    Status {
        /// Full request URL.
        url: String,
        /// Status code received.
        status: u16,
    },

    /// Response body was not valid JSON.
    #[error("invalid JSON from {url}: {reason}")]
    Json { url: String, reason: String },

    /// A required field is missing or has the wrong type.
    #[error("missing or malformed field `{field}`")]
    MissingField { field: &'static str },

    /// Declared phase count does not match the delivered list.
    #[error("phase list declares {declared} events but contains {actual}")]
    CountMismatch { declared: u64, actual: usize },

    /// A clock string is not of the form HH:MM.
    #[error("malformed time string {value:?}")]
    MalformedTime { value: String },

    /// Date fields do not name a real calendar date.
    #[error("invalid date {year}-{month:02}-{day:02} in response")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Illumination value lacks the required percent suffix.
    #[error("illumination value {value:?} lacks a % suffix")]
    MissingPercentSuffix { value: String },

    /// Illumination value is not an integer percentage 0..=100.
    #[error("illumination value {value:?} is not a percentage")]
    BadPercentage { value: String },

    /// A phase name is outside the service vocabulary.
    #[error("unknown phase name {name:?}")]
    UnknownPhase { name: String },

    /// Cache file could not be read, written, or decoded.
    #[error("cache I/O at {path}: {reason}")]
    Cache { path: String, reason: String },
}

impl From<AlmanacError> for FetchError {
    /// Classifies an almanac failure into the capability taxonomy the
    /// calendar builder understands: infrastructure failures are
    /// transport-class, everything else broke the payload contract.
    fn from(e: AlmanacError) -> Self {
        match e {
            AlmanacError::Http { .. }
            | AlmanacError::Status { .. }
            | AlmanacError::Cache { .. } => FetchError::Transport {
                reason: e.to_string(),
            },
            _ => FetchError::DataContract {
                reason: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display() {
        let err = AlmanacError::Status {
            url: "https://aa.usno.navy.mil/api/rstt/oneday".to_string(),
            status: 503,
        };
        assert_eq!(
            err.to_string(),
            "https://aa.usno.navy.mil/api/rstt/oneday answered HTTP 503"
        );
    }

    #[test]
    fn count_mismatch_display() {
        let err = AlmanacError::CountMismatch {
            declared: 50,
            actual: 49,
        };
        assert_eq!(
            err.to_string(),
            "phase list declares 50 events but contains 49"
        );
    }

    #[test]
    fn transport_classification() {
        let fetch: FetchError = AlmanacError::Status {
            url: "u".to_string(),
            status: 500,
        }
        .into();
        assert!(matches!(fetch, FetchError::Transport { .. }));

        let fetch: FetchError = AlmanacError::Http {
            url: "u".to_string(),
            reason: "dns".to_string(),
        }
        .into();
        assert!(matches!(fetch, FetchError::Transport { .. }));
    }

    #[test]
    fn contract_classification() {
        for err in [
            AlmanacError::MissingField { field: "moondata" },
            AlmanacError::CountMismatch {
                declared: 4,
                actual: 3,
            },
            AlmanacError::MissingPercentSuffix {
                value: "29".to_string(),
            },
            AlmanacError::MalformedTime {
                value: "10:23:00".to_string(),
            },
        ] {
            let fetch: FetchError = err.into();
            assert!(matches!(fetch, FetchError::DataContract { .. }));
        }
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<AlmanacError>();
    }
}

//! Composition of client, cache, and parsers into fetch capabilities.

use chrono::NaiveDate;
use selene_calendar::{DailyRecord, PhaseEvent};
use serde_json::Value;

use crate::cache::DiskCache;
use crate::client::AlmanacClient;
use crate::error::AlmanacError;
use crate::parse::{parse_daily, parse_year_phases};

/// Fetches and normalizes almanac data, consulting a disk cache first.
///
/// Raw responses are cached, not parsed records, so a contract bug fixed
/// in the parser retroactively applies to already-cached days.
pub struct Fetcher {
    client: AlmanacClient,
    cache: Option<DiskCache>,
}

impl Fetcher {
    pub fn new(client: AlmanacClient, cache: Option<DiskCache>) -> Self {
        Self { client, cache }
    }

    /// One civil day's record, cached under its ISO date.
    pub fn daily(&self, date: NaiveDate) -> Result<DailyRecord, AlmanacError> {
        let key = date.format("%Y-%m-%d").to_string();
        let raw = self.raw(&key, || self.client.one_day(date))?;
        parse_daily(&raw, date)
    }

    /// All phase events in `year`, cached under `phases-{year}`.
    pub fn year_phases(&self, year: i32) -> Result<Vec<PhaseEvent>, AlmanacError> {
        let key = format!("phases-{year}");
        let raw = self.raw(&key, || self.client.year_phases(year))?;
        parse_year_phases(&raw)
    }

    fn raw(
        &self,
        key: &str,
        miss: impl FnOnce() -> Result<Value, AlmanacError>,
    ) -> Result<Value, AlmanacError> {
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.load(key)? {
                return Ok(hit);
            }
        }
        let value = miss()?;
        if let Some(cache) = &self.cache {
            cache.store(key, &value)?;
        }
        Ok(value)
    }
}

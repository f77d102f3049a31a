//! # selene-almanac
//!
//! Collaborators around the lunar calendar core: a blocking client for
//! the USNO Astronomical Applications API, parsers that normalize its
//! payloads into `selene-calendar` records, and a write-once disk cache
//! so repeated runs touch the service only for dates they have never
//! seen.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `client` | GET-with-query-parameters HTTP client |
//! | `parse` | Daily and yearly response normalization |
//! | `cache` | One-file-per-key JSON response store |
//! | `fetch` | Cache + client + parser composition |
//! | `error` | Error types |

mod cache;
mod client;
mod error;
mod fetch;
mod parse;

pub use cache::DiskCache;
pub use client::{AlmanacClient, ClientConfig, DEFAULT_BASE_URL};
pub use error::AlmanacError;
pub use fetch::Fetcher;
pub use parse::{parse_daily, parse_year_phases};

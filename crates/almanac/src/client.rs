//! Blocking GET-with-query-parameters client for the USNO almanac API.

use bytes::Bytes;
use chrono::NaiveDate;
use http_body_util::{BodyExt, Empty};
use hyper::header::USER_AGENT;
use hyper::Request;
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use serde_json::Value;
use tokio::runtime::Runtime;
use tracing::debug;
use url::Url;

use crate::error::AlmanacError;

/// Default service endpoint.
pub const DEFAULT_BASE_URL: &str = "https://aa.usno.navy.mil/api";

/// Connection settings for [`AlmanacClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service root, without a trailing slash.
    pub base_url: String,
    /// Observer coordinate as "LAT,LON" decimal degrees.
    pub coords: String,
    /// UTC offset in hours applied to daily event times.
    pub tz: f64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            coords: "38.889444,-77.035278".to_string(),
            tz: -5.0,
        }
    }
}

/// Sequential, blocking almanac query client.
///
/// Owns a current-thread Tokio runtime that each request blocks on; the
/// tool issues one request at a time, so connection pooling and executor
/// tuning are left at the hyper defaults.
pub struct AlmanacClient {
    runtime: Runtime,
    http: Client<HttpsConnector<HttpConnector>, Empty<Bytes>>,
    config: ClientConfig,
}

impl AlmanacClient {
    /// Builds a client and its runtime.
    pub fn new(config: ClientConfig) -> Result<Self, AlmanacError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| AlmanacError::Http {
                url: config.base_url.clone(),
                reason: e.to_string(),
            })?;
        let connector = hyper_rustls::HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .build();
        let http = Client::builder(TokioExecutor::new()).build(connector);
        Ok(Self {
            runtime,
            http,
            config,
        })
    }

    /// Fetches the raw rise/set/transit summary for one civil day.
    pub fn one_day(&self, date: NaiveDate) -> Result<Value, AlmanacError> {
        let url = self.endpoint(
            "rstt/oneday",
            &[
                ("date", date.format("%Y-%m-%d").to_string()),
                ("coords", self.config.coords.clone()),
                ("tz", self.config.tz.to_string()),
            ],
        )?;
        self.get_json(url)
    }

    /// Fetches the raw list of all primary phase events in `year`.
    pub fn year_phases(&self, year: i32) -> Result<Value, AlmanacError> {
        let url = self.endpoint("moon/phases/year", &[("year", year.to_string())])?;
        self.get_json(url)
    }

    fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Result<Url, AlmanacError> {
        let joined = format!("{}/{}", self.config.base_url.trim_end_matches('/'), path);
        let mut url = Url::parse(&joined).map_err(|e| AlmanacError::Http {
            url: joined.clone(),
            reason: e.to_string(),
        })?;
        for (name, value) in query {
            url.query_pairs_mut().append_pair(name, value);
        }
        Ok(url)
    }

    fn get_json(&self, url: Url) -> Result<Value, AlmanacError> {
        debug!(%url, "GET");
        let http_err = |reason: String| AlmanacError::Http {
            url: url.to_string(),
            reason,
        };

        let uri: hyper::Uri = url
            .as_str()
            .parse()
            .map_err(|e: hyper::http::uri::InvalidUri| http_err(e.to_string()))?;
        let request = Request::builder()
            .uri(uri)
            .header(USER_AGENT, concat!("selene/", env!("CARGO_PKG_VERSION")))
            .body(Empty::<Bytes>::new())
            .map_err(|e| http_err(e.to_string()))?;

        let (status, body) = self.runtime.block_on(async {
            let response = self
                .http
                .request(request)
                .await
                .map_err(|e| http_err(e.to_string()))?;
            let status = response.status();
            let body = response
                .into_body()
                .collect()
                .await
                .map_err(|e| http_err(e.to_string()))?
                .to_bytes();
            Ok::<_, AlmanacError>((status, body))
        })?;

        if !status.is_success() {
            return Err(AlmanacError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        serde_json::from_slice(&body).map_err(|e| AlmanacError::Json {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_day_query_parameters() {
        let client = AlmanacClient::new(ClientConfig::default()).unwrap();
        let url = client
            .endpoint(
                "rstt/oneday",
                &[
                    ("date", "2024-03-05".to_string()),
                    ("coords", "38.889444,-77.035278".to_string()),
                    ("tz", "-5".to_string()),
                ],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://aa.usno.navy.mil/api/rstt/oneday?date=2024-03-05&coords=38.889444%2C-77.035278&tz=-5"
        );
    }

    #[test]
    fn trailing_slash_in_base_url_is_tolerated() {
        let client = AlmanacClient::new(ClientConfig {
            base_url: "https://example.test/api/".to_string(),
            ..ClientConfig::default()
        })
        .unwrap();
        let url = client
            .endpoint("moon/phases/year", &[("year", "2024".to_string())])
            .unwrap();
        assert_eq!(url.as_str(), "https://example.test/api/moon/phases/year?year=2024");
    }

    #[test]
    fn unparsable_base_url_is_reported() {
        let client = AlmanacClient::new(ClientConfig {
            base_url: "not a url".to_string(),
            ..ClientConfig::default()
        })
        .unwrap();
        let err = client.endpoint("rstt/oneday", &[]).unwrap_err();
        assert!(matches!(err, AlmanacError::Http { .. }));
    }
}

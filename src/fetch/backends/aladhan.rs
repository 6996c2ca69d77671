//! Aladhan timings API backend.
//!
//! Two lookups, same response shape:
//! - `GET /timings/{DD-MM-YYYY}?latitude=..&longitude=..&method=..&timezonestring=..`
//! - `GET /timingsByCity/{DD-MM-YYYY}?city=..&country=..&method=..`
//!
//! No timeout is set: an unresponsive server leaves the app loading.

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info, warn};

use crate::core::config::ResolvedConfig;
use crate::fetch::{FetchBackend, FetchError, Location, PrayerTimes, decode};

pub struct AladhanBackend {
    base_url: String,
    location: Location,
    method: u8,
    date: NaiveDate,
    client: reqwest::Client,
}

impl AladhanBackend {
    pub fn new(base_url: impl Into<String>, location: Location, method: u8, date: NaiveDate) -> Self {
        Self {
            base_url: base_url.into(),
            location,
            method,
            date,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(
            config.base_url.clone(),
            config.location.clone(),
            config.method,
            config.date,
        )
    }

    /// Request URL path and query pairs for the configured location.
    fn request_parts(&self) -> (String, Vec<(&'static str, String)>) {
        let date = self.date.format("%d-%m-%Y");
        let method = ("method", self.method.to_string());
        match &self.location {
            Location::Coordinates {
                latitude,
                longitude,
                timezone,
            } => (
                format!("{}/timings/{}", self.base_url, date),
                vec![
                    ("latitude", latitude.to_string()),
                    ("longitude", longitude.to_string()),
                    method,
                    ("timezonestring", timezone.clone()),
                ],
            ),
            Location::City { city, country } => (
                format!("{}/timingsByCity/{}", self.base_url, date),
                vec![
                    ("city", city.clone()),
                    ("country", country.clone()),
                    method,
                ],
            ),
        }
    }
}

const MAX_ERROR_MESSAGE: usize = 120;

/// One line describing an error response: the body's first non-empty line,
/// or the HTTP reason phrase when the body is empty or markup.
fn error_summary(status: reqwest::StatusCode, body: &str) -> String {
    let line = body
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .filter(|l| !l.starts_with('<'));
    match line {
        Some(line) => line.chars().take(MAX_ERROR_MESSAGE).collect(),
        None => status.canonical_reason().unwrap_or("unknown error").to_string(),
    }
}

#[async_trait]
impl FetchBackend for AladhanBackend {
    fn name(&self) -> &str {
        "aladhan"
    }

    async fn fetch(&self) -> Result<PrayerTimes, FetchError> {
        let (url, query) = self.request_parts();
        info!("Aladhan request: {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        debug!("Aladhan response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Aladhan API error: {} - {}", status.as_u16(), err_body);
            return Err(FetchError::Api {
                status: status.as_u16(),
                message: error_summary(status, &err_body),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        debug!("Aladhan response body: {} bytes", body.len());

        decode(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 13).unwrap()
    }

    #[test]
    fn test_coordinates_request_parts() {
        let backend = AladhanBackend::new(
            "https://api.aladhan.com/v1",
            Location::Coordinates {
                latitude: 31.9461222,
                longitude: 35.923844,
                timezone: "Asia/Amman".to_string(),
            },
            23,
            date(),
        );
        let (url, query) = backend.request_parts();
        assert_eq!(url, "https://api.aladhan.com/v1/timings/13-10-2025");
        assert_eq!(
            query,
            vec![
                ("latitude", "31.9461222".to_string()),
                ("longitude", "35.923844".to_string()),
                ("method", "23".to_string()),
                ("timezonestring", "Asia/Amman".to_string()),
            ]
        );
    }

    #[test]
    fn test_error_summary_uses_reason_for_html() {
        let body = "<html>\n<head><title>502 Bad Gateway</title></head>\n</html>\n";
        assert_eq!(
            error_summary(reqwest::StatusCode::BAD_GATEWAY, body),
            "Bad Gateway"
        );
    }

    #[test]
    fn test_error_summary_takes_first_text_line() {
        let body = "\n  upstream timed out  \nretry later\n";
        assert_eq!(
            error_summary(reqwest::StatusCode::GATEWAY_TIMEOUT, body),
            "upstream timed out"
        );
    }

    #[test]
    fn test_error_summary_is_capped() {
        let body = "x".repeat(500);
        let summary = error_summary(reqwest::StatusCode::INTERNAL_SERVER_ERROR, &body);
        assert_eq!(summary.chars().count(), MAX_ERROR_MESSAGE);
    }

    #[test]
    fn test_error_summary_empty_body() {
        assert_eq!(
            error_summary(reqwest::StatusCode::SERVICE_UNAVAILABLE, ""),
            "Service Unavailable"
        );
    }

    #[test]
    fn test_city_request_parts() {
        let backend = AladhanBackend::new(
            "http://localhost",
            Location::City {
                city: "Amman".to_string(),
                country: "Jordan".to_string(),
            },
            4,
            date(),
        );
        let (url, query) = backend.request_parts();
        assert_eq!(url, "http://localhost/timingsByCity/13-10-2025");
        assert_eq!(query[0], ("city", "Amman".to_string()));
        assert_eq!(query[2], ("method", "4".to_string()));
    }
}

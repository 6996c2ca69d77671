//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::core::spinner::SpinnerStyle;
use crate::core::state::App;
use crate::fetch::{FetchBackend, FetchError, PrayerTimes};

/// The five daily prayers with fixed, recognizable times.
pub fn sample_timings() -> PrayerTimes {
    PrayerTimes {
        fajr: "04:30".to_string(),
        sunrise: "05:52".to_string(),
        dhuhr: "11:45".to_string(),
        asr: "15:10".to_string(),
        sunset: "17:38".to_string(),
        maghrib: "17:50".to_string(),
        isha: "19:10".to_string(),
        imsak: "04:20".to_string(),
        midnight: "23:45".to_string(),
        first_third: "21:43".to_string(),
        last_third: "01:47".to_string(),
    }
}

/// Creates a fresh, loading App.
pub fn test_app() -> App {
    App::new(SpinnerStyle::Globe)
}

/// A backend whose fetch never completes. Lets tests inject fetch
/// results by hand without racing a real one.
pub struct PendingBackend {
    pub calls: Arc<AtomicUsize>,
}

impl PendingBackend {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl FetchBackend for PendingBackend {
    fn name(&self) -> &str {
        "pending"
    }

    async fn fetch(&self) -> Result<PrayerTimes, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::future::pending().await
    }
}

/// A backend that returns a canned result immediately.
pub struct StaticBackend {
    result: Result<PrayerTimes, FetchError>,
}

impl StaticBackend {
    pub fn ok(timings: PrayerTimes) -> Self {
        Self { result: Ok(timings) }
    }

    pub fn err(error: FetchError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl FetchBackend for StaticBackend {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self) -> Result<PrayerTimes, FetchError> {
        self.result.clone()
    }
}

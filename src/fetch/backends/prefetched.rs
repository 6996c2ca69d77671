//! Backend for timings fetched before the event loop started (`--blocking`).
//!
//! Lets the blocking mode go through the same `StartFetch` → `FetchSucceeded`
//! path as the asynchronous one.

use async_trait::async_trait;

use crate::fetch::{FetchBackend, FetchError, PrayerTimes};

pub struct PrefetchedBackend {
    timings: PrayerTimes,
}

impl PrefetchedBackend {
    pub fn new(timings: PrayerTimes) -> Self {
        Self { timings }
    }
}

#[async_trait]
impl FetchBackend for PrefetchedBackend {
    fn name(&self) -> &str {
        "prefetched"
    }

    async fn fetch(&self) -> Result<PrayerTimes, FetchError> {
        Ok(self.timings.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_timings;

    #[tokio::test]
    async fn test_prefetched_returns_stored_value() {
        let backend = PrefetchedBackend::new(sample_timings());
        assert_eq!(backend.name(), "prefetched");
        assert_eq!(backend.fetch().await.unwrap(), sample_timings());
    }
}

//! Prayer times payload and the Aladhan response envelope.
//!
//! Decoding is two explicit steps: `sanitize` normalizes the raw body,
//! then `decode` parses it and checks the envelope's status code.

use std::borrow::Cow;

use serde::Deserialize;

use super::backend::FetchError;

/// Where to compute prayer times for.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    Coordinates {
        latitude: f64,
        longitude: f64,
        timezone: String,
    },
    City {
        city: String,
        country: String,
    },
}

/// One day of timings, as strings straight from the API (e.g. `"04:30"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PrayerTimes {
    #[serde(rename = "Fajr")]
    pub fajr: String,
    #[serde(rename = "Sunrise", default)]
    pub sunrise: String,
    #[serde(rename = "Dhuhr")]
    pub dhuhr: String,
    #[serde(rename = "Asr")]
    pub asr: String,
    #[serde(rename = "Sunset", default)]
    pub sunset: String,
    #[serde(rename = "Maghrib")]
    pub maghrib: String,
    #[serde(rename = "Isha")]
    pub isha: String,
    #[serde(rename = "Imsak", default)]
    pub imsak: String,
    #[serde(rename = "Midnight", default)]
    pub midnight: String,
    #[serde(rename = "Firstthird", default)]
    pub first_third: String,
    #[serde(rename = "Lastthird", default)]
    pub last_third: String,
}

impl PrayerTimes {
    /// Labeled rows in display order. `extended` interleaves the
    /// non-prayer markers in chronological position.
    pub fn rows(&self, extended: bool) -> Vec<(&'static str, &str)> {
        if !extended {
            return vec![
                ("Fajr", self.fajr.as_str()),
                ("Dhuhr", self.dhuhr.as_str()),
                ("Asr", self.asr.as_str()),
                ("Maghrib", self.maghrib.as_str()),
                ("Isha", self.isha.as_str()),
            ];
        }
        vec![
            ("Imsak", self.imsak.as_str()),
            ("Fajr", self.fajr.as_str()),
            ("Sunrise", self.sunrise.as_str()),
            ("Dhuhr", self.dhuhr.as_str()),
            ("Asr", self.asr.as_str()),
            ("Sunset", self.sunset.as_str()),
            ("Maghrib", self.maghrib.as_str()),
            ("Isha", self.isha.as_str()),
            ("First third", self.first_third.as_str()),
            ("Midnight", self.midnight.as_str()),
            ("Last third", self.last_third.as_str()),
        ]
    }
}

#[derive(Deserialize, Debug)]
struct Envelope {
    code: u16,
    #[serde(default)]
    status: String,
    /// Kept untyped until `code` is checked; error envelopes carry a string here.
    #[serde(default)]
    data: serde_json::Value,
}

#[derive(Deserialize, Debug)]
struct EnvelopeData {
    timings: PrayerTimes,
}

/// Strips stray `%` characters the API has been seen to emit.
/// Borrows when there is nothing to remove.
pub fn sanitize(raw: &str) -> Cow<'_, str> {
    if raw.contains('%') {
        Cow::Owned(raw.replace('%', ""))
    } else {
        Cow::Borrowed(raw)
    }
}

/// Sanitizes and decodes an Aladhan timings response.
pub fn decode(raw: &str) -> Result<PrayerTimes, FetchError> {
    let body = sanitize(raw);
    let envelope: Envelope =
        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

    if envelope.code != 200 {
        return Err(FetchError::Api {
            status: envelope.code,
            message: envelope.status,
        });
    }

    if envelope.data.is_null() {
        return Err(FetchError::Decode("response has no data".to_string()));
    }
    serde_json::from_value::<EnvelopeData>(envelope.data)
        .map(|d| d.timings)
        .map_err(|e| FetchError::Decode(e.to_string()))
}

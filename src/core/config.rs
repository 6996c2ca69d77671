//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.prayer-times/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::spinner::SpinnerStyle;
use crate::fetch::Location;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PrayerConfig {
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LocationConfig {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub method: Option<u8>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub accent_color: Option<String>,
    pub help_color: Option<String>,
    pub header_color: Option<String>,
    pub fps: Option<u32>,
    pub spinner: Option<SpinnerStyle>,
    pub extended: Option<bool>,
    pub centered: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "https://api.aladhan.com/v1";
pub const DEFAULT_LATITUDE: f64 = 31.946_122_2;
pub const DEFAULT_LONGITUDE: f64 = 35.923_844;
pub const DEFAULT_TIMEZONE: &str = "Asia/Amman";
/// Aladhan calculation method 23 (Ministry of Awqaf, Jordan).
pub const DEFAULT_METHOD: u8 = 23;
pub const DEFAULT_FPS: u32 = 10;
pub const DEFAULT_ACCENT_COLOR: &str = "69";
pub const DEFAULT_HELP_COLOR: &str = "241";
pub const DEFAULT_HEADER_COLOR: &str = "#FAFAFA";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Flags given on the command line. `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub method: Option<u8>,
    pub date: Option<NaiveDate>,
    pub spinner: Option<SpinnerStyle>,
    pub extended: bool,
}

/// Display settings handed to the renderer and ticker. Colors stay as
/// strings here; the TUI layer parses them.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySettings {
    pub accent_color: String,
    pub help_color: String,
    pub header_color: String,
    pub fps: u32,
    pub spinner: SpinnerStyle,
    pub extended: bool,
    pub centered: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            help_color: DEFAULT_HELP_COLOR.to_string(),
            header_color: DEFAULT_HEADER_COLOR.to_string(),
            fps: DEFAULT_FPS,
            spinner: SpinnerStyle::default(),
            extended: false,
            centered: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub location: Location,
    pub method: u8,
    pub date: NaiveDate,
    pub display: DisplaySettings,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    /// Settings parsed but don't make sense together.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.prayer-times/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".prayer-times").join("config.toml"))
}

/// Load config from `~/.prayer-times/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PrayerConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<PrayerConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PrayerConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<PrayerConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(PrayerConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: PrayerConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r##"# Prayer Times Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [location]
# latitude = 31.9461222              # Or set PRAYER_TIMES_LATITUDE
# longitude = 35.923844              # Or set PRAYER_TIMES_LONGITUDE
# timezone = "Asia/Amman"            # Or set PRAYER_TIMES_TIMEZONE
# method = 23                        # Aladhan calculation method id
# city = "Amman"                     # Wins over file coordinates, not CLI/env ones
# country = "Jordan"                 # Required when city is set

# [display]
# accent_color = "69"                # Spinner color: name, 0-255, or "#rrggbb"
# help_color = "241"
# header_color = "#FAFAFA"
# fps = 10
# spinner = "globe"                  # "globe", "moon", "dot", "line"
# extended = false                   # Also show sunrise, sunset, imsak, night thirds
# centered = false

# [api]
# base_url = "https://api.aladhan.com/v1"
"##;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

fn env_parsed<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring unparseable {}={:?}", name, raw);
            None
        }
    }
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// The location kind follows the same precedence: a CLI city, then CLI
/// coordinates, then env coordinates, then a file city. A city requires a
/// country. Coordinate fields are then resolved one by one.
pub fn resolve(config: &PrayerConfig, cli: &CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    let loc = &config.location;

    let env_latitude: Option<f64> = env_parsed("PRAYER_TIMES_LATITUDE");
    let env_longitude: Option<f64> = env_parsed("PRAYER_TIMES_LONGITUDE");
    let coordinates_override = cli.latitude.is_some()
        || cli.longitude.is_some()
        || env_latitude.is_some()
        || env_longitude.is_some();
    let city = match &cli.city {
        Some(city) => Some(city.clone()),
        None if coordinates_override => None,
        None => loc.city.clone(),
    };

    let location = match city {
        Some(city) => {
            let country = cli
                .country
                .clone()
                .or_else(|| loc.country.clone())
                .ok_or_else(|| {
                    ConfigError::Invalid(format!("city \"{city}\" given without a country"))
                })?;
            Location::City { city, country }
        }
        None => Location::Coordinates {
            latitude: cli
                .latitude
                .or(env_latitude)
                .or(loc.latitude)
                .unwrap_or(DEFAULT_LATITUDE),
            longitude: cli
                .longitude
                .or(env_longitude)
                .or(loc.longitude)
                .unwrap_or(DEFAULT_LONGITUDE),
            timezone: cli
                .timezone
                .clone()
                .or_else(|| std::env::var("PRAYER_TIMES_TIMEZONE").ok())
                .or_else(|| loc.timezone.clone())
                .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string()),
        },
    };

    if let Location::Coordinates { latitude, longitude, .. } = &location {
        if !(-90.0..=90.0).contains(latitude) || !(-180.0..=180.0).contains(longitude) {
            return Err(ConfigError::Invalid(format!(
                "coordinates out of range: {latitude}, {longitude}"
            )));
        }
    }

    let method = cli
        .method
        .or_else(|| env_parsed("PRAYER_TIMES_METHOD"))
        .or(loc.method)
        .unwrap_or(DEFAULT_METHOD);

    // Base URL: env → config → default
    let base_url = std::env::var("PRAYER_TIMES_BASE_URL")
        .ok()
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let date = cli
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let display = &config.display;
    let display = DisplaySettings {
        accent_color: display
            .accent_color
            .clone()
            .unwrap_or_else(|| DEFAULT_ACCENT_COLOR.to_string()),
        help_color: display
            .help_color
            .clone()
            .unwrap_or_else(|| DEFAULT_HELP_COLOR.to_string()),
        header_color: display
            .header_color
            .clone()
            .unwrap_or_else(|| DEFAULT_HEADER_COLOR.to_string()),
        fps: display.fps.filter(|fps| *fps > 0).unwrap_or(DEFAULT_FPS),
        spinner: cli.spinner.or(display.spinner).unwrap_or_default(),
        extended: cli.extended || display.extended.unwrap_or(false),
        centered: display.centered.unwrap_or(false),
    };

    Ok(ResolvedConfig {
        base_url: base_url.trim_end_matches('/').to_string(),
        location,
        method,
        date,
        display,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = PrayerConfig::default();
        assert!(config.location.city.is_none());
        assert!(config.display.fps.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = PrayerConfig::default();
        let resolved = resolve(&config, &CliOverrides::default()).unwrap();
        assert_eq!(resolved.method, DEFAULT_METHOD);
        assert_eq!(resolved.display.fps, DEFAULT_FPS);
        assert_eq!(resolved.display.spinner, SpinnerStyle::Globe);
        assert_eq!(resolved.display.accent_color, DEFAULT_ACCENT_COLOR);
        assert!(!resolved.display.extended);
        assert!(matches!(resolved.location, Location::Coordinates { .. }));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = PrayerConfig {
            location: LocationConfig {
                method: Some(4),
                ..Default::default()
            },
            display: DisplayConfig {
                fps: Some(20),
                spinner: Some(SpinnerStyle::Moon),
                extended: Some(true),
                accent_color: Some("red".to_string()),
                ..Default::default()
            },
            api: ApiConfig {
                base_url: Some("http://localhost:9000/v1/".to_string()),
            },
        };
        let resolved = resolve(&config, &CliOverrides::default()).unwrap();
        assert_eq!(resolved.method, 4);
        assert_eq!(resolved.display.fps, 20);
        assert_eq!(resolved.display.spinner, SpinnerStyle::Moon);
        assert!(resolved.display.extended);
        assert_eq!(resolved.display.accent_color, "red");
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = PrayerConfig {
            location: LocationConfig {
                method: Some(4),
                ..Default::default()
            },
            display: DisplayConfig {
                spinner: Some(SpinnerStyle::Moon),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            method: Some(2),
            spinner: Some(SpinnerStyle::Line),
            date: NaiveDate::from_ymd_opt(2025, 10, 13),
            ..Default::default()
        };
        let resolved = resolve(&config, &cli).unwrap();
        assert_eq!(resolved.method, 2);
        assert_eq!(resolved.display.spinner, SpinnerStyle::Line);
        assert_eq!(resolved.date, NaiveDate::from_ymd_opt(2025, 10, 13).unwrap());
    }

    #[test]
    fn test_city_selects_city_location() {
        let config = PrayerConfig {
            location: LocationConfig {
                city: Some("Amman".to_string()),
                country: Some("Jordan".to_string()),
                latitude: Some(1.0),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default()).unwrap();
        assert_eq!(
            resolved.location,
            Location::City {
                city: "Amman".to_string(),
                country: "Jordan".to_string()
            }
        );
    }

    #[test]
    fn test_cli_coordinates_beat_file_city() {
        let config = PrayerConfig {
            location: LocationConfig {
                city: Some("Amman".to_string()),
                country: Some("Jordan".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            latitude: Some(21.4),
            longitude: Some(39.8),
            ..Default::default()
        };
        let resolved = resolve(&config, &cli).unwrap();
        match resolved.location {
            Location::Coordinates { latitude, longitude, .. } => {
                assert_eq!(latitude, 21.4);
                assert_eq!(longitude, 39.8);
            }
            other => panic!("expected coordinates, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_city_beats_cli_coordinates() {
        let cli = CliOverrides {
            city: Some("Mecca".to_string()),
            country: Some("Saudi Arabia".to_string()),
            latitude: Some(21.4),
            ..Default::default()
        };
        let resolved = resolve(&PrayerConfig::default(), &cli).unwrap();
        assert!(matches!(resolved.location, Location::City { .. }));
    }

    #[test]
    fn test_city_without_country_is_invalid() {
        let cli = CliOverrides {
            city: Some("Amman".to_string()),
            ..Default::default()
        };
        let err = resolve(&PrayerConfig::default(), &cli).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_out_of_range_coordinates_are_invalid() {
        let cli = CliOverrides {
            latitude: Some(120.0),
            ..Default::default()
        };
        let err = resolve(&PrayerConfig::default(), &cli).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_zero_fps_falls_back_to_default() {
        let config = PrayerConfig {
            display: DisplayConfig {
                fps: Some(0),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default()).unwrap();
        assert_eq!(resolved.display.fps, DEFAULT_FPS);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r##"
[location]
latitude = 21.4225
longitude = 39.8262
timezone = "Asia/Riyadh"
method = 4

[display]
accent_color = "#00ff00"
fps = 12
spinner = "dot"
extended = true

[api]
base_url = "http://127.0.0.1:8080/v1"
"##;
        let config: PrayerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.location.latitude, Some(21.4225));
        assert_eq!(config.location.timezone.as_deref(), Some("Asia/Riyadh"));
        assert_eq!(config.display.spinner, Some(SpinnerStyle::Dot));
        assert_eq!(config.display.extended, Some(true));
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("http://127.0.0.1:8080/v1")
        );
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[display]
fps = 5
"#;
        let config: PrayerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.fps, Some(5));
        assert!(config.location.latitude.is_none());
        assert!(config.api.base_url.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("prayer-times-cfg-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[display\nfps = ").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("prayer-times-gen-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);
        let config = load_config_from(&path).unwrap();
        assert!(config.location.city.is_none());
        let generated = fs::read_to_string(&path).unwrap();
        assert!(generated.contains("# [location]"));
        // The generated file is entirely commented out, so it parses as empty.
        let reparsed: PrayerConfig = toml::from_str(&generated).unwrap();
        assert!(reparsed.display.fps.is_none());
        let _ = fs::remove_dir_all(&dir);
    }
}

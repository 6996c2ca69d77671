use std::fs::File;
use std::process::ExitCode;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use prayer_times::core::config::{self, CliOverrides};
use prayer_times::core::spinner::SpinnerStyle;
use prayer_times::fetch::{AladhanBackend, FetchBackend, PrefetchedBackend};
use prayer_times::tui::{self, runtime::Outcome, theme::Theme};

#[derive(Parser)]
#[command(name = "prayer-times", about = "Today's prayer times in your terminal")]
struct Args {
    /// Look up by city instead of coordinates (requires --country)
    #[arg(long)]
    city: Option<String>,

    #[arg(long)]
    country: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    latitude: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    longitude: Option<f64>,

    /// IANA timezone, e.g. Asia/Amman
    #[arg(long)]
    timezone: Option<String>,

    /// Aladhan calculation method id
    #[arg(long)]
    method: Option<u8>,

    /// Day to show (YYYY-MM-DD), defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,

    #[arg(long, value_enum)]
    spinner: Option<SpinnerStyle>,

    /// Also show imsak, sunrise, sunset, midnight and the night thirds
    #[arg(long)]
    extended: bool,

    /// Fetch before opening the UI; no spinner, exits non-zero on failure
    #[arg(long)]
    blocking: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            latitude: self.latitude,
            longitude: self.longitude,
            timezone: self.timezone.clone(),
            city: self.city.clone(),
            country: self.country.clone(),
            method: self.method,
            date: self.date,
            spinner: self.spinner,
            extended: self.extended,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Ok(log_file) = File::create("prayer-times.log") {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let resolved = match config::resolve(&file_config, &args.overrides()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "Prayer times starting: {:?} on {} (method {})",
        resolved.location,
        resolved.date,
        resolved.method
    );

    let mut backend: Arc<dyn FetchBackend> = Arc::new(AladhanBackend::from_config(&resolved));

    if args.blocking {
        log::info!("Blocking mode: fetching before the UI starts");
        match backend.fetch().await {
            Ok(timings) => backend = Arc::new(PrefetchedBackend::new(timings)),
            Err(e) => {
                log::warn!("Startup fetch failed: {}", e);
                eprintln!("error: could not fetch prayer times: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    let theme = Theme::from_display(&resolved.display);
    match tui::run(theme, backend).await {
        Ok(outcome) => {
            if let Outcome::Failed(message) = &outcome {
                eprintln!("error: could not fetch prayer times: {message}");
            }
            exit_code(&outcome)
        }
        Err(e) => {
            eprintln!("error: terminal failure: {e}");
            ExitCode::FAILURE
        }
    }
}

/// A failed fetch ends the session with a non-zero status.
fn exit_code(outcome: &Outcome) -> ExitCode {
    match outcome {
        Outcome::Quit => ExitCode::SUCCESS,
        Outcome::Failed(_) => ExitCode::FAILURE,
    }
}

use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

use crate::store::SNAPSHOT_NAME;
use crate::types::Coords;

#[macro_export]
macro_rules! dlog {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*);
    };
}

/// Initialize colorful logging.
///
/// Default level is INFO.
/// - `-v` => DEBUG
/// - `-vv` => TRACE
/// - `-q` => WARN
/// - `-qq` => ERROR
///
/// `RUST_LOG` overrides everything (e.g. `RUST_LOG=trace`).
pub fn init_logging(verbose: u8, quiet: u8) {
    let net = i16::from(verbose) - i16::from(quiet);
    let level = match net {
        i16::MIN..=-2 => "error",
        -1 => "warn",
        0 => "info",
        1 => "debug",
        2..=i16::MAX => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,mapty={level}")));

    let show_src = matches!(level, "debug" | "trace");

    fmt()
        .with_env_filter(filter)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .with_target(true)
        .with_level(true)
        .with_file(show_src)
        .with_line_number(show_src)
        .compact()
        .init();
}

/// Parses `"LAT,LNG"` (whitespace allowed around either number).
pub fn parse_coords(s: &str) -> Result<Coords> {
    let Some((lat, lng)) = s.split_once(',') else {
        bail!("expected LAT,LNG but got {s:?}");
    };
    let lat: f64 = lat
        .trim()
        .parse()
        .with_context(|| format!("latitude in {s:?}"))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .with_context(|| format!("longitude in {s:?}"))?;

    if !(-90.0..=90.0).contains(&lat) {
        bail!("latitude {lat} out of range -90..=90");
    }
    if !(-180.0..=180.0).contains(&lng) {
        bail!("longitude {lng} out of range -180..=180");
    }
    Ok(Coords::new(lat, lng))
}

/// `<data dir>/workouts.json`, or `./workouts.json` when the platform has no home.
pub fn default_store_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "mapty").map_or_else(
        || PathBuf::from(SNAPSHOT_NAME),
        |dirs| dirs.data_dir().join(SNAPSHOT_NAME),
    )
}

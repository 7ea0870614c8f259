use chrono::Local;
use std::fmt;
use tracing::Level;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

/// Environment variable holding the diagnostic log level.
pub const LOG_ENV: &str = "APPICON_LOG";

const DEFAULT_LEVEL: Level = Level::WARN;

/// Wall-clock `HH:MM:SS` timestamps, the same format the sync log uses.
struct ClockTime;

impl FormatTime for ClockTime {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "[{}]", Local::now().format("%H:%M:%S"))
    }
}

/// Parses a level name, falling back to `WARN` for anything unrecognised.
pub fn parse_level(value: Option<&str>) -> Level {
    value
        .and_then(|v| v.trim().parse::<Level>().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

/// Installs the stderr logger. Stdout stays reserved for progress lines.
pub fn setup_logger() -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::{
        Registry, filter::LevelFilter, fmt::layer, layer::SubscriberExt, util::SubscriberInitExt,
    };

    let level = parse_level(std::env::var(LOG_ENV).ok().as_deref());
    Registry::default()
        .with(LevelFilter::from(level))
        .with(
            layer()
                .with_ansi(false)
                .with_target(false)
                .with_timer(ClockTime)
                .with_writer(std::io::stderr),
        )
        .try_init()
}

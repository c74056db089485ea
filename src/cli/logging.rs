//! Logging initialization for the binary
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the command line front end. The subscriber goes in before configuration
//! is loaded, at WARN for this crate, and its filter is narrowed or widened
//! once the settings are known.

use tracing::Level;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

use crate::models::config::Settings;

/// Handle on the installed subscriber's filter
pub struct Logging {
    filter: Option<reload::Handle<EnvFilter, Registry>>,
}

/// Install the stderr subscriber
///
/// `RUST_LOG` wins when set. Otherwise events from this crate are shown from
/// WARN up until [`Logging::apply`] is called. Calling this more than once
/// keeps the first subscriber.
pub fn init() -> Logging {
    let (filter, handle) = reload::Layer::new(initial_filter());

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .try_init()
        .is_ok();

    Logging {
        filter: installed.then_some(handle),
    }
}

impl Logging {
    /// Switch to the level the settings ask for
    ///
    /// `--verbose` selects DEBUG, `--quiet` ERROR, otherwise the configured
    /// log level applies. Does nothing when `RUST_LOG` is set.
    pub fn apply(&self, settings: &Settings) {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }

        if let Some(handle) = &self.filter {
            let _ = handle.reload(crate_filter(level_for(settings)));
        }
    }
}

fn initial_filter() -> EnvFilter {
    match std::env::var("RUST_LOG") {
        Ok(_) => EnvFilter::from_default_env(),
        Err(_) => crate_filter(Level::WARN),
    }
}

fn crate_filter(level: Level) -> EnvFilter {
    EnvFilter::new(format!("{}={}", crate::NAME, level))
}

fn level_for(settings: &Settings) -> Level {
    if settings.verbose {
        Level::DEBUG
    } else if settings.quiet {
        Level::ERROR
    } else {
        parse_level(&settings.log_level)
    }
}

fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

//! Logger built on `tracing-subscriber`
//!
//! Supports console output with color control and file output in full,
//! compact or JSON format.

pub mod config;
pub mod error;
pub(crate) mod writer;

pub use config::{ConsoleConfig, FileConfig, LogFormat, LogLevel, LoggerConfig};
pub use error::LoggerError;

use std::io::IsTerminal;

use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use writer::LogFileWriter;

/// Install the global subscriber described by `config`.
///
/// `RUST_LOG` is ignored; the level comes from configuration only.
pub fn init_logger(config: LoggerConfig) -> Result<(), LoggerError> {
    config.validate()?;

    let filter = EnvFilter::default().add_directive(LevelFilter::from(config.level).into());

    let file_writer = if config.file.enabled {
        Some(LogFileWriter::open(&config.file)?)
    } else {
        None
    };

    // The file layer goes first so console ANSI settings don't leak into
    // span fields written to the file (tokio-rs/tracing#1817).
    let registry = tracing_subscriber::registry().with(filter);
    let result = match (file_writer, config.file.format) {
        (Some(writer), LogFormat::Full) => registry
            .with(fmt::layer().with_ansi(false).with_target(true).with_writer(writer))
            .with(console_layer(&config.console))
            .try_init(),
        (Some(writer), LogFormat::Compact) => registry
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .compact()
                    .with_writer(writer),
            )
            .with(console_layer(&config.console))
            .try_init(),
        (Some(writer), LogFormat::Json) => registry
            .with(fmt::layer().with_ansi(false).json().with_writer(writer))
            .with(console_layer(&config.console))
            .try_init(),
        (None, _) => registry.with(console_layer(&config.console)).try_init(),
    };

    result.map_err(|e| LoggerError::init(e.to_string()))
}

fn console_layer<S>(config: &ConsoleConfig) -> Option<fmt::Layer<S>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let use_ansi = config.colored && std::io::stdout().is_terminal();
    config.enabled.then(|| {
        fmt::layer()
            .with_ansi(use_ansi)
            .with_target(true)
            .with_level(true)
    })
}

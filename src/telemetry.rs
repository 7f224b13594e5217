//! Builds the logging capability handed to the service.
//!
//! Nothing here installs a global subscriber. The returned [`Dispatch`] is
//! passed into [`SpecInputService::new`](crate::SpecInputService::new) (or
//! [`SpecInputApp::new`](crate::SpecInputApp::new)), which emits every event
//! inside it.
use tracing::Dispatch;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Environment variable whose filter directives override `logging.level`.
pub const LOG_ENV: &str = "SPEC_INTAKE_LOG";

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TelemetryError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
}

/// Subscriber writing to stderr, filtered by `SPEC_INTAKE_LOG` when set and
/// by `cfg.level` otherwise.
pub fn build_dispatch(cfg: &LoggingConfig) -> Result<Dispatch, TelemetryError> {
    let filter = match std::env::var(LOG_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives)?,
        _ => EnvFilter::try_new(&cfg.level)?,
    };
    Ok(dispatch_with_writer(cfg.format, filter, std::io::stderr))
}

/// Subscriber writing to an arbitrary writer; used by [`build_dispatch`] and
/// by tests that capture output.
pub fn dispatch_with_writer<W>(format: LogFormat, filter: EnvFilter, writer: W) -> Dispatch
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(writer);

    match format {
        LogFormat::Pretty => Dispatch::new(builder.pretty().finish()),
        LogFormat::Compact => Dispatch::new(builder.compact().finish()),
        LogFormat::Json => Dispatch::new(builder.json().finish()),
    }
}

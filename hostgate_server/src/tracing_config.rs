use crate::config::*;
use std::io::Error as IoError;
use tracing::Subscriber;
use tracing_core::LevelFilter;
use tracing_subscriber::{filter::filter_fn, prelude::*, registry::LookupSpan, Layer};

fn build_target<S>(
    conf: LogEntry,
    dir: &std::path::Path,
) -> Result<Box<dyn Layer<S> + Send + Sync + 'static>, IoError>
where
    S: Subscriber + Send + Sync,
    for<'span> S: LookupSpan<'span>,
{
    let layer = match &conf.target {
        LogTarget::File { filename } => {
            std::fs::create_dir_all(dir)?;
            tracing_subscriber::fmt::layer()
                .with_writer(tracing_appender::rolling::daily(dir, filename))
                .with_ansi(false)
                .boxed()
        }
        LogTarget::Builtin(BuiltinLogTarget::Stdout) => {
            tracing_subscriber::fmt::layer().with_writer(std::io::stdout).boxed()
        }
        LogTarget::Builtin(BuiltinLogTarget::Stderr) => {
            tracing_subscriber::fmt::layer().with_writer(std::io::stderr).boxed()
        }
    };

    let filter = filter_fn(move |metadata| {
        let level: LevelFilter = conf.level.map_or(LevelFilter::TRACE, Into::into);
        metadata.level() <= &level
            && (conf.modules.is_empty()
                || metadata
                    .module_path()
                    .map_or(true, |module| conf.modules.iter().any(|m| module.starts_with(m))))
    });

    Ok(layer.with_filter(filter).boxed())
}

/// Build a subscriber writing to each of the configured log targets.
///
/// Standard output is reserved for login results in the `hostgate` binary,
/// so the default configuration logs to standard error.
pub fn build_subscriber(conf: LoggingConfig) -> Result<impl Subscriber + Send + Sync, IoError> {
    let mut layers = Vec::new();

    for target in conf.targets {
        layers.push(build_target(target, &conf.dir)?);
    }

    // The global filter is for excluding overly verbose messages from external modules - its default
    // needs to be permissive so that individual log targets can filter as they need to
    let filter = tracing_subscriber::filter::Targets::new()
        .with_default(conf.default_level.unwrap_or(LogLevel::Trace))
        .with_targets(conf.module_levels);

    Ok(tracing_subscriber::registry().with(filter).with(layers))
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # [`init_tracing`]
//!
//! Set up [`tracing_subscriber`] for the generators. Stdout carries the fixture, so
//! log output can only go to `stderr`, to a file, or to both. See [`WriterConfig`].
//!
//! Logging is off unless `--enable-logging` is passed, in which case
//! [`DEFAULT_LOG_FILE_NAME`] receives `DEBUG` and above.

use miette::{IntoDiagnostic, WrapErr};
use std::path::PathBuf;
use tracing::dispatcher;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingScope {
    /// Set once per process. Used by the binaries.
    Global,
    /// Scoped to the current thread until the returned guard is dropped. Used by tests.
    ThreadLocal,
}

/// - `File` and `StderrAndFile` hold the log file path, eg: `log.txt` or
///   `/tmp/gen-grid.log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Stderr,
    File(String),
    StderrAndFile(String),
}

#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub scope: TracingScope,
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

impl TracingConfig {
    /// The configuration used by `--enable-logging`.
    #[must_use]
    pub fn new_file() -> Self {
        Self {
            scope: TracingScope::Global,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            level_filter: LevelFilter::DEBUG,
        }
    }
}

/// Initialize the tracing system with the provided [`TracingConfig`].
///
/// # Return
/// 1. For [`TracingScope::ThreadLocal`] this returns a [`dispatcher::DefaultGuard`].
///    Drop it to restore the previous subscriber for the thread.
/// 2. For [`TracingScope::Global`] this returns [`None`].
///
/// # Errors
///
/// Fails if the log file can't be opened, or a global subscriber is already set.
pub fn init_tracing(
    tracing_config: TracingConfig,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let scope = tracing_config.scope;
    let layers = try_create_layers(&tracing_config)?;
    match scope {
        TracingScope::Global => {
            tracing_subscriber::registry()
                .with(layers)
                .try_init()
                .into_diagnostic()?;
            Ok(None)
        }
        TracingScope::ThreadLocal => {
            let it = tracing_subscriber::registry().with(layers).set_default();
            Ok(Some(it))
        }
    }
}

/// Returns the layers without installing them.
///
/// # Errors
///
/// Fails if the log file can't be opened.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let mut acc: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    acc.push(Box::new(tracing_config.level_filter));

    if let Some(layer) = try_create_stderr_layer(
        tracing_config.level_filter,
        &tracing_config.writer_config,
    ) {
        acc.push(layer);
    }

    if let Some(layer) =
        try_create_file_layer(tracing_config.level_filter, &tracing_config.writer_config)?
    {
        acc.push(layer);
    }

    Ok(acc)
}

pub fn try_create_stderr_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    match writer_config {
        WriterConfig::Stderr | WriterConfig::StderrAndFile(_) => Some(Box::new(
            create_fmt!()
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        )),
        WriterConfig::None | WriterConfig::File(_) => None,
    }
}

/// # Errors
///
/// Fails if the log file path has no parent folder or file name, or the file can't be
/// opened.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    Ok(match writer_config {
        WriterConfig::File(path_str) | WriterConfig::StderrAndFile(path_str) => {
            let file = try_create_file_appender(path_str)?;
            Some(Box::new(
                create_fmt!().with_writer(file).with_filter(level_filter),
            ))
        }
        WriterConfig::None | WriterConfig::Stderr => None,
    })
}

/// Note that if you wrap this up in a non blocking writer, the guard has to outlive
/// the subscriber, which doesn't fit a process that exits right after writing.
fn try_create_file_appender(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!(
            "Can't access folder of {}. It might not exist, or you don't have the required permissions.",
            path.display()
        )
    })?;

    let file_name = path
        .file_name()
        .and_then(|it| it.to_str())
        .ok_or_else(|| miette::miette!("Can't access file name {}.", path.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(parent)
        .into_diagnostic()
        .wrap_err_with(|| format!("Could not open log file '{}'", path.display()))
}

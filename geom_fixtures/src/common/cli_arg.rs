// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Options shared by every generator binary.

use crate::{OutputTarget, TracingConfig};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Default, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log generator output to a file named `log.txt` for debugging."
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        short = 'o',
        value_name = "PATH",
        help = "Write the fixture to this file instead of stdout."
    )]
    pub output: Option<PathBuf>,
}

impl GlobalOption {
    #[must_use]
    pub fn output_target(&self) -> OutputTarget { OutputTarget::from(self.output.clone()) }

    /// [`None`] unless `--enable-logging` was passed.
    #[must_use]
    pub fn tracing_config(&self) -> Option<TracingConfig> {
        self.enable_logging.then(TracingConfig::new_file)
    }

    /// Install the global subscriber if logging was requested.
    ///
    /// # Errors
    ///
    /// Fails if the log file can't be opened.
    pub fn try_init_tracing(&self) -> miette::Result<()> {
        if let Some(tracing_config) = self.tracing_config() {
            crate::init_tracing(tracing_config)?;
        }
        Ok(())
    }
}

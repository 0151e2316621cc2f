// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors for both generators. Configuration variants are raised before any line is
//! written, so a failed run never leaves a partial fixture behind on stdout.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum FixtureError {
    #[error("Segment count must not be negative, got {count}")]
    #[diagnostic(
        code(r3bl_geom_fixtures::config::negative_count),
        help("Pass a count of 0 or more, e.g. `--count 1000`")
    )]
    NegativeCount { count: i64 },

    #[error("Grid step must be positive, got {step}")]
    #[diagnostic(code(r3bl_geom_fixtures::config::non_positive_step))]
    NonPositiveStep { step: i64 },

    #[error("Grid step {step} leaves no points below {extent}")]
    #[diagnostic(
        code(r3bl_geom_fixtures::config::step_too_large),
        help("Use a step smaller than 100, the grid extent")
    )]
    StepTooLarge { step: i64, extent: u32 },

    #[error("Could not create output file '{}'", path.display())]
    #[diagnostic(
        code(r3bl_geom_fixtures::io::create_output),
        help("Check that the parent folder exists and is writable")
    )]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write fixture output")]
    #[diagnostic(code(r3bl_geom_fixtures::io::write_output))]
    WriteOutput(#[from] std::io::Error),
}

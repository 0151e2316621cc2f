// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Command-line argument parsing for gen-segments.

use crate::{FixtureError, GlobalOption,
            gen_segments::{DEFAULT_SEGMENT_COUNT, SegmentConfig}};
use clap::Parser;

/// Print random rounded segments, one `ROUND(SEGMENT(..) r)` directive per line.
#[derive(Debug, Parser)]
#[command(
    name = "gen-segments",
    about = "Print random rounded segments for the SDF renderer",
    long_about = "Print randomly placed segments, one per line, in the form \
                  ROUND(SEGMENT(POINT(x1 y1) POINT(x2 y2)) r).\n\n\
                  x is kept to 2 decimal places, y and r to 5. \
                  With no arguments, prints 1000 segments to stdout.",
    version
)]
pub struct CLIArg {
    /// Number of segments to print
    #[arg(
        long,
        short = 'c',
        default_value_t = DEFAULT_SEGMENT_COUNT,
        allow_negative_numbers = true
    )]
    pub count: i64,

    /// Seed the generator to get the same fixture on every run
    #[arg(long, short = 's')]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

impl CLIArg {
    /// # Errors
    ///
    /// Returns [`FixtureError::NegativeCount`] for a negative `--count`.
    pub fn to_segment_config(&self) -> Result<SegmentConfig, FixtureError> {
        SegmentConfig::try_new(self.count)
    }
}

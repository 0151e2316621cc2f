// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{emit,
            gen_segments::{CLIArg, RENDERER_GEOMETRY_LIMIT, random_segments, ui_str}};
use rand::{SeedableRng, rngs::StdRng};

/// Validate the arguments, then print the segments.
///
/// The count is checked before logging is set up or the output is opened, so an
/// invalid count never produces any output.
///
/// # Errors
///
/// Returns a report for an invalid count, a log file or output file that can't be
/// opened, or a failed write.
pub fn run(cli_arg: CLIArg) -> miette::Result<()> {
    let config = cli_arg.to_segment_config()?;
    cli_arg.global_options.try_init_tracing()?;

    tracing::debug!(?config, seed = ?cli_arg.seed, "{}", ui_str::STARTING);
    if config.exceeds_renderer_limit() {
        tracing::warn!(
            "{}",
            ui_str::format_over_renderer_limit(config.count(), RENDERER_GEOMETRY_LIMIT)
        );
    }

    let target = cli_arg.global_options.output_target();
    let lines = match cli_arg.seed {
        Some(seed) => emit(
            &target,
            random_segments(config, &mut StdRng::seed_from_u64(seed)),
        )?,
        None => emit(&target, random_segments(config, &mut rand::rng()))?,
    };

    tracing::info!(lines, "{}", ui_str::DONE);
    Ok(())
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{emit,
            gen_grid::{CLIArg, grid_directives, ui_str}};

/// Print the grid fixture.
///
/// # Errors
///
/// Returns a report if the log file or output file can't be opened, or a write
/// fails.
pub fn run(cli_arg: CLIArg) -> miette::Result<()> {
    let config = cli_arg.to_grid_config();
    cli_arg.global_options.try_init_tracing()?;

    tracing::debug!(
        step = config.step(),
        side = config.side(),
        points = config.point_count(),
        "{}",
        ui_str::STARTING
    );

    let target = cli_arg.global_options.output_target();
    let lines = emit(&target, grid_directives(config))?;

    tracing::info!(lines, "{}", ui_str::DONE);
    Ok(())
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Command-line argument parsing for gen-grid.

use crate::{GlobalOption, gen_grid::GridConfig};
use clap::Parser;

/// Print the 9×9 grid fixture. The grid itself is fixed, only where the output and
/// logs go can be chosen.
#[derive(Debug, Parser)]
#[command(
    name = "gen-grid",
    about = "Print a 9x9 grid of colored points and index based links for the SDF renderer",
    long_about = "Print LAYER(1), then 81 ROUND(0.015 POINT(x y COLOR(..))) lines, then \
                  the ROUND(0.002 SEGMENT(i j)) links between them, one per line.\n\n\
                  The output is the same on every run.",
    version
)]
pub struct CLIArg {
    #[command(flatten)]
    pub global_options: GlobalOption,
}

impl CLIArg {
    #[must_use]
    pub fn to_grid_config(&self) -> GridConfig { GridConfig::default() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn test_cli_defaults() {
        let cli = CLIArg::parse_from(["gen-grid"]);
        assert!(!cli.global_options.enable_logging);
        assert_eq!(cli.global_options.output, None);
        assert_eq!(cli.to_grid_config().side(), 9);
    }

    #[test]
    fn test_cli_output_and_logging() {
        let cli = CLIArg::parse_from(["gen-grid", "-l", "--output", "grid.txt"]);
        assert!(cli.global_options.enable_logging);
        assert_eq!(cli.global_options.output, Some(PathBuf::from("grid.txt")));
    }

    #[test]
    fn test_cli_step_is_not_an_option() {
        let result = CLIArg::try_parse_from(["gen-grid", "--step", "5"]);
        assert!(result.is_err());
    }
}

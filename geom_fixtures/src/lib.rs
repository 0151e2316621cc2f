// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

//! # R3BL Geometry Fixtures
//!
//! Generators for the line based input read by the SDF renderer. Each tool prints one
//! directive per line to stdout, ready to be piped or redirected into a file.
//!
//! ## gen-segments
//!
//! Random segments, each wrapped in a rounding directive with the tolerance last:
//!
//! ```text
//! ROUND(SEGMENT(POINT(0.42 0.13377) POINT(0.9 0.5021)) 0.00731)
//! ```
//!
//! - `x` in `[0, 1]` to 2 decimal places, `y` in `[0, 1]` to 5 decimal places.
//! - The tolerance in `[0.0001, 0.01]` to 5 decimal places.
//!
//! ```bash
//! gen-segments                      # 1000 segments
//! gen-segments --count 10 --seed 7  # same 10 segments every time
//! gen-segments -o segments.txt
//! ```
//!
//! ## gen-grid
//!
//! A `LAYER(1)` header, 81 colored points on a 9×9 grid, then 137 links between them
//! by point index, each wrapped in a rounding directive with the tolerance first:
//!
//! ```text
//! LAYER(1)
//! ROUND(0.015 POINT(0.1 0.1 COLOR(0.1 0.1 0.9 1)))
//! ...
//! ROUND(0.002 SEGMENT(0 10))
//! ROUND(0.002 SEGMENT(1 2))
//! ROUND(0.002 SEGMENT(1 10))
//! ...
//! ```
//!
//! The output is byte for byte the same on every run.
//!
//! ## Common options
//!
//! - `--output <PATH>` writes to a file instead of stdout.
//! - `--enable-logging` writes `DEBUG` logs to `log.txt`. Logs never go to stdout.
//!
//! Invalid arguments are reported before anything is written, with a non-zero exit
//! code.
//!
//! ## Module structure
//! - `src/bin/gen-segments.rs`, `src/bin/gen-grid.rs` - Binary entry points
//! - `src/gen_segments/`, `src/gen_grid/` - One folder per tool
//!   - `cli_arg.rs` - CLI argument parsing
//!   - `generator.rs` - Validated config and the directive iterators
//!   - `launcher.rs` - Wires config, logging and output together
//!   - `ui_str.rs` - Log messages
//! - `src/common/` - Shared utilities
//!   - `number.rs`, `directive.rs` - The output grammar
//!   - `output.rs` - Line writer for stdout or a file
//!   - `logging.rs` - Tracing setup
//!   - `error.rs` - Error type

// Attach all modules.
pub mod common;
pub mod gen_grid;
pub mod gen_segments;

// Re-export commonly used items.
pub use common::*;

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `gen-segments`: random rounded segments.

pub mod cli_arg;
pub mod generator;
pub mod launcher;
pub mod ui_str;

// Re-export public API for flat module interface (like cmdr/).
pub use cli_arg::*;
pub use generator::*;

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `gen-grid`: the fixed 9×9 grid of colored points and links.

pub mod cli_arg;
pub mod generator;
pub mod launcher;
pub mod ui_str;

pub use cli_arg::*;
pub use generator::*;

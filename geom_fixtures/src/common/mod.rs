// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Shared plumbing across all generators.

pub mod cli_arg;
pub mod directive;
pub mod error;
pub mod logging;
pub mod number;
pub mod output;

pub use cli_arg::*;
pub use directive::*;
pub use error::*;
pub use logging::*;
pub use number::*;
pub use output::*;

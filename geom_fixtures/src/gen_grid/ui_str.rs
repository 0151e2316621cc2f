// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Log messages for gen-grid.

pub const STARTING: &str = "gen-grid starting";
pub const DONE: &str = "gen-grid done";

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Log messages for gen-segments.

pub const STARTING: &str = "gen-segments starting";
pub const DONE: &str = "gen-segments done";

/// Warning logged when more segments are requested than the renderer will load.
#[must_use]
pub fn format_over_renderer_limit(count: usize, limit: usize) -> String {
    format!(
        "Requested {count} segments, the renderer only loads the first {limit}"
    )
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Randomly placed segments, each wrapped in a trailing-tolerance `ROUND`:
//!
//! ```text
//! ROUND(SEGMENT(POINT(x1 y1) POINT(x2 y2)) r)
//! ```
//!
//! `x` is drawn from [`UNIT_RANGE`] and kept to [`X_DECIMAL_PLACES`], `y` from
//! [`UNIT_RANGE`] to [`Y_DECIMAL_PLACES`], and `r` from [`TOLERANCE_RANGE`] to
//! [`TOLERANCE_DECIMAL_PLACES`]. Per line the draw order is `x1 y1 x2 y2 r`.

use crate::{Directive, FixtureError, Number, Point, Segment};
use rand::Rng;
use std::ops::RangeInclusive;

pub const DEFAULT_SEGMENT_COUNT: i64 = 1_000;

pub const UNIT_RANGE: RangeInclusive<f64> = 0.0..=1.0;
pub const TOLERANCE_RANGE: RangeInclusive<f64> = 0.000_1..=0.01;

pub const X_DECIMAL_PLACES: u8 = 2;
pub const Y_DECIMAL_PLACES: u8 = 5;
pub const TOLERANCE_DECIMAL_PLACES: u8 = 5;

/// The Go renderer loads at most this many geometries from one file. The C renderer
/// caps each layer at 500.
pub const RENDERER_GEOMETRY_LIMIT: usize = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentConfig {
    count: usize,
}

/// The default fills the renderer exactly.
impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            count: RENDERER_GEOMETRY_LIMIT,
        }
    }
}

impl SegmentConfig {
    /// # Errors
    ///
    /// Returns [`FixtureError::NegativeCount`] if `count` is below zero.
    pub fn try_new(count: i64) -> Result<Self, FixtureError> {
        let count =
            usize::try_from(count).map_err(|_| FixtureError::NegativeCount { count })?;
        Ok(Self { count })
    }

    #[must_use]
    pub fn count(&self) -> usize { self.count }

    #[must_use]
    pub fn exceeds_renderer_limit(&self) -> bool { self.count > RENDERER_GEOMETRY_LIMIT }
}

pub fn random_point<R: Rng + ?Sized>(rng: &mut R) -> Point {
    let x = rng.random_range(UNIT_RANGE);
    let y = rng.random_range(UNIT_RANGE);
    Point::new(
        Number::rounded(x, X_DECIMAL_PLACES),
        Number::rounded(y, Y_DECIMAL_PLACES),
    )
}

pub fn random_segment<R: Rng + ?Sized>(rng: &mut R) -> Directive {
    let start = random_point(rng);
    let end = random_point(rng);
    let tolerance = rng.random_range(TOLERANCE_RANGE);
    Directive::round_trailing(
        Number::rounded(tolerance, TOLERANCE_DECIMAL_PLACES),
        Segment::Between(start, end),
    )
}

/// Lazily yields exactly [`SegmentConfig::count`] directives drawn from `rng`.
pub fn random_segments<R: Rng + ?Sized>(
    config: SegmentConfig,
    rng: &mut R,
) -> impl Iterator<Item = Directive> {
    (0..config.count).map(move |_| random_segment(rng))
}

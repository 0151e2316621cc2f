// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A square grid of colored points, linked by index.
//!
//! The output is fully determined by [`GridConfig`], in this order:
//! 1. `LAYER(1)`.
//! 2. One point per `(i, j)` for `i`, `j` in `step, 2*step, ..` below
//!    [`GRID_EXTENT`], `i` outer. The point sits at `(i/100, j/100)` and its color
//!    fades from red to green along `x`: `COLOR(x y 1-x 1)`.
//! 3. Links by ascending point index, see [`GridLink::links_from`].
//!
//! With the default step of 10 this is 81 points in a 9×9 grid, and 137 links.

use crate::{Color, Directive, FixtureError, Number, Point, Segment};
use smallvec::{SmallVec, smallvec};
use std::iter::once;

pub const DEFAULT_GRID_STEP: i64 = 10;

/// Point coordinates are `i / GRID_EXTENT` for `i` below this value.
pub const GRID_EXTENT: u32 = 100;

pub const GRID_LAYER: u32 = 1;
pub const COORD_DECIMAL_PLACES: u8 = 3;
pub const POINT_TOLERANCE: f64 = 0.015;
pub const LINK_TOLERANCE: f64 = 0.002;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    step: u32,
}

impl Default for GridConfig {
    fn default() -> Self { Self { step: 10 } }
}

impl GridConfig {
    /// # Errors
    ///
    /// Returns [`FixtureError::NonPositiveStep`] for `step <= 0` and
    /// [`FixtureError::StepTooLarge`] when `step` leaves no point below
    /// [`GRID_EXTENT`].
    pub fn try_new(step: i64) -> Result<Self, FixtureError> {
        if step <= 0 {
            return Err(FixtureError::NonPositiveStep { step });
        }
        match u32::try_from(step) {
            Ok(it) if it < GRID_EXTENT => Ok(Self { step: it }),
            _ => Err(FixtureError::StepTooLarge {
                step,
                extent: GRID_EXTENT,
            }),
        }
    }

    #[must_use]
    pub fn step(&self) -> u32 { self.step }

    /// Points per axis. 9 for the default step.
    #[must_use]
    pub fn side(&self) -> usize { ((GRID_EXTENT - 1) / self.step) as usize }

    #[must_use]
    pub fn point_count(&self) -> usize { self.side() * self.side() }

    /// `step, 2*step, ..` below [`GRID_EXTENT`].
    pub fn axis_values(&self) -> impl Iterator<Item = u32> + Clone + use<> {
        (self.step..GRID_EXTENT).step_by(self.step as usize)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridLink {
    /// `i` to `i + side + 1`.
    Wrap,
    /// `i` to `i + 1`, within the same row of `side` points.
    Top,
    /// `i` to `i + side`.
    Right,
}

impl GridLink {
    /// The links that start at point `index`, in emission order.
    ///
    /// The checks run as a cascade:
    /// 1. If `index` is a multiple of `side + 1`, only the [`GridLink::Wrap`] link is
    ///    produced and the other checks are skipped.
    /// 2. Otherwise a [`GridLink::Top`] link unless `index + 1` is a multiple of
    ///    `side`.
    /// 3. And a [`GridLink::Right`] link if `index + side` is still a point.
    ///
    /// The wrap link from the last multiple may point past the last point (`80 90`
    /// for the 9×9 grid). That is kept, the renderer input has always had it.
    #[must_use]
    pub fn links_from(index: usize, side: usize) -> SmallVec<[(GridLink, usize, usize); 2]> {
        if index.is_multiple_of(side + 1) {
            return smallvec![(GridLink::Wrap, index, index + side + 1)];
        }

        let mut acc = SmallVec::new();
        if !(index + 1).is_multiple_of(side) {
            acc.push((GridLink::Top, index, index + 1));
        }
        if index + side < side * side {
            acc.push((GridLink::Right, index, index + side));
        }
        acc
    }
}

#[must_use]
pub fn grid_point(i: u32, j: u32) -> Directive {
    let x = f64::from(i) / f64::from(GRID_EXTENT);
    let y = f64::from(j) / f64::from(GRID_EXTENT);
    let x_num = Number::rounded(x, COORD_DECIMAL_PLACES);
    let y_num = Number::rounded(y, COORD_DECIMAL_PLACES);
    let color = Color::rgba(
        x_num,
        y_num,
        Number::rounded(1.0 - x, COORD_DECIMAL_PLACES),
        Number::Int(1),
    );
    Directive::round_leading(
        Number::Decimal(POINT_TOLERANCE),
        Point::new(x_num, y_num).with_color(color),
    )
}

#[must_use]
pub fn grid_link(from: usize, to: usize) -> Directive {
    Directive::round_leading(Number::Decimal(LINK_TOLERANCE), Segment::Indexed(from, to))
}

/// Row-major points, `i` outer and `j` inner.
pub fn grid_points(config: GridConfig) -> impl Iterator<Item = Directive> {
    let axis = config.axis_values();
    axis.clone()
        .flat_map(move |i| axis.clone().map(move |j| grid_point(i, j)))
}

pub fn grid_links(config: GridConfig) -> impl Iterator<Item = Directive> {
    let side = config.side();
    (0..config.point_count())
        .flat_map(move |index| GridLink::links_from(index, side))
        .map(|(_, from, to)| grid_link(from, to))
}

/// Layer header, then points, then links.
pub fn grid_directives(config: GridConfig) -> impl Iterator<Item = Directive> {
    once(Directive::Layer(GRID_LAYER))
        .chain(grid_points(config))
        .chain(grid_links(config))
}

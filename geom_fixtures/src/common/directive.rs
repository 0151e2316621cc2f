// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The line grammar read by the SDF renderer.
//!
//! Each [`Directive`] renders to exactly one line (without the trailing newline):
//!
//! | Directive                       | Rendered                                        |
//! | :------------------------------ | :---------------------------------------------- |
//! | [`Directive::Layer`]            | `LAYER(1)`                                      |
//! | [`Round`] with leading placement  | `ROUND(0.002 SEGMENT(0 10))`                  |
//! | [`Round`] with trailing placement | `ROUND(SEGMENT(POINT(0.1 0.2) POINT(0.3 0.4)) 0.001)` |
//!
//! The renderer scans tokens by fixed offsets, so spelling, nesting, and single space
//! separators are significant.

use crate::Number;
use smallvec::{SmallVec, smallvec};
use std::fmt::{Display, Formatter, Result};

/// `COLOR(r g b)` or `COLOR(r g b a)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    pub components: SmallVec<[Number; 4]>,
}

impl Color {
    #[must_use]
    pub fn rgba(r: Number, g: Number, b: Number, a: Number) -> Self {
        Self {
            components: smallvec![r, g, b, a],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub x: Number,
    pub y: Number,
    pub color: Option<Color>,
}

impl Point {
    #[must_use]
    pub fn new(x: Number, y: Number) -> Self { Self { x, y, color: None } }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Endpoints given inline.
    Between(Point, Point),
    /// Endpoints given as indices of points already emitted in the layer.
    Indexed(usize, usize),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Point(Point),
    Segment(Segment),
}

impl From<Point> for Primitive {
    fn from(it: Point) -> Self { Self::Point(it) }
}

impl From<Segment> for Primitive {
    fn from(it: Segment) -> Self { Self::Segment(it) }
}

/// Where the tolerance goes inside `ROUND(..)`. Both forms are accepted downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TolerancePlacement {
    /// `ROUND(r PRIMITIVE)`
    Leading,
    /// `ROUND(PRIMITIVE r)`
    Trailing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub tolerance: Number,
    pub placement: TolerancePlacement,
    pub primitive: Primitive,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    Layer(u32),
    Round(Round),
}

impl Directive {
    #[must_use]
    pub fn round_leading(tolerance: Number, primitive: impl Into<Primitive>) -> Self {
        Self::Round(Round {
            tolerance,
            placement: TolerancePlacement::Leading,
            primitive: primitive.into(),
        })
    }

    #[must_use]
    pub fn round_trailing(tolerance: Number, primitive: impl Into<Primitive>) -> Self {
        Self::Round(Round {
            tolerance,
            placement: TolerancePlacement::Trailing,
            primitive: primitive.into(),
        })
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str("COLOR(")?;
        for (index, component) in self.components.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{component}")?;
        }
        f.write_str(")")
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match &self.color {
            Some(color) => write!(f, "POINT({} {} {color})", self.x, self.y),
            None => write!(f, "POINT({} {})", self.x, self.y),
        }
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Segment::Between(a, b) => write!(f, "SEGMENT({a} {b})"),
            Segment::Indexed(a, b) => write!(f, "SEGMENT({a} {b})"),
        }
    }
}

impl Display for Primitive {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Primitive::Point(it) => Display::fmt(it, f),
            Primitive::Segment(it) => Display::fmt(it, f),
        }
    }
}

impl Display for Round {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let Self {
            tolerance,
            placement,
            primitive,
        } = self;
        match placement {
            TolerancePlacement::Leading => write!(f, "ROUND({tolerance} {primitive})"),
            TolerancePlacement::Trailing => write!(f, "ROUND({primitive} {tolerance})"),
        }
    }
}

impl Display for Directive {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Directive::Layer(id) => write!(f, "LAYER({id})"),
            Directive::Round(it) => Display::fmt(it, f),
        }
    }
}

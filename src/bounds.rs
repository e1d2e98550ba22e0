// Copyright (c) 2018-2021 Thomas Kramer.
// SPDX-FileCopyrightText: 2022 Thomas Kramer
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The axis-aligned rectangle a tessellation is clipped to.

use crate::error::VoronoiError;
use crate::point::{approx_eq, approx_ge, approx_le, BorderLocation, Point};
use num_traits::Float;

/// An axis-aligned bounding rectangle with non-empty extent on both axes.
#[derive(Clone, Copy, Debug)]
pub struct BoundingBox<T> {
    min_x: T,
    min_y: T,
    max_x: T,
    max_y: T,
}

impl<T: Float> BoundingBox<T> {
    /// Validate and build a rectangle. Both ranges must be non-empty.
    pub(crate) fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Result<Self, VoronoiError> {
        if min_x >= max_x || min_y >= max_y {
            return Err(VoronoiError::InvalidBounds {
                min_x: min_x.to_f64().unwrap_or(f64::NAN),
                min_y: min_y.to_f64().unwrap_or(f64::NAN),
                max_x: max_x.to_f64().unwrap_or(f64::NAN),
                max_y: max_y.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }

    /// Lower x bound.
    pub fn min_x(&self) -> T {
        self.min_x
    }

    /// Lower y bound.
    pub fn min_y(&self) -> T {
        self.min_y
    }

    /// Upper x bound.
    pub fn max_x(&self) -> T {
        self.max_x
    }

    /// Upper y bound.
    pub fn max_y(&self) -> T {
        self.max_y
    }

    /// Containment check treating coordinates within `tolerance` of a bound
    /// as inside.
    pub(crate) fn contains(&self, x: T, y: T, tolerance: T) -> bool {
        approx_ge(x, self.min_x, tolerance)
            && approx_le(x, self.max_x, tolerance)
            && approx_ge(y, self.min_y, tolerance)
            && approx_le(y, self.max_y, tolerance)
    }

    /// The four corners, tagged, counter-clockwise from the bottom-left.
    pub(crate) fn corners(&self) -> [Point<T>; 4] {
        [
            Point::on_border(self.min_x, self.min_y, BorderLocation::BottomLeft),
            Point::on_border(self.max_x, self.min_y, BorderLocation::BottomRight),
            Point::on_border(self.max_x, self.max_y, BorderLocation::TopRight),
            Point::on_border(self.min_x, self.max_y, BorderLocation::TopLeft),
        ]
    }

    /// Classify where `(x, y)` lies on the rectangle boundary.
    pub(crate) fn locate(&self, x: T, y: T, tolerance: T) -> BorderLocation {
        if !self.contains(x, y, tolerance) {
            return BorderLocation::NotOnBorder;
        }
        let left = approx_eq(x, self.min_x, tolerance);
        let right = approx_eq(x, self.max_x, tolerance);
        let bottom = approx_eq(y, self.min_y, tolerance);
        let top = approx_eq(y, self.max_y, tolerance);
        match (left, right, bottom, top) {
            (true, _, true, _) => BorderLocation::BottomLeft,
            (true, _, _, true) => BorderLocation::TopLeft,
            (_, true, _, true) => BorderLocation::TopRight,
            (_, true, true, _) => BorderLocation::BottomRight,
            (true, _, _, _) => BorderLocation::Left,
            (_, true, _, _) => BorderLocation::Right,
            (_, _, true, _) => BorderLocation::Bottom,
            (_, _, _, true) => BorderLocation::Top,
            _ => BorderLocation::NotOnBorder,
        }
    }

    /// A tagged point on or inside the rectangle.
    pub(crate) fn tagged_point(&self, x: T, y: T, tolerance: T) -> Point<T> {
        Point::on_border(x, y, self.locate(x, y, tolerance))
    }
}

// Copyright (c) 2018-2021 Thomas Kramer.
// SPDX-FileCopyrightText: 2022 Thomas Kramer
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Points annotated with their position on the bounding rectangle.

use num_traits::Float;

/// Position of a point relative to the bounding rectangle.
///
/// Freshly computed points are [`NotOnBorder`](BorderLocation::NotOnBorder);
/// the border clipper tags every endpoint it accepts with the side or
/// corner the point lies on, within the tessellation tolerance.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BorderLocation {
    /// Not on the rectangle boundary.
    NotOnBorder,
    /// The corner at `(min_x, min_y)`.
    BottomLeft,
    /// On the left side, strictly between its corners.
    Left,
    /// The corner at `(min_x, max_y)`.
    TopLeft,
    /// On the top side, strictly between its corners.
    Top,
    /// The corner at `(max_x, max_y)`.
    TopRight,
    /// On the right side, strictly between its corners.
    Right,
    /// The corner at `(max_x, min_y)`.
    BottomRight,
    /// On the bottom side, strictly between its corners.
    Bottom,
}

impl BorderLocation {
    /// Whether the point lies anywhere on the rectangle boundary.
    pub fn is_on_border(&self) -> bool {
        !matches!(self, BorderLocation::NotOnBorder)
    }

    /// Whether the point lies on one of the four corners.
    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            BorderLocation::BottomLeft
                | BorderLocation::TopLeft
                | BorderLocation::TopRight
                | BorderLocation::BottomRight
        )
    }
}

/// A point in the plane, tagged with its border location.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Point<T> {
    /// The x coordinate.
    pub x: T,
    /// The y coordinate.
    pub y: T,
    /// Where the point lies on the bounding rectangle, if anywhere.
    pub border_location: BorderLocation,
}

impl<T: Float> Point<T> {
    /// Create a point not associated with the rectangle boundary.
    pub fn new(x: T, y: T) -> Self {
        Point {
            x,
            y,
            border_location: BorderLocation::NotOnBorder,
        }
    }

    /// Create a point carrying an explicit border location.
    pub fn on_border(x: T, y: T, border_location: BorderLocation) -> Self {
        Point {
            x,
            y,
            border_location,
        }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Self) -> T {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// `a` and `b` are equal within `tolerance`.
pub(crate) fn approx_eq<T: Float>(a: T, b: T, tolerance: T) -> bool {
    (a - b).abs() <= tolerance
}

/// `a` is greater than or tolerance-equal to `b`.
pub(crate) fn approx_ge<T: Float>(a: T, b: T, tolerance: T) -> bool {
    a >= b - tolerance
}

/// `a` is less than or tolerance-equal to `b`.
pub(crate) fn approx_le<T: Float>(a: T, b: T, tolerance: T) -> bool {
    a <= b + tolerance
}

/// Both coordinates coincide within `tolerance`.
pub(crate) fn coincident<T: Float>(a: &Point<T>, b: &Point<T>, tolerance: T) -> bool {
    approx_eq(a.x, b.x, tolerance) && approx_eq(a.y, b.y, tolerance)
}

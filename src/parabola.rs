// Copyright (c) 2018-2021 Thomas Kramer.
// SPDX-FileCopyrightText: 2022 Thomas Kramer
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Geometry kernel of the sweep: parabolic arcs and circumcircles.
//!
//! The sweep line is horizontal and moves towards larger `y`. An active
//! site below the sweep line contributes a downward-opening parabola (the
//! locus of points equidistant from the site and the line); the beachline
//! is the upper envelope of these parabolas.

use crate::point::{approx_eq, Point};
use num_traits::Float;

pub(crate) fn two<T: Float>() -> T {
    T::one() + T::one()
}

/// Height of the parabola with the given focus and directrix at `x`.
///
/// The caller must ensure the focus is not on the directrix.
pub(crate) fn parabola_y<T: Float>(focus: &Point<T>, directrix: T, x: T) -> T {
    let dx = x - focus.x;
    dx * dx / (two::<T>() * (focus.y - directrix)) + (focus.y + directrix) / two::<T>()
}

/// Abscissa of the breakpoint between a left arc focused on `left` and a
/// right arc focused on `right`, with the sweep line at `directrix`.
///
/// Of the two intersections of the parabolas this selects the one where
/// the envelope transitions from the left arc to the right arc. Foci at
/// tolerance-equal heights bisect vertically, so the breakpoint sits on
/// their midline.
pub(crate) fn breakpoint_x<T: Float>(
    left: &Point<T>,
    right: &Point<T>,
    directrix: T,
    tolerance: T,
) -> T {
    if approx_eq(left.y, right.y, tolerance) {
        return (left.x + right.x) / two::<T>();
    }
    let k_l = two::<T>() * (left.y - directrix);
    let k_r = two::<T>() * (right.y - directrix);
    let a = k_r - k_l;
    let b = two::<T>() * (right.x * k_l - left.x * k_r);
    let c = left.x * left.x * k_r - right.x * right.x * k_l
        - (right.y - left.y) * k_l * k_r / two::<T>();
    // The discriminant only dips below zero by rounding, when one focus is
    // on the directrix and the roots collapse.
    let four = two::<T>() * two::<T>();
    let disc = (b * b - four * a * c).max(T::zero());
    (-b - disc.sqrt()) / (two::<T>() * a)
}

/// Circumcircle of a converging arc triple.
///
/// Returns the center and radius of the circle through the three foci, or
/// `None` when the triple is collinear or its breakpoints diverge. Both
/// cases show in the denominator, twice the signed area of the triangle:
/// only a positive value describes a middle arc that is about to vanish.
pub(crate) fn converging_circumcircle<T: Float>(
    l: &Point<T>,
    m: &Point<T>,
    r: &Point<T>,
    tolerance: T,
) -> Option<(Point<T>, T)> {
    let d = two::<T>() * (l.x * (m.y - r.y) + m.x * (r.y - l.y) + r.x * (l.y - m.y));
    if d <= tolerance {
        return None;
    }
    let l2 = l.x * l.x + l.y * l.y;
    let m2 = m.x * m.x + m.y * m.y;
    let r2 = r.x * r.x + r.y * r.y;
    let x = (l2 * (m.y - r.y) + m2 * (r.y - l.y) + r2 * (l.y - m.y)) / d;
    let y = (l2 * (r.x - m.x) + m2 * (l.x - r.x) + r2 * (m.x - l.x)) / d;
    let center = Point::new(x, y);
    let radius = center.distance_to(m);
    Some((center, radius))
}

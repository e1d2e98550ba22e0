// Copyright (c) 2018-2021 Thomas Kramer.
// SPDX-FileCopyrightText: 2022 Thomas Kramer
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Clipping of the sweep output against the bounding rectangle.
//!
//! Finite segments go through a Cohen-Sutherland pass; rays are dispatched
//! on their direction and either discarded or completed with synthesized
//! endpoints. Every accepted endpoint is tagged with its border location.
//! After an edge is resolved its neighbor half is resolved too and the two
//! are stitched into one edge, so each bisector appears exactly once in the
//! output.

use std::cmp::Ordering;

use crate::bounds::BoundingBox;
use crate::edge::{Edge, EdgeGeometry, EdgeId};
use crate::point::{approx_eq, approx_ge, approx_le, Point};
use crate::site::Site;
use num_traits::Float;

const OUTCODE_LEFT: u8 = 1;
const OUTCODE_RIGHT: u8 = 2;
const OUTCODE_BOTTOM: u8 = 4;
const OUTCODE_TOP: u8 = 8;

/// Result of resolving one edge against the rectangle.
#[derive(Clone, Copy, Debug)]
pub(crate) enum ClipOutcome<T> {
    /// The edge survives with the given endpoints.
    Accept {
        /// Resolved start, border-tagged.
        start: Point<T>,
        /// Resolved end, border-tagged.
        end: Point<T>,
    },
    /// The edge lies outside the rectangle.
    Reject,
}

/// Classify a point against the four boundary lines. Coordinates within
/// `tolerance` of a bound count as inside on that axis.
fn outcode<T: Float>(x: T, y: T, bounds: &BoundingBox<T>, tolerance: T) -> u8 {
    let mut code = 0;
    if x < bounds.min_x() - tolerance {
        code |= OUTCODE_LEFT;
    } else if x > bounds.max_x() + tolerance {
        code |= OUTCODE_RIGHT;
    }
    if y < bounds.min_y() - tolerance {
        code |= OUTCODE_BOTTOM;
    } else if y > bounds.max_y() + tolerance {
        code |= OUTCODE_TOP;
    }
    code
}

/// Cohen-Sutherland clipping of a finite segment.
pub(crate) fn clip_segment<T: Float>(
    start: &Point<T>,
    end: &Point<T>,
    bounds: &BoundingBox<T>,
    tolerance: T,
) -> ClipOutcome<T> {
    let (mut x0, mut y0) = (start.x, start.y);
    let (mut x1, mut y1) = (end.x, end.y);
    let mut code0 = outcode(x0, y0, bounds, tolerance);
    let mut code1 = outcode(x1, y1, bounds, tolerance);

    loop {
        if code0 | code1 == 0 {
            return ClipOutcome::Accept {
                start: bounds.tagged_point(x0, y0, tolerance),
                end: bounds.tagged_point(x1, y1, tolerance),
            };
        }
        if code0 & code1 != 0 {
            return ClipOutcome::Reject;
        }

        let out = if code0 != 0 { code0 } else { code1 };
        let dx = x1 - x0;
        let dy = y1 - y0;
        // Intersect with the single violated boundary, top before bottom
        // before right before left when several bits are set.
        let (x, y) = if out & OUTCODE_TOP != 0 {
            let x = if dy.abs() > tolerance {
                x0 + dx * (bounds.max_y() - y0) / dy
            } else {
                x0
            };
            (x, bounds.max_y())
        } else if out & OUTCODE_BOTTOM != 0 {
            let x = if dy.abs() > tolerance {
                x0 + dx * (bounds.min_y() - y0) / dy
            } else {
                x0
            };
            (x, bounds.min_y())
        } else if out & OUTCODE_RIGHT != 0 {
            let y = if dx.abs() > tolerance {
                y0 + dy * (bounds.max_x() - x0) / dx
            } else {
                y0
            };
            (bounds.max_x(), y)
        } else {
            let y = if dx.abs() > tolerance {
                y0 + dy * (bounds.min_x() - x0) / dx
            } else {
                y0
            };
            (bounds.min_x(), y)
        };

        if out == code0 {
            x0 = x;
            y0 = y;
            code0 = outcode(x0, y0, bounds, tolerance);
        } else {
            x1 = x;
            y1 = y;
            code1 = outcode(x1, y1, bounds, tolerance);
        }
    }
}

/// Clip a ray, synthesizing the missing endpoint.
pub(crate) fn clip_ray<T: Float>(
    start: &Point<T>,
    run: T,
    rise: T,
    slope_intercept: Option<(T, T)>,
    bounds: &BoundingBox<T>,
    tolerance: T,
) -> ClipOutcome<T> {
    if rise.abs() <= tolerance {
        clip_horizontal_ray(start, run, bounds, tolerance)
    } else {
        match slope_intercept {
            None => clip_vertical_ray(start, rise, bounds, tolerance),
            Some((slope, intercept)) => {
                clip_sloped_ray(start, run, rise, slope, intercept, bounds, tolerance)
            }
        }
    }
}

fn clip_horizontal_ray<T: Float>(
    start: &Point<T>,
    run: T,
    bounds: &BoundingBox<T>,
    tolerance: T,
) -> ClipOutcome<T> {
    let y = start.y;
    if !approx_ge(y, bounds.min_y(), tolerance) || !approx_le(y, bounds.max_y(), tolerance) {
        return ClipOutcome::Reject;
    }
    let (near, far) = if run > T::zero() {
        (bounds.min_x(), bounds.max_x())
    } else {
        (bounds.max_x(), bounds.min_x())
    };
    // Pointing away with the start already past the far bound.
    if (run > T::zero() && start.x > far + tolerance)
        || (run < T::zero() && start.x < far - tolerance)
    {
        return ClipOutcome::Reject;
    }
    let start_x = if (run > T::zero() && start.x < near - tolerance)
        || (run < T::zero() && start.x > near + tolerance)
    {
        near
    } else {
        start.x
    };
    ClipOutcome::Accept {
        start: bounds.tagged_point(start_x, y, tolerance),
        end: bounds.tagged_point(far, y, tolerance),
    }
}

fn clip_vertical_ray<T: Float>(
    start: &Point<T>,
    rise: T,
    bounds: &BoundingBox<T>,
    tolerance: T,
) -> ClipOutcome<T> {
    let x = start.x;
    if !approx_ge(x, bounds.min_x(), tolerance) || !approx_le(x, bounds.max_x(), tolerance) {
        return ClipOutcome::Reject;
    }
    let (near, far) = if rise > T::zero() {
        (bounds.min_y(), bounds.max_y())
    } else {
        (bounds.max_y(), bounds.min_y())
    };
    if (rise > T::zero() && start.y > far + tolerance)
        || (rise < T::zero() && start.y < far - tolerance)
    {
        return ClipOutcome::Reject;
    }
    let start_y = if (rise > T::zero() && start.y < near - tolerance)
        || (rise < T::zero() && start.y > near + tolerance)
    {
        near
    } else {
        start.y
    };
    ClipOutcome::Accept {
        start: bounds.tagged_point(x, start_y, tolerance),
        end: bounds.tagged_point(x, far, tolerance),
    }
}

fn clip_sloped_ray<T: Float>(
    start: &Point<T>,
    run: T,
    rise: T,
    slope: T,
    intercept: T,
    bounds: &BoundingBox<T>,
    tolerance: T,
) -> ClipOutcome<T> {
    // Intersections of the carrying line with the four boundary lines,
    // keeping those whose other coordinate is in range.
    let mut candidates: Vec<(T, T)> = Vec::with_capacity(4);
    for x in [bounds.min_x(), bounds.max_x()] {
        let y = slope * x + intercept;
        if approx_ge(y, bounds.min_y(), tolerance) && approx_le(y, bounds.max_y(), tolerance) {
            candidates.push((x, y));
        }
    }
    for y in [bounds.min_y(), bounds.max_y()] {
        let x = (y - intercept) / slope;
        if approx_ge(x, bounds.min_x(), tolerance) && approx_le(x, bounds.max_x(), tolerance) {
            candidates.push((x, y));
        }
    }

    // A line through a corner intersects two boundary lines at one point.
    let mut distinct: Vec<(T, T)> = Vec::with_capacity(2);
    for candidate in candidates {
        let duplicate = distinct.iter().any(|&(x, y)| {
            approx_eq(x, candidate.0, tolerance) && approx_eq(y, candidate.1, tolerance)
        });
        if !duplicate {
            distinct.push(candidate);
        }
    }

    // Candidates behind the ray direction do not belong to the ray.
    distinct.retain(|&(x, y)| run * (x - start.x) + rise * (y - start.y) >= T::zero());

    match distinct.len() {
        0 => ClipOutcome::Reject,
        1 => ClipOutcome::Accept {
            start: bounds.tagged_point(start.x, start.y, tolerance),
            end: bounds.tagged_point(distinct[0].0, distinct[0].1, tolerance),
        },
        _ => {
            // The ray starts outside: the nearer crossing becomes the
            // start, the farther one the end.
            let dist = |&(x, y): &(T, T)| {
                let dx = x - start.x;
                let dy = y - start.y;
                dx * dx + dy * dy
            };
            distinct.sort_by(|a, b| dist(a).partial_cmp(&dist(b)).unwrap_or(Ordering::Equal));
            let near = distinct[0];
            let far = distinct[distinct.len() - 1];
            ClipOutcome::Accept {
                start: bounds.tagged_point(near.0, near.1, tolerance),
                end: bounds.tagged_point(far.0, far.1, tolerance),
            }
        }
    }
}

fn clip_edge<T: Float>(edge: &Edge<T>, bounds: &BoundingBox<T>, tolerance: T) -> ClipOutcome<T> {
    match *edge.geometry() {
        EdgeGeometry::Segment { ref end } => clip_segment(edge.start(), end, bounds, tolerance),
        EdgeGeometry::Ray { run, rise } => clip_ray(
            edge.start(),
            run,
            rise,
            edge.slope_intercept(),
            bounds,
            tolerance,
        ),
    }
}

/// Resolve one primary edge, stitching in its neighbor half.
fn resolve_edge<T: Float>(
    edges: &mut [Edge<T>],
    id: EdgeId,
    bounds: &BoundingBox<T>,
    tolerance: T,
) -> bool {
    let outcome = clip_edge(&edges[id], bounds, tolerance);
    let neighbor = edges[id].neighbor();

    let neighbor_outcome = match neighbor {
        None => {
            return match outcome {
                ClipOutcome::Accept { start, end } => {
                    edges[id].resolve(start, end);
                    true
                }
                ClipOutcome::Reject => false,
            };
        }
        Some(n) => {
            // A neighbor never chains further.
            debug_assert!(edges[n].neighbor().is_none());
            clip_edge(&edges[n], bounds, tolerance)
        }
    };

    match (outcome, neighbor_outcome) {
        // Both halves survive: join them into one polyline through the
        // shared split point.
        (ClipOutcome::Accept { end, .. }, ClipOutcome::Accept { end: far_start, .. }) => {
            edges[id].resolve(far_start, end);
            true
        }
        (ClipOutcome::Accept { start, end }, ClipOutcome::Reject) => {
            edges[id].resolve(start, end);
            true
        }
        // The primary half lies outside but its mirror survives: revive
        // the edge with the mirror's span, swapped to keep orientation.
        (ClipOutcome::Reject, ClipOutcome::Accept { start, end }) => {
            edges[id].resolve(end, start);
            true
        }
        (ClipOutcome::Reject, ClipOutcome::Reject) => false,
    }
}

/// Clip every primary edge in order, drop the rejected ones and attach the
/// survivors to both owning cells. Returns the surviving ids, order
/// preserved.
pub(crate) fn clip_and_attach<T: Float>(
    edges: &mut [Edge<T>],
    order: &[EdgeId],
    sites: &mut [Site<T>],
    bounds: &BoundingBox<T>,
    tolerance: T,
) -> Vec<EdgeId> {
    let mut survivors = Vec::with_capacity(order.len());
    for &id in order {
        if resolve_edge(edges, id, bounds, tolerance) {
            survivors.push(id);
            sites[edges[id].left()].push_edge(id);
            if let Some(right) = edges[id].right() {
                sites[right].push_edge(id);
            }
        }
    }
    survivors
}

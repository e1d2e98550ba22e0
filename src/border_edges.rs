// Copyright (c) 2018-2021 Thomas Kramer.
// SPDX-FileCopyrightText: 2022 Thomas Kramer
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Synthesis of edges along the rectangle border.
//!
//! With border generation enabled, consecutive boundary points are joined
//! by straight edges along the four sides so every cell closes into a
//! simple polygon. Border edges bound a single cell, chosen as the site
//! nearest to the edge midpoint, and are marked by their missing right
//! site.

use std::cmp::Ordering;

use crate::bounds::BoundingBox;
use crate::edge::{Edge, EdgeId};
use crate::parabola::two;
use crate::point::{coincident, BorderLocation, Point};
use crate::site::{Site, SiteId};
use itertools::Itertools;
use num_traits::Float;

fn on_bottom(location: BorderLocation) -> bool {
    matches!(
        location,
        BorderLocation::BottomLeft | BorderLocation::Bottom | BorderLocation::BottomRight
    )
}

fn on_right(location: BorderLocation) -> bool {
    matches!(
        location,
        BorderLocation::BottomRight | BorderLocation::Right | BorderLocation::TopRight
    )
}

fn on_top(location: BorderLocation) -> bool {
    matches!(
        location,
        BorderLocation::TopRight | BorderLocation::Top | BorderLocation::TopLeft
    )
}

fn on_left(location: BorderLocation) -> bool {
    matches!(
        location,
        BorderLocation::TopLeft | BorderLocation::Left | BorderLocation::BottomLeft
    )
}

/// Append border edges connecting consecutive boundary points, walking the
/// perimeter counter-clockwise from the bottom-left corner.
pub(crate) fn close_cells<T: Float>(
    edges: &mut Vec<Edge<T>>,
    order: &mut Vec<EdgeId>,
    sites: &mut [Site<T>],
    bounds: &BoundingBox<T>,
    tolerance: T,
) {
    if sites.is_empty() {
        return;
    }

    // Boundary-incident endpoints of the surviving edges plus the corners.
    let mut boundary_points: Vec<Point<T>> = Vec::new();
    for &id in order.iter() {
        let edge = &edges[id];
        if edge.start().border_location.is_on_border() {
            boundary_points.push(*edge.start());
        }
        if let Some(end) = edge.end() {
            if end.border_location.is_on_border() {
                boundary_points.push(*end);
            }
        }
    }
    boundary_points.extend(bounds.corners());

    // (side filter, sort along x, walk in descending order)
    let sides: [(fn(BorderLocation) -> bool, bool, bool); 4] = [
        (on_bottom, true, false),
        (on_right, false, false),
        (on_top, true, true),
        (on_left, false, true),
    ];

    for (matches_side, sort_by_x, descending) in sides {
        let mut walk: Vec<Point<T>> = boundary_points
            .iter()
            .copied()
            .filter(|p| matches_side(p.border_location))
            .sorted_by(|a, b| {
                let (ka, kb) = if sort_by_x { (a.x, b.x) } else { (a.y, b.y) };
                ka.partial_cmp(&kb).unwrap_or(Ordering::Equal)
            })
            .dedup_by(|a, b| coincident(a, b, tolerance))
            .collect();
        if descending {
            walk.reverse();
        }

        for (a, b) in walk.into_iter().tuple_windows() {
            let mid = Point::new((a.x + b.x) / two::<T>(), (a.y + b.y) / two::<T>());
            let owner = nearest_site(sites, &mid);
            let id = edges.len();
            edges.push(Edge::border(a, b, owner, tolerance));
            order.push(id);
            sites[owner].push_edge(id);
        }
    }
}

fn nearest_site<T: Float>(sites: &[Site<T>], point: &Point<T>) -> SiteId {
    let mut best = 0;
    let mut best_distance = T::infinity();
    for (id, site) in sites.iter().enumerate() {
        let dx = site.x() - point.x;
        let dy = site.y() - point.y;
        let distance = dx * dx + dy * dy;
        if distance < best_distance {
            best_distance = distance;
            best = id;
        }
    }
    best
}

// Copyright (c) 2018-2021 Thomas Kramer.
// SPDX-FileCopyrightText: 2022 Thomas Kramer
//
// SPDX-License-Identifier: AGPL-3.0-or-later

#![deny(missing_docs)]

//! Voronoi tessellation of point sites, bounded to an axis-aligned
//! rectangle.
//!
//! The construction sweeps a horizontal line across the plane. Sites enter
//! the beachline as parabolic arcs, arcs whose flanking breakpoints
//! converge vanish in circle events, and every breakpoint traces one
//! bisector edge of the diagram. A post-pass clips the finished segments
//! and the remaining half-infinite rays to the bounding rectangle and
//! attaches each surviving edge to the two sites it separates.

mod beachline;
mod border_edges;
mod bounds;
mod clip_border;
mod edge;
mod error;
mod event_queue;
mod parabola;
mod point;
mod site;
mod sweep;
mod tessellation;

// API exports.
pub use bounds::BoundingBox;
pub use edge::{Edge, EdgeGeometry, EdgeId};
pub use error::VoronoiError;
pub use point::{BorderLocation, Point};
pub use site::{Site, SiteId};
pub use tessellation::VoronoiTessellation;

use num_traits::Float;
use std::fmt::Debug;

/// Scalar types usable as coordinates of a tessellation.
pub trait Coordinate: Float + Debug {}

impl<T: Float + Debug> Coordinate for T {}

/// Whether to synthesize edges along the rectangle border.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BorderEdgeGeneration {
    /// Return only the bisector-derived edges.
    DoNotMakeBorderEdges,
    /// Additionally connect consecutive boundary points along the four
    /// sides, so every cell closes into a simple polygon.
    MakeBorderEdges,
}

/// Construct a tessellation and compute it in one call.
///
/// # Example
/// ```
/// use sweepline_voronoi::{tessellate, BorderEdgeGeneration};
///
/// let sites = [(300.0, 300.0), (300.0, 400.0), (400.0, 300.0)];
/// let t = tessellate(
///     sites,
///     0.0,
///     0.0,
///     600.0,
///     600.0,
///     BorderEdgeGeneration::DoNotMakeBorderEdges,
/// )
/// .unwrap();
///
/// // Three bisector edges meet at the point equidistant from all sites.
/// assert_eq!(t.edges().count(), 3);
/// ```
pub fn tessellate<T: Coordinate>(
    points: impl IntoIterator<Item = (T, T)>,
    min_x: T,
    min_y: T,
    max_x: T,
    max_y: T,
    mode: BorderEdgeGeneration,
) -> Result<VoronoiTessellation<T>, VoronoiError> {
    let mut tessellation = VoronoiTessellation::new(points, min_x, min_y, max_x, max_y)?;
    tessellation.tessellate(mode);
    Ok(tessellation)
}

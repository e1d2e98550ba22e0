// Copyright (c) 2018-2021 Thomas Kramer.
// SPDX-FileCopyrightText: 2022 Thomas Kramer
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Edges of the tessellation.
//!
//! Edges live in an arena owned by the tessellation and are addressed by
//! [`EdgeId`]. The sweep creates them as half-infinite rays growing along a
//! breakpoint of the beachline; a circle event or the border clipper turns
//! them into finite segments. Cross-references between edges (the neighbor
//! link between the two halves of one bisector) are stored as ids, never as
//! direct references.

use crate::point::{approx_eq, coincident, Point};
use crate::site::SiteId;
use num_traits::Float;

/// Stable identity of an edge within its tessellation.
pub type EdgeId = usize;

/// Geometry of an edge.
///
/// Whether an edge is still unbounded is a type-level fact: a `Ray` has a
/// start and a direction, a `Segment` has both endpoints.
#[derive(Clone, Copy, Debug)]
pub enum EdgeGeometry<T> {
    /// Half-infinite: grows from the edge's start along `(run, rise)`.
    Ray {
        /// Direction component along x.
        run: T,
        /// Direction component along y.
        rise: T,
    },
    /// Bounded on both ends.
    Segment {
        /// The endpoint opposite the edge's start.
        end: Point<T>,
    },
}

/// A directed edge, tracing the bisector of its two flanking sites.
///
/// Walking from start towards the direction of growth, [`Edge::left`] is
/// the site on the left and [`Edge::right`] the site on the right. Edges
/// synthesized along the rectangle border bound a single cell and have no
/// right site.
#[derive(Clone, Debug)]
pub struct Edge<T> {
    start: Point<T>,
    geometry: EdgeGeometry<T>,
    left: SiteId,
    right: Option<SiteId>,
    /// Slope and intercept of the carrying line, absent exactly when the
    /// edge is vertical.
    slope_intercept: Option<(T, T)>,
    /// The mirror half of this bisector, when the sweep produced the two
    /// halves separately and never joined them.
    neighbor: Option<EdgeId>,
}

impl<T: Float> Edge<T> {
    /// A new ray tracing the bisector between the sites flanking a
    /// breakpoint. The direction is the left-to-right flank vector rotated
    /// a quarter turn counter-clockwise, which is the direction the
    /// breakpoint moves as the sweep advances.
    pub(crate) fn bisector(
        start: Point<T>,
        left: SiteId,
        right: SiteId,
        left_point: &Point<T>,
        right_point: &Point<T>,
        tolerance: T,
    ) -> Self {
        let dx = right_point.x - left_point.x;
        let dy = right_point.y - left_point.y;
        let run = -dy;
        let rise = dx;
        let slope_intercept = if dy.abs() <= tolerance {
            None
        } else {
            let slope = rise / run;
            Some((slope, start.y - slope * start.x))
        };
        Edge {
            start,
            geometry: EdgeGeometry::Ray { run, rise },
            left,
            right: Some(right),
            slope_intercept,
            neighbor: None,
        }
    }

    /// A finished segment along the rectangle border, bounding one cell.
    pub(crate) fn border(start: Point<T>, end: Point<T>, site: SiteId, tolerance: T) -> Self {
        let slope_intercept = if approx_eq(start.x, end.x, tolerance) {
            None
        } else {
            let slope = (end.y - start.y) / (end.x - start.x);
            Some((slope, start.y - slope * start.x))
        };
        Edge {
            start,
            geometry: EdgeGeometry::Segment { end },
            left: site,
            right: None,
            slope_intercept,
            neighbor: None,
        }
    }

    /// Start of the edge.
    pub fn start(&self) -> &Point<T> {
        &self.start
    }

    /// End of the edge, `None` while the edge is an unresolved ray.
    pub fn end(&self) -> Option<&Point<T>> {
        match &self.geometry {
            EdgeGeometry::Segment { end } => Some(end),
            EdgeGeometry::Ray { .. } => None,
        }
    }

    /// The geometry of the edge.
    pub fn geometry(&self) -> &EdgeGeometry<T> {
        &self.geometry
    }

    /// Site on the left of the direction of growth.
    pub fn left(&self) -> SiteId {
        self.left
    }

    /// Site on the right of the direction of growth, `None` for border
    /// edges.
    pub fn right(&self) -> Option<SiteId> {
        self.right
    }

    /// Whether this edge was synthesized along the rectangle border.
    pub fn is_border_edge(&self) -> bool {
        self.right.is_none()
    }

    /// Both endpoints coincide within `tolerance`. Degenerate edges occur
    /// where four sites are locally cocircular and two vertices of degree
    /// three fall on the same coordinates.
    pub fn is_degenerate(&self, tolerance: T) -> bool {
        match self.end() {
            Some(end) => coincident(&self.start, end, tolerance),
            None => false,
        }
    }

    pub(crate) fn slope_intercept(&self) -> Option<(T, T)> {
        self.slope_intercept
    }

    pub(crate) fn neighbor(&self) -> Option<EdgeId> {
        self.neighbor
    }

    pub(crate) fn set_neighbor(&mut self, neighbor: EdgeId) {
        self.neighbor = Some(neighbor);
    }

    /// Close a growing ray at `end`.
    pub(crate) fn close(&mut self, end: Point<T>) {
        debug_assert!(
            matches!(self.geometry, EdgeGeometry::Ray { .. }),
            "only a ray can be closed by a circle event"
        );
        self.geometry = EdgeGeometry::Segment { end };
    }

    /// Overwrite both endpoints with the clipper's resolution.
    pub(crate) fn resolve(&mut self, start: Point<T>, end: Point<T>) {
        self.start = start;
        self.geometry = EdgeGeometry::Segment { end };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bisector_direction_is_left_flank_rotated() {
        // Flanks at equal height produce a vertical, upward ray.
        let l = Point::new(200.0, 300.0);
        let r = Point::new(400.0, 300.0);
        let e = Edge::bisector(Point::new(300.0, 300.0), 0, 1, &l, &r, 1e-9);
        match *e.geometry() {
            EdgeGeometry::Ray { run, rise } => {
                assert_eq!(run, 0.0);
                assert_eq!(rise, 200.0);
            }
            _ => panic!("expected a ray"),
        }
        assert!(e.slope_intercept().is_none());
    }

    #[test]
    fn bisector_carries_its_line_equation() {
        let l = Point::new(200.0, 300.0);
        let r = Point::new(400.0, 350.0);
        let start = Point::new(400.0, -75.0);
        let e = Edge::bisector(start, 0, 1, &l, &r, 1e-9);
        let (slope, intercept) = e.slope_intercept().unwrap();
        assert!((slope - -4.0).abs() < 1e-9);
        assert!((intercept - 1525.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_edge_detection() {
        let p = Point::new(300.0, 300.0);
        let l = Point::new(200.0, 400.0);
        let r = Point::new(400.0, 200.0);
        let mut e = Edge::bisector(p, 0, 1, &l, &r, 1e-9);
        assert!(!e.is_degenerate(1e-9));
        e.close(p);
        assert!(e.is_degenerate(1e-9));
    }
}

// Copyright (c) 2018-2021 Thomas Kramer.
// SPDX-FileCopyrightText: 2022 Thomas Kramer
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The tessellation façade owning sites, bounds and the edge arena.

use crate::border_edges::close_cells;
use crate::bounds::BoundingBox;
use crate::clip_border::clip_and_attach;
use crate::edge::{Edge, EdgeId};
use crate::error::VoronoiError;
use crate::point::Point;
use crate::site::Site;
use crate::sweep::sweep;
use crate::{BorderEdgeGeneration, Coordinate};

/// A bounded Voronoi tessellation of a set of point sites.
///
/// The instance owns the sites and the edges computed for them. Every call
/// to [`tessellate`](Self::tessellate) recomputes the diagram from scratch;
/// there is no incremental update. A single instance mutates shared state
/// while computing and must not be driven from several threads, but
/// independent instances are fully parallel.
pub struct VoronoiTessellation<T> {
    sites: Vec<Site<T>>,
    edges: Vec<Edge<T>>,
    order: Vec<EdgeId>,
    bounds: BoundingBox<T>,
    tolerance: T,
}

impl<T: Coordinate> VoronoiTessellation<T> {
    /// Create a tessellation over the given site positions, clipped to the
    /// rectangle `min_x ≤ x ≤ max_x`, `min_y ≤ y ≤ max_y`.
    ///
    /// Fails with [`VoronoiError::InvalidBounds`] if either range is
    /// empty. The default tolerance for all geometric comparisons is
    /// `T::epsilon().sqrt()`.
    pub fn new(
        points: impl IntoIterator<Item = (T, T)>,
        min_x: T,
        min_y: T,
        max_x: T,
        max_y: T,
    ) -> Result<Self, VoronoiError> {
        Self::with_tolerance(points, min_x, min_y, max_x, max_y, T::epsilon().sqrt())
    }

    /// Like [`new`](Self::new) with an explicit tolerance, threaded
    /// through every geometric comparison of the computation.
    pub fn with_tolerance(
        points: impl IntoIterator<Item = (T, T)>,
        min_x: T,
        min_y: T,
        max_x: T,
        max_y: T,
        tolerance: T,
    ) -> Result<Self, VoronoiError> {
        let bounds = BoundingBox::new(min_x, min_y, max_x, max_y)?;
        let sites = points.into_iter().map(|(x, y)| Site::new(x, y)).collect();
        Ok(VoronoiTessellation {
            sites,
            edges: Vec::new(),
            order: Vec::new(),
            bounds,
            tolerance,
        })
    }

    /// Compute the tessellation, replacing any previous result.
    ///
    /// Returns the surviving edge ids in discovery order: the order in
    /// which the sweep created the edges, followed by synthesized border
    /// edges when `mode` asks for them.
    pub fn tessellate(&mut self, mode: BorderEdgeGeneration) -> &[EdgeId] {
        for site in self.sites.iter_mut() {
            site.clear_cell();
        }
        let positions: Vec<Point<T>> = self.sites.iter().map(|site| *site.point()).collect();

        let output = sweep(&positions, self.tolerance);
        self.edges = output.edges;
        self.order = clip_and_attach(
            &mut self.edges,
            &output.order,
            &mut self.sites,
            &self.bounds,
            self.tolerance,
        );

        if mode == BorderEdgeGeneration::MakeBorderEdges {
            close_cells(
                &mut self.edges,
                &mut self.order,
                &mut self.sites,
                &self.bounds,
                self.tolerance,
            );
        }

        &self.order
    }

    /// The sites, in input order. Cell contents are valid after
    /// [`tessellate`](Self::tessellate).
    pub fn sites(&self) -> &[Site<T>] {
        &self.sites
    }

    /// Resolve an edge id from a cell or from [`edge_ids`](Self::edge_ids).
    pub fn edge(&self, id: EdgeId) -> &Edge<T> {
        &self.edges[id]
    }

    /// Ids of the surviving edges in discovery order.
    pub fn edge_ids(&self) -> &[EdgeId] {
        &self.order
    }

    /// The surviving edges in discovery order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<T>> {
        self.order.iter().map(move |&id| &self.edges[id])
    }

    /// The clipping rectangle.
    pub fn bounding_box(&self) -> &BoundingBox<T> {
        &self.bounds
    }

    /// The tolerance used for geometric comparisons.
    pub fn tolerance(&self) -> T {
        self.tolerance
    }
}

// Copyright (c) 2018-2021 Thomas Kramer.
// SPDX-FileCopyrightText: 2022 Thomas Kramer
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The sweep-line construction.
//!
//! A horizontal sweep line moves towards larger `y`. Site events insert a
//! new arc into the beachline, circle events remove an arc whose flanking
//! breakpoints converge. Every breakpoint traces one growing edge; when the
//! queue is drained, edges never closed by a circle event remain rays and
//! are handed to the border clipper.

use std::cmp::Ordering;

use crate::beachline::Beachline;
use crate::edge::{Edge, EdgeId};
use crate::event_queue::{EventHandle, EventQueue};
use crate::parabola::{converging_circumcircle, parabola_y, two};
use crate::point::{approx_eq, coincident, Point};
use crate::site::SiteId;
use num_traits::Float;

/// A pending event of the sweep.
#[derive(Clone, Debug)]
pub(crate) enum SweepEvent<T> {
    /// A site about to enter the beachline.
    Site(SiteId),
    /// Predicted disappearance of the arc with the given serial: the
    /// breakpoints flanking it converge on `vertex` when the sweep line
    /// reaches `at`.
    Circle {
        arc_serial: u64,
        at: Point<T>,
        vertex: Point<T>,
    },
}

impl<T: Float> SweepEvent<T> {
    fn position(&self, sites: &[Point<T>]) -> Point<T> {
        match self {
            SweepEvent::Site(site) => sites[*site],
            SweepEvent::Circle { at, .. } => *at,
        }
    }
}

/// Total order of events: sweep coordinate first, then the tie-break
/// coordinate, both under the tessellation tolerance. At coincident
/// positions sites enter the beachline before arcs leave it.
fn compare_events<T: Float>(
    a: &SweepEvent<T>,
    b: &SweepEvent<T>,
    sites: &[Point<T>],
    tolerance: T,
) -> Ordering {
    let pa = a.position(sites);
    let pb = b.position(sites);
    if !approx_eq(pa.y, pb.y, tolerance) {
        return pa.y.partial_cmp(&pb.y).unwrap_or(Ordering::Equal);
    }
    if !approx_eq(pa.x, pb.x, tolerance) {
        return pa.x.partial_cmp(&pb.x).unwrap_or(Ordering::Equal);
    }
    match (a, b) {
        (SweepEvent::Site(_), SweepEvent::Circle { .. }) => Ordering::Less,
        (SweepEvent::Circle { .. }, SweepEvent::Site(_)) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

/// Raw result of the sweep, before clipping.
pub(crate) struct SweepOutput<T> {
    /// The edge arena.
    pub edges: Vec<Edge<T>>,
    /// Primary edges in discovery order. The mirror half of a split
    /// bisector is reachable through its neighbor link only.
    pub order: Vec<EdgeId>,
}

/// Run the sweep over the given site positions.
pub(crate) fn sweep<T: Float>(sites: &[Point<T>], tolerance: T) -> SweepOutput<T> {
    let mut edges: Vec<Edge<T>> = Vec::new();
    let mut order: Vec<EdgeId> = Vec::new();
    let mut beachline = Beachline::new();

    let mut queue = EventQueue::with_capacity(sites.len(), |a: &SweepEvent<T>, b: &SweepEvent<T>| {
        compare_events(a, b, sites, tolerance)
    });
    for site in 0..sites.len() {
        queue.insert(SweepEvent::Site(site));
    }

    while let Some(event) = queue.pop_min() {
        match event {
            SweepEvent::Site(site) => {
                if beachline.is_empty() {
                    beachline.init(site);
                } else {
                    site_event(
                        site,
                        sites,
                        tolerance,
                        &mut queue,
                        &mut beachline,
                        &mut edges,
                        &mut order,
                    );
                }
            }
            SweepEvent::Circle {
                arc_serial,
                at,
                vertex,
            } => {
                circle_event(
                    arc_serial,
                    at.y,
                    vertex,
                    sites,
                    tolerance,
                    &mut queue,
                    &mut beachline,
                    &mut edges,
                    &mut order,
                );
            }
        }
    }

    SweepOutput { edges, order }
}

/// Insert the arc of `site` into the beachline.
fn site_event<T, C>(
    site: SiteId,
    sites: &[Point<T>],
    tolerance: T,
    queue: &mut EventQueue<SweepEvent<T>, C>,
    beachline: &mut Beachline,
    edges: &mut Vec<Edge<T>>,
    order: &mut Vec<EdgeId>,
) where
    T: Float,
    C: Fn(&SweepEvent<T>, &SweepEvent<T>) -> Ordering,
{
    let p = &sites[site];
    let sweep_y = p.y;
    let index = beachline.arc_above(sites, p.x, sweep_y, tolerance);
    let arc_site = beachline.arc(index).site;
    let q = &sites[arc_site];

    // Coincident sites: the first one processed keeps the cell. When the
    // search lands exactly on a breakpoint the twin's arc can sit next to
    // the reported one, so the direct neighbors are probed too.
    let last = beachline.len() - 1;
    for probe in index.saturating_sub(1)..=(index + 1).min(last) {
        if coincident(p, &sites[beachline.arc(probe).site], tolerance) {
            return;
        }
    }

    // The triple around the split arc is history.
    cancel_event(queue, beachline, index);

    if approx_eq(q.y, sweep_y, tolerance) {
        // Degenerate split. The arc's focus is still on the sweep line, so
        // both parabolas are needles and the bisector is the vertical
        // midline between them. Events arrive in x order, hence the new
        // arc lands to the right.
        debug_assert!(p.x > q.x - tolerance);
        let start = Point::new((p.x + q.x) / two::<T>(), sweep_y);
        let primary = push_bisector_pair(start, arc_site, site, sites, tolerance, edges, order);
        beachline.insert_after(index, site, primary);

        schedule_circle(queue, beachline, index, sites, tolerance, sweep_y);
        schedule_circle(queue, beachline, index + 1, sites, tolerance, sweep_y);
    } else {
        // Split the arc in three. Both new breakpoints start at the point
        // of the old arc directly above the new site.
        let start = Point::new(p.x, parabola_y(q, sweep_y, p.x));
        let primary = push_bisector_pair(start, arc_site, site, sites, tolerance, edges, order);
        let mirror = edges.len() - 1;
        beachline.split(index, site, primary, mirror);

        schedule_circle(queue, beachline, index, sites, tolerance, sweep_y);
        schedule_circle(queue, beachline, index + 2, sites, tolerance, sweep_y);
    }
}

/// Create the two halves of the bisector between `left` and `right`,
/// growing in opposite directions from `start`. The primary half goes into
/// the discovery order, the mirror is linked as its neighbor and returns
/// as `edges.len() - 1`.
fn push_bisector_pair<T: Float>(
    start: Point<T>,
    left: SiteId,
    right: SiteId,
    sites: &[Point<T>],
    tolerance: T,
    edges: &mut Vec<Edge<T>>,
    order: &mut Vec<EdgeId>,
) -> EdgeId {
    let primary = edges.len();
    edges.push(Edge::bisector(
        start,
        left,
        right,
        &sites[left],
        &sites[right],
        tolerance,
    ));
    let mirror = edges.len();
    edges.push(Edge::bisector(
        start,
        right,
        left,
        &sites[right],
        &sites[left],
        tolerance,
    ));
    edges[primary].set_neighbor(mirror);
    order.push(primary);
    primary
}

/// Remove the arc whose breakpoints have converged.
#[allow(clippy::too_many_arguments)]
fn circle_event<T, C>(
    arc_serial: u64,
    sweep_y: T,
    vertex: Point<T>,
    sites: &[Point<T>],
    tolerance: T,
    queue: &mut EventQueue<SweepEvent<T>, C>,
    beachline: &mut Beachline,
    edges: &mut Vec<Edge<T>>,
    order: &mut Vec<EdgeId>,
) where
    T: Float,
    C: Fn(&SweepEvent<T>, &SweepEvent<T>) -> Ordering,
{
    let index = match beachline.index_of_serial(arc_serial) {
        Some(index) => index,
        // Events are removed from the queue before their arc goes away.
        None => {
            debug_assert!(false, "circle event fired for a vanished arc");
            return;
        }
    };
    debug_assert!(index > 0 && index + 1 < beachline.len());

    // This event just fired; the neighbors' events referenced the
    // vanishing arc and are stale.
    beachline.arc_mut(index).event = None;
    cancel_event(queue, beachline, index - 1);
    cancel_event(queue, beachline, index + 1);

    let left_site = beachline.arc(index - 1).site;
    let right_site = beachline.arc(index + 1).site;

    // Close the two edges traced by the dying arc's breakpoints.
    let left_edge = beachline.arc(index).left_edge;
    let right_edge = beachline.arc(index + 1).left_edge;
    debug_assert!(left_edge.is_some() && right_edge.is_some());
    if let Some(edge) = left_edge {
        edges[edge].close(vertex);
    }
    if let Some(edge) = right_edge {
        edges[edge].close(vertex);
    }

    // One new edge grows from the vertex between the newly adjacent arcs.
    let merged = edges.len();
    edges.push(Edge::bisector(
        vertex,
        left_site,
        right_site,
        &sites[left_site],
        &sites[right_site],
        tolerance,
    ));
    order.push(merged);
    beachline.remove(index, merged);

    // The merge created two fresh triples.
    schedule_circle(queue, beachline, index - 1, sites, tolerance, sweep_y);
    schedule_circle(queue, beachline, index, sites, tolerance, sweep_y);
}

/// Drop the circle event scheduled for the arc at `index`, if any.
fn cancel_event<T, C>(
    queue: &mut EventQueue<SweepEvent<T>, C>,
    beachline: &mut Beachline,
    index: usize,
) where
    T: Float,
    C: Fn(&SweepEvent<T>, &SweepEvent<T>) -> Ordering,
{
    if let Some(handle) = beachline.arc_mut(index).event.take() {
        let removed = queue.remove(handle);
        debug_assert!(removed.is_some(), "pending circle event lost its queue entry");
    }
}

/// Schedule the disappearance of the arc at `index`, replacing whatever
/// event it carried. The triple must converge and the event must not lie
/// behind the sweep line.
fn schedule_circle<T, C>(
    queue: &mut EventQueue<SweepEvent<T>, C>,
    beachline: &mut Beachline,
    index: usize,
    sites: &[Point<T>],
    tolerance: T,
    sweep_y: T,
) where
    T: Float,
    C: Fn(&SweepEvent<T>, &SweepEvent<T>) -> Ordering,
{
    cancel_event(queue, beachline, index);
    if index == 0 || index + 1 >= beachline.len() {
        return;
    }
    let left = beachline.arc(index - 1).site;
    let middle = beachline.arc(index).site;
    let right = beachline.arc(index + 1).site;
    // Flanks of a single site never converge.
    if left == right {
        return;
    }
    let (center, radius) = match converging_circumcircle(
        &sites[left],
        &sites[middle],
        &sites[right],
        tolerance,
    ) {
        Some(circle) => circle,
        None => return,
    };
    let at = Point::new(center.x, center.y + radius);
    if at.y < sweep_y - tolerance {
        return;
    }
    let arc_serial = beachline.arc(index).serial;
    let handle: EventHandle = queue.insert(SweepEvent::Circle {
        arc_serial,
        at,
        vertex: center,
    });
    beachline.arc_mut(index).event = Some(handle);
}

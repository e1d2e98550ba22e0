// Copyright (c) 2018-2021 Thomas Kramer.
// SPDX-FileCopyrightText: 2022 Thomas Kramer
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Tests for the bounded Voronoi tessellation.

#[cfg(test)]
mod test {
    extern crate rand;

    use self::rand::distributions::{Distribution, Uniform};
    use self::rand::rngs::StdRng;
    use self::rand::SeedableRng;
    use sweepline_voronoi::*;

    const TOL: f64 = 1e-6;

    fn build(sites: &[(f64, f64)], mode: BorderEdgeGeneration) -> VoronoiTessellation<f64> {
        tessellate(sites.iter().copied(), 0.0, 0.0, 600.0, 600.0, mode)
            .expect("bounds are valid")
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < TOL
    }

    fn close_point(p: &Point<f64>, x: f64, y: f64) -> bool {
        close(p.x, x) && close(p.y, y)
    }

    #[test]
    fn invalid_bounds_are_rejected() {
        let sites = [(1.0, 1.0)];
        let r = VoronoiTessellation::new(sites.iter().copied(), 10.0, 0.0, 10.0, 600.0);
        assert!(matches!(r, Err(VoronoiError::InvalidBounds { .. })));
        let r = VoronoiTessellation::new(sites.iter().copied(), 0.0, 600.0, 600.0, 0.0);
        assert!(matches!(r, Err(VoronoiError::InvalidBounds { .. })));
    }

    #[test]
    fn no_sites_yield_no_edges() {
        let t = build(&[], BorderEdgeGeneration::MakeBorderEdges);
        assert_eq!(t.edges().count(), 0);
    }

    #[test]
    fn single_site_yields_no_bisector_edges() {
        let t = build(&[(300.0, 300.0)], BorderEdgeGeneration::DoNotMakeBorderEdges);
        assert_eq!(t.edges().count(), 0);
        assert!(t.sites()[0].edges().is_empty());
    }

    #[test]
    fn single_site_outside_the_box_yields_nothing() {
        let t = build(&[(-100.0, 300.0)], BorderEdgeGeneration::DoNotMakeBorderEdges);
        assert_eq!(t.edges().count(), 0);
        assert!(t.sites()[0].edges().is_empty());
    }

    #[test]
    fn distant_outside_pair_yields_nothing() {
        // Both sites left of the box are closest to each other; their
        // bisector at x = -350 never touches the rectangle.
        let t = build(
            &[(-1000.0, 300.0), (300.0, 300.0)],
            BorderEdgeGeneration::DoNotMakeBorderEdges,
        );
        assert_eq!(t.edges().count(), 0);
        assert!(t.sites()[0].edges().is_empty());
        assert!(t.sites()[1].edges().is_empty());
    }

    #[test]
    fn boundary_site_with_interior_partner() {
        let t = build(
            &[(0.0, 300.0), (300.0, 300.0)],
            BorderEdgeGeneration::DoNotMakeBorderEdges,
        );
        let edges: Vec<_> = t.edges().collect();
        assert_eq!(edges.len(), 1);
        assert_eq!(t.sites()[0].edges().len(), 1);
        assert_eq!(t.sites()[1].edges().len(), 1);

        // The bisector runs the full height of the box at x = 150.
        let e = edges[0];
        let end = e.end().expect("clipped edge is a segment");
        assert!(close(e.start().x, 150.0) && close(end.x, 150.0));
        let mut ys = [e.start().y, end.y];
        ys.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert!(close(ys[0], 0.0) && close(ys[1], 600.0));
    }

    #[test]
    fn two_site_bisector_is_clipped_to_the_box() {
        let t = build(
            &[(200.0, 300.0), (400.0, 350.0)],
            BorderEdgeGeneration::DoNotMakeBorderEdges,
        );
        let edges: Vec<_> = t.edges().collect();
        assert_eq!(edges.len(), 1);

        let e = edges[0];
        let end = e.end().expect("clipped edge is a segment");
        // The bisector line y = -4x + 1525 enters at the bottom and
        // leaves at the top of the box.
        assert!(close_point(e.start(), 381.25, 0.0));
        assert!(close_point(end, 231.25, 600.0));
        assert_eq!(e.start().border_location, BorderLocation::Bottom);
        assert_eq!(end.border_location, BorderLocation::Top);
        assert_eq!(e.left(), 0);
        assert_eq!(e.right(), Some(1));
    }

    #[test]
    fn square_cluster_collapses_to_twin_degree_three_vertices() {
        // Four cocircular sites imply four edges through one point, but
        // the construction never produces a vertex of degree four: it
        // yields two degree-three vertices joined by a zero-length edge.
        let t = build(
            &[
                (200.0, 200.0),
                (200.0, 400.0),
                (400.0, 400.0),
                (400.0, 200.0),
            ],
            BorderEdgeGeneration::DoNotMakeBorderEdges,
        );
        let edges: Vec<_> = t.edges().collect();
        assert_eq!(edges.len(), 5);

        let degenerate: Vec<_> = edges.iter().filter(|e| e.is_degenerate(TOL)).collect();
        assert_eq!(degenerate.len(), 1);
        assert!(close_point(degenerate[0].start(), 300.0, 300.0));

        let mut cell_sizes: Vec<usize> =
            t.sites().iter().map(|site| site.edges().len()).collect();
        cell_sizes.sort_unstable();
        assert_eq!(cell_sizes, vec![2, 2, 3, 3]);
    }

    #[test]
    fn wedge_symmetry_in_all_orientations() {
        // Three sites in an L shape around a common center, in all eight
        // rotations and reflections. Three edges meet at the equidistant
        // vertex and run to three different parts of the border.
        for &sx in &[-1.0, 1.0] {
            for &sy in &[-1.0, 1.0] {
                for &swapped in &[false, true] {
                    let p = (300.0, 300.0);
                    let q = (300.0, 300.0 + 100.0 * sy);
                    let r = (300.0 + 100.0 * sx, 300.0);
                    let sites = if swapped { vec![p, r, q] } else { vec![p, q, r] };
                    let t = build(&sites, BorderEdgeGeneration::DoNotMakeBorderEdges);

                    let edges: Vec<_> = t.edges().collect();
                    assert_eq!(edges.len(), 3, "sx={} sy={} swapped={}", sx, sy, swapped);

                    let vx = 300.0 + 50.0 * sx;
                    let vy = 300.0 + 50.0 * sy;
                    let mut locations = Vec::new();
                    for e in &edges {
                        let start = e.start();
                        let end = e.end().expect("clipped edge is a segment");
                        let (near, far) = if close_point(start, vx, vy) {
                            (start, end)
                        } else {
                            (end, start)
                        };
                        assert!(
                            close_point(near, vx, vy),
                            "edge misses the vertex for sx={} sy={}",
                            sx,
                            sy
                        );
                        assert!(far.border_location.is_on_border());
                        locations.push(far.border_location);
                    }
                    assert!(locations[0] != locations[1]);
                    assert!(locations[1] != locations[2]);
                    assert!(locations[0] != locations[2]);
                }
            }
        }
    }

    #[test]
    fn collinear_sites_make_parallel_bisectors() {
        let t = build(
            &[(300.0, 200.0), (300.0, 300.0), (300.0, 400.0)],
            BorderEdgeGeneration::DoNotMakeBorderEdges,
        );
        let edges: Vec<_> = t.edges().collect();
        assert_eq!(edges.len(), 2);

        let mut heights = Vec::new();
        for e in &edges {
            let end = e.end().expect("clipped edge is a segment");
            // Horizontal, spanning the full width.
            assert!(close(e.start().y, end.y));
            let mut xs = [e.start().x, end.x];
            xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
            assert!(close(xs[0], 0.0) && close(xs[1], 600.0));
            heights.push(e.start().y);
        }
        heights.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert!(close(heights[0], 250.0) && close(heights[1], 350.0));

        // The middle site is flanked by both bisectors.
        assert_eq!(t.sites()[1].edges().len(), 2);
    }

    #[test]
    fn conservation_and_containment_on_random_sites() {
        let mut rng = StdRng::seed_from_u64(42);
        let range = Uniform::new(50.0, 550.0);

        for _ in 0..5 {
            let sites: Vec<(f64, f64)> = (0..40)
                .map(|_| (range.sample(&mut rng), range.sample(&mut rng)))
                .collect();
            let t = build(&sites, BorderEdgeGeneration::DoNotMakeBorderEdges);

            let mut counts = vec![0usize; sites.len()];
            for e in t.edges() {
                let end = e.end().expect("every surviving edge is a segment");
                for p in [e.start(), end] {
                    assert!(p.x >= -TOL && p.x <= 600.0 + TOL);
                    assert!(p.y >= -TOL && p.y <= 600.0 + TOL);
                }
                let left = e.left();
                let right = e.right().expect("bisector edges have two owners");
                assert_ne!(left, right);
                counts[left] += 1;
                counts[right] += 1;
            }

            // Each cell lists exactly the edges that name its site, once.
            for (site, count) in t.sites().iter().zip(&counts) {
                assert_eq!(site.edges().len(), *count);
                let mut ids = site.edges().to_vec();
                ids.sort_unstable();
                ids.dedup();
                assert_eq!(ids.len(), *count);
            }
        }
    }

    #[test]
    fn border_mode_closes_a_single_cell() {
        let t = build(&[(300.0, 300.0)], BorderEdgeGeneration::MakeBorderEdges);
        let edges: Vec<_> = t.edges().collect();
        assert_eq!(edges.len(), 4);
        for e in &edges {
            assert!(e.is_border_edge());
            assert_eq!(e.left(), 0);
            assert!(e.start().border_location.is_corner());
        }
        assert_eq!(t.sites()[0].edges().len(), 4);
    }

    #[test]
    fn border_mode_closes_two_cells() {
        let t = build(
            &[(150.0, 300.0), (450.0, 300.0)],
            BorderEdgeGeneration::MakeBorderEdges,
        );
        // One bisector plus six border edges; the boundary crossings at
        // (300, 0) and (300, 600) split the bottom and top sides.
        assert_eq!(t.edges().count(), 7);
        assert_eq!(t.sites()[0].edges().len(), 4);
        assert_eq!(t.sites()[1].edges().len(), 4);

        let border_count = t.edges().filter(|e| e.is_border_edge()).count();
        assert_eq!(border_count, 6);
    }

    #[test]
    fn tessellation_recomputes_from_scratch() {
        let sites = [(120.0, 80.0), (400.0, 410.0), (520.0, 150.0), (60.0, 500.0)];
        let mut t = VoronoiTessellation::new(sites.iter().copied(), 0.0, 0.0, 600.0, 600.0)
            .expect("bounds are valid");

        let first: Vec<(f64, f64, f64, f64)> = {
            t.tessellate(BorderEdgeGeneration::DoNotMakeBorderEdges);
            t.edges()
                .map(|e| {
                    let end = e.end().unwrap();
                    (e.start().x, e.start().y, end.x, end.y)
                })
                .collect()
        };
        let second: Vec<(f64, f64, f64, f64)> = {
            t.tessellate(BorderEdgeGeneration::DoNotMakeBorderEdges);
            t.edges()
                .map(|e| {
                    let end = e.end().unwrap();
                    (e.start().x, e.start().y, end.x, end.y)
                })
                .collect()
        };
        assert!(!first.is_empty());
        assert_eq!(first, second);

        // Cells are rebuilt, not accumulated.
        let sizes: Vec<usize> = t.sites().iter().map(|s| s.edges().len()).collect();
        t.tessellate(BorderEdgeGeneration::DoNotMakeBorderEdges);
        let rebuilt: Vec<usize> = t.sites().iter().map(|s| s.edges().len()).collect();
        assert_eq!(sizes, rebuilt);
    }
}

//! The three set operations.

use super::reconstruct::contour_from_candidates;
use crate::contour::{point_in_contour, segments_intersect, Contour, Winding};
use crate::tolerance::CandidateSet;
use num_traits::Float;

/// Every contour of `a` followed by every contour of `b`.
///
/// Each output contour is oriented counter-clockwise and has its hole flag
/// cleared. Overlapping contours are not merged; degenerate ones are passed
/// through without re-orientation.
pub fn polygon_union<F: Float>(a: &[Contour<F>], b: &[Contour<F>]) -> Vec<Contour<F>> {
    a.iter()
        .chain(b)
        .map(|contour| {
            let mut out = contour.clone().with_winding(Winding::CounterClockwise);
            out.is_hole = false;
            out
        })
        .collect()
}

/// Pairwise overlap of the contours of `a` and `b`.
///
/// For each pair of non-degenerate contours the candidate points are, in
/// order: vertices of the first inside the second, vertices of the second
/// inside the first, then every edge crossing. A pair yields one contour if
/// at least three distinct candidates remain.
pub fn polygon_intersection<F: Float>(a: &[Contour<F>], b: &[Contour<F>]) -> Vec<Contour<F>> {
    let mut result = Vec::new();

    for (i, first) in a.iter().enumerate() {
        if first.is_degenerate() {
            log::trace!("intersection: skipping degenerate contour {i} of A");
            continue;
        }

        for (j, second) in b.iter().enumerate() {
            if second.is_degenerate() {
                log::trace!("intersection: skipping degenerate contour {j} of B");
                continue;
            }

            let mut candidates = CandidateSet::new();
            candidates.extend(
                first
                    .points
                    .iter()
                    .copied()
                    .filter(|&p| point_in_contour(p, second)),
            );
            candidates.extend(
                second
                    .points
                    .iter()
                    .copied()
                    .filter(|&p| point_in_contour(p, first)),
            );
            add_edge_crossings(&mut candidates, first, second);

            let found = candidates.len();
            match contour_from_candidates(candidates) {
                Some(contour) => result.push(contour),
                None => log::trace!(
                    "intersection: pair ({i}, {j}) has {found} candidate points, dropped"
                ),
            }
        }
    }

    result
}

/// `a` minus `b`, one output contour per contour of `a` at most.
///
/// Candidates for a contour of `a` are its vertices outside every contour
/// of `b`, then its edge crossings with each non-degenerate contour of `b`.
/// An empty `b` returns `a` unchanged (no re-orientation); an empty `a`
/// returns nothing.
pub fn polygon_difference<F: Float>(a: &[Contour<F>], b: &[Contour<F>]) -> Vec<Contour<F>> {
    if a.is_empty() {
        return Vec::new();
    }
    if b.is_empty() {
        return a.to_vec();
    }

    let mut result = Vec::new();

    for (i, first) in a.iter().enumerate() {
        if first.is_degenerate() {
            log::trace!("difference: skipping degenerate contour {i} of A");
            continue;
        }

        let mut candidates = CandidateSet::new();
        candidates.extend(
            first
                .points
                .iter()
                .copied()
                .filter(|&p| !b.iter().any(|other| point_in_contour(p, other))),
        );

        for (j, other) in b.iter().enumerate() {
            if other.is_degenerate() {
                log::trace!("difference: skipping degenerate contour {j} of B");
                continue;
            }
            add_edge_crossings(&mut candidates, first, other);
        }

        let found = candidates.len();
        match contour_from_candidates(candidates) {
            Some(contour) => result.push(contour),
            None => log::trace!(
                "difference: contour {i} of A has {found} candidate points, dropped"
            ),
        }
    }

    result
}

/// Adds every crossing between the edge cycles of `first` and `second`.
fn add_edge_crossings<F: Float>(
    candidates: &mut CandidateSet<F>,
    first: &Contour<F>,
    second: &Contour<F>,
) {
    for e1 in first.edges() {
        for e2 in second.edges() {
            if let Some(p) = segments_intersect(e1.start, e1.end, e2.start, e2.end) {
                candidates.insert(p);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Point2;
    use approx::assert_relative_eq;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Contour<f64> {
        Contour::new(vec![
            Point2::new(x0, y0),
            Point2::new(x1, y0),
            Point2::new(x1, y1),
            Point2::new(x0, y1),
        ])
    }

    fn has_point(c: &Contour<f64>, x: f64, y: f64) -> bool {
        c.points.iter().any(|p| p.approx_eq(Point2::new(x, y)))
    }

    #[test]
    fn test_union_stacks_contours() {
        let a = vec![rect(0.0, 0.0, 10.0, 10.0)];
        let b = vec![rect(5.0, 5.0, 15.0, 15.0), rect(20.0, 20.0, 30.0, 30.0)];
        let result = polygon_union(&a, &b);
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].points, a[0].points);
        assert_eq!(result[2].points, b[1].points);
    }

    #[test]
    fn test_union_normalizes_winding_and_holes() {
        let cw = rect(0.0, 0.0, 4.0, 4.0).reversed();
        let hole = Contour::hole(rect(1.0, 1.0, 2.0, 2.0).points);
        let result = polygon_union(&[cw.clone()], &[hole]);

        assert_eq!(result.len(), 2);
        for c in &result {
            assert_eq!(c.winding(), Winding::CounterClockwise);
            assert!(!c.is_hole);
        }
        assert_eq!(result[0].points, cw.reversed().points);
    }

    #[test]
    fn test_union_passes_degenerate_contours_through() {
        let seg = Contour::hole(vec![Point2::new(1.0, 0.0), Point2::new(0.0, 0.0)]);
        let result = polygon_union(&[seg.clone()], &[]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].points, seg.points);
        assert!(!result[0].is_hole);
    }

    #[test]
    fn test_intersection_overlapping_squares() {
        let a = vec![rect(0.0, 0.0, 10.0, 10.0)];
        let b = vec![rect(5.0, 5.0, 15.0, 15.0)];
        let result = polygon_intersection(&a, &b);

        assert_eq!(result.len(), 1);
        let c = &result[0];
        assert_eq!(
            c.points,
            vec![
                Point2::new(5.0, 5.0),
                Point2::new(10.0, 5.0),
                Point2::new(10.0, 10.0),
                Point2::new(5.0, 10.0),
            ]
        );
        assert_relative_eq!(c.signed_area(), 25.0);
    }

    #[test]
    fn test_intersection_three_candidates_keep_source_order() {
        // A contributes (6, 0), B contributes (2, 0), the crossing is (4, 2);
        // the other crossings land on those two vertices and are dropped
        let a = Contour::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(6.0, 0.0),
            Point2::new(0.0, 6.0),
        ]);
        let b = Contour::new(vec![
            Point2::new(2.0, 0.0),
            Point2::new(8.0, 0.0),
            Point2::new(8.0, 6.0),
        ]);

        // (6,0) (2,0) (4,2) is clockwise and comes back reversed
        let ab = polygon_intersection(&[a.clone()], &[b.clone()]);
        assert_eq!(ab.len(), 1);
        let expected = [(4.0, 2.0), (2.0, 0.0), (6.0, 0.0)];
        assert_eq!(ab[0].len(), 3);
        for (p, (x, y)) in ab[0].points.iter().zip(expected) {
            assert!(p.approx_eq(Point2::new(x, y)), "got {p:?}, want ({x}, {y})");
        }

        // (2,0) (6,0) (4,2) is already counter-clockwise
        let ba = polygon_intersection(&[b], &[a]);
        assert_eq!(ba.len(), 1);
        let expected = [(2.0, 0.0), (6.0, 0.0), (4.0, 2.0)];
        assert_eq!(ba[0].len(), 3);
        for (p, (x, y)) in ba[0].points.iter().zip(expected) {
            assert!(p.approx_eq(Point2::new(x, y)), "got {p:?}, want ({x}, {y})");
        }
        assert_relative_eq!(ba[0].signed_area(), 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_f32_crossing_at_vertex_is_not_duplicated() {
        for y in [0.1104_f32, 0.5, 1.3, 2.75, 4.2, 6.5] {
            // A has a vertex at (10, y) and an edge of B passes through it
            let a = vec![Contour::new(vec![
                Point2::new(0.0_f32, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(10.0, y),
                Point2::new(10.0, 10.0),
                Point2::new(0.0, 10.0),
            ])];
            let b = vec![Contour::new(vec![
                Point2::new(4.0_f32, y - 2.0),
                Point2::new(16.0, y + 2.0),
                Point2::new(16.0, 9.0),
                Point2::new(4.0, 9.0),
            ])];

            let result = polygon_intersection(&a, &b);
            assert_eq!(result.len(), 1);
            let points = &result[0].points;
            assert!(points.len() >= 4, "y = {y}: {points:?}");
            for (i, p) in points.iter().enumerate() {
                for q in &points[i + 1..] {
                    let close = (p.x - q.x).abs() < 1e-4 && (p.y - q.y).abs() < 1e-4;
                    assert!(!close, "y = {y}: near-duplicate {p:?} {q:?}");
                }
            }
        }
    }

    #[test]
    fn test_intersection_disjoint() {
        let a = vec![rect(0.0, 0.0, 1.0, 1.0)];
        let b = vec![rect(5.0, 5.0, 6.0, 6.0)];
        assert!(polygon_intersection(&a, &b).is_empty());
    }

    #[test]
    fn test_intersection_contained() {
        let a = vec![rect(0.0, 0.0, 10.0, 10.0)];
        let b = vec![rect(2.0, 3.0, 4.0, 6.0)];
        let result = polygon_intersection(&a, &b);
        assert_eq!(result.len(), 1);
        assert_relative_eq!(result[0].area(), 6.0);
    }

    #[test]
    fn test_intersection_cartesian_pairs() {
        let a = vec![rect(0.0, 0.0, 10.0, 10.0), rect(20.0, 0.0, 30.0, 10.0)];
        let b = vec![rect(5.0, 2.0, 25.0, 8.0)];
        let result = polygon_intersection(&a, &b);
        assert_eq!(result.len(), 2);
        assert_relative_eq!(result[0].area(), 30.0);
        assert_relative_eq!(result[1].area(), 30.0);
    }

    #[test]
    fn test_intersection_skips_degenerate() {
        let a = vec![Contour::new(vec![Point2::new(1.0, 1.0), Point2::new(2.0, 2.0)])];
        let b = vec![rect(0.0, 0.0, 10.0, 10.0)];
        assert!(polygon_intersection(&a, &b).is_empty());
        assert!(polygon_intersection(&b, &a).is_empty());
    }

    #[test]
    fn test_intersection_ignores_hole_flag() {
        let a = vec![rect(0.0, 0.0, 10.0, 10.0)];
        let b = vec![Contour::hole(rect(5.0, 5.0, 15.0, 15.0).points)];
        let result = polygon_intersection(&a, &b);
        assert_eq!(result.len(), 1);
        assert!(!result[0].is_hole);
        assert_relative_eq!(result[0].area(), 25.0);
    }

    #[test]
    fn test_difference_corner_bite() {
        let a = vec![rect(0.0, 0.0, 10.0, 10.0)];
        let b = vec![rect(5.0, 5.0, 15.0, 15.0)];
        let result = polygon_difference(&a, &b);

        assert_eq!(result.len(), 1);
        let c = &result[0];
        assert_eq!(c.len(), 5);
        for (x, y) in [(0.0, 0.0), (10.0, 0.0), (0.0, 10.0), (10.0, 5.0), (5.0, 10.0)] {
            assert!(has_point(c, x, y), "missing ({x}, {y})");
        }
        assert!(!has_point(c, 10.0, 10.0));
        assert_relative_eq!(c.signed_area(), 87.5);
    }

    #[test]
    fn test_difference_full_containment() {
        let a = vec![rect(2.0, 2.0, 4.0, 4.0)];
        let b = vec![rect(0.0, 0.0, 10.0, 10.0)];
        assert!(polygon_difference(&a, &b).is_empty());
    }

    #[test]
    fn test_difference_accumulates_over_all_of_b() {
        // Two bites out of opposite corners produce a single contour
        let a = vec![rect(0.0, 0.0, 10.0, 10.0)];
        let b = vec![rect(-5.0, -5.0, 2.0, 2.0), rect(8.0, 8.0, 15.0, 15.0)];
        let result = polygon_difference(&a, &b);
        assert_eq!(result.len(), 1);
        let c = &result[0];
        assert_eq!(c.len(), 6);
        assert!(!has_point(c, 0.0, 0.0));
        assert!(!has_point(c, 10.0, 10.0));
        assert!(has_point(c, 2.0, 0.0));
        assert!(has_point(c, 10.0, 8.0));
    }

    #[test]
    fn test_difference_empty_operands() {
        let a = vec![rect(0.0, 0.0, 1.0, 1.0).reversed()];
        assert!(polygon_difference::<f64>(&[], &a).is_empty());

        // An empty subtrahend returns A verbatim, winding included
        let unchanged = polygon_difference(&a, &[]);
        assert_eq!(unchanged, a);
        assert_eq!(unchanged[0].winding(), Winding::Clockwise);
    }

    #[test]
    fn test_difference_degenerate_subtrahend_still_rebuilds() {
        // B is non-empty, so A is re-sorted and normalized rather than copied
        let a = vec![Contour::hole(rect(0.0, 0.0, 10.0, 10.0).reversed().points)];
        let b = vec![Contour::new(vec![Point2::new(2.0, 2.0), Point2::new(8.0, 8.0)])];
        let result = polygon_difference(&a, &b);

        assert_eq!(result.len(), 1);
        assert_ne!(result, a);
        assert!(!result[0].is_hole);
        assert_eq!(result[0].winding(), Winding::CounterClockwise);
        assert_eq!(result[0].points, rect(0.0, 0.0, 10.0, 10.0).points);
    }

    #[test]
    fn test_difference_disjoint_keeps_shape() {
        let a = vec![Contour::hole(rect(0.0, 0.0, 2.0, 2.0).points)];
        let b = vec![rect(5.0, 5.0, 6.0, 6.0)];
        let result = polygon_difference(&a, &b);
        assert_eq!(result.len(), 1);
        assert!(!result[0].is_hole);
        assert_relative_eq!(result[0].signed_area(), 4.0);
    }
}

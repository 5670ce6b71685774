//! Property tests for ray-casting containment.

use alloy_phase_core::geometry::{contains_point, PhasePoint};
use proptest::prelude::*;

// ─── helpers ─────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle `[t0, t1] × [c0, c1]` as four vertices.
fn rect(t0: f64, t1: f64, c0: f64, c1: f64) -> Vec<PhasePoint> {
    vec![
        PhasePoint::new(t0, c0),
        PhasePoint::new(t0, c1),
        PhasePoint::new(t1, c1),
        PhasePoint::new(t1, c0),
    ]
}

fn polygon() -> impl Strategy<Value = Vec<PhasePoint>> {
    prop::collection::vec((0.0..2000.0f64, 0.0..1.0f64), 3..12)
        .prop_map(|pts| pts.into_iter().map(PhasePoint::from).collect())
}

// ─── properties ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn test_rectangle_interior_is_inside(
        t0 in 0.0..1000.0f64, dt in 1.0..1000.0f64,
        c0 in 0.0..0.5f64, dc in 0.01..0.5f64,
        ft in 0.01..0.99f64, fc in 0.01..0.99f64,
    ) {
        let r = rect(t0, t0 + dt, c0, c0 + dc);
        let p = PhasePoint::new(t0 + ft * dt, c0 + fc * dc);
        prop_assert!(contains_point(&r, p));
    }

    #[test]
    fn test_points_above_rectangle_are_outside(
        t0 in 0.0..1000.0f64, dt in 1.0..1000.0f64,
        c0 in 0.0..0.5f64, dc in 0.01..0.5f64,
        above in 0.5..500.0f64, fc in 0.0..1.0f64,
    ) {
        let r = rect(t0, t0 + dt, c0, c0 + dc);
        let p = PhasePoint::new(t0 + dt + above, c0 + fc * dc);
        prop_assert!(!contains_point(&r, p));
    }

    #[test]
    fn test_shared_edge_claimed_by_exactly_one(
        t0 in 0.0..1000.0f64, dt in 1.0..1000.0f64,
        split in 0.1..0.9f64, ft in 0.01..0.99f64,
    ) {
        let left = rect(t0, t0 + dt, 0.0, split);
        let right = rect(t0, t0 + dt, split, 1.0);
        let p = PhasePoint::new(t0 + ft * dt, split);
        prop_assert!(contains_point(&left, p) != contains_point(&right, p));
    }

    #[test]
    fn test_rotation_of_vertex_list_is_irrelevant(
        poly in polygon(), shift in 0usize..12,
        t in 0.0..2000.0f64, c in 0.0..1.0f64,
    ) {
        let p = PhasePoint::new(t, c);
        let mut rotated = poly.clone();
        let n = rotated.len();
        rotated.rotate_left(shift % n);
        prop_assert_eq!(contains_point(&poly, p), contains_point(&rotated, p));
    }

    #[test]
    fn test_rectangle_winding_is_irrelevant(
        t0 in 0.0..1000.0f64, dt in 1.0..1000.0f64,
        c0 in 0.0..0.5f64, dc in 0.01..0.5f64,
        t in 0.0..2000.0f64, c in 0.0..1.0f64,
    ) {
        let r = rect(t0, t0 + dt, c0, c0 + dc);
        let mut reversed = r.clone();
        reversed.reverse();
        let p = PhasePoint::new(t, c);
        prop_assert_eq!(contains_point(&r, p), contains_point(&reversed, p));
    }

    #[test]
    fn test_fewer_than_three_vertices_contain_nothing(
        pts in prop::collection::vec((0.0..2000.0f64, 0.0..1.0f64), 0..3),
        t in 0.0..2000.0f64, c in 0.0..1.0f64,
    ) {
        let boundary: Vec<PhasePoint> = pts.into_iter().map(PhasePoint::from).collect();
        prop_assert!(!contains_point(&boundary, PhasePoint::new(t, c)));
    }
}

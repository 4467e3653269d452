//! Property tests for the OPTICS ordering, checked against brute force.

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use optics_ordering::adapters::matrix::DistanceMatrix;
use optics_ordering::core::metric::Euclidean;
use optics_ordering::engine::{Seed, SeedQueue};
use optics_ordering::ports::Distances;
use optics_ordering::{run, LabeledPoint, Metric, OpticsConfig, OpticsEngine, Point};

/// Points on a small integer grid, so equal distances (ties) are common
fn grid_points(max: usize) -> impl Strategy<Value = Vec<LabeledPoint>> {
    prop::collection::vec((0i32..15, 0i32..15), 0..max).prop_map(|coords| {
        coords
            .into_iter()
            .enumerate()
            .map(|(i, (x, y))| LabeledPoint::at(format!("p{i}"), x as f64, y as f64))
            .collect()
    })
}

fn brute_core(points: &[LabeledPoint], p: usize, min_pts: usize, epsilon: f64) -> Option<f64> {
    let mut within: Vec<f64> = points
        .iter()
        .enumerate()
        .filter(|&(q, _)| q != p)
        .map(|(_, lp)| Euclidean.distance(&points[p].point, &lp.point))
        .filter(|&d| d <= epsilon)
        .collect();
    if within.len() < min_pts {
        return None;
    }
    within.sort_by(f64::total_cmp);
    Some(within[min_pts - 1])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_label_appears_once(points in grid_points(40), min_pts in 1usize..5, epsilon in 0.5f64..6.0) {
        let ordering = run(&points, min_pts, epsilon).unwrap();
        prop_assert_eq!(ordering.len(), points.len());

        let seen: HashSet<&str> = ordering.labels().map(|l| l.as_str()).collect();
        prop_assert_eq!(seen.len(), points.len());
        for lp in &points {
            prop_assert!(seen.contains(lp.label.as_str()));
        }
    }

    #[test]
    fn runs_are_deterministic(points in grid_points(40), min_pts in 1usize..5, epsilon in 0.5f64..6.0) {
        let first = run(&points, min_pts, epsilon).unwrap();
        let second = run(&points, min_pts, epsilon).unwrap();
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );

        let eager = OpticsEngine::new(OpticsConfig::new(min_pts, epsilon).with_precompute(true))
            .unwrap()
            .run(&points)
            .unwrap();
        prop_assert_eq!(first, eager);
    }

    #[test]
    fn core_distances_match_brute_force(points in grid_points(30), min_pts in 1usize..5, epsilon in 0.5f64..6.0) {
        let ordering = run(&points, min_pts, epsilon).unwrap();
        for entry in &ordering {
            let p = points.iter().position(|lp| lp.label == entry.label).unwrap();
            prop_assert_eq!(entry.core_distance, brute_core(&points, p, min_pts, epsilon));
        }
    }

    /// A point's reachability is the smallest `max(core(p), d(p, q))` over
    /// the core points p within epsilon that were processed before it.
    #[test]
    fn reachability_is_min_over_earlier_core_points(points in grid_points(30), min_pts in 1usize..5, epsilon in 0.5f64..6.0) {
        let ordering = run(&points, min_pts, epsilon).unwrap();
        let index_of = |label: &optics_ordering::Label| {
            points.iter().position(|lp| &lp.label == label).unwrap()
        };

        for (i, entry) in ordering.iter().enumerate() {
            let q = index_of(&entry.label);
            let expected = ordering
                .iter()
                .take(i)
                .filter_map(|earlier| {
                    let core = earlier.core_distance?;
                    let p = index_of(&earlier.label);
                    let d = Euclidean.distance(&points[p].point, &points[q].point);
                    (d <= epsilon).then_some(core.max(d))
                })
                .min_by(f64::total_cmp);
            prop_assert_eq!(entry.reachability, expected, "label {}", entry.label);
        }
    }

    #[test]
    fn matrix_is_symmetric_and_computed_once(coords in prop::collection::vec((-50.0f64..50.0, -50.0f64..50.0), 0..25)) {
        let points: Vec<Point> = coords.into_iter().map(Point::from).collect();
        let n = points.len();
        let matrix = DistanceMatrix::lazy(points, Arc::new(Euclidean));

        for a in 0..n {
            for b in 0..n {
                let ab = matrix.distance(a, b);
                prop_assert_eq!(ab, matrix.distance(b, a));
                if a == b {
                    prop_assert_eq!(ab, f64::INFINITY);
                }
            }
        }
        prop_assert_eq!(matrix.computed_pairs(), n * n.saturating_sub(1) / 2);
    }

    /// Pop order equals a stable sort by (reachability, rank) of the final keys,
    /// whatever the order of inserts and decreases.
    #[test]
    fn seed_queue_pops_in_key_order(updates in prop::collection::vec((0usize..12, 0u32..20), 1..60)) {
        let mut queue = SeedQueue::new();
        let mut latest = std::collections::HashMap::new();
        for (index, key) in updates {
            let seed = Seed::new(index, key as f64, index as u32);
            queue.insert_or_update(seed);
            latest.insert(index, seed);
        }
        prop_assert_eq!(queue.len(), latest.len());

        let mut expected: Vec<Seed> = latest.into_values().collect();
        expected.sort_by(|a, b| a.reachability.total_cmp(&b.reachability).then(a.rank.cmp(&b.rank)));

        let popped: Vec<Seed> = std::iter::from_fn(|| queue.pop()).collect();
        prop_assert_eq!(popped, expected);
    }
}

#[test]
fn isolated_point_stays_undefined() {
    let points = vec![
        LabeledPoint::at("A", 0.0, 0.0),
        LabeledPoint::at("B", 0.0, 1.0),
        LabeledPoint::at("C", 0.0, 2.0),
        LabeledPoint::at("D", 10.0, 10.0),
    ];
    let ordering = run(&points, 2, 5.0).unwrap();
    let d = ordering.get(ordering.len() - 1).unwrap();
    assert_eq!(d.label.as_str(), "D");
    assert_eq!(d.core_distance, None);
    assert_eq!(d.reachability, None);
}

#[test]
fn reference_dataset_orders_through_public_api() {
    use optics_ordering::adapters::fixture::{reference_points, REFERENCE_EPSILON, REFERENCE_MIN_PTS};

    let ordering = run(&reference_points(), REFERENCE_MIN_PTS, REFERENCE_EPSILON).unwrap();
    let labels: Vec<&str> = ordering.labels().map(|l| l.as_str()).collect();
    assert_eq!(labels, ["A", "B", "C", "D", "G", "J", "I", "K", "E", "F", "H"]);

    let first = ordering.get(0).unwrap();
    assert_eq!(first.reachability, None);
    assert!((first.core_distance.unwrap() - 93.6680087056157).abs() < 1e-9);

    let last = ordering.get(10).unwrap();
    assert!((last.reachability.unwrap() - 84.54225235679553).abs() < 1e-9);
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod common;

use common::*;
use geo::Geometry;
use relate_lite_topology::{
    prepare, relate, relate_predicate, IMPredicate, RelateMatrixPredicate, RelatePredicate,
    TopologyPredicate, TopologyPredicateTracer,
};

const STANDARD: [RelatePredicate; 10] = [
    RelatePredicate::Intersects,
    RelatePredicate::Disjoint,
    RelatePredicate::Contains,
    RelatePredicate::Within,
    RelatePredicate::Covers,
    RelatePredicate::CoveredBy,
    RelatePredicate::Crosses,
    RelatePredicate::EqualsTopo,
    RelatePredicate::Overlaps,
    RelatePredicate::Touches,
];

/// Checks that a prepared A gives the same answers as one-shot evaluation.
fn check_prepared(a: &str, b: &str) {
    let (ga, gb) = (read(a), read(b));
    let prepared = prepare(&ga);
    assert!(prepared.is_prepared());

    for predicate in STANDARD {
        assert_eq!(
            prepared.evaluate(&gb, &predicate),
            relate_predicate(&ga, &gb, &predicate),
            "prepared {}({a}, {b})",
            predicate.name()
        );
    }
    assert_eq!(prepared.evaluate_matrix(&gb), relate(&ga, &gb));
}

#[test]
fn prepared_overlapping_squares() {
    check_prepared(
        "POLYGON ((0 0, 1 0, 1 1, 0 1, 0 0))",
        "POLYGON ((0.5 0.5, 1.5 0.5, 1.5 1.5, 0.5 1.5, 0.5 0.5))",
    );
}

#[test]
fn prepared_point_and_polygon() {
    let a = "POINT (5 5)";
    let b = "POLYGON ((1 9, 9 9, 9 1, 1 1, 1 9))";
    check_prepared(a, b);
    check_prepared(b, a);

    let pattern = "T*****FF*";
    check_matches(a, b, pattern, false);
    check_matches(b, a, "T*F**F***", false);
}

#[test]
fn prepared_line_against_many_targets() {
    let a = "LINESTRING (0 0, 10 10, 20 0)";
    for b in [
        "POINT (5 5)",
        "POINT (0 0)",
        "MULTIPOINT ((5 5), (30 30))",
        "LINESTRING (0 10, 10 0)",
        "LINESTRING (10 10, 20 0)",
        "POLYGON ((-1 -1, 21 -1, 21 11, -1 11, -1 -1))",
        "POLYGON ((2 0, 8 0, 8 4, 2 4, 2 0))",
        "GEOMETRYCOLLECTION (POINT (10 10), LINESTRING (12 8, 15 5))",
        "LINESTRING EMPTY",
    ] {
        check_prepared(a, b);
    }
}

#[test]
fn prepared_evaluator_is_reusable() {
    let square = read("POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0))");
    let prepared = prepare(&square);
    let inside = read("POINT (5 5)");
    let outside = read("POINT (50 50)");

    for _ in 0..3 {
        assert!(prepared.evaluate(&inside, &RelatePredicate::Contains));
        assert!(!prepared.evaluate(&outside, &RelatePredicate::Intersects));
    }
}

#[test]
fn evaluate_all_matches_single_evaluation() {
    let square = read("POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0))");
    let targets: Vec<Geometry<f64>> = (0..40)
        .map(|i| {
            let x = f64::from(i) * 0.5 - 5.0;
            read(&format!("LINESTRING ({x} 2, {} 8)", x + 3.0))
        })
        .collect();

    let prepared = prepare(&square);
    for predicate in [
        RelatePredicate::Intersects,
        RelatePredicate::Contains,
        RelatePredicate::Touches,
        RelatePredicate::Crosses,
    ] {
        let batch = prepared.evaluate_all(&targets, &predicate);
        assert_eq!(batch.len(), targets.len());
        for (target, value) in targets.iter().zip(&batch) {
            assert_eq!(*value, relate_predicate(&square, target, &predicate));
        }
    }
}

#[test]
fn invalid_pattern_is_rejected() {
    let a = read("POINT (0 0)");
    let prepared = prepare(&a);
    assert!(prepared.evaluate_pattern(&a, "T*F**F**").is_err());
    assert!(prepared.evaluate_pattern(&a, "T*F**FX**").is_err());
    assert!(prepared.evaluate_pattern(&a, "0FFFFFFF2").unwrap());
}

#[test]
fn traced_predicate_gives_same_value() {
    let a = read("POLYGON ((1 9, 9 9, 9 1, 1 1, 1 9))");
    let b = read("POLYGON ((2 8, 8 8, 8 2, 2 2, 2 8))");
    let prepared = prepare(&a);

    let mut traced = TopologyPredicateTracer::new(IMPredicate::contains());
    assert!(prepared.evaluate_with(&b, &mut traced));
    assert!(traced.is_known());
    assert!(traced.inner().value());
}

#[test]
fn matrix_predicate_through_evaluate_with() {
    let a = read("POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0))");
    let b = read("LINESTRING (5 5, 15 5)");
    let prepared = prepare(&a);

    let mut predicate = RelateMatrixPredicate::new();
    prepared.evaluate_with(&b, &mut predicate);
    assert_eq!(predicate.into_matrix().to_string(), "1020F1102");
}

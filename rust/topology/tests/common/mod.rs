// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared helpers for the relate integration tests.
//!
//! Every check runs both the one-shot evaluator and a prepared evaluator,
//! so the two code paths are held to the same answers.

#![allow(dead_code)]

use geo::Geometry;
use relate_lite_topology::{prepare, relate, relate_pattern, relate_predicate, RelatePredicate};
use wkt::TryFromWkt;

pub fn read(wkt: &str) -> Geometry<f64> {
    Geometry::<f64>::try_from_wkt_str(wkt).unwrap_or_else(|e| panic!("bad WKT {wkt}: {e}"))
}

/// Checks the full matrix of `a` against `b`, and of `b` against `a`.
pub fn check_relate(a: &str, b: &str, expected: &str) {
    let (ga, gb) = (read(a), read(b));

    let im = relate(&ga, &gb);
    assert_eq!(im.to_string(), expected, "relate({a}, {b})");

    let prepared = prepare(&ga).evaluate_matrix(&gb);
    assert_eq!(prepared.to_string(), expected, "prepared relate({a}, {b})");

    let reversed = relate(&gb, &ga);
    assert_eq!(reversed, im.transpose(), "relate({b}, {a}) is not the transpose");
}

pub fn check_predicate(predicate: RelatePredicate, a: &str, b: &str, expected: bool) {
    let (ga, gb) = (read(a), read(b));
    let name = predicate.name();

    assert_eq!(
        relate_predicate(&ga, &gb, &predicate),
        expected,
        "{name}({a}, {b})"
    );
    assert_eq!(
        prepare(&ga).evaluate(&gb, &predicate),
        expected,
        "prepared {name}({a}, {b})"
    );
}

pub fn check_matches(a: &str, b: &str, pattern: &str, expected: bool) {
    let (ga, gb) = (read(a), read(b));
    let actual = relate_pattern(&ga, &gb, pattern).expect("valid pattern");
    assert_eq!(actual, expected, "relate({a}, {b}) matches {pattern}");

    let prepared = prepare(&ga)
        .evaluate_pattern(&gb, pattern)
        .expect("valid pattern");
    assert_eq!(prepared, expected, "prepared relate({a}, {b}) matches {pattern}");

    // The full matrix must agree with the short-circuiting matcher.
    let full = relate(&ga, &gb).matches_str(pattern).expect("valid pattern");
    assert_eq!(full, expected, "matrix of ({a}, {b}) matches {pattern}");
}

pub fn check_intersects_disjoint(a: &str, b: &str, expected: bool) {
    check_predicate(RelatePredicate::Intersects, a, b, expected);
    check_predicate(RelatePredicate::Intersects, b, a, expected);
    check_predicate(RelatePredicate::Disjoint, a, b, !expected);
    check_predicate(RelatePredicate::Disjoint, b, a, !expected);
}

pub fn check_contains_within(a: &str, b: &str, expected: bool) {
    check_predicate(RelatePredicate::Contains, a, b, expected);
    check_predicate(RelatePredicate::Within, b, a, expected);
}

pub fn check_covers_covered_by(a: &str, b: &str, expected: bool) {
    check_predicate(RelatePredicate::Covers, a, b, expected);
    check_predicate(RelatePredicate::CoveredBy, b, a, expected);
}

pub fn check_crosses(a: &str, b: &str, expected: bool) {
    check_predicate(RelatePredicate::Crosses, a, b, expected);
    check_predicate(RelatePredicate::Crosses, b, a, expected);
}

pub fn check_overlaps(a: &str, b: &str, expected: bool) {
    check_predicate(RelatePredicate::Overlaps, a, b, expected);
    check_predicate(RelatePredicate::Overlaps, b, a, expected);
}

pub fn check_touches(a: &str, b: &str, expected: bool) {
    check_predicate(RelatePredicate::Touches, a, b, expected);
    check_predicate(RelatePredicate::Touches, b, a, expected);
}

pub fn check_equals(a: &str, b: &str, expected: bool) {
    check_predicate(RelatePredicate::EqualsTopo, a, b, expected);
    check_predicate(RelatePredicate::EqualsTopo, b, a, expected);
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Relate over mixed-dimension and overlapping geometry collections.

mod common;

use common::*;
use relate_lite_topology::patterns;

#[test]
fn empty_element_does_not_change_dimension() {
    let a = "LINESTRING (0 0, 1 1)";
    let b = "GEOMETRYCOLLECTION (POLYGON EMPTY, LINESTRING (0 0, 1 1))";
    check_covers_covered_by(a, b, true);
    check_equals(a, b, true);
}

#[test]
fn empty_polygon_beside_line() {
    let a = "LINESTRING (75 15, 55 43)";
    let b = "GEOMETRYCOLLECTION (POLYGON EMPTY, LINESTRING (75 15, 55 43))";
    check_covers_covered_by(a, b, true);
    check_equals(a, b, true);
}

#[test]
fn polygon_contains_line_and_point_on_boundary() {
    let a = "MULTIPOLYGON (((0 0, 3 0, 3 3, 0 3, 0 0)))";
    let b = "GEOMETRYCOLLECTION (LINESTRING (1 2, 1 1), POINT (0 0))";
    check_relate(a, b, "1020F1FF2");
    check_intersects_disjoint(a, b, true);
    check_contains_within(a, b, true);
    check_covers_covered_by(a, b, true);
    check_crosses(a, b, false);
    check_equals(a, b, false);
}

#[test]
fn polygon_contains_points_on_boundary_and_interior_line() {
    check_contains_within(
        "POLYGON ((1 0, 0 4, 2 2, 1 0))",
        "GEOMETRYCOLLECTION (POINT (2 2), POINT (1 0), LINESTRING (1 2, 1 1))",
        true,
    );
}

#[test]
fn point_and_line_touch_polygon() {
    let a = "GEOMETRYCOLLECTION (POINT (7 1), LINESTRING (6 5, 6 4))";
    let b = "POLYGON ((7 1, 1 3, 3 9, 7 1))";
    check_relate(a, b, "F01FF0212");
    check_intersects_disjoint(a, b, true);
    check_contains_within(a, b, false);
    check_crosses(a, b, false);
    check_touches(a, b, true);
    check_equals(a, b, false);
}

#[test]
fn point_on_line_endpoint_in_collection() {
    let a = "POINT (0 0)";
    let b = "GEOMETRYCOLLECTION (POINT (0 0), LINESTRING (0 0, 1 0))";
    check_relate(a, b, "F0FFFF102");
    check_intersects_disjoint(a, b, true);
    check_contains_within(a, b, false);
    check_crosses(a, b, false);
    check_touches(a, b, true);
    check_equals(a, b, false);
}

#[test]
fn collection_covers_point_at_line_endpoint() {
    let a = "POINT (0 0)";
    for b in [
        "GEOMETRYCOLLECTION (POINT (0 0), LINESTRING (0 0, 1 0))",
        "GEOMETRYCOLLECTION (LINESTRING (0 0, 1 0), POINT (0 0))",
    ] {
        check_contains_within(b, a, false);
        check_covers_covered_by(b, a, true);
    }
}

#[test]
fn point_disjoint_from_collection() {
    check_intersects_disjoint(
        "POINT (0 0)",
        "GEOMETRYCOLLECTION (POINT (1 1), LINESTRING (1 1, 2 2))",
        false,
    );
}

#[test]
fn point_on_boundary_is_not_contained_properly() {
    check_matches(
        "GEOMETRYCOLLECTION (LINESTRING (0 1, 0 0), POINT (0 0))",
        "POINT (0 0)",
        patterns::CONTAINS_PROPERLY,
        false,
    );
}

// ============================================================================
// Overlapping and adjacent polygons
// ============================================================================

#[test]
fn line_along_interior_edge_of_overlapping_polygons() {
    let a = "LINESTRING (3 7, 7 3)";
    let b = "GEOMETRYCOLLECTION (POLYGON ((1 9, 7 9, 7 3, 1 3, 1 9)), POLYGON ((9 1, 3 1, 3 7, 9 7, 9 1)))";
    check_relate(a, b, "1FF0FF212");
    check_contains_within(b, a, true);
}

#[test]
fn line_crosses_interior_edges_at_vertex() {
    let a = "LINESTRING (2 2, 8 8)";
    let b = "GEOMETRYCOLLECTION (POLYGON ((1 1, 1 7, 7 7, 7 1, 1 1)), POLYGON ((9 9, 9 3, 3 3, 3 9, 9 9)))";
    check_relate(a, b, "1FF0FF212");
    check_contains_within(b, a, true);
}

#[test]
fn line_crosses_interior_edges_properly() {
    let a = "LINESTRING (2 4, 6 8)";
    let b = "GEOMETRYCOLLECTION (POLYGON ((1 1, 1 7, 7 7, 7 1, 1 1)), POLYGON ((9 9, 9 3, 3 3, 3 9, 9 9)))";
    check_relate(a, b, "1FF0FF212");
    check_contains_within(b, a, true);
}

#[test]
fn overlapping_polygons_contain_polygon_touching_their_boundaries() {
    let a = "GEOMETRYCOLLECTION (POLYGON ((1 9, 6 9, 6 4, 1 4, 1 9)), POLYGON ((9 1, 4 1, 4 6, 9 6, 9 1)))";
    let b = "POLYGON ((2 6, 6 2, 8 4, 4 8, 2 6))";
    check_relate(a, b, "212F01FF2");
    check_contains_within(a, b, true);
}

#[test]
fn ring_on_boundaries_of_overlapping_polygons() {
    let a = "LINESTRING (1 6, 9 6, 9 1, 1 1, 1 6)";
    let b = "GEOMETRYCOLLECTION (POLYGON ((1 1, 1 6, 6 6, 6 1, 1 1)), POLYGON ((9 1, 4 1, 4 6, 9 6, 9 1)))";
    check_relate(a, b, "F1FFFF2F2");
    check_contains_within(a, b, false);
    check_contains_within(b, a, false);
    check_covers_covered_by(a, b, false);
    check_covers_covered_by(b, a, true);
}

#[test]
fn adjacent_polygons_contain_adjacent_polygons() {
    let a = "GEOMETRYCOLLECTION (POLYGON ((2 2, 2 5, 4 5, 4 2, 2 2)), POLYGON ((8 2, 4 3, 4 4, 8 5, 8 2)))";
    let b = "GEOMETRYCOLLECTION (POLYGON ((1 1, 1 6, 4 6, 4 1, 1 1)), POLYGON ((9 1, 4 1, 4 6, 9 6, 9 1)))";
    check_relate(a, b, "2FF1FF212");
    check_contains_within(b, a, true);
    check_covers_covered_by(b, a, true);
}

#[test]
fn nested_multipolygon_intersects_polygon() {
    let a = "POLYGON ((2 5, 3 5, 3 3, 2 3, 2 5))";
    let b = "GEOMETRYCOLLECTION (MULTIPOLYGON (((1 4, 4 4, 4 1, 1 1, 1 4)), ((5 4, 8 4, 8 1, 5 1, 5 4))))";
    check_relate(a, b, "212101212");
    check_intersects_disjoint(a, b, true);
    check_covers_covered_by(b, a, false);
}

#[test]
fn polygon_contains_one_nested_multipolygon_element() {
    let a = "POLYGON ((0 5, 4 5, 4 1, 0 1, 0 5))";
    let b = "GEOMETRYCOLLECTION (MULTIPOLYGON (((1 4, 3 4, 3 2, 1 2, 1 4)), ((6 4, 8 4, 8 2, 6 2, 6 4))))";
    check_relate(a, b, "212FF1212");
    check_intersects_disjoint(a, b, true);
    check_covers_covered_by(b, a, false);
}

const ADJACENT_POLYS: &str = "GEOMETRYCOLLECTION (POLYGON ((5 5, 2 9, 9 9, 9 5, 5 5)), POLYGON ((3 1, 5 5, 9 5, 9 1, 3 1)), POLYGON ((1 9, 2 9, 5 5, 3 1, 1 1, 1 9)))";

#[test]
fn adjacent_polygons_cover_polygon_across_shared_node() {
    let b = "POLYGON ((3 7, 7 7, 7 3, 3 3, 3 7))";
    check_relate(b, ADJACENT_POLYS, "2FF1FF212");
    check_relate(ADJACENT_POLYS, b, "212FF1FF2");
    check_intersects_disjoint(ADJACENT_POLYS, b, true);
    check_covers_covered_by(ADJACENT_POLYS, b, true);
}

#[test]
fn adjacent_polygons_cover_point_at_shared_node() {
    let b = "POINT (5 5)";
    check_relate(b, ADJACENT_POLYS, "0FFFFF212");
    check_relate(ADJACENT_POLYS, b, "0F2FF1FF2");
    check_intersects_disjoint(ADJACENT_POLYS, b, true);
    check_covers_covered_by(ADJACENT_POLYS, b, true);
}

#[test]
fn adjacent_polygons_cover_point_on_shared_edge() {
    let b = "POINT (7 5)";
    check_relate(b, ADJACENT_POLYS, "0FFFFF212");
    check_relate(ADJACENT_POLYS, b, "0F2FF1FF2");
    check_intersects_disjoint(ADJACENT_POLYS, b, true);
    check_covers_covered_by(ADJACENT_POLYS, b, true);
}

#[test]
fn adjacent_polygons_contain_polygon_touching_shared_node() {
    let b = "POLYGON ((5 5, 7 5, 7 3, 5 3, 5 5))";
    check_relate(ADJACENT_POLYS, b, "212FF1FF2");
    check_intersects_disjoint(ADJACENT_POLYS, b, true);
    check_covers_covered_by(ADJACENT_POLYS, b, true);
}

#[test]
fn adjacent_polygons_overlapped_by_polygon_with_hole() {
    let b = "POLYGON ((0 10, 10 10, 10 0, 0 0, 0 10), (2 8, 8 8, 8 2, 2 2, 2 8))";
    check_relate(ADJACENT_POLYS, b, "2121FF212");
    check_intersects_disjoint(ADJACENT_POLYS, b, true);
    check_covers_covered_by(ADJACENT_POLYS, b, false);
}

#[test]
fn adjacent_polygons_contain_line_from_shared_node() {
    let b = "LINESTRING (5 5, 7 7)";
    check_relate(ADJACENT_POLYS, b, "102FF1FF2");
    check_intersects_disjoint(ADJACENT_POLYS, b, true);
    check_covers_covered_by(ADJACENT_POLYS, b, true);
}

#[test]
fn adjacent_polygons_contain_line_and_point() {
    let b = "GEOMETRYCOLLECTION (POINT (5 5), LINESTRING (5 7, 7 7))";
    check_relate(ADJACENT_POLYS, b, "102FF1FF2");
    check_intersects_disjoint(ADJACENT_POLYS, b, true);
    check_covers_covered_by(ADJACENT_POLYS, b, true);
}

#[test]
fn collection_sharing_an_edge_is_adjacent_to_polygon() {
    let a = "GEOMETRYCOLLECTION (POLYGON ((1 4, 1 9, 6 9, 6 4, 1 4)), POLYGON ((6 4, 6 9, 9 9, 9 4, 6 4)))";
    let b = "POLYGON ((1 1, 1 4, 9 4, 9 1, 1 1))";
    check_matches(a, b, patterns::ADJACENT, true);
    check_relate(a, b, "FF2F11212");
    check_touches(a, b, true);
}

// ============================================================================
// Equality with redundant elements
// ============================================================================

#[test]
fn polygon_equals_collection_with_points_in_boundary() {
    check_equals(
        "POLYGON ((0 0, 0 10, 10 10, 10 0, 0 0))",
        "GEOMETRYCOLLECTION (POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0)), MULTIPOINT ((0 2), (0 5)))",
        true,
    );
}

#[test]
fn polygon_equals_collection_with_line_in_boundary() {
    check_equals(
        "POLYGON ((0 0, 0 10, 10 10, 10 0, 0 0))",
        "GEOMETRYCOLLECTION (POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0)), LINESTRING (0 2, 0 5))",
        true,
    );
}

#[test]
fn polygon_equals_collection_with_line_in_boundary_and_interior() {
    check_equals(
        "POLYGON ((0 0, 0 10, 10 10, 10 0, 0 0))",
        "GEOMETRYCOLLECTION (POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0)), LINESTRING (0 2, 0 5, 5 5))",
        true,
    );
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Angular relationships of edges incident on a node.
//!
//! Angles are measured counter-clockwise from the positive x-axis. Within a
//! quadrant, edges are ordered with the robust orientation predicate, so
//! the ordering is exact for any finite input.

use std::cmp::Ordering;

use geo::algorithm::kernels::{Kernel, Orientation, RobustKernel};
use geo::Coord;

/// Robust orientation of `r` relative to the directed line `p -> q`.
#[inline]
pub fn orientation(p: Coord<f64>, q: Coord<f64>, r: Coord<f64>) -> Orientation {
    RobustKernel::orient2d(p, q, r)
}

/// Quadrant (0 = NE, 1 = NW, 2 = SW, 3 = SE) of the vector `origin -> p`.
///
/// Axis directions belong to the quadrant counter-clockwise after them,
/// except the negative y-axis which is in SE.
pub fn quadrant(origin: Coord<f64>, p: Coord<f64>) -> u8 {
    let dx = p.x - origin.x;
    let dy = p.y - origin.y;
    match (dx >= 0.0, dy >= 0.0) {
        (true, true) => 0,
        (false, true) => 1,
        (false, false) => 2,
        (true, false) => 3,
    }
}

/// Compares the angles of `origin -> p` and `origin -> q`.
///
/// Returns `Greater` if `p` lies at a greater CCW angle than `q`, `Equal`
/// if they are collinear in the same direction.
pub fn compare_angle(origin: Coord<f64>, p: Coord<f64>, q: Coord<f64>) -> Ordering {
    let quadrant_p = quadrant(origin, p);
    let quadrant_q = quadrant(origin, q);
    match quadrant_p.cmp(&quadrant_q) {
        Ordering::Equal => match orientation(origin, q, p) {
            Orientation::CounterClockwise => Ordering::Greater,
            Orientation::Clockwise => Ordering::Less,
            Orientation::Collinear => Ordering::Equal,
        },
        other => other,
    }
}

/// True if `origin -> p` lies at a strictly greater angle than `origin -> q`.
pub fn is_angle_greater(origin: Coord<f64>, p: Coord<f64>, q: Coord<f64>) -> bool {
    compare_angle(origin, p, q) == Ordering::Greater
}

/// Tests whether the edge pair `(a0, a1)` through `node` is crossed by the
/// edge pair `(b0, b1)`, i.e. `b0` and `b1` lie in different sectors
/// formed by `a0` and `a1`.
///
/// Collinear edges are never crossing.
pub fn is_crossing(
    node: Coord<f64>,
    a0: Coord<f64>,
    a1: Coord<f64>,
    b0: Coord<f64>,
    b1: Coord<f64>,
) -> bool {
    let (a_lo, a_hi) = if is_angle_greater(node, a0, a1) {
        (a1, a0)
    } else {
        (a0, a1)
    };
    let Some(side0) = compare_between(node, b0, a_lo, a_hi) else {
        return false;
    };
    let Some(side1) = compare_between(node, b1, a_lo, a_hi) else {
        return false;
    };
    side0 != side1
}

/// Which side of the angle range `(e0, e1)` the ray to `p` lies on:
/// `Some(true)` strictly inside, `Some(false)` outside, `None` collinear
/// with either edge.
fn compare_between(
    origin: Coord<f64>,
    p: Coord<f64>,
    e0: Coord<f64>,
    e1: Coord<f64>,
) -> Option<bool> {
    let comp0 = compare_angle(origin, p, e0);
    if comp0 == Ordering::Equal {
        return None;
    }
    let comp1 = compare_angle(origin, p, e1);
    if comp1 == Ordering::Equal {
        return None;
    }
    Some(comp0 == Ordering::Greater && comp1 == Ordering::Less)
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Segment/segment intersection.

use geo::algorithm::line_intersection::{line_intersection, LineIntersection};
use geo::{Coord, Line};
use smallvec::SmallVec;

/// Intersection of two segments: a single point, or the two endpoints of a
/// collinear overlap.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentIntersection {
    pub points: SmallVec<[Coord<f64>; 2]>,
    /// The single intersection point lies strictly inside both segments.
    pub is_proper: bool,
}

/// Intersects segment `a0 -> a1` with segment `b0 -> b1`.
pub fn segment_intersection(
    a0: Coord<f64>,
    a1: Coord<f64>,
    b0: Coord<f64>,
    b1: Coord<f64>,
) -> Option<SegmentIntersection> {
    let result = line_intersection(Line::new(a0, a1), Line::new(b0, b1))?;
    let mut points = SmallVec::new();
    let is_proper = match result {
        LineIntersection::SinglePoint {
            intersection,
            is_proper,
        } => {
            points.push(intersection);
            is_proper
        }
        LineIntersection::Collinear { intersection } => {
            points.push(intersection.start);
            if intersection.end != intersection.start {
                points.push(intersection.end);
            }
            false
        }
    };
    Some(SegmentIntersection { points, is_proper })
}

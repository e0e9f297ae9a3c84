// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planar primitives: robust orientation, angular ordering around a node,
//! point location and segment intersection.

pub mod intersection;
pub mod locate;
pub mod node_topology;

pub use intersection::{segment_intersection, SegmentIntersection};
pub use locate::{
    is_on_line, is_on_segment, locate_point_in_ring, IndexedPointInAreaLocator,
    PointOnGeometryLocator, RayCrossingCounter, SimplePointInAreaLocator,
};
pub use node_topology::{compare_angle, is_angle_greater, is_crossing, orientation, quadrant};

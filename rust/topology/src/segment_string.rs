// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lines and rings of an operand prepared for noding.

use geo::{Coord, LineString, Winding};
use relate_lite_core::Dimension;

use crate::node_section::NodeSection;
use crate::operand::Operand;

/// Copies a ring's coordinates, reversed if needed so that it runs CW
/// (`require_cw`) or CCW, with repeated points removed.
pub(crate) fn oriented_ring(ring: &LineString<f64>, require_cw: bool) -> Vec<Coord<f64>> {
    let mut pts = ring.0.clone();
    if require_cw == ring.is_ccw() {
        pts.reverse();
    }
    pts.dedup();
    pts
}

/// A line or polygon ring of one operand.
///
/// Rings are oriented shell-CW and hole-CCW, so the polygon interior is
/// always on the right.
#[derive(Debug, Clone)]
pub struct RelateSegmentString {
    pts: Vec<Coord<f64>>,
    operand: Operand,
    dim: Dimension,
    id: usize,
    ring_id: usize,
    polygonal: Option<usize>,
}

impl RelateSegmentString {
    /// A line element. Repeated points are removed.
    pub fn line(pts: &[Coord<f64>], operand: Operand, id: usize) -> Self {
        let mut pts = pts.to_vec();
        pts.dedup();
        Self {
            pts,
            operand,
            dim: Dimension::Line,
            id,
            ring_id: 0,
            polygonal: None,
        }
    }

    /// A polygon ring; `pts` must already be oriented and free of repeats.
    pub fn ring(
        pts: Vec<Coord<f64>>,
        operand: Operand,
        id: usize,
        ring_id: usize,
        polygonal: usize,
    ) -> Self {
        Self {
            pts,
            operand,
            dim: Dimension::Area,
            id,
            ring_id,
            polygonal: Some(polygonal),
        }
    }

    pub fn operand(&self) -> Operand {
        self.operand
    }

    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    pub fn coords(&self) -> &[Coord<f64>] {
        &self.pts
    }

    pub fn len(&self) -> usize {
        self.pts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    /// Number of segments.
    pub fn segment_count(&self) -> usize {
        self.pts.len().saturating_sub(1)
    }

    pub fn coord(&self, i: usize) -> Coord<f64> {
        self.pts[i]
    }

    pub fn is_closed(&self) -> bool {
        matches!((self.pts.first(), self.pts.last()), (Some(a), Some(b)) if a == b)
    }

    /// Decides whether segment `index` owns the intersection point `pt`.
    ///
    /// A segment owns its start vertex and its interior. Its end vertex is
    /// owned by the following segment, except for the final segment of an
    /// open line. This records each vertex intersection exactly once.
    pub fn is_containing_segment(&self, index: usize, pt: Coord<f64>) -> bool {
        if pt == self.pts[index] {
            return true;
        }
        if pt == self.pts[index + 1] {
            let is_final_segment = index == self.pts.len() - 2;
            return !self.is_closed() && is_final_segment;
        }
        true
    }

    /// Builds the node section for intersection point `pt` on segment `index`.
    pub fn create_node_section(&self, index: usize, pt: Coord<f64>) -> NodeSection {
        let is_node_at_vertex = pt == self.pts[index] || pt == self.pts[index + 1];
        let prev = self.prev_vertex(index, pt);
        let next = self.next_vertex(index, pt);
        NodeSection::new(
            self.operand,
            self.dim,
            self.id,
            self.ring_id,
            self.polygonal,
            is_node_at_vertex,
            prev,
            pt,
            next,
        )
    }

    fn prev_vertex(&self, index: usize, pt: Coord<f64>) -> Option<Coord<f64>> {
        let seg_start = self.pts[index];
        if seg_start != pt {
            return Some(seg_start);
        }
        if index > 0 {
            return Some(self.pts[index - 1]);
        }
        if self.is_closed() {
            return self.prev_in_ring(index);
        }
        None
    }

    fn next_vertex(&self, index: usize, pt: Coord<f64>) -> Option<Coord<f64>> {
        let seg_end = self.pts[index + 1];
        if seg_end != pt {
            return Some(seg_end);
        }
        let size = self.pts.len();
        if index < size - 2 {
            return Some(self.pts[index + 2]);
        }
        if self.is_closed() {
            return self.next_in_ring(index + 1);
        }
        None
    }

    fn prev_in_ring(&self, index: usize) -> Option<Coord<f64>> {
        let prev = if index == 0 {
            self.pts.len().checked_sub(2)?
        } else {
            index - 1
        };
        self.pts.get(prev).copied()
    }

    fn next_in_ring(&self, index: usize) -> Option<Coord<f64>> {
        let next = if index + 1 >= self.pts.len() { 1 } else { index + 1 };
        self.pts.get(next).copied()
    }
}

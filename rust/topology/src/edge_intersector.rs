// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Edge noding.
//!
//! Segments are indexed in an R-tree by envelope. Two modes are offered:
//!
//! - **self-noding**: every unordered pair of segments in the index is
//!   tested once, covering intersections within a geometry as well as
//!   between the geometries;
//! - **mutual**: segments of another set are tested only against the
//!   indexed ones. A prepared geometry keeps its index for reuse.
//!
//! Each intersection point found is turned into a pair of node sections
//! and handed to the [`TopologyComputer`], stopping as soon as the
//! predicate value is known.

use geo::{Coord, Rect};
use relate_lite_core::algorithm::segment_intersection;
use relate_lite_core::Envelope;
use rstar::{RTree, RTreeObject, AABB};

use crate::segment_string::RelateSegmentString;
use crate::topology_computer::TopologyComputer;

#[derive(Debug, Clone, Copy)]
struct SegmentEntry {
    string: usize,
    segment: usize,
    envelope: AABB<[f64; 2]>,
}

impl RTreeObject for SegmentEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

fn segment_aabb(p0: Coord<f64>, p1: Coord<f64>) -> AABB<[f64; 2]> {
    AABB::from_corners([p0.x, p0.y], [p1.x, p1.y])
}

/// R-tree over the segments of a set of segment strings.
#[derive(Debug)]
pub struct EdgeSegmentIndex {
    strings: Vec<RelateSegmentString>,
    tree: RTree<SegmentEntry>,
}

impl EdgeSegmentIndex {
    /// Indexes the segments of `strings` whose envelopes meet `env`
    /// (all segments if `None`).
    pub fn new(strings: Vec<RelateSegmentString>, env: Option<&Envelope>) -> Self {
        let mut entries = Vec::new();
        for (string, ss) in strings.iter().enumerate() {
            for (segment, seg) in ss.coords().windows(2).enumerate() {
                if let Some(env) = env {
                    if !env.intersects(&Envelope::new(Rect::new(seg[0], seg[1]))) {
                        continue;
                    }
                }
                entries.push(SegmentEntry {
                    string,
                    segment,
                    envelope: segment_aabb(seg[0], seg[1]),
                });
            }
        }
        Self {
            strings,
            tree: RTree::bulk_load(entries),
        }
    }

    pub fn segment_count(&self) -> usize {
        self.tree.size()
    }

    /// Tests every pair of indexed segments once.
    pub(crate) fn process_self(&self, intersector: &mut EdgeSegmentIntersector<'_, '_, '_>) {
        for query in self.tree.iter() {
            let candidates = self.tree.locate_in_envelope_intersecting(&query.envelope);
            for test in candidates {
                if (test.string, test.segment) <= (query.string, query.segment) {
                    continue;
                }
                intersector.process(
                    &self.strings[query.string],
                    query.segment,
                    &self.strings[test.string],
                    test.segment,
                );
                if intersector.is_done() {
                    return;
                }
            }
        }
    }

    /// Tests the segments of `others` against the indexed segments.
    pub(crate) fn process_mutual(
        &self,
        others: &[RelateSegmentString],
        intersector: &mut EdgeSegmentIntersector<'_, '_, '_>,
    ) {
        for other in others {
            for (segment, seg) in other.coords().windows(2).enumerate() {
                let aabb = segment_aabb(seg[0], seg[1]);
                for hit in self.tree.locate_in_envelope_intersecting(&aabb) {
                    intersector.process(&self.strings[hit.string], hit.segment, other, segment);
                    if intersector.is_done() {
                        return;
                    }
                }
            }
        }
    }
}

/// Turns segment intersections into node sections for the topology computer.
pub(crate) struct EdgeSegmentIntersector<'c, 't, 'a> {
    computer: &'c mut TopologyComputer<'t, 'a>,
}

impl<'c, 't, 'a> EdgeSegmentIntersector<'c, 't, 'a> {
    pub fn new(computer: &'c mut TopologyComputer<'t, 'a>) -> Self {
        Self { computer }
    }

    pub fn is_done(&self) -> bool {
        self.computer.is_result_known()
    }

    pub fn process(
        &mut self,
        ss0: &RelateSegmentString,
        i0: usize,
        ss1: &RelateSegmentString,
        i1: usize,
    ) {
        if std::ptr::eq(ss0, ss1) && i0 == i1 {
            return;
        }
        if ss0.operand().is_a() {
            self.add_intersections(ss0, i0, ss1, i1);
        } else {
            self.add_intersections(ss1, i1, ss0, i0);
        }
    }

    fn add_intersections(
        &mut self,
        ss_a: &RelateSegmentString,
        i_a: usize,
        ss_b: &RelateSegmentString,
        i_b: usize,
    ) {
        let Some(intersection) = segment_intersection(
            ss_a.coord(i_a),
            ss_a.coord(i_a + 1),
            ss_b.coord(i_b),
            ss_b.coord(i_b + 1),
        ) else {
            return;
        };
        for &pt in &intersection.points {
            // vertex intersections are recorded once, by the segment owning the vertex
            let owned = intersection.is_proper
                || (ss_a.is_containing_segment(i_a, pt) && ss_b.is_containing_segment(i_b, pt));
            if owned {
                let ns_a = ss_a.create_node_section(i_a, pt);
                let ns_b = ss_b.create_node_section(i_b, pt);
                self.computer.add_intersection(ns_a, ns_b);
            }
        }
    }
}

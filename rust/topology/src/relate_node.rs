// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Angular topology of the edges incident on a node.
//!
//! Edges are kept in CCW order of their direction from the node. Area
//! sections mark the wedge they enclose as interior; after all sections
//! are added, [`RelateNode::finish`] propagates side locations around the
//! node so every edge is fully labelled for both operands.

use std::cmp::Ordering;

use geo::Coord;
use relate_lite_core::algorithm::compare_angle;
use relate_lite_core::{Dimension, Location, Position};
use smallvec::SmallVec;

use crate::node_section::NodeSection;
use crate::operand::Operand;
use crate::relate_edge::RelateEdge;

#[derive(Debug, Clone)]
pub struct RelateNode {
    node: Coord<f64>,
    edges: SmallVec<[RelateEdge; 8]>,
}

impl RelateNode {
    pub fn new(node: Coord<f64>) -> Self {
        Self {
            node,
            edges: SmallVec::new(),
        }
    }

    pub fn coordinate(&self) -> Coord<f64> {
        self.node
    }

    /// Edges in CCW order.
    pub fn edges(&self) -> &[RelateEdge] {
        &self.edges
    }

    pub fn add_sections<'s, I>(&mut self, sections: I)
    where
        I: IntoIterator<Item = &'s NodeSection>,
    {
        for ns in sections {
            self.add_section(ns);
        }
    }

    pub fn add_section(&mut self, ns: &NodeSection) {
        let operand = ns.operand();
        match ns.dimension() {
            Dimension::Line => {
                self.add_edge(operand, ns.v0(), Dimension::Line, false);
                self.add_edge(operand, ns.v1(), Dimension::Line, false);
            }
            Dimension::Area => {
                // rings run with interior on the right: the entering edge
                // has interior on its left, the exiting edge on its right
                self.add_edge(operand, ns.v0(), Dimension::Area, false);
                self.add_edge(operand, ns.v1(), Dimension::Area, true);
                let (Some(index0), Some(index1)) = (self.index_of(ns.v0()), self.index_of(ns.v1()))
                else {
                    return;
                };
                self.update_edges_in_area(operand, index0, index1);
                self.update_if_area_prev(operand, index0);
                self.update_if_area_next(operand, index1);
            }
            Dimension::Point | Dimension::Empty => {}
        }
    }

    fn update_edges_in_area(&mut self, operand: Operand, from: usize, to: usize) {
        let mut index = self.next_index(from);
        while index != to {
            self.edges[index].set_area_interior(operand);
            index = self.next_index(index);
        }
    }

    fn update_if_area_prev(&mut self, operand: Operand, index: usize) {
        let prev = self.prev_index(index);
        if self.edges[prev].is_interior(operand, Position::Left) {
            self.edges[index].set_area_interior(operand);
        }
    }

    fn update_if_area_next(&mut self, operand: Operand, index: usize) {
        let next = self.next_index(index);
        if self.edges[next].is_interior(operand, Position::Right) {
            self.edges[index].set_area_interior(operand);
        }
    }

    /// Inserts or merges an edge towards `dir_pt`. Absent or zero-length
    /// directions are ignored.
    fn add_edge(&mut self, operand: Operand, dir_pt: Option<Coord<f64>>, dim: Dimension, is_forward: bool) {
        let Some(dir_pt) = dir_pt else {
            return;
        };
        if dir_pt == self.node {
            return;
        }
        let mut insert_at = self.edges.len();
        for (i, e) in self.edges.iter_mut().enumerate() {
            match compare_angle(self.node, e.dir_pt(), dir_pt) {
                Ordering::Equal => {
                    e.merge(operand, dim, is_forward);
                    return;
                }
                Ordering::Greater => {
                    insert_at = i;
                    break;
                }
                Ordering::Less => {}
            }
        }
        self.edges
            .insert(insert_at, RelateEdge::new(dir_pt, operand, dim, is_forward));
    }

    fn index_of(&self, dir_pt: Option<Coord<f64>>) -> Option<usize> {
        let dir_pt = dir_pt?;
        self.edges
            .iter()
            .position(|e| compare_angle(self.node, e.dir_pt(), dir_pt) == Ordering::Equal)
    }

    /// Completes the labelling of every edge.
    ///
    /// A node in the interior of an area of an operand has all its edges
    /// interior for that operand; otherwise known side locations are
    /// carried CCW into the unknown ones.
    pub fn finish(&mut self, is_area_interior_a: bool, is_area_interior_b: bool) {
        self.finish_operand(Operand::A, is_area_interior_a);
        self.finish_operand(Operand::B, is_area_interior_b);
    }

    fn finish_operand(&mut self, operand: Operand, is_area_interior: bool) {
        if is_area_interior {
            for e in self.edges.iter_mut() {
                e.set_area_interior(operand);
            }
            return;
        }
        let Some(start) = self.edges.iter().position(|e| e.is_known(operand)) else {
            return;
        };
        self.propagate_side_locations(operand, start);
    }

    fn propagate_side_locations(&mut self, operand: Operand, start: usize) {
        let mut curr = self.edges[start].location_or_exterior(operand, Position::Left);
        let mut index = self.next_index(start);
        while index != start {
            let e = &mut self.edges[index];
            e.set_unknown_locations(operand, curr);
            curr = e.location_or_exterior(operand, Position::Left);
            index = self.next_index(index);
        }
    }

    /// True if some edge has the exterior of `operand` on a side.
    pub fn has_exterior_edge(&self, operand: Operand) -> bool {
        self.edges.iter().any(|e| {
            e.location(operand, Position::Left) == Some(Location::Exterior)
                || e.location(operand, Position::Right) == Some(Location::Exterior)
        })
    }

    #[inline]
    fn next_index(&self, i: usize) -> usize {
        if i + 1 >= self.edges.len() {
            0
        } else {
            i + 1
        }
    }

    #[inline]
    fn prev_index(&self, i: usize) -> usize {
        if i == 0 {
            self.edges.len() - 1
        } else {
            i - 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::coord;

    fn node() -> Coord<f64> {
        coord! { x: 0.0, y: 0.0 }
    }

    fn area(operand: Operand, v0: (f64, f64), v1: (f64, f64)) -> NodeSection {
        NodeSection::new(
            operand,
            Dimension::Area,
            0,
            0,
            Some(0),
            true,
            Some(coord! { x: v0.0, y: v0.1 }),
            node(),
            Some(coord! { x: v1.0, y: v1.1 }),
        )
    }

    fn line(operand: Operand, v0: (f64, f64), v1: (f64, f64)) -> NodeSection {
        NodeSection::new(
            operand,
            Dimension::Line,
            0,
            0,
            None,
            true,
            Some(coord! { x: v0.0, y: v0.1 }),
            node(),
            Some(coord! { x: v1.0, y: v1.1 }),
        )
    }

    #[test]
    fn edges_are_sorted_ccw() {
        let mut n = RelateNode::new(node());
        n.add_section(&line(Operand::A, (0.0, 1.0), (1.0, 0.0)));
        n.add_section(&line(Operand::B, (-1.0, 0.0), (0.0, -1.0)));
        let dirs: Vec<Coord<f64>> = n.edges().iter().map(RelateEdge::dir_pt).collect();
        assert_eq!(
            dirs,
            vec![
                coord! { x: 1.0, y: 0.0 },
                coord! { x: 0.0, y: 1.0 },
                coord! { x: -1.0, y: 0.0 },
                coord! { x: 0.0, y: -1.0 },
            ]
        );
    }

    #[test]
    fn collinear_edges_merge() {
        let mut n = RelateNode::new(node());
        n.add_section(&line(Operand::A, (2.0, 0.0), (0.0, 2.0)));
        n.add_section(&line(Operand::B, (1.0, 0.0), (-1.0, 0.0)));
        assert_eq!(n.edges().len(), 3);
        assert!(n.edges()[0].is_known(Operand::A));
        assert!(n.edges()[0].is_known(Operand::B));
    }

    #[test]
    fn area_wedge_and_crossing_line() {
        // corner of a CW square of A: the ring arrives from the east and
        // leaves to the north, so the interior is the NE quadrant
        let mut n = RelateNode::new(node());
        n.add_section(&area(Operand::A, (1.0, 0.0), (0.0, 1.0)));
        // line of B through the corner from SW to NE
        n.add_section(&line(Operand::B, (-1.0, -1.0), (1.0, 1.0)));
        n.finish(false, false);

        let ne = n
            .edges()
            .iter()
            .find(|e| e.dir_pt() == coord! { x: 1.0, y: 1.0 })
            .unwrap();
        assert_eq!(ne.location(Operand::A, Position::On), Some(Location::Interior));
        let sw = n
            .edges()
            .iter()
            .find(|e| e.dir_pt() == coord! { x: -1.0, y: -1.0 })
            .unwrap();
        assert_eq!(sw.location(Operand::A, Position::On), Some(Location::Exterior));
        assert!(n.has_exterior_edge(Operand::A));
    }

    #[test]
    fn adjacent_wedges_fill_the_node() {
        let mut n = RelateNode::new(node());
        // upper half plane and lower half plane of the same operand
        n.add_section(&area(Operand::A, (-1.0, 0.0), (1.0, 0.0)));
        n.add_section(&area(Operand::A, (1.0, 0.0), (-1.0, 0.0)));
        assert!(!n.has_exterior_edge(Operand::A));
    }

    #[test]
    fn zero_length_direction_is_ignored() {
        let mut n = RelateNode::new(node());
        n.add_section(&line(Operand::A, (0.0, 0.0), (1.0, 0.0)));
        assert_eq!(n.edges().len(), 1);
    }
}

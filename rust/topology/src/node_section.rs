// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The local picture of one geometry element passing through a node.
//!
//! A section records the vertices immediately before (`v0`) and after
//! (`v1`) the node along a line or ring, plus enough identity to group
//! sections of the same polygon. Either vertex is absent at the end of an
//! open line.

use std::cmp::Ordering;

use geo::Coord;
use relate_lite_core::algorithm::compare_angle;
use relate_lite_core::{compare_coords, Dimension};

use crate::operand::Operand;

#[derive(Debug, Clone, PartialEq)]
pub struct NodeSection {
    operand: Operand,
    dim: Dimension,
    id: usize,
    ring_id: usize,
    polygonal: Option<usize>,
    is_node_at_vertex: bool,
    v0: Option<Coord<f64>>,
    node: Coord<f64>,
    v1: Option<Coord<f64>>,
}

impl NodeSection {
    /// Creates a section.
    ///
    /// `id` identifies the element within its geometry, `ring_id` is 0 for
    /// a shell (or a line) and `i + 1` for hole `i`. `polygonal` is the
    /// index of the polygonal element an area ring belongs to.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        operand: Operand,
        dim: Dimension,
        id: usize,
        ring_id: usize,
        polygonal: Option<usize>,
        is_node_at_vertex: bool,
        v0: Option<Coord<f64>>,
        node: Coord<f64>,
        v1: Option<Coord<f64>>,
    ) -> Self {
        Self {
            operand,
            dim,
            id,
            ring_id,
            polygonal,
            is_node_at_vertex,
            v0,
            node,
            v1,
        }
    }

    /// A shell section with the same identity as `self` but new vertices.
    pub(crate) fn with_shell_vertices(&self, v0: Coord<f64>, v1: Coord<f64>) -> Self {
        Self {
            ring_id: 0,
            v0: Some(v0),
            v1: Some(v1),
            ..self.clone()
        }
    }

    pub fn operand(&self) -> Operand {
        self.operand
    }

    pub fn is_a(&self) -> bool {
        self.operand.is_a()
    }

    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn ring_id(&self) -> usize {
        self.ring_id
    }

    pub fn polygonal(&self) -> Option<usize> {
        self.polygonal
    }

    pub fn node(&self) -> Coord<f64> {
        self.node
    }

    pub fn vertex(&self, i: usize) -> Option<Coord<f64>> {
        if i == 0 {
            self.v0
        } else {
            self.v1
        }
    }

    pub fn v0(&self) -> Option<Coord<f64>> {
        self.v0
    }

    pub fn v1(&self) -> Option<Coord<f64>> {
        self.v1
    }

    pub fn is_area(&self) -> bool {
        self.dim == Dimension::Area
    }

    pub fn is_shell(&self) -> bool {
        self.ring_id == 0
    }

    /// True if the node lies strictly inside a segment of the element.
    pub fn is_proper(&self) -> bool {
        !self.is_node_at_vertex
    }

    pub fn is_node_at_vertex(&self) -> bool {
        self.is_node_at_vertex
    }

    pub fn is_same_geometry(&self, other: &NodeSection) -> bool {
        self.operand == other.operand
    }

    pub fn is_same_polygon(&self, other: &NodeSection) -> bool {
        self.operand == other.operand && self.id == other.id
    }

    /// Total order by operand, dimension, element id, ring id, then vertices.
    pub fn compare_to(&self, other: &NodeSection) -> Ordering {
        self.operand
            .cmp(&other.operand)
            .then(self.dim.cmp(&other.dim))
            .then(self.id.cmp(&other.id))
            .then(self.ring_id.cmp(&other.ring_id))
            .then_with(|| compare_vertex(self.v0, other.v0))
            .then_with(|| compare_vertex(self.v1, other.v1))
    }

    /// Orders sections CCW around the node by the direction of `v0`,
    /// falling back to [`compare_to`](Self::compare_to) for coincident
    /// directions.
    pub fn compare_angular(&self, other: &NodeSection) -> Ordering {
        let by_angle = match (self.v0, other.v0) {
            (Some(p), Some(q)) => compare_angle(self.node, p, q),
            _ => compare_vertex(self.v0, other.v0),
        };
        by_angle.then_with(|| self.compare_to(other))
    }
}

/// Absent vertices sort first.
fn compare_vertex(a: Option<Coord<f64>>, b: Option<Coord<f64>>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(p), Some(q)) => compare_coords(p, q),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::coord;

    fn area(operand: Operand, id: usize, ring_id: usize, v0: (f64, f64), v1: (f64, f64)) -> NodeSection {
        NodeSection::new(
            operand,
            Dimension::Area,
            id,
            ring_id,
            Some(0),
            true,
            Some(coord! { x: v0.0, y: v0.1 }),
            coord! { x: 0.0, y: 0.0 },
            Some(coord! { x: v1.0, y: v1.1 }),
        )
    }

    #[test]
    fn ordering_groups_by_operand_then_element() {
        let a1 = area(Operand::A, 1, 0, (1.0, 0.0), (0.0, 1.0));
        let a2 = area(Operand::A, 2, 0, (1.0, 0.0), (0.0, 1.0));
        let b1 = area(Operand::B, 0, 0, (1.0, 0.0), (0.0, 1.0));
        let hole = area(Operand::A, 1, 1, (1.0, 0.0), (0.0, 1.0));
        assert_eq!(a1.compare_to(&a2), Ordering::Less);
        assert_eq!(a2.compare_to(&b1), Ordering::Less);
        assert_eq!(a1.compare_to(&hole), Ordering::Less);
        assert_eq!(a1.compare_to(&a1.clone()), Ordering::Equal);
        assert!(a1.is_same_polygon(&hole));
        assert!(!a1.is_same_polygon(&a2));
    }

    #[test]
    fn angular_order_uses_first_vertex() {
        let east = area(Operand::A, 1, 0, (1.0, 0.0), (0.0, -1.0));
        let north = area(Operand::A, 1, 1, (0.0, 1.0), (-1.0, 0.0));
        assert_eq!(east.compare_angular(&north), Ordering::Less);
        assert_eq!(north.compare_angular(&east), Ordering::Greater);
    }

    #[test]
    fn shell_copy_keeps_identity() {
        let hole = area(Operand::B, 3, 2, (1.0, 0.0), (0.0, 1.0));
        let shell = hole.with_shell_vertices(coord! { x: 2.0, y: 2.0 }, coord! { x: -2.0, y: 2.0 });
        assert!(shell.is_shell());
        assert!(shell.is_same_polygon(&hole));
        assert_eq!(shell.polygonal(), Some(0));
        assert_eq!(shell.v0(), Some(coord! { x: 2.0, y: 2.0 }));
    }
}

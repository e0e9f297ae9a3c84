// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! All sections meeting at one node, and the node topology built from them.

use geo::Coord;

use crate::node_section::NodeSection;
use crate::operand::Operand;
use crate::polygon_node_converter;
use crate::relate_node::RelateNode;

#[derive(Debug, Clone)]
pub struct NodeSections {
    node: Coord<f64>,
    sections: Vec<NodeSection>,
}

impl NodeSections {
    pub fn new(node: Coord<f64>) -> Self {
        Self {
            node,
            sections: Vec::new(),
        }
    }

    pub fn coordinate(&self) -> Coord<f64> {
        self.node
    }

    pub fn add(&mut self, ns: NodeSection) {
        self.sections.push(ns);
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// True if sections of both operands meet here.
    pub fn has_interaction_ab(&self) -> bool {
        let mut has_a = false;
        let mut has_b = false;
        for ns in &self.sections {
            match ns.operand() {
                Operand::A => has_a = true,
                Operand::B => has_b = true,
            }
            if has_a && has_b {
                return true;
            }
        }
        false
    }

    /// The polygonal element of `operand` containing this node, if any of
    /// its area sections pass through it.
    pub fn polygonal(&self, operand: Operand) -> Option<usize> {
        self.sections
            .iter()
            .find(|ns| ns.operand() == operand && ns.polygonal().is_some())
            .and_then(NodeSection::polygonal)
    }

    /// Builds the node topology.
    ///
    /// Sections are sorted so that runs belonging to the same polygon are
    /// contiguous; each such run is normalised to shell wedges first.
    pub fn create_node(mut self) -> RelateNode {
        self.sections.sort_by(NodeSection::compare_to);
        let mut node = RelateNode::new(self.node);
        let mut sections = self.sections.into_iter().peekable();
        while let Some(ns) = sections.next() {
            let has_run = ns.is_area()
                && sections
                    .peek()
                    .is_some_and(|next| ns.is_same_polygon(next));
            if !has_run {
                node.add_section(&ns);
                continue;
            }
            let head = ns.clone();
            let mut run = vec![ns];
            while let Some(next) = sections.next_if(|next| head.is_same_polygon(next)) {
                run.push(next);
            }
            let converted = polygon_node_converter::convert(run);
            node.add_sections(&converted);
        }
        node
    }
}

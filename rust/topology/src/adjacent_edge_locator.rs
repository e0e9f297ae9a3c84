// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Locates points lying on the boundaries of several polygons of one
//! geometry collection.
//!
//! Where polygons of a collection share an edge or a vertex, a point on
//! the shared linework is interior to their union if the polygons around
//! it leave no gap. This is decided by building the node topology of all
//! ring sections through the point and checking for an exterior side.

use geo::{Coord, Polygon};
use relate_lite_core::algorithm::is_on_segment;
use relate_lite_core::{Dimension, Location};

use crate::node_section::NodeSection;
use crate::node_sections::NodeSections;
use crate::operand::Operand;
use crate::segment_string::oriented_ring;

#[derive(Debug, Clone)]
pub struct AdjacentEdgeLocator {
    rings: Vec<Vec<Coord<f64>>>,
}

impl AdjacentEdgeLocator {
    pub fn new<'p, I>(polygons: I) -> Self
    where
        I: IntoIterator<Item = &'p Polygon<f64>>,
    {
        let mut rings = Vec::new();
        for polygon in polygons {
            if polygon.exterior().0.is_empty() {
                continue;
            }
            rings.push(oriented_ring(polygon.exterior(), true));
            for hole in polygon.interiors() {
                if !hole.0.is_empty() {
                    rings.push(oriented_ring(hole, false));
                }
            }
        }
        Self { rings }
    }

    /// Location of `p` in the union of the polygons: `Boundary` if any
    /// side of the linework through `p` is exterior, otherwise `Interior`.
    pub fn locate(&self, p: Coord<f64>) -> Location {
        let mut sections = NodeSections::new(p);
        for ring in &self.rings {
            add_sections(p, ring, &mut sections);
        }
        let node = sections.create_node();
        if node.has_exterior_edge(Operand::A) {
            Location::Boundary
        } else {
            Location::Interior
        }
    }
}

fn add_sections(p: Coord<f64>, ring: &[Coord<f64>], sections: &mut NodeSections) {
    let n = ring.len();
    for i in 0..n.saturating_sub(1) {
        let p0 = ring[i];
        let p_next = ring[i + 1];
        if p == p_next {
            // handled as the start of the next segment
            continue;
        }
        if p == p0 {
            let i_prev = if i > 0 { i - 1 } else { n - 2 };
            sections.add(section(ring[i_prev], p, p_next));
        } else if is_on_segment(p, p0, p_next) {
            sections.add(section(p0, p, p_next));
        }
    }
}

fn section(prev: Coord<f64>, p: Coord<f64>, next: Coord<f64>) -> NodeSection {
    NodeSection::new(
        Operand::A,
        Dimension::Area,
        1,
        0,
        None,
        false,
        Some(prev),
        p,
        Some(next),
    )
}

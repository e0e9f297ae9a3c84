// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Translates topological observations into DE-9IM updates.
//!
//! The computer owns the predicate for one evaluation. Points, line ends
//! and area vertices located against the other operand are turned into
//! `(locA, locB, dim)` updates directly; edge intersections are collected
//! into a node map and evaluated once noding is complete.

use geo::Coord;
use relate_lite_core::algorithm::is_crossing;
use relate_lite_core::{CoordKey, Dimension, Location, Position};
use rustc_hash::FxHashMap;

use crate::geometry::RelateGeometry;
use crate::node_section::NodeSection;
use crate::node_sections::NodeSections;
use crate::operand::Operand;
use crate::predicate::TopologyPredicate;
use crate::relate_node::RelateNode;

pub struct TopologyComputer<'t, 'a> {
    predicate: &'t mut dyn TopologyPredicate,
    geom_a: &'t RelateGeometry<'a>,
    geom_b: &'t RelateGeometry<'a>,
    node_map: FxHashMap<CoordKey, NodeSections>,
}

impl<'t, 'a> TopologyComputer<'t, 'a> {
    pub fn new(
        predicate: &'t mut dyn TopologyPredicate,
        geom_a: &'t RelateGeometry<'a>,
        geom_b: &'t RelateGeometry<'a>,
    ) -> Self {
        let mut computer = Self {
            predicate,
            geom_a,
            geom_b,
            node_map: FxHashMap::default(),
        };
        computer.init_exterior_dims();
        computer
    }

    /// Seeds the entries implied by the real dimensions alone.
    ///
    /// A lower-dimensional operand cannot cover a higher-dimensional one,
    /// so the exterior of the former always meets the interior of the latter.
    fn init_exterior_dims(&mut self) {
        use Dimension::*;
        use Location::*;
        let dim_a = self.geom_a.dimension_real();
        let dim_b = self.geom_b.dimension_real();
        match (dim_a, dim_b) {
            (Point, Line) => self.update_dim(Exterior, Interior, Line),
            (Line, Point) => self.update_dim(Interior, Exterior, Line),
            (Point, Area) => {
                self.update_dim(Exterior, Interior, Area);
                self.update_dim(Exterior, Boundary, Line);
            }
            (Area, Point) => {
                self.update_dim(Interior, Exterior, Area);
                self.update_dim(Boundary, Exterior, Line);
            }
            (Line, Area) => self.update_dim(Exterior, Interior, Area),
            (Area, Line) => self.update_dim(Interior, Exterior, Area),
            (Empty, Empty) => {}
            (Empty, _) => self.init_exterior_empty(Operand::B),
            (_, Empty) => self.init_exterior_empty(Operand::A),
            _ => {}
        }
    }

    fn init_exterior_empty(&mut self, non_empty: Operand) {
        use Location::*;
        match self.geometry(non_empty).dimension_real() {
            Dimension::Point => {
                self.update_dim_for(non_empty, Interior, Exterior, Dimension::Point);
            }
            Dimension::Line => {
                if self.geometry(non_empty).has_boundary() {
                    self.update_dim_for(non_empty, Boundary, Exterior, Dimension::Point);
                }
                self.update_dim_for(non_empty, Interior, Exterior, Dimension::Line);
            }
            Dimension::Area => {
                self.update_dim_for(non_empty, Boundary, Exterior, Dimension::Line);
                self.update_dim_for(non_empty, Interior, Exterior, Dimension::Area);
            }
            Dimension::Empty => {}
        }
    }

    fn geometry(&self, operand: Operand) -> &'t RelateGeometry<'a> {
        match operand {
            Operand::A => self.geom_a,
            Operand::B => self.geom_b,
        }
    }

    /// Nominal dimension of an operand.
    pub fn dimension(&self, operand: Operand) -> Dimension {
        self.geometry(operand).dimension()
    }

    pub fn is_area_area(&self) -> bool {
        self.dimension(Operand::A) == Dimension::Area && self.dimension(Operand::B) == Dimension::Area
    }

    /// True if edges must be noded as a single set, finding intersections
    /// within each operand as well as between them.
    ///
    /// Crossings of B's linework with itself only matter where B mixes
    /// areas and lines; everything else B meets is found by noding it
    /// against A.
    pub fn is_self_noding_required(&self) -> bool {
        self.predicate.require_self_noding()
            && (self.geom_a.is_self_noding_required() || self.geom_b.has_area_and_line())
    }

    pub fn is_exterior_check_required(&self, operand: Operand) -> bool {
        self.predicate.require_exterior_check(operand)
    }

    pub fn is_result_known(&self) -> bool {
        self.predicate.is_known()
    }

    pub fn result(&self) -> bool {
        self.predicate.value()
    }

    /// Lets the predicate settle any value not yet determined.
    pub fn finish(&mut self) {
        self.predicate.finish();
    }

    fn update_dim(&mut self, loc_a: Location, loc_b: Location, dim: Dimension) {
        self.predicate.update_dimension(loc_a, loc_b, dim);
    }

    /// Updates with locations given from the point of view of `own`.
    fn update_dim_for(&mut self, own: Operand, loc_own: Location, loc_other: Location, dim: Dimension) {
        let (loc_a, loc_b) = own.order(loc_own, loc_other);
        self.update_dim(loc_a, loc_b, dim);
    }

    // ========================================================================
    // Points
    // ========================================================================

    pub fn add_point_on_point_interior(&mut self) {
        self.update_dim(Location::Interior, Location::Interior, Dimension::Point);
    }

    pub fn add_point_on_point_exterior(&mut self, operand: Operand) {
        self.update_dim_for(operand, Location::Interior, Location::Exterior, Dimension::Point);
    }

    /// A point of `operand` located against the other geometry.
    pub fn add_point_on_geometry(
        &mut self,
        operand: Operand,
        loc_target: Location,
        dim_target: Dimension,
        _pt: Coord<f64>,
    ) {
        self.update_dim_for(operand, Location::Interior, loc_target, Dimension::Point);
        if self.geometry(operand.other()).is_empty() {
            return;
        }
        match dim_target {
            // a point outside a line may face either its interior or a
            // zero-length line, so nothing more can be inferred
            Dimension::Empty | Dimension::Point | Dimension::Line => {}
            Dimension::Area => {
                // the area extends beyond the point in every direction
                self.update_dim_for(operand, Location::Exterior, Location::Interior, Dimension::Area);
                self.update_dim_for(operand, Location::Exterior, Location::Boundary, Dimension::Line);
            }
        }
    }

    // ========================================================================
    // Line ends
    // ========================================================================

    pub fn add_line_end_on_geometry(
        &mut self,
        operand: Operand,
        loc_line_end: Location,
        loc_target: Location,
        dim_target: Dimension,
        _pt: Coord<f64>,
    ) {
        self.update_dim_for(operand, loc_line_end, loc_target, Dimension::Point);
        if self.geometry(operand.other()).is_empty() {
            return;
        }
        match dim_target {
            Dimension::Empty | Dimension::Point => {}
            Dimension::Line => {
                // some length of the line runs off into the target exterior
                if loc_target == Location::Exterior {
                    self.update_dim_for(operand, Location::Interior, Location::Exterior, Dimension::Line);
                }
            }
            Dimension::Area => {
                if loc_target != Location::Boundary {
                    self.update_dim_for(operand, Location::Interior, loc_target, Dimension::Line);
                    self.update_dim_for(operand, Location::Exterior, loc_target, Dimension::Area);
                }
            }
        }
    }

    // ========================================================================
    // Area vertices
    // ========================================================================

    pub fn add_area_vertex(
        &mut self,
        operand: Operand,
        loc_area: Location,
        loc_target: Location,
        dim_target: Dimension,
        pt: Coord<f64>,
    ) {
        use Location::*;
        if loc_target == Exterior {
            self.update_dim_for(operand, Interior, Exterior, Dimension::Area);
            // a vertex on the boundary sees both sides of the area
            if loc_area == Boundary {
                self.update_dim_for(operand, Boundary, Exterior, Dimension::Line);
                self.update_dim_for(operand, Exterior, Exterior, Dimension::Area);
            }
            return;
        }
        match dim_target {
            Dimension::Point => self.add_area_vertex_on_point(operand, loc_area, pt),
            Dimension::Line => self.add_area_vertex_on_line(operand, loc_area, loc_target, pt),
            Dimension::Area => self.add_area_vertex_on_area(operand, loc_area, loc_target, pt),
            Dimension::Empty => {}
        }
    }

    fn add_area_vertex_on_point(&mut self, operand: Operand, loc_area: Location, _pt: Coord<f64>) {
        use Location::*;
        self.update_dim_for(operand, loc_area, Interior, Dimension::Point);
        self.update_dim_for(operand, Interior, Exterior, Dimension::Area);
        if loc_area == Boundary {
            self.update_dim_for(operand, Boundary, Exterior, Dimension::Line);
            self.update_dim_for(operand, Exterior, Exterior, Dimension::Area);
        }
    }

    /// Only the point itself is known here; whether the line runs along
    /// the boundary or into the interior is settled by node evaluation.
    fn add_area_vertex_on_line(
        &mut self,
        operand: Operand,
        loc_area: Location,
        loc_target: Location,
        _pt: Coord<f64>,
    ) {
        self.update_dim_for(operand, loc_area, loc_target, Dimension::Point);
        if loc_area == Location::Interior {
            self.update_dim_for(operand, Location::Interior, Location::Exterior, Dimension::Area);
        }
    }

    fn add_area_vertex_on_area(
        &mut self,
        operand: Operand,
        loc_area: Location,
        loc_target: Location,
        _pt: Coord<f64>,
    ) {
        use Location::*;
        if loc_target == Boundary {
            if loc_area == Boundary {
                self.update_dim_for(operand, Boundary, Boundary, Dimension::Point);
            } else {
                self.update_dim_for(operand, Interior, Interior, Dimension::Area);
                self.update_dim_for(operand, Interior, Boundary, Dimension::Line);
                self.update_dim_for(operand, Interior, Exterior, Dimension::Area);
            }
        } else {
            self.update_dim_for(operand, Interior, loc_target, Dimension::Area);
            if loc_area == Boundary {
                self.update_dim_for(operand, Boundary, loc_target, Dimension::Line);
                self.update_dim_for(operand, Exterior, loc_target, Dimension::Area);
            }
        }
    }

    // ========================================================================
    // Edge intersections and nodes
    // ========================================================================

    /// Records an intersection between two segments (`a` belongs to A
    /// unless both come from the same operand).
    pub fn add_intersection(&mut self, a: NodeSection, b: NodeSection) {
        if !a.is_same_geometry(&b) {
            if a.is_area() && b.is_area() {
                self.update_area_area_cross(&a, &b);
            }
            self.update_node_location(&a, &b);
        }
        let sections = self
            .node_map
            .entry(CoordKey::from(a.node()))
            .or_insert_with(|| NodeSections::new(a.node()));
        sections.add(a);
        sections.add(b);
    }

    fn update_area_area_cross(&mut self, a: &NodeSection, b: &NodeSection) {
        let crosses = (a.is_proper() && b.is_proper())
            || match (a.v0(), a.v1(), b.v0(), b.v1()) {
                (Some(a0), Some(a1), Some(b0), Some(b1)) => is_crossing(a.node(), a0, a1, b0, b1),
                _ => false,
            };
        if crosses {
            self.update_dim(Location::Interior, Location::Interior, Dimension::Area);
        }
    }

    fn update_node_location(&mut self, a: &NodeSection, b: &NodeSection) {
        let pt = a.node();
        let loc_a = self.geom_a.locate_node(pt, a.polygonal());
        let loc_b = self.geom_b.locate_node(pt, b.polygonal());
        self.update_dim(loc_a, loc_b, Dimension::Point);
    }

    pub fn node_count(&self) -> usize {
        self.node_map.len()
    }

    /// Evaluates the full topology at every node where A and B meet.
    pub fn evaluate_nodes(&mut self) {
        let node_map = std::mem::take(&mut self.node_map);
        for sections in node_map.into_values() {
            if !sections.has_interaction_ab() {
                continue;
            }
            self.evaluate_node(sections);
            if self.is_result_known() {
                return;
            }
        }
    }

    fn evaluate_node(&mut self, sections: NodeSections) {
        let p = sections.coordinate();
        let parent_a = sections.polygonal(Operand::A);
        let parent_b = sections.polygonal(Operand::B);
        let mut node = sections.create_node();
        // the node may also lie inside an overlapping area of a collection
        let in_area_a = self.geom_a.is_node_in_area(p, parent_a);
        let in_area_b = self.geom_b.is_node_in_area(p, parent_b);
        node.finish(in_area_a, in_area_b);
        tracing::trace!(x = p.x, y = p.y, edges = node.edges().len(), "Evaluating node");
        self.evaluate_node_edges(&node);
    }

    fn evaluate_node_edges(&mut self, node: &RelateNode) {
        let is_area_area = self.is_area_area();
        for e in node.edges() {
            if is_area_area {
                self.update_dim(
                    e.location_or_exterior(Operand::A, Position::Left),
                    e.location_or_exterior(Operand::B, Position::Left),
                    Dimension::Area,
                );
                self.update_dim(
                    e.location_or_exterior(Operand::A, Position::Right),
                    e.location_or_exterior(Operand::B, Position::Right),
                    Dimension::Area,
                );
            }
            self.update_dim(
                e.location_or_exterior(Operand::A, Position::On),
                e.location_or_exterior(Operand::B, Position::On),
                Dimension::Line,
            );
        }
    }
}

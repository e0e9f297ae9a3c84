// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # RelateNG
//!
//! Evaluates DE-9IM relationships between two geometries, feeding the
//! topology found to a [`TopologyPredicate`] and stopping as soon as the
//! predicate's value is known.
//!
//! Evaluation proceeds from cheap to expensive:
//!
//! 1. both operands empty;
//! 2. predicate decided by the real dimensions or the envelopes;
//! 3. points of two point sets compared directly;
//! 4. points, line ends and area vertices of each operand located in the
//!    other;
//! 5. edges noded against each other and the resulting nodes evaluated.
//!
//! A [`RelateNg`] built with [`RelateNg::prepare`] caches the locator and
//! segment index of its geometry, and may be shared between threads.

use std::iter;

use geo::{Coord, Geometry};
use rayon::prelude::*;
use relate_lite_core::{
    BoundaryNodeRule, Dimension, Envelope, IntersectionMatrix, Location, MatrixPattern, Result,
};

use crate::edge_intersector::{EdgeSegmentIndex, EdgeSegmentIntersector};
use crate::geometry::RelateGeometry;
use crate::operand::Operand;
use crate::predicate::{RelateMatrixPredicate, RelatePredicate, TopologyPredicate};
use crate::topology_computer::TopologyComputer;

/// Relate evaluator with a fixed A operand.
#[derive(Debug)]
pub struct RelateNg<'a> {
    rule: BoundaryNodeRule,
    geom_a: RelateGeometry<'a>,
}

/// How the edges of A and B are intersected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodingStrategy {
    /// Both operands in one index, including crossings within each.
    SelfNoding,
    /// B against the cached index of a prepared A.
    PreparedIndex,
    /// B against an index of A built for this evaluation.
    Mutual,
}

/// A relate evaluator whose A operand is prepared for repeated use.
pub type PreparedRelate<'a> = RelateNg<'a>;

impl<'a> RelateNg<'a> {
    /// One-shot evaluator for `a`. Nothing is indexed ahead of time.
    pub fn new(a: &'a Geometry<f64>, rule: BoundaryNodeRule) -> Self {
        Self {
            rule,
            geom_a: RelateGeometry::new(a, false, rule),
        }
    }

    /// Prepared evaluator for `a` using the Mod-2 boundary rule.
    pub fn prepare(a: &'a Geometry<f64>) -> Self {
        Self::prepare_with_rule(a, BoundaryNodeRule::default())
    }

    pub fn prepare_with_rule(a: &'a Geometry<f64>, rule: BoundaryNodeRule) -> Self {
        Self {
            rule,
            geom_a: RelateGeometry::new(a, true, rule),
        }
    }

    pub fn geometry(&self) -> &'a Geometry<f64> {
        self.geom_a.geometry()
    }

    pub fn boundary_node_rule(&self) -> BoundaryNodeRule {
        self.rule
    }

    pub fn is_prepared(&self) -> bool {
        self.geom_a.is_prepared()
    }

    /// Evaluates a named predicate or pattern against `b`.
    pub fn evaluate(&self, b: &Geometry<f64>, predicate: &RelatePredicate) -> bool {
        let mut predicate = predicate.create();
        self.evaluate_with(b, predicate.as_mut())
    }

    /// Computes the full intersection matrix of A and `b`.
    pub fn evaluate_matrix(&self, b: &Geometry<f64>) -> IntersectionMatrix {
        let mut predicate = RelateMatrixPredicate::new();
        self.evaluate_with(b, &mut predicate);
        predicate.into_matrix()
    }

    /// Tests the relationship of A and `b` against a DE-9IM pattern.
    pub fn evaluate_pattern(&self, b: &Geometry<f64>, pattern: &str) -> Result<bool> {
        let pattern: MatrixPattern = pattern.parse()?;
        Ok(self.evaluate(b, &RelatePredicate::Matches(pattern)))
    }

    /// Evaluates `predicate` against every geometry in parallel.
    pub fn evaluate_all(&self, geoms: &[Geometry<f64>], predicate: &RelatePredicate) -> Vec<bool> {
        geoms.par_iter().map(|b| self.evaluate(b, predicate)).collect()
    }

    /// Evaluates a caller-supplied predicate against `b`.
    ///
    /// The predicate must be fresh; it is left finished or known.
    pub fn evaluate_with(&self, b: &Geometry<f64>, predicate: &mut dyn TopologyPredicate) -> bool {
        let geom_a = &self.geom_a;
        let geom_b = RelateGeometry::new(b, false, self.rule);

        if geom_a.is_empty() && geom_b.is_empty() {
            tracing::debug!(predicate = predicate.name(), "Both operands empty");
            predicate.init_dimensions(Dimension::Empty, Dimension::Empty);
            if !predicate.is_known() {
                predicate.init_envelopes(geom_a.envelope(), geom_b.envelope());
            }
            return finish_value(predicate);
        }

        let dim_a = geom_a.dimension_real();
        let dim_b = geom_b.dimension_real();
        predicate.init_dimensions(dim_a, dim_b);
        if predicate.is_known() {
            tracing::debug!(predicate = predicate.name(), %dim_a, %dim_b, "Decided by dimensions");
            return finish_value(predicate);
        }
        predicate.init_envelopes(geom_a.envelope(), geom_b.envelope());
        if predicate.is_known() {
            tracing::debug!(predicate = predicate.name(), "Decided by envelopes");
            return finish_value(predicate);
        }
        if !self.has_required_envelope_interaction(geom_b.envelope(), predicate) {
            tracing::debug!(predicate = predicate.name(), "Envelopes lack required interaction");
            return false;
        }

        let mut computer = TopologyComputer::new(predicate, geom_a, &geom_b);

        if dim_a == Dimension::Point && dim_b == Dimension::Point {
            compute_pp(geom_a, &geom_b, &mut computer);
            computer.finish();
            return computer.result();
        }

        // the prepared operand is indexed, so it is the better target
        compute_at_points(&geom_b, Operand::B, geom_a, &mut computer);
        if computer.is_result_known() {
            return computer.result();
        }
        compute_at_points(geom_a, Operand::A, &geom_b, &mut computer);
        if computer.is_result_known() {
            return computer.result();
        }

        if geom_a.has_edges() && geom_b.has_edges() {
            self.compute_at_edges(&geom_b, &mut computer);
        }

        computer.finish();
        computer.result()
    }

    fn has_required_envelope_interaction(
        &self,
        env_b: &Envelope,
        predicate: &dyn TopologyPredicate,
    ) -> bool {
        let env_a = self.geom_a.envelope();
        if predicate.require_covers(Operand::A) {
            env_a.covers(env_b)
        } else if predicate.require_covers(Operand::B) {
            env_b.covers(env_a)
        } else {
            !predicate.require_interaction() || env_a.intersects(env_b)
        }
    }

    fn noding_strategy(&self, computer: &TopologyComputer<'_, '_>) -> NodingStrategy {
        if computer.is_self_noding_required() {
            NodingStrategy::SelfNoding
        } else if self.geom_a.is_prepared() {
            NodingStrategy::PreparedIndex
        } else {
            NodingStrategy::Mutual
        }
    }

    fn compute_at_edges(&self, geom_b: &RelateGeometry<'_>, computer: &mut TopologyComputer<'_, '_>) {
        let env_int = self.geom_a.envelope().intersection(geom_b.envelope());
        if env_int.is_null() {
            return;
        }
        let edges_b = geom_b.extract_segment_strings(Operand::B, Some(&env_int));
        let strategy = self.noding_strategy(computer);
        {
            let mut intersector = EdgeSegmentIntersector::new(computer);
            match strategy {
                NodingStrategy::SelfNoding => {
                    let mut edges = self.geom_a.extract_segment_strings(Operand::A, Some(&env_int));
                    edges.extend(edges_b);
                    let index = EdgeSegmentIndex::new(edges, Some(&env_int));
                    tracing::debug!(segments = index.segment_count(), "Self-noding edges");
                    index.process_self(&mut intersector);
                }
                NodingStrategy::PreparedIndex => {
                    let index = self.geom_a.edge_index(Operand::A);
                    tracing::debug!(
                        segments = index.segment_count(),
                        "Noding edges against prepared index"
                    );
                    index.process_mutual(&edges_b, &mut intersector);
                }
                NodingStrategy::Mutual => {
                    let edges_a = self.geom_a.extract_segment_strings(Operand::A, Some(&env_int));
                    let index = EdgeSegmentIndex::new(edges_a, Some(&env_int));
                    tracing::debug!(segments = index.segment_count(), "Noding edges mutually");
                    index.process_mutual(&edges_b, &mut intersector);
                }
            }
        }
        if computer.is_result_known() {
            return;
        }
        tracing::debug!(nodes = computer.node_count(), "Evaluating nodes");
        computer.evaluate_nodes();
    }
}

fn finish_value(predicate: &mut dyn TopologyPredicate) -> bool {
    predicate.finish();
    predicate.value()
}

/// Point/point relate: only coincidence matters.
fn compute_pp(
    geom_a: &RelateGeometry<'_>,
    geom_b: &RelateGeometry<'_>,
    computer: &mut TopologyComputer<'_, '_>,
) {
    let pts_a = geom_a.unique_points();
    let mut num_b_in_a = 0;
    for pt in geom_b.unique_points() {
        if pts_a.contains(pt) {
            num_b_in_a += 1;
            computer.add_point_on_point_interior();
        } else {
            computer.add_point_on_point_exterior(Operand::B);
        }
        if computer.is_result_known() {
            return;
        }
    }
    if num_b_in_a < pts_a.len() {
        computer.add_point_on_point_exterior(Operand::A);
    }
}

fn compute_at_points(
    geom: &RelateGeometry<'_>,
    operand: Operand,
    target: &RelateGeometry<'_>,
    computer: &mut TopologyComputer<'_, '_>,
) {
    if compute_points(geom, operand, target, computer) {
        return;
    }
    // Line ends and vertices only need locating if the target has areas
    // (linework wholly inside an area is never noded) or the predicate
    // cares about the target exterior.
    let check_disjoint = target.has_dimension(Dimension::Area)
        || computer.is_exterior_check_required(operand);
    if !check_disjoint {
        return;
    }
    if compute_line_ends(geom, operand, target, computer) {
        return;
    }
    compute_area_vertices(geom, operand, target, computer);
}

fn compute_points(
    geom: &RelateGeometry<'_>,
    operand: Operand,
    target: &RelateGeometry<'_>,
    computer: &mut TopologyComputer<'_, '_>,
) -> bool {
    if !geom.has_dimension(Dimension::Point) {
        return false;
    }
    for pt in geom.effective_points() {
        let loc_dim = target.locate_with_dim(pt);
        let dim_target = loc_dim.dimension_or(computer.dimension(operand.other()));
        computer.add_point_on_geometry(operand, loc_dim.location(), dim_target, pt);
        if computer.is_result_known() {
            return true;
        }
    }
    false
}

fn compute_line_ends(
    geom: &RelateGeometry<'_>,
    operand: Operand,
    target: &RelateGeometry<'_>,
    computer: &mut TopologyComputer<'_, '_>,
) -> bool {
    if !geom.has_dimension(Dimension::Line) {
        return false;
    }
    let mut has_exterior_intersection = false;
    for line in geom.locator().lines() {
        let (Some(&e0), Some(&e1)) = (line.0.first(), line.0.last()) else {
            continue;
        };
        // once the target exterior is known to be hit, far lines add nothing
        if has_exterior_intersection && Envelope::of(&**line).disjoint(target.envelope()) {
            continue;
        }
        has_exterior_intersection |= compute_line_end(geom, operand, e0, target, computer);
        if computer.is_result_known() {
            return true;
        }
        if !line.is_closed() {
            has_exterior_intersection |= compute_line_end(geom, operand, e1, target, computer);
            if computer.is_result_known() {
                return true;
            }
        }
    }
    false
}

/// Returns true if the line end lies in the target exterior.
fn compute_line_end(
    geom: &RelateGeometry<'_>,
    operand: Operand,
    pt: Coord<f64>,
    target: &RelateGeometry<'_>,
    computer: &mut TopologyComputer<'_, '_>,
) -> bool {
    let loc_dim_end = geom.locator().locate_line_end_with_dim(pt);
    // ends covered by an area of the same collection are not line ends
    if loc_dim_end.dimension_or(computer.dimension(operand)) != Dimension::Line {
        return false;
    }
    let loc_dim_target = target.locate_with_dim(pt);
    let loc_target = loc_dim_target.location();
    let dim_target = loc_dim_target.dimension_or(computer.dimension(operand.other()));
    computer.add_line_end_on_geometry(operand, loc_dim_end.location(), loc_target, dim_target, pt);
    loc_target == Location::Exterior
}

fn compute_area_vertices(
    geom: &RelateGeometry<'_>,
    operand: Operand,
    target: &RelateGeometry<'_>,
    computer: &mut TopologyComputer<'_, '_>,
) -> bool {
    if !geom.has_dimension(Dimension::Area) {
        return false;
    }
    // point targets are handled from the other side
    if target.dimension() < Dimension::Line {
        return false;
    }
    let mut has_exterior_intersection = false;
    for polygon in geom.locator().polygonals().iter().flatten() {
        if has_exterior_intersection && Envelope::of(&**polygon).disjoint(target.envelope()) {
            continue;
        }
        for ring in iter::once(polygon.exterior()).chain(polygon.interiors()) {
            let Some(&pt) = ring.0.first() else {
                continue;
            };
            let loc_area = geom.locate_area_vertex(pt);
            let loc_dim_target = target.locate_with_dim(pt);
            let loc_target = loc_dim_target.location();
            let dim_target = loc_dim_target.dimension_or(computer.dimension(operand.other()));
            computer.add_area_vertex(operand, loc_area, loc_target, dim_target, pt);
            has_exterior_intersection |= loc_target == Location::Exterior;
            if computer.is_result_known() {
                return true;
            }
        }
    }
    false
}

// ============================================================================
// Convenience functions
// ============================================================================

/// Computes the DE-9IM matrix of `a` and `b` using the Mod-2 boundary rule.
pub fn relate(a: &Geometry<f64>, b: &Geometry<f64>) -> IntersectionMatrix {
    relate_with_rule(a, b, BoundaryNodeRule::default())
}

pub fn relate_with_rule(
    a: &Geometry<f64>,
    b: &Geometry<f64>,
    rule: BoundaryNodeRule,
) -> IntersectionMatrix {
    RelateNg::new(a, rule).evaluate_matrix(b)
}

/// Evaluates a named predicate or pattern for `a` and `b`.
pub fn relate_predicate(a: &Geometry<f64>, b: &Geometry<f64>, predicate: &RelatePredicate) -> bool {
    RelateNg::new(a, BoundaryNodeRule::default()).evaluate(b, predicate)
}

/// Tests the relationship of `a` and `b` against a DE-9IM pattern.
pub fn relate_pattern(a: &Geometry<f64>, b: &Geometry<f64>, pattern: &str) -> Result<bool> {
    RelateNg::new(a, BoundaryNodeRule::default()).evaluate_pattern(b, pattern)
}

/// Prepares `a` for repeated evaluation.
pub fn prepare(a: &Geometry<f64>) -> PreparedRelate<'_> {
    RelateNg::prepare(a)
}

pub fn prepare_with_rule(a: &Geometry<f64>, rule: BoundaryNodeRule) -> PreparedRelate<'_> {
    RelateNg::prepare_with_rule(a, rule)
}

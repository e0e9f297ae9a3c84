// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Predicates computed from a partially known intersection matrix.
//!
//! Matrix cells only ever grow, so each predicate checks after every
//! change whether the cells seen so far already fix its value.

use relate_lite_core::{
    Dimension, Envelope, IntersectionMatrix, Location, MatrixPattern, PatternSymbol,
};

use super::{PredicateValue, TopologyPredicate};
use crate::operand::Operand;

/// A fresh matrix. The exteriors of two bounded geometries always meet in
/// an area.
fn initial_matrix() -> IntersectionMatrix {
    let mut matrix = IntersectionMatrix::new();
    matrix.set_at_least(Location::Exterior, Location::Exterior, Dimension::Area);
    matrix
}

/// Points may be covered by zero-length lines, whose real dimension is
/// still a line in a collection.
fn dims_compatible_with_covers(dim_0: Dimension, dim_1: Dimension) -> bool {
    (dim_0 == Dimension::Point && dim_1 == Dimension::Line) || dim_0 >= dim_1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IMKind {
    Contains,
    Within,
    Covers,
    CoveredBy,
    Crosses,
    EqualsTopo,
    Overlaps,
    Touches,
}

/// The named predicates defined by DE-9IM matrix tests.
#[derive(Debug, Clone)]
pub struct IMPredicate {
    kind: IMKind,
    dim_a: Dimension,
    dim_b: Dimension,
    matrix: IntersectionMatrix,
    value: PredicateValue,
}

impl IMPredicate {
    fn new(kind: IMKind) -> Self {
        Self {
            kind,
            dim_a: Dimension::Empty,
            dim_b: Dimension::Empty,
            matrix: initial_matrix(),
            value: PredicateValue::default(),
        }
    }

    pub fn contains() -> Self {
        Self::new(IMKind::Contains)
    }

    pub fn within() -> Self {
        Self::new(IMKind::Within)
    }

    pub fn covers() -> Self {
        Self::new(IMKind::Covers)
    }

    pub fn covered_by() -> Self {
        Self::new(IMKind::CoveredBy)
    }

    pub fn crosses() -> Self {
        Self::new(IMKind::Crosses)
    }

    pub fn equals_topo() -> Self {
        Self::new(IMKind::EqualsTopo)
    }

    pub fn overlaps() -> Self {
        Self::new(IMKind::Overlaps)
    }

    pub fn touches() -> Self {
        Self::new(IMKind::Touches)
    }

    /// The cells computed so far.
    pub fn matrix(&self) -> &IntersectionMatrix {
        &self.matrix
    }

    fn is_intersects(&self, loc_a: Location, loc_b: Location) -> bool {
        self.matrix.get(loc_a, loc_b).is_true()
    }

    /// True if anything of the other operand lies outside `operand`.
    fn intersects_exterior_of(&self, operand: Operand) -> bool {
        use Location::*;
        match operand {
            Operand::A => self.is_intersects(Exterior, Interior) || self.is_intersects(Exterior, Boundary),
            Operand::B => self.is_intersects(Interior, Exterior) || self.is_intersects(Boundary, Exterior),
        }
    }

    fn is_determined(&self) -> bool {
        use Location::*;
        match self.kind {
            IMKind::Contains | IMKind::Covers => self.intersects_exterior_of(Operand::A),
            IMKind::Within | IMKind::CoveredBy => self.intersects_exterior_of(Operand::B),
            IMKind::Crosses => {
                if self.dim_a == Dimension::Line && self.dim_b == Dimension::Line {
                    // line/line crossings are points only
                    self.matrix.get(Interior, Interior) > Dimension::Point
                } else if self.dim_a < self.dim_b {
                    self.is_intersects(Interior, Interior) && self.is_intersects(Interior, Exterior)
                } else if self.dim_a > self.dim_b {
                    self.is_intersects(Interior, Interior) && self.is_intersects(Exterior, Interior)
                } else {
                    false
                }
            }
            IMKind::EqualsTopo => {
                self.intersects_exterior_of(Operand::A) || self.intersects_exterior_of(Operand::B)
            }
            IMKind::Overlaps => match self.dim_a {
                Dimension::Point | Dimension::Area => {
                    self.is_intersects(Interior, Interior)
                        && self.is_intersects(Interior, Exterior)
                        && self.is_intersects(Exterior, Interior)
                }
                Dimension::Line => {
                    self.matrix.get(Interior, Interior) == Dimension::Line
                        && self.is_intersects(Interior, Exterior)
                        && self.is_intersects(Exterior, Interior)
                }
                Dimension::Empty => false,
            },
            IMKind::Touches => self.is_intersects(Interior, Interior),
        }
    }

    fn value_im(&self) -> bool {
        let m = &self.matrix;
        match self.kind {
            IMKind::Contains => m.is_contains(),
            IMKind::Within => m.is_within(),
            IMKind::Covers => m.is_covers(),
            IMKind::CoveredBy => m.is_covered_by(),
            IMKind::Crosses => m.is_crosses(self.dim_a, self.dim_b),
            IMKind::EqualsTopo => m.is_equals(self.dim_a, self.dim_b),
            IMKind::Overlaps => m.is_overlaps(self.dim_a, self.dim_b),
            IMKind::Touches => m.is_touches(self.dim_a, self.dim_b),
        }
    }
}

impl TopologyPredicate for IMPredicate {
    fn name(&self) -> &'static str {
        match self.kind {
            IMKind::Contains => "contains",
            IMKind::Within => "within",
            IMKind::Covers => "covers",
            IMKind::CoveredBy => "covered_by",
            IMKind::Crosses => "crosses",
            IMKind::EqualsTopo => "equals_topo",
            IMKind::Overlaps => "overlaps",
            IMKind::Touches => "touches",
        }
    }

    fn require_interaction(&self) -> bool {
        self.kind != IMKind::EqualsTopo
    }

    fn require_covers(&self, operand: Operand) -> bool {
        match self.kind {
            IMKind::Contains | IMKind::Covers => operand == Operand::A,
            IMKind::Within | IMKind::CoveredBy => operand == Operand::B,
            _ => false,
        }
    }

    fn require_exterior_check(&self, operand: Operand) -> bool {
        // a covering operand never needs its own points tested against
        // the other's exterior
        match self.kind {
            IMKind::Contains | IMKind::Covers => operand == Operand::B,
            IMKind::Within | IMKind::CoveredBy => operand == Operand::A,
            _ => true,
        }
    }

    fn init_dimensions(&mut self, dim_a: Dimension, dim_b: Dimension) {
        use Dimension::*;
        self.dim_a = dim_a;
        self.dim_b = dim_b;
        let cond = match self.kind {
            IMKind::Contains | IMKind::Covers => dims_compatible_with_covers(dim_a, dim_b),
            IMKind::Within | IMKind::CoveredBy => dims_compatible_with_covers(dim_b, dim_a),
            IMKind::Crosses => !matches!((dim_a, dim_b), (Point, Point) | (Area, Area)),
            // empty geometries of any dimension are equal
            IMKind::EqualsTopo => true,
            IMKind::Overlaps => dim_a == dim_b,
            // points have no boundary to touch with
            IMKind::Touches => !(dim_a == Point && dim_b == Point),
        };
        self.value.require(cond);
    }

    fn init_envelopes(&mut self, env_a: &Envelope, env_b: &Envelope) {
        match self.kind {
            IMKind::Contains | IMKind::Covers => self.value.require(env_a.covers(env_b)),
            IMKind::Within | IMKind::CoveredBy => self.value.require(env_b.covers(env_a)),
            IMKind::EqualsTopo => {
                // all empty geometries are equal
                self.value.set_if(true, env_a.is_null() && env_b.is_null());
                self.value.require(env_a == env_b);
            }
            _ => {}
        }
    }

    fn update_dimension(&mut self, loc_a: Location, loc_b: Location, dim: Dimension) {
        if self.matrix.set_at_least(loc_a, loc_b, dim) && self.is_determined() {
            let value = self.value_im();
            self.value.set(value);
        }
    }

    fn finish(&mut self) {
        let value = self.value_im();
        self.value.set(value);
    }

    fn is_known(&self) -> bool {
        self.value.is_known()
    }

    fn value(&self) -> bool {
        self.value.get()
    }
}

/// Matches the computed matrix against a DE-9IM pattern.
#[derive(Debug, Clone)]
pub struct IMPatternMatcher {
    pattern: MatrixPattern,
    matrix: IntersectionMatrix,
    value: PredicateValue,
}

impl IMPatternMatcher {
    pub fn new(pattern: MatrixPattern) -> Self {
        Self {
            pattern,
            matrix: initial_matrix(),
            value: PredicateValue::default(),
        }
    }

    pub fn pattern(&self) -> &MatrixPattern {
        &self.pattern
    }

    /// False is certain once any cell exceeds an exact pattern entry.
    fn is_determined(&self) -> bool {
        Location::ALL.iter().any(|&a| {
            Location::ALL.iter().any(|&b| match self.pattern.get(a, b) {
                PatternSymbol::Exactly(dim) => self.matrix.get(a, b) > dim,
                PatternSymbol::DontCare | PatternSymbol::NonEmpty => false,
            })
        })
    }
}

impl TopologyPredicate for IMPatternMatcher {
    fn name(&self) -> &'static str {
        "matches"
    }

    fn require_interaction(&self) -> bool {
        self.pattern.requires_interaction()
    }

    fn init_envelopes(&mut self, env_a: &Envelope, env_b: &Envelope) {
        let requires_interaction = self.pattern.requires_interaction();
        self.value.set_if(false, requires_interaction && env_a.disjoint(env_b));
    }

    fn update_dimension(&mut self, loc_a: Location, loc_b: Location, dim: Dimension) {
        if self.matrix.set_at_least(loc_a, loc_b, dim) && self.is_determined() {
            let value = self.matrix.matches(&self.pattern);
            self.value.set(value);
        }
    }

    fn finish(&mut self) {
        let value = self.matrix.matches(&self.pattern);
        self.value.set(value);
    }

    fn is_known(&self) -> bool {
        self.value.is_known()
    }

    fn value(&self) -> bool {
        self.value.get()
    }
}

/// Computes the full intersection matrix. Never short-circuits.
#[derive(Debug, Clone)]
pub struct RelateMatrixPredicate {
    matrix: IntersectionMatrix,
    finished: bool,
}

impl Default for RelateMatrixPredicate {
    fn default() -> Self {
        Self::new()
    }
}

impl RelateMatrixPredicate {
    pub fn new() -> Self {
        Self {
            matrix: initial_matrix(),
            finished: false,
        }
    }

    pub fn matrix(&self) -> &IntersectionMatrix {
        &self.matrix
    }

    pub fn into_matrix(self) -> IntersectionMatrix {
        self.matrix
    }
}

impl TopologyPredicate for RelateMatrixPredicate {
    fn name(&self) -> &'static str {
        "relate"
    }

    fn require_interaction(&self) -> bool {
        false
    }

    fn update_dimension(&mut self, loc_a: Location, loc_b: Location, dim: Dimension) {
        self.matrix.set_at_least(loc_a, loc_b, dim);
    }

    fn finish(&mut self) {
        self.finished = true;
    }

    fn is_known(&self) -> bool {
        self.finished
    }

    /// The matrix is the result; the boolean value carries no meaning.
    fn value(&self) -> bool {
        false
    }
}

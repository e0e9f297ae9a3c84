// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Topology Predicates
//!
//! A predicate receives DE-9IM cell updates as topology is discovered and
//! decides as early as it can. Each evaluation uses a fresh predicate.
//!
//! The lifecycle is:
//!
//! 1. [`init_dimensions`](TopologyPredicate::init_dimensions) with the real
//!    dimensions of A and B;
//! 2. [`init_envelopes`](TopologyPredicate::init_envelopes) with their
//!    envelopes;
//! 3. any number of [`update_dimension`](TopologyPredicate::update_dimension)
//!    calls, stopping once [`is_known`](TopologyPredicate::is_known);
//! 4. [`finish`](TopologyPredicate::finish), after which the value is known.
//!
//! A known value never changes.

mod basic;
mod im;
mod tracer;

pub use basic::BasicPredicate;
pub use im::{IMPatternMatcher, IMPredicate, RelateMatrixPredicate};
pub use tracer::TopologyPredicateTracer;

use relate_lite_core::{Dimension, Envelope, Location, MatrixPattern, Result};

use crate::operand::Operand;

/// A boolean topological predicate evaluated incrementally.
pub trait TopologyPredicate {
    fn name(&self) -> &'static str;

    /// Whether intersections within each operand must be found too.
    fn require_self_noding(&self) -> bool {
        true
    }

    /// Whether the predicate is false when the envelopes are disjoint.
    fn require_interaction(&self) -> bool {
        true
    }

    /// Whether the envelope of `operand` must cover the other envelope.
    fn require_covers(&self, _operand: Operand) -> bool {
        false
    }

    /// Whether the points of `operand` must be tested against the exterior
    /// of the other operand.
    fn require_exterior_check(&self, _operand: Operand) -> bool {
        true
    }

    fn init_dimensions(&mut self, _dim_a: Dimension, _dim_b: Dimension) {}

    fn init_envelopes(&mut self, _env_a: &Envelope, _env_b: &Envelope) {}

    /// Reports that the `(loc_a, loc_b)` cell has at least dimension `dim`.
    fn update_dimension(&mut self, loc_a: Location, loc_b: Location, dim: Dimension);

    /// Called once all topology has been reported.
    fn finish(&mut self);

    fn is_known(&self) -> bool;

    /// The predicate value. Only meaningful once [`is_known`](Self::is_known).
    fn value(&self) -> bool;
}

impl<P: TopologyPredicate + ?Sized> TopologyPredicate for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn require_self_noding(&self) -> bool {
        (**self).require_self_noding()
    }

    fn require_interaction(&self) -> bool {
        (**self).require_interaction()
    }

    fn require_covers(&self, operand: Operand) -> bool {
        (**self).require_covers(operand)
    }

    fn require_exterior_check(&self, operand: Operand) -> bool {
        (**self).require_exterior_check(operand)
    }

    fn init_dimensions(&mut self, dim_a: Dimension, dim_b: Dimension) {
        (**self).init_dimensions(dim_a, dim_b)
    }

    fn init_envelopes(&mut self, env_a: &Envelope, env_b: &Envelope) {
        (**self).init_envelopes(env_a, env_b)
    }

    fn update_dimension(&mut self, loc_a: Location, loc_b: Location, dim: Dimension) {
        (**self).update_dimension(loc_a, loc_b, dim)
    }

    fn finish(&mut self) {
        (**self).finish()
    }

    fn is_known(&self) -> bool {
        (**self).is_known()
    }

    fn value(&self) -> bool {
        (**self).value()
    }
}

/// Three-valued predicate state: unknown, or a fixed boolean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct PredicateValue(Option<bool>);

impl PredicateValue {
    pub fn is_known(self) -> bool {
        self.0.is_some()
    }

    pub fn get(self) -> bool {
        self.0.unwrap_or(false)
    }

    /// Sets the value unless it is already known.
    pub fn set(&mut self, value: bool) {
        if self.0.is_none() {
            self.0 = Some(value);
        }
    }

    pub fn set_if(&mut self, value: bool, cond: bool) {
        if cond {
            self.set(value);
        }
    }

    /// Sets false unless `cond` holds.
    pub fn require(&mut self, cond: bool) {
        if !cond {
            self.set(false);
        }
    }
}

/// True if a location pair lies in both geometries.
pub(crate) fn is_intersection(loc_a: Location, loc_b: Location) -> bool {
    loc_a != Location::Exterior && loc_b != Location::Exterior
}

/// The named predicates and pattern matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelatePredicate {
    Intersects,
    Disjoint,
    Contains,
    Within,
    Covers,
    CoveredBy,
    Crosses,
    EqualsTopo,
    Overlaps,
    Touches,
    /// Matches the matrix against a DE-9IM pattern.
    Matches(MatrixPattern),
}

impl RelatePredicate {
    /// A pattern-matching predicate, validating the pattern.
    pub fn matches(pattern: &str) -> Result<Self> {
        Ok(RelatePredicate::Matches(pattern.parse()?))
    }

    pub fn name(&self) -> &'static str {
        match self {
            RelatePredicate::Intersects => "intersects",
            RelatePredicate::Disjoint => "disjoint",
            RelatePredicate::Contains => "contains",
            RelatePredicate::Within => "within",
            RelatePredicate::Covers => "covers",
            RelatePredicate::CoveredBy => "covered_by",
            RelatePredicate::Crosses => "crosses",
            RelatePredicate::EqualsTopo => "equals_topo",
            RelatePredicate::Overlaps => "overlaps",
            RelatePredicate::Touches => "touches",
            RelatePredicate::Matches(_) => "matches",
        }
    }

    /// Creates a fresh predicate for one evaluation.
    pub fn create(&self) -> Box<dyn TopologyPredicate> {
        match *self {
            RelatePredicate::Intersects => Box::new(BasicPredicate::intersects()),
            RelatePredicate::Disjoint => Box::new(BasicPredicate::disjoint()),
            RelatePredicate::Contains => Box::new(IMPredicate::contains()),
            RelatePredicate::Within => Box::new(IMPredicate::within()),
            RelatePredicate::Covers => Box::new(IMPredicate::covers()),
            RelatePredicate::CoveredBy => Box::new(IMPredicate::covered_by()),
            RelatePredicate::Crosses => Box::new(IMPredicate::crosses()),
            RelatePredicate::EqualsTopo => Box::new(IMPredicate::equals_topo()),
            RelatePredicate::Overlaps => Box::new(IMPredicate::overlaps()),
            RelatePredicate::Touches => Box::new(IMPredicate::touches()),
            RelatePredicate::Matches(pattern) => Box::new(IMPatternMatcher::new(pattern)),
        }
    }
}

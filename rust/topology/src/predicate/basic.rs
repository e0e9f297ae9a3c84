// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Predicates decided by the first intersecting location, without a matrix.

use relate_lite_core::{Dimension, Envelope, Location};

use super::{is_intersection, PredicateValue, TopologyPredicate};
use crate::operand::Operand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BasicKind {
    Intersects,
    Disjoint,
}

/// `intersects` and `disjoint`.
///
/// Neither needs self-noding or exterior checks: any point common to both
/// geometries is found by noding A against B or by locating points.
#[derive(Debug, Clone)]
pub struct BasicPredicate {
    kind: BasicKind,
    value: PredicateValue,
}

impl BasicPredicate {
    pub fn intersects() -> Self {
        Self {
            kind: BasicKind::Intersects,
            value: PredicateValue::default(),
        }
    }

    pub fn disjoint() -> Self {
        Self {
            kind: BasicKind::Disjoint,
            value: PredicateValue::default(),
        }
    }
}

impl TopologyPredicate for BasicPredicate {
    fn name(&self) -> &'static str {
        match self.kind {
            BasicKind::Intersects => "intersects",
            BasicKind::Disjoint => "disjoint",
        }
    }

    fn require_self_noding(&self) -> bool {
        false
    }

    fn require_interaction(&self) -> bool {
        self.kind == BasicKind::Intersects
    }

    fn require_exterior_check(&self, _operand: Operand) -> bool {
        false
    }

    fn init_envelopes(&mut self, env_a: &Envelope, env_b: &Envelope) {
        match self.kind {
            BasicKind::Intersects => self.value.require(env_a.intersects(env_b)),
            BasicKind::Disjoint => self.value.set_if(true, env_a.disjoint(env_b)),
        }
    }

    fn update_dimension(&mut self, loc_a: Location, loc_b: Location, _dim: Dimension) {
        let hit = is_intersection(loc_a, loc_b);
        match self.kind {
            BasicKind::Intersects => self.value.set_if(true, hit),
            BasicKind::Disjoint => self.value.set_if(false, hit),
        }
    }

    fn finish(&mut self) {
        // no intersecting location was reported
        self.value.set(self.kind == BasicKind::Disjoint);
    }

    fn is_known(&self) -> bool {
        self.value.is_known()
    }

    fn value(&self) -> bool {
        self.value.get()
    }
}

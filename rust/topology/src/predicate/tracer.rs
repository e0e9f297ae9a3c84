// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use relate_lite_core::{Dimension, Envelope, Location};

use super::TopologyPredicate;
use crate::operand::Operand;

/// Wraps a predicate and logs every call at `debug` level.
#[derive(Debug, Clone)]
pub struct TopologyPredicateTracer<P> {
    inner: P,
}

impl<P: TopologyPredicate> TopologyPredicateTracer<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn into_inner(self) -> P {
        self.inner
    }

    fn log_value(&self, stage: &str) {
        if self.inner.is_known() {
            tracing::debug!(
                predicate = self.inner.name(),
                stage,
                value = self.inner.value(),
                "Predicate value known"
            );
        }
    }
}

impl<P: TopologyPredicate> TopologyPredicate for TopologyPredicateTracer<P> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn require_self_noding(&self) -> bool {
        self.inner.require_self_noding()
    }

    fn require_interaction(&self) -> bool {
        self.inner.require_interaction()
    }

    fn require_covers(&self, operand: Operand) -> bool {
        self.inner.require_covers(operand)
    }

    fn require_exterior_check(&self, operand: Operand) -> bool {
        self.inner.require_exterior_check(operand)
    }

    fn init_dimensions(&mut self, dim_a: Dimension, dim_b: Dimension) {
        tracing::debug!(predicate = self.inner.name(), %dim_a, %dim_b, "Init dimensions");
        self.inner.init_dimensions(dim_a, dim_b);
        self.log_value("dimensions");
    }

    fn init_envelopes(&mut self, env_a: &Envelope, env_b: &Envelope) {
        tracing::debug!(predicate = self.inner.name(), ?env_a, ?env_b, "Init envelopes");
        self.inner.init_envelopes(env_a, env_b);
        self.log_value("envelopes");
    }

    fn update_dimension(&mut self, loc_a: Location, loc_b: Location, dim: Dimension) {
        tracing::debug!(
            predicate = self.inner.name(),
            %loc_a,
            %loc_b,
            %dim,
            "Update dimension"
        );
        let was_known = self.inner.is_known();
        self.inner.update_dimension(loc_a, loc_b, dim);
        if !was_known {
            self.log_value("update");
        }
    }

    fn finish(&mut self) {
        self.inner.finish();
        tracing::debug!(
            predicate = self.inner.name(),
            value = self.inner.value(),
            "Finish"
        );
    }

    fn is_known(&self) -> bool {
        self.inner.is_known()
    }

    fn value(&self) -> bool {
        self.inner.value()
    }
}

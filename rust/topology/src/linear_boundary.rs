// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Boundary of a set of lines under a [`BoundaryNodeRule`].

use geo::{Coord, LineString};
use relate_lite_core::{BoundaryNodeRule, CoordKey};
use rustc_hash::FxHashMap;

/// Tallies line endpoints and answers boundary membership.
#[derive(Debug, Clone)]
pub struct LinearBoundary {
    vertex_degree: FxHashMap<CoordKey, usize>,
    has_boundary: bool,
    rule: BoundaryNodeRule,
}

impl LinearBoundary {
    /// Builds the boundary of `lines`. Empty lines are ignored.
    pub fn new<'l, I>(lines: I, rule: BoundaryNodeRule) -> Self
    where
        I: IntoIterator<Item = &'l LineString<f64>>,
    {
        let mut vertex_degree: FxHashMap<CoordKey, usize> = FxHashMap::default();
        for line in lines {
            let (Some(first), Some(last)) = (line.0.first(), line.0.last()) else {
                continue;
            };
            *vertex_degree.entry(CoordKey::from(*first)).or_insert(0) += 1;
            *vertex_degree.entry(CoordKey::from(*last)).or_insert(0) += 1;
        }
        let has_boundary = vertex_degree
            .values()
            .any(|&degree| rule.is_in_boundary(degree));
        Self {
            vertex_degree,
            has_boundary,
            rule,
        }
    }

    pub fn has_boundary(&self) -> bool {
        self.has_boundary
    }

    /// True if `p` is an endpoint whose degree puts it in the boundary.
    pub fn is_boundary(&self, p: Coord<f64>) -> bool {
        self.vertex_degree
            .get(&CoordKey::from(p))
            .is_some_and(|&degree| self.rule.is_in_boundary(degree))
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Boundary node rules for linear geometries.
//!
//! A rule decides from the number of line endpoints incident on a vertex
//! whether that vertex belongs to the boundary of the linear geometry.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Rule deciding which line endpoints form the boundary of a linear geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundaryNodeRule {
    /// OGC SFS rule: endpoints incident on an odd number of lines.
    #[default]
    Mod2,
    /// Every endpoint.
    EndPoint,
    /// Endpoints incident on more than one line.
    MultivalentEndPoint,
    /// Endpoints incident on exactly one line.
    MonovalentEndPoint,
}

impl BoundaryNodeRule {
    /// The OGC Simple Features rule.
    pub const OGC_SFS: BoundaryNodeRule = BoundaryNodeRule::Mod2;

    /// Tests whether a vertex with `count` incident line endpoints is on the boundary.
    #[inline]
    pub fn is_in_boundary(self, count: usize) -> bool {
        match self {
            BoundaryNodeRule::Mod2 => count % 2 == 1,
            BoundaryNodeRule::EndPoint => count > 0,
            BoundaryNodeRule::MultivalentEndPoint => count > 1,
            BoundaryNodeRule::MonovalentEndPoint => count == 1,
        }
    }

    fn name(self) -> &'static str {
        match self {
            BoundaryNodeRule::Mod2 => "mod2",
            BoundaryNodeRule::EndPoint => "endpoint",
            BoundaryNodeRule::MultivalentEndPoint => "multivalent-endpoint",
            BoundaryNodeRule::MonovalentEndPoint => "monovalent-endpoint",
        }
    }
}

impl fmt::Display for BoundaryNodeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoundaryNodeRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "mod2" | "ogc-sfs" | "ogc" => Ok(BoundaryNodeRule::Mod2),
            "endpoint" | "end-point" => Ok(BoundaryNodeRule::EndPoint),
            "multivalent-endpoint" | "multivalent" => Ok(BoundaryNodeRule::MultivalentEndPoint),
            "monovalent-endpoint" | "monovalent" => Ok(BoundaryNodeRule::MonovalentEndPoint),
            _ => Err(Error::UnknownBoundaryNodeRule(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_counts() {
        let table = [
            (BoundaryNodeRule::Mod2, [false, true, false, true]),
            (BoundaryNodeRule::EndPoint, [false, true, true, true]),
            (BoundaryNodeRule::MultivalentEndPoint, [false, false, true, true]),
            (BoundaryNodeRule::MonovalentEndPoint, [false, true, false, false]),
        ];
        for (rule, expected) in table {
            for (count, want) in expected.iter().enumerate() {
                assert_eq!(rule.is_in_boundary(count), *want, "{rule} with {count}");
            }
        }
    }

    #[test]
    fn parse_names() {
        assert_eq!("OGC_SFS".parse(), Ok(BoundaryNodeRule::Mod2));
        assert_eq!("multivalent".parse(), Ok(BoundaryNodeRule::MultivalentEndPoint));
        for rule in [
            BoundaryNodeRule::Mod2,
            BoundaryNodeRule::EndPoint,
            BoundaryNodeRule::MultivalentEndPoint,
            BoundaryNodeRule::MonovalentEndPoint,
        ] {
            assert_eq!(rule.to_string().parse(), Ok(rule));
        }
        assert!("odd".parse::<BoundaryNodeRule>().is_err());
        assert_eq!(BoundaryNodeRule::default(), BoundaryNodeRule::OGC_SFS);
    }
}

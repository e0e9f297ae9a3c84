// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Topological locations, edge positions and dimensions.

use std::fmt;

/// Location of a point relative to a geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Location {
    Interior,
    Boundary,
    Exterior,
}

impl Location {
    /// All locations in matrix order.
    pub const ALL: [Location; 3] = [Location::Interior, Location::Boundary, Location::Exterior];

    /// Row/column index in an intersection matrix.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Location::Interior => 0,
            Location::Boundary => 1,
            Location::Exterior => 2,
        }
    }

    /// Single-letter symbol (`i`, `b`, `e`).
    pub const fn symbol(self) -> char {
        match self {
            Location::Interior => 'i',
            Location::Boundary => 'b',
            Location::Exterior => 'e',
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Side of a directed edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    On,
    Left,
    Right,
}

/// Topological dimension of a geometry or of an intersection.
///
/// `Empty` is the dimension of the empty set and renders as `F` in a
/// DE-9IM string. Variants are ordered `Empty < Point < Line < Area`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimension {
    #[default]
    Empty,
    Point,
    Line,
    Area,
}

impl Dimension {
    /// DE-9IM symbol (`F`, `0`, `1`, `2`).
    pub const fn symbol(self) -> char {
        match self {
            Dimension::Empty => 'F',
            Dimension::Point => '0',
            Dimension::Line => '1',
            Dimension::Area => '2',
        }
    }

    /// Parses a DE-9IM matrix symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'F' | 'f' => Some(Dimension::Empty),
            '0' => Some(Dimension::Point),
            '1' => Some(Dimension::Line),
            '2' => Some(Dimension::Area),
            _ => None,
        }
    }

    /// True for any non-empty dimension.
    #[inline]
    pub const fn is_true(self) -> bool {
        !matches!(self, Dimension::Empty)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_indices_follow_matrix_order() {
        let indices: Vec<usize> = Location::ALL.iter().map(|l| l.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn dimensions_are_ordered() {
        assert!(Dimension::Empty < Dimension::Point);
        assert!(Dimension::Point < Dimension::Line);
        assert!(Dimension::Line < Dimension::Area);
    }

    #[test]
    fn dimension_symbols() {
        for dim in [Dimension::Empty, Dimension::Point, Dimension::Line, Dimension::Area] {
            assert_eq!(Dimension::from_symbol(dim.symbol()), Some(dim));
        }
        assert_eq!(Dimension::from_symbol('T'), None);
        assert!(!Dimension::Empty.is_true());
        assert!(Dimension::Point.is_true());
    }
}

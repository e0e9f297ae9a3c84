// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # DE-9IM Intersection Matrix
//!
//! A 3x3 grid of [`Dimension`]s indexed by the [`Location`] of a point in
//! geometry A (row) and in geometry B (column). Cells are only ever raised:
//! once a dimension has been observed it cannot be taken back.
//!
//! ## Patterns
//!
//! [`MatrixPattern`] is a validated 9-symbol pattern over `T F * 0 1 2`.
//! Well-known patterns live in [`patterns`].

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::location::{Dimension, Location};

/// Well-known DE-9IM patterns.
pub mod patterns {
    /// Polygons share a boundary segment but no interior.
    pub const ADJACENT: &str = "F***1****";
    /// B lies in the interior of A without touching its boundary.
    pub const CONTAINS_PROPERLY: &str = "T**FF*FF*";
    /// The interiors intersect.
    pub const INTERIOR_INTERSECTS: &str = "T********";
}

/// A DE-9IM intersection matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntersectionMatrix {
    cells: [[Dimension; 3]; 3],
}

impl IntersectionMatrix {
    /// Creates a matrix with every cell `F`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the dimension stored for `(loc_a, loc_b)`.
    #[inline]
    pub fn get(&self, loc_a: Location, loc_b: Location) -> Dimension {
        self.cells[loc_a.index()][loc_b.index()]
    }

    /// Raises the cell `(loc_a, loc_b)` to `dim` if `dim` is greater.
    ///
    /// Returns true if the cell changed.
    pub fn set_at_least(&mut self, loc_a: Location, loc_b: Location, dim: Dimension) -> bool {
        let cell = &mut self.cells[loc_a.index()][loc_b.index()];
        if dim > *cell {
            *cell = dim;
            true
        } else {
            false
        }
    }

    /// Returns the matrix with the roles of A and B exchanged.
    pub fn transpose(&self) -> Self {
        let mut cells = [[Dimension::Empty; 3]; 3];
        for (i, row) in self.cells.iter().enumerate() {
            for (j, dim) in row.iter().enumerate() {
                cells[j][i] = *dim;
            }
        }
        Self { cells }
    }

    /// Tests the matrix against a pattern.
    pub fn matches(&self, pattern: &MatrixPattern) -> bool {
        Location::ALL.iter().all(|&a| {
            Location::ALL
                .iter()
                .all(|&b| pattern.get(a, b).matches(self.get(a, b)))
        })
    }

    /// Tests the matrix against a pattern string.
    pub fn matches_str(&self, pattern: &str) -> Result<bool> {
        Ok(self.matches(&pattern.parse()?))
    }

    // ========================================================================
    // Named relationships
    // ========================================================================

    fn is_true(&self, loc_a: Location, loc_b: Location) -> bool {
        self.get(loc_a, loc_b).is_true()
    }

    fn is_false(&self, loc_a: Location, loc_b: Location) -> bool {
        !self.get(loc_a, loc_b).is_true()
    }

    /// `FF*FF****`
    pub fn is_disjoint(&self) -> bool {
        use Location::*;
        self.is_false(Interior, Interior)
            && self.is_false(Interior, Boundary)
            && self.is_false(Boundary, Interior)
            && self.is_false(Boundary, Boundary)
    }

    pub fn is_intersects(&self) -> bool {
        !self.is_disjoint()
    }

    /// `FT*******`, `F**T*****` or `F***T****`, for dimension pairs other than P/P.
    pub fn is_touches(&self, dim_a: Dimension, dim_b: Dimension) -> bool {
        use Location::*;
        if dim_a > dim_b {
            return self.is_touches(dim_b, dim_a);
        }
        let applicable = matches!(
            (dim_a, dim_b),
            (Dimension::Area, Dimension::Area)
                | (Dimension::Line, Dimension::Line)
                | (Dimension::Line, Dimension::Area)
                | (Dimension::Point, Dimension::Area)
                | (Dimension::Point, Dimension::Line)
        );
        applicable
            && self.is_false(Interior, Interior)
            && (self.is_true(Interior, Boundary)
                || self.is_true(Boundary, Interior)
                || self.is_true(Boundary, Boundary))
    }

    /// Crossing depends on the operand dimensions:
    /// `T*T******` for P/L, P/A, L/A; `T*****T**` for L/P, A/P, A/L;
    /// `0********` for L/L.
    pub fn is_crosses(&self, dim_a: Dimension, dim_b: Dimension) -> bool {
        use Dimension::{Area, Line, Point};
        use Location::*;
        match (dim_a, dim_b) {
            (Point, Line) | (Point, Area) | (Line, Area) => {
                self.is_true(Interior, Interior) && self.is_true(Interior, Exterior)
            }
            (Line, Point) | (Area, Point) | (Area, Line) => {
                self.is_true(Interior, Interior) && self.is_true(Exterior, Interior)
            }
            (Line, Line) => self.get(Interior, Interior) == Point,
            _ => false,
        }
    }

    /// `T*F**F***`
    pub fn is_within(&self) -> bool {
        use Location::*;
        self.is_true(Interior, Interior)
            && self.is_false(Interior, Exterior)
            && self.is_false(Boundary, Exterior)
    }

    /// `T*****FF*`
    pub fn is_contains(&self) -> bool {
        use Location::*;
        self.is_true(Interior, Interior)
            && self.is_false(Exterior, Interior)
            && self.is_false(Exterior, Boundary)
    }

    fn has_point_in_common(&self) -> bool {
        use Location::*;
        self.is_true(Interior, Interior)
            || self.is_true(Interior, Boundary)
            || self.is_true(Boundary, Interior)
            || self.is_true(Boundary, Boundary)
    }

    /// `T*****FF*`, `*T****FF*`, `***T**FF*` or `****T*FF*`
    pub fn is_covers(&self) -> bool {
        use Location::*;
        self.has_point_in_common()
            && self.is_false(Exterior, Interior)
            && self.is_false(Exterior, Boundary)
    }

    /// `T*F**F***`, `*TF**F***`, `**FT*F***` or `**F*TF***`
    pub fn is_covered_by(&self) -> bool {
        use Location::*;
        self.has_point_in_common()
            && self.is_false(Interior, Exterior)
            && self.is_false(Boundary, Exterior)
    }

    /// `T*F**FFF*` for operands of equal dimension.
    pub fn is_equals(&self, dim_a: Dimension, dim_b: Dimension) -> bool {
        use Location::*;
        dim_a == dim_b
            && self.is_true(Interior, Interior)
            && self.is_false(Interior, Exterior)
            && self.is_false(Boundary, Exterior)
            && self.is_false(Exterior, Interior)
            && self.is_false(Exterior, Boundary)
    }

    /// `T*T***T**` for P/P and A/A; `1*T***T**` for L/L.
    pub fn is_overlaps(&self, dim_a: Dimension, dim_b: Dimension) -> bool {
        use Location::*;
        let sides = self.is_true(Interior, Exterior) && self.is_true(Exterior, Interior);
        match (dim_a, dim_b) {
            (Dimension::Point, Dimension::Point) | (Dimension::Area, Dimension::Area) => {
                self.is_true(Interior, Interior) && sides
            }
            (Dimension::Line, Dimension::Line) => {
                self.get(Interior, Interior) == Dimension::Line && sides
            }
            _ => false,
        }
    }
}

impl fmt::Display for IntersectionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for dim in row {
                write!(f, "{}", dim.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for IntersectionMatrix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let symbols = nine_symbols(s)?;
        let mut cells = [[Dimension::Empty; 3]; 3];
        for (index, symbol) in symbols.into_iter().enumerate() {
            cells[index / 3][index % 3] = Dimension::from_symbol(symbol)
                .ok_or(Error::InvalidMatrixSymbol { symbol, index })?;
        }
        Ok(Self { cells })
    }
}

fn nine_symbols(s: &str) -> Result<[char; 9]> {
    let chars: Vec<char> = s.chars().collect();
    chars
        .as_slice()
        .try_into()
        .map_err(|_| Error::InvalidLength(chars.len()))
}

// ============================================================================
// Patterns
// ============================================================================

/// One entry of a DE-9IM pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternSymbol {
    /// `*` matches any value.
    DontCare,
    /// `T` matches any non-empty dimension.
    NonEmpty,
    /// `F`, `0`, `1`, `2` match exactly.
    Exactly(Dimension),
}

impl PatternSymbol {
    fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            '*' => Some(PatternSymbol::DontCare),
            'T' | 't' => Some(PatternSymbol::NonEmpty),
            other => Dimension::from_symbol(other).map(PatternSymbol::Exactly),
        }
    }

    fn to_char(self) -> char {
        match self {
            PatternSymbol::DontCare => '*',
            PatternSymbol::NonEmpty => 'T',
            PatternSymbol::Exactly(dim) => dim.symbol(),
        }
    }

    /// Tests a matrix value against this entry.
    pub fn matches(self, dim: Dimension) -> bool {
        match self {
            PatternSymbol::DontCare => true,
            PatternSymbol::NonEmpty => dim.is_true(),
            PatternSymbol::Exactly(expected) => dim == expected,
        }
    }

    /// True if the entry can only be matched by a non-empty intersection.
    pub fn requires_intersection(self) -> bool {
        match self {
            PatternSymbol::DontCare => false,
            PatternSymbol::NonEmpty => true,
            PatternSymbol::Exactly(dim) => dim.is_true(),
        }
    }
}

/// A validated DE-9IM pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatrixPattern {
    cells: [[PatternSymbol; 3]; 3],
}

impl MatrixPattern {
    /// Returns the entry for `(loc_a, loc_b)`.
    #[inline]
    pub fn get(&self, loc_a: Location, loc_b: Location) -> PatternSymbol {
        self.cells[loc_a.index()][loc_b.index()]
    }

    /// Returns the pattern with the roles of A and B exchanged.
    pub fn transpose(&self) -> Self {
        let mut cells = [[PatternSymbol::DontCare; 3]; 3];
        for (i, row) in self.cells.iter().enumerate() {
            for (j, symbol) in row.iter().enumerate() {
                cells[j][i] = *symbol;
            }
        }
        Self { cells }
    }

    /// True if the pattern can only match geometries whose interiors or
    /// boundaries meet.
    pub fn requires_interaction(&self) -> bool {
        use Location::*;
        [
            (Interior, Interior),
            (Interior, Boundary),
            (Boundary, Interior),
            (Boundary, Boundary),
        ]
        .iter()
        .any(|&(a, b)| self.get(a, b).requires_intersection())
    }
}

impl FromStr for MatrixPattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let symbols = nine_symbols(s)?;
        let mut cells = [[PatternSymbol::DontCare; 3]; 3];
        for (index, symbol) in symbols.into_iter().enumerate() {
            cells[index / 3][index % 3] = PatternSymbol::from_char(symbol)
                .ok_or(Error::InvalidPatternSymbol { symbol, index })?;
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for MatrixPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for symbol in row {
                write!(f, "{}", symbol.to_char())?;
            }
        }
        Ok(())
    }
}

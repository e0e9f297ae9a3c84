// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Identifies which input geometry a piece of topology belongs to.

use relate_lite_core::Location;

/// One of the two operands of a relate evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operand {
    A,
    B,
}

impl Operand {
    #[inline]
    pub fn is_a(self) -> bool {
        self == Operand::A
    }

    /// The other operand.
    #[inline]
    pub fn other(self) -> Operand {
        match self {
            Operand::A => Operand::B,
            Operand::B => Operand::A,
        }
    }

    /// Orders a pair of locations as `(loc_a, loc_b)` given that `own`
    /// belongs to this operand and `other` to the other one.
    #[inline]
    pub fn order(self, own: Location, other: Location) -> (Location, Location) {
        match self {
            Operand::A => (own, other),
            Operand::B => (other, own),
        }
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A directed edge leaving a node, labelled for both operands.

use geo::Coord;
use relate_lite_core::{Dimension, Location, Position};

use crate::operand::Operand;

/// Topology of one operand along an edge. `None` means not yet known.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EdgeLabel {
    pub dim: Option<Dimension>,
    pub left: Option<Location>,
    pub right: Option<Location>,
    pub on: Option<Location>,
}

impl EdgeLabel {
    fn is_known(&self) -> bool {
        self.dim.is_some()
    }

    /// An area edge with interior on the side given by `is_forward`.
    fn set_area(&mut self, is_forward: bool) {
        let (left, right) = if is_forward {
            (Location::Exterior, Location::Interior)
        } else {
            (Location::Interior, Location::Exterior)
        };
        self.dim = Some(Dimension::Area);
        self.left = Some(left);
        self.right = Some(right);
        self.on = Some(Location::Boundary);
    }

    fn set_line(&mut self) {
        self.dim = Some(Dimension::Line);
        self.left = Some(Location::Exterior);
        self.right = Some(Location::Exterior);
        self.on = Some(Location::Interior);
    }

    fn get(&self, pos: Position) -> Option<Location> {
        match pos {
            Position::Left => self.left,
            Position::Right => self.right,
            Position::On => self.on,
        }
    }
}

/// An edge of a [`RelateNode`](crate::relate_node::RelateNode), identified
/// by the direction point it heads towards.
#[derive(Debug, Clone, PartialEq)]
pub struct RelateEdge {
    dir_pt: Coord<f64>,
    a: EdgeLabel,
    b: EdgeLabel,
}

impl RelateEdge {
    /// Creates an edge labelled for `operand` only.
    ///
    /// Area edges leaving the node along the ring direction are `forward`:
    /// the area interior is then on their right.
    pub fn new(dir_pt: Coord<f64>, operand: Operand, dim: Dimension, is_forward: bool) -> Self {
        let mut edge = Self {
            dir_pt,
            a: EdgeLabel::default(),
            b: EdgeLabel::default(),
        };
        edge.label_mut(operand).set_locations(dim, is_forward);
        edge
    }

    pub fn dir_pt(&self) -> Coord<f64> {
        self.dir_pt
    }

    pub fn label(&self, operand: Operand) -> &EdgeLabel {
        match operand {
            Operand::A => &self.a,
            Operand::B => &self.b,
        }
    }

    fn label_mut(&mut self, operand: Operand) -> &mut EdgeLabel {
        match operand {
            Operand::A => &mut self.a,
            Operand::B => &mut self.b,
        }
    }

    pub fn is_known(&self, operand: Operand) -> bool {
        self.label(operand).is_known()
    }

    pub fn location(&self, operand: Operand, pos: Position) -> Option<Location> {
        self.label(operand).get(pos)
    }

    /// Location with unknowns read as exterior.
    pub fn location_or_exterior(&self, operand: Operand, pos: Position) -> Location {
        self.location(operand, pos).unwrap_or(Location::Exterior)
    }

    pub fn is_interior(&self, operand: Operand, pos: Position) -> bool {
        self.location(operand, pos) == Some(Location::Interior)
    }

    /// Merges another contribution of `operand` running along this edge.
    ///
    /// Interior wins over exterior on either side; an area contribution
    /// upgrades a line edge and makes it part of the area boundary.
    pub fn merge(&mut self, operand: Operand, dim: Dimension, is_forward: bool) {
        let label = self.label_mut(operand);
        let Some(current) = label.dim else {
            label.set_locations(dim, is_forward);
            return;
        };
        if current == Dimension::Line && dim == Dimension::Area {
            label.dim = Some(Dimension::Area);
            label.on = Some(Location::Boundary);
        }
        if dim == Dimension::Area {
            let (left, right) = if is_forward {
                (Location::Exterior, Location::Interior)
            } else {
                (Location::Interior, Location::Exterior)
            };
            merge_side(&mut label.left, left);
            merge_side(&mut label.right, right);
        }
    }

    /// Marks the whole edge as lying inside an area of `operand`.
    pub fn set_area_interior(&mut self, operand: Operand) {
        let label = self.label_mut(operand);
        label.left = Some(Location::Interior);
        label.right = Some(Location::Interior);
        label.on = Some(Location::Interior);
    }

    /// Fills every unknown location of `operand` with `loc`.
    pub fn set_unknown_locations(&mut self, operand: Operand, loc: Location) {
        let label = self.label_mut(operand);
        for slot in [&mut label.left, &mut label.right, &mut label.on] {
            if slot.is_none() {
                *slot = Some(loc);
            }
        }
    }
}

impl EdgeLabel {
    fn set_locations(&mut self, dim: Dimension, is_forward: bool) {
        if dim == Dimension::Area {
            self.set_area(is_forward);
        } else {
            self.set_line();
        }
    }
}

fn merge_side(slot: &mut Option<Location>, loc: Location) {
    match slot {
        None => *slot = Some(loc),
        Some(current) if loc == Location::Interior => *current = Location::Interior,
        Some(_) => {}
    }
}

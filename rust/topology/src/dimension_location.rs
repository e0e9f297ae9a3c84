// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Locations qualified by the dimension of the element they lie in.

use relate_lite_core::{Dimension, Location};

/// A point location together with the dimension of the element it lies in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionLocation {
    Exterior,
    PointInterior,
    LineInterior,
    LineBoundary,
    AreaInterior,
    AreaBoundary,
}

impl DimensionLocation {
    pub fn area(loc: Location) -> Self {
        match loc {
            Location::Interior => DimensionLocation::AreaInterior,
            Location::Boundary => DimensionLocation::AreaBoundary,
            Location::Exterior => DimensionLocation::Exterior,
        }
    }

    pub fn line(loc: Location) -> Self {
        match loc {
            Location::Interior => DimensionLocation::LineInterior,
            Location::Boundary => DimensionLocation::LineBoundary,
            Location::Exterior => DimensionLocation::Exterior,
        }
    }

    pub fn point(loc: Location) -> Self {
        match loc {
            Location::Interior => DimensionLocation::PointInterior,
            _ => DimensionLocation::Exterior,
        }
    }

    pub fn location(self) -> Location {
        match self {
            DimensionLocation::PointInterior
            | DimensionLocation::LineInterior
            | DimensionLocation::AreaInterior => Location::Interior,
            DimensionLocation::LineBoundary | DimensionLocation::AreaBoundary => {
                Location::Boundary
            }
            DimensionLocation::Exterior => Location::Exterior,
        }
    }

    /// Dimension of the containing element, or `exterior_dim` for the exterior.
    pub fn dimension_or(self, exterior_dim: Dimension) -> Dimension {
        match self {
            DimensionLocation::PointInterior => Dimension::Point,
            DimensionLocation::LineInterior | DimensionLocation::LineBoundary => Dimension::Line,
            DimensionLocation::AreaInterior | DimensionLocation::AreaBoundary => Dimension::Area,
            DimensionLocation::Exterior => exterior_dim,
        }
    }

    /// Dimension of the containing element; `Empty` for the exterior.
    pub fn dimension(self) -> Dimension {
        self.dimension_or(Dimension::Empty)
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! An input geometry analysed for relate evaluation.
//!
//! Records which dimensions are present (ignoring empty elements), the
//! real dimension used by predicates, and caches the structures reused
//! when the geometry is prepared: the point locator indexes, the set of
//! unique points and the segment index used for noding.

use std::sync::OnceLock;

use geo::{Coord, Geometry};
use relate_lite_core::{BoundaryNodeRule, CoordKey, Dimension, Envelope, Location};
use rustc_hash::FxHashSet;

use crate::dimension_location::DimensionLocation;
use crate::edge_intersector::EdgeSegmentIndex;
use crate::operand::Operand;
use crate::point_locator::RelatePointLocator;
use crate::segment_string::{oriented_ring, RelateSegmentString};

#[derive(Debug)]
pub struct RelateGeometry<'a> {
    geom: &'a Geometry<f64>,
    is_prepared: bool,
    envelope: Envelope,
    dim: Dimension,
    has_points: bool,
    has_lines: bool,
    has_areas: bool,
    is_line_zero_len: bool,
    is_empty: bool,
    locator: RelatePointLocator<'a>,
    unique_points: OnceLock<FxHashSet<CoordKey>>,
    edge_index: OnceLock<EdgeSegmentIndex>,
}

impl<'a> RelateGeometry<'a> {
    pub fn new(geom: &'a Geometry<f64>, is_prepared: bool, rule: BoundaryNodeRule) -> Self {
        let locator = RelatePointLocator::new(geom, is_prepared, rule);
        let is_empty = locator.is_empty();
        let has_points = !locator.points().is_empty();
        let has_lines = !locator.lines().is_empty();
        let has_areas = !locator.polygonals().is_empty();
        let dim = nominal_dimension(geom);
        let is_line_zero_len = dim == Dimension::Line
            && locator.lines().iter().all(|line| is_zero_length(&line.0));
        Self {
            geom,
            is_prepared,
            envelope: Envelope::of_geometry(geom),
            dim,
            has_points,
            has_lines,
            has_areas,
            is_line_zero_len,
            is_empty,
            locator,
            unique_points: OnceLock::new(),
            edge_index: OnceLock::new(),
        }
    }

    pub fn geometry(&self) -> &'a Geometry<f64> {
        self.geom
    }

    pub fn is_prepared(&self) -> bool {
        self.is_prepared
    }

    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    pub fn is_empty(&self) -> bool {
        self.is_empty
    }

    /// Nominal dimension: the highest dimension of any element, including
    /// empty ones. A collection of an empty polygon and a line is 2.
    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    /// True if a non-empty element of dimension `dim` is present.
    pub fn has_dimension(&self, dim: Dimension) -> bool {
        match dim {
            Dimension::Point => self.has_points,
            Dimension::Line => self.has_lines,
            Dimension::Area => self.has_areas,
            Dimension::Empty => false,
        }
    }

    pub fn has_area_and_line(&self) -> bool {
        self.has_areas && self.has_lines
    }

    /// Dimension of the non-empty elements. Lines of zero length count as
    /// points.
    pub fn dimension_real(&self) -> Dimension {
        if self.is_empty {
            Dimension::Empty
        } else if self.dim == Dimension::Line && self.is_line_zero_len {
            Dimension::Point
        } else if self.has_areas {
            Dimension::Area
        } else if self.has_lines {
            Dimension::Line
        } else {
            Dimension::Point
        }
    }

    pub fn has_edges(&self) -> bool {
        self.has_lines || self.has_areas
    }

    pub fn has_boundary(&self) -> bool {
        self.locator.has_boundary()
    }

    pub fn is_polygonal(&self) -> bool {
        matches!(
            self.geom,
            Geometry::Polygon(_) | Geometry::MultiPolygon(_) | Geometry::Rect(_) | Geometry::Triangle(_)
        )
    }

    /// Whether this geometry's own linework may intersect itself and so
    /// must be noded against itself.
    ///
    /// Points have no linework; valid polygonal geometries only touch at
    /// vertices, which ring sections already capture.
    pub fn is_self_noding_required(&self) -> bool {
        match self.geom {
            Geometry::Point(_)
            | Geometry::MultiPoint(_)
            | Geometry::Polygon(_)
            | Geometry::MultiPolygon(_)
            | Geometry::Rect(_)
            | Geometry::Triangle(_) => false,
            Geometry::GeometryCollection(gc) => !(self.has_areas && gc.0.len() == 1),
            Geometry::Line(_) | Geometry::LineString(_) | Geometry::MultiLineString(_) => true,
        }
    }

    pub fn locator(&self) -> &RelatePointLocator<'a> {
        &self.locator
    }

    // ========================================================================
    // Location
    // ========================================================================

    pub fn locate_with_dim(&self, p: Coord<f64>) -> DimensionLocation {
        self.locator.locate_with_dim(p)
    }

    pub fn locate_line_end(&self, p: Coord<f64>) -> Location {
        self.locator.locate_line_end_with_dim(p).location()
    }

    /// Locates a vertex of one of this geometry's polygon rings.
    pub fn locate_area_vertex(&self, p: Coord<f64>) -> Location {
        self.locator.locate_node(p, None)
    }

    pub fn locate_node(&self, p: Coord<f64>, parent: Option<usize>) -> Location {
        self.locator.locate_node(p, parent)
    }

    /// True if a node on element `parent` lies in the interior of the
    /// areas of this geometry.
    pub fn is_node_in_area(&self, p: Coord<f64>, parent: Option<usize>) -> bool {
        self.locator.locate_node_with_dim(p, parent) == DimensionLocation::AreaInterior
    }

    // ========================================================================
    // Points
    // ========================================================================

    /// Distinct coordinates of the point elements, plus the first vertex of
    /// each line. Only meaningful when the real dimension is a point, where
    /// every line has zero length.
    pub fn unique_points(&self) -> &FxHashSet<CoordKey> {
        self.unique_points.get_or_init(|| {
            let line_starts = self.locator.lines().iter().filter_map(|line| line.0.first());
            self.locator
                .points()
                .iter()
                .chain(line_starts)
                .map(|&p| CoordKey::from(p))
                .collect()
        })
    }

    /// Point elements not covered by a line or area of this geometry.
    pub fn effective_points(&self) -> Vec<Coord<f64>> {
        let points = self.locator.points();
        if self.dimension_real() <= Dimension::Point {
            return points.to_vec();
        }
        points
            .iter()
            .copied()
            .filter(|&p| self.locate_with_dim(p).dimension() == Dimension::Point)
            .collect()
    }

    // ========================================================================
    // Segment strings
    // ========================================================================

    /// Lines and rings whose envelopes meet `env` (all of them if `None`).
    ///
    /// Element ids are assigned in traversal order over the whole geometry,
    /// so they are stable under filtering.
    pub fn extract_segment_strings(
        &self,
        operand: Operand,
        env: Option<&Envelope>,
    ) -> Vec<RelateSegmentString> {
        let meets = |e: Envelope| env.map_or(true, |env| env.intersects(&e));
        let mut strings = Vec::new();
        let mut id = 0;
        for line in self.locator.lines() {
            if meets(Envelope::of(&**line)) {
                strings.push(RelateSegmentString::line(&line.0, operand, id));
            }
            id += 1;
        }
        for (polygonal, polygons) in self.locator.polygonals().iter().enumerate() {
            for polygon in polygons {
                if meets(Envelope::of(&**polygon)) {
                    let rings = std::iter::once(polygon.exterior()).chain(polygon.interiors());
                    for (ring_id, ring) in rings.enumerate() {
                        if ring.0.is_empty() || !meets(Envelope::of(ring)) {
                            continue;
                        }
                        let pts = oriented_ring(ring, ring_id == 0);
                        strings.push(RelateSegmentString::ring(pts, operand, id, ring_id, polygonal));
                    }
                }
                id += 1;
            }
        }
        strings
    }

    /// Segment index over all of this geometry's edges, built once.
    pub(crate) fn edge_index(&self, operand: Operand) -> &EdgeSegmentIndex {
        self.edge_index
            .get_or_init(|| EdgeSegmentIndex::new(self.extract_segment_strings(operand, None), None))
    }
}

fn nominal_dimension(geom: &Geometry<f64>) -> Dimension {
    match geom {
        Geometry::Point(_) | Geometry::MultiPoint(_) => Dimension::Point,
        Geometry::Line(_) | Geometry::LineString(_) | Geometry::MultiLineString(_) => Dimension::Line,
        Geometry::Polygon(_) | Geometry::MultiPolygon(_) | Geometry::Rect(_) | Geometry::Triangle(_) => {
            Dimension::Area
        }
        Geometry::GeometryCollection(gc) => gc
            .iter()
            .map(nominal_dimension)
            .max()
            .unwrap_or(Dimension::Empty),
    }
}

fn is_zero_length(pts: &[Coord<f64>]) -> bool {
    pts.windows(2).all(|seg| seg[0] == seg[1])
}

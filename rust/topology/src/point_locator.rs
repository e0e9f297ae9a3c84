// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Locates points against arbitrary (possibly heterogeneous) geometries.
//!
//! A geometry is decomposed into its non-empty points, lines and
//! polygonal elements (each Polygon or MultiPolygon is one element).
//! Location prefers the highest dimension: a point in or on any area is
//! reported as an area location, otherwise line, otherwise point.
//!
//! ## Nodes
//!
//! Locating a *node* (a point known to lie on the geometry's own
//! linework) can skip geometric tests: a node of a polygonal geometry is
//! always on its boundary, and a node on a line is interior unless it is a
//! boundary endpoint. The polygonal element a node was found on is passed
//! as `parent` so that element is not re-tested.

use std::borrow::Cow;
use std::sync::OnceLock;

use geo::{Coord, Geometry, LineString, Polygon};
use relate_lite_core::algorithm::{
    is_on_line, IndexedPointInAreaLocator, PointOnGeometryLocator, SimplePointInAreaLocator,
};
use relate_lite_core::{BoundaryNodeRule, CoordKey, Location};
use rustc_hash::FxHashSet;

use crate::adjacent_edge_locator::AdjacentEdgeLocator;
use crate::dimension_location::DimensionLocation;
use crate::linear_boundary::LinearBoundary;

#[derive(Debug)]
pub struct RelatePointLocator<'a> {
    is_prepared: bool,
    is_empty: bool,
    is_polygonal: bool,
    point_set: FxHashSet<CoordKey>,
    points: Vec<Coord<f64>>,
    lines: Vec<Cow<'a, LineString<f64>>>,
    polygonals: Vec<Vec<Cow<'a, Polygon<f64>>>>,
    line_boundary: Option<LinearBoundary>,
    polygon_locators: Vec<OnceLock<IndexedPointInAreaLocator>>,
    adjacent_edge_locator: OnceLock<AdjacentEdgeLocator>,
}

impl<'a> RelatePointLocator<'a> {
    /// Decomposes `geom` into locatable elements.
    ///
    /// Prepared locators build indexed point-in-area locators lazily and
    /// keep them for later queries.
    pub fn new(geom: &'a Geometry<f64>, is_prepared: bool, rule: BoundaryNodeRule) -> Self {
        let mut locator = Self {
            is_prepared,
            is_empty: true,
            is_polygonal: matches!(
                geom,
                Geometry::Polygon(_)
                    | Geometry::MultiPolygon(_)
                    | Geometry::Rect(_)
                    | Geometry::Triangle(_)
            ),
            point_set: FxHashSet::default(),
            points: Vec::new(),
            lines: Vec::new(),
            polygonals: Vec::new(),
            line_boundary: None,
            polygon_locators: Vec::new(),
            adjacent_edge_locator: OnceLock::new(),
        };
        locator.extract_elements(geom);
        if !locator.lines.is_empty() {
            locator.line_boundary =
                Some(LinearBoundary::new(locator.lines.iter().map(|l| &**l), rule));
        }
        locator.polygon_locators = locator.polygonals.iter().map(|_| OnceLock::new()).collect();
        locator.is_empty =
            locator.points.is_empty() && locator.lines.is_empty() && locator.polygonals.is_empty();
        locator
    }

    fn extract_elements(&mut self, geom: &'a Geometry<f64>) {
        match geom {
            Geometry::Point(p) => self.add_point(p.0),
            Geometry::MultiPoint(mp) => {
                for p in mp {
                    self.add_point(p.0);
                }
            }
            Geometry::Line(line) => self
                .lines
                .push(Cow::Owned(LineString::from(vec![line.start, line.end]))),
            Geometry::LineString(ls) => self.add_line(ls),
            Geometry::MultiLineString(mls) => {
                for ls in mls {
                    self.add_line(ls);
                }
            }
            Geometry::Polygon(poly) => self.add_polygonal(vec![Cow::Borrowed(poly)]),
            Geometry::MultiPolygon(mp) => {
                self.add_polygonal(mp.0.iter().map(Cow::Borrowed).collect())
            }
            Geometry::Rect(rect) => self.add_polygonal(vec![Cow::Owned(rect.to_polygon())]),
            Geometry::Triangle(tri) => self.add_polygonal(vec![Cow::Owned(tri.to_polygon())]),
            Geometry::GeometryCollection(gc) => {
                for g in gc {
                    self.extract_elements(g);
                }
            }
        }
    }

    fn add_point(&mut self, p: Coord<f64>) {
        self.point_set.insert(CoordKey::from(p));
        self.points.push(p);
    }

    fn add_line(&mut self, ls: &'a LineString<f64>) {
        if !ls.0.is_empty() {
            self.lines.push(Cow::Borrowed(ls));
        }
    }

    fn add_polygonal(&mut self, mut polygons: Vec<Cow<'a, Polygon<f64>>>) {
        polygons.retain(|p| !p.exterior().0.is_empty());
        if !polygons.is_empty() {
            self.polygonals.push(polygons);
        }
    }

    // ========================================================================
    // Elements
    // ========================================================================

    pub fn is_empty(&self) -> bool {
        self.is_empty
    }

    /// All point elements, in traversal order.
    pub fn points(&self) -> &[Coord<f64>] {
        &self.points
    }

    /// Non-empty line elements.
    pub fn lines(&self) -> &[Cow<'a, LineString<f64>>] {
        &self.lines
    }

    /// Non-empty polygonal elements; the index is the polygonal id used by
    /// node sections.
    pub fn polygonals(&self) -> &[Vec<Cow<'a, Polygon<f64>>>] {
        &self.polygonals
    }

    /// True if the linear elements have a non-empty boundary.
    pub fn has_boundary(&self) -> bool {
        self.line_boundary
            .as_ref()
            .is_some_and(LinearBoundary::has_boundary)
    }

    // ========================================================================
    // Location
    // ========================================================================

    pub fn locate(&self, p: Coord<f64>) -> Location {
        self.locate_with_dim(p).location()
    }

    pub fn locate_with_dim(&self, p: Coord<f64>) -> DimensionLocation {
        self.locate_dim(p, false, None)
    }

    /// Locates a node lying on the polygonal element `parent` (if any).
    pub fn locate_node(&self, p: Coord<f64>, parent: Option<usize>) -> Location {
        self.locate_node_with_dim(p, parent).location()
    }

    pub fn locate_node_with_dim(&self, p: Coord<f64>, parent: Option<usize>) -> DimensionLocation {
        self.locate_dim(p, true, parent)
    }

    /// Locates an endpoint of one of this geometry's lines. An endpoint
    /// covered by an area reports the area location.
    pub fn locate_line_end_with_dim(&self, p: Coord<f64>) -> DimensionLocation {
        if !self.polygonals.is_empty() {
            let loc = self.locate_on_polygons(p, false, None);
            if loc != Location::Exterior {
                return DimensionLocation::area(loc);
            }
        }
        let is_boundary = self
            .line_boundary
            .as_ref()
            .is_some_and(|lb| lb.is_boundary(p));
        if is_boundary {
            DimensionLocation::LineBoundary
        } else {
            DimensionLocation::LineInterior
        }
    }

    fn locate_dim(&self, p: Coord<f64>, is_node: bool, parent: Option<usize>) -> DimensionLocation {
        if self.is_empty {
            return DimensionLocation::Exterior;
        }
        if is_node && self.is_polygonal {
            return DimensionLocation::AreaBoundary;
        }
        if !self.polygonals.is_empty() {
            let loc = self.locate_on_polygons(p, is_node, parent);
            if loc != Location::Exterior {
                return DimensionLocation::area(loc);
            }
        }
        if !self.lines.is_empty() {
            let loc = self.locate_on_lines(p, is_node);
            if loc != Location::Exterior {
                return DimensionLocation::line(loc);
            }
        }
        if self.point_set.contains(&CoordKey::from(p)) {
            return DimensionLocation::PointInterior;
        }
        DimensionLocation::Exterior
    }

    fn locate_on_lines(&self, p: Coord<f64>, is_node: bool) -> Location {
        if self
            .line_boundary
            .as_ref()
            .is_some_and(|lb| lb.is_boundary(p))
        {
            return Location::Boundary;
        }
        // a node must lie on some line
        if is_node {
            return Location::Interior;
        }
        if self.lines.iter().any(|line| is_on_line(p, &line.0)) {
            Location::Interior
        } else {
            Location::Exterior
        }
    }

    fn locate_on_polygons(&self, p: Coord<f64>, is_node: bool, parent: Option<usize>) -> Location {
        let mut boundary_count = 0;
        for index in 0..self.polygonals.len() {
            match self.locate_on_polygonal(p, is_node, parent, index) {
                Location::Interior => return Location::Interior,
                Location::Boundary => boundary_count += 1,
                Location::Exterior => {}
            }
        }
        match boundary_count {
            0 => Location::Exterior,
            1 => Location::Boundary,
            // on the shared boundary of several polygonal elements
            _ => self
                .adjacent_edge_locator
                .get_or_init(|| {
                    AdjacentEdgeLocator::new(self.polygonals.iter().flatten().map(|p| &**p))
                })
                .locate(p),
        }
    }

    fn locate_on_polygonal(
        &self,
        p: Coord<f64>,
        is_node: bool,
        parent: Option<usize>,
        index: usize,
    ) -> Location {
        if is_node && parent == Some(index) {
            return Location::Boundary;
        }
        let polygons = &self.polygonals[index];
        if self.is_prepared {
            self.polygon_locators[index]
                .get_or_init(|| IndexedPointInAreaLocator::new(polygons.iter().map(|p| &**p)))
                .locate(p)
        } else {
            SimplePointInAreaLocator::new(polygons).locate(p)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::coord;
    use wkt::TryFromWkt;

    const GC_PLA: &str = "GEOMETRYCOLLECTION (POINT (1 1), POINT (2 1), LINESTRING (3 1, 3 9), LINESTRING (4 1, 5 4, 7 1, 4 1), LINESTRING (12 12, 14 14), POLYGON ((6 5, 6 9, 9 9, 9 5, 6 5)), POLYGON ((10 10, 10 16, 16 16, 16 10, 10 10)), POLYGON ((11 11, 11 17, 17 17, 17 11, 11 11)), POLYGON ((12 12, 12 16, 16 16, 16 12, 12 12)))";

    fn read(wkt: &str) -> Geometry<f64> {
        Geometry::try_from_wkt_str(wkt).unwrap()
    }

    fn check_dim_location(wkt: &str, x: f64, y: f64, expected: DimensionLocation) {
        let geom = read(wkt);
        for prepared in [false, true] {
            let locator = RelatePointLocator::new(&geom, prepared, BoundaryNodeRule::Mod2);
            assert_eq!(
                locator.locate_with_dim(coord! { x: x, y: y }),
                expected,
                "({x} {y}) prepared={prepared}"
            );
        }
    }

    #[test]
    fn point_elements() {
        check_dim_location(GC_PLA, 1.0, 1.0, DimensionLocation::PointInterior);
        check_dim_location(GC_PLA, 0.0, 1.0, DimensionLocation::Exterior);
    }

    #[test]
    fn line_elements() {
        check_dim_location(GC_PLA, 3.0, 8.0, DimensionLocation::LineInterior);
        check_dim_location(GC_PLA, 3.0, 3.0, DimensionLocation::LineInterior);
        check_dim_location(GC_PLA, 3.0, 1.0, DimensionLocation::LineBoundary);
        // closed line has no boundary
        check_dim_location(GC_PLA, 4.0, 1.0, DimensionLocation::LineInterior);
    }

    #[test]
    fn area_elements() {
        check_dim_location(GC_PLA, 8.0, 8.0, DimensionLocation::AreaInterior);
        check_dim_location(GC_PLA, 9.0, 9.0, DimensionLocation::AreaBoundary);
    }

    #[test]
    fn line_inside_area() {
        check_dim_location(GC_PLA, 11.0, 11.0, DimensionLocation::AreaInterior);
        check_dim_location(GC_PLA, 14.0, 14.0, DimensionLocation::AreaInterior);
    }

    #[test]
    fn overlapping_areas() {
        check_dim_location(GC_PLA, 12.0, 12.0, DimensionLocation::AreaInterior);
        check_dim_location(GC_PLA, 10.0, 10.0, DimensionLocation::AreaBoundary);
        check_dim_location(GC_PLA, 16.0, 16.0, DimensionLocation::AreaInterior);
    }

    #[test]
    fn line_node() {
        let geom = read(GC_PLA);
        let locator = RelatePointLocator::new(&geom, false, BoundaryNodeRule::Mod2);
        assert_eq!(locator.locate_node(coord! { x: 3.0, y: 1.0 }, None), Location::Boundary);
        assert_eq!(locator.locate_node(coord! { x: 3.0, y: 5.0 }, None), Location::Interior);
    }

    #[test]
    fn polygonal_node_is_boundary() {
        let geom = read("POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0))");
        let locator = RelatePointLocator::new(&geom, false, BoundaryNodeRule::Mod2);
        assert_eq!(locator.locate_node(coord! { x: 5.0, y: 0.0 }, Some(0)), Location::Boundary);
        assert_eq!(locator.locate(coord! { x: 5.0, y: 5.0 }), Location::Interior);
    }

    #[test]
    fn adjacent_polygons_share_interior() {
        let geom = read(
            "GEOMETRYCOLLECTION (POLYGON ((1 9, 5 9, 5 1, 1 1, 1 9)), POLYGON ((9 9, 9 1, 5 1, 5 9, 9 9)))",
        );
        let locator = RelatePointLocator::new(&geom, false, BoundaryNodeRule::Mod2);
        assert_eq!(locator.locate(coord! { x: 5.0, y: 5.0 }), Location::Interior);
        assert_eq!(locator.locate(coord! { x: 5.0, y: 9.0 }), Location::Boundary);
        assert_eq!(locator.polygonals().len(), 2);
    }

    #[test]
    fn empty_geometry_is_exterior() {
        let geom = read("GEOMETRYCOLLECTION EMPTY");
        let locator = RelatePointLocator::new(&geom, false, BoundaryNodeRule::Mod2);
        assert!(locator.is_empty());
        assert_eq!(locator.locate(coord! { x: 0.0, y: 0.0 }), Location::Exterior);
    }
}

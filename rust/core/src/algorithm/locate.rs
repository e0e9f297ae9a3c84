// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Point-in-area location.
//!
//! Both locators count crossings of a horizontal ray cast from the query
//! point to `+x`. [`SimplePointInAreaLocator`] scans rings directly and is
//! meant for one-shot queries; [`IndexedPointInAreaLocator`] keeps an
//! R-tree of ring segments and pays off over many queries. For valid input
//! they return identical results.

use std::borrow::Borrow;

use geo::algorithm::kernels::Orientation;
use geo::{Coord, Polygon};
use rstar::{RTree, RTreeObject, AABB};

use crate::algorithm::node_topology::orientation;
use crate::coord::Envelope;
use crate::location::Location;

/// Locates points relative to an areal geometry.
pub trait PointOnGeometryLocator {
    fn locate(&self, p: Coord<f64>) -> Location;
}

// ============================================================================
// Ray crossing
// ============================================================================

/// Counts crossings of the ray from `p` to `+x` with a sequence of segments.
///
/// A segment is counted if it crosses the ray upwards-inclusive of its
/// lower endpoint, so each vertex crossing is counted exactly once.
#[derive(Debug, Clone)]
pub struct RayCrossingCounter {
    p: Coord<f64>,
    crossing_count: usize,
    is_point_on_segment: bool,
}

impl RayCrossingCounter {
    pub fn new(p: Coord<f64>) -> Self {
        Self {
            p,
            crossing_count: 0,
            is_point_on_segment: false,
        }
    }

    /// Adds the segment `p1 -> p2` to the count.
    pub fn count_segment(&mut self, p1: Coord<f64>, p2: Coord<f64>) {
        let p = self.p;
        // entirely to the left of the point
        if p1.x < p.x && p2.x < p.x {
            return;
        }
        if p == p2 {
            self.is_point_on_segment = true;
            return;
        }
        if p1.y == p.y && p2.y == p.y {
            let (min_x, max_x) = if p1.x <= p2.x { (p1.x, p2.x) } else { (p2.x, p1.x) };
            if p.x >= min_x && p.x <= max_x {
                self.is_point_on_segment = true;
            }
            return;
        }
        let straddles = (p1.y > p.y && p2.y <= p.y) || (p2.y > p.y && p1.y <= p.y);
        if !straddles {
            return;
        }
        let orient = orientation(p1, p2, p);
        if orient == Orientation::Collinear {
            self.is_point_on_segment = true;
            return;
        }
        // an upward segment crosses if the point lies to its left
        let left = orient == Orientation::CounterClockwise;
        let upward = p2.y >= p1.y;
        if left == upward {
            self.crossing_count += 1;
        }
    }

    pub fn is_on_segment(&self) -> bool {
        self.is_point_on_segment
    }

    /// Location of the point relative to the counted ring(s).
    pub fn location(&self) -> Location {
        if self.is_point_on_segment {
            Location::Boundary
        } else if self.crossing_count % 2 == 1 {
            Location::Interior
        } else {
            Location::Exterior
        }
    }
}

/// Location of `p` relative to the closed ring `ring`.
pub fn locate_point_in_ring(p: Coord<f64>, ring: &[Coord<f64>]) -> Location {
    let mut counter = RayCrossingCounter::new(p);
    for seg in ring.windows(2) {
        counter.count_segment(seg[1], seg[0]);
        if counter.is_on_segment() {
            break;
        }
    }
    counter.location()
}

/// True if `p` lies on the closed segment `p0 -> p1`.
pub fn is_on_segment(p: Coord<f64>, p0: Coord<f64>, p1: Coord<f64>) -> bool {
    let within_x = p.x >= p0.x.min(p1.x) && p.x <= p0.x.max(p1.x);
    let within_y = p.y >= p0.y.min(p1.y) && p.y <= p0.y.max(p1.y);
    within_x && within_y && orientation(p0, p1, p) == Orientation::Collinear
}

/// True if `p` lies on any segment of `line`.
pub fn is_on_line(p: Coord<f64>, line: &[Coord<f64>]) -> bool {
    match line {
        [] => false,
        [only] => *only == p,
        _ => line.windows(2).any(|seg| is_on_segment(p, seg[0], seg[1])),
    }
}

fn locate_point_in_polygon(p: Coord<f64>, polygon: &Polygon<f64>) -> Location {
    let shell = &polygon.exterior().0;
    if shell.is_empty() {
        return Location::Exterior;
    }
    match locate_point_in_ring(p, shell) {
        Location::Interior => {}
        other => return other,
    }
    for hole in polygon.interiors() {
        match locate_point_in_ring(p, &hole.0) {
            Location::Interior => return Location::Exterior,
            Location::Boundary => return Location::Boundary,
            Location::Exterior => {}
        }
    }
    Location::Interior
}

// ============================================================================
// Simple locator
// ============================================================================

/// Unindexed point-in-area locator over a set of polygons.
///
/// The first polygon whose closure contains the point decides the result.
#[derive(Debug, Clone, Copy)]
pub struct SimplePointInAreaLocator<'p, P> {
    polygons: &'p [P],
}

impl<'p, P: Borrow<Polygon<f64>>> SimplePointInAreaLocator<'p, P> {
    pub fn new(polygons: &'p [P]) -> Self {
        Self { polygons }
    }
}

impl<P: Borrow<Polygon<f64>>> PointOnGeometryLocator for SimplePointInAreaLocator<'_, P> {
    fn locate(&self, p: Coord<f64>) -> Location {
        for polygon in self.polygons {
            let polygon = polygon.borrow();
            if !Envelope::of(polygon).contains_coord(p) {
                continue;
            }
            let loc = locate_point_in_polygon(p, polygon);
            if loc != Location::Exterior {
                return loc;
            }
        }
        Location::Exterior
    }
}

// ============================================================================
// Indexed locator
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct RingSegment {
    p0: Coord<f64>,
    p1: Coord<f64>,
}

impl RTreeObject for RingSegment {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.p0.x, self.p0.y], [self.p1.x, self.p1.y])
    }
}

/// Point-in-area locator backed by an R-tree of ring segments.
///
/// Crossings are counted over all rings at once, so holes and the members
/// of a multi-polygon are handled by parity.
#[derive(Debug)]
pub struct IndexedPointInAreaLocator {
    tree: RTree<RingSegment>,
    envelope: Envelope,
}

impl IndexedPointInAreaLocator {
    pub fn new<'p, I>(polygons: I) -> Self
    where
        I: IntoIterator<Item = &'p Polygon<f64>>,
    {
        let mut segments = Vec::new();
        let mut bounds: Option<(Coord<f64>, Coord<f64>)> = None;
        for polygon in polygons {
            for ring in std::iter::once(polygon.exterior()).chain(polygon.interiors()) {
                for seg in ring.0.windows(2) {
                    segments.push(RingSegment {
                        p0: seg[0],
                        p1: seg[1],
                    });
                }
                for c in &ring.0 {
                    bounds = Some(match bounds {
                        None => (*c, *c),
                        Some((lo, hi)) => (
                            Coord {
                                x: lo.x.min(c.x),
                                y: lo.y.min(c.y),
                            },
                            Coord {
                                x: hi.x.max(c.x),
                                y: hi.y.max(c.y),
                            },
                        ),
                    });
                }
            }
        }
        let envelope = match bounds {
            Some((lo, hi)) => Envelope::new(geo::Rect::new(lo, hi)),
            None => Envelope::null(),
        };
        Self {
            tree: RTree::bulk_load(segments),
            envelope,
        }
    }
}

impl PointOnGeometryLocator for IndexedPointInAreaLocator {
    fn locate(&self, p: Coord<f64>) -> Location {
        let Some((_, max)) = self.envelope.bounds() else {
            return Location::Exterior;
        };
        if !self.envelope.contains_coord(p) {
            return Location::Exterior;
        }
        let ray = AABB::from_corners([p.x, p.y], [max.x, p.y]);
        let mut counter = RayCrossingCounter::new(p);
        for seg in self.tree.locate_in_envelope_intersecting(&ray) {
            counter.count_segment(seg.p0, seg.p1);
            if counter.is_on_segment() {
                break;
            }
        }
        counter.location()
    }
}

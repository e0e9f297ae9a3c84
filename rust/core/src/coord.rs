// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Coordinate keys and envelopes.

use std::cmp::Ordering;

use geo::{BoundingRect, Coord, Geometry, Rect};

/// Exact, hashable key for a 2-D coordinate.
///
/// Two coordinates map to the same key iff they compare equal, so `-0.0`
/// and `0.0` share a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordKey {
    x: u64,
    y: u64,
}

impl CoordKey {
    #[inline]
    fn bits(v: f64) -> u64 {
        if v == 0.0 {
            0.0f64.to_bits()
        } else {
            v.to_bits()
        }
    }
}

impl From<Coord<f64>> for CoordKey {
    #[inline]
    fn from(c: Coord<f64>) -> Self {
        Self {
            x: Self::bits(c.x),
            y: Self::bits(c.y),
        }
    }
}

/// Lexicographic (x, then y) coordinate order.
pub fn compare_coords(a: Coord<f64>, b: Coord<f64>) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}

/// An axis-aligned bounding box which may be null (the envelope of an
/// empty geometry).
///
/// A null envelope intersects and covers nothing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Envelope {
    rect: Option<Rect<f64>>,
}

impl Envelope {
    /// The null envelope.
    pub const fn null() -> Self {
        Self { rect: None }
    }

    pub fn new(rect: Rect<f64>) -> Self {
        Self { rect: Some(rect) }
    }

    /// Envelope of any bounded geometry.
    pub fn of<G: BoundingRect<f64>>(geom: &G) -> Self
    where
        G::Output: Into<Option<Rect<f64>>>,
    {
        Self {
            rect: geom.bounding_rect().into(),
        }
    }

    /// Envelope of a geometry.
    pub fn of_geometry(geom: &Geometry<f64>) -> Self {
        Self::of(geom)
    }

    /// Envelope of a single coordinate.
    pub fn of_coord(c: Coord<f64>) -> Self {
        Self::new(Rect::new(c, c))
    }

    pub fn is_null(&self) -> bool {
        self.rect.is_none()
    }

    pub fn rect(&self) -> Option<Rect<f64>> {
        self.rect
    }

    /// Lower-left and upper-right corners.
    pub fn bounds(&self) -> Option<(Coord<f64>, Coord<f64>)> {
        self.rect.map(|r| (r.min(), r.max()))
    }

    pub fn intersects(&self, other: &Envelope) -> bool {
        match (self.bounds(), other.bounds()) {
            (Some((min_a, max_a)), Some((min_b, max_b))) => {
                !(min_b.x > max_a.x || max_b.x < min_a.x || min_b.y > max_a.y || max_b.y < min_a.y)
            }
            _ => false,
        }
    }

    pub fn disjoint(&self, other: &Envelope) -> bool {
        !self.intersects(other)
    }

    /// True if `other` lies inside this envelope (boundary included).
    pub fn covers(&self, other: &Envelope) -> bool {
        match (self.bounds(), other.bounds()) {
            (Some((min_a, max_a)), Some((min_b, max_b))) => {
                min_b.x >= min_a.x && max_b.x <= max_a.x && min_b.y >= min_a.y && max_b.y <= max_a.y
            }
            _ => false,
        }
    }

    pub fn contains_coord(&self, c: Coord<f64>) -> bool {
        self.intersects(&Envelope::of_coord(c))
    }

    /// The common area of two envelopes, null if they are disjoint.
    pub fn intersection(&self, other: &Envelope) -> Envelope {
        if !self.intersects(other) {
            return Envelope::null();
        }
        match (self.bounds(), other.bounds()) {
            (Some((min_a, max_a)), Some((min_b, max_b))) => Envelope::new(Rect::new(
                Coord {
                    x: min_a.x.max(min_b.x),
                    y: min_a.y.max(min_b.y),
                },
                Coord {
                    x: max_a.x.min(max_b.x),
                    y: max_a.y.min(max_b.y),
                },
            )),
            _ => Envelope::null(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{coord, line_string, point};

    #[test]
    fn signed_zero_shares_key() {
        let a = CoordKey::from(coord! { x: 0.0, y: -0.0 });
        let b = CoordKey::from(coord! { x: -0.0, y: 0.0 });
        assert_eq!(a, b);
        assert_ne!(a, CoordKey::from(coord! { x: 0.0, y: 1.0 }));
    }

    #[test]
    fn coordinate_order() {
        let a = coord! { x: 1.0, y: 5.0 };
        let b = coord! { x: 2.0, y: 0.0 };
        assert_eq!(compare_coords(a, b), Ordering::Less);
        assert_eq!(compare_coords(b, a), Ordering::Greater);
        assert_eq!(compare_coords(a, a), Ordering::Equal);
    }

    #[test]
    fn null_envelope_relations() {
        let null = Envelope::null();
        let unit = Envelope::of(&line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)]);
        assert!(null.is_null());
        assert!(!null.intersects(&unit));
        assert!(null.disjoint(&unit));
        assert!(!unit.covers(&null));
        assert_eq!(null, Envelope::null());
    }

    #[test]
    fn envelope_intersection() {
        let a = Envelope::new(Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 10.0, y: 10.0 }));
        let b = Envelope::new(Rect::new(coord! { x: 5.0, y: 5.0 }, coord! { x: 15.0, y: 15.0 }));
        let c = Envelope::new(Rect::new(coord! { x: 20.0, y: 20.0 }, coord! { x: 30.0, y: 30.0 }));
        let ab = a.intersection(&b);
        assert_eq!(
            ab.bounds(),
            Some((coord! { x: 5.0, y: 5.0 }, coord! { x: 10.0, y: 10.0 }))
        );
        assert!(a.intersection(&c).is_null());
        assert!(a.covers(&ab));
        assert!(!a.covers(&b));
        assert!(a.contains_coord(coord! { x: 10.0, y: 0.0 }));
        let p = Envelope::of(&point! { x: 3.0, y: 4.0 });
        assert!(a.covers(&p));
    }
}

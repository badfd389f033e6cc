//! # Profile
//!
//! Immutable planar regions used as extrusion, loft and revolve input.
//!
//! A [`Profile`] wraps a `geo` multipolygon kept in canonical orientation:
//! outer rings counter-clockwise, hole rings clockwise. Boolean operations
//! delegate to `geo`'s overlay engine; every operation returns a new value.
//!
//! ## Example
//!
//! ```rust
//! use gridkit_csg::Profile;
//! use glam::DVec2;
//!
//! let disc = Profile::circle(2.0, 16).unwrap();
//! let right_half = Profile::rectangle(DVec2::new(2.0, 0.0), DVec2::splat(2.0)).unwrap();
//! let half_disc = disc.intersection(&right_half);
//! assert!((half_disc.area() * 2.0 - disc.area()).abs() < 1e-6);
//! ```

mod path;

pub use path::Path2D;

use crate::error::{check_positive, check_resolution, CsgError, CsgResult};
use crate::ops::sin_cos_degrees;
use geo::coordinate_position::{CoordPos, CoordinatePosition};
use geo::orient::Direction;
use geo::{
    AffineOps, AffineTransform, Area, BooleanOps, BoundingRect, ConvexHull, Coord, LineString,
    MultiPoint, MultiPolygon, Orient, Point, Polygon, TriangulateEarcut,
};
use glam::DVec2;
use gridkit_config::constants::RELATIVE_AREA_EPSILON;

/// A planar region: zero or more polygons, each possibly with holes.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    region: MultiPolygon<f64>,
}

impl Default for Profile {
    fn default() -> Self {
        Self::empty()
    }
}

impl Profile {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// The empty region.
    pub fn empty() -> Self {
        Self {
            region: MultiPolygon::new(Vec::new()),
        }
    }

    /// Normalizes orientation, removes straight-through vertices and drops
    /// zero-area pieces.
    fn from_region(region: MultiPolygon<f64>) -> Self {
        let polygons = region
            .orient(Direction::Default)
            .into_iter()
            .map(|polygon| {
                Polygon::new(
                    drop_collinear(polygon.exterior()),
                    polygon.interiors().iter().map(drop_collinear).collect(),
                )
            })
            .filter(encloses_area)
            .collect();
        Self {
            region: MultiPolygon::new(polygons),
        }
    }

    /// Regular `resolution`-gon inscribed in a circle about the origin, with
    /// its first vertex at angle 0.
    pub fn circle(radius: f64, resolution: u32) -> CsgResult<Self> {
        check_positive("circle radius", radius)?;
        check_resolution(resolution)?;
        let points: Vec<DVec2> = (0..resolution)
            .map(|i| {
                let (sin, cos) = sin_cos_degrees(360.0 * f64::from(i) / f64::from(resolution));
                DVec2::new(radius * cos, radius * sin)
            })
            .collect();
        Self::polygon(&points)
    }

    /// Axis-aligned rectangle given its center and half extents.
    pub fn rectangle(center: DVec2, half_extents: DVec2) -> CsgResult<Self> {
        check_positive("rectangle half width", half_extents.x)?;
        check_positive("rectangle half height", half_extents.y)?;
        let min = center - half_extents;
        let max = center + half_extents;
        Self::polygon(&[
            min,
            DVec2::new(max.x, min.y),
            max,
            DVec2::new(min.x, max.y),
        ])
    }

    /// Square centered on the origin.
    pub fn square(half_width: f64) -> CsgResult<Self> {
        Self::rectangle(DVec2::ZERO, DVec2::splat(half_width))
    }

    /// Simple polygon through `points`, in either winding order.
    pub fn polygon(points: &[DVec2]) -> CsgResult<Self> {
        if points.len() < 3 {
            return Err(CsgError::degenerate(format!(
                "polygon needs at least 3 points, got {}",
                points.len()
            )));
        }
        if points.iter().any(|p| !p.is_finite()) {
            return Err(CsgError::degenerate("polygon has a non-finite point"));
        }
        let ring: LineString<f64> = points.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
        let polygon = Polygon::new(ring, Vec::new());
        if !encloses_area(&polygon) {
            return Err(CsgError::degenerate("polygon encloses no area"));
        }
        Ok(Self::from_region(MultiPolygon::new(vec![polygon])))
    }

    /// Convex hull of the outlines of all `profiles`.
    ///
    /// Returns the empty profile when the points span no area.
    pub fn hull<'a, I>(profiles: I) -> Profile
    where
        I: IntoIterator<Item = &'a Profile>,
    {
        let points: Vec<Point<f64>> = profiles
            .into_iter()
            .flat_map(|profile| profile.region.iter())
            .flat_map(|polygon| polygon.exterior().coords().copied())
            .map(Point::from)
            .collect();
        if points.len() < 3 {
            return Profile::empty();
        }
        let hull = MultiPoint::new(points).convex_hull();
        Self::from_region(MultiPolygon::new(vec![hull]))
    }

    // =========================================================================
    // BOOLEANS
    // =========================================================================

    /// Region covered by either profile.
    pub fn union(&self, other: &Profile) -> Profile {
        Self::from_region(self.region.union(&other.region))
    }

    /// Region covered by both profiles.
    pub fn intersection(&self, other: &Profile) -> Profile {
        Self::from_region(self.region.intersection(&other.region))
    }

    /// Region of `self` outside `other`.
    pub fn difference(&self, other: &Profile) -> Profile {
        Self::from_region(self.region.difference(&other.region))
    }

    // =========================================================================
    // TRANSFORMS
    // =========================================================================

    fn affine(&self, transform: AffineTransform<f64>) -> Profile {
        Self::from_region(self.region.affine_transform(&transform))
    }

    /// Moves the profile by `offset`.
    pub fn translate(&self, offset: DVec2) -> Profile {
        self.affine(AffineTransform::translate(offset.x, offset.y))
    }

    /// Rotates counter-clockwise about the origin by `degrees`.
    pub fn rotate(&self, degrees: f64) -> Profile {
        let (sin, cos) = sin_cos_degrees(degrees);
        self.affine(AffineTransform::new(cos, -sin, 0.0, sin, cos, 0.0))
    }

    /// Scales uniformly about the origin.
    pub fn scale(&self, factor: f64) -> Profile {
        self.affine(AffineTransform::new(factor, 0.0, 0.0, 0.0, factor, 0.0))
    }

    /// Mirrors across the Y axis (negates X).
    pub fn mirror_x(&self) -> Profile {
        self.affine(AffineTransform::new(-1.0, 0.0, 0.0, 0.0, 1.0, 0.0))
    }

    /// Mirrors across the X axis (negates Y).
    pub fn mirror_y(&self) -> Profile {
        self.affine(AffineTransform::new(1.0, 0.0, 0.0, 0.0, -1.0, 0.0))
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// True when the region covers no area.
    pub fn is_empty(&self) -> bool {
        self.region.0.is_empty()
    }

    /// Number of disjoint polygons.
    pub fn polygon_count(&self) -> usize {
        self.region.0.len()
    }

    /// Enclosed area.
    pub fn area(&self) -> f64 {
        self.region.unsigned_area()
    }

    /// Bounding box as (min, max), `None` when empty.
    pub fn bounding_box(&self) -> Option<(DVec2, DVec2)> {
        self.region
            .bounding_rect()
            .map(|rect| (coord_to_vec(rect.min()), coord_to_vec(rect.max())))
    }

    /// True when `point` is inside the region or on its boundary.
    pub fn contains_point(&self, point: DVec2) -> bool {
        self.region
            .coordinate_position(&Coord {
                x: point.x,
                y: point.y,
            })
            != CoordPos::Outside
    }

    /// True when the region has the same shape as `other` up to `tolerance`
    /// of symmetric-difference area.
    pub fn approx_eq(&self, other: &Profile, tolerance: f64) -> bool {
        self.region.xor(&other.region).unsigned_area() <= tolerance
    }

    /// True for a single hole-free polygon that turns left at every vertex.
    pub fn is_convex(&self) -> bool {
        match self.region.0.as_slice() {
            [polygon] => {
                polygon.interiors().is_empty() && ring_is_convex(&ring_points(polygon.exterior()))
            }
            _ => false,
        }
    }

    /// Every ring without its closing point: outer rings counter-clockwise,
    /// holes clockwise.
    pub fn rings(&self) -> Vec<Vec<DVec2>> {
        self.region
            .iter()
            .flat_map(|polygon| std::iter::once(polygon.exterior()).chain(polygon.interiors()))
            .map(ring_points)
            .collect()
    }

    /// Counter-clockwise triangles covering the region.
    pub fn triangles(&self) -> Vec<[DVec2; 3]> {
        self.region.iter().flat_map(triangulate).collect()
    }

    /// Counter-clockwise convex facets covering the region.
    ///
    /// Convex hole-free polygons are kept whole; the rest are triangulated.
    /// Used for extrusion caps so simple profiles give single cap faces.
    pub fn convex_facets(&self) -> Vec<Vec<DVec2>> {
        let mut facets = Vec::new();
        for polygon in self.region.iter() {
            let ring = ring_points(polygon.exterior());
            if polygon.interiors().is_empty() && ring_is_convex(&ring) {
                facets.push(ring);
            } else {
                facets.extend(triangulate(polygon).into_iter().map(Vec::from));
            }
        }
        facets
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn coord_to_vec(coord: Coord<f64>) -> DVec2 {
    DVec2::new(coord.x, coord.y)
}

/// Ring vertices without the repeated closing coordinate.
fn ring_points(ring: &LineString<f64>) -> Vec<DVec2> {
    let mut points: Vec<DVec2> = ring.coords().map(|c| coord_to_vec(*c)).collect();
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    points
}

/// Whether `polygon` has area that is not negligible next to its own extent.
fn encloses_area(polygon: &Polygon<f64>) -> bool {
    let Some(rect) = polygon.bounding_rect() else {
        return false;
    };
    let extent = rect.width().powi(2) + rect.height().powi(2);
    polygon.unsigned_area() > RELATIVE_AREA_EPSILON * extent
}

/// Ring without the vertices lying exactly on the line through their
/// neighbours.
fn drop_collinear(ring: &LineString<f64>) -> LineString<f64> {
    let points = ring_points(ring);
    let n = points.len();
    if n < 3 {
        return ring.clone();
    }
    (0..n)
        .filter(|&i| orientation(points[(i + n - 1) % n], points[i], points[(i + 1) % n]) != 0.0)
        .map(|i| Coord {
            x: points[i].x,
            y: points[i].y,
        })
        .collect()
}

/// Earcut triangulation of one polygon, every triangle counter-clockwise.
fn triangulate(polygon: &Polygon<f64>) -> Vec<[DVec2; 3]> {
    let raw = polygon.earcut_triangles_raw();
    let vertex = |i: usize| DVec2::new(raw.vertices[2 * i], raw.vertices[2 * i + 1]);
    raw.triangle_indices
        .chunks_exact(3)
        .filter_map(|tri| {
            let (a, b, c) = (vertex(tri[0]), vertex(tri[1]), vertex(tri[2]));
            let turn = orientation(a, b, c);
            if turn > 0.0 {
                Some([a, b, c])
            } else if turn < 0.0 {
                Some([a, c, b])
            } else {
                None
            }
        })
        .collect()
}

fn ring_is_convex(ring: &[DVec2]) -> bool {
    let n = ring.len();
    n >= 3 && (0..n).all(|i| orientation(ring[i], ring[(i + 1) % n], ring[(i + 2) % n]) >= 0.0)
}

/// Exact orientation: positive for a left turn a -> b -> c.
fn orientation(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    let coord = |p: DVec2| robust::Coord { x: p.x, y: p.y };
    robust::orient2d(coord(a), coord(b), coord(c))
}

#[cfg(test)]
mod tests;

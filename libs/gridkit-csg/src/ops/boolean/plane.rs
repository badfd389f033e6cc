//! # Splitting Plane
//!
//! Oriented plane `normal · p = w` with point classification.

use glam::DVec3;
use gridkit_config::constants::{PLANE_EPSILON, RELATIVE_AREA_EPSILON};

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Side of a plane a point or polygon lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Within [`PLANE_EPSILON`] of the plane.
    Coplanar,
    /// Positive side (the normal points toward it).
    Front,
    /// Negative side.
    Back,
    /// Vertices on both sides (polygons only).
    Spanning,
}

impl Side {
    /// Combines the sides of two vertices into the side of their polygon.
    #[inline]
    pub fn merge(self, other: Side) -> Side {
        match (self, other) {
            (Side::Coplanar, side) | (side, Side::Coplanar) => side,
            (a, b) if a == b => a,
            _ => Side::Spanning,
        }
    }
}

// =============================================================================
// PLANE
// =============================================================================

/// An oriented plane with unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: DVec3,
    w: f64,
}

impl Plane {
    /// Creates a plane from a unit normal and its offset from the origin.
    pub fn new(normal: DVec3, w: f64) -> Self {
        Self { normal, w }
    }

    /// Plane through three points, oriented by their counter-clockwise order.
    ///
    /// Returns `None` for collinear points.
    pub fn from_points(a: DVec3, b: DVec3, c: DVec3) -> Option<Self> {
        Self::from_polygon(&[a, b, c])
    }

    /// Best-fit plane of a polygon using Newell's method.
    ///
    /// Unlike a plane through the first three vertices, this stays stable
    /// when some of those vertices are nearly collinear.
    ///
    /// Returns `None` when the enclosed area is negligible next to the
    /// polygon's own extent, whatever its absolute size.
    pub fn from_polygon(vertices: &[DVec3]) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let mut normal = DVec3::ZERO;
        let mut centroid = DVec3::ZERO;
        let (mut min, mut max) = (vertices[0], vertices[0]);
        for (i, current) in vertices.iter().enumerate() {
            let next = vertices[(i + 1) % vertices.len()];
            normal.x += (current.y - next.y) * (current.z + next.z);
            normal.y += (current.z - next.z) * (current.x + next.x);
            normal.z += (current.x - next.x) * (current.y + next.y);
            centroid += *current;
            min = min.min(*current);
            max = max.max(*current);
        }
        // Newell's normal has length 2 * area.
        let length = normal.length();
        let extent = (max - min).length_squared();
        // Negated so NaN coordinates are rejected too.
        if !(length > 2.0 * RELATIVE_AREA_EPSILON * extent) {
            return None;
        }
        let normal = normal / length;
        let centroid = centroid / vertices.len() as f64;
        Some(Self {
            normal,
            w: normal.dot(centroid),
        })
    }

    /// Unit normal.
    #[inline]
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Offset along the normal.
    #[inline]
    pub fn w(&self) -> f64 {
        self.w
    }

    /// The same plane facing the other way.
    #[inline]
    pub fn flipped(&self) -> Plane {
        Plane {
            normal: -self.normal,
            w: -self.w,
        }
    }

    /// Signed distance, positive in front.
    #[inline]
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.w
    }

    /// Classifies a point with tolerance [`PLANE_EPSILON`].
    #[inline]
    pub fn side_of(&self, point: DVec3) -> Side {
        let distance = self.signed_distance(point);
        if distance > PLANE_EPSILON {
            Side::Front
        } else if distance < -PLANE_EPSILON {
            Side::Back
        } else {
            Side::Coplanar
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_points_orientation() {
        let plane = Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::Y).unwrap();
        assert_relative_eq!(plane.normal().z, 1.0);
        assert_relative_eq!(plane.w(), 0.0);
    }

    #[test]
    fn test_collinear_points_rejected() {
        assert!(Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::X * 2.0).is_none());
        assert!(Plane::from_polygon(&[DVec3::ZERO, DVec3::X]).is_none());
    }

    #[test]
    fn test_tiny_polygon_keeps_its_plane() {
        let scale = 1e-7;
        let hexagon: Vec<DVec3> = (0..6)
            .map(|i| {
                let angle = f64::from(i) * std::f64::consts::FRAC_PI_3;
                DVec3::new(angle.cos() * scale, angle.sin() * scale, 5.0)
            })
            .collect();
        let plane = Plane::from_polygon(&hexagon).unwrap();
        assert_relative_eq!(plane.normal().z, 1.0);
        assert_relative_eq!(plane.w(), 5.0);
    }

    #[test]
    fn test_sliver_rejected_at_any_scale() {
        for scale in [1e-6, 1.0, 1e6] {
            let sliver = [
                DVec3::ZERO,
                DVec3::new(scale, 0.0, 0.0),
                DVec3::new(2.0 * scale, scale * 1e-15, 0.0),
            ];
            assert!(Plane::from_polygon(&sliver).is_none());
        }
    }

    #[test]
    fn test_newell_on_offset_quad() {
        let quad = [
            DVec3::new(0.0, 0.0, 3.0),
            DVec3::new(2.0, 0.0, 3.0),
            DVec3::new(2.0, 2.0, 3.0),
            DVec3::new(0.0, 2.0, 3.0),
        ];
        let plane = Plane::from_polygon(&quad).unwrap();
        assert_relative_eq!(plane.normal().z, 1.0);
        assert_relative_eq!(plane.w(), 3.0);
    }

    #[test]
    fn test_side_classification() {
        let plane = Plane::new(DVec3::Z, 1.0);
        assert_eq!(plane.side_of(DVec3::new(0.0, 0.0, 2.0)), Side::Front);
        assert_eq!(plane.side_of(DVec3::new(5.0, 5.0, 0.0)), Side::Back);
        assert_eq!(plane.side_of(DVec3::new(5.0, 5.0, 1.0 + 1e-7)), Side::Coplanar);
        assert_eq!(plane.flipped().side_of(DVec3::ZERO), Side::Front);
    }

    #[test]
    fn test_side_merge() {
        assert_eq!(Side::Coplanar.merge(Side::Front), Side::Front);
        assert_eq!(Side::Back.merge(Side::Back), Side::Back);
        assert_eq!(Side::Front.merge(Side::Back), Side::Spanning);
        assert_eq!(Side::Spanning.merge(Side::Coplanar), Side::Spanning);
    }
}

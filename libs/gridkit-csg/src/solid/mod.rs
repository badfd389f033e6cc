//! # Solid
//!
//! Immutable 3D region stored as a closed boundary of convex planar
//! polygons whose normals point outward.
//!
//! Solids come from primitives ([`Solid::cuboid`], [`Solid::cylinder`]) or
//! from profiles through [`linear_extrude`](crate::linear_extrude),
//! [`loft`](crate::loft) and [`rotate_extrude`](crate::rotate_extrude), and
//! are combined with BSP booleans. Every operation returns a new solid.

use crate::error::{check_positive, check_resolution, CsgError, CsgResult};
use crate::mesh::Mesh;
use crate::ops::boolean::{self, Polygon};
use crate::ops::sin_cos_degrees;
use glam::{DMat4, DVec3, DVec4};
use gridkit_config::constants::EPSILON;

/// A closed polyhedral solid.
///
/// # Example
///
/// ```rust
/// use gridkit_csg::Solid;
/// use glam::DVec3;
///
/// let post = Solid::cylinder(0.0, 10.0, 2.0, 16).unwrap();
/// let base = Solid::cuboid(DVec3::new(-5.0, -5.0, -2.0), DVec3::new(5.0, 5.0, 0.0)).unwrap();
/// let part = base.union(&post).rotate_x(90.0);
/// let (min, max) = part.bounding_box().unwrap();
/// assert!((max.y - 2.0).abs() < 1e-9 && (min.y + 10.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solid {
    polygons: Vec<Polygon>,
}

impl Solid {
    /// The empty solid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps boundary polygons. The caller guarantees they enclose a volume.
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Builds a solid from vertex loops, dropping zero-area faces.
    pub fn from_faces<I>(faces: I) -> Self
    where
        I: IntoIterator<Item = Vec<DVec3>>,
    {
        Self {
            polygons: faces.into_iter().filter_map(Polygon::new).collect(),
        }
    }

    // =========================================================================
    // PRIMITIVES
    // =========================================================================

    /// Axis-aligned box spanning two opposite corners, in either order.
    pub fn cuboid(corner1: DVec3, corner2: DVec3) -> CsgResult<Self> {
        let min = corner1.min(corner2);
        let max = corner1.max(corner2);
        if !(min.is_finite() && max.is_finite()) || (max - min).min_element() <= EPSILON {
            return Err(CsgError::degenerate(format!(
                "cuboid from {corner1} to {corner2} has no volume"
            )));
        }
        let corner = |x: bool, y: bool, z: bool| {
            DVec3::new(
                if x { max.x } else { min.x },
                if y { max.y } else { min.y },
                if z { max.z } else { min.z },
            )
        };
        let (f, t) = (false, true);
        Ok(Self::from_faces([
            vec![corner(f, f, f), corner(f, t, f), corner(t, t, f), corner(t, f, f)],
            vec![corner(f, f, t), corner(t, f, t), corner(t, t, t), corner(f, t, t)],
            vec![corner(f, f, f), corner(t, f, f), corner(t, f, t), corner(f, f, t)],
            vec![corner(f, t, f), corner(f, t, t), corner(t, t, t), corner(t, t, f)],
            vec![corner(f, f, f), corner(f, f, t), corner(f, t, t), corner(f, t, f)],
            vec![corner(t, f, f), corner(t, t, f), corner(t, t, t), corner(t, f, t)],
        ]))
    }

    /// Upright cylinder on the Z axis from `z0` to `z1`.
    ///
    /// The cross-section is a `resolution`-gon inscribed in the circle with
    /// its first vertex at angle 0.
    pub fn cylinder(z0: f64, z1: f64, radius: f64, resolution: u32) -> CsgResult<Self> {
        check_positive("cylinder radius", radius)?;
        check_resolution(resolution)?;
        let (bottom, top) = (z0.min(z1), z0.max(z1));
        check_positive("cylinder height", top - bottom)?;

        let ring: Vec<(f64, f64)> = (0..resolution)
            .map(|i| {
                let (sin, cos) = sin_cos_degrees(360.0 * f64::from(i) / f64::from(resolution));
                (radius * cos, radius * sin)
            })
            .collect();
        let at = |(x, y): (f64, f64), z: f64| DVec3::new(x, y, z);

        let mut faces = Vec::with_capacity(ring.len() + 2);
        faces.push(ring.iter().rev().map(|p| at(*p, bottom)).collect());
        faces.push(ring.iter().map(|p| at(*p, top)).collect());
        for (i, p) in ring.iter().enumerate() {
            let q = ring[(i + 1) % ring.len()];
            faces.push(vec![at(*p, bottom), at(q, bottom), at(q, top), at(*p, top)]);
        }
        Ok(Self::from_faces(faces))
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Boundary polygons.
    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Number of boundary polygons.
    #[inline]
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// True for the empty solid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    // =========================================================================
    // BOOLEANS
    // =========================================================================

    /// Region inside either solid.
    pub fn union(&self, other: &Solid) -> Solid {
        boolean::union(self, other)
    }

    /// Region inside `self` but not `other`.
    pub fn difference(&self, other: &Solid) -> Solid {
        boolean::difference(self, other)
    }

    /// Region inside both solids.
    pub fn intersection(&self, other: &Solid) -> Solid {
        boolean::intersection(self, other)
    }

    /// Union of any number of solids; empty input gives the empty solid.
    pub fn union_all<'a, I>(solids: I) -> Solid
    where
        I: IntoIterator<Item = &'a Solid>,
    {
        solids
            .into_iter()
            .fold(Solid::new(), |acc, solid| acc.union(solid))
    }

    /// `self` minus every cutter.
    pub fn difference_all<'a, I>(&self, cutters: I) -> Solid
    where
        I: IntoIterator<Item = &'a Solid>,
    {
        cutters
            .into_iter()
            .fold(self.clone(), |acc, cutter| acc.difference(cutter))
    }

    // =========================================================================
    // TRANSFORMS
    // =========================================================================

    /// Applies an affine transform.
    ///
    /// Mirroring transforms (negative determinant) reverse every polygon so
    /// normals keep pointing outward.
    pub fn transform(&self, matrix: &DMat4) -> Solid {
        let reverse = matrix.determinant() < 0.0;
        Solid {
            polygons: self
                .polygons
                .iter()
                .filter_map(|p| p.transformed(matrix, reverse))
                .collect(),
        }
    }

    /// Moves the solid by `offset`.
    pub fn translate(&self, offset: DVec3) -> Solid {
        self.transform(&DMat4::from_translation(offset))
    }

    /// Scales about the origin; negative factors mirror.
    pub fn scale(&self, factors: DVec3) -> Solid {
        self.transform(&DMat4::from_scale(factors))
    }

    /// Rotates about the X axis by `degrees` (right-handed).
    pub fn rotate_x(&self, degrees: f64) -> Solid {
        let (s, c) = sin_cos_degrees(degrees);
        self.transform(&DMat4::from_cols(
            DVec4::X,
            DVec4::new(0.0, c, s, 0.0),
            DVec4::new(0.0, -s, c, 0.0),
            DVec4::W,
        ))
    }

    /// Rotates about the Y axis by `degrees` (right-handed).
    pub fn rotate_y(&self, degrees: f64) -> Solid {
        let (s, c) = sin_cos_degrees(degrees);
        self.transform(&DMat4::from_cols(
            DVec4::new(c, 0.0, -s, 0.0),
            DVec4::Y,
            DVec4::new(s, 0.0, c, 0.0),
            DVec4::W,
        ))
    }

    /// Rotates about the Z axis by `degrees` (right-handed).
    pub fn rotate_z(&self, degrees: f64) -> Solid {
        let (s, c) = sin_cos_degrees(degrees);
        self.transform(&DMat4::from_cols(
            DVec4::new(c, s, 0.0, 0.0),
            DVec4::new(-s, c, 0.0, 0.0),
            DVec4::Z,
            DVec4::W,
        ))
    }

    /// Mirrors across the YZ plane (negates X).
    pub fn mirror_x(&self) -> Solid {
        self.scale(DVec3::new(-1.0, 1.0, 1.0))
    }

    /// Mirrors across the XZ plane (negates Y).
    pub fn mirror_y(&self) -> Solid {
        self.scale(DVec3::new(1.0, -1.0, 1.0))
    }

    /// Mirrors across the XY plane (negates Z).
    pub fn mirror_z(&self) -> Solid {
        self.scale(DVec3::new(1.0, 1.0, -1.0))
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Axis-aligned bounding box as (min, max), `None` when empty.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        let mut points = self.polygons.iter().flat_map(|p| p.vertices().iter());
        let first = *points.next()?;
        Some(points.fold((first, first), |(min, max), v| (min.min(*v), max.max(*v))))
    }

    /// Enclosed volume via the divergence theorem.
    pub fn volume(&self) -> f64 {
        self.polygons
            .iter()
            .flat_map(Polygon::triangles)
            .map(|[a, b, c]| a.dot(b.cross(c)))
            .sum::<f64>()
            / 6.0
    }

    /// Total boundary area.
    pub fn surface_area(&self) -> f64 {
        self.polygons.iter().map(Polygon::area).sum()
    }

    /// Point-in-solid test by ray-crossing parity.
    ///
    /// Points on the boundary may report either answer.
    pub fn contains_point(&self, point: DVec3) -> bool {
        // Skewed direction so the ray does not graze axis-aligned edges.
        let direction = DVec3::new(0.577_215_664_9, 0.693_147_180_6, 0.414_213_562_4).normalize();
        let crossings = self
            .polygons
            .iter()
            .flat_map(Polygon::triangles)
            .filter(|triangle| ray_hits_triangle(point, direction, triangle))
            .count();
        crossings % 2 == 1
    }

    /// Triangulates the boundary into a welded [`Mesh`].
    pub fn to_mesh(&self) -> Mesh {
        let mut mesh = Mesh::new();
        for [a, b, c] in self.polygons.iter().flat_map(Polygon::triangles) {
            let a = mesh.weld_vertex(a);
            let b = mesh.weld_vertex(b);
            let c = mesh.weld_vertex(c);
            mesh.add_triangle(a, b, c);
        }
        mesh
    }
}

/// Möller–Trumbore intersection of a ray with a triangle, ignoring hits
/// behind the origin.
fn ray_hits_triangle(origin: DVec3, direction: DVec3, [a, b, c]: &[DVec3; 3]) -> bool {
    let edge1 = *b - *a;
    let edge2 = *c - *a;
    let p = direction.cross(edge2);
    let det = edge1.dot(p);
    // Parallel test scaled by the triangle so small parts still register hits.
    if det.abs() < EPSILON * edge1.length() * edge2.length() {
        return false;
    }
    let inv_det = 1.0 / det;
    let s = origin - *a;
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return false;
    }
    let q = s.cross(edge1);
    let v = direction.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return false;
    }
    edge2.dot(q) * inv_det > EPSILON
}

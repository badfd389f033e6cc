//! # Boundary Polygon
//!
//! Convex planar polygon used both as a solid's boundary face and as the
//! unit of work inside the BSP tree.

use super::plane::{Plane, Side};
use glam::{DMat4, DVec3};

/// A convex planar polygon with its supporting plane.
///
/// Vertices wind counter-clockwise when seen from the front of the plane,
/// so the plane normal points out of the solid.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<DVec3>,
    plane: Plane,
}

impl Polygon {
    /// Creates a polygon, computing its plane from the vertices.
    ///
    /// Returns `None` for fewer than three vertices or zero area.
    pub fn new(vertices: Vec<DVec3>) -> Option<Self> {
        let plane = Plane::from_polygon(&vertices)?;
        Some(Self { vertices, plane })
    }

    /// Vertices in winding order.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Supporting plane.
    #[inline]
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Reverses the winding and the plane in place.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane = self.plane.flipped();
    }

    /// Returns the polygon facing the other way.
    pub fn flipped(&self) -> Polygon {
        let mut polygon = self.clone();
        polygon.flip();
        polygon
    }

    /// Applies an affine transform.
    ///
    /// `reverse` restores outward orientation after a mirroring transform.
    pub fn transformed(&self, matrix: &DMat4, reverse: bool) -> Option<Polygon> {
        let mut vertices: Vec<DVec3> = self
            .vertices
            .iter()
            .map(|v| matrix.transform_point3(*v))
            .collect();
        if reverse {
            vertices.reverse();
        }
        Polygon::new(vertices)
    }

    /// Triangle fan `(v0, vi, vi+1)` over the convex outline.
    pub fn triangles(&self) -> impl Iterator<Item = [DVec3; 3]> + '_ {
        let first = self.vertices[0];
        self.vertices
            .windows(2)
            .skip(1)
            .map(move |pair| [first, pair[0], pair[1]])
    }

    /// Area of the polygon.
    pub fn area(&self) -> f64 {
        self.triangles()
            .map(|[a, b, c]| (b - a).cross(c - a).length() / 2.0)
            .sum()
    }

    /// Distributes this polygon against `plane`.
    ///
    /// Coplanar polygons go to `coplanar_front` or `coplanar_back` depending
    /// on whether they face the same way as the plane. Spanning polygons are
    /// cut in two; both halves keep this polygon's plane.
    pub fn split(
        &self,
        plane: &Plane,
        coplanar_front: &mut Vec<Polygon>,
        coplanar_back: &mut Vec<Polygon>,
        front: &mut Vec<Polygon>,
        back: &mut Vec<Polygon>,
    ) {
        let sides: Vec<Side> = self.vertices.iter().map(|v| plane.side_of(*v)).collect();
        let side = sides.iter().fold(Side::Coplanar, |acc, s| acc.merge(*s));

        match side {
            Side::Coplanar => {
                if self.plane.normal().dot(plane.normal()) > 0.0 {
                    coplanar_front.push(self.clone());
                } else {
                    coplanar_back.push(self.clone());
                }
            }
            Side::Front => front.push(self.clone()),
            Side::Back => back.push(self.clone()),
            Side::Spanning => {
                let count = self.vertices.len();
                let mut front_vertices = Vec::with_capacity(count + 1);
                let mut back_vertices = Vec::with_capacity(count + 1);

                for i in 0..count {
                    let j = (i + 1) % count;
                    let (vi, vj) = (self.vertices[i], self.vertices[j]);
                    let (si, sj) = (sides[i], sides[j]);

                    if si != Side::Back {
                        front_vertices.push(vi);
                    }
                    if si != Side::Front {
                        back_vertices.push(vi);
                    }
                    if si.merge(sj) == Side::Spanning {
                        let di = plane.signed_distance(vi);
                        let dj = plane.signed_distance(vj);
                        let crossing = vi.lerp(vj, di / (di - dj));
                        front_vertices.push(crossing);
                        back_vertices.push(crossing);
                    }
                }

                if front_vertices.len() >= 3 {
                    front.push(Polygon {
                        vertices: front_vertices,
                        plane: self.plane,
                    });
                }
                if back_vertices.len() >= 3 {
                    back.push(Polygon {
                        vertices: back_vertices,
                        plane: self.plane,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> Polygon {
        Polygon::new(vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_degenerate_rejected() {
        assert!(Polygon::new(vec![DVec3::ZERO, DVec3::X]).is_none());
        assert!(Polygon::new(vec![DVec3::ZERO, DVec3::X, DVec3::X * 3.0]).is_none());
    }

    #[test]
    fn test_flip_reverses_normal() {
        let square = unit_square();
        let flipped = square.flipped();
        assert_relative_eq!(flipped.plane().normal().z, -1.0);
        assert_eq!(flipped.vertices()[0], square.vertices()[3]);
    }

    #[test]
    fn test_area_of_square() {
        assert_relative_eq!(unit_square().area(), 1.0);
        assert_eq!(unit_square().triangles().count(), 2);
    }

    #[test]
    fn test_split_spanning() {
        let plane = Plane::new(DVec3::X, 0.25);
        let (mut cf, mut cb, mut front, mut back) = (vec![], vec![], vec![], vec![]);
        unit_square().split(&plane, &mut cf, &mut cb, &mut front, &mut back);

        assert!(cf.is_empty() && cb.is_empty());
        assert_eq!(front.len(), 1);
        assert_eq!(back.len(), 1);
        assert_relative_eq!(front[0].area(), 0.75, epsilon = 1e-12);
        assert_relative_eq!(back[0].area(), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_split_coplanar() {
        let (mut cf, mut cb, mut front, mut back) = (vec![], vec![], vec![], vec![]);
        unit_square().split(
            &Plane::new(DVec3::Z, 0.0),
            &mut cf,
            &mut cb,
            &mut front,
            &mut back,
        );
        unit_square().split(
            &Plane::new(-DVec3::Z, 0.0),
            &mut cf,
            &mut cb,
            &mut front,
            &mut back,
        );
        assert_eq!(cf.len(), 1);
        assert_eq!(cb.len(), 1);
        assert!(front.is_empty() && back.is_empty());
    }

    #[test]
    fn test_transform_with_mirror() {
        let mirror = DMat4::from_scale(DVec3::new(-1.0, 1.0, 1.0));
        let mirrored = unit_square().transformed(&mirror, true).unwrap();
        assert_relative_eq!(mirrored.plane().normal().z, 1.0);
        let kept = unit_square().transformed(&mirror, false).unwrap();
        assert_relative_eq!(kept.plane().normal().z, -1.0);
    }
}

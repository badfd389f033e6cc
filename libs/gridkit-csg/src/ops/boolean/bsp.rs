//! # BSP Tree
//!
//! Binary space partitioning tree over boundary polygons, following the
//! csg.js construction by Evan Wallace.
//!
//! Each node holds a splitting plane, the polygons coplanar with it and the
//! subtrees in front of and behind it. Recursion goes through
//! [`stacker::maybe_grow`] so deep trees from finely tessellated solids
//! cannot exhaust the thread stack.

use super::plane::Plane;
use super::polygon::Polygon;
use gridkit_config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use stacker::maybe_grow;

/// A node of the BSP tree.
#[derive(Debug, Clone, Default)]
pub struct BspNode {
    plane: Option<Plane>,
    polygons: Vec<Polygon>,
    front: Option<Box<BspNode>>,
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Builds a tree from polygons.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut node = Self::default();
        node.build(polygons);
        node
    }

    /// Inserts polygons, splitting them along existing planes.
    ///
    /// The first polygon reaching an empty node supplies its plane.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        if polygons.is_empty() {
            return;
        }
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            let plane = *self.plane.get_or_insert(*polygons[0].plane());

            let mut coplanar_front = Vec::new();
            let mut coplanar_back = Vec::new();
            let mut front = Vec::new();
            let mut back = Vec::new();
            for polygon in &polygons {
                polygon.split(
                    &plane,
                    &mut coplanar_front,
                    &mut coplanar_back,
                    &mut front,
                    &mut back,
                );
            }
            self.polygons.append(&mut coplanar_front);
            self.polygons.append(&mut coplanar_back);

            if !front.is_empty() {
                self.front.get_or_insert_with(Box::default).build(front);
            }
            if !back.is_empty() {
                self.back.get_or_insert_with(Box::default).build(back);
            }
        });
    }

    /// Turns the tree inside out: solid space becomes empty space.
    pub fn invert(&mut self) {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            for polygon in &mut self.polygons {
                polygon.flip();
            }
            if let Some(plane) = self.plane.as_mut() {
                *plane = plane.flipped();
            }
            if let Some(front) = self.front.as_mut() {
                front.invert();
            }
            if let Some(back) = self.back.as_mut() {
                back.invert();
            }
            std::mem::swap(&mut self.front, &mut self.back);
        });
    }

    /// Removes the parts of `polygons` that lie inside this tree's solid.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let Some(plane) = self.plane else {
            return polygons;
        };
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            let mut coplanar_front = Vec::new();
            let mut coplanar_back = Vec::new();
            let mut front = Vec::new();
            let mut back = Vec::new();
            for polygon in &polygons {
                polygon.split(
                    &plane,
                    &mut coplanar_front,
                    &mut coplanar_back,
                    &mut front,
                    &mut back,
                );
            }
            front.append(&mut coplanar_front);
            back.append(&mut coplanar_back);

            let mut kept = match &self.front {
                Some(node) => node.clip_polygons(front),
                None => front,
            };
            // Behind a leaf plane is inside the solid.
            if let Some(node) = &self.back {
                kept.extend(node.clip_polygons(back));
            }
            kept
        })
    }

    /// Removes every polygon of this tree that lies inside `other`.
    pub fn clip_to(&mut self, other: &BspNode) {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            self.polygons = other.clip_polygons(std::mem::take(&mut self.polygons));
            if let Some(front) = self.front.as_mut() {
                front.clip_to(other);
            }
            if let Some(back) = self.back.as_mut() {
                back.clip_to(other);
            }
        });
    }

    /// Collects the polygons of every node.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            result.extend(node.polygons.iter().cloned());
            stack.extend(node.front.as_deref());
            stack.extend(node.back.as_deref());
        }
        result
    }

    /// Consumes the tree, returning its polygons without cloning.
    pub fn into_polygons(mut self) -> Vec<Polygon> {
        let mut result = std::mem::take(&mut self.polygons);
        let mut stack: Vec<Box<BspNode>> = Vec::new();
        stack.extend(self.front.take());
        stack.extend(self.back.take());
        while let Some(mut node) = stack.pop() {
            result.append(&mut node.polygons);
            stack.extend(node.front.take());
            stack.extend(node.back.take());
        }
        result
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            for child in [node.front.as_deref(), node.back.as_deref()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        deepest
    }
}

impl Drop for BspNode {
    fn drop(&mut self) {
        // Unlink children first so dropping a deep tree does not recurse.
        let mut stack: Vec<Box<BspNode>> = Vec::new();
        stack.extend(self.front.take());
        stack.extend(self.back.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.front.take());
            stack.extend(node.back.take());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn triangle(z: f64) -> Polygon {
        Polygon::new(vec![
            DVec3::new(0.0, 0.0, z),
            DVec3::new(1.0, 0.0, z),
            DVec3::new(0.0, 1.0, z),
        ])
        .unwrap()
    }

    /// The six outward faces of the unit cube.
    fn unit_cube() -> Vec<Polygon> {
        let p = |x: f64, y: f64, z: f64| DVec3::new(x, y, z);
        [
            [p(0., 0., 0.), p(0., 1., 0.), p(1., 1., 0.), p(1., 0., 0.)],
            [p(0., 0., 1.), p(1., 0., 1.), p(1., 1., 1.), p(0., 1., 1.)],
            [p(0., 0., 0.), p(1., 0., 0.), p(1., 0., 1.), p(0., 0., 1.)],
            [p(0., 1., 0.), p(0., 1., 1.), p(1., 1., 1.), p(1., 1., 0.)],
            [p(0., 0., 0.), p(0., 0., 1.), p(0., 1., 1.), p(0., 1., 0.)],
            [p(1., 0., 0.), p(1., 1., 0.), p(1., 1., 1.), p(1., 0., 1.)],
        ]
        .into_iter()
        .filter_map(|face| Polygon::new(face.to_vec()))
        .collect()
    }

    #[test]
    fn test_empty_tree() {
        let tree = BspNode::new(Vec::new());
        assert!(tree.all_polygons().is_empty());
        assert_eq!(tree.depth(), 1);
        // An empty tree clips nothing.
        assert_eq!(tree.clip_polygons(vec![triangle(0.0)]).len(), 1);
    }

    #[test]
    fn test_coplanar_polygons_share_node() {
        let tree = BspNode::new(vec![triangle(0.0), triangle(0.0)]);
        assert_eq!(tree.all_polygons().len(), 2);
        assert_eq!(tree.depth(), 1);
    }

    #[test]
    fn test_stacked_polygons() {
        let tree = BspNode::new(vec![triangle(0.0), triangle(1.0), triangle(-1.0)]);
        assert_eq!(tree.all_polygons().len(), 3);
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.into_polygons().len(), 3);
    }

    #[test]
    fn test_cube_clips_inside_polygon() {
        let cube = BspNode::new(unit_cube());
        let inside = Polygon::new(vec![
            DVec3::new(0.25, 0.25, 0.5),
            DVec3::new(0.75, 0.25, 0.5),
            DVec3::new(0.25, 0.75, 0.5),
        ])
        .unwrap();
        let outside = Polygon::new(vec![
            DVec3::new(2.0, 2.0, 0.5),
            DVec3::new(3.0, 2.0, 0.5),
            DVec3::new(2.0, 3.0, 0.5),
        ])
        .unwrap();
        let kept = cube.clip_polygons(vec![inside, outside.clone()]);
        assert_eq!(kept, vec![outside]);
    }

    #[test]
    fn test_invert_twice_restores_polygons() {
        let mut tree = BspNode::new(unit_cube());
        let before = tree.all_polygons().len();
        tree.invert();
        assert!(tree
            .all_polygons()
            .iter()
            .all(|p| p.plane().normal().length() > 0.99));
        tree.invert();
        assert_eq!(tree.all_polygons().len(), before);
    }
}

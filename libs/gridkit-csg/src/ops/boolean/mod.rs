//! # Boolean Operations (CSG)
//!
//! Union, difference and intersection of solids using BSP trees.
//!
//! ## Algorithm
//!
//! Based on the csg.js algorithm by Evan Wallace:
//! - Union: A.clipTo(B); B.clipTo(A); B.invert(); B.clipTo(A); B.invert(); combine
//! - Difference: A.invert(); A.clipTo(B); B.clipTo(A); B.invert(); B.clipTo(A); B.invert(); combine; invert
//! - Intersection: A.invert(); B.clipTo(A); B.invert(); A.clipTo(B); B.clipTo(A); combine; invert
//!
//! Operands whose bounding boxes do not overlap skip the trees entirely.
//!
//! ## Example
//!
//! ```rust
//! use gridkit_csg::ops::boolean::difference;
//! use gridkit_csg::Solid;
//! use glam::DVec3;
//!
//! let a = Solid::cuboid(DVec3::ZERO, DVec3::splat(2.0)).unwrap();
//! let b = Solid::cuboid(DVec3::splat(1.0), DVec3::splat(3.0)).unwrap();
//! let result = difference(&a, &b);
//! assert!((result.volume() - 7.0).abs() < 1e-9);
//! ```

mod bsp;
mod plane;
mod polygon;

pub use bsp::BspNode;
pub use plane::{Plane, Side};
pub use polygon::Polygon;

use crate::Solid;
use tracing::trace;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Region inside either solid.
pub fn union(a: &Solid, b: &Solid) -> Solid {
    if a.is_empty() {
        return b.clone();
    }
    if b.is_empty() {
        return a.clone();
    }
    if !bounds_overlap(a, b) {
        let mut polygons = a.polygons().to_vec();
        polygons.extend_from_slice(b.polygons());
        return Solid::from_polygons(polygons);
    }
    trace!(
        left = a.polygon_count(),
        right = b.polygon_count(),
        "bsp union"
    );

    let mut tree_a = BspNode::new(a.polygons().to_vec());
    let mut tree_b = BspNode::new(b.polygons().to_vec());

    tree_a.clip_to(&tree_b);
    tree_b.clip_to(&tree_a);
    tree_b.invert();
    tree_b.clip_to(&tree_a);
    tree_b.invert();

    let mut polygons = tree_a.into_polygons();
    polygons.extend(tree_b.into_polygons());
    Solid::from_polygons(polygons)
}

/// Region inside `a` but outside `b`.
pub fn difference(a: &Solid, b: &Solid) -> Solid {
    if a.is_empty() || b.is_empty() || !bounds_overlap(a, b) {
        return a.clone();
    }
    trace!(
        left = a.polygon_count(),
        right = b.polygon_count(),
        "bsp difference"
    );

    let mut tree_a = BspNode::new(a.polygons().to_vec());
    let mut tree_b = BspNode::new(b.polygons().to_vec());

    tree_a.invert();
    tree_a.clip_to(&tree_b);
    tree_b.clip_to(&tree_a);
    tree_b.invert();
    tree_b.clip_to(&tree_a);
    tree_b.invert();

    let mut polygons = tree_a.into_polygons();
    polygons.extend(tree_b.into_polygons());
    Solid::from_polygons(flip_all(polygons))
}

/// Region inside both solids.
pub fn intersection(a: &Solid, b: &Solid) -> Solid {
    if a.is_empty() || b.is_empty() || !bounds_overlap(a, b) {
        return Solid::new();
    }
    trace!(
        left = a.polygon_count(),
        right = b.polygon_count(),
        "bsp intersection"
    );

    let mut tree_a = BspNode::new(a.polygons().to_vec());
    let mut tree_b = BspNode::new(b.polygons().to_vec());

    tree_a.invert();
    tree_b.clip_to(&tree_a);
    tree_b.invert();
    tree_a.clip_to(&tree_b);
    tree_b.clip_to(&tree_a);

    let mut polygons = tree_a.into_polygons();
    polygons.extend(tree_b.into_polygons());
    Solid::from_polygons(flip_all(polygons))
}

// =============================================================================
// HELPERS
// =============================================================================

fn flip_all(mut polygons: Vec<Polygon>) -> Vec<Polygon> {
    for polygon in &mut polygons {
        polygon.flip();
    }
    polygons
}

/// Whether the bounding boxes touch or overlap.
fn bounds_overlap(a: &Solid, b: &Solid) -> bool {
    match (a.bounding_box(), b.bounding_box()) {
        (Some((min_a, max_a)), Some((min_b, max_b))) => {
            min_a.cmple(max_b).all() && min_b.cmple(max_a).all()
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests;

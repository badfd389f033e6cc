//! Tests for BSP boolean operations.

use super::*;
use approx::assert_relative_eq;
use glam::DVec3;

fn cube(min: f64, max: f64) -> Solid {
    Solid::cuboid(DVec3::splat(min), DVec3::splat(max)).unwrap()
}

// =============================================================================
// UNION
// =============================================================================

#[test]
fn test_union_overlapping_cubes() {
    let result = union(&cube(0.0, 2.0), &cube(1.0, 3.0));
    assert_relative_eq!(result.volume(), 8.0 + 8.0 - 1.0, epsilon = 1e-9);
    let (min, max) = result.bounding_box().unwrap();
    assert_relative_eq!(min.x, 0.0);
    assert_relative_eq!(max.x, 3.0);
}

#[test]
fn test_union_disjoint_keeps_both() {
    let a = cube(0.0, 1.0);
    let b = cube(5.0, 6.0);
    let result = union(&a, &b);
    assert_eq!(result.polygon_count(), a.polygon_count() + b.polygon_count());
    assert_relative_eq!(result.volume(), 2.0, epsilon = 1e-12);
}

#[test]
fn test_union_with_empty() {
    let a = cube(0.0, 1.0);
    assert_eq!(union(&a, &Solid::new()), a);
    assert_eq!(union(&Solid::new(), &a), a);
}

#[test]
fn test_union_contained_is_outer() {
    let result = union(&cube(0.0, 4.0), &cube(1.0, 2.0));
    assert_relative_eq!(result.volume(), 64.0, epsilon = 1e-9);
}

// =============================================================================
// DIFFERENCE
// =============================================================================

#[test]
fn test_difference_corner_cut() {
    let result = difference(&cube(0.0, 2.0), &cube(1.0, 3.0));
    assert_relative_eq!(result.volume(), 7.0, epsilon = 1e-9);
    assert!(!result.contains_point(DVec3::splat(1.5)));
    assert!(result.contains_point(DVec3::splat(0.5)));
}

#[test]
fn test_difference_through_hole() {
    let plate = Solid::cuboid(DVec3::ZERO, DVec3::new(4.0, 4.0, 1.0)).unwrap();
    let drill = Solid::cuboid(DVec3::new(1.0, 1.0, -1.0), DVec3::new(2.0, 2.0, 2.0)).unwrap();
    let result = difference(&plate, &drill);
    assert_relative_eq!(result.volume(), 15.0, epsilon = 1e-9);
    assert!(!result.contains_point(DVec3::new(1.5, 1.5, 0.5)));
}

#[test]
fn test_difference_disjoint_is_identity() {
    let a = cube(0.0, 1.0);
    assert_eq!(difference(&a, &cube(3.0, 4.0)), a);
}

#[test]
fn test_difference_of_everything_is_empty() {
    let result = difference(&cube(1.0, 2.0), &cube(0.0, 3.0));
    assert_relative_eq!(result.volume(), 0.0, epsilon = 1e-12);
}

// =============================================================================
// INTERSECTION
// =============================================================================

#[test]
fn test_intersection_overlap() {
    let result = intersection(&cube(0.0, 2.0), &cube(1.0, 3.0));
    assert_relative_eq!(result.volume(), 1.0, epsilon = 1e-9);
    let (min, max) = result.bounding_box().unwrap();
    assert_relative_eq!(min.y, 1.0, epsilon = 1e-9);
    assert_relative_eq!(max.y, 2.0, epsilon = 1e-9);
}

#[test]
fn test_intersection_disjoint_is_empty() {
    assert!(intersection(&cube(0.0, 1.0), &cube(2.0, 3.0)).is_empty());
}

#[test]
fn test_intersection_is_commutative_in_volume() {
    let a = Solid::cylinder(0.0, 2.0, 1.0, 16).unwrap();
    let b = cube(0.0, 1.5);
    assert_relative_eq!(
        intersection(&a, &b).volume(),
        intersection(&b, &a).volume(),
        epsilon = 1e-9
    );
}

// =============================================================================
// BOUNDS
// =============================================================================

#[test]
fn test_bounds_overlap_touching() {
    assert!(bounds_overlap(&cube(0.0, 1.0), &cube(1.0, 2.0)));
    assert!(!bounds_overlap(&cube(0.0, 1.0), &cube(1.5, 2.0)));
    assert!(!bounds_overlap(&Solid::new(), &cube(0.0, 1.0)));
}

//! Tests for profile construction, booleans and transforms.

use super::*;
use approx::assert_relative_eq;

const TOLERANCE: f64 = 1e-6;

fn unit_square() -> Profile {
    Profile::rectangle(DVec2::splat(0.5), DVec2::splat(0.5)).unwrap()
}

// =============================================================================
// CONSTRUCTORS
// =============================================================================

#[test]
fn test_circle_vertices() {
    let circle = Profile::circle(2.0, 16).unwrap();
    let rings = circle.rings();
    assert_eq!(rings.len(), 1);
    assert_eq!(rings[0].len(), 16);
    assert!(rings.iter().flatten().any(|p| *p == DVec2::new(2.0, 0.0)));
    assert!(rings.iter().flatten().any(|p| *p == DVec2::new(0.0, 2.0)));
    let (min, max) = circle.bounding_box().unwrap();
    assert_eq!(min, DVec2::splat(-2.0));
    assert_eq!(max, DVec2::splat(2.0));
}

#[test]
fn test_circle_validation() {
    assert!(matches!(
        Profile::circle(1.0, 2),
        Err(CsgError::InvalidResolution { .. })
    ));
    assert!(Profile::circle(-1.0, 16).is_err());
    assert!(Profile::circle(f64::NAN, 16).is_err());
}

#[test]
fn test_polygon_normalizes_winding() {
    let clockwise = [DVec2::ZERO, DVec2::Y, DVec2::ONE, DVec2::X];
    let profile = Profile::polygon(&clockwise).unwrap();
    let ring = &profile.rings()[0];
    let signed: f64 = (0..ring.len())
        .map(|i| ring[i].perp_dot(ring[(i + 1) % ring.len()]))
        .sum();
    assert!(signed > 0.0);
}

#[test]
fn test_polygon_rejects_degenerate() {
    assert!(Profile::polygon(&[DVec2::ZERO, DVec2::X]).is_err());
    assert!(Profile::polygon(&[DVec2::ZERO, DVec2::X, DVec2::X * 2.0]).is_err());
}

#[test]
fn test_tiny_profiles_keep_their_area() {
    let circle = Profile::circle(1e-5, 16).unwrap();
    assert_eq!(circle.rings()[0].len(), 16);
    assert!(circle.area() > 0.0);
    let square = Profile::square(1e-7).unwrap();
    assert_relative_eq!(square.area(), 4e-14, max_relative = 1e-9);
    assert!(Profile::polygon(&[DVec2::ZERO, DVec2::X * 1e-7, DVec2::X * 2e-7]).is_err());
}

#[test]
fn test_polygon_drops_straight_vertices() {
    let points = [
        DVec2::ZERO,
        DVec2::new(1.0, 0.0),
        DVec2::new(2.0, 0.0),
        DVec2::new(2.0, 2.0),
        DVec2::new(0.0, 2.0),
    ];
    let profile = Profile::polygon(&points).unwrap();
    assert_eq!(profile.rings()[0].len(), 4);
    assert!(profile.is_convex());
    assert_relative_eq!(profile.area(), 4.0);
}

#[test]
fn test_square_is_centered() {
    let (min, max) = Profile::square(3.0).unwrap().bounding_box().unwrap();
    assert_eq!(min, DVec2::splat(-3.0));
    assert_eq!(max, DVec2::splat(3.0));
}

// =============================================================================
// BOOLEANS
// =============================================================================

#[test]
fn test_union_and_intersection_areas() {
    let a = unit_square();
    let b = a.translate(DVec2::new(0.5, 0.0));
    assert_relative_eq!(a.union(&b).area(), 1.5, epsilon = TOLERANCE);
    assert_relative_eq!(a.intersection(&b).area(), 0.5, epsilon = TOLERANCE);
    assert_relative_eq!(a.difference(&b).area(), 0.5, epsilon = TOLERANCE);
}

#[test]
fn test_difference_creates_hole() {
    let outer = Profile::square(2.0).unwrap();
    let inner = Profile::square(1.0).unwrap();
    let frame = outer.difference(&inner);
    assert_relative_eq!(frame.area(), 12.0, epsilon = TOLERANCE);
    assert_eq!(frame.rings().len(), 2);
    assert!(!frame.contains_point(DVec2::ZERO));
    assert!(frame.contains_point(DVec2::new(1.5, 0.0)));
    // Holes triangulate too.
    let triangulated: f64 = frame
        .triangles()
        .iter()
        .map(|[a, b, c]| (*b - *a).perp_dot(*c - *a) / 2.0)
        .sum();
    assert_relative_eq!(triangulated, 12.0, epsilon = TOLERANCE);
}

#[test]
fn test_disjoint_intersection_is_empty() {
    let a = unit_square();
    let b = a.translate(DVec2::new(5.0, 5.0));
    assert!(a.intersection(&b).is_empty());
    assert_eq!(a.union(&b).polygon_count(), 2);
}

// =============================================================================
// HULL
// =============================================================================

#[test]
fn test_hull_of_two_circles() {
    let left = Profile::circle(1.0, 16).unwrap().translate(DVec2::new(-2.0, 0.0));
    let right = Profile::circle(1.0, 16).unwrap().translate(DVec2::new(2.0, 0.0));
    let hull = Profile::hull([&left, &right]);
    assert!(hull.is_convex());
    let (min, max) = hull.bounding_box().unwrap();
    assert_relative_eq!(min.x, -3.0, epsilon = TOLERANCE);
    assert_relative_eq!(max.x, 3.0, epsilon = TOLERANCE);
    assert!(hull.contains_point(DVec2::new(0.0, 0.9)));
}

#[test]
fn test_hull_of_nothing_is_empty() {
    assert!(Profile::hull(std::iter::empty()).is_empty());
}

#[test]
fn test_non_convex_detected() {
    let notch = Profile::polygon(&[
        DVec2::ZERO,
        DVec2::new(2.0, 0.0),
        DVec2::new(2.0, 2.0),
        DVec2::new(1.0, 1.0),
        DVec2::new(0.0, 2.0),
    ])
    .unwrap();
    assert!(!notch.is_convex());
    assert!(unit_square().is_convex());
}

// =============================================================================
// TRANSFORMS
// =============================================================================

#[test]
fn test_mirror_twice_returns_profile() {
    let shape = Profile::polygon(&[DVec2::ZERO, DVec2::new(3.0, 0.0), DVec2::new(1.0, 2.0)]).unwrap();
    assert!(shape.mirror_x().mirror_x().approx_eq(&shape, TOLERANCE));
    assert!(shape.mirror_y().mirror_y().approx_eq(&shape, TOLERANCE));
    assert!(!shape.mirror_x().approx_eq(&shape, TOLERANCE));
}

#[test]
fn test_mirror_keeps_orientation() {
    let mirrored = unit_square().mirror_x();
    let (min, max) = mirrored.bounding_box().unwrap();
    assert_eq!(min.x, -1.0);
    assert_eq!(max.x, 0.0);
    assert_relative_eq!(mirrored.area(), 1.0, epsilon = TOLERANCE);
    assert!(!mirrored.triangles().is_empty());
}

#[test]
fn test_rotate_and_scale() {
    let rotated = unit_square().rotate(90.0);
    let (min, max) = rotated.bounding_box().unwrap();
    assert_eq!(min, DVec2::new(-1.0, 0.0));
    assert_eq!(max, DVec2::new(0.0, 1.0));
    assert_relative_eq!(unit_square().scale(3.0).area(), 9.0, epsilon = TOLERANCE);
}

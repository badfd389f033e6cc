//! # Tests for Config Constants
//!
//! Sanity checks on the relationships between the shared constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive_and_small() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_plane_epsilon_larger_than_epsilon() {
    assert!(
        PLANE_EPSILON >= EPSILON,
        "PLANE_EPSILON should be >= EPSILON"
    );
}

#[test]
fn test_relative_area_epsilon_is_tiny() {
    assert!(RELATIVE_AREA_EPSILON > 0.0);
    assert!(RELATIVE_AREA_EPSILON < EPSILON);
}

#[test]
fn test_weld_epsilon_below_cut_overlap() {
    // Welding must never merge the two faces a cut overlap keeps apart.
    assert!(VERTEX_WELD_EPSILON < CUT_OVERLAP);
}

// =============================================================================
// PRINTING TESTS
// =============================================================================

#[test]
fn test_layer_height_is_common_fdm_value() {
    assert_eq!(LAYER_HEIGHT, 0.2);
}

#[test]
fn test_cut_overlap_is_small() {
    assert!(CUT_OVERLAP > 0.0);
    assert!(CUT_OVERLAP < LAYER_HEIGHT);
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_resolutions_form_polygons() {
    assert!(MIN_RESOLUTION >= 3);
    assert!(CIRCLE_RESOLUTION >= MIN_RESOLUTION);
    assert_eq!(HEXAGON_RESOLUTION, 6);
}

// =============================================================================
// GRID TESTS
// =============================================================================

#[test]
fn test_fastener_fits_grid() {
    assert!(FASTENER_HOLE_DIAMETER < FASTENER_CAP_DIAMETER);
    assert!(FASTENER_CAP_DIAMETER < GRID_SPACING);
}

// =============================================================================
// APPROX_EQUAL TESTS
// =============================================================================

#[test]
fn test_approx_equal_same_values() {
    assert!(approx_equal(1.0, 1.0));
    assert!(approx_equal(0.0, 0.0));
    assert!(approx_equal(-5.5, -5.5));
}

#[test]
fn test_approx_equal_within_epsilon() {
    assert!(approx_equal(1.0, 1.0 + EPSILON / 2.0));
    assert!(approx_zero(EPSILON / 2.0));
}

#[test]
fn test_approx_equal_outside_epsilon() {
    assert!(!approx_equal(1.0, 1.0 + EPSILON * 2.0));
    assert!(!approx_zero(0.1));
}

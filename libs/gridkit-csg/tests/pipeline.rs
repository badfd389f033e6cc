//! Profiles through extrusion and booleans to an exported mesh.

use approx::assert_relative_eq;
use glam::{DVec2, DVec3};
use gridkit_csg::{linear_extrude, loft, rotate_extrude, Path2D, Profile, Slice, Solid};

fn regular_polygon_area(radius: f64, sides: u32) -> f64 {
    let n = f64::from(sides);
    0.5 * n * radius * radius * (std::f64::consts::TAU / n).sin()
}

#[test]
fn drilled_plate() {
    let plate = Solid::cuboid(DVec3::ZERO, DVec3::new(10.0, 10.0, 2.0)).unwrap();
    let drill = linear_extrude(&Profile::circle(2.0, 16).unwrap(), 4.0)
        .unwrap()
        .translate(DVec3::new(5.0, 5.0, -1.0));
    let drilled = plate.difference(&drill);

    assert_relative_eq!(
        drilled.volume(),
        200.0 - 2.0 * regular_polygon_area(2.0, 16),
        epsilon = 1e-6
    );
    assert!(!drilled.contains_point(DVec3::new(5.1, 5.2, 1.0)));
    assert!(drilled.contains_point(DVec3::new(1.1, 1.2, 1.0)));
}

#[test]
fn overlapping_cubes() {
    let a = Solid::cuboid(DVec3::ZERO, DVec3::splat(2.0)).unwrap();
    let b = Solid::cuboid(DVec3::ONE, DVec3::splat(3.0)).unwrap();
    assert_relative_eq!(a.union(&b).volume(), 15.0, epsilon = 1e-9);
    assert_relative_eq!(a.difference(&b).volume(), 7.0, epsilon = 1e-9);
    assert_relative_eq!(a.intersection(&b).volume(), 1.0, epsilon = 1e-9);
}

#[test]
fn disjoint_booleans() {
    let a = Solid::cuboid(DVec3::ZERO, DVec3::ONE).unwrap();
    let b = a.translate(DVec3::new(5.0, 0.0, 0.0));
    assert_relative_eq!(a.union(&b).volume(), 2.0, epsilon = 1e-12);
    assert_eq!(a.difference(&b), a);
    assert!(a.intersection(&b).is_empty());
}

#[test]
fn bezier_gusset_extrusion_is_closed() {
    let gusset = Path2D::new([DVec2::ZERO, DVec2::new(0.0, -3.0)])
        .append_bezier(
            &[DVec2::new(3.0, -3.0), DVec2::new(3.0, 0.0), DVec2::new(6.0, 0.0)],
            16,
        )
        .unwrap()
        .close()
        .unwrap();
    let solid = linear_extrude(&gusset, 5.0).unwrap();
    assert_relative_eq!(solid.volume(), gusset.area() * 5.0, epsilon = 1e-9);

    let mesh = solid.to_mesh();
    assert!(mesh.is_closed());
    assert!(mesh.validate().is_ok());
    assert_eq!(mesh.vertices_f32().len(), 3 * mesh.vertex_count());
}

#[test]
fn revolved_bezier_is_closed() {
    let outline = Path2D::new([DVec2::ZERO, DVec2::new(2.0, 0.0)])
        .append_bezier(&[DVec2::new(0.5, 2.0), DVec2::new(2.0, 4.0)], 12)
        .unwrap()
        .append_point(DVec2::new(0.0, 4.0))
        .close()
        .unwrap();
    let solid = rotate_extrude(&outline, 24).unwrap();
    assert!(solid.volume() > 0.0);
    assert!(solid.to_mesh().is_closed());
    let (min, max) = solid.bounding_box().unwrap();
    assert_relative_eq!(min.z, 0.0);
    assert_relative_eq!(max.z, 4.0);
}

#[test]
fn lofted_frustum_minus_core() {
    let square = Profile::square(2.0).unwrap();
    let frustum = loft(&square, &[Slice::new(0.0, 1.0), Slice::new(3.0, 0.5)]).unwrap();
    let core = Solid::cuboid(DVec3::new(-0.5, -0.5, -1.0), DVec3::new(0.5, 0.5, 4.0)).unwrap();
    let hollow = frustum.difference(&core);

    // Frustum of squares with sides 4 and 2, height 3.
    let frustum_volume = 3.0 / 3.0 * (16.0 + 4.0 + 8.0);
    assert_relative_eq!(frustum.volume(), frustum_volume, epsilon = 1e-9);
    assert_relative_eq!(hollow.volume(), frustum_volume - 3.0, epsilon = 1e-6);
}

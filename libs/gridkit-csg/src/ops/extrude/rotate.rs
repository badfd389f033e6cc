//! # Rotate Extrusion
//!
//! Revolves a profile drawn in the XY half-plane `x >= 0` about the Z axis:
//! profile X becomes the radius and profile Y becomes Z.

use crate::error::{check_resolution, CsgError, CsgResult};
use crate::ops::sin_cos_degrees;
use crate::{Profile, Solid};
use glam::{DVec2, DVec3};
use gridkit_config::constants::EPSILON;
use tracing::trace;

/// Revolves `profile` a full turn in `resolution` steps.
///
/// Vertices on the axis (`x == 0`) collapse, so bands touching the axis
/// become triangle fans and edges lying on it are dropped.
///
/// # Errors
///
/// Fails for an empty profile, a resolution below 3 or a profile reaching
/// into `x < 0`.
pub fn rotate_extrude(profile: &Profile, resolution: u32) -> CsgResult<Solid> {
    check_resolution(resolution)?;
    let Some((min, _)) = profile.bounding_box() else {
        return Err(CsgError::degenerate("cannot revolve an empty profile"));
    };
    if min.x < -EPSILON {
        return Err(CsgError::degenerate(format!(
            "profile crosses the rotation axis (min x = {})",
            min.x
        )));
    }
    trace!(resolution, "rotate extrude");

    let angles: Vec<(f64, f64)> = (0..resolution)
        .map(|k| sin_cos_degrees(360.0 * f64::from(k) / f64::from(resolution)))
        .collect();
    let place = |point: DVec2, (sin, cos): (f64, f64)| {
        let radius = if point.x.abs() <= EPSILON { 0.0 } else { point.x };
        DVec3::new(radius * cos, radius * sin, point.y)
    };
    let on_axis = |point: DVec2| point.x.abs() <= EPSILON;

    let mut faces = Vec::new();
    for ring in profile.rings() {
        for (i, p) in ring.iter().copied().enumerate() {
            let q = ring[(i + 1) % ring.len()];
            for k in 0..angles.len() {
                let (a0, a1) = (angles[k], angles[(k + 1) % angles.len()]);
                let face = match (on_axis(p), on_axis(q)) {
                    (true, true) => continue,
                    (true, false) => vec![place(p, a0), place(q, a1), place(q, a0)],
                    (false, true) => vec![place(p, a0), place(p, a1), place(q, a0)],
                    (false, false) => {
                        vec![place(p, a0), place(p, a1), place(q, a1), place(q, a0)]
                    }
                };
                faces.push(face);
            }
        }
    }
    Ok(Solid::from_faces(faces))
}

//! # Extrusion Operations
//!
//! Profile to solid conversions:
//! - **linear_extrude**: sweep a profile straight up the Z axis
//! - **loft**: skin a profile scaled through a table of [`Slice`] rows
//! - **rotate_extrude**: revolve a profile about the Z axis
//!
//! Every solid produced here is a closed, outward-oriented boundary.

mod linear;
mod loft;
mod rotate;


pub use linear::linear_extrude;
pub use loft::{loft, Slice};
pub use rotate::rotate_extrude;

use glam::{DVec2, DVec3};

/// Places a profile point at height `z`.
#[inline]
fn lift(point: DVec2, z: f64) -> DVec3 {
    DVec3::new(point.x, point.y, z)
}

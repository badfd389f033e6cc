//! # Linear Extrusion
//!
//! Sweeps a profile from `z = 0` to `z = height`.

use super::loft::{skin, Slice};
use crate::error::{check_positive, CsgError, CsgResult};
use crate::{Profile, Solid};
use tracing::trace;

/// Extrudes `profile` straight up by `height`.
///
/// Outer rings become outward-facing walls and holes become inward-facing
/// bores; the profile itself caps both ends.
///
/// # Example
///
/// ```rust
/// use gridkit_csg::{linear_extrude, Profile};
///
/// let disc = Profile::circle(1.0, 32).unwrap();
/// let puck = linear_extrude(&disc, 2.0).unwrap();
/// assert!((puck.volume() - 2.0 * disc.area()).abs() < 1e-6);
/// ```
pub fn linear_extrude(profile: &Profile, height: f64) -> CsgResult<Solid> {
    check_positive("extrusion height", height)?;
    if profile.is_empty() {
        return Err(CsgError::degenerate("cannot extrude an empty profile"));
    }
    trace!(height, polygons = profile.polygon_count(), "linear extrude");
    skin(profile, &[Slice::new(0.0, 1.0), Slice::new(height, 1.0)])
}

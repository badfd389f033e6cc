//! # Loft
//!
//! Skins a solid through horizontal cross-sections of one profile. Each
//! [`Slice`] places the profile, scaled uniformly about the origin, at a
//! height; consecutive slices are joined by planar side bands.

use super::lift;
use crate::error::{CsgError, CsgResult};
use crate::ops::boolean::Polygon;
use crate::{Profile, Solid};
use glam::{DVec2, DVec3};
use gridkit_config::constants::EPSILON;
use tracing::debug;

/// One row of a loft table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    /// Z coordinate of the cross-section.
    pub height: f64,
    /// Uniform scale of the base profile at this height.
    pub scale: f64,
}

impl Slice {
    /// Creates a slice row.
    pub const fn new(height: f64, scale: f64) -> Self {
        Self { height, scale }
    }

    fn same_as(&self, other: &Slice) -> bool {
        (self.height - other.height).abs() <= EPSILON && (self.scale - other.scale).abs() <= EPSILON
    }
}

/// Skins `base` through `slices`.
///
/// Heights must never decrease and scales must be positive. Consecutive
/// identical rows collapse, so a table that only repeats one scale yields a
/// plain prism. The first row closes the bottom and the last row the top.
///
/// # Example
///
/// ```rust
/// use gridkit_csg::{loft, Profile, Slice};
///
/// let square = Profile::square(1.0).unwrap();
/// let frustum = loft(&square, &[Slice::new(0.0, 1.0), Slice::new(3.0, 0.5)]).unwrap();
/// // h * A * (s0² + s0·s1 + s1²) / 3
/// assert!((frustum.volume() - 3.0 * 4.0 * 1.75 / 3.0).abs() < 1e-9);
/// ```
pub fn loft(base: &Profile, slices: &[Slice]) -> CsgResult<Solid> {
    if base.is_empty() {
        return Err(CsgError::degenerate("cannot loft an empty profile"));
    }
    let rows = normalize_slices(slices)?;
    debug!(rows = rows.len(), "loft");
    skin(base, &rows)
}

/// Validates a slice table and collapses repeated rows.
pub(crate) fn normalize_slices(slices: &[Slice]) -> CsgResult<Vec<Slice>> {
    let mut rows: Vec<Slice> = Vec::with_capacity(slices.len());
    for (i, slice) in slices.iter().enumerate() {
        if !slice.height.is_finite() {
            return Err(CsgError::invalid_slices(format!(
                "row {i} has non-finite height {}",
                slice.height
            )));
        }
        if !slice.scale.is_finite() || slice.scale <= 0.0 {
            return Err(CsgError::invalid_slices(format!(
                "row {i} has non-positive scale {}",
                slice.scale
            )));
        }
        match rows.last() {
            Some(previous) if slice.height < previous.height - EPSILON => {
                return Err(CsgError::invalid_slices(format!(
                    "row {i} height {} is below the previous row's {}",
                    slice.height, previous.height
                )));
            }
            Some(previous) if previous.same_as(slice) => {}
            _ => rows.push(*slice),
        }
    }
    match (rows.first(), rows.last()) {
        (Some(first), Some(last)) if last.height - first.height > EPSILON => Ok(rows),
        _ => Err(CsgError::invalid_slices("slices span no height")),
    }
}

/// Builds caps and side bands for already validated rows.
///
/// Fails instead of leaving a gap when a face turns out degenerate.
pub(crate) fn skin(base: &Profile, rows: &[Slice]) -> CsgResult<Solid> {
    let at = |point: DVec2, row: &Slice| lift(point * row.scale, row.height);
    let mut faces: Vec<Vec<DVec3>> = Vec::new();

    let (Some(bottom), Some(top)) = (rows.first(), rows.last()) else {
        return Err(CsgError::invalid_slices("no rows to skin"));
    };
    for facet in base.convex_facets() {
        faces.push(facet.iter().rev().map(|p| at(*p, bottom)).collect());
        faces.push(facet.iter().map(|p| at(*p, top)).collect());
    }

    let rings = base.rings();
    for band in rows.windows(2) {
        let (lower, upper) = (&band[0], &band[1]);
        for ring in &rings {
            for (i, p) in ring.iter().enumerate() {
                let q = ring[(i + 1) % ring.len()];
                faces.push(vec![at(*p, lower), at(q, lower), at(q, upper), at(*p, upper)]);
            }
        }
    }
    let polygons = faces
        .into_iter()
        .map(|face| {
            Polygon::new(face)
                .ok_or_else(|| CsgError::degenerate("loft produced a face with no area"))
        })
        .collect::<CsgResult<Vec<_>>>()?;
    Ok(Solid::from_polygons(polygons))
}

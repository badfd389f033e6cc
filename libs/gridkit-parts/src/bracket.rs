//! # Angle Bracket
//!
//! Two identical plates joined at a right angle along the Z axis, each
//! drilled with a row of teardrop fastener holes on the grid.

use crate::config::GridConfig;
use crate::error::{require_count, require_non_negative, require_positive, PartResult};
use crate::teardrop::Teardrop;
use glam::DVec3;
use gridkit_csg::Solid;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Parameters of an angle bracket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BracketParams {
    /// Fastener holes per plate.
    pub grids: u32,
    /// Plate thickness.
    pub thickness: f64,
    /// Material kept around each fastener cap.
    pub fastener_margin: f64,
}

impl Default for BracketParams {
    fn default() -> Self {
        Self {
            grids: 1,
            thickness: 4.0,
            fastener_margin: 1.0,
        }
    }
}

impl BracketParams {
    /// Plate length from the corner to the end past the last hole.
    pub fn length(&self, config: &GridConfig) -> f64 {
        (f64::from(self.grids) - 0.5) * config.grid_spacing
            + config.fastener_cap_diameter / 2.0
            + self.fastener_margin
    }

    /// Plate width: one fastener cap plus margins.
    pub fn width(&self, config: &GridConfig) -> f64 {
        config.fastener_cap_diameter + 2.0 * self.fastener_margin
    }

    fn validate(&self, config: &GridConfig) -> PartResult<()> {
        config.validate()?;
        require_count("grids", self.grids, 1)?;
        require_positive("thickness", self.thickness)?;
        require_non_negative("fastener_margin", self.fastener_margin)
    }
}

/// One plate in the XZ plane, shifted so the two plates overlap at the
/// corner once one is rotated about Z.
pub fn bracket_plate(params: &BracketParams, config: &GridConfig) -> PartResult<Solid> {
    params.validate(config)?;
    let thickness = params.thickness;
    let length = params.length(config);
    let width = params.width(config);
    let overlap = config.cut_overlap;

    let plate = Solid::cuboid(
        DVec3::new(0.0, -thickness / 2.0, 0.0),
        DVec3::new(length, thickness / 2.0, width),
    )?;

    let hole = Teardrop::with_config(
        config.fastener_hole_diameter / 2.0,
        thickness + 2.0 * overlap,
        config,
    )
    .solid()?;
    let cuts: Vec<Solid> = (0..params.grids)
        .map(|i| {
            hole.translate(DVec3::new(
                config.hole_center(i),
                -thickness / 2.0 - overlap,
                width / 2.0,
            ))
        })
        .collect();

    Ok(plate
        .difference(&Solid::union_all(&cuts))
        .translate(DVec3::new(-thickness / 2.0, 0.0, 0.0)))
}

/// Builds the bracket.
///
/// # Example
///
/// ```rust
/// use gridkit_parts::{bracket, BracketParams, GridConfig};
///
/// let solid = bracket(&BracketParams::default(), &GridConfig::default()).unwrap();
/// let (_, max) = solid.bounding_box().unwrap();
/// assert!((max.z - 15.0).abs() < 1e-9);
/// ```
pub fn bracket(params: &BracketParams, config: &GridConfig) -> PartResult<Solid> {
    let plate = bracket_plate(params, config)?;
    info!(
        grids = params.grids,
        length = params.length(config),
        width = params.width(config),
        "bracket"
    );
    Ok(plate.union(&plate.rotate_z(90.0)))
}

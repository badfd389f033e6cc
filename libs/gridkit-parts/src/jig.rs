//! # Cutting Jig
//!
//! A base bar with one peg per grid cell. Pegs fit the grid's fastener
//! holes, so stock laid over the jig can be marked and cut on the grid.

use crate::config::GridConfig;
use crate::error::{require_count, require_non_negative, require_positive, PartError, PartResult};
use glam::DVec3;
use gridkit_csg::Solid;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Parameters of a cutting jig.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JigParams {
    /// Grid cells along the bar, one peg each.
    pub grids: u32,
    /// Height of the base bar.
    pub base_height: f64,
    /// Peg height above the base.
    pub peg_height: f64,
    /// Diametral play between peg and fastener hole.
    pub tolerance: f64,
}

impl Default for JigParams {
    fn default() -> Self {
        Self {
            grids: 4,
            base_height: 10.0,
            peg_height: 10.0,
            tolerance: 0.3,
        }
    }
}

impl JigParams {
    /// Radius of each peg.
    pub fn peg_radius(&self, config: &GridConfig) -> f64 {
        (config.fastener_hole_diameter - self.tolerance) / 2.0
    }
}

/// Builds the jig.
///
/// # Example
///
/// ```rust
/// use gridkit_parts::{jig, GridConfig, JigParams};
///
/// let solid = jig(&JigParams::default(), &GridConfig::default()).unwrap();
/// let (min, max) = solid.bounding_box().unwrap();
/// assert_eq!(min.z, 0.0);
/// assert_eq!(max.z, 20.0);
/// assert_eq!(max.x, 160.0);
/// ```
pub fn jig(params: &JigParams, config: &GridConfig) -> PartResult<Solid> {
    config.validate()?;
    require_count("grids", params.grids, 1)?;
    require_positive("base_height", params.base_height)?;
    require_positive("peg_height", params.peg_height)?;
    require_non_negative("tolerance", params.tolerance)?;
    if params.tolerance >= config.fastener_hole_diameter {
        return Err(PartError::invalid(
            "tolerance",
            format!(
                "must be less than the hole diameter {}, got {}",
                config.fastener_hole_diameter, params.tolerance
            ),
        ));
    }

    let spacing = config.grid_spacing;
    let base = Solid::cuboid(
        DVec3::ZERO,
        DVec3::new(spacing * f64::from(params.grids), spacing, params.base_height),
    )?;
    let peg = Solid::cylinder(
        0.0,
        params.base_height + params.peg_height,
        params.peg_radius(config),
        config.resolution,
    )?;
    let pegs: Vec<Solid> = (0..params.grids)
        .map(|i| peg.translate(DVec3::new(config.hole_center(i), spacing / 2.0, 0.0)))
        .collect();

    info!(
        grids = params.grids,
        peg_radius = params.peg_radius(config),
        "jig"
    );
    Ok(Solid::union_all(std::iter::once(&base).chain(&pegs)))
}

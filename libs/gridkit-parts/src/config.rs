//! # Grid Configuration
//!
//! The shared dimensions of the grid system every part is built against.
//! One record replaces the per-script constants, so all parts agree on
//! fastener sizes and print settings.
//!
//! ## Example
//!
//! ```rust
//! use gridkit_parts::GridConfig;
//!
//! let config: GridConfig = serde_json::from_str(r#"{ "grid_spacing": 50.0 }"#).unwrap();
//! assert_eq!(config.grid_spacing, 50.0);
//! assert_eq!(config.fastener_hole_diameter, 8.0);
//! config.validate().unwrap();
//! ```

use crate::error::{require_non_negative, require_positive, PartError, PartResult};
use gridkit_config::constants::{
    PrintSettings, CIRCLE_RESOLUTION, CUT_OVERLAP, FASTENER_CAP_DIAMETER, FASTENER_CAP_HEIGHT,
    FASTENER_HOLE_DIAMETER, GRID_SPACING, LAYER_HEIGHT,
};
use serde::{Deserialize, Serialize};

/// Grid and printer dimensions shared by all generators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Distance between neighbouring grid holes.
    pub grid_spacing: f64,
    /// Diameter of the fastener shank holes.
    pub fastener_hole_diameter: f64,
    /// Diameter of the fastener cap (bolt head or washer).
    pub fastener_cap_diameter: f64,
    /// Depth of counterbores for fastener caps.
    pub fastener_cap_height: f64,
    /// Printer layer height; zero disables hole correction.
    pub layer_height: f64,
    /// Facet count of round features.
    pub resolution: u32,
    /// Extra length on cutting solids so cut faces never coincide.
    pub cut_overlap: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_spacing: GRID_SPACING,
            fastener_hole_diameter: FASTENER_HOLE_DIAMETER,
            fastener_cap_diameter: FASTENER_CAP_DIAMETER,
            fastener_cap_height: FASTENER_CAP_HEIGHT,
            layer_height: LAYER_HEIGHT,
            resolution: CIRCLE_RESOLUTION,
            cut_overlap: CUT_OVERLAP,
        }
    }
}

impl GridConfig {
    /// Checks every dimension, including that a fastener cap is wider than
    /// its hole and fits within one grid cell.
    pub fn validate(&self) -> PartResult<()> {
        require_positive("grid_spacing", self.grid_spacing)?;
        require_positive("fastener_hole_diameter", self.fastener_hole_diameter)?;
        require_positive("fastener_cap_diameter", self.fastener_cap_diameter)?;
        require_positive("fastener_cap_height", self.fastener_cap_height)?;
        require_non_negative("cut_overlap", self.cut_overlap)?;
        if self.fastener_cap_diameter <= self.fastener_hole_diameter {
            return Err(PartError::invalid(
                "fastener_cap_diameter",
                format!(
                    "must exceed the hole diameter {}, got {}",
                    self.fastener_hole_diameter, self.fastener_cap_diameter
                ),
            ));
        }
        if self.fastener_cap_diameter >= self.grid_spacing {
            return Err(PartError::invalid(
                "fastener_cap_diameter",
                format!(
                    "must be smaller than the grid spacing {}, got {}",
                    self.grid_spacing, self.fastener_cap_diameter
                ),
            ));
        }
        self.print_settings()?;
        Ok(())
    }

    /// Printer settings carried by this configuration.
    pub fn print_settings(&self) -> PartResult<PrintSettings> {
        Ok(PrintSettings::new(self.layer_height, self.resolution)?)
    }

    /// Center of the fastener hole at grid cell `index` along one axis.
    #[inline]
    pub fn hole_center(&self, index: u32) -> f64 {
        (f64::from(index) + 0.5) * self.grid_spacing
    }
}

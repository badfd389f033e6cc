//! Centralized configuration values shared by the gridkit crates.
//!
//! Each public item documents its purpose and a minimal usage example so
//! that downstream crates stay declarative and avoid scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons of scalar values.
///
/// # Examples
/// ```
/// use gridkit_config::constants::EPSILON;
/// assert!(EPSILON < 1.0e-6);
/// ```
pub const EPSILON: f64 = 1.0e-9;

/// Distance below which a point is classified as lying on a plane during
/// BSP boolean operations.
///
/// Larger than [`EPSILON`] because split points accumulate rounding error.
///
/// # Examples
/// ```
/// use gridkit_config::constants::{EPSILON, PLANE_EPSILON};
/// assert!(PLANE_EPSILON > EPSILON);
/// ```
pub const PLANE_EPSILON: f64 = 1.0e-5;

/// Area, as a fraction of the squared extent of a shape, below which a
/// polygon is treated as having no area.
///
/// Relative to the shape's own size, so small parts keep their faces while
/// slivers and collinear outlines are still rejected.
///
/// # Examples
/// ```
/// use gridkit_config::constants::RELATIVE_AREA_EPSILON;
///
/// fn encloses_area(area: f64, extent: f64) -> bool {
///     area > RELATIVE_AREA_EPSILON * extent * extent
/// }
/// assert!(encloses_area(1.0e-12, 1.0e-6));
/// assert!(!encloses_area(1.0e-14, 10.0));
/// ```
pub const RELATIVE_AREA_EPSILON: f64 = 1.0e-12;

/// Distance below which two mesh vertices are welded into one.
///
/// # Examples
/// ```
/// use gridkit_config::constants::VERTEX_WELD_EPSILON;
///
/// fn weld_key(value: f64) -> i64 {
///     (value / VERTEX_WELD_EPSILON).round() as i64
/// }
/// assert_eq!(weld_key(1.0), weld_key(1.0 + 1.0e-9));
/// ```
pub const VERTEX_WELD_EPSILON: f64 = 1.0e-6;

// =============================================================================
// PRINTING CONSTANTS
// =============================================================================

/// Default print layer height in millimetres.
///
/// Horizontal holes sag by roughly half a layer at their top, so teardrop
/// cuts are corrected by `LAYER_HEIGHT / 2`.
///
/// # Examples
/// ```
/// use gridkit_config::constants::LAYER_HEIGHT;
/// assert_eq!(LAYER_HEIGHT / 2.0, 0.1);
/// ```
pub const LAYER_HEIGHT: f64 = 0.2;

/// Overlap added to cutting solids so their faces never coincide with the
/// faces of the solid they are subtracted from.
///
/// # Examples
/// ```
/// use gridkit_config::constants::CUT_OVERLAP;
/// let thickness = 4.0;
/// let cut_height = thickness + 2.0 * CUT_OVERLAP;
/// assert!(cut_height > thickness);
/// ```
pub const CUT_OVERLAP: f64 = 1.0e-4;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Facet count used for circles, cylinders, bezier curves and revolutions.
///
/// # Examples
/// ```
/// use gridkit_config::constants::{CIRCLE_RESOLUTION, MIN_RESOLUTION};
/// assert!(CIRCLE_RESOLUTION >= MIN_RESOLUTION);
/// ```
pub const CIRCLE_RESOLUTION: u32 = 16;

/// Facet count of the hexagon used by rounded hexoids.
pub const HEXAGON_RESOLUTION: u32 = 6;

/// Smallest facet count that still encloses an area.
///
/// # Examples
/// ```
/// use gridkit_config::constants::MIN_RESOLUTION;
/// let requested = 2;
/// assert!(requested < MIN_RESOLUTION);
/// ```
pub const MIN_RESOLUTION: u32 = 3;

// =============================================================================
// GRID CONSTANTS
// =============================================================================

/// Distance between neighbouring holes of the grid system.
///
/// # Examples
/// ```
/// use gridkit_config::constants::GRID_SPACING;
/// let second_hole_x = 1.5 * GRID_SPACING;
/// assert_eq!(second_hole_x, 60.0);
/// ```
pub const GRID_SPACING: f64 = 40.0;

/// Diameter of the grid's fastener holes.
pub const FASTENER_HOLE_DIAMETER: f64 = 8.0;

/// Diameter of a fastener's cap (bolt head or washer).
pub const FASTENER_CAP_DIAMETER: f64 = 13.0;

/// Height of a fastener's cap, used for counterbores.
pub const FASTENER_CAP_HEIGHT: f64 = 3.5;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Bytes of stack space allocated when recursion outgrows the current stack
/// (used with the `stacker` crate by BSP tree construction).
///
/// # Examples
/// ```
/// use gridkit_config::constants::STACKER_STACK_SIZE_BYTES;
/// assert!(STACKER_STACK_SIZE_BYTES >= 1024);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 8 * 1024 * 1024;

/// Remaining stack below which `stacker` switches to a fresh segment.
pub const STACKER_RED_ZONE_BYTES: usize = 64 * 1024;

// =============================================================================
// PRINT SETTINGS
// =============================================================================

/// Immutable snapshot of the printer-dependent settings shared between
/// generators.
///
/// # Examples
/// ```
/// use gridkit_config::constants::PrintSettings;
/// let settings = PrintSettings::default();
/// assert!(settings.layer_height > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrintSettings {
    /// Layer height of the printer, in model units.
    pub layer_height: f64,
    /// Facet count for round features.
    pub resolution: u32,
}

impl PrintSettings {
    /// Builds settings, rejecting a negative or non-finite layer height and
    /// a resolution too small to form a polygon.
    ///
    /// A layer height of zero is allowed and disables hole correction.
    ///
    /// # Examples
    /// ```
    /// use gridkit_config::constants::PrintSettings;
    /// let settings = PrintSettings::new(0.3, 24).expect("valid settings");
    /// assert_eq!(settings.resolution, 24);
    /// ```
    pub fn new(layer_height: f64, resolution: u32) -> Result<Self, ConfigError> {
        if !layer_height.is_finite() || layer_height < 0.0 {
            return Err(ConfigError::InvalidLayerHeight(layer_height));
        }
        if resolution < MIN_RESOLUTION {
            return Err(ConfigError::InvalidResolution(resolution));
        }
        Ok(Self {
            layer_height,
            resolution,
        })
    }

    /// Half the layer height: the amount horizontal holes are corrected by.
    #[inline]
    pub fn hole_correction(&self) -> f64 {
        self.layer_height / 2.0
    }
}

impl Default for PrintSettings {
    fn default() -> Self {
        Self {
            layer_height: LAYER_HEIGHT,
            resolution: CIRCLE_RESOLUTION,
        }
    }
}

/// Error returned when invalid print settings are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the layer height is negative or not finite.
    InvalidLayerHeight(f64),
    /// Raised when the resolution is too small to form a polygon.
    InvalidResolution(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidLayerHeight(value) => {
                write!(f, "layer_height must be finite and non-negative: {value}")
            }
            ConfigError::InvalidResolution(value) => {
                write!(f, "resolution must be >= {MIN_RESOLUTION}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two values are approximately equal within [`EPSILON`].
///
/// # Examples
/// ```
/// use gridkit_config::constants::approx_equal;
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a value is approximately zero within [`EPSILON`].
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

#[cfg(test)]
mod tests;

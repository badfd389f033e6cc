//! # Geometry Errors
//!
//! Error types for profile, solid and extrusion construction.

use thiserror::Error;

/// Errors raised by the geometry kernel.
///
/// Constructors validate their inputs and report problems through this type
/// instead of producing empty or inside-out geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CsgError {
    /// A facet count too small to enclose an area.
    #[error("Invalid resolution: {resolution} (must be >= {min})")]
    InvalidResolution {
        /// Requested facet count
        resolution: u32,
        /// Smallest accepted facet count
        min: u32,
    },

    /// Input that would produce zero-area or zero-volume geometry.
    #[error("Degenerate geometry: {message}")]
    Degenerate {
        /// What was degenerate
        message: String,
    },

    /// A loft slice table that cannot be skinned.
    #[error("Invalid slice table: {message}")]
    InvalidSlices {
        /// Which row was rejected and why
        message: String,
    },
}

impl CsgError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::Degenerate {
            message: message.into(),
        }
    }

    /// Creates an invalid slice table error.
    pub fn invalid_slices(message: impl Into<String>) -> Self {
        Self::InvalidSlices {
            message: message.into(),
        }
    }
}

/// Result alias for geometry operations.
pub type CsgResult<T> = Result<T, CsgError>;

/// Rejects facet counts below [`MIN_RESOLUTION`](gridkit_config::constants::MIN_RESOLUTION).
pub(crate) fn check_resolution(resolution: u32) -> CsgResult<()> {
    use gridkit_config::constants::MIN_RESOLUTION;
    if resolution < MIN_RESOLUTION {
        return Err(CsgError::InvalidResolution {
            resolution,
            min: MIN_RESOLUTION,
        });
    }
    Ok(())
}

/// Rejects lengths that are not finite and strictly positive.
pub(crate) fn check_positive(name: &str, value: f64) -> CsgResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CsgError::degenerate(format!(
            "{name} must be finite and positive, got {value}"
        )));
    }
    Ok(())
}

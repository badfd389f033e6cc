//! # Part Errors
//!
//! Error types for the part generators.

use gridkit_config::constants::ConfigError;
use gridkit_csg::CsgError;
use thiserror::Error;

/// Errors raised by the part generators.
///
/// Parameters are validated before any geometry is built, so an
/// [`InvalidParameter`](PartError::InvalidParameter) never comes with a
/// partial result.
#[derive(Debug, PartialEq, Error)]
pub enum PartError {
    /// A parameter violates its constraint.
    #[error("Invalid parameter `{parameter}`: {message}")]
    InvalidParameter {
        /// Name of the offending parameter
        parameter: &'static str,
        /// The violated constraint
        message: String,
    },

    /// The geometry kernel rejected an intermediate shape.
    #[error(transparent)]
    Geometry(#[from] CsgError),

    /// Invalid print settings.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl PartError {
    /// Creates an invalid parameter error.
    pub fn invalid(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            message: message.into(),
        }
    }
}

/// Result alias for part generators.
pub type PartResult<T> = Result<T, PartError>;

/// Requires a finite value strictly greater than zero.
pub(crate) fn require_positive(parameter: &'static str, value: f64) -> PartResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PartError::invalid(
            parameter,
            format!("must be finite and positive, got {value}"),
        ))
    }
}

/// Requires a finite value greater than or equal to zero.
pub(crate) fn require_non_negative(parameter: &'static str, value: f64) -> PartResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PartError::invalid(
            parameter,
            format!("must be finite and non-negative, got {value}"),
        ))
    }
}

/// Requires a count of at least `min`.
pub(crate) fn require_count(parameter: &'static str, value: u32, min: u32) -> PartResult<()> {
    if value >= min {
        Ok(())
    } else {
        Err(PartError::invalid(
            parameter,
            format!("must be at least {min}, got {value}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = PartError::invalid("radius", "must be positive");
        assert_eq!(err.to_string(), "Invalid parameter `radius`: must be positive");
    }

    #[test]
    fn test_geometry_error_is_transparent() {
        let err: PartError = CsgError::degenerate("flat").into();
        assert_eq!(err.to_string(), "Degenerate geometry: flat");
    }

    #[test]
    fn test_requirements() {
        assert!(require_positive("h", 1.0).is_ok());
        assert!(require_positive("h", 0.0).is_err());
        assert!(require_positive("h", f64::NAN).is_err());
        assert!(require_non_negative("rr", 0.0).is_ok());
        assert!(require_non_negative("rr", -0.1).is_err());
        assert!(require_count("grids", 1, 1).is_ok());
        assert!(matches!(
            require_count("grids", 0, 1),
            Err(PartError::InvalidParameter { parameter: "grids", .. })
        ));
    }
}

//! # Solid Operations
//!
//! - [`boolean`]: BSP union, difference and intersection of solids
//! - [`extrude`]: profile to solid conversions (linear, loft, rotate)

pub mod boolean;
pub mod extrude;

/// Sine and cosine of an angle in degrees, exact at multiples of 90.
///
/// Quarter turns are common in part layouts; exact values keep rotated
/// faces axis-aligned instead of tilted by rounding error.
pub(crate) fn sin_cos_degrees(degrees: f64) -> (f64, f64) {
    let normalized = degrees.rem_euclid(360.0);
    if normalized % 90.0 == 0.0 {
        match (normalized / 90.0) as u8 {
            0 => return (0.0, 1.0),
            1 => return (1.0, 0.0),
            2 => return (0.0, -1.0),
            3 => return (-1.0, 0.0),
            _ => {}
        }
    }
    degrees.to_radians().sin_cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_quarter_turns_are_exact() {
        assert_eq!(sin_cos_degrees(90.0), (1.0, 0.0));
        assert_eq!(sin_cos_degrees(-90.0), (-1.0, 0.0));
        assert_eq!(sin_cos_degrees(540.0), (0.0, -1.0));
    }

    #[test]
    fn test_general_angle() {
        let (sin, cos) = sin_cos_degrees(30.0);
        assert_relative_eq!(sin, 0.5, epsilon = 1e-12);
        assert_relative_eq!(cos, 3f64.sqrt() / 2.0, epsilon = 1e-12);
    }
}

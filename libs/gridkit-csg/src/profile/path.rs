//! # 2D Path
//!
//! Polyline builder with bezier segments. A closed path becomes a
//! [`Profile`].

use super::Profile;
use crate::error::{check_resolution, CsgError, CsgResult};
use glam::DVec2;
use gridkit_config::constants::EPSILON;

/// An open polyline under construction.
///
/// # Example
///
/// ```rust
/// use gridkit_csg::Path2D;
/// use glam::DVec2;
///
/// let gusset = Path2D::new([DVec2::ZERO, DVec2::new(0.0, -2.0)])
///     .append_bezier(&[DVec2::new(2.0, -2.0), DVec2::new(2.0, 0.0), DVec2::new(4.0, 0.0)], 16)
///     .unwrap()
///     .close()
///     .unwrap();
/// assert!(gusset.area() > 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path2D {
    points: Vec<DVec2>,
}

impl Path2D {
    /// Starts a path from `points`.
    pub fn new<I>(points: I) -> Self
    where
        I: IntoIterator<Item = DVec2>,
    {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// Points so far.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Adds one point.
    pub fn append_point(mut self, point: DVec2) -> Self {
        self.points.push(point);
        self
    }

    /// Adds a bezier curve starting at the path's last point.
    ///
    /// `control_points` are the remaining control points; the last one is
    /// the curve's end. The curve is sampled at `resolution` even steps of
    /// its parameter.
    pub fn append_bezier(mut self, control_points: &[DVec2], resolution: u32) -> CsgResult<Self> {
        check_resolution(resolution)?;
        let Some(&start) = self.points.last() else {
            return Err(CsgError::degenerate("bezier needs a path to start from"));
        };
        if control_points.is_empty() {
            return Err(CsgError::degenerate("bezier needs at least one control point"));
        }
        let mut controls = Vec::with_capacity(control_points.len() + 1);
        controls.push(start);
        controls.extend_from_slice(control_points);

        for step in 1..=resolution {
            let t = f64::from(step) / f64::from(resolution);
            let point = de_casteljau(&controls, t);
            if self
                .points
                .last()
                .map_or(true, |last| last.distance(point) > EPSILON)
            {
                self.points.push(point);
            }
        }
        Ok(self)
    }

    /// Closes the path into a profile, dropping a repeated end point.
    pub fn close(mut self) -> CsgResult<Profile> {
        if self.points.len() > 1 {
            let (first, last) = (self.points[0], self.points[self.points.len() - 1]);
            if first.distance(last) <= EPSILON {
                self.points.pop();
            }
        }
        Profile::polygon(&self.points)
    }
}

/// Evaluates a bezier curve by repeated linear interpolation.
fn de_casteljau(controls: &[DVec2], t: f64) -> DVec2 {
    let mut points = controls.to_vec();
    for level in (1..points.len()).rev() {
        for i in 0..level {
            points[i] = points[i].lerp(points[i + 1], t);
        }
    }
    points[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_quadratic_midpoint() {
        let controls = [DVec2::ZERO, DVec2::new(1.0, 2.0), DVec2::new(2.0, 0.0)];
        let mid = de_casteljau(&controls, 0.5);
        assert_relative_eq!(mid.x, 1.0);
        assert_relative_eq!(mid.y, 1.0);
        assert_eq!(de_casteljau(&controls, 1.0), controls[2]);
    }

    #[test]
    fn test_bezier_ends_at_last_control() {
        let path = Path2D::new([DVec2::ZERO])
            .append_bezier(&[DVec2::new(1.0, 1.0), DVec2::new(2.0, 0.0)], 8)
            .unwrap();
        assert_eq!(path.points().len(), 9);
        assert_eq!(*path.points().last().unwrap(), DVec2::new(2.0, 0.0));
    }

    #[test]
    fn test_bezier_requires_start() {
        let err = Path2D::default()
            .append_bezier(&[DVec2::X], 8)
            .unwrap_err();
        assert!(matches!(err, CsgError::Degenerate { .. }));
        assert!(Path2D::new([DVec2::ZERO]).append_bezier(&[DVec2::X], 2).is_err());
    }

    #[test]
    fn test_close_drops_repeated_end() {
        let profile = Path2D::new([DVec2::ZERO, DVec2::X, DVec2::ONE])
            .append_point(DVec2::Y)
            .append_point(DVec2::ZERO)
            .close()
            .unwrap();
        assert_relative_eq!(profile.area(), 1.0, epsilon = 1e-9);
        assert_eq!(profile.rings()[0].len(), 4);
    }

    #[test]
    fn test_close_too_short() {
        assert!(Path2D::new([DVec2::ZERO, DVec2::X]).close().is_err());
    }
}

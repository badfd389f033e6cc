//! # Teardrop Holes
//!
//! Horizontal fastener holes that print without support. A round hole lying
//! on its side sags at the top; the teardrop replaces the top arc with a
//! 45-degree point and flattens the point and the bottom so the hole keeps
//! its nominal size when printed.
//!
//! With height correction the two halves of the round part are pushed half
//! a layer toward each other, compensating for the sag of one layer.
//!
//! ## Orientation
//!
//! The profile is drawn in XY with the point toward +Y. The solid's hole
//! axis is +Y, spanning `0 <= y <= height`, with the point toward +Z.
//!
//! ## Example
//!
//! ```rust
//! use gridkit_parts::teardrop_solid;
//!
//! let hole = teardrop_solid(4.0, 10.0, true).unwrap();
//! let (min, max) = hole.bounding_box().unwrap();
//! assert!((max.z - 4.1).abs() < 1e-6);
//! assert!((max.y - 10.0).abs() < 1e-9 && min.y.abs() < 1e-9);
//! ```

use crate::config::GridConfig;
use crate::error::{require_non_negative, require_positive, PartError, PartResult};
use glam::DVec2;
use gridkit_config::constants::{CIRCLE_RESOLUTION, LAYER_HEIGHT, MIN_RESOLUTION};
use gridkit_csg::{linear_extrude, Profile, Solid};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How far the pointed top is cut off.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Truncation {
    /// Square of half-width `radius + offset`: the hole stays within its
    /// corrected radius in both directions.
    #[default]
    Envelope,
    /// Square of half-width `radius * factor`. Leaves part of the point
    /// standing for factors above the envelope; needs print testing before
    /// use.
    RadiusFactor(f64),
}

/// Parameters of a teardrop hole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Teardrop {
    /// Nominal hole radius.
    pub radius: f64,
    /// Hole length along its axis.
    pub height: f64,
    /// Push the round halves together by half a layer.
    pub height_correction: bool,
    /// Printer layer height.
    pub layer_height: f64,
    /// Facet count of the round part.
    pub resolution: u32,
    /// Cut-off of the pointed top.
    pub truncation: Truncation,
}

impl Default for Teardrop {
    fn default() -> Self {
        Self {
            radius: 4.0,
            height: 10.0,
            height_correction: true,
            layer_height: LAYER_HEIGHT,
            resolution: CIRCLE_RESOLUTION,
            truncation: Truncation::Envelope,
        }
    }
}

impl Teardrop {
    /// A corrected hole with default print settings.
    pub fn new(radius: f64, height: f64) -> Self {
        Self {
            radius,
            height,
            ..Self::default()
        }
    }

    /// A corrected hole using the print settings of `config`.
    pub fn with_config(radius: f64, height: f64, config: &GridConfig) -> Self {
        Self {
            radius,
            height,
            layer_height: config.layer_height,
            resolution: config.resolution,
            ..Self::default()
        }
    }

    /// Replaces the truncation.
    pub fn truncated(self, truncation: Truncation) -> Self {
        Self { truncation, ..self }
    }

    /// Distance each round half is pushed toward the other.
    pub fn offset(&self) -> f64 {
        if self.height_correction {
            self.layer_height / 2.0
        } else {
            0.0
        }
    }

    fn validate_profile(&self) -> PartResult<()> {
        require_positive("radius", self.radius)?;
        require_non_negative("layer_height", self.layer_height)?;
        if self.resolution < MIN_RESOLUTION {
            return Err(PartError::invalid(
                "resolution",
                format!("must be at least {MIN_RESOLUTION}, got {}", self.resolution),
            ));
        }
        if let Truncation::RadiusFactor(factor) = self.truncation {
            require_positive("truncation", factor)?;
        }
        Ok(())
    }

    /// The 2D teardrop, point toward +Y.
    pub fn profile(&self) -> PartResult<Profile> {
        self.validate_profile()?;
        let radius = self.radius;
        let offset = self.offset();
        let corrected = radius + offset;

        let semicircle = Profile::circle(corrected, self.resolution)?.intersection(
            &Profile::rectangle(DVec2::new(corrected, 0.0), DVec2::splat(corrected))?,
        );
        let point = Profile::polygon(&[
            DVec2::new(-radius, 0.0),
            DVec2::new(0.0, 2.0 * radius),
            DVec2::new(radius, 0.0),
        ])?;
        let body = Profile::hull([
            &semicircle.translate(DVec2::new(-offset, 0.0)),
            &semicircle.mirror_x().translate(DVec2::new(offset, 0.0)),
            &point,
        ]);

        let half_width = match self.truncation {
            Truncation::Envelope => corrected,
            Truncation::RadiusFactor(factor) => radius * factor,
        };
        Ok(body.intersection(&Profile::square(half_width)?))
    }

    /// The hole solid along +Y.
    pub fn solid(&self) -> PartResult<Solid> {
        require_positive("height", self.height)?;
        let profile = self.profile()?;
        debug!(
            radius = self.radius,
            height = self.height,
            offset = self.offset(),
            "teardrop"
        );
        Ok(linear_extrude(&profile, self.height)?
            .rotate_x(90.0)
            .mirror_y())
    }
}

/// Teardrop profile with default print settings.
pub fn teardrop_profile(radius: f64, height_correction: bool) -> PartResult<Profile> {
    Teardrop {
        radius,
        height_correction,
        ..Teardrop::default()
    }
    .profile()
}

/// Teardrop hole solid with default print settings.
pub fn teardrop_solid(radius: f64, height: f64, height_correction: bool) -> PartResult<Solid> {
    Teardrop {
        radius,
        height,
        height_correction,
        ..Teardrop::default()
    }
    .solid()
}

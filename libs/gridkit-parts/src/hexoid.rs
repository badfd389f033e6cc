//! # Rounded Hexoids
//!
//! Hexagonal prisms whose ends are chamfered over a round radius `rr`.
//! Three styles share one slice table layout:
//!
//! | style  | ends                 | use                              |
//! |--------|----------------------|----------------------------------|
//! | solid  | shrink to `r - rr`   | peg that slides into a hole      |
//! | hole   | flare to `r + rr`    | through-cut with eased entries   |
//! | recess | flare at the bottom  | blind pocket open at `z = 0`     |
//!
//! The hexagon has its circumradius `r` and a vertex on +X.

use crate::error::{require_non_negative, require_positive, PartError, PartResult};
use gridkit_config::constants::HEXAGON_RESOLUTION;
use gridkit_csg::{loft, Profile, Slice, Solid};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// End treatment of a rounded hexoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HexoidStyle {
    /// Ends shrink inward.
    Solid,
    /// Ends flare outward.
    Hole,
    /// Only the bottom flares; the top stays at full size.
    Recess,
}

impl HexoidStyle {
    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            HexoidStyle::Solid => "solid",
            HexoidStyle::Hole => "hole",
            HexoidStyle::Recess => "recess",
        }
    }
}

impl fmt::Display for HexoidStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HexoidStyle {
    type Err = PartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(HexoidStyle::Solid),
            "hole" => Ok(HexoidStyle::Hole),
            "recess" => Ok(HexoidStyle::Recess),
            other => Err(PartError::invalid(
                "style",
                format!("expected solid, hole or recess, got {other:?}"),
            )),
        }
    }
}

/// Parameters of a rounded hexoid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hexoid {
    /// Circumradius of the hexagon.
    pub radius: f64,
    /// Height along +Z.
    pub height: f64,
    /// Chamfer depth at the ends.
    pub round_radius: f64,
    /// End treatment.
    pub style: HexoidStyle,
}

impl Default for Hexoid {
    fn default() -> Self {
        Self {
            radius: 10.0,
            height: 35.0,
            round_radius: 1.0,
            style: HexoidStyle::Recess,
        }
    }
}

impl Hexoid {
    /// The loft table for these parameters.
    pub fn slices(&self) -> PartResult<Vec<Slice>> {
        hexoid_slices(self.radius, self.height, self.round_radius, self.style)
    }

    /// Builds the solid.
    pub fn solid(&self) -> PartResult<Solid> {
        rounded_hexoid(self.radius, self.height, self.round_radius, self.style)
    }
}

/// Slice table of a rounded hexoid; scales are relative to `radius`.
///
/// # Errors
///
/// `InvalidParameter` when `radius` or `height` is not positive, when
/// `round_radius` is negative or not below `radius`, or when it is too
/// large for `height` (more than half of it for solids and holes, more
/// than all of it for recesses).
pub fn hexoid_slices(
    radius: f64,
    height: f64,
    round_radius: f64,
    style: HexoidStyle,
) -> PartResult<Vec<Slice>> {
    require_positive("radius", radius)?;
    require_positive("height", height)?;
    require_non_negative("round_radius", round_radius)?;
    if round_radius >= radius {
        return Err(PartError::invalid(
            "round_radius",
            format!("must be less than the radius {radius}, got {round_radius}"),
        ));
    }
    let limit = match style {
        HexoidStyle::Solid | HexoidStyle::Hole => height / 2.0,
        HexoidStyle::Recess => height,
    };
    if round_radius > limit {
        return Err(PartError::invalid(
            "round_radius",
            format!("must be at most {limit} for a {style} of height {height}, got {round_radius}"),
        ));
    }

    let rr = round_radius;
    let down = (radius - rr) / radius;
    let up = (radius + rr) / radius;
    Ok(match style {
        HexoidStyle::Solid => vec![
            Slice::new(0.0, down),
            Slice::new(rr, 1.0),
            Slice::new(height - rr, 1.0),
            Slice::new(height, down),
        ],
        HexoidStyle::Hole => vec![
            Slice::new(0.0, up),
            Slice::new(rr, 1.0),
            Slice::new(height - rr, 1.0),
            Slice::new(height, up),
        ],
        HexoidStyle::Recess => vec![
            Slice::new(0.0, up),
            Slice::new(rr, 1.0),
            Slice::new(height, 1.0),
        ],
    })
}

/// Builds a rounded hexoid standing on `z = 0`.
///
/// # Example
///
/// ```rust
/// use gridkit_parts::{rounded_hexoid, HexoidStyle};
///
/// let peg = rounded_hexoid(10.0, 35.0, 1.0, HexoidStyle::Solid).unwrap();
/// let (min, max) = peg.bounding_box().unwrap();
/// assert_eq!((min.z, max.z), (0.0, 35.0));
/// assert_eq!(max.x, 10.0);
/// ```
pub fn rounded_hexoid(
    radius: f64,
    height: f64,
    round_radius: f64,
    style: HexoidStyle,
) -> PartResult<Solid> {
    let slices = hexoid_slices(radius, height, round_radius, style)?;
    debug!(radius, height, round_radius, %style, "rounded hexoid");
    let hexagon = Profile::circle(radius, HEXAGON_RESOLUTION)?;
    Ok(loft(&hexagon, &slices)?)
}

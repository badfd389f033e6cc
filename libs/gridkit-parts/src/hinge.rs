//! # Hinge
//!
//! A print-in-place hinge for the grid. Two mirrored leaves stand upright
//! in the XZ plane on either side of the Z axis, which is the hinge axis.
//! The leaf height is split into interlocking knuckles: even knuckles hang
//! off the right leaf, odd knuckles off the left leaf and carry a waisted
//! pin that keeps the two halves captive.
//!
//! ## Knuckle layout
//!
//! With `n` knuckles, clearance `c`, even/odd ratio `q` and leaf height `H`:
//!
//! ```text
//! total = H - c (n - 1)
//! even  = total * q / ceil(n / 2)
//! odd   = total * (1 - q) / floor(n / 2)
//! start = floor(i / 2) (even + odd) + (i mod 2) even + i c
//! ```
//!
//! ## Example
//!
//! ```rust
//! use gridkit_parts::{knuckle_layout, GridConfig, HingeParams};
//!
//! let params = HingeParams::default();
//! let height = params.leaf_height(&GridConfig::default());
//! let knuckles = knuckle_layout(&params, height).unwrap();
//! let last = knuckles.last().unwrap();
//! assert!((last.start + last.height - height).abs() < 1e-9);
//! ```

use crate::config::GridConfig;
use crate::error::{require_count, require_non_negative, require_positive, PartError, PartResult};
use crate::teardrop::{Teardrop, Truncation};
use glam::{DVec2, DVec3};
use gridkit_csg::{linear_extrude, rotate_extrude, Path2D, Profile, Solid};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Parameters of a hinge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HingeParams {
    /// Grid cells across each leaf.
    pub grid_width: u32,
    /// Grid cells along the hinge axis.
    pub grid_height: u32,
    /// Leaf thickness; also the pin diameter.
    pub thickness: f64,
    /// Number of knuckles, odd.
    pub knuckle_count: u32,
    /// Gap between moving parts.
    pub knuckle_clearance: f64,
    /// Share of the knuckle height given to even knuckles.
    pub even_odd_ratio: f64,
    /// Material kept around each fastener cap.
    pub fastener_margin: f64,
    /// Opening angle of the second leaf, in degrees.
    pub rotation: f64,
    /// Cut-off of the bolt teardrops.
    pub truncation: Truncation,
}

impl Default for HingeParams {
    fn default() -> Self {
        Self {
            grid_width: 1,
            grid_height: 1,
            thickness: 6.0,
            knuckle_count: 3,
            knuckle_clearance: 0.4,
            even_odd_ratio: 0.6,
            fastener_margin: 4.0,
            rotation: 0.0,
            truncation: Truncation::Envelope,
        }
    }
}

impl HingeParams {
    /// Leaf extent along the hinge axis.
    pub fn leaf_height(&self, config: &GridConfig) -> f64 {
        config.grid_spacing * f64::from(self.grid_height.saturating_sub(1))
            + config.fastener_cap_diameter
            + 2.0 * self.fastener_margin
    }

    /// Leaf extent away from the hinge axis.
    pub fn leaf_width(&self, config: &GridConfig) -> f64 {
        config.grid_spacing * (f64::from(self.grid_width) - 0.5)
            + config.fastener_cap_diameter / 2.0
            + self.fastener_margin
    }

    /// Pin radius.
    pub fn pin_radius(&self) -> f64 {
        self.thickness / 2.0
    }

    /// Half-width of the clearance box cut around the knuckles.
    pub fn knuckle_cut_radius(&self) -> f64 {
        2.0 * self.pin_radius() + self.knuckle_clearance
    }

    fn validate(&self, config: &GridConfig) -> PartResult<()> {
        config.validate()?;
        require_count("grid_width", self.grid_width, 1)?;
        require_count("grid_height", self.grid_height, 1)?;
        require_positive("thickness", self.thickness)?;
        require_non_negative("fastener_margin", self.fastener_margin)?;
        if !self.rotation.is_finite() {
            return Err(PartError::invalid("rotation", "must be finite"));
        }
        if let Truncation::RadiusFactor(factor) = self.truncation {
            require_positive("truncation", factor)?;
        }
        Ok(())
    }
}

/// One knuckle of the layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knuckle {
    /// Position along the hinge, from the bottom.
    pub index: u32,
    /// Z of the knuckle's bottom face.
    pub start: f64,
    /// Knuckle height.
    pub height: f64,
    /// Even knuckles belong to the right leaf.
    pub even: bool,
}

impl Knuckle {
    /// Z of the knuckle's top face.
    pub fn end(&self) -> f64 {
        self.start + self.height
    }
}

/// Splits `leaf_height` into alternating knuckles separated by the
/// clearance.
///
/// # Errors
///
/// Rejects an even or too small knuckle count, a ratio outside `(0, 1)`
/// and clearances that leave no room for the knuckles.
pub fn knuckle_layout(params: &HingeParams, leaf_height: f64) -> PartResult<Vec<Knuckle>> {
    let count = params.knuckle_count;
    require_count("knuckle_count", count, 3)?;
    if count % 2 == 0 {
        return Err(PartError::invalid(
            "knuckle_count",
            format!("must be odd, got {count}"),
        ));
    }
    let ratio = params.even_odd_ratio;
    if !(ratio.is_finite() && ratio > 0.0 && ratio < 1.0) {
        return Err(PartError::invalid(
            "even_odd_ratio",
            format!("must lie strictly between 0 and 1, got {ratio}"),
        ));
    }
    require_non_negative("knuckle_clearance", params.knuckle_clearance)?;
    require_positive("leaf_height", leaf_height)?;

    let clearance = params.knuckle_clearance;
    let total = leaf_height - clearance * f64::from(count - 1);
    if total <= 0.0 {
        return Err(PartError::invalid(
            "knuckle_clearance",
            format!("clearances exceed the leaf height {leaf_height}"),
        ));
    }
    let even = total * ratio / f64::from(count.div_ceil(2));
    let odd = total * (1.0 - ratio) / f64::from(count / 2);

    Ok((0..count)
        .map(|index| {
            let is_even = index % 2 == 0;
            Knuckle {
                index,
                start: f64::from(index / 2) * (even + odd)
                    + f64::from(index % 2) * even
                    + f64::from(index) * clearance,
                height: if is_even { even } else { odd },
                even: is_even,
            }
        })
        .collect())
}

/// Centers of the fastener holes in leaf coordinates: X away from the
/// axis, Z along it.
fn fastener_positions(params: &HingeParams, config: &GridConfig) -> Vec<DVec2> {
    let inset = config.fastener_cap_diameter / 2.0 + params.fastener_margin;
    (0..params.grid_width)
        .flat_map(|column| {
            (0..params.grid_height).map(move |row| {
                DVec2::new(
                    config.hole_center(column),
                    f64::from(row) * config.grid_spacing + inset,
                )
            })
        })
        .collect()
}

/// The right leaf: `0 <= y <= thickness`, `0 <= z <= leaf height`.
pub fn hinge_leaf(params: &HingeParams, config: &GridConfig) -> PartResult<Solid> {
    params.validate(config)?;
    let thickness = params.thickness;
    let height = params.leaf_height(config);
    let pad_radius = config.fastener_cap_diameter / 2.0 + params.fastener_margin;

    let spine = Profile::rectangle(
        DVec2::new(thickness / 2.0, height / 2.0),
        DVec2::new(thickness / 2.0, height / 2.0),
    )?;
    let pad = Profile::circle(pad_radius, config.resolution)?;
    let pads: Vec<Profile> = fastener_positions(params, config)
        .into_iter()
        .map(|center| pad.translate(center))
        .collect();
    let outline = Profile::hull(std::iter::once(&spine).chain(&pads));

    Ok(linear_extrude(&outline, thickness)?
        .translate(DVec3::new(0.0, -height / 2.0, -thickness / 2.0))
        .rotate_x(90.0)
        .translate(DVec3::new(0.0, thickness / 2.0, height / 2.0)))
}

/// Counterbored bolt holes through both leaves.
fn bolt_cuts(params: &HingeParams, config: &GridConfig) -> PartResult<Vec<Solid>> {
    let overlap = config.cut_overlap;
    let counterbore = Teardrop::with_config(
        config.fastener_cap_diameter / 2.0,
        config.fastener_cap_height + overlap,
        config,
    )
    .truncated(params.truncation)
    .solid()?;
    let shank = Teardrop::with_config(
        config.fastener_hole_diameter / 2.0,
        params.thickness + 2.0 * overlap,
        config,
    )
    .truncated(params.truncation)
    .solid()?;
    let cut = counterbore.union(&shank);

    Ok(fastener_positions(params, config)
        .into_iter()
        .flat_map(|center| {
            [
                cut.translate(DVec3::new(center.x, -overlap, center.y)),
                cut.translate(DVec3::new(-center.x, -overlap, center.y)),
            ]
        })
        .collect())
}

/// Clearance box around the knuckles.
fn knuckle_cut(params: &HingeParams, height: f64, overlap: f64) -> PartResult<Solid> {
    let radius = params.knuckle_cut_radius();
    Ok(Solid::cuboid(
        DVec3::new(-radius, -radius, -overlap),
        DVec3::new(radius, radius, height + overlap),
    )?)
}

/// Web tying a knuckle to its leaf: a curved gusset below the leaf plane
/// plus a block reaching across the clearance.
fn connector(params: &HingeParams, height: f64, resolution: u32) -> PartResult<Solid> {
    let t = params.thickness;
    let gusset = Path2D::new([DVec2::ZERO, DVec2::new(0.0, -t)])
        .append_bezier(
            &[
                DVec2::new(0.0, -t),
                DVec2::new(t, -t),
                DVec2::new(t, 0.0),
                DVec2::new(2.0 * t, 0.0),
            ],
            resolution,
        )?
        .close()?;
    let block = Solid::cuboid(
        DVec3::ZERO,
        DVec3::new(t + params.knuckle_clearance, t, height),
    )?;
    Ok(linear_extrude(&gusset, height)?.union(&block))
}

/// Pin with a waist: a revolved bezier that narrows to about five ninths of
/// `radius` just above mid height, so the bore printed around it holds it
/// captive.
fn shaft(height: f64, radius: f64, resolution: u32) -> PartResult<Solid> {
    let outline = Path2D::new([DVec2::ZERO, DVec2::new(radius, 0.0)])
        .append_bezier(
            &[
                DVec2::new(radius, 0.0),
                DVec2::new(0.0, height / 2.0),
                DVec2::new(radius, height),
            ],
            resolution,
        )?
        .append_point(DVec2::new(0.0, height))
        .close()?;
    Ok(rotate_extrude(&outline, resolution)?)
}

/// Material a knuckle adds and the clearance it cuts from the opposite
/// leaf.
struct KnuckleSolids {
    addition: Solid,
    subtraction: Solid,
}

fn knuckle_solids(
    params: &HingeParams,
    knuckle: &Knuckle,
    resolution: u32,
) -> PartResult<KnuckleSolids> {
    let clearance = params.knuckle_clearance;
    let pin_radius = params.pin_radius();
    let hole_height = knuckle.height + 2.0 * clearance;
    let hole_base = DVec3::new(0.0, 0.0, knuckle.start - clearance);
    let outer = Solid::cylinder(knuckle.start, knuckle.end(), 2.0 * pin_radius, resolution)?;

    debug!(
        index = knuckle.index,
        start = knuckle.start,
        height = knuckle.height,
        even = knuckle.even,
        "knuckle"
    );

    if knuckle.even {
        let web = connector(params, knuckle.height, resolution)?
            .translate(DVec3::new(0.0, 0.0, knuckle.start));
        let hole = connector(params, hole_height, resolution)?
            .mirror_y()
            .translate(hole_base)
            .mirror_x();
        Ok(KnuckleSolids {
            addition: outer.union(&web),
            subtraction: hole,
        })
    } else {
        let web = connector(params, knuckle.height, resolution)?
            .mirror_x()
            .translate(DVec3::new(0.0, 0.0, knuckle.start));
        let hole = connector(params, hole_height, resolution)?
            .mirror_x()
            .mirror_y()
            .translate(hole_base)
            .mirror_x();
        let bore = shaft(hole_height, pin_radius + clearance, resolution)?.translate(hole_base);
        let pin = shaft(hole_height, pin_radius, resolution)?.translate(hole_base);
        Ok(KnuckleSolids {
            addition: outer.union(&web).difference(&bore).union(&pin),
            subtraction: hole,
        })
    }
}

/// Builds the hinge: both leaves with bolt holes, interlocked knuckles
/// and pins, the second leaf opened by `rotation` degrees about Z.
pub fn hinge(params: &HingeParams, config: &GridConfig) -> PartResult<Solid> {
    params.validate(config)?;
    let height = params.leaf_height(config);
    let knuckles = knuckle_layout(params, height)?;
    let resolution = config.resolution;

    let leaf = hinge_leaf(params, config)?;
    let leaves = leaf.union(&leaf.mirror_x().rotate_z(params.rotation));

    let mut cutters = vec![knuckle_cut(params, height, config.cut_overlap)?];
    cutters.extend(bolt_cuts(params, config)?);
    let mut additions = Vec::with_capacity(knuckles.len());
    for knuckle in &knuckles {
        let solids = knuckle_solids(params, knuckle, resolution)?;
        cutters.push(solids.subtraction);
        additions.push(solids.addition);
    }

    let body = leaves.difference_all(&cutters);
    info!(
        leaf_height = height,
        leaf_width = params.leaf_width(config),
        knuckles = knuckles.len(),
        rotation = params.rotation,
        "hinge"
    );
    Ok(Solid::union_all(std::iter::once(&body).chain(&additions)))
}

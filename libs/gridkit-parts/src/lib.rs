//! # gridkit-parts
//!
//! Parametric generators for 3D-printable parts of a modular grid system:
//! horizontal teardrop fastener holes, rounded hexagonal holes and
//! recesses, angle brackets, hinges and cutting jigs.
//!
//! ## Architecture
//!
//! ```text
//! GridConfig + part parameters
//!       ↓ validate (PartError::InvalidParameter)
//! teardrop / hexoid / bracket / hinge / jig
//!       ↓ gridkit-csg profiles, extrusions and booleans
//! Solid
//! ```
//!
//! Every generator is a pure function of its parameters. Parameter records
//! implement serde, so a batch of parts can be described in JSON and
//! rendered in parallel with [`render_batch`].
//!
//! ## Example
//!
//! ```rust
//! use gridkit_parts::{bracket, BracketParams, GridConfig};
//!
//! let config = GridConfig::default();
//! let params = BracketParams { grids: 2, ..BracketParams::default() };
//! let solid = bracket(&params, &config).unwrap();
//! let (_, max) = solid.bounding_box().unwrap();
//! assert!((max.z - params.width(&config)).abs() < 1e-9);
//! ```

pub mod batch;
pub mod bracket;
pub mod config;
pub mod error;
pub mod hexoid;
pub mod hinge;
pub mod jig;
pub mod teardrop;

pub use batch::{render_batch, PartSpec};
pub use bracket::{bracket, bracket_plate, BracketParams};
pub use config::GridConfig;
pub use error::{PartError, PartResult};
pub use hexoid::{hexoid_slices, rounded_hexoid, Hexoid, HexoidStyle};
pub use hinge::{hinge, hinge_leaf, knuckle_layout, HingeParams, Knuckle};
pub use jig::{jig, JigParams};
pub use teardrop::{teardrop_profile, teardrop_solid, Teardrop, Truncation};

//! # gridkit-csg
//!
//! Constructive solid geometry kernel for grid-compatible printable parts.
//!
//! ## Architecture
//!
//! ```text
//! Profile / Path2D (2D regions) → extrude / loft / revolve → Solid → Mesh
//! ```
//!
//! - [`Profile`]: immutable 2D multipolygon with booleans, hull and affine
//!   transforms.
//! - [`Path2D`]: polyline builder with bezier segments, closed into a
//!   profile.
//! - [`Solid`]: immutable boundary of convex planar polygons with BSP
//!   boolean operations.
//! - [`Mesh`]: welded triangle mesh handed to renderers and exporters.
//!
//! All geometry uses f64 internally. Every operation returns a new value;
//! nothing is mutated in place, so values can be shared across threads.
//!
//! ## Example
//!
//! ```rust
//! use gridkit_csg::{linear_extrude, Profile, Solid};
//! use glam::DVec3;
//!
//! let plate = Solid::cuboid(DVec3::ZERO, DVec3::new(10.0, 10.0, 2.0)).unwrap();
//! let hole = linear_extrude(&Profile::circle(2.0, 16).unwrap(), 4.0)
//!     .unwrap()
//!     .translate(DVec3::new(5.0, 5.0, -1.0));
//! let drilled = plate.difference(&hole);
//! assert!(drilled.volume() < plate.volume());
//! ```

pub mod error;
pub mod mesh;
pub mod ops;
pub mod profile;
pub mod solid;

pub use error::{CsgError, CsgResult};
pub use mesh::Mesh;
pub use ops::boolean::{Plane, Polygon};
pub use ops::extrude::{linear_extrude, loft, rotate_extrude, Slice};
pub use profile::{Path2D, Profile};
pub use solid::Solid;

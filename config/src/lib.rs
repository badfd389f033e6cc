//! # Config Crate
//!
//! Centralized configuration constants for the gridkit part generators.
//! Every tolerance, tessellation default and grid dimension shared by the
//! geometry kernel and the part generators is defined here once.
//!
//! ## Usage
//!
//! ```rust
//! use gridkit_config::constants::{approx_equal, CIRCLE_RESOLUTION, LAYER_HEIGHT};
//!
//! // Horizontal holes are corrected by half a layer.
//! let offset = LAYER_HEIGHT / 2.0;
//! assert!(approx_equal(offset, 0.1));
//!
//! // Round features default to 16 facets.
//! assert_eq!(CIRCLE_RESOLUTION, 16);
//! ```
//!
//! ## Categories
//!
//! - **Precision**: comparison and classification tolerances
//! - **Printing**: layer height and cut overlap
//! - **Resolution**: facet counts for round and hexagonal features
//! - **Grid**: spacing and fastener dimensions of the grid system
//! - **Limits**: stack sizes for recursive geometry

pub mod constants;

#[cfg(test)]
mod tests;

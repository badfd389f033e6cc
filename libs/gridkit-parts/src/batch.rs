//! # Batch Rendering
//!
//! A tagged record naming one part and its parameters, and a parallel
//! renderer over a list of them. A batch is typically loaded from JSON:
//!
//! ```rust
//! use gridkit_parts::{render_batch, GridConfig, PartSpec};
//!
//! let specs: Vec<PartSpec> = serde_json::from_str(
//!     r#"[
//!         { "part": "teardrop", "radius": 4.0, "height": 10.0 },
//!         { "part": "hexoid", "style": "hole" },
//!         { "part": "jig", "grids": 2 }
//!     ]"#,
//! )
//! .unwrap();
//! let solids = render_batch(&specs, &GridConfig::default());
//! assert_eq!(solids.len(), 3);
//! assert!(solids.iter().all(|solid| solid.is_ok()));
//! ```

use crate::bracket::{bracket, BracketParams};
use crate::config::GridConfig;
use crate::error::PartResult;
use crate::hexoid::Hexoid;
use crate::hinge::{hinge, HingeParams};
use crate::jig::{jig, JigParams};
use crate::teardrop::Teardrop;
use gridkit_csg::Solid;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One part to render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "part", rename_all = "snake_case")]
pub enum PartSpec {
    /// A teardrop hole solid.
    Teardrop(Teardrop),
    /// A rounded hexoid.
    Hexoid(Hexoid),
    /// An angle bracket.
    Bracket(BracketParams),
    /// A hinge.
    Hinge(HingeParams),
    /// A cutting jig.
    Jig(JigParams),
}

impl PartSpec {
    /// Name of the part kind.
    pub fn name(&self) -> &'static str {
        match self {
            PartSpec::Teardrop(_) => "teardrop",
            PartSpec::Hexoid(_) => "hexoid",
            PartSpec::Bracket(_) => "bracket",
            PartSpec::Hinge(_) => "hinge",
            PartSpec::Jig(_) => "jig",
        }
    }

    /// Builds the part. Teardrops and hexoids carry their own dimensions
    /// and ignore `config`.
    pub fn render(&self, config: &GridConfig) -> PartResult<Solid> {
        match self {
            PartSpec::Teardrop(teardrop) => teardrop.solid(),
            PartSpec::Hexoid(hexoid) => hexoid.solid(),
            PartSpec::Bracket(params) => bracket(params, config),
            PartSpec::Hinge(params) => hinge(params, config),
            PartSpec::Jig(params) => jig(params, config),
        }
    }
}

/// Renders every spec in parallel. Results keep the order of `specs`;
/// one failing part does not stop the others.
pub fn render_batch(specs: &[PartSpec], config: &GridConfig) -> Vec<PartResult<Solid>> {
    debug!(parts = specs.len(), "render batch");
    specs
        .par_iter()
        .enumerate()
        .map(|(index, spec)| {
            let result = spec.render(config);
            if let Err(err) = &result {
                warn!(index, part = spec.name(), error = %err, "part failed");
            }
            result
        })
        .collect()
}

//! Curated surface for host code (CLI, display code).
//!
//! Prefer these re-exports over reaching into modules; the split between
//! `area`, `bounds`, `scale` and `fit` is an internal layering detail.

// Measurement
pub use crate::area::{
    collection_area, feature_area, geometry_area, multipolygon_area, polygon_area, ring_area,
    shoelace_area,
};
pub use crate::bounds::{bounds, Bounds2};
pub use crate::stats::{planar_stats, PlanarStats};
// Rescaling
pub use crate::fit::{fit_area, round_to, FitError, Fitted};
pub use crate::scale::{scale_collection, scale_point};
// Configuration and projection
pub use crate::cfg::{
    MatchCfg, ProjCfg, MAX_DECIMALS, WEB_MERCATOR_MAX_LAT, WEB_MERCATOR_RADIUS,
};
pub use crate::proj::Projector;

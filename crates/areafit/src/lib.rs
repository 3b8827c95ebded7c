//! Planar area measurement and exact-area rescaling of polygon collections.
//!
//! Layout (leaves first)
//! - `proj`: spherical Web Mercator forward/inverse (`Projector`, `ProjCfg`).
//! - `area`: shoelace area of rings, polygons, multipolygons and collections.
//! - `bounds`: planar bounding box and its midpoint (the scaling pivot).
//! - `scale`: uniform scale of every polygon vertex about a planar pivot.
//! - `fit`: bounded iterative matcher hitting a target area at fixed decimals.
//! - `stats`: planar summary numbers for display code.
//!
//! Everything here is pure and synchronous. Inputs are never mutated; scaling
//! returns a new `Collection` that shares attribute payloads via `Arc`.

pub mod api;
pub mod area;
pub mod bounds;
pub mod cfg;
pub mod fit;
pub mod proj;
pub mod scale;
pub mod stats;
mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use types::{Collection, Feature, Geometry, GeometryKind, LonLat, MultiPolygon, Polygon, Ring, Xy};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::area::{collection_area, polygon_area, ring_area};
    pub use crate::bounds::{bounds, Bounds2};
    pub use crate::cfg::{MatchCfg, ProjCfg};
    pub use crate::fit::{fit_area, round_to, FitError, Fitted};
    pub use crate::proj::Projector;
    pub use crate::scale::scale_collection;
    pub use crate::types::{
        Collection, Feature, Geometry, GeometryKind, LonLat, MultiPolygon, Polygon, Ring, Xy,
    };
}

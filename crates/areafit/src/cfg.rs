//! Configuration values (immutable, `Copy`).
//!
//! Policy
//! - The projection is fixed: one spherical Mercator with a single radius. It is
//!   built once and handed to `Projector::new`; nothing looks it up by name.
//! - Matching defaults mirror the display precision of the surrounding tool
//!   (two decimals, ten attempts).

/// Sphere radius of EPSG:3857 (meters).
pub const WEB_MERCATOR_RADIUS: f64 = 6_378_137.0;

/// Latitude at which Web Mercator maps to a square world (degrees).
pub const WEB_MERCATOR_MAX_LAT: f64 = 85.051_128_779_806_59;

/// Finest rounding precision the matcher accepts. Past 15 places an f64 area in
/// m² carries no more significant digits.
pub const MAX_DECIMALS: u32 = 15;

/// Spherical Mercator parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjCfg {
    /// Reference sphere radius in meters.
    pub radius: f64,
    /// Documented edge of the supported latitude band (degrees). Not enforced.
    pub max_lat: f64,
}

impl ProjCfg {
    pub const fn web_mercator() -> Self {
        Self {
            radius: WEB_MERCATOR_RADIUS,
            max_lat: WEB_MERCATOR_MAX_LAT,
        }
    }
}

impl Default for ProjCfg {
    fn default() -> Self {
        Self::web_mercator()
    }
}

/// Exact-area matching knobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchCfg {
    /// Decimal places used for the rounded-equality test (at most [`MAX_DECIMALS`]).
    pub decimals: u32,
    /// Upper bound on scale operations in one run.
    pub max_iter: usize,
}

impl Default for MatchCfg {
    fn default() -> Self {
        Self {
            decimals: 2,
            max_iter: 10,
        }
    }
}

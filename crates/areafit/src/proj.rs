//! Spherical Web Mercator (EPSG:3857) between lon/lat degrees and x/y meters.
//!
//! Formulas (λ, φ in radians, R the sphere radius)
//! - forward: `x = R λ`, `y = R ln tan(π/4 + φ/2)`
//! - inverse: `λ = x / R`, `φ = 2 atan(exp(y / R)) − π/2`
//!
//! Undefined at the poles: `forward` yields an infinite or huge, meaningless `y`
//! there (floating `tan(π/2)` is finite). Not a supported input.
//! Longitudes are not wrapped, so the pair is an exact inverse for any finite
//! longitude and |lat| < 90° up to floating error.

use crate::cfg::ProjCfg;
use crate::types::{LonLat, Xy};
use std::f64::consts::FRAC_PI_4;

/// Immutable projector; cheap to copy and safe to share.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projector {
    cfg: ProjCfg,
}

impl Projector {
    #[inline]
    pub const fn new(cfg: ProjCfg) -> Self {
        Self { cfg }
    }

    #[inline]
    pub fn cfg(&self) -> ProjCfg {
        self.cfg
    }

    #[inline]
    pub fn forward(&self, p: LonLat) -> Xy {
        let r = self.cfg.radius;
        let lam = p.lon.to_radians();
        let phi = p.lat.to_radians();
        Xy::new(r * lam, r * (FRAC_PI_4 + phi / 2.0).tan().ln())
    }

    #[inline]
    pub fn inverse(&self, q: Xy) -> LonLat {
        let r = self.cfg.radius;
        let lam = q.x / r;
        let phi = 2.0 * (q.y / r).exp().atan() - std::f64::consts::FRAC_PI_2;
        LonLat::new(lam.to_degrees(), phi.to_degrees())
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self::new(ProjCfg::web_mercator())
    }
}

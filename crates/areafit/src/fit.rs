//! Exact-area matching: rescale a collection until its rounded planar area equals
//! the rounded target.
//!
//! Algorithm
//! - Validate the target (finite, > 0) and the precision (<= `MAX_DECIMALS`).
//! - Fix the pivot once: bbox midpoint of the *input* collection.
//! - Repeat: measure; stop on rounded equality; otherwise scale the current
//!   collection by `sqrt(target / area)` about the pivot.
//! - At most `max_iter` scale steps. The collection produced by the last step is
//!   still measured, so a run that lands on its final step succeeds.
//!
//! `A' = A·s²` holds exactly in the plane, but every step round-trips through
//! lon/lat and the measured area is not perfectly multiplicative. The factor is
//! re-derived from a fresh measurement each round, never composed.
//!
//! Rounding is half-away-from-zero (`f64::round`); areas are positive, so this is
//! also half-up.

use crate::area::collection_area;
use crate::bounds::bounds;
use crate::cfg::{MatchCfg, MAX_DECIMALS};
use crate::proj::Projector;
use crate::scale::scale_collection;
use crate::types::Collection;
use std::borrow::Cow;
use thiserror::Error;

/// Why a matching run stopped without a result. The input is untouched in all cases.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum FitError {
    #[error("target area must be a finite number > 0 (m²), got {target}")]
    InvalidInput { target: f64 },
    #[error("decimals must be at most {max}, got {decimals}")]
    InvalidPrecision { decimals: u32, max: u32 },
    #[error("current area is {area} m²; cannot scale")]
    DegenerateGeometry { area: f64 },
    #[error("could not reach exact target at {decimals} decimals: final={achieved} target={target}")]
    ConvergenceFailure {
        achieved: f64,
        target: f64,
        decimals: u32,
    },
}

/// Successful run.
#[derive(Debug)]
pub struct Fitted<P = (), G = ()> {
    pub collection: Collection<P, G>,
    /// Scale operations performed (0 if the input already matched).
    pub steps: usize,
    /// Final measured area (unrounded, m²).
    pub area: f64,
}

/// Round to `decimals` places, half away from zero. Precision saturates at
/// [`MAX_DECIMALS`].
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let d = decimals.min(MAX_DECIMALS) as i32;
    let p = 10f64.powi(d);
    (value * p).round() / p
}

/// Rescale `fc` about its bbox midpoint until `round(area) == round(target)`.
pub fn fit_area<P, G>(
    proj: &Projector,
    fc: &Collection<P, G>,
    target: f64,
    cfg: MatchCfg,
) -> Result<Fitted<P, G>, FitError> {
    if !target.is_finite() || target <= 0.0 {
        return Err(FitError::InvalidInput { target });
    }
    if cfg.decimals > MAX_DECIMALS {
        return Err(FitError::InvalidPrecision {
            decimals: cfg.decimals,
            max: MAX_DECIMALS,
        });
    }
    let target_r = round_to(target, cfg.decimals);
    let pivot = bounds(proj, fc).center;

    let mut current: Cow<'_, Collection<P, G>> = Cow::Borrowed(fc);
    let mut steps = 0;
    loop {
        let area = collection_area(proj, &*current);
        if !area.is_finite() || area <= 0.0 {
            return Err(FitError::DegenerateGeometry { area });
        }
        let area_r = round_to(area, cfg.decimals);
        if area_r == target_r {
            return Ok(Fitted {
                collection: current.into_owned(),
                steps,
                area,
            });
        }
        if steps >= cfg.max_iter {
            return Err(FitError::ConvergenceFailure {
                achieved: area_r,
                target: target_r,
                decimals: cfg.decimals,
            });
        }
        let factor = (target / area).sqrt();
        current = Cow::Owned(scale_collection(proj, &*current, pivot, factor));
        steps += 1;
    }
}

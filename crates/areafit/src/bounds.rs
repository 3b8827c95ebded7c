//! Planar bounding box of a collection and its midpoint (the scaling pivot).
//!
//! The pivot is the bbox midpoint, not an area centroid: cheap and deterministic,
//! but concave or lopsided shapes drift visually when scaled about it.

use crate::proj::Projector;
use crate::types::{Collection, Xy};

/// Axis-aligned planar box with its midpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Xy,
    pub max: Xy,
    pub center: Xy,
}

impl Bounds2 {
    /// All-zero box, returned when there is nothing to bound.
    pub fn degenerate() -> Self {
        Self {
            min: Xy::zeros(),
            max: Xy::zeros(),
            center: Xy::zeros(),
        }
    }

    /// True for the all-zero fallback. Not a usable pivot.
    pub fn is_degenerate(&self) -> bool {
        *self == Self::degenerate()
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Planar bbox over every Polygon/MultiPolygon vertex (holes included).
///
/// Returns `Bounds2::degenerate()` if there are no such vertices or an extreme
/// is not finite.
pub fn bounds<P, G>(proj: &Projector, fc: &Collection<P, G>) -> Bounds2 {
    let mut min = Xy::repeat(f64::INFINITY);
    let mut max = Xy::repeat(f64::NEG_INFINITY);
    for v in fc.vertices() {
        let q = proj.forward(v);
        min = min.inf(&q);
        max = max.sup(&q);
    }
    if !(min.iter().chain(max.iter()).all(|c| c.is_finite())) {
        return Bounds2::degenerate();
    }
    let center = min + (max - min) / 2.0;
    Bounds2 { min, max, center }
}

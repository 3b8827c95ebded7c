//! Uniform scale of polygon vertices about a fixed planar pivot.
//!
//! Each vertex goes geographic → planar → `pivot + (p − pivot)·factor` →
//! geographic. Non-area geometry and attributes are shared via `Arc`.

use crate::proj::Projector;
use crate::types::{Collection, Feature, Geometry, LonLat, Xy};

/// Scale one geographic point about `pivot` (planar) by `factor`.
#[inline]
pub fn scale_point(proj: &Projector, pivot: Xy, factor: f64, p: LonLat) -> LonLat {
    let q = proj.forward(p);
    proj.inverse(pivot + (q - pivot) * factor)
}

/// New collection with every Polygon/MultiPolygon vertex scaled.
///
/// Pre: `factor > 0` and finite. Not checked here beyond a debug assertion;
/// the matcher owns validation.
pub fn scale_collection<P, G>(
    proj: &Projector,
    fc: &Collection<P, G>,
    pivot: Xy,
    factor: f64,
) -> Collection<P, G> {
    debug_assert!(factor.is_finite() && factor > 0.0, "scale factor must be > 0");
    let f = |p: LonLat| scale_point(proj, pivot, factor, p);
    fc.features
        .iter()
        .map(|feat| {
            let geometry = feat.geometry.as_ref().map(|g| match g {
                Geometry::Polygon(poly) => Geometry::Polygon(poly.map_vertices(f)),
                Geometry::MultiPolygon(mp) => Geometry::MultiPolygon(mp.map_vertices(f)),
                other => other.clone(),
            });
            Feature {
                geometry,
                properties: feat.properties.clone(),
            }
        })
        .collect()
}

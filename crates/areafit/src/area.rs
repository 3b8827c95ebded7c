//! Planar (projected) area via the shoelace formula.
//!
//! Conventions
//! - Rings are projected with the given `Projector`, then auto-closed when the
//!   first and last points differ bitwise.
//! - Ring area is unsigned. Polygon area is `max(0, outer − Σ holes)`; the clamp
//!   turns badly wound or oversized holes into zero instead of a negative area.
//! - Non-area geometries and features without geometry contribute 0.
//!
//! Numerics: the cross-product sum is taken relative to the ring's first vertex.
//! The shoelace sum is translation invariant, and Mercator coordinates are large
//! (1e6..1e7 m), so this keeps small rings from cancelling away their digits.

use crate::proj::Projector;
use crate::types::{Collection, Feature, Geometry, LonLat, MultiPolygon, Polygon, Xy};

/// Unsigned shoelace area of a planar ring. Closes the ring if needed.
/// Fewer than 3 points yield 0.
pub fn shoelace_area(pts: &[Xy]) -> f64 {
    if pts.len() < 3 {
        return 0.0;
    }
    let first = pts[0];
    let last = pts[pts.len() - 1];
    let closing = if first == last { None } else { Some(first) };
    let mut sum = 0.0;
    let mut prev = Xy::zeros();
    for q in pts[1..].iter().copied().chain(closing) {
        let cur = q - first;
        sum += prev.x * cur.y - cur.x * prev.y;
        prev = cur;
    }
    sum.abs() / 2.0
}

/// Planar area of one geographic ring.
pub fn ring_area(proj: &Projector, ring: &[LonLat]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let mut pts: Vec<Xy> = ring.iter().map(|&p| proj.forward(p)).collect();
    if ring[0] != ring[ring.len() - 1] {
        pts.push(pts[0]);
    }
    shoelace_area(&pts)
}

/// Outer area minus hole areas, clamped at zero.
pub fn polygon_area(proj: &Projector, poly: &Polygon) -> f64 {
    let outer = ring_area(proj, &poly.outer);
    let holes: f64 = poly.holes.iter().map(|h| ring_area(proj, h)).sum();
    (outer - holes).max(0.0)
}

/// Sum of independently clamped polygon areas.
pub fn multipolygon_area(proj: &Projector, mp: &MultiPolygon) -> f64 {
    mp.0.iter().map(|p| polygon_area(proj, p)).sum()
}

pub fn geometry_area<G>(proj: &Projector, geom: &Geometry<G>) -> f64 {
    match geom {
        Geometry::Polygon(p) => polygon_area(proj, p),
        Geometry::MultiPolygon(mp) => multipolygon_area(proj, mp),
        Geometry::Other { .. } => 0.0,
    }
}

pub fn feature_area<P, G>(proj: &Projector, f: &Feature<P, G>) -> f64 {
    f.geometry.as_ref().map_or(0.0, |g| geometry_area(proj, g))
}

/// Total planar area of every Polygon/MultiPolygon feature.
pub fn collection_area<P, G>(proj: &Projector, fc: &Collection<P, G>) -> f64 {
    fc.features.iter().map(|f| feature_area(proj, f)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GeometryKind;
    use std::sync::Arc;

    fn geo_ring(proj: &Projector, xy: &[(f64, f64)]) -> Vec<LonLat> {
        xy.iter()
            .map(|&(x, y)| proj.inverse(Xy::new(x, y)))
            .collect()
    }

    const RECT: [(f64, f64); 4] = [(0.0, 0.0), (100.0, 0.0), (100.0, 50.0), (0.0, 50.0)];

    #[test]
    fn shoelace_rectangle() {
        let pts: Vec<Xy> = RECT.iter().map(|&(x, y)| Xy::new(x, y)).collect();
        assert!((shoelace_area(&pts) - 5000.0).abs() < 1e-9);
        // Clockwise order gives the same unsigned area.
        let rev: Vec<Xy> = pts.iter().rev().copied().collect();
        assert!((shoelace_area(&rev) - 5000.0).abs() < 1e-9);
    }

    #[test]
    fn shoelace_far_from_origin_keeps_digits() {
        let off = Xy::new(1.3e6, 6.1e6);
        let pts: Vec<Xy> = RECT.iter().map(|&(x, y)| Xy::new(x, y) + off).collect();
        assert!((shoelace_area(&pts) - 5000.0).abs() < 1e-6);
    }

    #[test]
    fn ring_area_rectangle_through_projection() {
        let pr = Projector::default();
        let ring = geo_ring(&pr, &RECT);
        assert!((ring_area(&pr, &ring) - 5000.0).abs() < 1e-6);
    }

    #[test]
    fn auto_close_invariance() {
        let pr = Projector::default();
        let open = geo_ring(&pr, &RECT);
        let mut closed = open.clone();
        closed.push(open[0]);
        assert_eq!(ring_area(&pr, &open), ring_area(&pr, &closed));
    }

    #[test]
    fn short_rings_are_zero() {
        let pr = Projector::default();
        assert_eq!(ring_area(&pr, &[]), 0.0);
        let two = geo_ring(&pr, &RECT[..2]);
        assert_eq!(ring_area(&pr, &two), 0.0);
        assert_eq!(shoelace_area(&[Xy::new(1.0, 2.0)]), 0.0);
    }

    #[test]
    fn hole_subtraction_and_clamp() {
        let pr = Projector::default();
        let outer = geo_ring(&pr, &RECT);
        let hole = geo_ring(&pr, &[(10.0, 10.0), (50.0, 10.0), (50.0, 35.0), (10.0, 35.0)]);
        let poly = Polygon::new(outer.clone(), vec![hole]);
        assert!((polygon_area(&pr, &poly) - 4000.0).abs() < 1e-6);

        let huge = geo_ring(&pr, &[(-50.0, -50.0), (200.0, -50.0), (200.0, 200.0), (-50.0, 200.0)]);
        let bad = Polygon::new(outer, vec![huge]);
        assert_eq!(polygon_area(&pr, &bad), 0.0);
    }

    #[test]
    fn multipolygon_sums_clamped_parts() {
        let pr = Projector::default();
        let outer = geo_ring(&pr, &RECT);
        let huge = geo_ring(&pr, &[(-50.0, -50.0), (200.0, -50.0), (200.0, 200.0), (-50.0, 200.0)]);
        let good = Polygon::new(outer.clone(), vec![]);
        let bad = Polygon::new(outer, vec![huge]);
        let mp = MultiPolygon(vec![good.clone(), bad, good]);
        assert!((multipolygon_area(&pr, &mp) - 10_000.0).abs() < 1e-6);
    }

    #[test]
    fn collection_skips_area_inert_features() {
        let pr = Projector::default();
        let poly = Polygon::new(geo_ring(&pr, &RECT), vec![]);
        let fc: Collection<&str, &str> = Collection::new(vec![
            Feature::new(Some(Geometry::Polygon(poly.clone())), "a"),
            Feature::new(
                Some(Geometry::Other {
                    kind: GeometryKind::LineString,
                    data: Arc::new("line"),
                }),
                "b",
            ),
            Feature::new(None, "c"),
            Feature::new(Some(Geometry::MultiPolygon(MultiPolygon(vec![poly]))), "d"),
        ]);
        assert!((collection_area(&pr, &fc) - 10_000.0).abs() < 1e-6);
        let empty: Collection = Collection::default();
        assert_eq!(collection_area(&pr, &empty), 0.0);
    }
}

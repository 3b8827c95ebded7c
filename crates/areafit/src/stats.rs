//! Planar summary numbers for display code.
//!
//! Everything is derived from `area` and `bounds`; geodesic figures are out of
//! scope here.

use crate::area::collection_area;
use crate::bounds::{bounds, Bounds2};
use crate::proj::Projector;
use crate::types::{Collection, GeometryKind};

#[derive(Clone, Debug, PartialEq)]
pub struct PlanarStats {
    pub feature_count: usize,
    /// Distinct geometry kinds in order of first appearance.
    pub geometry_kinds: Vec<GeometryKind>,
    pub polygon_count: usize,
    pub ring_count: usize,
    pub vertex_count: usize,
    /// Total planar area (m²).
    pub area: f64,
    pub bounds: Bounds2,
}

impl PlanarStats {
    #[inline]
    pub fn width(&self) -> f64 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.bounds.height()
    }
}

pub fn planar_stats<P, G>(proj: &Projector, fc: &Collection<P, G>) -> PlanarStats {
    let mut geometry_kinds = Vec::new();
    for kind in fc.features.iter().filter_map(|f| f.geometry.as_ref().map(|g| g.kind())) {
        if !geometry_kinds.contains(&kind) {
            geometry_kinds.push(kind);
        }
    }
    let (mut polygon_count, mut ring_count, mut vertex_count) = (0, 0, 0);
    for p in fc.polygons() {
        polygon_count += 1;
        for r in p.rings() {
            ring_count += 1;
            vertex_count += r.len();
        }
    }
    PlanarStats {
        feature_count: fc.len(),
        geometry_kinds,
        polygon_count,
        ring_count,
        vertex_count,
        area: collection_area(proj, fc),
        bounds: bounds(proj, fc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Feature, Geometry, MultiPolygon, Polygon, Xy};
    use std::sync::Arc;

    #[test]
    fn counts_kinds_and_sizes() {
        let pr = Projector::default();
        let ring = |x0: f64| -> Vec<_> {
            [(x0, 0.0), (x0 + 10.0, 0.0), (x0 + 10.0, 10.0), (x0, 10.0), (x0, 0.0)]
                .iter()
                .map(|&(x, y)| pr.inverse(Xy::new(x, y)))
                .collect()
        };
        let poly = Polygon::new(ring(0.0), vec![]);
        let fc: Collection<(), ()> = Collection::new(vec![
            Feature::new(
                Some(Geometry::Other {
                    kind: GeometryKind::Point,
                    data: Arc::new(()),
                }),
                (),
            ),
            Feature::new(Some(Geometry::Polygon(poly.clone())), ()),
            Feature::new(
                Some(Geometry::MultiPolygon(MultiPolygon(vec![
                    poly,
                    Polygon::new(ring(20.0), vec![]),
                ]))),
                (),
            ),
            Feature::new(None, ()),
        ]);
        let s = planar_stats(&pr, &fc);
        assert_eq!(s.feature_count, 4);
        assert_eq!(
            s.geometry_kinds,
            vec![GeometryKind::Point, GeometryKind::Polygon, GeometryKind::MultiPolygon]
        );
        assert_eq!(s.polygon_count, 3);
        assert_eq!(s.ring_count, 3);
        assert_eq!(s.vertex_count, 15);
        assert!((s.area - 300.0).abs() < 1e-6);
        assert!((s.width() - 30.0).abs() < 1e-6);
        assert!((s.height() - 10.0).abs() < 1e-6);
    }
}

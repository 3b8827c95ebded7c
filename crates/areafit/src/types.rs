//! Geometry data model: geographic points, rings, polygons, features.
//!
//! - `LonLat`: geographic point in degrees. `Xy`: planar point in meters.
//! - `Polygon`: one outer ring plus holes, winding taken as supplied.
//! - `Feature<P, G>`: geometry plus opaque payloads. `P` carries attributes,
//!   `G` carries non-area geometries; both sit behind `Arc` so rescaling shares
//!   them instead of copying.

use nalgebra::Vector2;
use std::sync::Arc;

/// Planar point `(x, y)` in meters.
pub type Xy = Vector2<f64>;

/// Geographic point in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    #[inline]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl From<[f64; 2]> for LonLat {
    #[inline]
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

/// One closed loop. The closing point may or may not be repeated.
pub type Ring = Vec<LonLat>;

/// Outer ring plus zero or more holes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub outer: Ring,
    pub holes: Vec<Ring>,
}

impl Polygon {
    #[inline]
    pub fn new(outer: Ring, holes: Vec<Ring>) -> Self {
        Self { outer, holes }
    }

    /// Build from GeoJSON-style ring order: first ring is the outer boundary.
    /// An empty list yields an empty (zero-area) polygon.
    pub fn from_rings(mut rings: Vec<Ring>) -> Self {
        if rings.is_empty() {
            return Self::default();
        }
        let outer = rings.remove(0);
        Self {
            outer,
            holes: rings,
        }
    }

    /// Outer ring first, then holes.
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        std::iter::once(&self.outer).chain(self.holes.iter())
    }

    pub fn vertices(&self) -> impl Iterator<Item = LonLat> + '_ {
        self.rings().flat_map(|r| r.iter().copied())
    }

    /// New polygon with `f` applied to every vertex; ring structure is kept.
    pub fn map_vertices<F: FnMut(LonLat) -> LonLat>(&self, mut f: F) -> Self {
        let outer = self.outer.iter().map(|&p| f(p)).collect();
        let holes = self
            .holes
            .iter()
            .map(|r| r.iter().map(|&p| f(p)).collect())
            .collect();
        Self { outer, holes }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiPolygon(pub Vec<Polygon>);

impl MultiPolygon {
    pub fn map_vertices<F: FnMut(LonLat) -> LonLat>(&self, mut f: F) -> Self {
        Self(self.0.iter().map(|p| p.map_vertices(&mut f)).collect())
    }
}

/// Geometry kind names, following GeoJSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GeometryKind {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryKind {
    pub fn name(self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::LineString => "LineString",
            GeometryKind::MultiLineString => "MultiLineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPolygon => "MultiPolygon",
            GeometryKind::GeometryCollection => "GeometryCollection",
        }
    }
}

/// Area-bearing geometry, or an opaque pass-through for everything else.
#[derive(Debug)]
pub enum Geometry<G = ()> {
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
    /// Area-inert geometry; never inspected, never rescaled.
    Other { kind: GeometryKind, data: Arc<G> },
}

impl<G> Clone for Geometry<G> {
    fn clone(&self) -> Self {
        match self {
            Geometry::Polygon(p) => Geometry::Polygon(p.clone()),
            Geometry::MultiPolygon(mp) => Geometry::MultiPolygon(mp.clone()),
            Geometry::Other { kind, data } => Geometry::Other {
                kind: *kind,
                data: Arc::clone(data),
            },
        }
    }
}

impl<G> Geometry<G> {
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Geometry::Other { kind, .. } => *kind,
        }
    }

    /// Polygons carried by this geometry (empty for area-inert kinds).
    pub fn polygons(&self) -> &[Polygon] {
        match self {
            Geometry::Polygon(p) => std::slice::from_ref(p),
            Geometry::MultiPolygon(mp) => &mp.0,
            Geometry::Other { .. } => &[],
        }
    }
}

/// Geometry plus opaque attribute payload.
#[derive(Debug)]
pub struct Feature<P = (), G = ()> {
    pub geometry: Option<Geometry<G>>,
    pub properties: Arc<P>,
}

impl<P, G> Clone for Feature<P, G> {
    fn clone(&self) -> Self {
        Self {
            geometry: self.geometry.clone(),
            properties: Arc::clone(&self.properties),
        }
    }
}

impl<G> Feature<(), G> {
    pub fn from_geometry(geometry: Geometry<G>) -> Self {
        Self {
            geometry: Some(geometry),
            properties: Arc::new(()),
        }
    }
}

impl<P, G> Feature<P, G> {
    pub fn new(geometry: Option<Geometry<G>>, properties: P) -> Self {
        Self {
            geometry,
            properties: Arc::new(properties),
        }
    }

    pub fn polygons(&self) -> &[Polygon] {
        match &self.geometry {
            Some(g) => g.polygons(),
            None => &[],
        }
    }
}

/// Ordered sequence of features.
#[derive(Debug)]
pub struct Collection<P = (), G = ()> {
    pub features: Vec<Feature<P, G>>,
}

impl<P, G> Clone for Collection<P, G> {
    fn clone(&self) -> Self {
        Self {
            features: self.features.clone(),
        }
    }
}

impl<P, G> Default for Collection<P, G> {
    fn default() -> Self {
        Self {
            features: Vec::new(),
        }
    }
}

impl<P, G> FromIterator<Feature<P, G>> for Collection<P, G> {
    fn from_iter<I: IntoIterator<Item = Feature<P, G>>>(iter: I) -> Self {
        Self {
            features: iter.into_iter().collect(),
        }
    }
}

impl<P, G> Collection<P, G> {
    #[inline]
    pub fn new(features: Vec<Feature<P, G>>) -> Self {
        Self { features }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Every polygon of every Polygon/MultiPolygon feature, in order.
    pub fn polygons(&self) -> impl Iterator<Item = &Polygon> {
        self.features.iter().flat_map(|f| f.polygons().iter())
    }

    /// Every geographic vertex of every polygon (holes included), in order.
    pub fn vertices(&self) -> impl Iterator<Item = LonLat> + '_ {
        self.polygons().flat_map(|p| p.vertices())
    }
}

impl Collection {
    /// Convenience for attribute-free collections (tests, benches).
    pub fn from_polygons<I: IntoIterator<Item = Polygon>>(polys: I) -> Self {
        polys
            .into_iter()
            .map(|p| Feature::from_geometry(Geometry::Polygon(p)))
            .collect()
    }
}

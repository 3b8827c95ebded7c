//! GeoJSON FeatureCollection <-> `areafit::Collection`.
//!
//! Each feature's GeoJSON record (id, properties, foreign members) rides along as
//! the opaque attribute payload with its geometry taken out. Foreign members of a
//! polygon geometry are kept on that record and put back on export; non-area
//! geometries ride along untouched as the opaque geometry payload.

use anyhow::{anyhow, bail, Context, Result};
use areafit::{Collection, Feature, Geometry, GeometryKind, LonLat, MultiPolygon, Polygon, Ring};
use geojson::{FeatureCollection, GeoJson, Value};
use std::path::Path;
use std::sync::Arc;

pub type GeoCollection = Collection<Record, geojson::Geometry>;

/// Attribute payload of one feature: the GeoJSON feature without its geometry,
/// plus the foreign members of an area geometry that was taken out of it.
#[derive(Clone, Debug)]
pub struct Record {
    pub feature: geojson::Feature,
    pub geometry_members: Option<geojson::JsonObject>,
}

/// Parsed input: the core collection plus the collection-level foreign members.
pub struct Dataset {
    pub collection: GeoCollection,
    pub foreign_members: Option<geojson::JsonObject>,
}

pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_dataset(&text).with_context(|| format!("parsing {}", path.display()))
}

pub fn parse_dataset(text: &str) -> Result<Dataset> {
    let gj: GeoJson = text.parse()?;
    let fc = match gj {
        GeoJson::FeatureCollection(fc) => fc,
        _ => bail!("not a FeatureCollection"),
    };
    if fc.features.is_empty() {
        bail!("no features found");
    }
    let features = fc
        .features
        .into_iter()
        .enumerate()
        .map(|(i, f)| to_feature(f).with_context(|| format!("feature #{i}")))
        .collect::<Result<Vec<_>>>()?;
    Ok(Dataset {
        collection: Collection::new(features),
        foreign_members: fc.foreign_members,
    })
}

fn to_feature(mut f: geojson::Feature) -> Result<Feature<Record, geojson::Geometry>> {
    let mut geometry_members = None;
    let geometry = match f.geometry.take() {
        Some(g) => {
            let geom = to_geometry(&g)?;
            if !matches!(geom, Geometry::Other { .. }) {
                geometry_members = g.foreign_members;
            }
            Some(geom)
        }
        None => None,
    };
    f.bbox = None;
    Ok(Feature {
        geometry,
        properties: Arc::new(Record {
            feature: f,
            geometry_members,
        }),
    })
}

fn to_geometry(g: &geojson::Geometry) -> Result<Geometry<geojson::Geometry>> {
    let geom = match &g.value {
        Value::Polygon(rings) => Geometry::Polygon(to_polygon(rings)?),
        Value::MultiPolygon(polys) => Geometry::MultiPolygon(MultiPolygon(
            polys.iter().map(|p| to_polygon(p)).collect::<Result<_>>()?,
        )),
        other => Geometry::Other {
            kind: kind_of(other),
            data: Arc::new(g.clone()),
        },
    };
    Ok(geom)
}

fn kind_of(v: &Value) -> GeometryKind {
    match v {
        Value::Point(_) => GeometryKind::Point,
        Value::MultiPoint(_) => GeometryKind::MultiPoint,
        Value::LineString(_) => GeometryKind::LineString,
        Value::MultiLineString(_) => GeometryKind::MultiLineString,
        Value::Polygon(_) => GeometryKind::Polygon,
        Value::MultiPolygon(_) => GeometryKind::MultiPolygon,
        Value::GeometryCollection(_) => GeometryKind::GeometryCollection,
    }
}

fn to_polygon(rings: &[Vec<Vec<f64>>]) -> Result<Polygon> {
    let rings = rings
        .iter()
        .map(|r| r.iter().map(|pos| to_lonlat(pos)).collect::<Result<Ring>>())
        .collect::<Result<Vec<_>>>()?;
    Ok(Polygon::from_rings(rings))
}

fn to_lonlat(pos: &[f64]) -> Result<LonLat> {
    match pos {
        [lon, lat, ..] => Ok(LonLat::new(*lon, *lat)),
        _ => Err(anyhow!("position needs at least 2 coordinates, got {}", pos.len())),
    }
}

fn from_ring(r: &Ring) -> Vec<Vec<f64>> {
    r.iter().map(|p| vec![p.lon, p.lat]).collect()
}

/// An empty polygon (no outer positions, no holes) is written as `[]`.
fn from_polygon(p: &Polygon) -> Vec<Vec<Vec<f64>>> {
    if p.outer.is_empty() && p.holes.is_empty() {
        return Vec::new();
    }
    p.rings().map(from_ring).collect()
}

fn from_feature(f: &Feature<Record, geojson::Geometry>) -> geojson::Feature {
    let rec = &*f.properties;
    let area_geometry = |value: Value| geojson::Geometry {
        bbox: None,
        value,
        foreign_members: rec.geometry_members.clone(),
    };
    let mut out = rec.feature.clone();
    out.geometry = f.geometry.as_ref().map(|g| match g {
        Geometry::Polygon(p) => area_geometry(Value::Polygon(from_polygon(p))),
        Geometry::MultiPolygon(mp) => {
            area_geometry(Value::MultiPolygon(mp.0.iter().map(from_polygon).collect()))
        }
        Geometry::Other { data, .. } => (**data).clone(),
    });
    out
}

pub fn to_feature_collection(ds: &Dataset, fc: &GeoCollection) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: fc.features.iter().map(from_feature).collect(),
        foreign_members: ds.foreign_members.clone(),
    }
}

pub fn write_feature_collection(path: &Path, fc: &FeatureCollection) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(path, serde_json::to_vec_pretty(fc)?)
        .with_context(|| format!("writing {}", path.display()))
}

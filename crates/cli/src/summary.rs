use crate::io::GeoCollection;
use areafit::api::{planar_stats, Projector};
use serde::Serialize;
use std::collections::BTreeSet;

/// Planar statistics of a dataset, as printed by `inspect`.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub feature_count: usize,
    pub geometry_types: Vec<&'static str>,
    pub field_names: Vec<String>,
    pub polygon_count: usize,
    pub vertex_count: usize,
    pub planar_area_m2: f64,
    pub planar_width_m: f64,
    pub planar_height_m: f64,
    pub planar_bbox: [f64; 4],
}

pub fn summarize(proj: &Projector, fc: &GeoCollection) -> Summary {
    let st = planar_stats(proj, fc);
    let field_names: BTreeSet<String> = fc
        .features
        .iter()
        .filter_map(|f| f.properties.feature.properties.as_ref())
        .flat_map(|props| props.keys().cloned())
        .collect();
    Summary {
        feature_count: st.feature_count,
        geometry_types: st.geometry_kinds.iter().map(|k| k.name()).collect(),
        field_names: field_names.into_iter().collect(),
        polygon_count: st.polygon_count,
        vertex_count: st.vertex_count,
        planar_area_m2: st.area,
        planar_width_m: st.width(),
        planar_height_m: st.height(),
        planar_bbox: [st.bounds.min.x, st.bounds.min.y, st.bounds.max.x, st.bounds.max.y],
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "features:        {}", self.feature_count)?;
        writeln!(f, "geometry types:  {}", self.geometry_types.join(", "))?;
        writeln!(f, "fields:          {}", self.field_names.join(", "))?;
        writeln!(f, "polygons:        {} ({} vertices)", self.polygon_count, self.vertex_count)?;
        writeln!(f, "planar area:     {:.2} m²", self.planar_area_m2)?;
        write!(
            f,
            "planar size:     {:.2} m x {:.2} m",
            self.planar_width_m, self.planar_height_m
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::parse_dataset;

    #[test]
    fn field_names_are_sorted_and_distinct() {
        let text = r#"{
          "type": "FeatureCollection",
          "features": [
            {"type": "Feature", "properties": {"zeta": 1, "alpha": 2},
             "geometry": {"type": "Polygon", "coordinates": [[[0,0],[0.001,0],[0.001,0.001],[0,0]]]}},
            {"type": "Feature", "properties": {"alpha": 3, "mid": true},
             "geometry": {"type": "LineString", "coordinates": [[0,0],[1,1]]}}
          ]
        }"#;
        let ds = parse_dataset(text).unwrap();
        let s = summarize(&Projector::default(), &ds.collection);
        assert_eq!(s.field_names, vec!["alpha", "mid", "zeta"]);
        assert_eq!(s.geometry_types, vec!["Polygon", "LineString"]);
        assert_eq!(s.feature_count, 2);
        assert_eq!(s.polygon_count, 1);
        assert!(s.planar_area_m2 > 0.0);
        assert!(s.to_string().contains("planar area"));
    }
}

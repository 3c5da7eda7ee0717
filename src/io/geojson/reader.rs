use std::collections::BTreeMap;

use geojson::{Feature, GeoJson, Geometry, Value};
use log::debug;
use serde_json::Value as JsonValue;

use crate::attributes::{attrs_from_json, AttrDict};
use crate::error::{GeoVecError, Result};
use crate::shape::{
    ShapeGeometry, ShapeRef, ShapeSet, VectorAreal, VectorLinear, VectorPoints, VectorRing,
    VectorShape,
};

/// Shapes parsed out of a GeoJSON document, plus the coordinate reference
/// system string when the document carries one.
#[derive(Debug, Default)]
pub struct GeoJsonVectors {
    pub shapes: ShapeSet,
    pub crs: Option<String>,
}

/// Parse raw GeoJSON bytes into vector shapes.
///
/// We don't know in advance what the document holds, so callers go looking
/// through the returned set. Malformed input is an error with no partial
/// results guaranteed.
pub fn read_geojson(data: &[u8]) -> Result<GeoJsonVectors> {
    let text = std::str::from_utf8(data)
        .map_err(|err| GeoVecError::InvalidGeoJson(err.to_string()))?;
    let gj: GeoJson = text.parse()?;
    let mut out = GeoJsonVectors {
        shapes: ShapeSet::new(),
        crs: crs_of(&gj),
    };
    parse_geojson(&gj, &mut out.shapes)?;
    Ok(out)
}

/// Parse an already-decoded JSON structure instead of raw bytes.
pub fn read_geojson_value(value: &JsonValue) -> Result<ShapeSet> {
    let gj = GeoJson::from_json_value(value.clone())?;
    let mut shapes = ShapeSet::new();
    parse_geojson(&gj, &mut shapes)?;
    Ok(shapes)
}

/// Parse a GeoJSON assembly: a JSON object mapping collection names to
/// GeoJSON documents, yielding one shape set per name.
pub fn read_geojson_assembly(data: &[u8]) -> Result<BTreeMap<String, ShapeSet>> {
    let value: JsonValue = serde_json::from_slice(data)?;
    let JsonValue::Object(collections) = value else {
        return Err(GeoVecError::InvalidGeoJson(
            "assembly must be a JSON object of named collections".to_string(),
        ));
    };
    let mut out = BTreeMap::new();
    for (name, doc) in collections {
        let gj = GeoJson::from_json_value(doc)?;
        let mut shapes = ShapeSet::new();
        parse_geojson(&gj, &mut shapes)?;
        out.insert(name, shapes);
    }
    Ok(out)
}

/// Pull a legacy `crs` member (`{"properties": {"name": ...}}`) off the
/// document root, if present.
fn crs_of(gj: &GeoJson) -> Option<String> {
    let foreign = match gj {
        GeoJson::FeatureCollection(fc) => fc.foreign_members.as_ref(),
        GeoJson::Feature(feature) => feature.foreign_members.as_ref(),
        GeoJson::Geometry(geometry) => geometry.foreign_members.as_ref(),
    }?;
    foreign
        .get("crs")?
        .pointer("/properties/name")?
        .as_str()
        .map(str::to_string)
}

fn parse_geojson(gj: &GeoJson, shapes: &mut ShapeSet) -> Result<()> {
    match gj {
        GeoJson::FeatureCollection(fc) => {
            for feature in &fc.features {
                parse_feature(feature, shapes)?;
            }
            Ok(())
        }
        GeoJson::Feature(feature) => parse_feature(feature, shapes),
        GeoJson::Geometry(geometry) => parse_geometry(geometry, &AttrDict::new(), shapes),
    }
}

fn parse_feature(feature: &Feature, shapes: &mut ShapeSet) -> Result<()> {
    let Some(geometry) = &feature.geometry else {
        debug!("skipping feature without geometry");
        return Ok(());
    };
    let attrs = feature
        .properties
        .as_ref()
        .map(attrs_from_json)
        .unwrap_or_default();
    parse_geometry(geometry, &attrs, shapes)
}

/// Multi-part geometries fan out into one shape per part, each with its own
/// copy of the feature attributes.
fn parse_geometry(geometry: &Geometry, attrs: &AttrDict, shapes: &mut ShapeSet) -> Result<()> {
    match &geometry.value {
        Value::Point(position) => {
            let pts = vec![to_coord(position)?];
            publish(ShapeGeometry::Points(VectorPoints::new(pts)), attrs, shapes);
        }
        Value::MultiPoint(positions) => {
            let pts = to_ring(positions)?;
            publish(ShapeGeometry::Points(VectorPoints::new(pts)), attrs, shapes);
        }
        Value::LineString(positions) => {
            let pts = to_ring(positions)?;
            publish(ShapeGeometry::Linear(VectorLinear::new(pts)), attrs, shapes);
        }
        Value::MultiLineString(lines) => {
            for line in lines {
                let pts = to_ring(line)?;
                publish(ShapeGeometry::Linear(VectorLinear::new(pts)), attrs, shapes);
            }
        }
        Value::Polygon(rings) => {
            publish(ShapeGeometry::Areal(to_areal(rings)?), attrs, shapes);
        }
        Value::MultiPolygon(polygons) => {
            for rings in polygons {
                publish(ShapeGeometry::Areal(to_areal(rings)?), attrs, shapes);
            }
        }
        Value::GeometryCollection(geometries) => {
            for sub in geometries {
                parse_geometry(sub, attrs, shapes)?;
            }
        }
    }
    Ok(())
}

fn publish(geometry: ShapeGeometry, attrs: &AttrDict, shapes: &mut ShapeSet) {
    let mut shape = VectorShape::new(geometry);
    shape.set_attributes(attrs.clone());
    shape.init_geo_mbr();
    shapes.insert(ShapeRef::new(shape));
}

fn to_coord(position: &[f64]) -> Result<geo::Coord<f64>> {
    if position.len() < 2 {
        return Err(GeoVecError::InvalidGeoJson(
            "position with fewer than two values".to_string(),
        ));
    }
    Ok(geo::coord! { x: position[0], y: position[1] })
}

fn to_ring(positions: &[Vec<f64>]) -> Result<VectorRing> {
    positions.iter().map(|p| to_coord(p)).collect()
}

fn to_areal(rings: &[Vec<Vec<f64>>]) -> Result<VectorAreal> {
    let loops = rings
        .iter()
        .map(|ring| to_ring(ring))
        .collect::<Result<Vec<VectorRing>>>()?;
    Ok(VectorAreal::new(loops))
}

#[cfg(test)]
mod test {
    use super::*;
    use geo::coord;

    const POLYGON_FC: &str = r#"{
        "type": "FeatureCollection",
        "crs": { "type": "name", "properties": { "name": "EPSG:4326" } },
        "features": [{
            "type": "Feature",
            "properties": { "name": "box", "rank": 3 },
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]]]
            }
        }]
    }"#;

    #[test]
    fn polygon_feature_collection() {
        let parsed = read_geojson(POLYGON_FC.as_bytes()).unwrap();
        assert_eq!(parsed.crs.as_deref(), Some("EPSG:4326"));
        assert_eq!(parsed.shapes.len(), 1);

        let shape = parsed.shapes.iter().next().unwrap();
        assert_eq!(shape.attributes()["name"].as_str(), Some("box"));
        assert_eq!(shape.attributes()["rank"].as_f64(), Some(3.0));

        let areal = shape.as_areal().unwrap();
        assert_eq!(areal.loops.len(), 1);
        assert_eq!(areal.loops[0][1], coord! { x: 10., y: 0. });

        let mbr = shape.calc_geo_mbr();
        for pt in &areal.loops[0] {
            assert!(mbr.contains(*pt));
        }
    }

    #[test]
    fn multi_geometries_fan_out() {
        let doc = r#"{
            "type": "Feature",
            "properties": { "kind": "border" },
            "geometry": {
                "type": "MultiLineString",
                "coordinates": [[[0, 0], [1, 1]], [[2, 2], [3, 3]], [[4, 4], [5, 5]]]
            }
        }"#;
        let parsed = read_geojson(doc.as_bytes()).unwrap();
        assert_eq!(parsed.shapes.len(), 3);
        for shape in &parsed.shapes {
            assert!(shape.as_linear().is_some());
            assert_eq!(shape.attributes()["kind"].as_str(), Some("border"));
        }
    }

    #[test]
    fn bare_geometry_and_value_entry_point() {
        let doc = serde_json::json!({ "type": "Point", "coordinates": [12.5, -7.0] });
        let shapes = read_geojson_value(&doc).unwrap();
        assert_eq!(shapes.len(), 1);
        let shape = shapes.iter().next().unwrap();
        assert_eq!(shape.as_points().unwrap().pts[0], coord! { x: 12.5, y: -7.0 });
    }

    #[test]
    fn malformed_input_errors() {
        assert!(read_geojson(b"not json at all").is_err());
        assert!(read_geojson(br#"{"type": "FeatureCollection"}"#).is_err());
        assert!(read_geojson(br#"{"type": "Polygon", "coordinates": [[[0.0]]]}"#).is_err());
    }

    #[test]
    fn assembly_of_named_collections() {
        let doc = format!(
            r#"{{ "roads": {POLYGON_FC}, "rivers": {{ "type": "FeatureCollection", "features": [] }} }}"#
        );
        let assembly = read_geojson_assembly(doc.as_bytes()).unwrap();
        assert_eq!(assembly.len(), 2);
        assert_eq!(assembly["roads"].len(), 1);
        assert!(assembly["rivers"].is_empty());
    }

    #[test]
    fn feature_without_geometry_is_skipped() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [{ "type": "Feature", "properties": { "a": 1 }, "geometry": null }]
        }"#;
        let parsed = read_geojson(doc.as_bytes()).unwrap();
        assert!(parsed.shapes.is_empty());
    }
}

use std::io::Write;

use geojson::{Feature, FeatureCollection, Geometry, Value};

use crate::attributes::attrs_to_json;
use crate::error::Result;
use crate::shape::{ShapeGeometry, ShapeSet, VectorRing, VectorShape};

/// Serialize a shape set as a GeoJSON FeatureCollection.
///
/// Note: coordinates are written as-is; no reprojection happens here.
pub fn write_geojson<W: Write>(shapes: &ShapeSet, writer: W) -> Result<()> {
    serde_json::to_writer(writer, &to_feature_collection(shapes))?;
    Ok(())
}

/// Build the FeatureCollection for a shape set.
///
/// Areal maps to Polygon, Linear to LineString (3-element positions for the 3d
/// variant), Points to Point/MultiPoint. Triangle meshes have no GeoJSON
/// analog and become a MultiPolygon of their triangles with z dropped.
pub fn to_feature_collection(shapes: &ShapeSet) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: shapes.iter().map(|shape| feature_of(shape)).collect(),
        foreign_members: None,
    }
}

fn feature_of(shape: &VectorShape) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(geometry_value(shape.geometry()))),
        id: None,
        properties: Some(attrs_to_json(shape.attributes())),
        foreign_members: None,
    }
}

fn geometry_value(geometry: &ShapeGeometry) -> Value {
    match geometry {
        ShapeGeometry::Areal(areal) => {
            Value::Polygon(areal.loops.iter().map(|ring| closed_positions(ring)).collect())
        }
        ShapeGeometry::Linear(linear) => Value::LineString(positions(&linear.pts)),
        ShapeGeometry::Linear3d(linear) => Value::LineString(
            linear.pts.iter().map(|pt| vec![pt.x, pt.y, pt.z]).collect(),
        ),
        ShapeGeometry::Points(points) => {
            if points.pts.len() == 1 {
                Value::Point(vec![points.pts[0].x, points.pts[0].y])
            } else {
                Value::MultiPoint(positions(&points.pts))
            }
        }
        ShapeGeometry::Triangles(mesh) => Value::MultiPolygon(
            (0..mesh.tris.len())
                .filter_map(|which| mesh.triangle(which))
                .map(|[v0, v1, v2]| {
                    vec![vec![
                        vec![v0.x, v0.y],
                        vec![v1.x, v1.y],
                        vec![v2.x, v2.y],
                        vec![v0.x, v0.y],
                    ]]
                })
                .collect(),
        ),
    }
}

fn positions(ring: &VectorRing) -> Vec<Vec<f64>> {
    ring.iter().map(|pt| vec![pt.x, pt.y]).collect()
}

/// GeoJSON polygon rings must repeat the first position at the end; close the
/// ring on the way out when the stored loop does not.
fn closed_positions(ring: &VectorRing) -> Vec<Vec<f64>> {
    let mut out = positions(ring);
    if let (Some(first), Some(last)) = (out.first(), out.last()) {
        if first != last {
            out.push(first.clone());
        }
    }
    out
}

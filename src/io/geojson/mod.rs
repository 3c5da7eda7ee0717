//! Read from and write to [GeoJSON](https://geojson.org/) vector data.

pub use reader::{read_geojson, read_geojson_assembly, read_geojson_value, GeoJsonVectors};
pub use writer::{to_feature_collection, write_geojson};

mod reader;
mod writer;

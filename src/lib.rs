//! Geographic vector shapes and the geometry that prepares them for display on a
//! sphere or globe.
//!
//! The data model is a closed set of five shape variants (areal, linear, linear
//! 3d, points, triangle mesh) sharing identity, attributes and a lazily computed
//! bounding box. On top of that sit the pure geometric algorithms a renderer
//! needs: bounding boxes, loop area and centroids, three edge-subdivision
//! strategies for curved display projections, point-in-polygon tests and
//! ray/mesh intersection. The [`io`] module holds the streaming reader contract,
//! a GeoJSON codec and a binary vector-file format.

#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use shape::{ShapeRef, ShapeSet, VectorShape};

pub mod adapter;
pub mod algorithm;
pub mod attributes;
pub mod error;
pub mod io;
pub mod mbr;
pub mod shape;
#[cfg(test)]
pub(crate) mod test;

//! Binary vector-file codec.
//!
//! Little-endian layout: magic `GVEC`, u16 format version, u16 reserved, u32
//! record count, one u64 absolute offset per record, then the records. Each
//! record is a u8 shape tag, a length-prefixed JSON attribute block and the
//! typed geometry arrays (u32 counts, f64 coordinates, u32 triangle indices).
//! The offset table is what makes [`VectorFileReader`] honest random access.

pub use reader::{read_vector_file, VectorFileReader};
pub use writer::{write_shapes, write_vector_file};

mod reader;
mod writer;

pub(crate) const MAGIC: u32 = 0x4345_5647; // "GVEC"
pub(crate) const VERSION: u16 = 1;

pub(crate) const TAG_AREAL: u8 = 1;
pub(crate) const TAG_LINEAR: u8 = 2;
pub(crate) const TAG_LINEAR3D: u8 = 3;
pub(crate) const TAG_POINTS: u8 = 4;
pub(crate) const TAG_TRIANGLES: u8 = 5;

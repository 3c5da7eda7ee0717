use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt};
use geo::coord;
use glam::DVec3;
use log::warn;

use super::{MAGIC, TAG_AREAL, TAG_LINEAR, TAG_LINEAR3D, TAG_POINTS, TAG_TRIANGLES, VERSION};
use crate::attributes::AttrDict;
use crate::error::{GeoVecError, Result};
use crate::io::{StringSet, VectorReader};
use crate::shape::{
    ShapeGeometry, ShapeRef, ShapeSet, Triangle, VectorAreal, VectorLinear, VectorLinear3d,
    VectorPoints, VectorRing, VectorRing3d, VectorShape, VectorTriangles,
};

/// Read every shape from a binary vector file.
pub fn read_vector_file<P: AsRef<Path>>(path: P) -> Result<ShapeSet> {
    let mut reader = VectorFileReader::open(path)?;
    let mut shapes = ShapeSet::new();
    while let Some(shape) = reader.next_object(None) {
        shapes.insert(shape);
    }
    if !reader.is_valid() {
        return Err(GeoVecError::InvalidVectorFile(
            "truncated or corrupt record".to_string(),
        ));
    }
    Ok(shapes)
}

/// Sequential and random-access reader over the binary vector format.
pub struct VectorFileReader<R: Read + Seek> {
    reader: R,
    offsets: Vec<u64>,
    cursor: usize,
    valid: bool,
}

impl VectorFileReader<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(BufReader::new(File::open(path)?))
    }
}

impl<R: Read + Seek> VectorFileReader<R> {
    /// Validate the header and load the record offset table.
    pub fn new(mut reader: R) -> Result<Self> {
        let magic = reader.read_u32::<LittleEndian>()?;
        if magic != MAGIC {
            return Err(GeoVecError::InvalidVectorFile(format!(
                "bad magic {magic:#010x}"
            )));
        }
        let version = reader.read_u16::<LittleEndian>()?;
        if version != VERSION {
            return Err(GeoVecError::InvalidVectorFile(format!(
                "unsupported version {version}"
            )));
        }
        let _reserved = reader.read_u16::<LittleEndian>()?;
        let count = reader.read_u32::<LittleEndian>()? as usize;
        let mut offsets = Vec::with_capacity(count.min(1 << 16));
        for _ in 0..count {
            offsets.push(reader.read_u64::<LittleEndian>()?);
        }
        Ok(VectorFileReader {
            reader,
            offsets,
            cursor: 0,
            valid: true,
        })
    }

    fn read_at(&mut self, offset: u64, filter: Option<&StringSet>) -> Result<VectorShape> {
        self.reader.seek(SeekFrom::Start(offset))?;
        self.read_record(filter)
    }

    fn read_record(&mut self, filter: Option<&StringSet>) -> Result<VectorShape> {
        let tag = self.reader.read_u8()?;

        let attr_len = self.reader.read_u32::<LittleEndian>()? as usize;
        let mut attr_bytes = vec![0u8; attr_len];
        self.reader.read_exact(&mut attr_bytes)?;
        let mut attrs: AttrDict = serde_json::from_slice(&attr_bytes)?;
        if let Some(filter) = filter {
            attrs.retain(|key, _| filter.contains(key));
        }

        let geometry = match tag {
            TAG_AREAL => {
                let num_loops = self.reader.read_u32::<LittleEndian>()? as usize;
                let mut loops = Vec::new();
                for _ in 0..num_loops {
                    loops.push(self.read_ring()?);
                }
                ShapeGeometry::Areal(VectorAreal::new(loops))
            }
            TAG_LINEAR => ShapeGeometry::Linear(VectorLinear::new(self.read_ring()?)),
            TAG_LINEAR3D => ShapeGeometry::Linear3d(VectorLinear3d::new(self.read_ring3d()?)),
            TAG_POINTS => ShapeGeometry::Points(VectorPoints::new(self.read_ring()?)),
            TAG_TRIANGLES => {
                let pts = self.read_ring3d()?;
                let num_tris = self.reader.read_u32::<LittleEndian>()? as usize;
                let mut tris = Vec::new();
                for _ in 0..num_tris {
                    let mut indices = [0u32; 3];
                    for index in &mut indices {
                        *index = self.reader.read_u32::<LittleEndian>()?;
                    }
                    tris.push(Triangle { pts: indices });
                }
                ShapeGeometry::Triangles(VectorTriangles::new(pts, tris))
            }
            other => {
                return Err(GeoVecError::InvalidVectorFile(format!(
                    "unknown shape tag {other}"
                )))
            }
        };

        let mut shape = VectorShape::new(geometry);
        shape.set_attributes(attrs);
        shape.init_geo_mbr();
        Ok(shape)
    }

    fn read_ring(&mut self) -> Result<VectorRing> {
        let num_pts = self.reader.read_u32::<LittleEndian>()? as usize;
        let mut ring = VectorRing::new();
        for _ in 0..num_pts {
            let x = self.reader.read_f64::<LittleEndian>()?;
            let y = self.reader.read_f64::<LittleEndian>()?;
            ring.push(coord! { x: x, y: y });
        }
        Ok(ring)
    }

    fn read_ring3d(&mut self) -> Result<VectorRing3d> {
        let num_pts = self.reader.read_u32::<LittleEndian>()? as usize;
        let mut ring = VectorRing3d::new();
        for _ in 0..num_pts {
            let x = self.reader.read_f64::<LittleEndian>()?;
            let y = self.reader.read_f64::<LittleEndian>()?;
            let z = self.reader.read_f64::<LittleEndian>()?;
            ring.push(DVec3::new(x, y, z));
        }
        Ok(ring)
    }
}

impl<R: Read + Seek> VectorReader for VectorFileReader<R> {
    fn is_valid(&self) -> bool {
        self.valid
    }

    fn next_object(&mut self, filter: Option<&StringSet>) -> Option<ShapeRef> {
        if !self.valid || self.cursor >= self.offsets.len() {
            return None;
        }
        let offset = self.offsets[self.cursor];
        self.cursor += 1;
        match self.read_at(offset, filter) {
            Ok(shape) => Some(ShapeRef::new(shape)),
            Err(err) => {
                warn!("vector file record unreadable: {err}");
                self.valid = false;
                None
            }
        }
    }

    fn can_read_by_index(&self) -> bool {
        true
    }

    fn num_objects(&self) -> usize {
        self.offsets.len()
    }

    fn object_by_index(&mut self, index: usize, filter: Option<&StringSet>) -> Option<ShapeRef> {
        if !self.valid {
            return None;
        }
        let offset = *self.offsets.get(index)?;
        match self.read_at(offset, filter) {
            Ok(shape) => Some(ShapeRef::new(shape)),
            Err(err) => {
                warn!("vector file record unreadable: {err}");
                self.valid = false;
                None
            }
        }
    }
}

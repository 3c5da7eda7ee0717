use std::fs::File;
use std::io::{BufWriter, Seek, SeekFrom, Write};
use std::path::Path;

use byteorder::{LittleEndian, WriteBytesExt};

use super::{MAGIC, TAG_AREAL, TAG_LINEAR, TAG_LINEAR3D, TAG_POINTS, TAG_TRIANGLES, VERSION};
use crate::error::{GeoVecError, Result};
use crate::shape::{ShapeGeometry, ShapeSet, VectorRing, VectorRing3d, VectorShape};

/// Write a shape set to `path` in the binary vector format.
pub fn write_vector_file<P: AsRef<Path>>(path: P, shapes: &ShapeSet) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_shapes(&mut writer, shapes)?;
    writer.flush()?;
    Ok(())
}

/// Write the header, offset table and records to any seekable sink.
pub fn write_shapes<W: Write + Seek>(writer: &mut W, shapes: &ShapeSet) -> Result<()> {
    let count = len_u32(shapes.len())?;
    writer.write_u32::<LittleEndian>(MAGIC)?;
    writer.write_u16::<LittleEndian>(VERSION)?;
    writer.write_u16::<LittleEndian>(0)?;
    writer.write_u32::<LittleEndian>(count)?;

    // placeholder offset table, patched once the records are laid out
    let table_pos = writer.stream_position()?;
    for _ in 0..count {
        writer.write_u64::<LittleEndian>(0)?;
    }

    let mut offsets = Vec::with_capacity(shapes.len());
    for shape in shapes {
        offsets.push(writer.stream_position()?);
        write_record(writer, shape)?;
    }

    let end = writer.stream_position()?;
    writer.seek(SeekFrom::Start(table_pos))?;
    for offset in offsets {
        writer.write_u64::<LittleEndian>(offset)?;
    }
    writer.seek(SeekFrom::Start(end))?;
    Ok(())
}

fn write_record<W: Write>(writer: &mut W, shape: &VectorShape) -> Result<()> {
    let tag = match shape.geometry() {
        ShapeGeometry::Areal(_) => TAG_AREAL,
        ShapeGeometry::Linear(_) => TAG_LINEAR,
        ShapeGeometry::Linear3d(_) => TAG_LINEAR3D,
        ShapeGeometry::Points(_) => TAG_POINTS,
        ShapeGeometry::Triangles(_) => TAG_TRIANGLES,
    };
    writer.write_u8(tag)?;

    let attr_bytes = serde_json::to_vec(shape.attributes())?;
    writer.write_u32::<LittleEndian>(len_u32(attr_bytes.len())?)?;
    writer.write_all(&attr_bytes)?;

    match shape.geometry() {
        ShapeGeometry::Areal(areal) => {
            writer.write_u32::<LittleEndian>(len_u32(areal.loops.len())?)?;
            for ring in &areal.loops {
                write_ring(writer, ring)?;
            }
        }
        ShapeGeometry::Linear(linear) => write_ring(writer, &linear.pts)?,
        ShapeGeometry::Linear3d(linear) => write_ring3d(writer, &linear.pts)?,
        ShapeGeometry::Points(points) => write_ring(writer, &points.pts)?,
        ShapeGeometry::Triangles(mesh) => {
            write_ring3d(writer, &mesh.pts)?;
            writer.write_u32::<LittleEndian>(len_u32(mesh.tris.len())?)?;
            for tri in &mesh.tris {
                for index in tri.pts {
                    writer.write_u32::<LittleEndian>(index)?;
                }
            }
        }
    }
    Ok(())
}

fn write_ring<W: Write>(writer: &mut W, ring: &VectorRing) -> Result<()> {
    writer.write_u32::<LittleEndian>(len_u32(ring.len())?)?;
    for pt in ring {
        writer.write_f64::<LittleEndian>(pt.x)?;
        writer.write_f64::<LittleEndian>(pt.y)?;
    }
    Ok(())
}

fn write_ring3d<W: Write>(writer: &mut W, ring: &VectorRing3d) -> Result<()> {
    writer.write_u32::<LittleEndian>(len_u32(ring.len())?)?;
    for pt in ring {
        writer.write_f64::<LittleEndian>(pt.x)?;
        writer.write_f64::<LittleEndian>(pt.y)?;
        writer.write_f64::<LittleEndian>(pt.z)?;
    }
    Ok(())
}

fn len_u32(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| GeoVecError::Overflow)
}

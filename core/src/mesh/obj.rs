//! Indexed-triangle text parser
//!
//! Recognizes two line kinds:
//! - `v x y z` - vertex position
//! - `f a b c` - triangle, 1-based vertex indices
//!
//! Every other line (blank, `#` comments, `vt`, `vn`, `o`, `g`, ...) is skipped
//! unread, so it may hold arbitrary bytes. Recognized lines must be UTF-8 and
//! carry exactly three numbers.

use std::io::BufRead;

use glam::Vec3;

use super::bounds::{Bounds, BoundsSeed, BoundsTracker};
use super::Triangle;
use crate::error::MeshError;

/// Geometry read from a mesh source, indices already validated
pub(crate) struct ParsedMesh {
    pub vertices: Vec<Vec3>,
    pub triangles: Vec<Triangle>,
    pub bounds: Bounds,
}

/// Parse a mesh from a line stream
///
/// Any malformed number fails the whole load.
pub(crate) fn parse_mesh<R: BufRead>(reader: R, seed: BoundsSeed) -> Result<ParsedMesh, MeshError> {
    let mut vertices: Vec<Vec3> = Vec::new();
    let mut faces: Vec<[i64; 3]> = Vec::new();
    let mut tracker = BoundsTracker::new(seed);

    for (line_idx, raw) in reader.split(b'\n').enumerate() {
        let raw = raw.map_err(MeshError::Read)?;
        let line_num = line_idx + 1;

        let kind = raw
            .split(|b| b.is_ascii_whitespace())
            .find(|token| !token.is_empty());
        if !matches!(kind, Some(b"v") | Some(b"f")) {
            continue;
        }

        let line = std::str::from_utf8(&raw).map_err(|_| MeshError::Parse {
            line: line_num,
            field: "line",
            value: String::from_utf8_lossy(&raw).into_owned(),
        })?;
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("v") => {
                let x = parse_coord(parts.next(), line_num, "x")?;
                let y = parse_coord(parts.next(), line_num, "y")?;
                let z = parse_coord(parts.next(), line_num, "z")?;
                reject_extra(parts.next(), line_num)?;
                let v = Vec3::new(x, y, z);
                tracker.include(v);
                vertices.push(v);
            }
            Some("f") => {
                let a = parse_index(parts.next(), line_num, "a")?;
                let b = parse_index(parts.next(), line_num, "b")?;
                let c = parse_index(parts.next(), line_num, "c")?;
                reject_extra(parts.next(), line_num)?;
                faces.push([a, b, c]);
            }
            _ => {}
        }
    }

    // Faces may precede the vertices they reference, so validate only now
    let vertex_count = vertices.len();
    let triangles = faces
        .iter()
        .enumerate()
        .map(|(triangle, face)| {
            let mut resolved = [0u32; 3];
            for (slot, &index) in resolved.iter_mut().zip(face) {
                *slot = resolve_index(index, triangle, vertex_count)?;
            }
            Ok(Triangle::new(resolved[0], resolved[1], resolved[2]))
        })
        .collect::<Result<Vec<_>, MeshError>>()?;

    Ok(ParsedMesh {
        vertices,
        triangles,
        bounds: tracker.finish(),
    })
}

fn parse_coord(token: Option<&str>, line: usize, field: &'static str) -> Result<f32, MeshError> {
    let token = token.unwrap_or("");
    match token.parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(MeshError::Parse {
            line,
            field,
            value: token.to_string(),
        }),
    }
}

/// Parse a 1-based index and convert it to zero-based
fn parse_index(token: Option<&str>, line: usize, field: &'static str) -> Result<i64, MeshError> {
    let token = token.unwrap_or("");
    token
        .parse::<i64>()
        .ok()
        .and_then(|i| i.checked_sub(1))
        .ok_or_else(|| MeshError::Parse {
            line,
            field,
            value: token.to_string(),
        })
}

/// Polygons and extra vertex components are not supported
fn reject_extra(token: Option<&str>, line: usize) -> Result<(), MeshError> {
    match token {
        Some(token) => Err(MeshError::Parse {
            line,
            field: "extra",
            value: token.to_string(),
        }),
        None => Ok(()),
    }
}

fn resolve_index(index: i64, triangle: usize, vertex_count: usize) -> Result<u32, MeshError> {
    let out_of_range = || MeshError::IndexOutOfRange {
        triangle,
        index,
        vertex_count,
    };
    let idx = usize::try_from(index).map_err(|_| out_of_range())?;
    if idx >= vertex_count {
        return Err(out_of_range());
    }
    u32::try_from(idx).map_err(|_| out_of_range())
}

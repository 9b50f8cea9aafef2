//! OBJ geometry dump
//!
//! Positions, normals and UVs are written as parallel `v`/`vn`/`vt` lists, so
//! a single 1-based index per face corner addresses all three.

use glam::{Vec2, Vec3};
use std::io::Write;

use super::FLOAT_PRECISION;
use crate::error::FixtureError;
use crate::procedural::{Mesh, Vertex};

/// Write `mesh` as OBJ text
pub fn write_obj<W: Write>(mesh: &Mesh, out: &mut W) -> Result<(), FixtureError> {
    for vtx in &mesh.vertices {
        let p = vtx.position;
        writeln!(
            out,
            "v {:.prec$} {:.prec$} {:.prec$}",
            p.x,
            p.y,
            p.z,
            prec = FLOAT_PRECISION
        )?;
    }

    for vtx in &mesh.vertices {
        let n = vtx.normal;
        writeln!(
            out,
            "vn {:.prec$} {:.prec$} {:.prec$}",
            n.x,
            n.y,
            n.z,
            prec = FLOAT_PRECISION
        )?;
    }

    for vtx in &mesh.vertices {
        let t = vtx.tex_coord;
        writeln!(out, "vt {:.prec$} {:.prec$}", t.x, t.y, prec = FLOAT_PRECISION)?;
    }

    for face in &mesh.faces {
        writeln!(out, "f {} {} {}", face.a + 1, face.b + 1, face.c + 1)?;
    }

    Ok(())
}

/// Parse OBJ text written by [`write_obj`] back into a mesh
///
/// Only the first index of each face corner is used (`7`, `7/7/7` and `7//7`
/// all address vertex 7). Polygons with more than three corners are
/// fan-triangulated. The `v`, `vn` and `vt` lists must have equal length.
pub fn parse_obj(text: &str) -> Result<Mesh, FixtureError> {
    let mut positions: Vec<Vec3> = Vec::new();
    let mut normals: Vec<Vec3> = Vec::new();
    let mut tex_coords: Vec<Vec2> = Vec::new();
    let mut triangles: Vec<[usize; 3]> = Vec::new();
    // Source line of every v / vn / vt record, in order
    let mut record_lines: [Vec<usize>; 3] = Default::default();

    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts[0] {
            "v" => {
                positions.push(Vec3::from_array(parse_floats(&parts, line_no)?));
                record_lines[0].push(line_no);
            }
            "vn" => {
                normals.push(Vec3::from_array(parse_floats(&parts, line_no)?));
                record_lines[1].push(line_no);
            }
            "vt" => {
                tex_coords.push(Vec2::from_array(parse_floats(&parts, line_no)?));
                record_lines[2].push(line_no);
            }
            "f" => {
                let corners = parts[1..]
                    .iter()
                    .map(|token| parse_face_index(token, line_no))
                    .collect::<Result<Vec<_>, _>>()?;

                if corners.len() < 3 {
                    return Err(FixtureError::parse(
                        line_no,
                        format!("face needs at least 3 corners, found {}", corners.len()),
                    ));
                }

                for k in 1..corners.len() - 1 {
                    triangles.push([corners[0], corners[k], corners[k + 1]]);
                }
            }
            // Groups, objects, materials and smoothing carry nothing we keep
            _ => {}
        }
    }

    if normals.len() != positions.len() || tex_coords.len() != positions.len() {
        // Blame the first record that has no counterpart in a shorter list
        let shortest = record_lines.iter().map(Vec::len).min().unwrap_or(0);
        let line = record_lines
            .iter()
            .filter_map(|lines| lines.get(shortest).copied())
            .min()
            .unwrap_or(0);

        return Err(FixtureError::parse(
            line,
            format!(
                "attribute counts differ: {} positions, {} normals, {} uvs",
                positions.len(),
                normals.len(),
                tex_coords.len()
            ),
        ));
    }

    let mut mesh = Mesh::new();
    for ((position, normal), tex_coord) in positions.into_iter().zip(normals).zip(tex_coords) {
        mesh.add_vertex(Vertex::new(position, normal, tex_coord));
    }
    for [a, b, c] in triangles {
        mesh.add_triangle(a, b, c);
    }

    mesh.validate()?;
    Ok(mesh)
}

/// Parse exactly `N` floats following the record keyword
fn parse_floats<const N: usize>(parts: &[&str], line: usize) -> Result<[f32; N], FixtureError> {
    if parts.len() != N + 1 {
        return Err(FixtureError::parse(
            line,
            format!("'{}' expects {} values, found {}", parts[0], N, parts.len() - 1),
        ));
    }

    let mut values = [0.0; N];
    for (value, token) in values.iter_mut().zip(&parts[1..]) {
        *value = token
            .parse()
            .map_err(|_| FixtureError::parse(line, format!("invalid number '{token}'")))?;
    }
    Ok(values)
}

/// Convert a 1-based face token to a 0-based vertex index
fn parse_face_index(token: &str, line: usize) -> Result<usize, FixtureError> {
    let first = token.split('/').next().unwrap_or(token);
    match first.parse::<usize>() {
        Ok(index) if index >= 1 => Ok(index - 1),
        _ => Err(FixtureError::parse(line, format!("invalid face index '{token}'"))),
    }
}

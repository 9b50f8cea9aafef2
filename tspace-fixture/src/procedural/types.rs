//! Procedural mesh types
//!
//! Value types shared by the cube builder, the query adapter and the serializers.

use glam::{Vec2, Vec3};

use crate::error::FixtureError;

/// One corner of one face: position, normal and texture coordinate
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub tex_coord: Vec2,
}

impl Vertex {
    /// Create a new vertex
    pub fn new(position: Vec3, normal: Vec3, tex_coord: Vec2) -> Self {
        Self {
            position,
            normal,
            tex_coord,
        }
    }
}

/// Triangle referencing three entries of [`Mesh::vertices`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Face {
    /// Create a new triangle
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    /// The three vertex indices in winding order
    pub fn indices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }
}

/// Triangle mesh with per-face vertices
///
/// Vertices are never shared between cube faces, so every face carries its
/// own UVs even where corners coincide geometrically.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub faces: Vec<Face>,
    pub vertices: Vec<Vertex>,
}

impl Mesh {
    /// Create empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex, returning its index
    pub fn add_vertex(&mut self, vertex: Vertex) -> usize {
        self.vertices.push(vertex);
        self.vertices.len() - 1
    }

    /// Add a triangle using three vertex indices
    pub fn add_triangle(&mut self, a: usize, b: usize, c: usize) {
        self.faces.push(Face::new(a, b, c));
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get triangle count
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Look up the vertex at corner `vert` of triangle `face`
    ///
    /// # Panics
    ///
    /// Panics if `vert` is not 0, 1 or 2, or if `face` is out of range. Both
    /// mean the caller broke the triangle-query contract.
    pub fn vertex(&self, face: usize, vert: usize) -> &Vertex {
        let f = &self.faces[face];
        let index = match vert {
            0 => f.a,
            1 => f.b,
            2 => f.c,
            _ => panic!("Unexpected vert value: {vert}"),
        };
        &self.vertices[index]
    }

    /// Check that every face references an existing vertex
    pub fn validate(&self) -> Result<(), FixtureError> {
        let vertex_count = self.vertices.len();
        for (face, f) in self.faces.iter().enumerate() {
            if let Some(index) = f.indices().into_iter().find(|&i| i >= vertex_count) {
                return Err(FixtureError::IndexOutOfRange {
                    face,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Mesh {
        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(Vertex::new(Vec3::ZERO, Vec3::Z, Vec2::ZERO));
        let b = mesh.add_vertex(Vertex::new(Vec3::X, Vec3::Z, Vec2::X));
        let c = mesh.add_vertex(Vertex::new(Vec3::Y, Vec3::Z, Vec2::Y));
        mesh.add_triangle(a, b, c);
        mesh
    }

    #[test]
    fn vertex_lookup_follows_face_corners() {
        let mesh = triangle();
        assert_eq!(mesh.vertex(0, 0).position, Vec3::ZERO);
        assert_eq!(mesh.vertex(0, 1).position, Vec3::X);
        assert_eq!(mesh.vertex(0, 2).position, Vec3::Y);
    }

    #[test]
    #[should_panic(expected = "Unexpected vert value: 3")]
    fn vertex_lookup_rejects_fourth_corner() {
        triangle().vertex(0, 3);
    }

    #[test]
    fn validate_reports_dangling_index() {
        let mut mesh = triangle();
        assert!(mesh.validate().is_ok());

        mesh.add_triangle(0, 1, 7);
        match mesh.validate() {
            Err(FixtureError::IndexOutOfRange {
                face,
                index,
                vertex_count,
            }) => {
                assert_eq!(face, 1);
                assert_eq!(index, 7);
                assert_eq!(vertex_count, 3);
            }
            other => panic!("expected IndexOutOfRange, got {other:?}"),
        }
    }
}

//! Mesh query adapter and tangent-space result collection
//!
//! [`MeshQuery`] exposes a [`Mesh`] to the tangent-space algorithm through
//! `mikktspace::Geometry` and appends every basis the algorithm reports to a
//! [`ResultCollector`].

use glam::Vec3;

use crate::procedural::Mesh;

/// Tangent-space basis reported for one corner of one triangle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TangentResult {
    pub tangent: Vec3,
    pub bi_tangent: Vec3,
    pub mag_s: f32,
    pub mag_t: f32,
    pub is_orientation_preserving: bool,
    pub face: usize,
    pub vert: usize,
}

impl TangentResult {
    pub fn new(
        tangent: Vec3,
        bi_tangent: Vec3,
        mag_s: f32,
        mag_t: f32,
        is_orientation_preserving: bool,
        face: usize,
        vert: usize,
    ) -> Self {
        Self {
            tangent,
            bi_tangent,
            mag_s,
            mag_t,
            is_orientation_preserving,
            face,
            vert,
        }
    }
}

/// Append-only list of results in the order the algorithm reported them
///
/// No deduplication or reordering happens here; serialization order is
/// report order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultCollector {
    results: Vec<TangentResult>,
}

impl ResultCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: TangentResult) {
        self.results.push(result);
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn as_slice(&self) -> &[TangentResult] {
        &self.results
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TangentResult> {
        self.results.iter()
    }
}

/// Read-through view of a mesh plus a write-through result sink
pub struct MeshQuery<'a> {
    mesh: &'a Mesh,
    results: &'a mut ResultCollector,
}

impl<'a> MeshQuery<'a> {
    pub fn new(mesh: &'a Mesh, results: &'a mut ResultCollector) -> Self {
        Self { mesh, results }
    }
}

impl mikktspace::Geometry for MeshQuery<'_> {
    fn num_faces(&self) -> usize {
        self.mesh.face_count()
    }

    fn num_vertices_of_face(&self, _face: usize) -> usize {
        3
    }

    fn position(&self, face: usize, vert: usize) -> [f32; 3] {
        self.mesh.vertex(face, vert).position.to_array()
    }

    fn normal(&self, face: usize, vert: usize) -> [f32; 3] {
        self.mesh.vertex(face, vert).normal.to_array()
    }

    fn tex_coord(&self, face: usize, vert: usize) -> [f32; 2] {
        self.mesh.vertex(face, vert).tex_coord.to_array()
    }

    fn set_tangent(
        &mut self,
        tangent: [f32; 3],
        bi_tangent: [f32; 3],
        f_mag_s: f32,
        f_mag_t: f32,
        bi_tangent_preserves_orientation: bool,
        face: usize,
        vert: usize,
    ) {
        self.results.push(TangentResult::new(
            Vec3::from_array(tangent),
            Vec3::from_array(bi_tangent),
            f_mag_s,
            f_mag_t,
            bi_tangent_preserves_orientation,
            face,
            vert,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procedural::make_cube;
    use mikktspace::Geometry;

    #[test]
    fn query_reads_through_to_mesh() {
        let mesh = make_cube();
        let mut results = ResultCollector::new();
        let query = MeshQuery::new(&mesh, &mut results);

        assert_eq!(query.num_faces(), 24);
        assert_eq!(query.num_vertices_of_face(5), 3);

        // Triangle 5 is the second fan triangle of the -X face
        let face = mesh.faces[5];
        assert_eq!(query.position(5, 0), mesh.vertices[face.a].position.to_array());
        assert_eq!(query.normal(5, 1), mesh.vertices[face.b].normal.to_array());
        assert_eq!(query.tex_coord(5, 2), mesh.vertices[face.c].tex_coord.to_array());
    }

    #[test]
    fn set_tangent_appends_in_call_order() {
        let mesh = make_cube();
        let mut results = ResultCollector::new();
        {
            let mut query = MeshQuery::new(&mesh, &mut results);
            query.set_tangent([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], 2.0, 3.0, false, 7, 2);
            query.set_tangent([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], 1.0, 1.0, true, 0, 0);
        }

        assert_eq!(results.len(), 2);
        let first = results.as_slice()[0];
        assert_eq!(first.face, 7);
        assert_eq!(first.vert, 2);
        assert_eq!(first.tangent, Vec3::X);
        assert_eq!(first.bi_tangent, Vec3::Y);
        assert_eq!(first.mag_s, 2.0);
        assert_eq!(first.mag_t, 3.0);
        assert!(!first.is_orientation_preserving);
        assert_eq!(results.as_slice()[1].face, 0);
    }

    #[test]
    #[should_panic(expected = "Unexpected vert value: 3")]
    fn query_panics_on_malformed_corner() {
        let mesh = make_cube();
        let mut results = ResultCollector::new();
        let query = MeshQuery::new(&mesh, &mut results);
        query.position(0, 3);
    }
}

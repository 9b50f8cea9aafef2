//! Fan-triangulated cube used as tangent-space test geometry

use glam::{Vec2, Vec3};
use tracing::debug;

use super::types::{Mesh, Vertex};

/// Cube faces
const FACE_COUNT: usize = 6;

/// Four corners plus one synthetic center per face
const POINTS_PER_FACE: usize = 5;

/// Index of the center point inside a face's control points
const CENTER: usize = 4;

/// UV coordinate and direction from the cube center for one control point
#[derive(Clone, Copy, Debug)]
struct ControlPoint {
    uv: Vec2,
    dir: Vec3,
}

const fn pt(uv: [f32; 2], dir: [f32; 3]) -> ControlPoint {
    ControlPoint {
        uv: Vec2::new(uv[0], uv[1]),
        dir: Vec3::new(dir[0], dir[1], dir[2]),
    }
}

/// Per-face control points, corners wound CCW as seen from outside.
///
/// Hand-authored: the UV layout (including the collapsed U range on the Y
/// faces) is part of what the tangent-space fixtures exercise, so these
/// values must not be derived from the face normals.
const CONTROL_POINTS: [[ControlPoint; POINTS_PER_FACE]; FACE_COUNT] = [
    // +X
    [
        pt([0.0, 0.0], [1.0, -1.0, 1.0]),
        pt([0.0, 1.0], [1.0, -1.0, -1.0]),
        pt([1.0, 1.0], [1.0, 1.0, -1.0]),
        pt([1.0, 0.0], [1.0, 1.0, 1.0]),
        pt([0.5, 0.5], [1.0, 0.0, 0.0]),
    ],
    // -X
    [
        pt([1.0, 0.0], [-1.0, 1.0, 1.0]),
        pt([1.0, 1.0], [-1.0, 1.0, -1.0]),
        pt([0.0, 1.0], [-1.0, -1.0, -1.0]),
        pt([0.0, 0.0], [-1.0, -1.0, 1.0]),
        pt([0.5, 0.5], [-1.0, 0.0, 0.0]),
    ],
    // +Y
    [
        pt([0.0, 0.0], [1.0, 1.0, 1.0]),
        pt([0.0, 1.0], [1.0, 1.0, -1.0]),
        pt([0.0, 1.0], [-1.0, 1.0, -1.0]),
        pt([0.0, 0.0], [-1.0, 1.0, 1.0]),
        pt([0.0, 0.5], [0.0, 1.0, 0.0]),
    ],
    // -Y
    [
        pt([0.0, 0.0], [-1.0, -1.0, 1.0]),
        pt([0.0, 1.0], [-1.0, -1.0, -1.0]),
        pt([0.0, 1.0], [1.0, -1.0, -1.0]),
        pt([0.0, 0.0], [1.0, -1.0, 1.0]),
        pt([0.0, 0.5], [0.0, -1.0, 0.0]),
    ],
    // +Z
    [
        pt([0.0, 0.0], [-1.0, 1.0, 1.0]),
        pt([0.0, 1.0], [-1.0, -1.0, 1.0]),
        pt([1.0, 1.0], [1.0, -1.0, 1.0]),
        pt([1.0, 0.0], [1.0, 1.0, 1.0]),
        pt([0.5, 0.5], [0.0, 0.0, 1.0]),
    ],
    // -Z
    [
        pt([1.0, 0.0], [1.0, 1.0, -1.0]),
        pt([1.0, 1.0], [1.0, -1.0, -1.0]),
        pt([0.0, 1.0], [-1.0, -1.0, -1.0]),
        pt([0.0, 0.0], [-1.0, 1.0, -1.0]),
        pt([0.5, 0.5], [0.0, 0.0, -1.0]),
    ],
];

impl ControlPoint {
    /// Place the point on a cube of half-extent 0.5 with a radial normal
    fn to_vertex(self) -> Vertex {
        let length = self.dir.length();
        debug_assert!(length > 0.0, "control point direction must be nonzero");

        Vertex::new(self.dir / 2.0, self.dir / length, self.uv)
    }
}

/// Generate the fixture cube
///
/// Each of the 6 faces is fanned around its own center point into 4
/// triangles `(corner[i], corner[i + 1], center)`. No vertex is shared across
/// faces.
///
/// # Returns
/// Mesh with 30 vertices (5 per face) and 24 triangles
pub fn make_cube() -> Mesh {
    let mut mesh = Mesh::new();

    for points in &CONTROL_POINTS {
        let base = mesh.vertex_count();

        for corner in 0..CENTER {
            let next = (corner + 1) % CENTER;
            mesh.add_triangle(base + corner, base + next, base + CENTER);
        }

        for point in points {
            mesh.add_vertex(point.to_vertex());
        }
    }

    debug!(
        "Built fixture cube: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.face_count()
    );

    mesh
}

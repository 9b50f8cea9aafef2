//! Tangent-space generator seam
//!
//! The algorithm itself is an external service; fixtures only depend on it
//! through [`TangentSpaceGenerator`], so tests can substitute a stub.

use tracing::debug;

use crate::error::FixtureError;

/// Something that walks a geometry and reports one basis per face corner
pub trait TangentSpaceGenerator {
    /// Read geometry through `geometry` and report results through
    /// `mikktspace::Geometry::set_tangent`
    fn generate<G: mikktspace::Geometry>(&self, geometry: &mut G) -> Result<(), FixtureError>;
}

/// Reference MikkTSpace implementation from the `mikktspace` crate
#[derive(Clone, Copy, Debug, Default)]
pub struct MikkTSpace;

impl TangentSpaceGenerator for MikkTSpace {
    fn generate<G: mikktspace::Geometry>(&self, geometry: &mut G) -> Result<(), FixtureError> {
        debug!("Running MikkTSpace over {} faces", geometry.num_faces());

        if mikktspace::generate_tangents(geometry) {
            Ok(())
        } else {
            Err(FixtureError::GenerationFailed)
        }
    }
}

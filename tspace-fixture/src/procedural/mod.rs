//! Procedural mesh generation
//!
//! The fixture cube and the mesh value types it is made of.

mod primitives;
mod types;

pub use primitives::make_cube;
pub use types::{Face, Mesh, Vertex};

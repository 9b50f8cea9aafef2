//! Tangent-space fixture generation
//!
//! Builds a small fan-triangulated cube, runs a tangent-space generator
//! (MikkTSpace by default) over it and dumps either the geometry or the
//! generated bases as deterministic text. The dumps serve as golden data for
//! checking other tangent-space implementations.
//!
//! # Example
//! ```no_run
//! use tspace_fixture::{run, MikkTSpace, OutputMode};
//!
//! let mut out = std::io::stdout().lock();
//! run(OutputMode::Literal, &MikkTSpace, &mut out)?;
//! # Ok::<(), tspace_fixture::FixtureError>(())
//! ```

pub mod driver;
pub mod error;
pub mod export;
pub mod generator;
pub mod procedural;
pub mod query;

pub use driver::{run, FixtureContext, OutputMode};
pub use error::FixtureError;
pub use export::{parse_obj, parse_results, write_obj, write_results, FLOAT_PRECISION};
pub use generator::{MikkTSpace, TangentSpaceGenerator};
pub use procedural::{make_cube, Face, Mesh, Vertex};
pub use query::{MeshQuery, ResultCollector, TangentResult};

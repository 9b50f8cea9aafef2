//! Fixture driver
//!
//! Builds the cube, runs the tangent-space generator over it and writes the
//! requested dump.

use std::fmt;
use std::io::Write;
use tracing::{info, warn};

use crate::error::FixtureError;
use crate::export::{write_obj, write_results};
use crate::generator::TangentSpaceGenerator;
use crate::procedural::{make_cube, Mesh};
use crate::query::{MeshQuery, ResultCollector};

/// Which dump to produce
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Mesh geometry as OBJ text
    Obj,
    /// Tangent-space results as `Result::new(..),` lines
    #[default]
    Literal,
}

impl OutputMode {
    /// Select a mode from the CLI argument
    ///
    /// `"obj"` selects [`OutputMode::Obj`]; anything else, including no
    /// argument, falls back to [`OutputMode::Literal`].
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("obj") => Self::Obj,
            _ => Self::Literal,
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Obj => write!(f, "obj"),
            Self::Literal => write!(f, "rust"),
        }
    }
}

/// Mesh and the results generated for it
#[derive(Clone, Debug, Default)]
pub struct FixtureContext {
    pub mesh: Mesh,
    pub results: ResultCollector,
}

impl FixtureContext {
    pub fn new(mesh: Mesh) -> Self {
        Self {
            mesh,
            results: ResultCollector::new(),
        }
    }

    /// Run `generator` over the mesh, collecting its results
    pub fn generate<T: TangentSpaceGenerator>(
        &mut self,
        generator: &T,
    ) -> Result<(), FixtureError> {
        let mut query = MeshQuery::new(&self.mesh, &mut self.results);
        generator.generate(&mut query)?;

        let expected = self.mesh.face_count() * 3;
        if self.results.len() != expected {
            warn!(
                "Generator reported {} results, expected {} (3 per face)",
                self.results.len(),
                expected
            );
        }
        Ok(())
    }

    /// Write the dump selected by `mode`
    pub fn write<W: Write>(&self, mode: OutputMode, out: &mut W) -> Result<(), FixtureError> {
        match mode {
            OutputMode::Obj => write_obj(&self.mesh, out),
            OutputMode::Literal => write_results(self.results.as_slice(), out),
        }
    }
}

/// Generate fixtures for the cube and write them to `out`
///
/// The generator runs in both modes; OBJ output simply ignores its results.
pub fn run<T, W>(mode: OutputMode, generator: &T, out: &mut W) -> Result<(), FixtureError>
where
    T: TangentSpaceGenerator,
    W: Write,
{
    let mut context = FixtureContext::new(make_cube());
    context.generate(generator)?;

    info!(
        "Writing {} fixture ({} faces, {} results)",
        mode,
        context.mesh.face_count(),
        context.results.len()
    );
    context.write(mode, out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_selection_is_permissive() {
        assert_eq!(OutputMode::from_arg(Some("obj")), OutputMode::Obj);
        assert_eq!(OutputMode::from_arg(Some("rust")), OutputMode::Literal);
        assert_eq!(OutputMode::from_arg(Some("OBJ")), OutputMode::Literal);
        assert_eq!(OutputMode::from_arg(Some("")), OutputMode::Literal);
        assert_eq!(OutputMode::from_arg(None), OutputMode::Literal);
    }

    #[test]
    fn mode_display_matches_cli_names() {
        assert_eq!(OutputMode::Obj.to_string(), "obj");
        assert_eq!(OutputMode::Literal.to_string(), "rust");
    }
}

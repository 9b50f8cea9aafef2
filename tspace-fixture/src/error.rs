//! Error types for fixture generation

/// Error type for mesh validation, tangent generation and fixture I/O.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Failed to write fixture output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tangent-space generation failed")]
    GenerationFailed,

    #[error("Face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },

    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl FixtureError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

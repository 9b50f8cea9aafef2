//! gen-tspace-fixtures - Golden fixtures for tangent-space generation
//!
//! Builds the fan-triangulated fixture cube, runs MikkTSpace over it and
//! prints either the cube geometry or the generated tangent bases.
//!
//! # Usage
//!
//! ```bash
//! # Tangent-space results as Rust `Result::new(..),` literals (default)
//! gen-tspace-fixtures > results.rs.in
//!
//! # Cube geometry as OBJ
//! gen-tspace-fixtures obj > cube.obj
//! ```
//!
//! Diagnostics go to stderr and are controlled by `RUST_LOG`.

use anyhow::{Context, Result};
use clap::Parser;
use tspace_fixture::{run, MikkTSpace, OutputMode};

/// Only the first argument is looked at; there are no flags.
#[derive(Parser)]
#[command(name = "gen-tspace-fixtures")]
#[command(about = "Generate golden tangent-space fixtures for a procedural cube")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Output mode: `obj` for geometry, anything else for result literals.
    /// Extra arguments are ignored.
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

impl Cli {
    fn mode_arg(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

fn main() -> Result<()> {
    // Log to stderr so stdout stays byte-for-byte deterministic
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let mode = OutputMode::from_arg(cli.mode_arg());
    tracing::debug!("Mode argument {:?} selects {} output", cli.mode_arg(), mode);

    let mut out = std::io::stdout().lock();
    run(mode, &MikkTSpace, &mut out)
        .with_context(|| format!("Failed to generate {} fixture", mode))?;

    Ok(())
}

//! Deterministic text serializers
//!
//! Floats are always written fixed-point with [`FLOAT_PRECISION`] fractional
//! digits so fixtures are byte-identical across platforms.

mod literal;
mod obj;

pub use literal::{parse_results, write_results};
pub use obj::{parse_obj, write_obj};

/// Fractional digits for every float in fixture output
pub const FLOAT_PRECISION: usize = 8;

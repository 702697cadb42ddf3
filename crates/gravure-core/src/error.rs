//! Error types for the core geometry kernel.

use thiserror::Error;

/// Errors raised by geometry configuration mistakes.
///
/// These are programming or configuration errors, not recoverable plotting
/// conditions, and callers are expected to fail the whole operation.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// A transform scale with `|sx| != |sy|` was requested. Stroke widths
    /// have no defined meaning under an anisotropic scale.
    #[error("non-uniform scale ratio ({sx}, {sy}) is not supported")]
    NonUniformScale { sx: f64, sy: f64 },
}

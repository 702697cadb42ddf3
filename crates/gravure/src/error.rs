//! Error types for plot operations.

use thiserror::Error;

use gravure_core::GeometryError;

use crate::board::{EdgeShape, PadShape};

/// The main error type for plot operations.
///
/// Malformed board data fails the whole plot: silently skipping an entity
/// would corrupt output that consumers depend on for manufacturing artwork
/// or revision diffing.
#[derive(Debug, Error)]
pub enum PlotError {
    /// A pad carries a shape tag this engine cannot flash.
    #[error("unsupported pad shape {0:?}")]
    UnsupportedPadShape(PadShape),

    /// A module edge carries a shape tag this engine cannot render.
    #[error("unsupported edge shape {0:?}")]
    UnsupportedEdgeShape(EdgeShape),

    /// A geometry configuration error bubbled up from the kernel.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

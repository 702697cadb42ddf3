//! Gravure Core Types and Definitions
//!
//! This crate provides the foundational types for the Gravure board plotting
//! library. It includes:
//!
//! - **Geometry**: points, sizes, rectangles, affine transforms and
//!   decidegree angle arithmetic ([`geometry`] module)
//! - **Colors**: RGBA values and the fixed named palette ([`color`] module)
//! - **Layers**: layer identifiers and layer-set masks ([`layer`] module)
//! - **Metadata**: provenance tags for emitted primitives ([`meta`] module)
//! - **Pages**: standard drawing sheet sizes ([`page`] module)

pub mod color;
pub mod error;
pub mod geometry;
pub mod layer;
pub mod meta;
pub mod page;

pub use color::{Color, ColorDefinition};
pub use error::GeometryError;
pub use geometry::{
    Point, Rect, Size, Transform, add_angles, arc_tangente, clamp, decideg_to_rad, line_length,
    mil_to_mm, mm_to_mil, normalize_angle, rad_to_decideg,
};
pub use layer::{LayerId, LayerSet};
pub use meta::ElementMeta;

//! Provenance metadata attached to emitted primitives.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::layer::LayerId;

/// Describes where an emitted primitive came from.
///
/// The tag travels alongside geometry purely for provenance and diffing;
/// it never alters what is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementMeta {
    /// Kind of the owning entity, e.g. `"module"`.
    pub owner: String,
    /// Name of the owning entity, e.g. a module reference.
    pub name: String,
    /// Layer the primitive belongs to.
    pub layer: LayerId,
    /// Kind of the emitted element, e.g. `"pad"` or `"segment"`.
    pub element: String,
}

impl ElementMeta {
    pub fn new(
        owner: impl Into<String>,
        name: impl Into<String>,
        layer: LayerId,
        element: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            layer,
            element: element.into(),
        }
    }
}

impl fmt::Display for ElementMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.owner, self.element, self.name, self.layer
        )
    }
}

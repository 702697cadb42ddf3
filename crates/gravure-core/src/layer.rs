//! Board layer identifiers and layer-set masks.
//!
//! The layer domain is the fixed 50-id table of a standard board stackup:
//! 32 copper layers (front, thirty inner, back) followed by the technical
//! layers (adhesive, paste, silkscreen, mask, user drawings and comments,
//! eco, edge cuts, margin, courtyard, fab). [`LayerSet`] is a bitset over
//! that domain used to select which layers a plot pass targets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A physical or technical layer identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LayerId(u32);

impl LayerId {
    /// Front copper.
    pub const F_CU: LayerId = LayerId(0);
    /// Back copper.
    pub const B_CU: LayerId = LayerId(31);
    pub const B_ADHES: LayerId = LayerId(32);
    pub const F_ADHES: LayerId = LayerId(33);
    pub const B_PASTE: LayerId = LayerId(34);
    pub const F_PASTE: LayerId = LayerId(35);
    pub const B_SILKS: LayerId = LayerId(36);
    pub const F_SILKS: LayerId = LayerId(37);
    pub const B_MASK: LayerId = LayerId(38);
    pub const F_MASK: LayerId = LayerId(39);
    pub const DWGS_USER: LayerId = LayerId(40);
    pub const CMTS_USER: LayerId = LayerId(41);
    pub const ECO1_USER: LayerId = LayerId(42);
    pub const ECO2_USER: LayerId = LayerId(43);
    pub const EDGE_CUTS: LayerId = LayerId(44);
    pub const MARGIN: LayerId = LayerId(45);
    pub const B_CRTYD: LayerId = LayerId(46);
    pub const F_CRTYD: LayerId = LayerId(47);
    pub const B_FAB: LayerId = LayerId(48);
    pub const F_FAB: LayerId = LayerId(49);

    /// Number of layer ids in the domain.
    pub const COUNT: u32 = 50;

    /// Creates a layer id from a raw index, if it is inside the domain.
    pub fn from_index(index: u32) -> Option<Self> {
        (index < Self::COUNT).then_some(Self(index))
    }

    /// Inner copper layer `n`, with `n` in `1..=30`.
    pub fn inner_copper(n: u32) -> Option<Self> {
        (1..=30).contains(&n).then_some(Self(n))
    }

    /// The raw index of this layer.
    pub fn index(self) -> u32 {
        self.0
    }

    /// True for the 32 copper layers.
    pub fn is_copper(self) -> bool {
        self.0 < 32
    }
}

impl Default for LayerId {
    fn default() -> Self {
        Self::F_CU
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A set of layers over the fixed id domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerSet(u64);

impl LayerSet {
    /// The empty set.
    pub fn new() -> Self {
        Self(0)
    }

    /// A set containing a single layer.
    pub fn single(layer: LayerId) -> Self {
        Self(1u64 << layer.index())
    }

    /// A set built from a slice of layers.
    pub fn from_layers(layers: &[LayerId]) -> Self {
        let mut set = Self::new();
        for &layer in layers {
            set.insert(layer);
        }
        set
    }

    /// Adds a layer to the set.
    pub fn insert(&mut self, layer: LayerId) {
        self.0 |= 1u64 << layer.index();
    }

    /// Membership test.
    pub fn contains(self, layer: LayerId) -> bool {
        self.0 & (1u64 << layer.index()) != 0
    }

    /// Set intersection.
    pub fn intersection(self, other: LayerSet) -> LayerSet {
        Self(self.0 & other.0)
    }

    /// True when no layer is present.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates over the member layers in index order.
    pub fn iter(self) -> impl Iterator<Item = LayerId> {
        (0..LayerId::COUNT)
            .filter_map(LayerId::from_index)
            .filter(move |layer| self.contains(*layer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_id_domain() {
        assert_eq!(LayerId::F_CU.index(), 0);
        assert_eq!(LayerId::B_CU.index(), 31);
        assert_eq!(LayerId::F_FAB.index(), 49);
        assert!(LayerId::from_index(49).is_some());
        assert!(LayerId::from_index(50).is_none());
    }

    #[test]
    fn test_inner_copper() {
        assert_eq!(LayerId::inner_copper(1).unwrap().index(), 1);
        assert_eq!(LayerId::inner_copper(30).unwrap().index(), 30);
        assert!(LayerId::inner_copper(0).is_none());
        assert!(LayerId::inner_copper(31).is_none());
    }

    #[test]
    fn test_is_copper() {
        assert!(LayerId::F_CU.is_copper());
        assert!(LayerId::B_CU.is_copper());
        assert!(LayerId::inner_copper(15).unwrap().is_copper());
        assert!(!LayerId::B_ADHES.is_copper());
        assert!(!LayerId::F_FAB.is_copper());
    }

    #[test]
    fn test_layer_set_membership() {
        let set = LayerSet::from_layers(&[LayerId::F_CU, LayerId::B_CU]);
        assert!(set.contains(LayerId::F_CU));
        assert!(set.contains(LayerId::B_CU));
        assert!(!set.contains(LayerId::F_SILKS));
        assert!(!set.is_empty());
        assert!(LayerSet::new().is_empty());
    }

    #[test]
    fn test_layer_set_intersection() {
        let a = LayerSet::from_layers(&[LayerId::F_CU, LayerId::F_MASK]);
        let b = LayerSet::from_layers(&[LayerId::F_MASK, LayerId::B_MASK]);
        let both = a.intersection(b);
        assert!(both.contains(LayerId::F_MASK));
        assert!(!both.contains(LayerId::F_CU));
        assert!(a.intersection(LayerSet::single(LayerId::B_CU)).is_empty());
    }

    #[test]
    fn test_layer_set_iter() {
        let set = LayerSet::from_layers(&[LayerId::B_CU, LayerId::F_CU]);
        let members: Vec<_> = set.iter().collect();
        assert_eq!(members, vec![LayerId::F_CU, LayerId::B_CU]);
    }
}

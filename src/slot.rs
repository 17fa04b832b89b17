//! Slot identity and kinds.
//!
//! A slot is one named, typed field of a target record, trackable on its own
//! through a build chain. On the typed layer a slot is a unit marker type
//! implementing [`Slot`]; its identity is an FNV-1a hash of the field name,
//! computed at compile time the same way the registry keys its entries.

use const_fnv1a_hash::fnv1a_hash_str_32;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a slot, derived from the slot's field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotId(i32);

impl SlotId {
    /// Derives the id for a field name. Stable across processes and builds.
    pub const fn from_name(name: &str) -> Self {
        Self(fnv1a_hash_str_32(name) as i32)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// Whether a slot must be set explicitly or falls back to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotKind {
    /// No default; `build` fails while this slot is unset.
    Required,
    /// Carries a default rendered when the slot is left unset.
    Optional,
}

/// A named, typed field of a target record.
///
/// Implemented by the unit marker types the [`slots!`](crate::slots) macro
/// declares, one per field, in field order.
pub trait Slot {
    const NAME: &str;
    const ID: SlotId = SlotId::from_name(Self::NAME);

    type Value;
}

/// A [`Slot`] with a declared default, used when the slot is left unset.
pub trait OptionalSlot: Slot {
    fn default_value() -> Self::Value;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Volume;

    impl Slot for Volume {
        const NAME: &str = "volume";
        type Value = u32;
    }

    #[test]
    fn test_id_matches_name_hash() {
        assert_eq!(Volume::ID, SlotId::from_name("volume"));
        assert_ne!(Volume::ID, SlotId::from_name("volumes"));
    }

    #[test]
    fn test_id_is_stable_in_const_context() {
        const ID: SlotId = SlotId::from_name("volume");
        assert_eq!(ID, Volume::ID);
    }

    #[test]
    fn test_display_is_hex() {
        let rendered = SlotId::from_name("volume").to_string();
        assert!(rendered.starts_with("0x"));
        assert_eq!(rendered.len(), 10); // 0x + 8 hex digits
    }
}

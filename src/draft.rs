//! Draft: the runtime builder state.
//!
//! A draft accumulates slot values against a verified registry. Every `set`
//! returns a new draft and leaves the original untouched, so a partially
//! filled draft can seed any number of diverging chains. `build` is a pure
//! read that resolves each slot in registry order.

use crate::record::{ErasedValue, Record};
use crate::registry::{Registry, SlotDef};
use crate::slot::SlotId;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum AssignError {
    #[error("UnknownSlot: slot {0} is not declared in this registry")]
    UnknownSlot(SlotId),
    #[error("ValueTypeMismatch: slot '{slot}' holds {expected}, got {actual}")]
    ValueTypeMismatch {
        slot: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("DuplicateAssignment: slot '{slot}' is already set in this chain")]
    DuplicateAssignment { slot: &'static str },
}

impl AssignError {
    pub(crate) fn value_type_mismatch(slot: &SlotDef, actual: &'static str) -> Self {
        Self::ValueTypeMismatch {
            slot: slot.name,
            expected: slot.type_name,
            actual,
        }
    }

    pub(crate) fn duplicate_assignment(slot: &SlotDef) -> Self {
        Self::DuplicateAssignment { slot: slot.name }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("MissingRequiredField: slot '{slot}' was never set and declares no default")]
    MissingRequiredField { slot: &'static str },
}

impl BuildError {
    pub(crate) fn missing_required_field(slot: &SlotDef) -> Self {
        Self::MissingRequiredField { slot: slot.name }
    }
}

/// One in-progress build of record `R`, scoped to a registry.
///
/// The id is regenerated on every `set`, so trace output distinguishes the
/// branches of a forked chain.
pub struct Draft<R: Record> {
    id: Uuid,
    registry: Registry<R>,
    values: HashMap<SlotId, ErasedValue>,
}

impl<R: Record> Clone for Draft<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            registry: self.registry.clone(),
            values: self.values.clone(),
        }
    }
}

impl<R: Record> Draft<R> {
    pub(crate) fn new(registry: Registry<R>) -> Self {
        Self {
            id: Uuid::now_v7(),
            registry,
            values: HashMap::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Whether `slot` has been explicitly set in this chain.
    pub fn is_set(&self, slot: SlotId) -> bool {
        self.values.contains_key(&slot)
    }

    /// Number of explicitly set slots.
    pub fn fill_count(&self) -> usize {
        self.values.len()
    }

    /// Sets `slot` to `value`, returning the advanced draft.
    ///
    /// The receiver is unaffected; keep it around to branch the chain.
    #[instrument(level = "debug", skip(self, value), fields(draft_id = %self.id, slot = %slot))]
    pub fn set<T: Any + Send + Sync>(&self, slot: SlotId, value: T) -> Result<Self, AssignError> {
        let def = self
            .registry
            .slot(slot)
            .ok_or(AssignError::UnknownSlot(slot))?;

        if def.type_id != TypeId::of::<T>() {
            return Err(AssignError::value_type_mismatch(
                def,
                std::any::type_name::<T>(),
            ));
        }

        if self.values.contains_key(&slot) {
            return Err(AssignError::duplicate_assignment(def));
        }

        let mut values = self.values.clone();
        values.insert(slot, Arc::new(value) as ErasedValue);

        Ok(Self {
            id: Uuid::now_v7(),
            registry: self.registry.clone(),
            values,
        })
    }

    /// Resolves every slot in registry order and assembles the record.
    ///
    /// Explicitly set values win; unset optional slots render their default;
    /// an unset required slot aborts the build. Pure read, callable any
    /// number of times on the same draft.
    #[instrument(level = "debug", skip(self), fields(draft_id = %self.id, filled = self.fill_count()))]
    pub fn build(&self) -> Result<R, BuildError> {
        let mut resolved = Vec::with_capacity(self.registry.slots().len());

        for def in self.registry.slots() {
            match self.values.get(&def.id) {
                Some(value) => resolved.push(Arc::clone(value)),
                None => match &def.default {
                    Some(default) => resolved.push(default()),
                    None => return Err(BuildError::missing_required_field(def)),
                },
            }
        }

        Ok(R::from_erased(&resolved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots;

    #[derive(Debug, Clone, PartialEq)]
    struct Brew {
        volume: u32,
        label: String,
    }

    slots! {
        impl Brew {
            Volume(volume: u32),
            Label(label: String = String::from("house")),
        }
    }

    const VOLUME: SlotId = SlotId::from_name("volume");
    const LABEL: SlotId = SlotId::from_name("label");

    fn get_test_registry() -> Registry<Brew> {
        Registry::new(vec![
            SlotDef::required::<u32>("volume"),
            SlotDef::optional("label", || String::from("house")),
        ])
        .unwrap()
    }

    #[test]
    fn test_set_and_build() {
        let registry = get_test_registry();

        let brew = registry
            .draft()
            .set(VOLUME, 250u32)
            .unwrap()
            .set(LABEL, String::from("flat"))
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            brew,
            Brew {
                volume: 250,
                label: String::from("flat"),
            }
        );
    }

    #[test]
    fn test_unset_optional_slot_renders_default() {
        let registry = get_test_registry();

        let brew = registry.draft().set(VOLUME, 250u32).unwrap().build().unwrap();

        assert_eq!(brew.label, "house");
    }

    #[test]
    fn test_unknown_slot_is_rejected() {
        let registry = get_test_registry();

        let result = registry.draft().set(SlotId::from_name("strength"), 1u32);

        assert!(matches!(result, Err(AssignError::UnknownSlot(_))));
    }

    #[test]
    fn test_wrong_value_type_is_rejected() {
        let registry = get_test_registry();

        let result = registry.draft().set(VOLUME, "250");

        assert!(matches!(
            result,
            Err(AssignError::ValueTypeMismatch { slot: "volume", .. })
        ));
    }

    #[test]
    fn test_duplicate_assignment_is_rejected() {
        let registry = get_test_registry();

        let draft = registry.draft().set(VOLUME, 250u32).unwrap();
        let result = draft.set(VOLUME, 300u32);

        assert!(matches!(
            result,
            Err(AssignError::DuplicateAssignment { slot: "volume" })
        ));
    }

    #[test]
    fn test_missing_required_slot_aborts_build() {
        let registry = get_test_registry();

        let result = registry.draft().build();

        assert!(matches!(
            result,
            Err(BuildError::MissingRequiredField { slot: "volume" })
        ));
    }

    #[test]
    fn test_set_leaves_the_receiver_untouched() {
        let registry = get_test_registry();

        let base = registry.draft();
        let advanced = base.set(VOLUME, 250u32).unwrap();

        assert!(!base.is_set(VOLUME));
        assert!(advanced.is_set(VOLUME));
        assert_eq!(base.fill_count(), 0);
        assert_eq!(advanced.fill_count(), 1);
    }

    #[test]
    fn test_branches_stay_independent() {
        let registry = get_test_registry();

        let base = registry.draft().set(VOLUME, 250u32).unwrap();
        let left = base.set(LABEL, String::from("oat")).unwrap();
        let right = base.set(LABEL, String::from("soy")).unwrap();

        assert_eq!(left.build().unwrap().label, "oat");
        assert_eq!(right.build().unwrap().label, "soy");
        assert_eq!(base.build().unwrap().label, "house");
    }

    #[test]
    fn test_build_is_repeatable() {
        let registry = get_test_registry();

        let draft = registry.draft().set(VOLUME, 250u32).unwrap();

        assert_eq!(draft.build().unwrap(), draft.build().unwrap());
    }
}

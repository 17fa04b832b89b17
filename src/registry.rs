//! Runtime slot registry.
//!
//! The dynamic counterpart of the `slots!` declaration: an ordered list of
//! [`SlotDef`] descriptors verified against the record's schema when the
//! registry is constructed. A registry that does not correspond to its
//! record, in arity, per-position value type, or per-position field name,
//! is rejected up front, so no draft can ever mis-assign a field.

use crate::draft::Draft;
use crate::record::{ErasedValue, FieldSchema, Record};
use crate::slot::{SlotId, SlotKind};
use chrono::{DateTime, Utc};
use std::any::{Any, TypeId};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::instrument;

type DefaultFn = Arc<dyn Fn() -> ErasedValue + Send + Sync>;

/// Runtime descriptor of one slot: field name, value type, and an optional
/// default. Immutable once declared.
#[derive(Clone)]
pub struct SlotDef {
    pub(crate) name: &'static str,
    pub(crate) id: SlotId,
    pub(crate) type_id: TypeId,
    pub(crate) type_name: &'static str,
    pub(crate) default: Option<DefaultFn>,
}

impl SlotDef {
    /// Declares a required slot holding a `T`.
    pub fn required<T: Any + Send + Sync>(name: &'static str) -> Self {
        Self {
            name,
            id: SlotId::from_name(name),
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            default: None,
        }
    }

    /// Declares an optional slot holding a `T`, with `default` rendered when
    /// the slot is left unset.
    pub fn optional<T, F>(name: &'static str, default: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            name,
            id: SlotId::from_name(name),
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            default: Some(Arc::new(move || Arc::new(default()) as ErasedValue)),
        }
    }

    pub fn id(&self) -> SlotId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> SlotKind {
        match self.default {
            Some(_) => SlotKind::Optional,
            None => SlotKind::Required,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("ArityMismatch: record declares {fields} fields, registry declares {slots} slots")]
    ArityMismatch { fields: usize, slots: usize },
    #[error("TypeMismatch: field '{field}' is {field_type}, slot '{slot}' holds {slot_type}")]
    TypeMismatch {
        field: &'static str,
        field_type: &'static str,
        slot: &'static str,
        slot_type: &'static str,
    },
    #[error("NameMismatch: field '{field}' is paired with slot '{slot}'")]
    NameMismatch {
        field: &'static str,
        slot: &'static str,
    },
}

impl SchemaError {
    pub(crate) fn arity_mismatch(fields: usize, slots: usize) -> Self {
        Self::ArityMismatch { fields, slots }
    }

    pub(crate) fn type_mismatch(field: &FieldSchema, slot: &SlotDef) -> Self {
        Self::TypeMismatch {
            field: field.name,
            field_type: field.type_name,
            slot: slot.name,
            slot_type: slot.type_name,
        }
    }

    pub(crate) fn name_mismatch(field: &FieldSchema, slot: &SlotDef) -> Self {
        Self::NameMismatch {
            field: field.name,
            slot: slot.name,
        }
    }
}

/// Ordered slot descriptors for record `R`, verified against `R`'s schema.
///
/// Cheap to clone and share; immutable after construction, so any number of
/// concurrent draft chains can read it without synchronization.
pub struct Registry<R: Record> {
    slots: Arc<[SlotDef]>,
    registered_at: DateTime<Utc>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> Clone for Registry<R> {
    fn clone(&self) -> Self {
        Self {
            slots: Arc::clone(&self.slots),
            registered_at: self.registered_at,
            _record: PhantomData,
        }
    }
}

impl<R: Record> Registry<R> {
    /// Registers `slots` for record `R`.
    ///
    /// `slots` must list one descriptor per record field, in declaration
    /// order. Arity, per-position value type, and per-position field name
    /// are all checked here; the name check is what makes a same-typed
    /// wrong-order slot list a registration error instead of a silently
    /// mis-assigned record.
    #[instrument(
        level = "debug",
        skip(slots),
        fields(record = std::any::type_name::<R>(), slot_count = slots.len())
    )]
    pub fn new(slots: Vec<SlotDef>) -> Result<Self, SchemaError> {
        let schema = R::schema();

        if schema.len() != slots.len() {
            return Err(SchemaError::arity_mismatch(schema.len(), slots.len()));
        }

        for (field, slot) in schema.iter().zip(slots.iter()) {
            if field.name != slot.name {
                return Err(SchemaError::name_mismatch(field, slot));
            }

            if field.type_id != slot.type_id {
                return Err(SchemaError::type_mismatch(field, slot));
            }
        }

        Ok(Self {
            slots: slots.into(),
            registered_at: Utc::now(),
            _record: PhantomData,
        })
    }

    /// Starts a draft with every slot unset.
    pub fn draft(&self) -> Draft<R> {
        Draft::new(self.clone())
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    pub(crate) fn slot(&self, id: SlotId) -> Option<&SlotDef> {
        self.slots.iter().find(|slot| slot.id == id)
    }

    pub(crate) fn slots(&self) -> &[SlotDef] {
        &self.slots
    }
}

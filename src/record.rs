//! The record side of the builder: an isomorphism between a record type and
//! its ordered field list.
//!
//! [`Record`] is implemented by the [`slots!`](crate::slots) macro, never by
//! hand. The typed builder moves through `Fields` (an HList mirroring the
//! record's fields in declaration order); the dynamic layer goes through
//! [`schema`](Record::schema) and [`from_erased`](Record::from_erased)
//! instead, with every value verified against the schema before it is stored.

use crate::hlist::HList;
use std::any::{Any, TypeId};
use std::sync::Arc;

/// A slot value with its concrete type erased, shareable across branched
/// drafts.
pub type ErasedValue = Arc<dyn Any + Send + Sync>;

/// One field of a record's runtime schema: name and value type, in the
/// position the field was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    pub(crate) name: &'static str,
    pub(crate) type_name: &'static str,
    pub(crate) type_id: TypeId,
}

impl FieldSchema {
    pub fn of<T: Any>(name: &'static str) -> Self {
        Self {
            name,
            type_name: std::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// A record type buildable from its fields in declaration order.
pub trait Record: Sized {
    /// The record's field types, in declaration order.
    type Fields: HList;

    /// Assembles the record from its ordered field values.
    fn from_fields(fields: Self::Fields) -> Self;

    /// Decomposes the record into its ordered field values.
    fn into_fields(self) -> Self::Fields;

    /// Runtime mirror of the field list, one entry per field in declaration
    /// order.
    fn schema() -> Vec<FieldSchema>;

    /// Assembles the record from erased values in declaration order.
    ///
    /// Callers must have verified `values` against [`schema`](Record::schema)
    /// (arity and per-position type); the registry does this once at
    /// construction and the draft re-checks every `set`.
    fn from_erased(values: &[ErasedValue]) -> Self;
}

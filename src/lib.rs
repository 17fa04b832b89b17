//! Compile-time checked builders for immutable record types.
//!
//! A record's fields become *slots*: named, typed, settable at most once,
//! each either required or carrying a default. The [`slots!`] macro binds a
//! slot list to a record in field order; [`Buildable::builder`] then starts
//! a chain whose state lives in the type, so setting the same slot twice or
//! building with a required slot unset fails to compile.
//!
//! ```
//! use fx_slot_builder::{slots, Buildable};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Pour {
//!     volume: u32,
//!     label: String,
//! }
//!
//! slots! {
//!     impl Pour {
//!         Volume(volume: u32),
//!         Label(label: String = String::from("house")),
//!     }
//! }
//!
//! let pour = Pour::builder().set(Volume, 250).build();
//!
//! assert_eq!(pour.volume, 250);
//! assert_eq!(pour.label, "house");
//! ```
//!
//! When the slot list is only known at runtime, the dynamic layer offers the
//! same contract with reported errors instead of compile errors: declare
//! [`SlotDef`]s, verify them against the record with [`Registry::new`], then
//! accumulate values in a [`Draft`]. Both layers resolve slots in field
//! order, substitute defaults for unset optional slots, and keep branched
//! chains fully independent.

pub mod hlist;

mod macros;

pub mod builder;
pub mod draft;
pub mod record;
pub mod registry;
pub mod slot;

pub use builder::{Buildable, Builder, Resolve, Set, Unset};
pub use draft::{AssignError, BuildError, Draft};
pub use record::{ErasedValue, FieldSchema, Record};
pub use registry::{Registry, SchemaError, SlotDef};
pub use slot::{OptionalSlot, Slot, SlotId, SlotKind};

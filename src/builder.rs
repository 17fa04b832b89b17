//! Builder pattern utilities
//!
//! This module provides the compile-time checked builder: a chain of `set`
//! calls over a state that tracks, per slot, whether a value has been set.
//! The state is an HList with one cell per slot, so setting a slot changes
//! the builder's *type*: re-setting the same slot, or building while a
//! required slot is unset, simply does not typecheck.

use crate::hlist::{HCons, HNil, Replacer, Selector};
use crate::record::Record;
use crate::slot::{OptionalSlot, Slot};
use std::marker::PhantomData;
use tracing::instrument;

/// Represents an unset slot in a builder chain.
///
/// This is used to track at compile time that the slot `S` has not yet been
/// set.
pub struct Unset<S>(PhantomData<S>);

impl<S> Unset<S> {
    /// Creates a new unset cell.
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<S> Default for Unset<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for Unset<S> {
    fn clone(&self) -> Self {
        Self(PhantomData)
    }
}

impl<S> Copy for Unset<S> {}

/// Represents a set slot in a builder chain.
///
/// This is used to track at compile time that the slot `S` has been set, and
/// to carry its value through to `build`.
pub struct Set<S: Slot>(S::Value);

impl<S: Slot> Set<S> {
    /// Creates a new set cell with the given value.
    pub fn new(value: S::Value) -> Self {
        Self(value)
    }

    /// Consumes the cell and returns the inner value.
    pub fn into_inner(self) -> S::Value {
        self.0
    }

    /// Returns a reference to the inner value.
    pub fn as_ref_inner(&self) -> &S::Value {
        &self.0
    }
}

impl<S: Slot> Clone for Set<S>
where
    S::Value: Clone,
{
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

// ============================================================
// Builder
// ============================================================

/// An in-progress build of record `R`.
///
/// `State` is an HList of [`Unset`] / [`Set`] cells, one per slot in field
/// order. Obtained from [`Buildable::builder`], advanced with [`set`], and
/// finished with [`build`].
///
/// Chains may branch: cloning a partially-set builder yields an independent
/// chain, so one prefix can seed many records.
///
/// [`set`]: Builder::set
/// [`build`]: Builder::build
pub struct Builder<R, State> {
    state: State,
    _record: PhantomData<fn() -> R>,
}

impl<R, State: Clone> Clone for Builder<R, State> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            _record: PhantomData,
        }
    }
}

impl<R, State> Builder<R, State> {
    #[doc(hidden)]
    pub fn from_state(state: State) -> Self {
        Self {
            state,
            _record: PhantomData,
        }
    }

    /// Sets the value of an unset slot, returning the advanced builder.
    ///
    /// Only applicable while the slot's cell is [`Unset`]; setting the same
    /// slot twice is rejected at compile time:
    ///
    /// ```compile_fail
    /// use fx_slot_builder::{slots, Buildable};
    ///
    /// #[derive(Debug, Clone, PartialEq)]
    /// struct Pour {
    ///     volume: u32,
    ///     label: String,
    /// }
    ///
    /// slots! {
    ///     impl Pour {
    ///         Volume(volume: u32),
    ///         Label(label: String = String::from("house")),
    ///     }
    /// }
    ///
    /// // Volume is already set; the second `set` has no applicable impl.
    /// let pour = Pour::builder().set(Volume, 250).set(Volume, 300).build();
    /// ```
    #[instrument(level = "trace", skip_all, fields(slot = S::NAME))]
    pub fn set<S, I>(
        self,
        _slot: S,
        value: S::Value,
    ) -> Builder<R, <State as Replacer<Unset<S>, Set<S>, I>>::Output>
    where
        S: Slot,
        State: Replacer<Unset<S>, Set<S>, I>,
    {
        let (_, state) = self.state.replace(Set::new(value));

        Builder {
            state,
            _record: PhantomData,
        }
    }

    /// Borrows the value of an already-set slot.
    pub fn peek<'a, S, I>(&'a self, _slot: S) -> &'a S::Value
    where
        S: Slot + 'a,
        State: Selector<Set<S>, I>,
    {
        self.state.get().as_ref_inner()
    }

    /// Finishes the chain, resolving every slot in field order: set cells
    /// yield their value, unset optional cells yield their default.
    ///
    /// An unset *required* slot leaves the state unresolvable, so the call
    /// is rejected at compile time:
    ///
    /// ```compile_fail
    /// use fx_slot_builder::{slots, Buildable};
    ///
    /// #[derive(Debug, Clone, PartialEq)]
    /// struct Pour {
    ///     volume: u32,
    ///     label: String,
    /// }
    ///
    /// slots! {
    ///     impl Pour {
    ///         Volume(volume: u32),
    ///         Label(label: String = String::from("house")),
    ///     }
    /// }
    ///
    /// // Volume is required and never set; the state does not resolve.
    /// let pour = Pour::builder().set(Label, String::from("flat")).build();
    /// ```
    #[instrument(level = "trace", skip_all, fields(record = std::any::type_name::<R>()))]
    pub fn build(self) -> R
    where
        R: Record,
        State: Resolve<Output = R::Fields>,
    {
        R::from_fields(self.state.resolve())
    }
}

// ============================================================
// Resolve
// ============================================================

/// Per-cell resolution of a finished builder state.
///
/// `Set` cells resolve to their value; `Unset` cells resolve to the slot's
/// default and therefore require [`OptionalSlot`]. There is no impl for an
/// unset required slot: that absence is the missing-required-field check.
pub trait Resolve {
    type Output;

    fn resolve(self) -> Self::Output;
}

impl Resolve for HNil {
    type Output = HNil;

    fn resolve(self) -> Self::Output {
        HNil
    }
}

impl<S, Tail> Resolve for HCons<Set<S>, Tail>
where
    S: Slot,
    Tail: Resolve,
{
    type Output = HCons<S::Value, Tail::Output>;

    fn resolve(self) -> Self::Output {
        HCons {
            head: self.head.into_inner(),
            tail: self.tail.resolve(),
        }
    }
}

impl<S, Tail> Resolve for HCons<Unset<S>, Tail>
where
    S: OptionalSlot,
    Tail: Resolve,
{
    type Output = HCons<S::Value, Tail::Output>;

    fn resolve(self) -> Self::Output {
        HCons {
            head: S::default_value(),
            tail: self.tail.resolve(),
        }
    }
}

// ============================================================
// Buildable
// ============================================================

/// Builder factory for a record: the typed slot registry.
///
/// Implemented by the [`slots!`](crate::slots) macro, which fixes `Empty` to
/// one [`Unset`] cell per slot in field order.
pub trait Buildable: Record {
    /// The all-unset builder state.
    type Empty;

    /// Starts a chain with every slot unset.
    fn builder() -> Builder<Self, Self::Empty>;
}

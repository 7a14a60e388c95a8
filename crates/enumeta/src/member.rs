//! Realized enumerants
//!
//! A [`Member`] is one declared constant of an enum type, exposing its three
//! facets. Members are cheap `Copy` handles over the type's cached table
//! entry; two members compare equal iff they have the same enum type, key,
//! value and label. Reference identity is an implementation detail — value
//! equality is the contract.

use std::fmt;
use std::marker::PhantomData;

use serde::ser::{Serialize, Serializer};

use crate::entry::{EnumEntry, Record};
use crate::error::EnumError;
use crate::registry::Enum;
use crate::value::EnumValue;

/// One declared constant of the enum type `E`.
///
/// Constructed only through the factory methods on [`Enum`]; there is no
/// public constructor.
pub struct Member<E: Enum> {
    entry: &'static EnumEntry,
    _ty: PhantomData<fn() -> E>,
}

impl<E: Enum> Member<E> {
    pub(crate) fn new(entry: &'static EnumEntry) -> Self {
        Self {
            entry,
            _ty: PhantomData,
        }
    }

    /// The constant's symbolic name.
    #[inline]
    pub fn key(&self) -> &'static str {
        self.entry.key()
    }

    /// The constant's semantic payload.
    #[inline]
    pub fn value(&self) -> EnumValue {
        self.entry.value()
    }

    /// The constant's human-readable label.
    #[inline]
    pub fn label(&self) -> &'static str {
        self.entry.label()
    }

    /// Whether this member is the constant named `key`, by value comparison.
    ///
    /// Fails with [`EnumError::UnknownConstant`] when `key` does not name a
    /// declared constant of `E`.
    pub fn is(&self, key: &str) -> Result<bool, EnumError> {
        Ok(E::get(key)?.value() == self.value())
    }

    /// Project this member into a serialization-friendly record.
    pub fn record(&self) -> Record<'static> {
        self.entry.record()
    }
}

impl<E: Enum> Clone for Member<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Enum> Copy for Member<E> {}

impl<E: Enum> PartialEq for Member<E> {
    fn eq(&self, other: &Self) -> bool {
        self.entry == other.entry
    }
}

impl<E: Enum> fmt::Debug for Member<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", E::NAME, self.key())
    }
}

/// Displays the label.
impl<E: Enum> fmt::Display for Member<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Serializes as the member's [`Record`]:
/// `{"key": .., "value": .., "label": ..}`.
impl<E: Enum> Serialize for Member<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.record().serialize(serializer)
    }
}

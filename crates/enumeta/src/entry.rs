//! Declared constants and their normalized form
//!
//! A constant is declared either as a bare scalar or as a `[value, label]`
//! pair ([`ConstInit`]). Normalization turns each declaration into an
//! [`EnumEntry`]: the pair form keeps its explicit label, the scalar form
//! reuses the value's string form as the label.

use serde::Serialize;

use crate::value::EnumValue;

/// Raw shape of a declared constant, before normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstInit {
    /// Bare scalar: the value doubles as the label
    Scalar(EnumValue),
    /// `[value, label]` pair with an explicit label
    Labeled(EnumValue, &'static str),
}

impl ConstInit {
    /// Declare a scalar constant.
    pub fn scalar(value: impl Into<EnumValue>) -> Self {
        ConstInit::Scalar(value.into())
    }

    /// Declare a constant with an explicit label.
    pub fn labeled(value: impl Into<EnumValue>, label: &'static str) -> Self {
        ConstInit::Labeled(value.into(), label)
    }
}

/// A normalized constant: key, value and display label.
///
/// Entries are immutable after construction and owned by the per-type
/// metadata table.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumEntry {
    key: &'static str,
    value: EnumValue,
    label: String,
}

impl EnumEntry {
    pub(crate) fn new(key: &'static str, init: ConstInit) -> Self {
        match init {
            ConstInit::Labeled(value, label) => Self {
                key,
                value,
                label: label.to_string(),
            },
            ConstInit::Scalar(value) => Self {
                key,
                value,
                label: value.to_string(),
            },
        }
    }

    /// The constant's symbolic name.
    #[inline]
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// The constant's semantic payload.
    #[inline]
    pub fn value(&self) -> EnumValue {
        self.value
    }

    /// The constant's human-readable label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Project this entry into a serialization-friendly record.
    pub fn record(&self) -> Record<'_> {
        Record {
            key: self.key,
            value: self.value,
            label: &self.label,
        }
    }
}

/// Serialization projection of a constant.
///
/// Serializes to `{"key": .., "value": .., "label": ..}` in that field order,
/// with the value's scalar type preserved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Record<'a> {
    /// The constant's symbolic name
    pub key: &'a str,
    /// The constant's semantic payload
    pub value: EnumValue,
    /// The constant's human-readable label
    pub label: &'a str,
}

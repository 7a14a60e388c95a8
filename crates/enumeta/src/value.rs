//! Constant payload representation
//!
//! Enum constants carry a polymorphic scalar payload: an integer, a float, a
//! string, or a bool. Payloads are declared at compile time, so string
//! payloads are `&'static str` and the whole value is `Copy`.
//!
//! Value comparisons use `PartialEq` (floats are permitted, so there is no
//! `Eq`/`Hash`); all value-keyed lookups in this crate are linear scans over
//! small fixed tables.

use std::fmt;

use serde::ser::{Serialize, Serializer};

/// The scalar payload of a declared constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnumValue {
    /// Integer payload
    Int(i64),
    /// Floating-point payload
    Float(f64),
    /// String payload
    Str(&'static str),
    /// Boolean payload
    Bool(bool),
}

impl EnumValue {
    /// Extract the integer payload.
    #[inline]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            EnumValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Extract the float payload.
    #[inline]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            EnumValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Extract the string payload.
    #[inline]
    pub const fn as_str(&self) -> Option<&'static str> {
        match self {
            EnumValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Extract the boolean payload.
    #[inline]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            EnumValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the payload's type name for diagnostics.
    pub const fn type_name(&self) -> &'static str {
        match self {
            EnumValue::Int(_) => "int",
            EnumValue::Float(_) => "float",
            EnumValue::Str(_) => "string",
            EnumValue::Bool(_) => "bool",
        }
    }
}

/// The string form of a value doubles as the default label for constants
/// declared without one.
impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumValue::Int(i) => write!(f, "{}", i),
            EnumValue::Float(x) => write!(f, "{}", x),
            EnumValue::Str(s) => f.write_str(s),
            EnumValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<i64> for EnumValue {
    fn from(i: i64) -> Self {
        EnumValue::Int(i)
    }
}

impl From<f64> for EnumValue {
    fn from(f: f64) -> Self {
        EnumValue::Float(f)
    }
}

impl From<&'static str> for EnumValue {
    fn from(s: &'static str) -> Self {
        EnumValue::Str(s)
    }
}

impl From<bool> for EnumValue {
    fn from(b: bool) -> Self {
        EnumValue::Bool(b)
    }
}

/// Serializes as the bare scalar, preserving the declared payload type:
/// integers stay numbers, strings stay strings.
impl Serialize for EnumValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            EnumValue::Int(i) => serializer.serialize_i64(*i),
            EnumValue::Float(x) => serializer.serialize_f64(*x),
            EnumValue::Str(s) => serializer.serialize_str(s),
            EnumValue::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

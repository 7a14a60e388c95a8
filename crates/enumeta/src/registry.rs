//! Process-wide table cache and the `Enum` trait
//!
//! [`Enum`] is the registration point for an enum type: an implementor
//! supplies its name and ordered constant declarations, and the trait's
//! provided methods expose the whole lookup surface. The normalized
//! [`EnumTable`] for each type is built on first access, cached under the
//! type's `TypeId`, and lives for the rest of the process.

use std::any::TypeId;
use std::sync::LazyLock;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::entry::{ConstInit, Record};
use crate::error::EnumError;
use crate::member::Member;
use crate::table::EnumTable;
use crate::value::EnumValue;

static TABLES: LazyLock<RwLock<FxHashMap<TypeId, &'static EnumTable>>> =
    LazyLock::new(|| RwLock::new(FxHashMap::default()));

/// Get the cached metadata table for `E`, building it on first access.
///
/// Tables are leaked into `'static`: they are computed once per type and
/// never invalidated, so they share the process's lifetime.
pub fn table_of<E: Enum>() -> &'static EnumTable {
    let id = TypeId::of::<E>();
    if let Some(table) = TABLES.read().get(&id) {
        return table;
    }
    let mut tables = TABLES.write();
    // Another thread may have built the table between the read and the write;
    // the entry check makes the losing racer reuse the winner's table.
    *tables
        .entry(id)
        .or_insert_with(|| Box::leak(Box::new(EnumTable::build(E::NAME, &E::constants()))))
}

/// An enumeration type: a closed set of named constants, each carrying a
/// key, a value and a label.
///
/// Implementors only supply [`NAME`](Enum::NAME) and
/// [`constants`](Enum::constants) — usually via [`declare_enum!`](crate::declare_enum) —
/// and inherit the whole lookup surface. All [`Member`] construction funnels
/// through the factory methods here; there is no other way to mint one.
pub trait Enum: Sized + 'static {
    /// The type's name, used in diagnostics and `Debug` output.
    const NAME: &'static str;

    /// The ordered constant declarations for this type.
    ///
    /// Called once per process; the normalized table is cached thereafter,
    /// so the declaration set must be fixed for the process's lifetime.
    fn constants() -> Vec<(&'static str, ConstInit)>;

    /// The cached metadata table for this type.
    fn table() -> &'static EnumTable {
        table_of::<Self>()
    }

    /// Get the member named `key`.
    ///
    /// Requesting an undeclared name is a programming error and fails with
    /// [`EnumError::UnknownConstant`]; use [`from_key`](Enum::from_key) when
    /// absence is an expected outcome.
    fn get(key: &str) -> Result<Member<Self>, EnumError> {
        Self::from_key(key).ok_or_else(|| EnumError::UnknownConstant {
            constant: key.to_string(),
            enum_name: Self::NAME,
        })
    }

    /// Search for a member by constant name.
    fn from_key(key: &str) -> Option<Member<Self>> {
        Self::table().entry(key).map(Member::new)
    }

    /// Search for a member by payload value.
    fn from_value(value: &EnumValue) -> Option<Member<Self>> {
        Self::table().entry_by_value(value).map(Member::new)
    }

    /// Search for a member by label (last-declared wins on duplicates).
    fn from_label(label: &str) -> Option<Member<Self>> {
        Self::table().entry_by_label(label).map(Member::new)
    }

    /// All constant names, in declaration order.
    fn keys() -> Vec<&'static str> {
        Self::table().keys()
    }

    /// All payload values, in declaration order.
    fn values() -> Vec<EnumValue> {
        Self::table().values()
    }

    /// All labels, in declaration order.
    fn labels() -> Vec<&'static str> {
        Self::table().labels()
    }

    /// The label of the constant with the given value, if any.
    fn value_to_label(value: &EnumValue) -> Option<&'static str> {
        Self::table().value_to_label(value)
    }

    /// The value of the constant with the given label, if any.
    fn label_to_value(label: &str) -> Option<EnumValue> {
        Self::table().label_to_value(label)
    }

    /// The full value-to-label mapping, in declaration order.
    fn value_label_pairs() -> Vec<(EnumValue, &'static str)> {
        Self::table().value_label_pairs()
    }

    /// The full label-to-value mapping (duplicate labels: last-write-wins).
    fn label_value_pairs() -> Vec<(&'static str, EnumValue)> {
        Self::table().label_value_pairs()
    }

    /// Whether `key` names a declared constant.
    fn is_valid_key(key: &str) -> bool {
        Self::table().is_valid_key(key)
    }

    /// Whether some declared constant has this payload value.
    fn is_valid_value(value: &EnumValue) -> bool {
        Self::table().is_valid_value(value)
    }

    /// Whether some declared constant has this label.
    fn is_valid_label(label: &str) -> bool {
        Self::table().is_valid_label(label)
    }

    /// Serialization-friendly projection of the whole type, in declaration
    /// order.
    fn records() -> Vec<Record<'static>> {
        Self::table().records()
    }

    /// Whether the constant named `key` has the given payload value.
    ///
    /// Fails with [`EnumError::UnknownConstant`] when `key` is not declared.
    fn key_equals(key: &str, value: &EnumValue) -> Result<bool, EnumError> {
        Ok(Self::get(key)?.value() == *value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Color;

    impl Enum for Color {
        const NAME: &'static str = "Color";

        fn constants() -> Vec<(&'static str, ConstInit)> {
            vec![
                ("Red", ConstInit::labeled("red", "Red color")),
                ("Blue", ConstInit::scalar("blue")),
            ]
        }
    }

    #[test]
    fn test_table_is_cached() {
        let first = Color::table();
        let second = table_of::<Color>();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.name(), "Color");
    }

    #[test]
    fn test_manual_impl_lookup_surface() {
        assert_eq!(Color::keys(), vec!["Red", "Blue"]);
        assert_eq!(Color::labels(), vec!["Red color", "blue"]);

        let red = Color::get("Red").unwrap();
        assert_eq!(red.value(), EnumValue::Str("red"));

        let err = Color::get("Green").unwrap_err();
        assert_eq!(
            err,
            EnumError::UnknownConstant {
                constant: "Green".to_string(),
                enum_name: "Color",
            }
        );
    }

    #[test]
    fn test_key_equals() {
        assert!(Color::key_equals("Red", &EnumValue::Str("red")).unwrap());
        assert!(!Color::key_equals("Red", &EnumValue::Str("blue")).unwrap());
        assert!(Color::key_equals("Green", &EnumValue::Str("red")).is_err());
    }
}

//! Per-type metadata tables
//!
//! An [`EnumTable`] holds one enum type's normalized constants in declaration
//! order, plus a key index for O(1) name lookup. Value- and label-keyed
//! lookups are linear scans: tables are small, and float payloads rule out
//! hashing values.

use rustc_hash::FxHashMap;

use crate::entry::{ConstInit, EnumEntry, Record};
use crate::value::EnumValue;

/// Metadata table for one enum type.
///
/// Built once per type on first access and cached for the process lifetime
/// (see [`crate::registry`]). Read-only after construction.
#[derive(Debug)]
pub struct EnumTable {
    name: &'static str,
    entries: Vec<EnumEntry>,
    index: FxHashMap<&'static str, usize>,
}

impl EnumTable {
    pub(crate) fn build(name: &'static str, constants: &[(&'static str, ConstInit)]) -> Self {
        let mut entries = Vec::with_capacity(constants.len());
        let mut index = FxHashMap::default();
        for &(key, init) in constants {
            // Duplicate key: the index points at the last declaration
            index.insert(key, entries.len());
            entries.push(EnumEntry::new(key, init));
        }
        Self {
            name,
            entries,
            index,
        }
    }

    /// Name of the enum type this table describes.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All entries, in declaration order.
    #[inline]
    pub fn entries(&self) -> &[EnumEntry] {
        &self.entries
    }

    /// Number of declared constants.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the type declares no constants.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by constant name.
    pub fn entry(&self, key: &str) -> Option<&EnumEntry> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    /// Look up an entry by payload value.
    pub fn entry_by_value(&self, value: &EnumValue) -> Option<&EnumEntry> {
        self.entries.iter().find(|e| e.value() == *value)
    }

    /// Look up an entry by label.
    ///
    /// When several constants share a label, the last-declared one wins.
    pub fn entry_by_label(&self, label: &str) -> Option<&EnumEntry> {
        self.entries.iter().rev().find(|e| e.label() == label)
    }

    /// All constant names, in declaration order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.key()).collect()
    }

    /// All payload values, in declaration order.
    pub fn values(&self) -> Vec<EnumValue> {
        self.entries.iter().map(|e| e.value()).collect()
    }

    /// All labels, in declaration order.
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label()).collect()
    }

    /// The label of the constant with the given value, if any.
    pub fn value_to_label(&self, value: &EnumValue) -> Option<&str> {
        self.entry_by_value(value).map(|e| e.label())
    }

    /// The value of the constant with the given label, if any.
    ///
    /// Duplicate labels resolve to the last-declared constant.
    pub fn label_to_value(&self, label: &str) -> Option<EnumValue> {
        self.entry_by_label(label).map(|e| e.value())
    }

    /// The full value-to-label mapping, in declaration order.
    pub fn value_label_pairs(&self) -> Vec<(EnumValue, &str)> {
        self.entries.iter().map(|e| (e.value(), e.label())).collect()
    }

    /// The full label-to-value mapping.
    ///
    /// Duplicate labels collapse last-write-wins under declaration order,
    /// with the pair keeping the first occurrence's position.
    pub fn label_value_pairs(&self) -> Vec<(&str, EnumValue)> {
        let mut pairs: Vec<(&str, EnumValue)> = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            match pairs.iter_mut().find(|(label, _)| *label == entry.label()) {
                Some(pair) => pair.1 = entry.value(),
                None => pairs.push((entry.label(), entry.value())),
            }
        }
        pairs
    }

    /// Whether `key` names a declared constant.
    pub fn is_valid_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Whether some declared constant has this payload value.
    pub fn is_valid_value(&self, value: &EnumValue) -> bool {
        self.entry_by_value(value).is_some()
    }

    /// Whether some declared constant has this label.
    pub fn is_valid_label(&self, label: &str) -> bool {
        self.entries.iter().any(|e| e.label() == label)
    }

    /// Serialization-friendly projection of the whole table, in declaration
    /// order.
    pub fn records(&self) -> Vec<Record<'_>> {
        self.entries.iter().map(|e| e.record()).collect()
    }
}

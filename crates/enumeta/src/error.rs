//! Enumeration errors

use thiserror::Error;

/// Errors raised by enumeration lookups.
///
/// Only lookups that name a specific constant can fail; search-style lookups
/// (`from_key`, `from_value`, `from_label`) report absence with `None`
/// instead, since "might not exist" is an expected outcome of a search.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnumError {
    /// A constant name that is not declared on the enum type
    #[error("unknown constant `{constant}` on enum {enum_name}")]
    UnknownConstant {
        /// The requested constant name
        constant: String,
        /// Name of the enum type the lookup ran against
        enum_name: &'static str,
    },
}

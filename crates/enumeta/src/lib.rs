//! Labeled-constant enumerations
//!
//! This crate models a closed, compile-time-declared set of named constants,
//! where each constant carries three facets:
//!
//! - a symbolic **key** — the constant's name (e.g. `"One"`),
//! - a **value** — its semantic payload, used for equality and interchange,
//! - a human-readable **label** — explicitly supplied, or defaulting to the
//!   value's string form.
//!
//! Enum types are declared with [`declare_enum!`] (or by implementing [`Enum`]
//! by hand), and all realized enumerants ([`Member`]) funnel through the
//! validated factory methods on [`Enum`]. The normalized metadata table for a
//! type is built once per process and cached for its lifetime.
//!
//! # Usage
//!
//! ```rust
//! use enumeta::{declare_enum, Enum, EnumValue};
//!
//! declare_enum! {
//!     /// Task priority levels.
//!     pub enum Priority {
//!         Low = [1, "Low priority"],
//!         High = [2, "High priority"],
//!     }
//! }
//!
//! let low = Priority::get("Low").unwrap();
//! assert_eq!(low.key(), "Low");
//! assert_eq!(low.value(), EnumValue::Int(1));
//! assert_eq!(low.label(), "Low priority");
//!
//! assert_eq!(Priority::keys(), vec!["Low", "High"]);
//! assert!(Priority::from_value(&EnumValue::Int(3)).is_none());
//! ```

#![warn(missing_docs)]

pub mod entry;
pub mod error;
pub mod member;
pub mod registry;
pub mod table;
pub mod value;

mod macros;

pub use entry::{ConstInit, EnumEntry, Record};
pub use error::EnumError;
pub use member::Member;
pub use registry::{table_of, Enum};
pub use table::EnumTable;
pub use value::EnumValue;

//! json-ast — an immutable JSON value algebra.
//!
//! The crate models a JSON document as a closed enum, [`JsonValue`], and
//! builds the operations a JSON library stands on: unboxing to native
//! values, child enumeration, indexed access, monoidal concatenation,
//! structural equality with set-semantics for object fields, and JSON
//! string escaping over a pluggable sink. Deep merge and structural diff
//! are collaborators in their own modules, surfaced through the
//! [`Mergeable`] and [`Diffable`] capability traits.
//!
//! Parsing and printing live downstream: producers construct values (for
//! example through the `serde_json` bridge in [`convert`]), consumers
//! traverse them.
//!
//! ## Quick start
//!
//! ```rust
//! use json_ast::{Diffable, JsonValue, Mergeable};
//!
//! let base = JsonValue::Object(vec![
//!     ("name".to_string(), JsonValue::from("Alice")),
//!     ("age".to_string(), JsonValue::from(30)),
//! ]);
//! let update = JsonValue::Object(vec![
//!     ("age".to_string(), JsonValue::from(31)),
//! ]);
//!
//! let merged = base.clone().merge(update);
//! let diff = base.diff(&merged);
//! assert_eq!(
//!     diff.changed,
//!     JsonValue::Object(vec![("age".to_string(), JsonValue::from(31))]),
//! );
//! ```

pub mod convert;
pub mod diff;
pub mod escape;
pub mod merge;
pub mod value;

// Re-exports for convenience
pub use convert::ConvertError;
pub use diff::{Diff, Diffable};
pub use escape::{escape, escape_to, Sink, StreamSink};
pub use merge::Mergeable;
pub use value::{concat, Field, JsonValue, Native};

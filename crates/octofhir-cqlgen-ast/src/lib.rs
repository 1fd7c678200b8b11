//! CQL node types emitted during clinical-rules traversal
//!
//! Each node is a small mutable builder that renders itself to a fragment of
//! CQL source text via [`std::fmt::Display`]. Rendering is total and
//! idempotent: it never fails, and unset fields render as the literal text
//! `null` so partially built nodes stay printable while a traversal is still
//! filling them in. No validation happens at construction.

mod expression;
mod statement;
mod terminology;

pub use expression::*;
pub use statement::*;
pub use terminology::*;

pub use octofhir_cqlgen_model::Conjunction;

/// Indentation used for clause lines inside a `define` block
pub(crate) const INDENT: &str = "     ";

/// Render an optional field, falling back to the literal `null`
pub(crate) fn or_null(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("null")
}

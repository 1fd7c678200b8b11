//! Clinical-rules object graph definitions
//!
//! This crate defines the node kinds of the authored clinical-criteria graph
//! ("drool" conditions) that the CQL generator traverses. The graph is
//! produced by an external authoring system and consumed read-only; nothing
//! in this workspace constructs it outside tests.

mod condition;
mod part;
mod terminology;

pub use condition::*;
pub use part::*;
pub use terminology::*;

use std::fmt;

/// Boolean connective between sibling clauses ("and" / "or")
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conjunction {
    And,
    Or,
}

impl fmt::Display for Conjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conjunction::And => write!(f, "and"),
            Conjunction::Or => write!(f, "or"),
        }
    }
}

//! Depth-first traversal over the clinical-rules graph
//!
//! The engine walks authored conditions post-order (children before the node
//! containing them) and forwards every surviving node to a pluggable
//! [`DroolVisitor`], which turns visited nodes into CQL artifacts. Subtrees
//! that match a deny rule or carry unknown operator metadata are dropped
//! without disturbing their siblings; the drop is scoped to the smallest
//! enclosing predicate.

pub mod deny;
mod traverser;
mod visitor;

pub use traverser::*;
pub use visitor::*;

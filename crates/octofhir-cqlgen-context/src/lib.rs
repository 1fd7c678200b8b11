//! Accumulating context for CQL generation
//!
//! One [`CqlContext`] is created per generation run. The traversal's visitor
//! registers renderable nodes into it under caller-chosen aliases, records
//! cross-model element mappings and value-set provenance discovered along
//! the way, and finally asks the context to assemble the complete library
//! text with [`CqlContext::build_cql`] or [`CqlContext::build_cql_library`].

mod export;
mod mapping;
mod registry;

pub use export::*;
pub use mapping::*;
pub use registry::*;

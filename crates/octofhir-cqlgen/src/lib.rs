//! Clinical-rules-to-CQL generation engine
//!
//! This crate turns authored clinical decision criteria ("drool" conditions)
//! into CQL library text. A depth-first traversal walks the externally
//! produced criteria graph post-order and forwards each surviving node to a
//! pluggable visitor; the visitor assembles small CQL AST fragments and
//! registers them in an accumulating context, which renders the final
//! library. Subtrees with no faithful CQL translation are logged and
//! dropped without disturbing their siblings.
//!
//! # Example
//!
//! ```ignore
//! use octofhir_cqlgen::{CqlContext, DepthFirstDroolTraverser, DroolTraverser, LibraryHeader};
//!
//! let mut traverser = DepthFirstDroolTraverser::new(visitor);
//! let context: CqlContext = traverser.traverse(&conditions)?;
//!
//! let header = LibraryHeader::new("ChlamydiaDetection", "1.0.0", "FHIR", "4.0.1");
//! let cql = context.build_cql_library(&header, "Patient");
//! ```

// Re-export all public APIs from internal crates
pub use octofhir_cqlgen_ast as ast;
pub use octofhir_cqlgen_context as context;
pub use octofhir_cqlgen_model as model;
pub use octofhir_cqlgen_traversal as traversal;

// Convenience re-exports
pub use octofhir_cqlgen_ast::{
    DefineStatement, DefineStatementBody, DefinitionBlock, DirectReferenceCode, Expression,
    Retrieve, ValueSet, WhereClause,
};
pub use octofhir_cqlgen_context::{
    ContextError, CqlContext, ElementMapping, LibraryHeader, ModelMapping, PrintableNode,
    ValueSetOrigin, read_value_set_mapping,
};
pub use octofhir_cqlgen_model::{Condition, Conjunction, CriteriaPredicateType};
pub use octofhir_cqlgen_traversal::{
    DepthFirstDroolTraverser, DroolTraverser, DroolVisitor, TraversalError,
};

//! Visitor contract for traversal clients

use octofhir_cqlgen_model::{
    CdsCode, Condition, CriteriaPredicate, CriteriaRel, CriteriaResource, CriteriaResourceParam,
    DataInputNode, OpenCdsConcept, PredicatePart, PredicatePartConcept, SourcePredicatePart,
};

/// Receiver of traversal events, responsible for CQL emission
///
/// `visit_*` methods fire post-order, after a node's children were traversed;
/// `peek_*` methods fire pre-order for condition and relationship nodes only
/// and exist for lookahead and logging — they must not mutate traversal
/// state. [`DroolVisitor::visit_conditions`] fires last and produces the
/// aggregate artifact returned to the caller of the traversal, typically a
/// populated generation context or rendered text.
///
/// All per-node methods default to no-ops so an implementation only handles
/// the kinds it emits for.
pub trait DroolVisitor {
    /// Aggregate artifact produced by a full traversal
    type Output;

    /// Final call, after every condition was traversed
    fn visit_conditions(&mut self, conditions: &[Condition]) -> Self::Output;

    /// Pre-order lookahead on a condition
    fn peek_condition(&mut self, _condition: &Condition) {}

    /// Pre-order lookahead on a relationship
    fn peek_criteria_rel(&mut self, _rel: &CriteriaRel) {}

    /// A condition, after all its relationships
    fn visit_condition(&mut self, _condition: &Condition) {}

    /// A relationship, after all its predicates
    fn visit_criteria_rel(&mut self, _rel: &CriteriaRel) {}

    /// A modeled predicate, after its children, parts and operators
    fn visit_predicate(&mut self, _predicate: &CriteriaPredicate) {}

    /// A modeled predicate part, after its operands
    fn visit_predicate_part(&mut self, _part: &PredicatePart) {}

    /// A modeled source part, after its operands
    fn visit_source_part(&mut self, _part: &SourcePredicatePart) {}

    /// A data-input left operand
    fn visit_data_input(&mut self, _node: &DataInputNode) {}

    /// A concept wrapper, after its nested concept or code
    fn visit_part_concept(&mut self, _concept: &PredicatePartConcept) {}

    /// An OpenCDS concept reference
    fn visit_concept(&mut self, _concept: &OpenCdsConcept) {}

    /// A coded value
    fn visit_code(&mut self, _code: &CdsCode) {}

    /// An operator, after the right operand it governs resolved
    fn visit_resource_param(&mut self, _param: &CriteriaResourceParam) {}

    /// Resource metadata attached to a predicate part
    fn visit_resource(&mut self, _resource: &CriteriaResource) {}
}

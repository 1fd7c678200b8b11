//! Depth-first traversal strategy

use log::{debug, warn};
use octofhir_cqlgen_model::{
    Condition, CriteriaPredicate, CriteriaRel, CriteriaResourceParam, PartType, PredicatePart,
    PredicatePartConcept, SourcePredicatePart,
};
use thiserror::Error;

use crate::{DroolVisitor, deny};

/// Errors raised for producer-contract violations in the input graph
///
/// Domain-data problems (unmodelable subtrees, skipped relationships) are
/// never errors; they are logged and dropped.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TraversalError {
    /// A predicate carried neither child predicates nor parts
    #[error("predicate {id} has neither child predicates nor parts")]
    EmptyPredicate {
        /// External identifier of the offending predicate
        id: String,
    },
}

/// A traversal strategy over authored conditions
pub trait DroolTraverser<V: DroolVisitor> {
    /// Walk every condition and return the visitor's aggregate artifact
    fn traverse(&mut self, conditions: &[Condition]) -> Result<V::Output, TraversalError>;
}

/// Whether a predicate subtree contributed output or was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Subtree {
    Modeled,
    Dropped,
}

/// Outcome of one predicate part, folded by the enclosing predicate
enum PartOutcome<'a> {
    /// Part was visited; the operator, if any, is deferred to the predicate
    Visited(Option<&'a CriteriaResourceParam>),
    /// Part matched a deny rule; the enclosing predicate is dropped
    Dropped,
}

/// Depth-first, post-order traversal of the clinical-rules graph
///
/// Children are visited before the node containing them, so by the time a
/// predicate reaches the visitor all of its operands have resolved. Operator
/// parameters encountered on parts are deferred and visited only after the
/// last part of the enclosing predicate, keeping emission order at
/// left operand, operator, right operand regardless of authoring order.
#[derive(Debug)]
pub struct DepthFirstDroolTraverser<V> {
    visitor: V,
}

impl<V: DroolVisitor> DepthFirstDroolTraverser<V> {
    /// Create a traverser around the given visitor
    pub fn new(visitor: V) -> Self {
        Self { visitor }
    }

    /// Borrow the visitor
    pub fn visitor(&self) -> &V {
        &self.visitor
    }

    /// Consume the traverser, returning the visitor
    pub fn into_visitor(self) -> V {
        self.visitor
    }

    fn traverse_condition(&mut self, condition: &Condition) -> Result<(), TraversalError> {
        self.visitor.peek_condition(condition);
        for rel in &condition.criteria_rels {
            if !Self::is_traversable(rel) {
                continue;
            }
            self.visitor.peek_criteria_rel(rel);
            self.traverse_criteria_rel(rel)?;
        }
        self.visitor.visit_condition(condition);
        Ok(())
    }

    fn is_traversable(rel: &CriteriaRel) -> bool {
        if rel.predicates.is_empty() {
            debug!("skipping relationship {}: no predicates", rel.id);
            return false;
        }
        if let Some(label) = &rel.label
            && deny::is_not_yet_implemented(label)
        {
            warn!("skipping relationship {}: {label:?}", rel.id);
            return false;
        }
        true
    }

    fn traverse_criteria_rel(&mut self, rel: &CriteriaRel) -> Result<(), TraversalError> {
        for predicate in &rel.predicates {
            // a dropped predicate never aborts its siblings
            if self.traverse_predicate(predicate)? == Subtree::Dropped {
                warn!(
                    "dropping unmodelable predicate {} in relationship {}",
                    predicate.id, rel.id
                );
            }
        }
        self.visitor.visit_criteria_rel(rel);
        Ok(())
    }

    fn traverse_predicate(&mut self, predicate: &CriteriaPredicate) -> Result<Subtree, TraversalError> {
        if predicate.predicates.is_empty() && predicate.parts.is_empty() {
            return Err(TraversalError::EmptyPredicate {
                id: predicate.id.clone(),
            });
        }
        for child in &predicate.predicates {
            // each nested child starts clean; its drop stays its own
            if self.traverse_predicate(child)? == Subtree::Dropped {
                warn!("dropping unmodelable nested predicate {}", child.id);
            }
        }
        let mut deferred = Vec::new();
        for part in &predicate.parts {
            match self.traverse_part(part) {
                PartOutcome::Visited(Some(operator)) => deferred.push(operator),
                PartOutcome::Visited(None) => {}
                PartOutcome::Dropped => return Ok(Subtree::Dropped),
            }
        }
        // operators fire only after every right operand has resolved
        while let Some(operator) = deferred.pop() {
            self.visitor.visit_resource_param(operator);
        }
        self.visitor.visit_predicate(predicate);
        Ok(Subtree::Modeled)
    }

    fn traverse_part<'a>(&mut self, part: &'a PredicatePart) -> PartOutcome<'a> {
        if part.concepts.is_empty()
            && let Some(source_part) = &part.source_part
        {
            if self.traverse_source_part(source_part) == Subtree::Dropped {
                return PartOutcome::Dropped;
            }
        } else {
            if let Some(data_input) = &part.data_input {
                self.visitor.visit_data_input(data_input);
            }
            for concept in &part.concepts {
                self.traverse_part_concept(concept);
            }
        }
        let deferred = part.resource_param.as_ref();
        if deferred.is_none() && !Self::has_known_operator(part) {
            warn!("dropping predicate part {}: unknown operator modeling", part.id);
            return PartOutcome::Dropped;
        }
        if let Some(resource) = &part.resource {
            self.visitor.visit_resource(resource);
        }
        self.visitor.visit_predicate_part(part);
        PartOutcome::Visited(deferred)
    }

    /// A part without an operator parameter is still modelable when its
    /// resource metadata marks the operator as function-supplied
    fn has_known_operator(part: &PredicatePart) -> bool {
        match &part.resource {
            None => true,
            Some(resource) => resource.resource_type.as_deref() == Some("Function"),
        }
    }

    fn traverse_source_part(&mut self, part: &SourcePredicatePart) -> Subtree {
        match part.part_type {
            PartType::DataInput => {
                if part.concepts.is_empty() {
                    if part.text.is_some()
                        && part.part_alias.as_deref() == Some(deny::UNMODELABLE_PART_ALIAS)
                    {
                        warn!("dropping source part {}: literal alias is unmodelable", part.id);
                        return Subtree::Dropped;
                    }
                } else {
                    if part.concepts.len() == 1
                        && part.concepts[0]
                            .list_name
                            .as_deref()
                            .is_some_and(deny::is_unmodelable_concept_list)
                    {
                        warn!(
                            "dropping source part {}: concept list {:?} is unmodelable",
                            part.id, part.concepts[0].list_name
                        );
                        return Subtree::Dropped;
                    }
                    for concept in &part.concepts {
                        self.traverse_part_concept(concept);
                    }
                }
            }
            PartType::ModelElement => {
                if let Some(data_input) = &part.data_input {
                    self.visitor.visit_data_input(data_input);
                }
            }
            PartType::Resource | PartType::Text => {}
        }
        self.visitor.visit_source_part(part);
        Subtree::Modeled
    }

    fn traverse_part_concept(&mut self, concept: &PredicatePartConcept) {
        if let Some(open_cds) = &concept.concept {
            self.visitor.visit_concept(open_cds);
        }
        if let Some(code) = &concept.code {
            self.visitor.visit_code(code);
        }
        self.visitor.visit_part_concept(concept);
    }
}

impl<V: DroolVisitor> DroolTraverser<V> for DepthFirstDroolTraverser<V> {
    fn traverse(&mut self, conditions: &[Condition]) -> Result<V::Output, TraversalError> {
        for condition in conditions {
            self.traverse_condition(condition)?;
        }
        Ok(self.visitor.visit_conditions(conditions))
    }
}

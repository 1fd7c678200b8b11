//! Condition, relationship and predicate nodes

use crate::{Conjunction, PredicatePart};

/// Root authored clinical-criteria unit
#[derive(Debug, Clone, Default)]
pub struct Condition {
    /// External identifier assigned by the authoring system
    pub id: String,
    /// Human-readable condition name
    pub name: Option<String>,
    /// Criteria relationships grouped under this condition
    pub criteria_rels: Vec<CriteriaRel>,
}

impl Condition {
    /// Create a new condition with the given external identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            criteria_rels: Vec::new(),
        }
    }

    /// Set the condition name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a criteria relationship
    pub fn with_criteria_rel(mut self, rel: CriteriaRel) -> Self {
        self.criteria_rels.push(rel);
        self
    }
}

/// A named relationship grouping predicates under a condition
#[derive(Debug, Clone, Default)]
pub struct CriteriaRel {
    /// External identifier
    pub id: String,
    /// Relationship label as authored
    pub label: Option<String>,
    /// Top-level predicates of this relationship
    pub predicates: Vec<CriteriaPredicate>,
}

impl CriteriaRel {
    /// Create a new relationship with the given external identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            predicates: Vec::new(),
        }
    }

    /// Set the relationship label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Add a top-level predicate
    pub fn with_predicate(mut self, predicate: CriteriaPredicate) -> Self {
        self.predicates.push(predicate);
        self
    }
}

/// Kind of a criteria predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CriteriaPredicateType {
    /// A concrete boolean test
    #[default]
    Predicate,
    /// A grouping of nested predicates
    PredicateGroup,
}

/// A (possibly nested) boolean test within a relationship
///
/// A predicate either groups nested child predicates or carries concrete
/// predicate parts; the authoring system guarantees at least one of the two
/// is non-empty.
#[derive(Debug, Clone, Default)]
pub struct CriteriaPredicate {
    /// External identifier
    pub id: String,
    /// Predicate kind
    pub predicate_type: CriteriaPredicateType,
    /// Connective joining this predicate to its preceding sibling
    pub conjunction: Option<Conjunction>,
    /// Authored description
    pub description: Option<String>,
    /// Nested child predicates, traversed before this predicate's parts
    pub predicates: Vec<CriteriaPredicate>,
    /// Concrete operand/operator fragments
    pub parts: Vec<PredicatePart>,
}

impl CriteriaPredicate {
    /// Create a new predicate with the given external identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the predicate kind
    pub fn with_type(mut self, predicate_type: CriteriaPredicateType) -> Self {
        self.predicate_type = predicate_type;
        self
    }

    /// Set the connective to the preceding sibling
    pub fn with_conjunction(mut self, conjunction: Conjunction) -> Self {
        self.conjunction = Some(conjunction);
        self
    }

    /// Set the authored description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a nested child predicate
    pub fn with_child(mut self, child: CriteriaPredicate) -> Self {
        self.predicates.push(child);
        self
    }

    /// Add a predicate part
    pub fn with_part(mut self, part: PredicatePart) -> Self {
        self.parts.push(part);
        self
    }
}

//! Predicate-part nodes: operands, operators and their metadata

use crate::PredicatePartConcept;

/// The smallest unit of a predicate: a concrete operand/operator fragment
///
/// A part either wraps a reusable [`SourcePredicatePart`] (when no concept
/// list is attached) or carries a [`DataInputNode`] left operand plus
/// terminology concepts as the right operand, with an optional
/// [`CriteriaResourceParam`] operator joining the two.
#[derive(Debug, Clone, Default)]
pub struct PredicatePart {
    /// External identifier
    pub id: String,
    /// Part alias as authored
    pub part_alias: Option<String>,
    /// Reusable sub-expression this part wraps
    pub source_part: Option<SourcePredicatePart>,
    /// Left operand / retrieve modeling
    pub data_input: Option<DataInputNode>,
    /// Right operand terminology
    pub concepts: Vec<PredicatePartConcept>,
    /// Operator governing how left and right combine
    pub resource_param: Option<CriteriaResourceParam>,
    /// Resource-type/operator metadata
    pub resource: Option<CriteriaResource>,
}

impl PredicatePart {
    /// Create a new part with the given external identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the part alias
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.part_alias = Some(alias.into());
        self
    }

    /// Set the wrapped source part
    pub fn with_source_part(mut self, source_part: SourcePredicatePart) -> Self {
        self.source_part = Some(source_part);
        self
    }

    /// Set the data-input left operand
    pub fn with_data_input(mut self, data_input: DataInputNode) -> Self {
        self.data_input = Some(data_input);
        self
    }

    /// Add a right-operand concept
    pub fn with_concept(mut self, concept: PredicatePartConcept) -> Self {
        self.concepts.push(concept);
        self
    }

    /// Set the operator parameter
    pub fn with_resource_param(mut self, param: CriteriaResourceParam) -> Self {
        self.resource_param = Some(param);
        self
    }

    /// Set the resource metadata
    pub fn with_resource(mut self, resource: CriteriaResource) -> Self {
        self.resource = Some(resource);
        self
    }
}

/// Kind tag of a [`SourcePredicatePart`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartType {
    /// Data-input operand (retrieve or literal datum)
    #[default]
    DataInput,
    /// Reference to a model element
    ModelElement,
    /// Reference to a resource
    Resource,
    /// Free text
    Text,
}

/// A reusable, simpler sub-expression wrapped by a predicate part
#[derive(Debug, Clone, Default)]
pub struct SourcePredicatePart {
    /// External identifier
    pub id: String,
    /// Kind tag
    pub part_type: PartType,
    /// Alias as authored
    pub part_alias: Option<String>,
    /// Bare string datum, for literal data-input parts
    pub text: Option<String>,
    /// Nested data-input operand
    pub data_input: Option<DataInputNode>,
    /// Concept references
    pub concepts: Vec<PredicatePartConcept>,
}

impl SourcePredicatePart {
    /// Create a new source part with the given identifier and kind
    pub fn new(id: impl Into<String>, part_type: PartType) -> Self {
        Self {
            id: id.into(),
            part_type,
            ..Self::default()
        }
    }

    /// Set the part alias
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.part_alias = Some(alias.into());
        self
    }

    /// Set the bare string datum
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the nested data-input operand
    pub fn with_data_input(mut self, data_input: DataInputNode) -> Self {
        self.data_input = Some(data_input);
        self
    }

    /// Add a concept reference
    pub fn with_concept(mut self, concept: PredicatePartConcept) -> Self {
        self.concepts.push(concept);
        self
    }
}

/// Left operand of a predicate part: which resource and element to retrieve
#[derive(Debug, Clone, Default)]
pub struct DataInputNode {
    /// External identifier
    pub id: String,
    /// Resource template the retrieve targets (e.g. "Encounter")
    pub template: Option<String>,
    /// Element within the template the test applies to (e.g. "type")
    pub element: Option<String>,
}

impl DataInputNode {
    /// Create a new data-input node with the given external identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            template: None,
            element: None,
        }
    }

    /// Set the resource template
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Set the targeted element
    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }
}

/// Operator parameter of a predicate part (e.g. "=", "in")
#[derive(Debug, Clone, Default)]
pub struct CriteriaResourceParam {
    /// External identifier
    pub id: String,
    /// Operator name as authored
    pub name: Option<String>,
}

impl CriteriaResourceParam {
    /// Create a new operator parameter
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
        }
    }
}

/// Resource-type/operator metadata attached to a predicate part
#[derive(Debug, Clone, Default)]
pub struct CriteriaResource {
    /// External identifier
    pub id: String,
    /// Resource name
    pub name: Option<String>,
    /// Resource type; "Function" marks parts whose operator is supplied
    /// elsewhere
    pub resource_type: Option<String>,
}

impl CriteriaResource {
    /// Create a new resource metadata node
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            resource_type: None,
        }
    }

    /// Set the resource name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the resource type
    pub fn with_resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_type = Some(resource_type.into());
        self
    }
}

//! Terminology nodes: concept wrappers and coded values

/// Right-operand terminology reference of a predicate part
///
/// Wraps either an OpenCDS concept reference or a coded value; at most one
/// of the two is present on a well-formed node.
#[derive(Debug, Clone, Default)]
pub struct PredicatePartConcept {
    /// External identifier
    pub id: String,
    /// Name of the value-set list this concept was drawn from
    pub list_name: Option<String>,
    /// OpenCDS concept reference
    pub concept: Option<OpenCdsConcept>,
    /// Coded value
    pub code: Option<CdsCode>,
}

impl PredicatePartConcept {
    /// Create a new concept wrapper with the given external identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            list_name: None,
            concept: None,
            code: None,
        }
    }

    /// Set the source list name
    pub fn with_list_name(mut self, list_name: impl Into<String>) -> Self {
        self.list_name = Some(list_name.into());
        self
    }

    /// Set the OpenCDS concept reference
    pub fn with_concept(mut self, concept: OpenCdsConcept) -> Self {
        self.concept = Some(concept);
        self
    }

    /// Set the coded value
    pub fn with_code(mut self, code: CdsCode) -> Self {
        self.code = Some(code);
        self
    }
}

/// An OpenCDS concept reference
#[derive(Debug, Clone, Default)]
pub struct OpenCdsConcept {
    /// Concept code
    pub code: Option<String>,
    /// Display name
    pub display_name: Option<String>,
}

impl OpenCdsConcept {
    /// Create a concept with code and display name
    pub fn new(code: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            display_name: Some(display_name.into()),
        }
    }
}

/// A coded value with its code system
#[derive(Debug, Clone, Default)]
pub struct CdsCode {
    /// Code value
    pub code: Option<String>,
    /// Display name
    pub display_name: Option<String>,
    /// Code system URI
    pub code_system: Option<String>,
}

impl CdsCode {
    /// Create a code with the given value
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            display_name: None,
            code_system: None,
        }
    }

    /// Set the display name
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Set the code system URI
    pub fn with_code_system(mut self, code_system: impl Into<String>) -> Self {
        self.code_system = Some(code_system.into());
        self
    }
}

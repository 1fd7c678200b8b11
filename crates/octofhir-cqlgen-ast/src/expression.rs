//! Retrieve, where-clause and expression nodes

use std::fmt;

use crate::{INDENT, or_null};

/// A CQL retrieve selecting all instances of a resource type
///
/// Renders as `[Encounter] Encounter`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Retrieve {
    resource_type: Option<String>,
}

impl Retrieve {
    /// Create a retrieve for the given resource type
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: Some(resource_type.into()),
        }
    }

    /// Set the resource type
    pub fn set_resource_type(&mut self, resource_type: impl Into<String>) {
        self.resource_type = Some(resource_type.into());
    }

    /// The resource type, if set
    pub fn resource_type(&self) -> Option<&str> {
        self.resource_type.as_deref()
    }
}

impl fmt::Display for Retrieve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rt = or_null(&self.resource_type);
        write!(f, "[{rt}] {rt}")
    }
}

/// A CQL `where` clause testing one element against a concept
///
/// Renders as `where Encounter.type = "185463005"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhereClause {
    resource_type: Option<String>,
    path: Option<String>,
    operator: Option<String>,
    concept: Option<String>,
}

impl WhereClause {
    /// Create a where clause from its four components
    pub fn new(
        resource_type: impl Into<String>,
        path: impl Into<String>,
        operator: impl Into<String>,
        concept: impl Into<String>,
    ) -> Self {
        Self {
            resource_type: Some(resource_type.into()),
            path: Some(path.into()),
            operator: Some(operator.into()),
            concept: Some(concept.into()),
        }
    }

    /// Set the resource type
    pub fn set_resource_type(&mut self, resource_type: impl Into<String>) {
        self.resource_type = Some(resource_type.into());
    }

    /// Set the element path
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = Some(path.into());
    }

    /// Set the operator
    pub fn set_operator(&mut self, operator: impl Into<String>) {
        self.operator = Some(operator.into());
    }

    /// Set the concept the element is tested against
    pub fn set_concept(&mut self, concept: impl Into<String>) {
        self.concept = Some(concept.into());
    }
}

impl fmt::Display for WhereClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "where {}.{} {} \"{}\"",
            or_null(&self.resource_type),
            or_null(&self.path),
            or_null(&self.operator),
            or_null(&self.concept)
        )
    }
}

/// A general left/operator/right CQL expression
///
/// `left` and `right` are derived fields: setting `resource_type` and `path`
/// derives `left` as `<resource_type>.<path>`, and setting `concept` derives
/// `right` as the quoted concept. The derivation setters are the only
/// mutation path for derived values; explicit `set_left`/`set_right` are for
/// expressions built from other expressions' renderings and become no-ops
/// once the corresponding value was derived.
///
/// Renders as `<left> <operator> <right>`, or, when a resource type is set,
/// the retrieve-prefixed form
/// `[<rt>] <rt>` + newline + `where <left> <operator> <right>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expression {
    left: Option<String>,
    right: Option<String>,
    operator: Option<String>,
    resource_type: Option<String>,
    path: Option<String>,
    concept: Option<String>,
}

impl Expression {
    /// Create an empty expression
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the left operand directly; ignored once `left` was derived from
    /// a resource type and path
    pub fn set_left(&mut self, left: impl Into<String>) {
        if self.resource_type.is_some() && self.path.is_some() {
            return;
        }
        self.left = Some(left.into());
    }

    /// Set the right operand directly; ignored once `right` was derived
    /// from a concept
    pub fn set_right(&mut self, right: impl Into<String>) {
        if self.concept.is_some() {
            return;
        }
        self.right = Some(right.into());
    }

    /// Set the operator
    pub fn set_operator(&mut self, operator: impl Into<String>) {
        self.operator = Some(operator.into());
    }

    /// Set the resource type, re-deriving `left` when a path is present
    pub fn set_resource_type(&mut self, resource_type: impl Into<String>) {
        self.resource_type = Some(resource_type.into());
        self.derive_left();
    }

    /// Set the element path, re-deriving `left` when a resource type is
    /// present
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = Some(path.into());
        self.derive_left();
    }

    /// Set the concept, deriving `right` as its quoted form
    pub fn set_concept(&mut self, concept: impl Into<String>) {
        let concept = concept.into();
        self.right = Some(format!("\"{concept}\""));
        self.concept = Some(concept);
    }

    /// The left operand, explicit or derived
    pub fn left(&self) -> Option<&str> {
        self.left.as_deref()
    }

    /// The right operand, explicit or derived
    pub fn right(&self) -> Option<&str> {
        self.right.as_deref()
    }

    /// The operator, if set
    pub fn operator(&self) -> Option<&str> {
        self.operator.as_deref()
    }

    /// The resource type, if set
    pub fn resource_type(&self) -> Option<&str> {
        self.resource_type.as_deref()
    }

    fn derive_left(&mut self) {
        if let (Some(rt), Some(path)) = (&self.resource_type, &self.path) {
            self.left = Some(format!("{rt}.{path}"));
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(rt) = &self.resource_type {
            write!(
                f,
                "[{rt}] {rt}\n{INDENT}where {} {} {}",
                or_null(&self.left),
                or_null(&self.operator),
                or_null(&self.right)
            )
        } else {
            write!(
                f,
                "{} {} {}",
                or_null(&self.left),
                or_null(&self.operator),
                or_null(&self.right)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn retrieve_renders_bracketed_resource() {
        assert_eq!(Retrieve::new("Encounter").to_string(), "[Encounter] Encounter");
    }

    #[test]
    fn retrieve_renders_null_when_unset() {
        assert_eq!(Retrieve::default().to_string(), "[null] null");
    }

    #[test]
    fn where_clause_renders_quoted_concept() {
        let clause = WhereClause::new("Encounter", "type", "=", "185463005");
        assert_eq!(clause.to_string(), "where Encounter.type = \"185463005\"");
    }

    #[test]
    fn where_clause_renders_null_fields() {
        let mut clause = WhereClause::default();
        clause.set_path("type");
        assert_eq!(clause.to_string(), "where null.type null \"null\"");
    }

    #[test]
    fn expression_derives_left_from_resource_type_and_path() {
        let mut expr = Expression::new();
        expr.set_path("type");
        assert_eq!(expr.left(), None);
        expr.set_resource_type("Encounter");
        assert_eq!(expr.left(), Some("Encounter.type"));
    }

    #[test]
    fn derived_left_survives_a_direct_setter() {
        let mut expr = Expression::new();
        expr.set_resource_type("Encounter");
        expr.set_path("type");
        expr.set_left("Patient.name");
        assert_eq!(expr.left(), Some("Encounter.type"));
    }

    #[test]
    fn derived_right_survives_a_direct_setter() {
        let mut expr = Expression::new();
        expr.set_concept("185463005");
        expr.set_right("42");
        assert_eq!(expr.right(), Some("\"185463005\""));
    }

    #[test]
    fn direct_setters_apply_before_any_derivation() {
        let mut expr = Expression::new();
        expr.set_left("AgeInYears()");
        expr.set_right("18");
        assert_eq!(expr.left(), Some("AgeInYears()"));
        assert_eq!(expr.right(), Some("18"));
    }

    #[test]
    fn expression_derives_quoted_right_from_concept() {
        let mut expr = Expression::new();
        expr.set_concept("185463005");
        assert_eq!(expr.right(), Some("\"185463005\""));
    }

    #[test]
    fn expression_renders_plain_triple() {
        let mut expr = Expression::new();
        expr.set_left("AgeInYears()");
        expr.set_operator(">=");
        expr.set_right("18");
        assert_eq!(expr.to_string(), "AgeInYears() >= 18");
    }

    #[test]
    fn expression_renders_retrieve_prefixed_form() {
        let mut expr = Expression::new();
        expr.set_resource_type("Encounter");
        expr.set_path("type");
        expr.set_operator("=");
        expr.set_concept("185463005");
        assert_eq!(
            expr.to_string(),
            "[Encounter] Encounter\n     where Encounter.type = \"185463005\""
        );
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut expr = Expression::new();
        expr.set_resource_type("Condition");
        expr.set_path("code");
        expr.set_operator("in");
        expr.set_concept("Chlamydia");
        assert_eq!(expr.to_string(), expr.to_string());
    }
}

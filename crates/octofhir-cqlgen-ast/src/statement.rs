//! Define-statement nodes: the units of generated logic

use std::fmt;

use octofhir_cqlgen_model::{Conjunction, CriteriaPredicateType};

use crate::{INDENT, Expression, Retrieve, WhereClause, or_null};

/// Header of a literal `define` block
///
/// Renders as `define "<alias>":`; body clauses are rendered by
/// [`DefineStatementBody`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefineStatement {
    alias: Option<String>,
}

impl DefineStatement {
    /// Create a define statement header
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
        }
    }

    /// Set the alias
    pub fn set_alias(&mut self, alias: impl Into<String>) {
        self.alias = Some(alias.into());
    }

    /// The alias, if set
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }
}

impl fmt::Display for DefineStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "define \"{}\":", or_null(&self.alias))
    }
}

/// One clause of a literal `define` block: a retrieve with an optional
/// where clause, conjunction-prefixed when it repeats a preceding clause
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefineStatementBody {
    retrieve: Option<Retrieve>,
    where_clause: Option<WhereClause>,
    conjunction: Option<Conjunction>,
    alias: Option<String>,
}

impl DefineStatementBody {
    /// Create an empty body clause
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the retrieve
    pub fn set_retrieve(&mut self, retrieve: Retrieve) {
        self.retrieve = Some(retrieve);
    }

    /// Set the where clause
    pub fn set_where_clause(&mut self, where_clause: WhereClause) {
        self.where_clause = Some(where_clause);
    }

    /// Set the conjunction prefixing this clause
    pub fn set_conjunction(&mut self, conjunction: Conjunction) {
        self.conjunction = Some(conjunction);
    }

    /// Set the alias of the enclosing block
    pub fn set_alias(&mut self, alias: impl Into<String>) {
        self.alias = Some(alias.into());
    }
}

impl fmt::Display for DefineStatementBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.conjunction, &self.retrieve) {
            (Some(conj), Some(retrieve)) => writeln!(f, "{INDENT}{conj} {retrieve}")?,
            (None, Some(retrieve)) => writeln!(f, "{INDENT}{retrieve}")?,
            (Some(conj), None) => writeln!(f, "{INDENT}{conj} null")?,
            (None, None) => writeln!(f, "{INDENT}null")?,
        }
        if let Some(where_clause) = &self.where_clause {
            writeln!(f, "{INDENT}{where_clause}")?;
        }
        Ok(())
    }
}

/// A named top-level CQL `define` statement assembled during traversal
///
/// Holds the expressions and predicate references contributed by a modeled
/// predicate subtree, in traversal order. Rendering emits the header, each
/// expression on an indented line (lower-cased conjunction prefix when one
/// was authored), then each reference; references to predicates are wrapped
/// in `exists "<target>"`, references to predicate groups stay bare.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefinitionBlock {
    alias: Option<String>,
    expressions: Vec<(Option<Conjunction>, Expression)>,
    references: Vec<(CriteriaPredicateType, (Option<Conjunction>, String))>,
}

impl DefinitionBlock {
    /// Create a definition block with the given alias
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
            expressions: Vec::new(),
            references: Vec::new(),
        }
    }

    /// Set the alias
    pub fn set_alias(&mut self, alias: impl Into<String>) {
        self.alias = Some(alias.into());
    }

    /// The alias, if set
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Append an expression, preserving traversal order
    pub fn push_expression(&mut self, conjunction: Option<Conjunction>, expression: Expression) {
        self.expressions.push((conjunction, expression));
    }

    /// Append a reference to another define block
    pub fn push_reference(
        &mut self,
        predicate_type: CriteriaPredicateType,
        conjunction: Option<Conjunction>,
        target_alias: impl Into<String>,
    ) {
        self.references
            .push((predicate_type, (conjunction, target_alias.into())));
    }

    /// Whether the block has neither expressions nor references
    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty() && self.references.is_empty()
    }
}

impl fmt::Display for DefinitionBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "define \"{}\":", or_null(&self.alias))?;
        for (conjunction, expression) in &self.expressions {
            match conjunction {
                Some(conj) => writeln!(f, "{INDENT}{conj} ({expression})")?,
                None => writeln!(f, "{INDENT}{expression}")?,
            }
        }
        for (predicate_type, (conjunction, target)) in &self.references {
            let reference = match predicate_type {
                CriteriaPredicateType::Predicate => format!("exists \"{target}\""),
                CriteriaPredicateType::PredicateGroup => format!("\"{target}\""),
            };
            match conjunction {
                Some(conj) => writeln!(f, "{INDENT}{conj} {reference}")?,
                None => writeln!(f, "{INDENT}{reference}")?,
            }
        }
        Ok(())
    }
}

//! Printable-node registry and library assembly

use std::fmt;

use indexmap::{IndexMap, IndexSet};
use octofhir_cqlgen_ast::{
    DefineStatement, DefineStatementBody, DefinitionBlock, DirectReferenceCode, ValueSet,
};

use crate::{ElementMapping, ModelMapping, ValueSetOrigin};

/// A registerable, renderable CQL artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintableNode {
    /// Direct reference code declaration
    Code(DirectReferenceCode),
    /// Valueset declaration
    ValueSet(ValueSet),
    /// Top-level define block
    Definition(DefinitionBlock),
    /// Literal define statement: header plus its body clauses
    Statement(DefineStatement, Vec<DefineStatementBody>),
}

impl fmt::Display for PrintableNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrintableNode::Code(code) => code.fmt(f),
            PrintableNode::ValueSet(value_set) => value_set.fmt(f),
            PrintableNode::Definition(block) => block.fmt(f),
            PrintableNode::Statement(define, bodies) => {
                writeln!(f, "{define}")?;
                for body in bodies {
                    write!(f, "{body}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<DirectReferenceCode> for PrintableNode {
    fn from(code: DirectReferenceCode) -> Self {
        PrintableNode::Code(code)
    }
}

impl From<ValueSet> for PrintableNode {
    fn from(value_set: ValueSet) -> Self {
        PrintableNode::ValueSet(value_set)
    }
}

impl From<DefinitionBlock> for PrintableNode {
    fn from(block: DefinitionBlock) -> Self {
        PrintableNode::Definition(block)
    }
}

impl From<(DefineStatement, Vec<DefineStatementBody>)> for PrintableNode {
    fn from((define, bodies): (DefineStatement, Vec<DefineStatementBody>)) -> Self {
        PrintableNode::Statement(define, bodies)
    }
}

/// Library header metadata for [`CqlContext::build_cql_library`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryHeader {
    /// Library name
    pub name: String,
    /// Library version
    pub version: String,
    /// Data model name (e.g. "FHIR")
    pub model_name: String,
    /// Data model version
    pub model_version: String,
    /// Optional comment emitted under the library line
    pub comment: Option<String>,
}

impl LibraryHeader {
    /// Create a header without a comment
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        model_name: impl Into<String>,
        model_version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            model_name: model_name.into(),
            model_version: model_version.into(),
            comment: None,
        }
    }

    /// Set the header comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// The per-run accumulator the visitor populates during traversal
#[derive(Debug, Default)]
pub struct CqlContext {
    print_map: IndexMap<String, PrintableNode>,
    element_mappings: IndexSet<ElementMapping>,
    value_set_index: IndexMap<String, ValueSetOrigin>,
    model_mapping: ModelMapping,
}

impl CqlContext {
    /// Create a context over the given model lookup table
    pub fn new(model_mapping: ModelMapping) -> Self {
        Self {
            model_mapping,
            ..Self::default()
        }
    }

    /// Register a node under an alias; a collision replaces the prior entry
    pub fn register_node(&mut self, name: impl Into<String>, node: impl Into<PrintableNode>) {
        self.print_map.insert(name.into(), node.into());
    }

    /// Look up a registered node by alias
    pub fn node(&self, name: &str) -> Option<&PrintableNode> {
        self.print_map.get(name)
    }

    /// Number of registered nodes
    pub fn node_count(&self) -> usize {
        self.print_map.len()
    }

    /// Empty the registry for reuse across generation runs
    pub fn clear_cql_map(&mut self) {
        self.print_map.clear();
    }

    /// Resolve an authored element name through the injected model table
    pub fn model_path(&self, element: &str) -> Option<&str> {
        self.model_mapping.lookup(element)
    }

    /// Record a discovered cross-model mapping; returns false on duplicate
    pub fn record_element_mapping(&mut self, mapping: ElementMapping) -> bool {
        self.element_mappings.insert(mapping)
    }

    /// The deduplicated mappings, in discovery order
    pub fn element_mappings(&self) -> impl Iterator<Item = &ElementMapping> {
        self.element_mappings.iter()
    }

    /// Record value-set provenance under its identifier
    pub fn record_value_set(&mut self, identifier: impl Into<String>, origin: ValueSetOrigin) {
        self.value_set_index.insert(identifier.into(), origin);
    }

    /// The accumulated value-set provenance index
    pub fn value_set_mapping(&self) -> &IndexMap<String, ValueSetOrigin> {
        &self.value_set_index
    }

    /// Render the registered nodes as a context-scoped CQL fragment
    ///
    /// Declarations are grouped by kind regardless of registration order,
    /// since CQL requires code and valueset declarations to precede the
    /// statements referencing them: codes, then valuesets, then the
    /// `context` line, then every define block in registration order.
    pub fn build_cql(&self, context_name: &str) -> String {
        let mut sections: Vec<String> = Vec::new();

        let codes: Vec<String> = self
            .print_map
            .values()
            .filter_map(|node| match node {
                PrintableNode::Code(code) => Some(code.to_string()),
                _ => None,
            })
            .collect();
        if !codes.is_empty() {
            sections.push(codes.join("\n"));
        }

        let value_sets: Vec<String> = self
            .print_map
            .values()
            .filter_map(|node| match node {
                PrintableNode::ValueSet(value_set) => Some(value_set.to_string()),
                _ => None,
            })
            .collect();
        if !value_sets.is_empty() {
            sections.push(value_sets.join("\n"));
        }

        sections.push(format!("context {context_name}"));

        for node in self.print_map.values() {
            if matches!(
                node,
                PrintableNode::Definition(_) | PrintableNode::Statement(..)
            ) {
                sections.push(node.to_string().trim_end().to_string());
            }
        }

        let mut out = sections.join("\n\n");
        out.push('\n');
        out
    }

    /// Render a complete CQL library
    ///
    /// Prepends the `library` line, the optional header comment and the
    /// `using` line; when the model is FHIR the standard FHIRHelpers include
    /// follows, then the context-scoped rendering.
    pub fn build_cql_library(&self, header: &LibraryHeader, context_name: &str) -> String {
        let mut out = format!("library {} version '{}'\n\n", header.name, header.version);
        if let Some(comment) = &header.comment {
            for line in comment.lines() {
                out.push_str("// ");
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
        }
        out.push_str(&format!(
            "using {} version '{}'\n\n",
            header.model_name, header.model_version
        ));
        if header.model_name == "FHIR" {
            out.push_str(&format!(
                "include FHIRHelpers version '{}'\n\n",
                header.model_version
            ));
        }
        out.push_str(&self.build_cql(context_name));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use octofhir_cqlgen_ast::{Conjunction, Expression, Retrieve, WhereClause};
    use pretty_assertions::assert_eq;

    fn sample_block(alias: &str) -> DefinitionBlock {
        let mut expr = Expression::new();
        expr.set_resource_type("Encounter");
        expr.set_path("type");
        expr.set_operator("=");
        expr.set_concept("185463005");
        let mut block = DefinitionBlock::new(alias);
        block.push_expression(None, expr);
        block
    }

    #[test]
    fn build_cql_groups_by_kind_regardless_of_registration_order() {
        let mut context = CqlContext::default();
        context.register_node("Encounter Type", sample_block("Encounter Type"));
        context.register_node(
            "Chlamydia",
            DirectReferenceCode::new("Chlamydia", "105629000"),
        );
        context.register_node(
            "Chlamydia (Tests)",
            ValueSet::new("Chlamydia (Tests)", "https://example.org/ValueSet/ct"),
        );

        let cql = context.build_cql("Patient");
        assert_eq!(
            cql,
            "code \"Chlamydia\": '105629000'\n\n\
             valueset \"Chlamydia (Tests)\": 'https://example.org/ValueSet/ct'\n\n\
             context Patient\n\n\
             define \"Encounter Type\":\n\
             \u{20}    [Encounter] Encounter\n\
             \u{20}    where Encounter.type = \"185463005\"\n"
        );
    }

    #[test]
    fn literal_define_statements_render_with_the_definition_group() {
        let mut first = DefineStatementBody::new();
        first.set_retrieve(Retrieve::new("Observation"));
        first.set_where_clause(WhereClause::new("Observation", "code", "in", "Chlamydia"));
        let mut second = DefineStatementBody::new();
        second.set_retrieve(Retrieve::new("Condition"));
        second.set_conjunction(Conjunction::Or);

        let mut context = CqlContext::default();
        context.register_node(
            "Chlamydia Lab",
            (DefineStatement::new("Chlamydia Lab"), vec![first, second]),
        );
        context.register_node(
            "Chlamydia",
            DirectReferenceCode::new("Chlamydia", "105629000"),
        );

        let cql = context.build_cql("Patient");
        assert_eq!(
            cql,
            "code \"Chlamydia\": '105629000'\n\n\
             context Patient\n\n\
             define \"Chlamydia Lab\":\n\
             \u{20}    [Observation] Observation\n\
             \u{20}    where Observation.code in \"Chlamydia\"\n\
             \u{20}    or [Condition] Condition\n"
        );
    }

    #[test]
    fn registering_the_same_alias_overwrites() {
        let mut context = CqlContext::default();
        context.register_node("X", DirectReferenceCode::new("X", "1"));
        context.register_node("X", DirectReferenceCode::new("X", "2"));

        assert_eq!(context.node_count(), 1);
        let cql = context.build_cql("Patient");
        assert!(cql.contains("code \"X\": '2'"));
        assert!(!cql.contains("code \"X\": '1'"));
    }

    #[test]
    fn clear_cql_map_resets_the_registry() {
        let mut context = CqlContext::default();
        context.register_node("X", DirectReferenceCode::new("X", "1"));
        context.clear_cql_map();
        assert_eq!(context.node_count(), 0);
        assert_eq!(context.build_cql("Patient"), "context Patient\n");
    }

    #[test]
    fn library_header_includes_fhir_helpers_for_fhir_model() {
        let context = CqlContext::default();
        let header = LibraryHeader::new("ChlamydiaDetection", "1.0.0", "FHIR", "4.0.1")
            .with_comment("Generated from authored clinical criteria");
        let cql = context.build_cql_library(&header, "Patient");
        assert_eq!(
            cql,
            "library ChlamydiaDetection version '1.0.0'\n\n\
             // Generated from authored clinical criteria\n\n\
             using FHIR version '4.0.1'\n\n\
             include FHIRHelpers version '4.0.1'\n\n\
             context Patient\n"
        );
    }

    #[test]
    fn non_fhir_model_omits_the_helpers_include() {
        let context = CqlContext::default();
        let header = LibraryHeader::new("Lib", "0.1.0", "QDM", "5.6");
        let cql = context.build_cql_library(&header, "Patient");
        assert!(!cql.contains("FHIRHelpers"));
        assert!(cql.contains("using QDM version '5.6'"));
    }

    #[test]
    fn element_mappings_deduplicate() {
        let mut context = CqlContext::new(ModelMapping::fhir_r4());
        assert!(context.record_element_mapping(ElementMapping::new("a.b", "X.y")));
        assert!(!context.record_element_mapping(ElementMapping::new("a.b", "X.y")));
        assert_eq!(context.element_mappings().count(), 1);
    }
}

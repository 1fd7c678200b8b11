//! Drop diagnostics name the offending node
//!
//! Every skipped relationship and dropped subtree must surface the external
//! identifier of the node that triggered it, so batch runs can enumerate
//! what fell out of the generated library. These tests install a capturing
//! logger and traverse graphs built to trip each rule.

use std::sync::{Mutex, OnceLock};

use log::{LevelFilter, Log, Metadata, Record};
use octofhir_cqlgen::model::{
    Condition, CriteriaPredicate, CriteriaRel, CriteriaResource, DataInputNode, PartType,
    PredicatePart, PredicatePartConcept, SourcePredicatePart,
};
use octofhir_cqlgen::traversal::deny;
use octofhir_cqlgen::{DepthFirstDroolTraverser, DroolTraverser, DroolVisitor};

/// Collects every emitted log line
struct BufferLogger;

static LOGGER: BufferLogger = BufferLogger;

fn lines() -> &'static Mutex<Vec<String>> {
    static LINES: OnceLock<Mutex<Vec<String>>> = OnceLock::new();
    LINES.get_or_init(|| Mutex::new(Vec::new()))
}

impl Log for BufferLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        lines()
            .lock()
            .expect("log buffer")
            .push(format!("{} {}", record.level(), record.args()));
    }

    fn flush(&self) {}
}

fn install_logger() {
    static INSTALL: OnceLock<()> = OnceLock::new();
    INSTALL.get_or_init(|| {
        log::set_logger(&LOGGER).expect("logger installs once per process");
        log::set_max_level(LevelFilter::Debug);
    });
}

fn logged(needle: &str) -> bool {
    lines()
        .lock()
        .expect("log buffer")
        .iter()
        .any(|line| line.contains(needle))
}

/// Discards every visit; only the log output matters here
struct SilentVisitor;

impl DroolVisitor for SilentVisitor {
    type Output = ();

    fn visit_conditions(&mut self, _conditions: &[Condition]) {}
}

fn run(conditions: &[Condition]) {
    install_logger();
    let mut traverser = DepthFirstDroolTraverser::new(SilentVisitor);
    traverser.traverse(conditions).expect("traversal succeeds");
}

#[test]
fn dropped_literal_alias_part_logs_its_identifier() {
    let condition = Condition::new("cond-log-1").with_criteria_rel(
        CriteriaRel::new("rel-log-1")
            .with_label("Orders")
            .with_predicate(
                CriteriaPredicate::new("pred-log-1").with_part(
                    PredicatePart::new("part-log-1").with_source_part(
                        SourcePredicatePart::new("sp-order-only", PartType::DataInput)
                            .with_alias(deny::UNMODELABLE_PART_ALIAS)
                            .with_text("an order"),
                    ),
                ),
            ),
    );

    run(&[condition]);
    assert!(logged("sp-order-only"));
    assert!(logged("pred-log-1"));
}

#[test]
fn skipped_relationship_logs_its_identifier() {
    let condition = Condition::new("cond-log-2").with_criteria_rel(
        CriteriaRel::new("rel-nyi").with_label("Vaccination (not yet implemented)").with_predicate(
            CriteriaPredicate::new("pred-log-2")
                .with_part(PredicatePart::new("part-log-2").with_data_input(
                    DataInputNode::new("di-log-2").with_template("Immunization"),
                )),
        ),
    );

    run(&[condition]);
    assert!(logged("rel-nyi"));
}

#[test]
fn unknown_operator_drop_logs_the_part_identifier() {
    let condition = Condition::new("cond-log-3").with_criteria_rel(
        CriteriaRel::new("rel-log-3")
            .with_label("Diagnosis criteria")
            .with_predicate(
                CriteriaPredicate::new("pred-log-3").with_part(
                    PredicatePart::new("part-no-operator")
                        .with_data_input(DataInputNode::new("di-log-3").with_template("Condition"))
                        .with_concept(PredicatePartConcept::new("c-log-3"))
                        .with_resource(
                            CriteriaResource::new("res-log-3").with_resource_type("Patient"),
                        ),
                ),
            ),
    );

    run(&[condition]);
    assert!(logged("part-no-operator"));
}

//! Model lookup table and traversal-discovered mappings

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Immutable lookup table from authored element names to model paths
///
/// Injected into [`crate::CqlContext`] at construction so the generator can
/// target other models without code changes. [`ModelMapping::fhir_r4`] is
/// the default table for FHIR R4 output.
#[derive(Debug, Clone, Default)]
pub struct ModelMapping {
    paths: IndexMap<String, String>,
}

impl ModelMapping {
    /// Create an empty table
    pub fn empty() -> Self {
        Self::default()
    }

    /// The default FHIR R4 element table
    pub fn fhir_r4() -> Self {
        [
            ("encounterType", "Encounter.type"),
            ("diagnosis", "Condition.code"),
            ("problemStatus", "Condition.clinicalStatus"),
            ("labTestName", "Observation.code"),
            ("labTestResult", "Observation.value"),
            ("labTestInterpretation", "Observation.interpretation"),
            ("medicationName", "MedicationRequest.medication"),
            ("immunization", "Immunization.vaccineCode"),
            ("procedure", "Procedure.code"),
            ("pregnancyStatus", "Observation.value"),
        ]
        .into_iter()
        .collect()
    }

    /// Add an element → path entry
    pub fn with_path(mut self, element: impl Into<String>, path: impl Into<String>) -> Self {
        self.paths.insert(element.into(), path.into());
        self
    }

    /// Look up the model path for an authored element name
    pub fn lookup(&self, element: &str) -> Option<&str> {
        self.paths.get(element).map(String::as_str)
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ModelMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            paths: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A cross-model field mapping discovered incidentally during traversal
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementMapping {
    /// Path in the authored source model
    pub source_path: String,
    /// Path in the target model
    pub target_path: String,
}

impl ElementMapping {
    /// Create a mapping pair
    pub fn new(source_path: impl Into<String>, target_path: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            target_path: target_path.into(),
        }
    }
}

/// Provenance of one generated valueset declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueSetOrigin {
    /// Terminology system the valueset was drawn from
    pub system: String,
    /// Membership expression as authored
    pub expression: String,
}

impl ValueSetOrigin {
    /// Create a provenance record
    pub fn new(system: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            expression: expression.into(),
        }
    }
}

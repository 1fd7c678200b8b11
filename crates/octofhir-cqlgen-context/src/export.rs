//! Diagnostic export files
//!
//! Caller-triggered writes of the traversal-discovered element mappings and
//! value-set provenance. Both exports delete any previous file before
//! recreating it, so each call reflects exactly one generation run.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use thiserror::Error;

use crate::{CqlContext, ValueSetOrigin};

/// Errors from context exports and imports
#[derive(Debug, Error)]
pub enum ContextError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CqlContext {
    /// Write the deduplicated element mappings as flat text
    ///
    /// One `source:     target` line per mapping, in discovery order.
    pub fn write_element_mappings(&self, path: impl AsRef<Path>) -> Result<(), ContextError> {
        let path = path.as_ref();
        if path.exists() {
            fs::remove_file(path)?;
        }
        let mut out = String::new();
        for mapping in self.element_mappings() {
            out.push_str(&mapping.source_path);
            out.push_str(":     ");
            out.push_str(&mapping.target_path);
            out.push('\n');
        }
        fs::write(path, out)?;
        Ok(())
    }

    /// Write the value-set provenance index as pretty-printed JSON
    pub fn write_value_set_mapping(&self, path: impl AsRef<Path>) -> Result<(), ContextError> {
        let path = path.as_ref();
        if path.exists() {
            fs::remove_file(path)?;
        }
        let json = serde_json::to_string_pretty(self.value_set_mapping())?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Read a value-set mapping file written by
/// [`CqlContext::write_value_set_mapping`]
pub fn read_value_set_mapping(
    path: impl AsRef<Path>,
) -> Result<IndexMap<String, ValueSetOrigin>, ContextError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

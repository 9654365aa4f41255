//! Macro manifest loading.
//!
//! The manifest is the documented hand-off between the PHP side (which can
//! see the live macro registries) and this tool: a JSON file listing each
//! macro-capable class and its macro table. A tiny exporter dumps it during
//! the host project's build; we only consume it.
//!
//! Class entries decode independently: one malformed entry produces one
//! [`ManifestIssue`] and excludes that class, the rest of the manifest still
//! loads. This is the non-fatal per-class failure channel of the pipeline.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::GenerateError;
use crate::registry::{MacroDef, MacroRegistry};

/// A non-fatal problem with one class's manifest entry.
#[derive(Debug, Clone)]
pub struct ManifestIssue {
    /// Class the entry was for, or a positional label when even the name
    /// could not be read.
    pub class: String,
    pub message: String,
}

#[derive(Deserialize)]
struct ManifestDoc {
    #[serde(default)]
    classes: Vec<Value>,
}

#[derive(Deserialize)]
struct ClassEntry {
    class: String,
    #[serde(default)]
    macros: Vec<MacroDef>,
}

/// Load the macro manifest into a registry.
///
/// # Errors
///
/// A missing file returns [`GenerateError::ManifestMissing`]; an unreadable
/// file or one whose top level is not valid manifest JSON returns
/// [`GenerateError::ManifestLoad`]. Per-class problems are not errors; they
/// come back as [`ManifestIssue`]s alongside the registry.
pub fn load(path: &Path) -> Result<(MacroRegistry, Vec<ManifestIssue>), GenerateError> {
    if !path.exists() {
        return Err(GenerateError::ManifestMissing(path.to_path_buf()));
    }
    let contents = std::fs::read_to_string(path).map_err(|e| GenerateError::ManifestLoad {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_str(&contents).map_err(|message| GenerateError::ManifestLoad {
        path: path.to_path_buf(),
        message,
    })
}

/// Parse manifest JSON. See [`load`] for the error split.
pub fn parse_str(source: &str) -> Result<(MacroRegistry, Vec<ManifestIssue>), String> {
    let doc: ManifestDoc = serde_json::from_str(source).map_err(|e| e.to_string())?;

    let mut registry = MacroRegistry::new();
    let mut issues = Vec::new();

    for (index, value) in doc.classes.into_iter().enumerate() {
        let label = value
            .get("class")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("classes[{index}]"));

        match serde_json::from_value::<ClassEntry>(value) {
            Ok(entry) => {
                registry.register(entry.class.clone());
                for def in entry.macros {
                    registry.add_macro(entry.class.clone(), def);
                }
            }
            Err(e) => {
                tracing::warn!(class = %label, error = %e, "skipping malformed manifest entry");
                issues.push(ManifestIssue {
                    class: label,
                    message: e.to_string(),
                });
            }
        }
    }

    Ok((registry, issues))
}

//! The generation pipeline: filter the class map, look classes up in the
//! macro registry, build their doc blocks and write the helper file.

use std::path::PathBuf;

use crate::classmap::ClassMap;
use crate::config::GeneratorConfig;
use crate::docblock::build_class_doc;
use crate::emit::GeneratedFile;
use crate::error::GenerateError;
use crate::registry::MacroRegistry;

/// Counts from one generation run, for reporting.
#[derive(Debug)]
pub struct GenerationReport {
    pub output_path: PathBuf,
    /// Classes that passed the namespace and reject filters.
    pub candidates: usize,
    pub classes_documented: usize,
    pub macros_documented: usize,
}

/// Run the pipeline over an already loaded class map and registry.
///
/// Classes that are not in the registry, or are registered with an empty
/// macro table, are skipped without a diagnostic; only classes that
/// actually carry macros appear in the helper file. The file is written
/// even when nothing qualified, so stale helpers get replaced by an empty
/// stub rather than lingering.
///
/// # Errors
///
/// Only the final write can fail, with [`GenerateError::OutputWrite`].
pub fn generate(
    config: &GeneratorConfig,
    class_map: &ClassMap,
    registry: &MacroRegistry,
) -> Result<GenerationReport, GenerateError> {
    let candidates = class_map.filter(&config.namespaces, &config.rejects);
    tracing::debug!(
        total = class_map.len(),
        candidates = candidates.len(),
        "filtered class map"
    );

    let mut docs = Vec::new();
    let mut macros_documented = 0;
    for entry in &candidates {
        let macros = match registry.class_macros(&entry.class) {
            Some(macros) => macros,
            None => {
                tracing::debug!(class = %entry.class, "skipping class without macro support");
                continue;
            }
        };
        if macros.is_empty() {
            tracing::debug!(class = %entry.class, "skipping class with no registered macros");
            continue;
        }
        macros_documented += macros.macros().len();
        docs.push(build_class_doc(&entry.class, macros, &config.base_path));
    }

    let classes_documented = docs.len();
    let output_path = config.output_path();
    GeneratedFile::from_docs(docs).write(&output_path)?;
    tracing::info!(
        path = %output_path.display(),
        classes = classes_documented,
        macros = macros_documented,
        "wrote helper file"
    );

    Ok(GenerationReport {
        output_path,
        candidates: candidates.len(),
        classes_documented,
        macros_documented,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::MacroDef;

    fn fixture_class_map() -> ClassMap {
        let source = r#"<?php
return array(
    'App\\Foo' => $baseDir . '/app/Foo.php',
    'App\\Plain' => $baseDir . '/app/Plain.php',
    'Vendor\\Lib\\Thing' => $vendorDir . '/lib/src/Thing.php',
);
"#;
        ClassMap::parse(source, std::path::Path::new("/proj"))
    }

    fn bar_macro() -> MacroDef {
        MacroDef {
            name: "bar".to_string(),
            params: Vec::new(),
            doc: None,
            defined_by: "App\\Providers\\MacroProvider".to_string(),
            file: "app/Providers/MacroProvider.php".to_string(),
            start_line: 12,
            end_line: 16,
        }
    }

    #[test]
    fn documents_only_macro_carrying_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::new(dir.path());

        let mut registry = MacroRegistry::new();
        registry.add_macro("App\\Foo", bar_macro());
        // In the registry but macro-less, and out-of-namespace with macros.
        registry.register("App\\Plain");
        registry.add_macro("Vendor\\Lib\\Thing", bar_macro());

        let report = generate(&config, &fixture_class_map(), &registry).unwrap();
        assert_eq!(report.candidates, 2);
        assert_eq!(report.classes_documented, 1);
        assert_eq!(report.macros_documented, 1);

        let rendered = std::fs::read_to_string(report.output_path).unwrap();
        assert!(rendered.contains("class Foo {}"));
        assert!(!rendered.contains("Plain"));
        assert!(!rendered.contains("Thing"));
    }

    #[test]
    fn writes_empty_stub_when_nothing_qualifies() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::new(dir.path());

        let report = generate(&config, &fixture_class_map(), &MacroRegistry::new()).unwrap();
        assert_eq!(report.classes_documented, 0);

        let rendered = std::fs::read_to_string(report.output_path).unwrap();
        assert_eq!(rendered, "<?php\n// @formatter:off\n\nnamespace {}\n");
    }

    #[test]
    fn reruns_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::new(dir.path());
        let class_map = fixture_class_map();

        let mut registry = MacroRegistry::new();
        registry.add_macro("App\\Foo", bar_macro());

        generate(&config, &class_map, &registry).unwrap();
        let first = std::fs::read_to_string(config.output_path()).unwrap();
        generate(&config, &class_map, &registry).unwrap();
        let second = std::fs::read_to_string(config.output_path()).unwrap();
        assert_eq!(first, second);
    }
}

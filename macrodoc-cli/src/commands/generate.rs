use std::path::PathBuf;

use colored::Colorize;
use macrodoc_core::{generate, manifest, ClassMap, GeneratorConfig};

/// Everything `macrodoc generate` accepts on the command line.
#[derive(Debug, Default)]
pub struct GenerateOptions {
    pub base_path: PathBuf,
    pub config: Option<PathBuf>,
    pub class_map: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
    pub output: Option<PathBuf>,
    /// Namespace prefixes added on top of the configured ones.
    pub namespaces: Vec<String>,
    /// Rejected classes added on top of the configured ones.
    pub rejects: Vec<String>,
}

pub fn run(options: GenerateOptions) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = GeneratorConfig::load(&options.base_path, options.config.as_deref())?;
    if let Some(class_map) = options.class_map {
        config.class_map = class_map;
    }
    if let Some(manifest_file) = options.manifest {
        config.manifest = manifest_file;
    }
    if let Some(output) = options.output {
        config.filename = output;
    }
    config.namespaces.extend(options.namespaces);
    config.rejects.extend(options.rejects);

    let class_map = ClassMap::load(&config.class_map_path(), &config.base_path)?;
    println!(
        "{} Loaded class map: {} classes",
        "✓".green(),
        class_map.len()
    );

    let (registry, issues) = manifest::load(&config.manifest_path())?;
    for issue in &issues {
        println!(
            "{} Skipped manifest entry for {}: {}",
            "!".yellow(),
            issue.class.as_str().cyan(),
            issue.message
        );
    }
    println!(
        "{} Loaded macro manifest: {} macro-capable classes",
        "✓".green(),
        registry.len()
    );

    let report = generate(&config, &class_map, &registry)?;
    println!(
        "{} Documented {} classes ({} macros)",
        "✓".green(),
        report.classes_documented,
        report.macros_documented
    );
    println!(
        "{} A new helper file was written to {}",
        "✓".green(),
        report.output_path.display().to_string().cyan()
    );

    Ok(())
}

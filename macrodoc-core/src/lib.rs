pub mod classmap;
pub mod config;
pub mod docblock;
pub mod emit;
pub mod error;
pub mod generator;
pub mod manifest;
pub mod registry;
pub mod signature;

pub use classmap::{ClassMap, ClassMapEntry, split_class};
pub use config::{DEFAULT_FILENAME, DEFAULT_NAMESPACES, DEFAULT_REJECTS, GeneratorConfig};
pub use docblock::{ClassDoc, DocBlock, build_class_doc};
pub use emit::{GeneratedFile, NamespaceBlock};
pub use error::GenerateError;
pub use generator::{GenerationReport, generate};
pub use manifest::ManifestIssue;
pub use registry::{ClassMacros, DefaultValue, MacroDef, MacroRegistry, ParamDef};

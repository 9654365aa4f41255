//! Doc block assembly.
//!
//! Builds the `/** ... */` comment for one class from its macro table and
//! serializes it line by line. Tag order is fixed: per macro a `@method`,
//! a `@see` for the defining class and a `@see` for the source location,
//! then a single trailing `@package` marker that identifies the file as
//! generated output.

use std::path::Path;

use crate::classmap::split_class;
use crate::registry::ClassMacros;
use crate::signature::{parameter_list, return_type_from_doc};

/// Package marker appended to every generated doc block.
pub const PACKAGE_TAG: &str = "@package macro_ide_helper";

/// A doc comment: free text followed by tag lines.
#[derive(Debug, Clone)]
pub struct DocBlock {
    pub text: String,
    pub tags: Vec<String>,
}

impl DocBlock {
    /// Render as PHP doc comment source, without a trailing newline.
    pub fn serialize(&self) -> String {
        let mut lines = vec![String::from("/**")];
        for line in self.text.lines() {
            lines.push(format!(" * {line}"));
        }
        if !self.tags.is_empty() {
            if !self.text.is_empty() {
                lines.push(String::from(" *"));
            }
            for tag in &self.tags {
                lines.push(format!(" * {tag}"));
            }
        }
        lines.push(String::from(" */"));
        lines.join("\n")
    }
}

/// One class's contribution to the helper file.
#[derive(Debug, Clone)]
pub struct ClassDoc {
    pub namespace: String,
    pub short_name: String,
    pub doc_comment: String,
}

/// Build the doc block for `fqcn` from its macro table.
pub fn build_class_doc(fqcn: &str, macros: &ClassMacros, base_path: &Path) -> ClassDoc {
    let (namespace, short_name) = split_class(fqcn);

    let mut tags = Vec::new();
    for def in macros.macros() {
        let return_type = def.doc.as_deref().map(return_type_from_doc).unwrap_or("");
        tags.push(format!(
            "@method {return_type} {}({})",
            def.name,
            parameter_list(&def.params)
        ));
        tags.push(format!("@see \\{}", def.defined_by.trim_start_matches('\\')));
        tags.push(format!(
            "@see {} {} {}",
            relative_file(&def.file, base_path),
            def.start_line,
            def.end_line
        ));
    }
    tags.push(String::from(PACKAGE_TAG));

    let block = DocBlock {
        text: short_name.to_string(),
        tags,
    };

    ClassDoc {
        namespace: namespace.to_string(),
        short_name: short_name.to_string(),
        doc_comment: block.serialize(),
    }
}

/// Strip the project base path from a source file reference. Only the first
/// occurrence goes; later path segments that happen to repeat it stay.
fn relative_file(file: &str, base_path: &Path) -> String {
    let prefix = format!("{}/", base_path.display());
    file.replacen(&prefix, "", 1)
}

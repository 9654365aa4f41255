//! Helper file assembly and output.
//!
//! Groups class docs into namespace blocks and renders the final PHP stub.
//! The exact byte layout matters: editors index the file as-is and reruns
//! over unchanged inputs must reproduce it byte for byte.

use std::fs;
use std::path::Path;

use crate::docblock::ClassDoc;
use crate::error::GenerateError;

/// All classes that share one namespace, in classmap order.
#[derive(Debug)]
pub struct NamespaceBlock {
    pub namespace: String,
    pub docs: Vec<ClassDoc>,
}

impl NamespaceBlock {
    fn opener(&self) -> String {
        if self.namespace.is_empty() {
            String::from("namespace {")
        } else {
            format!("namespace {} {{", self.namespace)
        }
    }
}

/// The helper file, grouped and ready to render.
#[derive(Debug, Default)]
pub struct GeneratedFile {
    blocks: Vec<NamespaceBlock>,
}

impl GeneratedFile {
    /// Group docs by namespace. Namespaces appear in first-seen order and
    /// classes keep their order within each block.
    pub fn from_docs(docs: Vec<ClassDoc>) -> Self {
        let mut blocks: Vec<NamespaceBlock> = Vec::new();
        for doc in docs {
            match blocks.iter_mut().find(|b| b.namespace == doc.namespace) {
                Some(block) => block.docs.push(doc),
                None => blocks.push(NamespaceBlock {
                    namespace: doc.namespace.clone(),
                    docs: vec![doc],
                }),
            }
        }
        Self { blocks }
    }

    pub fn blocks(&self) -> &[NamespaceBlock] {
        &self.blocks
    }

    /// Render the complete file contents.
    pub fn render(&self) -> String {
        let mut lines = vec![
            String::from("<?php"),
            String::from("// @formatter:off"),
            String::new(),
        ];
        for block in &self.blocks {
            lines.push(block.opener());
            lines.push(String::new());
            for doc in &block.docs {
                lines.push(doc.doc_comment.clone());
                lines.push(format!("    class {} {{}}", doc.short_name));
                lines.push(String::new());
            }
            lines.push(String::from("}"));
            lines.push(String::new());
        }
        // Closing empty namespace keeps the file valid when opened as a
        // bracketed-namespace PHP file.
        lines.push(String::from("namespace {}"));
        lines.push(String::new());
        lines.join("\n")
    }

    /// Write the rendered file to `path`.
    pub fn write(&self, path: &Path) -> Result<(), GenerateError> {
        let write_err = |e: std::io::Error| GenerateError::OutputWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }
        fs::write(path, self.render()).map_err(write_err)
    }
}
